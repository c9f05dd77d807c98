//! Descriptor pool, queued ring and the completion engine

use portable_atomic::{fence, AtomicBool, AtomicU32, Ordering};

use super::descriptor::{Descriptor, DescriptorState};
use super::{TransferError, TransferSink};
use crate::ring::{Consumer, Producer, Ring};

/// Counters shared by both halves of a split queue
#[derive(Debug, Default)]
pub struct TransferStats {
    started: AtomicU32,
    retired: AtomicU32,
    underruns: AtomicU32,
}

impl TransferStats {
    pub const fn new() -> Self {
        Self {
            started: AtomicU32::new(0),
            retired: AtomicU32::new(0),
            underruns: AtomicU32::new(0),
        }
    }

    /// Descriptors handed to the sink
    pub fn started(&self) -> u32 {
        self.started.load(Ordering::Relaxed)
    }

    /// Descriptors returned to the free pool after completing
    pub fn retired(&self) -> u32 {
        self.retired.load(Ordering::Relaxed)
    }

    /// Times the engine went idle after a completion because nothing was
    /// queued
    pub fn underruns(&self) -> u32 {
        self.underruns.load(Ordering::Relaxed)
    }

    fn bump(counter: &AtomicU32) {
        counter.fetch_add(1, Ordering::Relaxed);
    }
}

/// What the caller must do after handing work to the queue
#[must_use]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Handoff {
    /// The engine was idle and the caller now owns the right to start it
    StartEngine,
    /// The engine is running and will pick the work up on its own
    Queued,
    /// Nothing is queued
    Empty,
}

/// Fixed pool of descriptors plus the ring carrying them to the engine
///
/// `N` is the slot count of each ring; at most `N - 1` descriptors can be
/// provisioned, so retiring a descriptor can never overflow the free pool.
pub struct TransferQueue<'a, W, const N: usize> {
    free: Ring<Descriptor<'a, W>, N>,
    queued: Ring<Descriptor<'a, W>, N>,
    busy: AtomicBool,
    stats: TransferStats,
}

impl<'a, W, const N: usize> TransferQueue<'a, W, N> {
    pub const fn new() -> Self {
        Self {
            free: Ring::new(),
            queued: Ring::new(),
            busy: AtomicBool::new(false),
            stats: TransferStats::new(),
        }
    }

    /// Carve `arena` into descriptors of `chunk` words and add them to the
    /// free pool
    ///
    /// Trailing words that do not fill a whole chunk are left unused.
    /// Nothing is added unless every descriptor fits.
    pub fn provision(&mut self, arena: &'a mut [W], chunk: usize) -> Result<usize, TransferError> {
        if chunk == 0 {
            return Err(TransferError::InvalidParameter);
        }
        let count = arena.len() / chunk;
        if count == 0 {
            return Err(TransferError::InvalidParameter);
        }
        if self.free.len() + count > self.free.capacity() {
            return Err(TransferError::PoolFull);
        }

        for payload in arena.chunks_exact_mut(chunk) {
            if self.free.push(Descriptor::new(payload)).is_err() {
                return Err(TransferError::PoolFull);
            }
        }
        Ok(count)
    }

    /// Descriptors currently in the free pool
    pub fn free_len(&self) -> usize {
        self.free.len()
    }

    pub fn stats(&self) -> &TransferStats {
        &self.stats
    }

    /// Split into the main-loop half and the completion half
    pub fn split(&mut self) -> (Feeder<'_, 'a, W, N>, Engine<'_, 'a, W, N>) {
        let Self {
            free,
            queued,
            busy,
            stats,
        } = self;
        let (free_tx, free_rx) = free.split();
        let (queued_tx, queued_rx) = queued.split();
        let busy: &AtomicBool = busy;
        let stats: &TransferStats = stats;

        (
            Feeder {
                free: free_rx,
                queued: queued_tx,
                filling: None,
                busy,
                stats,
            },
            Engine {
                queued: queued_rx,
                free: free_tx,
                active: None,
                busy,
                stats,
            },
        )
    }
}

impl<W, const N: usize> Default for TransferQueue<'_, W, N> {
    fn default() -> Self {
        Self::new()
    }
}

/// Producer half: checks descriptors out, fills them and queues them
pub struct Feeder<'q, 'a, W, const N: usize> {
    free: Consumer<'q, Descriptor<'a, W>, N>,
    queued: Producer<'q, Descriptor<'a, W>, N>,
    filling: Option<Descriptor<'a, W>>,
    busy: &'q AtomicBool,
    stats: &'q TransferStats,
}

impl<'q, 'a, W, const N: usize> Feeder<'q, 'a, W, N> {
    /// Take an empty descriptor from the free pool
    pub fn checkout(&mut self) -> Result<Descriptor<'a, W>, TransferError> {
        let mut desc = self.free.pop().ok_or(TransferError::PoolEmpty)?;
        desc.reset();
        desc.set_state(DescriptorState::Filling);
        Ok(desc)
    }

    /// Queue a filled descriptor
    ///
    /// When the queued ring is full the descriptor comes back to the caller
    /// unchanged.
    pub fn enqueue(&mut self, desc: Descriptor<'a, W>) -> Result<Handoff, Descriptor<'a, W>> {
        self.submit(desc)?;
        Ok(self.claim())
    }

    /// Claim the engine if work is queued and it is idle
    pub fn start(&mut self) -> Handoff {
        if self.queued.is_empty() {
            return Handoff::Empty;
        }
        self.claim()
    }

    /// Whether the engine is currently moving data
    pub fn is_busy(&self) -> bool {
        self.busy.load(Ordering::Acquire)
    }

    /// Words held by the descriptor currently being filled
    pub fn pending(&self) -> usize {
        self.filling.as_ref().map_or(0, Descriptor::len)
    }

    pub fn stats(&self) -> &TransferStats {
        self.stats
    }

    fn submit(&mut self, mut desc: Descriptor<'a, W>) -> Result<(), Descriptor<'a, W>> {
        desc.set_state(DescriptorState::Queued);
        self.queued.push(desc).map_err(|mut desc| {
            desc.set_state(DescriptorState::Filling);
            desc
        })
    }

    fn claim(&self) -> Handoff {
        match self
            .busy
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
        {
            Ok(_) => Handoff::StartEngine,
            Err(_) => Handoff::Queued,
        }
    }
}

impl<'q, 'a, W: Copy, const N: usize> Feeder<'q, 'a, W, N> {
    /// Stream `src` into pool descriptors
    ///
    /// Full descriptors go to the queued ring. Stops early when the pool runs
    /// dry and returns how many words were taken; the caller decides whether
    /// to drop or retry the rest. Call [`start`](Self::start) afterwards to
    /// get the engine going.
    pub fn write(&mut self, src: &[W]) -> Result<usize, TransferError> {
        let mut written = 0;
        while written < src.len() {
            let desc = match self.filling.take() {
                Some(desc) => desc,
                None => match self.checkout() {
                    Ok(desc) => desc,
                    Err(_) => break,
                },
            };
            let desc = self.filling.insert(desc);
            written += desc.fill_from(&src[written..]);

            if desc.is_full() {
                if let Some(full) = self.filling.take() {
                    if let Err(full) = self.submit(full) {
                        self.filling = Some(full);
                        return Err(TransferError::QueueFull);
                    }
                }
            }
        }
        Ok(written)
    }

    /// Queue the partially filled descriptor, if any
    pub fn flush(&mut self) -> Result<(), TransferError> {
        match self.filling.take() {
            Some(desc) if desc.is_empty() => {
                self.filling = Some(desc);
                Ok(())
            }
            Some(desc) => self.submit(desc).map_err(|desc| {
                self.filling = Some(desc);
                TransferError::QueueFull
            }),
            None => Ok(()),
        }
    }
}

/// Completion half: owns the in-flight descriptor
///
/// Lives wherever completions are handled; on target that is the DMA
/// interrupt.
pub struct Engine<'q, 'a, W, const N: usize> {
    queued: Consumer<'q, Descriptor<'a, W>, N>,
    free: Producer<'q, Descriptor<'a, W>, N>,
    active: Option<Descriptor<'a, W>>,
    busy: &'q AtomicBool,
    stats: &'q TransferStats,
}

impl<'q, 'a, W, const N: usize> Engine<'q, 'a, W, N> {
    /// Start moving queued work after a [`Handoff::StartEngine`]
    ///
    /// Does nothing while a transfer is already in flight.
    pub fn start<S: TransferSink<W>>(&mut self, sink: &mut S) {
        if self.active.is_some() {
            return;
        }
        self.advance(sink);
    }

    /// Hardware finished the active descriptor
    ///
    /// Starts the next queued descriptor if there is one, otherwise stops
    /// the sink and goes idle. The finished descriptor goes back to the free
    /// pool either way. A completion with nothing in flight is ignored.
    pub fn on_transfer_complete<S: TransferSink<W>>(&mut self, sink: &mut S) {
        let Some(mut finished) = self.active.take() else {
            return;
        };

        if !self.advance(sink) {
            TransferStats::bump(&self.stats.underruns);
        }

        finished.reset();
        finished.set_state(DescriptorState::Free);
        if self.free.push(finished).is_err() {
            panic!("transfer: free pool overflow on retire");
        }
        TransferStats::bump(&self.stats.retired);
    }

    /// Descriptor currently being moved by hardware
    pub fn active(&self) -> Option<&Descriptor<'a, W>> {
        self.active.as_ref()
    }

    pub fn is_busy(&self) -> bool {
        self.busy.load(Ordering::Acquire)
    }

    /// Start the next queued descriptor; returns `false` if the engine went
    /// idle instead
    fn advance<S: TransferSink<W>>(&mut self, sink: &mut S) -> bool {
        loop {
            if let Some(mut next) = self.queued.pop() {
                // Covers a start that was not preceded by a claim
                self.busy.store(true, Ordering::Release);
                next.set_state(DescriptorState::InFlight);
                sink.start(next.as_slice());
                self.active = Some(next);
                TransferStats::bump(&self.stats.started);
                return true;
            }

            self.busy.store(false, Ordering::SeqCst);
            fence(Ordering::SeqCst);

            // An enqueue may have landed between the pop and the store above.
            // Whoever wins the claim starts it.
            if self.queued.is_empty()
                || self
                    .busy
                    .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
                    .is_err()
            {
                sink.stop();
                return false;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::vec;
    use std::vec::Vec;

    #[derive(Default)]
    struct RecordingSink {
        started: Vec<Vec<u16>>,
        stops: usize,
    }

    impl TransferSink<u16> for RecordingSink {
        fn start(&mut self, payload: &[u16]) {
            self.started.push(payload.to_vec());
        }

        fn stop(&mut self) {
            self.stops += 1;
        }
    }

    #[test]
    fn test_provision_rejects_bad_chunks() {
        let mut arena = [0u16; 16];
        let mut queue: TransferQueue<'_, u16, 4> = TransferQueue::new();
        assert_eq!(
            queue.provision(&mut arena, 0),
            Err(TransferError::InvalidParameter)
        );
        assert_eq!(queue.free_len(), 0);
    }

    #[test]
    fn test_provision_all_or_nothing() {
        let mut arena = [0u16; 16];
        let mut queue: TransferQueue<'_, u16, 4> = TransferQueue::new();
        // Four chunks of 4 do not fit in a pool of 3
        assert_eq!(queue.provision(&mut arena, 4), Err(TransferError::PoolFull));
        assert_eq!(queue.free_len(), 0);
    }

    #[test]
    fn test_provision_leaves_tail_unused() {
        let mut arena = [0u16; 10];
        let mut queue: TransferQueue<'_, u16, 4> = TransferQueue::new();
        assert_eq!(queue.provision(&mut arena, 4), Ok(2));
        assert_eq!(queue.free_len(), 2);
    }

    #[test]
    fn test_checkout_until_empty() {
        let mut arena = [0u16; 8];
        let mut queue: TransferQueue<'_, u16, 4> = TransferQueue::new();
        queue.provision(&mut arena, 4).unwrap();
        let (mut feeder, _engine) = queue.split();

        let a = feeder.checkout().unwrap();
        assert_eq!(a.state(), DescriptorState::Filling);
        let _b = feeder.checkout().unwrap();
        assert_eq!(feeder.checkout().err(), Some(TransferError::PoolEmpty));
    }

    #[test]
    fn test_enqueue_claims_idle_engine_once() {
        let mut arena = [0u16; 8];
        let mut queue: TransferQueue<'_, u16, 4> = TransferQueue::new();
        queue.provision(&mut arena, 4).unwrap();
        let (mut feeder, mut engine) = queue.split();
        let mut sink = RecordingSink::default();

        let mut a = feeder.checkout().unwrap();
        a.fill_from(&[1, 2]);
        assert_eq!(feeder.enqueue(a).ok(), Some(Handoff::StartEngine));

        let mut b = feeder.checkout().unwrap();
        b.fill_from(&[3]);
        assert_eq!(feeder.enqueue(b).ok(), Some(Handoff::Queued));

        engine.start(&mut sink);
        assert_eq!(sink.started, [vec![1u16, 2]]);
        assert_eq!(engine.active().map(Descriptor::state), Some(DescriptorState::InFlight));

        // Second kick while busy is a no-op
        engine.start(&mut sink);
        assert_eq!(sink.started.len(), 1);
    }

    #[test]
    fn test_completion_chains_then_idles() {
        let mut arena = [0u16; 8];
        let mut queue: TransferQueue<'_, u16, 4> = TransferQueue::new();
        queue.provision(&mut arena, 4).unwrap();
        let (mut feeder, mut engine) = queue.split();
        let mut sink = RecordingSink::default();

        assert_eq!(feeder.write(&[1, 2, 3, 4, 5, 6, 7, 8]), Ok(8));
        assert_eq!(feeder.start(), Handoff::StartEngine);
        engine.start(&mut sink);

        engine.on_transfer_complete(&mut sink);
        assert_eq!(sink.started, [vec![1u16, 2, 3, 4], vec![5u16, 6, 7, 8]]);
        assert!(engine.is_busy());
        assert_eq!(sink.stops, 0);

        engine.on_transfer_complete(&mut sink);
        assert!(engine.active().is_none());
        assert!(!feeder.is_busy());
        assert_eq!(sink.stops, 1);
        assert_eq!(feeder.stats().underruns(), 1);

        // Spurious completion while idle
        engine.on_transfer_complete(&mut sink);
        assert_eq!(feeder.stats().retired(), 2);
        assert_eq!(feeder.start(), Handoff::Empty);
    }

    #[test]
    fn test_unclaimed_start_still_marks_busy() {
        let mut arena = [0u16; 8];
        let mut queue: TransferQueue<'_, u16, 4> = TransferQueue::new();
        queue.provision(&mut arena, 4).unwrap();
        let (mut feeder, mut engine) = queue.split();
        let mut sink = RecordingSink::default();

        assert_eq!(feeder.write(&[1, 2, 3, 4]), Ok(4));
        // Kicked without a StartEngine handoff
        engine.start(&mut sink);
        assert!(engine.active().is_some());
        assert!(feeder.is_busy());

        // Work queued now rides the running engine
        assert_eq!(feeder.write(&[5, 6, 7, 8]), Ok(4));
        assert_eq!(feeder.start(), Handoff::Queued);

        engine.on_transfer_complete(&mut sink);
        assert!(feeder.is_busy());
        engine.on_transfer_complete(&mut sink);
        assert!(!feeder.is_busy());
        assert_eq!(sink.started, [vec![1u16, 2, 3, 4], vec![5u16, 6, 7, 8]]);
    }

    #[test]
    fn test_write_stops_when_pool_dry() {
        let mut arena = [0u16; 8];
        let mut queue: TransferQueue<'_, u16, 4> = TransferQueue::new();
        queue.provision(&mut arena, 4).unwrap();
        let (mut feeder, _engine) = queue.split();

        let samples = [9u16; 11];
        assert_eq!(feeder.write(&samples), Ok(8));
        assert_eq!(feeder.write(&samples), Ok(0));
        assert_eq!(feeder.pending(), 0);
    }

    #[test]
    fn test_flush_queues_partial() {
        let mut arena = [0u16; 8];
        let mut queue: TransferQueue<'_, u16, 4> = TransferQueue::new();
        queue.provision(&mut arena, 4).unwrap();
        let (mut feeder, mut engine) = queue.split();
        let mut sink = RecordingSink::default();

        assert_eq!(feeder.write(&[5, 6]), Ok(2));
        assert_eq!(feeder.pending(), 2);
        assert_eq!(feeder.start(), Handoff::Empty);

        feeder.flush().unwrap();
        assert_eq!(feeder.pending(), 0);
        assert_eq!(feeder.start(), Handoff::StartEngine);
        engine.start(&mut sink);
        assert_eq!(sink.started, [vec![5u16, 6]]);
    }

    #[test]
    fn test_every_completion_retires_exactly_once() {
        const ROUNDS: u32 = 50;
        let mut arena = [0u16; 12];
        let mut queue: TransferQueue<'_, u16, 4> = TransferQueue::new();
        queue.provision(&mut arena, 4).unwrap();
        let (mut feeder, mut engine) = queue.split();
        let mut sink = RecordingSink::default();

        let mut completions = 0;
        let mut word = 0u16;
        while completions < ROUNDS {
            // Keep the queue topped up, then let one transfer finish
            while let Ok(mut desc) = feeder.checkout() {
                desc.fill_with(word);
                word = word.wrapping_add(1);
                match feeder.enqueue(desc) {
                    Ok(Handoff::StartEngine) => engine.start(&mut sink),
                    Ok(_) => {}
                    Err(_) => panic!("queued ring cannot be full"),
                }
            }
            engine.on_transfer_complete(&mut sink);
            completions += 1;
        }

        let stats = feeder.stats();
        assert_eq!(stats.retired(), ROUNDS);
        // One still in flight, the rest queued or free; none lost
        assert_eq!(stats.started(), stats.retired() + 1);
        assert_eq!(sink.started.len() as u32, stats.started());
        assert_eq!(stats.underruns(), 0);
    }
}
