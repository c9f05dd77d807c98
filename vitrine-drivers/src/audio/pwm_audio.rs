//! PWM audio output
//!
//! Unsigned 8-bit samples are written straight into the compare register of a
//! PWM slice whose counter wraps at 255. A DMA channel paced by the wrap
//! request moves one sample per period, so the sample rate is the wrap rate.
//!
//! Samples travel in fixed 20 ms descriptors through a
//! [`TransferQueue`]. [`AudioOut`] is the producer side; the returned
//! [`Engine`] belongs in the DMA completion interrupt together with the
//! PWM+DMA [`TransferSink`](vitrine_core::TransferSink).

use vitrine_core::config::AudioConfig;
use vitrine_core::transfer::{Engine, Feeder, TransferStats};
use vitrine_core::{Handoff, TransferError, TransferQueue};

/// PWM level written while nothing is playing
const SILENCE: u16 = 0;

/// Samples widened per pass of `write_samples`
const WIDEN_CHUNK: usize = 64;

/// Audio stream errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum AudioError {
    /// The queue already carries a provisioned pool
    AlreadyOpen,
    /// Arena cannot hold the configured descriptors
    ArenaTooSmall,
    /// Descriptor pool or queue rejected the operation
    Transfer(TransferError),
}

impl From<TransferError> for AudioError {
    fn from(e: TransferError) -> Self {
        Self::Transfer(e)
    }
}

/// Producer side of the PWM audio stream
pub struct AudioOut<'q, 'a, const N: usize> {
    feeder: Feeder<'q, 'a, u16, N>,
    /// Priming claimed the engine; the first `start` hands that claim out
    kick_owed: bool,
}

impl<'q, 'a, const N: usize> AudioOut<'q, 'a, N> {
    /// Provision the descriptor pool and queue the silent lead-in
    ///
    /// `arena` is carved into `config.buffers` descriptors of
    /// `config.buffer_samples` words; `config.primed` of them are queued as
    /// silence so playback has headroom before the first real samples.
    pub fn open(
        queue: &'q mut TransferQueue<'a, u16, N>,
        arena: &'a mut [u16],
        config: &AudioConfig,
    ) -> Result<(Self, Engine<'q, 'a, u16, N>), AudioError> {
        if queue.free_len() != 0 {
            return Err(AudioError::AlreadyOpen);
        }
        let chunk = usize::from(config.buffer_samples);
        let words = chunk * usize::from(config.buffers);
        let Some(arena) = arena.get_mut(..words) else {
            return Err(AudioError::ArenaTooSmall);
        };
        queue.provision(arena, chunk)?;

        let (mut feeder, engine) = queue.split();
        let mut kick_owed = false;
        for _ in 0..config.primed {
            let mut desc = feeder.checkout()?;
            desc.fill_with(SILENCE);
            match feeder.enqueue(desc) {
                Ok(Handoff::StartEngine) => kick_owed = true,
                Ok(_) => {}
                Err(_) => return Err(AudioError::Transfer(TransferError::QueueFull)),
            }
        }

        Ok((Self { feeder, kick_owed }, engine))
    }

    /// Queue unsigned 8-bit samples
    ///
    /// Returns how many were accepted; fewer than `samples.len()` means the
    /// pool ran dry and the caller should retry the rest later. Call
    /// [`start`](Self::start) to get playback going.
    pub fn write_samples(&mut self, samples: &[u8]) -> Result<usize, AudioError> {
        let mut widened = [0u16; WIDEN_CHUNK];
        let mut accepted = 0;
        for chunk in samples.chunks(WIDEN_CHUNK) {
            let words = &mut widened[..chunk.len()];
            for (word, &sample) in words.iter_mut().zip(chunk) {
                *word = u16::from(sample);
            }
            let taken = self.feeder.write(words)?;
            accepted += taken;
            if taken < chunk.len() {
                break;
            }
        }
        Ok(accepted)
    }

    /// Queue the partially filled descriptor, if any
    pub fn flush(&mut self) -> Result<(), AudioError> {
        Ok(self.feeder.flush()?)
    }

    /// Ask for playback to start if the engine is idle
    ///
    /// On [`Handoff::StartEngine`] the caller must run the engine's `start`
    /// in completion context.
    pub fn start(&mut self) -> Handoff {
        if core::mem::take(&mut self.kick_owed) {
            return Handoff::StartEngine;
        }
        self.feeder.start()
    }

    /// Samples waiting in the descriptor being filled
    pub fn pending(&self) -> usize {
        self.feeder.pending()
    }

    pub fn is_playing(&self) -> bool {
        self.feeder.is_busy()
    }

    pub fn stats(&self) -> &TransferStats {
        self.feeder.stats()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::vec::Vec;
    use vitrine_core::TransferSink;

    #[derive(Default)]
    struct PwmDma {
        started: Vec<Vec<u16>>,
        stopped: u32,
    }

    impl TransferSink<u16> for PwmDma {
        fn start(&mut self, payload: &[u16]) {
            self.started.push(payload.to_vec());
        }

        fn stop(&mut self) {
            self.stopped += 1;
        }
    }

    fn config() -> AudioConfig {
        AudioConfig {
            buffer_samples: 8,
            buffers: 4,
            primed: 2,
            ..AudioConfig::DEFAULT
        }
    }

    #[test]
    fn test_open_primes_silence() {
        let mut arena = [0xffffu16; 40];
        let mut queue = TransferQueue::<u16, 5>::new();
        let (mut audio, mut engine) = AudioOut::open(&mut queue, &mut arena, &config()).unwrap();

        assert_eq!(audio.start(), Handoff::StartEngine);
        let mut sink = PwmDma::default();
        engine.start(&mut sink);
        assert_eq!(sink.started, [[0u16; 8]]);

        // Second primed buffer is still queued behind the active one
        assert_eq!(audio.start(), Handoff::Queued);
        engine.on_transfer_complete(&mut sink);
        assert_eq!(sink.started.len(), 2);
        engine.on_transfer_complete(&mut sink);
        assert_eq!(sink.stopped, 1);
        assert_eq!(audio.stats().underruns(), 1);
        assert!(!audio.is_playing());
    }

    #[test]
    fn test_write_samples_widens_and_stops_when_dry() {
        let mut arena = [0u16; 32];
        let mut queue = TransferQueue::<u16, 5>::new();
        let (mut audio, mut engine) = AudioOut::open(&mut queue, &mut arena, &config()).unwrap();

        let samples: Vec<u8> = (0..20).map(|n| 200 + n).collect();
        // Two free descriptors of 8 after priming
        assert_eq!(audio.write_samples(&samples), Ok(16));
        assert_eq!(audio.pending(), 0);

        let mut sink = PwmDma::default();
        assert_eq!(audio.start(), Handoff::StartEngine);
        engine.start(&mut sink);
        engine.on_transfer_complete(&mut sink);
        engine.on_transfer_complete(&mut sink);
        assert_eq!(sink.started[2], [200u16, 201, 202, 203, 204, 205, 206, 207]);

        // Retired descriptors are reusable
        assert_eq!(audio.write_samples(&samples[16..]), Ok(4));
        assert_eq!(audio.pending(), 4);
        audio.flush().unwrap();
        assert_eq!(audio.pending(), 0);
    }

    #[test]
    fn test_open_rejects_reuse_and_short_arena() {
        let mut short = [0u16; 31];
        let mut arena = [0u16; 32];
        let mut again = [0u16; 32];
        let mut queue = TransferQueue::<u16, 5>::new();

        assert_eq!(
            AudioOut::open(&mut queue, &mut short, &config()).err(),
            Some(AudioError::ArenaTooSmall)
        );
        assert!(AudioOut::open(&mut queue, &mut arena, &config()).is_ok());
        assert_eq!(
            AudioOut::open(&mut queue, &mut again, &config()).err(),
            Some(AudioError::AlreadyOpen)
        );
    }

    #[test]
    fn test_pool_larger_than_ring() {
        let mut arena = [0u16; 48];
        let mut queue = TransferQueue::<u16, 5>::new();
        let cfg = AudioConfig {
            buffers: 6,
            ..config()
        };
        assert_eq!(
            AudioOut::open(&mut queue, &mut arena, &cfg).err(),
            Some(AudioError::Transfer(TransferError::PoolFull))
        );
    }
}
