//! Wait-free single-producer/single-consumer ring
//!
//! A ring of `N` slots holds at most `N - 1` items: one slot is sacrificed
//! so that `write == read` always means empty and `write + 1 == read`
//! (mod `N`) always means full. Only the producer advances `write`; only
//! the consumer advances `read`. That split is what makes the ring safe
//! to share between the main loop and an interrupt handler without a lock.
//!
//! Publication order:
//!
//! ```text
//! producer: store slot ──▶ write.store(Release)
//! consumer: write.load(Acquire) ──▶ read slot ──▶ read.store(Release)
//! producer: read.load(Acquire) before reusing a slot
//! ```
//!
//! Use [`Ring::split`] to hand the two ends to different contexts. Each
//! end is a distinct type, so the single-producer/single-consumer rule is
//! enforced by ownership rather than by convention.

#![allow(unsafe_code)]

use core::cell::UnsafeCell;
use core::mem::MaybeUninit;

use portable_atomic::{AtomicUsize, Ordering};

/// Fixed-capacity SPSC ring with `N - 1` usable slots
pub struct Ring<T, const N: usize> {
    read: AtomicUsize,
    write: AtomicUsize,
    slots: [UnsafeCell<MaybeUninit<T>>; N],
}

// SAFETY: a slot is only written by the producer while it is outside the
// readable range and only read by the consumer while it is inside it. The
// Release/Acquire pairs on the indices order those accesses, so sharing
// `&Ring` between one producer and one consumer never races on a slot.
unsafe impl<T: Send, const N: usize> Sync for Ring<T, N> {}

impl<T, const N: usize> Ring<T, N> {
    /// Create an empty ring
    pub const fn new() -> Self {
        const { assert!(N >= 2, "a ring needs at least two slots") };
        Self {
            read: AtomicUsize::new(0),
            write: AtomicUsize::new(0),
            slots: [const { UnsafeCell::new(MaybeUninit::uninit()) }; N],
        }
    }

    /// Number of items the ring can hold
    pub const fn capacity(&self) -> usize {
        N - 1
    }

    /// Items currently queued
    pub fn len(&self) -> usize {
        let write = self.write.load(Ordering::Acquire);
        let read = self.read.load(Ordering::Acquire);
        (write + N - read) % N
    }

    pub fn is_empty(&self) -> bool {
        self.read.load(Ordering::Acquire) == self.write.load(Ordering::Acquire)
    }

    pub fn is_full(&self) -> bool {
        let write = self.write.load(Ordering::Acquire);
        Self::advance(write) == self.read.load(Ordering::Acquire)
    }

    /// Push with exclusive access; hands `item` back when full
    pub fn push(&mut self, item: T) -> Result<(), T> {
        self.push_shared(item)
    }

    /// Pop with exclusive access
    pub fn pop(&mut self) -> Option<T> {
        self.pop_shared()
    }

    /// Split into the producer and consumer ends
    pub fn split(&mut self) -> (Producer<'_, T, N>, Consumer<'_, T, N>) {
        let ring: &Self = self;
        (Producer { ring }, Consumer { ring })
    }

    #[inline]
    const fn advance(index: usize) -> usize {
        if index + 1 >= N {
            0
        } else {
            index + 1
        }
    }

    fn push_shared(&self, item: T) -> Result<(), T> {
        let write = self.write.load(Ordering::Relaxed);
        let next = Self::advance(write);
        if next == self.read.load(Ordering::Acquire) {
            return Err(item);
        }

        // SAFETY: `write` is outside the readable range (the ring is not
        // full) and only the single producer writes slots.
        unsafe { (*self.slots[write].get()).write(item) };
        self.write.store(next, Ordering::Release);
        Ok(())
    }

    fn pop_shared(&self) -> Option<T> {
        let read = self.read.load(Ordering::Relaxed);
        if read == self.write.load(Ordering::Acquire) {
            return None;
        }

        // SAFETY: the Acquire load above observed the producer's Release
        // store of `write`, so the slot at `read` is initialised, and only
        // the single consumer moves items out of it.
        let item = unsafe { (*self.slots[read].get()).assume_init_read() };
        self.read.store(Self::advance(read), Ordering::Release);
        Some(item)
    }
}

impl<T, const N: usize> Default for Ring<T, N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, const N: usize> Drop for Ring<T, N> {
    fn drop(&mut self) {
        while self.pop().is_some() {}
    }
}

/// Producer end of a split [`Ring`]
pub struct Producer<'r, T, const N: usize> {
    ring: &'r Ring<T, N>,
}

impl<T, const N: usize> Producer<'_, T, N> {
    /// Push one item; hands it back if the ring is full
    ///
    /// Never blocks; safe to call from interrupt context.
    #[inline]
    pub fn push(&mut self, item: T) -> Result<(), T> {
        self.ring.push_shared(item)
    }

    pub fn is_full(&self) -> bool {
        self.ring.is_full()
    }

    pub fn len(&self) -> usize {
        self.ring.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ring.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.ring.capacity()
    }
}

/// Consumer end of a split [`Ring`]
pub struct Consumer<'r, T, const N: usize> {
    ring: &'r Ring<T, N>,
}

impl<T, const N: usize> Consumer<'_, T, N> {
    /// Pop the oldest item
    ///
    /// Never blocks; safe to call from interrupt context.
    #[inline]
    pub fn pop(&mut self) -> Option<T> {
        self.ring.pop_shared()
    }

    pub fn is_empty(&self) -> bool {
        self.ring.is_empty()
    }

    pub fn len(&self) -> usize {
        self.ring.len()
    }

    pub fn capacity(&self) -> usize {
        self.ring.capacity()
    }
}
