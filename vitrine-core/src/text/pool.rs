//! Bitmap arena allocator

/// Tracks which of `N` arena slots are checked out, one bit per slot
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BitPool<const N: usize> {
    used: u64,
}

impl<const N: usize> BitPool<N> {
    const ALL: u64 = {
        assert!(N >= 1 && N <= 64, "BitPool holds 1..=64 slots");
        if N == 64 {
            u64::MAX
        } else {
            (1u64 << N) - 1
        }
    };

    pub const fn new() -> Self {
        let _ = Self::ALL;
        Self { used: 0 }
    }

    /// Claim the lowest free slot
    pub fn checkout(&mut self) -> Option<usize> {
        let free = !self.used & Self::ALL;
        if free == 0 {
            return None;
        }
        let index = free.trailing_zeros() as usize;
        self.used |= 1 << index;
        Some(index)
    }

    /// Return a slot; `false` if it was not checked out
    pub fn release(&mut self, index: usize) -> bool {
        if !self.is_used(index) {
            return false;
        }
        self.used &= !(1 << index);
        true
    }

    pub fn is_used(&self, index: usize) -> bool {
        index < N && self.used & (1 << index) != 0
    }

    pub fn free_count(&self) -> usize {
        N - self.used_count()
    }

    pub fn used_count(&self) -> usize {
        self.used.count_ones() as usize
    }
}

impl<const N: usize> Default for BitPool<N> {
    fn default() -> Self {
        Self::new()
    }
}
