//! Buffer descriptors

use super::TransferError;

/// Where a descriptor currently is in its lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DescriptorState {
    /// Sitting in the free pool
    Free,
    /// Checked out by the producer
    Filling,
    /// Waiting in the queued ring
    Queued,
    /// Being moved by hardware
    InFlight,
}

/// A fixed-capacity payload buffer plus its filled length
///
/// The payload is a slice of a larger arena; descriptors are never freed
/// individually.
#[derive(Debug)]
pub struct Descriptor<'a, W> {
    payload: &'a mut [W],
    len: usize,
    state: DescriptorState,
}

impl<'a, W> Descriptor<'a, W> {
    /// Wrap a payload buffer as a free, empty descriptor
    pub fn new(payload: &'a mut [W]) -> Self {
        Self {
            payload,
            len: 0,
            state: DescriptorState::Free,
        }
    }

    pub fn capacity(&self) -> usize {
        self.payload.len()
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn is_full(&self) -> bool {
        self.len == self.payload.len()
    }

    /// Room left before the descriptor is full
    pub fn remaining(&self) -> usize {
        self.payload.len() - self.len
    }

    pub fn state(&self) -> DescriptorState {
        self.state
    }

    /// Filled part of the payload
    pub fn as_slice(&self) -> &[W] {
        &self.payload[..self.len]
    }

    /// Whole payload, for producers that fill in place and then call
    /// [`set_len`](Self::set_len)
    pub fn payload_mut(&mut self) -> &mut [W] {
        &mut self.payload[..]
    }

    /// Set the filled length after an in-place fill
    pub fn set_len(&mut self, len: usize) -> Result<(), TransferError> {
        if len > self.payload.len() {
            return Err(TransferError::InvalidParameter);
        }
        self.len = len;
        Ok(())
    }

    /// Append one word; returns `false` when full
    pub fn push(&mut self, word: W) -> bool {
        match self.payload.get_mut(self.len) {
            Some(slot) => {
                *slot = word;
                self.len += 1;
                true
            }
            None => false,
        }
    }

    /// Discard the filled length
    pub fn reset(&mut self) {
        self.len = 0;
    }

    pub(crate) fn set_state(&mut self, state: DescriptorState) {
        self.state = state;
    }
}

impl<W: Copy> Descriptor<'_, W> {
    /// Copy as much of `src` as fits; returns the number of words taken
    pub fn fill_from(&mut self, src: &[W]) -> usize {
        let n = src.len().min(self.remaining());
        self.payload[self.len..self.len + n].copy_from_slice(&src[..n]);
        self.len += n;
        n
    }

    /// Fill the remaining space with `word`
    pub fn fill_with(&mut self, word: W) {
        self.payload[self.len..].fill(word);
        self.len = self.payload.len();
    }
}
