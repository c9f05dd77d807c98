//! SPI bus abstractions
//!
//! The display controller is fed through two paths on the same bus: short
//! blocking writes for commands and parameters, and a long DMA-driven block
//! write for pixel data that returns before the data has left the chip.

/// SPI master with a blocking path and an asynchronous block path
///
/// Completion of the asynchronous path is observed through
/// `vitrine_core::transfer::CoupledTransfer`, which implementations provide
/// alongside this trait.
pub trait SpiTransport {
    /// Error type for SPI operations
    type Error;

    /// Write bytes, blocking until the last byte has been clocked out
    ///
    /// Chip select is asserted for the duration of the call.
    fn write(&mut self, data: &[u8]) -> Result<(), Self::Error>;

    /// Write 16-bit words MSB first, blocking
    fn write_words(&mut self, words: &[u16]) -> Result<(), Self::Error>;

    /// Start writing 16-bit words MSB first and return immediately
    ///
    /// Chip select stays asserted until the transfer is released. The caller
    /// must leave `words` untouched until the transfer has completed.
    fn start_write_words(&mut self, words: &[u16]) -> Result<(), Self::Error>;
}
