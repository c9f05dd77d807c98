//! RP2040-specific HAL for the Vitrine display board
//!
//! Implements the `vitrine-hal` and `vitrine-core` hardware seams on top of
//! `embassy-rp`, dropping to the register blocks where embassy has no
//! poll-driven equivalent:
//!
//! - [`spi::DmaSpi`]: blocking command writes plus a TX/RX DMA pair for
//!   pixel blocks (`SpiTransport` + `CoupledTransfer`)
//! - [`pwm::Backlight`]: LCD backlight level (`PwmOutput`)
//! - [`pwm::PwmAudioSink`]: DMA into a PWM compare register, paced by the
//!   counter wrap (`TransferSink<u16>`)
//!
//! DMA channel allocation:
//!
//! | Channel | Use            | Interrupt |
//! |---------|----------------|-----------|
//! | 0       | LCD SPI TX     | none      |
//! | 1       | LCD SPI RX     | none      |
//! | 2       | PWM audio      | DMA_IRQ_1 |
//!
//! `DMA_IRQ_0` stays with `embassy-rp`.

#![no_std]

pub mod dma;
pub mod pwm;
pub mod spi;

pub use pwm::{Backlight, PwmAudioSink};
pub use spi::DmaSpi;
