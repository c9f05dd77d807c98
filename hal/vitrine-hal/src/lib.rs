//! Vitrine Hardware Abstraction Layer
//!
//! This crate defines the hardware seams the display board drivers are
//! written against. Chip-specific crates implement them; drivers and the
//! core never touch registers directly.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  vitrine-drivers (ST7789, CST328, PWM)  │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  vitrine-hal (this crate - traits)      │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//!           ┌───────────────────┐
//!           │ vitrine-hal-rp2040│
//!           └───────────────────┘
//! ```
//!
//! Pins, delays and the I2C bus come from `embedded-hal` 1.0. This crate
//! only adds what `embedded-hal` does not cover:
//!
//! - [`spi::SpiTransport`] - blocking command path plus a DMA block path
//! - [`pwm::PwmOutput`] - duty-cycle output (backlight, audio)
//! - PWM timing presets ([`pwm::PwmConfig`])
//!
//! SPI and I2C clock rates come from the board configuration, not from here.

#![no_std]
#![deny(unsafe_code)]

pub mod pwm;
pub mod spi;

// Re-export key traits at crate root for convenience
pub use pwm::{PwmConfig, PwmOutput};
pub use spi::SpiTransport;
