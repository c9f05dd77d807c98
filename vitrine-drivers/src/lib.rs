//! Hardware driver implementations
//!
//! Concrete drivers for the peripherals on the Vitrine display board, written
//! against `embedded-hal` 1.0 and the `vitrine-hal` traits:
//!
//! - Display: ST7789 240x320 SPI LCD, a [`FrameSink`](vitrine_core::FrameSink)
//! - Touch: CST328 capacitive touch controller over I2C
//! - Audio: 8-bit PWM sample stream fed through the transfer queue

#![no_std]
#![deny(unsafe_code)]

#[cfg(test)]
extern crate std;

pub mod audio;
pub mod display;
pub mod touch;
