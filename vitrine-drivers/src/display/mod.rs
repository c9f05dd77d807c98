//! Display drivers
//!
//! - ST7789: SPI TFT controller, pixels pushed as big-endian RGB565

pub mod st7789;

pub use st7789::{LcdError, St7789};
