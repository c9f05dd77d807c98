//! Board configuration
//!
//! Plain data with const defaults. The firmware build script parses
//! `board.toml` into [`BoardConfig`] (with the `serde` feature), runs
//! [`BoardConfig::validate`] and bakes the result into the image, so a bad
//! configuration fails the build instead of the boot.

mod types;

pub use types::*;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Configuration validation errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// Frame is empty or larger than the panel
    DisplayGeometry,
    /// Stride differs from width; frames must go out as one window
    DisplayPadded,
    /// SPI clock is zero or beyond what the bus can do
    SpiFrequency,
    /// Touch address is not a 7-bit address
    TouchAddress,
    /// I2C clock is zero or above fast-mode plus
    I2cFrequency,
    /// Zero samples, zero rate, or more descriptors than the stream holds
    AudioBuffers,
    /// More primed descriptors than the pool has
    AudioPrime,
    /// PWM divider below 1 or fraction above 15
    AudioDivider,
    /// Console with no rows
    ConsoleRows,
    /// Console line width is zero or too wide
    ConsoleWidth,
    /// Consoles need more line buffers than exist
    ConsoleLines,
}

/// Everything the firmware needs to bring the board up
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct BoardConfig {
    pub display: DisplayConfig,
    pub touch: TouchConfig,
    pub audio: AudioConfig,
    pub console: ConsoleConfig,
}

impl BoardConfig {
    pub const DEFAULT: Self = Self {
        display: DisplayConfig::DEFAULT,
        touch: TouchConfig::DEFAULT,
        audio: AudioConfig::DEFAULT,
        console: ConsoleConfig::DEFAULT,
    };

    /// Check every cross-field invariant; first failure wins
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.validate_display()?;
        self.validate_touch()?;
        self.validate_audio()?;
        self.validate_console()
    }

    fn validate_display(&self) -> Result<(), ConfigError> {
        let d = &self.display;
        if d.width == 0
            || d.height == 0
            || d.width > DisplayConfig::PANEL_WIDTH
            || d.height > DisplayConfig::PANEL_HEIGHT
        {
            return Err(ConfigError::DisplayGeometry);
        }
        if d.stride != d.width {
            return Err(ConfigError::DisplayPadded);
        }
        if d.spi_hz == 0 || d.spi_hz > DisplayConfig::MAX_SPI_HZ {
            return Err(ConfigError::SpiFrequency);
        }
        Ok(())
    }

    fn validate_touch(&self) -> Result<(), ConfigError> {
        let t = &self.touch;
        if t.address > 0x7f {
            return Err(ConfigError::TouchAddress);
        }
        if t.i2c_hz == 0 || t.i2c_hz > 1_000_000 {
            return Err(ConfigError::I2cFrequency);
        }
        Ok(())
    }

    fn validate_audio(&self) -> Result<(), ConfigError> {
        let a = &self.audio;
        if a.sample_rate == 0
            || a.buffer_samples == 0
            || a.buffers == 0
            || a.buffers as usize > MAX_AUDIO_BUFFERS
        {
            return Err(ConfigError::AudioBuffers);
        }
        if a.primed > a.buffers {
            return Err(ConfigError::AudioPrime);
        }
        if a.divider_int == 0 || a.divider_frac > 15 {
            return Err(ConfigError::AudioDivider);
        }
        Ok(())
    }

    fn validate_console(&self) -> Result<(), ConfigError> {
        let c = &self.console;
        if c.rows == 0 || c.frame_rows == 0 {
            return Err(ConfigError::ConsoleRows);
        }
        if c.line_width == 0 || c.line_width as usize > MAX_LINE_WIDTH {
            return Err(ConfigError::ConsoleWidth);
        }
        if c.lines_needed() > TEXT_LINES {
            return Err(ConfigError::ConsoleLines);
        }
        Ok(())
    }
}
