//! Per-peripheral configuration sections

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Text line buffers shared by all console boxes
pub const TEXT_LINES: usize = 32;

/// Widest console line in bytes
pub const MAX_LINE_WIDTH: usize = 64;

/// Most audio descriptors the PWM stream can provision
pub const MAX_AUDIO_BUFFERS: usize = 25;

/// LCD panel and frame geometry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct DisplayConfig {
    /// Frame width in pixels
    pub width: u16,
    /// Frame height in pixels
    pub height: u16,
    /// Pixels between row starts in the frame buffer
    pub stride: u16,
    /// SPI clock in Hz
    pub spi_hz: u32,
    /// Backlight level (0..=0xffff)
    pub brightness: u16,
    /// Frame background as 0xRRGGBB
    pub clear_color: u32,
}

impl DisplayConfig {
    /// Panel width of the ST7789 module
    pub const PANEL_WIDTH: u16 = 240;
    /// Panel height of the ST7789 module
    pub const PANEL_HEIGHT: u16 = 320;
    /// Fastest SPI clock the RP2040 can generate at 125 MHz
    pub const MAX_SPI_HZ: u32 = 62_500_000;

    pub const DEFAULT: Self = Self {
        width: 240,
        height: 320,
        stride: 240,
        spi_hz: 25_000_000,
        brightness: 0x7fff,
        clear_color: 0x909090,
    };

    /// Pixels per frame buffer
    pub const fn frame_len(&self) -> usize {
        self.stride as usize * self.height as usize
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Capacitive touch controller
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct TouchConfig {
    pub enabled: bool,
    /// 7-bit I2C address
    pub address: u8,
    /// I2C clock in Hz
    pub i2c_hz: u32,
    /// Reset pulse length
    pub reset_pulse_ms: u32,
    /// Wait after releasing reset before talking to the controller
    pub boot_wait_ms: u32,
}

impl TouchConfig {
    pub const DEFAULT: Self = Self {
        enabled: true,
        address: 0x1a,
        i2c_hz: 400_000,
        reset_pulse_ms: 1,
        boot_wait_ms: 150,
    };
}

impl Default for TouchConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// PWM audio stream
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct AudioConfig {
    pub enabled: bool,
    /// Samples per second
    pub sample_rate: u32,
    /// Samples per descriptor
    pub buffer_samples: u16,
    /// Descriptors in the pool
    pub buffers: u8,
    /// Silent descriptors queued on open
    pub primed: u8,
    /// PWM counter wrap value
    pub pwm_top: u16,
    /// PWM clock divider, integer part
    pub divider_int: u8,
    /// PWM clock divider, sixteenths
    pub divider_frac: u8,
}

impl AudioConfig {
    pub const DEFAULT: Self = Self {
        enabled: true,
        sample_rate: 44_100,
        buffer_samples: 882,
        buffers: 25,
        primed: 5,
        pwm_top: 255,
        divider_int: 11,
        divider_frac: 1,
    };

    /// Length of one descriptor in milliseconds
    pub const fn buffer_ms(&self) -> u32 {
        if self.sample_rate == 0 {
            0
        } else {
            self.buffer_samples as u32 * 1000 / self.sample_rate
        }
    }
}

impl Default for AudioConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// On-screen text consoles
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ConsoleConfig {
    /// Rows of the touch log
    pub rows: u8,
    /// Bytes per row
    pub line_width: u8,
    /// Rows of the frame timing log
    pub frame_rows: u8,
    /// Vertical distance between rows in pixels
    pub row_step: u8,
    /// Text colour as 0xRRGGBB
    pub color: u32,
}

impl ConsoleConfig {
    pub const DEFAULT: Self = Self {
        rows: 18,
        line_width: 64,
        frame_rows: 1,
        row_step: 10,
        color: 0x0f0f0f,
    };

    /// Line buffers both consoles reserve together
    pub const fn lines_needed(&self) -> usize {
        self.rows as usize + 1 + self.frame_rows as usize + 1
    }
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}
