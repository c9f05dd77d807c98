//! Board pinout and the configuration baked in from board.toml
//!
//! | Function        | GPIO | Peripheral      |
//! |-----------------|------|-----------------|
//! | LCD SCK         | 2    | SPI0            |
//! | LCD MOSI        | 3    | SPI0            |
//! | LCD MISO        | 4    | SPI0            |
//! | LCD CS          | 5    | GPIO            |
//! | LCD DC          | 6    | GPIO            |
//! | LCD RST         | 7    | GPIO            |
//! | LCD backlight   | 8    | PWM slice 4 A   |
//! | Touch RST       | 10   | GPIO            |
//! | Touch INT       | 11   | GPIO (pull-up)  |
//! | Touch SDA       | 12   | I2C0            |
//! | Touch SCL       | 13   | I2C0            |
//! | Audio out       | 16   | PWM slice 0 A   |

use vitrine_core::config::{
    AudioConfig, ConsoleConfig, DisplayConfig, TouchConfig, MAX_AUDIO_BUFFERS,
};
use vitrine_core::BoardConfig;
use vitrine_hal::PwmConfig;

include!(concat!(env!("OUT_DIR"), "/board_config.rs"));

/// Pixels in the frame arena: both canvases back to back
pub const FRAME_WORDS: usize = 2 * BOARD.display.frame_len();

/// PWM levels in the audio descriptor pool
pub const AUDIO_WORDS: usize = BOARD.audio.buffers as usize * BOARD.audio.buffer_samples as usize;

/// Audio ring slots; one always stays empty
pub const AUDIO_SLOTS: usize = MAX_AUDIO_BUFFERS + 1;

/// PWM timing of the audio slice
pub const AUDIO_TIMING: PwmConfig = PwmConfig {
    divider_int: BOARD.audio.divider_int,
    divider_frac: BOARD.audio.divider_frac,
    top: BOARD.audio.pwm_top,
};
