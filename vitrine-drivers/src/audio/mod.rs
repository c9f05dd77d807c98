//! Audio output drivers
//!
//! - PWM audio: unsigned 8-bit samples become PWM compare levels, paced by
//!   the counter wrap

pub mod pwm_audio;

pub use pwm_audio::{AudioError, AudioOut};
