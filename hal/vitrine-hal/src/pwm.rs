//! PWM output abstractions
//!
//! Used for the LCD backlight and as the sample clock of the audio output.

/// Duty-cycle output on one PWM channel
pub trait PwmOutput {
    /// Set the compare level (0 = always low)
    fn set_level(&mut self, level: u16);

    /// Start or stop the counter of the slice driving this channel
    fn set_enabled(&mut self, enabled: bool);

    /// Level at which the output is high for the whole period
    fn max_level(&self) -> u16;
}

/// PWM slice timing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PwmConfig {
    /// Integer part of the clock divider (1-255)
    pub divider_int: u8,
    /// Fractional part of the clock divider in 1/16 steps
    pub divider_frac: u8,
    /// Counter wrap value (period is `top + 1` counts)
    pub top: u16,
}

impl Default for PwmConfig {
    fn default() -> Self {
        Self::BACKLIGHT
    }
}

impl PwmConfig {
    /// Full 16-bit range, undivided
    pub const BACKLIGHT: Self = Self {
        divider_int: 1,
        divider_frac: 0,
        top: 0xffff,
    };

    /// 8-bit samples paced by the counter wrap, ~44.1 kHz at 125 MHz
    pub const AUDIO_44K1: Self = Self {
        divider_int: 11,
        divider_frac: 1,
        top: 255,
    };

    /// Wrap frequency for a given system clock
    pub fn wrap_hz(&self, sys_clk_hz: u32) -> u32 {
        let div16 = (self.divider_int as u64) * 16 + self.divider_frac as u64;
        if div16 == 0 {
            return 0;
        }
        let counts = self.top as u64 + 1;
        ((sys_clk_hz as u64 * 16) / div16 / counts) as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrap_hz_undivided() {
        let cfg = PwmConfig {
            divider_int: 1,
            divider_frac: 0,
            top: 255,
        };
        // 125 MHz / 256
        assert_eq!(cfg.wrap_hz(125_000_000), 488_281);
    }

    #[test]
    fn test_wrap_hz_fractional_divider() {
        // 125 MHz * 16 / 177 / 256
        assert_eq!(PwmConfig::AUDIO_44K1.wrap_hz(125_000_000), 44_138);
    }

    #[test]
    fn test_zero_divider() {
        let cfg = PwmConfig {
            divider_int: 0,
            divider_frac: 0,
            top: 255,
        };
        assert_eq!(cfg.wrap_hz(125_000_000), 0);
    }
}
