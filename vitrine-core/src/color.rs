//! Packed 16-bit color

/// RGB565 color, red in the high bits
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rgb565(pub u16);

impl Rgb565 {
    pub const BLACK: Self = Self(0x0000);
    pub const WHITE: Self = Self(0xffff);
    pub const RED: Self = Self::from_rgb888(0xff, 0, 0);
    pub const GREEN: Self = Self::from_rgb888(0, 0xff, 0);
    pub const BLUE: Self = Self::from_rgb888(0, 0, 0xff);
    /// Background grey of the demo scene
    pub const GREY: Self = Self::from_rgb888(0x90, 0x90, 0x90);

    /// Truncate an 8-bit-per-channel color to 5-6-5
    pub const fn from_rgb888(r: u8, g: u8, b: u8) -> Self {
        Self(((r as u16 & 0xf8) << 8) | ((g as u16 & 0xfc) << 3) | ((b as u16) >> 3))
    }

    /// Same as [`Rgb565::from_rgb888`] with the channels packed as 0xRRGGBB
    pub const fn from_hex(rgb: u32) -> Self {
        Self::from_rgb888((rgb >> 16) as u8, (rgb >> 8) as u8, rgb as u8)
    }

    pub const fn raw(self) -> u16 {
        self.0
    }

    /// Expand back to 8 bits per channel (low bits zero)
    pub const fn to_rgb888(self) -> (u8, u8, u8) {
        let r = ((self.0 >> 8) & 0xf8) as u8;
        let g = ((self.0 >> 3) & 0xfc) as u8;
        let b = ((self.0 << 3) & 0xf8) as u8;
        (r, g, b)
    }
}

impl From<Rgb565> for u16 {
    fn from(c: Rgb565) -> u16 {
        c.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_primaries() {
        assert_eq!(Rgb565::RED.raw(), 0xf800);
        assert_eq!(Rgb565::GREEN.raw(), 0x07e0);
        assert_eq!(Rgb565::BLUE.raw(), 0x001f);
        assert_eq!(Rgb565::from_rgb888(0xff, 0xff, 0xff), Rgb565::WHITE);
    }

    #[test]
    fn test_truncates_low_bits() {
        // 0x90 = 1001_0000 keeps 10010 for red/blue and 100100 for green
        let grey = Rgb565::from_rgb888(0x90, 0x90, 0x90);
        assert_eq!(grey.raw(), (0b10010 << 11) | (0b100100 << 5) | 0b10010);
        assert_eq!(Rgb565::from_hex(0x909090), grey);
    }

    #[test]
    fn test_to_rgb888() {
        assert_eq!(Rgb565::from_rgb888(0x90, 0x94, 0x18).to_rgb888(), (0x90, 0x94, 0x18));
    }
}
