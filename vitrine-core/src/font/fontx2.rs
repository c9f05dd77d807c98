//! FONTX2 font images
//!
//! ```text
//! 0..6    "FONTX2"
//! 6..14   font name
//! 14      glyph width
//! 15      glyph height
//! 16      code type: 0 single-byte, otherwise double-byte
//! 17..    single-byte: 256 glyphs
//! 17      double-byte: block count
//! 18..    double-byte: (start, end) code pairs, u16 little-endian, then glyphs
//! ```

use super::{Glyph, GlyphSource, ANK_4X8};

const SIGNATURE: &[u8; 6] = b"FONTX2";
const HEADER_LEN: usize = 17;

/// FONTX2 parse errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum FontError {
    /// Shorter than the fixed header or the block table
    TooShort,
    /// Missing the `FONTX2` signature
    BadSignature,
    /// Width or height of zero
    ZeroSize,
}

/// How glyphs are indexed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum CodeType {
    /// 256 glyphs indexed directly by an 8-bit code
    Single,
    /// Code blocks of a 16-bit encoding, `blocks` entries in the table
    Double { blocks: u8 },
}

/// A validated FONTX2 image
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FontX2<'f> {
    data: &'f [u8],
    width: u8,
    height: u8,
    code_type: CodeType,
}

impl FontX2<'static> {
    /// The built-in 4x8 ASCII font
    pub const BUILTIN: Self = Self {
        data: &ANK_4X8,
        width: 4,
        height: 8,
        code_type: CodeType::Single,
    };
}

impl<'f> FontX2<'f> {
    pub fn parse(data: &'f [u8]) -> Result<Self, FontError> {
        if data.len() < HEADER_LEN {
            return Err(FontError::TooShort);
        }
        if &data[..6] != SIGNATURE {
            return Err(FontError::BadSignature);
        }
        let width = data[14];
        let height = data[15];
        if width == 0 || height == 0 {
            return Err(FontError::ZeroSize);
        }

        let code_type = if data[16] == 0 {
            CodeType::Single
        } else {
            let blocks = *data.get(17).ok_or(FontError::TooShort)?;
            if data.len() < 18 + 4 * blocks as usize {
                return Err(FontError::TooShort);
            }
            CodeType::Double { blocks }
        };

        Ok(Self {
            data,
            width,
            height,
            code_type,
        })
    }

    pub fn width(&self) -> u8 {
        self.width
    }

    pub fn height(&self) -> u8 {
        self.height
    }

    pub fn code_type(&self) -> CodeType {
        self.code_type
    }

    /// Bytes per glyph
    pub fn glyph_size(&self) -> usize {
        (self.width as usize + 7) / 8 * self.height as usize
    }

    /// Byte offset of the glyph for `code`
    fn offset(&self, code: u16) -> Option<usize> {
        let size = self.glyph_size();
        match self.code_type {
            CodeType::Single => (code < 0x100).then(|| HEADER_LEN + code as usize * size),
            CodeType::Double { blocks } => {
                let table = &self.data[18..18 + 4 * blocks as usize];
                let mut skipped = 0usize;
                for entry in table.chunks_exact(4) {
                    let start = u16::from_le_bytes([entry[0], entry[1]]);
                    let end = u16::from_le_bytes([entry[2], entry[3]]);
                    if (start..=end).contains(&code) {
                        skipped += (code - start) as usize;
                        return Some(18 + table.len() + skipped * size);
                    }
                    skipped += end.wrapping_sub(start) as usize + 1;
                }
                None
            }
        }
    }
}

impl GlyphSource for FontX2<'_> {
    fn glyph(&self, code: u16) -> Option<Glyph<'_>> {
        let start = self.offset(code)?;
        let bytes = self.data.get(start..start + self.glyph_size())?;
        Some(Glyph {
            width: self.width,
            height: self.height,
            bytes,
        })
    }

    fn cell_size(&self) -> (u8, u8) {
        (self.width, self.height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::vec::Vec;

    /// Double-byte 8x2 font with blocks 0x8140..=0x8141 and 0x889f..=0x889f
    fn double_byte_font() -> Vec<u8> {
        let mut data = Vec::new();
        data.extend_from_slice(b"FONTX2");
        data.extend_from_slice(b"TESTFONT");
        data.extend_from_slice(&[8, 2, 1, 2]);
        data.extend_from_slice(&[0x40, 0x81, 0x41, 0x81]);
        data.extend_from_slice(&[0x9f, 0x88, 0x9f, 0x88]);
        data.extend_from_slice(&[0x11, 0x12, 0x21, 0x22, 0x31, 0x32]);
        data
    }

    #[test]
    fn test_builtin_matches_parse() {
        assert_eq!(FontX2::parse(&ANK_4X8), Ok(FontX2::BUILTIN));
        assert_eq!(FontX2::BUILTIN.glyph_size(), 8);
    }

    #[test]
    fn test_single_byte_lookup() {
        let font = FontX2::BUILTIN;
        let bar = font.glyph(u16::from(b'|')).unwrap();
        assert_eq!(bar.bytes, &[0x40, 0x40, 0x40, 0x40, 0x40, 0x40, 0x40, 0x00]);
        assert!(bar.pixel(1, 0));
        assert!(!bar.pixel(0, 0));
        assert!(!bar.pixel(1, 7));
        assert!(font.glyph(0x100).is_none());
    }

    #[test]
    fn test_double_byte_blocks() {
        let data = double_byte_font();
        let font = FontX2::parse(&data).unwrap();
        assert_eq!(font.code_type(), CodeType::Double { blocks: 2 });
        assert_eq!(font.glyph(0x8140).unwrap().bytes, &[0x11, 0x12]);
        assert_eq!(font.glyph(0x8141).unwrap().bytes, &[0x21, 0x22]);
        // Second block starts after the two glyphs of the first
        assert_eq!(font.glyph(0x889f).unwrap().bytes, &[0x31, 0x32]);
        assert!(font.glyph(0x8142).is_none());
        assert!(font.glyph(0x41).is_none());
    }

    #[test]
    fn test_rejects_bad_images() {
        assert_eq!(FontX2::parse(b"FONTX2"), Err(FontError::TooShort));

        let mut data = double_byte_font();
        data[0] = b'X';
        assert_eq!(FontX2::parse(&data), Err(FontError::BadSignature));

        let mut data = double_byte_font();
        data[15] = 0;
        assert_eq!(FontX2::parse(&data), Err(FontError::ZeroSize));

        let data = double_byte_font();
        assert_eq!(FontX2::parse(&data[..20]), Err(FontError::TooShort));
    }

    #[test]
    fn test_truncated_glyph_data() {
        let data = double_byte_font();
        let font = FontX2::parse(&data[..data.len() - 1]).unwrap();
        assert!(font.glyph(0x8140).is_some());
        assert!(font.glyph(0x889f).is_none());
    }
}
