//! Bitmap fonts and text rendering
//!
//! Glyphs are 1 bit per pixel, rows padded to whole bytes, most significant
//! bit leftmost. [`FontX2`] reads them out of a FONTX2 image; the renderer
//! only needs the [`GlyphSource`] trait.

mod ank4x8;
mod fontx2;
mod render;

pub use ank4x8::ANK_4X8;
pub use fontx2::{CodeType, FontError, FontX2};
pub use render::{draw_glyph, draw_text, render_text_log, TextCursor};

/// One glyph bitmap borrowed from a font image
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Glyph<'f> {
    pub width: u8,
    pub height: u8,
    pub bytes: &'f [u8],
}

impl Glyph<'_> {
    /// Bytes per bitmap row
    pub const fn row_bytes(&self) -> usize {
        (self.width as usize + 7) / 8
    }

    /// Whether the pixel at `(x, y)` is set; `false` outside the glyph
    pub fn pixel(&self, x: u8, y: u8) -> bool {
        if x >= self.width || y >= self.height {
            return false;
        }
        let index = y as usize * self.row_bytes() + (x as usize >> 3);
        self.bytes
            .get(index)
            .is_some_and(|byte| byte & (0x80 >> (x & 7)) != 0)
    }
}

/// Anything that can look up glyph bitmaps by character code
pub trait GlyphSource {
    /// Bitmap for `code`, or `None` when the font has no such glyph
    fn glyph(&self, code: u16) -> Option<Glyph<'_>>;

    /// Width and height of one text cell in pixels
    fn cell_size(&self) -> (u8, u8);
}
