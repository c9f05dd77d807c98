//! Glyph and text rendering onto a [`Canvas`]

use super::{Glyph, GlyphSource};
use crate::canvas::Canvas;
use crate::color::Rgb565;
use crate::text::{TextBoxId, TextLog};

const TAB: u8 = 0x09;
const BACKSPACE: u8 = 0x08;
const DEL: u8 = 0x7f;
const LINE_FEED: u8 = b'\n';
/// Console new-line code
const NEW_LINE: u8 = 0x10;

/// Where the next character would go, in text cells
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TextCursor {
    pub col: i32,
    pub line: i32,
}

/// Plot the set bits of `glyph` with its top-left corner at `(x, y)`
///
/// Pixels falling outside the canvas are clipped.
pub fn draw_glyph(canvas: &mut Canvas<'_>, glyph: &Glyph<'_>, x: i32, y: i32, color: Rgb565) {
    for gy in 0..glyph.height {
        for gx in 0..glyph.width {
            if glyph.pixel(gx, gy) {
                canvas.draw_pixel(x + i32::from(gx), y + i32::from(gy), color);
            }
        }
    }
}

/// Lay `text` out in cells starting at `(x, y)` and draw it
///
/// Printable ASCII draws a glyph and advances one cell. Tab advances two
/// cells, DEL and backspace advance nothing, `\n` and `0x10` start a new
/// line, other control bytes advance one cell. Multi-byte UTF-8 sequences
/// advance two cells without drawing. A sequence cut short by the end of
/// the text stops rendering.
pub fn draw_text<G: GlyphSource + ?Sized>(
    canvas: &mut Canvas<'_>,
    font: &G,
    x: i32,
    y: i32,
    text: &[u8],
    color: Rgb565,
) -> TextCursor {
    let (cell_w, cell_h) = font.cell_size();
    let (cell_w, cell_h) = (i32::from(cell_w), i32::from(cell_h));
    let mut cursor = TextCursor::default();

    let mut i = 0;
    while i < text.len() {
        let c = text[i];
        match c {
            0x20..=0x7e => {
                if let Some(glyph) = font.glyph(u16::from(c)) {
                    let px = x + cursor.col * cell_w;
                    let py = y + cursor.line * cell_h;
                    draw_glyph(canvas, &glyph, px, py, color);
                }
                cursor.col += 1;
            }
            DEL | BACKSPACE => {}
            TAB => cursor.col += 2,
            LINE_FEED | NEW_LINE => {
                cursor.col = 0;
                cursor.line += 1;
            }
            0x00..=0x7f => cursor.col += 1,
            _ => {
                let trailing = match c {
                    0xc2..=0xdf => 1,
                    0xe0..=0xef => 2,
                    0xf0..=0xf4 => 3,
                    _ => 1,
                };
                if i + trailing >= text.len() {
                    break;
                }
                i += trailing;
                cursor.col += 2;
            }
        }
        i += 1;
    }
    cursor
}

/// Draw the rows of one text box, oldest at the top, `row_step` pixels
/// apart
#[allow(clippy::too_many_arguments)]
pub fn render_text_log<G, const B: usize, const L: usize, const W: usize>(
    canvas: &mut Canvas<'_>,
    log: &TextLog<B, L, W>,
    id: TextBoxId,
    font: &G,
    x: i32,
    y: i32,
    row_step: i32,
    color: Rgb565,
) where
    G: GlyphSource + ?Sized,
{
    let mut row_y = y;
    for row in log.rows(id) {
        draw_text(canvas, font, x, row_y, row, color);
        row_y += row_step;
    }
}
