//! Built-in 4x8 ASCII font (FONTX2, single-byte)

/// FONTX2 image: 17-byte header followed by 256 glyphs of 8 bytes
#[rustfmt::skip]
pub const ANK_4X8: [u8; 2065] = [
    0x46, 0x4f, 0x4e, 0x54, 0x58, 0x32, 0x34, 0x58, 0x38, 0x20, 0x20, 0x20, 0x20, 0x20, 0x04, 0x08,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0xf0, 0x80, 0xb0, 0xa0, 0xa0, 0xa0,
    0x00, 0x00, 0xe0, 0x20, 0xa0, 0xa0, 0xa0, 0xa0, 0xa0, 0xa0, 0xb0, 0x80, 0xf0, 0x00, 0x00, 0x00,
    0xa0, 0xa0, 0xa0, 0x20, 0xe0, 0x00, 0x00, 0x00, 0xa0, 0xa0, 0xa0, 0xa0, 0xa0, 0xa0, 0xa0, 0xa0,
    0x00, 0x00, 0xf0, 0x00, 0xf0, 0x00, 0x00, 0x00, 0x40, 0x40, 0x40, 0x40, 0x40, 0xe0, 0x40, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x40, 0xa0, 0xa0, 0xa0, 0x40, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0xe0, 0xa0, 0xe0, 0xe0, 0xe0, 0xa0, 0xe0, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0xe0, 0xe0, 0xe0, 0x00, 0x00, 0x00, 0x00, 0xa0, 0x40, 0xa0, 0x40, 0xa0, 0x00, 0x00,
    0xa0, 0xa0, 0xb0, 0x00, 0xb0, 0xa0, 0xa0, 0xa0, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x40, 0xe0, 0x40, 0x40, 0x40, 0xe0, 0x40, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0xa0, 0x50, 0xa0, 0x50, 0xa0, 0x50, 0xa0, 0x50, 0xa0, 0xa0, 0xb0, 0x00, 0xf0, 0x00, 0x00, 0x00,
    0x00, 0x00, 0xf0, 0x00, 0xb0, 0xa0, 0xa0, 0xa0, 0xa0, 0xa0, 0xa0, 0x20, 0xa0, 0xa0, 0xa0, 0xa0,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0xa0, 0xa0, 0xb0, 0x80, 0xb0, 0xa0, 0xa0, 0xa0,
    0xa0, 0x00, 0x50, 0x00, 0xa0, 0x00, 0x50, 0x00, 0x00, 0x20, 0x20, 0x20, 0x60, 0xe0, 0x00, 0x00,
    0x40, 0xe0, 0x40, 0x40, 0x40, 0x40, 0x40, 0x00, 0x40, 0x40, 0x40, 0x40, 0x40, 0x40, 0x40, 0x40,
    0x00, 0x80, 0x40, 0xe0, 0x40, 0x80, 0x00, 0x00, 0x00, 0x20, 0x40, 0xe0, 0x40, 0x20, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x40, 0x40, 0x40, 0x40, 0x00, 0x40, 0x00,
    0x00, 0xa0, 0xa0, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0xa0, 0xe0, 0xa0, 0xa0, 0xe0, 0xa0, 0x00,
    0x00, 0x40, 0xe0, 0xc0, 0x60, 0xe0, 0x40, 0x00, 0x00, 0x00, 0x80, 0x20, 0x40, 0x80, 0x20, 0x00,
    0x00, 0x40, 0xa0, 0x40, 0x60, 0xc0, 0xe0, 0x00, 0x00, 0x40, 0x80, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x20, 0x40, 0x40, 0x40, 0x40, 0x40, 0x20, 0x00, 0x80, 0x40, 0x40, 0x40, 0x40, 0x40, 0x80,
    0x00, 0x40, 0xe0, 0x40, 0xa0, 0x00, 0x00, 0x00, 0x00, 0x00, 0x40, 0x40, 0xe0, 0x40, 0x40, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x40, 0x80, 0x00, 0x00, 0x00, 0x00, 0xe0, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x40, 0x00, 0x00, 0x00, 0x00, 0x20, 0x40, 0x80, 0x00, 0x00,
    0x00, 0x00, 0x40, 0xa0, 0xe0, 0xa0, 0x40, 0x00, 0x00, 0x00, 0x40, 0xc0, 0x40, 0x40, 0xe0, 0x00,
    0x00, 0x00, 0xc0, 0x20, 0x40, 0x80, 0xe0, 0x00, 0x00, 0x00, 0xc0, 0x20, 0x40, 0x20, 0xc0, 0x00,
    0x00, 0x00, 0x20, 0x60, 0xa0, 0xe0, 0x20, 0x00, 0x00, 0x00, 0xe0, 0x80, 0xc0, 0x20, 0xc0, 0x00,
    0x00, 0x00, 0x60, 0x80, 0xc0, 0xa0, 0x40, 0x00, 0x00, 0x00, 0xe0, 0x20, 0x40, 0x40, 0x40, 0x00,
    0x00, 0x00, 0x40, 0xa0, 0x40, 0xa0, 0x40, 0x00, 0x00, 0x00, 0x40, 0xa0, 0x60, 0x20, 0xc0, 0x00,
    0x00, 0x00, 0x00, 0x40, 0x00, 0x00, 0x40, 0x00, 0x00, 0x00, 0x00, 0x40, 0x00, 0x00, 0x40, 0x80,
    0x00, 0x00, 0x20, 0x40, 0x80, 0x40, 0x20, 0x00, 0x00, 0x00, 0x00, 0xe0, 0x00, 0xe0, 0x00, 0x00,
    0x00, 0x00, 0x80, 0x40, 0x20, 0x40, 0x80, 0x00, 0x00, 0x40, 0xa0, 0x20, 0x40, 0x00, 0x40, 0x00,
    0x00, 0x40, 0xa0, 0x20, 0x60, 0xa0, 0x40, 0x00, 0x00, 0x40, 0xa0, 0xa0, 0xe0, 0xa0, 0xa0, 0x00,
    0x00, 0xc0, 0xa0, 0xc0, 0xa0, 0xa0, 0xc0, 0x00, 0x00, 0x60, 0x80, 0x80, 0x80, 0x80, 0x60, 0x00,
    0x00, 0xc0, 0xa0, 0xa0, 0xa0, 0xa0, 0xc0, 0x00, 0x00, 0xe0, 0x80, 0xc0, 0x80, 0x80, 0xe0, 0x00,
    0x00, 0xe0, 0x80, 0xc0, 0x80, 0x80, 0x80, 0x00, 0x00, 0x60, 0x80, 0x80, 0xa0, 0xa0, 0x60, 0x00,
    0x00, 0xa0, 0xa0, 0xa0, 0xe0, 0xa0, 0xa0, 0x00, 0x00, 0xe0, 0x40, 0x40, 0x40, 0x40, 0xe0, 0x00,
    0x00, 0x20, 0x20, 0x20, 0x20, 0xa0, 0x40, 0x00, 0x00, 0xa0, 0xa0, 0xc0, 0xa0, 0xa0, 0xa0, 0x00,
    0x00, 0x80, 0x80, 0x80, 0x80, 0x80, 0xe0, 0x00, 0x00, 0xa0, 0xe0, 0xe0, 0xa0, 0xa0, 0xa0, 0x00,
    0x00, 0xc0, 0xa0, 0xa0, 0xa0, 0xa0, 0xa0, 0x00, 0x00, 0x40, 0xa0, 0xa0, 0xa0, 0xa0, 0x40, 0x00,
    0x00, 0xc0, 0xa0, 0xa0, 0xc0, 0x80, 0x80, 0x00, 0x00, 0x40, 0xa0, 0xa0, 0xa0, 0xa0, 0x40, 0x20,
    0x00, 0xc0, 0xa0, 0xa0, 0xc0, 0xa0, 0xa0, 0x00, 0x00, 0x60, 0x80, 0x40, 0x20, 0x20, 0xc0, 0x00,
    0x00, 0xe0, 0x40, 0x40, 0x40, 0x40, 0x40, 0x00, 0x00, 0xa0, 0xa0, 0xa0, 0xa0, 0xa0, 0xe0, 0x00,
    0x00, 0xa0, 0xa0, 0xa0, 0xa0, 0xc0, 0x80, 0x00, 0x00, 0xa0, 0xa0, 0xa0, 0xe0, 0xe0, 0xa0, 0x00,
    0x00, 0xa0, 0xa0, 0x40, 0x40, 0xa0, 0xa0, 0x00, 0x00, 0xa0, 0xa0, 0x40, 0x40, 0x40, 0x40, 0x00,
    0x00, 0xe0, 0x20, 0x40, 0x40, 0x80, 0xe0, 0x00, 0x00, 0x60, 0x40, 0x40, 0x40, 0x40, 0x40, 0x60,
    0x00, 0xa0, 0x40, 0xe0, 0x40, 0xe0, 0x40, 0x00, 0x00, 0xc0, 0x40, 0x40, 0x40, 0x40, 0x40, 0xc0,
    0x00, 0x40, 0xa0, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0xe0,
    0x00, 0x40, 0x20, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x60, 0xa0, 0xa0, 0x60, 0x00,
    0x00, 0x80, 0x80, 0xc0, 0xa0, 0xa0, 0xc0, 0x00, 0x00, 0x00, 0x00, 0x60, 0x80, 0x80, 0x60, 0x00,
    0x00, 0x20, 0x20, 0x60, 0xa0, 0xa0, 0x60, 0x00, 0x00, 0x00, 0x00, 0x60, 0xe0, 0x80, 0x60, 0x00,
    0x00, 0x60, 0x40, 0xe0, 0x40, 0x40, 0x40, 0x00, 0x00, 0x00, 0x00, 0x60, 0xa0, 0x60, 0x20, 0xc0,
    0x00, 0x80, 0x80, 0xc0, 0xa0, 0xa0, 0xa0, 0x00, 0x00, 0x40, 0x00, 0x40, 0x40, 0x40, 0x40, 0x00,
    0x00, 0x40, 0x00, 0x40, 0x40, 0x40, 0x40, 0x80, 0x00, 0x80, 0x80, 0xa0, 0xc0, 0xa0, 0xa0, 0x00,
    0x00, 0xc0, 0x40, 0x40, 0x40, 0x40, 0x40, 0x00, 0x00, 0x00, 0x00, 0xc0, 0xe0, 0xe0, 0xa0, 0x00,
    0x00, 0x00, 0x00, 0xc0, 0xa0, 0xa0, 0xa0, 0x00, 0x00, 0x00, 0x00, 0x40, 0xa0, 0xa0, 0x40, 0x00,
    0x00, 0x00, 0x00, 0xc0, 0xa0, 0xa0, 0xc0, 0x80, 0x00, 0x00, 0x00, 0x60, 0xa0, 0xa0, 0x60, 0x20,
    0x00, 0x00, 0x00, 0xa0, 0xc0, 0x80, 0x80, 0x00, 0x00, 0x00, 0x00, 0x60, 0xc0, 0x60, 0xc0, 0x00,
    0x00, 0x00, 0x40, 0xe0, 0x40, 0x40, 0x60, 0x00, 0x00, 0x00, 0x00, 0xa0, 0xa0, 0xa0, 0xe0, 0x00,
    0x00, 0x00, 0x00, 0xa0, 0xa0, 0xc0, 0x80, 0x00, 0x00, 0x00, 0x00, 0xa0, 0xa0, 0xe0, 0xe0, 0x00,
    0x00, 0x00, 0x00, 0xa0, 0x40, 0x40, 0xa0, 0x00, 0x00, 0x00, 0x00, 0xa0, 0xa0, 0x60, 0x20, 0xc0,
    0x00, 0x00, 0x00, 0xe0, 0x20, 0x40, 0xe0, 0x00, 0x00, 0x20, 0x40, 0x40, 0x80, 0x40, 0x40, 0x20,
    0x00, 0x40, 0x40, 0x40, 0x40, 0x40, 0x40, 0x40, 0x00, 0x80, 0x40, 0x40, 0x20, 0x40, 0x40, 0x80,
    0x00, 0xe0, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x40, 0xa0, 0x40, 0x00,
    0x00, 0xe0, 0x80, 0x80, 0x80, 0x80, 0x00, 0x00, 0x00, 0x00, 0x20, 0x20, 0x20, 0x20, 0xe0, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x80, 0x40, 0x00, 0x00, 0x00, 0x00, 0x00, 0x40, 0x00, 0x00, 0x00,
    0x00, 0xe0, 0x20, 0xe0, 0x20, 0x40, 0x80, 0x00, 0x00, 0x00, 0x00, 0xe0, 0x60, 0x40, 0x80, 0x00,
    0x00, 0x00, 0x00, 0x20, 0x40, 0xc0, 0x40, 0x00, 0x00, 0x00, 0x00, 0x40, 0xe0, 0xa0, 0x20, 0x00,
    0x00, 0x00, 0x00, 0x00, 0xe0, 0x40, 0xe0, 0x00, 0x00, 0x00, 0x00, 0x20, 0xe0, 0x60, 0xa0, 0x00,
    0x00, 0x00, 0x00, 0x40, 0xe0, 0x60, 0x40, 0x00, 0x00, 0x00, 0x00, 0x00, 0xc0, 0x40, 0xe0, 0x00,
    0x00, 0x00, 0x00, 0xe0, 0x60, 0x20, 0xe0, 0x00, 0x00, 0x00, 0x00, 0xe0, 0xe0, 0x20, 0xc0, 0x00,
    0x00, 0x00, 0x00, 0x80, 0x60, 0x00, 0x00, 0x00, 0x00, 0xe0, 0x20, 0x60, 0x40, 0x40, 0x80, 0x00,
    0x00, 0x20, 0x20, 0x40, 0xc0, 0x40, 0x40, 0x00, 0x00, 0x40, 0xe0, 0xa0, 0x20, 0x20, 0x40, 0x00,
    0x00, 0x00, 0xe0, 0x40, 0x40, 0x40, 0xe0, 0x00, 0x00, 0x20, 0xe0, 0x20, 0x60, 0xa0, 0x20, 0x00,
    0x00, 0x40, 0xe0, 0x60, 0x60, 0xa0, 0xa0, 0x00, 0x00, 0x40, 0xe0, 0x40, 0xe0, 0x40, 0x40, 0x00,
    0x00, 0x40, 0x60, 0xa0, 0x20, 0x40, 0x80, 0x00, 0x00, 0x80, 0xe0, 0xc0, 0x40, 0x40, 0x80, 0x00,
    0x00, 0x00, 0xe0, 0x20, 0x20, 0x20, 0xe0, 0x00, 0x00, 0xa0, 0xe0, 0xa0, 0x20, 0x40, 0x80, 0x00,
    0x00, 0xc0, 0x00, 0xc0, 0x00, 0x20, 0xc0, 0x00, 0x00, 0xe0, 0x20, 0x20, 0x40, 0x40, 0xa0, 0x00,
    0x00, 0x80, 0xe0, 0xa0, 0xa0, 0x80, 0xe0, 0x00, 0x00, 0xa0, 0x60, 0x60, 0x20, 0x40, 0x80, 0x00,
    0x00, 0x40, 0x60, 0xa0, 0x60, 0x40, 0x80, 0x00, 0x00, 0xe0, 0x40, 0xe0, 0x40, 0x40, 0x80, 0x00,
    0x00, 0x00, 0xe0, 0xe0, 0x20, 0x20, 0xc0, 0x00, 0x00, 0xe0, 0x00, 0xe0, 0x40, 0x40, 0x80, 0x00,
    0x00, 0x80, 0x80, 0xc0, 0xa0, 0x80, 0x80, 0x00, 0x00, 0x40, 0x40, 0xe0, 0x40, 0x40, 0x80, 0x00,
    0x00, 0x00, 0x60, 0x00, 0x00, 0x00, 0xe0, 0x00, 0x00, 0xe0, 0x20, 0xa0, 0x40, 0x40, 0xa0, 0x00,
    0x00, 0x40, 0xe0, 0x20, 0x40, 0xe0, 0x40, 0x00, 0x00, 0x20, 0x20, 0x20, 0x20, 0x40, 0x80, 0x00,
    0x00, 0x40, 0x20, 0xa0, 0xa0, 0xa0, 0xa0, 0x00, 0x00, 0x80, 0x80, 0xe0, 0x80, 0x80, 0x60, 0x00,
    0x00, 0xe0, 0x20, 0x20, 0x20, 0x40, 0x80, 0x00, 0x00, 0x40, 0x40, 0xa0, 0xa0, 0x20, 0x00, 0x00,
    0x00, 0x40, 0xe0, 0x40, 0xe0, 0xe0, 0x40, 0x00, 0x00, 0xe0, 0x20, 0x20, 0xc0, 0x40, 0x20, 0x00,
    0x00, 0x00, 0xe0, 0x00, 0x60, 0x00, 0xe0, 0x00, 0x00, 0x40, 0x40, 0x40, 0x80, 0xa0, 0xe0, 0x00,
    0x00, 0x20, 0xa0, 0x40, 0x40, 0xa0, 0x80, 0x00, 0x00, 0xe0, 0x40, 0xe0, 0x40, 0x40, 0x60, 0x00,
    0x00, 0x40, 0xe0, 0x60, 0x60, 0x40, 0x40, 0x00, 0x00, 0xc0, 0x40, 0x40, 0x40, 0x40, 0xe0, 0x00,
    0x00, 0xe0, 0x20, 0xe0, 0x20, 0x20, 0xe0, 0x00, 0x00, 0xe0, 0x00, 0xe0, 0x20, 0x20, 0xc0, 0x00,
    0x00, 0xa0, 0xa0, 0xa0, 0x20, 0x20, 0x40, 0x00, 0x00, 0x40, 0x40, 0xc0, 0xc0, 0xc0, 0xe0, 0x00,
    0x00, 0x80, 0x80, 0x80, 0x80, 0xa0, 0xc0, 0x00, 0x00, 0x00, 0xe0, 0xa0, 0xa0, 0xa0, 0xe0, 0x00,
    0x00, 0xe0, 0xa0, 0x20, 0x20, 0x40, 0x80, 0x00, 0x00, 0xc0, 0x00, 0x00, 0x20, 0x20, 0xc0, 0x00,
    0x00, 0xa0, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x40, 0xa0, 0x40, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00,
];
