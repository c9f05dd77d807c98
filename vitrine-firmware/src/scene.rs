//! Demo scene drawn every frame

use vitrine_core::{Canvas, Rgb565};

/// Frames a touch ring keeps growing
const POINTER_FRAMES: u16 = 16;

/// Ring drawn where a touch started, growing for a few frames
pub struct CirclePointer {
    x: i32,
    y: i32,
    r: i32,
    frame: u16,
    active: bool,
    color: Rgb565,
}

impl CirclePointer {
    pub const fn new(color: Rgb565) -> Self {
        Self {
            x: 0,
            y: 0,
            r: 0,
            frame: 0,
            active: false,
            color,
        }
    }

    /// Advance one frame with the first touch point, if any
    ///
    /// Returns `true` when a new ring starts. Touches are ignored while a
    /// ring is still growing.
    pub fn update(&mut self, touch: Option<(u16, u16)>) -> bool {
        if self.active {
            self.frame += 1;
            if self.frame < POINTER_FRAMES {
                self.r += 2;
            } else {
                self.active = false;
            }
            return false;
        }

        match touch {
            Some((x, y)) => {
                self.x = i32::from(x);
                self.y = i32::from(y);
                self.r = 1;
                self.frame = 0;
                self.active = true;
                true
            }
            None => false,
        }
    }

    pub fn render(&self, canvas: &mut Canvas<'_>) {
        if self.active {
            canvas.draw_circle(self.x, self.y, self.r, self.color);
        }
    }
}

/// Grid, diagonals and the two pulsing circles
pub fn draw(canvas: &mut Canvas<'_>, frame: u32) {
    let red = Rgb565::RED;

    canvas.draw_line(0, 0, 239, 319, red);
    canvas.draw_line(239, 0, 0, 319, red);

    for x in [0, 100, 200] {
        canvas.draw_line(x, 0, x, 319, red);
    }
    for y in [0, 100, 200, 300] {
        canvas.draw_line(0, y, 239, y, red);
    }

    let ring = (frame % 30) as i32 + 1;
    canvas.draw_circle(100, 100, ring, Rgb565::GREEN);

    let pulse = (frame % 20) as u8;
    let shade = 0x0f + pulse * 10;
    canvas.draw_fill_circle(
        200,
        200,
        i32::from(pulse) + 1,
        Rgb565::from_rgb888(shade, shade, 0xff),
    );
}
