//! Pixel buffer with stride
//!
//! A [`Canvas`] borrows a caller-owned RGB565 buffer and draws into it. It
//! never allocates. Every primitive funnels through the bounds check behind
//! [`Canvas::draw_pixel`], which rejects coordinates outside `width x height`.
//! Geometry is computed in 64 bits, so any `i32` input is safe. Lines and
//! circles that cross an edge are clipped point by point and padding columns
//! (`width..stride`) are never written.

use crate::color::Rgb565;

/// Canvas construction errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum CanvasError {
    /// `stride` is smaller than `width`
    StrideTooSmall,
    /// Buffer cannot hold the requested geometry
    BufferTooSmall,
    /// Rows are padded, so the buffer cannot be streamed as one window
    NotContiguous,
}

/// RGB565 drawing surface over a borrowed buffer
pub struct Canvas<'a> {
    buf: &'a mut [u16],
    width: u16,
    height: u16,
    stride: u16,
}

impl<'a> Canvas<'a> {
    /// Bind a geometry to an externally owned buffer
    ///
    /// `stride` is the distance between rows in pixels.
    pub fn new(buf: &'a mut [u16], width: u16, height: u16, stride: u16) -> Result<Self, CanvasError> {
        if stride < width {
            return Err(CanvasError::StrideTooSmall);
        }
        if buf.len() < Self::required_len(width, height, stride) {
            return Err(CanvasError::BufferTooSmall);
        }
        Ok(Self {
            buf,
            width,
            height,
            stride,
        })
    }

    /// Carve the two canvases of a double buffer out of one frame arena
    pub fn split_arena(
        arena: &'a mut [u16],
        width: u16,
        height: u16,
        stride: u16,
    ) -> Result<(Canvas<'a>, Canvas<'a>), CanvasError> {
        if stride < width {
            return Err(CanvasError::StrideTooSmall);
        }
        let frame = stride as usize * height as usize;
        if arena.len() < frame * 2 {
            return Err(CanvasError::BufferTooSmall);
        }
        let (first, rest) = arena.split_at_mut(frame);
        let second = &mut rest[..frame];
        Ok((
            Canvas::new(first, width, height, stride)?,
            Canvas::new(second, width, height, stride)?,
        ))
    }

    /// Pixels needed to hold `height` rows of `width` at `stride`
    pub const fn required_len(width: u16, height: u16, stride: u16) -> usize {
        if width == 0 || height == 0 {
            0
        } else {
            (height as usize - 1) * stride as usize + width as usize
        }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    pub fn stride(&self) -> u16 {
        self.stride
    }

    /// True when rows follow each other with no padding
    pub fn is_contiguous(&self) -> bool {
        self.stride == self.width
    }

    /// The drawn region as one slice, for handing to a transfer
    pub fn pixels(&self) -> &[u16] {
        &self.buf[..Self::required_len(self.width, self.height, self.stride)]
    }

    /// Fill every visible pixel, leaving padding columns alone
    pub fn clear(&mut self, color: Rgb565) {
        let width = self.width as usize;
        let stride = self.stride as usize;
        for row in 0..self.height as usize {
            let start = row * stride;
            self.buf[start..start + width].fill(color.raw());
        }
    }

    /// Write one pixel; returns `false` (and writes nothing) when out of bounds
    #[inline]
    pub fn draw_pixel(&mut self, x: i32, y: i32, color: Rgb565) -> bool {
        self.plot(x.into(), y.into(), color)
    }

    /// Read one pixel back
    pub fn pixel(&self, x: i32, y: i32) -> Option<Rgb565> {
        self.index(x.into(), y.into()).map(|i| Rgb565(self.buf[i]))
    }

    /// Integer Bresenham line, both endpoints included
    ///
    /// Steps whose major-axis coordinate falls outside the canvas are skipped
    /// without being walked, so far off-canvas endpoints cost no more than the
    /// visible part of the line.
    pub fn draw_line(&mut self, x1: i32, y1: i32, x2: i32, y2: i32, color: Rgb565) {
        self.line(x1.into(), y1.into(), x2.into(), y2.into(), color);
    }

    /// Midpoint circle outline
    pub fn draw_circle(&mut self, x: i32, y: i32, r: i32, color: Rgb565) {
        let (x, y, r) = (i64::from(x), i64::from(y), i64::from(r));
        if r < 0 || !self.touches_box(x, y, r) {
            return;
        }
        if r == 0 {
            self.plot(x, y, color);
            return;
        }

        self.plot(x, y - r, color);
        self.plot(x, y + r, color);
        self.plot(x + r, y, color);
        self.plot(x - r, y, color);

        for (cx, cy) in CircleWalk::new(r) {
            self.plot(x + cx, y + cy, color);
            self.plot(x + cx, y - cy, color);
            self.plot(x - cx, y - cy, color);
            self.plot(x - cx, y + cy, color);

            self.plot(x + cy, y + cx, color);
            self.plot(x + cy, y - cx, color);
            self.plot(x - cy, y - cx, color);
            self.plot(x - cy, y + cx, color);
        }
    }

    /// Solid circle: cardinal points, the horizontal diameter, then four
    /// horizontal spans per step of the midpoint walk
    pub fn draw_fill_circle(&mut self, x: i32, y: i32, r: i32, color: Rgb565) {
        let (x, y, r) = (i64::from(x), i64::from(y), i64::from(r));
        if r < 0 || !self.touches_box(x, y, r) {
            return;
        }
        if r == 0 {
            self.plot(x, y, color);
            return;
        }

        self.plot(x, y - r, color);
        self.plot(x, y + r, color);
        self.plot(x + r, y, color);
        self.plot(x - r, y, color);
        self.line(x - r, y, x + r, y, color);

        for (cx, cy) in CircleWalk::new(r) {
            // Spans on rows outside the canvas draw nothing
            if (0..i64::from(self.height)).contains(&(y + cy)) {
                self.line(x - cx, y + cy, x + cx, y + cy, color);
            }
            if (0..i64::from(self.height)).contains(&(y - cy)) {
                self.line(x - cx, y - cy, x + cx, y - cy, color);
            }
            if (0..i64::from(self.height)).contains(&(y + cx)) {
                self.line(x - cy, y + cx, x + cy, y + cx, color);
            }
            if (0..i64::from(self.height)).contains(&(y - cx)) {
                self.line(x - cy, y - cx, x + cy, y - cx, color);
            }
        }
    }

    #[inline]
    fn plot(&mut self, x: i64, y: i64, color: Rgb565) -> bool {
        match self.index(x, y) {
            Some(i) => {
                self.buf[i] = color.raw();
                true
            }
            None => false,
        }
    }

    #[inline]
    fn index(&self, x: i64, y: i64) -> Option<usize> {
        if x < 0 || y < 0 || x >= i64::from(self.width) || y >= i64::from(self.height) {
            return None;
        }
        Some(y as usize * self.stride as usize + x as usize)
    }

    /// The square bounding a circle of radius `r` overlaps the canvas
    fn touches_box(&self, x: i64, y: i64, r: i64) -> bool {
        x + r >= 0 && y + r >= 0 && x - r < i64::from(self.width) && y - r < i64::from(self.height)
    }

    fn line(&mut self, x1: i64, y1: i64, x2: i64, y2: i64, color: Rgb565) {
        let dx = (x2 - x1).abs();
        let dy = (y2 - y1).abs();
        let sx = if x2 >= x1 { 1 } else { -1 };
        let sy = if y2 >= y1 { 1 } else { -1 };
        let x_major = dx > dy;
        let (major, minor) = if x_major { (dx, dy) } else { (dy, dx) };
        if major == 0 {
            self.plot(x1, y1, color);
            return;
        }

        let (a1, b1, sa, sb, extent) = if x_major {
            (x1, y1, sx, sy, i64::from(self.width))
        } else {
            (y1, x1, sy, sx, i64::from(self.height))
        };

        // Range of steps that land on the canvas along the major axis
        let (first, last) = if sa > 0 {
            (-a1, extent - 1 - a1)
        } else {
            (a1 - (extent - 1), a1)
        };
        let first = first.max(0);
        let last = last.min(major);
        if first > last {
            return;
        }

        // Error term after `first` steps. It always sits in [-2*major, 0),
        // which fixes the number of minor steps taken so far.
        let taken = (i128::from(major) + 2 * i128::from(minor) * i128::from(first))
            / (2 * i128::from(major));
        let mut err = (i128::from(minor) * i128::from(first) * 2
            - i128::from(major)
            - 2 * i128::from(major) * taken) as i64;
        let mut a = a1 + sa * first;
        let mut b = b1 + sb * taken as i64;

        for _ in first..=last {
            if x_major {
                self.plot(a, b, color);
            } else {
                self.plot(b, a, color);
            }
            err += 2 * minor;
            if err >= 0 {
                b += sb;
                err -= 2 * major;
            }
            a += sa;
        }
    }
}

/// One octant of the midpoint circle, starting just past the cardinal point
struct CircleWalk {
    cx: i64,
    cy: i64,
    acc: i64,
}

impl CircleWalk {
    fn new(r: i64) -> Self {
        Self { cx: r, cy: 0, acc: r }
    }
}

impl Iterator for CircleWalk {
    type Item = (i64, i64);

    fn next(&mut self) -> Option<(i64, i64)> {
        if self.cx < self.cy {
            return None;
        }
        self.acc -= 2 * self.cy + 1;
        self.cy += 1;
        if self.acc < 0 {
            self.acc += 2 * self.cx - 1;
            self.cx -= 1;
        }
        Some((self.cx, self.cy))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::vec;
    use std::vec::Vec;

    const C: Rgb565 = Rgb565::RED;

    fn colored(canvas: &Canvas) -> Vec<(i32, i32)> {
        let mut out = Vec::new();
        for y in 0..canvas.height() as i32 {
            for x in 0..canvas.width() as i32 {
                if canvas.pixel(x, y) == Some(C) {
                    out.push((x, y));
                }
            }
        }
        out
    }

    #[test]
    fn test_new_rejects_bad_geometry() {
        let mut buf = [0u16; 16];
        assert_eq!(
            Canvas::new(&mut buf, 5, 2, 4).err(),
            Some(CanvasError::StrideTooSmall)
        );
        assert_eq!(
            Canvas::new(&mut buf, 4, 5, 4).err(),
            Some(CanvasError::BufferTooSmall)
        );
        assert_eq!(
            Canvas::new(&mut [], 1, 1, 1).err(),
            Some(CanvasError::BufferTooSmall)
        );
        // Last row does not need its padding
        let mut tight = [0u16; 3 * 6 + 4];
        assert!(Canvas::new(&mut tight, 4, 4, 6).is_ok());
    }

    #[test]
    fn test_clear_skips_padding() {
        let mut buf = [0xaaaau16; 6 * 3];
        {
            let mut canvas = Canvas::new(&mut buf, 4, 3, 6).unwrap();
            canvas.clear(Rgb565::BLUE);
        }
        for row in 0..3 {
            for col in 0..6 {
                let expected = if col < 4 { Rgb565::BLUE.raw() } else { 0xaaaa };
                assert_eq!(buf[row * 6 + col], expected, "row {} col {}", row, col);
            }
        }
    }

    #[test]
    fn test_draw_pixel_out_of_bounds() {
        let mut buf = [0u16; 4 * 4];
        let mut canvas = Canvas::new(&mut buf, 3, 3, 4).unwrap();
        assert!(!canvas.draw_pixel(3, 0, C)); // padding column
        assert!(!canvas.draw_pixel(0, 3, C));
        assert!(!canvas.draw_pixel(-1, 0, C));
        assert!(canvas.draw_pixel(2, 2, C));
        assert!(buf.iter().filter(|&&p| p == C.raw()).count() == 1);
        assert_eq!(buf[2 * 4 + 2], C.raw());
    }

    #[test]
    fn test_horizontal_line() {
        let mut buf = [0u16; 8 * 8];
        let mut canvas = Canvas::new(&mut buf, 8, 8, 8).unwrap();
        canvas.draw_line(0, 0, 4, 0, C);
        assert_eq!(colored(&canvas), vec![(0, 0), (1, 0), (2, 0), (3, 0), (4, 0)]);
    }

    #[test]
    fn test_vertical_line() {
        let mut buf = [0u16; 8 * 8];
        let mut canvas = Canvas::new(&mut buf, 8, 8, 8).unwrap();
        canvas.draw_line(0, 0, 0, 4, C);
        assert_eq!(colored(&canvas), vec![(0, 0), (0, 1), (0, 2), (0, 3), (0, 4)]);
    }

    #[test]
    fn test_diagonal_line() {
        let mut buf = [0u16; 8 * 8];
        let mut canvas = Canvas::new(&mut buf, 8, 8, 8).unwrap();
        canvas.draw_line(0, 0, 4, 4, C);
        assert_eq!(colored(&canvas), vec![(0, 0), (1, 1), (2, 2), (3, 3), (4, 4)]);
    }

    #[test]
    fn test_reversed_line_reaches_both_ends() {
        let mut buf = [0u16; 8 * 8];
        let mut canvas = Canvas::new(&mut buf, 8, 8, 8).unwrap();
        canvas.draw_line(6, 5, 1, 2, C);
        let px = colored(&canvas);
        assert!(px.contains(&(6, 5)));
        assert!(px.contains(&(1, 2)));
        // x is the major axis: exactly one pixel per column
        assert_eq!(px.len(), 6);
    }

    #[test]
    fn test_line_is_clipped_not_rejected() {
        let mut buf = [0u16; 4 * 4];
        let mut canvas = Canvas::new(&mut buf, 4, 4, 4).unwrap();
        canvas.draw_line(-2, 1, 10, 1, C);
        assert_eq!(colored(&canvas), vec![(0, 1), (1, 1), (2, 1), (3, 1)]);
    }

    #[test]
    fn test_far_endpoints_clip_without_overflow() {
        let mut buf = [0u16; 4 * 4];
        let mut canvas = Canvas::new(&mut buf, 4, 4, 4).unwrap();
        canvas.draw_line(-2_000_000_000, 1, 2_000_000_000, 1, C);
        assert_eq!(colored(&canvas), vec![(0, 1), (1, 1), (2, 1), (3, 1)]);

        canvas.clear(Rgb565::BLACK);
        canvas.draw_line(2, i32::MAX, 2, i32::MIN, C);
        assert_eq!(colored(&canvas), vec![(2, 0), (2, 1), (2, 2), (2, 3)]);

        canvas.clear(Rgb565::BLACK);
        canvas.draw_line(i32::MIN, i32::MIN, i32::MAX, i32::MAX, C);
        assert_eq!(colored(&canvas), vec![(0, 0), (1, 1), (2, 2), (3, 3)]);

        canvas.clear(Rgb565::BLACK);
        canvas.draw_line(i32::MAX, 0, i32::MAX, 3, C);
        assert!(colored(&canvas).is_empty());
    }

    #[test]
    fn test_far_circles_draw_nothing() {
        let mut buf = [0u16; 4 * 4];
        let mut canvas = Canvas::new(&mut buf, 4, 4, 4).unwrap();
        canvas.draw_circle(i32::MAX - 2, 1, 5, C);
        canvas.draw_circle(i32::MIN, i32::MIN, 7, C);
        canvas.draw_fill_circle(i32::MAX, i32::MAX, 3, C);
        canvas.draw_fill_circle(1, i32::MIN + 1, 9, C);
        assert!(colored(&canvas).is_empty());

        // Just off the right edge, the left cardinal still lands
        canvas.draw_circle(6, 1, 3, C);
        assert_eq!(canvas.pixel(3, 1), Some(C));
    }

    #[test]
    fn test_circle_cardinals_and_symmetry() {
        let mut buf = [0u16; 21 * 21];
        let mut canvas = Canvas::new(&mut buf, 21, 21, 21).unwrap();
        canvas.draw_circle(10, 10, 5, C);

        for p in [(15, 10), (5, 10), (10, 15), (10, 5)] {
            assert_eq!(canvas.pixel(p.0, p.1), Some(C), "cardinal {:?}", p);
        }
        assert_eq!(canvas.pixel(10, 10), Some(Rgb565::BLACK));

        let px = colored(&canvas);
        for &(x, y) in &px {
            let (dx, dy) = (x - 10, y - 10);
            for (rx, ry) in [
                (dx, dy),
                (-dx, dy),
                (dx, -dy),
                (-dx, -dy),
                (dy, dx),
                (-dy, dx),
                (dy, -dx),
                (-dy, -dx),
            ] {
                assert_eq!(canvas.pixel(10 + rx, 10 + ry), Some(C));
            }
        }
    }

    #[test]
    fn test_fill_circle_is_solid() {
        let mut buf = [0u16; 21 * 21];
        let mut canvas = Canvas::new(&mut buf, 21, 21, 21).unwrap();
        canvas.draw_fill_circle(10, 10, 5, C);

        // Every row inside the circle is one unbroken span
        for y in 5..=15 {
            let row: Vec<i32> = (0..21).filter(|&x| canvas.pixel(x, y) == Some(C)).collect();
            assert!(!row.is_empty(), "row {} empty", y);
            let span = row[row.len() - 1] - row[0] + 1;
            assert_eq!(span as usize, row.len(), "gap in row {}", y);
        }
        assert_eq!(canvas.pixel(10, 10), Some(C));
        assert_eq!(canvas.pixel(15, 10), Some(C));
        assert_eq!(canvas.pixel(10, 4), Some(Rgb565::BLACK));
    }

    #[test]
    fn test_circle_at_edge_clips() {
        let mut buf = [0u16; 8 * 8];
        let mut canvas = Canvas::new(&mut buf, 8, 8, 8).unwrap();
        canvas.draw_fill_circle(0, 0, 6, C);
        assert_eq!(canvas.pixel(0, 0), Some(C));
        assert_eq!(canvas.pixel(6, 0), Some(C));
    }

    #[test]
    fn test_split_arena() {
        let mut arena = [0u16; 2 * 4 * 3];
        {
            let (mut a, mut b) = Canvas::split_arena(&mut arena, 4, 3, 4).unwrap();
            a.clear(Rgb565::RED);
            b.clear(Rgb565::BLUE);
            assert!(a.is_contiguous());
            assert_eq!(a.pixels().len(), 12);
        }
        assert!(arena[..12].iter().all(|&p| p == Rgb565::RED.raw()));
        assert!(arena[12..].iter().all(|&p| p == Rgb565::BLUE.raw()));

        let mut short = [0u16; 23];
        assert_eq!(
            Canvas::split_arena(&mut short, 4, 3, 4).err(),
            Some(CanvasError::BufferTooSmall)
        );
    }

    /// Unclipped Bresenham walk over every step
    fn walk_line(x1: i32, y1: i32, x2: i32, y2: i32) -> Vec<(i32, i32)> {
        let dx = (x2 - x1).abs();
        let dy = (y2 - y1).abs();
        let sx = if x2 >= x1 { 1 } else { -1 };
        let sy = if y2 >= y1 { 1 } else { -1 };
        let x_major = dx > dy;
        let (major, minor) = if x_major { (dx, dy) } else { (dy, dx) };

        let mut out = Vec::new();
        let (mut x, mut y) = (x1, y1);
        let mut err = -major;
        for _ in 0..=major {
            out.push((x, y));
            err += 2 * minor;
            if err >= 0 {
                if x_major {
                    y += sy;
                } else {
                    x += sx;
                }
                err -= 2 * major;
            }
            if x_major {
                x += sx;
            } else {
                y += sy;
            }
        }
        out
    }

    proptest! {
        #[test]
        fn prop_pixel_readback(
            width in 1u16..24,
            height in 1u16..24,
            pad in 0u16..4,
            x in -4i32..32,
            y in -4i32..32,
            raw in any::<u16>(),
        ) {
            let stride = width + pad;
            let mut buf = vec![0x5555u16; stride as usize * height as usize];
            let before = buf.clone();
            let color = Rgb565(raw);
            let inside = x >= 0 && y >= 0 && x < width as i32 && y < height as i32;

            let mut canvas = Canvas::new(&mut buf, width, height, stride).unwrap();
            prop_assert_eq!(canvas.draw_pixel(x, y, color), inside);
            drop(canvas);

            if inside {
                let idx = y as usize * stride as usize + x as usize;
                prop_assert_eq!(buf[idx], raw);
                for (i, (&a, &b)) in buf.iter().zip(before.iter()).enumerate() {
                    if i != idx {
                        prop_assert_eq!(a, b);
                    }
                }
            } else {
                prop_assert_eq!(buf, before);
            }
        }

        #[test]
        fn prop_clipped_line_matches_full_walk(
            x1 in -40i32..40,
            y1 in -40i32..40,
            x2 in -40i32..40,
            y2 in -40i32..40,
        ) {
            let (width, height, stride) = (9u16, 7u16, 11u16);
            let mut buf = vec![0u16; stride as usize * height as usize];
            let mut canvas = Canvas::new(&mut buf, width, height, stride).unwrap();
            canvas.draw_line(x1, y1, x2, y2, C);

            let mut expected: Vec<(i32, i32)> = walk_line(x1, y1, x2, y2)
                .into_iter()
                .filter(|&(x, y)| x >= 0 && y >= 0 && x < width as i32 && y < height as i32)
                .collect();
            expected.sort_by_key(|&(x, y)| (y, x));
            expected.dedup();
            prop_assert_eq!(colored(&canvas), expected);
        }

        #[test]
        fn prop_clear_never_writes_padding(
            width in 1u16..24,
            height in 1u16..24,
            pad in 0u16..6,
            raw in any::<u16>(),
        ) {
            let stride = width + pad;
            let sentinel = !raw;
            let mut buf = vec![sentinel; stride as usize * height as usize];

            let mut canvas = Canvas::new(&mut buf, width, height, stride).unwrap();
            canvas.clear(Rgb565(raw));
            for y in 0..height as i32 {
                for x in 0..width as i32 {
                    prop_assert_eq!(canvas.pixel(x, y), Some(Rgb565(raw)));
                }
            }
            drop(canvas);

            for row in 0..height as usize {
                for col in width as usize..stride as usize {
                    prop_assert_eq!(buf[row * stride as usize + col], sentinel);
                }
            }
        }
    }
}
