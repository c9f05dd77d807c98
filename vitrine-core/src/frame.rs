//! Double-buffered frame orchestration
//!
//! Two canvases alternate: while the display transfer of one is in flight
//! the application draws into the other. The only blocking point is the
//! start of a frame whose canvas is still being read by the previous
//! transfer that used it.
//!
//! ```text
//! frame 0: draw A ─swap A─▶ ┄┄┄┄ transfer A ┄┄┄┄▶
//! frame 1:          draw B ─swap B─▶ ┄┄┄┄ transfer B ┄┄┄┄▶
//! frame 2:                   [wait A] draw A ─swap A─▶
//! ```

use crate::canvas::{Canvas, CanvasError};
use crate::color::Rgb565;

/// Display rectangle a frame is written to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Window {
    pub x: u16,
    pub y: u16,
    pub w: u16,
    pub h: u16,
}

impl Window {
    pub const fn new(x: u16, y: u16, w: u16, h: u16) -> Self {
        Self { x, y, w, h }
    }

    /// Pixels covered by the window
    pub const fn area(&self) -> usize {
        self.w as usize * self.h as usize
    }
}

/// Display end of the orchestrator
///
/// Tickets are issued in increasing order (wrapping), one per swap, and
/// complete in the order they were issued.
pub trait FrameSink {
    type Error;

    /// Start an asynchronous transfer of `pixels` into `window` and return
    /// its ticket
    ///
    /// The hardware may keep reading `pixels` after this returns. The caller
    /// must not write the buffer again until the ticket has completed.
    fn swap(&mut self, pixels: &[u16], window: Window) -> Result<u32, Self::Error>;

    /// Most recent ticket whose transfer has finished
    fn completed(&mut self) -> u32;

    /// Block until the oldest outstanding transfer finishes
    fn wait_for_completion(&mut self);
}

/// Outcome of one rendered frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct FrameReport {
    /// Frame number that was drawn
    pub frame: u32,
    /// Canvas index used (0 or 1)
    pub canvas: usize,
    /// Whether the frame had to wait for an earlier transfer
    pub waited: bool,
}

/// Alternates two canvases so drawing overlaps the display transfer
pub struct FrameOrchestrator<'a> {
    canvases: [Canvas<'a>; 2],
    tickets: [Option<u32>; 2],
    origin: (u16, u16),
    frame: u32,
    waits: u32,
    /// Set by `draw`: whether drawing had to wait
    drawn: Option<bool>,
}

impl<'a> FrameOrchestrator<'a> {
    /// Both canvases must be unpadded so each can go out as one transfer
    pub fn new(front: Canvas<'a>, back: Canvas<'a>) -> Result<Self, CanvasError> {
        if !front.is_contiguous() || !back.is_contiguous() {
            return Err(CanvasError::NotContiguous);
        }
        Ok(Self {
            canvases: [front, back],
            tickets: [None, None],
            origin: (0, 0),
            frame: 0,
            waits: 0,
            drawn: None,
        })
    }

    /// Carve both canvases from one arena of `2 * width * height` pixels
    pub fn from_arena(arena: &'a mut [u16], width: u16, height: u16) -> Result<Self, CanvasError> {
        let (a, b) = Canvas::split_arena(arena, width, height, width)?;
        Self::new(a, b)
    }

    /// Place frames at `(x, y)` on the display instead of the origin
    pub fn with_origin(mut self, x: u16, y: u16) -> Self {
        self.origin = (x, y);
        self
    }

    /// Number of the next frame to be drawn
    pub fn frame(&self) -> u32 {
        self.frame
    }

    /// Frames that had to block on an earlier transfer
    pub fn waits(&self) -> u32 {
        self.waits
    }

    pub fn canvas(&self, index: usize) -> Option<&Canvas<'a>> {
        self.canvases.get(index)
    }

    /// Run one frame: [`draw`](Self::draw) then [`present`](Self::present)
    ///
    /// A failed swap skips the frame; the counter does not advance.
    pub fn render<S, F>(&mut self, sink: &mut S, clear: Rgb565, draw: F) -> Result<FrameReport, S::Error>
    where
        S: FrameSink,
        F: FnOnce(&mut Canvas<'a>, u32),
    {
        self.draw(sink, clear, draw);
        self.present(sink)
    }

    /// Pick the back canvas, wait until the hardware is done with it, clear
    /// it and draw
    ///
    /// The frame is not handed out until [`present`](Self::present), so the
    /// caller can do other work (or yield) while the previous transfer runs.
    pub fn draw<S, F>(&mut self, sink: &mut S, clear: Rgb565, draw: F)
    where
        S: FrameSink,
        F: FnOnce(&mut Canvas<'a>, u32),
    {
        let index = self.back_index();

        let mut waited = false;
        if let Some(ticket) = self.tickets[index] {
            while !Self::is_done(sink.completed(), ticket) {
                sink.wait_for_completion();
                waited = true;
            }
            self.tickets[index] = None;
        }
        if waited {
            self.waits = self.waits.wrapping_add(1);
        }

        let canvas = &mut self.canvases[index];
        canvas.clear(clear);
        draw(canvas, self.frame);
        self.drawn = Some(waited);
    }

    /// Hand the back canvas to `sink` without waiting and advance the frame
    ///
    /// Presenting without a fresh [`draw`](Self::draw) sends the canvas
    /// contents again. A failed swap drops the drawn frame and leaves the
    /// counter where it was.
    pub fn present<S: FrameSink>(&mut self, sink: &mut S) -> Result<FrameReport, S::Error> {
        let index = self.back_index();
        let waited = self.drawn.take().unwrap_or(false);

        let canvas = &self.canvases[index];
        let window = Window::new(self.origin.0, self.origin.1, canvas.width(), canvas.height());
        let ticket = sink.swap(canvas.pixels(), window)?;
        self.tickets[index] = Some(ticket);

        let report = FrameReport {
            frame: self.frame,
            canvas: index,
            waited,
        };
        self.frame = self.frame.wrapping_add(1);
        Ok(report)
    }

    fn back_index(&self) -> usize {
        (self.frame % 2) as usize
    }

    /// `ticket` is done once `completed` has reached it, modulo wrap
    fn is_done(completed: u32, ticket: u32) -> bool {
        (completed.wrapping_sub(ticket) as i32) >= 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::VecDeque;
    use std::vec;
    use std::vec::Vec;

    #[derive(Debug, Clone, PartialEq, Eq)]
    enum Event {
        Swap { ticket: u32, first_pixel: u16 },
        Complete(u32),
    }

    /// Sink whose transfers only finish when the test (or a wait) says so
    #[derive(Default)]
    struct MockDisplay {
        next_ticket: u32,
        completed: u32,
        in_flight: VecDeque<u32>,
        log: Vec<Event>,
        fail_next: bool,
    }

    impl MockDisplay {
        /// The completion interrupt fires for the oldest transfer
        fn complete_one(&mut self) {
            if let Some(ticket) = self.in_flight.pop_front() {
                self.completed = ticket;
                self.log.push(Event::Complete(ticket));
            }
        }
    }

    impl FrameSink for MockDisplay {
        type Error = ();

        fn swap(&mut self, pixels: &[u16], _window: Window) -> Result<u32, ()> {
            if self.fail_next {
                self.fail_next = false;
                return Err(());
            }
            self.next_ticket += 1;
            let ticket = self.next_ticket;
            self.in_flight.push_back(ticket);
            self.log.push(Event::Swap {
                ticket,
                first_pixel: pixels[0],
            });
            Ok(ticket)
        }

        fn completed(&mut self) -> u32 {
            self.completed
        }

        fn wait_for_completion(&mut self) {
            self.complete_one();
        }
    }

    fn stamp(canvas: &mut Canvas<'_>, frame: u32) {
        canvas.draw_pixel(0, 0, Rgb565(frame as u16 + 1));
    }

    #[test]
    fn test_requires_contiguous_canvases() {
        let mut a = [0u16; 12];
        let mut b = [0u16; 12];
        let padded = Canvas::new(&mut a, 3, 3, 4).unwrap();
        let plain = Canvas::new(&mut b, 3, 3, 3).unwrap();
        assert_eq!(
            FrameOrchestrator::new(padded, plain).err(),
            Some(CanvasError::NotContiguous)
        );
    }

    #[test]
    fn test_second_frame_overlaps_first_transfer() {
        let mut arena = vec![0u16; 2 * 8 * 4];
        let mut frames = FrameOrchestrator::from_arena(&mut arena, 8, 4).unwrap();
        let mut display = MockDisplay::default();

        let r0 = frames.render(&mut display, Rgb565::BLACK, stamp).unwrap();
        assert_eq!((r0.frame, r0.canvas, r0.waited), (0, 0, false));

        // Transfer A still in flight: frame 1 goes to B without blocking
        let r1 = frames.render(&mut display, Rgb565::BLACK, stamp).unwrap();
        assert_eq!((r1.frame, r1.canvas, r1.waited), (1, 1, false));
        assert_eq!(display.in_flight.len(), 2);

        // Frame 2 reuses A, so it has to wait for transfer A first
        let r2 = frames.render(&mut display, Rgb565::BLACK, stamp).unwrap();
        assert_eq!((r2.frame, r2.canvas, r2.waited), (2, 0, true));
        assert_eq!(
            display.log,
            [
                Event::Swap { ticket: 1, first_pixel: 1 },
                Event::Swap { ticket: 2, first_pixel: 2 },
                Event::Complete(1),
                Event::Swap { ticket: 3, first_pixel: 3 },
            ]
        );
        assert_eq!(frames.waits(), 1);
    }

    #[test]
    fn test_no_wait_once_completion_fired() {
        let mut arena = vec![0u16; 2 * 4 * 4];
        let mut frames = FrameOrchestrator::from_arena(&mut arena, 4, 4).unwrap();
        let mut display = MockDisplay::default();

        for _ in 0..2 {
            frames.render(&mut display, Rgb565::BLACK, stamp).unwrap();
        }
        display.complete_one();

        let report = frames.render(&mut display, Rgb565::BLACK, stamp).unwrap();
        assert!(!report.waited);
        assert_eq!(frames.waits(), 0);
    }

    #[test]
    fn test_back_canvas_cleared_each_frame() {
        let mut arena = vec![0u16; 2 * 4 * 2];
        let mut frames = FrameOrchestrator::from_arena(&mut arena, 4, 2).unwrap();
        let mut display = MockDisplay::default();

        frames
            .render(&mut display, Rgb565::BLACK, |c, _| {
                c.draw_pixel(3, 1, Rgb565::RED);
            })
            .unwrap();
        frames.render(&mut display, Rgb565::BLACK, |_, _| {}).unwrap();
        frames.render(&mut display, Rgb565::BLUE, |_, _| {}).unwrap();

        let a = frames.canvas(0).unwrap();
        assert_eq!(a.pixel(3, 1), Some(Rgb565::BLUE));
        assert!(a.pixels().iter().all(|&p| p == Rgb565::BLUE.raw()));
    }

    #[test]
    fn test_failed_swap_skips_frame() {
        let mut arena = vec![0u16; 2 * 4 * 4];
        let mut frames = FrameOrchestrator::from_arena(&mut arena, 4, 4).unwrap();
        let mut display = MockDisplay {
            fail_next: true,
            ..MockDisplay::default()
        };

        assert!(frames.render(&mut display, Rgb565::BLACK, stamp).is_err());
        assert_eq!(frames.frame(), 0);

        let report = frames.render(&mut display, Rgb565::BLACK, stamp).unwrap();
        assert_eq!((report.frame, report.canvas), (0, 0));
    }

    #[test]
    fn test_origin_offsets_window() {
        struct WindowProbe(Option<Window>);
        impl FrameSink for WindowProbe {
            type Error = ();
            fn swap(&mut self, _pixels: &[u16], window: Window) -> Result<u32, ()> {
                self.0 = Some(window);
                Ok(1)
            }
            fn completed(&mut self) -> u32 {
                1
            }
            fn wait_for_completion(&mut self) {}
        }

        let mut arena = vec![0u16; 2 * 10 * 6];
        let mut frames = FrameOrchestrator::from_arena(&mut arena, 10, 6)
            .unwrap()
            .with_origin(20, 40);
        let mut probe = WindowProbe(None);
        frames.render(&mut probe, Rgb565::BLACK, |_, _| {}).unwrap();
        assert_eq!(probe.0, Some(Window::new(20, 40, 10, 6)));
        assert_eq!(Window::new(20, 40, 10, 6).area(), 60);
    }

    #[test]
    fn test_draw_overlaps_transfer_until_present() {
        let mut arena = vec![0u16; 2 * 4 * 4];
        let mut frames = FrameOrchestrator::from_arena(&mut arena, 4, 4).unwrap();
        let mut display = MockDisplay::default();

        frames.render(&mut display, Rgb565::BLACK, stamp).unwrap();

        // Frame 1 is drawn while transfer 1 is still in flight
        frames.draw(&mut display, Rgb565::BLACK, stamp);
        assert_eq!(display.in_flight.len(), 1);
        assert_eq!(frames.frame(), 1);
        assert_eq!(frames.canvas(1).unwrap().pixel(0, 0), Some(Rgb565(2)));

        display.complete_one();
        let report = frames.present(&mut display).unwrap();
        assert_eq!((report.frame, report.canvas, report.waited), (1, 1, false));
        assert_eq!(
            display.log.last(),
            Some(&Event::Swap { ticket: 2, first_pixel: 2 })
        );
    }

    #[test]
    fn test_ticket_wraparound() {
        assert!(FrameOrchestrator::is_done(5, 5));
        assert!(!FrameOrchestrator::is_done(4, 5));
        assert!(FrameOrchestrator::is_done(2, u32::MAX));
        assert!(!FrameOrchestrator::is_done(u32::MAX, 2));
    }
}
