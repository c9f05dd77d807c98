//! Frame loop task
//!
//! Reads touch, updates the pointer and the consoles, then draws the next
//! frame into the back canvas while the previous one is still going out over
//! DMA. Before handing the new frame to the LCD the task yields until that
//! transfer is done instead of spinning, so the chime and touch tasks keep
//! running.

use core::fmt::Write;

use defmt::*;
use embassy_futures::yield_now;
use embassy_rp::gpio::Output;
use embassy_rp::i2c::{Blocking, I2c};
use embassy_rp::peripherals::I2C0;
use embassy_time::{Delay, Instant};
use heapless::String;

use vitrine_core::config::{MAX_LINE_WIDTH, TEXT_LINES};
use vitrine_core::font::render_text_log;
use vitrine_core::{FontX2, FrameOrchestrator, Rgb565, TextBoxId, TextLog};
use vitrine_drivers::display::St7789;
use vitrine_drivers::touch::{Cst328, TouchData};
use vitrine_hal_rp2040::{Backlight, DmaSpi};

use crate::board::BOARD;
use crate::channels::{TOUCH_DOWN, TOUCH_IRQ};
use crate::scene::{self, CirclePointer};

pub type Lcd = St7789<DmaSpi<'static>, Output<'static>, Output<'static>, Backlight<'static>, Delay>;
pub type Touch = Cst328<I2c<'static, I2C0, Blocking>, Output<'static>, Delay>;
pub type Console = TextLog<2, TEXT_LINES, MAX_LINE_WIDTH>;

/// Where the touch log starts
const TOUCH_LOG_AT: (i32, i32) = (10, 26);
/// Where the frame period line starts
const FRAME_LOG_AT: (i32, i32) = (10, 10);

/// Everything the frame loop owns
pub struct FrameLoop {
    pub lcd: Lcd,
    pub touch: Option<Touch>,
    pub frames: FrameOrchestrator<'static>,
    pub console: &'static mut Console,
    pub touch_log: TextBoxId,
    pub frame_log: TextBoxId,
}

#[embassy_executor::task]
pub async fn frame_task(mut ctx: FrameLoop) {
    info!("Frame task started");

    let clear = Rgb565::from_hex(BOARD.display.clear_color);
    let text = Rgb565::from_hex(BOARD.console.color);
    let row_step = i32::from(BOARD.console.row_step);
    let font = FontX2::BUILTIN;

    let mut pointer = CirclePointer::new(Rgb565::RED);
    let mut last = Instant::now();
    let mut period_us = 0u64;

    loop {
        let points = read_touch(&mut ctx.touch);
        let first = points.iter().next().map(|p| (p.x, p.y));
        if pointer.update(first) {
            TOUCH_DOWN.signal(());
        }

        for (i, p) in points.iter().enumerate() {
            let mut line: String<MAX_LINE_WIDTH> = String::new();
            // Overflow only truncates the line
            let _ = core::write!(line, "{}: X[{:3}] Y[{:3}] S[{:3}]", i, p.x, p.y, p.strength);
            if let Err(e) = ctx.console.push(ctx.touch_log, line.as_bytes()) {
                warn!("Touch log push failed: {:?}", e);
            }
        }

        let mut line: String<MAX_LINE_WIDTH> = String::new();
        let _ = core::write!(line, "frame period: {:6} us", period_us);
        if let Err(e) = ctx.console.push(ctx.frame_log, line.as_bytes()) {
            warn!("Frame log push failed: {:?}", e);
        }

        // Draw into the back canvas while the previous frame is on the bus
        let console = &*ctx.console;
        let (touch_log, frame_log) = (ctx.touch_log, ctx.frame_log);
        ctx.frames.draw(&mut ctx.lcd, clear, |canvas, f| {
            scene::draw(canvas, f);
            pointer.render(canvas);
            render_text_log(
                canvas,
                console,
                touch_log,
                &font,
                TOUCH_LOG_AT.0,
                TOUCH_LOG_AT.1,
                row_step,
                text,
            );
            render_text_log(
                canvas,
                console,
                frame_log,
                &font,
                FRAME_LOG_AT.0,
                FRAME_LOG_AT.1,
                row_step,
                text,
            );
        });

        while ctx.lcd.transfer_pending() {
            yield_now().await;
        }

        match ctx.frames.present(&mut ctx.lcd) {
            Ok(report) => trace!(
                "Frame {} on canvas {}, waited: {}",
                report.frame,
                report.canvas,
                report.waited
            ),
            Err(e) => warn!("Frame {} skipped: {:?}", ctx.frames.frame(), e),
        }

        let now = Instant::now();
        period_us = (now - last).as_micros();
        last = now;
    }
}

/// Pull the latest touch report; failures report no touch
fn read_touch(touch: &mut Option<Touch>) -> TouchData {
    let Some(touch) = touch.as_mut() else {
        return TouchData::default();
    };

    if let Err(e) = touch.update_coords(TOUCH_IRQ.take()) {
        warn!("Touch read failed: {:?}", e);
    }
    touch.coords()
}
