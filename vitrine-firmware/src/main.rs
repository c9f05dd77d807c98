//! Vitrine - Display Board Firmware
//!
//! Main firmware binary for the RP2040 display board: a 240x320 ST7789 LCD
//! driven over SPI with DMA, a CST328 capacitive touch panel on I2C, and PWM
//! audio fed by DMA.
//!
//! Boot brings the peripherals up, then three tasks run:
//! - `frame_task`: double-buffered render loop
//! - `touch_irq_task`: latches touch interrupts for the frame loop
//! - `chime_task`: plays a blip on every new touch

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use embassy_rp::gpio::{Input, Level, Output, Pull};
use embassy_rp::i2c::{self, I2c};
use embassy_rp::spi::{self, Spi};
use embassy_time::{Delay, Timer};
use static_cell::ConstStaticCell;
use {defmt_rtt as _, panic_probe as _};

use vitrine_core::{FrameOrchestrator, Rgb565, TransferQueue};
use vitrine_drivers::audio::AudioOut;
use vitrine_drivers::display::St7789;
use vitrine_drivers::touch::Cst328;
use vitrine_hal::PwmConfig;
use vitrine_hal_rp2040::{Backlight, DmaSpi, PwmAudioSink};

use crate::board::{AUDIO_SLOTS, AUDIO_TIMING, AUDIO_WORDS, BOARD, FRAME_WORDS};
use crate::tasks::frame::{Console, Touch};
use crate::tasks::FrameLoop;

mod audio;
mod board;
mod channels;
mod scene;
mod tasks;

/// Both canvases of the double buffer
static FRAME_ARENA: ConstStaticCell<[u16; FRAME_WORDS]> = ConstStaticCell::new([0; FRAME_WORDS]);

/// Audio descriptor payloads
static AUDIO_ARENA: ConstStaticCell<[u16; AUDIO_WORDS]> = ConstStaticCell::new([0; AUDIO_WORDS]);

static AUDIO_QUEUE: ConstStaticCell<TransferQueue<'static, u16, AUDIO_SLOTS>> =
    ConstStaticCell::new(TransferQueue::new());

static CONSOLE: ConstStaticCell<Console> = ConstStaticCell::new(Console::new());

#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("Vitrine firmware starting...");

    let p = embassy_rp::init(Default::default());
    info!("RP2040 initialized");

    // LCD on SPI0, pixel blocks through DMA channels 0 and 1
    let mut spi_config = spi::Config::default();
    spi_config.frequency = BOARD.display.spi_hz;
    let spi = Spi::new_blocking(p.SPI0, p.PIN_2, p.PIN_3, p.PIN_4, spi_config);
    let link = DmaSpi::new(spi, Output::new(p.PIN_5, Level::High), p.DMA_CH0, p.DMA_CH1);
    let backlight = Backlight::new(p.PWM_SLICE4, p.PIN_8, &PwmConfig::BACKLIGHT);
    let mut lcd = St7789::new(
        link,
        Output::new(p.PIN_6, Level::Low),
        Output::new(p.PIN_7, Level::High),
        backlight,
        Delay,
    );

    match lcd.init() {
        Ok(()) => info!("LCD initialized"),
        Err(e) => error!("LCD init failed: {:?}", e),
    }
    if let Err(e) = lcd.clear(Rgb565::BLACK) {
        error!("LCD clear failed: {:?}", e);
    }
    lcd.set_brightness(BOARD.display.brightness);

    // Touch panel on I2C0
    let touch: Option<Touch> = if BOARD.touch.enabled {
        let mut i2c_config = i2c::Config::default();
        i2c_config.frequency = BOARD.touch.i2c_hz;
        let bus = I2c::new_blocking(p.I2C0, p.PIN_13, p.PIN_12, i2c_config);
        let mut touch = Cst328::new(bus, Output::new(p.PIN_10, Level::High), Delay, &BOARD.touch);

        match touch.init() {
            Ok(()) => {
                let info = touch.info();
                info!(
                    "Touch ready: {}x{}, boot time {}",
                    info.x_max, info.y_max, info.boot_time
                );
                let int = Input::new(p.PIN_11, Pull::Up);
                spawner.spawn(tasks::touch_irq_task(int)).unwrap();
                Some(touch)
            }
            Err(e) => {
                error!("Touch init failed: {:?}", e);
                None
            }
        }
    } else {
        info!("Touch disabled");
        None
    };

    // PWM audio on GPIO16, completions on DMA_IRQ_1
    if BOARD.audio.enabled {
        let sink = PwmAudioSink::new(p.PWM_SLICE0, p.PIN_16, p.DMA_CH2, &AUDIO_TIMING);
        match AudioOut::open(AUDIO_QUEUE.take(), AUDIO_ARENA.take(), &BOARD.audio) {
            Ok((out, engine)) => {
                audio::install(engine, sink);
                info!(
                    "Audio ready: {} Hz, {} buffers of {} ms",
                    BOARD.audio.sample_rate,
                    BOARD.audio.buffers,
                    BOARD.audio.buffer_ms()
                );
                spawner.spawn(tasks::chime_task(out)).unwrap();
            }
            Err(e) => error!("Audio open failed: {:?}", e),
        }
    }

    let frames = unwrap!(FrameOrchestrator::from_arena(
        FRAME_ARENA.take(),
        BOARD.display.width,
        BOARD.display.height,
    ));

    let console = CONSOLE.take();
    let width = usize::from(BOARD.console.line_width);
    let touch_log = unwrap!(console.create(usize::from(BOARD.console.rows), width));
    let frame_log = unwrap!(console.create(usize::from(BOARD.console.frame_rows), width));

    spawner
        .spawn(tasks::frame_task(FrameLoop {
            lcd,
            touch,
            frames,
            console,
            touch_log,
            frame_log,
        }))
        .unwrap();

    info!("All tasks spawned, firmware running");

    // Main task has nothing else to do - all work happens in spawned tasks
    loop {
        Timer::after_secs(60).await;
        trace!("Main loop heartbeat");
    }
}
