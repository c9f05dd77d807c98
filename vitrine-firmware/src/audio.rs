//! Audio completion context
//!
//! The transfer engine and the PWM sink live behind a critical-section mutex
//! and only run inside `DMA_IRQ_1`: on a DMA completion the engine retires
//! the finished descriptor and starts the next one, on a software pend it
//! starts an idle stream.

use core::cell::RefCell;

use embassy_rp::interrupt;
use embassy_rp::interrupt::{InterruptExt, Priority};
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::blocking_mutex::Mutex;

use vitrine_core::transfer::Engine;
use vitrine_hal_rp2040::PwmAudioSink;

use crate::board::AUDIO_SLOTS;

/// Consumer side of the audio stream
pub type AudioEngine = Engine<'static, 'static, u16, AUDIO_SLOTS>;

struct Completion {
    engine: AudioEngine,
    sink: PwmAudioSink<'static>,
}

static COMPLETION: Mutex<CriticalSectionRawMutex, RefCell<Option<Completion>>> =
    Mutex::new(RefCell::new(None));

/// Hand the engine and sink to the interrupt and unmask it
pub fn install(engine: AudioEngine, sink: PwmAudioSink<'static>) {
    COMPLETION.lock(|c| {
        c.replace(Some(Completion { engine, sink }));
    });
    interrupt::DMA_IRQ_1.set_priority(Priority::P1);
    // SAFETY: the handler below only touches state behind COMPLETION
    unsafe { interrupt::DMA_IRQ_1.enable() };
}

/// Run the engine's start in completion context
pub fn kick() {
    interrupt::DMA_IRQ_1.pend();
}

#[interrupt]
fn DMA_IRQ_1() {
    let finished = PwmAudioSink::take_completion();
    COMPLETION.lock(|c| {
        if let Some(Completion { engine, sink }) = c.borrow_mut().as_mut() {
            if finished {
                engine.on_transfer_complete(sink);
            } else {
                engine.start(sink);
            }
        }
    });
}
