//! Inter-task communication
//!
//! Static flags and signals shared between the interrupt latch, the frame
//! loop and the audio task.

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::signal::Signal;

use vitrine_drivers::touch::TouchIrqFlag;

/// Set on every falling edge of the touch INT line, taken once per frame
pub static TOUCH_IRQ: TouchIrqFlag = TouchIrqFlag::new();

/// A new touch started (pointer went from idle to active)
pub static TOUCH_DOWN: Signal<CriticalSectionRawMutex, ()> = Signal::new();
