//! Embassy async tasks
//!
//! Each task runs independently and communicates via channels/signals.

pub mod chime;
pub mod frame;
pub mod touch_irq;

pub use chime::chime_task;
pub use frame::{frame_task, FrameLoop};
pub use touch_irq::touch_irq_task;
