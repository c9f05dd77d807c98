//! Touch controller drivers
//!
//! - CST328: I2C capacitive controller with a falling-edge interrupt line

pub mod cst328;
mod irq;

pub use cst328::{Cst328, ErrorCounters, ErrorSite, TouchData, TouchError, TouchInfo, TouchPoint};
pub use irq::{latch_next_edge, TouchIrqFlag};
