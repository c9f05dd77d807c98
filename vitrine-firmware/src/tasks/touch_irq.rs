//! Touch interrupt latch task
//!
//! Waits for falling edges on the CST328 INT line and sets the flag the frame
//! loop takes before each touch read.

use defmt::*;
use embassy_rp::gpio::Input;

use vitrine_drivers::touch::latch_next_edge;

use crate::channels::TOUCH_IRQ;

#[embassy_executor::task]
pub async fn touch_irq_task(mut int: Input<'static>) {
    info!("Touch IRQ task started");

    loop {
        // GPIO waits cannot fail on this chip
        latch_next_edge(&mut int, &TOUCH_IRQ).await.ok();
    }
}
