//! Raw DMA channel programming
//!
//! Poll-driven transfers that outlive the call that starts them, which the
//! future-based `embassy_rp::dma` API cannot express. Channels are fixed per
//! use; the driver holding the matching `Peri<DMA_CHx>` token is the only
//! one touching that channel.

use core::sync::atomic::{compiler_fence, Ordering};

use embassy_rp::pac;
use embassy_rp::pac::dma::vals::{DataSize, TreqSel};

/// LCD pixel stream into the SPI data register
pub const LCD_TX: usize = 0;
/// Drains the SPI receive FIFO alongside [`LCD_TX`]
pub const LCD_RX: usize = 1;
/// Audio samples into the PWM compare register
pub const AUDIO: usize = 2;

/// `DMA_IRQ_1`; `DMA_IRQ_0` belongs to embassy-rp
const IRQ_INDEX: usize = 1;

/// One 16-bit transfer
#[derive(Debug, Clone, Copy)]
pub struct Stream {
    pub read: u32,
    pub write: u32,
    pub count: u32,
    pub incr_read: bool,
    pub incr_write: bool,
    pub treq: TreqSel,
}

/// Program `channel` and start it
pub fn arm(channel: usize, stream: &Stream) {
    let ch = pac::DMA.ch(channel);
    ch.read_addr().write_value(stream.read);
    ch.write_addr().write_value(stream.write);
    ch.trans_count().write_value(stream.count);

    // Buffer contents must be visible before the channel reads them
    compiler_fence(Ordering::SeqCst);
    cortex_m::asm::dsb();

    ch.ctrl_trig().write(|w| {
        w.set_treq_sel(stream.treq);
        w.set_data_size(DataSize::SIZE_HALFWORD);
        w.set_incr_read(stream.incr_read);
        w.set_incr_write(stream.incr_write);
        w.set_chain_to(channel as u8);
        w.set_en(true);
    });
}

pub fn is_busy(channel: usize) -> bool {
    pac::DMA.ch(channel).ctrl_trig().read().busy()
}

/// Route `channel` completions to `DMA_IRQ_1`
pub fn enable_completion_irq(channel: usize) {
    pac::DMA.inte(IRQ_INDEX).modify(|mask| *mask |= 1 << channel);
}

/// Acknowledge a pending `DMA_IRQ_1` completion of `channel`
pub fn take_completion(channel: usize) -> bool {
    let bit = 1u32 << channel;
    if pac::DMA.ints(IRQ_INDEX).read() & bit == 0 {
        return false;
    }
    pac::DMA.ints(IRQ_INDEX).write_value(bit);
    true
}
