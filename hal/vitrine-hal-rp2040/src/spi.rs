//! SPI0 transport for the LCD
//!
//! Commands go out through the blocking `embassy-rp` driver in 8-bit frames.
//! Pixel blocks switch the PL022 to 16-bit frames so RGB565 words leave MSB
//! first, and run as a TX/RX DMA pair: TX feeds the data register, RX drains
//! the receive FIFO into a dummy word. Chip select is driven by hand so it
//! can stay asserted across the asynchronous block.

use core::sync::atomic::AtomicU32;

use embassy_rp::gpio::Output;
use embassy_rp::pac;
use embassy_rp::pac::dma::vals::TreqSel;
use embassy_rp::peripherals::{DMA_CH0, DMA_CH1, SPI0};
use embassy_rp::spi::{Blocking, Error, Spi};
use embassy_rp::Peri;
use vitrine_core::transfer::CoupledTransfer;
use vitrine_hal::SpiTransport;

use crate::dma::{self, Stream};

/// Landing spot for the RX channel; its contents are never read
static RX_DISCARD: AtomicU32 = AtomicU32::new(0);

/// LCD SPI link with a DMA block path
pub struct DmaSpi<'d> {
    spi: Spi<'d, SPI0, Blocking>,
    cs: Output<'d>,
    _tx: Peri<'d, DMA_CH0>,
    _rx: Peri<'d, DMA_CH1>,
}

impl<'d> DmaSpi<'d> {
    /// `cs` must start high (deselected)
    pub fn new(
        spi: Spi<'d, SPI0, Blocking>,
        cs: Output<'d>,
        tx: Peri<'d, DMA_CH0>,
        rx: Peri<'d, DMA_CH1>,
    ) -> Self {
        Self {
            spi,
            cs,
            _tx: tx,
            _rx: rx,
        }
    }

    fn set_frame_bits(bits: u8) {
        let regs = pac::SPI0;
        regs.cr1().modify(|w| w.set_sse(false));
        regs.cr0().modify(|w| w.set_dss(bits - 1));
        regs.cr1().modify(|w| w.set_sse(true));
    }

    /// Wait for the shift register to empty, then drop stale RX words
    fn settle() {
        let regs = pac::SPI0;
        while regs.sr().read().bsy() {
            core::hint::spin_loop();
        }
        while regs.sr().read().rne() {
            let _ = regs.dr().read();
        }
    }
}

impl SpiTransport for DmaSpi<'_> {
    type Error = Error;

    fn write(&mut self, data: &[u8]) -> Result<(), Error> {
        self.cs.set_low();
        let result = self.spi.blocking_write(data);
        self.cs.set_high();
        result
    }

    fn write_words(&mut self, words: &[u16]) -> Result<(), Error> {
        let regs = pac::SPI0;
        self.cs.set_low();
        Self::set_frame_bits(16);
        for &word in words {
            while !regs.sr().read().tnf() {
                core::hint::spin_loop();
            }
            regs.dr().write(|w| w.set_data(word));
            while regs.sr().read().rne() {
                let _ = regs.dr().read();
            }
        }
        Self::settle();
        Self::set_frame_bits(8);
        self.cs.set_high();
        Ok(())
    }

    fn start_write_words(&mut self, words: &[u16]) -> Result<(), Error> {
        let regs = pac::SPI0;
        let data_reg = regs.dr().as_ptr() as u32;
        let count = words.len() as u32;

        self.cs.set_low();
        Self::set_frame_bits(16);
        regs.dmacr().write(|w| {
            w.set_txdmae(true);
            w.set_rxdmae(true);
        });

        // RX first so it is waiting when the first word shifts in
        dma::arm(
            dma::LCD_RX,
            &Stream {
                read: data_reg,
                write: RX_DISCARD.as_ptr() as u32,
                count,
                incr_read: false,
                incr_write: false,
                treq: TreqSel::SPI0_RX,
            },
        );
        dma::arm(
            dma::LCD_TX,
            &Stream {
                read: words.as_ptr() as u32,
                write: data_reg,
                count,
                incr_read: true,
                incr_write: false,
                treq: TreqSel::SPI0_TX,
            },
        );
        Ok(())
    }
}

impl CoupledTransfer for DmaSpi<'_> {
    fn tx_busy(&self) -> bool {
        dma::is_busy(dma::LCD_TX)
    }

    fn rx_busy(&self) -> bool {
        dma::is_busy(dma::LCD_RX)
    }

    fn release(&mut self) {
        Self::settle();
        pac::SPI0.dmacr().write(|w| {
            w.set_txdmae(false);
            w.set_rxdmae(false);
        });
        Self::set_frame_bits(8);
        self.cs.set_high();
    }
}
