//! ST7789 TFT LCD controller
//!
//! 240x320 panel on a 4-wire SPI link (SCK, MOSI, CS plus a DC line).
//!
//! # Bus protocol
//!
//! - DC low: the byte on the bus is a command
//! - DC high: the bytes that follow are parameters or pixel data
//! - Pixels are RGB565, most significant byte first
//!
//! # Frame transfer
//!
//! [`St7789`] implements [`FrameSink`]. A swap programs the address window,
//! raises DC and starts an asynchronous block write of the whole window, then
//! returns. The next bus access first waits for that write to finish
//! (both DMA channels idle), so commands never interleave with pixel data.

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::OutputPin;
use vitrine_core::transfer::{wait_for_completion, CoupledTransfer};
use vitrine_core::{FrameSink, Rgb565, Window};
use vitrine_hal::{PwmOutput, SpiTransport};

/// Panel width in pixels
pub const WIDTH: u16 = 240;
/// Panel height in pixels
pub const HEIGHT: u16 = 320;

/// Command opcodes
pub mod cmd {
    /// Sleep out
    pub const SLPOUT: u8 = 0x11;
    /// Display inversion on
    pub const INVON: u8 = 0x21;
    /// Display on
    pub const DISPON: u8 = 0x29;
    /// Column address set
    pub const CASET: u8 = 0x2a;
    /// Row address set
    pub const RASET: u8 = 0x2b;
    /// Memory write
    pub const RAMWR: u8 = 0x2c;
    /// Memory data access control
    pub const MADCTL: u8 = 0x36;
    /// Interface pixel format
    pub const COLMOD: u8 = 0x3a;
    /// Porch setting
    pub const PORCTRL: u8 = 0xb2;
    /// Gate control
    pub const GCTRL: u8 = 0xb7;
    /// VCOM setting
    pub const VCOMS: u8 = 0xbb;
    /// LCM control
    pub const LCMCTRL: u8 = 0xc0;
    /// VDV and VRH command enable
    pub const VDVVRHEN: u8 = 0xc2;
    /// VRH set
    pub const VRHS: u8 = 0xc3;
    /// VDV set
    pub const VDVS: u8 = 0xc4;
    /// Frame rate control in normal mode
    pub const FRCTRL2: u8 = 0xc6;
    /// Power control 1
    pub const PWCTRL1: u8 = 0xd0;
    /// Undocumented vendor register, written as in the panel reference code
    pub const VENDOR_D6: u8 = 0xd6;
    /// Positive voltage gamma control
    pub const PVGAMCTRL: u8 = 0xe0;
    /// Negative voltage gamma control
    pub const NVGAMCTRL: u8 = 0xe1;
}

/// Panel bring-up, sent in order after the hardware reset
const INIT_SEQUENCE: &[(u8, &[u8])] = &[
    (cmd::MADCTL, &[0x00]),
    // 16 bits per pixel
    (cmd::COLMOD, &[0x05]),
    (cmd::PORCTRL, &[0x0b, 0x0b, 0x00, 0x33, 0x35]),
    (cmd::GCTRL, &[0x11]),
    (cmd::VCOMS, &[0x35]),
    (cmd::LCMCTRL, &[0x2c]),
    (cmd::VDVVRHEN, &[0x01]),
    (cmd::VRHS, &[0x0d]),
    (cmd::VDVS, &[0x20]),
    (cmd::FRCTRL2, &[0x13]),
    (cmd::PWCTRL1, &[0xa4, 0xa1]),
    (cmd::VENDOR_D6, &[0xa1]),
    (
        cmd::PVGAMCTRL,
        &[
            0xf0, 0x06, 0x0b, 0x0a, 0x09, 0x26, 0x29, 0x33, 0x41, 0x18, 0x16, 0x15, 0x29, 0x2d,
        ],
    ),
    (
        cmd::NVGAMCTRL,
        &[
            0xf0, 0x04, 0x08, 0x08, 0x07, 0x03, 0x28, 0x32, 0x40, 0x3b, 0x19, 0x18, 0x2a, 0x2e,
        ],
    ),
    (cmd::INVON, &[]),
];

const RESET_WAIT_MS: u32 = 100;
const SLEEP_OUT_WAIT_MS: u32 = 120;

/// LCD driver errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LcdError<E> {
    /// SPI transport failure
    Bus(E),
    /// DC or RST pin could not be driven
    Pin,
    /// Window is empty, off the panel, or larger than the pixel buffer
    InvalidWindow,
}

/// ST7789 driver
///
/// Owns the SPI transport, the DC and RST lines, the backlight PWM channel and
/// a delay source. Frame transfers are tracked with tickets: `issued` counts
/// swaps started, `completed` the last one known to be finished.
pub struct St7789<T, DC, RST, BL, D> {
    spi: T,
    dc: DC,
    rst: RST,
    backlight: BL,
    delay: D,
    busy: bool,
    issued: u32,
    completed: u32,
}

impl<T, DC, RST, BL, D> St7789<T, DC, RST, BL, D>
where
    T: SpiTransport + CoupledTransfer,
    DC: OutputPin,
    RST: OutputPin,
    BL: PwmOutput,
    D: DelayNs,
{
    pub fn new(spi: T, dc: DC, rst: RST, backlight: BL, delay: D) -> Self {
        Self {
            spi,
            dc,
            rst,
            backlight,
            delay,
            busy: false,
            issued: 0,
            completed: 0,
        }
    }

    /// Reset the panel and run the bring-up sequence
    ///
    /// The backlight is left enabled at level 0; call
    /// [`set_brightness`](Self::set_brightness) once the first frame is up.
    pub fn init(&mut self) -> Result<(), LcdError<T::Error>> {
        self.backlight.set_level(0);
        self.backlight.set_enabled(true);

        self.rst.set_high().map_err(|_| LcdError::Pin)?;
        self.delay.delay_ms(RESET_WAIT_MS);
        self.rst.set_low().map_err(|_| LcdError::Pin)?;
        self.delay.delay_ms(RESET_WAIT_MS);
        self.rst.set_high().map_err(|_| LcdError::Pin)?;
        self.delay.delay_ms(RESET_WAIT_MS);

        for &(command, params) in INIT_SEQUENCE {
            self.send_command(command, params)?;
        }

        self.send_command(cmd::SLPOUT, &[])?;
        self.delay.delay_ms(SLEEP_OUT_WAIT_MS);
        self.send_command(cmd::DISPON, &[])
    }

    /// Select the panel rectangle the next RAMWR fills
    ///
    /// Leaves the controller waiting for pixel data with DC still low.
    pub fn set_window(&mut self, window: Window) -> Result<(), LcdError<T::Error>> {
        let Window { x, y, w, h } = window;
        if w == 0 || h == 0 || x >= WIDTH || y >= HEIGHT || w > WIDTH - x || h > HEIGHT - y {
            return Err(LcdError::InvalidWindow);
        }
        self.finish_if_busy();

        let x_end = x + w - 1;
        let y_end = y + h - 1;
        let [xs_hi, xs_lo] = x.to_be_bytes();
        let [xe_hi, xe_lo] = x_end.to_be_bytes();
        self.send_command(cmd::CASET, &[xs_hi, xs_lo, xe_hi, xe_lo])?;
        let [ys_hi, ys_lo] = y.to_be_bytes();
        let [ye_hi, ye_lo] = y_end.to_be_bytes();
        self.send_command(cmd::RASET, &[ys_hi, ys_lo, ye_hi, ye_lo])?;
        self.send_command(cmd::RAMWR, &[])
    }

    /// Fill the whole panel with `color`, blocking
    pub fn clear(&mut self, color: Rgb565) -> Result<(), LcdError<T::Error>> {
        let row = [color.raw(); WIDTH as usize];
        self.set_window(Window::new(0, 0, WIDTH, HEIGHT))?;
        self.dc.set_high().map_err(|_| LcdError::Pin)?;
        for _ in 0..HEIGHT {
            self.spi.write_words(&row).map_err(LcdError::Bus)?;
        }
        Ok(())
    }

    /// Backlight PWM level
    pub fn set_brightness(&mut self, level: u16) {
        self.backlight.set_level(level);
    }

    /// A frame transfer was started and the receive channel is still draining
    ///
    /// Lets the caller yield instead of spinning before the next swap.
    pub fn transfer_pending(&self) -> bool {
        self.busy && self.spi.rx_busy()
    }

    /// Tickets issued so far
    pub fn issued(&self) -> u32 {
        self.issued
    }

    pub fn release(self) -> (T, DC, RST, BL, D) {
        (self.spi, self.dc, self.rst, self.backlight, self.delay)
    }

    fn send_command(&mut self, command: u8, params: &[u8]) -> Result<(), LcdError<T::Error>> {
        self.dc.set_low().map_err(|_| LcdError::Pin)?;
        self.spi.write(&[command]).map_err(LcdError::Bus)?;
        self.dc.set_high().map_err(|_| LcdError::Pin)?;
        if !params.is_empty() {
            self.spi.write(params).map_err(LcdError::Bus)?;
        }
        Ok(())
    }

    fn finish_if_busy(&mut self) {
        if self.busy {
            wait_for_completion(&mut self.spi);
            self.busy = false;
            self.completed = self.issued;
        }
    }
}

impl<T, DC, RST, BL, D> FrameSink for St7789<T, DC, RST, BL, D>
where
    T: SpiTransport + CoupledTransfer,
    DC: OutputPin,
    RST: OutputPin,
    BL: PwmOutput,
    D: DelayNs,
{
    type Error = LcdError<T::Error>;

    fn swap(&mut self, pixels: &[u16], window: Window) -> Result<u32, Self::Error> {
        let Some(pixels) = pixels.get(..window.area()) else {
            return Err(LcdError::InvalidWindow);
        };
        self.set_window(window)?;
        self.dc.set_high().map_err(|_| LcdError::Pin)?;
        self.spi.start_write_words(pixels).map_err(LcdError::Bus)?;

        self.issued = self.issued.wrapping_add(1);
        self.busy = true;
        Ok(self.issued)
    }

    fn completed(&mut self) -> u32 {
        if self.busy && !self.spi.rx_busy() {
            self.finish_if_busy();
        }
        self.completed
    }

    fn wait_for_completion(&mut self) {
        self.finish_if_busy();
    }
}
