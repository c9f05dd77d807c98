//! CST328 capacitive touch controller
//!
//! I2C slave at 0x1A with an active-low interrupt line that falls when new
//! touch data is ready. Register addresses are 16-bit and sent as a two-byte
//! write; reads follow as a separate transaction.
//!
//! # Bring-up
//!
//! 1. Pulse RST low, then wait for the controller to boot
//! 2. Enter debug-info mode and read boot time, resolution and the TP/NTX
//!    block (whose signature bytes must read 0xCA)
//! 3. Return to normal mode
//!
//! # Reporting
//!
//! One read of the XY block returns up to five points. The count is then
//! cleared so the controller can post the next report.

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::OutputPin;
use embedded_hal::i2c::I2c;
use vitrine_core::config::TouchConfig;

/// Register addresses and commands
pub mod reg {
    pub const DEBUG_INFO_MODE: [u8; 2] = [0xd1, 0x01];
    pub const NORMAL_MODE: [u8; 2] = [0xd1, 0x09];
    pub const BOOT_TIME: [u8; 2] = [0xd1, 0xfc];
    pub const RESOLUTION: [u8; 2] = [0xd1, 0xf8];
    pub const TP_NTX: [u8; 2] = [0xd1, 0xf4];
    pub const READ_XY: [u8; 2] = [0xd0, 0x00];
    pub const CLEAR_NUMBER: [u8; 3] = [0xd0, 0x05, 0x00];
}

/// Most points reported at once
pub const MAX_POINTS: usize = 5;

const XY_BLOCK_LEN: usize = 27;
const TP_NTX_LEN: usize = 24;
const SIGNATURE: u8 = 0xca;

/// Touch driver errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TouchError<E> {
    /// I2C failure at the given step
    Bus(ErrorSite, E),
    /// Reset line could not be driven
    Pin,
    /// `init` on a controller that is already running
    AlreadyActive,
    /// Coordinates requested before a successful `init`
    NotActive,
    /// TP/NTX block did not carry the 0xCA signature
    BadSignature,
}

/// Step of the protocol a failure happened at
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ErrorSite {
    DebugModeCmd,
    BootTimeCmd,
    BootTime,
    ResolutionCmd,
    Resolution,
    TpNtxCmd,
    TpNtx,
    NormalModeCmd,
    ReadXyCmd,
    ReadXy,
    ClearNumberCmd,
    Signature,
}

impl ErrorSite {
    pub const COUNT: usize = 12;
}

/// Failure count per protocol step
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ErrorCounters([u32; ErrorSite::COUNT]);

impl ErrorCounters {
    pub fn get(&self, site: ErrorSite) -> u32 {
        self.0[site as usize]
    }

    pub fn total(&self) -> u32 {
        self.0.iter().fold(0, |acc, n| acc.wrapping_add(*n))
    }

    fn bump(&mut self, site: ErrorSite) {
        let n = &mut self.0[site as usize];
        *n = n.wrapping_add(1);
    }
}

/// One reported contact
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TouchPoint {
    pub id: u8,
    pub status: u8,
    pub x: u16,
    pub y: u16,
    pub strength: u8,
}

/// Latest touch report
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TouchData {
    pub points: u8,
    pub coords: [TouchPoint; MAX_POINTS],
}

impl TouchData {
    /// The valid points of this report
    pub fn iter(&self) -> impl Iterator<Item = &TouchPoint> {
        self.coords.iter().take(self.points as usize)
    }

    fn parse(block: &[u8; XY_BLOCK_LEN]) -> Self {
        let mut data = Self::default();
        let count = (block[5] & 0x0f) as usize;
        if count > MAX_POINTS {
            return data;
        }

        data.points = count as u8;
        for (i, point) in data.coords.iter_mut().take(count).enumerate() {
            // Byte 5 and 6 (count, fixed marker) sit between points 0 and 1
            let b = i * 5 + if i > 0 { 2 } else { 0 };
            *point = TouchPoint {
                id: block[b] >> 4,
                status: block[b + 1] & 0x0f,
                x: (u16::from(block[b + 1]) << 4) | u16::from(block[b + 3] >> 4),
                y: (u16::from(block[b + 2]) << 4) | u16::from(block[b + 3] & 0x0f),
                strength: block[b + 4],
            };
        }
        data
    }
}

/// Controller information read during `init`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TouchInfo {
    pub x_max: u16,
    pub y_max: u16,
    pub boot_time: u32,
    pub tp_ntx: [u8; TP_NTX_LEN],
}

/// CST328 driver
pub struct Cst328<I2C, RST, D> {
    i2c: I2C,
    rst: RST,
    delay: D,
    address: u8,
    reset_pulse_ms: u32,
    boot_wait_ms: u32,
    active: bool,
    info: TouchInfo,
    data: TouchData,
    errors: ErrorCounters,
}

impl<I2C, RST, D> Cst328<I2C, RST, D>
where
    I2C: I2c,
    RST: OutputPin,
    D: DelayNs,
{
    pub fn new(i2c: I2C, rst: RST, delay: D, config: &TouchConfig) -> Self {
        Self {
            i2c,
            rst,
            delay,
            address: config.address,
            reset_pulse_ms: config.reset_pulse_ms,
            boot_wait_ms: config.boot_wait_ms,
            active: false,
            info: TouchInfo::default(),
            data: TouchData::default(),
            errors: ErrorCounters::default(),
        }
    }

    /// Reset the controller and run the identification handshake
    ///
    /// On failure the driver stays inactive and `init` may be retried.
    pub fn init(&mut self) -> Result<(), TouchError<I2C::Error>> {
        if self.active {
            return Err(TouchError::AlreadyActive);
        }

        self.rst.set_low().map_err(|_| TouchError::Pin)?;
        self.delay.delay_ms(self.reset_pulse_ms);
        self.rst.set_high().map_err(|_| TouchError::Pin)?;
        self.delay.delay_ms(self.boot_wait_ms);

        self.command(&reg::DEBUG_INFO_MODE, ErrorSite::DebugModeCmd)?;

        let mut boot = [0u8; 4];
        self.query(&reg::BOOT_TIME, ErrorSite::BootTimeCmd, &mut boot, ErrorSite::BootTime)?;
        self.info.boot_time = u32::from_be_bytes(boot);

        let mut res = [0u8; 4];
        self.query(&reg::RESOLUTION, ErrorSite::ResolutionCmd, &mut res, ErrorSite::Resolution)?;
        self.info.x_max = u16::from_le_bytes([res[0], res[1]]);
        self.info.y_max = u16::from_le_bytes([res[2], res[3]]);

        let mut tp_ntx = [0u8; TP_NTX_LEN];
        self.query(&reg::TP_NTX, ErrorSite::TpNtxCmd, &mut tp_ntx, ErrorSite::TpNtx)?;
        self.info.tp_ntx = tp_ntx;
        if tp_ntx[10] != SIGNATURE || tp_ntx[11] != SIGNATURE {
            self.errors.bump(ErrorSite::Signature);
            return Err(TouchError::BadSignature);
        }

        self.command(&reg::NORMAL_MODE, ErrorSite::NormalModeCmd)?;
        self.active = true;
        Ok(())
    }

    /// Refresh the touch report
    ///
    /// Talks to the controller only when `event_pending` (the interrupt line
    /// fell since the last call); otherwise the report is emptied. A failed
    /// read also leaves an empty report.
    pub fn update_coords(&mut self, event_pending: bool) -> Result<(), TouchError<I2C::Error>> {
        if !self.active {
            return Err(TouchError::NotActive);
        }
        if !event_pending {
            self.data.points = 0;
            return Ok(());
        }

        match self.read_position() {
            Ok(data) => {
                self.data = data;
                Ok(())
            }
            Err(e) => {
                self.data.points = 0;
                Err(e)
            }
        }
    }

    /// Latest report
    pub fn coords(&self) -> TouchData {
        self.data
    }

    pub fn info(&self) -> &TouchInfo {
        &self.info
    }

    pub fn errors(&self) -> &ErrorCounters {
        &self.errors
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    fn read_position(&mut self) -> Result<TouchData, TouchError<I2C::Error>> {
        let mut block = [0u8; XY_BLOCK_LEN];
        self.query(&reg::READ_XY, ErrorSite::ReadXyCmd, &mut block, ErrorSite::ReadXy)?;
        let data = TouchData::parse(&block);
        self.command(&reg::CLEAR_NUMBER, ErrorSite::ClearNumberCmd)?;
        Ok(data)
    }

    fn command(&mut self, bytes: &[u8], site: ErrorSite) -> Result<(), TouchError<I2C::Error>> {
        self.i2c.write(self.address, bytes).map_err(|e| {
            self.errors.bump(site);
            TouchError::Bus(site, e)
        })
    }

    fn query(
        &mut self,
        register: &[u8],
        cmd_site: ErrorSite,
        buf: &mut [u8],
        read_site: ErrorSite,
    ) -> Result<(), TouchError<I2C::Error>> {
        self.command(register, cmd_site)?;
        self.i2c.read(self.address, buf).map_err(|e| {
            self.errors.bump(read_site);
            TouchError::Bus(read_site, e)
        })
    }
}
