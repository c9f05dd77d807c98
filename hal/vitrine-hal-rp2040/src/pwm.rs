//! PWM outputs: LCD backlight and the audio sample clock

use embassy_rp::pac;
use embassy_rp::pac::dma::vals::TreqSel;
use embassy_rp::peripherals::{DMA_CH2, PIN_16, PWM_SLICE0};
use embassy_rp::pwm::{ChannelAPin, Config, Pwm, Slice};
use embassy_rp::Peri;
use fixed::types::U12F4;
use vitrine_core::TransferSink;
use vitrine_hal::{PwmConfig, PwmOutput};

use crate::dma::{self, Stream};

/// Slice behind GPIO16, whose wrap paces the audio DMA
const AUDIO_SLICE: usize = 0;

/// Slice settings for a timing preset
fn slice_config(timing: &PwmConfig, level: u16, enable: bool) -> Config {
    let mut config = Config::default();
    let div16 = (u16::from(timing.divider_int) << 4) | u16::from(timing.divider_frac & 0x0f);
    config.divider = U12F4::from_bits(div16);
    config.top = timing.top;
    config.compare_a = level;
    config.enable = enable;
    config
}

/// Backlight on channel A of a PWM slice
pub struct Backlight<'d> {
    pwm: Pwm<'d>,
    config: Config,
}

impl<'d> Backlight<'d> {
    /// Starts disabled at level 0
    pub fn new<S: Slice>(
        slice: Peri<'d, S>,
        pin: Peri<'d, impl ChannelAPin<S>>,
        timing: &PwmConfig,
    ) -> Self {
        let config = slice_config(timing, 0, false);
        let pwm = Pwm::new_output_a(slice, pin, config.clone());
        Self { pwm, config }
    }
}

impl PwmOutput for Backlight<'_> {
    fn set_level(&mut self, level: u16) {
        self.config.compare_a = level;
        self.pwm.set_config(&self.config);
    }

    fn set_enabled(&mut self, enabled: bool) {
        self.config.enable = enabled;
        self.pwm.set_config(&self.config);
    }

    fn max_level(&self) -> u16 {
        self.config.top
    }
}

/// Audio transfer sink: DMA writes samples into the compare register of
/// slice 0, one per counter wrap
///
/// A 16-bit write to the compare register lands in both channel halves;
/// only channel A is routed to a pin.
pub struct PwmAudioSink<'d> {
    _pwm: Pwm<'d>,
    _dma: Peri<'d, DMA_CH2>,
}

impl<'d> PwmAudioSink<'d> {
    pub fn new(
        slice: Peri<'d, PWM_SLICE0>,
        pin: Peri<'d, PIN_16>,
        dma_ch: Peri<'d, DMA_CH2>,
        timing: &PwmConfig,
    ) -> Self {
        let pwm = Pwm::new_output_a(slice, pin, slice_config(timing, 0, false));
        dma::enable_completion_irq(dma::AUDIO);
        Self {
            _pwm: pwm,
            _dma: dma_ch,
        }
    }

    /// Acknowledge the audio channel's completion interrupt
    ///
    /// Returns `false` when `DMA_IRQ_1` fired for another channel.
    pub fn take_completion() -> bool {
        dma::take_completion(dma::AUDIO)
    }

    fn set_running(running: bool) {
        pac::PWM.ch(AUDIO_SLICE).csr().modify(|w| w.set_en(running));
    }
}

impl TransferSink<u16> for PwmAudioSink<'_> {
    fn start(&mut self, payload: &[u16]) {
        dma::arm(
            dma::AUDIO,
            &Stream {
                read: payload.as_ptr() as u32,
                write: pac::PWM.ch(AUDIO_SLICE).cc().as_ptr() as u32,
                count: payload.len() as u32,
                incr_read: true,
                incr_write: false,
                treq: TreqSel::PWM_WRAP0,
            },
        );
        Self::set_running(true);
    }

    fn stop(&mut self) {
        Self::set_running(false);
    }
}
