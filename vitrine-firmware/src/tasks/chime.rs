//! Touch chime task
//!
//! Plays a short square-wave blip through the PWM audio stream whenever a new
//! touch starts. The task owns the producer side of the stream; the engine
//! runs in `DMA_IRQ_1` (see [`crate::audio`]).

use defmt::*;

use vitrine_core::Handoff;
use vitrine_drivers::audio::AudioOut;

use crate::audio;
use crate::board::{AUDIO_SLOTS, BOARD};
use crate::channels::TOUCH_DOWN;

/// Blip pitch
const TONE_HZ: u32 = 880;

/// Blip length in milliseconds
const BLIP_MS: u32 = 60;

/// High level of the square wave, low level is silence
const TONE_LEVEL: u8 = 64;

/// Samples generated per write
const CHUNK: usize = 128;

#[embassy_executor::task]
pub async fn chime_task(mut out: AudioOut<'static, 'static, AUDIO_SLOTS>) {
    info!("Chime task started");

    // Play out the silent lead-in queued by open
    if out.start() == Handoff::StartEngine {
        audio::kick();
    }

    let rate = BOARD.audio.sample_rate;
    let half_period = (rate / TONE_HZ / 2).max(1);
    let total = rate * BLIP_MS / 1000;

    loop {
        TOUCH_DOWN.wait().await;

        let mut chunk = [0u8; CHUNK];
        let mut written = 0u32;
        while written < total {
            let len = (total - written).min(CHUNK as u32) as usize;
            for (i, sample) in chunk[..len].iter_mut().enumerate() {
                let t = written + i as u32;
                *sample = if (t / half_period) % 2 == 0 { TONE_LEVEL } else { 0 };
            }

            match out.write_samples(&chunk[..len]) {
                Ok(taken) if taken == len => {}
                Ok(taken) => {
                    warn!("Audio backpressure, dropped {} samples", len - taken);
                    break;
                }
                Err(e) => {
                    warn!("Audio write failed: {:?}", e);
                    break;
                }
            }
            written += len as u32;
        }

        if let Err(e) = out.flush() {
            warn!("Audio flush failed: {:?}", e);
        }
        if out.start() == Handoff::StartEngine {
            audio::kick();
        }
        trace!(
            "Chime queued, {} started, {} underruns",
            out.stats().started(),
            out.stats().underruns()
        );
    }
}
