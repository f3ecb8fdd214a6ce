//! Completion chime playback
//!
//! The cue is a short synthesized bell strike rendered once at
//! initialization; playback is fire-and-forget through a rodio sink on the
//! default output device. Construction returns an explicit error when no
//! output device is available so the caller can decide to run silently.

use crate::error::{Result, TickdownError};
use rodio::buffer::SamplesBuffer;
use rodio::{OutputStream, Sink};
use std::f32::consts::TAU;
use tracing::{debug, info};

/// Mono output sample rate for the synthesized chime
const SAMPLE_RATE: u32 = 44_100;

/// Chime length in seconds
const CHIME_SECONDS: f32 = 1.2;

/// Fundamental frequency of the bell strike (A5)
const FUNDAMENTAL_HZ: f32 = 880.0;

/// Peak amplitude, leaving headroom below full scale
const PEAK_AMPLITUDE: f32 = 0.35;

/// Fire-and-forget player for the countdown-completion chime
pub struct ChimePlayer {
    // The stream must stay alive for the sink to keep producing audio
    _stream: OutputStream,
    sink: Sink,
    samples: Vec<f32>,
}

impl ChimePlayer {
    /// Open the default audio output and pre-render the chime
    ///
    /// Fails with [`TickdownError::AudioUnavailable`] when no output device
    /// can be opened; nothing is retried later.
    pub fn new() -> Result<Self> {
        let (stream, handle) =
            OutputStream::try_default().map_err(|e| TickdownError::AudioUnavailable(Box::new(e)))?;
        let sink =
            Sink::try_new(&handle).map_err(|e| TickdownError::AudioUnavailable(Box::new(e)))?;

        let samples = render_bell();
        info!("Audio cue initialized ({} samples)", samples.len());

        Ok(Self {
            _stream: stream,
            sink,
            samples,
        })
    }

    /// Play the chime once
    ///
    /// Queued on the sink and forgotten; no completion callback is needed.
    pub fn play(&self) {
        debug!("Playing completion chime");
        self.sink
            .append(SamplesBuffer::new(1, SAMPLE_RATE, self.samples.clone()));
    }
}

/// Render the bell strike: two exponentially decaying partials, the second
/// at the inharmonic ratio that gives small bells their color.
fn render_bell() -> Vec<f32> {
    let total = (SAMPLE_RATE as f32 * CHIME_SECONDS) as usize;
    (0..total)
        .map(|i| {
            let t = i as f32 / SAMPLE_RATE as f32;
            let envelope = (-4.0 * t).exp();
            let fundamental = (TAU * FUNDAMENTAL_HZ * t).sin();
            let upper = 0.4 * (TAU * FUNDAMENTAL_HZ * 2.76 * t).sin();
            PEAK_AMPLITUDE * envelope * (fundamental + upper)
        })
        .collect()
}
