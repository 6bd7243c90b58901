//! Per-sample gain computation for both bands of both channels.

use nih_plug::prelude::Enum;

use crate::crossover::{HIGH, LOW};
use crate::curve::compress;
use crate::envelope::{EnvelopeDetector, PeakDetector, RmsDetector};
use crate::params::Settings;

pub const CHANNELS: usize = 2;
pub const BANDS: usize = 2;

/// Smoothing weights of the input level meters.
const METER_ATTACK: f32 = 0.1;
const METER_RELEASE: f32 = 0.0003;

/// Which detector drives the gain computer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Enum)]
pub enum DetectMode {
    #[name = "Peak"]
    Peak,
    #[name = "RMS"]
    Rms,
}

impl DetectMode {
    pub fn from_raw(value: f32) -> Self {
        if value >= 0.5 {
            DetectMode::Rms
        } else {
            DetectMode::Peak
        }
    }

    pub fn to_raw(self) -> f32 {
        match self {
            DetectMode::Peak => 0.0,
            DetectMode::Rms => 1.0,
        }
    }
}

/// Everything the stage produced for one stereo frame.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct StageOutput {
    /// Compressed, makeup-adjusted signal, indexed `[channel][band]`.
    pub bands: [[f32; BANDS]; CHANNELS],
    /// Per band average of both channels, after makeup.
    pub band_mix: [f32; BANDS],
    /// Average of `band_mix`, the mono output signal.
    pub mono_mix: f32,
    /// Mean of the four gain multipliers.
    pub total_compression: f32,
}

/// Gain detection and application for a two band stereo compressor.
///
/// Owns one peak and one RMS detector per band and channel. Both detector sets
/// run on every sample regardless of the selected mode so that switching modes
/// picks up an already settled envelope.
#[derive(Debug, Clone)]
pub struct CompressionStage {
    peak: [[PeakDetector; BANDS]; CHANNELS],
    rms: [[RmsDetector; BANDS]; CHANNELS],
}

impl CompressionStage {
    pub fn new(sample_rate: f32) -> Self {
        let peak = PeakDetector::new(sample_rate);
        Self {
            peak: [[peak.clone(), peak.clone()], [peak.clone(), peak]],
            rms: Default::default(),
        }
    }

    /// Compress one frame.
    ///
    /// `bands` is the undelayed crossover output the detectors listen to,
    /// `delayed` the lookahead-delayed copy the gain is applied to. Both are
    /// indexed `[channel][band]`.
    pub fn process(
        &mut self,
        bands: &[[f32; BANDS]; CHANNELS],
        delayed: &[[f32; BANDS]; CHANNELS],
        settings: &Settings,
    ) -> StageOutput {
        let mut out = StageOutput::default();
        let mut gain_sum = 0.0;

        for ch in 0..CHANNELS {
            for band in [LOW, HIGH] {
                let input = bands[ch][band];
                let peak = self.peak[ch][band].process(input, settings.attack, settings.release);
                let rms = self.rms[ch][band].process(input, settings.attack, settings.release);

                let level = match settings.detect_mode {
                    DetectMode::Peak => peak,
                    DetectMode::Rms => rms,
                };

                let band_settings = &settings.bands[band];
                let gain = compress(
                    level,
                    band_settings.threshold_db,
                    band_settings.ratio,
                    settings.knee_db,
                );
                gain_sum += gain;

                out.bands[ch][band] = delayed[ch][band] * gain * band_settings.makeup;
            }
        }

        for band in [LOW, HIGH] {
            out.band_mix[band] = (out.bands[0][band] + out.bands[1][band]) / 2.0;
        }
        out.mono_mix = (out.band_mix[LOW] + out.band_mix[HIGH]) / 2.0;
        out.total_compression = gain_sum / (CHANNELS * BANDS) as f32;

        out
    }

    pub fn reset(&mut self) {
        self.peak.iter_mut().flatten().for_each(|d| d.reset());
        self.rms.iter_mut().flatten().for_each(|d| d.reset());
    }
}

/// Input level meters, one peak and one RMS detector per channel.
#[derive(Debug, Clone)]
pub struct InputMeter {
    peak: [PeakDetector; CHANNELS],
    rms: [RmsDetector; CHANNELS],
}

impl InputMeter {
    pub fn new(sample_rate: f32) -> Self {
        let peak = PeakDetector::new(sample_rate);
        Self {
            peak: [peak.clone(), peak],
            rms: Default::default(),
        }
    }

    /// Returns the channel-averaged `(peak, rms)` levels.
    pub fn process(&mut self, frame: [f32; CHANNELS]) -> (f32, f32) {
        let mut peak = 0.0;
        let mut rms = 0.0;
        for ch in 0..CHANNELS {
            peak += self.peak[ch].process(frame[ch], METER_ATTACK, METER_RELEASE);
            rms += self.rms[ch].process(frame[ch], METER_ATTACK, METER_RELEASE);
        }
        (peak / CHANNELS as f32, rms / CHANNELS as f32)
    }

    pub fn reset(&mut self) {
        self.peak.iter_mut().for_each(|d| d.reset());
        self.rms.iter_mut().for_each(|d| d.reset());
    }
}
