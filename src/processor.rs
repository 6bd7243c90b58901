//! The complete two band compressor signal path.

use std::sync::Arc;

use nih_plug::prelude::*;

use crate::crossover::CrossoverSplitter;
use crate::delay::LookaheadDelay;
use crate::meters::Meters;
use crate::mixer::StereoMixer;
use crate::params::Settings;
use crate::stage::{CompressionStage, InputMeter, BANDS, CHANNELS};

/// Owns every piece of per-stream state.
///
/// Everything that allocates happens in [`Processor::new()`] and
/// [`Processor::initialise()`]. Processing and [`Processor::reset()`] only
/// touch preallocated memory.
pub struct Processor {
    sample_rate: f32,
    crossovers: [CrossoverSplitter; CHANNELS],
    /// Indexed `[channel][band]`.
    delays: [[LookaheadDelay; BANDS]; CHANNELS],
    stage: CompressionStage,
    input_meter: InputMeter,
    meters: Arc<Meters>,
}

impl Processor {
    pub fn new(sample_rate: f32, meters: Arc<Meters>) -> Self {
        let crossover = CrossoverSplitter::new(sample_rate);
        let delay = LookaheadDelay::new(sample_rate);
        Self {
            sample_rate,
            crossovers: [crossover.clone(), crossover],
            delays: [
                [delay.clone(), delay.clone()],
                [delay.clone(), delay],
            ],
            stage: CompressionStage::new(sample_rate),
            input_meter: InputMeter::new(sample_rate),
            meters,
        }
    }

    /// Size everything for `sample_rate`. Reallocates only when the rate changed.
    pub fn initialise(&mut self, sample_rate: f32) {
        if sample_rate != self.sample_rate {
            let meters = self.meters.clone();
            *self = Self::new(sample_rate, meters);
            nih_log!(
                "Initialised for {} Hz, {} sample delay lines",
                sample_rate,
                self.delays[0][0].capacity()
            );
        }
        self.reset();
    }

    pub fn reset(&mut self) {
        self.crossovers.iter_mut().for_each(|c| c.reset());
        self.delays.iter_mut().flatten().for_each(|d| d.reset());
        self.stage.reset();
        self.input_meter.reset();
        self.meters.reset();
    }

    /// Current lookahead in samples, which is also the added latency.
    pub fn latency_samples(&self) -> u32 {
        self.delays[0][0].delay() as u32
    }

    /// Apply the block's settings to the filters and delay lines.
    pub fn prepare(&mut self, settings: &Settings) {
        for crossover in &mut self.crossovers {
            crossover.set_cutoff(settings.centre_freq);
        }
        for delay in self.delays.iter_mut().flatten() {
            delay.set_lookahead(settings.lookahead, self.sample_rate);
        }
    }

    /// Run one stereo frame through the whole chain.
    #[inline]
    fn process_frame(&mut self, input: [f32; CHANNELS], settings: &Settings) -> Frame {
        let mut bands = [[0.0; BANDS]; CHANNELS];
        let mut delayed = [[0.0; BANDS]; CHANNELS];
        for ch in 0..CHANNELS {
            bands[ch] = self.crossovers[ch].split(input[ch]);
            for band in 0..BANDS {
                delayed[ch][band] = self.delays[ch][band].process(bands[ch][band]);
            }
        }

        let (peak, rms) = self.input_meter.process(input);
        let stage = self.stage.process(&bands, &delayed, settings);

        Frame {
            output: StereoMixer::mix(&stage, settings.mono),
            peak,
            rms,
            compression: stage.total_compression,
        }
    }

    /// Process one block from `inputs` into `outputs`. Only the length all
    /// four slices share is processed, output samples past it are left alone.
    pub fn process(&mut self, inputs: [&[f32]; CHANNELS], outputs: [&mut [f32]; CHANNELS], settings: &Settings) {
        let [in_left, in_right] = inputs;
        let [out_left, out_right] = outputs;
        nih_debug_assert_eq!(in_left.len(), out_left.len());
        nih_debug_assert_eq!(in_right.len(), out_right.len());

        let num_samples = in_left
            .len()
            .min(in_right.len())
            .min(out_left.len())
            .min(out_right.len());
        let out_left = &mut out_left[..num_samples];
        let out_right = &mut out_right[..num_samples];
        out_left.copy_from_slice(&in_left[..num_samples]);
        out_right.copy_from_slice(&in_right[..num_samples]);

        self.process_in_place(out_left, out_right, settings);
    }

    /// Process one block in place, the way hosts hand buffers to plugins.
    pub fn process_in_place(&mut self, left: &mut [f32], right: &mut [f32], settings: &Settings) {
        nih_debug_assert_eq!(left.len(), right.len());
        let num_samples = left.len().min(right.len());

        self.prepare(settings);

        let mut last = None;
        for i in 0..num_samples {
            let frame = self.process_frame([left[i], right[i]], settings);
            left[i] = frame.output[0];
            right[i] = frame.output[1];
            last = Some(frame);
        }

        if let Some(frame) = last {
            self.meters
                .publish(settings.detect_mode, frame.peak, frame.rms, frame.compression);
        }
    }
}

/// One processed frame plus the meter readings taken along the way.
struct Frame {
    output: [f32; CHANNELS],
    peak: f32,
    rms: f32,
    compression: f32,
}
