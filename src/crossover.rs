//! Two band split around a shared centre frequency.

use std::f32::consts::PI;

/// Lowest cutoff the filters accept.
const MIN_CUTOFF_HZ: f32 = 1.0;

fn clamp_cutoff(cutoff_hz: f32, sample_rate: f32) -> f32 {
    let nyquist = sample_rate / 2.0 - 1.0;
    cutoff_hz.min(nyquist).max(MIN_CUTOFF_HZ)
}

/// RC style one-pole lowpass.
#[derive(Debug, Clone, Default)]
pub struct OnePoleLowPass {
    alpha: f32,
    prev: f32,
}

impl OnePoleLowPass {
    pub fn set_cutoff(&mut self, cutoff_hz: f32, sample_rate: f32) {
        let rc = 1.0 / (2.0 * PI * clamp_cutoff(cutoff_hz, sample_rate));
        let dt = 1.0 / sample_rate;
        self.alpha = dt / (rc + dt);
    }

    #[inline]
    pub fn tick(&mut self, input: f32) -> f32 {
        self.prev += self.alpha * (input - self.prev);
        self.prev
    }

    pub fn reset(&mut self) {
        self.prev = 0.0;
    }
}

/// RC style one-pole highpass.
#[derive(Debug, Clone, Default)]
pub struct OnePoleHighPass {
    alpha: f32,
    prev_in: f32,
    prev_out: f32,
}

impl OnePoleHighPass {
    pub fn set_cutoff(&mut self, cutoff_hz: f32, sample_rate: f32) {
        let rc = 1.0 / (2.0 * PI * clamp_cutoff(cutoff_hz, sample_rate));
        let dt = 1.0 / sample_rate;
        self.alpha = rc / (rc + dt);
    }

    #[inline]
    pub fn tick(&mut self, input: f32) -> f32 {
        self.prev_out = self.alpha * (self.prev_out + input - self.prev_in);
        self.prev_in = input;
        self.prev_out
    }

    pub fn reset(&mut self) {
        self.prev_in = 0.0;
        self.prev_out = 0.0;
    }
}

/// Band index of the lowpass output.
pub const LOW: usize = 0;
/// Band index of the highpass output.
pub const HIGH: usize = 1;

/// Splits one channel into a low and a high band.
///
/// Both filters share one cutoff. The highpass branch is fed the negated
/// input, the lowpass branch the input as is.
#[derive(Debug, Clone)]
pub struct CrossoverSplitter {
    sample_rate: f32,
    cutoff_hz: f32,
    low: OnePoleLowPass,
    high: OnePoleHighPass,
}

impl CrossoverSplitter {
    pub fn new(sample_rate: f32) -> Self {
        let mut splitter = Self {
            sample_rate,
            cutoff_hz: 0.0,
            low: OnePoleLowPass::default(),
            high: OnePoleHighPass::default(),
        };
        splitter.set_cutoff(1000.0);
        splitter
    }

    /// Retune both filters. Does nothing if the cutoff is unchanged.
    pub fn set_cutoff(&mut self, cutoff_hz: f32) {
        if cutoff_hz == self.cutoff_hz {
            return;
        }
        self.cutoff_hz = cutoff_hz;
        self.low.set_cutoff(cutoff_hz, self.sample_rate);
        self.high.set_cutoff(cutoff_hz, self.sample_rate);
    }

    /// Returns the bands indexed by [`LOW`] and [`HIGH`].
    #[inline]
    pub fn split(&mut self, sample: f32) -> [f32; 2] {
        let mut bands = [0.0; 2];
        bands[LOW] = self.low.tick(sample);
        bands[HIGH] = self.high.tick(-sample);
        bands
    }

    pub fn reset(&mut self) {
        self.low.reset();
        self.high.reset();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sine(freq: f32, sample_rate: f32, len: usize) -> Vec<f32> {
        (0..len)
            .map(|i| (2.0 * PI * freq * i as f32 / sample_rate).sin())
            .collect()
    }

    fn peak(samples: &[f32]) -> f32 {
        samples.iter().fold(0.0_f32, |acc, s| acc.max(s.abs()))
    }

    fn split_all(splitter: &mut CrossoverSplitter, input: &[f32]) -> (Vec<f32>, Vec<f32>) {
        input
            .iter()
            .map(|&s| {
                let bands = splitter.split(s);
                (bands[LOW], bands[HIGH])
            })
            .unzip()
    }

    #[test]
    fn test_low_band_passes_bass() {
        let mut splitter = CrossoverSplitter::new(48000.0);
        splitter.set_cutoff(1000.0);
        let input = sine(50.0, 48000.0, 48000);
        let (low, high) = split_all(&mut splitter, &input);
        // Skip the settling period
        assert!(peak(&low[24000..]) > 0.9);
        assert!(peak(&high[24000..]) < 0.1);
    }

    #[test]
    fn test_high_band_passes_treble() {
        let mut splitter = CrossoverSplitter::new(48000.0);
        splitter.set_cutoff(200.0);
        let input = sine(8000.0, 48000.0, 48000);
        let (low, high) = split_all(&mut splitter, &input);
        assert!(peak(&low[24000..]) < 0.1);
        assert!(peak(&high[24000..]) > 0.9);
    }

    #[test]
    fn test_high_band_is_inverted() {
        let mut splitter = CrossoverSplitter::new(48000.0);
        let bands = splitter.split(1.0);
        // The first highpass output follows the (negated) step
        assert!(bands[HIGH] < 0.0);
        assert!(bands[LOW] > 0.0);
    }

    #[test]
    fn test_dc_settles_in_low_band() {
        let mut splitter = CrossoverSplitter::new(44100.0);
        splitter.set_cutoff(500.0);
        let mut bands = [0.0; 2];
        for _ in 0..44100 {
            bands = splitter.split(0.5);
        }
        assert!((bands[LOW] - 0.5).abs() < 1e-4);
        assert!(bands[HIGH].abs() < 1e-4);
    }

    #[test]
    fn test_cutoff_above_nyquist_is_clamped() {
        let mut splitter = CrossoverSplitter::new(1000.0);
        splitter.set_cutoff(5000.0);
        for s in sine(100.0, 1000.0, 1000) {
            let bands = splitter.split(s);
            assert!(bands.iter().all(|b| b.is_finite()));
        }
    }
}
