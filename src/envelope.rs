/// `log10(40)`, the denominator of the level companding curve.
const LOG10_40: f32 = 1.602_06;

/// Samples per RMS measurement window.
pub const RMS_WINDOW: usize = 512;

/// Perceptual companding of a 0..1 amplitude into a 0..1 level.
#[inline]
pub fn compand(level: f32) -> f32 {
    (level * 39.0 + 1.0).log10() / LOG10_40
}

/// A windowed level detector followed by an asymmetric one-pole smoother.
///
/// `attack` and `release` are direct mix weights in `[0, 1]`, not times. The
/// attack weight is used while the latest windowed level is above the smoothed
/// output, the release weight otherwise.
pub trait EnvelopeDetector {
    fn process(&mut self, sample: f32, attack: f32, release: f32) -> f32;

    fn reset(&mut self);
}

#[inline]
fn smooth(current: &mut f32, target: f32, attack: f32, release: f32) -> f32 {
    let coeff = if target > *current { attack } else { release };
    *current = coeff * target + (1.0 - coeff) * *current;
    *current
}

/// Running maximum of `|x|` over a 1 ms window.
#[derive(Debug, Clone)]
pub struct PeakDetector {
    window: usize,
    measured: usize,
    max: f32,
    latest: f32,
    smoothed: f32,
}

impl PeakDetector {
    pub fn new(sample_rate: f32) -> Self {
        Self {
            window: Self::window_for(sample_rate),
            measured: 0,
            max: 0.0,
            latest: 0.0,
            smoothed: 0.0,
        }
    }

    fn window_for(sample_rate: f32) -> usize {
        ((0.001 * sample_rate) as usize).max(1)
    }

    pub fn window(&self) -> usize {
        self.window
    }
}

impl EnvelopeDetector for PeakDetector {
    fn process(&mut self, sample: f32, attack: f32, release: f32) -> f32 {
        let abs = sample.abs();
        if abs > self.max {
            self.max = abs;
        }

        self.measured += 1;
        if self.measured >= self.window {
            self.latest = compand(self.max);
            self.max = 0.0;
            self.measured = 0;
        }

        smooth(&mut self.smoothed, self.latest, attack, release)
    }

    fn reset(&mut self) {
        self.measured = 0;
        self.max = 0.0;
        self.latest = 0.0;
        self.smoothed = 0.0;
    }
}

/// Root-mean-square level over a fixed 512 sample window.
#[derive(Debug, Clone, Default)]
pub struct RmsDetector {
    measured: usize,
    sum_of_squares: f32,
    latest: f32,
    smoothed: f32,
}

impl RmsDetector {
    pub fn new() -> Self {
        Self::default()
    }
}

impl EnvelopeDetector for RmsDetector {
    fn process(&mut self, sample: f32, attack: f32, release: f32) -> f32 {
        self.sum_of_squares += sample * sample;

        self.measured += 1;
        if self.measured >= RMS_WINDOW {
            let rms = (self.sum_of_squares / RMS_WINDOW as f32).sqrt();
            self.latest = compand(rms);
            self.sum_of_squares = 0.0;
            self.measured = 0;
        }

        smooth(&mut self.smoothed, self.latest, attack, release)
    }

    fn reset(&mut self) {
        self.measured = 0;
        self.sum_of_squares = 0.0;
        self.latest = 0.0;
        self.smoothed = 0.0;
    }
}
