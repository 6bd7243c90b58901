//! Lookahead delay line.

/// Longest lookahead a delay line is sized for.
pub const MAX_LOOKAHEAD_SECONDS: f32 = 2.0;

/// Truncate a lookahead time to whole hundredths of a second.
#[inline]
pub fn quantize_lookahead(seconds: f32) -> f32 {
    if !(seconds > 0.0) {
        return 0.0;
    }
    (seconds.min(MAX_LOOKAHEAD_SECONDS) * 100.0).floor() / 100.0
}

/// Lookahead in whole samples after quantization.
#[inline]
pub fn lookahead_samples(seconds: f32, sample_rate: f32) -> usize {
    (quantize_lookahead(seconds) * sample_rate).round() as usize
}

/// Fixed capacity ring buffer delaying one band of one channel.
///
/// The buffer is allocated once in [`LookaheadDelay::new()`]. After that the
/// write head advances one slot per sample and the read head trails it by
/// the configured delay.
#[derive(Debug, Clone)]
pub struct LookaheadDelay {
    buffer: Vec<f32>,
    write_pos: usize,
    delay: usize,
}

impl LookaheadDelay {
    /// Allocate a delay line holding [`MAX_LOOKAHEAD_SECONDS`] at `sample_rate`.
    pub fn new(sample_rate: f32) -> Self {
        Self::with_capacity((MAX_LOOKAHEAD_SECONDS * sample_rate).ceil() as usize + 1)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            buffer: vec![0.0; capacity.max(1)],
            write_pos: 0,
            delay: 0,
        }
    }

    pub fn capacity(&self) -> usize {
        self.buffer.len()
    }

    pub fn delay(&self) -> usize {
        self.delay
    }

    /// Set the delay in samples, clamped so the read head stays inside the buffer.
    pub fn set_delay(&mut self, samples: usize) {
        self.delay = samples.min(self.buffer.len() - 1);
    }

    /// Set the delay from a lookahead time, quantized to hundredths of a second.
    pub fn set_lookahead(&mut self, seconds: f32, sample_rate: f32) {
        self.set_delay(lookahead_samples(seconds, sample_rate));
    }

    /// Push one sample and return the one written `delay` samples ago.
    #[inline]
    pub fn process(&mut self, input: f32) -> f32 {
        let capacity = self.buffer.len();

        self.write_pos += 1;
        if self.write_pos == capacity {
            self.write_pos = 0;
        }
        self.buffer[self.write_pos] = input;

        let read_pos = if self.write_pos >= self.delay {
            self.write_pos - self.delay
        } else {
            self.write_pos + capacity - self.delay
        };

        self.buffer[read_pos]
    }

    pub fn reset(&mut self) {
        self.buffer.fill(0.0);
        self.write_pos = 0;
    }
}
