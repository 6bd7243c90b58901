//! Metering values shared with the editor thread.

use std::sync::atomic::{AtomicU32, Ordering};

use crate::stage::DetectMode;

/// An `f32` stored as its bit pattern.
#[derive(Debug, Default)]
pub struct MeterValue(AtomicU32);

impl MeterValue {
    pub fn load(&self) -> f32 {
        f32::from_bits(self.0.load(Ordering::Relaxed))
    }

    pub fn store(&self, value: f32) {
        self.0.store(value.to_bits(), Ordering::Relaxed);
    }
}

/// Input level and gain reduction readouts.
///
/// Written by the audio thread at the end of every block, read by anyone.
/// Only the meter matching the active detect mode shows a level, the other
/// one reads zero.
#[derive(Debug, Default)]
pub struct Meters {
    pub peak: MeterValue,
    pub rms: MeterValue,
    /// Mean gain multiplier over both bands and channels, `1.0` means no
    /// compression.
    pub compression: MeterValue,
}

impl Meters {
    pub fn new() -> Self {
        let meters = Self::default();
        meters.compression.store(1.0);
        meters
    }

    pub fn publish(&self, mode: DetectMode, peak: f32, rms: f32, compression: f32) {
        match mode {
            DetectMode::Peak => {
                self.peak.store(peak);
                self.rms.store(0.0);
            }
            DetectMode::Rms => {
                self.peak.store(0.0);
                self.rms.store(rms);
            }
        }
        self.compression.store(compression);
    }

    pub fn reset(&self) {
        self.peak.store(0.0);
        self.rms.store(0.0);
        self.compression.store(1.0);
    }
}
