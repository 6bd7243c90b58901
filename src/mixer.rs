use crate::crossover::{HIGH, LOW};
use crate::stage::StageOutput;

/// Recombines the compressed bands into the output frame.
pub struct StereoMixer;

impl StereoMixer {
    /// Stereo: each output channel is the average of its own two bands.
    /// Mono: both channels carry the four-way mono mix.
    #[inline]
    pub fn mix(stage: &StageOutput, mono: bool) -> [f32; 2] {
        if mono {
            [stage.mono_mix, stage.mono_mix]
        } else {
            [
                (stage.bands[0][LOW] + stage.bands[0][HIGH]) / 2.0,
                (stage.bands[1][LOW] + stage.bands[1][HIGH]) / 2.0,
            ]
        }
    }
}
