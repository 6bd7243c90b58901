//! Static gain computer with a quadratic soft knee.

use nih_plug::prelude::util;

/// `20 * log10(|x|)` without any floor. Callers guard against zero.
#[inline]
pub fn level_to_db(level: f32) -> f32 {
    20.0 * level.abs().log10()
}

/// Output level in dB for an input level in dB.
///
/// Below the knee the level passes unchanged, inside the knee it follows a
/// second order interpolation and above it the full ratio applies. A knee
/// width of zero or less is a hard knee.
pub fn transfer_db(input_db: f32, threshold_db: f32, ratio: f32, knee_db: f32) -> f32 {
    let overshoot = input_db - threshold_db;

    if knee_db <= 0.0 {
        return if overshoot > 0.0 {
            threshold_db + overshoot / ratio
        } else {
            input_db
        };
    }

    if 2.0 * overshoot < -knee_db {
        input_db
    } else if 2.0 * overshoot.abs() <= knee_db {
        let x = overshoot + knee_db / 2.0;
        input_db + ((1.0 / ratio - 1.0) * x * x) / (2.0 * knee_db)
    } else {
        threshold_db + overshoot / ratio
    }
}

/// Linear gain multiplier for a detected level.
///
/// `level` is the linear detector output. Silence, non-positive levels and a
/// non-positive ratio all return a gain of exactly `1.0`.
pub fn compress(level: f32, threshold_db: f32, ratio: f32, knee_db: f32) -> f32 {
    // Also rejects NaN
    if !(level > 0.0) || !(ratio > 0.0) {
        return 1.0;
    }

    let input_db = level_to_db(level);
    let output_db = transfer_db(input_db, threshold_db, ratio, knee_db);

    util::db_to_gain(output_db) / util::db_to_gain(input_db)
}
