//! Parameter declarations and the per-block settings snapshot.
//!
//! The host-facing parameters live in [`DualbandCompParams`]. Once per block
//! they are copied into a plain [`ParamValues`] and then converted into the
//! [`Settings`] the DSP code works with. Saved host state maps onto
//! `ParamValues` one to one: every value is stored under its parameter ID.

use std::collections::BTreeMap;

use nih_plug::prelude::*;
use nih_plug::wrapper::state::{ParamValue, PluginState};
use thiserror::Error;

use crate::crossover::{HIGH, LOW};
use crate::curve::level_to_db;
use crate::delay::MAX_LOOKAHEAD_SECONDS;
use crate::stage::{DetectMode, BANDS};

/// Thresholds quieter than this are treated as [`SILENT_THRESHOLD_DB`].
const THRESHOLD_FLOOR_DB: f32 = -100.0;
const SILENT_THRESHOLD_DB: f32 = -60.0;

/// Attack and release controls are subtracted from this to get a coefficient.
const COEFF_BASE: f32 = 0.1;

#[derive(Debug, Error)]
pub enum ParamError {
    #[error("unknown parameter `{0}`")]
    UnknownName(String),

    #[error("parameter index {0} out of range")]
    IndexOutOfRange(usize),

    #[error("`{0}` is a meter output and cannot be stored")]
    MeterOutput(&'static str),

    #[error("saved value for `{0}` has the wrong type")]
    InvalidValue(&'static str),
}

/// Stable parameter order. The discriminant is the parameter's index.
///
/// Indices 0-2 control the highpass band and 7-9 the lowpass band. Indices
/// 4-6 are the meter outputs, which are published through
/// [`Meters`](crate::meters::Meters) rather than stored here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParamId {
    HighThreshold,
    HighRatio,
    HighMakeup,
    DetectMode,
    PeakMeter,
    RmsMeter,
    CompressionMeter,
    LowThreshold,
    LowRatio,
    LowMakeup,
    Attack,
    Release,
    CentreFreq,
    Mono,
    Knee,
    Lookahead,
}

impl ParamId {
    pub const ALL: [ParamId; 16] = [
        ParamId::HighThreshold,
        ParamId::HighRatio,
        ParamId::HighMakeup,
        ParamId::DetectMode,
        ParamId::PeakMeter,
        ParamId::RmsMeter,
        ParamId::CompressionMeter,
        ParamId::LowThreshold,
        ParamId::LowRatio,
        ParamId::LowMakeup,
        ParamId::Attack,
        ParamId::Release,
        ParamId::CentreFreq,
        ParamId::Mono,
        ParamId::Knee,
        ParamId::Lookahead,
    ];

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn from_index(index: usize) -> Result<Self, ParamError> {
        Self::ALL
            .get(index)
            .copied()
            .ok_or(ParamError::IndexOutOfRange(index))
    }

    pub fn is_meter(self) -> bool {
        matches!(
            self,
            ParamId::PeakMeter | ParamId::RmsMeter | ParamId::CompressionMeter
        )
    }

    /// The ID used for both the host parameter and the saved state.
    pub fn name(self) -> &'static str {
        match self {
            ParamId::HighThreshold => "high_threshold",
            ParamId::HighRatio => "high_ratio",
            ParamId::HighMakeup => "high_makeup",
            ParamId::DetectMode => "detect_mode",
            ParamId::PeakMeter => "peak_meter",
            ParamId::RmsMeter => "rms_meter",
            ParamId::CompressionMeter => "compression_meter",
            ParamId::LowThreshold => "low_threshold",
            ParamId::LowRatio => "low_ratio",
            ParamId::LowMakeup => "low_makeup",
            ParamId::Attack => "attack",
            ParamId::Release => "release",
            ParamId::CentreFreq => "centre_freq",
            ParamId::Mono => "mono",
            ParamId::Knee => "knee",
            ParamId::Lookahead => "lookahead",
        }
    }

    pub fn from_name(name: &str) -> Result<Self, ParamError> {
        Self::ALL
            .iter()
            .copied()
            .find(|id| id.name() == name)
            .ok_or_else(|| ParamError::UnknownName(name.to_owned()))
    }
}

/// Raw control values, exactly as the host sees them.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParamValues {
    /// Linear, 0..1.
    pub high_threshold: f32,
    /// 1..16.
    pub high_ratio: f32,
    /// Linear, 1..5.
    pub high_makeup: f32,
    /// 0 for peak, 1 for RMS.
    pub detect_mode: f32,
    pub low_threshold: f32,
    pub low_ratio: f32,
    pub low_makeup: f32,
    /// 0..0.09999.
    pub attack: f32,
    /// 0.099..0.09999.
    pub release: f32,
    /// Hz.
    pub centre_freq: f32,
    /// 0 for stereo, 1 for mono.
    pub mono: f32,
    /// Linear, 1..3.
    pub knee: f32,
    /// Seconds.
    pub lookahead: f32,
}

impl Default for ParamValues {
    fn default() -> Self {
        Self {
            high_threshold: 1.0,
            high_ratio: 1.0,
            high_makeup: 1.0,
            detect_mode: 0.0,
            low_threshold: 1.0,
            low_ratio: 1.0,
            low_makeup: 1.0,
            attack: 0.0,
            release: 0.099,
            centre_freq: 1000.0,
            mono: 0.0,
            knee: 1.0,
            lookahead: 0.0,
        }
    }
}

impl ParamValues {
    fn slot(&mut self, id: ParamId) -> Result<&mut f32, ParamError> {
        Ok(match id {
            ParamId::HighThreshold => &mut self.high_threshold,
            ParamId::HighRatio => &mut self.high_ratio,
            ParamId::HighMakeup => &mut self.high_makeup,
            ParamId::DetectMode => &mut self.detect_mode,
            ParamId::LowThreshold => &mut self.low_threshold,
            ParamId::LowRatio => &mut self.low_ratio,
            ParamId::LowMakeup => &mut self.low_makeup,
            ParamId::Attack => &mut self.attack,
            ParamId::Release => &mut self.release,
            ParamId::CentreFreq => &mut self.centre_freq,
            ParamId::Mono => &mut self.mono,
            ParamId::Knee => &mut self.knee,
            ParamId::Lookahead => &mut self.lookahead,
            ParamId::PeakMeter | ParamId::RmsMeter | ParamId::CompressionMeter => {
                return Err(ParamError::MeterOutput(id.name()))
            }
        })
    }

    pub fn get(&self, id: ParamId) -> Result<f32, ParamError> {
        Ok(match id {
            ParamId::HighThreshold => self.high_threshold,
            ParamId::HighRatio => self.high_ratio,
            ParamId::HighMakeup => self.high_makeup,
            ParamId::DetectMode => self.detect_mode,
            ParamId::LowThreshold => self.low_threshold,
            ParamId::LowRatio => self.low_ratio,
            ParamId::LowMakeup => self.low_makeup,
            ParamId::Attack => self.attack,
            ParamId::Release => self.release,
            ParamId::CentreFreq => self.centre_freq,
            ParamId::Mono => self.mono,
            ParamId::Knee => self.knee,
            ParamId::Lookahead => self.lookahead,
            ParamId::PeakMeter | ParamId::RmsMeter | ParamId::CompressionMeter => {
                return Err(ParamError::MeterOutput(id.name()))
            }
        })
    }

    pub fn set(&mut self, id: ParamId, value: f32) -> Result<(), ParamError> {
        *self.slot(id)? = value;
        Ok(())
    }

    pub fn get_index(&self, index: usize) -> Result<f32, ParamError> {
        self.get(ParamId::from_index(index)?)
    }

    pub fn set_index(&mut self, index: usize, value: f32) -> Result<(), ParamError> {
        self.set(ParamId::from_index(index)?, value)
    }

    pub fn get_by_name(&self, name: &str) -> Result<f32, ParamError> {
        self.get(ParamId::from_name(name)?)
    }

    pub fn set_by_name(&mut self, name: &str, value: f32) -> Result<(), ParamError> {
        self.set(ParamId::from_name(name)?, value)
    }

    /// Store every value under its parameter ID, in the same shape nih_plug
    /// saves host state.
    pub fn to_plugin_state(&self) -> PluginState {
        let params = ParamId::ALL
            .iter()
            .filter(|id| !id.is_meter())
            .filter_map(|&id| {
                let value = self.get(id).ok()?;
                let value = match id {
                    ParamId::DetectMode => ParamValue::I32(DetectMode::from_raw(value).to_index() as i32),
                    ParamId::Mono => ParamValue::Bool(value >= 0.5),
                    _ => ParamValue::F32(value),
                };
                Some((id.name().to_owned(), value))
            })
            .collect();

        PluginState {
            version: env!("CARGO_PKG_VERSION").to_owned(),
            params,
            fields: BTreeMap::new(),
        }
    }

    /// Restore from saved host state. IDs missing from the state keep their
    /// defaults.
    pub fn from_plugin_state(state: &PluginState) -> Result<Self, ParamError> {
        let mut values = Self::default();
        for (name, value) in &state.params {
            let id = ParamId::from_name(name)?;
            values.set(id, decode(id, value)?)?;
        }
        Ok(values)
    }
}

fn decode(id: ParamId, value: &ParamValue) -> Result<f32, ParamError> {
    if id.is_meter() {
        return Err(ParamError::MeterOutput(id.name()));
    }

    match (id, value) {
        (_, ParamValue::F32(v)) => Ok(*v),
        (_, ParamValue::I32(v)) => Ok(*v as f32),
        (_, ParamValue::Bool(v)) => Ok(if *v { 1.0 } else { 0.0 }),
        (ParamId::DetectMode, ParamValue::String(name)) => match name.as_str() {
            "Peak" => Ok(DetectMode::Peak.to_raw()),
            "RMS" => Ok(DetectMode::Rms.to_raw()),
            _ => Err(ParamError::InvalidValue(id.name())),
        },
        (_, ParamValue::String(_)) => Err(ParamError::InvalidValue(id.name())),
    }
}

/// Drop saved entries this version cannot restore, logging each one.
pub fn sanitize_plugin_state(state: &mut PluginState) {
    state.params.retain(|name, value| {
        match ParamId::from_name(name).and_then(|id| decode(id, value)) {
            Ok(_) => true,
            Err(err) => {
                nih_log!("Dropping saved parameter: {}", err);
                false
            }
        }
    });
}

/// Gain computer settings for one band.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BandSettings {
    pub threshold_db: f32,
    pub ratio: f32,
    /// Linear multiplier.
    pub makeup: f32,
}

/// Everything the DSP code reads from the parameters, fixed for one block.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Settings {
    /// Indexed by [`LOW`] and [`HIGH`].
    pub bands: [BandSettings; BANDS],
    pub attack: f32,
    pub release: f32,
    pub knee_db: f32,
    pub detect_mode: DetectMode,
    pub centre_freq: f32,
    pub mono: bool,
    /// Seconds, clamped to what a delay line can hold.
    pub lookahead: f32,
}

fn threshold_db(linear: f32) -> f32 {
    let db = level_to_db(linear);
    // NaN and -inf land here as well
    if db >= THRESHOLD_FLOOR_DB {
        db
    } else {
        SILENT_THRESHOLD_DB
    }
}

fn makeup(linear: f32) -> f32 {
    if linear > 0.0 {
        1.0 + level_to_db(linear)
    } else {
        1.0
    }
}

fn coefficient(control: f32) -> f32 {
    (COEFF_BASE - control).clamp(0.0, 1.0)
}

fn knee_db(linear: f32) -> f32 {
    if linear > 0.0 {
        level_to_db(linear)
    } else {
        0.0
    }
}

impl Settings {
    pub fn from_values(values: &ParamValues) -> Self {
        let band = |threshold: f32, ratio: f32, gain: f32| BandSettings {
            threshold_db: threshold_db(threshold),
            ratio,
            makeup: makeup(gain),
        };

        let mut bands = [band(1.0, 1.0, 1.0); BANDS];
        bands[LOW] = band(values.low_threshold, values.low_ratio, values.low_makeup);
        bands[HIGH] = band(values.high_threshold, values.high_ratio, values.high_makeup);

        let lookahead = if values.lookahead > 0.0 {
            values.lookahead.min(MAX_LOOKAHEAD_SECONDS)
        } else {
            0.0
        };

        Self {
            bands,
            attack: coefficient(values.attack),
            release: coefficient(values.release),
            knee_db: knee_db(values.knee),
            detect_mode: DetectMode::from_raw(values.detect_mode),
            centre_freq: values.centre_freq,
            mono: values.mono >= 0.5,
            lookahead,
        }
    }
}

#[derive(Params)]
pub struct DualbandCompParams {
    #[id = "high_threshold"]
    pub high_threshold: FloatParam,
    #[id = "high_ratio"]
    pub high_ratio: FloatParam,
    #[id = "high_makeup"]
    pub high_makeup: FloatParam,

    /// Peak or RMS level detection.
    #[id = "detect_mode"]
    pub detect_mode: EnumParam<DetectMode>,

    #[id = "low_threshold"]
    pub low_threshold: FloatParam,
    #[id = "low_ratio"]
    pub low_ratio: FloatParam,
    #[id = "low_makeup"]
    pub low_makeup: FloatParam,

    /// Subtracted from 0.1 to get the attack smoothing weight.
    #[id = "attack"]
    pub attack: FloatParam,
    /// Subtracted from 0.1 to get the release smoothing weight.
    #[id = "release"]
    pub release: FloatParam,

    /// Crossover frequency between the two bands.
    #[id = "centre_freq"]
    pub centre_freq: FloatParam,

    /// Sum both bands and channels into a mono signal.
    #[id = "mono"]
    pub mono: BoolParam,

    #[id = "knee"]
    pub knee: FloatParam,

    /// Lookahead in seconds, quantized to 10 ms steps.
    #[id = "lookahead"]
    pub lookahead: FloatParam,
}

fn threshold_param(name: &str, value: f32) -> FloatParam {
    FloatParam::new(name, value, FloatRange::Linear { min: 0.0, max: 1.0 })
        .with_unit(" dB")
        .with_value_to_string(formatters::v2s_f32_gain_to_db(1))
        .with_string_to_value(formatters::s2v_f32_gain_to_db())
}

fn ratio_param(name: &str, value: f32) -> FloatParam {
    FloatParam::new(name, value, FloatRange::Linear { min: 1.0, max: 16.0 })
        .with_unit(":1")
        .with_value_to_string(formatters::v2s_f32_rounded(1))
}

fn makeup_param(name: &str, value: f32) -> FloatParam {
    FloatParam::new(name, value, FloatRange::Linear { min: 1.0, max: 5.0 })
        .with_value_to_string(formatters::v2s_f32_rounded(2))
}

impl Default for DualbandCompParams {
    fn default() -> Self {
        Self::with_values(&ParamValues::default())
    }
}

impl DualbandCompParams {
    /// Build the host parameters starting out at `values`.
    pub fn with_values(values: &ParamValues) -> Self {
        Self {
            high_threshold: threshold_param("High Threshold", values.high_threshold),
            high_ratio: ratio_param("High Ratio", values.high_ratio),
            high_makeup: makeup_param("High Makeup Gain", values.high_makeup),
            detect_mode: EnumParam::new("Detect Mode", DetectMode::from_raw(values.detect_mode)),
            low_threshold: threshold_param("Low Threshold", values.low_threshold),
            low_ratio: ratio_param("Low Ratio", values.low_ratio),
            low_makeup: makeup_param("Low Makeup Gain", values.low_makeup),
            attack: FloatParam::new(
                "Attack",
                values.attack,
                FloatRange::Linear { min: 0.0, max: 0.09999 },
            )
            .with_value_to_string(formatters::v2s_f32_rounded(5)),
            release: FloatParam::new(
                "Release",
                values.release,
                FloatRange::Linear { min: 0.099, max: 0.09999 },
            )
            .with_value_to_string(formatters::v2s_f32_rounded(5)),
            centre_freq: FloatParam::new(
                "Centre Frequency",
                values.centre_freq,
                FloatRange::Skewed {
                    min: 20.0,
                    max: 5000.0,
                    factor: FloatRange::skew_factor(-1.0),
                },
            )
            .with_unit(" Hz")
            .with_value_to_string(formatters::v2s_f32_hz_then_khz(0))
            .with_string_to_value(formatters::s2v_f32_hz_then_khz()),
            mono: BoolParam::new("Mono", values.mono >= 0.5),
            knee: FloatParam::new(
                "Knee",
                values.knee,
                FloatRange::Linear { min: 1.0, max: 3.0 },
            )
            .with_unit(" dB")
            .with_value_to_string(formatters::v2s_f32_gain_to_db(1)),
            lookahead: FloatParam::new(
                "Lookahead",
                values.lookahead,
                FloatRange::Linear { min: 0.0, max: 0.2 },
            )
            .with_unit(" s")
            .with_value_to_string(formatters::v2s_f32_rounded(2)),
        }
    }

    /// Snapshot the current plain values.
    pub fn values(&self) -> ParamValues {
        ParamValues {
            high_threshold: self.high_threshold.value(),
            high_ratio: self.high_ratio.value(),
            high_makeup: self.high_makeup.value(),
            detect_mode: self.detect_mode.value().to_raw(),
            low_threshold: self.low_threshold.value(),
            low_ratio: self.low_ratio.value(),
            low_makeup: self.low_makeup.value(),
            attack: self.attack.value(),
            release: self.release.value(),
            centre_freq: self.centre_freq.value(),
            mono: if self.mono.value() { 1.0 } else { 0.0 },
            knee: self.knee.value(),
            lookahead: self.lookahead.value(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_indices_are_stable() {
        for (i, id) in ParamId::ALL.iter().enumerate() {
            assert_eq!(id.index(), i);
            assert_eq!(ParamId::from_index(i).unwrap(), *id);
            assert_eq!(ParamId::from_name(id.name()).unwrap(), *id);
        }
        assert!(matches!(ParamId::from_index(16), Err(ParamError::IndexOutOfRange(16))));
    }

    #[test]
    fn test_index_layout() {
        assert_eq!(ParamId::from_index(0).unwrap(), ParamId::HighThreshold);
        assert_eq!(ParamId::from_index(1).unwrap(), ParamId::HighRatio);
        assert_eq!(ParamId::from_index(2).unwrap(), ParamId::HighMakeup);
        assert_eq!(ParamId::from_index(3).unwrap(), ParamId::DetectMode);
        assert_eq!(ParamId::from_index(7).unwrap(), ParamId::LowThreshold);
        assert_eq!(ParamId::from_index(15).unwrap(), ParamId::Lookahead);

        let meters: Vec<usize> = ParamId::ALL
            .iter()
            .filter(|id| id.is_meter())
            .map(|id| id.index())
            .collect();
        assert_eq!(meters, vec![4, 5, 6]);
    }

    #[test]
    fn test_low_indices_drive_the_high_band() {
        let mut values = ParamValues::default();
        values.set_index(0, 0.1).unwrap();
        values.set_index(1, 8.0).unwrap();
        let settings = Settings::from_values(&values);
        assert!((settings.bands[HIGH].threshold_db - -20.0).abs() < 1e-4);
        assert_eq!(settings.bands[HIGH].ratio, 8.0);
        assert_eq!(settings.bands[LOW].threshold_db, 0.0);
        assert_eq!(settings.bands[LOW].ratio, 1.0);
    }

    #[test]
    fn test_meter_slots_are_not_stored() {
        let mut values = ParamValues::default();
        for index in 4..=6 {
            assert!(matches!(values.set_index(index, 0.5), Err(ParamError::MeterOutput(_))));
            assert!(matches!(values.get_index(index), Err(ParamError::MeterOutput(_))));
        }
        assert_eq!(values, ParamValues::default());
    }

    #[test]
    fn test_access_by_index_and_name() {
        let mut values = ParamValues::default();
        values.set_index(ParamId::Knee.index(), 2.5).unwrap();
        assert_eq!(values.knee, 2.5);
        values.set_by_name("centre_freq", 250.0).unwrap();
        assert_eq!(values.get(ParamId::CentreFreq).unwrap(), 250.0);
        assert_eq!(values.get_by_name("knee").unwrap(), 2.5);
        assert!(matches!(
            values.set_by_name("volume", 1.0),
            Err(ParamError::UnknownName(name)) if name == "volume"
        ));
    }

    #[test]
    fn test_get_reads_every_stored_field() {
        let mut values = ParamValues::default();
        for (i, id) in ParamId::ALL.iter().enumerate().filter(|(_, id)| !id.is_meter()) {
            values.set(*id, i as f32 + 0.5).unwrap();
        }
        for (i, id) in ParamId::ALL.iter().enumerate().filter(|(_, id)| !id.is_meter()) {
            assert_eq!(values.get(*id).unwrap(), i as f32 + 0.5);
        }
    }

    #[test]
    fn test_plugin_state_round_trip() {
        let values = ParamValues {
            low_ratio: 4.0,
            high_threshold: 0.25,
            lookahead: 0.05,
            detect_mode: 1.0,
            mono: 1.0,
            ..ParamValues::default()
        };

        let state = values.to_plugin_state();
        assert_eq!(state.params.len(), 13);
        assert!(!state.params.contains_key("peak_meter"));
        assert!(matches!(state.params.get("mono"), Some(ParamValue::Bool(true))));
        assert_eq!(ParamValues::from_plugin_state(&state).unwrap(), values);
    }

    #[test]
    fn test_plugin_state_missing_ids_use_defaults() {
        let mut state = ParamValues::default().to_plugin_state();
        state.params.clear();
        state.params.insert("low_ratio".to_owned(), ParamValue::F32(3.0));
        state.params.insert("detect_mode".to_owned(), ParamValue::String("RMS".to_owned()));

        let values = ParamValues::from_plugin_state(&state).unwrap();
        assert_eq!(values.low_ratio, 3.0);
        assert_eq!(values.detect_mode, 1.0);
        assert_eq!(values.centre_freq, ParamValues::default().centre_freq);
    }

    #[test]
    fn test_sanitize_drops_unrestorable_entries() {
        let mut state = ParamValues::default().to_plugin_state();
        state.params.insert("volume".to_owned(), ParamValue::F32(1.0));
        state.params.insert("rms_meter".to_owned(), ParamValue::F32(0.3));
        state.params.insert("knee".to_owned(), ParamValue::String("soft".to_owned()));
        assert!(ParamValues::from_plugin_state(&state).is_err());

        sanitize_plugin_state(&mut state);
        assert!(!state.params.contains_key("volume"));
        assert!(!state.params.contains_key("rms_meter"));
        assert!(!state.params.contains_key("knee"));
        assert_eq!(state.params.len(), 12);

        let values = ParamValues::from_plugin_state(&state).unwrap();
        assert_eq!(values, ParamValues::default());
    }

    #[test]
    fn test_settings_mapping() {
        let mut values = ParamValues::default();
        values.low_threshold = 0.1;
        values.high_threshold = 0.0;
        values.low_makeup = 1.0;
        values.high_makeup = 2.0;
        values.attack = 0.05;
        values.release = 0.099;
        values.knee = 2.0;
        values.mono = 1.0;
        let settings = Settings::from_values(&values);

        assert!((settings.bands[LOW].threshold_db - -20.0).abs() < 1e-4);
        assert_eq!(settings.bands[HIGH].threshold_db, SILENT_THRESHOLD_DB);
        assert_eq!(settings.bands[LOW].makeup, 1.0);
        assert!((settings.bands[HIGH].makeup - (1.0 + 6.0206)).abs() < 1e-3);
        assert!((settings.attack - 0.05).abs() < 1e-6);
        assert!((settings.release - 0.001).abs() < 1e-6);
        assert!((settings.knee_db - 6.0206).abs() < 1e-3);
        assert_eq!(settings.detect_mode, DetectMode::Peak);
        assert!(settings.mono);
    }

    #[test]
    fn test_lookahead_is_clamped_on_ingestion() {
        let mut values = ParamValues::default();
        values.lookahead = 30.0;
        assert_eq!(Settings::from_values(&values).lookahead, MAX_LOOKAHEAD_SECONDS);
        values.lookahead = -1.0;
        assert_eq!(Settings::from_values(&values).lookahead, 0.0);
        values.lookahead = f32::NAN;
        assert_eq!(Settings::from_values(&values).lookahead, 0.0);
    }

    #[test]
    fn test_host_params_match_plain_defaults() {
        let params = DualbandCompParams::default();
        assert_eq!(params.values(), ParamValues::default());
    }

    #[test]
    fn test_host_params_start_at_given_values() {
        let values = ParamValues {
            high_threshold: 0.3,
            low_makeup: 2.0,
            detect_mode: 1.0,
            mono: 1.0,
            lookahead: 0.1,
            ..ParamValues::default()
        };
        assert_eq!(DualbandCompParams::with_values(&values).values(), values);
    }
}
