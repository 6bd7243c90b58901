use nih_plug::prelude::*;
use nih_plug::wrapper::state::PluginState;
use std::sync::Arc;

pub mod crossover;
pub mod curve;
pub mod delay;
pub mod envelope;
pub mod meters;
pub mod mixer;
pub mod params;
pub mod processor;
pub mod stage;

pub use meters::Meters;
pub use params::{DualbandCompParams, ParamError, ParamId, ParamValues, Settings};
pub use processor::Processor;
pub use stage::DetectMode;

const DEFAULT_SAMPLE_RATE: f32 = 44100.0;

pub struct DualbandComp {
    params: Arc<DualbandCompParams>,
    meters: Arc<Meters>,
    processor: Processor,
    latency_samples: u32,
}

impl Default for DualbandComp {
    fn default() -> Self {
        let meters = Arc::new(Meters::new());
        Self {
            params: Arc::new(DualbandCompParams::default()),
            processor: Processor::new(DEFAULT_SAMPLE_RATE, meters.clone()),
            meters,
            latency_samples: 0,
        }
    }
}

impl Plugin for DualbandComp {
    const NAME: &'static str = "Dualband Comp";
    const VENDOR: &'static str = "Daishi Suzuki";
    const URL: &'static str = env!("CARGO_PKG_HOMEPAGE");
    const EMAIL: &'static str = "zukky.rikugame@gmail.com";

    const VERSION: &'static str = env!("CARGO_PKG_VERSION");

    // Both bands are compressed per channel, so only a stereo layout makes sense.
    const AUDIO_IO_LAYOUTS: &'static [AudioIOLayout] = &[AudioIOLayout {
        main_input_channels: NonZeroU32::new(2),
        main_output_channels: NonZeroU32::new(2),

        aux_input_ports: &[],
        aux_output_ports: &[],

        names: PortNames::const_default(),
    }];

    const MIDI_INPUT: MidiConfig = MidiConfig::None;
    const MIDI_OUTPUT: MidiConfig = MidiConfig::None;

    // Parameters are read once per block
    const SAMPLE_ACCURATE_AUTOMATION: bool = false;

    type SysExMessage = ();
    type BackgroundTask = ();

    fn params(&self) -> Arc<dyn Params> {
        self.params.clone()
    }

    fn filter_state(state: &mut PluginState) {
        params::sanitize_plugin_state(state);
    }

    fn initialize(
        &mut self,
        _audio_io_layout: &AudioIOLayout,
        buffer_config: &BufferConfig,
        context: &mut impl InitContext<Self>,
    ) -> bool {
        // Delay lines are sized here since this is the only place allowed to allocate
        self.processor.initialise(buffer_config.sample_rate);

        let settings = Settings::from_values(&self.params.values());
        self.processor.prepare(&settings);
        self.latency_samples = self.processor.latency_samples();
        context.set_latency_samples(self.latency_samples);

        true
    }

    fn reset(&mut self) {
        self.processor.reset();
    }

    fn process(
        &mut self,
        buffer: &mut Buffer,
        _aux: &mut AuxiliaryBuffers,
        context: &mut impl ProcessContext<Self>,
    ) -> ProcessStatus {
        if buffer.samples() == 0 {
            return ProcessStatus::Normal;
        }

        let settings = Settings::from_values(&self.params.values());

        let slices = buffer.as_slice();
        let num_channels = slices.len();
        let [left, right] = slices else {
            nih_debug_assert_failure!("Expected a stereo buffer, got {} channels", num_channels);
            return ProcessStatus::Normal;
        };
        self.processor.process_in_place(left, right, &settings);

        let latency = self.processor.latency_samples();
        if latency != self.latency_samples {
            self.latency_samples = latency;
            context.set_latency_samples(latency);
        }

        ProcessStatus::Normal
    }
}

impl ClapPlugin for DualbandComp {
    const CLAP_ID: &'static str = "com.zukky.dualband-comp";
    const CLAP_DESCRIPTION: Option<&'static str> = Some("Two-band lookahead compressor");
    const CLAP_MANUAL_URL: Option<&'static str> = Some(Self::URL);
    const CLAP_SUPPORT_URL: Option<&'static str> = None;

    const CLAP_FEATURES: &'static [ClapFeature] = &[
        ClapFeature::AudioEffect,
        ClapFeature::Stereo,
        ClapFeature::Compressor,
    ];
}

impl Vst3Plugin for DualbandComp {
    const VST3_CLASS_ID: [u8; 16] = *b"DualbandComp!!!!";

    const VST3_SUBCATEGORIES: &'static [Vst3SubCategory] =
        &[Vst3SubCategory::Fx, Vst3SubCategory::Dynamics];
}

nih_export_clap!(DualbandComp);
nih_export_vst3!(DualbandComp);
