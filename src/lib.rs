pub mod dsp; // Allocation-free signal-processing primitives
pub mod io;
pub mod synth; // Voice orchestration and the control surface

pub use io::AudioOutput;
#[cfg(feature = "rtrb")]
pub use synth::mono::{control_channel, ControlHandle, MonoSynth};
pub use synth::mono::SynthConfig;

pub const MAX_BLOCK_SIZE: usize = 2048;
