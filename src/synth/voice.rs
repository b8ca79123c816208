use crate::dsp::filter::FilterChain;
use crate::dsp::oscillator::Oscillator;
use crate::dsp::oversample::Oversampler2x;
use crate::synth::message::OscSource;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/*
The Voice
=========

One persistent monophonic voice. Its components are constructed once and
live for the process lifetime; note events and parameter changes only
mutate their internal state.

Signal flow per block:

  main (sawtooth) ──┐
  sub  (square)  ───┼─ sum ─ zero-stuff 2x ─ low-pass ─ high-pass ─ clip ─ decimate ─ out
  noise          ───┘

The sub oscillator tracks the played note one octave below the main
(half the frequency); the noise oscillator has no pitch to track.

Time restarts at zero every block and advances by 1/sample_rate per output
sample. The oscillators reduce time modulo their period, so a waveform's
shape depends only on phase within the cycle - the block-local time base is
part of the voice's contract, not an accident.

Gating
------

`note_off` clears the gate flag and nothing else: levels and ramp state
stay where they are, and silencing is the job of the level parameters.
What the gate *means* is configurable:

  GateOnNote    an idle voice renders hard silence (all-zero blocks)
  AlwaysRender  the voice renders regardless; levels decide audibility

Both configurations exist in the wild for this instrument; the engine
defaults to GateOnNote.
*/

#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateMode {
    /// Idle blocks are hard-gated to silence.
    GateOnNote,
    /// Render every block; rely on levels for silence.
    AlwaysRender,
}

/// Default mix levels and pitch, from the shipped product.
const DEFAULT_MAIN_LEVEL: f32 = 0.05;
const DEFAULT_SUB_LEVEL: f32 = 0.02;
const DEFAULT_NOISE_LEVEL: f32 = 0.01;
const DEFAULT_FREQUENCY_HZ: f32 = 220.0;

pub struct Voice {
    main: Oscillator,
    sub: Oscillator,
    noise: Oscillator,
    chain: FilterChain,
    oversampler: Oversampler2x,

    /// Seconds per output sample; zero until `prepare` is called.
    sample_dt: f64,
    gate: bool,
    gate_mode: GateMode,
}

impl Voice {
    pub fn new(gate_mode: GateMode) -> Self {
        Self {
            main: Oscillator::sawtooth(DEFAULT_MAIN_LEVEL, DEFAULT_FREQUENCY_HZ),
            sub: Oscillator::square(DEFAULT_SUB_LEVEL, DEFAULT_FREQUENCY_HZ / 2.0),
            noise: Oscillator::noise(DEFAULT_NOISE_LEVEL),
            chain: FilterChain::new(),
            oversampler: Oversampler2x::new(),
            sample_dt: 0.0,
            gate: false,
            gate_mode,
        }
    }

    /// Must be called before rendering and whenever the sample rate
    /// changes; re-derives the filter coefficients.
    pub fn prepare(&mut self, sample_rate: f32, block_size_hint: usize) {
        self.sample_dt = 1.0 / sample_rate as f64;
        self.chain.prepare(sample_rate, block_size_hint);
    }

    /// Start a note at `freq_hz`. The sub oscillator follows one octave
    /// down; a sub frequency that falls below the oscillator's range is
    /// silently rejected there and keeps its previous pitch.
    ///
    /// Velocity is accepted for interface completeness; this instrument
    /// does not scale anything by it.
    pub fn note_on(&mut self, freq_hz: f32, _velocity: u8) {
        self.main.set_frequency(freq_hz);
        self.sub.set_frequency(freq_hz / 2.0);
        self.gate = true;
    }

    /// Clear the gate. Levels and ramp state are deliberately untouched;
    /// under `AlwaysRender` the voice keeps sounding until levels say
    /// otherwise.
    pub fn note_off(&mut self) {
        self.gate = false;
    }

    pub fn set_level(&mut self, source: OscSource, level: f32) {
        match source {
            OscSource::Main => self.main.set_level(level),
            OscSource::Sub => self.sub.set_level(level),
            OscSource::Noise => self.noise.set_level(level),
        }
    }

    pub fn set_cutoff(&mut self, cutoff_hz: f32) {
        self.chain.set_cutoff(cutoff_hz);
    }

    /// Render one mono block.
    ///
    /// An unprepared voice renders silence rather than running the filter
    /// math with undefined coefficients.
    pub fn render(&mut self, out: &mut [f32]) {
        if self.sample_dt <= 0.0 {
            out.fill(0.0);
            return;
        }
        if self.gate_mode == GateMode::GateOnNote && !self.gate {
            out.fill(0.0);
            return;
        }

        let Self {
            main,
            sub,
            noise,
            chain,
            oversampler,
            sample_dt,
            ..
        } = self;
        let dt = *sample_dt;

        oversampler.render(out, chain, |i| {
            let t = i as f64 * dt;
            main.sample(t) + sub.sample(t) + noise.sample(t)
        });
    }

    pub fn is_active(&self) -> bool {
        self.gate
    }

    pub fn gate_mode(&self) -> GateMode {
        self.gate_mode
    }

    #[cfg(test)]
    pub fn main_frequency(&self) -> f32 {
        self.main.frequency()
    }

    #[cfg(test)]
    pub fn sub_frequency(&self) -> f32 {
        self.sub.frequency()
    }
}
