use crate::dsp::ramp::LevelRamp;
use crate::dsp::rng::NoiseRng;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/*
Naive Oscillators
=================

The voice is built from three deliberately naive sources. None of them is
band-limited: the sawtooth and square contain harmonics above Nyquist that
fold back as aliasing. That is accepted here and treated one stage up, where
the voice renders through a 2x oversampler. Keeping the generators naive
keeps the per-sample cost to a modulo and a multiply.

Waveform Shapes:
----------------

Sawtooth: linear ramp from -level to +level once per period.
  - Sound: bright, buzzy; the classic subtractive-synthesis source
  - out = level * (2 * (t mod T) / T - 1)

Square: +level for the first half period, -level for the second.
  - Sound: hollow, woody; used here an octave below the main oscillator
  - out = +level if (t mod T) < T/2 else -level

Noise: uniform random value in [-level, +level), independent each call.
  - Sound: breath/hiss layered under the pitched sources
  - Ignores `t` entirely; scaled by the level ramp, not by time

Time Base:
----------

`sample(t)` takes elapsed time in seconds relative to the caller's block
origin. The period math is all `t mod T`, so the waveform only depends on
where `t` falls inside a cycle, not on how the caller accumulates time.

Level Handling:
---------------

Every call advances the embedded level ramp by one step, EXCEPT when the
target level is zero: then the oscillator returns exactly 0.0 and the ramp
is left frozen where it was. Setting the level to zero is a hard mute, not
a fade-out; restoring a non-zero level resumes from the frozen ramp state
on the next call.
*/

#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Waveform {
    Sawtooth,
    Square,
    Noise,
}

/// Lowest settable frequency, just under the audible floor.
pub const MIN_FREQUENCY_HZ: f32 = 10.0;
/// Highest settable frequency, top of the audible range.
pub const MAX_FREQUENCY_HZ: f32 = 20_000.0;

pub struct Oscillator {
    waveform: Waveform,
    frequency: f32,
    ramp: LevelRamp,
    rng: NoiseRng,
}

impl Oscillator {
    fn new(waveform: Waveform, level: f32, frequency: f32) -> Self {
        Self {
            waveform,
            frequency,
            ramp: LevelRamp::new(level),
            rng: NoiseRng::new(),
        }
    }

    pub fn sawtooth(level: f32, frequency: f32) -> Self {
        Self::new(Waveform::Sawtooth, level, frequency)
    }

    pub fn square(level: f32, frequency: f32) -> Self {
        Self::new(Waveform::Square, level, frequency)
    }

    /// Noise ignores frequency; it carries a fixed 0.0 that `set_frequency`
    /// can never have produced, marking it as unused.
    pub fn noise(level: f32) -> Self {
        Self::new(Waveform::Noise, level, 0.0)
    }

    /// Reseed the noise generator. Used by tests that need a repeatable
    /// noise sequence.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = NoiseRng::with_seed(seed);
        self
    }

    /// Set the oscillator frequency in Hz.
    ///
    /// Accepted only inside `MIN_FREQUENCY_HZ..=MAX_FREQUENCY_HZ`;
    /// out-of-range values leave the previous frequency in place. Rejection
    /// rather than saturation: a wild value from the control side should
    /// not yank the pitch to a range boundary.
    pub fn set_frequency(&mut self, frequency: f32) {
        if (MIN_FREQUENCY_HZ..=MAX_FREQUENCY_HZ).contains(&frequency) {
            self.frequency = frequency;
        }
    }

    /// Set the target level in [0, 1]; out-of-range values are ignored.
    pub fn set_level(&mut self, level: f32) {
        self.ramp.set_target(level);
    }

    /// Sample the waveform at block-local time `t` (seconds).
    ///
    /// Advances the level ramp one step per call while the target level is
    /// positive. A zero target mutes the output and freezes the ramp.
    pub fn sample(&mut self, t: f64) -> f32 {
        if self.ramp.target() <= 0.0 {
            return 0.0;
        }

        let level = self.ramp.advance();
        match self.waveform {
            Waveform::Sawtooth => {
                let frequency = self.frequency as f64;
                let period = 1.0 / frequency;
                let m = t % period;
                (level as f64 * (2.0 * m * frequency - 1.0)) as f32
            }
            Waveform::Square => {
                let period = 1.0 / self.frequency as f64;
                let m = t % period;
                if m < period / 2.0 {
                    level
                } else {
                    -level
                }
            }
            Waveform::Noise => self.rng.next_bipolar() * level,
        }
    }

    pub fn waveform(&self) -> Waveform {
        self.waveform
    }

    pub fn frequency(&self) -> f32 {
        self.frequency
    }

    pub fn target_level(&self) -> f32 {
        self.ramp.target()
    }

    pub fn current_level(&self) -> f32 {
        self.ramp.current()
    }
}
