/*
Level Ramp
==========

Jumping an oscillator's amplitude from one value to another inside a block
produces a step discontinuity in the output signal, which is audible as a
click. The ramp smooths that out by walking the applied level toward the
requested target a fixed step at a time, once per sample evaluation.

Vocabulary
----------

  target    The level the caller asked for (0.0 to 1.0). Set from the
            control context, validated on entry.

  current   The level actually multiplied into the signal this sample.
            Trails the target while ramping up.

  step      The fixed per-call increment. Convergence time is therefore
            measured in sample() calls, i.e. it scales with the audio
            sample rate: 0 -> 1 takes 1000 calls (about 21 ms at 48 kHz).

The ramp is one-directional on purpose. Raising the target fades in over
ceil(delta / step) calls; lowering it snaps on the very next call, because
the upward comparison fails and `current` is set straight to the target.
*/

/// Per-call increment applied while ramping toward a raised target.
pub const LEVEL_STEP: f32 = 1.0e-3;

#[derive(Debug, Clone, Copy)]
pub struct LevelRamp {
    target: f32,
    current: f32,
}

impl LevelRamp {
    /// Create a ramp already settled at `level`.
    ///
    /// Out-of-range levels fall back to zero; construction is the one
    /// place where there is no previous valid value to keep.
    pub fn new(level: f32) -> Self {
        let level = if (0.0..=1.0).contains(&level) { level } else { 0.0 };
        Self {
            target: level,
            current: level,
        }
    }

    /// Request a new target level.
    ///
    /// Accepted only for `0.0 <= level <= 1.0`; anything else leaves the
    /// target unchanged. No error is surfaced - the render path stays
    /// branch-light and callers are expected to pre-clamp if they care.
    pub fn set_target(&mut self, level: f32) {
        if (0.0..=1.0).contains(&level) {
            self.target = level;
        }
    }

    /// Advance one step and return the level to apply this sample.
    ///
    /// Moves `current` up by [`LEVEL_STEP`] while below the target (clamped
    /// so it never overshoots), and snaps it down immediately when the
    /// target has been lowered.
    pub fn advance(&mut self) -> f32 {
        if self.current < self.target - f32::EPSILON {
            self.current = (self.current + LEVEL_STEP).min(self.target);
        } else {
            self.current = self.target;
        }

        debug_assert!((0.0..=1.0).contains(&self.current));
        self.current
    }

    pub fn target(&self) -> f32 {
        self.target
    }

    pub fn current(&self) -> f32 {
        self.current
    }
}
