use std::f32::consts::PI;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/*
First-Order IIR Filter
======================

One pole, one zero, designed with the bilinear transform from the analog
prototypes H(s) = wc/(s+wc) (low-pass) and H(s) = s/(s+wc) (high-pass).

    K  = tan(pi * fc / fs)          cutoff prewarp
    a1 = (K - 1) / (K + 1)          shared feedback coefficient

    low-pass:   b0 = b1 = K / (K + 1)
    high-pass:  b0 = 1 / (K + 1),  b1 = -b0

    y[n] = b0*x[n] + b1*x[n-1] - a1*y[n-1]

| role in the chain  | stage                  | removes                      |
| ------------------ | ---------------------- | ---------------------------- |
| timbre control     | low-pass, adjustable   | harmonics above the cutoff   |
| DC / rumble block  | high-pass, fixed 100Hz | offset from naive waveforms  |

The stage is an identity pass-through until `prepare` supplies a sample
rate, so calling order mistakes degrade to "no filtering" instead of
reading garbage coefficients. The effective digital cutoff is kept below
Nyquist; requesting more than the sample rate can represent just opens the
filter all the way.
*/

#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterMode {
    LowPass,
    HighPass,
}

/// Lowest accepted cutoff in Hz.
pub const MIN_CUTOFF_HZ: f32 = 16.0;
/// Highest accepted cutoff in Hz.
pub const MAX_CUTOFF_HZ: f32 = 20_000.0;

/// Internal state magnitudes below this are flushed to exact zero by
/// `snap_to_zero`, well before f32 arithmetic hits the denormal range.
const SNAP_THRESHOLD: f32 = 1.0e-8;

pub struct FilterStage {
    mode: FilterMode,
    sample_rate: f32,
    cutoff_hz: f32,

    // Difference-equation coefficients
    b0: f32,
    b1: f32,
    a1: f32,

    // Delay line: one previous input, one previous output
    x1: f32,
    y1: f32,
}

impl FilterStage {
    fn new(mode: FilterMode, cutoff_hz: f32) -> Self {
        Self {
            mode,
            sample_rate: 0.0,
            cutoff_hz,
            b0: 1.0,
            b1: 0.0,
            a1: 0.0,
            x1: 0.0,
            y1: 0.0,
        }
    }

    pub fn lowpass(cutoff_hz: f32) -> Self {
        Self::new(FilterMode::LowPass, cutoff_hz)
    }

    pub fn highpass(cutoff_hz: f32) -> Self {
        Self::new(FilterMode::HighPass, cutoff_hz)
    }

    /// Store the sample rate, derive coefficients, clear the delay line.
    ///
    /// Must be called before rendering and again whenever the sample rate
    /// changes. The block size hint is accepted for interface symmetry with
    /// the voice but a first-order stage has nothing to size with it.
    pub fn prepare(&mut self, sample_rate: f32, _block_size_hint: usize) {
        self.sample_rate = sample_rate;
        self.update_coefficients();
        self.reset();
    }

    /// Move the cutoff. Accepted only inside `MIN_CUTOFF_HZ..=MAX_CUTOFF_HZ`;
    /// out-of-range values leave the filter untouched. Takes effect on the
    /// next processed sample.
    pub fn set_cutoff(&mut self, cutoff_hz: f32) {
        if (MIN_CUTOFF_HZ..=MAX_CUTOFF_HZ).contains(&cutoff_hz) {
            self.cutoff_hz = cutoff_hz;
            self.update_coefficients();
        }
    }

    fn update_coefficients(&mut self) {
        if self.sample_rate <= 0.0 {
            // Not prepared yet: stay an identity pass-through.
            self.b0 = 1.0;
            self.b1 = 0.0;
            self.a1 = 0.0;
            return;
        }

        let cutoff = self.cutoff_hz.min(0.49 * self.sample_rate);
        let k = (PI * cutoff / self.sample_rate).tan();
        self.a1 = (k - 1.0) / (k + 1.0);
        match self.mode {
            FilterMode::LowPass => {
                self.b0 = k / (k + 1.0);
                self.b1 = self.b0;
            }
            FilterMode::HighPass => {
                self.b0 = 1.0 / (k + 1.0);
                self.b1 = -self.b0;
            }
        }
    }

    #[inline]
    pub fn process_sample(&mut self, x: f32) -> f32 {
        let y = self.b0 * x + self.b1 * self.x1 - self.a1 * self.y1;
        self.x1 = x;
        self.y1 = y;
        y
    }

    /// Zero the delay line. Coefficients are untouched.
    pub fn reset(&mut self) {
        self.x1 = 0.0;
        self.y1 = 0.0;
    }

    /// Flush near-zero delay state to exact zero so decaying feedback can
    /// not linger in the denormal range and stall the arithmetic units.
    pub fn snap_to_zero(&mut self) {
        if self.x1.abs() < SNAP_THRESHOLD {
            self.x1 = 0.0;
        }
        if self.y1.abs() < SNAP_THRESHOLD {
            self.y1 = 0.0;
        }
    }

    pub fn mode(&self) -> FilterMode {
        self.mode
    }

    pub fn cutoff_hz(&self) -> f32 {
        self.cutoff_hz
    }
}

/// Adjustable low-pass followed by a fixed high-pass.
///
/// The low-pass is the timbre control the user hears; the high-pass sits at
/// 100 Hz and strips the DC and sub-audio offset that the naive oscillators
/// and the soft clipper introduce.
pub struct FilterChain {
    lowpass: FilterStage,
    highpass: FilterStage,
}

/// Low-pass cutoff the chain starts from, matching the product default.
pub const DEFAULT_LOWPASS_CUTOFF_HZ: f32 = 2_000.0;
/// Fixed high-pass corner for DC / rumble removal.
pub const DC_BLOCK_CUTOFF_HZ: f32 = 100.0;

impl FilterChain {
    pub fn new() -> Self {
        Self {
            lowpass: FilterStage::lowpass(DEFAULT_LOWPASS_CUTOFF_HZ),
            highpass: FilterStage::highpass(DC_BLOCK_CUTOFF_HZ),
        }
    }

    pub fn prepare(&mut self, sample_rate: f32, block_size_hint: usize) {
        self.lowpass.prepare(sample_rate, block_size_hint);
        self.highpass.prepare(sample_rate, block_size_hint);
    }

    /// Adjust the low-pass cutoff; the high-pass corner is fixed.
    pub fn set_cutoff(&mut self, cutoff_hz: f32) {
        self.lowpass.set_cutoff(cutoff_hz);
    }

    #[inline]
    pub fn process_sample(&mut self, x: f32) -> f32 {
        self.highpass.process_sample(self.lowpass.process_sample(x))
    }

    pub fn reset(&mut self) {
        self.lowpass.reset();
        self.highpass.reset();
    }

    pub fn snap_to_zero(&mut self) {
        self.lowpass.snap_to_zero();
        self.highpass.snap_to_zero();
    }

    pub fn cutoff_hz(&self) -> f32 {
        self.lowpass.cutoff_hz()
    }
}
