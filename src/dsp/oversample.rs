use crate::dsp::clip;
use crate::dsp::filter::FilterChain;
use crate::MAX_BLOCK_SIZE;

/*
2x Zero-Stuffing Oversampler
============================

The oscillators are naive, so their harmonics above Nyquist alias back into
the audible band. This stage takes the crude classic countermeasure:

  1. Zero-stuff: build a double-rate buffer where every even index holds a
     true oscillator-mix sample and every odd index holds 0.
  2. Filter: push the whole buffer through the voice's filter chain. The
     low-pass doubles as a reconstruction filter - it smears the inserted
     zeros into interpolated values approximating the band-limited signal.
  3. Clip: apply the soft clipper at the doubled rate, where its new
     harmonics have twice the headroom before folding.
  4. Decimate: keep the even (original-origin, now filtered) samples and
     discard the odd ones.

The chain is reset before each block and denormal-snapped after it, so no
stale filter energy bleeds across the zero-stuffed block boundary.

This is NOT a polyphase oversampler: no interpolation kernel, no
compensation for the energy the stuffed zeros remove. The crude shape,
including the keep-even decimation, is deliberate and matched to the naive
oscillators it serves.
*/

pub const OVERSAMPLE_FACTOR: usize = 2;

pub struct Oversampler2x {
    scratch: Vec<f32>,
}

impl Oversampler2x {
    pub fn new() -> Self {
        Self {
            scratch: vec![0.0; OVERSAMPLE_FACTOR * MAX_BLOCK_SIZE],
        }
    }

    /// Fill `out` with filtered, soft-clipped samples pulled from `source`.
    ///
    /// `source(i)` must return the oscillator-mix sample for output index
    /// `i`; it is called exactly once per index, in order, so source-side
    /// state (level ramps, PRNG draws) advances at the output rate. Blocks
    /// longer than [`MAX_BLOCK_SIZE`] are truncated to it.
    pub fn render<F>(&mut self, out: &mut [f32], chain: &mut FilterChain, mut source: F)
    where
        F: FnMut(usize) -> f32,
    {
        let n = out.len().min(MAX_BLOCK_SIZE);
        let scratch = &mut self.scratch[..OVERSAMPLE_FACTOR * n];

        for (i, pair) in scratch.chunks_exact_mut(OVERSAMPLE_FACTOR).enumerate() {
            pair[0] = source(i);
            pair[1] = 0.0;
        }

        chain.reset();
        for sample in scratch.iter_mut() {
            *sample = clip::soft_clip(chain.process_sample(*sample));
        }
        chain.snap_to_zero();

        for (slot, pair) in out[..n]
            .iter_mut()
            .zip(scratch.chunks_exact(OVERSAMPLE_FACTOR))
        {
            *slot = pair[0];
        }
    }
}

impl Default for Oversampler2x {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn source_is_pulled_once_per_output_index() {
        let mut oversampler = Oversampler2x::new();
        let mut chain = FilterChain::new();
        let mut out = vec![0.0f32; 64];

        let mut calls = Vec::new();
        oversampler.render(&mut out, &mut chain, |i| {
            calls.push(i);
            0.0
        });

        let expected: Vec<usize> = (0..64).collect();
        assert_eq!(calls, expected);
    }

    #[test]
    fn decimation_keeps_the_original_origin_samples() {
        // An unprepared chain is an identity pass-through, and at these
        // amplitudes the cubic clip term is below f32 resolution, so the
        // output must reproduce the source - not the stuffed zeros.
        let mut oversampler = Oversampler2x::new();
        let mut chain = FilterChain::new();
        let mut out = vec![0.0f32; 8];

        oversampler.render(&mut out, &mut chain, |i| (i as f32 + 1.0) * 1.0e-4);

        for (i, &value) in out.iter().enumerate() {
            let expected = (i as f32 + 1.0) * 1.0e-4;
            assert!(
                (value - expected).abs() < 1.0e-7,
                "index {i}: expected {expected}, got {value}"
            );
        }
    }

    #[test]
    fn chain_state_does_not_leak_across_blocks() {
        let mut oversampler = Oversampler2x::new();
        let mut chain = FilterChain::new();
        chain.prepare(48_000.0, 128);

        let mut out = vec![0.0f32; 128];
        oversampler.render(&mut out, &mut chain, |_| 0.9);
        assert!(out.iter().any(|s| s.abs() > 0.0), "driven block is audible");

        // A silent source must produce an exactly silent block: the reset
        // before the block dropped whatever the previous one left behind.
        oversampler.render(&mut out, &mut chain, |_| 0.0);
        assert!(out.iter().all(|&s| s == 0.0), "silent block must be exact zeros");
    }

    #[test]
    fn output_is_bounded_by_the_clipper() {
        let mut oversampler = Oversampler2x::new();
        let mut chain = FilterChain::new();
        chain.prepare(48_000.0, 128);

        let mut out = vec![0.0f32; 256];
        // Slam the input far past full scale.
        oversampler.render(&mut out, &mut chain, |i| if i % 2 == 0 { 5.0 } else { -5.0 });

        // The clipper's cubic branch peaks at 4/3 (x = 1); nothing that
        // leaves this stage may exceed it.
        for &s in &out {
            assert!(s.is_finite());
            assert!(s.abs() <= 4.0 / 3.0 + 1e-6, "sample {s} escaped the clipper");
        }
    }

    #[test]
    fn oversized_blocks_are_truncated() {
        let mut oversampler = Oversampler2x::new();
        let mut chain = FilterChain::new();
        let mut out = vec![7.0f32; MAX_BLOCK_SIZE + 16];

        oversampler.render(&mut out, &mut chain, |_| 1.0e-4);

        assert!(out[..MAX_BLOCK_SIZE].iter().all(|&s| s != 7.0));
        assert!(out[MAX_BLOCK_SIZE..].iter().all(|&s| s == 7.0));
    }
}
