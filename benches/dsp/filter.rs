//! Benchmarks for the first-order filter stage and chain.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion};
use mono_dsp::dsp::filter::{FilterChain, FilterStage};

use crate::BLOCK_SIZES;

pub fn bench_filter(c: &mut Criterion) {
    let mut group = c.benchmark_group("dsp/filter");

    for &size in BLOCK_SIZES {
        // Generate a test signal (sawtooth-like ramp)
        let input: Vec<f32> = (0..size)
            .map(|i| (i as f32 / size as f32) * 2.0 - 1.0)
            .collect();

        // Lowpass stage
        let mut stage = FilterStage::lowpass(1_000.0);
        stage.prepare(48_000.0, size);
        let mut buffer = input.clone();
        group.bench_with_input(BenchmarkId::new("lowpass", size), &size, |b, _| {
            b.iter(|| {
                buffer.copy_from_slice(&input);
                for sample in buffer.iter_mut() {
                    *sample = stage.process_sample(black_box(*sample));
                }
            })
        });

        // Highpass stage
        let mut stage = FilterStage::highpass(100.0);
        stage.prepare(48_000.0, size);
        let mut buffer = input.clone();
        group.bench_with_input(BenchmarkId::new("highpass", size), &size, |b, _| {
            b.iter(|| {
                buffer.copy_from_slice(&input);
                for sample in buffer.iter_mut() {
                    *sample = stage.process_sample(black_box(*sample));
                }
            })
        });

        // Full chain: lowpass then highpass, with the per-block reset/snap
        // the oversampler performs
        let mut chain = FilterChain::new();
        chain.prepare(48_000.0, size);
        let mut buffer = input.clone();
        group.bench_with_input(BenchmarkId::new("chain", size), &size, |b, _| {
            b.iter(|| {
                buffer.copy_from_slice(&input);
                chain.reset();
                for sample in buffer.iter_mut() {
                    *sample = chain.process_sample(black_box(*sample));
                }
                chain.snap_to_zero();
            })
        });
    }

    group.finish();
}
