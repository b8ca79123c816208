//! Benchmarks for oscillator waveform generation.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion};
use mono_dsp::dsp::oscillator::Oscillator;

use crate::BLOCK_SIZES;

const SAMPLE_DT: f64 = 1.0 / 48_000.0;

fn render(osc: &mut Oscillator, buffer: &mut [f32]) {
    for (i, slot) in buffer.iter_mut().enumerate() {
        *slot = osc.sample(i as f64 * SAMPLE_DT);
    }
}

pub fn bench_oscillator(c: &mut Criterion) {
    let mut group = c.benchmark_group("dsp/oscillator");

    for &size in BLOCK_SIZES {
        let mut buffer = vec![0.0f32; size];

        // Sawtooth - modulo and a multiply per sample
        let mut osc = Oscillator::sawtooth(1.0, 440.0);
        group.bench_with_input(BenchmarkId::new("sawtooth", size), &size, |b, _| {
            b.iter(|| {
                render(black_box(&mut osc), black_box(&mut buffer));
            })
        });

        // Square - modulo and a branch per sample
        let mut osc = Oscillator::square(1.0, 440.0);
        group.bench_with_input(BenchmarkId::new("square", size), &size, |b, _| {
            b.iter(|| {
                render(black_box(&mut osc), black_box(&mut buffer));
            })
        });

        // Noise - xorshift PRNG draw per sample
        let mut osc = Oscillator::noise(1.0);
        group.bench_with_input(BenchmarkId::new("noise", size), &size, |b, _| {
            b.iter(|| {
                render(black_box(&mut osc), black_box(&mut buffer));
            })
        });
    }

    group.finish();
}
