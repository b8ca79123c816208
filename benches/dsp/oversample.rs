//! Benchmarks for the 2x zero-stuffing oversampler.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion};
use mono_dsp::dsp::filter::FilterChain;
use mono_dsp::dsp::oversample::Oversampler2x;

use crate::BLOCK_SIZES;

pub fn bench_oversample(c: &mut Criterion) {
    let mut group = c.benchmark_group("dsp/oversample");

    for &size in BLOCK_SIZES {
        let mut oversampler = Oversampler2x::new();
        let mut chain = FilterChain::new();
        chain.prepare(48_000.0, size);
        let mut buffer = vec![0.0f32; size];

        group.bench_with_input(BenchmarkId::new("render", size), &size, |b, _| {
            b.iter(|| {
                oversampler.render(
                    black_box(&mut buffer),
                    black_box(&mut chain),
                    |i| (i as f32 * 0.01).sin(),
                );
            })
        });
    }

    group.finish();
}
