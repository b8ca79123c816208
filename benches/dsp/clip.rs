//! Benchmarks for the soft clipper.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion};
use mono_dsp::dsp::clip;

use crate::BLOCK_SIZES;

pub fn bench_clip(c: &mut Criterion) {
    let mut group = c.benchmark_group("dsp/clip");

    for &size in BLOCK_SIZES {
        // Test signal spanning the knee and both overload branches
        let input: Vec<f32> = (0..size)
            .map(|i| ((i as f32 * 0.1).sin()) * 1.5)
            .collect();

        let mut buffer = input.clone();
        group.bench_with_input(BenchmarkId::new("soft_clip", size), &size, |b, _| {
            b.iter(|| {
                buffer.copy_from_slice(&input);
                clip::soft_clip_buffer(black_box(&mut buffer));
            })
        });
    }

    group.finish();
}
