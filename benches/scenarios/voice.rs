//! Benchmarks for the complete voice path.
//!
//! This is the number that has to beat the realtime deadline: three
//! oscillators, the 2x oversampled filter chain, the clipper, and the
//! engine's channel duplication on top.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion};
use mono_dsp::synth::voice::{GateMode, Voice};
use mono_dsp::{control_channel, AudioOutput, MonoSynth, SynthConfig};

use crate::BLOCK_SIZES;

pub fn bench_voice(c: &mut Criterion) {
    let mut group = c.benchmark_group("scenarios/voice");

    for &size in BLOCK_SIZES {
        // Bare voice: the mono render path alone
        let mut voice = Voice::new(GateMode::GateOnNote);
        voice.prepare(48_000.0, size);
        voice.note_on(110.0, 100); // A2, typical bass note
        let mut buffer = vec![0.0f32; size];

        group.bench_with_input(BenchmarkId::new("voice", size), &size, |b, _| {
            b.iter(|| {
                voice.render(black_box(&mut buffer));
            })
        });

        // Full engine: message drain plus stereo duplication
        let config = SynthConfig {
            block_size: size,
            ..SynthConfig::default()
        };
        let (mut handle, rx) = control_channel(config.control_queue_capacity);
        let mut synth = MonoSynth::new(config, rx);
        handle.note_on(45, 100);
        let mut output = AudioOutput::channels(2, size);

        group.bench_with_input(BenchmarkId::new("engine_stereo", size), &size, |b, _| {
            b.iter(|| {
                synth.process_block(black_box(&mut output));
            })
        });
    }

    group.finish();
}
