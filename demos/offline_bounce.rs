use mono_dsp::{control_channel, AudioOutput, MonoSynth, SynthConfig};

fn main() {
    let config = SynthConfig::default();
    let (mut handle, rx) = control_channel(config.control_queue_capacity);
    let mut synth = MonoSynth::new(config, rx);

    handle.note_on(57, 100); // A3 = 220 Hz
    let mut output = AudioOutput::channels(config.channels, config.block_size);

    let mut peak = 0.0f32;
    let mut sum_squares = 0.0f32;
    let mut samples = 0usize;
    for _ in 0..32 {
        synth.process_block(&mut output);
        for &s in &output.buffers[0] {
            peak = peak.max(s.abs());
            sum_squares += s * s;
            samples += 1;
        }
    }

    let rms = (sum_squares / samples as f32).sqrt();
    println!("Rendered {samples} samples: peak {peak:.4}, rms {rms:.4}");
}
