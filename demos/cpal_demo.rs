//! Live audio demo: the engine on a cpal output stream, a note driver on a
//! control thread. Build with --features cpal-demo.

#[cfg(feature = "cpal-demo")]
fn main() -> color_eyre::eyre::Result<()> {
    use color_eyre::eyre::{eyre, WrapErr};
    use cpal::traits::{DeviceTrait, HostTrait, StreamTrait};
    use mono_dsp::{control_channel, AudioOutput, MonoSynth, SynthConfig};
    use std::{thread, time::Duration};

    color_eyre::install()?;

    let host = cpal::default_host();
    let device = host
        .default_output_device()
        .ok_or_else(|| eyre!("no default output device available"))?;
    let stream_config = device
        .default_output_config()
        .wrap_err("failed to fetch default output config")?;
    let sample_rate = stream_config.sample_rate().0 as f32;
    let channels = stream_config.channels() as usize;

    let config = SynthConfig {
        sample_rate,
        channels,
        ..SynthConfig::default()
    };
    let (handle, rx) = control_channel(config.control_queue_capacity);
    let mut synth = MonoSynth::new(config, rx);

    // Mono scratch the callback renders into before interleaving
    let block_size = config.block_size;
    let mut output = AudioOutput::channels(1, block_size);

    let stream = device
        .build_output_stream(
            &stream_config.into(),
            move |data: &mut [f32], _| {
                let total_frames = data.len() / channels;
                let mut frames_written = 0;
                while frames_written < total_frames {
                    let frames_to_render = (total_frames - frames_written).min(block_size);

                    // Stays within the original capacity: no allocation here
                    output.buffers[0].resize(frames_to_render, 0.0);
                    synth.process_block(&mut output);

                    // Duplicate mono to all channels and write to device
                    let out_off = frames_written * channels;
                    for (i, &s) in output.buffers[0].iter().enumerate() {
                        for ch in 0..channels {
                            data[out_off + i * channels + ch] = s;
                        }
                    }

                    frames_written += frames_to_render;
                }
            },
            move |err| eprintln!("Stream error: {err}"),
            None,
        )
        .wrap_err("failed to build output stream")?;

    stream.play().wrap_err("failed to start output stream")?;

    // Walk a little bass line so there's sound
    let mut handle = handle;
    for &note in [45u8, 48, 52, 45, 43, 48].iter().cycle().take(24) {
        handle.note_on(note, 100);
        thread::sleep(Duration::from_millis(400));
        handle.note_off();
        thread::sleep(Duration::from_millis(100));
    }

    Ok(())
}

#[cfg(not(feature = "cpal-demo"))]
fn main() {
    eprintln!("Build with --features cpal-demo to run this example.");
}
