use crate::synth::voice::GateMode;

#[cfg(feature = "rtrb")]
use crate::io::converter::midi_note_to_freq;
#[cfg(feature = "rtrb")]
use crate::io::AudioOutput;
#[cfg(feature = "rtrb")]
use crate::MAX_BLOCK_SIZE;
#[cfg(feature = "rtrb")]
use crate::synth::message::{ControlMessage, OscSource};
#[cfg(feature = "rtrb")]
use crate::synth::voice::Voice;
#[cfg(feature = "rtrb")]
use rtrb::{Consumer, Producer, RingBuffer};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/*
Engine and Control Surface
==========================

Two contexts touch the synth:

  control   UI / MIDI thread. Calls ControlHandle methods whenever the
            user does something.

  render    Audio callback. Calls MonoSynth::process_block once per block
            and must finish before the block's realtime deadline - no
            locks, no allocation, no unbounded work.

The two sides never share mutable state. Every control action is a
ControlMessage pushed onto an SPSC ring buffer; the render side drains the
queue at the top of each block and applies the messages to the voice it
owns exclusively. Parameter changes therefore take effect at block
boundaries, which at typical block sizes is well under perceptible latency.

A full queue drops the message instead of blocking the control thread;
the render deadline is never the control thread's problem and vice versa.
*/

/// Engine construction parameters.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy)]
pub struct SynthConfig {
    pub sample_rate: f32,
    pub block_size: usize,
    pub channels: usize,
    pub gate_mode: GateMode,
    pub control_queue_capacity: usize,
}

impl Default for SynthConfig {
    fn default() -> Self {
        Self {
            sample_rate: 48_000.0,
            block_size: 512,
            channels: 2,
            gate_mode: GateMode::GateOnNote,
            control_queue_capacity: 256,
        }
    }
}

/// Render-side engine: owns the voice, consumes control messages.
#[cfg(feature = "rtrb")]
pub struct MonoSynth {
    voice: Voice,
    rx: Consumer<ControlMessage>,
    mix_buffer: Vec<f32>,
}

#[cfg(feature = "rtrb")]
impl MonoSynth {
    pub fn new(config: SynthConfig, rx: Consumer<ControlMessage>) -> Self {
        let mut voice = Voice::new(config.gate_mode);
        voice.prepare(config.sample_rate, config.block_size);

        Self {
            voice,
            rx,
            mix_buffer: vec![0.0; MAX_BLOCK_SIZE],
        }
    }

    /// Re-prepare for a new sample rate or block size. Not realtime-safe in
    /// the sense that parameters jump without smoothing; call it from the
    /// backend's reconfiguration path, not mid-stream.
    pub fn prepare(&mut self, sample_rate: f32, block_size_hint: usize) {
        self.voice.prepare(sample_rate, block_size_hint);
    }

    /// Drain pending control messages, render one mono block, copy it into
    /// every output channel.
    pub fn process_block(&mut self, output: &mut AudioOutput) {
        while let Ok(message) = self.rx.pop() {
            self.apply(message);
        }

        let len = output.block_len().min(MAX_BLOCK_SIZE);
        let mix = &mut self.mix_buffer[..len];
        self.voice.render(mix);

        for channel in output.buffers.iter_mut() {
            let n = channel.len().min(len);
            channel[..n].copy_from_slice(&mix[..n]);
        }
    }

    fn apply(&mut self, message: ControlMessage) {
        match message {
            ControlMessage::NoteOn { freq_hz, velocity } => {
                self.voice.note_on(freq_hz, velocity);
            }
            ControlMessage::NoteOff => self.voice.note_off(),
            ControlMessage::SetLevel { source, level } => {
                self.voice.set_level(source, level);
            }
            ControlMessage::SetCutoff { cutoff_hz } => self.voice.set_cutoff(cutoff_hz),
        }
    }

    pub fn is_active(&self) -> bool {
        self.voice.is_active()
    }
}

/// Control-side handle: pushes messages, never blocks, never allocates.
#[cfg(feature = "rtrb")]
pub struct ControlHandle {
    tx: Producer<ControlMessage>,
}

#[cfg(feature = "rtrb")]
impl ControlHandle {
    /// Start a note. MIDI note numbers are converted to Hz here so the
    /// render side only ever deals in frequencies.
    pub fn note_on(&mut self, note: u8, velocity: u8) {
        self.send(ControlMessage::NoteOn {
            freq_hz: midi_note_to_freq(note),
            velocity,
        });
    }

    pub fn note_off(&mut self) {
        self.send(ControlMessage::NoteOff);
    }

    pub fn set_oscillator_level(&mut self, source: OscSource, level: f32) {
        self.send(ControlMessage::SetLevel { source, level });
    }

    pub fn set_filter_cutoff(&mut self, cutoff_hz: f32) {
        self.send(ControlMessage::SetCutoff { cutoff_hz });
    }

    fn send(&mut self, message: ControlMessage) {
        // A full queue drops the message; the control side may re-send.
        let _ = self.tx.push(message);
    }
}

/// Build the SPSC pair wiring a `ControlHandle` to a `MonoSynth`.
#[cfg(feature = "rtrb")]
pub fn control_channel(capacity: usize) -> (ControlHandle, Consumer<ControlMessage>) {
    let (tx, rx) = RingBuffer::new(capacity);
    (ControlHandle { tx }, rx)
}
