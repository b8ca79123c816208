#[cfg(feature = "rtrb")]
use rtrb::Consumer;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Which of the voice's three oscillators a level change addresses.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OscSource {
    Main,
    Sub,
    Noise,
}

/// Everything the control context may ask of the render context.
///
/// Messages carry plain values only; validation (frequency, level and
/// cutoff ranges) happens on the render side where the previous valid
/// value lives. Note frequency travels in Hz - MIDI-note conversion is a
/// control-side concern (see `io::converter`).
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy)]
pub enum ControlMessage {
    NoteOn { freq_hz: f32, velocity: u8 },
    NoteOff,
    SetLevel { source: OscSource, level: f32 },
    SetCutoff { cutoff_hz: f32 },
}

pub trait MessageReceiver {
    fn pop(&mut self) -> Option<ControlMessage>;
}

#[cfg(feature = "rtrb")]
impl MessageReceiver for Consumer<ControlMessage> {
    fn pop(&mut self) -> Option<ControlMessage> {
        Consumer::pop(self).ok()
    }
}
