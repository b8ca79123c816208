use crate::{io::midi::MidiEvent, synth::message::ControlMessage};

/// Map a raw MIDI event onto the control vocabulary.
///
/// Note numbers are converted to Hz here, on the control side - the render
/// path only ever sees frequencies. Events on other channels and event
/// types this instrument has no parameter for map to `None`.
pub fn midi_to_control(midi: MidiEvent, channel_filter: u8) -> Option<ControlMessage> {
    match midi {
        MidiEvent::NoteOn {
            channel,
            key,
            velocity,
        } if channel == channel_filter => Some(ControlMessage::NoteOn {
            freq_hz: midi_note_to_freq(key),
            velocity,
        }),
        MidiEvent::NoteOff { channel, .. } if channel == channel_filter => {
            Some(ControlMessage::NoteOff)
        }
        _ => None,
    }
}

/// Convert a MIDI note number to frequency in Hz.
/// A4 = 440 Hz = MIDI note 69
pub fn midi_note_to_freq(note: u8) -> f32 {
    440.0 * 2.0_f32.powf((note as f32 - 69.0) / 12.0)
}
