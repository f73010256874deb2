use super::{NarrationBackend, Voice};

/// What a [`RecordingBackend`] was asked to do.
#[derive(Clone, Debug, PartialEq)]
pub enum SpeechCall {
    Speak {
        text: String,
        voice: Option<String>,
        rate: f32,
    },
    Cancel,
}

/// Silent backend that records every request. Used by tests and as a
/// stand-in when no speech engine is installed.
#[derive(Debug, Default)]
pub struct RecordingBackend {
    calls: Vec<SpeechCall>,
    pending_voices: Option<Vec<Voice>>,
    fail_next_speak: bool,
}

impl RecordingBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_voices(voices: Vec<Voice>) -> Self {
        Self {
            pending_voices: Some(voices),
            ..Self::default()
        }
    }

    /// Simulate the platform announcing a changed voice list.
    pub fn publish_voices(&mut self, voices: Vec<Voice>) {
        self.pending_voices = Some(voices);
    }

    pub fn fail_next_speak(&mut self) {
        self.fail_next_speak = true;
    }

    pub fn calls(&self) -> &[SpeechCall] {
        &self.calls
    }

    pub fn spoken_words(&self) -> Vec<&str> {
        self.calls
            .iter()
            .filter_map(|call| match call {
                SpeechCall::Speak { text, .. } => Some(text.as_str()),
                SpeechCall::Cancel => None,
            })
            .collect()
    }

    pub fn clear(&mut self) {
        self.calls.clear();
    }
}

impl NarrationBackend for RecordingBackend {
    type Error = ();

    fn poll_voices(&mut self) -> Option<Vec<Voice>> {
        self.pending_voices.take()
    }

    fn speak(&mut self, text: &str, voice: Option<&Voice>, rate: f32) -> Result<(), Self::Error> {
        if core::mem::take(&mut self.fail_next_speak) {
            return Err(());
        }

        self.calls.push(SpeechCall::Speak {
            text: text.to_owned(),
            voice: voice.map(|v| v.name.clone()),
            rate,
        });
        Ok(())
    }

    fn cancel_all(&mut self) -> Result<(), Self::Error> {
        self.calls.push(SpeechCall::Cancel);
        Ok(())
    }
}
