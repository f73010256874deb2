//! Narration driver on top of an abstract speech backend.

pub mod mock;

use core::fmt::Debug;

use log::{debug, info, warn};

use crate::cadence::RateTier;

/// Language substring a voice must carry to be offered for selection.
const SELECTABLE_LANGUAGE: &str = "en";

/// One voice as enumerated by the backend.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Voice {
    pub name: String,
    pub language: String,
    /// Backend handle for this voice. Defaults to the name.
    pub id: String,
}

impl Voice {
    pub fn new(name: impl Into<String>, language: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            id: name.clone(),
            name,
            language: language.into(),
        }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }
}

/// Name of a voice chosen by the user. Resolved against the current voice
/// list each time a word is spoken.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct VoiceRef(String);

impl VoiceRef {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Platform speech synthesis.
pub trait NarrationBackend {
    type Error: Debug;

    /// New voice list if it changed since the last poll. The list may arrive
    /// late or change at any time.
    fn poll_voices(&mut self) -> Option<Vec<Voice>>;

    /// Start narrating `text`. `voice == None` selects the engine default.
    fn speak(&mut self, text: &str, voice: Option<&Voice>, rate: f32) -> Result<(), Self::Error>;

    /// Stop in-flight and queued narration. Must be safe with nothing playing.
    fn cancel_all(&mut self) -> Result<(), Self::Error>;
}

/// Speaks one word at a time with at most one utterance in flight.
///
/// Every [`SpeechDriver::speak`] cancels whatever is still playing first, so
/// audio never lags the visual cursor by more than one word. At high rates
/// this clips the tail of the previous word.
pub struct SpeechDriver<B>
where
    B: NarrationBackend,
{
    backend: B,
    voices: Vec<Voice>,
    selected: Option<VoiceRef>,
}

impl<B> SpeechDriver<B>
where
    B: NarrationBackend,
{
    pub fn new(backend: B) -> Self {
        let mut driver = Self {
            backend,
            voices: Vec::new(),
            selected: None,
        };
        driver.refresh_voices();
        driver
    }

    /// Pick up a late or changed voice list. Returns `true` when the snapshot
    /// was replaced.
    pub fn refresh_voices(&mut self) -> bool {
        let Some(voices) = self.backend.poll_voices() else {
            return false;
        };

        info!(
            "speech: voice list updated total={} selectable={}",
            voices.len(),
            voices.iter().filter(|v| is_selectable(v)).count()
        );
        self.voices = voices;
        true
    }

    pub fn voices(&self) -> &[Voice] {
        &self.voices
    }

    /// Voices offered to the user.
    pub fn selectable_voices(&self) -> impl Iterator<Item = &Voice> {
        self.voices.iter().filter(|voice| is_selectable(voice))
    }

    /// Remember `name` for later narration. The name is only matched against
    /// the voice list when a word is spoken.
    pub fn select_voice(&mut self, name: &str) {
        debug!("speech: selected voice={}", name);
        self.selected = Some(VoiceRef::new(name));
    }

    pub fn selected_voice(&self) -> Option<&VoiceRef> {
        self.selected.as_ref()
    }

    /// Voice the next word would be spoken with. An explicit selection that
    /// no longer exists falls back to the engine default.
    pub fn resolve_voice(&self) -> Option<&Voice> {
        match &self.selected {
            Some(selected) => self.voices.iter().find(|v| v.name == selected.as_str()),
            None => self.selectable_voices().next(),
        }
    }

    pub fn speak(&mut self, word: &str, tier: RateTier) {
        self.cancel_all();

        let voice = self.resolve_voice().cloned();
        if voice.is_none() && self.selected.is_some() {
            debug!("speech: selected voice unavailable, using engine default");
        }

        if let Err(err) = self.backend.speak(word, voice.as_ref(), tier.multiplier()) {
            warn!("speech: speak failed tier={} err={:?}", tier.as_str(), err);
        }
    }

    pub fn cancel_all(&mut self) {
        if let Err(err) = self.backend.cancel_all() {
            warn!("speech: cancel failed err={:?}", err);
        }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn backend_mut(&mut self) -> &mut B {
        &mut self.backend
    }
}

fn is_selectable(voice: &Voice) -> bool {
    voice.language.contains(SELECTABLE_LANGUAGE)
}

#[cfg(test)]
mod tests {
    use super::mock::{RecordingBackend, SpeechCall};
    use super::*;

    fn voices() -> Vec<Voice> {
        vec![
            Voice::new("Anna", "de-DE"),
            Voice::new("Daniel", "en-GB"),
            Voice::new("Samantha", "en-US"),
        ]
    }

    #[test]
    fn speak_cancels_before_every_word() {
        let mut driver = SpeechDriver::new(RecordingBackend::with_voices(voices()));
        driver.speak("hello", RateTier::Medium);
        driver.speak("world", RateTier::Fast);

        assert_eq!(
            driver.backend().calls(),
            &[
                SpeechCall::Cancel,
                SpeechCall::Speak {
                    text: "hello".into(),
                    voice: Some("Daniel".into()),
                    rate: 1.2,
                },
                SpeechCall::Cancel,
                SpeechCall::Speak {
                    text: "world".into(),
                    voice: Some("Daniel".into()),
                    rate: 1.5,
                },
            ]
        );
    }

    #[test]
    fn selection_survives_a_late_voice_list() {
        let mut driver = SpeechDriver::new(RecordingBackend::new());
        assert!(driver.voices().is_empty());
        driver.select_voice("Samantha");

        driver.speak("early", RateTier::Normal);
        driver.backend_mut().publish_voices(voices());
        assert!(driver.refresh_voices());
        assert!(!driver.refresh_voices());
        driver.speak("late", RateTier::Normal);

        let spoken: Vec<_> = driver
            .backend()
            .calls()
            .iter()
            .filter_map(|call| match call {
                SpeechCall::Speak { voice, .. } => Some(voice.clone()),
                SpeechCall::Cancel => None,
            })
            .collect();
        assert_eq!(spoken, [None, Some("Samantha".to_owned())]);
    }

    #[test]
    fn stale_selection_falls_back_to_default_voice() {
        let mut driver = SpeechDriver::new(RecordingBackend::with_voices(voices()));
        driver.select_voice("Fred");
        assert_eq!(driver.resolve_voice(), None);

        driver.speak("word", RateTier::Normal);
        assert!(matches!(
            driver.backend().calls().last(),
            Some(SpeechCall::Speak { voice: None, .. })
        ));
    }

    #[test]
    fn only_english_voices_are_selectable() {
        let driver = SpeechDriver::new(RecordingBackend::with_voices(voices()));
        let names: Vec<_> = driver.selectable_voices().map(|v| v.name.as_str()).collect();
        assert_eq!(names, ["Daniel", "Samantha"]);
    }

    #[test]
    fn backend_failures_do_not_stop_narration() {
        let mut backend = RecordingBackend::with_voices(voices());
        backend.fail_next_speak();
        let mut driver = SpeechDriver::new(backend);

        driver.speak("lost", RateTier::Normal);
        driver.speak("kept", RateTier::Normal);

        assert_eq!(driver.backend().spoken_words(), ["kept"]);
    }

    #[test]
    fn long_platform_voice_names_can_be_selected() {
        let name = "Microsoft Server Speech Text to Speech Voice (en-US, ZiraPro) Desktop Edition";
        assert!(name.len() > 64);

        let mut list = voices();
        list.push(Voice::new(name, "en-US"));
        let mut driver = SpeechDriver::new(RecordingBackend::with_voices(list));
        driver.select_voice(name);

        assert_eq!(driver.selected_voice().map(VoiceRef::as_str), Some(name));
        assert_eq!(driver.resolve_voice().map(|v| v.name.as_str()), Some(name));

        driver.speak("hello", RateTier::Normal);
        assert!(matches!(
            driver.backend().calls().last(),
            Some(SpeechCall::Speak { voice: Some(voice), .. }) if voice == name
        ));
    }
}
