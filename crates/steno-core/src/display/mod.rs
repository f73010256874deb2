//! View models and the display seam driven by the player.

pub mod mock;

use crate::settings::Theme;

/// Caption of the single play/pause button.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum TransportLabel {
    Play,
    Pause,
    Resume,
}

impl TransportLabel {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Play => "PLAY",
            Self::Pause => "PAUSE",
            Self::Resume => "RESUME",
        }
    }
}

/// Everything shown around the word area.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct TransportView {
    pub label: TransportLabel,
    pub wpm: u16,
    pub word_count: usize,
    pub cursor: usize,
}

/// Renders the word area and surrounding controls.
///
/// Word elements are addressed by their index in the last `render_words`
/// call. Clicks on them come back as [`crate::input::ControlEvent::Seek`].
pub trait DisplaySink {
    /// Replace all word elements. Drops any highlight and past marks.
    fn render_words(&mut self, words: &[String]);

    /// Highlight word `index`, clearing any previous highlight.
    fn highlight(&mut self, index: usize);

    fn clear_highlight(&mut self);

    /// Mark word `index` as already narrated.
    fn mark_past(&mut self, index: usize);

    fn scroll_into_view(&mut self, index: usize);

    fn show_transport(&mut self, view: TransportView);

    fn set_theme(&mut self, _theme: Theme) {}

    /// Blocking notice the user has to acknowledge.
    fn notice(&mut self, message: &str);

    fn set_capture_open(&mut self, _open: bool) {}

    fn set_scan_status(&mut self, _status: &str) {}
}
