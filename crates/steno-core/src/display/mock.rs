use super::{DisplaySink, TransportView};
use crate::settings::Theme;

/// In-memory display that keeps the rendered state around for assertions.
#[derive(Debug, Default)]
pub struct RecordingDisplay {
    pub words: Vec<String>,
    pub highlighted: Option<usize>,
    pub past: Vec<usize>,
    pub scrolled_to: Option<usize>,
    pub transport: Option<TransportView>,
    pub theme: Option<Theme>,
    pub notices: Vec<String>,
    pub capture_open: bool,
    pub scan_status: Option<String>,
    pub render_count: usize,
}

impl RecordingDisplay {
    pub fn new() -> Self {
        Self::default()
    }
}

impl DisplaySink for RecordingDisplay {
    fn render_words(&mut self, words: &[String]) {
        self.words = words.to_vec();
        self.highlighted = None;
        self.past.clear();
        self.render_count += 1;
    }

    fn highlight(&mut self, index: usize) {
        self.highlighted = Some(index);
    }

    fn clear_highlight(&mut self) {
        self.highlighted = None;
    }

    fn mark_past(&mut self, index: usize) {
        if !self.past.contains(&index) {
            self.past.push(index);
        }
    }

    fn scroll_into_view(&mut self, index: usize) {
        self.scrolled_to = Some(index);
    }

    fn show_transport(&mut self, view: TransportView) {
        self.transport = Some(view);
    }

    fn set_theme(&mut self, theme: Theme) {
        self.theme = Some(theme);
    }

    fn notice(&mut self, message: &str) {
        self.notices.push(message.to_owned());
    }

    fn set_capture_open(&mut self, open: bool) {
        self.capture_open = open;
    }

    fn set_scan_status(&mut self, status: &str) {
        self.scan_status = Some(status.to_owned());
    }
}
