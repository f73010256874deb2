use std::io::{self, Write};

use log::warn;
use steno_core::{
    display::{DisplaySink, TransportView},
    settings::Theme,
};

/// Words shown around the active one.
const WINDOW_WORDS: usize = 9;

const CLEAR_LINE: &str = "\r\x1b[2K";
const RESET: &str = "\x1b[0m";
const PAST_STYLE: &str = "\x1b[2m";

/// Teleprompter line on an ANSI terminal: a sliding window of words with the
/// active one highlighted.
pub(super) struct TerminalDisplay {
    words: Vec<String>,
    past: Vec<bool>,
    highlighted: Option<usize>,
    window_start: usize,
    theme: Theme,
    last_transport: Option<TransportView>,
}

impl TerminalDisplay {
    pub(super) fn new() -> Self {
        Self {
            words: Vec::new(),
            past: Vec::new(),
            highlighted: None,
            window_start: 0,
            theme: Theme::Light,
            last_transport: None,
        }
    }

    fn highlight_style(&self) -> &'static str {
        match self.theme {
            Theme::Light => "\x1b[7m",
            Theme::Night => "\x1b[1;33;40m",
        }
    }

    fn window_line(&self) -> String {
        let end = (self.window_start + WINDOW_WORDS).min(self.words.len());
        let mut line = String::new();

        for index in self.window_start..end {
            if !line.is_empty() {
                line.push(' ');
            }

            let word = &self.words[index];
            if self.highlighted == Some(index) {
                line.push_str(self.highlight_style());
                line.push_str(word);
                line.push_str(RESET);
            } else if self.past.get(index).copied().unwrap_or(false) {
                line.push_str(PAST_STYLE);
                line.push_str(word);
                line.push_str(RESET);
            } else {
                line.push_str(word);
            }
        }

        line
    }

    fn redraw(&self) {
        let mut out = io::stdout().lock();
        let result = write!(out, "{CLEAR_LINE}{}", self.window_line()).and_then(|_| out.flush());
        if let Err(err) = result {
            warn!("display: write failed err={}", err);
        }
    }

    fn print_line(&self, text: &str) {
        let mut out = io::stdout().lock();
        if let Err(err) = writeln!(out, "{CLEAR_LINE}{text}") {
            warn!("display: write failed err={}", err);
        }
    }
}

impl DisplaySink for TerminalDisplay {
    fn render_words(&mut self, words: &[String]) {
        self.words = words.to_vec();
        self.past = vec![false; words.len()];
        self.highlighted = None;
        self.window_start = 0;
        self.print_line(&format!("loaded {} words", words.len()));
        self.redraw();
    }

    fn highlight(&mut self, index: usize) {
        self.highlighted = Some(index);
    }

    fn clear_highlight(&mut self) {
        self.highlighted = None;
        self.redraw();
    }

    fn mark_past(&mut self, index: usize) {
        if let Some(past) = self.past.get_mut(index) {
            *past = true;
        }
    }

    fn scroll_into_view(&mut self, index: usize) {
        let max_start = self.words.len().saturating_sub(WINDOW_WORDS);
        self.window_start = index.saturating_sub(WINDOW_WORDS / 2).min(max_start);
        self.redraw();
    }

    fn show_transport(&mut self, view: TransportView) {
        // Cursor moves are already visible in the word window.
        let changed = self.last_transport.is_none_or(|last| {
            last.label != view.label || last.wpm != view.wpm || last.word_count != view.word_count
        });
        self.last_transport = Some(view);
        if changed {
            self.print_line(&format!(
                "[{}] {} wpm, {} words",
                view.label.as_str(),
                view.wpm,
                view.word_count
            ));
            self.redraw();
        }
    }

    fn set_theme(&mut self, theme: Theme) {
        self.theme = theme;
        self.print_line(&format!("theme: {}", theme.as_str()));
    }

    fn notice(&mut self, message: &str) {
        self.print_line(&format!("!! {message}"));
    }

    fn set_capture_open(&mut self, open: bool) {
        if open {
            self.print_line("scanner: open");
        } else {
            self.print_line("scanner: closed");
            self.redraw();
        }
    }

    fn set_scan_status(&mut self, status: &str) {
        self.print_line(status);
    }
}
