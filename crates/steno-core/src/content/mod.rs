//! Tokenized text and the narration cursor.

mod text_utils;

use log::debug;
use thiserror::Error;

/// Rejected cursor moves.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Error)]
pub enum SeekError {
    #[error("word index {index} is out of range for {len} words")]
    OutOfRange { index: usize, len: usize },
}

/// Word sequence plus the index of the next word to narrate.
///
/// `cursor` stays within `0..=len`; `cursor == len` means the text has been
/// fully narrated.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct WordStore {
    words: Vec<String>,
    cursor: usize,
}

impl WordStore {
    pub const fn new() -> Self {
        Self {
            words: Vec::new(),
            cursor: 0,
        }
    }

    pub fn from_text(text: &str) -> Self {
        let mut store = Self::new();
        store.load(text);
        store
    }

    /// Replace the sequence with the words of `text` and return the new length.
    ///
    /// The cursor survives the reload when it still names a word, otherwise it
    /// returns to the start.
    pub fn load(&mut self, text: &str) -> usize {
        let normalized = text_utils::normalize(text);
        self.words = text_utils::tokenize(&normalized);
        if self.cursor >= self.words.len() {
            self.cursor = 0;
        }

        debug!(
            "words: loaded len={} cursor={}",
            self.words.len(),
            self.cursor
        );
        self.words.len()
    }

    /// Step past the current word. Returns `true` once the end is reached.
    pub fn advance(&mut self) -> bool {
        if self.cursor < self.words.len() {
            self.cursor += 1;
        }
        self.is_complete()
    }

    pub fn seek(&mut self, index: usize) -> Result<(), SeekError> {
        if index >= self.words.len() {
            return Err(SeekError::OutOfRange {
                index,
                len: self.words.len(),
            });
        }

        self.cursor = index;
        Ok(())
    }

    pub fn reset(&mut self) {
        self.cursor = 0;
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn is_complete(&self) -> bool {
        self.cursor >= self.words.len()
    }

    /// Word under the cursor, `None` once complete.
    pub fn current(&self) -> Option<&str> {
        self.word_at(self.cursor)
    }

    pub fn word_at(&self, index: usize) -> Option<&str> {
        self.words.get(index).map(String::as_str)
    }

    pub fn words(&self) -> &[String] {
        &self.words
    }
}
