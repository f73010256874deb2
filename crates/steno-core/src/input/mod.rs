//! Input abstraction layer.

pub mod mock;

/// User actions consumed by the player.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ControlEvent {
    /// The play/pause/resume button.
    TogglePlay,
    Reset,
    SpeedUp,
    SpeedDown,
    /// Direct slider position.
    SetSpeed(u16),
    /// Click on the word at this index.
    Seek(usize),
    /// Edited contents of the text buffer.
    SetText(String),
    ToggleTheme,
    SelectVoice(String),
}

/// Polled input provider.
pub trait InputProvider {
    type Error: core::fmt::Debug;

    fn poll_event(&mut self) -> Result<Option<ControlEvent>, Self::Error>;
}
