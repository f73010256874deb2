//! Playback state machine: paces narration, drives the display and owns the
//! single pending tick.

use log::{debug, info, warn};

use crate::{
    cadence::CadenceConfig,
    content::{SeekError, WordStore},
    display::{DisplaySink, TransportLabel, TransportView},
    input::{ControlEvent, InputProvider},
    scan::{self, FrameSource, ScanError, TextRecognizer},
    settings::{SettingsStore, TEXT_KEY, THEME_KEY, Theme},
    speech::{NarrationBackend, SpeechDriver},
    wake_lock::WakeLock,
};

const CAMERA_ERROR_NOTICE: &str = "Camera Error";
const SCAN_PROCESSING_STATUS: &str = "Processing text... please wait.";

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum PlaybackStatus {
    Idle,
    Playing,
    Paused,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum TickResult {
    /// Nothing was due.
    NoTick,
    /// The word at this index was narrated and the next tick scheduled.
    Narrated(usize),
    /// The end of the text was reached and the player went back to idle.
    Completed,
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PlayerConfig {
    pub cadence: CadenceConfig,
    pub voice: Option<String>,
    pub language_hint: String,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            cadence: CadenceConfig::default(),
            voice: None,
            language_hint: scan::DEFAULT_LANGUAGE_HINT.to_owned(),
        }
    }
}

/// Handle of the one scheduled tick. Dropping it is how a tick is cancelled.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
struct PendingTick {
    due_ms: u64,
}

pub struct Player<IN, B, D, W, S>
where
    IN: InputProvider,
    B: NarrationBackend,
    D: DisplaySink,
    W: WakeLock,
    S: SettingsStore,
{
    input: IN,
    speech: SpeechDriver<B>,
    display: D,
    wake_lock: W,
    settings: S,
    words: WordStore,
    cadence: CadenceConfig,
    language_hint: String,
    status: PlaybackStatus,
    pending_tick: Option<PendingTick>,
    theme: Theme,
    words_since_drain: u32,
}

include!("view.rs");
include!("input.rs");
include!("runtime.rs");
include!("scan.rs");
