//! Platform-independent core of the steno reader: word store, cadence, speech
//! driver and the playback state machine, plus the seams the host implements.

pub mod app;
pub mod cadence;
pub mod content;
pub mod display;
pub mod input;
pub mod scan;
pub mod settings;
pub mod speech;
pub mod wake_lock;
