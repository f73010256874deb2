//! Words-per-minute to per-word delay and narration speed.

pub const MIN_WPM: u16 = 15;
pub const MAX_WPM: u16 = 250;
pub const DEFAULT_WPM: u16 = 120;
pub const WPM_STEP: u16 = 10;

const FAST_ABOVE_WPM: u16 = 130;
const MEDIUM_ABOVE_WPM: u16 = 90;

/// Discrete narration speed classes.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum RateTier {
    Normal,
    Medium,
    Fast,
}

impl RateTier {
    pub fn from_wpm(wpm: u16) -> Self {
        if wpm > FAST_ABOVE_WPM {
            Self::Fast
        } else if wpm > MEDIUM_ABOVE_WPM {
            Self::Medium
        } else {
            Self::Normal
        }
    }

    /// Multiplier handed to the narration backend.
    pub fn multiplier(self) -> f32 {
        match self {
            Self::Normal => 1.0,
            Self::Medium => 1.2,
            Self::Fast => 1.5,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Normal => "normal",
            Self::Medium => "medium",
            Self::Fast => "fast",
        }
    }
}

/// Timing for one word.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Cadence {
    pub delay_ms: u32,
    pub tier: RateTier,
}

impl Cadence {
    /// Cadence for `wpm`, clamped to `[MIN_WPM, MAX_WPM]` first.
    pub fn from_wpm(wpm: u16) -> Self {
        let wpm = wpm.clamp(MIN_WPM, MAX_WPM);
        Self {
            delay_ms: word_delay_ms(wpm),
            tier: RateTier::from_wpm(wpm),
        }
    }
}

/// `round(60000 / wpm)` in integer arithmetic.
fn word_delay_ms(wpm: u16) -> u32 {
    let wpm = wpm.max(1) as u32;
    (60_000 + wpm / 2) / wpm
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct CadenceConfig {
    pub wpm: u16,
    pub min_wpm: u16,
    pub max_wpm: u16,
    pub step: u16,
}

impl Default for CadenceConfig {
    fn default() -> Self {
        Self {
            wpm: DEFAULT_WPM,
            min_wpm: MIN_WPM,
            max_wpm: MAX_WPM,
            step: WPM_STEP,
        }
    }
}

impl CadenceConfig {
    /// Fix up inverted bounds, keep them inside the supported range and pull
    /// `wpm` between them.
    pub fn normalized(mut self) -> Self {
        if self.max_wpm < self.min_wpm {
            core::mem::swap(&mut self.max_wpm, &mut self.min_wpm);
        }
        self.min_wpm = self.min_wpm.clamp(MIN_WPM, MAX_WPM);
        self.max_wpm = self.max_wpm.clamp(MIN_WPM, MAX_WPM);
        self.wpm = self.wpm.clamp(self.min_wpm, self.max_wpm);
        self
    }

    pub fn cadence(&self) -> Cadence {
        Cadence::from_wpm(self.wpm)
    }

    /// Set an absolute rate. Returns whether the stored value changed.
    pub fn set_wpm(&mut self, wpm: u16) -> bool {
        let next = wpm.clamp(self.min_wpm, self.max_wpm);
        let changed = next != self.wpm;
        self.wpm = next;
        changed
    }

    /// Move the rate by `delta`, saturating at the bounds.
    pub fn adjust(&mut self, delta: i32) -> bool {
        let next = (self.wpm as i32)
            .saturating_add(delta)
            .clamp(self.min_wpm as i32, self.max_wpm as i32);
        self.set_wpm(next as u16)
    }

    pub fn step_up(&mut self) -> bool {
        self.adjust(self.step as i32)
    }

    pub fn step_down(&mut self) -> bool {
        self.adjust(-(self.step as i32))
    }
}
