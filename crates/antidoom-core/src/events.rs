use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::timer::{Phase, SettingsEffect};

/// Every state change in the system produces an Event.
/// The UI renders them; cue-bearing ones also make a sound.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Event {
    TimerStarted {
        phase: Phase,
        remaining_secs: u64,
        at: DateTime<Utc>,
    },
    TimerPaused {
        remaining_secs: u64,
        at: DateTime<Utc>,
    },
    TimerReset {
        remaining_secs: u64,
        at: DateTime<Utc>,
    },
    Tick {
        phase: Phase,
        remaining_secs: u64,
    },
    /// Ten seconds left in focus.
    Warning {
        remaining_secs: u64,
    },
    FocusComplete {
        pomodoros: u64,
        break_secs: u64,
        at: DateTime<Utc>,
    },
    BreakComplete {
        focus_secs: u64,
        at: DateTime<Utc>,
    },
    SettingsApplied {
        focus_minutes: u32,
        break_minutes: u32,
        takes_effect: SettingsEffect,
        hint: String,
    },
    DistractionLogged {
        distractions: u64,
        hint: String,
        at: DateTime<Utc>,
    },
    NoteAttached {
        note: String,
    },
    NoteSkipped,
    /// Audible cues switched on or off.
    SoundToggled {
        enabled: bool,
    },
    StateSnapshot {
        date: String,
        phase: Phase,
        running: bool,
        remaining_secs: u64,
        total_secs: u64,
        clock: String,
        pomodoros: u64,
        distractions: u64,
        notes: Vec<String>,
        distraction_enabled: bool,
        note_pending: bool,
        hint: String,
    },
}

/// A short sine tone the UI may play.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cue {
    pub freq_hz: u32,
    pub duration_ms: u32,
}

impl Event {
    /// The tone that accompanies this event, if any.
    pub fn cue(&self) -> Option<Cue> {
        let (freq_hz, duration_ms) = match self {
            Event::Warning { .. } => (660, 90),
            Event::FocusComplete { .. } => (1040, 200),
            Event::BreakComplete { .. } => (520, 180),
            Event::DistractionLogged { .. } => (220, 120),
            _ => return None,
        };
        Some(Cue {
            freq_hz,
            duration_ms,
        })
    }
}
