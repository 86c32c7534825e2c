//! Focus/break durations.
//!
//! Settings never reject input: out-of-range values are clamped and
//! unparsable text falls back to the default.

use serde::{Deserialize, Serialize};

use super::Phase;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    focus_minutes: u32,
    break_minutes: u32,
}

/// When freshly applied durations will be felt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SettingsEffect {
    /// In focus: the current interval keeps its length until reset.
    NextReset,
    /// In break: the next interval picks them up.
    NextPhase,
}

impl SettingsEffect {
    pub fn for_phase(phase: Phase) -> Self {
        match phase {
            Phase::Focus => SettingsEffect::NextReset,
            Phase::Break => SettingsEffect::NextPhase,
        }
    }

    pub fn hint(self) -> &'static str {
        match self {
            SettingsEffect::NextReset => "Updated settings. Hit Reset to restart with new times.",
            SettingsEffect::NextPhase => "Updated settings. Next break/focus will use the new times.",
        }
    }
}

impl Settings {
    pub const FOCUS_RANGE: (u32, u32) = (1, 120);
    pub const BREAK_RANGE: (u32, u32) = (1, 60);
    pub const DEFAULT_FOCUS_MINUTES: u32 = 25;
    pub const DEFAULT_BREAK_MINUTES: u32 = 5;

    /// Clamp whole minutes into their valid ranges.
    pub fn clamped(focus_minutes: i64, break_minutes: i64) -> Self {
        Self {
            focus_minutes: clamp(focus_minutes, Self::FOCUS_RANGE),
            break_minutes: clamp(break_minutes, Self::BREAK_RANGE),
        }
    }

    /// Parse raw text from an input field.
    ///
    /// Empty or non-numeric text means the default; fractions round to the
    /// nearest minute before clamping.
    pub fn from_input(focus: &str, brk: &str) -> Self {
        Self::clamped(
            parse_minutes(focus, Self::DEFAULT_FOCUS_MINUTES),
            parse_minutes(brk, Self::DEFAULT_BREAK_MINUTES),
        )
    }

    pub fn focus_minutes(&self) -> u32 {
        self.focus_minutes
    }

    pub fn break_minutes(&self) -> u32 {
        self.break_minutes
    }

    pub fn focus_secs(&self) -> u64 {
        u64::from(self.focus_minutes) * 60
    }

    pub fn break_secs(&self) -> u64 {
        u64::from(self.break_minutes) * 60
    }

    pub fn duration_secs(&self, phase: Phase) -> u64 {
        match phase {
            Phase::Focus => self.focus_secs(),
            Phase::Break => self.break_secs(),
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            focus_minutes: Self::DEFAULT_FOCUS_MINUTES,
            break_minutes: Self::DEFAULT_BREAK_MINUTES,
        }
    }
}

fn clamp(value: i64, (min, max): (u32, u32)) -> u32 {
    // Both bounds fit in u32, so the cast after clamping is lossless.
    value.clamp(i64::from(min), i64::from(max)) as u32
}

fn parse_minutes(raw: &str, default: u32) -> i64 {
    let raw = raw.trim();
    if raw.is_empty() {
        return i64::from(default);
    }
    if let Ok(n) = raw.parse::<i64>() {
        return n;
    }
    match raw.parse::<f64>() {
        // Saturating float-to-int cast; clamp() handles the rest.
        Ok(f) if f.is_finite() => f.round() as i64,
        _ => i64::from(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn defaults_are_25_and_5() {
        let s = Settings::default();
        assert_eq!(s.focus_secs(), 1500);
        assert_eq!(s.break_secs(), 300);
    }

    #[test]
    fn clamps_out_of_range() {
        assert_eq!(Settings::clamped(0, 0), Settings::clamped(1, 1));
        assert_eq!(Settings::clamped(-40, 999).break_minutes(), 60);
        assert_eq!(Settings::clamped(121, 5).focus_minutes(), 120);
    }

    #[test]
    fn from_input_handles_junk() {
        assert_eq!(Settings::from_input("", ""), Settings::default());
        assert_eq!(Settings::from_input("abc", "NaN"), Settings::default());
        assert_eq!(Settings::from_input(" 50 ", "10"), Settings::clamped(50, 10));
        assert_eq!(Settings::from_input("2.6", "0.2"), Settings::clamped(3, 1));
        assert_eq!(Settings::from_input("1e9", "-inf"), Settings::clamped(120, 5));
    }

    #[test]
    fn effect_depends_on_phase() {
        assert_eq!(SettingsEffect::for_phase(Phase::Focus), SettingsEffect::NextReset);
        assert_eq!(SettingsEffect::for_phase(Phase::Break), SettingsEffect::NextPhase);
    }

    proptest! {
        #[test]
        fn clamped_always_in_range(f in any::<i64>(), b in any::<i64>()) {
            let s = Settings::clamped(f, b);
            prop_assert!((1..=120).contains(&s.focus_minutes()));
            prop_assert!((1..=60).contains(&s.break_minutes()));
        }

        #[test]
        fn from_input_always_in_range(f in ".*", b in ".*") {
            let s = Settings::from_input(&f, &b);
            prop_assert!((1..=120).contains(&s.focus_minutes()));
            prop_assert!((1..=60).contains(&s.break_minutes()));
        }
    }
}
