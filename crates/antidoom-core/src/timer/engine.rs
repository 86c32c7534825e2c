//! Session clock.
//!
//! A focus/break countdown driven by an external once-per-second `tick()`.
//! There is no internal thread or timer: whoever owns the clock decides
//! when a second has passed.
//!
//! ## State Transitions
//!
//! ```text
//! Stopped --start--> Running --pause--> Stopped
//!    ^                  |
//!    +------reset-------+        (reset also forces Focus)
//! ```
//!
//! `phase` is orthogonal to running/stopped and only flips when the
//! countdown runs out.

use serde::{Deserialize, Serialize};

use super::{Phase, Settings};

/// Seconds remaining in focus when the warning fires.
pub const WARNING_AT_SECS: u64 = 10;

/// What a single tick produced, in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClockSignal {
    /// One second elapsed.
    Tick { phase: Phase, remaining_secs: u64 },
    /// Focus just reached [`WARNING_AT_SECS`].
    Warning { remaining_secs: u64 },
    /// Focus ran out; now in break.
    FocusComplete { next_duration_secs: u64 },
    /// Break ran out; now in focus.
    BreakComplete { next_duration_secs: u64 },
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionClock {
    settings: Settings,
    phase: Phase,
    running: bool,
    remaining_secs: u64,
    /// Duration `remaining_secs` was last initialized from.
    phase_total_secs: u64,
}

impl SessionClock {
    /// A stopped clock at the start of a focus interval.
    pub fn new(settings: Settings) -> Self {
        let total = settings.focus_secs();
        Self {
            settings,
            phase: Phase::Focus,
            running: false,
            remaining_secs: total,
            phase_total_secs: total,
        }
    }

    // ── Queries ──────────────────────────────────────────────────────

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn remaining_secs(&self) -> u64 {
        self.remaining_secs
    }

    pub fn total_secs(&self) -> u64 {
        self.phase_total_secs
    }

    pub fn settings(&self) -> Settings {
        self.settings
    }

    /// Running and in focus: the only state where distractions count.
    pub fn in_running_focus(&self) -> bool {
        self.running && self.phase == Phase::Focus
    }

    // ── Commands ─────────────────────────────────────────────────────

    /// Returns `false` if already running.
    pub fn start(&mut self) -> bool {
        if self.running {
            return false;
        }
        self.running = true;
        true
    }

    /// Returns `false` if not running.
    pub fn pause(&mut self) -> bool {
        if !self.running {
            return false;
        }
        self.running = false;
        true
    }

    /// Stop and rewind to a fresh focus interval using current settings.
    pub fn reset(&mut self) {
        self.running = false;
        self.install(Phase::Focus);
    }

    /// Store new durations. The interval in progress keeps its length.
    pub fn apply_settings(&mut self, settings: Settings) {
        self.settings = settings;
    }

    /// Advance by one second. Does nothing while stopped.
    ///
    /// The phase switch happens on the tick that brings the countdown to
    /// zero, so a focus interval of N seconds completes on the Nth tick.
    pub fn tick(&mut self) -> Vec<ClockSignal> {
        let mut signals = Vec::new();
        if !self.running {
            return signals;
        }

        if self.remaining_secs > 0 {
            self.remaining_secs -= 1;
            signals.push(ClockSignal::Tick {
                phase: self.phase,
                remaining_secs: self.remaining_secs,
            });
            if self.phase == Phase::Focus && self.remaining_secs == WARNING_AT_SECS {
                signals.push(ClockSignal::Warning {
                    remaining_secs: self.remaining_secs,
                });
            }
        }

        if self.remaining_secs == 0 {
            let leaving = self.phase;
            self.install(leaving.other());
            let next_duration_secs = self.remaining_secs;
            signals.push(match leaving {
                Phase::Focus => ClockSignal::FocusComplete { next_duration_secs },
                Phase::Break => ClockSignal::BreakComplete { next_duration_secs },
            });
        }

        signals
    }

    // ── Internal ─────────────────────────────────────────────────────

    fn install(&mut self, phase: Phase) {
        self.phase = phase;
        self.phase_total_secs = self.settings.duration_secs(phase);
        self.remaining_secs = self.phase_total_secs;
    }
}

impl Default for SessionClock {
    fn default() -> Self {
        Self::new(Settings::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn tick_n(clock: &mut SessionClock, n: u64) -> Vec<ClockSignal> {
        (0..n).flat_map(|_| clock.tick()).collect()
    }

    #[test]
    fn new_clock_is_stopped_focus() {
        let clock = SessionClock::default();
        assert_eq!(clock.phase(), Phase::Focus);
        assert!(!clock.is_running());
        assert_eq!(clock.remaining_secs(), 1500);
    }

    #[test]
    fn start_pause_are_idempotent() {
        let mut clock = SessionClock::default();
        assert!(clock.start());
        assert!(!clock.start());
        assert!(clock.pause());
        assert!(!clock.pause());
    }

    #[test]
    fn tick_while_stopped_does_nothing() {
        let mut clock = SessionClock::default();
        assert!(clock.tick().is_empty());
        assert_eq!(clock.remaining_secs(), 1500);
    }

    #[test]
    fn pause_freezes_countdown() {
        let mut clock = SessionClock::default();
        clock.start();
        tick_n(&mut clock, 5);
        clock.pause();
        tick_n(&mut clock, 100);
        assert_eq!(clock.remaining_secs(), 1495);
        clock.start();
        clock.tick();
        assert_eq!(clock.remaining_secs(), 1494);
    }

    #[test]
    fn focus_completes_on_exact_tick() {
        let mut clock = SessionClock::default();
        clock.start();
        let signals = tick_n(&mut clock, 1499);
        assert!(!signals
            .iter()
            .any(|s| matches!(s, ClockSignal::FocusComplete { .. })));
        assert_eq!(clock.remaining_secs(), 1);

        let last = clock.tick();
        assert_eq!(
            last,
            vec![
                ClockSignal::Tick {
                    phase: Phase::Focus,
                    remaining_secs: 0
                },
                ClockSignal::FocusComplete {
                    next_duration_secs: 300
                },
            ]
        );
        assert_eq!(clock.phase(), Phase::Break);
        assert_eq!(clock.remaining_secs(), 300);
        assert!(clock.is_running());
    }

    #[test]
    fn warning_fires_once_in_focus_only() {
        let mut clock = SessionClock::new(Settings::clamped(1, 1));
        clock.start();
        let signals = tick_n(&mut clock, 120);
        let warnings: Vec<_> = signals
            .iter()
            .filter(|s| matches!(s, ClockSignal::Warning { .. }))
            .collect();
        assert_eq!(warnings, vec![&ClockSignal::Warning { remaining_secs: 10 }]);
        assert!(signals.contains(&ClockSignal::BreakComplete {
            next_duration_secs: 60
        }));
        assert_eq!(clock.phase(), Phase::Focus);
    }

    #[test]
    fn reset_always_returns_to_focus() {
        let mut clock = SessionClock::new(Settings::clamped(1, 5));
        clock.start();
        tick_n(&mut clock, 70);
        assert_eq!(clock.phase(), Phase::Break);
        clock.reset();
        assert_eq!(clock.phase(), Phase::Focus);
        assert_eq!(clock.remaining_secs(), 60);
        assert!(!clock.is_running());
    }

    #[test]
    fn apply_settings_defers_to_next_phase() {
        let mut clock = SessionClock::default();
        clock.start();
        tick_n(&mut clock, 100);
        clock.apply_settings(Settings::clamped(50, 10));
        assert_eq!(clock.remaining_secs(), 1400);
        assert_eq!(clock.total_secs(), 1500);
        assert_eq!(clock.phase(), Phase::Focus);

        tick_n(&mut clock, 1400);
        assert_eq!(clock.phase(), Phase::Break);
        assert_eq!(clock.remaining_secs(), 600);

        clock.reset();
        assert_eq!(clock.remaining_secs(), 3000);
    }

    proptest! {
        #[test]
        fn remaining_stays_within_phase_total(
            focus in 1i64..4,
            brk in 1i64..4,
            ops in proptest::collection::vec((0u8..6, 1i64..4, 1i64..4), 0..600),
        ) {
            let mut clock = SessionClock::new(Settings::clamped(focus, brk));
            for (op, new_focus, new_brk) in ops {
                let phase_before = clock.phase();
                let reinstalled = match op {
                    0 => { clock.start(); false }
                    1 => { clock.pause(); false }
                    2 => { clock.reset(); true }
                    3 => { clock.apply_settings(Settings::clamped(new_focus, new_brk)); false }
                    _ => { clock.tick(); clock.phase() != phase_before }
                };
                prop_assert!(clock.remaining_secs() <= clock.total_secs());
                if reinstalled {
                    prop_assert_eq!(
                        clock.total_secs(),
                        clock.settings().duration_secs(clock.phase())
                    );
                }
            }
        }
    }
}
