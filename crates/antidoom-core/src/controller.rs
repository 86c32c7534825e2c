//! Command dispatch.
//!
//! The [`Controller`] owns the session clock, the distraction logger and the
//! daily store, and is the only thing UI glue talks to. Each command runs to
//! completion and returns the events it produced; nothing here suspends, so
//! the store's load-modify-save cycles cannot interleave.

use chrono::Utc;

use crate::clock::Clock;
use crate::distraction::{DistractionLogger, LOGGED_HINT};
use crate::events::Event;
use crate::storage::{DailyRecord, DailyStore, KvStore};
use crate::timer::{format_clock, ClockSignal, SessionClock, Settings, SettingsEffect};

pub struct Controller<S, C> {
    clock: SessionClock,
    logger: DistractionLogger,
    store: DailyStore<S, C>,
}

impl<S: KvStore, C: Clock> Controller<S, C> {
    pub fn new(settings: Settings, store: DailyStore<S, C>) -> Self {
        Self {
            clock: SessionClock::new(settings),
            logger: DistractionLogger::new(),
            store,
        }
    }

    pub fn session(&self) -> &SessionClock {
        &self.clock
    }

    pub fn store(&self) -> &DailyStore<S, C> {
        &self.store
    }

    pub fn into_store(self) -> DailyStore<S, C> {
        self.store
    }

    pub fn today(&self) -> DailyRecord {
        self.store.load()
    }

    // ── Commands ─────────────────────────────────────────────────────

    pub fn start(&mut self) -> Option<Event> {
        if !self.clock.start() {
            return None;
        }
        tracing::debug!(phase = ?self.clock.phase(), remaining = self.clock.remaining_secs(), "timer started");
        Some(Event::TimerStarted {
            phase: self.clock.phase(),
            remaining_secs: self.clock.remaining_secs(),
            at: Utc::now(),
        })
    }

    pub fn pause(&mut self) -> Option<Event> {
        if !self.clock.pause() {
            return None;
        }
        tracing::debug!(remaining = self.clock.remaining_secs(), "timer paused");
        Some(Event::TimerPaused {
            remaining_secs: self.clock.remaining_secs(),
            at: Utc::now(),
        })
    }

    /// Start if stopped, pause if running.
    pub fn toggle(&mut self) -> Option<Event> {
        if self.clock.is_running() {
            self.pause()
        } else {
            self.start()
        }
    }

    pub fn reset(&mut self) -> Event {
        self.clock.reset();
        tracing::debug!("timer reset");
        Event::TimerReset {
            remaining_secs: self.clock.remaining_secs(),
            at: Utc::now(),
        }
    }

    /// Store new durations; the interval in progress is left alone.
    pub fn apply_settings(&mut self, settings: Settings) -> Event {
        self.clock.apply_settings(settings);
        let takes_effect = SettingsEffect::for_phase(self.clock.phase());
        tracing::debug!(
            focus = settings.focus_minutes(),
            brk = settings.break_minutes(),
            ?takes_effect,
            "settings applied"
        );
        Event::SettingsApplied {
            focus_minutes: settings.focus_minutes(),
            break_minutes: settings.break_minutes(),
            takes_effect,
            hint: takes_effect.hint().to_string(),
        }
    }

    /// One second of wall time. Completing a focus interval bumps today's
    /// pomodoro count.
    pub fn tick(&mut self) -> Vec<Event> {
        self.clock
            .tick()
            .into_iter()
            .map(|signal| match signal {
                ClockSignal::Tick {
                    phase,
                    remaining_secs,
                } => Event::Tick {
                    phase,
                    remaining_secs,
                },
                ClockSignal::Warning { remaining_secs } => Event::Warning { remaining_secs },
                ClockSignal::FocusComplete { next_duration_secs } => {
                    let record = self.store.update(|r| r.pomodoros += 1);
                    tracing::debug!(pomodoros = record.pomodoros, "focus complete");
                    Event::FocusComplete {
                        pomodoros: record.pomodoros,
                        break_secs: next_duration_secs,
                        at: Utc::now(),
                    }
                }
                ClockSignal::BreakComplete { next_duration_secs } => {
                    tracing::debug!("break complete");
                    Event::BreakComplete {
                        focus_secs: next_duration_secs,
                        at: Utc::now(),
                    }
                }
            })
            .collect()
    }

    /// Count a distraction, optionally with a note. No-op outside running focus.
    pub fn log_distraction(&mut self, note: Option<&str>) -> Vec<Event> {
        let Some(record) = self.logger.log_distraction(&self.clock, &mut self.store, note) else {
            return Vec::new();
        };
        let mut events = vec![Event::DistractionLogged {
            distractions: record.distractions,
            hint: LOGGED_HINT.to_string(),
            at: Utc::now(),
        }];
        if note.is_some_and(|n| !n.trim().is_empty()) {
            if let Some(last) = record.notes.last() {
                events.push(Event::NoteAttached { note: last.clone() });
            }
        }
        events
    }

    pub fn attach_note(&mut self, text: &str) -> Option<Event> {
        let record = self.logger.attach_note(&mut self.store, text)?;
        record
            .notes
            .last()
            .map(|note| Event::NoteAttached { note: note.clone() })
    }

    pub fn skip_note(&mut self) -> Option<Event> {
        self.logger.skip_note().then_some(Event::NoteSkipped)
    }

    // ── Queries ──────────────────────────────────────────────────────

    /// Everything a renderer needs, in one event.
    pub fn snapshot(&self) -> Event {
        let record = self.store.load();
        Event::StateSnapshot {
            date: self.store.date_key(),
            phase: self.clock.phase(),
            running: self.clock.is_running(),
            remaining_secs: self.clock.remaining_secs(),
            total_secs: self.clock.total_secs(),
            clock: format_clock(self.clock.remaining_secs()),
            pomodoros: record.pomodoros,
            distractions: record.distractions,
            notes: record.notes,
            distraction_enabled: self.clock.in_running_focus(),
            note_pending: self.logger.note_pending(),
            hint: self.clock.phase().hint().to_string(),
        }
    }
}
