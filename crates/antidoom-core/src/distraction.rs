//! Distraction logging.
//!
//! A distraction only counts while the clock is running in focus. The
//! counter is written first and unconditionally; the note is a separate,
//! optional follow-up that the user may answer or skip.

use crate::clock::Clock;
use crate::storage::{DailyRecord, DailyStore, KvStore};
use crate::timer::SessionClock;

pub const LOGGED_HINT: &str = "Distraction logged. Back to one task.";

#[derive(Debug, Clone, Default)]
pub struct DistractionLogger {
    note_pending: bool,
}

impl DistractionLogger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a distraction is waiting for an optional note.
    pub fn note_pending(&self) -> bool {
        self.note_pending
    }

    /// Count a distraction and optionally note it in one go.
    ///
    /// Returns the record after the counter write, or after the note write
    /// if a note was given. `None` when the clock is not in running focus.
    pub fn log_distraction<S: KvStore, C: Clock>(
        &mut self,
        clock: &SessionClock,
        store: &mut DailyStore<S, C>,
        note: Option<&str>,
    ) -> Option<DailyRecord> {
        if !clock.in_running_focus() {
            tracing::debug!(
                phase = ?clock.phase(),
                running = clock.is_running(),
                "distraction ignored outside running focus"
            );
            return None;
        }

        let record = store.update(|r| r.distractions += 1);
        tracing::debug!(distractions = record.distractions, "distraction logged");
        self.note_pending = true;

        match note {
            Some(text) => Some(self.attach_note(store, text).unwrap_or(record)),
            None => Some(record),
        }
    }

    /// Append a timestamped note for the pending distraction.
    ///
    /// Empty text resolves the prompt without writing. Does nothing when no
    /// distraction is pending.
    pub fn attach_note<S: KvStore, C: Clock>(
        &mut self,
        store: &mut DailyStore<S, C>,
        text: &str,
    ) -> Option<DailyRecord> {
        if !self.note_pending {
            return None;
        }
        self.note_pending = false;

        let text = text.trim();
        if text.is_empty() {
            return None;
        }
        let entry = format!("{} — {}", store.clock().now().format("%H:%M"), text);
        Some(store.update(|r| r.notes.push(entry)))
    }

    /// Dismiss the pending note prompt. Returns whether one was pending.
    pub fn skip_note(&mut self) -> bool {
        std::mem::take(&mut self.note_pending)
    }
}
