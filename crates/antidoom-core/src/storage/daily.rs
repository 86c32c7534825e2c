//! Per-day counters and notes.
//!
//! One [`DailyRecord`] per local calendar date, stored as JSON under
//! `"<namespace>:<YYYY-MM-DD>"`. The key is recomputed from the clock on
//! every access, so a session running past midnight starts writing to the
//! next day's record on its next mutation.
//!
//! Neither [`DailyStore::load`] nor [`DailyStore::save`] fail: unreadable or
//! unparsable data yields a zero record, and write failures are logged.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::KvStore;
use crate::clock::{date_key, Clock};

pub const DEFAULT_NAMESPACE: &str = "antiDoomscroll";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyRecord {
    #[serde(default)]
    pub pomodoros: u64,
    #[serde(default)]
    pub distractions: u64,
    /// `"HH:MM — text"` entries in the order they were written.
    #[serde(default)]
    pub notes: Vec<String>,
}

pub struct DailyStore<S, C> {
    backend: S,
    clock: C,
    namespace: String,
}

impl<S: KvStore, C: Clock> DailyStore<S, C> {
    pub fn new(backend: S, clock: C) -> Self {
        Self::with_namespace(backend, clock, DEFAULT_NAMESPACE)
    }

    pub fn with_namespace(backend: S, clock: C, namespace: impl Into<String>) -> Self {
        Self {
            backend,
            clock,
            namespace: namespace.into(),
        }
    }

    /// Today's date as `YYYY-MM-DD`. Not cached.
    pub fn date_key(&self) -> String {
        date_key(self.clock.today())
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    pub fn backend(&self) -> &S {
        &self.backend
    }

    pub fn into_backend(self) -> S {
        self.backend
    }

    fn storage_key(&self, date: &str) -> String {
        format!("{}:{}", self.namespace, date)
    }

    /// Today's record, or a zero record if none exists or it cannot be read.
    pub fn load(&self) -> DailyRecord {
        self.load_key(&self.date_key())
    }

    /// The record for an arbitrary date.
    pub fn load_for(&self, date: NaiveDate) -> DailyRecord {
        self.load_key(&date_key(date))
    }

    fn load_key(&self, date: &str) -> DailyRecord {
        let key = self.storage_key(date);
        let raw = match self.backend.get(&key) {
            Ok(Some(raw)) => raw,
            Ok(None) => return DailyRecord::default(),
            Err(e) => {
                tracing::warn!(%key, error = %e, "daily record unreadable, using empty record");
                return DailyRecord::default();
            }
        };
        serde_json::from_str(&raw).unwrap_or_else(|e| {
            tracing::warn!(%key, error = %e, "daily record corrupt, using empty record");
            DailyRecord::default()
        })
    }

    /// Persist under today's key, overwriting whatever is there.
    pub fn save(&mut self, record: &DailyRecord) {
        let key = self.storage_key(&self.date_key());
        let json = match serde_json::to_string(record) {
            Ok(json) => json,
            Err(e) => {
                tracing::warn!(%key, error = %e, "failed to serialize daily record");
                return;
            }
        };
        if let Err(e) = self.backend.set(&key, &json) {
            tracing::warn!(%key, error = %e, "failed to persist daily record");
        }
    }

    /// Load today's record, apply `f`, save it back. Returns the saved record.
    pub fn update(&mut self, f: impl FnOnce(&mut DailyRecord)) -> DailyRecord {
        let mut record = self.load();
        f(&mut record);
        self.save(&record);
        record
    }
}
