//! # Anti-Doomscroll Core Library
//!
//! Core logic for a single-user focus/break timer that keeps daily counters
//! and an optional distraction log. UI glue (the CLI, or anything else)
//! sends discrete commands to a [`Controller`] and renders the [`Event`]s
//! it returns.
//!
//! ## Architecture
//!
//! - **Session Clock**: a focus/break countdown that requires the caller to
//!   invoke `tick()` once per second while running
//! - **Daily Store**: one JSON record per local date in a key-value backend
//!   (SQLite in production, a `HashMap` in tests)
//! - **Distraction Logger**: counts distractions during running focus and
//!   attaches optional notes
//! - **Settings**: clamped focus/break durations
//!
//! ## Key Components
//!
//! - [`Controller`]: command surface and event source
//! - [`SessionClock`]: timer state machine
//! - [`DailyStore`]: per-day persistence
//! - [`Config`]: TOML configuration

pub mod clock;
pub mod controller;
pub mod distraction;
pub mod error;
pub mod events;
pub mod storage;
pub mod timer;

pub use clock::{Clock, FixedClock, SystemClock};
pub use controller::Controller;
pub use distraction::DistractionLogger;
pub use error::{ConfigError, CoreError, StoreError};
pub use events::{Cue, Event};
pub use storage::{Config, DailyRecord, DailyStore, Database, KvStore, MemoryStore};
pub use timer::{format_clock, Phase, SessionClock, Settings, SettingsEffect};
