mod engine;
mod phase;
mod settings;

pub use engine::{ClockSignal, SessionClock};
pub use phase::{format_clock, Phase};
pub use settings::{Settings, SettingsEffect};
