mod config;
pub mod daily;
pub mod database;
pub mod memory;

pub use config::{Config, SoundConfig, StorageConfig, TimerConfig};
pub use daily::{DailyRecord, DailyStore};
pub use database::Database;
pub use memory::MemoryStore;

use std::path::PathBuf;

use crate::error::{ConfigError, StoreError};

/// A flat string-to-string store.
///
/// The daily store writes one JSON document per date through this trait;
/// it does not care whether the bytes land in SQLite or a `HashMap`.
pub trait KvStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;
    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError>;
}

/// Returns the data directory, creating it if needed.
///
/// `ANTIDOOM_DATA_DIR` wins if set. Otherwise `~/.config/antidoom[-dev]/`,
/// with the `-dev` suffix when `ANTIDOOM_ENV=dev`.
///
/// # Errors
/// Returns an error if creating the directory fails.
pub fn data_dir() -> Result<PathBuf, ConfigError> {
    let dir = match std::env::var_os("ANTIDOOM_DATA_DIR") {
        Some(explicit) => PathBuf::from(explicit),
        None => {
            let base_dir = dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(".config");

            let env = std::env::var("ANTIDOOM_ENV").unwrap_or_else(|_| "production".to_string());
            if env == "dev" {
                base_dir.join("antidoom-dev")
            } else {
                base_dir.join("antidoom")
            }
        }
    };

    std::fs::create_dir_all(&dir).map_err(|e| ConfigError::NoDataDir(format!("{}: {e}", dir.display())))?;
    Ok(dir)
}
