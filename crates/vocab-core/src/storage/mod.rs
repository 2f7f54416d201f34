mod config;
pub mod database;

pub use config::{Config, ImportConfig, LoggingConfig, SessionConfig, StorageConfig};
pub use database::{SnapshotDb, LIBRARY_KEY, SESSION_KEY};

use std::path::PathBuf;

use crate::error::StorageError;

/// Overrides the data directory entirely.
pub const DATA_DIR_ENV: &str = "VOCAB_BOOSTER_DATA_DIR";
/// Set to `dev` to use the development data directory.
pub const ENV_ENV: &str = "VOCAB_BOOSTER_ENV";

/// Returns `~/.config/vocab-booster[-dev]/`, or `$VOCAB_BOOSTER_DATA_DIR`
/// when set.
///
/// # Errors
/// Returns an error if creating the directory fails.
pub fn data_dir() -> Result<PathBuf, StorageError> {
    let dir = match std::env::var_os(DATA_DIR_ENV) {
        Some(custom) if !custom.is_empty() => PathBuf::from(custom),
        _ => {
            let base_dir = dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(".config");

            let env = std::env::var(ENV_ENV).unwrap_or_else(|_| "production".to_string());
            if env == "dev" {
                base_dir.join("vocab-booster-dev")
            } else {
                base_dir.join("vocab-booster")
            }
        }
    };

    std::fs::create_dir_all(&dir)
        .map_err(|e| StorageError::DataDir(format!("{}: {e}", dir.display())))?;
    Ok(dir)
}
