mod config;
pub mod ledger;

pub use config::{Config, NotificationsConfig};
pub use ledger::CompletionLedger;

use std::path::PathBuf;

use crate::error::ConfigError;

/// File name of the ledger inside the data directory.
pub const LEDGER_FILE: &str = "ledger.json";

/// Environment variable that overrides the ledger location.
pub const LEDGER_PATH_ENV: &str = "POMODORO_LEDGER";

/// Returns `~/.config/pomodoro-manager[-dev]/` based on POMODORO_ENV.
///
/// Set POMODORO_ENV=dev to use development data directory.
///
/// # Errors
/// Returns an error if creating the directory fails.
pub fn data_dir() -> Result<PathBuf, ConfigError> {
    let base_dir = dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".config");

    let env = std::env::var("POMODORO_ENV").unwrap_or_else(|_| "production".to_string());

    let dir = if env == "dev" {
        base_dir.join("pomodoro-manager-dev")
    } else {
        base_dir.join("pomodoro-manager")
    };

    std::fs::create_dir_all(&dir).map_err(|e| ConfigError::LoadFailed {
        path: dir.clone(),
        message: e.to_string(),
    })?;
    Ok(dir)
}
