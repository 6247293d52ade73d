//! TOML-based application configuration.
//!
//! Stores user preferences including:
//! - Where the completion ledger lives
//! - Notification preferences (alert on/off, custom sound file)
//!
//! Configuration is stored at `~/.config/pomodoro-manager/config.toml`.
//! Interval lengths are fixed and deliberately not configurable.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::info;

use super::{data_dir, LEDGER_FILE, LEDGER_PATH_ENV};
use crate::error::ConfigError;

/// Notification configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NotificationsConfig {
    #[serde(default = "default_true")]
    pub enabled: bool,
    /// Path to custom notification sound file (optional).
    /// If set, the host plays this file instead of its built-in sound.
    #[serde(default)]
    pub custom_sound: Option<String>,
}

/// Application configuration.
///
/// Serialized to/from TOML at `~/.config/pomodoro-manager/config.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Config {
    /// Ledger file override. Relative paths resolve against the data directory.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ledger_path: Option<PathBuf>,
    #[serde(default)]
    pub notifications: NotificationsConfig,
}

fn default_true() -> bool {
    true
}

impl Default for NotificationsConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            custom_sound: None,
        }
    }
}

impl Config {
    fn path() -> Result<PathBuf, ConfigError> {
        Ok(data_dir()?.join("config.toml"))
    }

    /// Load from disk, writing and returning the default if no file exists.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file exists but cannot be parsed,
    /// or if the default config cannot be written to disk.
    pub fn load() -> Result<Self, ConfigError> {
        let path = Self::path()?;
        match std::fs::read_to_string(&path) {
            Ok(content) => Self::from_toml_str(&content),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                let cfg = Self::default();
                cfg.save_to(&path)?;
                info!(path = %path.display(), "wrote default configuration");
                Ok(cfg)
            }
            Err(e) => Err(ConfigError::LoadFailed {
                path,
                message: e.to_string(),
            }),
        }
    }

    /// Load from disk, returning default on error.
    /// This is a convenience method that never fails.
    pub fn load_or_default() -> Self {
        Self::load().unwrap_or_default()
    }

    /// Persist to the default location.
    ///
    /// # Errors
    ///
    /// Returns an error if the config cannot be serialized or written to disk.
    pub fn save(&self) -> Result<(), ConfigError> {
        self.save_to(&Self::path()?)
    }

    fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        let content = self.to_toml_string()?;
        std::fs::write(path, content).map_err(|e| ConfigError::SaveFailed {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }

    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::ParseFailed(e.to_string()))
    }

    pub fn to_toml_string(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::ParseFailed(e.to_string()))
    }

    /// Where the ledger is read from and saved to.
    ///
    /// Precedence: `POMODORO_LEDGER`, then `ledger_path`, then
    /// `<data_dir>/ledger.json`.
    ///
    /// # Errors
    /// Returns an error if the data directory is needed and cannot be created.
    pub fn ledger_path(&self) -> Result<PathBuf, ConfigError> {
        let env_override = std::env::var_os(LEDGER_PATH_ENV)
            .filter(|v| !v.is_empty())
            .map(PathBuf::from);
        match (env_override, &self.ledger_path) {
            (Some(path), _) => Ok(path),
            (None, Some(path)) if path.is_absolute() => Ok(path.clone()),
            (None, Some(path)) => Ok(data_dir()?.join(path)),
            (None, None) => Ok(data_dir()?.join(LEDGER_FILE)),
        }
    }

    /// Sound the host should play on an alert, `None` for a silent alert.
    pub fn alert_sound(&self) -> Option<String> {
        if !self.notifications.enabled {
            return None;
        }
        Some(
            self.notifications
                .custom_sound
                .clone()
                .unwrap_or_else(|| "default".to_string()),
        )
    }
}
