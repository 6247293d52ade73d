//! Core error types for pomodoro-core.
//!
//! Persistence failures are recoverable by design of the callers: the
//! controller logs them and keeps counting in memory. These types exist so
//! the fallible primitives underneath can report what went wrong.

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for pomodoro-core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Ledger persistence errors
    #[error("Ledger error: {0}")]
    Ledger(#[from] LedgerError),

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Validation errors
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

/// Completion ledger persistence errors.
#[derive(Error, Debug)]
pub enum LedgerError {
    /// The ledger file could not be read (missing, permissions, ...).
    #[error("Failed to read ledger at {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The ledger file was read but its contents are not a valid ledger.
    #[error("Ledger at {path} is corrupt: {message}")]
    Corrupt { path: PathBuf, message: String },

    /// The ledger could not be serialized.
    #[error("Failed to encode ledger: {0}")]
    Encode(#[from] serde_json::Error),

    /// Writing or replacing the ledger file failed.
    #[error("Failed to write ledger to {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl LedgerError {
    /// True when the ledger simply does not exist yet (first run).
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            LedgerError::Read { source, .. } if source.kind() == std::io::ErrorKind::NotFound
        )
    }
}

/// Configuration-specific errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to load configuration
    #[error("Failed to load configuration from {path}: {message}")]
    LoadFailed { path: PathBuf, message: String },

    /// Failed to save configuration
    #[error("Failed to save configuration to {path}: {message}")]
    SaveFailed { path: PathBuf, message: String },

    /// Failed to parse configuration
    #[error("Failed to parse configuration: {0}")]
    ParseFailed(String),
}

/// Validation errors.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ValidationError {
    /// Day/month/year do not name a real calendar date
    #[error("Invalid date: day {day}, month {month}, year {year}")]
    InvalidDate { day: u32, month: u32, year: i32 },
}

/// Result type alias for CoreError
pub type Result<T, E = CoreError> = std::result::Result<T, E>;
