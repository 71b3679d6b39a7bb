//! Error types for settings loading.
//!
//! Invariants:
//! - Every variant carries enough context (path or variable name) to act on.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading settings.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid value for {var}: {message}")]
    InvalidValue { var: String, message: String },

    #[error("Settings file not found at {path}")]
    SettingsFileNotFound { path: PathBuf },

    #[error("Failed to read settings file at {path}")]
    SettingsFileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse settings file at {path}")]
    SettingsFileParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}
