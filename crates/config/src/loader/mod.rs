//! Settings loader for files and environment variables.
//!
//! Responsibilities:
//! - Load `Settings` from a JSON file (explicit or default location).
//! - Apply environment variable and command-line overrides on top.
//!
//! Does NOT handle:
//! - Writing settings back to disk; slider values are never persisted.

mod builder;
mod env;
mod error;
mod path;

pub use builder::{Settings, SettingsLoader, read_settings_file};
pub use env::env_var_or_none;
pub use error::ConfigError;
pub use path::default_settings_path;
