//! Settings loading for the demo binary.
//!
//! Responsibilities:
//! - Load settings with CLI and environment variable overrides.
//! - Resolve keybinding overrides into a `Keymap`.
//!
//! Does NOT handle:
//! - Terminal state management (see `runtime::terminal`).
//!
//! Invariants:
//! - Precedence: CLI args > env vars > settings file > defaults.

use anyhow::{Context, Result};
use slider_config::{Settings, SettingsLoader};

use crate::cli::Cli;
use crate::input::keymap::Keymap;

/// Settings resolved for this run.
#[derive(Debug)]
pub struct RuntimeSettings {
    pub settings: Settings,
    pub keymap: Keymap,
}

/// Load settings from the file named on the command line, or the default location.
///
/// # Errors
///
/// Returns an error if an explicit settings file is missing, or any settings
/// file cannot be read or parsed.
pub fn load_settings(cli: &Cli) -> Result<RuntimeSettings> {
    let loader = match &cli.config_path {
        Some(path) => SettingsLoader::new().with_path(path.clone()),
        None => SettingsLoader::new(),
    };

    let settings = loader
        .with_theme_override(cli.theme)
        .load()
        .context("Failed to load settings")?;

    tracing::info!(theme = %settings.theme, "settings loaded");
    let keymap = Keymap::with_overrides(&settings.keybind_overrides);

    Ok(RuntimeSettings { settings, keymap })
}
