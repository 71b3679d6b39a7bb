//! Path helpers for the settings file location.

use std::path::PathBuf;

use anyhow::Context;

use crate::constants::{APP_DIR_NAME, SETTINGS_FILE_NAME};

/// Returns the default path to the settings file.
///
/// - Linux/macOS: `~/.config/slider-demo/config.json`
/// - Windows: `%AppData%\slider-demo\config.json`
pub fn default_settings_path() -> Result<PathBuf, anyhow::Error> {
    let proj_dirs = directories::ProjectDirs::from("", "", APP_DIR_NAME)
        .context("Failed to determine project directories")?;

    Ok(proj_dirs.config_dir().join(SETTINGS_FILE_NAME))
}
