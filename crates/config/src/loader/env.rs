//! Environment variable parsing for settings.
//!
//! Invariants:
//! - Empty or whitespace-only variables are treated as unset.
//! - Returned values are trimmed.
//! - Invalid values return `ConfigError::InvalidValue`.

use super::builder::SettingsLoader;
use super::error::ConfigError;
use crate::constants::ENV_THEME;
use crate::types::ColorTheme;

/// Read an environment variable, returning None if unset, empty, or whitespace-only.
pub fn env_var_or_none(key: &str) -> Option<String> {
    std::env::var(key).ok().and_then(|s| {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    })
}

/// Apply environment overrides to the loader.
pub(crate) fn apply_env(loader: &mut SettingsLoader) -> Result<(), ConfigError> {
    if let Some(theme) = env_var_or_none(ENV_THEME) {
        let parsed = theme
            .parse::<ColorTheme>()
            .map_err(|e| ConfigError::InvalidValue {
                var: ENV_THEME.to_string(),
                message: e.to_string(),
            })?;
        loader.set_env_theme(Some(parsed));
    }
    Ok(())
}
