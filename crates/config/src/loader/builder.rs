//! Settings loader builder.
//!
//! Responsibilities:
//! - Merge the settings file, environment variables and explicit overrides
//!   into a final `Settings` value.
//!
//! Invariants / Assumptions:
//! - Precedence: explicit overrides > environment variables > settings file > defaults.
//! - A missing file at the *default* location yields defaults; a missing file at an
//!   *explicit* path is an error.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::env::apply_env;
use super::error::ConfigError;
use super::path::default_settings_path;
use crate::types::{ColorTheme, KeybindOverrides};

/// User settings for the slider demo.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Color theme used for sliders and labels.
    pub theme: ColorTheme,
    /// Keybinding overrides for the slider actions.
    pub keybind_overrides: KeybindOverrides,
}

/// Builder that resolves `Settings` from all sources.
#[derive(Debug, Default)]
pub struct SettingsLoader {
    path: Option<PathBuf>,
    env_theme: Option<ColorTheme>,
    theme_override: Option<ColorTheme>,
}

impl SettingsLoader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Read settings from this file instead of the default location.
    pub fn with_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.path = Some(path.into());
        self
    }

    /// Theme chosen on the command line; wins over every other source.
    pub fn with_theme_override(mut self, theme: Option<ColorTheme>) -> Self {
        self.theme_override = theme;
        self
    }

    pub(crate) fn set_env_theme(&mut self, theme: Option<ColorTheme>) {
        self.env_theme = theme;
    }

    /// Resolve the final settings.
    ///
    /// # Errors
    ///
    /// Returns an error if an explicit settings file is missing, if any
    /// settings file cannot be read or parsed, or if an environment
    /// override holds an invalid value.
    pub fn load(mut self) -> Result<Settings, ConfigError> {
        let mut settings = match self.path.take() {
            Some(path) => {
                if !path.exists() {
                    return Err(ConfigError::SettingsFileNotFound { path });
                }
                read_settings_file(&path)?
            }
            None => match default_settings_path() {
                Ok(path) if path.exists() => read_settings_file(&path)?,
                Ok(_) => Settings::default(),
                Err(e) => {
                    tracing::debug!("No default settings location: {e:#}");
                    Settings::default()
                }
            },
        };

        apply_env(&mut self)?;

        if let Some(theme) = self.theme_override.or(self.env_theme) {
            settings.theme = theme;
        }

        Ok(settings)
    }
}

/// Read and parse a JSON settings file.
///
/// # Errors
///
/// Returns `SettingsFileRead` or `SettingsFileParse` with the offending path.
pub fn read_settings_file(path: &Path) -> Result<Settings, ConfigError> {
    let contents =
        std::fs::read_to_string(path).map_err(|source| ConfigError::SettingsFileRead {
            path: path.to_path_buf(),
            source,
        })?;
    let settings =
        serde_json::from_str(&contents).map_err(|source| ConfigError::SettingsFileParse {
            path: path.to_path_buf(),
            source,
        })?;
    tracing::debug!(path = %path.display(), "Loaded settings file");
    Ok(settings)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::ENV_THEME;
    use crate::types::KeybindAction;
    use serial_test::serial;
    use std::io::Write;

    fn write_settings(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    #[serial]
    fn test_load_from_explicit_path() {
        let file = write_settings(
            r#"{ "theme": "dark", "keybind_overrides": { "overrides": { "slide_left": "h" } } }"#,
        );

        let settings = temp_env::with_var_unset(ENV_THEME, || {
            SettingsLoader::new().with_path(file.path()).load().unwrap()
        });

        assert_eq!(settings.theme, ColorTheme::Dark);
        assert_eq!(
            settings.keybind_overrides.get(KeybindAction::SlideLeft),
            Some("h")
        );
    }

    #[test]
    #[serial]
    fn test_partial_file_keeps_defaults() {
        let file = write_settings(r#"{ "theme": "light" }"#);

        let settings = temp_env::with_var_unset(ENV_THEME, || {
            SettingsLoader::new().with_path(file.path()).load().unwrap()
        });

        assert_eq!(settings.theme, ColorTheme::Light);
        assert!(settings.keybind_overrides.is_empty());
    }

    #[test]
    #[serial]
    fn test_env_overrides_file() {
        let file = write_settings(r#"{ "theme": "light" }"#);

        let settings = temp_env::with_var(ENV_THEME, Some("monochrome"), || {
            SettingsLoader::new().with_path(file.path()).load().unwrap()
        });

        assert_eq!(settings.theme, ColorTheme::Monochrome);
    }

    #[test]
    #[serial]
    fn test_cli_override_beats_env() {
        let file = write_settings(r#"{ "theme": "light" }"#);

        let settings = temp_env::with_var(ENV_THEME, Some("monochrome"), || {
            SettingsLoader::new()
                .with_path(file.path())
                .with_theme_override(Some(ColorTheme::HighContrast))
                .load()
                .unwrap()
        });

        assert_eq!(settings.theme, ColorTheme::HighContrast);
    }

    #[test]
    #[serial]
    fn test_blank_env_is_ignored() {
        let file = write_settings(r#"{ "theme": "dark" }"#);

        let settings = temp_env::with_var(ENV_THEME, Some("   "), || {
            SettingsLoader::new().with_path(file.path()).load().unwrap()
        });

        assert_eq!(settings.theme, ColorTheme::Dark);
    }

    #[test]
    #[serial]
    fn test_invalid_env_theme_is_error() {
        let file = write_settings("{}");

        let result = temp_env::with_var(ENV_THEME, Some("neon"), || {
            SettingsLoader::new().with_path(file.path()).load()
        });

        assert!(matches!(
            result,
            Err(ConfigError::InvalidValue { ref var, .. }) if var == ENV_THEME
        ));
    }

    #[test]
    fn test_missing_explicit_path_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.json");

        let result = SettingsLoader::new().with_path(&path).load();

        assert!(matches!(
            result,
            Err(ConfigError::SettingsFileNotFound { path: ref p }) if *p == path
        ));
    }

    #[test]
    fn test_malformed_file_is_parse_error() {
        let file = write_settings("{ theme: ");

        let result = read_settings_file(file.path());

        assert!(matches!(result, Err(ConfigError::SettingsFileParse { .. })));
    }
}
