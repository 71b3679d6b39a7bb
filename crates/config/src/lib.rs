//! Configuration for the slider demo.
//!
//! This crate provides the color themes, keybinding parsing and the settings
//! loader used by the TUI crate.

pub mod constants;
pub mod keybind;
mod loader;
pub mod types;

pub use loader::{
    ConfigError, Settings, SettingsLoader, default_settings_path, env_var_or_none,
    read_settings_file,
};
pub use types::{ColorTheme, KeybindAction, KeybindOverrides, Theme, UnknownThemeError};
