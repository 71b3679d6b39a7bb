//! Configuration type definitions for the slider demo.
//!
//! Responsibilities:
//! - Define theme and keybinding types shared by the loader and the TUI.
//!
//! Does NOT handle:
//! - Loading from files or environment variables (see `loader` module).
//! - Keybinding parsing or validation (see `keybind` module at crate root).

pub mod keybind;
mod theme;

pub use keybind::{KeybindAction, KeybindOverrides};
pub use theme::{ColorTheme, Theme, UnknownThemeError};
