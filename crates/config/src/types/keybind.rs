//! Keybinding configuration types.
//!
//! Responsibilities:
//! - Define overridable keybinding action identifiers (`KeybindAction`).
//! - Define `KeybindOverrides` for user-defined keybinding customizations.
//!
//! Does NOT handle:
//! - Keybinding parsing or validation (see `keybind` module at crate root).
//! - Runtime key event matching (see the TUI crate).
//!
//! Invariants:
//! - `KeybindAction` uses snake_case serialization for config file consistency.
//! - `KeybindOverrides` uses `BTreeMap` for deterministic serialization.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// An overridable keybinding action identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Hash, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum KeybindAction {
    /// Quit the application
    Quit,
    /// Move the focused slider one step towards `min`
    SlideLeft,
    /// Move the focused slider one step towards `max`
    SlideRight,
    /// Focus the next slider
    FocusNext,
    /// Focus the previous slider
    FocusPrevious,
    /// Switch to the next color theme
    CycleTheme,
}

impl fmt::Display for KeybindAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Quit => "quit",
            Self::SlideLeft => "slide_left",
            Self::SlideRight => "slide_right",
            Self::FocusNext => "focus_next",
            Self::FocusPrevious => "focus_previous",
            Self::CycleTheme => "cycle_theme",
        };
        f.write_str(name)
    }
}

/// User-defined keybinding overrides.
///
/// Only actions listed here replace their defaults; everything else keeps
/// its built-in binding.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeybindOverrides {
    #[serde(default)]
    pub overrides: BTreeMap<KeybindAction, String>,
}

impl KeybindOverrides {
    pub fn is_empty(&self) -> bool {
        self.overrides.is_empty()
    }

    /// Get the override for a specific action, if any.
    pub fn get(&self, action: KeybindAction) -> Option<&str> {
        self.overrides.get(&action).map(String::as_str)
    }
}
