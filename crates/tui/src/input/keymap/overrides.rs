//! Keybinding override resolution.
//!
//! Bridges the config crate's KeybindOverrides with crossterm key events.
//!
//! Responsibilities:
//! - Convert config keybinding strings into crossterm key codes and modifiers.
//! - Build a lookup table for override resolution at runtime.
//!
//! Does NOT handle:
//! - Parsing or validating key strings (handled by slider_config::keybind).
//! - Runtime keybinding changes (overrides are immutable after startup).

use std::collections::HashMap;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use slider_config::keybind::{KeyCodeName, KeybindError, ModifierFlags, ParsedKey, parse_key};
use slider_config::{KeybindAction, KeybindOverrides};

use super::normalize_key;
use crate::action::Action;

/// Lookup table for user keybinding overrides.
#[derive(Debug, Clone, Default)]
pub struct KeybindOverrideTable {
    overrides: HashMap<(KeyCode, KeyModifiers), Action>,
    /// Original key strings, for footer hints.
    display_keys: Vec<(Action, String)>,
}

impl KeybindOverrideTable {
    /// Build the override table from config.
    ///
    /// # Errors
    ///
    /// Returns an error if any keybinding cannot be parsed.
    pub fn from_overrides(overrides: &KeybindOverrides) -> Result<Self, KeybindError> {
        let mut table = HashMap::new();
        let mut display_keys = Vec::new();

        for (action, key_str) in &overrides.overrides {
            let parsed = parse_key(key_str)?;
            let action = action_for_keybind(*action);
            table.insert(normalize_key(parsed_key_to_crossterm(&parsed)), action.clone());
            display_keys.push((action, key_str.clone()));
        }

        Ok(Self {
            overrides: table,
            display_keys,
        })
    }

    /// Check if a key event matches an override.
    pub fn resolve(&self, key: KeyEvent) -> Option<Action> {
        self.overrides.get(&normalize_key(key)).cloned()
    }

    pub fn is_empty(&self) -> bool {
        self.overrides.is_empty()
    }

    pub fn len(&self) -> usize {
        self.overrides.len()
    }

    /// The configured key string for `action`, if overridden.
    pub fn key_for_action(&self, action: &Action) -> Option<&str> {
        self.display_keys
            .iter()
            .find(|(a, _)| a == action)
            .map(|(_, key)| key.as_str())
    }
}

/// Converts a parsed key from config into a crossterm KeyEvent.
fn parsed_key_to_crossterm(parsed: &ParsedKey) -> KeyEvent {
    let code = match parsed.code {
        // Terminals report Shift+h as an upper-case character.
        KeyCodeName::Char(c) if parsed.modifiers.shift => KeyCode::Char(c.to_ascii_uppercase()),
        KeyCodeName::Char(c) => KeyCode::Char(c),
        KeyCodeName::F(n) => KeyCode::F(n),
        KeyCodeName::Esc => KeyCode::Esc,
        KeyCodeName::Enter => KeyCode::Enter,
        KeyCodeName::Space => KeyCode::Char(' '),
        KeyCodeName::Tab => KeyCode::Tab,
        KeyCodeName::BackTab => KeyCode::BackTab,
        KeyCodeName::Backspace => KeyCode::Backspace,
        KeyCodeName::Home => KeyCode::Home,
        KeyCodeName::End => KeyCode::End,
        KeyCodeName::PageUp => KeyCode::PageUp,
        KeyCodeName::PageDown => KeyCode::PageDown,
        KeyCodeName::Up => KeyCode::Up,
        KeyCodeName::Down => KeyCode::Down,
        KeyCodeName::Left => KeyCode::Left,
        KeyCodeName::Right => KeyCode::Right,
    };

    KeyEvent::new(code, modifier_flags_to_crossterm(&parsed.modifiers))
}

fn modifier_flags_to_crossterm(flags: &ModifierFlags) -> KeyModifiers {
    let mut modifiers = KeyModifiers::NONE;
    if flags.ctrl {
        modifiers |= KeyModifiers::CONTROL;
    }
    if flags.shift {
        modifiers |= KeyModifiers::SHIFT;
    }
    if flags.alt {
        modifiers |= KeyModifiers::ALT;
    }
    modifiers
}

fn action_for_keybind(action: KeybindAction) -> Action {
    match action {
        KeybindAction::Quit => Action::Quit,
        KeybindAction::SlideLeft => Action::SlideLeft,
        KeybindAction::SlideRight => Action::SlideRight,
        KeybindAction::FocusNext => Action::FocusNext,
        KeybindAction::FocusPrevious => Action::FocusPrevious,
        KeybindAction::CycleTheme => Action::CycleTheme,
    }
}
