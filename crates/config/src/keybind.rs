//! Keybinding parsing and validation.
//!
//! Responsibilities:
//! - Parse human-readable key strings ("h", "Ctrl+Right", "F2") into structured form.
//! - Validate a set of overrides for syntax errors, reserved keys and conflicts.
//!
//! Does NOT handle:
//! - Integration with crossterm (that's in the TUI crate).
//! - Runtime key event matching.

use std::collections::{BTreeMap, HashMap};
use std::fmt;

use thiserror::Error;

use crate::types::keybind::KeybindAction;

/// Errors that can occur when parsing or validating keybindings.
#[derive(Debug, Error, PartialEq)]
pub enum KeybindError {
    #[error("Invalid key syntax: '{key}'. Expected format like 'h', 'Ctrl+Right', 'Shift+Tab', 'F1'")]
    InvalidSyntax { key: String },

    #[error("Unknown key name: '{name}'")]
    UnknownKey { name: String },

    #[error("Conflicting keybindings: '{key}' is assigned to both {first} and {second}")]
    Conflict {
        key: String,
        first: KeybindAction,
        second: KeybindAction,
    },

    #[error("Reserved keybinding: '{key}' cannot be overridden")]
    ReservedKey { key: String },
}

/// Key names that can appear in config strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyCodeName {
    Char(char),
    /// Function key F1-F20
    F(u8),
    Esc,
    Enter,
    Space,
    Tab,
    BackTab,
    Backspace,
    Home,
    End,
    PageUp,
    PageDown,
    Up,
    Down,
    Left,
    Right,
}

impl fmt::Display for KeyCodeName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Char(c) => write!(f, "{c}"),
            Self::F(n) => write!(f, "F{n}"),
            Self::Esc => f.write_str("Esc"),
            Self::Enter => f.write_str("Enter"),
            Self::Space => f.write_str("Space"),
            Self::Tab => f.write_str("Tab"),
            Self::BackTab => f.write_str("BackTab"),
            Self::Backspace => f.write_str("Backspace"),
            Self::Home => f.write_str("Home"),
            Self::End => f.write_str("End"),
            Self::PageUp => f.write_str("PageUp"),
            Self::PageDown => f.write_str("PageDown"),
            Self::Up => f.write_str("Up"),
            Self::Down => f.write_str("Down"),
            Self::Left => f.write_str("Left"),
            Self::Right => f.write_str("Right"),
        }
    }
}

/// Modifier flags for key combinations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct ModifierFlags {
    pub ctrl: bool,
    pub shift: bool,
    pub alt: bool,
}

/// A parsed key combination.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ParsedKey {
    pub code: KeyCodeName,
    pub modifiers: ModifierFlags,
}

/// Keys that may not be rebound (interrupt and suspend).
pub const RESERVED_KEYS: &[&str] = &["ctrl+c", "ctrl+z"];

/// Parse a key string like "Ctrl+x", "F1" or "Shift+Tab".
///
/// # Examples
///
/// ```
/// use slider_config::keybind::{parse_key, KeyCodeName};
///
/// let key = parse_key("Ctrl+Right").unwrap();
/// assert_eq!(key.code, KeyCodeName::Right);
/// assert!(key.modifiers.ctrl);
/// ```
///
/// # Errors
///
/// Returns [`KeybindError::InvalidSyntax`] for empty strings or several
/// non-modifier parts, and [`KeybindError::UnknownKey`] for unknown names.
pub fn parse_key(key_str: &str) -> Result<ParsedKey, KeybindError> {
    let invalid = || KeybindError::InvalidSyntax {
        key: key_str.to_string(),
    };

    let mut modifiers = ModifierFlags::default();
    let mut key_name: Option<&str> = None;

    for part in key_str.split('+').map(str::trim) {
        match part.to_ascii_lowercase().as_str() {
            "ctrl" | "control" => modifiers.ctrl = true,
            "shift" => modifiers.shift = true,
            "alt" | "option" => modifiers.alt = true,
            "" => return Err(invalid()),
            _ if key_name.is_some() => return Err(invalid()),
            _ => key_name = Some(part),
        }
    }

    let code = parse_key_code(key_name.ok_or_else(invalid)?)?;
    let code = if code == KeyCodeName::Tab && modifiers.shift {
        KeyCodeName::BackTab
    } else {
        code
    };

    Ok(ParsedKey { code, modifiers })
}

fn parse_key_code(name: &str) -> Result<KeyCodeName, KeybindError> {
    let lower = name.to_ascii_lowercase();
    let code = match lower.as_str() {
        "esc" | "escape" => KeyCodeName::Esc,
        "enter" | "return" => KeyCodeName::Enter,
        "space" => KeyCodeName::Space,
        "tab" => KeyCodeName::Tab,
        "backtab" => KeyCodeName::BackTab,
        "backspace" => KeyCodeName::Backspace,
        "home" => KeyCodeName::Home,
        "end" => KeyCodeName::End,
        "pageup" | "pgup" => KeyCodeName::PageUp,
        "pagedown" | "pgdn" => KeyCodeName::PageDown,
        "up" => KeyCodeName::Up,
        "down" => KeyCodeName::Down,
        "left" => KeyCodeName::Left,
        "right" => KeyCodeName::Right,
        _ => {
            if let Some(num) = lower.strip_prefix('f')
                && let Ok(n) = num.parse::<u8>()
                && (1..=20).contains(&n)
            {
                return Ok(KeyCodeName::F(n));
            }

            let mut chars = name.chars();
            return match (chars.next(), chars.next()) {
                (Some(c), None) => Ok(KeyCodeName::Char(c)),
                _ => Err(KeybindError::UnknownKey {
                    name: name.to_string(),
                }),
            };
        }
    };
    Ok(code)
}

/// Lowercase and strip whitespace around `+` so "Ctrl + X" and "ctrl+x" compare equal.
fn normalize_key(key_str: &str) -> String {
    key_str
        .split('+')
        .map(|s| s.trim().to_ascii_lowercase())
        .collect::<Vec<_>>()
        .join("+")
}

/// Validate a set of keybinding overrides.
///
/// # Errors
///
/// Returns the first reserved key, unparsable key, or conflicting pair found.
pub fn validate_overrides(
    overrides: &BTreeMap<KeybindAction, String>,
) -> Result<(), KeybindError> {
    let mut seen: HashMap<String, KeybindAction> = HashMap::new();

    for (action, key_str) in overrides {
        let normalized = normalize_key(key_str);
        if RESERVED_KEYS.contains(&normalized.as_str()) {
            return Err(KeybindError::ReservedKey {
                key: key_str.clone(),
            });
        }

        parse_key(key_str)?;

        if let Some(first) = seen.insert(normalized, *action) {
            return Err(KeybindError::Conflict {
                key: key_str.clone(),
                first,
                second: *action,
            });
        }
    }

    Ok(())
}
