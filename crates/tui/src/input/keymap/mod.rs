//! Keybinding catalog and input resolver.
//!
//! Responsibilities:
//! - Define a single source of truth for keybindings and their descriptions.
//! - Resolve KeyEvents into Actions, consulting user overrides first.
//!
//! Non-responsibilities:
//! - Performing App state mutations or side effects.
//!
//! Invariants:
//! - Bindings are deterministic and stable for footer rendering.
//! - Resolver never mutates App state and returns at most one Action.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use slider_config::KeybindOverrides;

use crate::action::Action;

mod bindings;
pub mod overrides;

pub use overrides::KeybindOverrideTable;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Matcher {
    pub code: KeyCode,
    pub modifiers: KeyModifiers,
}

impl Matcher {
    fn matches(&self, key: KeyEvent) -> bool {
        normalize_key(key) == (self.code, self.modifiers)
    }
}

/// Strip modifiers that are implied by the key itself.
///
/// Terminals report `Shift` along with upper-case characters and BackTab.
pub(crate) fn normalize_key(key: KeyEvent) -> (KeyCode, KeyModifiers) {
    let mut modifiers =
        key.modifiers & (KeyModifiers::CONTROL | KeyModifiers::ALT | KeyModifiers::SHIFT);
    if matches!(key.code, KeyCode::Char(_) | KeyCode::BackTab) {
        modifiers.remove(KeyModifiers::SHIFT);
    }
    (key.code, modifiers)
}

#[derive(Debug, Clone)]
pub struct Keybinding {
    pub keys: &'static str,
    pub description: &'static str,
    pub matcher: Matcher,
    pub action: Action,
}

pub fn keybindings() -> Vec<Keybinding> {
    bindings::all()
}

/// Default bindings plus validated user overrides.
#[derive(Debug, Clone, Default)]
pub struct Keymap {
    overrides: KeybindOverrideTable,
}

impl Keymap {
    /// Build a keymap from user overrides.
    ///
    /// Invalid overrides are logged and ignored as a whole; the defaults stay usable.
    pub fn with_overrides(overrides: &KeybindOverrides) -> Self {
        if overrides.is_empty() {
            tracing::debug!("No keybinding overrides configured");
            return Self::default();
        }

        if let Err(e) = slider_config::keybind::validate_overrides(&overrides.overrides) {
            tracing::warn!(error = %e, "Keybinding validation failed, using default keybindings");
            return Self::default();
        }

        match KeybindOverrideTable::from_overrides(overrides) {
            Ok(table) => {
                tracing::info!(count = table.len(), "Loaded keybinding overrides");
                Self { overrides: table }
            }
            Err(e) => {
                tracing::warn!(error = %e, "Failed to build keybinding overrides");
                Self::default()
            }
        }
    }

    /// Resolve a key press into an action.
    pub fn resolve(&self, key: KeyEvent) -> Option<Action> {
        if key.kind != KeyEventKind::Press {
            return None;
        }
        if let Some(action) = self.overrides.resolve(key) {
            return Some(action);
        }
        keybindings()
            .into_iter()
            .find(|binding| binding.matcher.matches(key))
            .map(|binding| binding.action)
    }

    /// Key label shown for `binding`, honoring overrides.
    pub fn display_key(&self, binding: &Keybinding) -> String {
        self.overrides
            .key_for_action(&binding.action)
            .map_or_else(|| binding.keys.to_string(), str::to_string)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use slider_config::KeybindAction;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn overrides(pairs: &[(KeybindAction, &str)]) -> KeybindOverrides {
        KeybindOverrides {
            overrides: pairs
                .iter()
                .map(|(action, key)| (*action, (*key).to_string()))
                .collect(),
        }
    }

    #[test]
    fn resolves_default_bindings() {
        let keymap = Keymap::default();
        assert_eq!(keymap.resolve(key(KeyCode::Right)), Some(Action::SlideRight));
        assert_eq!(keymap.resolve(key(KeyCode::Left)), Some(Action::SlideLeft));
        assert_eq!(keymap.resolve(key(KeyCode::Tab)), Some(Action::FocusNext));
        assert_eq!(keymap.resolve(key(KeyCode::Char('q'))), Some(Action::Quit));
        assert_eq!(
            keymap.resolve(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            Some(Action::Quit)
        );
        assert_eq!(keymap.resolve(key(KeyCode::Char('x'))), None);
    }

    #[test]
    fn resolves_backtab_with_shift_reported() {
        let keymap = Keymap::default();
        assert_eq!(
            keymap.resolve(KeyEvent::new(KeyCode::BackTab, KeyModifiers::SHIFT)),
            Some(Action::FocusPrevious)
        );
    }

    #[test]
    fn ignores_key_release() {
        let keymap = Keymap::default();
        let mut release = key(KeyCode::Right);
        release.kind = KeyEventKind::Release;
        assert_eq!(keymap.resolve(release), None);
    }

    #[test]
    fn override_adds_binding() {
        let keymap = Keymap::with_overrides(&overrides(&[
            (KeybindAction::SlideLeft, "h"),
            (KeybindAction::SlideRight, "L"),
        ]));
        assert_eq!(keymap.resolve(key(KeyCode::Char('h'))), Some(Action::SlideLeft));
        assert_eq!(
            keymap.resolve(KeyEvent::new(KeyCode::Char('L'), KeyModifiers::SHIFT)),
            Some(Action::SlideRight)
        );
        // Defaults keep working.
        assert_eq!(keymap.resolve(key(KeyCode::Left)), Some(Action::SlideLeft));
    }

    #[test]
    fn conflicting_overrides_fall_back_to_defaults() {
        let keymap = Keymap::with_overrides(&overrides(&[
            (KeybindAction::SlideLeft, "h"),
            (KeybindAction::SlideRight, "h"),
        ]));
        assert_eq!(keymap.resolve(key(KeyCode::Char('h'))), None);
        assert_eq!(keymap.resolve(key(KeyCode::Right)), Some(Action::SlideRight));
    }
}
