//! Default keybindings.
//!
//! Invariants:
//! - The first binding for each action is the one shown in the footer.

use crossterm::event::{KeyCode, KeyModifiers};

use crate::action::Action;

use super::{Keybinding, Matcher};

fn bind(
    keys: &'static str,
    description: &'static str,
    code: KeyCode,
    modifiers: KeyModifiers,
    action: Action,
) -> Keybinding {
    Keybinding {
        keys,
        description,
        matcher: Matcher { code, modifiers },
        action,
    }
}

pub(super) fn all() -> Vec<Keybinding> {
    vec![
        bind("←", "left", KeyCode::Left, KeyModifiers::NONE, Action::SlideLeft),
        bind("→", "right", KeyCode::Right, KeyModifiers::NONE, Action::SlideRight),
        bind("Tab", "next", KeyCode::Tab, KeyModifiers::NONE, Action::FocusNext),
        bind(
            "Shift+Tab",
            "prev",
            KeyCode::BackTab,
            KeyModifiers::NONE,
            Action::FocusPrevious,
        ),
        bind("t", "theme", KeyCode::Char('t'), KeyModifiers::NONE, Action::CycleTheme),
        bind("q", "quit", KeyCode::Char('q'), KeyModifiers::NONE, Action::Quit),
        bind("Esc", "quit", KeyCode::Esc, KeyModifiers::NONE, Action::Quit),
        bind("Ctrl+C", "quit", KeyCode::Char('c'), KeyModifiers::CONTROL, Action::Quit),
    ]
}
