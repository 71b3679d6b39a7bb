//! Footer hints rendered from the keybinding catalog.
//!
//! Invariants:
//! - Hint order follows the catalog and is stable for snapshots.

use crate::input::keymap::{Keymap, keybindings};

/// One-line summary of the keys, one entry per action.
pub fn footer_hints(keymap: &Keymap) -> String {
    let mut seen = Vec::new();
    let mut parts = Vec::new();

    for binding in keybindings() {
        if seen.contains(&binding.action) {
            continue;
        }
        parts.push(format!("{} {}", keymap.display_key(&binding), binding.description));
        seen.push(binding.action);
    }

    parts.join("  ")
}
