//! Keybinding definitions for the slider demo.
//!
//! Responsibilities:
//! - Define the keybinding catalog used by input resolution and the footer.
//! - Apply user overrides from the settings file.
//!
//! Non-responsibilities:
//! - Mutating application state directly (handled by App via Actions).
//!
//! Invariants:
//! - Input resolution returns Actions only and never mutates App state.

pub mod help;
pub mod keymap;
