//! Runtime components for the demo binary.
//!
//! This module contains the runtime infrastructure:
//! - Settings loading with CLI overrides (config)
//! - Terminal event forwarding (input)
//! - Terminal cleanup (TerminalGuard)
//!
//! Does NOT handle:
//! - UI rendering or input handling (see `slider_tui::app`).
//!
//! Invariants:
//! - All modules are initialized during application startup in `main()`.

pub mod config;
pub mod input;
pub mod terminal;
