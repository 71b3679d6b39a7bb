//! Action protocol for the demo event loop.
//!
//! Actions represent raw terminal input forwarded by the input task, commands
//! resolved from keys, and notifications posted by sliders.
//!
//! # What This Module Does NOT Handle
//!
//! - Action handling logic (handled by `App::update`)
//! - Reading terminal events (handled by the runtime module)

use crossterm::event::{KeyEvent, MouseEvent};

use crate::slider::SliderChanged;

/// Unified event type flowing through the action channel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    // System
    /// Leave the application.
    Quit,
    /// Terminal resized to (columns, rows).
    Resize(u16, u16),
    /// Terminal lost focus; ends any grab in progress.
    FocusLost,

    // Raw input
    Input(KeyEvent),
    Mouse(MouseEvent),

    // Commands
    SlideLeft,
    SlideRight,
    FocusNext,
    FocusPrevious,
    CycleTheme,

    // Notifications
    /// A slider accepted a new value.
    SliderChanged(SliderChanged),
}

impl Action {
    /// Whether this action only carries high-frequency pointer motion.
    pub fn is_pointer_motion(&self) -> bool {
        matches!(
            self,
            Self::Mouse(MouseEvent {
                kind: crossterm::event::MouseEventKind::Moved
                    | crossterm::event::MouseEventKind::Drag(_),
                ..
            })
        )
    }
}
