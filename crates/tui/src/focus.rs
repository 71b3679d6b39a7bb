//! Focus management for the sliders on screen.
//!
//! Provides a `FocusManager` tracking which slider receives keyboard input,
//! with wrap-around Tab / Shift+Tab navigation.

/// Tracks the focused slider by its index in display order.
#[derive(Debug, Clone, Default)]
pub struct FocusManager {
    /// Number of focusable components.
    len: usize,
    /// Index of the focused component.
    current: usize,
}

impl FocusManager {
    /// Create a focus manager over `len` components, focusing the first.
    pub fn new(len: usize) -> Self {
        Self { len, current: 0 }
    }

    /// Move focus to the next component.
    pub fn next(&mut self) {
        if self.len == 0 {
            return;
        }
        self.current = (self.current + 1) % self.len;
    }

    /// Move focus to the previous component.
    pub fn prev(&mut self) {
        if self.len == 0 {
            return;
        }
        self.current = if self.current == 0 {
            self.len - 1
        } else {
            self.current - 1
        };
    }

    /// Index of the focused component, if any.
    pub fn current(&self) -> Option<usize> {
        (self.current < self.len).then_some(self.current)
    }

    pub fn is_focused(&self, index: usize) -> bool {
        self.current() == Some(index)
    }

    /// Focus the component at `index`. Returns `false` if it does not exist.
    pub fn set_focus(&mut self, index: usize) -> bool {
        if index < self.len {
            self.current = index;
            true
        } else {
            false
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}
