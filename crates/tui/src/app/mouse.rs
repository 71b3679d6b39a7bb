//! Mouse event handling for the app.
//!
//! Responsibilities:
//! - Route pointer events through the `MouseRouter` to the sliders.
//! - Move keyboard focus to a slider when it is pressed.
//!
//! Does NOT handle:
//! - Keyboard input
//! - Hit-testing inside a slider (the slider does that itself)

use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};

use crate::app::App;

impl App {
    /// Handle a mouse event. Slider notifications are delivered before returning.
    pub fn handle_mouse(&mut self, mouse: MouseEvent) {
        if !self.mouse_enabled {
            return;
        }

        let handled = self
            .router
            .dispatch(self.panels.iter_mut().map(|panel| &mut panel.slider), mouse);

        if let Some(id) = handled
            && matches!(mouse.kind, MouseEventKind::Down(MouseButton::Left))
            && let Some(index) = self.panels.iter().position(|panel| panel.slider.id() == id)
        {
            self.set_focus(index);
        }

        self.deliver_notifications();
    }
}
