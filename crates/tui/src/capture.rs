//! Pointer capture.
//!
//! While a slider is grabbed it owns the pointer: every subsequent mouse event
//! goes to it, even when the pointer leaves its area, until it releases.

use crossterm::event::MouseEvent;

use crate::slider::{Slider, SliderId};

/// Host-side registry of which slider currently owns the pointer.
pub trait PointerCapture {
    /// Route all pointer events to `owner` until it releases.
    fn capture(&mut self, owner: SliderId);

    /// Stop routing to `owner`. Ignored if `owner` does not hold the capture.
    fn release(&mut self, owner: SliderId);

    fn captured(&self) -> Option<SliderId>;
}

/// Default [`PointerCapture`] used by the demo app.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct MouseRouter {
    owner: Option<SliderId>,
}

impl PointerCapture for MouseRouter {
    fn capture(&mut self, owner: SliderId) {
        if let Some(previous) = self.owner
            && previous != owner
        {
            tracing::warn!(%previous, %owner, "pointer capture taken over");
        }
        self.owner = Some(owner);
    }

    fn release(&mut self, owner: SliderId) {
        if self.owner == Some(owner) {
            self.owner = None;
        }
    }

    fn captured(&self) -> Option<SliderId> {
        self.owner
    }
}

impl MouseRouter {
    /// Deliver `event` to the capturing slider, or else to the first slider
    /// that consumes it. Returns the slider that handled it.
    pub fn dispatch<'a, I>(&mut self, sliders: I, event: MouseEvent) -> Option<SliderId>
    where
        I: IntoIterator<Item = &'a mut Slider>,
    {
        let mut sliders = sliders.into_iter();
        if let Some(owner) = self.owner {
            let Some(slider) = sliders.find(|s| s.id() == owner) else {
                // The owner went away without releasing.
                self.owner = None;
                return None;
            };
            slider.handle_mouse(event, self);
            return Some(owner);
        }

        sliders.find_map(|slider| slider.handle_mouse(event, self).then(|| slider.id()))
    }

    /// End any grab in progress, e.g. when the terminal loses focus.
    pub fn cancel<'a, I>(&mut self, sliders: I)
    where
        I: IntoIterator<Item = &'a mut Slider>,
    {
        if let Some(owner) = self.owner
            && let Some(slider) = sliders.into_iter().find(|s| s.id() == owner)
        {
            slider.cancel_grab(self);
        }
        self.owner = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyModifiers, MouseButton, MouseEventKind};
    use ratatui::layout::Rect;

    fn mouse(kind: MouseEventKind, column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    fn stacked_sliders() -> Vec<Slider> {
        (0..2)
            .map(|i| {
                let mut slider = Slider::builder(0, 9).step(3).build().unwrap();
                slider.set_area(Rect::new(0, i * 3, 18, 3));
                slider
            })
            .collect()
    }

    #[test]
    fn test_release_by_non_owner_is_ignored() {
        let a = Slider::new(0, 1).unwrap();
        let b = Slider::new(0, 1).unwrap();
        let mut router = MouseRouter::default();

        router.capture(a.id());
        router.release(b.id());
        assert_eq!(router.captured(), Some(a.id()));
        router.release(a.id());
        assert_eq!(router.captured(), None);
    }

    #[test]
    fn test_dispatch_hits_slider_under_pointer() {
        let mut sliders = stacked_sliders();
        let mut router = MouseRouter::default();

        let hit = router.dispatch(&mut sliders, mouse(MouseEventKind::Down(MouseButton::Left), 13, 4));
        assert_eq!(hit, Some(sliders[1].id()));
        assert_eq!(router.captured(), Some(sliders[1].id()));
        assert_eq!(sliders[1].value(), 9);
        assert_eq!(sliders[0].value(), 0);
    }

    #[test]
    fn test_captured_slider_keeps_events_outside_its_area() {
        let mut sliders = stacked_sliders();
        let mut router = MouseRouter::default();

        router.dispatch(&mut sliders, mouse(MouseEventKind::Down(MouseButton::Left), 4, 1));
        // Dragging across the second slider still drives the first.
        let hit = router.dispatch(&mut sliders, mouse(MouseEventKind::Drag(MouseButton::Left), 10, 4));
        assert_eq!(hit, Some(sliders[0].id()));
        assert_eq!(sliders[0].value(), 6);
        assert_eq!(sliders[1].value(), 0);

        router.dispatch(&mut sliders, mouse(MouseEventKind::Up(MouseButton::Left), 60, 20));
        assert_eq!(router.captured(), None);
        assert!(!sliders[0].is_grabbed());
    }

    #[test]
    fn test_cancel_ends_grab() {
        let mut sliders = stacked_sliders();
        let mut router = MouseRouter::default();

        router.dispatch(&mut sliders, mouse(MouseEventKind::Down(MouseButton::Left), 4, 1));
        router.cancel(&mut sliders);
        assert!(!sliders[0].is_grabbed());
        assert_eq!(router.captured(), None);
    }

    #[test]
    fn test_motion_without_button_ends_lost_grab() {
        let mut sliders = stacked_sliders();
        let mut router = MouseRouter::default();

        router.dispatch(&mut sliders, mouse(MouseEventKind::Down(MouseButton::Left), 4, 1));
        // The release never arrived; the pointer is now hovering.
        router.dispatch(&mut sliders, mouse(MouseEventKind::Moved, 13, 1));
        assert_eq!(sliders[0].value(), 0);
        assert!(!sliders[0].is_grabbed());
        assert_eq!(router.captured(), None);

        let hit = router.dispatch(&mut sliders, mouse(MouseEventKind::Down(MouseButton::Left), 7, 1));
        assert_eq!(hit, Some(sliders[0].id()));
        assert_eq!(sliders[0].value(), 3);
    }

    #[test]
    fn test_hover_without_grab_is_ignored() {
        let mut sliders = stacked_sliders();
        let mut router = MouseRouter::default();

        let hit = router.dispatch(&mut sliders, mouse(MouseEventKind::Moved, 13, 1));
        assert_eq!(hit, None);
        assert_eq!(sliders[0].value(), 0);
    }
}
