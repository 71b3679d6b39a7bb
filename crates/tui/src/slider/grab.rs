//! Pointer interaction state.
//!
//! Invariants:
//! - In `Idle` the thumb position is derived from the value.
//! - In `Grabbed` the stored percent is authoritative and the value is derived from it.

/// An active drag session.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Grab {
    /// Pointer column when the grab started.
    pub anchor_x: u16,
    /// Thumb position when the grab started.
    pub anchor_percent: f64,
    /// Current thumb position, already clamped.
    pub percent: f64,
}

impl Grab {
    pub fn new(anchor_x: u16, percent: f64) -> Self {
        Self {
            anchor_x,
            anchor_percent: percent,
            percent,
        }
    }

    /// Unclamped thumb position for pointer column `x` on a track `track_width` cells wide.
    ///
    /// Returns `None` for a zero-width track.
    pub fn percent_at(&self, x: u16, track_width: u16) -> Option<f64> {
        if track_width == 0 {
            return None;
        }
        let moved = f64::from(x) - f64::from(self.anchor_x);
        Some(self.anchor_percent + moved * 100.0 / f64::from(track_width))
    }
}

/// Two-state pointer machine.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum GrabState {
    #[default]
    Idle,
    Grabbed(Grab),
}

impl GrabState {
    pub fn is_grabbed(&self) -> bool {
        matches!(self, Self::Grabbed(_))
    }
}
