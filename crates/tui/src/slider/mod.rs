//! Horizontal slider widget.
//!
//! Responsibilities:
//! - Hold an integer value constrained to `[min, max]` on a step grid.
//! - Track pointer grabs and translate pointer motion into values.
//! - Queue a [`SliderChanged`] notification whenever a value is accepted.
//!
//! Does NOT handle:
//! - Routing input between sliders (see [`crate::capture`] and [`crate::app`]).
//! - Layout; hosts call [`Slider::set_area`] before or while rendering.
//!
//! Invariants:
//! - `value` always equals `bounds.quantize(value)`.
//! - The slider holds pointer capture exactly while it is grabbed.

mod bounds;
mod error;
mod grab;
mod message;
mod visual;

pub use bounds::{SliderBounds, VIRTUAL_SIZE};
pub use error::SliderError;
pub use grab::{Grab, GrabState};
pub use message::{SliderChanged, SliderId};
pub use visual::{SliderStyle, TRACK_PADDING, TrackVisual};

use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::{Position, Rect};

use crate::capture::PointerCapture;

/// Default height of a slider: one track row between two border rows.
pub const SLIDER_HEIGHT: u16 = 3;

/// Default width of a slider, in cells.
pub const SLIDER_WIDTH: u16 = 32;

/// A draggable slider over an integer range.
#[derive(Debug)]
pub struct Slider {
    id: SliderId,
    name: Option<String>,
    bounds: SliderBounds,
    value: i64,
    grab: GrabState,
    style: SliderStyle,
    focused: bool,
    disabled: bool,
    area: Rect,
    outbox: Vec<SliderChanged>,
}

/// Builder for [`Slider`]; created by [`Slider::builder`].
#[derive(Debug, Clone)]
#[must_use]
pub struct SliderBuilder {
    min: i64,
    max: i64,
    step: i64,
    value: Option<i64>,
    name: Option<String>,
    disabled: bool,
    style: SliderStyle,
}

impl SliderBuilder {
    /// Distance between two adjacent values. Defaults to 1.
    pub fn step(mut self, step: i64) -> Self {
        self.step = step;
        self
    }

    /// Initial value. Defaults to `min`; clamped and snapped on build.
    pub fn value(mut self, value: i64) -> Self {
        self.value = Some(value);
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    pub fn style(mut self, style: SliderStyle) -> Self {
        self.style = style;
        self
    }

    /// Validate the range and create the slider.
    ///
    /// The initial value does not post a notification.
    ///
    /// # Errors
    ///
    /// Returns a [`SliderError`] when the range or step is unusable.
    pub fn build(self) -> Result<Slider, SliderError> {
        let bounds = SliderBounds::new(self.min, self.max, self.step)?;
        let value = bounds.quantize(self.value.unwrap_or(self.min));

        Ok(Slider {
            id: SliderId::next(),
            name: self.name,
            bounds,
            value,
            grab: GrabState::Idle,
            style: self.style,
            focused: false,
            disabled: self.disabled,
            area: Rect::default(),
            outbox: Vec::new(),
        })
    }
}

impl Slider {
    /// Start building a slider over `[min, max]`.
    pub fn builder(min: i64, max: i64) -> SliderBuilder {
        SliderBuilder {
            min,
            max,
            step: 1,
            value: None,
            name: None,
            disabled: false,
            style: SliderStyle::default(),
        }
    }

    /// Slider over `[min, max]` with step 1, starting at `min`.
    ///
    /// # Errors
    ///
    /// Returns [`SliderError::EmptyRange`] if `max <= min`.
    pub fn new(min: i64, max: i64) -> Result<Self, SliderError> {
        Self::builder(min, max).build()
    }

    pub fn id(&self) -> SliderId {
        self.id
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn value(&self) -> i64 {
        self.value
    }

    pub fn min(&self) -> i64 {
        self.bounds.min()
    }

    pub fn max(&self) -> i64 {
        self.bounds.max()
    }

    pub fn step(&self) -> i64 {
        self.bounds.step()
    }

    pub fn bounds(&self) -> SliderBounds {
        self.bounds
    }

    pub fn number_of_steps(&self) -> i64 {
        self.bounds.number_of_steps()
    }

    pub fn style(&self) -> &SliderStyle {
        &self.style
    }

    pub fn set_style(&mut self, style: SliderStyle) {
        self.style = style;
    }

    pub fn grab_state(&self) -> GrabState {
        self.grab
    }

    pub fn is_grabbed(&self) -> bool {
        self.grab.is_grabbed()
    }

    pub fn is_focused(&self) -> bool {
        self.focused
    }

    pub fn set_focused(&mut self, focused: bool) {
        self.focused = focused;
    }

    pub fn is_disabled(&self) -> bool {
        self.disabled
    }

    /// Enable or disable the slider. Disabling ends any grab in progress.
    pub fn set_disabled(&mut self, disabled: bool, capture: &mut dyn PointerCapture) {
        self.disabled = disabled;
        if disabled {
            self.cancel_grab(capture);
        }
    }

    /// Area the slider was last laid out at, used for hit-testing.
    pub fn area(&self) -> Rect {
        self.area
    }

    pub fn set_area(&mut self, area: Rect) {
        self.area = area;
    }

    /// Track rectangle inside the last laid-out area.
    pub fn track_area(&self) -> Rect {
        self.track_area_for(self.area)
    }

    /// Current thumb position in percent.
    ///
    /// While grabbed this is the pointer-driven position; otherwise it is
    /// derived from the value.
    pub fn position_percent(&self) -> f64 {
        match self.grab {
            GrabState::Grabbed(grab) => grab.percent,
            GrabState::Idle => self.bounds.percent_for_value(self.value),
        }
    }

    /// Snapshot of the track for rendering.
    pub fn visual(&self) -> TrackVisual {
        TrackVisual {
            thumb_percent: self.bounds.thumb_percent(),
            position: self.position_percent(),
            track_style: self.style.track,
            thumb_style: self.style.thumb,
        }
    }

    /// Assign a value. It is clamped into range and snapped to the step grid.
    ///
    /// Always posts a notification, even if the value is unchanged.
    pub fn set_value(&mut self, value: i64) {
        self.value = self.bounds.quantize(value);
        self.post();
    }

    /// Move by `delta`. Does nothing and returns `false` when the target lies
    /// outside `[min, max]` or the slider is disabled.
    pub fn nudge(&mut self, delta: i64) -> bool {
        if self.disabled {
            return false;
        }
        let Some(target) = self.value.checked_add(delta) else {
            return false;
        };
        if !self.bounds.contains(target) {
            return false;
        }
        self.set_value(target);
        true
    }

    /// Move one step towards `max`.
    pub fn slide_right(&mut self) -> bool {
        self.nudge(self.bounds.step())
    }

    /// Move one step towards `min`.
    pub fn slide_left(&mut self) -> bool {
        self.nudge(-self.bounds.step())
    }

    /// Take all queued notifications, oldest first.
    pub fn drain_messages(&mut self) -> Vec<SliderChanged> {
        std::mem::take(&mut self.outbox)
    }

    /// Whether the slider has queued notifications.
    pub fn has_messages(&self) -> bool {
        !self.outbox.is_empty()
    }

    fn post(&mut self) {
        tracing::debug!(slider = %self.id, value = self.value, "slider value changed");
        self.outbox.push(SliderChanged {
            slider: self.id,
            value: self.value,
        });
    }

    /// Derive the value from a thumb position; posts only when it changes.
    fn apply_percent(&mut self, percent: f64) -> bool {
        let value = self.bounds.value_for_percent(percent);
        if value == self.value {
            return false;
        }
        self.value = value;
        self.post();
        true
    }

    fn on_thumb(&self, x: u16) -> bool {
        let track = self.track_area();
        x >= track.x
            && self
                .visual()
                .thumb_span(track.width)
                .is_some_and(|span| span.contains(&(x - track.x)))
    }

    /// Primary button pressed at `(x, y)`.
    ///
    /// Inside the slider this captures the pointer and starts a grab. A press
    /// off the thumb first jumps the thumb to the pointer column.
    /// Returns whether the event was consumed.
    pub fn pointer_down(&mut self, x: u16, y: u16, capture: &mut dyn PointerCapture) -> bool {
        if self.disabled || self.grab.is_grabbed() {
            return false;
        }
        if !self.area.contains(Position::new(x, y)) {
            return false;
        }

        capture.capture(self.id);

        let track = self.track_area();
        let on_thumb = self.on_thumb(x);
        let mut percent = self.position_percent();
        if !on_thumb && track.width > 0 {
            let column = f64::from(x) - f64::from(track.x);
            percent = self
                .bounds
                .clamp_percent(column * VIRTUAL_SIZE / f64::from(track.width));
        }

        self.grab = GrabState::Grabbed(Grab::new(x, percent));
        tracing::debug!(slider = %self.id, x, percent, on_thumb, "slider grabbed");

        if !on_thumb {
            self.apply_percent(percent);
        }
        true
    }

    /// Pointer moved to column `x`. Only meaningful while grabbed.
    ///
    /// Returns whether the value changed.
    pub fn pointer_move(&mut self, x: u16) -> bool {
        let GrabState::Grabbed(grab) = self.grab else {
            return false;
        };
        let Some(raw) = grab.percent_at(x, self.track_area().width) else {
            return false;
        };
        let percent = self.bounds.clamp_percent(raw);
        self.grab = GrabState::Grabbed(Grab { percent, ..grab });
        self.apply_percent(percent)
    }

    /// Primary button released. Ends the grab and snaps the thumb to the value.
    pub fn pointer_up(&mut self, capture: &mut dyn PointerCapture) -> bool {
        if !self.grab.is_grabbed() {
            return false;
        }
        self.release(capture);
        tracing::debug!(slider = %self.id, value = self.value, "slider released");
        true
    }

    /// End a grab without a release event (focus lost, widget disabled).
    pub fn cancel_grab(&mut self, capture: &mut dyn PointerCapture) {
        if self.grab.is_grabbed() {
            self.release(capture);
            tracing::debug!(slider = %self.id, "slider grab cancelled");
        }
    }

    fn release(&mut self, capture: &mut dyn PointerCapture) {
        capture.release(self.id);
        self.grab = GrabState::Idle;
    }

    /// Dispatch a terminal mouse event. Returns whether it was consumed.
    pub fn handle_mouse(&mut self, event: MouseEvent, capture: &mut dyn PointerCapture) -> bool {
        match event.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                self.pointer_down(event.column, event.row, capture)
            }
            MouseEventKind::Drag(MouseButton::Left) => self.pointer_move(event.column),
            // Motion with no button held means the release was lost.
            MouseEventKind::Moved => self.pointer_up(capture),
            MouseEventKind::Up(MouseButton::Left) => self.pointer_up(capture),
            _ => false,
        }
    }
}
