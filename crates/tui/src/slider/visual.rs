//! Track-and-thumb rendering.
//!
//! Responsibilities:
//! - Describe the slider's visual state as a [`TrackVisual`] (a scrollbar with a
//!   100-unit virtual size, a thumb window and an offset).
//! - Map that description onto terminal cells, shared by rendering and hit-testing.
//! - Draw the bordered, padded slider chrome.
//!
//! Does NOT handle:
//! - Layout; the host decides where each slider goes.

use std::ops::Range;

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::{Block, BorderType, Padding, Widget},
};
use slider_config::Theme;

use super::Slider;
use super::bounds::VIRTUAL_SIZE;

/// Horizontal padding between the border and the track, in cells.
pub const TRACK_PADDING: u16 = 2;

const THUMB_SYMBOL: &str = "█";
const TRACK_SYMBOL: &str = " ";

/// Styles for the slider parts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SliderStyle {
    pub track: Style,
    pub thumb: Style,
    pub border: Style,
    pub border_focused: Style,
    pub disabled: Style,
}

impl SliderStyle {
    pub fn from_theme(theme: &Theme) -> Self {
        Self {
            track: Style::default().bg(theme.track),
            thumb: Style::default().fg(theme.thumb).bg(theme.track),
            border: Style::default().fg(theme.border),
            border_focused: Style::default()
                .fg(theme.border_focused)
                .add_modifier(Modifier::BOLD),
            disabled: Style::default().fg(theme.disabled),
        }
    }

    /// Replace the thumb color, keeping the track background.
    pub fn thumb_color(mut self, color: Color) -> Self {
        self.thumb = self.thumb.fg(color);
        self
    }
}

impl Default for SliderStyle {
    fn default() -> Self {
        Self::from_theme(&Theme::default())
    }
}

/// Renderable description of a horizontal track with a thumb.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrackVisual {
    /// Thumb size in percent of the track.
    pub thumb_percent: u16,
    /// Thumb offset in percent, `0..=100 - thumb_percent` in practice.
    pub position: f64,
    pub track_style: Style,
    pub thumb_style: Style,
}

impl TrackVisual {
    /// Cells covered by the thumb on a track `width` cells wide, relative to the
    /// start of the track. `None` when there is no room to draw.
    pub fn thumb_span(&self, width: u16) -> Option<Range<u16>> {
        if width == 0 {
            return None;
        }
        let size = f64::from(width);
        let window = f64::from(self.thumb_percent).min(VIRTUAL_SIZE);
        let thumb_cells = (window / VIRTUAL_SIZE * size).max(1.0).round().min(size);

        let travel = VIRTUAL_SIZE - window;
        let ratio = if travel > 0.0 {
            (self.position / travel).clamp(0.0, 1.0)
        } else {
            0.0
        };
        let start = ((size - thumb_cells) * ratio).round();

        Some(start as u16..(start + thumb_cells) as u16)
    }
}

impl Widget for TrackVisual {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let Some(thumb) = self.thumb_span(area.width) else {
            return;
        };

        for y in area.top()..area.bottom() {
            for offset in 0..area.width {
                let (symbol, style) = if thumb.contains(&offset) {
                    (THUMB_SYMBOL, self.thumb_style)
                } else {
                    (TRACK_SYMBOL, self.track_style)
                };
                buf[(area.x + offset, y)]
                    .set_symbol(symbol)
                    .set_style(style);
            }
        }
    }
}

impl Slider {
    /// Border and padding around the track.
    pub(crate) fn chrome(&self) -> Block<'static> {
        let border_style = if self.is_disabled() {
            self.style().disabled
        } else if self.is_focused() {
            self.style().border_focused
        } else {
            self.style().border
        };

        Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(border_style)
            .padding(Padding::horizontal(TRACK_PADDING))
    }

    /// Inner track rectangle for the slider laid out at `area`.
    pub fn track_area_for(&self, area: Rect) -> Rect {
        self.chrome().inner(area)
    }
}

impl Widget for &Slider {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = self.chrome();
        let track = block.inner(area);
        block.render(area, buf);

        let mut visual = self.visual();
        if self.is_disabled() {
            visual.thumb_style = self.style().disabled;
            visual.track_style = self.style().disabled;
        }
        visual.render(track, buf);
    }
}
