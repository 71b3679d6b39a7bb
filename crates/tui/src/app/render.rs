//! Rendering logic for the app.
//!
//! Responsibilities:
//! - Render the main layout (header, panels, footer)
//! - Record where each slider was drawn so pointer events can be hit-tested
//!
//! Non-responsibilities:
//! - Does NOT handle input

use ratatui::{
    Frame,
    layout::{Constraint, Flex, Layout, Rect},
    style::{Modifier, Style},
    widgets::{Block, Paragraph},
};

use crate::app::{App, Panel};
use crate::input::help::footer_hints;
use crate::slider::{SLIDER_HEIGHT, SLIDER_WIDTH};

pub const HEADER_HEIGHT: u16 = 1;
pub const FOOTER_HEIGHT: u16 = 1;

/// Blank rows between panels.
const PANEL_SPACING: u16 = 1;

/// Where the parts of one panel go.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct PanelSlot {
    caption: Option<Rect>,
    slider: Rect,
    readout: Option<Rect>,
}

fn panel_height(panel: &Panel) -> u16 {
    SLIDER_HEIGHT + u16::from(panel.caption.is_some()) + u16::from(panel.readout.is_some())
}

impl App {
    /// Lay out the panels for a frame of size `area` and record each slider's area.
    pub fn layout(&mut self, area: Rect) {
        self.panel_slots(area);
    }

    fn panel_slots(&mut self, area: Rect) -> Vec<PanelSlot> {
        let [_, body, _] = Layout::vertical([
            Constraint::Length(HEADER_HEIGHT),
            Constraint::Fill(1),
            Constraint::Length(FOOTER_HEIGHT),
        ])
        .areas(area);

        let rows = Layout::vertical(
            self.panels
                .iter()
                .map(|panel| Constraint::Length(panel_height(panel))),
        )
        .flex(Flex::Center)
        .spacing(PANEL_SPACING)
        .split(body);

        self.panels
            .iter_mut()
            .zip(rows.iter())
            .map(|(panel, &row)| {
                let caption = panel
                    .caption
                    .is_some()
                    .then(|| Rect::new(row.x, row.y, row.width, 1).intersection(row));
                let slider_y = row.y + u16::from(caption.is_some());
                let [slider] = Layout::horizontal([Constraint::Length(SLIDER_WIDTH)])
                    .flex(Flex::Center)
                    .areas(Rect::new(row.x, slider_y, row.width, SLIDER_HEIGHT));
                let slider = slider.intersection(row);
                let readout = panel.readout.is_some().then(|| {
                    Rect::new(row.x, slider_y + SLIDER_HEIGHT, row.width, 1).intersection(row)
                });

                panel.slider.set_area(slider);
                PanelSlot {
                    caption,
                    slider,
                    readout,
                }
            })
            .collect()
    }

    /// Render the application UI.
    pub fn render(&mut self, f: &mut Frame) {
        let area = f.area();
        self.last_area = area;
        let theme = self.theme;

        let background = self.background.unwrap_or(theme.background);
        f.render_widget(
            Block::default().style(Style::default().bg(background).fg(theme.text)),
            area,
        );

        let [header, _, footer] = Layout::vertical([
            Constraint::Length(HEADER_HEIGHT),
            Constraint::Fill(1),
            Constraint::Length(FOOTER_HEIGHT),
        ])
        .areas(area);

        f.render_widget(
            Paragraph::new(self.title.as_str())
                .centered()
                .style(Style::default().fg(theme.title).add_modifier(Modifier::BOLD)),
            header,
        );

        let slots = self.panel_slots(area);
        for (panel, slot) in self.panels.iter().zip(slots) {
            if let (Some(caption), Some(rect)) = (panel.caption, slot.caption) {
                f.render_widget(
                    Paragraph::new(caption)
                        .centered()
                        .style(Style::default().add_modifier(Modifier::BOLD)),
                    rect,
                );
            }
            f.render_widget(&panel.slider, slot.slider);
            if let (Some(readout), Some(rect)) = (panel.readout.as_deref(), slot.readout) {
                f.render_widget(Paragraph::new(readout).centered(), rect);
            }
        }

        f.render_widget(
            Paragraph::new(footer_hints(&self.keymap))
                .centered()
                .style(Style::default().fg(theme.text_dim)),
            footer,
        );
    }
}
