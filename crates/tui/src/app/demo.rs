//! Demo screens.
//!
//! Each demo is a fixed set of captioned sliders plus the reaction to their
//! change notifications (value readouts, the RGB background).

use ratatui::style::Color;
use slider_config::Theme;

use crate::slider::{Slider, SliderError, SliderStyle};

/// Which demo screen to show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum Demo {
    /// Three sliders with coarse steps and value readouts.
    #[default]
    Steps,
    /// Red, green and blue sliders driving the background color.
    Rgb,
    /// Two amplifiers, one of which goes to eleven.
    SpinalTap,
}

/// A slider with its caption and value readout.
#[derive(Debug)]
pub struct Panel {
    pub caption: Option<&'static str>,
    pub slider: Slider,
    /// Last value reported by the slider, when the demo shows one.
    pub readout: Option<String>,
}

struct PanelDef {
    name: &'static str,
    caption: Option<&'static str>,
    min: i64,
    max: i64,
    step: i64,
    value: i64,
    thumb: Option<Color>,
    readout: bool,
}

impl PanelDef {
    const fn new(name: &'static str, min: i64, max: i64, step: i64, value: i64) -> Self {
        Self {
            name,
            caption: None,
            min,
            max,
            step,
            value,
            thumb: None,
            readout: true,
        }
    }

    const fn caption(mut self, caption: &'static str) -> Self {
        self.caption = Some(caption);
        self
    }

    const fn thumb(mut self, color: Color) -> Self {
        self.thumb = Some(color);
        self.readout = false;
        self
    }
}

impl Demo {
    fn defs(self) -> Vec<PanelDef> {
        match self {
            Self::Steps => vec![
                PanelDef::new("slider1", 0, 100, 25, 0).caption("0 to 100 slider with step of 25"),
                PanelDef::new("slider2", -20, 20, 4, 0).caption("-20 to 20 slider with step of 4"),
                PanelDef::new("slider3", 200, 500, 100, 200)
                    .caption("200 to 500 slider with step of 100"),
            ],
            Self::Rgb => vec![
                PanelDef::new("red", 0, 255, 1, 0).thumb(Color::Red),
                PanelDef::new("green", 0, 255, 1, 0).thumb(Color::Green),
                PanelDef::new("blue", 0, 255, 1, 0).thumb(Color::Blue),
            ],
            Self::SpinalTap => vec![
                PanelDef::new("normal-amp", 0, 10, 1, 5)
                    .caption("\"Why don't you just make ten louder?\""),
                PanelDef::new("tufnel-amp", 0, 11, 1, 5).caption("\"...These go to eleven\""),
            ],
        }
    }

    /// Build the panels for this demo, styled with `theme`.
    ///
    /// # Errors
    ///
    /// Returns a [`SliderError`] if a panel has an invalid range.
    pub fn panels(self, theme: &Theme) -> Result<Vec<Panel>, SliderError> {
        self.defs()
            .into_iter()
            .map(|def| {
                let slider = Slider::builder(def.min, def.max)
                    .step(def.step)
                    .value(def.value)
                    .name(def.name)
                    .style(panel_style(theme, def.thumb))
                    .build()?;
                let readout = def.readout.then(|| slider.value().to_string());
                Ok(Panel {
                    caption: def.caption,
                    slider,
                    readout,
                })
            })
            .collect()
    }

    /// Restyle panels after a theme change, keeping per-slider thumb colors.
    pub fn restyle(self, panels: &mut [Panel], theme: &Theme) {
        for (panel, def) in panels.iter_mut().zip(self.defs()) {
            panel.slider.set_style(panel_style(theme, def.thumb));
        }
    }

    /// Window title for the current slider values.
    pub fn title(self, panels: &[Panel]) -> String {
        match self {
            Self::Steps => "Slider steps".to_string(),
            Self::SpinalTap => "Spinal Tap".to_string(),
            Self::Rgb => {
                let [r, g, b] = rgb_channels(panels);
                format!("RGB {r} {g} {b}")
            }
        }
    }

    /// Screen background driven by the sliders, if this demo has one.
    pub fn background(self, panels: &[Panel]) -> Option<Color> {
        match self {
            Self::Rgb => {
                let [r, g, b] = rgb_channels(panels);
                Some(Color::Rgb(r, g, b))
            }
            Self::Steps | Self::SpinalTap => None,
        }
    }
}

fn panel_style(theme: &Theme, thumb: Option<Color>) -> SliderStyle {
    let style = SliderStyle::from_theme(theme);
    match thumb {
        Some(color) => style.thumb_color(color),
        None => style,
    }
}

fn rgb_channels(panels: &[Panel]) -> [u8; 3] {
    let mut channels = [0u8; 3];
    for (channel, panel) in channels.iter_mut().zip(panels) {
        *channel = u8::try_from(panel.slider.value()).unwrap_or(u8::MAX);
    }
    channels
}
