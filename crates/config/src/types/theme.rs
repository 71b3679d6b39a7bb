//! Theme types for the slider demo.
//!
//! Responsibilities:
//! - Define user-selectable color themes (`ColorTheme`).
//! - Define the expanded runtime `Theme` used to style sliders and labels.
//!
//! Does NOT handle:
//! - Actual rendering (see the TUI crate).
//!
//! Invariants:
//! - `ColorTheme` is the persisted representation; `Theme` is the runtime representation.
//! - `Theme` is NOT serializable; always persist `ColorTheme`.

use ratatui::style::Color;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// User-selectable color theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ColorTheme {
    #[default]
    Default,
    Light,
    Dark,
    HighContrast,
    Monochrome,
}

impl ColorTheme {
    /// All themes, in cycle order.
    pub const ALL: [ColorTheme; 5] = [
        Self::Default,
        Self::Light,
        Self::Dark,
        Self::HighContrast,
        Self::Monochrome,
    ];

    /// Human-readable display name for UI surfaces.
    pub fn display_name(self) -> &'static str {
        match self {
            Self::Default => "Default",
            Self::Light => "Light",
            Self::Dark => "Dark",
            Self::HighContrast => "High Contrast",
            Self::Monochrome => "Monochrome",
        }
    }

    /// Config-file spelling of the theme (`snake_case`).
    pub fn key(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Light => "light",
            Self::Dark => "dark",
            Self::HighContrast => "high_contrast",
            Self::Monochrome => "monochrome",
        }
    }

    /// Next theme in the cycle.
    pub fn cycle_next(self) -> Self {
        match self {
            Self::Default => Self::Light,
            Self::Light => Self::Dark,
            Self::Dark => Self::HighContrast,
            Self::HighContrast => Self::Monochrome,
            Self::Monochrome => Self::Default,
        }
    }
}

impl fmt::Display for ColorTheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Error returned when a theme name is not recognized.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown theme '{0}' (expected one of: default, light, dark, high_contrast, monochrome)")]
pub struct UnknownThemeError(pub String);

impl FromStr for ColorTheme {
    type Err = UnknownThemeError;

    /// Accepts the config spelling, with `-` and `_` treated alike.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace('-', "_");
        Self::ALL
            .into_iter()
            .find(|theme| theme.key() == normalized)
            .ok_or_else(|| UnknownThemeError(s.to_string()))
    }
}

/// Expanded runtime theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    // Global / chrome
    pub background: Color,
    pub text: Color,
    pub text_dim: Color,
    pub title: Color,

    // Slider chrome
    pub border: Color,
    pub border_focused: Color,
    pub track: Color,
    pub thumb: Color,
    pub disabled: Color,
}

impl Theme {
    /// Expand a persisted `ColorTheme` into a full runtime palette.
    pub fn from_color_theme(theme: ColorTheme) -> Self {
        match theme {
            ColorTheme::Default => Self {
                background: Color::Reset,
                text: Color::White,
                text_dim: Color::Gray,
                title: Color::Cyan,
                border: Color::DarkGray,
                border_focused: Color::Yellow,
                track: Color::Indexed(236),
                thumb: Color::Cyan,
                disabled: Color::DarkGray,
            },
            ColorTheme::Light => Self {
                background: Color::White,
                text: Color::Black,
                text_dim: Color::Gray,
                title: Color::Blue,
                border: Color::Gray,
                border_focused: Color::Magenta,
                track: Color::Indexed(253),
                thumb: Color::Blue,
                disabled: Color::Gray,
            },
            ColorTheme::Dark => Self {
                background: Color::Black,
                text: Color::White,
                text_dim: Color::Gray,
                title: Color::Indexed(110),
                border: Color::Indexed(238),
                border_focused: Color::Indexed(214),
                track: Color::Indexed(235),
                thumb: Color::Indexed(110),
                disabled: Color::Indexed(240),
            },
            ColorTheme::HighContrast => Self {
                background: Color::Black,
                text: Color::White,
                text_dim: Color::White,
                title: Color::White,
                border: Color::White,
                border_focused: Color::Yellow,
                track: Color::Blue,
                thumb: Color::Yellow,
                disabled: Color::Gray,
            },
            ColorTheme::Monochrome => Self {
                background: Color::Black,
                text: Color::White,
                text_dim: Color::Indexed(245),
                title: Color::White,
                border: Color::Indexed(240),
                border_focused: Color::Indexed(255),
                track: Color::Indexed(236),
                thumb: Color::Indexed(250),
                disabled: Color::Indexed(238),
            },
        }
    }
}

impl From<ColorTheme> for Theme {
    fn from(value: ColorTheme) -> Self {
        Self::from_color_theme(value)
    }
}

impl Default for Theme {
    fn default() -> Self {
        ColorTheme::Default.into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_theme_cycle_visits_every_theme() {
        let mut theme = ColorTheme::Default;
        let mut seen = Vec::new();
        for _ in 0..ColorTheme::ALL.len() {
            seen.push(theme);
            theme = theme.cycle_next();
        }
        assert_eq!(theme, ColorTheme::Default);
        assert_eq!(seen, ColorTheme::ALL.to_vec());
    }

    #[test]
    fn test_color_theme_from_str() {
        assert_eq!("dark".parse::<ColorTheme>(), Ok(ColorTheme::Dark));
        assert_eq!(
            "High-Contrast".parse::<ColorTheme>(),
            Ok(ColorTheme::HighContrast)
        );
        assert_eq!(
            " monochrome ".parse::<ColorTheme>(),
            Ok(ColorTheme::Monochrome)
        );
        assert!("solarized".parse::<ColorTheme>().is_err());
    }

    #[test]
    fn test_color_theme_serde_matches_key() {
        for theme in ColorTheme::ALL {
            let json = serde_json::to_string(&theme).unwrap();
            assert_eq!(json, format!("\"{}\"", theme.key()));
        }
    }

    #[test]
    fn test_focused_border_differs_from_border() {
        for theme in ColorTheme::ALL {
            let expanded = Theme::from(theme);
            assert_ne!(expanded.border, expanded.border_focused, "{theme}");
        }
    }

    #[test]
    fn test_default_theme_is_default_color_theme() {
        assert_eq!(Theme::default(), Theme::from(ColorTheme::Default));
    }
}
