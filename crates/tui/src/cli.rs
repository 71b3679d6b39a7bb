//! Command-line argument parsing for slider-demo.
//!
//! Responsibilities:
//! - Define CLI argument structure using clap derive macros.
//!
//! Does NOT handle:
//! - Settings file loading or environment overrides (see `runtime::config`).
//! - Terminal state management (see `runtime::terminal`).
//!
//! Invariants:
//! - CLI arguments are parsed once at startup via `Cli::parse()`.

use std::path::PathBuf;

use clap::Parser;
use slider_config::ColorTheme;

use crate::app::Demo;

/// Command-line arguments for slider-demo.
///
/// Configuration precedence (highest to lowest):
/// 1. CLI arguments (e.g., --theme)
/// 2. Environment variables (SLIDER_DEMO_THEME)
/// 3. Settings file (config.json)
/// 4. Default values
#[derive(Debug, Parser)]
#[command(
    name = "slider-demo",
    about = "Interactive demos for the terminal slider widget",
    version,
    after_help = "Examples:\n  slider-demo\n  slider-demo --demo rgb\n  slider-demo --demo spinal-tap --theme dark\n  slider-demo --config-path ./config.json --no-mouse\n"
)]
pub struct Cli {
    /// Demo screen to show
    #[arg(long, short = 'd', value_enum, default_value_t = Demo::Steps)]
    pub demo: Demo,

    /// Color theme (default, light, dark, high-contrast, monochrome)
    #[arg(long, short = 't')]
    pub theme: Option<ColorTheme>,

    /// Path to a custom settings file
    #[arg(long)]
    pub config_path: Option<PathBuf>,

    /// Directory for log files
    #[arg(long, default_value = "logs")]
    pub log_dir: PathBuf,

    /// Disable mouse support
    #[arg(long)]
    pub no_mouse: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_defaults() {
        let cli = Cli::parse_from(["slider-demo"]);
        assert_eq!(cli.demo, Demo::Steps);
        assert_eq!(cli.theme, None);
        assert_eq!(cli.config_path, None);
        assert_eq!(cli.log_dir, PathBuf::from("logs"));
        assert!(!cli.no_mouse);
    }

    #[test]
    fn test_cli_demo_flag() {
        let cli = Cli::parse_from(["slider-demo", "--demo", "spinal-tap"]);
        assert_eq!(cli.demo, Demo::SpinalTap);

        let cli = Cli::parse_from(["slider-demo", "-d", "rgb"]);
        assert_eq!(cli.demo, Demo::Rgb);
    }

    #[test]
    fn test_cli_theme_flag() {
        let cli = Cli::parse_from(["slider-demo", "--theme", "high-contrast"]);
        assert_eq!(cli.theme, Some(ColorTheme::HighContrast));
    }

    #[test]
    fn test_cli_rejects_unknown_theme() {
        assert!(Cli::try_parse_from(["slider-demo", "--theme", "neon"]).is_err());
    }

    #[test]
    fn test_cli_no_mouse_flag() {
        let cli = Cli::parse_from(["slider-demo", "--no-mouse"]);
        assert!(cli.no_mouse);
    }

    #[test]
    fn test_cli_config_path_flag() {
        let cli = Cli::parse_from(["slider-demo", "--config-path", "/tmp/slider.json"]);
        assert_eq!(cli.config_path, Some(PathBuf::from("/tmp/slider.json")));
    }
}
