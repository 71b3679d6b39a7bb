//! Centralized constants for the slider workspace.
//!
//! Default values shared across crates live here to avoid magic numbers.

// =============================================================================
// Settings
// =============================================================================

/// Application directory name used for the default settings location.
pub const APP_DIR_NAME: &str = "slider-demo";

/// File name of the settings file inside the application config directory.
pub const SETTINGS_FILE_NAME: &str = "config.json";

/// Environment variable overriding the color theme.
pub const ENV_THEME: &str = "SLIDER_DEMO_THEME";

// =============================================================================
// Runtime
// =============================================================================

/// Capacity of the bounded action channel between the input task and the app.
pub const DEFAULT_CHANNEL_CAPACITY: usize = 256;

/// Default log file name (rolled daily).
pub const DEFAULT_LOG_FILE_NAME: &str = "slider-demo.log";
