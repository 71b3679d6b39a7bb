//! slider-demo - interactive demos for the terminal slider widget.
//!
//! Responsibilities:
//! - Orchestrate application startup and shutdown.
//! - Initialize terminal, logging, and async runtime.
//! - Run the main event loop.
//!
//! Does NOT handle:
//! - Slider behavior (see `slider_tui::slider`).
//! - Settings file format (see `slider_config`).
//!
//! Invariants:
//! - The TUI enters raw mode and alternate screen on startup.
//! - Configuration precedence: CLI args > env vars > settings file > defaults.
//! - Mouse capture is enabled by default unless `--no-mouse` is specified.

use anyhow::{Context, Result};
use clap::Parser;
use ratatui::{Terminal, backend::CrosstermBackend};
use slider_config::constants::{DEFAULT_CHANNEL_CAPACITY, DEFAULT_LOG_FILE_NAME};
use slider_tui::action::Action;
use slider_tui::app::App;
use slider_tui::cli::Cli;
use slider_tui::runtime::{config::load_settings, input::forward_events, terminal::TerminalGuard};
use tokio::sync::mpsc::channel;
use tracing_appender::non_blocking;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    std::fs::create_dir_all(&cli.log_dir)
        .with_context(|| format!("Failed to create log directory {}", cli.log_dir.display()))?;

    let file_appender = tracing_appender::rolling::daily(&cli.log_dir, DEFAULT_LOG_FILE_NAME);
    let (non_blocking, _guard) = non_blocking(file_appender);
    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env())
        .with(fmt::layer().with_writer(non_blocking))
        .init();

    // Note: _guard must live for entire main() duration to ensure logs are flushed

    let runtime_settings = load_settings(&cli)?;
    let mut app = App::new(cli.demo, runtime_settings.settings.theme, runtime_settings.keymap)
        .context("Failed to build demo sliders")?
        .with_mouse(!cli.no_mouse);
    tracing::info!(demo = ?cli.demo, "starting slider demo");

    let _terminal_guard = TerminalGuard::enter(!cli.no_mouse)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(std::io::stdout()))?;

    let (tx, mut rx) = channel::<Action>(DEFAULT_CHANNEL_CAPACITY);
    let input_task = tokio::spawn(forward_events(tx));

    while !app.should_quit() {
        terminal.draw(|f| app.render(f))?;

        let Some(action) = rx.recv().await else {
            tracing::warn!("Input channel closed");
            break;
        };
        if !action.is_pointer_motion() {
            tracing::debug!(?action, "Handling action");
        }
        app.update(action);

        // Drain whatever queued up while drawing, then redraw once.
        while let Ok(action) = rx.try_recv() {
            app.update(action);
            if app.should_quit() {
                break;
            }
        }
    }

    input_task.abort();
    terminal.show_cursor()?;
    tracing::info!("slider demo exited");

    Ok(())
}
