//! Application state and action handling.
//!
//! The module is organized into submodules:
//! - `demo`: The demo screens and their reactions to slider changes
//! - `mouse`: Mouse routing to sliders
//! - `render`: Layout and rendering

mod demo;
mod mouse;
mod render;

pub use demo::{Demo, Panel};
pub use render::{FOOTER_HEIGHT, HEADER_HEIGHT};

use crossterm::event::KeyEvent;
use ratatui::layout::Rect;
use ratatui::style::Color;
use slider_config::{ColorTheme, Theme};

use crate::action::Action;
use crate::capture::MouseRouter;
use crate::focus::FocusManager;
use crate::input::keymap::Keymap;
use crate::slider::{Slider, SliderChanged, SliderError};

/// Main application state.
#[derive(Debug)]
pub struct App {
    demo: Demo,
    panels: Vec<Panel>,
    focus: FocusManager,
    router: MouseRouter,
    keymap: Keymap,
    color_theme: ColorTheme,
    theme: Theme,
    title: String,
    background: Option<Color>,
    mouse_enabled: bool,
    should_quit: bool,
    /// Last rendered frame area.
    pub last_area: Rect,
}

impl App {
    /// Create the app for `demo`.
    ///
    /// # Errors
    ///
    /// Returns a [`SliderError`] if a demo slider cannot be built.
    pub fn new(demo: Demo, color_theme: ColorTheme, keymap: Keymap) -> Result<Self, SliderError> {
        let theme = Theme::from_color_theme(color_theme);
        let panels = demo.panels(&theme)?;

        let mut app = Self {
            demo,
            focus: FocusManager::new(panels.len()),
            title: demo.title(&panels),
            background: demo.background(&panels),
            panels,
            router: MouseRouter::default(),
            keymap,
            color_theme,
            theme,
            mouse_enabled: true,
            should_quit: false,
            last_area: Rect::default(),
        };
        app.sync_focus();
        Ok(app)
    }

    /// Enable or disable mouse handling (`--no-mouse`).
    pub fn with_mouse(mut self, enabled: bool) -> Self {
        self.mouse_enabled = enabled;
        self
    }

    pub fn demo(&self) -> Demo {
        self.demo
    }

    pub fn panels(&self) -> &[Panel] {
        &self.panels
    }

    pub fn slider(&self, index: usize) -> Option<&Slider> {
        self.panels.get(index).map(|panel| &panel.slider)
    }

    pub fn slider_mut(&mut self, index: usize) -> Option<&mut Slider> {
        self.panels.get_mut(index).map(|panel| &mut panel.slider)
    }

    pub fn focused(&self) -> Option<usize> {
        self.focus.current()
    }

    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    pub fn color_theme(&self) -> ColorTheme {
        self.color_theme
    }

    pub fn keymap(&self) -> &Keymap {
        &self.keymap
    }

    pub fn router(&self) -> &MouseRouter {
        &self.router
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    /// Background color set by the demo, if any.
    pub fn background(&self) -> Option<Color> {
        self.background
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Resolve a key press into an action.
    pub fn handle_input(&self, key: KeyEvent) -> Option<Action> {
        self.keymap.resolve(key)
    }

    /// Apply an action, then deliver any slider notifications it produced.
    pub fn update(&mut self, action: Action) {
        match action {
            Action::Quit => {
                self.router
                    .cancel(self.panels.iter_mut().map(|panel| &mut panel.slider));
                self.should_quit = true;
            }
            Action::Resize(width, height) => {
                tracing::debug!(width, height, "terminal resized");
            }
            Action::FocusLost => {
                self.router
                    .cancel(self.panels.iter_mut().map(|panel| &mut panel.slider));
            }
            Action::Input(key) => {
                if let Some(action) = self.handle_input(key) {
                    self.update(action);
                }
            }
            Action::Mouse(mouse) => self.handle_mouse(mouse),
            Action::SlideLeft => {
                if let Some(slider) = self.focused_slider_mut() {
                    slider.slide_left();
                }
            }
            Action::SlideRight => {
                if let Some(slider) = self.focused_slider_mut() {
                    slider.slide_right();
                }
            }
            Action::FocusNext => {
                self.focus.next();
                self.sync_focus();
            }
            Action::FocusPrevious => {
                self.focus.prev();
                self.sync_focus();
            }
            Action::CycleTheme => self.set_color_theme(self.color_theme.cycle_next()),
            Action::SliderChanged(changed) => self.on_slider_changed(changed),
        }

        self.deliver_notifications();
    }

    pub fn set_color_theme(&mut self, color_theme: ColorTheme) {
        tracing::info!(theme = %color_theme, "theme changed");
        self.color_theme = color_theme;
        self.theme = Theme::from_color_theme(color_theme);
        self.demo.restyle(&mut self.panels, &self.theme);
    }

    /// Focus the panel at `index`.
    pub fn set_focus(&mut self, index: usize) -> bool {
        let changed = self.focus.set_focus(index);
        self.sync_focus();
        changed
    }

    fn focused_slider_mut(&mut self) -> Option<&mut Slider> {
        let index = self.focus.current()?;
        self.slider_mut(index)
    }

    fn sync_focus(&mut self) {
        for (index, panel) in self.panels.iter_mut().enumerate() {
            panel.slider.set_focused(self.focus.is_focused(index));
        }
    }

    /// Drain every slider's queued notifications into the demo.
    fn deliver_notifications(&mut self) {
        let pending: Vec<SliderChanged> = self
            .panels
            .iter_mut()
            .flat_map(|panel| panel.slider.drain_messages())
            .collect();
        for changed in pending {
            self.on_slider_changed(changed);
        }
    }

    fn on_slider_changed(&mut self, changed: SliderChanged) {
        let Some(panel) = self
            .panels
            .iter_mut()
            .find(|panel| panel.slider.id() == changed.slider)
        else {
            tracing::debug!(slider = %changed.slider, "notification from unknown slider");
            return;
        };

        // The slider is authoritative; the message may be stale by now.
        if let Some(readout) = panel.readout.as_mut() {
            *readout = panel.slider.value().to_string();
        }
        self.title = self.demo.title(&self.panels);
        self.background = self.demo.background(&self.panels);
    }
}
