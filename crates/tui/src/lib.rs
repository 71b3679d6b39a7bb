//! Slider TUI Library
//!
//! A horizontal slider widget for ratatui, plus the host application used by
//! the `slider-demo` binary.
//!
//! # Example
//!
//! ```rust
//! use slider_tui::capture::MouseRouter;
//! use slider_tui::slider::Slider;
//! use ratatui::layout::Rect;
//!
//! let mut router = MouseRouter::default();
//! let mut slider = Slider::builder(0, 9).step(3).build().unwrap();
//! slider.set_area(Rect::new(0, 0, 18, 3));
//!
//! // Clicking near the right end of the track jumps to the last step.
//! slider.pointer_down(13, 1, &mut router);
//! slider.pointer_up(&mut router);
//! assert_eq!(slider.value(), 9);
//! assert_eq!(slider.drain_messages().len(), 1);
//! ```

pub mod action;
pub mod app;
pub mod capture;
pub mod cli;
pub mod focus;
pub mod input;
pub mod runtime;
pub mod slider;

// Re-export commonly used types at the crate root
pub use action::Action;
pub use app::{App, Demo};
pub use capture::{MouseRouter, PointerCapture};
pub use slider::{Slider, SliderChanged, SliderError, SliderId, SliderStyle};
