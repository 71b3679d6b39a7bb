//! Integration tests for pointer interaction with a laid-out slider.
//!
//! The slider is laid out 18 columns wide: a rounded border and two columns
//! of padding on each side leave a 12-column track starting at x = 3.

mod helpers;

use helpers::{drag, press, release};
use ratatui::layout::Rect;
use slider_tui::capture::{MouseRouter, PointerCapture};
use slider_tui::slider::{GrabState, Slider, SliderChanged};

fn laid_out(min: i64, max: i64, step: i64) -> Slider {
    let mut slider = Slider::builder(min, max).step(step).build().unwrap();
    slider.set_area(Rect::new(0, 0, 18, 3));
    slider
}

#[test]
fn test_track_geometry() {
    let slider = laid_out(0, 9, 3);
    assert_eq!(slider.track_area(), Rect::new(3, 1, 12, 1));
}

#[test]
fn test_click_round_trip() {
    let mut slider = laid_out(0, 9, 3);
    let mut router = MouseRouter::default();

    for (x, value, percent) in [(13, 9, 75.0), (10, 6, 50.0), (7, 3, 25.0), (4, 0, 0.0)] {
        slider.handle_mouse(press(x, 1), &mut router);
        slider.handle_mouse(release(x, 1), &mut router);
        assert_eq!(slider.value(), value, "click at x={x}");
        assert_eq!(slider.position_percent(), percent, "click at x={x}");
    }

    let id = slider.id();
    assert_eq!(
        slider.drain_messages(),
        vec![
            SliderChanged { slider: id, value: 9 },
            SliderChanged { slider: id, value: 6 },
            SliderChanged { slider: id, value: 3 },
            SliderChanged { slider: id, value: 0 },
        ]
    );
}

#[test]
fn test_drag_clamps_at_both_ends() {
    let mut slider = laid_out(-20, 20, 4);
    let mut router = MouseRouter::default();

    slider.handle_mouse(press(3, 1), &mut router);
    assert_eq!(slider.value(), -20);

    slider.handle_mouse(drag(500, 40), &mut router);
    assert_eq!(slider.value(), 20);
    assert_eq!(slider.position_percent(), slider.bounds().max_percent());

    slider.handle_mouse(drag(0, 0), &mut router);
    assert_eq!(slider.value(), -20);
    assert_eq!(slider.position_percent(), 0.0);
}

#[test]
fn test_release_outside_area_ends_grab() {
    let mut slider = laid_out(0, 9, 3);
    let mut router = MouseRouter::default();

    slider.handle_mouse(press(10, 1), &mut router);
    assert!(matches!(slider.grab_state(), GrabState::Grabbed(_)));

    assert!(slider.handle_mouse(release(90, 30), &mut router));
    assert_eq!(slider.grab_state(), GrabState::Idle);
    assert_eq!(router.captured(), None);
}

#[test]
fn test_release_rederives_position_from_value() {
    let mut slider = laid_out(0, 9, 3);
    let mut router = MouseRouter::default();

    slider.handle_mouse(press(4, 1), &mut router);
    // One column right: 8.3%, still the first step.
    slider.handle_mouse(drag(5, 1), &mut router);
    assert_eq!(slider.value(), 0);
    assert!(slider.position_percent() > 0.0);

    slider.handle_mouse(release(5, 1), &mut router);
    assert_eq!(slider.position_percent(), 0.0);
}

#[test]
fn test_boundary_nudges_are_silent() {
    let mut slider = laid_out(200, 500, 100);
    assert!(!slider.slide_left());
    assert!(slider.drain_messages().is_empty());

    slider.set_value(500);
    slider.drain_messages();
    assert!(!slider.slide_right());
    assert!(slider.drain_messages().is_empty());
}

#[test]
fn test_set_value_is_idempotent() {
    let mut slider = laid_out(0, 100, 25);
    slider.set_value(50);
    let percent = slider.position_percent();

    slider.set_value(50);
    assert_eq!(slider.position_percent(), percent);
    let values: Vec<i64> = slider.drain_messages().iter().map(|m| m.value).collect();
    assert_eq!(values, vec![50, 50]);
}

#[test]
fn test_uneven_range_stops_below_max() {
    let mut slider = laid_out(0, 10, 3);
    slider.set_value(10);
    assert_eq!(slider.value(), 9);

    let mut router = MouseRouter::default();
    slider.handle_mouse(press(14, 1), &mut router);
    assert_eq!(slider.value(), 9);
}

#[test]
fn test_disabling_mid_drag_releases_capture() {
    let mut slider = laid_out(0, 9, 3);
    let mut router = MouseRouter::default();

    slider.handle_mouse(press(10, 1), &mut router);
    slider.set_disabled(true, &mut router);
    assert!(!slider.is_grabbed());
    assert_eq!(router.captured(), None);

    assert!(!slider.handle_mouse(drag(14, 1), &mut router));
    assert_eq!(slider.value(), 6);
}
