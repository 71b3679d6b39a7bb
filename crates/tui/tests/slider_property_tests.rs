//! Property tests for slider value invariants.

use proptest::prelude::*;
use ratatui::layout::Rect;
use slider_tui::capture::MouseRouter;
use slider_tui::slider::Slider;

fn range() -> impl Strategy<Value = (i64, i64, i64)> {
    (-1_000i64..1_000, 1i64..2_000, 1i64..300).prop_map(|(min, span, step)| (min, min + span, step))
}

proptest! {
    #[test]
    fn set_value_stays_on_grid((min, max, step) in range(), value in any::<i64>()) {
        let mut slider = Slider::builder(min, max).step(step).build().unwrap();
        slider.set_value(value);

        let v = slider.value();
        prop_assert!(v >= min && v <= max);
        prop_assert_eq!((v - min) % step, 0);
    }

    #[test]
    fn set_value_is_idempotent((min, max, step) in range(), value in -5_000i64..5_000) {
        let mut slider = Slider::builder(min, max).step(step).build().unwrap();
        slider.set_value(value);
        let (first, percent) = (slider.value(), slider.position_percent());

        slider.set_value(first);
        prop_assert_eq!(slider.value(), first);
        prop_assert_eq!(slider.position_percent(), percent);
    }

    #[test]
    fn drag_stays_in_range(
        (min, max, step) in range(),
        width in 8u16..120,
        start in 0u16..130,
        moves in proptest::collection::vec(0u16..200, 1..8),
    ) {
        let mut slider = Slider::builder(min, max).step(step).build().unwrap();
        slider.set_area(Rect::new(0, 0, width, 3));
        let mut router = MouseRouter::default();

        slider.pointer_down(start.min(width - 1), 1, &mut router);
        for x in moves {
            slider.pointer_move(x);
            let percent = slider.position_percent();
            prop_assert!(percent >= 0.0 && percent <= slider.bounds().max_percent());
            prop_assert!(slider.value() >= min && slider.value() <= max);
            prop_assert_eq!((slider.value() - min) % step, 0);
        }
    }
}
