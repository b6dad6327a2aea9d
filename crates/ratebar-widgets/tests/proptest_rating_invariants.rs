//! Property-based invariant tests for the rating value model, fill plan, and
//! hit mapping.
//!
//! 1. Any written value lands inside `[min, max]`.
//! 2. Any sequence of valid range changes keeps the value inside the range.
//! 3. Fill ratios match `floor(value)` and its remainder.
//! 4. Pointer → value → plan reveals exactly up to the pointer (pace 0).
//! 5. Pace-quantized values sit on the pace grid, at or above the raw value.
//! 6. Touches at or past the right edge never change the value.
//! 7. Rewriting the current value never re-renders.

use proptest::prelude::*;
use ratebar_core::event::PointerEvent;
use ratebar_core::geometry::{Point, Size};
use ratebar_widgets::{Rating, RatingConfig, compute_fill_plan, value_from_point};

// ── Helpers ─────────────────────────────────────────────────────────────

fn range_strategy() -> impl Strategy<Value = (i32, i32)> {
    (-20i32..=20, 0i32..=20).prop_map(|(min, span)| (min, min + span))
}

fn bounds_strategy() -> impl Strategy<Value = Size> {
    (10u16..=800, 4u16..=120).prop_map(|(w, h)| Size::new(f64::from(w), f64::from(h)))
}

fn in_range(rating: &Rating) -> bool {
    let v = rating.value();
    f64::from(rating.min_value()) <= v && v <= f64::from(rating.max_value())
}

// ═════════════════════════════════════════════════════════════════════════
// 1. Clamping
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn set_value_stays_in_range(
        (min, max) in range_strategy(),
        v in prop::num::f64::ANY,
    ) {
        let mut rating = Rating::from_config(RatingConfig::new().range(min, max)).unwrap();
        rating.set_value(v);
        prop_assert!(in_range(&rating), "value {} escaped [{}, {}]", rating.value(), min, max);
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 2. Range consistency
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn range_changes_keep_value_in_range(
        start in -50.0f64..50.0,
        ranges in prop::collection::vec(range_strategy(), 1..12),
    ) {
        let mut rating = Rating::new();
        rating.set_value(start);
        for (min, max) in ranges {
            rating.set_range(min, max);
            prop_assert!(in_range(&rating), "value {} escaped [{}, {}]", rating.value(), min, max);
        }
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 3. Fill ratios
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn fill_ratios_follow_value(
        bounds in bounds_strategy(),
        count in 1usize..=12,
        value in 0.0f64..12.0,
    ) {
        let value = value.min(count as f64);
        let plan = compute_fill_plan(bounds, count, value);
        let whole = value.floor();
        for (i, slot) in plan.slots().iter().enumerate() {
            let i = i as f64;
            let expected = if i < whole {
                1.0
            } else if i == whole {
                value - whole
            } else {
                0.0
            };
            prop_assert!((slot.ratio - expected).abs() < 1e-12);
            prop_assert_eq!(slot.visible, slot.ratio > 0.0);
            prop_assert_eq!(slot.mask.is_some(), slot.visible && slot.ratio < 1.0);
        }
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 4. Render / hit inverse
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn pointer_value_reveals_up_to_pointer(
        bounds in bounds_strategy(),
        count in 1usize..=10,
        t in 0.0f64..1.0,
    ) {
        let plan = compute_fill_plan(bounds, count, 0.0);
        let row_width = plan.side() * count as f64;
        let x = t * row_width.min(bounds.width);
        prop_assume!(x < bounds.width);

        let value = value_from_point(Point::new(x, 0.0), bounds, count, 0.0).unwrap();
        let plan = compute_fill_plan(bounds, count, value);

        // Revealed width = full slots + mask of the boundary slot.
        let revealed: f64 = plan
            .slots()
            .iter()
            .filter(|s| s.visible)
            .map(|s| s.mask.map_or(s.rect.width, |m| m.width))
            .sum();
        prop_assert!((revealed - x).abs() < 1e-6, "revealed {} for pointer {}", revealed, x);
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 5. Pace grid
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn pace_values_round_up_onto_grid(
        steps in 1u32..=10,
        x in 0.0f64..99.0,
    ) {
        let pace = 1.0 / f64::from(steps);
        let bounds = Size::new(100.0, 20.0);
        let raw = value_from_point(Point::new(x, 0.0), bounds, 5, 0.0).unwrap();
        let quantized = value_from_point(Point::new(x, 0.0), bounds, 5, pace).unwrap();

        prop_assert!(quantized > raw - 1e-9);
        prop_assert!(quantized - raw <= pace + 1e-9);
        let grid = quantized / pace;
        prop_assert!((grid - grid.round()).abs() < 1e-6, "{} is off the {} grid", quantized, pace);
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 6. Out-of-bounds touches
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn touch_past_right_edge_is_noop(
        bounds in bounds_strategy(),
        start in 0.0f64..5.0,
        overshoot in 0.0f64..500.0,
    ) {
        let mut rating = Rating::from_config(RatingConfig::new().value(start)).unwrap();
        rating.set_bounds(bounds);
        let revision = rating.revision();

        let update = rating.handle_pointer(PointerEvent::began(bounds.width + overshoot, 1.0));
        prop_assert!(update.is_none());
        prop_assert_eq!(rating.value(), start);
        prop_assert_eq!(rating.revision(), revision);
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 7. Idempotence
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn rewriting_current_value_never_rerenders(v in -10.0f64..10.0) {
        let mut rating = Rating::new();
        rating.set_bounds(Size::new(100.0, 20.0));
        rating.set_value(v);
        let revision = rating.revision();
        prop_assert!(rating.set_value(rating.value()).is_none());
        prop_assert_eq!(rating.revision(), revision);
    }
}
