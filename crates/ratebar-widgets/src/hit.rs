#![forbid(unsafe_code)]

//! Pointer to value mapping.
//!
//! The inverse of [`fill`](crate::fill): a pointer that lands at local
//! fraction `f` of slot `h` maps to `h + f`, which the fill plan draws as
//! `h` full slots plus an `f`-wide reveal of slot `h`.

use crate::fill::SlotLayout;
use crate::value::quantize_fraction;
use ratebar_core::geometry::{Point, Size};

/// Find the slot whose left edge `x` has passed.
///
/// Scans right to left so that a point exactly on a shared edge belongs to
/// the slot on the right. Returns `None` left of every slot.
pub fn hit_slot(x: f64, layout: &SlotLayout) -> Option<usize> {
    (0..layout.item_count())
        .rev()
        .find(|&i| layout.slot_x(i) <= x)
}

/// Map a pointer position to a raw (unclamped) rating value.
///
/// Returns `None` when the pointer is at or past the right edge of the
/// bounds or the layout has no usable slot size; the caller keeps its
/// current value. A pointer left of every slot maps to `0`.
pub fn value_from_point(point: Point, bounds: Size, item_count: usize, pace: f64) -> Option<f64> {
    layout_value_from_point(point, &SlotLayout::new(bounds, item_count), pace)
}

/// [`value_from_point`] over an existing layout.
pub fn layout_value_from_point(point: Point, layout: &SlotLayout, pace: f64) -> Option<f64> {
    if point.x.is_nan() || point.x >= layout.bounds().width || layout.is_degenerate() {
        return None;
    }

    let raw = match hit_slot(point.x, layout) {
        Some(slot) => {
            let fraction = ((point.x - layout.slot_x(slot)) / layout.side()).clamp(0.0, 1.0);
            slot as f64 + quantize_fraction(fraction, pace)
        }
        None => 0.0,
    };
    Some(raw)
}
