#![forbid(unsafe_code)]

//! Slot geometry and fill plans.
//!
//! A rating draws `item_count` equal squares left to right, vertically
//! centred in its bounds, with no gaps. The fill plan says which slots are
//! drawn and how much of the boundary slot is revealed for a given value.
//!
//! # Invariants
//!
//! 1. Slot `i` starts at `x = i * side`; slots never overlap.
//! 2. At most one slot is partially revealed, and its mask is left-aligned.
//! 3. Slots past the value are hidden rather than drawn with a zero mask.

use ratebar_core::geometry::{Rect, Size};

/// Square slot layout inside a bounding box.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SlotLayout {
    bounds: Size,
    item_count: usize,
    side: f64,
}

impl SlotLayout {
    /// Lay out `item_count` square slots in `bounds`.
    ///
    /// The side is `width / item_count` when the row would overflow the
    /// width at full height, otherwise the full height.
    pub fn new(bounds: Size, item_count: usize) -> Self {
        let count = item_count as f64;
        let side = if bounds.width < count * bounds.height {
            bounds.width / count
        } else {
            bounds.height
        };
        Self {
            bounds,
            item_count,
            side,
        }
    }

    #[inline]
    pub fn bounds(&self) -> Size {
        self.bounds
    }

    #[inline]
    pub fn item_count(&self) -> usize {
        self.item_count
    }

    /// Side length of every slot.
    #[inline]
    pub fn side(&self) -> f64 {
        self.side
    }

    /// Whether slots have a usable, positive size.
    #[inline]
    pub fn is_degenerate(&self) -> bool {
        !(self.side.is_finite() && self.side > 0.0)
    }

    /// Left edge of slot `index`.
    #[inline]
    pub fn slot_x(&self, index: usize) -> f64 {
        index as f64 * self.side
    }

    /// Rectangle of slot `index`.
    pub fn slot_rect(&self, index: usize) -> Rect {
        Rect::new(
            self.slot_x(index),
            self.bounds.height / 2.0 - self.side / 2.0,
            self.side,
            self.side,
        )
    }

    /// Iterate over all slot rectangles, left to right.
    pub fn slot_rects(&self) -> impl Iterator<Item = Rect> + '_ {
        (0..self.item_count).map(|i| self.slot_rect(i))
    }
}

/// Drawing instructions for one slot.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SlotFill {
    /// Slot rectangle in widget-local coordinates.
    pub rect: Rect,
    /// Reveal mask in slot-local coordinates; `None` draws the whole slot.
    pub mask: Option<Rect>,
    /// Whether the slot is drawn at all.
    pub visible: bool,
    /// Fraction of the slot considered full, in `[0, 1]`.
    pub ratio: f64,
}

impl SlotFill {
    fn full(rect: Rect) -> Self {
        Self {
            rect,
            mask: None,
            visible: true,
            ratio: 1.0,
        }
    }

    fn partial(rect: Rect, ratio: f64) -> Self {
        Self {
            rect,
            mask: Some(Rect::new(0.0, 0.0, ratio * rect.width, rect.height)),
            visible: true,
            ratio,
        }
    }

    fn hidden(rect: Rect) -> Self {
        Self {
            rect,
            mask: None,
            visible: false,
            ratio: 0.0,
        }
    }
}

/// Ordered per-slot drawing instructions for one value.
#[derive(Debug, Clone, PartialEq)]
pub struct FillPlan {
    side: f64,
    slots: Vec<SlotFill>,
}

impl FillPlan {
    /// Side length shared by all slots.
    #[inline]
    pub fn side(&self) -> f64 {
        self.side
    }

    #[inline]
    pub fn slots(&self) -> &[SlotFill] {
        &self.slots
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Fill ratio of each slot, left to right.
    pub fn ratios(&self) -> Vec<f64> {
        self.slots.iter().map(|s| s.ratio).collect()
    }

    /// Number of slots that are drawn.
    pub fn visible_count(&self) -> usize {
        self.slots.iter().filter(|s| s.visible).count()
    }
}

/// Compute slot geometry and fill state for `value`.
pub fn compute_fill_plan(bounds: Size, item_count: usize, value: f64) -> FillPlan {
    plan_for_layout(&SlotLayout::new(bounds, item_count), value)
}

/// Compute the fill plan for an existing layout.
pub fn plan_for_layout(layout: &SlotLayout, value: f64) -> FillPlan {
    #[cfg(feature = "tracing")]
    let _span = tracing::debug_span!(
        "widget_render",
        widget = "Rating",
        w = layout.bounds.width,
        h = layout.bounds.height,
        slots = layout.item_count,
        value
    )
    .entered();

    let whole = value.floor();
    let remainder = value - whole;

    let slots = layout
        .slot_rects()
        .enumerate()
        .map(|(i, rect)| {
            let index = i as f64;
            if index < whole {
                SlotFill::full(rect)
            } else if index == whole && remainder > 0.0 {
                SlotFill::partial(rect, remainder)
            } else {
                SlotFill::hidden(rect)
            }
        })
        .collect();

    FillPlan {
        side: layout.side,
        slots,
    }
}
