#![forbid(unsafe_code)]

//! Canonical pointer event types.
//!
//! # Design Notes
//!
//! - Coordinates are relative to the receiving widget's bounds origin.
//! - Press and drag are distinct phases on the wire but update a value
//!   identically; see [`PointerPhase::updates_value`].

use crate::geometry::Point;

/// A pointer (mouse, touch, or pen) event.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerEvent {
    /// The phase of the pointer interaction.
    pub phase: PointerPhase,

    /// X coordinate in widget-local units.
    pub x: f64,

    /// Y coordinate in widget-local units.
    pub y: f64,
}

impl PointerEvent {
    /// Create a new pointer event.
    #[must_use]
    pub const fn new(phase: PointerPhase, x: f64, y: f64) -> Self {
        Self { phase, x, y }
    }

    /// Pointer pressed at the given position.
    #[must_use]
    pub const fn began(x: f64, y: f64) -> Self {
        Self::new(PointerPhase::Began, x, y)
    }

    /// Pointer dragged to the given position.
    #[must_use]
    pub const fn moved(x: f64, y: f64) -> Self {
        Self::new(PointerPhase::Moved, x, y)
    }

    /// Get the position as a [`Point`].
    #[must_use]
    pub const fn position(&self) -> Point {
        Point::new(self.x, self.y)
    }
}

/// The phase of a pointer interaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PointerPhase {
    /// Pointer pressed down.
    Began,

    /// Pointer moved while pressed.
    Moved,

    /// Pointer released.
    Ended,

    /// The host aborted the interaction (e.g. focus loss).
    Cancelled,
}

impl PointerPhase {
    /// Whether events in this phase carry a new value selection.
    #[must_use]
    pub const fn updates_value(self) -> bool {
        matches!(self, Self::Began | Self::Moved)
    }
}
