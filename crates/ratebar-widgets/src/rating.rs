#![forbid(unsafe_code)]

//! Interactive rating widget.
//!
//! [`Rating`] ties the [`ValueModel`] to the fill renderer and the hit
//! mapper. The host feeds it layout bounds and pointer events and draws the
//! [`FillPlan`] it hands back.
//!
//! # Update protocol
//!
//! Every setter runs validate → clamp → re-render in that order and reports
//! the outcome as an `Option<RatingUpdate>`. `None` means nothing observable
//! changed and the host has nothing to redraw or propagate. Each
//! [`RatingUpdate`] carries a fresh plan and bumps [`Rating::revision`].
//!
//! Press and drag go through the same entry point,
//! [`Rating::handle_pointer`]; every event recomputes the value and plan from
//! scratch.
//!
//! # Examples
//!
//! ```
//! # use ratebar_core::event::PointerEvent;
//! # use ratebar_core::geometry::Size;
//! # use ratebar_widgets::rating::Rating;
//! let mut rating = Rating::new();
//! rating.set_bounds(Size::new(100.0, 20.0));
//!
//! let update = rating.handle_pointer(PointerEvent::began(68.0, 10.0)).unwrap();
//! assert!((update.value - 3.4).abs() < 1e-9);
//! assert_eq!(update.plan.unwrap().visible_count(), 4);
//! ```

use crate::RatingError;
use crate::config::RatingConfig;
use crate::fill::{FillPlan, SlotLayout, plan_for_layout};
use crate::hit::layout_value_from_point;
use crate::value::ValueModel;
use ratebar_core::event::PointerEvent;
use ratebar_core::geometry::Size;

/// Outcome of a state change that requires a redraw.
#[derive(Debug, Clone, PartialEq)]
pub struct RatingUpdate {
    /// Current value after the change.
    pub value: f64,
    /// Plan for the new state; `None` until bounds are known.
    pub plan: Option<FillPlan>,
    /// Render revision this update corresponds to.
    pub revision: u64,
}

/// A rating: value model plus the state needed to map pointers and plans.
#[derive(Debug, Clone, PartialEq)]
pub struct Rating {
    model: ValueModel,
    interactive: bool,
    bounds: Option<Size>,
    revision: u64,
}

impl Default for Rating {
    fn default() -> Self {
        Self {
            model: ValueModel::default(),
            interactive: true,
            bounds: None,
            revision: 0,
        }
    }
}

impl Rating {
    /// Create a rating with the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a rating from a validated configuration.
    pub fn from_config(config: RatingConfig) -> Result<Self, RatingError> {
        config.validate()?;
        let mut model = ValueModel::new(config.min_value, config.max_value)?;
        model.try_set_pace(config.pace)?;
        model.set_value(config.value);
        Ok(Self {
            model,
            interactive: config.interactive,
            bounds: None,
            revision: 0,
        })
    }

    /// Snapshot of the current configuration and value.
    pub fn config(&self) -> RatingConfig {
        RatingConfig {
            min_value: self.model.min_value(),
            max_value: self.model.max_value(),
            pace: self.model.pace(),
            interactive: self.interactive,
            value: self.model.value(),
        }
    }

    #[inline]
    pub fn value(&self) -> f64 {
        self.model.value()
    }

    #[inline]
    pub fn min_value(&self) -> i32 {
        self.model.min_value()
    }

    #[inline]
    pub fn max_value(&self) -> i32 {
        self.model.max_value()
    }

    #[inline]
    pub fn pace(&self) -> f64 {
        self.model.pace()
    }

    #[inline]
    pub fn is_interactive(&self) -> bool {
        self.interactive
    }

    /// Number of slots drawn.
    #[inline]
    pub fn item_count(&self) -> usize {
        self.model.item_count()
    }

    /// Last bounds supplied by the host.
    #[inline]
    pub fn bounds(&self) -> Option<Size> {
        self.bounds
    }

    /// Number of re-renders triggered so far.
    #[inline]
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Slot layout for the current bounds and range.
    pub fn layout(&self) -> Option<SlotLayout> {
        self.bounds
            .map(|bounds| SlotLayout::new(bounds, self.model.item_count()))
    }

    /// Recompute the fill plan for the current state.
    pub fn fill_plan(&self) -> Option<FillPlan> {
        self.layout()
            .map(|layout| plan_for_layout(&layout, self.model.value()))
    }

    /// Set the value, clamped into range.
    ///
    /// Writing the exact current value (or NaN) is a no-op and returns `None`.
    pub fn set_value(&mut self, value: f64) -> Option<RatingUpdate> {
        self.model.set_value(value)?;
        Some(self.rerender())
    }

    /// Replace the range, re-clamping the value.
    ///
    /// Always re-renders: the slot count follows `max_value`.
    pub fn try_set_range(
        &mut self,
        min_value: i32,
        max_value: i32,
    ) -> Result<RatingUpdate, RatingError> {
        let clamped = self.model.try_set_range(min_value, max_value)?;
        #[cfg(feature = "tracing")]
        {
            if let Some(value) = clamped {
                tracing::debug!(
                    min_value,
                    max_value,
                    value,
                    "rating value clamped by range change"
                );
            }
        }
        #[cfg(not(feature = "tracing"))]
        let _ = clamped;
        Ok(self.rerender())
    }

    /// Replace the range.
    ///
    /// # Panics
    ///
    /// Panics if `min_value > max_value`.
    pub fn set_range(&mut self, min_value: i32, max_value: i32) -> RatingUpdate {
        match self.try_set_range(min_value, max_value) {
            Ok(update) => update,
            Err(err) => panic!("{err}"),
        }
    }

    /// Set the pointer quantization step.
    pub fn try_set_pace(&mut self, pace: f64) -> Result<(), RatingError> {
        self.model.try_set_pace(pace)
    }

    /// Set the pointer quantization step.
    ///
    /// # Panics
    ///
    /// Panics if `pace` is outside `[0, 1]`.
    pub fn set_pace(&mut self, pace: f64) {
        self.model.set_pace(pace);
    }

    /// Enable or disable pointer interaction.
    pub fn set_interactive(&mut self, interactive: bool) {
        self.interactive = interactive;
    }

    /// Record new layout bounds and re-render.
    pub fn set_bounds(&mut self, bounds: Size) -> RatingUpdate {
        self.bounds = Some(bounds);
        self.rerender()
    }

    /// Apply a pointer press or drag.
    ///
    /// Returns `None` when the widget is not interactive, the phase does not
    /// select a value, bounds are unknown, the pointer is at or past the
    /// right edge, or the mapped value equals the current one.
    pub fn handle_pointer(&mut self, event: PointerEvent) -> Option<RatingUpdate> {
        let _span = ratebar_core::debug_span!(
            "rating_pointer",
            x = event.x,
            y = event.y,
            phase = ?event.phase
        )
        .entered();

        if !self.interactive || !event.phase.updates_value() {
            return None;
        }
        let layout = self.layout()?;
        let raw = layout_value_from_point(event.position(), &layout, self.model.pace())?;
        self.set_value(raw)
    }

    fn rerender(&mut self) -> RatingUpdate {
        self.revision += 1;
        let value = self.model.value();
        ratebar_core::trace!(value, revision = self.revision, "rating re-render");
        RatingUpdate {
            value,
            plan: self.fill_plan(),
            revision: self.revision,
        }
    }
}
