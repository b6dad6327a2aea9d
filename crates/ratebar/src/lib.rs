#![forbid(unsafe_code)]

//! ratebar public facade crate.
//!
//! Re-exports the rating widget, its geometry and pointer types, and a
//! lightweight prelude for day-to-day usage.
//!
//! ```
//! use ratebar::prelude::*;
//!
//! # fn main() -> ratebar::Result<()> {
//! let mut rating = Rating::from_config(RatingConfig::new().range(0, 5).pace(0.5))?;
//! rating.set_bounds(Size::new(100.0, 20.0));
//! let update = rating.handle_pointer(PointerEvent::began(42.0, 10.0));
//! assert_eq!(update.map(|u| u.value), Some(2.5));
//! # Ok(())
//! # }
//! ```

use std::fmt;

// --- Core re-exports -------------------------------------------------------

pub use ratebar_core::event::{PointerEvent, PointerPhase};
pub use ratebar_core::geometry::{Point, Rect, Size};

// --- Widget re-exports -----------------------------------------------------

pub use ratebar_widgets::{
    FillPlan, Rating, RatingConfig, RatingError, RatingUpdate, SlotFill, SlotLayout, ValueModel,
    compute_fill_plan, value_from_point,
};

// --- Errors ---------------------------------------------------------------

/// Top-level error type for ratebar hosts.
#[derive(Debug)]
pub enum Error {
    /// The rating was configured with an invalid range or pace.
    Config(RatingError),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Config(err) => write!(f, "invalid rating configuration: {err}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Config(err) => Some(err),
        }
    }
}

impl From<RatingError> for Error {
    fn from(err: RatingError) -> Self {
        Self::Config(err)
    }
}

/// Standard result type for ratebar APIs.
pub type Result<T> = std::result::Result<T, Error>;

// --- Prelude --------------------------------------------------------------

pub mod prelude {
    pub use crate::{
        Error, FillPlan, PointerEvent, PointerPhase, Point, Rating, RatingConfig, RatingUpdate,
        Rect, Result, Size,
    };

    pub use crate::{core, widgets};
}

pub use ratebar_core as core;
pub use ratebar_widgets as widgets;
