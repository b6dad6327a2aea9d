#![forbid(unsafe_code)]

//! Rating widget core: value model, fill renderer, and hit mapper.
//!
//! The host owns drawing. It supplies bounds and pointer events to a
//! [`Rating`](rating::Rating) and draws the [`FillPlan`](fill::FillPlan)s it
//! returns.

pub mod config;
pub mod fill;
pub mod hit;
pub mod rating;
pub mod value;

pub use config::RatingConfig;
pub use fill::{FillPlan, SlotFill, SlotLayout, compute_fill_plan};
pub use hit::value_from_point;
pub use rating::{Rating, RatingUpdate};
pub use value::ValueModel;

use core::fmt;

/// Invalid rating configuration.
///
/// These are host programming errors. The panicking setters abort with this
/// error's message; the `try_` setters return it and leave state untouched.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RatingError {
    /// `min_value` is greater than `max_value`.
    InvertedRange { min: i32, max: i32 },
    /// Pace is NaN or outside `[0, 1]`.
    PaceOutOfRange { pace: f64 },
}

impl fmt::Display for RatingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvertedRange { min, max } => {
                write!(f, "min_value {} exceeds max_value {}", min, max)
            }
            Self::PaceOutOfRange { pace } => write!(f, "pace {} is outside [0, 1]", pace),
        }
    }
}

impl std::error::Error for RatingError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_messages() {
        assert_eq!(
            RatingError::InvertedRange { min: 6, max: 2 }.to_string(),
            "min_value 6 exceeds max_value 2"
        );
        assert_eq!(
            RatingError::PaceOutOfRange { pace: 1.5 }.to_string(),
            "pace 1.5 is outside [0, 1]"
        );
    }
}
