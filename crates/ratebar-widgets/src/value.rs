#![forbid(unsafe_code)]

//! Rating value model.
//!
//! [`ValueModel`] owns the current value and its legal range. Every mutation
//! path, including range changes, leaves the value inside
//! `[min_value, max_value]`.
//!
//! # Failure Modes
//!
//! | Input | Outcome |
//! |-------|---------|
//! | `min > max` | [`RatingError::InvertedRange`] (`try_`), panic otherwise |
//! | pace outside `[0, 1]` or NaN | [`RatingError::PaceOutOfRange`] (`try_`), panic otherwise |
//! | value outside the range | silently clamped |
//! | NaN value | ignored |

use crate::RatingError;
use crate::config::{DEFAULT_MAX_VALUE, DEFAULT_MIN_VALUE};

/// Current value, range, and pace of a rating.
#[derive(Debug, Clone, PartialEq)]
pub struct ValueModel {
    min_value: i32,
    max_value: i32,
    pace: f64,
    value: f64,
}

impl ValueModel {
    /// Create a model over `[min_value, max_value]` with the value at the floor
    /// and an unquantized pace.
    pub fn new(min_value: i32, max_value: i32) -> Result<Self, RatingError> {
        check_range(min_value, max_value)?;
        Ok(Self {
            min_value,
            max_value,
            pace: 0.0,
            value: f64::from(min_value),
        })
    }

    #[inline]
    pub fn min_value(&self) -> i32 {
        self.min_value
    }

    #[inline]
    pub fn max_value(&self) -> i32 {
        self.max_value
    }

    #[inline]
    pub fn pace(&self) -> f64 {
        self.pace
    }

    #[inline]
    pub fn value(&self) -> f64 {
        self.value
    }

    /// Number of slots drawn for this range.
    ///
    /// Derived from `max_value` alone; a positive `min_value` does not remove
    /// slots, it only makes the leading ones unreachable.
    #[inline]
    pub fn item_count(&self) -> usize {
        usize::try_from(self.max_value).unwrap_or(0)
    }

    /// Replace the range, re-clamping the value.
    ///
    /// Returns the new value if the range change moved it.
    pub fn try_set_range(
        &mut self,
        min_value: i32,
        max_value: i32,
    ) -> Result<Option<f64>, RatingError> {
        check_range(min_value, max_value)?;
        self.min_value = min_value;
        self.max_value = max_value;

        let clamped = self.clamp(self.value);
        if clamped == self.value {
            return Ok(None);
        }
        self.value = clamped;
        Ok(Some(clamped))
    }

    /// Replace the range, panicking if `min_value > max_value`.
    pub fn set_range(&mut self, min_value: i32, max_value: i32) -> Option<f64> {
        match self.try_set_range(min_value, max_value) {
            Ok(changed) => changed,
            Err(err) => panic!("{err}"),
        }
    }

    /// Store `value` clamped into range.
    ///
    /// Returns `None` without touching state when `value` is exactly the
    /// current value or NaN. Any other input reports the stored value, even
    /// if clamping lands on the previous one.
    pub fn set_value(&mut self, value: f64) -> Option<f64> {
        if value == self.value || value.is_nan() {
            return None;
        }
        self.value = self.clamp(value);
        Some(self.value)
    }

    /// Set the pointer quantization step.
    pub fn try_set_pace(&mut self, pace: f64) -> Result<(), RatingError> {
        if !(0.0..=1.0).contains(&pace) {
            return Err(RatingError::PaceOutOfRange { pace });
        }
        self.pace = pace;
        Ok(())
    }

    /// Set the pointer quantization step, panicking outside `[0, 1]`.
    pub fn set_pace(&mut self, pace: f64) {
        if let Err(err) = self.try_set_pace(pace) {
            panic!("{err}");
        }
    }

    fn clamp(&self, value: f64) -> f64 {
        value.clamp(f64::from(self.min_value), f64::from(self.max_value))
    }
}

impl Default for ValueModel {
    /// Five slots, value at zero, unquantized.
    fn default() -> Self {
        Self {
            min_value: DEFAULT_MIN_VALUE,
            max_value: DEFAULT_MAX_VALUE,
            pace: 0.0,
            value: f64::from(DEFAULT_MIN_VALUE),
        }
    }
}

/// Quantize a slot-local fraction to the pace grid.
///
/// A zero pace passes the fraction through. Otherwise the fraction always
/// rounds up to the next pace boundary, so a touch anywhere inside a bucket
/// selects that bucket's upper edge.
#[inline]
pub fn quantize_fraction(fraction: f64, pace: f64) -> f64 {
    if pace == 0.0 {
        fraction
    } else {
        ((fraction / pace).floor() + 1.0) * pace
    }
}

fn check_range(min_value: i32, max_value: i32) -> Result<(), RatingError> {
    if min_value > max_value {
        return Err(RatingError::InvertedRange {
            min: min_value,
            max: max_value,
        });
    }
    Ok(())
}
