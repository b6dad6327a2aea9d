#![forbid(unsafe_code)]

//! Rating configuration.
//!
//! [`RatingConfig`] is the host-facing description of a rating: range, pace,
//! interactivity, and the value to start from. It is validated once when a
//! [`Rating`](crate::rating::Rating) is built from it.
//!
//! # Feature Gate
//!
//! With the `serde` feature the config derives `Serialize`/`Deserialize`;
//! missing fields fall back to [`RatingConfig::default`].

use crate::RatingError;

/// Default lower bound of the value.
pub const DEFAULT_MIN_VALUE: i32 = 0;
/// Default upper bound of the value, and the default slot count.
pub const DEFAULT_MAX_VALUE: i32 = 5;

/// Configuration for a [`Rating`](crate::rating::Rating).
///
/// # Examples
///
/// ```
/// # use ratebar_widgets::config::RatingConfig;
/// let config = RatingConfig::new().range(1, 10).pace(0.5).value(4.0);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct RatingConfig {
    /// Lowest reachable value.
    pub min_value: i32,
    /// Highest reachable value; also the number of slots drawn.
    pub max_value: i32,
    /// Pointer quantization step in `[0, 1]`; `0` is unquantized.
    pub pace: f64,
    /// Whether pointer events change the value.
    pub interactive: bool,
    /// Starting value, clamped into range on construction.
    pub value: f64,
}

impl Default for RatingConfig {
    fn default() -> Self {
        Self {
            min_value: DEFAULT_MIN_VALUE,
            max_value: DEFAULT_MAX_VALUE,
            pace: 0.0,
            interactive: true,
            value: f64::from(DEFAULT_MIN_VALUE),
        }
    }
}

impl RatingConfig {
    /// Create a config with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the value range.
    #[must_use]
    pub fn range(mut self, min_value: i32, max_value: i32) -> Self {
        self.min_value = min_value;
        self.max_value = max_value;
        self
    }

    /// Set the pointer quantization step.
    #[must_use]
    pub fn pace(mut self, pace: f64) -> Self {
        self.pace = pace;
        self
    }

    /// Enable or disable pointer interaction.
    #[must_use]
    pub fn interactive(mut self, interactive: bool) -> Self {
        self.interactive = interactive;
        self
    }

    /// Set the starting value.
    #[must_use]
    pub fn value(mut self, value: f64) -> Self {
        self.value = value;
        self
    }

    /// Check the range and pace preconditions.
    pub fn validate(&self) -> Result<(), RatingError> {
        if self.min_value > self.max_value {
            return Err(RatingError::InvertedRange {
                min: self.min_value,
                max: self.max_value,
            });
        }
        if !(0.0..=1.0).contains(&self.pace) {
            return Err(RatingError::PaceOutOfRange { pace: self.pace });
        }
        Ok(())
    }
}
