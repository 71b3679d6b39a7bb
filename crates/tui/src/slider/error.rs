//! Slider construction errors.

use thiserror::Error;

/// Errors returned when a slider is configured with an unusable range.
///
/// Value assignment never fails: out-of-range values are clamped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SliderError {
    #[error("slider range is empty: max ({max}) must be greater than min ({min})")]
    EmptyRange { min: i64, max: i64 },

    #[error("slider step must be at least 1 (got {step})")]
    InvalidStep { step: i64 },

    #[error("slider range {min}..={max} is too large to represent")]
    RangeOverflow { min: i64, max: i64 },
}
