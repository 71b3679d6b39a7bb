//! Value range and the value/percent transforms.
//!
//! Responsibilities:
//! - Hold the validated `[min, max]` range and step.
//! - Convert between values and thumb position percentages.
//! - Quantize arbitrary values onto the step grid.
//!
//! Invariants:
//! - `min < max` and `step >= 1`, enforced by [`SliderBounds::new`].
//! - `max - min` fits in an `i64`.
//! - Every value returned by [`SliderBounds::quantize`] is `min + k * step`
//!   for some `k` in `0..number_of_steps()`.

use super::error::SliderError;

/// Width of the virtual track, in percent.
pub const VIRTUAL_SIZE: f64 = 100.0;

/// Validated slider range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SliderBounds {
    min: i64,
    max: i64,
    step: i64,
}

impl SliderBounds {
    /// Validate and create a range.
    ///
    /// # Errors
    ///
    /// Returns [`SliderError::EmptyRange`] if `max <= min`,
    /// [`SliderError::InvalidStep`] if `step < 1` and
    /// [`SliderError::RangeOverflow`] if `max - min` does not fit in an `i64`.
    pub fn new(min: i64, max: i64, step: i64) -> Result<Self, SliderError> {
        if max <= min {
            return Err(SliderError::EmptyRange { min, max });
        }
        if step < 1 {
            return Err(SliderError::InvalidStep { step });
        }
        let span = max
            .checked_sub(min)
            .ok_or(SliderError::RangeOverflow { min, max })?;
        // number_of_steps * step must not overflow either.
        (span / step)
            .checked_add(1)
            .and_then(|steps| steps.checked_mul(step))
            .ok_or(SliderError::RangeOverflow { min, max })?;
        Ok(Self { min, max, step })
    }

    pub fn min(&self) -> i64 {
        self.min
    }

    pub fn max(&self) -> i64 {
        self.max
    }

    pub fn step(&self) -> i64 {
        self.step
    }

    /// Count of discrete positions: `floor((max - min) / step) + 1`.
    pub fn number_of_steps(&self) -> i64 {
        (self.max - self.min) / self.step + 1
    }

    /// Largest value reachable from `min` in whole steps.
    ///
    /// Below `max` when the step does not divide the range.
    pub fn last_value(&self) -> i64 {
        self.min + (self.number_of_steps() - 1) * self.step
    }

    /// Thumb size in percent of the track: `ceil(100 / number_of_steps)`.
    pub fn thumb_percent(&self) -> u16 {
        let steps = self.number_of_steps();
        let whole = 100 / steps;
        // At least 1% for very fine ranges.
        (whole + i64::from(100 % steps != 0)) as u16
    }

    /// Position percentage for `value`, measured from the start of the track.
    pub fn percent_for_value(&self, value: i64) -> f64 {
        let span = (self.number_of_steps() * self.step) as f64;
        (value - self.min) as f64 * VIRTUAL_SIZE / span
    }

    /// Furthest percentage the thumb may travel to.
    pub fn max_percent(&self) -> f64 {
        self.percent_for_value(self.max)
    }

    /// Clamp a percentage into `[0, max_percent]`. NaN maps to 0.
    pub fn clamp_percent(&self, percent: f64) -> f64 {
        if percent.is_nan() {
            return 0.0;
        }
        percent.clamp(0.0, self.max_percent())
    }

    /// Value for a thumb position: `step * round(percent * steps / 100) + min`,
    /// then clamped and quantized.
    ///
    /// Halfway cases round to the even step index.
    pub fn value_for_percent(&self, percent: f64) -> i64 {
        let index = (self.clamp_percent(percent) * self.number_of_steps() as f64 / VIRTUAL_SIZE)
            .round_ties_even();
        self.quantize(self.min.saturating_add(self.step.saturating_mul(index as i64)))
    }

    /// Clamp `value` into `[min, max]` and snap it to the nearest reachable step.
    ///
    /// Ties snap upwards, unless that would pass [`last_value`](Self::last_value).
    pub fn quantize(&self, value: i64) -> i64 {
        let offset = value.clamp(self.min, self.max) - self.min;
        let (whole, rest) = (offset / self.step, offset % self.step);
        let index = if rest >= self.step - rest {
            whole + 1
        } else {
            whole
        };
        self.min + index.min(self.number_of_steps() - 1) * self.step
    }

    /// Whether `value` lies within `[min, max]`.
    pub fn contains(&self, value: i64) -> bool {
        (self.min..=self.max).contains(&value)
    }
}
