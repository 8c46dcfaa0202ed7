//! Date checks relative to the current clock.
//!
//! Accepts anything implementing [`PointInTime`]: zoned `DateTime`s,
//! `NaiveDateTime`s (read as local time) and `NaiveDate`s (compared by day).

use super::Guard;
use crate::predicate::PointInTime;

impl Guard {
    /// Record `message` when `value` lies after now.
    ///
    /// # Example
    ///
    /// ```rust
    /// use chrono::{Duration, Utc};
    /// use wrapture::Guard;
    ///
    /// let shipped_at = Utc::now() + Duration::days(3);
    /// let outcome = Guard::against()
    ///     .future_dates(shipped_at, "Shipping date cannot be in the future.")
    ///     .to_outcome();
    /// assert!(outcome.is_failure());
    /// ```
    pub fn future_dates<D: PointInTime>(self, value: D, message: impl Into<String>) -> Self {
        self.check(|| value.is_future(), message)
    }

    /// Record `message` when `value` lies before now.
    pub fn past_dates<D: PointInTime>(self, value: D, message: impl Into<String>) -> Self {
        self.check(|| value.is_past(), message)
    }
}
