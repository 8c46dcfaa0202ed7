//! Numeric checks, generic over any `PartialOrd` type.

use super::Guard;

impl Guard {
    /// Record `message` when `value` is zero or negative.
    ///
    /// Zero is taken to be `N::default()`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use wrapture::Guard;
    ///
    /// let outcome = Guard::against()
    ///     .less_than_or_equal_zero(0.0, "Price must be positive.")
    ///     .to_outcome();
    /// assert!(outcome.is_failure());
    /// ```
    pub fn less_than_or_equal_zero<N>(self, value: N, message: impl Into<String>) -> Self
    where
        N: PartialOrd + Default,
    {
        self.check(|| !(value > N::default()), message)
    }

    /// Record `message` when `value < threshold`.
    pub fn less_than<N>(self, value: N, threshold: N, message: impl Into<String>) -> Self
    where
        N: PartialOrd,
    {
        self.check(|| value < threshold, message)
    }

    /// Record `message` when `value > threshold`.
    pub fn greater_than<N>(self, value: N, threshold: N, message: impl Into<String>) -> Self
    where
        N: PartialOrd,
    {
        self.check(|| value > threshold, message)
    }

    /// Record `message` when `value` falls outside `min..=max`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use wrapture::Guard;
    ///
    /// let outcome = Guard::against()
    ///     .out_of_range(5, 1, 5, "unused")
    ///     .out_of_range(6, 1, 5, "Rating must be between 1 and 5.")
    ///     .to_outcome();
    /// assert_eq!(outcome.error(), Some("Rating must be between 1 and 5."));
    /// ```
    pub fn out_of_range<N>(self, value: N, min: N, max: N, message: impl Into<String>) -> Self
    where
        N: PartialOrd,
    {
        self.check(|| !(min <= value && value <= max), message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn test_required_then_positive_joins_messages() {
        let outcome = Guard::against()
            .null_or_white_space(None, "required")
            .less_than_or_equal_zero(-1, "must be positive")
            .to_outcome();
        assert_eq!(outcome.error(), Some("required; must be positive"));
    }

    #[test]
    fn test_less_than_or_equal_zero_boundaries() {
        assert!(Guard::against()
            .less_than_or_equal_zero(1u32, "x")
            .to_outcome()
            .is_success());
        assert!(Guard::against()
            .less_than_or_equal_zero(0u32, "x")
            .to_outcome()
            .is_failure());
    }

    #[test]
    fn test_thresholds_are_strict() {
        let outcome = Guard::against()
            .less_than(10, 10, "a")
            .greater_than(10, 10, "b")
            .less_than(9, 10, "c")
            .greater_than(11, 10, "d")
            .to_outcome();
        assert_eq!(outcome.errors(), vec!["c".to_string(), " d".to_string()]);
    }

    #[test]
    fn test_checks_accept_non_sync_values() {
        let outcome = Guard::against()
            .less_than(Cell::new(3), Cell::new(5), "below minimum")
            .greater_than(Cell::new(3), Cell::new(5), "unused")
            .out_of_range(Cell::new(9), Cell::new(1), Cell::new(5), "out of range")
            .less_than_or_equal_zero(Cell::new(0), "not positive")
            .to_outcome();
        assert_eq!(
            outcome.error(),
            Some("below minimum; out of range; not positive")
        );
    }

    #[test]
    fn test_nan_is_out_of_range() {
        let outcome = Guard::against()
            .out_of_range(f64::NAN, 0.0, 1.0, "not a ratio")
            .to_outcome();
        assert_eq!(outcome.error(), Some("not a ratio"));
    }
}
