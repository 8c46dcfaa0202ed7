//! String checks. `None` stands for a missing string.

use regex::Regex;

use super::Guard;
use crate::predicate::{blank, longer_than, Predicate};

impl Guard {
    /// Record `message` when the string is missing or empty.
    pub fn null_or_empty(self, value: Option<&str>, message: impl Into<String>) -> Self {
        self.check(|| value.map_or(true, str::is_empty), message)
    }

    /// Record `message` when the string is missing, empty or only whitespace.
    ///
    /// # Example
    ///
    /// ```rust
    /// use wrapture::Guard;
    ///
    /// let outcome = Guard::against()
    ///     .null_or_white_space(Some(" \t"), "Title is required.")
    ///     .to_outcome();
    /// assert_eq!(outcome.error(), Some("Title is required."));
    /// ```
    pub fn null_or_white_space(self, value: Option<&str>, message: impl Into<String>) -> Self {
        self.check(|| value.map_or(true, |s| blank().check(s)), message)
    }

    /// Record `message` when the string has more than `max` characters.
    ///
    /// A missing or empty string never violates this check.
    pub fn max_length(self, value: Option<&str>, max: usize, message: impl Into<String>) -> Self {
        self.check(
            || value.is_some_and(|s| !s.is_empty() && longer_than(max).check(s)),
            message,
        )
    }

    /// Record `message` when the string is missing or `pattern` does not match it.
    ///
    /// # Example
    ///
    /// ```rust
    /// use regex::Regex;
    /// use wrapture::Guard;
    ///
    /// let sku = Regex::new(r"^[A-Z]{3}-\d{4}$").unwrap();
    /// let outcome = Guard::against()
    ///     .not_matching(Some("ABC-12"), &sku, "SKU format is invalid.")
    ///     .to_outcome();
    /// assert!(outcome.is_failure());
    /// ```
    pub fn not_matching(
        self,
        value: Option<&str>,
        pattern: &Regex,
        message: impl Into<String>,
    ) -> Self {
        self.check(|| value.map_or(true, |s| !pattern.is_match(s)), message)
    }
}
