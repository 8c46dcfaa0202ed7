//! Fluent precondition checks that accumulate violations.
//!
//! A [`Guard`] is a short-lived builder: start it with [`Guard::against`], chain
//! checks, then materialize it into an [`Outcome`]. Each check takes the guard by
//! value and hands it back, so a materialized guard cannot be reused.
//!
//! Every check follows the same rule. In [`CheckMode::ShortCircuit`] with at least
//! one recorded violation the check's condition is never evaluated. Otherwise the
//! condition is evaluated and, when violated, its message is recorded. Messages
//! are kept in call order and joined with `"; "` on materialization.
//!
//! A violated check whose message is empty panics on the spot, the same way
//! [`Outcome::failure`] does for an empty message.
//!
//! Checks are grouped by the kind of value they inspect:
//!
//! - core (this module): [`Guard::null`], [`Guard::predicate`], [`Guard::unsatisfied`]
//! - strings: `null_or_empty`, `null_or_white_space`, `max_length`, `not_matching`
//! - numbers: `less_than_or_equal_zero`, `less_than`, `greater_than`, `out_of_range`
//! - dates: `future_dates`, `past_dates`
//! - identifiers: `empty_id`
//!
//! # Example
//!
//! ```rust
//! use wrapture::Guard;
//!
//! let outcome = Guard::against()
//!     .null_or_white_space(Some("  "), "Name is required.")
//!     .less_than_or_equal_zero(0, "Quantity must be positive.")
//!     .to_outcome();
//!
//! assert_eq!(outcome.error(), Some("Name is required.; Quantity must be positive."));
//! ```

mod date;
mod identifier;
mod numeric;
mod string;

use std::fmt::Display;

use crate::error::{
    fault_message, join_errors, ACTION_FAULT_PREFIX, CONSTRUCTOR_FAULT_PREFIX,
    EMPTY_FAILURE_PANIC,
};
use crate::predicate::Predicate;
use crate::Outcome;

/// How a [`Guard`] treats checks after the first violation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CheckMode {
    /// Evaluate every check and report every violation.
    #[default]
    Full,
    /// Stop evaluating once one violation has been recorded.
    ShortCircuit,
}

/// Accumulates precondition violations.
///
/// See the [module documentation](crate::guard) for the evaluation rules.
#[derive(Debug, Clone, PartialEq, Eq)]
#[must_use = "a guard reports nothing until it is turned into an outcome"]
pub struct Guard {
    errors: Vec<String>,
    mode: CheckMode,
}

impl Default for Guard {
    fn default() -> Self {
        Guard::against()
    }
}

impl Guard {
    /// Start a guard that evaluates every check.
    pub fn against() -> Self {
        Guard::against_with(CheckMode::Full)
    }

    /// Start a guard with an explicit [`CheckMode`].
    ///
    /// # Example
    ///
    /// ```rust
    /// use wrapture::{CheckMode, Guard};
    ///
    /// let outcome = Guard::against_with(CheckMode::ShortCircuit)
    ///     .predicate(|| true, "first")
    ///     .predicate(|| true, "second")
    ///     .to_outcome();
    ///
    /// assert_eq!(outcome.error(), Some("first"));
    /// ```
    pub fn against_with(mode: CheckMode) -> Self {
        Guard {
            errors: Vec::new(),
            mode,
        }
    }

    /// The mode this guard was started with.
    pub fn mode(&self) -> CheckMode {
        self.mode
    }

    /// Violations recorded so far, in call order.
    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    /// Returns `true` once at least one violation is recorded.
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Returns `true` when further checks will not be evaluated.
    pub fn should_skip(&self) -> bool {
        self.mode == CheckMode::ShortCircuit && self.has_errors()
    }

    /// The single evaluation rule every check goes through.
    fn check<F>(mut self, violated: F, message: impl Into<String>) -> Self
    where
        F: FnOnce() -> bool,
    {
        if self.should_skip() {
            return self;
        }
        if violated() {
            let message = message.into();
            if message.is_empty() {
                panic!("{}", EMPTY_FAILURE_PANIC);
            }
            self.errors.push(message);
        }
        self
    }

    // ========== Core checks ==========

    /// Record `message` when `value` is `None`.
    pub fn null<V>(self, value: Option<V>, message: impl Into<String>) -> Self {
        self.check(|| value.is_none(), message)
    }

    /// Record `message` when `violated` returns `true`.
    ///
    /// The closure is not called when the guard is skipping.
    ///
    /// # Example
    ///
    /// ```rust
    /// use wrapture::Guard;
    ///
    /// let stock = 3;
    /// let outcome = Guard::against()
    ///     .predicate(|| stock < 5, "Stock is running low.")
    ///     .to_outcome();
    /// assert!(outcome.is_failure());
    /// ```
    pub fn predicate<F>(self, violated: F, message: impl Into<String>) -> Self
    where
        F: FnOnce() -> bool,
    {
        self.check(violated, message)
    }

    /// Record `message` when `value` does not satisfy `predicate`.
    ///
    /// Accepts any [`Predicate`], including a
    /// [`Specification`](crate::Specification).
    ///
    /// # Example
    ///
    /// ```rust
    /// use wrapture::{Guard, Specification};
    ///
    /// let adult = Specification::leaf(|age: &u32| *age >= 18);
    /// let outcome = Guard::against()
    ///     .unsatisfied(&16, &adult, "Customer must be an adult.")
    ///     .to_outcome();
    /// assert_eq!(outcome.error(), Some("Customer must be an adult."));
    /// ```
    pub fn unsatisfied<V, P>(self, value: &V, predicate: &P, message: impl Into<String>) -> Self
    where
        V: ?Sized,
        P: Predicate<V> + ?Sized,
    {
        self.check(|| !predicate.check(value), message)
    }

    // ========== Materialization ==========

    /// Success when no violation was recorded, otherwise a failure carrying every
    /// message joined with `"; "`.
    pub fn to_outcome(self) -> Outcome {
        match self.into_failure_message() {
            Some(message) => Outcome::failure(message),
            None => Outcome::ok(),
        }
    }

    /// Run `constructor` when no violation was recorded.
    ///
    /// A fault from the constructor becomes a failure prefixed with
    /// `"An error occurred while creating the object: "`. The constructor is not
    /// called when the guard holds violations.
    ///
    /// # Example
    ///
    /// ```rust
    /// use wrapture::Guard;
    ///
    /// #[derive(Debug, PartialEq)]
    /// struct Email(String);
    ///
    /// let raw = "dev@example.com";
    /// let email = Guard::against()
    ///     .null_or_empty(Some(raw), "Email is required.")
    ///     .to_outcome_with(|| Ok::<_, String>(Email(raw.to_string())));
    ///
    /// assert_eq!(email.value(), &Email("dev@example.com".to_string()));
    /// ```
    pub fn to_outcome_with<T, E, F>(self, constructor: F) -> Outcome<T>
    where
        E: Display,
        F: FnOnce() -> Result<T, E>,
    {
        self.run(CONSTRUCTOR_FAULT_PREFIX, constructor)
    }

    /// Run `action` when no violation was recorded.
    ///
    /// A fault from the action becomes a failure prefixed with
    /// `"An error occurred while executing the action: "`.
    pub fn then<E, F>(self, action: F) -> Outcome
    where
        E: Display,
        F: FnOnce() -> Result<(), E>,
    {
        self.run(ACTION_FAULT_PREFIX, action)
    }

    /// Run a value-producing `action` when no violation was recorded.
    ///
    /// Faults are reported like [`Guard::then`].
    pub fn then_with<T, E, F>(self, action: F) -> Outcome<T>
    where
        E: Display,
        F: FnOnce() -> Result<T, E>,
    {
        self.run(ACTION_FAULT_PREFIX, action)
    }

    fn run<T, E, F>(self, fault_prefix: &str, f: F) -> Outcome<T>
    where
        E: Display,
        F: FnOnce() -> Result<T, E>,
    {
        if let Some(message) = self.into_failure_message() {
            return Outcome::failure(message);
        }
        match f() {
            Ok(value) => Outcome::success(value),
            Err(fault) => Outcome::failure(fault_message(fault_prefix, fault)),
        }
    }

    fn into_failure_message(self) -> Option<String> {
        if self.errors.is_empty() {
            return None;
        }

        #[cfg(feature = "tracing")]
        tracing::debug!(
            violations = self.errors.len(),
            mode = ?self.mode,
            "guard rejected input"
        );

        Some(join_errors(&self.errors))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn test_no_checks_is_success() {
        assert!(Guard::against().to_outcome().is_success());
    }

    #[test]
    fn test_full_mode_collects_in_order() {
        let outcome = Guard::against()
            .predicate(|| true, "first")
            .predicate(|| false, "skipped")
            .null(None::<i32>, "second")
            .to_outcome();
        assert_eq!(outcome.error(), Some("first; second"));
    }

    #[test]
    fn test_short_circuit_never_evaluates_later_checks() {
        let calls = Cell::new(0);
        let guard = Guard::against_with(CheckMode::ShortCircuit)
            .predicate(
                || {
                    calls.set(calls.get() + 1);
                    true
                },
                "first",
            )
            .predicate(
                || {
                    calls.set(calls.get() + 1);
                    true
                },
                "second",
            );

        assert!(guard.should_skip());
        assert_eq!(guard.errors(), ["first".to_string()]);
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn test_full_mode_evaluates_every_check() {
        let calls = Cell::new(0);
        let count = || {
            calls.set(calls.get() + 1);
            true
        };
        let guard = Guard::against()
            .predicate(count, "a")
            .predicate(count, "b")
            .predicate(count, "c");
        assert!(!guard.should_skip());
        assert_eq!(calls.get(), 3);
    }

    #[test]
    fn test_null_accepts_references() {
        let name: Option<String> = Some("x".into());
        assert!(Guard::against()
            .null(name.as_ref(), "missing")
            .to_outcome()
            .is_success());
    }

    #[test]
    fn test_unsatisfied_with_closure_predicate() {
        let even = |n: &i32| n % 2 == 0;
        let outcome = Guard::against()
            .unsatisfied(&3, &even, "must be even")
            .unsatisfied(&4, &even, "never recorded")
            .to_outcome();
        assert_eq!(outcome.error(), Some("must be even"));
    }

    #[test]
    fn test_constructor_not_called_on_violation() {
        let called = Cell::new(false);
        let outcome = Guard::against()
            .predicate(|| true, "invalid")
            .to_outcome_with(|| {
                called.set(true);
                Ok::<_, String>(1)
            });
        assert_eq!(outcome.error(), Some("invalid"));
        assert!(!called.get());
    }

    #[test]
    fn test_constructor_fault_is_prefixed() {
        let outcome: Outcome<i32> =
            Guard::against().to_outcome_with(|| Err("bad format"));
        assert_eq!(
            outcome.error(),
            Some("An error occurred while creating the object: bad format")
        );
    }

    #[test]
    fn test_then_fault_is_prefixed() {
        let outcome = Guard::against().then(|| Err("disk full"));
        assert_eq!(
            outcome.error(),
            Some("An error occurred while executing the action: disk full")
        );

        let outcome = Guard::against().then_with(|| Ok::<_, String>(42));
        assert_eq!(outcome, Outcome::success(42));
    }

    #[test]
    #[should_panic(expected = "without an error message")]
    fn test_empty_message_panics_alongside_other_violations() {
        let _ = Guard::against()
            .predicate(|| true, "")
            .predicate(|| true, "x");
    }

    #[test]
    fn test_empty_message_on_passing_check_is_ignored() {
        let outcome = Guard::against()
            .predicate(|| false, "")
            .predicate(|| true, "x")
            .to_outcome();
        assert_eq!(outcome.errors(), vec!["x".to_string()]);
    }

    #[test]
    fn test_default_mode_is_full() {
        assert_eq!(Guard::default().mode(), CheckMode::Full);
    }
}
