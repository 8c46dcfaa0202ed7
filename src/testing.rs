//! Test helpers for code built on wrapture.
//!
//! Assertion macros print the failure message or success value on mismatch,
//! which plain `assert!(outcome.is_success())` does not. With the `proptest`
//! feature enabled, [`Outcome`](crate::Outcome), [`Maybe`](crate::Maybe) and
//! [`Either`](crate::Either) also implement `proptest::arbitrary::Arbitrary`.
//!
//! # Example
//!
//! ```rust
//! use wrapture::{assert_failure, assert_failure_message, assert_success, Outcome};
//!
//! assert_success!(Outcome::success(42));
//! assert_failure!(Outcome::<i32>::failure("boom"));
//! assert_failure_message!(Outcome::<i32>::failure("boom"), "boom");
//! ```

/// Assert that an outcome is a success.
///
/// # Example
///
/// ```rust
/// use wrapture::{assert_success, Outcome};
///
/// assert_success!(Outcome::ok());
/// ```
#[macro_export]
macro_rules! assert_success {
    ($outcome:expr) => {
        if let ::std::result::Result::Err(error) = $crate::Outcome::as_result(&$outcome) {
            panic!("Expected Success, got Failure: {}", error);
        }
    };
}

/// Assert that an outcome is a failure.
///
/// # Example
///
/// ```rust
/// use wrapture::{assert_failure, Outcome};
///
/// assert_failure!(Outcome::<u8>::failure("nope"));
/// ```
#[macro_export]
macro_rules! assert_failure {
    ($outcome:expr) => {
        if let ::std::result::Result::Ok(value) = $crate::Outcome::as_result(&$outcome) {
            panic!("Expected Failure, got Success: {:?}", value);
        }
    };
}

/// Assert that an outcome is a failure carrying exactly `expected`.
///
/// # Example
///
/// ```rust
/// use wrapture::{assert_failure_message, Guard};
///
/// let outcome = Guard::against()
///     .null_or_empty(None, "a")
///     .null_or_empty(Some(""), "b")
///     .to_outcome();
/// assert_failure_message!(outcome, "a; b");
/// ```
#[macro_export]
macro_rules! assert_failure_message {
    ($outcome:expr, $expected:expr) => {
        match $crate::Outcome::as_result(&$outcome) {
            ::std::result::Result::Err(error) => {
                assert_eq!(error, $expected);
            }
            ::std::result::Result::Ok(value) => {
                panic!(
                    "Expected Failure with message {:?}, got Success: {:?}",
                    $expected, value
                );
            }
        }
    };
}

#[cfg(feature = "proptest")]
mod arbitrary {
    use proptest::prelude::*;

    use crate::{Either, Maybe, Outcome};

    /// Failure messages are short, never empty, and sometimes carry several
    /// `"; "`-joined parts.
    fn failure_message() -> impl Strategy<Value = String> {
        "[A-Za-z][A-Za-z ]{0,15}(; [A-Za-z][A-Za-z ]{0,15}){0,2}"
    }

    impl<T> Arbitrary for Outcome<T>
    where
        T: Arbitrary + 'static,
    {
        type Parameters = T::Parameters;
        type Strategy = BoxedStrategy<Self>;

        fn arbitrary_with(args: Self::Parameters) -> Self::Strategy {
            prop_oneof![
                any_with::<T>(args).prop_map(Outcome::success),
                failure_message().prop_map(Outcome::failure),
            ]
            .boxed()
        }
    }

    impl<T> Arbitrary for Maybe<T>
    where
        T: Arbitrary + 'static,
    {
        type Parameters = T::Parameters;
        type Strategy = BoxedStrategy<Self>;

        fn arbitrary_with(args: Self::Parameters) -> Self::Strategy {
            proptest::option::of(any_with::<T>(args))
                .prop_map(Maybe::from)
                .boxed()
        }
    }

    impl<L, R> Arbitrary for Either<L, R>
    where
        L: Arbitrary + 'static,
        R: Arbitrary + 'static,
    {
        type Parameters = (L::Parameters, R::Parameters);
        type Strategy = BoxedStrategy<Self>;

        fn arbitrary_with(args: Self::Parameters) -> Self::Strategy {
            let (left, right) = args;
            prop_oneof![
                any_with::<L>(left).prop_map(Either::left),
                any_with::<R>(right).prop_map(Either::right),
            ]
            .boxed()
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::Outcome;

    #[test]
    fn assert_success_macro() {
        assert_success!(Outcome::success("fine"));
    }

    #[test]
    fn assert_failure_macro() {
        let outcome = Outcome::<i32>::failure("broken");
        assert_failure!(outcome);
        assert!(outcome.is_failure());
    }

    #[test]
    #[should_panic(expected = "Expected Success, got Failure: broken")]
    fn assert_success_panics_on_failure() {
        assert_success!(Outcome::<i32>::failure("broken"));
    }

    #[test]
    #[should_panic(expected = "Expected Failure, got Success: 42")]
    fn assert_failure_panics_on_success() {
        assert_failure!(Outcome::success(42));
    }

    #[test]
    #[should_panic(expected = "Expected Failure with message")]
    fn assert_failure_message_panics_on_success() {
        assert_failure_message!(Outcome::success(1), "anything");
    }

    #[cfg(feature = "proptest")]
    mod proptest_tests {
        use crate::{Either, Maybe, Outcome};
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn arbitrary_failures_carry_a_message(outcome in any::<Outcome<i32>>()) {
                if outcome.is_failure() {
                    prop_assert!(!outcome.error().unwrap_or_default().is_empty());
                }
            }

            #[test]
            fn arbitrary_maybe_matches_option(m in any::<Maybe<u8>>()) {
                prop_assert_eq!(m.has_value(), m.try_get().is_some());
            }

            #[test]
            fn arbitrary_either_is_one_side(e in any::<Either<u8, bool>>()) {
                prop_assert!(e.is_left() != e.is_right());
            }
        }
    }
}
