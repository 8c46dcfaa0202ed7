//! Success-or-failure container carrying a value or an error message.
//!
//! `Outcome<T>` is the convergence point of the crate: [`Maybe`], [`Either`] and
//! [`Guard`](crate::Guard) all materialize into it. A failure always carries a
//! non-empty message; several violations can be packed into one message with
//! `"; "` and recovered with [`Outcome::errors`].
//!
//! # Fault boundary
//!
//! User functions that can fail return `std::result::Result<_, E>` with
//! `E: Display`. [`Outcome::of`], [`Outcome::try_map`] and [`Outcome::then`]
//! turn an `Err` into a failure carrying the error's message. Panics are the
//! fatal channel and are never caught.
//!
//! # Examples
//!
//! ```rust
//! use wrapture::Outcome;
//!
//! fn parse_port(raw: &str) -> Outcome<u16> {
//!     Outcome::of(|| raw.parse::<u16>())
//! }
//!
//! let port = parse_port("8080").map(|p| p + 1);
//! assert_eq!(port.value(), &8081);
//!
//! let bad = parse_port("eighty").map(|p| p + 1);
//! assert_eq!(bad.error(), Some("invalid digit found in string"));
//! ```

use std::fmt;
use std::future::Future;

use crate::error::{
    fault_message, Error, ACTION_FAULT_PREFIX, DEFAULT_ERROR_DELIMITER, EMPTY_FAILURE_PANIC,
};
use crate::{Either, Maybe};

/// The result of an operation: a value of type `T`, or a non-empty error message.
///
/// `Outcome<()>` (the default) is used for operations that produce no value.
///
/// # Example
///
/// ```rust
/// use wrapture::Outcome;
///
/// let saved: Outcome = Outcome::ok();
/// assert!(saved.is_success());
///
/// let loaded: Outcome<String> = Outcome::failure("record not found");
/// assert_eq!(loaded.to_string(), "Failure(record not found)");
/// ```
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Outcome<T = ()> {
    repr: Repr<T>,
}

#[derive(Clone, PartialEq, Eq, Hash)]
enum Repr<T> {
    Success(T),
    Failure(String),
}

impl Outcome<()> {
    /// A successful outcome with no value.
    #[inline]
    pub fn ok() -> Self {
        Outcome::success(())
    }
}

impl<T> Outcome<T> {
    // ========== Constructors ==========

    /// Create a successful outcome holding `value`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use wrapture::Outcome;
    ///
    /// let o = Outcome::success(42);
    /// assert_eq!(o.value(), &42);
    /// ```
    #[inline]
    pub fn success(value: T) -> Self {
        Outcome {
            repr: Repr::Success(value),
        }
    }

    /// Create a failed outcome.
    ///
    /// # Panics
    ///
    /// Panics if `error` is empty. A failure without a message is a programming
    /// error, not a representable state.
    ///
    /// # Example
    ///
    /// ```rust
    /// use wrapture::Outcome;
    ///
    /// let o = Outcome::<i32>::failure("out of stock");
    /// assert!(o.is_failure());
    /// assert_eq!(o.error(), Some("out of stock"));
    /// ```
    #[track_caller]
    pub fn failure(error: impl Into<String>) -> Self {
        let error = error.into();
        if error.is_empty() {
            panic!("{}", EMPTY_FAILURE_PANIC);
        }
        Outcome {
            repr: Repr::Failure(error),
        }
    }

    /// Explicit conversion of a plain value into a successful outcome.
    #[inline]
    pub fn from_value(value: T) -> Self {
        Outcome::success(value)
    }

    /// Succeed with `value` when `condition` holds, otherwise fail with `error_if_false`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use wrapture::Outcome;
    ///
    /// let age = 17;
    /// let o = Outcome::success_if(age >= 18, age, "must be an adult");
    /// assert_eq!(o.error(), Some("must be an adult"));
    /// ```
    pub fn success_if(condition: bool, value: T, error_if_false: impl Into<String>) -> Self {
        if condition {
            Outcome::success(value)
        } else {
            Outcome::failure(error_if_false)
        }
    }

    /// Fail with `error_if_true` when `condition` holds, otherwise succeed with `value`.
    pub fn failure_if(condition: bool, value: T, error_if_true: impl Into<String>) -> Self {
        if condition {
            Outcome::failure(error_if_true)
        } else {
            Outcome::success(value)
        }
    }

    /// Run a fallible computation, converting an `Err` into a failure.
    ///
    /// This is the fault boundary of the crate.
    ///
    /// # Example
    ///
    /// ```rust
    /// use wrapture::Outcome;
    ///
    /// let ok = Outcome::of(|| "7".parse::<i32>());
    /// assert_eq!(ok, Outcome::success(7));
    ///
    /// let err = Outcome::of(|| "x".parse::<i32>());
    /// assert!(err.is_failure());
    /// ```
    pub fn of<E, F>(f: F) -> Self
    where
        E: fmt::Display,
        F: FnOnce() -> Result<T, E>,
    {
        match f() {
            Ok(value) => Outcome::success(value),
            Err(fault) => Outcome::failure(fault_message("", fault)),
        }
    }

    /// Async form of [`Outcome::of`]: awaits the computation, then converts.
    ///
    /// # Example
    ///
    /// ```rust
    /// use wrapture::Outcome;
    ///
    /// # tokio_test::block_on(async {
    /// let o = Outcome::of_async(|| async { Err::<i32, _>("timed out") }).await;
    /// assert_eq!(o.error(), Some("timed out"));
    /// # });
    /// ```
    pub async fn of_async<E, F, Fut>(f: F) -> Self
    where
        E: fmt::Display,
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<T, E>>,
    {
        match f().await {
            Ok(value) => Outcome::success(value),
            Err(fault) => Outcome::failure(fault_message("", fault)),
        }
    }

    // ========== Predicates & accessors ==========

    /// Returns `true` if this outcome is a success.
    #[inline]
    pub fn is_success(&self) -> bool {
        matches!(self.repr, Repr::Success(_))
    }

    /// Returns `true` if this outcome is a failure.
    #[inline]
    pub fn is_failure(&self) -> bool {
        !self.is_success()
    }

    /// The error message, if this is a failure.
    #[inline]
    pub fn error(&self) -> Option<&str> {
        match &self.repr {
            Repr::Success(_) => None,
            Repr::Failure(error) => Some(error),
        }
    }

    /// Borrow the success value.
    ///
    /// # Panics
    ///
    /// Panics if the outcome is a failure. Use [`Outcome::as_value`] or
    /// [`Outcome::into_value`] when failure is expected.
    #[track_caller]
    pub fn value(&self) -> &T {
        match &self.repr {
            Repr::Success(value) => value,
            Repr::Failure(error) => {
                panic!("cannot access the value of a failed outcome: {}", error)
            }
        }
    }

    /// Borrow the success value, if any.
    #[inline]
    pub fn as_value(&self) -> Option<&T> {
        match &self.repr {
            Repr::Success(value) => Some(value),
            Repr::Failure(_) => None,
        }
    }

    /// Extract the value, reporting a failure as [`Error::Failure`].
    ///
    /// # Example
    ///
    /// ```rust
    /// use wrapture::{Error, Outcome};
    ///
    /// assert_eq!(Outcome::success(3).into_value(), Ok(3));
    /// assert_eq!(
    ///     Outcome::<i32>::failure("nope").into_value(),
    ///     Err(Error::Failure("nope".to_string()))
    /// );
    /// ```
    pub fn into_value(self) -> Result<T, Error> {
        match self.repr {
            Repr::Success(value) => Ok(value),
            Repr::Failure(error) => Err(Error::Failure(error)),
        }
    }

    /// View as a standard `Result` of references.
    #[inline]
    pub fn as_result(&self) -> Result<&T, &str> {
        match &self.repr {
            Repr::Success(value) => Ok(value),
            Repr::Failure(error) => Err(error),
        }
    }

    /// Convert into a standard `Result`.
    #[inline]
    pub fn into_result(self) -> Result<T, String> {
        match self.repr {
            Repr::Success(value) => Ok(value),
            Repr::Failure(error) => Err(error),
        }
    }

    /// Convert into a [`Maybe`], dropping the error message.
    #[inline]
    pub fn into_maybe(self) -> Maybe<T> {
        self.fold(Maybe::some, |_| Maybe::none())
    }

    /// Convert into an [`Either`] with the error message on the left.
    #[inline]
    pub fn into_either(self) -> Either<String, T> {
        self.fold(Either::Right, Either::Left)
    }

    // ========== Combinators ==========

    /// Eliminate the outcome: exactly one of the two functions runs, exactly once.
    ///
    /// # Example
    ///
    /// ```rust
    /// use wrapture::Outcome;
    ///
    /// let text = Outcome::success(2).fold(|n| format!("got {}", n), |e| e);
    /// assert_eq!(text, "got 2");
    /// ```
    #[inline]
    pub fn fold<R, S, F>(self, on_success: S, on_failure: F) -> R
    where
        S: FnOnce(T) -> R,
        F: FnOnce(String) -> R,
    {
        match self.repr {
            Repr::Success(value) => on_success(value),
            Repr::Failure(error) => on_failure(error),
        }
    }

    /// Transform the success value; failures pass through untouched.
    ///
    /// # Example
    ///
    /// ```rust
    /// use wrapture::Outcome;
    ///
    /// assert_eq!(Outcome::success(21).map(|x| x * 2), Outcome::success(42));
    ///
    /// let failed = Outcome::<i32>::failure("e").map(|x| x * 2);
    /// assert_eq!(failed.error(), Some("e"));
    /// ```
    #[inline]
    pub fn map<U, F>(self, f: F) -> Outcome<U>
    where
        F: FnOnce(T) -> U,
    {
        match self.repr {
            Repr::Success(value) => Outcome::success(f(value)),
            Repr::Failure(error) => Outcome::failure_unchecked(error),
        }
    }

    /// Transform the success value with a fallible function.
    ///
    /// An `Err` returned by `f` becomes a failure carrying its message.
    ///
    /// # Example
    ///
    /// ```rust
    /// use wrapture::Outcome;
    ///
    /// let o = Outcome::success("12x").try_map(|s| s.parse::<i32>());
    /// assert_eq!(o.error(), Some("invalid digit found in string"));
    /// ```
    pub fn try_map<U, E, F>(self, f: F) -> Outcome<U>
    where
        E: fmt::Display,
        F: FnOnce(T) -> Result<U, E>,
    {
        match self.repr {
            Repr::Success(value) => match f(value) {
                Ok(mapped) => Outcome::success(mapped),
                Err(fault) => Outcome::failure(fault_message("", fault)),
            },
            Repr::Failure(error) => Outcome::failure_unchecked(error),
        }
    }

    /// Chain a dependent operation that can itself fail.
    ///
    /// # Example
    ///
    /// ```rust
    /// use wrapture::Outcome;
    ///
    /// fn half(n: i32) -> Outcome<i32> {
    ///     Outcome::success_if(n % 2 == 0, n / 2, "odd number")
    /// }
    ///
    /// assert_eq!(Outcome::success(8).and_then(half).and_then(half), Outcome::success(2));
    /// assert_eq!(Outcome::success(6).and_then(half).and_then(half).error(), Some("odd number"));
    /// ```
    #[inline]
    pub fn and_then<U, F>(self, f: F) -> Outcome<U>
    where
        F: FnOnce(T) -> Outcome<U>,
    {
        match self.repr {
            Repr::Success(value) => f(value),
            Repr::Failure(error) => Outcome::failure_unchecked(error),
        }
    }

    /// Observe the outcome without changing it.
    ///
    /// # Example
    ///
    /// ```rust
    /// use wrapture::Outcome;
    ///
    /// let mut seen = Vec::new();
    /// let o = Outcome::<i32>::failure("late").tap(|_| {}, |e| seen.push(e.to_string()));
    /// assert_eq!(seen, vec!["late"]);
    /// assert!(o.is_failure());
    /// ```
    pub fn tap<S, F>(self, on_success: S, on_failure: F) -> Self
    where
        S: FnOnce(&T),
        F: FnOnce(&str),
    {
        match &self.repr {
            Repr::Success(value) => on_success(value),
            Repr::Failure(error) => on_failure(error),
        }
        self
    }

    /// Run a fallible side effect on success, keeping the value.
    ///
    /// A fault raised by `action` replaces the outcome with a failure
    /// prefixed by `"An error occurred while executing the action: "`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use wrapture::Outcome;
    ///
    /// let o = Outcome::success(5).then(|_| Err::<(), _>("queue closed"));
    /// assert_eq!(
    ///     o.error(),
    ///     Some("An error occurred while executing the action: queue closed")
    /// );
    /// ```
    pub fn then<E, F>(self, action: F) -> Self
    where
        E: fmt::Display,
        F: FnOnce(&T) -> Result<(), E>,
    {
        let fault = match &self.repr {
            Repr::Success(value) => action(value).err(),
            Repr::Failure(_) => None,
        };
        match fault {
            Some(fault) => Outcome::failure(fault_message(ACTION_FAULT_PREFIX, fault)),
            None => self,
        }
    }

    // ========== Async combinators ==========

    /// Async form of [`Outcome::map`]. `f` is never called on a failure.
    ///
    /// # Example
    ///
    /// ```rust
    /// use wrapture::Outcome;
    ///
    /// # tokio_test::block_on(async {
    /// let o = Outcome::success(2).map_async(|x| async move { x * 10 }).await;
    /// assert_eq!(o, Outcome::success(20));
    /// # });
    /// ```
    pub async fn map_async<U, F, Fut>(self, f: F) -> Outcome<U>
    where
        F: FnOnce(T) -> Fut,
        Fut: Future<Output = U>,
    {
        match self.repr {
            Repr::Success(value) => Outcome::success(f(value).await),
            Repr::Failure(error) => Outcome::failure_unchecked(error),
        }
    }

    /// Async form of [`Outcome::try_map`].
    pub async fn try_map_async<U, E, F, Fut>(self, f: F) -> Outcome<U>
    where
        E: fmt::Display,
        F: FnOnce(T) -> Fut,
        Fut: Future<Output = Result<U, E>>,
    {
        match self.repr {
            Repr::Success(value) => match f(value).await {
                Ok(mapped) => Outcome::success(mapped),
                Err(fault) => Outcome::failure(fault_message("", fault)),
            },
            Repr::Failure(error) => Outcome::failure_unchecked(error),
        }
    }

    /// Async form of [`Outcome::and_then`].
    pub async fn and_then_async<U, F, Fut>(self, f: F) -> Outcome<U>
    where
        F: FnOnce(T) -> Fut,
        Fut: Future<Output = Outcome<U>>,
    {
        match self.repr {
            Repr::Success(value) => f(value).await,
            Repr::Failure(error) => Outcome::failure_unchecked(error),
        }
    }

    /// Async form of [`Outcome::fold`].
    pub async fn fold_async<R, S, SFut, F, FFut>(self, on_success: S, on_failure: F) -> R
    where
        S: FnOnce(T) -> SFut,
        SFut: Future<Output = R>,
        F: FnOnce(String) -> FFut,
        FFut: Future<Output = R>,
    {
        match self.repr {
            Repr::Success(value) => on_success(value).await,
            Repr::Failure(error) => on_failure(error).await,
        }
    }

    /// Async form of [`Outcome::tap`].
    pub async fn tap_async<S, SFut, F, FFut>(self, on_success: S, on_failure: F) -> Self
    where
        S: FnOnce(&T) -> SFut,
        SFut: Future<Output = ()>,
        F: FnOnce(&str) -> FFut,
        FFut: Future<Output = ()>,
    {
        match &self.repr {
            Repr::Success(value) => on_success(value).await,
            Repr::Failure(error) => on_failure(error).await,
        }
        self
    }

    /// Async form of [`Outcome::then`].
    pub async fn then_async<E, F, Fut>(self, action: F) -> Self
    where
        E: fmt::Display,
        F: FnOnce(&T) -> Fut,
        Fut: Future<Output = Result<(), E>>,
    {
        let fault = match &self.repr {
            Repr::Success(value) => action(value).await.err(),
            Repr::Failure(_) => None,
        };
        match fault {
            Some(fault) => Outcome::failure(fault_message(ACTION_FAULT_PREFIX, fault)),
            None => self,
        }
    }

    // ========== Error messages ==========

    /// Split the error message on `';'`.
    ///
    /// Messages produced by a [`Guard`](crate::Guard) are joined with `"; "`,
    /// so every entry after the first keeps its leading space. A success yields
    /// an empty list.
    ///
    /// # Example
    ///
    /// ```rust
    /// use wrapture::Outcome;
    ///
    /// let o = Outcome::<()>::failure("A;B;C");
    /// assert_eq!(o.errors(), vec!["A", "B", "C"]);
    ///
    /// let joined = Outcome::<()>::failure("A; B");
    /// assert_eq!(joined.errors(), vec!["A", " B"]);
    /// ```
    pub fn errors(&self) -> Vec<String> {
        self.errors_split_on(DEFAULT_ERROR_DELIMITER)
    }

    /// Split the error message on `delimiter`.
    pub fn errors_split_on(&self, delimiter: char) -> Vec<String> {
        match &self.repr {
            Repr::Success(_) => Vec::new(),
            Repr::Failure(error) => error.split(delimiter).map(str::to_string).collect(),
        }
    }

    // Propagates an already-validated message.
    #[inline]
    fn failure_unchecked(error: String) -> Self {
        Outcome {
            repr: Repr::Failure(error),
        }
    }
}

// ========== Trait Implementations ==========

impl<T: fmt::Debug> fmt::Debug for Outcome<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.repr {
            Repr::Success(value) => f.debug_tuple("Success").field(value).finish(),
            Repr::Failure(error) => f.debug_tuple("Failure").field(error).finish(),
        }
    }
}

/// `Success(<value>)`, `Success` for a unit outcome, or `Failure(<error>)`.
///
/// The value is rendered with `Debug`, so strings appear quoted.
impl<T: fmt::Debug> fmt::Display for Outcome<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.repr {
            Repr::Success(value) => {
                let rendered = format!("{:?}", value);
                if rendered == "()" {
                    write!(f, "Success")
                } else {
                    write!(f, "Success({})", rendered)
                }
            }
            Repr::Failure(error) => write!(f, "Failure({})", error),
        }
    }
}

impl<T, E: fmt::Display> From<Result<T, E>> for Outcome<T> {
    fn from(result: Result<T, E>) -> Self {
        Outcome::of(|| result)
    }
}
