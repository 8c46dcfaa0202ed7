//! Presence-or-absence container for an optional value.
//!
//! `Maybe<T>` mirrors `Option<T>` but speaks the crate's combinator vocabulary
//! (`fold`, `tap`, async variants, conversion into [`Outcome`]). Absence is the
//! only way to represent "no value": a `None` handed to [`Maybe::from`] is
//! normalized to an empty `Maybe`.
//!
//! # Examples
//!
//! ```rust
//! use wrapture::Maybe;
//!
//! fn find_nickname(user_id: u32) -> Maybe<String> {
//!     Maybe::from((user_id == 1).then(|| "ace".to_string()))
//! }
//!
//! assert_eq!(find_nickname(1).value_or("anonymous".into()), "ace");
//! assert_eq!(find_nickname(2).value_or("anonymous".into()), "anonymous");
//!
//! let outcome = find_nickname(2).to_outcome("nickname not set");
//! assert_eq!(outcome.error(), Some("nickname not set"));
//! ```

use std::fmt;
use std::future::Future;

use crate::error::{Error, NO_VALUE_MESSAGE};
use crate::{Either, Outcome};

/// A value of type `T` that may be absent.
///
/// Two absent instances are always equal; present instances compare by `T`.
///
/// # Example
///
/// ```rust
/// use wrapture::Maybe;
///
/// assert_eq!(Maybe::<i32>::none(), Maybe::from(None));
/// assert_eq!(Maybe::some(3), Maybe::from(Some(3)));
/// assert_ne!(Maybe::some(3), Maybe::none());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Maybe<T> {
    inner: Option<T>,
}

impl<T> Maybe<T> {
    // ========== Constructors ==========

    /// An empty `Maybe`.
    #[inline]
    pub fn none() -> Self {
        Maybe { inner: None }
    }

    /// A `Maybe` holding `value`.
    #[inline]
    pub fn some(value: T) -> Self {
        Maybe { inner: Some(value) }
    }

    /// Build from a possibly-missing value; `None` becomes an empty `Maybe`.
    #[inline]
    pub fn from_option(value: Option<T>) -> Self {
        Maybe { inner: value }
    }

    // ========== Predicates & accessors ==========

    /// Returns `true` if a value is present.
    #[inline]
    pub fn has_value(&self) -> bool {
        self.inner.is_some()
    }

    /// Returns `true` if no value is present.
    #[inline]
    pub fn has_no_value(&self) -> bool {
        self.inner.is_none()
    }

    /// Borrow the value.
    ///
    /// # Panics
    ///
    /// Panics with `"Maybe has no value."` when empty.
    #[track_caller]
    pub fn value(&self) -> &T {
        match &self.inner {
            Some(value) => value,
            None => panic!("{}", NO_VALUE_MESSAGE),
        }
    }

    /// Presence flag and payload in one call.
    ///
    /// # Example
    ///
    /// ```rust
    /// use wrapture::Maybe;
    ///
    /// let m = Maybe::some("x");
    /// if let Some(v) = m.try_get() {
    ///     assert_eq!(*v, "x");
    /// }
    /// assert!(Maybe::<&str>::none().try_get().is_none());
    /// ```
    #[inline]
    pub fn try_get(&self) -> Option<&T> {
        self.inner.as_ref()
    }

    /// The value, or `T::default()` when empty.
    #[inline]
    pub fn value_or_default(self) -> T
    where
        T: Default,
    {
        self.inner.unwrap_or_default()
    }

    /// The value, or `fallback` when empty.
    #[inline]
    pub fn value_or(self, fallback: T) -> T {
        self.inner.unwrap_or(fallback)
    }

    /// First-present-wins: `self` if it holds a value, otherwise `alternative`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use wrapture::Maybe;
    ///
    /// assert_eq!(Maybe::none().or(Maybe::some(2)), Maybe::some(2));
    /// assert_eq!(Maybe::some(1).or(Maybe::some(2)), Maybe::some(1));
    /// ```
    #[inline]
    pub fn or(self, alternative: Maybe<T>) -> Maybe<T> {
        if self.has_value() {
            self
        } else {
            alternative
        }
    }

    /// The value, or [`Error::NoValue`] with the default message.
    #[inline]
    pub fn require(self) -> Result<T, Error> {
        self.require_with(NO_VALUE_MESSAGE)
    }

    /// The value, or [`Error::NoValue`] carrying `message`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use wrapture::{Error, Maybe};
    ///
    /// let err = Maybe::<u8>::none().require_with("port missing").unwrap_err();
    /// assert_eq!(err, Error::NoValue("port missing".to_string()));
    /// ```
    pub fn require_with(self, message: impl Into<String>) -> Result<T, Error> {
        self.inner.ok_or_else(|| Error::NoValue(message.into()))
    }

    /// The value, or the caller-supplied `fault` when empty.
    #[inline]
    pub fn ok_or<E>(self, fault: E) -> Result<T, E> {
        self.inner.ok_or(fault)
    }

    /// The value, or a fault built lazily by `f` when empty.
    #[inline]
    pub fn ok_or_else<E, F>(self, f: F) -> Result<T, E>
    where
        F: FnOnce() -> E,
    {
        self.inner.ok_or_else(f)
    }

    /// Run `action` with the value if present. Returns `self`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use wrapture::Maybe;
    ///
    /// let mut log = Vec::new();
    /// Maybe::some(7)
    ///     .execute(|v| log.push(format!("value {}", v)))
    ///     .execute_no_value(|| unreachable!());
    /// assert_eq!(log, vec!["value 7"]);
    /// ```
    pub fn execute<F>(self, action: F) -> Self
    where
        F: FnOnce(&T),
    {
        if let Some(value) = &self.inner {
            action(value);
        }
        self
    }

    /// Run `action` if no value is present. Returns `self`.
    pub fn execute_no_value<F>(self, action: F) -> Self
    where
        F: FnOnce(),
    {
        if self.inner.is_none() {
            action();
        }
        self
    }

    // ========== Combinators ==========

    /// Eliminate the maybe: exactly one of the two functions runs.
    #[inline]
    pub fn fold<R, S, N>(self, on_some: S, on_none: N) -> R
    where
        S: FnOnce(T) -> R,
        N: FnOnce() -> R,
    {
        match self.inner {
            Some(value) => on_some(value),
            None => on_none(),
        }
    }

    /// Transform the value if present.
    #[inline]
    pub fn map<U, F>(self, f: F) -> Maybe<U>
    where
        F: FnOnce(T) -> U,
    {
        Maybe {
            inner: self.inner.map(f),
        }
    }

    /// Chain a computation that may itself produce no value.
    ///
    /// # Example
    ///
    /// ```rust
    /// use wrapture::Maybe;
    ///
    /// let first_char = |s: String| Maybe::from(s.chars().next());
    /// assert_eq!(Maybe::some("hey".to_string()).and_then(first_char), Maybe::some('h'));
    /// assert_eq!(Maybe::some(String::new()).and_then(first_char), Maybe::none());
    /// ```
    #[inline]
    pub fn and_then<U, F>(self, f: F) -> Maybe<U>
    where
        F: FnOnce(T) -> Maybe<U>,
    {
        match self.inner {
            Some(value) => f(value),
            None => Maybe::none(),
        }
    }

    /// Observe the maybe without changing it.
    pub fn tap<S, N>(self, on_some: S, on_none: N) -> Self
    where
        S: FnOnce(&T),
        N: FnOnce(),
    {
        match &self.inner {
            Some(value) => on_some(value),
            None => on_none(),
        }
        self
    }

    /// Async form of [`Maybe::fold`].
    pub async fn fold_async<R, S, SFut, N, NFut>(self, on_some: S, on_none: N) -> R
    where
        S: FnOnce(T) -> SFut,
        SFut: Future<Output = R>,
        N: FnOnce() -> NFut,
        NFut: Future<Output = R>,
    {
        match self.inner {
            Some(value) => on_some(value).await,
            None => on_none().await,
        }
    }

    /// Async form of [`Maybe::map`]. `f` is never called when empty.
    ///
    /// # Example
    ///
    /// ```rust
    /// use wrapture::Maybe;
    ///
    /// # tokio_test::block_on(async {
    /// let m = Maybe::some(4).map_async(|x| async move { x + 1 }).await;
    /// assert_eq!(m, Maybe::some(5));
    /// # });
    /// ```
    pub async fn map_async<U, F, Fut>(self, f: F) -> Maybe<U>
    where
        F: FnOnce(T) -> Fut,
        Fut: Future<Output = U>,
    {
        match self.inner {
            Some(value) => Maybe::some(f(value).await),
            None => Maybe::none(),
        }
    }

    /// Async form of [`Maybe::and_then`].
    pub async fn and_then_async<U, F, Fut>(self, f: F) -> Maybe<U>
    where
        F: FnOnce(T) -> Fut,
        Fut: Future<Output = Maybe<U>>,
    {
        match self.inner {
            Some(value) => f(value).await,
            None => Maybe::none(),
        }
    }

    /// Async form of [`Maybe::tap`].
    pub async fn tap_async<S, SFut, N, NFut>(self, on_some: S, on_none: N) -> Self
    where
        S: FnOnce(&T) -> SFut,
        SFut: Future<Output = ()>,
        N: FnOnce() -> NFut,
        NFut: Future<Output = ()>,
    {
        match &self.inner {
            Some(value) => on_some(value).await,
            None => on_none().await,
        }
        self
    }

    // ========== Conversions ==========

    /// Convert into an [`Outcome`], failing with `error_if_none` when empty.
    pub fn to_outcome(self, error_if_none: impl Into<String>) -> Outcome<T> {
        match self.inner {
            Some(value) => Outcome::success(value),
            None => Outcome::failure(error_if_none),
        }
    }

    /// Like [`Maybe::to_outcome`], building the message only when needed.
    pub fn to_outcome_with<F>(self, error_if_none: F) -> Outcome<T>
    where
        F: FnOnce() -> String,
    {
        match self.inner {
            Some(value) => Outcome::success(value),
            None => Outcome::failure(error_if_none()),
        }
    }

    /// Convert into an [`Either`], with `left` standing in for absence.
    pub fn to_either<L>(self, left: L) -> Either<L, T> {
        match self.inner {
            Some(value) => Either::Right(value),
            None => Either::Left(left),
        }
    }

    /// Convert into a standard `Option`.
    #[inline]
    pub fn into_option(self) -> Option<T> {
        self.inner
    }
}

// ========== Trait Implementations ==========

impl<T> Default for Maybe<T> {
    /// Returns an empty `Maybe`.
    fn default() -> Self {
        Maybe::none()
    }
}

impl<T> From<Option<T>> for Maybe<T> {
    fn from(value: Option<T>) -> Self {
        Maybe::from_option(value)
    }
}

impl<T> From<Maybe<T>> for Option<T> {
    fn from(maybe: Maybe<T>) -> Self {
        maybe.inner
    }
}

impl<T: fmt::Debug> fmt::Debug for Maybe<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.inner {
            Some(value) => f.debug_tuple("Some").field(value).finish(),
            None => f.write_str("None"),
        }
    }
}

/// The value itself, or `"No value"` when empty.
impl<T: fmt::Display> fmt::Display for Maybe<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.inner {
            Some(value) => fmt::Display::fmt(value, f),
            None => f.write_str("No value"),
        }
    }
}

impl<T> IntoIterator for Maybe<T> {
    type Item = T;
    type IntoIter = std::option::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.inner.into_iter()
    }
}
