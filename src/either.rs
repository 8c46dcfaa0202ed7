//! A disjoint union of a `Left` and a `Right` value.
//!
//! # Right-Biased Convention
//!
//! `Either` is "right-biased": `map`, `and_then`, `tap` and their async
//! variants act on `Right`, the success branch. A `Left` (the error or alternate
//! branch) always short-circuits, and the functions given for the right branch
//! are never invoked for it.
//!
//! There is no implicit relationship with [`Outcome`] or [`Maybe`]; crossing over
//! is always an explicit call such as [`Either::to_outcome`].
//!
//! # Examples
//!
//! ```rust
//! use wrapture::Either;
//!
//! #[derive(Debug)]
//! enum LookupError {
//!     Missing(u32),
//! }
//!
//! fn lookup(id: u32) -> Either<LookupError, &'static str> {
//!     if id == 1 {
//!         Either::right("alice")
//!     } else {
//!         Either::left(LookupError::Missing(id))
//!     }
//! }
//!
//! let greeting = lookup(1).map(|name| format!("hello {}", name));
//! assert_eq!(greeting.into_right(), Some("hello alice".to_string()));
//!
//! let outcome = lookup(9).to_outcome(|e| format!("{:?}", e));
//! assert_eq!(outcome.error(), Some("Missing(9)"));
//! ```

use std::future::Future;

use crate::{Maybe, Outcome};

/// A value that is either `Left(L)` or `Right(R)`.
///
/// # Example
///
/// ```rust
/// use wrapture::Either;
///
/// let left: Either<&str, i32> = Either::left("no");
/// let right: Either<&str, i32> = Either::right(2);
///
/// assert_eq!(left.fold(|l| l.len() as i32, |r| r), 2);
/// assert_eq!(right.fold(|l| l.len() as i32, |r| r * 10), 20);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Either<L, R> {
    /// The left (alternate) variant
    Left(L),
    /// The right (success) variant
    Right(R),
}

impl<L, R> Either<L, R> {
    // ========== Constructors ==========

    /// Create a Left value.
    #[inline]
    pub fn left(value: L) -> Self {
        Either::Left(value)
    }

    /// Create a Right value.
    #[inline]
    pub fn right(value: R) -> Self {
        Either::Right(value)
    }

    // ========== Predicates ==========

    /// Returns `true` if this is a `Left` value.
    #[inline]
    pub fn is_left(&self) -> bool {
        matches!(self, Either::Left(_))
    }

    /// Returns `true` if this is a `Right` value.
    #[inline]
    pub fn is_right(&self) -> bool {
        matches!(self, Either::Right(_))
    }

    // ========== Extractors ==========

    /// Returns the left value if present, consuming self.
    #[inline]
    pub fn into_left(self) -> Option<L> {
        match self {
            Either::Left(l) => Some(l),
            Either::Right(_) => None,
        }
    }

    /// Returns the right value if present, consuming self.
    #[inline]
    pub fn into_right(self) -> Option<R> {
        match self {
            Either::Left(_) => None,
            Either::Right(r) => Some(r),
        }
    }

    /// Returns the left value.
    ///
    /// # Panics
    ///
    /// Panics if this is a `Right` value.
    #[track_caller]
    pub fn unwrap_left(self) -> L {
        match self {
            Either::Left(l) => l,
            Either::Right(_) => panic!("called `Either::unwrap_left()` on a `Right` value"),
        }
    }

    /// Returns the right value.
    ///
    /// # Panics
    ///
    /// Panics if this is a `Left` value.
    #[track_caller]
    pub fn unwrap_right(self) -> R {
        match self {
            Either::Left(_) => panic!("called `Either::unwrap_right()` on a `Left` value"),
            Either::Right(r) => r,
        }
    }

    /// Convert to `Either<&L, &R>`.
    #[inline]
    pub fn as_ref(&self) -> Either<&L, &R> {
        match self {
            Either::Left(l) => Either::Left(l),
            Either::Right(r) => Either::Right(r),
        }
    }

    // ========== Elimination ==========

    /// Fold both variants into a single value.
    ///
    /// Exactly one of the two functions is invoked, exactly once.
    #[inline]
    pub fn fold<T, F, G>(self, on_left: F, on_right: G) -> T
    where
        F: FnOnce(L) -> T,
        G: FnOnce(R) -> T,
    {
        match self {
            Either::Left(l) => on_left(l),
            Either::Right(r) => on_right(r),
        }
    }

    // ========== Transformations (Right-Biased) ==========

    /// Transform the right value, passing left values through unchanged.
    ///
    /// # Example
    ///
    /// ```rust
    /// use wrapture::Either;
    ///
    /// let e: Either<&str, i32> = Either::right(21);
    /// assert_eq!(e.map(|x| x * 2), Either::right(42));
    ///
    /// let e: Either<&str, i32> = Either::left("stop");
    /// assert_eq!(e.map(|x| x * 2), Either::left("stop"));
    /// ```
    #[inline]
    pub fn map<R2, F>(self, f: F) -> Either<L, R2>
    where
        F: FnOnce(R) -> R2,
    {
        match self {
            Either::Left(l) => Either::Left(l),
            Either::Right(r) => Either::Right(f(r)),
        }
    }

    /// Transform the left value, passing right values through unchanged.
    #[inline]
    pub fn map_left<L2, F>(self, f: F) -> Either<L2, R>
    where
        F: FnOnce(L) -> L2,
    {
        match self {
            Either::Left(l) => Either::Left(f(l)),
            Either::Right(r) => Either::Right(r),
        }
    }

    /// Chain a computation on the right value (right-biased bind).
    ///
    /// # Example
    ///
    /// ```rust
    /// use wrapture::Either;
    ///
    /// let checked = |x: i32| {
    ///     if x > 0 { Either::right(x) } else { Either::left("not positive") }
    /// };
    ///
    /// assert_eq!(Either::<&str, i32>::right(3).and_then(checked), Either::right(3));
    /// assert_eq!(Either::<&str, i32>::right(-3).and_then(checked), Either::left("not positive"));
    /// ```
    #[inline]
    pub fn and_then<R2, F>(self, f: F) -> Either<L, R2>
    where
        F: FnOnce(R) -> Either<L, R2>,
    {
        match self {
            Either::Left(l) => Either::Left(l),
            Either::Right(r) => f(r),
        }
    }

    /// Observe whichever side is held, returning `self` unchanged.
    pub fn tap<F, G>(self, on_left: F, on_right: G) -> Self
    where
        F: FnOnce(&L),
        G: FnOnce(&R),
    {
        match &self {
            Either::Left(l) => on_left(l),
            Either::Right(r) => on_right(r),
        }
        self
    }

    /// Swap Left and Right.
    #[inline]
    pub fn swap(self) -> Either<R, L> {
        match self {
            Either::Left(l) => Either::Right(l),
            Either::Right(r) => Either::Left(r),
        }
    }

    // ========== Async Operations ==========

    /// Async form of [`Either::fold`].
    pub async fn fold_async<T, F, FFut, G, GFut>(self, on_left: F, on_right: G) -> T
    where
        F: FnOnce(L) -> FFut,
        FFut: Future<Output = T>,
        G: FnOnce(R) -> GFut,
        GFut: Future<Output = T>,
    {
        match self {
            Either::Left(l) => on_left(l).await,
            Either::Right(r) => on_right(r).await,
        }
    }

    /// Async form of [`Either::map`]. `f` is never called on a `Left`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use wrapture::Either;
    ///
    /// # tokio_test::block_on(async {
    /// let e: Either<String, u32> = Either::right(2);
    /// let e = e.map_async(|n| async move { n * 3 }).await;
    /// assert_eq!(e, Either::right(6));
    /// # });
    /// ```
    pub async fn map_async<R2, F, Fut>(self, f: F) -> Either<L, R2>
    where
        F: FnOnce(R) -> Fut,
        Fut: Future<Output = R2>,
    {
        match self {
            Either::Left(l) => Either::Left(l),
            Either::Right(r) => Either::Right(f(r).await),
        }
    }

    /// Async form of [`Either::and_then`].
    pub async fn and_then_async<R2, F, Fut>(self, f: F) -> Either<L, R2>
    where
        F: FnOnce(R) -> Fut,
        Fut: Future<Output = Either<L, R2>>,
    {
        match self {
            Either::Left(l) => Either::Left(l),
            Either::Right(r) => f(r).await,
        }
    }

    /// Async form of [`Either::tap`].
    pub async fn tap_async<F, FFut, G, GFut>(self, on_left: F, on_right: G) -> Self
    where
        F: FnOnce(&L) -> FFut,
        FFut: Future<Output = ()>,
        G: FnOnce(&R) -> GFut,
        GFut: Future<Output = ()>,
    {
        match &self {
            Either::Left(l) => on_left(l).await,
            Either::Right(r) => on_right(r).await,
        }
        self
    }

    // ========== Conversions ==========

    /// Convert into an [`Outcome`], rendering a `Left` with `error_converter`.
    ///
    /// # Panics
    ///
    /// Panics if `error_converter` returns an empty message, since a failure
    /// must carry one.
    pub fn to_outcome<F>(self, error_converter: F) -> Outcome<R>
    where
        F: FnOnce(L) -> String,
    {
        match self {
            Either::Left(l) => Outcome::failure(error_converter(l)),
            Either::Right(r) => Outcome::success(r),
        }
    }

    /// Keep the right value as a [`Maybe`], dropping any left value.
    #[inline]
    pub fn into_maybe(self) -> Maybe<R> {
        Maybe::from(self.into_right())
    }

    /// Convert to Result (Right becomes Ok, Left becomes Err).
    #[inline]
    pub fn into_result(self) -> Result<R, L> {
        match self {
            Either::Left(l) => Err(l),
            Either::Right(r) => Ok(r),
        }
    }

    /// Create from Result (Ok becomes Right, Err becomes Left).
    #[inline]
    pub fn from_result(result: Result<R, L>) -> Self {
        match result {
            Ok(r) => Either::Right(r),
            Err(l) => Either::Left(l),
        }
    }
}

// ========== Trait Implementations ==========

impl<L, R> From<Result<R, L>> for Either<L, R> {
    fn from(result: Result<R, L>) -> Self {
        Either::from_result(result)
    }
}

impl<L, R> From<Either<L, R>> for Result<R, L> {
    fn from(either: Either<L, R>) -> Self {
        either.into_result()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn test_predicates() {
        let left: Either<i32, &str> = Either::left(42);
        let right: Either<i32, &str> = Either::right("hello");

        assert!(left.is_left());
        assert!(!left.is_right());
        assert!(!right.is_left());
        assert!(right.is_right());
    }

    #[test]
    fn test_fold_invokes_exactly_one_branch() {
        let left_calls = Cell::new(0);
        let right_calls = Cell::new(0);

        let e: Either<i32, i32> = Either::left(5);
        let out = e.fold(
            |l| {
                left_calls.set(left_calls.get() + 1);
                l + 1
            },
            |r| {
                right_calls.set(right_calls.get() + 1);
                r - 1
            },
        );
        assert_eq!(out, 6);
        assert_eq!((left_calls.get(), right_calls.get()), (1, 0));
    }

    #[test]
    fn test_map_skips_left() {
        let calls = Cell::new(0);
        let e: Either<&str, i32> = Either::left("err");
        let mapped = e.map(|x| {
            calls.set(1);
            x + 1
        });
        assert_eq!(mapped, Either::left("err"));
        assert_eq!(calls.get(), 0);
    }

    #[test]
    fn test_map_left() {
        let e: Either<i32, &str> = Either::left(21);
        assert_eq!(e.map_left(|x| x * 2), Either::left(42));
    }

    #[test]
    fn test_and_then_short_circuits() {
        let e: Either<&str, i32> = Either::left("first");
        let chained = e
            .and_then(|x| Either::right(x + 1))
            .and_then(|_| Either::<&str, i32>::left("second"));
        assert_eq!(chained, Either::left("first"));
    }

    #[test]
    fn test_tap_returns_original() {
        let seen = Cell::new(0);
        let e: Either<i32, i32> = Either::right(3);
        let same = e.tap(|_| seen.set(-1), |r| seen.set(*r));
        assert_eq!(same, Either::right(3));
        assert_eq!(seen.get(), 3);
    }

    #[test]
    #[should_panic(expected = "on a `Left` value")]
    fn test_unwrap_right_on_left_panics() {
        Either::<i32, i32>::left(1).unwrap_right();
    }

    #[test]
    fn test_swap() {
        let e: Either<i32, &str> = Either::left(42);
        assert_eq!(e.swap(), Either::right(42));
    }

    #[test]
    fn test_to_outcome() {
        let e: Either<u16, &str> = Either::left(404);
        let o = e.to_outcome(|code| format!("status {}", code));
        assert_eq!(o.error(), Some("status 404"));

        let e: Either<u16, &str> = Either::right("body");
        assert_eq!(e.to_outcome(|code| code.to_string()), Outcome::success("body"));
    }

    #[test]
    fn test_result_conversions() {
        let e: Either<&str, i32> = Ok(1).into();
        assert_eq!(e, Either::right(1));
        let r: Result<i32, &str> = Either::left("bad").into();
        assert_eq!(r, Err("bad"));
        assert_eq!(Either::<&str, i32>::right(2).into_maybe(), Maybe::some(2));
        assert_eq!(Either::<&str, i32>::left("x").into_maybe(), Maybe::none());
    }

    #[tokio::test]
    async fn test_map_async_skips_left() {
        let calls = Cell::new(0);
        let e: Either<&str, i32> = Either::left("no");
        let out = e
            .map_async(|x| {
                calls.set(1);
                async move { x * 2 }
            })
            .await;
        assert_eq!(out, Either::left("no"));
        assert_eq!(calls.get(), 0);
    }

    #[tokio::test]
    async fn test_fold_async() {
        let e: Either<&str, i32> = Either::right(7);
        let out = e
            .fold_async(|l| async move { l.len() as i32 }, |r| async move { r })
            .await;
        assert_eq!(out, 7);
    }
}
