//! Numeric predicates
//!
//! Everything here is generic over `PartialOrd`, so the same predicates work for
//! integers, floats, `Decimal`-like types and anything else with an ordering.

use super::Predicate;

/// Holds for values strictly below the bound.
#[derive(Clone, Copy, Debug)]
pub struct Lt<T>(pub T);

impl<T: PartialOrd + Send + Sync> Predicate<T> for Lt<T> {
    #[inline]
    fn check(&self, value: &T) -> bool {
        *value < self.0
    }
}

/// Create a predicate that holds for values below `bound`.
///
/// # Example
///
/// ```rust
/// use wrapture::predicate::*;
///
/// assert!(lt(5).check(&4));
/// assert!(!lt(5).check(&5));
/// ```
pub fn lt<T: PartialOrd + Send + Sync>(bound: T) -> Lt<T> {
    Lt(bound)
}

/// Holds for values at or below the bound.
#[derive(Clone, Copy, Debug)]
pub struct Le<T>(pub T);

impl<T: PartialOrd + Send + Sync> Predicate<T> for Le<T> {
    #[inline]
    fn check(&self, value: &T) -> bool {
        *value <= self.0
    }
}

/// Create a predicate that holds for values at or below `bound`.
pub fn le<T: PartialOrd + Send + Sync>(bound: T) -> Le<T> {
    Le(bound)
}

/// Holds for values strictly above the bound.
#[derive(Clone, Copy, Debug)]
pub struct Gt<T>(pub T);

impl<T: PartialOrd + Send + Sync> Predicate<T> for Gt<T> {
    #[inline]
    fn check(&self, value: &T) -> bool {
        *value > self.0
    }
}

/// Create a predicate that holds for values above `bound`.
///
/// # Example
///
/// ```rust
/// use wrapture::predicate::*;
///
/// assert!(gt(1.5).check(&1.6));
/// assert!(!gt(1.5).check(&1.5));
/// ```
pub fn gt<T: PartialOrd + Send + Sync>(bound: T) -> Gt<T> {
    Gt(bound)
}

/// Holds for values at or above the bound.
#[derive(Clone, Copy, Debug)]
pub struct Ge<T>(pub T);

impl<T: PartialOrd + Send + Sync> Predicate<T> for Ge<T> {
    #[inline]
    fn check(&self, value: &T) -> bool {
        *value >= self.0
    }
}

/// Create a predicate that holds for values at or above `bound`.
pub fn ge<T: PartialOrd + Send + Sync>(bound: T) -> Ge<T> {
    Ge(bound)
}

/// Holds for values inside an inclusive range.
#[derive(Clone, Copy, Debug)]
pub struct Between<T> {
    min: T,
    max: T,
}

impl<T: PartialOrd + Send + Sync> Predicate<T> for Between<T> {
    #[inline]
    fn check(&self, value: &T) -> bool {
        *value >= self.min && *value <= self.max
    }
}

/// Create a predicate that holds for `min <= value <= max`.
///
/// # Example
///
/// ```rust
/// use wrapture::predicate::*;
///
/// let p = between(1, 10);
/// assert!(p.check(&1));
/// assert!(p.check(&10));
/// assert!(!p.check(&11));
/// ```
pub fn between<T: PartialOrd + Send + Sync>(min: T, max: T) -> Between<T> {
    Between { min, max }
}

/// Holds for values strictly above `T::default()`, the zero of numeric types.
#[derive(Clone, Copy, Debug)]
pub struct Positive<T>(std::marker::PhantomData<fn() -> T>);

impl<T: PartialOrd + Default> Predicate<T> for Positive<T> {
    #[inline]
    fn check(&self, value: &T) -> bool {
        *value > T::default()
    }
}

/// Create a predicate that holds for values greater than zero.
///
/// # Example
///
/// ```rust
/// use wrapture::predicate::*;
///
/// assert!(positive::<i64>().check(&1));
/// assert!(!positive::<i64>().check(&0));
/// assert!(!positive::<f32>().check(&-0.5));
/// ```
pub fn positive<T: PartialOrd + Default>() -> Positive<T> {
    Positive(std::marker::PhantomData)
}
