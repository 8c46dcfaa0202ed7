//! Leaf predicates shared by [`Guard`](crate::Guard) and
//! [`Specification`](crate::Specification).
//!
//! A [`Predicate`] answers a yes/no question about a borrowed value. Closures
//! implement it directly; the named predicates in this module cover the checks
//! that come up in almost every domain model: empty or blank strings, length
//! limits, regex formats, numeric bounds, instants relative to now, and nil
//! identifiers.
//!
//! Predicates are deliberately flat. Combining them with AND/OR/NOT is the job of
//! [`Specification`](crate::Specification).
//!
//! # Example
//!
//! ```rust
//! use wrapture::predicate::*;
//!
//! assert!(blank().check("   "));
//! assert!(longer_than(3).check("four"));
//! assert!(between(1, 10).check(&7));
//! assert!(!positive::<i32>().check(&0));
//! ```

mod identifier;
mod number;
mod string;
mod temporal;

pub use identifier::{nil_id, NilId};
pub use number::{between, ge, gt, le, lt, positive, Between, Ge, Gt, Le, Lt, Positive};
pub use string::{blank, empty, longer_than, matches, Blank, Empty, LongerThan, Matches};
pub use temporal::{in_future, in_past, InFuture, InPast, PointInTime};

/// A yes/no question about a value of type `T`.
///
/// Predicates must be `Send + Sync` so that a
/// [`Specification`](crate::Specification) built from them can be shared across
/// threads.
///
/// # Example
///
/// ```rust
/// use wrapture::Predicate;
///
/// let even = |n: &u32| n % 2 == 0;
/// assert!(even.check(&4));
/// assert!(!even.check(&5));
/// ```
pub trait Predicate<T: ?Sized>: Send + Sync {
    /// Returns `true` when `value` satisfies the predicate.
    fn check(&self, value: &T) -> bool;
}

impl<T: ?Sized, F> Predicate<T> for F
where
    F: Fn(&T) -> bool + Send + Sync,
{
    #[inline]
    fn check(&self, value: &T) -> bool {
        self(value)
    }
}
