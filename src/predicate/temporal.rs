//! Predicates on points in time, relative to the current clock.
//!
//! Zoned values are compared against `Utc::now()`. Naive values carry no zone,
//! so they are read as local wall-clock time and compared against `Local::now()`.

use chrono::{DateTime, Local, NaiveDate, NaiveDateTime, TimeZone, Utc};

use super::Predicate;

/// A value that can be placed before or after "now".
pub trait PointInTime {
    /// Returns `true` if the instant lies strictly after the current time.
    fn is_future(&self) -> bool;

    /// Returns `true` if the instant lies strictly before the current time.
    fn is_past(&self) -> bool;
}

impl<Tz: TimeZone> PointInTime for DateTime<Tz> {
    fn is_future(&self) -> bool {
        *self > Utc::now()
    }

    fn is_past(&self) -> bool {
        *self < Utc::now()
    }
}

impl PointInTime for NaiveDateTime {
    fn is_future(&self) -> bool {
        *self > Local::now().naive_local()
    }

    fn is_past(&self) -> bool {
        *self < Local::now().naive_local()
    }
}

/// Dates compare by calendar day, so today is neither future nor past.
impl PointInTime for NaiveDate {
    fn is_future(&self) -> bool {
        *self > Local::now().date_naive()
    }

    fn is_past(&self) -> bool {
        *self < Local::now().date_naive()
    }
}

/// Holds for points in time after now.
#[derive(Clone, Copy, Default, Debug)]
pub struct InFuture;

impl<T: PointInTime + ?Sized> Predicate<T> for InFuture {
    #[inline]
    fn check(&self, value: &T) -> bool {
        value.is_future()
    }
}

/// Create a predicate that holds for points in time after now.
///
/// # Example
///
/// ```rust
/// use chrono::{Duration, Utc};
/// use wrapture::predicate::*;
///
/// assert!(in_future().check(&(Utc::now() + Duration::days(1))));
/// assert!(!in_future().check(&(Utc::now() - Duration::days(1))));
/// ```
pub fn in_future() -> InFuture {
    InFuture
}

/// Holds for points in time before now.
#[derive(Clone, Copy, Default, Debug)]
pub struct InPast;

impl<T: PointInTime + ?Sized> Predicate<T> for InPast {
    #[inline]
    fn check(&self, value: &T) -> bool {
        value.is_past()
    }
}

/// Create a predicate that holds for points in time before now.
pub fn in_past() -> InPast {
    InPast
}
