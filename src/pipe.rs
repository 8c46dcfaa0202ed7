//! Method-call plumbing for arbitrary values.
//!
//! [`Pipe`] is implemented for every sized type, so a value can be fed through a
//! function or observed without breaking a method chain.
//!
//! # Example
//!
//! ```rust
//! use wrapture::Pipe;
//!
//! let mut seen = Vec::new();
//! let label = 21
//!     .pipe(|n| n * 2)
//!     .peek(|n| seen.push(*n))
//!     .pipe(|n| format!("#{}", n));
//!
//! assert_eq!(label, "#42");
//! assert_eq!(seen, vec![42]);
//! ```

/// Pipe a value into a function, or peek at it along the way.
pub trait Pipe: Sized {
    /// Feed `self` into `f` and return its result.
    #[inline]
    fn pipe<R, F>(self, f: F) -> R
    where
        F: FnOnce(Self) -> R,
    {
        f(self)
    }

    /// Run `f` on a reference to `self`, then return `self` unchanged.
    #[inline]
    fn peek<F>(self, f: F) -> Self
    where
        F: FnOnce(&Self),
    {
        f(&self);
        self
    }
}

impl<T> Pipe for T {}
