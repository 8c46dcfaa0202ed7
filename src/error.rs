//! Error type and shared message plumbing.
//!
//! Domain failures travel inside [`Outcome`](crate::Outcome) as plain messages.
//! [`Error`] is only produced by the explicit extraction APIs that leave the
//! outcome world, such as [`Outcome::into_value`](crate::Outcome::into_value)
//! and [`Maybe::require`](crate::Maybe::require).

use thiserror::Error;

/// Separator used when several violations are packed into one failure message.
pub const ERROR_SEPARATOR: &str = "; ";

/// Delimiter used by [`Outcome::errors`](crate::Outcome::errors).
///
/// Note the asymmetry with [`ERROR_SEPARATOR`]: splitting a joined message on
/// this delimiter keeps the leading space of every message after the first.
pub const DEFAULT_ERROR_DELIMITER: char = ';';

/// Prefix for faults raised by an action run after a successful check.
pub const ACTION_FAULT_PREFIX: &str = "An error occurred while executing the action: ";

/// Prefix for faults raised by a constructor run after a successful guard.
pub const CONSTRUCTOR_FAULT_PREFIX: &str = "An error occurred while creating the object: ";

/// Default message when a value is required from an empty [`Maybe`](crate::Maybe).
pub const NO_VALUE_MESSAGE: &str = "Maybe has no value.";

/// Panic message for a failure that would carry no error message.
pub(crate) const EMPTY_FAILURE_PANIC: &str =
    "cannot create a failure outcome without an error message";

/// Message used when a fault renders to an empty string.
pub const UNSPECIFIED_FAULT_MESSAGE: &str = "An unspecified error occurred.";

/// Errors raised when a value is pulled out of a wrapper that does not hold one.
///
/// # Example
///
/// ```rust
/// use wrapture::{Error, Maybe, Outcome};
///
/// let err = Outcome::<i32>::failure("boom").into_value().unwrap_err();
/// assert_eq!(err, Error::Failure("boom".to_string()));
///
/// let err = Maybe::<i32>::none().require().unwrap_err();
/// assert_eq!(err.to_string(), "Maybe has no value.");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Error)]
pub enum Error {
    /// The outcome was a failure; carries its message.
    #[error("{0}")]
    Failure(String),
    /// The maybe held no value; carries the requested message.
    #[error("{0}")]
    NoValue(String),
}

impl Error {
    /// The message carried by this error.
    pub fn message(&self) -> &str {
        match self {
            Error::Failure(msg) | Error::NoValue(msg) => msg,
        }
    }
}

/// Join violation messages into the canonical multi-error format.
pub(crate) fn join_errors<S: AsRef<str>>(errors: &[S]) -> String {
    errors
        .iter()
        .map(AsRef::as_ref)
        .collect::<Vec<_>>()
        .join(ERROR_SEPARATOR)
}

/// Render a fault as a failure message, applying `prefix`.
///
/// Faults whose `Display` output is empty fall back to
/// [`UNSPECIFIED_FAULT_MESSAGE`] so the resulting failure stays valid.
pub(crate) fn fault_message<E: std::fmt::Display>(prefix: &str, fault: E) -> String {
    let rendered = fault.to_string();
    let rendered = if rendered.is_empty() {
        UNSPECIFIED_FAULT_MESSAGE.to_string()
    } else {
        rendered
    };

    #[cfg(feature = "tracing")]
    tracing::debug!(fault = %rendered, "fault converted into failure");

    format!("{}{}", prefix, rendered)
}
