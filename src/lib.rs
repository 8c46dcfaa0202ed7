//! # Wrapture
//!
//! A small functional core for domain code: explicit outcomes instead of
//! exceptions, fluent precondition guards, and composable specifications.
//!
//! ## What's inside
//!
//! - [`Outcome`]: success with a value, or failure with a message
//! - [`Maybe`]: a value that may be absent
//! - [`Either`]: a right-biased disjoint union
//! - [`Guard`]: accumulate precondition violations, then materialize an `Outcome`
//! - [`Specification`]: AND/OR/NOT trees of predicates, compiled once and cached
//!
//! The three wrappers share one vocabulary: `map`, `and_then`, `tap`, `fold`, and
//! `*_async` forms of each. The bad branch always short-circuits. Functions meant
//! for the good branch are never called on it.
//!
//! Faults from user code cross into the outcome world only through explicit
//! boundaries such as [`Outcome::of`] and [`Guard::to_outcome_with`], where any
//! `Err(e)` becomes a failure carrying `e.to_string()`. Panics are never caught.
//!
//! ## Quick Example
//!
//! ```rust
//! use wrapture::{Guard, Outcome, Specification};
//!
//! #[derive(Debug)]
//! struct Customer {
//!     name: String,
//!     age: u32,
//! }
//!
//! fn register(name: Option<&str>, age: u32) -> Outcome<Customer> {
//!     Guard::against()
//!         .null_or_white_space(name, "Name is required.")
//!         .less_than_or_equal_zero(age, "Age must be positive.")
//!         .to_outcome_with(|| {
//!             Ok::<_, String>(Customer {
//!                 name: name.unwrap_or_default().trim().to_string(),
//!                 age,
//!             })
//!         })
//! }
//!
//! let adult = Specification::leaf(|c: &Customer| c.age >= 18);
//!
//! let greeting = register(Some(" Ada "), 36)
//!     .and_then(|c| Outcome::success_if(adult.is_satisfied_by(&c), c, "Adults only."))
//!     .map(|c| format!("Welcome, {}", c.name));
//! assert_eq!(greeting.value(), "Welcome, Ada");
//!
//! let rejected = register(None, 0);
//! assert_eq!(rejected.error(), Some("Name is required.; Age must be positive."));
//! ```

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

pub mod either;
pub mod error;
pub mod guard;
pub mod maybe;
pub mod outcome;
pub mod pagination;
pub mod pipe;
pub mod predicate;
pub mod rules;
pub mod specification;
pub mod testing;

// Re-exports
pub use either::Either;
pub use error::Error;
pub use guard::{CheckMode, Guard};
pub use maybe::Maybe;
pub use outcome::Outcome;
pub use pagination::{PagedResult, Pager, Paginate};
pub use pipe::Pipe;
pub use predicate::Predicate;
pub use rules::{apply_rules, ApplyRules, BusinessRule};
pub use specification::Specification;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::either::Either;
    pub use crate::error::Error;
    pub use crate::guard::{CheckMode, Guard};
    pub use crate::maybe::Maybe;
    pub use crate::outcome::Outcome;
    pub use crate::pagination::{PagedResult, Pager, Paginate};
    pub use crate::pipe::Pipe;
    pub use crate::predicate::Predicate;
    pub use crate::rules::{apply_rules, ApplyRules, BusinessRule};
    pub use crate::specification::Specification;
}
