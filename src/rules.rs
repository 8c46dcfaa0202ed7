//! Asynchronous business rules evaluated against a shared context.
//!
//! A [`BusinessRule`] inspects a context and reports an [`Outcome`]. The library
//! does not ship any rules. It only runs them in order with [`apply_rules`],
//! stopping at the first failure.
//!
//! # Example
//!
//! ```rust
//! use futures::future::{BoxFuture, FutureExt};
//! use wrapture::{apply_rules, BusinessRule, Outcome};
//!
//! struct Order {
//!     total: u32,
//!     items: usize,
//! }
//!
//! struct MinimumTotal(u32);
//!
//! impl BusinessRule<Order> for MinimumTotal {
//!     fn evaluate<'a>(&'a self, order: &'a Order) -> BoxFuture<'a, Outcome> {
//!         async move {
//!             Outcome::success_if(order.total >= self.0, (), "Order total is too low.")
//!         }
//!         .boxed()
//!     }
//! }
//!
//! struct NotEmpty;
//!
//! impl BusinessRule<Order> for NotEmpty {
//!     fn evaluate<'a>(&'a self, order: &'a Order) -> BoxFuture<'a, Outcome> {
//!         async move { Outcome::failure_if(order.items == 0, (), "Order has no items.") }.boxed()
//!     }
//! }
//!
//! # tokio_test::block_on(async {
//! let order = Order { total: 5, items: 0 };
//! let outcome = apply_rules(&order, &[&NotEmpty, &MinimumTotal(10)]).await;
//! assert_eq!(outcome.error(), Some("Order has no items."));
//! # });
//! ```

use futures::future::{BoxFuture, FutureExt};

use crate::Outcome;

/// A rule that decides asynchronously whether `T` is acceptable.
pub trait BusinessRule<T: ?Sized>: Send + Sync {
    /// Evaluate the rule against `context`.
    fn evaluate<'a>(&'a self, context: &'a T) -> BoxFuture<'a, Outcome>;
}

/// Evaluate `rules` in order against `context`.
///
/// Returns the first failing outcome without evaluating the rules after it, or
/// a unit success when every rule passes.
#[cfg_attr(not(feature = "tracing"), allow(unused_variables))]
pub async fn apply_rules<T: ?Sized>(context: &T, rules: &[&dyn BusinessRule<T>]) -> Outcome {
    for (index, rule) in rules.iter().enumerate() {
        let outcome = rule.evaluate(context).await;
        if outcome.is_failure() {
            #[cfg(feature = "tracing")]
            tracing::debug!(rule = index, total = rules.len(), "business rule failed");

            return outcome;
        }
    }
    Outcome::ok()
}

/// Method form of [`apply_rules`], available on every context type.
///
/// # Example
///
/// ```rust
/// use futures::future::{BoxFuture, FutureExt};
/// use wrapture::{ApplyRules, BusinessRule, Outcome};
///
/// struct Positive;
///
/// impl BusinessRule<i64> for Positive {
///     fn evaluate<'a>(&'a self, n: &'a i64) -> BoxFuture<'a, Outcome> {
///         async move { Outcome::success_if(*n > 0, (), "must be positive") }.boxed()
///     }
/// }
///
/// # tokio_test::block_on(async {
/// assert!(7i64.apply_rules(&[&Positive]).await.is_success());
/// assert!((-7i64).apply_rules(&[&Positive]).await.is_failure());
/// # });
/// ```
pub trait ApplyRules {
    /// Evaluate `rules` in order against `self`.
    fn apply_rules<'a>(&'a self, rules: &'a [&'a dyn BusinessRule<Self>]) -> BoxFuture<'a, Outcome>;
}

impl<T: ?Sized + Sync> ApplyRules for T {
    fn apply_rules<'a>(&'a self, rules: &'a [&'a dyn BusinessRule<Self>]) -> BoxFuture<'a, Outcome> {
        apply_rules(self, rules).boxed()
    }
}
