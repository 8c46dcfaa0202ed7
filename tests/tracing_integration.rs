//! Structured log events emitted with the `tracing` feature
#![cfg(feature = "tracing")]

use futures::future::{BoxFuture, FutureExt};
use tracing_test::traced_test;
use wrapture::{apply_rules, BusinessRule, CheckMode, Guard, Outcome, Specification};

#[test]
#[traced_test]
fn guard_failure_is_logged() {
    let outcome = Guard::against_with(CheckMode::Full)
        .null_or_empty(None, "a")
        .null_or_empty(Some(""), "b")
        .to_outcome();

    assert!(outcome.is_failure());
    assert!(logs_contain("guard rejected input"));
    assert!(logs_contain("violations=2"));
}

#[test]
#[traced_test]
fn guard_success_is_silent() {
    let outcome = Guard::against().null(Some(1), "unused").to_outcome();

    assert!(outcome.is_success());
    assert!(!logs_contain("guard rejected input"));
}

#[test]
#[traced_test]
fn fault_conversion_is_logged() {
    let outcome = Outcome::of(|| "nan".parse::<u8>());

    assert!(outcome.is_failure());
    assert!(logs_contain("fault converted into failure"));
}

#[test]
#[traced_test]
fn specification_compilation_is_logged_once() {
    let spec = Specification::leaf(|x: &i32| *x > 0).and_where(|x: &i32| *x < 10);
    assert!(spec.is_satisfied_by(&5));
    assert!(spec.is_satisfied_by(&6));

    assert!(logs_contain("compiling specification"));
    assert!(logs_contain("nodes=3"));
}

struct Reject;

impl BusinessRule<()> for Reject {
    fn evaluate<'a>(&'a self, _: &'a ()) -> BoxFuture<'a, Outcome> {
        futures::future::ready(Outcome::failure("rejected")).boxed()
    }
}

#[tokio::test]
#[traced_test]
async fn failing_rule_is_logged() {
    let outcome = apply_rules(&(), &[&Reject]).await;

    assert!(outcome.is_failure());
    assert!(logs_contain("business rule failed"));
    assert!(logs_contain("rule=0"));
}
