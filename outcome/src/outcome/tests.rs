//! Unit tests for the broad-type combinators.

use std::cell::Cell;

use rstest::rstest;

use super::Outcome;
use crate::error::NotSucceeded;

fn pending() -> Outcome<i32, String> {
    Outcome::Pending
}

fn succeeded(n: i32) -> Outcome<i32, String> {
    Outcome::Succeeded(n)
}

fn failed(msg: &str) -> Outcome<i32, String> {
    Outcome::Failed(msg.to_owned())
}

#[rstest]
#[case(pending(), true, false, false)]
#[case(succeeded(1), false, true, false)]
#[case(failed("e"), false, false, true)]
fn predicates_match_the_active_variant(
    #[case] outcome: Outcome<i32, String>,
    #[case] is_pending: bool,
    #[case] is_succeeded: bool,
    #[case] is_failed: bool,
) {
    assert_eq!(outcome.is_pending(), is_pending);
    assert_eq!(outcome.is_succeeded(), is_succeeded);
    assert_eq!(outcome.is_failed(), is_failed);
}

#[rstest]
fn pending_values_compare_equal_structurally() {
    assert_eq!(pending(), Outcome::Pending);
    assert_eq!(Outcome::<i32, String>::default(), Outcome::Pending);
}

#[rstest]
fn map_succeeded_transforms_only_the_success_payload() {
    assert_eq!(succeeded(5).map_succeeded(|n| n * 2), succeeded(10));
    assert_eq!(failed("err").map_succeeded(|n| n * 2), failed("err"));
    assert_eq!(pending().map_succeeded(|n| n * 2), pending());
}

#[rstest]
fn map_succeeded_can_change_the_success_type() {
    let widened: Outcome<String, String> = succeeded(5).map_succeeded(|n| n.to_string());
    assert_eq!(widened, Outcome::Succeeded("5".to_owned()));
}

#[rstest]
fn map_failed_transforms_only_the_error_payload() {
    assert_eq!(failed("err").map_failed(|e| e.len()), Outcome::Failed(3));
    assert_eq!(succeeded(5).map_failed(|e| e.len()), Outcome::Succeeded(5));
    assert_eq!(pending().map_failed(|e| e.len()), Outcome::Pending);
}

#[rstest]
fn taps_return_the_input_unchanged() {
    assert_eq!(succeeded(3).on_succeeded(|_| {}), succeeded(3));
    assert_eq!(failed("e").on_succeeded(|_| {}), failed("e"));
    assert_eq!(pending().on_failed(|_| {}), pending());
    assert_eq!(failed("e").on_failed(|_| {}), failed("e"));
    assert_eq!(pending().on_pending(|| {}), pending());
    assert_eq!(succeeded(3).on_pending(|| {}), succeeded(3));
}

#[rstest]
#[case(succeeded(3), 1, 0, 0)]
#[case(failed("e"), 0, 1, 0)]
#[case(pending(), 0, 0, 1)]
fn taps_fire_exactly_once_on_the_matching_variant(
    #[case] outcome: Outcome<i32, String>,
    #[case] on_succeeded: u32,
    #[case] on_failed: u32,
    #[case] on_pending: u32,
) {
    let hits = Cell::new(0);
    let _ = outcome.clone().on_succeeded(|_| hits.set(hits.get() + 1));
    assert_eq!(hits.get(), on_succeeded);

    hits.set(0);
    let _ = outcome.clone().on_failed(|_| hits.set(hits.get() + 1));
    assert_eq!(hits.get(), on_failed);

    hits.set(0);
    let _ = outcome.on_pending(|| hits.set(hits.get() + 1));
    assert_eq!(hits.get(), on_pending);
}

#[rstest]
fn taps_see_the_payload_by_reference() {
    let seen = Cell::new(0);
    let _ = succeeded(42).on_succeeded(|n| seen.set(*n));
    assert_eq!(seen.get(), 42);

    let message = Cell::new(0);
    let _ = failed("err").on_failed(|e| message.set(e.len()));
    assert_eq!(message.get(), 3);
}

#[rstest]
fn get_or_else_returns_the_payload_without_evaluating_the_fallback() {
    let evaluated = Cell::new(false);
    let value = succeeded(7).get_or_else(|| {
        evaluated.set(true);
        0
    });
    assert_eq!(value, 7);
    assert!(!evaluated.get());
}

#[rstest]
#[case(pending())]
#[case(failed("err"))]
fn get_or_else_evaluates_the_fallback_exactly_once(#[case] outcome: Outcome<i32, String>) {
    let calls = Cell::new(0u32);
    let value = outcome.get_or_else(|| {
        calls.set(calls.get() + 1);
        -1
    });
    assert_eq!(value, -1);
    assert_eq!(calls.get(), 1);
}

#[rstest]
#[case(succeeded(9), Some(9))]
#[case(pending(), None)]
#[case(failed("err"), None)]
fn get_yields_the_success_payload_or_none(
    #[case] outcome: Outcome<i32, String>,
    #[case] expected: Option<i32>,
) {
    assert_eq!(outcome.get(), expected);
}

#[rstest]
fn try_get_preserves_the_discarded_state() {
    assert_eq!(succeeded(9).try_get(), Ok(9));
    assert_eq!(pending().try_get(), Err(NotSucceeded::Pending));
    assert_eq!(
        failed("err").try_get(),
        Err(NotSucceeded::Failed("err".to_owned()))
    );
}

#[rstest]
fn not_succeeded_reports_the_state_in_its_message() {
    let still_pending = pending().try_get().unwrap_err();
    assert_eq!(still_pending.to_string(), "the outcome is still pending");

    let failure = failed("err").try_get().unwrap_err();
    assert_eq!(failure.to_string(), "the outcome failed: err");
    assert_eq!(failure.into_failure(), Some("err".to_owned()));
}

#[rstest]
fn unwrap_returns_the_success_payload() {
    assert_eq!(succeeded(5).unwrap(), 5);
    assert_eq!(succeeded(5).expect("should hold"), 5);
}

#[rstest]
#[should_panic(expected = "called `Outcome::unwrap()` on a `Pending` value")]
fn unwrap_panics_on_pending() {
    let _ = pending().unwrap();
}

#[rstest]
#[should_panic(expected = "called `Outcome::unwrap()` on a `Failed` value: \"err\"")]
fn unwrap_panics_on_failure_naming_the_error() {
    let _ = failed("err").unwrap();
}

#[rstest]
#[should_panic(expected = "fetch must have resolved: \"err\"")]
fn expect_panics_with_the_caller_message() {
    let _ = failed("err").expect("fetch must have resolved");
}

#[rstest]
fn as_ref_borrows_without_consuming() {
    let outcome = succeeded(5);
    assert_eq!(outcome.as_ref(), Outcome::Succeeded(&5));
    assert_eq!(outcome, succeeded(5));
}

#[rstest]
fn from_result_adopts_both_resolved_states() {
    assert_eq!(Outcome::from(Ok::<_, String>(5)), succeeded(5));
    assert_eq!(Outcome::from(Err::<i32, _>("err".to_owned())), failed("err"));
}
