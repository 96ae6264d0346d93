//! Account-number stripping as the flow applies it.
//!
//! The parsing rules themselves are covered by unit tests next to
//! [`reclaim_types::strip_leading_account_id`]; these tests pin down what
//! the running flow does with pasted input around that seam.

use std::sync::{Arc, Mutex};

use reclaim_engine::{App, DialogChoice, FlowOutcome, UiOptions};

use crate::common;

fn accepted_phrase_for(input: &str) -> String {
    let mut app = common::app_accepting();
    common::type_text(&mut app, input);
    app.submit();
    match app.into_outcome() {
        Some(FlowOutcome::Accepted(phrase)) => phrase,
        other => panic!("expected an accepted phrase, got {other:?}"),
    }
}

#[test]
fn leading_zeros_still_count_as_an_account_number() {
    assert_eq!(accepted_phrase_for("007 abandon ability"), "abandon ability");
}

#[test]
fn signed_numbers_are_part_of_the_phrase() {
    assert_eq!(
        accepted_phrase_for("+41 abandon ability"),
        "+41 abandon ability"
    );
}

#[test]
fn numbers_too_big_for_an_account_are_part_of_the_phrase() {
    // One past u64::MAX.
    assert_eq!(
        accepted_phrase_for("18446744073709551616 abandon"),
        "18446744073709551616 abandon"
    );
}

#[test]
fn a_lone_number_is_submitted_as_typed() {
    assert_eq!(accepted_phrase_for("10000"), "10000");
}

#[test]
fn only_the_first_token_is_stripped() {
    assert_eq!(accepted_phrase_for("1 2 abandon"), "2 abandon");
}

/// Pasted tabs flatten to spaces before submission, so a spreadsheet-style
/// `number<TAB>phrase` paste still sheds its account number.
#[test]
fn tab_separated_account_number_is_stripped() {
    assert_eq!(accepted_phrase_for("42\tabandon ability"), "abandon ability");
}

/// Stripping happens per submission, not once per flow.
#[test]
fn each_retry_sheds_its_own_account_number() {
    let seen = Arc::new(Mutex::new(Vec::new()));
    let mut app = App::new(common::recording(&seen, false), UiOptions::default());

    common::type_text(&mut app, "12 first try");
    app.submit();
    app.resolve_dialog(DialogChoice::Secondary);
    common::type_text(&mut app, "99 second try");
    app.submit();

    assert_eq!(
        *seen.lock().unwrap(),
        vec!["first try".to_string(), "second try".to_string()]
    );
}
