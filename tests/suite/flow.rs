//! End-to-end intake flow tests.
//!
//! Each test drives a real [`App`] through the same transitions the key
//! handlers produce: type, submit, move dialog focus, resolve or cancel.

use std::sync::{Arc, Mutex};

use reclaim_engine::{App, DialogChoice, DialogRef, EditorRef, FlowOutcome, UiOptions};
use reclaim_phrase::Bip39Validator;

use crate::common;

/// A checksummed phrase behind an account number resolves in one submit,
/// with the number gone from the accepted phrase.
#[test]
fn accepts_a_checksummed_phrase_behind_an_account_number() {
    let mut app = App::new(Box::new(Bip39Validator), UiOptions::default());
    common::type_text(&mut app, &format!("  10000 {} ", common::VALID_PHRASE));
    app.submit();

    assert_eq!(
        app.into_outcome(),
        Some(FlowOutcome::Accepted(common::VALID_PHRASE.to_string()))
    );
}

#[test]
fn rejected_submission_opens_the_override_dialog() {
    let mut app = App::new(Box::new(Bip39Validator), UiOptions::default());
    common::type_text(&mut app, "  abandon ability  ");
    app.submit();

    match app.dialog() {
        DialogRef::Active { dialog, raw, focus } => {
            assert_eq!(dialog.primary_label, "Continue anyway");
            assert_eq!(dialog.secondary_label, "Try again");
            assert_eq!(raw, "abandon ability");
            assert_eq!(focus, DialogChoice::Secondary);
        }
        DialogRef::Inactive => panic!("dialog should be up after a rejected submission"),
    }
    assert!(
        matches!(app.editor(), EditorRef::Inactive),
        "entry surface should lock while the dialog is up"
    );
    assert!(!app.is_resolved());
}

/// Overriding keeps the submission exactly as typed. The account number
/// is stripped only for validation, never from an overridden phrase.
#[test]
fn continue_anyway_keeps_the_account_number_attached() {
    let mut app = common::app_rejecting();
    common::type_text(&mut app, " 314159 stray words here ");
    app.submit();
    app.resolve_dialog(DialogChoice::Primary);

    assert_eq!(
        app.into_outcome(),
        Some(FlowOutcome::Accepted("314159 stray words here".to_string()))
    );
}

#[test]
fn try_again_discards_the_submission_and_reopens_entry() {
    let mut app = App::new(common::accept_only("abandon ability"), UiOptions::default());
    common::type_text(&mut app, "wrong words entirely");
    app.submit();
    app.resolve_dialog(DialogChoice::Secondary);

    match app.editor() {
        EditorRef::Active(draft) => assert!(draft.is_empty(), "retry should start from empty"),
        EditorRef::Inactive => panic!("entry surface should reopen after try again"),
    }

    common::type_text(&mut app, "abandon ability");
    app.submit();
    assert_eq!(
        app.into_outcome(),
        Some(FlowOutcome::Accepted("abandon ability".to_string()))
    );
}

#[test]
fn cancel_from_entry_never_consults_the_validator() {
    let seen = Arc::new(Mutex::new(Vec::new()));
    let mut app = App::new(common::recording(&seen, true), UiOptions::default());
    common::type_text(&mut app, "half typed phra");
    app.cancel();

    assert_eq!(app.outcome(), Some(&FlowOutcome::Cancelled));
    assert!(
        seen.lock().unwrap().is_empty(),
        "cancel must not run validation"
    );
}

#[test]
fn cancel_from_the_dialog_resolves_cancelled() {
    let mut app = common::app_rejecting();
    common::type_text(&mut app, "not a phrase");
    app.submit();
    app.cancel();

    assert_eq!(app.into_outcome(), Some(FlowOutcome::Cancelled));
}

/// Resolution is single-shot: once the flow has an outcome, later
/// transitions are no-ops and the outcome does not change.
#[test]
fn resolution_is_single_shot() {
    let mut app = common::app_accepting();
    common::type_text(&mut app, "abandon ability");
    app.submit();
    assert!(app.is_resolved());

    app.cancel();
    app.submit();
    app.resolve_dialog(DialogChoice::Primary);
    app.dialog_activate();

    assert_eq!(
        app.into_outcome(),
        Some(FlowOutcome::Accepted("abandon ability".to_string()))
    );
}

/// The validator sees the trimmed, identifier-stripped form, one call per
/// submission.
#[test]
fn validator_sees_only_normalized_submissions() {
    let seen = Arc::new(Mutex::new(Vec::new()));
    let mut app = App::new(common::recording(&seen, false), UiOptions::default());

    common::type_text(&mut app, "  42 alpha beta  ");
    app.submit();
    app.resolve_dialog(DialogChoice::Secondary);
    common::type_text(&mut app, "gamma delta");
    app.submit();

    assert_eq!(
        *seen.lock().unwrap(),
        vec!["alpha beta".to_string(), "gamma delta".to_string()]
    );
}

/// Submitting nothing still routes through the dialog rather than
/// resolving or being silently dropped.
#[test]
fn empty_submission_routes_through_confirmation() {
    let mut app = App::new(Box::new(Bip39Validator), UiOptions::default());
    app.submit();

    match app.dialog() {
        DialogRef::Active { raw, .. } => assert_eq!(raw, ""),
        DialogRef::Inactive => panic!("empty submission should still open the dialog"),
    }
}

#[test]
fn dialog_focus_moves_and_activates() {
    let mut app = common::app_rejecting();
    common::type_text(&mut app, "override me");
    app.submit();

    app.dialog_toggle_focus();
    match app.dialog() {
        DialogRef::Active { focus, .. } => assert_eq!(focus, DialogChoice::Primary),
        DialogRef::Inactive => panic!("dialog should still be up"),
    }

    app.dialog_focus(DialogChoice::Secondary);
    app.dialog_focus(DialogChoice::Primary);
    app.dialog_activate();

    assert_eq!(
        app.into_outcome(),
        Some(FlowOutcome::Accepted("override me".to_string()))
    );
}

/// The exact strings the `--json` output mode prints for each ending.
#[test]
fn outcomes_serialize_to_the_json_output_shape() {
    let mut accepted = common::app_accepting();
    common::type_text(&mut accepted, "abandon ability");
    accepted.submit();
    let outcome = accepted.into_outcome().expect("flow resolved");
    assert_eq!(
        serde_json::to_string(&outcome).unwrap(),
        r#"{"status":"accepted","phrase":"abandon ability"}"#
    );

    let mut cancelled = common::app_accepting();
    cancelled.cancel();
    let outcome = cancelled.into_outcome().expect("flow resolved");
    assert_eq!(serde_json::to_string(&outcome).unwrap(), r#"{"status":"cancelled"}"#);
}
