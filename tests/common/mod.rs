//! Shared test utilities and fixtures.
//!
//! Validator doubles and flow-driving helpers used across the suite.

#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use reclaim_engine::{App, EditorMut, UiOptions};
use reclaim_types::PhraseValidator;

/// A 12-word phrase with a correct checksum, straight off the English
/// wordlist test vectors.
pub const VALID_PHRASE: &str = "abandon abandon abandon abandon abandon abandon \
                                abandon abandon abandon abandon abandon about";

/// Validator that accepts every phrase.
pub fn accept_all() -> Box<dyn PhraseValidator> {
    Box::new(|_: &str| true)
}

/// Validator that rejects every phrase.
pub fn reject_all() -> Box<dyn PhraseValidator> {
    Box::new(|_: &str| false)
}

/// Validator that accepts exactly one phrase and rejects all others.
pub fn accept_only(expected: &'static str) -> Box<dyn PhraseValidator> {
    Box::new(move |phrase: &str| phrase == expected)
}

/// Validator that records every phrase it is shown before answering.
pub fn recording(seen: &Arc<Mutex<Vec<String>>>, accept: bool) -> Box<dyn PhraseValidator> {
    let seen = Arc::clone(seen);
    Box::new(move |phrase: &str| {
        seen.lock()
            .expect("recording validator lock should not be poisoned")
            .push(phrase.to_string());
        accept
    })
}

/// An app in the entry state that accepts everything, default display options.
pub fn app_accepting() -> App {
    App::new(accept_all(), UiOptions::default())
}

/// An app in the entry state that rejects everything, default display options.
pub fn app_rejecting() -> App {
    App::new(reject_all(), UiOptions::default())
}

/// Types `text` into the entry surface as one paste.
///
/// Panics if the surface is locked; tests that expect a locked editor
/// assert on the accessor directly.
pub fn type_text(app: &mut App, text: &str) {
    match app.editor_mut() {
        EditorMut::Active(draft) => draft.enter_text(text),
        EditorMut::Inactive => panic!("entry surface is not active"),
    }
}
