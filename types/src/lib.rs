//! Core domain types for Reclaim.
//!
//! This crate contains pure domain types with no IO, no async, and minimal dependencies.
//! Everything here can be used from any layer of the application.

// Pedantic lint configuration - these are intentional design choices
#![allow(clippy::missing_errors_doc)] // Result-returning functions are self-explanatory

mod sanitize;
pub use sanitize::sanitize_terminal_text;

mod text;
pub use text::{truncate_to_fit, truncate_with_ellipsis};

mod ui;
pub use ui::{ConfirmDialog, DialogChoice, UiOptions};

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

// ============================================================================
// Account Identifiers
// ============================================================================

/// Error when a token is not a well-formed account identifier.
///
/// Variants deliberately carry no payload: the rejected token may be the
/// first word of a recovery phrase, and must never travel through error
/// messages or logs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum AccountIdParseError {
    #[error("account identifier must not be empty")]
    Empty,
    #[error("account identifier must contain only ASCII digits")]
    InvalidDigit,
    #[error("account identifier does not fit in 64 bits")]
    OutOfRange,
}

/// A numeric account identifier.
///
/// Accepts only non-empty, all-ASCII-digit tokens. Signs, separators, and
/// whitespace are rejected, so `"+41"` and `"1_000"` are not identifiers.
/// Leading zeros are allowed (`"007"` parses as 7).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AccountId(u64);

impl AccountId {
    pub fn parse(raw: &str) -> Result<Self, AccountIdParseError> {
        if raw.is_empty() {
            return Err(AccountIdParseError::Empty);
        }
        if !raw.bytes().all(|b| b.is_ascii_digit()) {
            return Err(AccountIdParseError::InvalidDigit);
        }
        // All-digit and non-empty, so the only remaining failure is overflow.
        raw.parse::<u64>()
            .map(Self)
            .map_err(|_| AccountIdParseError::OutOfRange)
    }

    #[must_use]
    pub fn value(self) -> u64 {
        self.0
    }
}

impl fmt::Display for AccountId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Drop a leading account identifier from a recovery phrase.
///
/// Some wallets export phrases as `"<account id> <word> <word> ..."`, so a
/// pasted phrase may carry a numeric first token that is not part of the
/// phrase itself. If the text before the first space parses as an
/// [`AccountId`], the token and exactly one following space are removed;
/// otherwise the input is returned unchanged, including any leading or
/// trailing whitespace it still has.
///
/// Only the first token is examined and at most one token is removed per
/// call. Input with no space at all is never touched.
#[must_use]
pub fn strip_leading_account_id(input: &str) -> &str {
    match input.find(' ') {
        Some(idx) if AccountId::parse(&input[..idx]).is_ok() => &input[idx + 1..],
        _ => input,
    }
}

// ============================================================================
// Flow Outcomes
// ============================================================================

/// Terminal result of the phrase intake flow.
///
/// `Debug` is manually implemented to redact the accepted phrase, preventing
/// accidental disclosure in logs or error messages. Serialization is the one
/// deliberate disclosure point, used by the `--json` output mode.
#[derive(Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", content = "phrase", rename_all = "lowercase")]
pub enum FlowOutcome {
    /// The user submitted a phrase, possibly overriding a failed validation.
    Accepted(String),
    /// The user backed out; no phrase was captured.
    Cancelled,
}

impl FlowOutcome {
    #[must_use]
    pub fn is_accepted(&self) -> bool {
        matches!(self, FlowOutcome::Accepted(_))
    }

    #[must_use]
    pub fn phrase(&self) -> Option<&str> {
        match self {
            FlowOutcome::Accepted(phrase) => Some(phrase),
            FlowOutcome::Cancelled => None,
        }
    }

    #[must_use]
    pub fn into_phrase(self) -> Option<String> {
        match self {
            FlowOutcome::Accepted(phrase) => Some(phrase),
            FlowOutcome::Cancelled => None,
        }
    }
}

impl fmt::Debug for FlowOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FlowOutcome::Accepted(_) => write!(f, "FlowOutcome::Accepted(<redacted>)"),
            FlowOutcome::Cancelled => write!(f, "FlowOutcome::Cancelled"),
        }
    }
}

// ============================================================================
// Phrase Validation
// ============================================================================

/// Validation seam for recovery phrases.
///
/// Implementations must be pure: same phrase, same answer, no visible side
/// effects. The intake flow treats the validator as a black box and never
/// asks why a phrase failed; a failed check only opens the override dialog.
pub trait PhraseValidator {
    /// Returns true when `phrase` is a well-formed recovery phrase.
    fn is_valid(&self, phrase: &str) -> bool;
}

impl<F> PhraseValidator for F
where
    F: Fn(&str) -> bool,
{
    fn is_valid(&self, phrase: &str) -> bool {
        self(phrase)
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn account_id_parses_plain_digits() {
        assert_eq!(AccountId::parse("10000").map(AccountId::value), Ok(10000));
        assert_eq!(AccountId::parse("0").map(AccountId::value), Ok(0));
    }

    #[test]
    fn account_id_accepts_leading_zeros() {
        assert_eq!(AccountId::parse("007").map(AccountId::value), Ok(7));
    }

    #[test]
    fn account_id_rejects_empty() {
        assert_eq!(AccountId::parse(""), Err(AccountIdParseError::Empty));
    }

    #[test]
    fn account_id_rejects_sign_prefixes() {
        // `u64::from_str` would accept "+41"; the digit pre-check must not.
        assert_eq!(
            AccountId::parse("+41"),
            Err(AccountIdParseError::InvalidDigit)
        );
        assert_eq!(
            AccountId::parse("-41"),
            Err(AccountIdParseError::InvalidDigit)
        );
    }

    #[test]
    fn account_id_rejects_mixed_tokens() {
        assert_eq!(
            AccountId::parse("41a"),
            Err(AccountIdParseError::InvalidDigit)
        );
        assert_eq!(
            AccountId::parse("4 1"),
            Err(AccountIdParseError::InvalidDigit)
        );
        assert_eq!(
            AccountId::parse("٤١"), // Arabic-Indic digits
            Err(AccountIdParseError::InvalidDigit)
        );
    }

    #[test]
    fn account_id_rejects_overflow() {
        assert_eq!(
            AccountId::parse("18446744073709551615").map(AccountId::value),
            Ok(u64::MAX)
        );
        assert_eq!(
            AccountId::parse("18446744073709551616"),
            Err(AccountIdParseError::OutOfRange)
        );
    }

    // ========================================================================
    // strip_leading_account_id Tests
    // ========================================================================

    #[test]
    fn strip_removes_leading_identifier() {
        assert_eq!(
            strip_leading_account_id("10000 abandon ability able"),
            "abandon ability able"
        );
    }

    #[test]
    fn strip_leaves_input_without_space_alone() {
        assert_eq!(strip_leading_account_id("abandon"), "abandon");
        assert_eq!(strip_leading_account_id("10000"), "10000");
        assert_eq!(strip_leading_account_id(""), "");
    }

    #[test]
    fn strip_leaves_non_identifier_first_token_alone() {
        assert_eq!(
            strip_leading_account_id("abandon ability able"),
            "abandon ability able"
        );
        assert_eq!(strip_leading_account_id("+41 abandon"), "+41 abandon");
        assert_eq!(strip_leading_account_id("41a abandon"), "41a abandon");
    }

    #[test]
    fn strip_removes_exactly_one_space() {
        // Identifier followed by two spaces leaves one space behind.
        assert_eq!(strip_leading_account_id("10000  abandon"), " abandon");
    }

    #[test]
    fn strip_removes_at_most_one_token() {
        assert_eq!(strip_leading_account_id("1 2 abandon"), "2 abandon");
    }

    #[test]
    fn strip_is_idempotent_on_word_phrases() {
        let stripped = strip_leading_account_id("10000 abandon ability");
        assert_eq!(strip_leading_account_id(stripped), stripped);
    }

    #[test]
    fn strip_leading_space_means_empty_first_token() {
        // An empty prefix is not an identifier, so nothing is removed.
        assert_eq!(strip_leading_account_id(" abandon"), " abandon");
    }

    #[test]
    fn strip_handles_oversized_numeric_token() {
        // 21-digit tokens overflow 64 bits and stay attached.
        let input = "184467440737095516160 abandon";
        assert_eq!(strip_leading_account_id(input), input);
    }

    // ========================================================================
    // FlowOutcome Tests
    // ========================================================================

    #[test]
    fn outcome_accepted_exposes_phrase() {
        let outcome = FlowOutcome::Accepted("abandon ability".to_string());
        assert!(outcome.is_accepted());
        assert_eq!(outcome.phrase(), Some("abandon ability"));
        assert_eq!(outcome.into_phrase().as_deref(), Some("abandon ability"));
    }

    #[test]
    fn outcome_cancelled_has_no_phrase() {
        let outcome = FlowOutcome::Cancelled;
        assert!(!outcome.is_accepted());
        assert_eq!(outcome.phrase(), None);
        assert_eq!(outcome.into_phrase(), None);
    }

    #[test]
    fn outcome_debug_redacts_phrase() {
        let outcome = FlowOutcome::Accepted("abandon ability".to_string());
        let rendered = format!("{outcome:?}");
        assert!(!rendered.contains("abandon"));
        assert!(rendered.contains("<redacted>"));
    }

    #[test]
    fn outcome_serializes_with_status_tag() {
        let accepted = FlowOutcome::Accepted("abandon ability".to_string());
        let json = serde_json::to_value(&accepted).unwrap();
        assert_eq!(json["status"], "accepted");
        assert_eq!(json["phrase"], "abandon ability");

        let cancelled = serde_json::to_value(FlowOutcome::Cancelled).unwrap();
        assert_eq!(cancelled["status"], "cancelled");
        assert!(cancelled.get("phrase").is_none());
    }

    // ========================================================================
    // PhraseValidator Tests
    // ========================================================================

    #[test]
    fn closures_are_validators() {
        let validator: Box<dyn PhraseValidator> = Box::new(|phrase: &str| phrase == "ok");
        assert!(validator.is_valid("ok"));
        assert!(!validator.is_valid("nope"));
    }
}
