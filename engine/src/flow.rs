//! Intake flow state machine.

use reclaim_types::{ConfirmDialog, DialogChoice, FlowOutcome};
use zeroize::Zeroize;

/// Dialog shown when a submission fails phrase validation.
///
/// The primary action deliberately accepts the input as typed. Some backup
/// formats (first-four-letters shorthand, unusual word lists) fail strict
/// validation but are exactly what the user means to submit.
pub const OVERRIDE_DIALOG: ConfirmDialog = ConfirmDialog {
    title: "Warning",
    message: "This does not look like a valid recovery phrase. Some backup \
              solutions only store the first 4 letters of each word. If you \
              are using that format, make sure to omit your account number. \
              Otherwise, check that you copied the full phrase and try again.",
    primary_label: "Continue anyway",
    secondary_label: "Try again",
};

/// Intake flow state machine.
///
/// # State Machine
/// ```text
/// ┌──────────────────┐  submit, phrase valid   ┌─────────────────────┐
/// │ AwaitingInput    │ ──────────────────────> │ Resolved(Accepted)  │
/// └──────────────────┘                         └─────────────────────┘
///       │    ^                                           ^
///       │    │ Try again (fresh entry,                   │
///       │    │  previous input discarded)                │ Continue anyway
///       │    │                                           │ (raw, unstripped)
///       │  ┌─┴───────────────────────┐                   │
///       └> │ ConfirmingOverride(raw) │ ──────────────────┘
///  submit, └─────────────────────────┘
///  phrase
///  invalid
///
/// Cancel from either interactive state -> Resolved(Cancelled).
/// Resolved is terminal; no transitions leave it.
/// ```
pub(crate) enum FlowState {
    /// Entry surface is live; keystrokes edit the draft.
    AwaitingInput,
    /// A submission failed validation; the override dialog is up.
    ///
    /// `raw` is the trimmed submission exactly as typed, identifier prefix
    /// included. Accepting through the dialog resolves with this string,
    /// not the stripped form the validator saw.
    ConfirmingOverride {
        dialog: ConfirmDialog,
        raw: String,
        focus: DialogChoice,
    },
    /// Terminal. The outcome waits here until the caller extracts it.
    Resolved(FlowOutcome),
}

impl FlowState {
    /// Wipes any held submission text. Transition sites call this before
    /// dropping a superseded state so the raw phrase never lingers on the
    /// heap.
    pub(crate) fn wipe(&mut self) {
        if let FlowState::ConfirmingOverride { raw, .. } = self {
            raw.zeroize();
        }
    }
}

// Manual impl: ConfirmingOverride holds the submitted phrase.
impl std::fmt::Debug for FlowState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FlowState::AwaitingInput => write!(f, "AwaitingInput"),
            FlowState::ConfirmingOverride { focus, .. } => f
                .debug_struct("ConfirmingOverride")
                .field("raw", &"<redacted>")
                .field("focus", focus)
                .finish(),
            FlowState::Resolved(outcome) => f.debug_tuple("Resolved").field(outcome).finish(),
        }
    }
}
