//! Application state - the intake flow without TUI dependencies.

use reclaim_types::{
    ConfirmDialog, DialogChoice, FlowOutcome, PhraseValidator, UiOptions,
    strip_leading_account_id,
};
use zeroize::Zeroize;

use crate::draft::DraftInput;
use crate::effect::DialogEffect;
use crate::flow::{FlowState, OVERRIDE_DIALOG};

/// Read access to the entry editor, gated to the entry state.
pub enum EditorRef<'a> {
    Active(&'a DraftInput),
    Inactive,
}

/// Mutable access to the entry editor, gated to the entry state.
///
/// Keystroke handlers go through this accessor, so typing while the
/// override dialog is up (or after resolution) cannot touch the draft.
pub enum EditorMut<'a> {
    Active(&'a mut DraftInput),
    Inactive,
}

/// Read access to the override dialog, gated to the confirming state.
pub enum DialogRef<'a> {
    Active {
        dialog: &'a ConfirmDialog,
        /// The trimmed submission being confirmed, echoed under the dialog.
        raw: &'a str,
        focus: DialogChoice,
    },
    Inactive,
}

/// Severity of a transient status line message.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StatusKind {
    Info,
    Warning,
}

/// The intake flow and everything it owns: the current state, the entry
/// draft, and the injected phrase validator.
///
/// All transitions are driven by the caller (keystroke handlers); none of
/// the methods here fail, and a resolved flow ignores further transitions.
pub struct App {
    flow: FlowState,
    draft: DraftInput,
    validator: Box<dyn PhraseValidator>,
    ui: UiOptions,
    dialog_effect: Option<DialogEffect>,
    status: Option<(StatusKind, String)>,
}

impl App {
    #[must_use]
    pub fn new(validator: Box<dyn PhraseValidator>, ui: UiOptions) -> Self {
        Self {
            flow: FlowState::AwaitingInput,
            draft: DraftInput::default(),
            validator,
            ui,
            dialog_effect: None,
            status: None,
        }
    }

    #[must_use]
    pub fn ui_options(&self) -> UiOptions {
        self.ui
    }

    #[must_use]
    pub fn editor(&self) -> EditorRef<'_> {
        match self.flow {
            FlowState::AwaitingInput => EditorRef::Active(&self.draft),
            _ => EditorRef::Inactive,
        }
    }

    #[must_use]
    pub fn editor_mut(&mut self) -> EditorMut<'_> {
        match self.flow {
            FlowState::AwaitingInput => EditorMut::Active(&mut self.draft),
            _ => EditorMut::Inactive,
        }
    }

    #[must_use]
    pub fn dialog(&self) -> DialogRef<'_> {
        match &self.flow {
            FlowState::ConfirmingOverride { dialog, raw, focus } => DialogRef::Active {
                dialog,
                raw,
                focus: *focus,
            },
            _ => DialogRef::Inactive,
        }
    }

    #[must_use]
    pub fn is_resolved(&self) -> bool {
        matches!(self.flow, FlowState::Resolved(_))
    }

    #[must_use]
    pub fn outcome(&self) -> Option<&FlowOutcome> {
        match &self.flow {
            FlowState::Resolved(outcome) => Some(outcome),
            _ => None,
        }
    }

    /// Consumes the app and returns the outcome, if the flow resolved.
    #[must_use]
    pub fn into_outcome(mut self) -> Option<FlowOutcome> {
        match std::mem::replace(&mut self.flow, FlowState::AwaitingInput) {
            FlowState::Resolved(outcome) => Some(outcome),
            mut unresolved => {
                unresolved.wipe();
                None
            }
        }
    }

    /// Submits the current draft.
    ///
    /// The draft is taken (the entry surface empties), trimmed, and the
    /// leading account identifier is stripped before the validator sees it.
    /// A valid phrase resolves the flow; an invalid one opens the override
    /// dialog holding the trimmed submission with the identifier still
    /// attached.
    pub fn submit(&mut self) {
        if !matches!(self.flow, FlowState::AwaitingInput) {
            return;
        }
        self.status = None;

        let mut text = self.draft.take_text();
        let trimmed = text.trim();
        let normalized = strip_leading_account_id(trimmed);

        let accepted = self.validator.is_valid(normalized);
        tracing::info!(
            words = normalized.split_whitespace().count(),
            accepted,
            "Draft submitted"
        );

        self.flow = if accepted {
            FlowState::Resolved(FlowOutcome::Accepted(normalized.to_string()))
        } else {
            self.dialog_effect = (!self.ui.reduced_motion).then(DialogEffect::start);
            FlowState::ConfirmingOverride {
                dialog: OVERRIDE_DIALOG,
                raw: trimmed.to_string(),
                // Default to the safe action; overriding takes a deliberate move.
                focus: DialogChoice::Secondary,
            }
        };
        text.zeroize();
    }

    /// Cancels the flow from any interactive state.
    ///
    /// The validator is not consulted and anything typed so far is wiped.
    /// A no-op once the flow has resolved.
    pub fn cancel(&mut self) {
        if matches!(self.flow, FlowState::Resolved(_)) {
            return;
        }
        tracing::info!("Flow cancelled");
        self.flow.wipe();
        self.draft.clear();
        self.dialog_effect = None;
        self.status = None;
        self.flow = FlowState::Resolved(FlowOutcome::Cancelled);
    }

    /// Resolves the override dialog with an explicit choice.
    ///
    /// Primary accepts the held submission as typed. Secondary discards it
    /// and restarts with a fresh, empty entry surface. A no-op when the
    /// dialog is not up.
    pub fn resolve_dialog(&mut self, choice: DialogChoice) {
        let state = std::mem::replace(&mut self.flow, FlowState::AwaitingInput);
        match state {
            FlowState::ConfirmingOverride { mut raw, .. } => {
                self.dialog_effect = None;
                self.status = None;
                match choice {
                    DialogChoice::Primary => {
                        tracing::info!("Override confirmed, accepting the submission as typed");
                        self.flow =
                            FlowState::Resolved(FlowOutcome::Accepted(std::mem::take(&mut raw)));
                    }
                    DialogChoice::Secondary => {
                        tracing::info!("Retrying with a fresh draft");
                        raw.zeroize();
                    }
                }
            }
            other => self.flow = other,
        }
    }

    /// Moves dialog focus to the given choice. A no-op when the dialog is
    /// not up.
    pub fn dialog_focus(&mut self, choice: DialogChoice) {
        if let FlowState::ConfirmingOverride { focus, .. } = &mut self.flow {
            *focus = choice;
        }
    }

    /// Flips dialog focus between the two choices.
    pub fn dialog_toggle_focus(&mut self) {
        if let FlowState::ConfirmingOverride { focus, .. } = &mut self.flow {
            *focus = match *focus {
                DialogChoice::Primary => DialogChoice::Secondary,
                DialogChoice::Secondary => DialogChoice::Primary,
            };
        }
    }

    /// Activates the focused dialog choice.
    pub fn dialog_activate(&mut self) {
        if let FlowState::ConfirmingOverride { focus, .. } = &self.flow {
            let choice = *focus;
            self.resolve_dialog(choice);
        }
    }

    /// Posts a transient status line message, replacing any current one.
    ///
    /// Meant for non-flow events such as an unreadable configuration
    /// file. Any flow transition clears it.
    pub fn set_status(&mut self, kind: StatusKind, message: impl Into<String>) {
        self.status = Some((kind, message.into()));
    }

    #[must_use]
    pub fn status(&self) -> Option<(StatusKind, &str)> {
        self.status
            .as_ref()
            .map(|(kind, message)| (*kind, message.as_str()))
    }

    /// The dialog pop-in effect, while one is running.
    #[must_use]
    pub fn dialog_effect(&self) -> Option<DialogEffect> {
        self.dialog_effect
    }

    /// Per-frame upkeep. Drops the dialog effect once it has played out.
    pub fn tick(&mut self) {
        if self.dialog_effect.is_some_and(|effect| effect.finished()) {
            self.dialog_effect = None;
        }
    }
}

impl Drop for App {
    fn drop(&mut self) {
        // The draft wipes itself; the flow may still hold a submission.
        self.flow.wipe();
    }
}
