//! Core engine for Reclaim - the intake flow without TUI dependencies.
//!
//! This crate owns the flow state machine and the entry draft:
//!
//! - **Application state**: The [`App`] struct holds the flow state, the
//!   draft, and the injected phrase validator
//! - **Draft editing**: [`DraftInput`] is a single-line, grapheme-aware
//!   editor whose buffer is wiped on clear and on drop
//! - **Configuration**: [`ReclaimConfig`] loads display options from
//!   `~/.reclaim/config.toml`
//!
//! The TUI layer (`reclaim_tui`) reads state from `App` through the
//! borrow-scoped accessors ([`EditorRef`], [`DialogRef`]) and forwards input
//! back to it. No rendering logic lives in this crate, and nothing here
//! performs IO apart from config loading.

// Re-export the domain vocabulary so callers need only this crate.
pub use reclaim_types::{
    AccountId, AccountIdParseError, ConfirmDialog, DialogChoice, FlowOutcome, PhraseValidator,
    UiOptions, strip_leading_account_id,
};

mod app;
mod config;
mod draft;
mod effect;
mod flow;

pub use app::{App, DialogRef, EditorMut, EditorRef, StatusKind};
pub use config::{AppConfig, ConfigError, ReclaimConfig, config_path};
pub use draft::DraftInput;
pub use effect::DialogEffect;
pub use flow::OVERRIDE_DIALOG;
