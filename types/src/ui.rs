//! Presentation vocabulary shared by the flow engine and the renderer.

/// Cross-cutting UI options that alter rendering.
///
/// Resolved once at startup from config and environment, then passed down
/// through every render call.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UiOptions {
    /// Use plain ASCII glyphs instead of Unicode symbols.
    pub ascii_only: bool,
    /// Use a high-contrast palette.
    pub high_contrast: bool,
    /// Suppress decorative animation.
    pub reduced_motion: bool,
}

/// Which dialog button the user activated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogChoice {
    /// The emphasized action. For the override dialog this means
    /// "continue anyway".
    Primary,
    /// The safe action. For the override dialog this means "try again".
    Secondary,
}

/// Content of a two-button confirmation dialog.
///
/// The flow engine fills these in; the renderer lays them out. All copy is
/// static because the dialog never interpolates user text into its body.
/// The submitted input is echoed separately, beneath the dialog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConfirmDialog {
    pub title: &'static str,
    pub message: &'static str,
    /// Label for the emphasized button.
    pub primary_label: &'static str,
    /// Label for the safe button, which holds initial focus.
    pub secondary_label: &'static str,
}
