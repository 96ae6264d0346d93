//! Screen-level rendering tests on a vt100 virtual terminal.
//!
//! Each test builds a real [`App`], renders it with the production
//! [`reclaim_tui::draw`], and asserts on what the emulated screen shows.
//! Assertions stick to trimmed rows and substrings so they pin down copy
//! and layout without freezing every blank cell.


use insta::assert_snapshot;
use ratatui::Terminal;

use reclaim_engine::{App, EditorMut, PhraseValidator, StatusKind, UiOptions};
use reclaim_tui::draw;
use vt100_backend::VT100Backend;

const VALID_PHRASE: &str = "abandon abandon abandon abandon abandon abandon \
                            abandon abandon abandon abandon abandon about";

fn reject_all() -> Box<dyn PhraseValidator> {
    Box::new(|_: &str| false)
}

fn accept_all() -> Box<dyn PhraseValidator> {
    Box::new(|_: &str| true)
}

/// Entry-state app with the dialog pop-in disabled so a single frame shows
/// the dialog at full size.
fn reduced_motion_app(validator: Box<dyn PhraseValidator>) -> App {
    App::new(
        validator,
        UiOptions {
            reduced_motion: true,
            ..UiOptions::default()
        },
    )
}

fn type_text(app: &mut App, text: &str) {
    match app.editor_mut() {
        EditorMut::Active(draft) => draft.enter_text(text),
        EditorMut::Inactive => panic!("entry surface is not active"),
    }
}

fn render(app: &App, width: u16, height: u16) -> Terminal<VT100Backend> {
    let backend = VT100Backend::new(width, height);
    let mut terminal = Terminal::new(backend).expect("terminal should build");
    terminal
        .draw(|frame| draw(frame, app))
        .expect("draw should succeed");
    terminal
}

fn row_containing<'a>(contents: &'a str, needle: &str) -> &'a str {
    contents
        .lines()
        .find(|row| row.contains(needle))
        .unwrap_or_else(|| panic!("no screen row contains {needle:?}:\n{contents}"))
}

#[test]
fn entry_screen_shows_banner_and_ready_status() {
    let app = App::new(reject_all(), UiOptions::default());
    let terminal = render(&app, 80, 24);
    let contents = terminal.backend().contents();

    assert!(contents.contains("Reclaim"));
    assert!(contents.contains("Recovery phrase entry"));
    assert!(contents.contains("Type or paste the recovery phrase"));
    assert!(contents.contains("Phrases are 12, 15, 18, 21 or 24 words long"));
    assert!(contents.contains("PHRASE"));
    assert_snapshot!(row_containing(&contents, "Ready").trim(), @"● Ready");

    // Cursor parks right after the prompt, inside the entry box.
    assert_eq!(terminal.backend().vt100().screen().cursor_position(), (19, 5));
}

#[test]
fn typed_text_renders_after_the_prompt() {
    let mut app = App::new(reject_all(), UiOptions::default());
    type_text(&mut app, "abandon ability");
    let terminal = render(&app, 80, 24);

    assert!(terminal.backend().contents().contains("❯ abandon ability"));
    assert_eq!(terminal.backend().vt100().screen().cursor_position(), (19, 20));
}

#[test]
fn feedback_counts_words_and_flags_the_account_number() {
    let mut app = App::new(reject_all(), UiOptions::default());
    type_text(&mut app, "10000 abandon ability");
    let terminal = render(&app, 80, 24);
    let contents = terminal.backend().contents();

    let row = row_containing(&contents, "account number detected");
    assert_snapshot!(row.trim(), @"2 words · account number detected");
}

#[test]
fn feedback_lists_unknown_words() {
    let mut app = App::new(reject_all(), UiOptions::default());
    type_text(&mut app, "zzz abandon qqq");
    let terminal = render(&app, 80, 24);
    let contents = terminal.backend().contents();

    let row = row_containing(&contents, "unknown");
    assert_snapshot!(row.trim(), @"3 words · 2 unknown: zzz, qqq");
}

#[test]
fn feedback_reads_clean_for_a_full_length_phrase() {
    let mut app = App::new(reject_all(), UiOptions::default());
    type_text(&mut app, VALID_PHRASE);
    let terminal = render(&app, 80, 24);
    let contents = terminal.backend().contents();

    let row = row_containing(&contents, "12 words");
    assert_snapshot!(row.trim(), @"12 words");
}

#[test]
fn override_dialog_lays_out_choices_echo_and_locked_entry() {
    let mut app = reduced_motion_app(reject_all());
    type_text(&mut app, "garbled input");
    app.submit();
    // 30 rows: the centered dialog must not overlap the entry box, whose
    // chip this test reads.
    let terminal = render(&app, 80, 30);
    let contents = terminal.backend().contents();

    assert!(contents.contains(" Warning "));
    assert!(contents.contains("not look like a valid recovery phrase"));
    assert!(contents.contains("Entered:"));
    assert!(contents.contains("▸ [ Try again ]"));
    assert!(contents.contains("[ Continue anyway ]"));
    assert!(contents.contains("LOCKED"));
    assert!(contents.contains("Waiting on confirmation"));

    // The draft left the entry box on submit; it survives only in the echo.
    assert_eq!(contents.matches("garbled input").count(), 1);
}

#[test]
fn dialog_focus_pointer_tracks_toggle() {
    let mut app = reduced_motion_app(reject_all());
    type_text(&mut app, "garbled input");
    app.submit();
    app.dialog_toggle_focus();
    let terminal = render(&app, 80, 30);
    let contents = terminal.backend().contents();

    assert!(contents.contains("▸ [ Continue anyway ]"));
    assert!(!contents.contains("▸ [ Try again ]"));
}

#[test]
fn empty_submission_echoes_an_empty_marker() {
    let mut app = reduced_motion_app(reject_all());
    app.submit();
    let terminal = render(&app, 80, 30);

    assert!(terminal.backend().contents().contains("(empty)"));
}

#[test]
fn overlong_echo_is_truncated() {
    let raw = "abandon ".repeat(13);
    let mut app = reduced_motion_app(reject_all());
    type_text(&mut app, &raw);
    app.submit();
    let terminal = render(&app, 80, 30);
    let contents = terminal.backend().contents();

    assert!(contents.contains("..."));
    assert!(!contents.contains(raw.trim_end()));
}

#[test]
fn ascii_mode_swaps_glyphs() {
    let mut app = App::new(
        reject_all(),
        UiOptions {
            ascii_only: true,
            reduced_motion: true,
            ..UiOptions::default()
        },
    );
    type_text(&mut app, "10000 zzz");
    let entry = render(&app, 80, 24);
    let entry_contents = entry.backend().contents();

    assert!(!entry_contents.contains('❯'));
    assert!(!entry_contents.contains('●'));
    assert!(!entry_contents.contains('·'));
    assert!(entry_contents.contains("* Ready"));
    assert!(entry_contents.contains("- account number detected"));

    app.submit();
    let dialog = render(&app, 80, 30);
    assert!(dialog.backend().contents().contains("> [ Try again ]"));
}

#[test]
fn status_message_overrides_the_ready_line() {
    let mut app = App::new(reject_all(), UiOptions::default());
    app.set_status(
        StatusKind::Warning,
        "config at ~/.reclaim/config.toml was unreadable, using defaults",
    );
    let terminal = render(&app, 80, 24);
    let contents = terminal.backend().contents();

    let row = row_containing(&contents, "Warning:");
    assert_snapshot!(
        row.trim(),
        @"Warning: config at ~/.reclaim/config.toml was unreadable, using defaults"
    );
}

#[test]
fn resolved_flow_locks_the_entry_and_reads_done() {
    let mut app = App::new(accept_all(), UiOptions::default());
    type_text(&mut app, "abandon ability");
    app.submit();
    let terminal = render(&app, 80, 24);
    let contents = terminal.backend().contents();

    assert!(contents.contains("LOCKED"));
    assert!(contents.contains("● Done"));
}

/// A cramped terminal clips the dialog instead of panicking.
#[test]
fn cramped_terminal_still_renders_the_dialog() {
    let mut app = reduced_motion_app(reject_all());
    type_text(&mut app, "bad");
    app.submit();
    let terminal = render(&app, 40, 12);
    let contents = terminal.backend().contents();

    assert!(contents.contains("Warning"));
    assert!(contents.contains("not look like"));
}
