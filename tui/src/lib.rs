//! Terminal UI for Reclaim.
//!
//! Pure rendering over [`reclaim_engine::App`]: the capture surface with its
//! live feedback line, the status bar, and the override dialog. Input
//! handling lives in [`input`] and feeds transitions back into the engine;
//! nothing in this crate mutates flow state while drawing.

mod effects;
mod input;
mod theme;

pub use effects::apply_dialog_effect;
pub use input::{InputPump, handle_events};
pub use theme::{Glyphs, Palette, glyphs, palette, styles};

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Position, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Padding, Paragraph},
};
use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

use reclaim_engine::{App, DialogRef, EditorRef, StatusKind, strip_leading_account_id};
use reclaim_phrase::{VALID_WORD_COUNTS, known_word};
use reclaim_types::{DialogChoice, sanitize_terminal_text, truncate_with_ellipsis};

pub fn draw(frame: &mut Frame, app: &App) {
    let options = app.ui_options();
    let palette = palette(options);
    let glyphs = glyphs(options);
    // Clear with background color
    let bg_block = Block::default().style(Style::default().bg(palette.bg_dark));
    frame.render_widget(bg_block, frame.area());

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Min(1),    // Banner
            Constraint::Length(3), // Entry box
            Constraint::Length(1), // Feedback line
            Constraint::Length(1), // Status bar
        ])
        .split(frame.area());

    draw_banner(frame, chunks[0], &palette);
    draw_entry(frame, app, chunks[1], &palette, &glyphs);
    draw_feedback(frame, app, chunks[2], &palette, &glyphs);
    draw_status_bar(frame, app, chunks[3], &palette, &glyphs);

    draw_override_dialog(frame, app, &palette, &glyphs);
}

fn draw_banner(frame: &mut Frame, area: Rect, palette: &Palette) {
    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            "  Reclaim",
            Style::default()
                .fg(palette.primary)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            "  Recovery phrase entry",
            Style::default().fg(palette.text_secondary),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "  Type or paste the recovery phrase for the account you are restoring.",
            Style::default().fg(palette.text_secondary),
        )),
        Line::from(Span::styled(
            format!(
                "  Phrases are {} words long. A leading account number is fine;",
                word_counts_label()
            ),
            Style::default().fg(palette.text_muted),
        )),
        Line::from(Span::styled(
            "  it is removed before the phrase is checked.",
            Style::default().fg(palette.text_muted),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled(
                "    Enter",
                Style::default()
                    .fg(palette.green)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                "   Continue with the entered phrase",
                Style::default().fg(palette.text_secondary),
            ),
        ]),
        Line::from(vec![
            Span::styled(
                "    Esc",
                Style::default()
                    .fg(palette.error)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled("     Cancel", Style::default().fg(palette.text_secondary)),
        ]),
        Line::from(vec![
            Span::styled(
                "    Ctrl+U",
                Style::default()
                    .fg(palette.yellow)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                "  Clear the line",
                Style::default().fg(palette.text_secondary),
            ),
        ]),
    ];

    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Left), area);
}

/// "12, 15, 18, 21 or 24", built from the accepted lengths.
fn word_counts_label() -> String {
    let mut label = String::new();
    for (i, count) in VALID_WORD_COUNTS.iter().enumerate() {
        if i > 0 {
            label.push_str(if i + 1 == VALID_WORD_COUNTS.len() {
                " or "
            } else {
                ", "
            });
        }
        label.push_str(&count.to_string());
    }
    label
}

fn draw_entry(frame: &mut Frame, app: &App, area: Rect, palette: &Palette, glyphs: &Glyphs) {
    let editor = app.editor();
    let active = matches!(editor, EditorRef::Active(_));

    let (chip_text, chip_style, border_style) = if active {
        (
            " PHRASE ",
            styles::chip_active(palette),
            Style::default().fg(palette.green),
        )
    } else {
        (
            " LOCKED ",
            styles::chip_locked(palette),
            Style::default().fg(palette.text_muted),
        )
    };

    let hints: Vec<Span> = if active {
        vec![
            Span::styled("Enter", styles::key_highlight(palette)),
            Span::styled(" continue  ", styles::key_hint(palette)),
            Span::styled("Esc", styles::key_highlight(palette)),
            Span::styled(" cancel ", styles::key_hint(palette)),
        ]
    } else {
        Vec::new()
    };

    let prefix = format!(" {} ", glyphs.prompt);
    let prefix_width = prefix.width() as u16;
    let content_width = area
        .width
        .saturating_sub(2)
        .saturating_sub(prefix_width)
        .max(1) as usize;

    let mut cursor_pos: Option<(u16, u16)> = None;
    let display_text = match editor {
        EditorRef::Active(draft) => {
            let cursor_index = draft.byte_index();
            let text = draft.text();
            let cursor_display_pos = text[..cursor_index].width();

            let (visible, horizontal_scroll) = if cursor_display_pos >= content_width {
                let scroll_target = cursor_display_pos - content_width + 1;
                let mut byte_offset = 0;
                let mut skipped_width = 0;
                for (idx, grapheme) in text.grapheme_indices(true) {
                    if skipped_width >= scroll_target {
                        byte_offset = idx;
                        break;
                    }
                    skipped_width += grapheme.width();
                }
                (text[byte_offset..].to_string(), skipped_width as u16)
            } else {
                (text.to_string(), 0u16)
            };

            let cursor_x = area
                .x
                .saturating_add(1 + prefix_width)
                .saturating_add(cursor_display_pos as u16)
                .saturating_sub(horizontal_scroll);
            cursor_pos = Some((cursor_x, area.y.saturating_add(1)));
            visible
        }
        EditorRef::Inactive => String::new(),
    };

    let entry = Paragraph::new(Line::from(vec![
        Span::styled(prefix, Style::default().fg(palette.primary)),
        Span::styled(display_text, Style::default().fg(palette.text_primary)),
    ]))
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(border_style)
            .title_top(Line::from(vec![Span::styled(chip_text, chip_style)]))
            .title_top(Line::from(hints).alignment(Alignment::Right)),
    );

    frame.render_widget(entry, area);

    if let Some((cursor_x, cursor_y)) = cursor_pos {
        frame.set_cursor_position((cursor_x, cursor_y));
    }
}

/// Live summary of the draft: word count, stripped identifier, unknown words.
///
/// Display-only annotation straight off the wordlist. The flow's validator
/// is never consulted here, and nothing shown has any effect on transitions.
fn draw_feedback(frame: &mut Frame, app: &App, area: Rect, palette: &Palette, glyphs: &Glyphs) {
    let EditorRef::Active(draft) = app.editor() else {
        return;
    };
    let trimmed = draft.text().trim();
    if trimmed.is_empty() {
        return;
    }

    let phrase = strip_leading_account_id(trimmed);
    let words: Vec<&str> = phrase.split_whitespace().collect();
    let unknown: Vec<&str> = words
        .iter()
        .copied()
        .filter(|word| !known_word(word))
        .collect();

    let count = words.len();
    let count_style = if VALID_WORD_COUNTS.contains(&count) && unknown.is_empty() {
        Style::default().fg(palette.success)
    } else {
        Style::default().fg(palette.text_muted)
    };
    let noun = if count == 1 { "word" } else { "words" };

    let mut spans = vec![
        Span::raw(" "),
        Span::styled(format!("{count} {noun}"), count_style),
    ];
    if phrase.len() < trimmed.len() {
        spans.push(Span::styled(
            format!(" {} account number detected", glyphs.separator),
            Style::default().fg(palette.text_muted),
        ));
    }
    if !unknown.is_empty() {
        spans.push(Span::styled(
            format!(" {} {} unknown", glyphs.separator, unknown.len()),
            Style::default().fg(palette.warning),
        ));

        // Echo the offending words themselves while they fit.
        let used: usize = spans.iter().map(Span::width).sum();
        let remaining = (area.width as usize).saturating_sub(used);
        if remaining > 8 {
            let mut listed = String::new();
            for (i, word) in unknown.iter().enumerate() {
                if i > 0 {
                    listed.push_str(", ");
                }
                listed.push_str(sanitize_terminal_text(word).as_ref());
            }
            spans.push(Span::styled(
                format!(": {}", truncate_with_ellipsis(&listed, remaining - 2)),
                Style::default().fg(palette.warning),
            ));
        }
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn draw_status_bar(frame: &mut Frame, app: &App, area: Rect, palette: &Palette, glyphs: &Glyphs) {
    let (status_text, status_style) = if let Some((kind, message)) = app.status() {
        let (prefix, color) = match kind {
            StatusKind::Warning => ("Warning: ", palette.warning),
            StatusKind::Info => ("", palette.text_secondary),
        };
        (format!("{prefix}{message}"), Style::default().fg(color))
    } else if matches!(app.dialog(), DialogRef::Active { .. }) {
        (
            format!("{} Waiting on confirmation", glyphs.status_ready),
            Style::default().fg(palette.text_muted),
        )
    } else if app.is_resolved() {
        (
            format!("{} Done", glyphs.status_ready),
            Style::default().fg(palette.text_muted),
        )
    } else {
        (
            format!("{} Ready", glyphs.status_ready),
            Style::default().fg(palette.success),
        )
    };

    // Build status line
    let status = Paragraph::new(Line::from(vec![
        Span::raw(" "),
        Span::styled(status_text, status_style),
    ]));
    frame.render_widget(status, area);
}

fn draw_override_dialog(frame: &mut Frame, app: &App, palette: &Palette, glyphs: &Glyphs) {
    let DialogRef::Active { dialog, raw, focus } = app.dialog() else {
        return;
    };

    if !app.ui_options().high_contrast {
        dim_backdrop(frame);
    }

    let max_width = frame.area().width.saturating_sub(6).clamp(20, 72) as usize;

    let mut lines: Vec<Line> = Vec::new();
    for row in wrap_text(dialog.message, max_width) {
        lines.push(Line::from(Span::styled(
            row,
            Style::default().fg(palette.text_secondary),
        )));
    }

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "Entered:",
        Style::default().fg(palette.text_muted),
    )));
    let echo = if raw.is_empty() {
        Span::styled(
            "  (empty)",
            Style::default()
                .fg(palette.text_muted)
                .add_modifier(Modifier::ITALIC),
        )
    } else {
        let sanitized = sanitize_terminal_text(raw);
        Span::styled(
            format!(
                "  {}",
                truncate_with_ellipsis(sanitized.as_ref(), max_width.saturating_sub(2))
            ),
            Style::default().fg(palette.text_primary),
        )
    };
    lines.push(Line::from(echo));

    // Secondary sits on the left so Left always points at the safe exit.
    lines.push(Line::from(""));
    let secondary_focused = focus == DialogChoice::Secondary;
    let (secondary_pointer, primary_pointer) = if secondary_focused {
        (glyphs.selected, " ")
    } else {
        (" ", glyphs.selected)
    };
    let secondary_style = if secondary_focused {
        Style::default()
            .fg(palette.success)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(palette.text_muted)
    };
    let primary_style = if secondary_focused {
        Style::default().fg(palette.text_muted)
    } else {
        Style::default()
            .fg(palette.error)
            .add_modifier(Modifier::BOLD)
    };

    lines.push(Line::from(vec![
        Span::styled(
            format!("{secondary_pointer} "),
            Style::default().fg(palette.text_muted),
        ),
        Span::styled(format!("[ {} ]", dialog.secondary_label), secondary_style),
        Span::raw("    "),
        Span::styled(
            format!("{primary_pointer} "),
            Style::default().fg(palette.text_muted),
        ),
        Span::styled(format!("[ {} ]", dialog.primary_label), primary_style),
    ]));

    lines.push(Line::from(""));
    lines.push(Line::from(vec![
        Span::styled("Left/Right", styles::key_highlight(palette)),
        Span::styled(" move  ", styles::key_hint(palette)),
        Span::styled("Tab", styles::key_highlight(palette)),
        Span::styled(" switch  ", styles::key_hint(palette)),
        Span::styled("Enter", styles::key_highlight(palette)),
        Span::styled(" choose  ", styles::key_hint(palette)),
        Span::styled("Esc", styles::key_highlight(palette)),
        Span::styled(" try again", styles::key_hint(palette)),
    ]));

    let content_width = lines.iter().map(Line::width).max().unwrap_or(10) as u16;
    let content_width = content_width.min(frame.area().width.saturating_sub(4));
    let content_height = lines.len() as u16;

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(palette.warning))
        .style(Style::default().bg(palette.bg_panel))
        .padding(Padding::uniform(1))
        .title(Line::from(vec![Span::styled(
            format!(" {} ", dialog.title),
            Style::default()
                .fg(palette.text_primary)
                .add_modifier(Modifier::BOLD),
        )]));

    let area = frame.area();
    // Clamp to the frame: on a cramped terminal the dialog clips rather
    // than indexing outside the buffer.
    let height = content_height.saturating_add(4).min(area.height);
    let width = content_width.saturating_add(4).min(area.width);
    let base = Rect {
        x: area.x + (area.width.saturating_sub(width) / 2),
        y: area.y + (area.height.saturating_sub(height) / 2),
        width,
        height,
    };
    let rect = match app.dialog_effect() {
        Some(effect) => apply_dialog_effect(effect, base),
        None => base,
    };

    frame.render_widget(Clear, rect);
    frame.render_widget(Paragraph::new(lines).block(block), rect);
}

/// Dims every cell so the modal rendered on top reads as the only live
/// surface.
fn dim_backdrop(frame: &mut Frame) {
    let area = frame.area();
    let buffer = frame.buffer_mut();
    for y in area.top()..area.bottom() {
        for x in area.left()..area.right() {
            if let Some(cell) = buffer.cell_mut(Position::new(x, y)) {
                cell.set_style(Style::default().add_modifier(Modifier::DIM));
            }
        }
    }
}

/// Greedy word wrap by display width. Words wider than the limit get a row
/// of their own rather than being split.
fn wrap_text(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut rows = Vec::new();
    let mut row = String::new();
    let mut row_width = 0;

    for word in text.split_whitespace() {
        let word_width = word.width();
        if row_width > 0 && row_width + 1 + word_width > width {
            rows.push(std::mem::take(&mut row));
            row_width = 0;
        }
        if row_width > 0 {
            row.push(' ');
            row_width += 1;
        }
        row.push_str(word);
        row_width += word_width;
    }
    if !row.is_empty() {
        rows.push(row);
    }
    rows
}
