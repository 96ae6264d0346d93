//! Draft state for the phrase entry line.
//!
//! A single-line editor with Unicode grapheme cluster support, adapted for
//! secret input: the buffer is wiped on clear and on drop, never serialized,
//! and never printed by `Debug`.

use reclaim_types::sanitize_terminal_text;
use unicode_segmentation::UnicodeSegmentation;
use zeroize::{Zeroize, ZeroizeOnDrop};

/// Handles text editing with proper Unicode grapheme cluster support.
///
/// The cursor is a grapheme index, not a byte index. Pasted text is routed
/// through `enter_text`, which flattens newlines and tabs to single spaces
/// (the entry surface is one line) and strips terminal escape sequences.
#[derive(Default, Zeroize, ZeroizeOnDrop)]
pub struct DraftInput {
    text: String,
    cursor: usize,
}

impl std::fmt::Debug for DraftInput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DraftInput")
            .field("text", &"<redacted>")
            .field("cursor", &self.cursor)
            .finish()
    }
}

impl DraftInput {
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[must_use]
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Takes the buffer out of the editor, leaving it empty.
    ///
    /// The caller owns the returned string and is responsible for wiping it.
    pub fn take_text(&mut self) -> String {
        self.cursor = 0;
        std::mem::take(&mut self.text)
    }

    /// Clears the buffer, overwriting its bytes first.
    pub fn clear(&mut self) {
        self.text.zeroize();
        self.cursor = 0;
    }

    pub fn move_cursor_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_cursor_right(&mut self) {
        let cursor_moved_right = self.cursor.saturating_add(1);
        self.cursor = self.clamp_cursor(cursor_moved_right);
    }

    pub fn move_cursor_home(&mut self) {
        self.cursor = 0;
    }

    pub fn move_cursor_end(&mut self) {
        self.cursor = self.grapheme_count();
    }

    /// Inserts a typed character at the cursor. Control characters are
    /// dropped; the entry surface is a single line.
    pub fn enter_char(&mut self, new_char: char) {
        if new_char.is_control() {
            return;
        }
        let index = self.byte_index();
        self.text.insert(index, new_char);
        self.move_cursor_right();
    }

    /// Inserts pasted text at the cursor.
    ///
    /// Escape sequences are stripped before insertion so a hostile paste
    /// cannot smuggle terminal control bytes, and line breaks and tabs are
    /// flattened to single spaces. A phrase copied from a backup note often
    /// arrives with a trailing newline; flattening keeps it on one line
    /// instead of submitting early or corrupting the display.
    pub fn enter_text(&mut self, text: &str) {
        if text.is_empty() {
            return;
        }
        let sanitized = sanitize_terminal_text(text);
        let mut flattened = String::with_capacity(sanitized.len());
        for c in sanitized.chars() {
            match c {
                '\n' | '\r' | '\t' => flattened.push(' '),
                c if c.is_control() => {}
                c => flattened.push(c),
            }
        }

        let index = self.byte_index();
        self.text.insert_str(index, &flattened);
        let inserted = flattened.graphemes(true).count();
        self.cursor = self.clamp_cursor(self.cursor.saturating_add(inserted));
        flattened.zeroize();
    }

    pub fn delete_char(&mut self) {
        if self.cursor == 0 {
            return;
        }

        let start = self.byte_index_at(self.cursor - 1);
        let end = self.byte_index_at(self.cursor);
        self.text.replace_range(start..end, "");
        self.move_cursor_left();
    }

    pub fn delete_char_forward(&mut self) {
        let grapheme_count = self.grapheme_count();
        if self.cursor >= grapheme_count {
            return;
        }

        let start = self.byte_index_at(self.cursor);
        let end = self.byte_index_at(self.cursor + 1);
        self.text.replace_range(start..end, "");
    }

    pub fn delete_word_backwards(&mut self) {
        while self.cursor > 0 {
            let idx = self.cursor - 1;
            if self.grapheme_is_whitespace(idx) {
                self.delete_char();
            } else {
                break;
            }
        }

        while self.cursor > 0 {
            let idx = self.cursor - 1;
            if self.grapheme_is_whitespace(idx) {
                break;
            }
            self.delete_char();
        }
    }

    /// Deletes everything before the cursor, wiping the removed bytes.
    pub fn delete_to_start(&mut self) {
        if self.cursor == 0 {
            return;
        }
        let end = self.byte_index();
        let mut removed: String = self.text.drain(..end).collect();
        removed.zeroize();
        self.cursor = 0;
    }

    #[must_use]
    pub fn grapheme_count(&self) -> usize {
        self.text.graphemes(true).count()
    }

    fn grapheme_is_whitespace(&self, index: usize) -> bool {
        self.text
            .graphemes(true)
            .nth(index)
            .is_some_and(|grapheme| grapheme.chars().all(char::is_whitespace))
    }

    #[must_use]
    pub fn byte_index(&self) -> usize {
        self.byte_index_at(self.cursor)
    }

    fn byte_index_at(&self, grapheme_index: usize) -> usize {
        self.text
            .grapheme_indices(true)
            .nth(grapheme_index)
            .map_or(self.text.len(), |(i, _)| i)
    }

    fn clamp_cursor(&self, new_cursor_pos: usize) -> usize {
        let max = self.grapheme_count();
        new_cursor_pos.min(max)
    }
}
