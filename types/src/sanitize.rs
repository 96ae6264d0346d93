//! Terminal text sanitization for secure display.
//!
//! Everything the intake surface echoes back (pasted phrases, status text)
//! originates outside the program: a clipboard manager, a password vault, a
//! file opened in another terminal. That text must be stripped of escape
//! sequences before rendering, or a hostile paste could do real damage:
//!
//! - OSC 52 reads and rewrites the clipboard the secret came from
//! - OSC 8 dresses arbitrary text up as a hyperlink
//! - CSI cursor movement repaints the screen around the prompt
//!
//! The echo path calls [`sanitize_terminal_text`] on every string it hands
//! to the renderer.

use std::borrow::Cow;

/// ASCII escape, the lead-in for ANSI sequences.
const ESC: char = '\x1b';
/// ASCII bell, one of the two OSC terminators.
const BEL: char = '\x07';
/// C1 single-byte CSI introducer.
const C1_CSI: char = '\u{009b}';

/// Sanitize text for safe terminal display.
///
/// Strips ANSI escape sequences (CSI, OSC, DCS and friends), C0 controls
/// other than `\n`, `\t` and `\r`, the C1 range (`\u{80}`-`\u{9F}`), and
/// DEL. Printable ASCII and all other UTF-8 pass through untouched.
///
/// Returns `Cow::Borrowed` when the input is already clean, which is the
/// common case for hand-typed phrases.
///
/// # Examples
///
/// ```
/// use reclaim_types::sanitize_terminal_text;
///
/// // A hand-typed phrase passes through without allocation
/// let clean = "abandon ability able";
/// assert_eq!(sanitize_terminal_text(clean), clean);
///
/// // A paste with embedded color codes comes out bare
/// let pasted = "\x1b[32mabandon ability able\x1b[0m";
/// assert_eq!(sanitize_terminal_text(pasted), "abandon ability able");
/// ```
#[must_use]
pub fn sanitize_terminal_text(input: &str) -> Cow<'_, str> {
    if input.chars().all(is_safe) {
        return Cow::Borrowed(input);
    }

    let mut out = String::with_capacity(input.len());
    let mut chars = input.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            ESC => consume_escape(&mut chars),
            // The C1 CSI byte opens a parameter sequence just like ESC [.
            C1_CSI => consume_csi_body(&mut chars),
            _ if is_safe(c) => out.push(c),
            _ => {}
        }
    }

    Cow::Owned(out)
}

/// Whether a character may reach the terminal unmodified.
fn is_safe(c: char) -> bool {
    match c {
        '\n' | '\t' | '\r' => true,
        '\x00'..='\x1f' | '\x7f' => false,
        '\u{0080}'..='\u{009f}' => false,
        _ => true,
    }
}

/// Consume one escape sequence, positioned just after the ESC byte.
fn consume_escape<I: Iterator<Item = char>>(chars: &mut std::iter::Peekable<I>) {
    match chars.peek().copied() {
        // CSI: ESC [ <params> <final byte>
        Some('[') => {
            chars.next();
            consume_csi_body(chars);
        }
        // OSC: ESC ] <payload> (BEL | ESC \)
        Some(']') => {
            chars.next();
            consume_osc_body(chars);
        }
        // DCS / PM / APC run until the string terminator
        Some('P' | '^' | '_') => {
            chars.next();
            consume_to_string_terminator(chars);
        }
        // Two-character forms: charset selection, line attributes
        Some('(' | ')' | '*' | '+' | '#' | ' ') => {
            chars.next();
            chars.next();
        }
        // Single-character commands: save/restore cursor, reset, keypad modes
        Some('7' | '8' | 'c' | 'D' | 'E' | 'H' | 'M' | 'N' | 'O' | 'Z' | '=' | '>' | '<') => {
            chars.next();
        }
        // Unknown or truncated; drop the ESC alone and let the next
        // character be processed normally
        _ => {}
    }
}

/// Consume CSI parameter and intermediate bytes through the final byte.
///
/// Stops without consuming when a byte outside the CSI grammar appears, so
/// innocent text after a malformed sequence survives.
fn consume_csi_body<I: Iterator<Item = char>>(chars: &mut std::iter::Peekable<I>) {
    while let Some(&c) = chars.peek() {
        if ('\x40'..='\x7e').contains(&c) {
            // Final byte
            chars.next();
            return;
        }
        if !('\x20'..='\x3f').contains(&c) {
            return;
        }
        chars.next();
    }
}

/// Consume an OSC payload through BEL or ST (ESC \).
fn consume_osc_body<I: Iterator<Item = char>>(chars: &mut std::iter::Peekable<I>) {
    while let Some(c) = chars.next() {
        if c == BEL {
            return;
        }
        if c == ESC && chars.peek() == Some(&'\\') {
            chars.next();
            return;
        }
    }
}

/// Consume a DCS/PM/APC payload through ST (ESC \).
fn consume_to_string_terminator<I: Iterator<Item = char>>(chars: &mut std::iter::Peekable<I>) {
    while let Some(c) = chars.next() {
        if c == ESC && chars.peek() == Some(&'\\') {
            chars.next();
            return;
        }
    }
}
