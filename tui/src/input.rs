//! Input handling for the Reclaim TUI.

use anyhow::{Result, anyhow};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::{
    sync::{
        Arc,
        atomic::{AtomicBool, Ordering},
    },
    time::{Duration, Instant},
};
use tokio::sync::mpsc;
use tracing::debug;
use zeroize::Zeroize;

use reclaim_engine::{App, DialogChoice, DialogRef, EditorMut, EditorRef};

const INPUT_POLL_TIMEOUT: Duration = Duration::from_millis(25); // shutdown responsiveness
const INPUT_CHANNEL_CAPACITY: usize = 1024; // bounded: no OOM
const MAX_EVENTS_PER_FRAME: usize = 64; // never starve rendering

/// Heuristics for detecting paste when the terminal doesn't emit `Event::Paste`.
///
/// On Windows, crossterm reads input via WinAPI records (not VT input sequences), so paste
/// arrives as a burst of key events. During a paste burst, bare `Enter` belongs to the pasted
/// text and must not submit the phrase.
const PASTE_INTER_KEY_THRESHOLD: Duration = Duration::from_millis(20);
const PASTE_IDLE_TIMEOUT: Duration = Duration::from_millis(75);
const PASTE_QUEUE_THRESHOLD: usize = 32;

fn normalize_line_endings(text: &str) -> String {
    text.replace("\r\n", "\n").replace('\r', "\n")
}

enum InputMsg {
    Event(Event),
    Error(String),
}

/// Pure timing mechanism for detecting paste bursts.
///
/// Reports whether a burst is active (`bool`). Owns no policy — the decision
/// about what a burst means is made in `handle_events`.
#[derive(Debug)]
struct PasteDetector {
    last_key_time: Instant,
    active_until: Instant,
}

impl PasteDetector {
    fn new(now: Instant) -> Self {
        Self {
            last_key_time: now,
            active_until: now,
        }
    }

    fn reset(&mut self, now: Instant) {
        self.last_key_time = now;
        self.active_until = now;
    }

    fn update(&mut self, now: Instant, backlog: usize, event: &Event) -> bool {
        // Only key press + repeat events participate in detection.
        let is_key_event = matches!(
            event,
            Event::Key(KeyEvent {
                kind: KeyEventKind::Press | KeyEventKind::Repeat,
                ..
            })
        );

        let was_active = now < self.active_until;
        let backlog_high = backlog >= PASTE_QUEUE_THRESHOLD;
        let rapid =
            is_key_event && now.duration_since(self.last_key_time) < PASTE_INTER_KEY_THRESHOLD;

        let active = was_active || backlog_high || rapid;

        if is_key_event {
            if active {
                // Keep paste mode alive across frame pacing and scheduling hiccups.
                self.active_until = now + PASTE_IDLE_TIMEOUT;
            }
            self.last_key_time = now;
        }

        active
    }
}

pub struct InputPump {
    rx: mpsc::Receiver<InputMsg>,
    stop: Arc<AtomicBool>,
    join: Option<tokio::task::JoinHandle<()>>,
    paste: PasteDetector,
}

impl InputPump {
    #[must_use]
    pub fn new() -> Self {
        let (tx, rx) = mpsc::channel(INPUT_CHANNEL_CAPACITY);
        let stop = Arc::new(AtomicBool::new(false));
        let stop2 = stop.clone();

        let join = tokio::task::spawn_blocking(move || input_loop(stop2, tx));
        let now = Instant::now();
        Self {
            rx,
            stop,
            join: Some(join),
            paste: PasteDetector::new(now),
        }
    }

    pub async fn shutdown(&mut self) {
        // Close the receiver first to ensure the input thread unblocks if it is currently
        // backpressured on a send (e.g., during a large paste).
        self.rx.close();

        self.stop.store(true, Ordering::Release);
        if let Some(join) = self.join.take() {
            let _ = tokio::time::timeout(std::time::Duration::from_secs(2), join).await;
        }
    }
}

impl Default for InputPump {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for InputPump {
    fn drop(&mut self) {
        // Best-effort stop if caller exits early; do not block in Drop.
        //
        // Close the receiver to ensure the input thread unblocks if it is currently waiting on
        // channel capacity (e.g., during a large paste).
        self.rx.close();
        self.stop.store(true, Ordering::Release);
    }
}

fn input_loop(stop: Arc<AtomicBool>, tx: mpsc::Sender<InputMsg>) {
    while !stop.load(Ordering::Acquire) {
        match event::poll(INPUT_POLL_TIMEOUT) {
            Ok(true) => match event::read() {
                Ok(ev) => {
                    // Bounded queue: apply backpressure instead of dropping events.
                    // This preserves correctness (e.g., multi-word pastes) while still
                    // preventing unbounded memory growth.
                    if tx.blocking_send(InputMsg::Event(ev)).is_err() {
                        break;
                    }
                }
                Err(e) => {
                    let _ = tx.blocking_send(InputMsg::Error(e.to_string()));
                    break;
                }
            },
            Ok(false) => {}
            Err(e) => {
                let _ = tx.blocking_send(InputMsg::Error(e.to_string()));
                break;
            }
        }
    }
}

/// Drains pending input and applies it to the app.
///
/// Returns `Ok(true)` once the flow has resolved and the caller should stop
/// its loop.
pub fn handle_events(app: &mut App, input: &mut InputPump) -> Result<bool> {
    let mut processed = 0;
    while processed < MAX_EVENTS_PER_FRAME {
        let ev = match input.rx.try_recv() {
            Ok(InputMsg::Event(ev)) => ev,
            Ok(InputMsg::Error(msg)) => return Err(anyhow!("input error: {msg}")),
            Err(mpsc::error::TryRecvError::Empty) => break,
            Err(mpsc::error::TryRecvError::Disconnected) => {
                return Err(anyhow!("input pump disconnected"));
            }
        };

        let now = Instant::now();
        let backlog = input.rx.len();

        let paste_active = if matches!(app.editor(), EditorRef::Active(_)) {
            input.paste.update(now, backlog, &ev)
        } else {
            input.paste.reset(now);
            false
        };

        if paste_active {
            debug!(backlog, "Input paste detection active (fallback heuristics)");
        }

        if apply_event(app, ev, paste_active) {
            return Ok(true);
        }

        processed += 1;
    }
    Ok(app.is_resolved())
}

fn apply_event(app: &mut App, event: Event, paste_active: bool) -> bool {
    match event {
        Event::Key(key) => {
            // Handle press + repeat events (ignore releases)
            if matches!(key.kind, KeyEventKind::Release) {
                return app.is_resolved();
            }

            // Ctrl+C cancels from anywhere. Someone typing a secret always
            // has a one-keystroke way out.
            if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
                app.cancel();
                return true;
            }

            match app.dialog() {
                DialogRef::Active { .. } => handle_dialog_key(app, key),
                DialogRef::Inactive => handle_entry_key(app, key, paste_active),
            }
        }
        Event::Paste(text) => {
            let mut normalized = normalize_line_endings(&text);
            if let EditorMut::Active(draft) = app.editor_mut() {
                draft.enter_text(&normalized);
            }
            normalized.zeroize();
        }
        _ => {}
    }
    app.is_resolved()
}

fn handle_dialog_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Left | KeyCode::Char('h') => app.dialog_focus(DialogChoice::Secondary),
        KeyCode::Right | KeyCode::Char('l') => app.dialog_focus(DialogChoice::Primary),
        KeyCode::Tab | KeyCode::BackTab => app.dialog_toggle_focus(),
        KeyCode::Enter => app.dialog_activate(),
        // Esc backs out to a fresh attempt, same as "Try again".
        KeyCode::Esc => app.resolve_dialog(DialogChoice::Secondary),
        _ => {}
    }
}

fn handle_entry_key(app: &mut App, key: KeyEvent, paste_active: bool) {
    // A bare Enter inside a paste burst is part of the pasted text
    // (fallback when the terminal doesn't emit `Event::Paste`); a phrase
    // copied with a trailing newline must not submit half-typed.
    let is_paste_newline =
        paste_active && key.code == KeyCode::Enter && key.modifiers.is_empty();
    if is_paste_newline {
        if let EditorMut::Active(draft) = app.editor_mut() {
            draft.enter_text(" ");
        }
        return;
    }

    match key.code {
        KeyCode::Enter => {
            app.submit();
        }
        KeyCode::Esc => {
            app.cancel();
        }
        _ => {
            let EditorMut::Active(draft) = app.editor_mut() else {
                return;
            };

            match key.code {
                KeyCode::Backspace => {
                    draft.delete_char();
                }
                KeyCode::Delete => {
                    draft.delete_char_forward();
                }
                KeyCode::Left => {
                    draft.move_cursor_left();
                }
                KeyCode::Right => {
                    draft.move_cursor_right();
                }
                KeyCode::Home => {
                    draft.move_cursor_home();
                }
                KeyCode::End => {
                    draft.move_cursor_end();
                }
                KeyCode::Char('a') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                    draft.move_cursor_home();
                }
                KeyCode::Char('e') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                    draft.move_cursor_end();
                }
                KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                    draft.delete_to_start();
                }
                KeyCode::Char('w') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                    draft.delete_word_backwards();
                }
                // Insert character (ignore \r - it's handled via Enter or normalized in paste)
                KeyCode::Char(c)
                    if c != '\r'
                        && !key
                            .modifiers
                            .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
                {
                    draft.enter_char(c);
                }
                _ => {}
            }
        }
    }
}
