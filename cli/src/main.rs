//! Reclaim CLI - binary entry point and terminal session management.
//!
//! # Architecture
//!
//! The CLI bridges [`reclaim_engine`] (flow state) and [`reclaim_tui`]
//! (rendering), providing RAII-based terminal management with guaranteed
//! cleanup.
//!
//! ```text
//! main() -> TerminalSession::new() -> run_app() -> FlowOutcome
//! ```
//!
//! # Event Loop
//!
//! A fixed 8ms (~120 FPS) render cadence:
//!
//! 1. Wait for frame tick
//! 2. Drain input queue (non-blocking via [`reclaim_tui::InputPump`])
//! 3. Advance application state (`app.tick()`)
//! 4. Render frame
//! 5. Stop once the flow resolves
//!
//! The outcome is emitted only after the terminal session is torn down: an
//! accepted phrase goes to stdout (exit 0), a cancellation prints nothing
//! and exits 1, so a parent process can capture stdout the way it would
//! from an askpass helper. stderr and the log file carry diagnostics only.

mod crash_hardening;

use anyhow::{Result, bail};
use crossterm::{
    event::{DisableBracketedPaste, EnableBracketedPaste},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Terminal,
    backend::{Backend, CrosstermBackend},
};
use std::{
    env,
    fs::{self, OpenOptions},
    io::{Stdout, stdout},
    path::{Path, PathBuf},
    process::ExitCode,
    sync::Mutex,
    time::Duration,
};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use reclaim_engine::{App, FlowOutcome, ReclaimConfig, StatusKind, UiOptions};
use reclaim_phrase::Bip39Validator;
use reclaim_tui::{InputPump, draw, handle_events};

const USAGE: &str = "\
Usage: reclaim [OPTIONS]

Interactive recovery phrase entry. The accepted phrase is printed to
stdout and the process exits 0; a cancelled flow prints nothing and
exits 1.

Options:
      --json       Emit the outcome as a JSON object
  -h, --help       Print help
  -V, --version    Print version
";

#[derive(Debug, Default, Clone, Copy)]
struct CliArgs {
    json: bool,
}

fn parse_args() -> CliArgs {
    let mut args = CliArgs::default();
    for arg in env::args().skip(1) {
        match arg.as_str() {
            "--json" => args.json = true,
            "-h" | "--help" => {
                print!("{USAGE}");
                std::process::exit(0);
            }
            "-V" | "--version" => {
                println!("reclaim {}", env!("CARGO_PKG_VERSION"));
                std::process::exit(0);
            }
            other => {
                eprintln!("reclaim: unrecognized argument '{other}'\n");
                eprint!("{USAGE}");
                std::process::exit(2);
            }
        }
    }
    args
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_env("RECLAIM_LOG")
        .or_else(|_| EnvFilter::try_new("info"))
        .unwrap_or_else(|_| EnvFilter::try_new("warn").expect("warn filter is valid"));

    let (log_file, init_warnings) = open_reclaim_log_file();

    if let Some((log_path, file)) = log_file {
        tracing_subscriber::registry()
            .with(fmt::layer().with_ansi(false).with_writer(Mutex::new(file)))
            .with(env_filter)
            .init();

        tracing::info!(path = %log_path.display(), "Logging initialized");
        for warning in init_warnings {
            tracing::warn!("{warning}");
        }
        return;
    }

    // If we can't open a log file, prefer "no logs" over corrupting the TUI
    // by writing to stdout/stderr.
    tracing_subscriber::registry().with(env_filter).init();
}

fn open_reclaim_log_file() -> (Option<(PathBuf, std::fs::File)>, Vec<String>) {
    let candidates = reclaim_log_file_candidates();
    let mut warnings = Vec::new();

    for candidate in candidates {
        if let Some(parent) = candidate.parent()
            && let Err(e) = ensure_secure_log_dir(parent)
        {
            warnings.push(format!(
                "Failed to create log dir {}: {e}",
                parent.display()
            ));
            continue;
        }

        match OpenOptions::new()
            .create(true)
            .append(true)
            .open(&candidate)
        {
            Ok(file) => return (Some((candidate, file)), warnings),
            Err(e) => {
                warnings.push(format!(
                    "Failed to open log file {}: {e}",
                    candidate.display()
                ));
            }
        }
    }

    (None, warnings)
}

fn reclaim_log_file_candidates() -> Vec<PathBuf> {
    let mut candidates = Vec::new();

    // Primary: ~/.reclaim/logs/reclaim.log
    if let Some(config_path) = ReclaimConfig::path()
        && let Some(config_dir) = config_path.parent()
    {
        candidates.push(config_dir.join("logs").join("reclaim.log"));
    }

    // Fallback: ./.reclaim/logs/reclaim.log (useful in constrained environments)
    candidates.push(PathBuf::from(".reclaim").join("logs").join("reclaim.log"));

    candidates
}

/// Creates the log directory and tightens it and the dot-dir above it to
/// `0o700`.
fn ensure_secure_log_dir(dir: &Path) -> std::io::Result<()> {
    ensure_secure_dir(dir)?;
    if let Some(dot_dir) = dir.parent()
        && !dot_dir.as_os_str().is_empty()
    {
        ensure_secure_dir(dot_dir)?;
    }
    Ok(())
}

fn ensure_secure_dir(path: &Path) -> std::io::Result<()> {
    fs::create_dir_all(path)?;
    #[cfg(unix)]
    {
        use std::os::unix::fs::{MetadataExt, PermissionsExt};
        let metadata = fs::metadata(path)?;

        // Only modify permissions if we own the directory
        let our_uid = unsafe { libc::getuid() };
        if metadata.uid() != our_uid {
            return Ok(());
        }

        let mode = metadata.permissions().mode() & 0o777;
        if mode & 0o077 != 0 {
            fs::set_permissions(path, fs::Permissions::from_mode(0o700))?;
        }
    }
    Ok(())
}

/// Display options: configuration first, environment overrides second.
fn resolve_ui_options(config: Option<&ReclaimConfig>) -> UiOptions {
    let mut ui = config.map(ReclaimConfig::ui_options).unwrap_or_default();
    if let Some(ascii) = env_flag("RECLAIM_ASCII") {
        ui.ascii_only = ascii;
    }
    if let Some(contrast) = env_flag("RECLAIM_HIGH_CONTRAST") {
        ui.high_contrast = contrast;
    }
    ui
}

fn env_flag(name: &str) -> Option<bool> {
    env::var(name)
        .ok()
        .map(|raw| crash_hardening::is_truthy(&raw))
}

/// RAII wrapper for terminal state with guaranteed cleanup on drop.
///
/// Manages raw mode (disables line buffering and echo), bracketed paste
/// (detects pasted text vs typed input), and the alternate screen.
///
/// On drop, all terminal state is restored to its original configuration,
/// ensuring the terminal remains usable even after panics or early returns.
struct TerminalSession {
    terminal: Terminal<CrosstermBackend<Stdout>>,
}

impl TerminalSession {
    fn new() -> Result<Self> {
        enable_raw_mode()?;

        let mut out = stdout();
        if let Err(err) = execute!(out, EnableBracketedPaste) {
            let _ = disable_raw_mode();
            return Err(err.into());
        }
        if let Err(err) = execute!(out, EnterAlternateScreen) {
            let _ = disable_raw_mode();
            let _ = execute!(out, LeaveAlternateScreen, DisableBracketedPaste);
            return Err(err.into());
        }

        let backend = CrosstermBackend::new(out);
        match Terminal::new(backend) {
            Ok(terminal) => Ok(Self { terminal }),
            Err(err) => {
                let _ = disable_raw_mode();
                let mut out = stdout();
                let _ = execute!(out, LeaveAlternateScreen, DisableBracketedPaste);
                Err(err.into())
            }
        }
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(
            self.terminal.backend_mut(),
            LeaveAlternateScreen,
            DisableBracketedPaste
        );
        let _ = self.terminal.show_cursor();
    }
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let args = parse_args();

    init_tracing();

    if let Err(err) = crash_hardening::apply() {
        // Still usable, just without dump protection (e.g. sandboxes that
        // deny prctl). The flow itself is unaffected.
        tracing::warn!("Crash dump hardening unavailable: {err:#}");
    }

    let mut config_warning = None;
    let config = match ReclaimConfig::load() {
        Ok(config) => config,
        Err(err) => {
            config_warning = Some(format!(
                "config at {} was unreadable, using defaults",
                err.path().display()
            ));
            None
        }
    };
    let ui = resolve_ui_options(config.as_ref());

    let mut app = App::new(Box::new(Bip39Validator), ui);
    if let Some(warning) = config_warning {
        app.set_status(StatusKind::Warning, warning);
    }

    let run_result = {
        let mut session = TerminalSession::new()?;
        run_app(&mut session.terminal, &mut app).await
    };
    run_result?;

    let Some(outcome) = app.into_outcome() else {
        bail!("flow ended without resolving");
    };

    match &outcome {
        FlowOutcome::Accepted(phrase) => {
            if args.json {
                println!("{}", serde_json::to_string(&outcome)?);
            } else {
                println!("{phrase}");
            }
            tracing::info!(
                words = phrase.split_whitespace().count(),
                "Flow resolved: accepted"
            );
            Ok(ExitCode::SUCCESS)
        }
        FlowOutcome::Cancelled => {
            if args.json {
                println!("{}", serde_json::to_string(&outcome)?);
            }
            tracing::info!("Flow resolved: cancelled");
            Ok(ExitCode::from(1))
        }
    }
}

const FRAME_DURATION: Duration = Duration::from_millis(8);

async fn run_app<B>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()>
where
    B: Backend,
    B::Error: Send + Sync + 'static,
{
    let mut input = InputPump::new();
    let mut frames = tokio::time::interval(FRAME_DURATION);
    frames.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);

    let result: Result<()> = loop {
        frames.tick().await;

        // Non-blocking input (drain queue only)
        let resolved = match handle_events(app, &mut input) {
            Ok(resolved) => resolved,
            Err(e) => break Err(e),
        };
        if resolved {
            break Ok(());
        }

        app.tick();

        if let Err(e) = terminal.draw(|frame| draw(frame, app)) {
            break Err(e.into());
        }
    };

    input.shutdown().await;
    result
}
