//! Terminal runtime and entry point.
//!
//! This module provides the thin integration layer between the précis library
//! and the terminal: CLI parsing, terminal setup/teardown, the async event
//! loop, and execution of the actions the event handler emits.
//!
//! # Runtime Lifecycle
//!
//! 1. **Parse**: Read CLI arguments and environment into `Config`
//! 2. **Init**: Initialize tracing, application state, and the worker task
//! 3. **Setup**: Enter raw mode, the alternate screen, and bracketed paste
//! 4. **Loop**: Multiplex terminal input, worker responses, and timer events;
//!    each becomes a library `Event` fed to `handle_event`
//! 5. **Teardown**: Restore the terminal, even when the loop errors
//!
//! # Keybindings
//!
//! - `Ctrl+Enter` / `Ctrl+S`: Submit the input for summarization
//! - `Ctrl+Y`: Copy the summary to the clipboard
//! - `Ctrl+L`: Clear input and result
//! - `Ctrl+C` / `Ctrl+Q`: Quit
//! - Anything else: Edit the input (characters, Enter, Backspace, paste)
//!
//! `Ctrl+S` exists because many terminals report `Ctrl+Enter` as a plain
//! `Enter`; both map to the same submit event with the same guards.
//!
//! # Subcommands
//!
//! - `precis health`: Print the service liveness payload as JSON
//! - `precis version`: Print the service version payload as JSON

use clap::{Parser, Subcommand};
use crossterm::event::{
    DisableBracketedPaste, EnableBracketedPaste, Event as TermEvent, EventStream, KeyCode,
    KeyEvent, KeyEventKind, KeyModifiers,
};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use futures_util::StreamExt;
use precis::api::{HttpBackend, SummarizeBackend};
use precis::clipboard::{self, COPY_RESET_DELAY};
use precis::worker::{SummarizeWorker, WorkerMessage, WorkerResponse};
use precis::{handle_event, Action, AppState, Config, Event};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use std::io::{self, Stdout};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;

/// Summarize text from your terminal.
#[derive(Debug, Parser)]
#[command(name = "precis", version, about)]
struct Cli {
    /// Base URL of the summarization service.
    #[arg(long, env = "PRECIS_SERVICE_URL", default_value = "http://localhost:5000")]
    service_url: String,

    /// Request timeout in seconds.
    #[arg(long, env = "PRECIS_TIMEOUT_SECS", default_value_t = 60)]
    timeout_secs: u64,

    /// Built-in theme name (slate-dark, paper-light).
    #[arg(long, env = "PRECIS_THEME")]
    theme: Option<String>,

    /// Path to a custom TOML theme file. Takes precedence over --theme.
    #[arg(long)]
    theme_file: Option<String>,

    /// Tracing level when RUST_LOG is unset (trace, debug, info, warn, error).
    #[arg(long)]
    trace_level: Option<String>,

    #[command(subcommand)]
    command: Option<Command>,
}

/// Auxiliary one-shot commands against the service's read-only endpoints.
#[derive(Debug, Subcommand)]
enum Command {
    /// Check service liveness and print the payload.
    Health,
    /// Print service version and model information.
    Version,
}

impl Cli {
    fn to_config(&self) -> Config {
        Config {
            service_url: self.service_url.clone(),
            timeout_secs: self.timeout_secs,
            theme_name: self.theme.clone(),
            theme_file: self.theme_file.clone(),
            trace_level: self.trace_level.clone(),
        }
    }
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    let config = cli.to_config();
    precis::observability::init_tracing(&config);

    let result = match cli.command {
        Some(Command::Health) => run_health(&config).await,
        Some(Command::Version) => run_version(&config).await,
        None => run_tui(&config).await,
    };

    if let Err(e) = result {
        eprintln!("precis: {e}");
        std::process::exit(1);
    }
}

/// Fetches and prints the health payload.
async fn run_health(config: &Config) -> precis::Result<()> {
    let backend = build_backend(config)?;
    let payload = backend.health().await?;
    println!("{}", serde_json::to_string_pretty(&payload).unwrap_or_default());
    Ok(())
}

/// Fetches and prints the version payload.
async fn run_version(config: &Config) -> precis::Result<()> {
    let backend = build_backend(config)?;
    let info = backend.version().await?;
    println!("{}", serde_json::to_string_pretty(&info).unwrap_or_default());
    Ok(())
}

fn build_backend(config: &Config) -> precis::Result<HttpBackend> {
    HttpBackend::new(&config.service_url, Duration::from_secs(config.timeout_secs))
}

/// Runs the interactive client until the user quits.
async fn run_tui(config: &Config) -> precis::Result<()> {
    let backend = build_backend(config)?;
    let mut state = precis::initialize(config);

    let (worker_tx, worker_rx) = mpsc::unbounded_channel();
    let (response_tx, response_rx) = mpsc::unbounded_channel();
    tokio::spawn(SummarizeWorker::new(Arc::new(backend)).run(worker_rx, response_tx));

    // Internal events: clipboard completions and scheduled confirmation
    // resets flow back into the same handler as everything else.
    let (event_tx, event_rx) = mpsc::unbounded_channel();

    if worker_tx.send(WorkerMessage::ProbeService).is_err() {
        tracing::warn!("worker unavailable at startup");
    }

    let mut terminal = setup_terminal()?;
    let result = event_loop(
        &mut terminal,
        &mut state,
        &worker_tx,
        response_rx,
        &event_tx,
        event_rx,
    )
    .await;
    restore_terminal(&mut terminal)?;
    result
}

/// Multiplexes input sources and drives the state machine.
async fn event_loop(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    state: &mut AppState,
    worker_tx: &mpsc::UnboundedSender<WorkerMessage>,
    mut response_rx: mpsc::UnboundedReceiver<WorkerResponse>,
    event_tx: &mpsc::UnboundedSender<Event>,
    mut event_rx: mpsc::UnboundedReceiver<Event>,
) -> precis::Result<()> {
    let mut term_events = EventStream::new();
    terminal.draw(|frame| precis::ui::draw(frame, state))?;

    loop {
        let event = tokio::select! {
            maybe_term = term_events.next() => match maybe_term {
                Some(Ok(TermEvent::Resize(_, _))) => {
                    terminal.draw(|frame| precis::ui::draw(frame, state))?;
                    continue;
                }
                Some(Ok(term_event)) => match map_terminal_event(term_event) {
                    Some(event) => event,
                    None => continue,
                },
                Some(Err(e)) => {
                    tracing::warn!(error = %e, "terminal event stream error");
                    continue;
                }
                None => Event::Quit,
            },
            Some(response) = response_rx.recv() => Event::WorkerResponse(response),
            Some(internal) = event_rx.recv() => internal,
        };

        let (should_render, actions) = handle_event(state, &event)?;

        for action in actions {
            if execute_action(action, worker_tx, event_tx) == Flow::Quit {
                return Ok(());
            }
        }

        if should_render {
            terminal.draw(|frame| precis::ui::draw(frame, state))?;
        }
    }
}

/// Whether the loop continues after an action.
#[derive(Debug, PartialEq, Eq)]
enum Flow {
    Continue,
    Quit,
}

/// Executes one side-effect action emitted by the event handler.
fn execute_action(
    action: Action,
    worker_tx: &mpsc::UnboundedSender<WorkerMessage>,
    event_tx: &mpsc::UnboundedSender<Event>,
) -> Flow {
    match action {
        Action::PostToWorker(message) => {
            if worker_tx.send(message).is_err() {
                tracing::warn!("worker channel closed, dropping message");
            }
            Flow::Continue
        }

        Action::CopyToClipboard { text, token } => {
            let event_tx = event_tx.clone();
            tokio::spawn(async move {
                let ok = match tokio::task::spawn_blocking(move || clipboard::copy_text(&text))
                    .await
                {
                    Ok(Ok(())) => true,
                    Ok(Err(e)) => {
                        tracing::debug!(error = %e, "clipboard copy failed");
                        false
                    }
                    Err(e) => {
                        tracing::debug!(error = %e, "clipboard task panicked");
                        false
                    }
                };
                let _ = event_tx.send(Event::CopyCompleted { token, ok });
            });
            Flow::Continue
        }

        Action::ScheduleCopyReset { token } => {
            let event_tx = event_tx.clone();
            tokio::spawn(async move {
                tokio::time::sleep(COPY_RESET_DELAY).await;
                let _ = event_tx.send(Event::CopyResetDue { token });
            });
            Flow::Continue
        }

        Action::Quit => Flow::Quit,
    }
}

/// Translates a terminal event into a library event.
fn map_terminal_event(event: TermEvent) -> Option<Event> {
    match event {
        TermEvent::Key(key)
            if matches!(key.kind, KeyEventKind::Press | KeyEventKind::Repeat) =>
        {
            map_key_event(&key)
        }
        TermEvent::Paste(text) => Some(Event::Paste(text)),
        _ => None,
    }
}

/// Translates a key press into a library event.
fn map_key_event(key: &KeyEvent) -> Option<Event> {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Enter | KeyCode::Char('s') => Some(Event::Submit),
            KeyCode::Char('y') => Some(Event::Copy),
            KeyCode::Char('l') => Some(Event::Clear),
            KeyCode::Char('c') | KeyCode::Char('q') => Some(Event::Quit),
            _ => None,
        };
    }

    match key.code {
        KeyCode::Char(c) => Some(Event::Char(c)),
        KeyCode::Enter => Some(Event::Newline),
        KeyCode::Backspace => Some(Event::Backspace),
        _ => None,
    }
}

fn setup_terminal() -> precis::Result<Terminal<CrosstermBackend<Stdout>>> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableBracketedPaste)?;
    Ok(Terminal::new(CrosstermBackend::new(stdout))?)
}

fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> precis::Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen, DisableBracketedPaste)?;
    terminal.show_cursor()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent::new(code, modifiers)
    }

    #[test]
    fn submit_shortcut_maps_with_both_bindings() {
        assert_eq!(
            map_key_event(&press(KeyCode::Enter, KeyModifiers::CONTROL)),
            Some(Event::Submit)
        );
        assert_eq!(
            map_key_event(&press(KeyCode::Char('s'), KeyModifiers::CONTROL)),
            Some(Event::Submit)
        );
    }

    #[test]
    fn plain_keys_edit_the_input() {
        assert_eq!(
            map_key_event(&press(KeyCode::Char('s'), KeyModifiers::NONE)),
            Some(Event::Char('s'))
        );
        assert_eq!(
            map_key_event(&press(KeyCode::Enter, KeyModifiers::NONE)),
            Some(Event::Newline)
        );
        assert_eq!(
            map_key_event(&press(KeyCode::Backspace, KeyModifiers::NONE)),
            Some(Event::Backspace)
        );
    }

    #[test]
    fn control_keys_map_to_commands() {
        assert_eq!(
            map_key_event(&press(KeyCode::Char('y'), KeyModifiers::CONTROL)),
            Some(Event::Copy)
        );
        assert_eq!(
            map_key_event(&press(KeyCode::Char('l'), KeyModifiers::CONTROL)),
            Some(Event::Clear)
        );
        assert_eq!(
            map_key_event(&press(KeyCode::Char('q'), KeyModifiers::CONTROL)),
            Some(Event::Quit)
        );
        assert_eq!(
            map_key_event(&press(KeyCode::Char('x'), KeyModifiers::CONTROL)),
            None
        );
    }

    #[test]
    fn paste_events_carry_their_text() {
        assert_eq!(
            map_terminal_event(TermEvent::Paste("pasted".to_string())),
            Some(Event::Paste("pasted".to_string()))
        );
    }
}
