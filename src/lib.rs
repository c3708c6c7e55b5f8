//! précis: a terminal client for AI text summarization.
//!
//! précis is an interactive TUI that submits free text to a remote
//! summarization service and displays the result with reduction statistics:
//! - Multi-line text entry with paste support and live character/word counts
//! - Submission gating (minimum length, single in-flight request)
//! - Summary display with original/summary/reduction stats
//! - Copy-to-clipboard with a transient confirmation
//! - Service reachability indicator and auxiliary health/version commands
//!
//! # Architecture
//!
//! The crate follows a layered architecture pattern:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Terminal Runtime (main.rs)                         │  ← Entry point
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │  ← State machine
//! │  - Event handling                                   │  ← Business logic
//! │  - Action dispatching                               │
//! │  - View model computation                           │
//! └─────────────────────────────────────────────────────┘
//!         │                    │                    │
//! ┌───────────────┐   ┌───────────────┐   ┌───────────────┐
//! │ UI Layer      │   │ Service Layer │   │ Worker Layer  │
//! │ (ui/)         │   │ (api/)        │   │ (worker/)     │
//! │ - Rendering   │   │ - HTTP client │   │ - Async calls │
//! │ - Theming     │   │ - Wire models │   │ - Error map   │
//! │ - Components  │   │ - Backend API │   │ - Channels    │
//! └───────────────┘   └───────────────┘   └───────────────┘
//!         │                    │                    │
//! ┌─────────────────────────────────────────────────────┐
//! │  Infrastructure & Domain Layers                     │
//! │  - Platform paths (infrastructure/)                 │
//! │  - Error types, validation, stats (domain/)         │
//! │  - Clipboard side effects (clipboard/)              │
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Observability (observability/)                     │
//! │  - tracing spans and events                         │
//! │  - Rotating log file output                         │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Request Lifecycle
//!
//! 1. **Edit**: Characters and pastes accumulate in the input buffer
//! 2. **Submit** (ctrl+enter): the handler rejects the attempt while a
//!    request is in flight or the trimmed input is empty, then validates
//! 3. **Validate**: too-short input fails locally with a message; no network
//!    call is made
//! 4. **Request**: valid input is posted to the worker, which performs the
//!    one HTTP call; the UI stays responsive with the input locked
//! 5. **Resolve**: a success response yields the summary plus derived stats;
//!    any failure yields a message (the service's own when it sent one)
//! 6. **Copy** (ctrl+y): from a successful result only; confirmation shows
//!    for two seconds
//!
//! # Key Design Decisions
//!
//! ## Explicit Render Signal
//!
//! `handle_event` returns `(should_render, actions)`. State transitions are
//! published through that boolean; the runtime redraws in response, keeping
//! the state machine decoupled from the rendering technology.
//!
//! ## Single In-Flight Request
//!
//! The `Requesting` state is the only concurrency guard. A second submission
//! while one is in flight is rejected outright, never queued, and a request
//! always runs to resolution; there is no cancellation path.
//!
//! ## Token-Superseded Timers
//!
//! The copy confirmation resets via a scheduled event carrying a generation
//! token. New copies, submissions, and clears bump the generation instead of
//! cancelling timers; a stale reset simply does nothing.

pub mod api;
pub mod app;
pub mod clipboard;
pub mod domain;
pub mod infrastructure;
pub mod observability;
pub mod ui;
pub mod worker;

pub use app::{handle_event, Action, AppState, Event, ServiceStatus, SubmissionState};
pub use domain::{PrecisError, Result};
pub use ui::Theme;

/// Client configuration assembled from CLI arguments and environment.
///
/// The client keeps no configuration file and no local storage; everything
/// here comes from the command line (with environment fallbacks) and lives
/// for one session.
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the summarization service.
    pub service_url: String,

    /// End-to-end timeout for each service request, in seconds.
    pub timeout_secs: u64,

    /// Built-in theme name to use. Ignored if `theme_file` is set.
    pub theme_name: Option<String>,

    /// Path to a custom TOML theme file. Takes precedence over `theme_name`.
    pub theme_file: Option<String>,

    /// Tracing level when `RUST_LOG` is not set.
    ///
    /// Options: `trace`, `debug`, `info`, `warn`, `error`. Default: `"info"`
    pub trace_level: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            service_url: "http://localhost:5000".to_string(),
            timeout_secs: 60,
            theme_name: None,
            theme_file: None,
            trace_level: None,
        }
    }
}

/// Initializes application state from configuration.
///
/// Resolves the theme (file takes precedence over name, falling back to the
/// default on any load failure) and creates an idle [`AppState`]. One state
/// instance serves the whole session; it is owned by the runtime, not shared.
#[must_use]
pub fn initialize(config: &Config) -> AppState {
    tracing::debug!(service_url = %config.service_url, "initializing client");

    let theme = config.theme_file.as_ref().map_or_else(
        || {
            config.theme_name.as_ref().map_or_else(Theme::default, |name| {
                Theme::from_name(name).unwrap_or_else(|| {
                    tracing::debug!(theme_name = %name, "unknown theme, using default");
                    Theme::default()
                })
            })
        },
        |file| {
            let path = infrastructure::expand_tilde(file);
            Theme::from_file(&path).unwrap_or_else(|e| {
                tracing::debug!(theme_file = %file, error = %e, "failed to load theme file, using default");
                Theme::default()
            })
        },
    );

    AppState::new(theme)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_points_at_local_service() {
        let config = Config::default();
        assert_eq!(config.service_url, "http://localhost:5000");
        assert_eq!(config.timeout_secs, 60);
    }

    #[test]
    fn initialize_starts_idle_with_default_theme() {
        let state = initialize(&Config::default());
        assert_eq!(state.submission, SubmissionState::Idle);
        assert_eq!(state.theme.name, "slate-dark");
        assert!(state.input.is_empty());
    }

    #[test]
    fn initialize_falls_back_on_unknown_theme() {
        let state = initialize(&Config {
            theme_name: Some("missing".to_string()),
            ..Config::default()
        });
        assert_eq!(state.theme.name, "slate-dark");
    }

    #[test]
    fn initialize_honors_named_theme() {
        let state = initialize(&Config {
            theme_name: Some("paper-light".to_string()),
            ..Config::default()
        });
        assert_eq!(state.theme.name, "paper-light");
    }
}
