//! Application state management and view model computation.
//!
//! This module defines [`AppState`], the central state container for the
//! client, along with the mutation methods the event handler uses to move
//! through the request lifecycle. It is the single source of truth for all
//! transient UI state; nothing here persists beyond the session.
//!
//! # State Components
//!
//! - **Input**: The text being edited, read at submission time only
//! - **Submission**: The lifecycle state gating all operations
//! - **Outcome**: Either a summary with its derived stats, or an error
//!   message, never both
//! - **Copy confirmation**: Transient flag owned by the clipboard layer
//! - **Service status**: Startup probe result for the header indicator
//!
//! # Outcome Invariant
//!
//! Summary/stats and the error message are mutually exclusive. All outcome
//! mutations go through [`AppState::begin_submission`], [`AppState::succeed`],
//! [`AppState::fail`], and [`AppState::clear`], each of which clears the
//! other side first.
//!
//! # View Model Computation
//!
//! [`AppState::compute_viewmodel`] transforms a state snapshot into a
//! display-ready representation; rendering never reads `AppState` directly.

use crate::app::modes::{ServiceStatus, SubmissionState};
use crate::clipboard::CopyConfirmation;
use crate::domain::{Summary, SummaryStats, MIN_INPUT_CHARS};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{
    BannerInfo, FooterInfo, HeaderInfo, InputInfo, ResultInfo, StatsEntry, Tone, UiViewModel,
};

/// Central application state container.
///
/// Holds all transient UI state: the input buffer, the submission lifecycle,
/// the current outcome, and ambient indicators. Mutated only by the event
/// handler; view models are computed on demand from state snapshots.
///
/// One instance exists per running client, owned by the runtime. It is a
/// plain value, not a shared singleton; it is created at startup and dropped
/// on exit.
#[derive(Debug, Clone)]
pub struct AppState {
    /// The text being edited. Read by validation and submission only when a
    /// submit is attempted; editing it has no effect on the lifecycle.
    pub input: String,

    /// Where the current submission cycle stands.
    pub submission: SubmissionState,

    /// The last successful summary. Present exactly when `submission` is
    /// `Success`.
    pub summary: Option<Summary>,

    /// Stats derived from `summary`. Present exactly when `summary` is.
    pub stats: Option<SummaryStats>,

    /// User-facing failure message. Present exactly when `submission` is
    /// `Error`.
    pub error: Option<String>,

    /// Transient copied-to-clipboard acknowledgment.
    pub copy: CopyConfirmation,

    /// Service reachability, from the startup probe.
    pub service: ServiceStatus,

    /// When the displayed summary arrived, for the result header.
    pub completed_at: Option<chrono::DateTime<chrono::Local>>,

    /// Color scheme for UI rendering.
    pub theme: Theme,
}

impl AppState {
    /// Creates an idle state with an empty input buffer.
    #[must_use]
    pub fn new(theme: Theme) -> Self {
        Self {
            input: String::new(),
            submission: SubmissionState::Idle,
            summary: None,
            stats: None,
            error: None,
            copy: CopyConfirmation::new(),
            service: ServiceStatus::Unknown,
            completed_at: None,
            theme,
        }
    }

    /// Starts a new submission cycle.
    ///
    /// Clears the previous outcome (error, summary, stats) and the copy
    /// confirmation synchronously, then enters `Validating`. Any pending
    /// copy-reset timer is invalidated by the suppression.
    pub fn begin_submission(&mut self) {
        self.error = None;
        self.summary = None;
        self.stats = None;
        self.completed_at = None;
        self.copy.suppress();
        self.submission = SubmissionState::Validating;
    }

    /// Records a completed summary and enters `Success`.
    pub fn succeed(&mut self, summary: Summary, stats: SummaryStats) {
        self.error = None;
        self.summary = Some(summary);
        self.stats = Some(stats);
        self.completed_at = Some(chrono::Local::now());
        self.submission = SubmissionState::Success;
    }

    /// Records a failure message and enters `Error`.
    ///
    /// Used for both local validation failures and request failures; by the
    /// time a message reaches here it is already user-facing.
    pub fn fail(&mut self, message: impl Into<String>) {
        self.summary = None;
        self.stats = None;
        self.completed_at = None;
        self.error = Some(message.into());
        self.submission = SubmissionState::Error;
    }

    /// Resets everything editable back to `Idle`.
    ///
    /// Clears the input buffer, the outcome, and the copy confirmation.
    /// Idempotent; the handler refuses to call it while a request is in
    /// flight.
    pub fn clear(&mut self) {
        self.input.clear();
        self.error = None;
        self.summary = None;
        self.stats = None;
        self.completed_at = None;
        self.copy.suppress();
        self.submission = SubmissionState::Idle;
    }

    /// Character count of the raw input, untrimmed, as displayed.
    #[must_use]
    pub fn char_count(&self) -> usize {
        self.input.chars().count()
    }

    /// Whitespace-separated word count of the trimmed input.
    #[must_use]
    pub fn word_count(&self) -> usize {
        self.input.split_whitespace().count()
    }

    /// Computes a display-ready view model from the current state.
    ///
    /// The view model contains only strings and flags; layout and styling
    /// decisions stay in the rendering layer.
    #[must_use]
    pub fn compute_viewmodel(&self) -> UiViewModel {
        UiViewModel {
            header: self.compute_header(),
            input: self.compute_input(),
            banner: self.compute_banner(),
            result: self.compute_result(),
            footer: self.compute_footer(),
        }
    }

    fn compute_header(&self) -> HeaderInfo {
        let (status, status_tone) = match &self.service {
            ServiceStatus::Unknown => ("checking service".to_string(), Tone::Neutral),
            ServiceStatus::Ready { label: Some(label) } => {
                (format!("online | {label}"), Tone::Success)
            }
            ServiceStatus::Ready { label: None } => ("online".to_string(), Tone::Success),
            ServiceStatus::Unreachable => ("service unreachable".to_string(), Tone::Error),
        };

        HeaderInfo {
            title: "precis".to_string(),
            status,
            status_tone,
        }
    }

    fn compute_input(&self) -> InputInfo {
        let placeholder = if self.input.is_empty() {
            Some(format!(
                "Paste your article, essay, or any long text here (minimum {MIN_INPUT_CHARS} characters)"
            ))
        } else {
            None
        };

        InputInfo {
            text: self.input.clone(),
            counts: format!(
                "{} characters | {} words",
                self.char_count(),
                self.word_count()
            ),
            locked: self.submission.is_requesting(),
            placeholder,
        }
    }

    fn compute_banner(&self) -> Option<BannerInfo> {
        match self.submission {
            SubmissionState::Requesting => Some(BannerInfo {
                text: "Summarizing...".to_string(),
                tone: Tone::Info,
            }),
            SubmissionState::Error => self.error.as_ref().map(|message| BannerInfo {
                text: message.clone(),
                tone: Tone::Error,
            }),
            _ => None,
        }
    }

    fn compute_result(&self) -> Option<ResultInfo> {
        let summary = self.summary.as_ref()?;

        let stats = self.stats.map_or_else(Vec::new, |s| {
            vec![
                StatsEntry {
                    value: s.original_length.to_string(),
                    label: "Original".to_string(),
                    highlight: false,
                },
                StatsEntry {
                    value: s.summary_length.to_string(),
                    label: "Summary".to_string(),
                    highlight: false,
                },
                StatsEntry {
                    value: format!("{}%", s.reduction_percent),
                    label: "Reduced".to_string(),
                    highlight: true,
                },
            ]
        });

        Some(ResultInfo {
            summary: summary.text.clone(),
            stats,
            copied: self.copy.is_visible(),
            completed_at: self
                .completed_at
                .map(|t| t.format("%H:%M:%S").to_string()),
        })
    }

    fn compute_footer(&self) -> FooterInfo {
        let keybindings = match self.submission {
            SubmissionState::Requesting => "summarizing... | ctrl+q: quit".to_string(),
            SubmissionState::Success => {
                "ctrl+enter: summarize | ctrl+y: copy | ctrl+l: clear | ctrl+q: quit".to_string()
            }
            _ => "ctrl+enter: summarize | ctrl+l: clear | ctrl+q: quit".to_string(),
        };

        FooterInfo { keybindings }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn success_state() -> AppState {
        let mut state = AppState::new(Theme::default());
        state.begin_submission();
        state.succeed(
            Summary::new("short".to_string(), 60, 5),
            crate::domain::compute_stats(60, 5).unwrap(),
        );
        state
    }

    #[test]
    fn outcome_sides_are_mutually_exclusive() {
        let mut state = success_state();
        assert!(state.summary.is_some());
        assert!(state.stats.is_some());
        assert!(state.error.is_none());

        state.fail("boom");
        assert!(state.summary.is_none());
        assert!(state.stats.is_none());
        assert_eq!(state.error.as_deref(), Some("boom"));
    }

    #[test]
    fn begin_submission_clears_previous_outcome() {
        let mut state = success_state();
        state.begin_submission();
        assert!(state.summary.is_none());
        assert!(state.stats.is_none());
        assert!(state.error.is_none());
        assert!(!state.copy.is_visible());
        assert_eq!(state.submission, SubmissionState::Validating);
    }

    #[test]
    fn clear_is_idempotent() {
        let mut state = success_state();
        state.input = "leftover".to_string();

        state.clear();
        let once = state.clone();
        state.clear();

        assert_eq!(state.submission, once.submission);
        assert_eq!(state.input, once.input);
        assert_eq!(state.summary, once.summary);
        assert_eq!(state.stats, once.stats);
        assert_eq!(state.error, once.error);
        assert!(state.input.is_empty());
        assert_eq!(state.submission, SubmissionState::Idle);
    }

    #[test]
    fn counts_reflect_raw_and_trimmed_input() {
        let mut state = AppState::new(Theme::default());
        state.input = "  hello world  ".to_string();
        assert_eq!(state.char_count(), 15);
        assert_eq!(state.word_count(), 2);
    }

    #[test]
    fn viewmodel_shows_banner_while_requesting() {
        let mut state = AppState::new(Theme::default());
        state.begin_submission();
        state.submission = SubmissionState::Requesting;

        let vm = state.compute_viewmodel();
        let banner = vm.banner.unwrap();
        assert_eq!(banner.text, "Summarizing...");
        assert!(vm.input.locked);
        assert!(vm.result.is_none());
    }

    #[test]
    fn viewmodel_result_includes_stats_row() {
        let state = success_state();
        let vm = state.compute_viewmodel();
        let result = vm.result.unwrap();
        assert_eq!(result.summary, "short");
        assert_eq!(result.stats.len(), 3);
        assert_eq!(result.stats[2].value, "92%");
        assert!(result.stats[2].highlight);
    }
}
