//! Event handling and state transition logic.
//!
//! This module implements the core event handler that processes user input
//! and worker responses, translating them into state changes and action
//! sequences. It is the only place the request lifecycle advances.
//!
//! # Architecture
//!
//! The handler follows a unidirectional data flow pattern:
//! 1. Events arrive from the terminal runtime or the worker task
//! 2. [`handle_event`] pattern-matches the event type
//! 3. State mutations occur via `AppState` methods
//! 4. Actions are collected and returned for execution
//!
//! # Guards
//!
//! While a request is in flight (`Requesting`), the handler rejects further
//! submits, clears, and input edits. There is no queue: a rejected event is
//! simply dropped. A request runs to resolution; nothing here can abandon it
//! early.

use crate::app::modes::{ServiceStatus, SubmissionState};
use crate::app::{Action, AppState};
use crate::domain::error::Result;
use crate::domain::{compute_stats, validate};
use crate::worker::{WorkerMessage, WorkerResponse, FALLBACK_ERROR_MESSAGE};

/// Events triggered by user input, timers, or worker responses.
///
/// Each event represents a discrete occurrence that may cause state changes
/// and action emissions. The event handler processes these sequentially,
/// ensuring deterministic state transitions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Appends a character to the input buffer.
    Char(char),
    /// Removes the last character from the input buffer.
    Backspace,
    /// Appends a line break to the input buffer.
    Newline,
    /// Appends pasted text to the input buffer.
    Paste(String),

    /// Attempts to submit the current input for summarization.
    ///
    /// Reached from the submit keybinding and the shortcut alike; both paths
    /// share the guards and validation below.
    Submit,
    /// Resets input and outcome back to idle.
    Clear,
    /// Copies the displayed summary to the clipboard.
    Copy,
    /// Ends the session.
    Quit,

    /// A clipboard write finished.
    CopyCompleted {
        /// Token of the copy attempt that finished.
        token: u64,
        /// Whether the write succeeded.
        ok: bool,
    },

    /// The copy-confirmation display window elapsed.
    CopyResetDue {
        /// Token the reset was scheduled for.
        token: u64,
    },

    /// Wraps a response from the background worker task.
    WorkerResponse(WorkerResponse),
}

/// Processes an event, mutates application state, and returns actions to execute.
///
/// This is the primary event handler coordinating all state transitions and
/// side effects. It pattern-matches on event types, calls state mutation
/// methods, and collects actions to be executed by the runtime.
///
/// # Returns
///
/// A `(should_render, actions)` pair. `should_render` is `true` when the
/// visible state changed; the runtime redraws in response, which is how the
/// presentation layer observes transitions. The actions are executed in
/// order and may be empty.
///
/// # Errors
///
/// Request-path failures are absorbed into the `Error` state rather than
/// returned; the `Result` covers unexpected internal failures only.
#[allow(clippy::too_many_lines)]
pub fn handle_event(state: &mut AppState, event: &Event) -> Result<(bool, Vec<Action>)> {
    let _span = tracing::debug_span!("handle_event", event_type = ?event_name(event)).entered();

    match event {
        Event::Char(c) => {
            if state.submission.is_requesting() {
                return Ok((false, vec![]));
            }
            state.input.push(*c);
            Ok((true, vec![]))
        }
        Event::Backspace => {
            if state.submission.is_requesting() {
                return Ok((false, vec![]));
            }
            let changed = state.input.pop().is_some();
            Ok((changed, vec![]))
        }
        Event::Newline => {
            if state.submission.is_requesting() {
                return Ok((false, vec![]));
            }
            state.input.push('\n');
            Ok((true, vec![]))
        }
        Event::Paste(text) => {
            if state.submission.is_requesting() || text.is_empty() {
                return Ok((false, vec![]));
            }
            state.input.push_str(text);
            Ok((true, vec![]))
        }

        Event::Submit => handle_submit(state),

        Event::Clear => {
            if state.submission.is_requesting() {
                tracing::debug!("clear refused while request in flight");
                return Ok((false, vec![]));
            }
            state.clear();
            Ok((true, vec![]))
        }

        Event::Copy => handle_copy(state),

        Event::CopyCompleted { token, ok } => {
            if !ok {
                tracing::debug!(token = token, "clipboard write failed, confirmation withheld");
                return Ok((false, vec![]));
            }
            if state.copy.confirm(*token) {
                Ok((true, vec![Action::ScheduleCopyReset { token: *token }]))
            } else {
                tracing::debug!(token = token, "stale copy completion ignored");
                Ok((false, vec![]))
            }
        }

        Event::CopyResetDue { token } => {
            let changed = state.copy.expire(*token);
            if !changed {
                tracing::debug!(token = token, "stale copy reset ignored");
            }
            Ok((changed, vec![]))
        }

        Event::WorkerResponse(response) => handle_worker_response(state, response),

        Event::Quit => Ok((false, vec![Action::Quit])),
    }
}

/// Runs the submission guards and validation, starting a request when valid.
fn handle_submit(state: &mut AppState) -> Result<(bool, Vec<Action>)> {
    if state.submission.is_requesting() {
        tracing::debug!("submit rejected, request already in flight");
        return Ok((false, vec![]));
    }
    if state.input.trim().is_empty() {
        tracing::debug!("submit ignored for empty input");
        return Ok((false, vec![]));
    }

    state.begin_submission();

    match validate(&state.input) {
        Err(failure) => {
            tracing::debug!(reason = ?failure, "submission rejected by validation");
            state.fail(failure.message());
            Ok((true, vec![]))
        }
        Ok(()) => {
            state.submission = SubmissionState::Requesting;
            tracing::debug!(chars = state.char_count(), "submission accepted");
            Ok((
                true,
                vec![Action::PostToWorker(WorkerMessage::Summarize {
                    text: state.input.clone(),
                })],
            ))
        }
    }
}

/// Starts a clipboard copy of the displayed summary, if there is one.
fn handle_copy(state: &mut AppState) -> Result<(bool, Vec<Action>)> {
    if state.submission != SubmissionState::Success {
        return Ok((false, vec![]));
    }
    let Some(summary) = state.summary.as_ref() else {
        return Ok((false, vec![]));
    };

    let text = summary.text.clone();
    let token = state.copy.begin();
    tracing::debug!(token = token, "copying summary to clipboard");
    Ok((true, vec![Action::CopyToClipboard { text, token }]))
}

/// Applies a worker response to the state machine.
fn handle_worker_response(
    state: &mut AppState,
    response: &WorkerResponse,
) -> Result<(bool, Vec<Action>)> {
    match response {
        WorkerResponse::SummaryReady { summary } => {
            if !state.submission.is_requesting() {
                tracing::debug!("summary arrived with no request in flight, dropping");
                return Ok((false, vec![]));
            }
            match compute_stats(summary.original_length, summary.summary_length) {
                Ok(stats) => state.succeed(summary.clone(), stats),
                Err(e) => {
                    tracing::warn!(error = %e, "unusable lengths in service response");
                    state.fail(FALLBACK_ERROR_MESSAGE);
                }
            }
            Ok((true, vec![]))
        }

        WorkerResponse::SummarizeFailed { message } => {
            if !state.submission.is_requesting() {
                tracing::debug!("failure arrived with no request in flight, dropping");
                return Ok((false, vec![]));
            }
            state.fail(message.clone());
            Ok((true, vec![]))
        }

        WorkerResponse::ServiceProbed { healthy, version } => {
            state.service = if *healthy {
                ServiceStatus::Ready {
                    label: version.as_ref().and_then(|v| v.label()),
                }
            } else {
                ServiceStatus::Unreachable
            };
            Ok((true, vec![]))
        }
    }
}

/// Short name for span labeling without dumping event payloads.
fn event_name(event: &Event) -> &'static str {
    match event {
        Event::Char(_) => "Char",
        Event::Backspace => "Backspace",
        Event::Newline => "Newline",
        Event::Paste(_) => "Paste",
        Event::Submit => "Submit",
        Event::Clear => "Clear",
        Event::Copy => "Copy",
        Event::Quit => "Quit",
        Event::CopyCompleted { .. } => "CopyCompleted",
        Event::CopyResetDue { .. } => "CopyResetDue",
        Event::WorkerResponse(_) => "WorkerResponse",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Summary;
    use crate::ui::theme::Theme;

    fn new_state() -> AppState {
        AppState::new(Theme::default())
    }

    fn submit(state: &mut AppState) -> Vec<Action> {
        let (_, actions) = handle_event(state, &Event::Submit).unwrap();
        actions
    }

    fn respond(state: &mut AppState, response: WorkerResponse) {
        handle_event(state, &Event::WorkerResponse(response)).unwrap();
    }

    #[test]
    fn valid_submission_requests_exactly_one_network_call() {
        let mut state = new_state();
        state.input = "a".repeat(60);

        let actions = submit(&mut state);

        assert_eq!(state.submission, SubmissionState::Requesting);
        assert_eq!(
            actions,
            vec![Action::PostToWorker(WorkerMessage::Summarize {
                text: "a".repeat(60),
            })]
        );
    }

    #[test]
    fn submission_sends_full_untrimmed_input() {
        let mut state = new_state();
        state.input = format!("  {}  ", "a".repeat(60));

        let actions = submit(&mut state);

        assert_eq!(
            actions,
            vec![Action::PostToWorker(WorkerMessage::Summarize {
                text: format!("  {}  ", "a".repeat(60)),
            })]
        );
    }

    #[test]
    fn successful_response_yields_success_with_stats() {
        let mut state = new_state();
        state.input = "a".repeat(60);
        submit(&mut state);

        respond(
            &mut state,
            WorkerResponse::SummaryReady {
                summary: Summary::new("short".to_string(), 60, 5),
            },
        );

        assert_eq!(state.submission, SubmissionState::Success);
        assert_eq!(state.summary.as_ref().unwrap().text, "short");
        let stats = state.stats.unwrap();
        assert_eq!(
            (stats.original_length, stats.summary_length, stats.reduction_percent),
            (60, 5, 92)
        );
        assert!(state.error.is_none());
    }

    #[test]
    fn short_input_fails_locally_without_network_call() {
        let mut state = new_state();
        state.input = "short".to_string();

        let actions = submit(&mut state);

        assert_eq!(state.submission, SubmissionState::Error);
        assert_eq!(
            state.error.as_deref(),
            Some("Text is too short. Please enter at least 50 characters.")
        );
        assert!(actions.is_empty());
    }

    #[test]
    fn empty_input_submit_is_a_no_op() {
        let mut state = new_state();
        state.input = "   \n  ".to_string();

        let (rendered, actions) = handle_event(&mut state, &Event::Submit).unwrap();

        assert!(!rendered);
        assert!(actions.is_empty());
        assert_eq!(state.submission, SubmissionState::Idle);
        assert!(state.error.is_none());
    }

    #[test]
    fn submit_while_requesting_is_a_no_op() {
        let mut state = new_state();
        state.input = "a".repeat(60);
        submit(&mut state);

        let before = state.clone();
        let (rendered, actions) = handle_event(&mut state, &Event::Submit).unwrap();

        assert!(!rendered);
        assert!(actions.is_empty());
        assert_eq!(state.submission, before.submission);
        assert_eq!(state.input, before.input);
    }

    #[test]
    fn request_failure_surfaces_worker_message() {
        let mut state = new_state();
        state.input = "a".repeat(60);
        submit(&mut state);

        respond(
            &mut state,
            WorkerResponse::SummarizeFailed {
                message: FALLBACK_ERROR_MESSAGE.to_string(),
            },
        );

        assert_eq!(state.submission, SubmissionState::Error);
        assert_eq!(state.error.as_deref(), Some(FALLBACK_ERROR_MESSAGE));
        assert!(state.summary.is_none());
        assert!(state.stats.is_none());
    }

    #[test]
    fn new_submission_clears_previous_error() {
        let mut state = new_state();
        state.input = "short".to_string();
        submit(&mut state);
        assert!(state.error.is_some());

        state.input = "a".repeat(60);
        submit(&mut state);
        assert!(state.error.is_none());
        assert_eq!(state.submission, SubmissionState::Requesting);
    }

    #[test]
    fn editing_is_locked_while_requesting() {
        let mut state = new_state();
        state.input = "a".repeat(60);
        submit(&mut state);

        for event in [
            Event::Char('x'),
            Event::Backspace,
            Event::Newline,
            Event::Paste("pasted".to_string()),
        ] {
            let (rendered, actions) = handle_event(&mut state, &event).unwrap();
            assert!(!rendered);
            assert!(actions.is_empty());
        }
        assert_eq!(state.input, "a".repeat(60));
    }

    #[test]
    fn clear_is_refused_while_requesting() {
        let mut state = new_state();
        state.input = "a".repeat(60);
        submit(&mut state);

        let (rendered, _) = handle_event(&mut state, &Event::Clear).unwrap();

        assert!(!rendered);
        assert_eq!(state.submission, SubmissionState::Requesting);
        assert_eq!(state.input, "a".repeat(60));
    }

    #[test]
    fn clear_resets_to_idle() {
        let mut state = new_state();
        state.input = "a".repeat(60);
        submit(&mut state);
        respond(
            &mut state,
            WorkerResponse::SummaryReady {
                summary: Summary::new("short".to_string(), 60, 5),
            },
        );

        handle_event(&mut state, &Event::Clear).unwrap();

        assert_eq!(state.submission, SubmissionState::Idle);
        assert!(state.input.is_empty());
        assert!(state.summary.is_none());
        assert!(state.stats.is_none());
        assert!(state.error.is_none());
    }

    #[test]
    fn copy_confirmation_full_cycle() {
        let mut state = new_state();
        state.input = "a".repeat(60);
        submit(&mut state);
        respond(
            &mut state,
            WorkerResponse::SummaryReady {
                summary: Summary::new("short".to_string(), 60, 5),
            },
        );

        let (_, actions) = handle_event(&mut state, &Event::Copy).unwrap();
        let Some(Action::CopyToClipboard { text, token }) = actions.first().cloned() else {
            panic!("expected a clipboard action, got {actions:?}");
        };
        assert_eq!(text, "short");

        let (_, actions) =
            handle_event(&mut state, &Event::CopyCompleted { token, ok: true }).unwrap();
        assert!(state.copy.is_visible());
        assert_eq!(actions, vec![Action::ScheduleCopyReset { token }]);

        // The confirmation window elapses.
        handle_event(&mut state, &Event::CopyResetDue { token }).unwrap();
        assert!(!state.copy.is_visible());
    }

    #[test]
    fn copy_failure_is_silent() {
        let mut state = new_state();
        state.input = "a".repeat(60);
        submit(&mut state);
        respond(
            &mut state,
            WorkerResponse::SummaryReady {
                summary: Summary::new("short".to_string(), 60, 5),
            },
        );

        let (_, actions) = handle_event(&mut state, &Event::Copy).unwrap();
        let Some(Action::CopyToClipboard { token, .. }) = actions.first() else {
            panic!("expected a clipboard action");
        };

        handle_event(&mut state, &Event::CopyCompleted { token: *token, ok: false }).unwrap();

        assert!(!state.copy.is_visible());
        assert_eq!(state.submission, SubmissionState::Success);
        assert!(state.error.is_none());
    }

    #[test]
    fn copy_outside_success_is_a_no_op() {
        let mut state = new_state();
        let (rendered, actions) = handle_event(&mut state, &Event::Copy).unwrap();
        assert!(!rendered);
        assert!(actions.is_empty());
    }

    #[test]
    fn new_submission_supersedes_pending_copy_reset() {
        let mut state = new_state();
        state.input = "a".repeat(60);
        submit(&mut state);
        respond(
            &mut state,
            WorkerResponse::SummaryReady {
                summary: Summary::new("short".to_string(), 60, 5),
            },
        );

        let (_, actions) = handle_event(&mut state, &Event::Copy).unwrap();
        let Some(Action::CopyToClipboard { token, .. }) = actions.first().cloned() else {
            panic!("expected a clipboard action");
        };
        handle_event(&mut state, &Event::CopyCompleted { token, ok: true }).unwrap();
        assert!(state.copy.is_visible());

        // Resubmitting resets the confirmation immediately, without waiting
        // for the scheduled reset.
        submit(&mut state);
        assert!(!state.copy.is_visible());

        // The old reset firing later must not touch the new cycle.
        let (rendered, _) = handle_event(&mut state, &Event::CopyResetDue { token }).unwrap();
        assert!(!rendered);
    }

    #[test]
    fn stale_worker_response_is_dropped() {
        let mut state = new_state();
        respond(
            &mut state,
            WorkerResponse::SummaryReady {
                summary: Summary::new("short".to_string(), 60, 5),
            },
        );

        assert_eq!(state.submission, SubmissionState::Idle);
        assert!(state.summary.is_none());
    }

    #[test]
    fn probe_result_updates_service_status() {
        let mut state = new_state();
        respond(
            &mut state,
            WorkerResponse::ServiceProbed {
                healthy: false,
                version: None,
            },
        );
        assert_eq!(state.service, ServiceStatus::Unreachable);
    }

    #[test]
    fn quit_emits_quit_action() {
        let mut state = new_state();
        let (_, actions) = handle_event(&mut state, &Event::Quit).unwrap();
        assert_eq!(actions, vec![Action::Quit]);
    }
}
