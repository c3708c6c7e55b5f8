//! Lifecycle state types for the application.
//!
//! This module defines the state machine enums that govern the request
//! lifecycle and the service reachability indicator. The submission state
//! controls which operations are accepted, what the banner area shows, and
//! which keybindings appear in the footer.
//!
//! # State Machine
//!
//! One submission cycle moves through:
//!
//! ```text
//! Idle ──submit──► Validating ──valid──► Requesting ──response──► Success
//!                      │                                            │
//!                      └──invalid──► Error ◄───────failure──────────┘
//! ```
//!
//! `Success` and `Error` are stable until the next submit or clear; the
//! machine is cyclic for the life of the session. `Validating` is entered and
//! left within a single event, since validation is synchronous.

/// Where the current submission cycle stands.
///
/// Exactly one value exists at a time, owned by
/// [`AppState`](crate::app::AppState); event handling is the only way it
/// changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmissionState {
    /// No submission attempted since startup or the last clear.
    #[default]
    Idle,

    /// A submission is being validated. Synchronous and transient; never
    /// observed between events.
    Validating,

    /// A request is in flight. Acts as the mutual-exclusion guard: further
    /// submits are rejected, the input surface is locked, and clear is
    /// refused until the request resolves.
    Requesting,

    /// The last request produced a summary, currently displayed with its
    /// stats.
    Success,

    /// The last submission failed, locally or remotely; the message is
    /// displayed until the next submit or clear.
    Error,
}

impl SubmissionState {
    /// Whether a request is currently in flight.
    #[must_use]
    pub const fn is_requesting(self) -> bool {
        matches!(self, Self::Requesting)
    }
}

/// Reachability of the summarization service, shown in the header.
///
/// Updated once by the startup probe. Purely informational: submissions are
/// attempted regardless, and their own failures speak for themselves.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ServiceStatus {
    /// Probe has not completed yet.
    #[default]
    Unknown,

    /// The health endpoint answered.
    Ready {
        /// Model/version label from the version endpoint, when available.
        label: Option<String>,
    },

    /// The health endpoint did not answer.
    Unreachable,
}
