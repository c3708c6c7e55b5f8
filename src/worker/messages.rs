//! Message types between the event loop and the request worker.
//!
//! This module defines the request and response protocol between the main
//! event loop and the background task that talks to the summarization
//! service. One message in, one response out; the worker holds no queue of
//! its own beyond the channel.

use crate::api::models::VersionInfo;
use crate::domain::Summary;

/// User-facing message shown when a request fails without a structured
/// service error: timeouts, connection failures, undecodable responses.
pub const FALLBACK_ERROR_MESSAGE: &str = "Failed to summarize. Please try again.";

/// Messages sent from the event loop to the worker task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WorkerMessage {
    /// Summarize the given text.
    ///
    /// The text is the full input as typed, untrimmed; the service computes
    /// its own lengths.
    Summarize {
        /// The text to summarize.
        text: String,
    },

    /// Check service reachability and fetch version/model information.
    ///
    /// Sent once on startup. Failures are reported as an unreachable status,
    /// never as a request error.
    ProbeService,
}

/// Responses sent from the worker task back to the event loop.
///
/// Responses carry domain types, not wire records; the worker performs the
/// conversion so the application layer never sees the service's JSON shape.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WorkerResponse {
    /// A summarization request completed successfully.
    SummaryReady {
        /// The completed summary with service-reported lengths.
        summary: Summary,
    },

    /// A summarization request failed.
    SummarizeFailed {
        /// User-facing message: the service's own error text when it sent
        /// one, otherwise [`FALLBACK_ERROR_MESSAGE`].
        message: String,
    },

    /// The startup service probe finished.
    ServiceProbed {
        /// Whether the health endpoint answered.
        healthy: bool,

        /// Version/model information, when the version endpoint answered.
        version: Option<VersionInfo>,
    },
}
