//! Wire-format records for the summarization service.
//!
//! These types mirror the service's JSON contract exactly and are kept
//! separate from the domain model. The worker converts a
//! [`SummarizeResponse`] into a domain [`Summary`](crate::domain::Summary)
//! before handing it back to the application layer.

use serde::{Deserialize, Serialize};

/// Request body for `POST /api/summarize`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SummarizeRequest<'a> {
    /// The full input text to summarize.
    pub text: &'a str,
}

/// Success body from `POST /api/summarize`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SummarizeResponse {
    /// The generated summary.
    pub summary: String,

    /// Character count of the submitted text.
    pub original_length: usize,

    /// Character count of the summary.
    pub summary_length: usize,
}

/// Structured error body the service attaches to non-2xx responses.
///
/// When present, the `error` field is surfaced to the user verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ApiErrorBody {
    /// Human-readable error message from the service.
    pub error: String,
}

/// Body from `GET /api/version`.
///
/// The service includes whatever it knows about itself; everything is optional
/// so that contract drift degrades display rather than breaking it.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct VersionInfo {
    /// Service version string.
    #[serde(default)]
    pub version: Option<String>,

    /// Name of the model serving summaries.
    #[serde(default)]
    pub model: Option<String>,

    /// Service display name.
    #[serde(default)]
    pub name: Option<String>,

    /// Free-form service description.
    #[serde(default)]
    pub description: Option<String>,
}

impl VersionInfo {
    /// Returns a one-line label for status display, preferring the model name.
    #[must_use]
    pub fn label(&self) -> Option<String> {
        match (&self.model, &self.version) {
            (Some(model), Some(version)) => Some(format!("{model} v{version}")),
            (Some(model), None) => Some(model.clone()),
            (None, Some(version)) => Some(format!("v{version}")),
            (None, None) => None,
        }
    }
}
