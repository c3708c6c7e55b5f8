//! Summary domain model.
//!
//! This module defines the [`Summary`] type representing one completed
//! summarization: the text returned by the service plus the length metadata it
//! reported. A `Summary` lives only as long as the result is on screen; it is
//! replaced wholesale by the next submission and holds no history.

use serde::{Deserialize, Serialize};

/// The outcome of one successful summarization request.
///
/// The service reports both lengths alongside the summary text. The summary is
/// expected to be no longer than the original, but the client does not enforce
/// this; the lengths are server-supplied and taken at face value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Summary {
    /// The summary text returned by the service.
    pub text: String,

    /// Character count of the submitted text, as reported by the service.
    pub original_length: usize,

    /// Character count of `text`, as reported by the service.
    pub summary_length: usize,
}

impl Summary {
    /// Creates a summary from the service-reported parts.
    #[must_use]
    pub const fn new(text: String, original_length: usize, summary_length: usize) -> Self {
        Self {
            text,
            original_length,
            summary_length,
        }
    }
}
