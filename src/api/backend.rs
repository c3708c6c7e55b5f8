//! Backend abstraction for the summarization service.
//!
//! This module defines the trait that the worker depends on, decoupling the
//! request lifecycle from the concrete HTTP transport. Tests substitute a mock
//! implementation; production uses [`HttpBackend`](crate::api::http::HttpBackend).

use crate::api::models::{SummarizeResponse, VersionInfo};
use crate::domain::error::Result;
use async_trait::async_trait;

/// Operations the client needs from the summarization service.
///
/// All methods are fallible: transport problems, timeouts, and structured
/// service errors are reported through [`PrecisError`](crate::domain::PrecisError)
/// variants, which the worker maps to user-facing messages.
#[async_trait]
pub trait SummarizeBackend: Send + Sync {
    /// Submits `text` for summarization and returns the parsed response.
    ///
    /// # Errors
    ///
    /// - [`PrecisError::Service`](crate::domain::PrecisError::Service) when the
    ///   service rejects the request with a structured error body
    /// - [`PrecisError::Transport`](crate::domain::PrecisError::Transport) when
    ///   the response cannot be interpreted
    /// - [`PrecisError::Http`](crate::domain::PrecisError::Http) when the
    ///   request fails outright (timeout, connection refused, DNS)
    async fn summarize(&self, text: &str) -> Result<SummarizeResponse>;

    /// Fetches the service liveness payload.
    ///
    /// The payload shape is opaque to the client; it is passed through for
    /// display and tooling.
    async fn health(&self) -> Result<serde_json::Value>;

    /// Fetches service version and model information.
    async fn version(&self) -> Result<VersionInfo>;
}
