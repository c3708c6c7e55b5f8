//! HTTP implementation of the summarization backend.
//!
//! Wraps a `reqwest` client configured with JSON headers and a fixed request
//! timeout. Summarization can take a while on cold models, so the timeout is
//! generous; when it elapses, the failure surfaces as a transport error like
//! any other network fault.

use crate::api::backend::SummarizeBackend;
use crate::api::models::{ApiErrorBody, SummarizeRequest, SummarizeResponse, VersionInfo};
use crate::domain::error::{PrecisError, Result};
use async_trait::async_trait;
use std::time::Duration;
use tracing::Instrument;

/// HTTP client for the summarization service.
///
/// Holds a connection-pooling `reqwest::Client` and the service base URL.
/// Cheap to clone; clones share the underlying pool.
#[derive(Debug, Clone)]
pub struct HttpBackend {
    client: reqwest::Client,
    base_url: String,
}

impl HttpBackend {
    /// Creates a backend for the service at `base_url`.
    ///
    /// A trailing slash on `base_url` is tolerated. `timeout` bounds each
    /// request end to end, including the summarization call.
    ///
    /// # Errors
    ///
    /// Returns [`PrecisError::Config`] if the underlying client cannot be
    /// constructed.
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| PrecisError::Config(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Joins an endpoint path onto the base URL.
    fn endpoint(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    /// Converts a non-2xx response into an error.
    ///
    /// Prefers the structured `{"error": ...}` body when the service supplies
    /// one; otherwise reports the bare status so the caller can fall back to
    /// its generic message.
    async fn decode_failure(response: reqwest::Response) -> PrecisError {
        let status = response.status();
        match response.json::<ApiErrorBody>().await {
            Ok(body) if !body.error.trim().is_empty() => PrecisError::Service(body.error),
            _ => PrecisError::Transport(format!("service returned status {status}")),
        }
    }
}

#[async_trait]
impl SummarizeBackend for HttpBackend {
    async fn summarize(&self, text: &str) -> Result<SummarizeResponse> {
        let span = tracing::debug_span!("http_summarize", text_len = text.len());
        async move {
            let response = self
                .client
                .post(self.endpoint("/api/summarize"))
                .json(&SummarizeRequest { text })
                .send()
                .await?;

            if !response.status().is_success() {
                let err = Self::decode_failure(response).await;
                tracing::debug!(error = %err, "summarize request rejected");
                return Err(err);
            }

            let parsed = response.json::<SummarizeResponse>().await?;
            tracing::debug!(
                original_length = parsed.original_length,
                summary_length = parsed.summary_length,
                "summarize request succeeded"
            );
            Ok(parsed)
        }
        .instrument(span)
        .await
    }

    async fn health(&self) -> Result<serde_json::Value> {
        let span = tracing::debug_span!("http_health");
        async move {
            let response = self.client.get(self.endpoint("/api/health")).send().await?;
            if !response.status().is_success() {
                return Err(Self::decode_failure(response).await);
            }
            Ok(response.json::<serde_json::Value>().await?)
        }
        .instrument(span)
        .await
    }

    async fn version(&self) -> Result<VersionInfo> {
        let span = tracing::debug_span!("http_version");
        async move {
            let response = self.client.get(self.endpoint("/api/version")).send().await?;
            if !response.status().is_success() {
                return Err(Self::decode_failure(response).await);
            }
            Ok(response.json::<VersionInfo>().await?)
        }
        .instrument(span)
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_joins_paths() {
        let backend = HttpBackend::new("http://localhost:5000", Duration::from_secs(60)).unwrap();
        assert_eq!(
            backend.endpoint("/api/summarize"),
            "http://localhost:5000/api/summarize"
        );
    }

    #[test]
    fn trailing_slash_is_tolerated() {
        let backend = HttpBackend::new("http://localhost:5000/", Duration::from_secs(60)).unwrap();
        assert_eq!(
            backend.endpoint("/api/health"),
            "http://localhost:5000/api/health"
        );
    }
}
