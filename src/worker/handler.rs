//! Worker task implementation for asynchronous service calls.
//!
//! This module implements the background task that performs all network I/O,
//! keeping the event loop responsive while a request is in flight. It
//! receives [`WorkerMessage`]s over a channel, calls the backend, and sends
//! [`WorkerResponse`]s back. Error mapping happens here: a structured service
//! error is surfaced verbatim, anything else becomes the generic fallback
//! message.

use crate::api::backend::SummarizeBackend;
use crate::domain::error::PrecisError;
use crate::domain::Summary;
use crate::worker::{WorkerMessage, WorkerResponse, FALLBACK_ERROR_MESSAGE};
use std::sync::Arc;
use tokio::sync::mpsc;
use tracing::Instrument;

/// Background worker owning the service backend.
///
/// The worker is generic over [`SummarizeBackend`] so tests can drive it with
/// a mock; production hands it an [`HttpBackend`](crate::api::HttpBackend).
pub struct SummarizeWorker {
    backend: Arc<dyn SummarizeBackend>,
}

impl SummarizeWorker {
    /// Creates a worker over the given backend.
    #[must_use]
    pub fn new(backend: Arc<dyn SummarizeBackend>) -> Self {
        Self { backend }
    }

    /// Drains messages until the request channel closes.
    ///
    /// Each message is processed to completion before the next is taken, so
    /// there is never more than one service call in flight. Responses are
    /// sent on `responses`; if the receiving side is gone the worker stops.
    pub async fn run(
        self,
        mut requests: mpsc::UnboundedReceiver<WorkerMessage>,
        responses: mpsc::UnboundedSender<WorkerResponse>,
    ) {
        while let Some(message) = requests.recv().await {
            let response = self.handle_message(message).await;
            if responses.send(response).is_err() {
                tracing::debug!("response channel closed, stopping worker");
                break;
            }
        }
    }

    /// Processes a single message into its response.
    pub async fn handle_message(&self, message: WorkerMessage) -> WorkerResponse {
        let span =
            tracing::debug_span!("worker_message", message_type = ?message_name(&message));
        async move {
            match message {
                WorkerMessage::Summarize { text } => self.summarize(&text).await,
                WorkerMessage::ProbeService => self.probe_service().await,
            }
        }
        .instrument(span)
        .await
    }

    async fn summarize(&self, text: &str) -> WorkerResponse {
        match self.backend.summarize(text).await {
            Ok(response) => {
                tracing::debug!(
                    original_length = response.original_length,
                    summary_length = response.summary_length,
                    "summary ready"
                );
                WorkerResponse::SummaryReady {
                    summary: Summary::new(
                        response.summary,
                        response.original_length,
                        response.summary_length,
                    ),
                }
            }
            Err(PrecisError::Service(message)) => {
                tracing::debug!(message = %message, "service rejected request");
                WorkerResponse::SummarizeFailed { message }
            }
            Err(e) => {
                tracing::warn!(error = %e, "summarize request failed");
                WorkerResponse::SummarizeFailed {
                    message: FALLBACK_ERROR_MESSAGE.to_string(),
                }
            }
        }
    }

    async fn probe_service(&self) -> WorkerResponse {
        let healthy = match self.backend.health().await {
            Ok(_) => true,
            Err(e) => {
                tracing::debug!(error = %e, "health probe failed");
                false
            }
        };

        let version = if healthy {
            match self.backend.version().await {
                Ok(info) => Some(info),
                Err(e) => {
                    tracing::debug!(error = %e, "version probe failed");
                    None
                }
            }
        } else {
            None
        };

        WorkerResponse::ServiceProbed { healthy, version }
    }
}

/// Short name for span labeling without dumping message payloads.
fn message_name(message: &WorkerMessage) -> &'static str {
    match message {
        WorkerMessage::Summarize { .. } => "Summarize",
        WorkerMessage::ProbeService => "ProbeService",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::models::{SummarizeResponse, VersionInfo};
    use crate::domain::error::Result;
    use async_trait::async_trait;

    /// Scripted backend: each call pops the next canned outcome.
    struct ScriptedBackend {
        summarize: std::sync::Mutex<Vec<Result<SummarizeResponse>>>,
        healthy: bool,
    }

    impl ScriptedBackend {
        fn with_summarize(outcome: Result<SummarizeResponse>) -> Self {
            Self {
                summarize: std::sync::Mutex::new(vec![outcome]),
                healthy: true,
            }
        }

        fn unreachable() -> Self {
            Self {
                summarize: std::sync::Mutex::new(vec![]),
                healthy: false,
            }
        }
    }

    #[async_trait]
    impl SummarizeBackend for ScriptedBackend {
        async fn summarize(&self, _text: &str) -> Result<SummarizeResponse> {
            self.summarize.lock().unwrap().pop().expect("unexpected call")
        }

        async fn health(&self) -> Result<serde_json::Value> {
            if self.healthy {
                Ok(serde_json::json!({"status": "healthy"}))
            } else {
                Err(PrecisError::Transport("connection refused".to_string()))
            }
        }

        async fn version(&self) -> Result<VersionInfo> {
            if self.healthy {
                Ok(VersionInfo {
                    version: Some("1.0.0".to_string()),
                    model: Some("t5-small".to_string()),
                    ..VersionInfo::default()
                })
            } else {
                Err(PrecisError::Transport("connection refused".to_string()))
            }
        }
    }

    #[tokio::test]
    async fn success_becomes_domain_summary() {
        let backend = ScriptedBackend::with_summarize(Ok(SummarizeResponse {
            summary: "short".to_string(),
            original_length: 60,
            summary_length: 5,
        }));
        let worker = SummarizeWorker::new(Arc::new(backend));

        let response = worker
            .handle_message(WorkerMessage::Summarize {
                text: "a".repeat(60),
            })
            .await;

        assert_eq!(
            response,
            WorkerResponse::SummaryReady {
                summary: Summary::new("short".to_string(), 60, 5),
            }
        );
    }

    #[tokio::test]
    async fn structured_service_error_is_surfaced_verbatim() {
        let backend = ScriptedBackend::with_summarize(Err(PrecisError::Service(
            "Text is too long. Maximum 10000 characters.".to_string(),
        )));
        let worker = SummarizeWorker::new(Arc::new(backend));

        let response = worker
            .handle_message(WorkerMessage::Summarize {
                text: "a".repeat(60),
            })
            .await;

        assert_eq!(
            response,
            WorkerResponse::SummarizeFailed {
                message: "Text is too long. Maximum 10000 characters.".to_string(),
            }
        );
    }

    #[tokio::test]
    async fn transport_failure_uses_fallback_message() {
        let backend = ScriptedBackend::with_summarize(Err(PrecisError::Transport(
            "service returned status 502 Bad Gateway".to_string(),
        )));
        let worker = SummarizeWorker::new(Arc::new(backend));

        let response = worker
            .handle_message(WorkerMessage::Summarize {
                text: "a".repeat(60),
            })
            .await;

        assert_eq!(
            response,
            WorkerResponse::SummarizeFailed {
                message: FALLBACK_ERROR_MESSAGE.to_string(),
            }
        );
    }

    #[tokio::test]
    async fn probe_reports_version_when_healthy() {
        let worker = SummarizeWorker::new(Arc::new(ScriptedBackend {
            summarize: std::sync::Mutex::new(vec![]),
            healthy: true,
        }));

        let response = worker.handle_message(WorkerMessage::ProbeService).await;
        match response {
            WorkerResponse::ServiceProbed { healthy, version } => {
                assert!(healthy);
                assert_eq!(version.unwrap().label().as_deref(), Some("t5-small v1.0.0"));
            }
            other => panic!("unexpected response: {other:?}"),
        }
    }

    #[tokio::test]
    async fn probe_reports_unreachable_without_version() {
        let worker = SummarizeWorker::new(Arc::new(ScriptedBackend::unreachable()));

        let response = worker.handle_message(WorkerMessage::ProbeService).await;
        assert_eq!(
            response,
            WorkerResponse::ServiceProbed {
                healthy: false,
                version: None,
            }
        );
    }

    #[tokio::test]
    async fn run_loop_forwards_responses_over_channel() {
        let backend = ScriptedBackend::with_summarize(Ok(SummarizeResponse {
            summary: "s".to_string(),
            original_length: 50,
            summary_length: 1,
        }));
        let worker = SummarizeWorker::new(Arc::new(backend));

        let (req_tx, req_rx) = mpsc::unbounded_channel();
        let (resp_tx, mut resp_rx) = mpsc::unbounded_channel();
        let handle = tokio::spawn(worker.run(req_rx, resp_tx));

        req_tx
            .send(WorkerMessage::Summarize {
                text: "a".repeat(50),
            })
            .unwrap();
        let response = resp_rx.recv().await.unwrap();
        assert!(matches!(response, WorkerResponse::SummaryReady { .. }));

        drop(req_tx);
        handle.await.unwrap();
    }
}
