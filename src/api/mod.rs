//! Summarization service client layer.
//!
//! This module owns everything that touches the service's wire contract: the
//! backend trait the worker depends on, the HTTP implementation, and the wire
//! record types. Nothing above this layer sees JSON or status codes.
//!
//! # Organization
//!
//! - [`backend`]: The `SummarizeBackend` trait seam
//! - [`http`]: `reqwest`-based production implementation
//! - [`models`]: Request/response record types

pub mod backend;
pub mod http;
pub mod models;

pub use backend::SummarizeBackend;
pub use http::HttpBackend;
pub use models::{ApiErrorBody, SummarizeRequest, SummarizeResponse, VersionInfo};
