//! Background worker for asynchronous service calls.
//!
//! This module implements the task that performs all network I/O so the event
//! loop never blocks on the service. Communication is channel-based in both
//! directions.
//!
//! # Architecture
//!
//! - `messages`: Request/response protocol types
//! - `handler`: Worker implementation and message processing logic

pub mod handler;
pub mod messages;

pub use handler::SummarizeWorker;
pub use messages::{WorkerMessage, WorkerResponse, FALLBACK_ERROR_MESSAGE};
