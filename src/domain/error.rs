//! Error types for the précis client.
//!
//! This module defines the centralized error type [`PrecisError`] and a type alias
//! [`Result`] for convenient error handling throughout the client. All errors are
//! implemented using the `thiserror` crate for automatic `Error` trait implementation.

use thiserror::Error;

/// The main error type for précis client operations.
///
/// This enum consolidates all error conditions that can occur during client execution,
/// from service communication to I/O failures and configuration issues. Most variants
/// wrap underlying errors from external crates using `#[from]` for automatic conversion.
///
/// Request-path errors never propagate past the application layer: the event handler
/// converts them into the user-facing error message shown in the UI.
#[derive(Debug, Error)]
pub enum PrecisError {
    /// The summarization service returned a structured error payload.
    ///
    /// Carries the server-supplied `error` field, which is surfaced to the
    /// user verbatim.
    #[error("Service error: {0}")]
    Service(String),

    /// The service responded, but not with anything usable.
    ///
    /// Covers non-2xx statuses without a structured error body and response
    /// payloads that fail to decode. The string describes what went wrong.
    #[error("Transport error: {0}")]
    Transport(String),

    /// The HTTP request itself failed.
    ///
    /// Wraps errors from the HTTP client: connection refused, DNS failures,
    /// and request timeouts all land here. Automatically converts from
    /// `reqwest::Error` using the `#[from]` attribute.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Filesystem or I/O operation failed.
    ///
    /// Wraps errors from standard library I/O operations. Automatically converts
    /// from `std::io::Error` using the `#[from]` attribute.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Writing to the system clipboard failed.
    ///
    /// Clipboard failures are logged and swallowed by the caller; they never
    /// surface as the user-facing error message.
    #[error("Clipboard error: {0}")]
    Clipboard(String),

    /// Derived-statistics computation was given unusable lengths.
    ///
    /// Occurs when the service reports a zero original length, which makes the
    /// reduction percentage undefined.
    #[error("Stats error: {0}")]
    Stats(String),

    /// Theme parsing or application failed.
    ///
    /// Occurs when the client cannot read or parse a theme file. The string
    /// contains a description of what went wrong.
    #[error("Theme error: {0}")]
    Theme(String),

    /// Communication with the background worker failed.
    ///
    /// Occurs when a message cannot be delivered to or received from the
    /// request worker task, typically because one side has shut down.
    #[error("Worker communication error: {0}")]
    Worker(String),

    /// Configuration is invalid or missing.
    ///
    /// Occurs when required configuration values are missing or malformed.
    /// The string describes the specific configuration problem.
    #[error("Configuration error: {0}")]
    Config(String),
}

/// A specialized `Result` type for précis operations.
///
/// This is a type alias for `std::result::Result<T, PrecisError>` that simplifies
/// function signatures throughout the codebase.
pub type Result<T> = std::result::Result<T, PrecisError>;
