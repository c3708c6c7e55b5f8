//! Logging infrastructure with file-based output.
//!
//! The client traces its event handling and service calls via the `tracing`
//! macros. Because the TUI owns the terminal, output goes to a size-rotated
//! log file under the platform data directory instead of stderr.
//!
//! # Configuration
//!
//! Trace level is controlled via:
//! 1. `RUST_LOG` environment variable (highest priority)
//! 2. `--trace-level` CLI option
//! 3. Default: `"info"`
//!
//! # Modules
//!
//! - [`init`]: Tracing initialization and subscriber setup
//! - [`file_writer`]: Rotating file writer with size-based rotation

mod file_writer;
mod init;

pub use init::init_tracing;
