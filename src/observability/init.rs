//! Tracing initialization and subscriber setup.
//!
//! This module configures the tracing subscriber: level filtering plus a
//! plain-text fmt layer writing to the rotating log file under the data
//! directory.

use super::file_writer::LogFileWriter;
use crate::infrastructure::paths;
use crate::Config;
use std::sync::Mutex;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initializes the tracing subscriber with file-based output.
///
/// # Trace Level Resolution
///
/// 1. `RUST_LOG` environment variable if set
/// 2. `config.trace_level` if set
/// 3. Default: `"info"`
///
/// # File Location
///
/// Log lines are written to `precis.log` in the platform data directory,
/// rotated by size. The terminal itself is never written to; the TUI owns it.
///
/// # Initialization Behavior
///
/// - Creates the data directory if it doesn't exist
/// - Silently does nothing if directory creation fails (observability is
///   optional)
/// - Idempotent: safe to call multiple times, only the first call takes
///   effect
pub fn init_tracing(config: &Config) {
    let data_dir = paths::data_dir();
    if std::fs::create_dir_all(&data_dir).is_err() {
        return;
    }

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(config.trace_level.clone().unwrap_or_else(|| "info".to_string()))
    });

    let writer = Mutex::new(LogFileWriter::new(paths::log_file()));
    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_ansi(false)
        .with_writer(writer);

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init();
}
