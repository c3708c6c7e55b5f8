//! Path resolution for client data.
//!
//! The client persists nothing about the user's work; the only files it owns
//! are its logs. This module resolves where those live and expands
//! user-supplied paths.

use std::path::PathBuf;

/// Returns the data directory for précis files.
///
/// Resolves to the platform-local data directory (`~/.local/share/precis` on
/// Linux), falling back to the current directory when the platform offers no
/// such location.
#[must_use]
pub fn data_dir() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("precis")
}

/// Returns the path of the active log file.
#[must_use]
pub fn log_file() -> PathBuf {
    data_dir().join("precis.log")
}

/// Expands a leading tilde to the user's home directory.
///
/// Used for user-supplied paths like `--theme-file ~/themes/mine.toml`.
/// Paths without a tilde prefix are returned unchanged, as are tilde paths
/// when no home directory can be determined.
#[must_use]
pub fn expand_tilde(path: &str) -> PathBuf {
    if let Some(rest) = path.strip_prefix("~/") {
        if let Some(home) = dirs::home_dir() {
            return home.join(rest);
        }
    } else if path == "~" {
        if let Some(home) = dirs::home_dir() {
            return home;
        }
    }
    PathBuf::from(path)
}
