//! Clipboard side effects and the transient "copied" confirmation.
//!
//! Copying is fire-and-forget from the state machine's point of view: a failed
//! copy is logged and swallowed, never surfacing as the user-facing error.
//! The confirmation flag is generation-tokened so that its scheduled reset can
//! be superseded by a newer copy, a new submission, or a clear without any
//! shared timer handle: a reset carrying a stale token is simply ignored.

use crate::domain::error::{PrecisError, Result};
use std::time::Duration;

/// How long the "copied" confirmation stays visible.
pub const COPY_RESET_DELAY: Duration = Duration::from_millis(2000);

/// Transient acknowledgment that a copy-to-clipboard action succeeded.
///
/// Owns a visibility flag and a monotonically increasing generation counter.
/// Every copy attempt and every suppression bumps the generation; completion
/// and expiry events carry the token they were issued with, and only the
/// token matching the current generation may change the flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CopyConfirmation {
    visible: bool,
    generation: u64,
}

impl CopyConfirmation {
    /// Creates a hidden confirmation.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            visible: false,
            generation: 0,
        }
    }

    /// Whether the confirmation is currently shown.
    #[must_use]
    pub const fn is_visible(self) -> bool {
        self.visible
    }

    /// Starts a new copy attempt.
    ///
    /// Hides any current confirmation, invalidates outstanding completion and
    /// expiry tokens, and returns the token for the new attempt.
    pub fn begin(&mut self) -> u64 {
        self.generation += 1;
        self.visible = false;
        self.generation
    }

    /// Records a successful copy for the attempt identified by `token`.
    ///
    /// Returns `true` and shows the confirmation if the token is current;
    /// a stale token (a newer copy or a suppression happened meanwhile)
    /// leaves the state untouched.
    pub fn confirm(&mut self, token: u64) -> bool {
        if token == self.generation {
            self.visible = true;
            true
        } else {
            false
        }
    }

    /// Hides the confirmation for the attempt identified by `token`.
    ///
    /// Called when the scheduled reset fires. Stale tokens are ignored so a
    /// reset scheduled for an old copy cannot hide a newer confirmation.
    pub fn expire(&mut self, token: u64) -> bool {
        if token == self.generation && self.visible {
            self.visible = false;
            true
        } else {
            false
        }
    }

    /// Hides the confirmation and invalidates all outstanding tokens.
    ///
    /// Called when a new submission cycle begins or the view is cleared; any
    /// pending reset becomes a no-op.
    pub fn suppress(&mut self) {
        self.generation += 1;
        self.visible = false;
    }
}

/// Writes `text` to the system clipboard.
///
/// Blocking; callers on the event loop should run it on a blocking-capable
/// thread. The clipboard can be unavailable in headless or SSH sessions, in
/// which case the error describes why.
///
/// # Errors
///
/// Returns [`PrecisError::Clipboard`] if the clipboard cannot be opened or
/// written.
pub fn copy_text(text: &str) -> Result<()> {
    let mut clipboard =
        arboard::Clipboard::new().map_err(|e| PrecisError::Clipboard(e.to_string()))?;
    clipboard
        .set_text(text)
        .map_err(|e| PrecisError::Clipboard(e.to_string()))
}
