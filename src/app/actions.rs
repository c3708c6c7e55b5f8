//! Actions representing side effects to be executed by the runtime.
//!
//! This module defines the [`Action`] type, which represents imperative
//! commands produced by the event handler after processing user input or
//! worker responses. Actions bridge pure state transformations and effectful
//! operations like network requests, clipboard writes, and timer scheduling.
//!
//! The event handler returns a `Vec<Action>` after processing each event;
//! the runtime executes them in sequence.

use crate::worker::WorkerMessage;

/// Commands representing side effects to be executed by the runtime.
///
/// Actions are produced by the event handler and executed by the terminal
/// runtime. They represent the boundary between pure state transformations
/// and effectful operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Posts a message to the background worker task.
    ///
    /// Carries the one network call a submission is allowed, or the startup
    /// service probe.
    PostToWorker(WorkerMessage),

    /// Writes text to the system clipboard off the event loop.
    ///
    /// The runtime reports completion back as a copy-completed event carrying
    /// the same token, so a result from a superseded copy can be ignored.
    CopyToClipboard {
        /// Text to place on the clipboard.
        text: String,
        /// Generation token identifying this copy attempt.
        token: u64,
    },

    /// Schedules the copy-confirmation reset.
    ///
    /// The runtime sleeps for the confirmation window and then delivers a
    /// reset-due event with the same token. Supersession, not cancellation:
    /// if the token has gone stale by then, the reset is a no-op.
    ScheduleCopyReset {
        /// Generation token the pending reset belongs to.
        token: u64,
    },

    /// Ends the session: tear down the terminal and exit.
    Quit,
}
