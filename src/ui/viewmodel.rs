//! View model types representing renderable UI state.
//!
//! This module defines immutable view models computed from application state,
//! following the MVVM pattern. View models are created via
//! `AppState::compute_viewmodel()` and consumed by the renderer. They contain
//! no business logic, only display-ready data: the rendering layer never
//! inspects `AppState` directly.

/// Complete UI view model for one frame.
#[derive(Debug, Clone)]
pub struct UiViewModel {
    /// Title bar content.
    pub header: HeaderInfo,

    /// Input surface content.
    pub input: InputInfo,

    /// Optional status banner (progress or error), shown between the input
    /// and the result.
    pub banner: Option<BannerInfo>,

    /// Optional summary result panel.
    pub result: Option<ResultInfo>,

    /// Footer keybinding hints.
    pub footer: FooterInfo,
}

/// Visual emphasis for status text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    /// No particular emphasis.
    Neutral,
    /// Work in progress.
    Info,
    /// Something completed.
    Success,
    /// Something failed.
    Error,
}

/// Header information: title and service reachability.
#[derive(Debug, Clone)]
pub struct HeaderInfo {
    /// Application title.
    pub title: String,
    /// Service status label.
    pub status: String,
    /// Emphasis for the status label.
    pub status_tone: Tone,
}

/// Input surface information.
#[derive(Debug, Clone)]
pub struct InputInfo {
    /// Current input text, untruncated.
    pub text: String,
    /// Character/word count line shown under the input.
    pub counts: String,
    /// Whether the surface is locked (a request is in flight).
    pub locked: bool,
    /// Hint text shown when the input is empty.
    pub placeholder: Option<String>,
}

/// A status banner line.
#[derive(Debug, Clone)]
pub struct BannerInfo {
    /// The message to display.
    pub text: String,
    /// Emphasis for the message.
    pub tone: Tone,
}

/// One entry in the stats row under the summary.
#[derive(Debug, Clone)]
pub struct StatsEntry {
    /// The numeric value, preformatted.
    pub value: String,
    /// Label under the value.
    pub label: String,
    /// Whether this entry gets accent styling.
    pub highlight: bool,
}

/// Summary result panel information.
#[derive(Debug, Clone)]
pub struct ResultInfo {
    /// The summary text.
    pub summary: String,
    /// Stats row entries, in display order.
    pub stats: Vec<StatsEntry>,
    /// Whether the copied confirmation is currently shown.
    pub copied: bool,
    /// Completion time label, when known.
    pub completed_at: Option<String>,
}

/// Footer information.
#[derive(Debug, Clone)]
pub struct FooterInfo {
    /// Keybinding help text.
    pub keybindings: String,
}
