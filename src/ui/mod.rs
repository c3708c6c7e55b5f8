//! Terminal rendering layer.
//!
//! Consumes view models computed by the application layer and draws them with
//! ratatui widgets. Nothing in here mutates application state.
//!
//! # Organization
//!
//! - [`renderer`]: Frame layout and component delegation
//! - [`viewmodel`]: Display-ready state snapshots
//! - [`components`]: One renderer per visual component
//! - [`theme`]: Color schemes, built-in and TOML-loaded
//! - [`helpers`]: Shared rendering helpers

pub mod components;
pub mod helpers;
pub mod renderer;
pub mod theme;
pub mod viewmodel;

pub use renderer::draw;
pub use theme::Theme;
