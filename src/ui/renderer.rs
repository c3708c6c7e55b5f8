//! Top-level rendering coordinator.
//!
//! This module provides the main rendering entry point, coordinating view
//! model computation and delegation to UI components. The layout adapts to
//! what the view model contains: the banner row and the result panel only
//! claim space when present.
//!
//! # Architecture
//!
//! Rendering is a two-step process:
//!
//! 1. **View Model Computation**: Transform `AppState` into `UiViewModel`
//! 2. **Component Rendering**: Delegate to specialized component renderers

use crate::app::AppState;
use crate::ui::components;
use ratatui::layout::{Constraint, Layout};
use ratatui::Frame;

/// Renders one frame of the UI from the current application state.
pub fn draw(frame: &mut Frame, state: &AppState) {
    let vm = state.compute_viewmodel();
    let theme = &state.theme;

    let banner_height = u16::from(vm.banner.is_some());
    let result_constraint = if vm.result.is_some() {
        // Summary text plus the stats row and borders.
        Constraint::Min(9)
    } else {
        Constraint::Length(0)
    };

    let [header_area, input_area, banner_area, result_area, footer_area] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Min(6),
        Constraint::Length(banner_height),
        result_constraint,
        Constraint::Length(1),
    ])
    .areas(frame.area());

    components::render_header(frame, header_area, &vm.header, theme);
    components::render_input(frame, input_area, &vm.input, theme);

    if let Some(banner) = &vm.banner {
        components::render_banner(frame, banner_area, banner, theme);
    }
    if let Some(result) = &vm.result {
        components::render_result(frame, result_area, result, theme);
    }

    components::render_footer(frame, footer_area, &vm.footer, theme);
}
