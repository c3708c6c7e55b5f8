//! Footer component renderer.
//!
//! Renders the keybinding help bar, centered and dimmed.

use crate::ui::theme::Theme;
use crate::ui::viewmodel::FooterInfo;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::Style;
use ratatui::widgets::Paragraph;
use ratatui::Frame;

/// Renders the footer into `area` (one row).
pub fn render_footer(frame: &mut Frame, area: Rect, footer: &FooterInfo, theme: &Theme) {
    let paragraph = Paragraph::new(footer.keybindings.clone())
        .alignment(Alignment::Center)
        .style(Style::default().fg(Theme::color(&theme.colors.text_dim)));
    frame.render_widget(paragraph, area);
}
