//! Status banner component renderer.
//!
//! One line between the input and the result: either the in-progress
//! indicator or the current error message.

use crate::ui::helpers::tone_color;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::BannerInfo;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::widgets::Paragraph;
use ratatui::Frame;

/// Renders the banner into `area` (one row).
pub fn render_banner(frame: &mut Frame, area: Rect, banner: &BannerInfo, theme: &Theme) {
    let paragraph = Paragraph::new(format!(" {}", banner.text))
        .style(Style::default().fg(tone_color(theme, banner.tone)));
    frame.render_widget(paragraph, area);
}
