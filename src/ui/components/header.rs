//! Header component renderer.
//!
//! Renders the title bar: application name on the left, service status on
//! the right.

use crate::ui::helpers::tone_color;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::HeaderInfo;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

/// Renders the header into `area` (one row).
pub fn render_header(frame: &mut Frame, area: Rect, header: &HeaderInfo, theme: &Theme) {
    let mut base = Style::default().fg(Theme::color(&theme.colors.header_fg));
    if let Some(bg) = &theme.colors.header_bg {
        base = base.bg(Theme::color(bg));
    }

    let status_width = header.status.chars().count() as u16 + 2;
    let [title_area, status_area] =
        Layout::horizontal([Constraint::Min(0), Constraint::Length(status_width)]).areas(area);

    let title = Paragraph::new(format!(" {}", header.title))
        .style(base.add_modifier(Modifier::BOLD));
    frame.render_widget(title, title_area);

    let status = Paragraph::new(format!("{} ", header.status))
        .alignment(Alignment::Right)
        .style(base.fg(tone_color(theme, header.status_tone)));
    frame.render_widget(status, status_area);
}
