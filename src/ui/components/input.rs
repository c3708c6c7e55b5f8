//! Input surface component renderer.
//!
//! Renders the text being edited inside a bordered panel, with the
//! character/word counts in the bottom border. The panel dims while a request
//! is in flight, mirroring the locked state of the buffer.

use crate::ui::theme::Theme;
use crate::ui::viewmodel::InputInfo;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::Style;
use ratatui::text::Line;
use ratatui::widgets::{Block, Paragraph, Wrap};
use ratatui::Frame;

/// Renders the input panel into `area`.
pub fn render_input(frame: &mut Frame, area: Rect, input: &InputInfo, theme: &Theme) {
    let border_color = if input.locked {
        Theme::color(&theme.colors.border)
    } else {
        Theme::color(&theme.colors.border_focused)
    };

    let counts_line = Line::styled(
        format!(" {} ", input.counts),
        Style::default().fg(Theme::color(&theme.colors.text_dim)),
    )
    .alignment(Alignment::Right);

    let block = Block::bordered()
        .title(" Input ")
        .title_bottom(counts_line)
        .border_style(Style::default().fg(border_color));

    let (text, style) = match &input.placeholder {
        Some(placeholder) => (
            placeholder.clone(),
            Style::default().fg(Theme::color(&theme.colors.text_dim)),
        ),
        None => {
            let color = if input.locked {
                Theme::color(&theme.colors.text_dim)
            } else {
                Theme::color(&theme.colors.text_normal)
            };
            (input.text.clone(), Style::default().fg(color))
        }
    };

    let paragraph = Paragraph::new(text)
        .style(style)
        .wrap(Wrap { trim: false })
        .block(block);
    frame.render_widget(paragraph, area);
}
