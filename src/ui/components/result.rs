//! Summary result component renderer.
//!
//! Renders the summary text in a bordered panel with a stats row underneath:
//! original length, summary length, and the reduction percentage. The panel
//! title doubles as the copy affordance, flipping to a confirmation while
//! the copied flag is visible.

use crate::ui::theme::Theme;
use crate::ui::viewmodel::{ResultInfo, StatsEntry};
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Paragraph, Wrap};
use ratatui::Frame;

/// Renders the result panel into `area`.
pub fn render_result(frame: &mut Frame, area: Rect, result: &ResultInfo, theme: &Theme) {
    let copy_hint = if result.copied {
        Line::styled(
            " copied! ",
            Style::default().fg(Theme::color(&theme.colors.success_fg)),
        )
        .alignment(Alignment::Right)
    } else {
        Line::styled(
            " ctrl+y: copy ",
            Style::default().fg(Theme::color(&theme.colors.text_dim)),
        )
        .alignment(Alignment::Right)
    };

    let mut block = Block::bordered()
        .title(" Summary ")
        .title(copy_hint)
        .border_style(Style::default().fg(Theme::color(&theme.colors.border)));

    if let Some(at) = &result.completed_at {
        block = block.title_bottom(
            Line::styled(
                format!(" {at} "),
                Style::default().fg(Theme::color(&theme.colors.text_dim)),
            )
            .alignment(Alignment::Right),
        );
    }

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let [summary_area, stats_area] =
        Layout::vertical([Constraint::Min(1), Constraint::Length(2)]).areas(inner);

    let summary = Paragraph::new(result.summary.clone())
        .style(Style::default().fg(Theme::color(&theme.colors.text_normal)))
        .wrap(Wrap { trim: false });
    frame.render_widget(summary, summary_area);

    render_stats_row(frame, stats_area, &result.stats, theme);
}

/// Renders the stats entries side by side, each as value over label.
fn render_stats_row(frame: &mut Frame, area: Rect, stats: &[StatsEntry], theme: &Theme) {
    if stats.is_empty() || area.height == 0 {
        return;
    }

    let constraints = vec![Constraint::Ratio(1, stats.len() as u32); stats.len()];
    let columns = Layout::horizontal(constraints).split(area);

    for (entry, column) in stats.iter().zip(columns.iter()) {
        let value_color = if entry.highlight {
            Theme::color(&theme.colors.stat_value_fg)
        } else {
            Theme::color(&theme.colors.text_normal)
        };

        let lines = vec![
            Line::styled(
                entry.value.clone(),
                Style::default().fg(value_color).add_modifier(Modifier::BOLD),
            ),
            Line::styled(
                entry.label.clone(),
                Style::default().fg(Theme::color(&theme.colors.text_dim)),
            ),
        ];

        frame.render_widget(
            Paragraph::new(lines).alignment(Alignment::Center),
            *column,
        );
    }
}
