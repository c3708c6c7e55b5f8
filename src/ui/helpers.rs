//! Small rendering helpers shared by components.

use crate::ui::theme::Theme;
use crate::ui::viewmodel::Tone;
use ratatui::style::Color;

/// Maps a status tone to its theme color.
#[must_use]
pub fn tone_color(theme: &Theme, tone: Tone) -> Color {
    match tone {
        Tone::Neutral => Theme::color(&theme.colors.text_dim),
        Tone::Info => Theme::color(&theme.colors.info_fg),
        Tone::Success => Theme::color(&theme.colors.success_fg),
        Tone::Error => Theme::color(&theme.colors.error_fg),
    }
}
