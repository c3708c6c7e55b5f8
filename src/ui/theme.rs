//! Theme management and color handling.
//!
//! This module defines the color scheme system for the client, supporting
//! built-in themes and custom themes loaded from TOML files. Colors are
//! specified as hex strings and converted to terminal colors at render time.
//!
//! # Built-in Themes
//!
//! - `slate-dark`: Dark theme with cool tones (default)
//! - `paper-light`: Light theme for bright terminals
//!
//! # TOML Format
//!
//! ```toml
//! name = "my-theme"
//!
//! [colors]
//! header_fg = "#c8d3f5"
//! border = "#3b4261"
//! border_focused = "#82aaff"
//! text_normal = "#c8d3f5"
//! text_dim = "#636da6"
//! accent = "#82aaff"
//! info_fg = "#82aaff"
//! error_fg = "#ff757f"
//! success_fg = "#c3e88d"
//! stat_value_fg = "#ffc777"
//! ```

use ratatui::style::Color;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Color scheme configuration for UI rendering.
///
/// Contains theme metadata and color definitions. Can be loaded from built-in
/// themes or custom TOML files.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Theme {
    /// Human-readable theme name.
    pub name: String,
    /// Color palette for all UI elements.
    pub colors: ThemeColors,
}

/// Color definitions for all UI elements.
///
/// All colors are specified as hex strings (e.g., "#c8d3f5"). Optional fields
/// default to `None`, allowing themes to opt out of certain styling.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ThemeColors {
    /// Header text color.
    pub header_fg: String,
    /// Optional header background color.
    #[serde(default)]
    pub header_bg: Option<String>,

    /// Panel border color.
    pub border: String,
    /// Border color for the active panel.
    pub border_focused: String,

    /// Normal text color.
    pub text_normal: String,
    /// Dimmed text color (counts, placeholder, footer).
    pub text_dim: String,

    /// Accent color for keybinding hints and stat labels.
    pub accent: String,

    /// In-progress status color.
    pub info_fg: String,
    /// Error message color.
    pub error_fg: String,
    /// Success/confirmation color.
    pub success_fg: String,

    /// Stat value color.
    pub stat_value_fg: String,
}

impl Theme {
    /// Loads a built-in theme by name.
    ///
    /// Supported names: `slate-dark`, `paper-light`.
    ///
    /// # Returns
    ///
    /// - `Some(Theme)` if the theme name is recognized
    /// - `None` if the theme name is unknown
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        let toml_str = match name {
            "slate-dark" => include_str!("../../themes/slate-dark.toml"),
            "paper-light" => include_str!("../../themes/paper-light.toml"),
            _ => return None,
        };

        toml::from_str(toml_str).ok()
    }

    /// Loads a theme from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or the TOML content cannot
    /// be parsed (invalid syntax, missing fields, type mismatches).
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, String> {
        let contents =
            fs::read_to_string(path).map_err(|e| format!("Failed to read theme file: {e}"))?;

        toml::from_str(&contents).map_err(|e| format!("Failed to parse theme TOML: {e}"))
    }

    /// Converts a hex color string to a terminal color.
    ///
    /// Strips a `#` prefix if present, validates length, and parses hex
    /// digits. Falls back to white on parse errors so a malformed theme
    /// degrades visibly rather than failing.
    #[must_use]
    pub fn color(hex: &str) -> Color {
        let hex = hex.trim_start_matches('#').trim();

        if hex.len() != 6 {
            return Color::White;
        }

        let r = u8::from_str_radix(&hex[0..2], 16).unwrap_or(255);
        let g = u8::from_str_radix(&hex[2..4], 16).unwrap_or(255);
        let b = u8::from_str_radix(&hex[4..6], 16).unwrap_or(255);

        Color::Rgb(r, g, b)
    }
}

impl Default for Theme {
    /// Returns the default theme (slate-dark).
    ///
    /// # Panics
    ///
    /// Panics if the built-in theme fails to parse (should never occur).
    fn default() -> Self {
        Self::from_name("slate-dark").expect("Built-in slate-dark theme should always parse")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn built_in_themes_parse() {
        assert_eq!(Theme::from_name("slate-dark").unwrap().name, "slate-dark");
        assert_eq!(Theme::from_name("paper-light").unwrap().name, "paper-light");
    }

    #[test]
    fn unknown_theme_name_is_none() {
        assert!(Theme::from_name("no-such-theme").is_none());
    }

    #[test]
    fn hex_colors_parse_with_and_without_prefix() {
        assert_eq!(Theme::color("#102030"), Color::Rgb(16, 32, 48));
        assert_eq!(Theme::color("102030"), Color::Rgb(16, 32, 48));
    }

    #[test]
    fn malformed_hex_falls_back_to_white() {
        assert_eq!(Theme::color("#12"), Color::White);
        assert_eq!(Theme::color("not-a-color"), Color::White);
    }

    #[test]
    fn theme_loads_from_toml_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r##"
name = "custom"

[colors]
header_fg = "#ffffff"
border = "#222222"
border_focused = "#4444ff"
text_normal = "#eeeeee"
text_dim = "#888888"
accent = "#4444ff"
info_fg = "#4444ff"
error_fg = "#ff4444"
success_fg = "#44ff44"
stat_value_fg = "#ffcc44"
"##
        )
        .unwrap();

        let theme = Theme::from_file(file.path()).unwrap();
        assert_eq!(theme.name, "custom");
        assert!(theme.colors.header_bg.is_none());
    }

    #[test]
    fn missing_color_field_is_a_parse_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "name = \"broken\"\n[colors]\nheader_fg = \"#ffffff\"\n").unwrap();
        assert!(Theme::from_file(file.path()).is_err());
    }
}
