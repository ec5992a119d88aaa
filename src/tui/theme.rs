// Theme system for the TUI
//
// Provides color themes that can be switched at runtime with `T`.
// Each theme defines colors for all UI elements.

use ratatui::style::Color;
use serde::{Deserialize, Serialize};

/// Available themes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ThemeKind {
    #[default]
    Dark,
    Light,
    Desert,
    Oasis,
}

impl ThemeKind {
    pub fn all() -> &'static [ThemeKind] {
        &[
            ThemeKind::Dark,
            ThemeKind::Light,
            ThemeKind::Desert,
            ThemeKind::Oasis,
        ]
    }

    /// Get the next theme in the cycle
    pub fn next(self) -> Self {
        let themes = Self::all();
        let current = themes.iter().position(|&t| t == self).unwrap_or(0);
        themes[(current + 1) % themes.len()]
    }

    /// Resolve a config name; unknown names fall back to the default
    pub fn from_name(name: &str) -> Self {
        match name.to_lowercase().as_str() {
            "light" => ThemeKind::Light,
            "desert" => ThemeKind::Desert,
            "oasis" => ThemeKind::Oasis,
            _ => ThemeKind::Dark,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            ThemeKind::Dark => "Dark",
            ThemeKind::Light => "Light",
            ThemeKind::Desert => "Desert",
            ThemeKind::Oasis => "Oasis",
        }
    }

    pub fn theme(&self) -> Theme {
        match self {
            ThemeKind::Dark => Theme::dark(),
            ThemeKind::Light => Theme::light(),
            ThemeKind::Desert => Theme::desert(),
            ThemeKind::Oasis => Theme::oasis(),
        }
    }
}

/// Complete theme definition with all UI colors
#[derive(Debug, Clone)]
pub struct Theme {
    // Base colors
    pub bg: Color,
    pub fg: Color,
    pub muted: Color,
    pub border: Color,
    pub border_focused: Color,

    // Chrome
    pub title: Color,
    pub status_bar: Color,

    // Selection
    pub selected_bg: Color,
    pub selected_fg: Color,

    // Accents
    pub accent: Color,
    pub highlight: Color,
    pub star: Color,
    pub tag: Color,

    // Wallet
    pub credit: Color,
    pub debit: Color,

    // Log levels
    pub log_error: Color,
    pub log_warn: Color,
    pub log_info: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}

impl Theme {
    /// Dark theme (default)
    pub fn dark() -> Self {
        Self {
            bg: Color::Reset,
            fg: Color::White,
            muted: Color::Gray,
            border: Color::DarkGray,
            border_focused: Color::Cyan,

            title: Color::Cyan,
            status_bar: Color::Green,

            selected_bg: Color::DarkGray,
            selected_fg: Color::Yellow,

            accent: Color::Cyan,
            highlight: Color::Yellow,
            star: Color::Yellow,
            tag: Color::LightBlue,

            credit: Color::Green,
            debit: Color::Red,

            log_error: Color::Red,
            log_warn: Color::Yellow,
            log_info: Color::Blue,
        }
    }

    /// Light theme for bright terminals
    pub fn light() -> Self {
        Self {
            bg: Color::White,
            fg: Color::Black,
            muted: Color::DarkGray,
            border: Color::Gray,
            border_focused: Color::Blue,

            title: Color::Blue,
            status_bar: Color::Blue,

            selected_bg: Color::LightBlue,
            selected_fg: Color::Black,

            accent: Color::Blue,
            highlight: Color::Magenta,
            star: Color::Rgb(204, 136, 0),
            tag: Color::Blue,

            credit: Color::Green,
            debit: Color::Red,

            log_error: Color::Red,
            log_warn: Color::Rgb(204, 136, 0),
            log_info: Color::Blue,
        }
    }

    /// Warm sand palette
    pub fn desert() -> Self {
        Self {
            bg: Color::Rgb(40, 30, 20),
            fg: Color::Rgb(235, 219, 178),
            muted: Color::Rgb(168, 153, 132),
            border: Color::Rgb(102, 92, 84),
            border_focused: Color::Rgb(250, 189, 47),

            title: Color::Rgb(250, 189, 47),
            status_bar: Color::Rgb(184, 187, 38),

            selected_bg: Color::Rgb(80, 73, 69),
            selected_fg: Color::Rgb(250, 189, 47),

            accent: Color::Rgb(254, 128, 25),
            highlight: Color::Rgb(250, 189, 47),
            star: Color::Rgb(250, 189, 47),
            tag: Color::Rgb(131, 165, 152),

            credit: Color::Rgb(184, 187, 38),
            debit: Color::Rgb(251, 73, 52),

            log_error: Color::Rgb(251, 73, 52),
            log_warn: Color::Rgb(250, 189, 47),
            log_info: Color::Rgb(131, 165, 152),
        }
    }

    /// Cool teal palette
    pub fn oasis() -> Self {
        Self {
            bg: Color::Rgb(20, 34, 40),
            fg: Color::Rgb(216, 222, 233),
            muted: Color::Rgb(120, 140, 150),
            border: Color::Rgb(59, 80, 90),
            border_focused: Color::Rgb(136, 192, 208),

            title: Color::Rgb(136, 192, 208),
            status_bar: Color::Rgb(163, 190, 140),

            selected_bg: Color::Rgb(46, 66, 75),
            selected_fg: Color::Rgb(235, 203, 139),

            accent: Color::Rgb(129, 161, 193),
            highlight: Color::Rgb(235, 203, 139),
            star: Color::Rgb(235, 203, 139),
            tag: Color::Rgb(136, 192, 208),

            credit: Color::Rgb(163, 190, 140),
            debit: Color::Rgb(191, 97, 106),

            log_error: Color::Rgb(191, 97, 106),
            log_warn: Color::Rgb(235, 203, 139),
            log_info: Color::Rgb(129, 161, 193),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn theme_cycle_visits_all_and_wraps() {
        let mut kind = ThemeKind::Dark;
        let mut seen = vec![kind];
        for _ in 0..ThemeKind::all().len() - 1 {
            kind = kind.next();
            seen.push(kind);
        }
        assert_eq!(seen, ThemeKind::all());
        assert_eq!(kind.next(), ThemeKind::Dark);
    }

    #[test]
    fn unknown_theme_name_falls_back_to_dark() {
        assert_eq!(ThemeKind::from_name("neon"), ThemeKind::Dark);
        assert_eq!(ThemeKind::from_name("Desert"), ThemeKind::Desert);
    }
}
