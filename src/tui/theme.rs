//! Central theme configuration for the TUI.
//!
//! All colors and styles are defined here to keep the panes consistent.

use ratatui::style::{Color, Modifier, Style};

#[derive(Debug, Clone)]
pub struct Theme {
    // General UI
    pub border: Color,
    pub border_focused: Color,
    pub row_marker: &'static str,

    // Text
    pub text: Color,
    pub text_muted: Color,
    pub title: Color,
    pub heading: Color,
    pub warning: Color,

    // List
    pub active_fg: Color,
    pub active_bg: Color,

    // Form modal
    pub modal_border_create: Color,
    pub modal_cursor: Color,

    // Footer/Mode colors
    pub mode_normal: (Color, Color), // (bg, fg)
    pub mode_form: (Color, Color),
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            border: Color::DarkGray,
            border_focused: Color::Cyan,
            row_marker: "▶ ",

            text: Color::White,
            text_muted: Color::Gray,
            title: Color::LightCyan,
            heading: Color::Yellow,
            warning: Color::LightRed,

            active_fg: Color::Black,
            active_bg: Color::Cyan,

            modal_border_create: Color::Green,
            modal_cursor: Color::Cyan,

            mode_normal: (Color::Blue, Color::White),
            mode_form: (Color::Green, Color::Black),
        }
    }
}

impl Theme {
    /// Style for the active list row
    pub fn active_style(&self) -> Style {
        Style::default()
            .fg(self.active_fg)
            .bg(self.active_bg)
            .add_modifier(Modifier::BOLD)
    }

    pub fn muted_style(&self) -> Style {
        Style::default().fg(self.text_muted)
    }

    /// Border style for blocks
    pub fn border_style(&self, focused: bool) -> Style {
        Style::default().fg(if focused {
            self.border_focused
        } else {
            self.border
        })
    }
}

/// Global theme instance
static THEME: std::sync::OnceLock<Theme> = std::sync::OnceLock::new();

/// Get the current theme
pub fn theme() -> &'static Theme {
    THEME.get_or_init(Theme::default)
}
