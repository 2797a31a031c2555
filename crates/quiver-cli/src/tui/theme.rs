//! Styling passed explicitly into render functions.

use ratatui::style::{Color, Modifier, Style};

/// Style set for both views. Passed by reference into every render call so
/// nothing reaches for a global style table.
#[derive(Debug, Clone)]
pub struct Theme {
    pub border: Style,
    pub border_focused: Style,
    pub title: Style,
    pub header: Style,
    pub highlight: Style,
    pub dim: Style,
    pub filter: Style,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            border: Style::default().fg(Color::DarkGray),
            border_focused: Style::default().fg(Color::Cyan),
            title: Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
            header: Style::default()
                .fg(Color::Magenta)
                .add_modifier(Modifier::BOLD),
            highlight: Style::default()
                .bg(Color::DarkGray)
                .add_modifier(Modifier::BOLD),
            dim: Style::default().fg(Color::DarkGray),
            filter: Style::default().fg(Color::Yellow),
        }
    }
}
