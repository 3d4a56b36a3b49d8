use ratatui::style::{Color, Modifier, Style};

use super::Theme;

pub const SLATE: Theme = Theme {
    header: Style::new()
        .fg(Color::Rgb(226, 232, 240))
        .bg(Color::Rgb(15, 23, 42)),
    prompt: Style::new().fg(Color::LightCyan),
    highlight: Style::new()
        .fg(Color::Yellow)
        .add_modifier(Modifier::BOLD),
    row_highlight: Style::new()
        .bg(Color::Rgb(30, 41, 59))
        .fg(Color::Rgb(250, 204, 21)),
    empty: Style::new().fg(Color::DarkGray),
    error: Style::new().fg(Color::LightRed),
    gauge: Style::new().fg(Color::Rgb(96, 165, 250)),
};
