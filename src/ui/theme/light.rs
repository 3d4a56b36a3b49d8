use ratatui::style::{Color, Modifier, Style};

use super::Theme;

pub const LIGHT: Theme = Theme {
    header: Style::new()
        .fg(Color::Rgb(15, 23, 42))
        .bg(Color::Rgb(226, 232, 240)),
    prompt: Style::new().fg(Color::Rgb(0, 102, 153)),
    highlight: Style::new()
        .fg(Color::Rgb(120, 120, 0))
        .add_modifier(Modifier::BOLD),
    row_highlight: Style::new()
        .bg(Color::Rgb(200, 200, 200))
        .fg(Color::Rgb(120, 120, 0)),
    empty: Style::new().fg(Color::Rgb(100, 100, 100)),
    error: Style::new().fg(Color::Rgb(180, 40, 40)),
    gauge: Style::new().fg(Color::Rgb(0, 102, 153)),
};
