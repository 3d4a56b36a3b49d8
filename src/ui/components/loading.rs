use std::time::Instant;

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Gauge, Paragraph};
use throbber_widgets_tui::{Throbber, ThrobberState};

use crate::progress::SearchProgress;
use crate::ui::theme::Theme;

/// Argument bundle for the in-flight search panel.
pub(crate) struct LoadingContext<'a> {
    pub progress: &'a SearchProgress,
    pub throbber_state: &'a ThrobberState,
    pub theme: &'a Theme,
    pub now: Instant,
}

/// Render the spinner, current stage message and stage gauge, centered.
pub(crate) fn render_loading(frame: &mut Frame, area: Rect, ctx: LoadingContext<'_>) {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .split(area);

    let spinner = Throbber::default().throbber_style(ctx.theme.prompt_style());
    let spinner_span = spinner.to_symbol_span(ctx.throbber_state);
    let message = Line::from(vec![
        spinner_span,
        Span::styled(ctx.progress.message(ctx.now).to_string(), ctx.theme.prompt_style()),
    ]);
    frame.render_widget(Paragraph::new(message).alignment(Alignment::Center), vertical[1]);

    let gauge_area = centered_columns(vertical[3], 40);
    let gauge = Gauge::default()
        .ratio(ctx.progress.ratio(ctx.now))
        .gauge_style(ctx.theme.gauge_style())
        .use_unicode(true);
    frame.render_widget(gauge, gauge_area);
}

fn centered_columns(area: Rect, width: u16) -> Rect {
    let width = width.min(area.width);
    Rect {
        x: area.x + (area.width - width) / 2,
        width,
        ..area
    }
}
