use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::filters::{FieldKind, FilterField, FilterState};
use crate::ui::theme::Theme;

/// Argument bundle for rendering the filter form.
pub(crate) struct FormContext<'a> {
    pub filters: &'a FilterState,
    pub cursor: usize,
    pub focused: bool,
    pub theme: &'a Theme,
}

/// Render the filter form into `area`, one label/value pair per field.
pub(crate) fn render_form(frame: &mut Frame, area: Rect, ctx: FormContext<'_>) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Filters ")
        .title_style(ctx.theme.header_style());
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut lines = Vec::new();
    for (index, &field) in FilterField::ALL.iter().enumerate() {
        let current = ctx.focused && index == ctx.cursor;
        let marker = if current { "› " } else { "  " };
        let label_style = if current {
            ctx.theme.highlight_style()
        } else {
            ctx.theme.prompt_style()
        };
        lines.push(Line::from(Span::styled(
            format!("{marker}{}", field.label()),
            label_style,
        )));
        lines.push(value_line(ctx.filters, field, ctx.theme));
    }
    lines.push(Line::default());
    lines.push(Line::from(Span::styled(
        "Enter search · Del clear · Tab results",
        ctx.theme.empty_style(),
    )));

    frame.render_widget(Paragraph::new(lines), inner);
}

fn value_line(filters: &FilterState, field: FilterField, theme: &Theme) -> Line<'static> {
    if field.kind() == FieldKind::Toggle {
        let text = if filters.financial_need {
            "  [x] yes"
        } else {
            "  [ ] no"
        };
        return Line::from(Span::raw(text));
    }

    match filters.value(field) {
        Some(value) => Line::from(Span::raw(format!("  {value}"))),
        None => Line::from(Span::styled(
            format!("  {}", field.placeholder()),
            theme.empty_style(),
        )),
    }
}
