use ratatui::text::{Line, Span};
use ratatui::widgets::ListItem;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::filters::FilterState;
use crate::types::Scholarship;
use crate::ui::theme::Theme;

/// One applied-filter chips line, e.g. `GPA 3.5 · Gender female`.
pub(crate) fn chips_line(filters: &FilterState, width: u16, theme: &Theme) -> Line<'static> {
    let chips: Vec<String> = filters
        .applied()
        .into_iter()
        .map(|(field, value)| format!("{} {value}", field.label()))
        .collect();
    if chips.is_empty() {
        return Line::from(Span::styled("No filters applied", theme.empty_style()));
    }
    let text = truncate_to_width(&chips.join(" · "), width as usize);
    Line::from(Span::styled(text, theme.prompt_style()))
}

/// Build one list item per scholarship, in service order.
pub(crate) fn card_items(
    scholarships: &[Scholarship],
    width: u16,
    theme: &Theme,
) -> Vec<ListItem<'static>> {
    let width = width as usize;
    scholarships
        .iter()
        .map(|scholarship| ListItem::new(card_lines(scholarship, width, theme)))
        .collect()
}

fn card_lines(scholarship: &Scholarship, width: usize, theme: &Theme) -> Vec<Line<'static>> {
    let mut lines = vec![
        Line::from(Span::styled(
            truncate_to_width(&scholarship.name, width),
            theme.highlight_style(),
        )),
        Line::from(Span::raw(truncate_to_width(
            &scholarship.description,
            width,
        ))),
    ];
    if let Some(deadline) = scholarship.deadline() {
        lines.push(Line::from(Span::styled(
            truncate_to_width(&format!("Deadline: {deadline}"), width),
            theme.empty_style(),
        )));
    }
    if let Some(link) = scholarship.link() {
        lines.push(Line::from(Span::styled(
            truncate_to_width(&format!("Apply Now → {link}"), width),
            theme.prompt_style(),
        )));
    }
    lines.push(Line::default());
    lines
}

/// Clip `text` to `width` display columns, appending an ellipsis when cut.
pub(crate) fn truncate_to_width(text: &str, width: usize) -> String {
    if text.width() <= width {
        return text.to_string();
    }
    let mut used = 0;
    let mut clipped = String::new();
    for ch in text.chars() {
        let ch_width = ch.width().unwrap_or(0);
        if used + ch_width > width.saturating_sub(1) {
            break;
        }
        used += ch_width;
        clipped.push(ch);
    }
    clipped.push('…');
    clipped
}
