use std::time::Instant;

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{List, Paragraph};

use crate::search::SearchStatus;

use super::App;
use super::components::{
    FormContext, LoadingContext, card_items, chips_line, render_form, render_loading,
};
use super::state::Focus;

const SIDEBAR_WIDTH: u16 = 34;
const CENTERED_FORM_WIDTH: u16 = 48;
const CENTERED_FORM_HEIGHT: u16 = 23;

impl App {
    pub(crate) fn draw(&mut self, frame: &mut Frame, now: Instant) {
        if !self.search_started {
            self.draw_centered_form(frame);
            return;
        }

        let layout = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(SIDEBAR_WIDTH), Constraint::Min(1)])
            .split(frame.area());

        render_form(
            frame,
            layout[0],
            FormContext {
                filters: &self.filters,
                cursor: self.form_cursor,
                focused: self.focus == Focus::Form,
                theme: &self.theme,
            },
        );
        self.draw_results_region(frame, layout[1], now);
    }

    /// Before the first search the form sits alone in the middle of the
    /// screen; afterwards it moves to the sidebar.
    fn draw_centered_form(&mut self, frame: &mut Frame) {
        let area = centered(frame.area(), CENTERED_FORM_WIDTH, CENTERED_FORM_HEIGHT + 2);
        let layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(2), Constraint::Min(1)])
            .split(area);

        let title = Paragraph::new(vec![
            Line::from(Span::styled("Scholarship Search", self.theme.highlight_style())),
            Line::from(Span::styled(
                "Find scholarships tailored to your background",
                self.theme.empty_style(),
            )),
        ])
        .alignment(Alignment::Center);
        frame.render_widget(title, layout[0]);

        render_form(
            frame,
            layout[1],
            FormContext {
                filters: &self.filters,
                cursor: self.form_cursor,
                focused: true,
                theme: &self.theme,
            },
        );
    }

    fn draw_results_region(&mut self, frame: &mut Frame, area: Rect, now: Instant) {
        match self.session.status() {
            SearchStatus::Idle => self.draw_hint(frame, area),
            SearchStatus::Loading => render_loading(
                frame,
                area,
                LoadingContext {
                    progress: &self.progress,
                    throbber_state: &self.throbber_state,
                    theme: &self.theme,
                    now,
                },
            ),
            SearchStatus::Failed => self.draw_failure(frame, area),
            SearchStatus::Succeeded => self.draw_results(frame, area),
        }
    }

    fn draw_hint(&self, frame: &mut Frame, area: Rect) {
        let hint = Paragraph::new("Fill in your profile and press Enter to search")
            .alignment(Alignment::Center)
            .style(self.theme.empty_style());
        frame.render_widget(hint, centered_rows(area, 1));
    }

    fn draw_failure(&self, frame: &mut Frame, area: Rect) {
        let (headline, detail) = match self.session.error() {
            Some(err) => (err.headline(), err.to_string()),
            None => ("Search failed", String::new()),
        };
        let lines = vec![
            Line::from(Span::styled(headline, self.theme.error_style())),
            Line::from(Span::styled(detail, self.theme.empty_style())),
            Line::default(),
            Line::from(Span::styled(
                "Press Enter to search again",
                self.theme.empty_style(),
            )),
        ];
        let message = Paragraph::new(lines).alignment(Alignment::Center);
        frame.render_widget(message, centered_rows(area, 4));
    }

    fn draw_results(&mut self, frame: &mut Frame, area: Rect) {
        let layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Min(1),
            ])
            .split(area);

        frame.render_widget(
            Paragraph::new(chips_line(&self.filters, area.width, &self.theme)),
            layout[0],
        );

        let results = self.visible_results();
        let count = Paragraph::new(format!("{} scholarships found", results.len()))
            .style(self.theme.header_style());
        frame.render_widget(count, layout[1]);

        let list_area = layout[3];
        if results.is_empty() {
            let empty = Paragraph::new("No scholarships found")
                .alignment(Alignment::Center)
                .style(self.theme.empty_style());
            frame.render_widget(empty, centered_rows(list_area, 1));
            return;
        }

        let items = card_items(results, list_area.width.saturating_sub(2), &self.theme);
        let list = List::new(items).highlight_style(self.theme.row_highlight_style());
        frame.render_stateful_widget(list, list_area, &mut self.list_state);
    }
}

fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

fn centered_rows(area: Rect, height: u16) -> Rect {
    let height = height.min(area.height);
    Rect {
        y: area.y + (area.height - height) / 2,
        height,
        ..area
    }
}

#[cfg(test)]
mod tests {
    use std::time::{Duration, Instant};

    use ratatui::{Terminal, backend::TestBackend};

    use super::super::state::fixtures::{grant, offline_app, settle_with_error, settle_with_results};
    use crate::service::SearchError;
    use crate::types::Scholarship;

    fn render(app: &mut super::App, now: Instant) -> String {
        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
        terminal.draw(|frame| app.draw(frame, now)).unwrap();
        terminal.backend().to_string()
    }

    #[test]
    fn initial_screen_shows_the_centered_form() {
        let mut app = offline_app();
        let view = render(&mut app, Instant::now());

        assert!(view.contains("Scholarship Search"));
        assert!(view.contains("GPA"));
        assert!(!view.contains("scholarships found"));
    }

    #[test]
    fn each_scholarship_renders_as_a_card() {
        let mut app = offline_app();
        let results = vec![
            grant("Alpha Grant"),
            Scholarship {
                name: "Beta Grant".into(),
                description: "No deadline or link".into(),
                application_deadline: None,
                application_link: None,
            },
        ];
        settle_with_results(&mut app, results);
        let view = render(&mut app, Instant::now());

        assert!(view.contains("2 scholarships found"));
        assert!(view.contains("Alpha Grant"));
        assert!(view.contains("Alpha Grant description"));
        assert!(view.contains("Beta Grant"));
        // Deadline and link lines only accompany the record that has them.
        assert_eq!(view.matches("Deadline: 2025-06-01").count(), 1);
        assert_eq!(view.matches("Apply Now").count(), 1);
    }

    #[test]
    fn empty_result_set_renders_a_distinct_message() {
        let mut app = offline_app();
        settle_with_results(&mut app, Vec::new());
        let view = render(&mut app, Instant::now());

        assert!(view.contains("0 scholarships found"));
        assert!(view.contains("No scholarships found"));
    }

    #[test]
    fn loading_screen_shows_the_current_stage_message() {
        let mut app = offline_app();
        let start = Instant::now();
        app.submit(start);

        let early = render(&mut app, start);
        assert!(early.contains("Initiating search..."));

        let late = render(&mut app, start + Duration::from_secs(90));
        assert!(late.contains("Finalizing results..."));
    }

    #[test]
    fn failure_is_visible_and_names_the_problem() {
        let mut app = offline_app();
        settle_with_error(&mut app, SearchError::Transport("connection refused".into()));
        let view = render(&mut app, Instant::now());

        assert!(view.contains("Search service unreachable"));
        assert!(!view.contains("scholarships found"));
    }

    #[test]
    fn applied_filters_appear_as_chips_over_the_results() {
        let mut app = offline_app();
        app.filters.gpa = "3.5".into();
        settle_with_results(&mut app, vec![grant("Grant")]);
        let view = render(&mut app, Instant::now());

        assert!(view.contains("GPA 3.5"));
    }
}
