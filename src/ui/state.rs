use ratatui::widgets::ListState;
use throbber_widgets_tui::ThrobberState;

use crate::filters::{FilterField, FilterState};
use crate::progress::SearchProgress;
use crate::search::{SearchSession, SearchStatus};
use crate::service::ScholarshipClient;
use crate::types::Scholarship;

pub use super::theme::Theme;

/// Which region of the screen receives key input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Focus {
    Form,
    Results,
}

/// Mutable state behind the interactive search view.
pub struct App {
    pub filters: FilterState,
    pub theme: Theme,
    pub(crate) query_term: String,
    pub(crate) session: SearchSession,
    pub(crate) progress: SearchProgress,
    pub(crate) throbber_state: ThrobberState,
    pub(crate) focus: Focus,
    pub(crate) form_cursor: usize,
    pub(crate) list_state: ListState,
    /// Set after the first submit; switches the layout from the centered
    /// form to the sidebar-plus-results split.
    pub(crate) search_started: bool,
}

impl App {
    /// Create a view backed by `client`, searching with `query_term`.
    #[must_use]
    pub fn new(client: ScholarshipClient, query_term: impl Into<String>) -> Self {
        Self {
            filters: FilterState::new(),
            theme: Theme::default(),
            query_term: query_term.into(),
            session: SearchSession::new(client),
            progress: SearchProgress::with_defaults(),
            throbber_state: ThrobberState::default(),
            focus: Focus::Form,
            form_cursor: 0,
            list_state: ListState::default(),
            search_started: false,
        }
    }

    pub fn set_theme(&mut self, theme: Theme) {
        self.theme = theme;
    }

    pub fn set_filters(&mut self, filters: FilterState) {
        self.filters = filters;
    }

    pub fn set_progress(&mut self, progress: SearchProgress) {
        self.progress = progress;
    }

    /// The form field the cursor currently sits on.
    #[must_use]
    pub(crate) fn current_field(&self) -> FilterField {
        FilterField::ALL[self.form_cursor.min(FilterField::ALL.len() - 1)]
    }

    /// Results eligible for display.
    ///
    /// The collection is only surfaced while the latest search succeeded;
    /// after a failure the retained results stay hidden.
    #[must_use]
    pub(crate) fn visible_results(&self) -> &[Scholarship] {
        if self.session.status() == SearchStatus::Succeeded {
            self.session.scholarships()
        } else {
            &[]
        }
    }

    /// The scholarship under the results cursor, if any.
    #[must_use]
    pub(crate) fn selected_scholarship(&self) -> Option<&Scholarship> {
        let selected = self.list_state.selected()?;
        self.visible_results().get(selected)
    }

    /// Keep the results selection inside the visible collection.
    pub(crate) fn ensure_selection(&mut self) {
        let len = self.visible_results().len();
        if len == 0 {
            self.list_state.select(None);
        } else if let Some(selected) = self.list_state.selected() {
            if selected >= len {
                self.list_state.select(Some(len - 1));
            }
        } else {
            self.list_state.select(Some(0));
        }
    }

    pub(crate) fn move_selection_up(&mut self) {
        if let Some(selected) = self.list_state.selected()
            && selected > 0
        {
            self.list_state.select(Some(selected - 1));
        }
    }

    pub(crate) fn move_selection_down(&mut self) {
        if let Some(selected) = self.list_state.selected() {
            if selected + 1 < self.visible_results().len() {
                self.list_state.select(Some(selected + 1));
            }
        } else {
            self.ensure_selection();
        }
    }

    pub(crate) fn move_cursor_up(&mut self) {
        self.form_cursor = self.form_cursor.saturating_sub(1);
    }

    pub(crate) fn move_cursor_down(&mut self) {
        if self.form_cursor + 1 < FilterField::ALL.len() {
            self.form_cursor += 1;
        }
    }
}
