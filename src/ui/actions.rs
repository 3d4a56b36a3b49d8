use std::time::Instant;

use anyhow::Result;
use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::filters::FieldKind;
use crate::types::SearchOutcome;

use super::App;
use super::state::Focus;

impl App {
    /// Apply one key press, returning an outcome when the session ends.
    pub(crate) fn handle_key(&mut self, key: KeyEvent) -> Result<Option<SearchOutcome>> {
        match key.code {
            KeyCode::Esc => {
                return Ok(Some(SearchOutcome {
                    accepted: false,
                    query: self.query_term.clone(),
                    selection: None,
                }));
            }
            KeyCode::Tab => self.toggle_focus(),
            _ => match self.focus {
                Focus::Form => self.handle_form_key(key),
                Focus::Results => {
                    if let Some(outcome) = self.handle_results_key(key) {
                        return Ok(Some(outcome));
                    }
                }
            },
        }
        Ok(None)
    }

    fn toggle_focus(&mut self) {
        self.focus = match self.focus {
            Focus::Form => Focus::Results,
            Focus::Results => Focus::Form,
        };
        if self.focus == Focus::Results {
            self.ensure_selection();
        }
    }

    fn handle_form_key(&mut self, key: KeyEvent) {
        let field = self.current_field();
        match key.code {
            KeyCode::Up => self.move_cursor_up(),
            KeyCode::Down => self.move_cursor_down(),
            KeyCode::Enter => self.submit(Instant::now()),
            KeyCode::Left => match field.kind() {
                FieldKind::Choice => self.filters.cycle_back(field),
                FieldKind::Toggle => self.filters.toggle(field),
                FieldKind::Text => {}
            },
            KeyCode::Right => match field.kind() {
                FieldKind::Choice => self.filters.cycle(field),
                FieldKind::Toggle => self.filters.toggle(field),
                FieldKind::Text => {}
            },
            KeyCode::Backspace => {
                if let Some(text) = self.filters.text_mut(field) {
                    text.pop();
                }
            }
            // The explicit "remove this filter" action.
            KeyCode::Delete => self.filters.clear(field),
            KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.filters.clear(field);
            }
            KeyCode::Char(' ') => match field.kind() {
                FieldKind::Toggle => self.filters.toggle(field),
                FieldKind::Choice => self.filters.cycle(field),
                FieldKind::Text => self.append_char(field, ' '),
            },
            KeyCode::Char(ch) => self.append_char(field, ch),
            _ => {}
        }
    }

    fn handle_results_key(&mut self, key: KeyEvent) -> Option<SearchOutcome> {
        match key.code {
            KeyCode::Up => self.move_selection_up(),
            KeyCode::Down => self.move_selection_down(),
            KeyCode::Enter => {
                return Some(SearchOutcome {
                    accepted: true,
                    query: self.query_term.clone(),
                    selection: self.selected_scholarship().cloned(),
                });
            }
            _ => {}
        }
        None
    }

    fn append_char(&mut self, field: crate::filters::FilterField, ch: char) {
        if !field.accepts_char(ch) {
            return;
        }
        if let Some(text) = self.filters.text_mut(field) {
            text.push(ch);
        }
    }
}
