use std::time::Instant;

use crate::request::SearchRequest;
use crate::ui::state::Focus;

use super::App;

impl App {
    /// Submit the current filters, superseding any search in flight.
    pub(crate) fn submit(&mut self, now: Instant) {
        let request = SearchRequest::new(self.query_term.clone(), &self.filters);
        self.session.submit(request);
        self.progress.start(now);
        self.search_started = true;
    }

    /// Drain search replies and reconcile the view with the new status.
    pub(crate) fn pump(&mut self) {
        let applied = self.session.pump();

        // Progress only runs while a search is loading; stopping here covers
        // every exit path, success and failure alike.
        if !self.session.is_loading() && self.progress.is_active() {
            self.progress.stop();
        }

        if applied && !self.session.is_loading() {
            self.ensure_selection();
            if !self.visible_results().is_empty() {
                self.focus = Focus::Results;
            }
        }
    }
}
