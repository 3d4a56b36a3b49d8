use anyhow::{Context, Result};

use searchship::progress::SearchProgress;
use searchship::request::SearchRequest;
use searchship::service::ScholarshipClient;
use searchship::types::{Scholarship, SearchOutcome};
use searchship::ui::SearchUi;

use crate::settings::ResolvedConfig;

/// Executes a search session from resolved settings.
pub(crate) struct SearchWorkflow {
    config: ResolvedConfig,
}

impl SearchWorkflow {
    pub(crate) fn from_config(config: ResolvedConfig) -> Self {
        Self { config }
    }

    fn client(&self) -> ScholarshipClient {
        ScholarshipClient::new(self.config.endpoint.clone(), self.config.timeout)
    }

    /// Issue a single search with the configured filters and return the
    /// results, without entering the interactive view.
    pub(crate) fn run_once(&self) -> Result<Vec<Scholarship>> {
        let request = SearchRequest::new(self.config.query_term.clone(), &self.config.filters);
        log::info!("searching {} for '{}'", self.config.endpoint, self.config.query_term);
        self.client()
            .search(&request)
            .with_context(|| format!("search against {} failed", self.config.endpoint))
    }

    /// Run the interactive view until the user accepts a scholarship or
    /// cancels.
    pub(crate) fn run_interactive(self) -> Result<SearchOutcome> {
        let client = self.client();
        let ResolvedConfig {
            query_term,
            stage_messages,
            stage_interval,
            theme,
            filters,
            ..
        } = self.config;

        let mut ui = SearchUi::new(client, query_term)
            .with_filters(filters)
            .with_progress(SearchProgress::new(stage_messages, stage_interval));
        if let Some(name) = theme.as_deref() {
            ui = ui.with_theme_name(name)?;
        }
        ui.run()
    }
}
