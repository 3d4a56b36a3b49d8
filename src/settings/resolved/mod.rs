use std::time::Duration;

use searchship::filters::FilterState;

mod errors;
mod sources;
mod summary;
mod validation;

pub(crate) use errors::ConfigError;
pub(crate) use sources::{ConfigSources, SettingSource};

/// Application-ready configuration derived from user input, config files and
/// sensible defaults.
#[derive(Debug)]
pub(crate) struct ResolvedConfig {
    pub(crate) endpoint: String,
    pub(crate) query_term: String,
    pub(crate) timeout: Duration,
    pub(crate) stage_messages: Vec<String>,
    pub(crate) stage_interval: Duration,
    pub(crate) theme: Option<String>,
    pub(crate) filters: FilterState,
}

impl ResolvedConfig {
    /// Check the configuration for values the application cannot run with.
    pub(crate) fn validate(&self, sources: &ConfigSources) -> Result<(), ConfigError> {
        validation::validate(self, sources)
    }

    /// Print a human readable summary of the effective configuration.
    pub(crate) fn print_summary(&self) {
        summary::print_summary(self);
    }
}
