use std::env;
use std::time::Duration;

use anyhow::{Error, Result};
use serde::Deserialize;

use searchship::progress::{DEFAULT_STAGE_INTERVAL, DEFAULT_STAGE_MESSAGES};

use super::resolved::{ConfigSources, ResolvedConfig, SettingSource};
use crate::cli::CliArgs;

const DEFAULT_ENDPOINT: &str = "https://bilal-420-search-ship.hf.space";
const DEFAULT_QUERY_TERM: &str = "scholarships";
const DEFAULT_TIMEOUT_SECS: u64 = 60;

/// Mirror of the configuration file representation before CLI overrides and
/// validation are applied.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct RawConfig {
    search: SearchSection,
    progress: ProgressSection,
    ui: UiSection,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct SearchSection {
    endpoint: Option<String>,
    query: Option<String>,
    timeout_secs: Option<u64>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct ProgressSection {
    messages: Option<Vec<String>>,
    interval_secs: Option<u64>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct UiSection {
    theme: Option<String>,
}

impl RawConfig {
    /// Apply CLI overrides on top of the raw configuration values.
    pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
        if let Some(endpoint) = cli.endpoint.clone() {
            self.search.endpoint = Some(endpoint);
        }
        if let Some(query) = cli.query.clone() {
            self.search.query = Some(query);
        }
        if let Some(timeout) = cli.timeout {
            self.search.timeout_secs = Some(timeout);
        }
        if let Some(interval) = cli.stage_interval {
            self.progress.interval_secs = Some(interval);
        }
        if let Some(theme) = cli.theme.clone() {
            self.ui.theme = Some(theme);
        }
    }

    /// Convert the raw configuration into a [`ResolvedConfig`], validating and
    /// filling defaults where required.
    pub(super) fn resolve(self, cli: &CliArgs) -> Result<ResolvedConfig> {
        let sources = ConfigSources {
            search_endpoint: detect_source(
                cli.endpoint.is_some(),
                self.search.endpoint.is_some(),
                "SEARCHSHIP__SEARCH__ENDPOINT",
                "--endpoint",
                "search.endpoint",
            ),
            search_timeout: detect_source(
                cli.timeout.is_some(),
                self.search.timeout_secs.is_some(),
                "SEARCHSHIP__SEARCH__TIMEOUT_SECS",
                "--timeout",
                "search.timeout_secs",
            ),
            progress_interval: detect_source(
                cli.stage_interval.is_some(),
                self.progress.interval_secs.is_some(),
                "SEARCHSHIP__PROGRESS__INTERVAL_SECS",
                "--stage-interval",
                "progress.interval_secs",
            ),
        };

        let config = ResolvedConfig {
            endpoint: self
                .search
                .endpoint
                .unwrap_or_else(|| DEFAULT_ENDPOINT.to_string()),
            query_term: self
                .search
                .query
                .unwrap_or_else(|| DEFAULT_QUERY_TERM.to_string()),
            timeout: Duration::from_secs(self.search.timeout_secs.unwrap_or(DEFAULT_TIMEOUT_SECS)),
            stage_messages: self
                .progress
                .messages
                .unwrap_or_else(|| DEFAULT_STAGE_MESSAGES.map(String::from).to_vec()),
            stage_interval: self
                .progress
                .interval_secs
                .map(Duration::from_secs)
                .unwrap_or(DEFAULT_STAGE_INTERVAL),
            theme: self.ui.theme,
            filters: cli.filter_state(),
        };

        config.validate(&sources).map_err(Error::new)?;

        Ok(config)
    }
}

fn detect_source(
    cli_present: bool,
    value_present: bool,
    env_var: &'static str,
    cli_flag: &'static str,
    key: &'static str,
) -> Option<SettingSource> {
    if !value_present {
        return None;
    }

    if cli_present {
        return Some(SettingSource::CliFlag(cli_flag));
    }

    if env::var_os(env_var).is_some() {
        return Some(SettingSource::Environment(env_var));
    }

    Some(SettingSource::ConfigKey(key))
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::*;

    #[test]
    fn defaults_fill_every_field() {
        let cli = CliArgs::parse_from(["searchship"]);
        let config = RawConfig::default().resolve(&cli).unwrap();

        assert_eq!(config.endpoint, DEFAULT_ENDPOINT);
        assert_eq!(config.query_term, "scholarships");
        assert_eq!(config.timeout, Duration::from_secs(60));
        assert_eq!(config.stage_messages.len(), 6);
        assert_eq!(config.stage_interval, Duration::from_secs(9));
        assert_eq!(config.theme, None);
        assert!(config.filters.is_empty());
    }

    #[test]
    fn cli_overrides_take_precedence() {
        let cli = CliArgs::parse_from([
            "searchship",
            "--endpoint",
            "http://127.0.0.1:9000",
            "--query",
            "grants",
            "--timeout",
            "5",
            "--stage-interval",
            "2",
            "--theme",
            "light",
            "--gpa",
            "3.9",
        ]);

        let mut raw = RawConfig::default();
        raw.search.endpoint = Some("https://from-file.example".into());
        raw.apply_cli_overrides(&cli);
        let config = raw.resolve(&cli).unwrap();

        assert_eq!(config.endpoint, "http://127.0.0.1:9000");
        assert_eq!(config.query_term, "grants");
        assert_eq!(config.timeout, Duration::from_secs(5));
        assert_eq!(config.stage_interval, Duration::from_secs(2));
        assert_eq!(config.theme.as_deref(), Some("light"));
        assert_eq!(config.filters.gpa, "3.9");
    }

    #[test]
    fn invalid_endpoint_is_reported_with_its_source() {
        let cli = CliArgs::parse_from(["searchship", "--endpoint", "not-a-url"]);
        let mut raw = RawConfig::default();
        raw.apply_cli_overrides(&cli);

        let err = raw.resolve(&cli).unwrap_err().to_string();
        assert!(err.contains("search.endpoint"));
        assert!(err.contains("--endpoint"));
    }
}
