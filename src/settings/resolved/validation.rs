use super::{ConfigError, ConfigSources, ResolvedConfig};

pub(super) fn validate(
    config: &ResolvedConfig,
    sources: &ConfigSources,
) -> Result<(), ConfigError> {
    let endpoint = config.endpoint.trim();
    if !endpoint.starts_with("http://") && !endpoint.starts_with("https://") {
        return Err(ConfigError::invalid(
            "search.endpoint",
            config.endpoint.clone(),
            sources.source_for_endpoint(),
            "must be an http:// or https:// URL",
        ));
    }

    if config.timeout.is_zero() {
        return Err(ConfigError::invalid(
            "search.timeout_secs",
            "0",
            sources.source_for_timeout(),
            "must be greater than zero",
        ));
    }

    if config.stage_interval.is_zero() {
        return Err(ConfigError::invalid(
            "progress.interval_secs",
            "0",
            sources.source_for_interval(),
            "must be greater than zero",
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use searchship::filters::FilterState;

    use super::super::SettingSource;
    use super::*;

    fn base_config() -> ResolvedConfig {
        ResolvedConfig {
            endpoint: "https://search.example".into(),
            query_term: "scholarships".into(),
            timeout: Duration::from_secs(60),
            stage_messages: vec!["Searching...".into()],
            stage_interval: Duration::from_secs(9),
            theme: None,
            filters: FilterState::new(),
        }
    }

    #[test]
    fn accepts_a_sensible_configuration() {
        let config = base_config();
        assert!(validate(&config, &ConfigSources::default()).is_ok());
    }

    #[test]
    fn rejects_endpoints_without_a_scheme() {
        let config = ResolvedConfig {
            endpoint: "search.example".into(),
            ..base_config()
        };

        let sources = ConfigSources {
            search_endpoint: Some(SettingSource::CliFlag("--endpoint")),
            ..ConfigSources::default()
        };

        let err = validate(&config, &sources).unwrap_err();
        assert!(matches!(err.key, "search.endpoint"));
        let message = err.to_string();
        assert!(message.contains("CLI flag"));
        assert!(message.contains("value: search.example"));
    }

    #[test]
    fn rejects_zero_timeout() {
        let config = ResolvedConfig {
            timeout: Duration::ZERO,
            ..base_config()
        };

        let sources = ConfigSources {
            search_timeout: Some(SettingSource::Environment(
                "SEARCHSHIP__SEARCH__TIMEOUT_SECS",
            )),
            ..ConfigSources::default()
        };

        let err = validate(&config, &sources).unwrap_err();
        assert!(matches!(err.key, "search.timeout_secs"));
        assert!(err.to_string().contains("environment variable"));
    }

    #[test]
    fn rejects_zero_stage_interval() {
        let config = ResolvedConfig {
            stage_interval: Duration::ZERO,
            ..base_config()
        };

        let err = validate(&config, &ConfigSources::default()).unwrap_err();
        assert!(matches!(err.key, "progress.interval_secs"));
        assert!(err.to_string().contains("configuration key"));
    }
}
