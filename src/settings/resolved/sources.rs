use std::fmt;

#[derive(Debug, Clone)]
pub(crate) enum SettingSource {
    CliFlag(&'static str),
    Environment(&'static str),
    ConfigKey(&'static str),
}

impl fmt::Display for SettingSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CliFlag(flag) => write!(f, "CLI flag `{flag}`"),
            Self::Environment(var) => write!(f, "environment variable `{var}`"),
            Self::ConfigKey(key) => write!(f, "configuration key `{key}`"),
        }
    }
}

#[derive(Debug, Default, Clone)]
pub(crate) struct ConfigSources {
    pub(crate) search_endpoint: Option<SettingSource>,
    pub(crate) search_timeout: Option<SettingSource>,
    pub(crate) progress_interval: Option<SettingSource>,
}

impl ConfigSources {
    pub(crate) fn source_for_endpoint(&self) -> SettingSource {
        self.search_endpoint
            .clone()
            .unwrap_or(SettingSource::ConfigKey("search.endpoint"))
    }

    pub(crate) fn source_for_timeout(&self) -> SettingSource {
        self.search_timeout
            .clone()
            .unwrap_or(SettingSource::ConfigKey("search.timeout_secs"))
    }

    pub(crate) fn source_for_interval(&self) -> SettingSource {
        self.progress_interval
            .clone()
            .unwrap_or(SettingSource::ConfigKey("progress.interval_secs"))
    }
}
