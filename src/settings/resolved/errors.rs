use thiserror::Error;

use super::SettingSource;

/// A setting that cannot be run with, annotated with where it came from so
/// the user knows which flag, variable or file line to fix.
#[derive(Debug, Error)]
#[error("invalid value for {key} from {origin}: {reason} (value: {value})")]
pub(crate) struct ConfigError {
    pub(crate) key: &'static str,
    pub(crate) value: String,
    pub(crate) origin: SettingSource,
    pub(crate) reason: String,
}

impl ConfigError {
    pub(crate) fn invalid(
        key: &'static str,
        value: impl Into<String>,
        origin: SettingSource,
        reason: impl Into<String>,
    ) -> Self {
        Self {
            key,
            value: value.into(),
            origin,
            reason: reason.into(),
        }
    }
}
