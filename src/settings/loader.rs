use anyhow::{Result, anyhow};

use super::raw::RawConfig;
use super::resolved::ResolvedConfig;
use super::sources::build_config;
use crate::cli::CliArgs;

/// Load configuration by combining CLI arguments, config files and environment
/// variables.
pub(crate) fn load(cli: &CliArgs) -> Result<ResolvedConfig> {
    let builder = build_config(cli)?;
    let mut raw: RawConfig = builder
        .try_deserialize()
        .map_err(|err| anyhow!("failed to deserialize configuration: {err}"))?;
    raw.apply_cli_overrides(cli);
    raw.resolve(cli)
}

#[cfg(test)]
mod tests {
    use std::fs;
    use std::time::Duration;

    use clap::Parser;

    use super::*;

    #[test]
    fn config_file_values_reach_the_resolved_config() {
        let dir = tempfile::tempdir().expect("tempdir");
        let file = dir.path().join("searchship.toml");
        fs::write(
            &file,
            r#"
[search]
endpoint = "http://127.0.0.1:9000"
timeout_secs = 5

[progress]
messages = ["One...", "Two..."]
interval_secs = 3

[ui]
theme = "light"
"#,
        )
        .expect("write config");

        let cli = CliArgs::parse_from([
            "searchship",
            "--no-config",
            "--config",
            file.to_str().expect("utf-8 path"),
        ]);
        let config = load(&cli).expect("load");

        assert_eq!(config.endpoint, "http://127.0.0.1:9000");
        assert_eq!(config.timeout, Duration::from_secs(5));
        assert_eq!(config.stage_messages, vec!["One...", "Two..."]);
        assert_eq!(config.stage_interval, Duration::from_secs(3));
        assert_eq!(config.theme.as_deref(), Some("light"));
    }

    #[test]
    fn cli_flags_override_config_file_values() {
        let dir = tempfile::tempdir().expect("tempdir");
        let file = dir.path().join("searchship.toml");
        fs::write(&file, "[search]\nendpoint = \"http://from-file.example\"\n").expect("write");

        let cli = CliArgs::parse_from([
            "searchship",
            "--no-config",
            "--config",
            file.to_str().expect("utf-8 path"),
            "--endpoint",
            "http://from-flag.example",
        ]);
        let config = load(&cli).expect("load");

        assert_eq!(config.endpoint, "http://from-flag.example");
    }
}
