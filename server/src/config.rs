use anyhow::{Context, Result};
use config::{ConfigBuilder, Environment, File, builder::DefaultState};
use serde::Deserialize;

const CONFIG_FILE: &str = "admin-panel";
const ENV_PREFIX: &str = "ADMIN_PANEL";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// `tracing-subscriber` filter directives, e.g. `info,web=debug`.
    pub log_filter: String,
    /// Serve `GET /healthz` alongside the app.
    pub health_check: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_filter: "info".into(),
            health_check: true,
        }
    }
}

impl Config {
    /// Read `admin-panel.toml` if present, then `ADMIN_PANEL_*` environment
    /// variables on top.
    pub fn load() -> Result<Self> {
        Self::build(
            config::Config::builder()
                .add_source(File::with_name(CONFIG_FILE).required(false))
                .add_source(Environment::with_prefix(ENV_PREFIX).try_parsing(true)),
        )
    }

    fn build(builder: ConfigBuilder<DefaultState>) -> Result<Self> {
        builder
            .build()
            .context("failed to read admin panel configuration")?
            .try_deserialize()
            .context("invalid admin panel configuration")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use config::FileFormat;

    fn from_toml(toml: &str) -> Result<Config> {
        Config::build(config::Config::builder().add_source(File::from_str(toml, FileFormat::Toml)))
    }

    #[test]
    fn empty_sources_use_defaults() {
        assert_eq!(from_toml("").unwrap(), Config::default());
    }

    #[test]
    fn file_overrides_defaults() {
        let config = from_toml("log_filter = \"debug\"\nhealth_check = false").unwrap();
        assert_eq!(config.log_filter, "debug");
        assert!(!config.health_check);
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let config = from_toml("health_check = false").unwrap();
        assert_eq!(config.log_filter, "info");
        assert!(!config.health_check);
    }

    #[test]
    fn wrong_type_is_rejected() {
        let err = from_toml("health_check = \"sometimes\"").unwrap_err();
        assert!(err.to_string().contains("invalid admin panel configuration"));
    }
}
