use anyhow::Result;
use config::builder::DefaultState;
use config::{Config, ConfigBuilder, FileFormat};
use serde::Deserialize;

use crate::constants::DEFAULT_TIMEZONE;

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub schedule: ScheduleConfig,
    #[serde(default)]
    pub query: QueryConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ScheduleConfig {
    /// Opening-hours specification, e.g. `mo-fr 08:00-18:00;sa 10:00-12:00`.
    pub spec: String,
    /// Timezone the specification is expressed in (IANA or Windows name).
    pub timezone: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct QueryConfig {
    /// When set, also look for the next window that fits this many minutes.
    pub minutes: Option<u32>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
}

impl ScheduleConfig {
    /// ## Summary
    /// Returns `true` when no specification was configured, meaning the
    /// schedule defaults to always open.
    #[must_use]
    pub fn is_default(&self) -> bool {
        self.spec.trim().is_empty()
    }
}

fn with_defaults() -> Result<ConfigBuilder<DefaultState>> {
    Ok(Config::builder()
        .set_default("schedule.spec", "")?
        .set_default("schedule.timezone", DEFAULT_TIMEZONE)?
        .set_default("logging.level", "info")?)
}

impl Settings {
    /// ## Summary
    /// Loads configuration from an optional `config.toml` and environment
    /// variables into a `Settings`. Environment variables take precedence
    /// over file values.
    ///
    /// ## Errors
    /// Returns an error if building the configuration or deserializing it fails.
    pub fn load() -> Result<Self> {
        Ok(with_defaults()?
            // TOML file
            .add_source(config::File::with_name("config.toml").required(false))
            // Env file and process environment
            .add_source(
                config::Environment::default()
                    .convert_case(config::Case::Snake)
                    .separator("_")
                    .ignore_empty(true)
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize::<Settings>()?)
    }

    /// ## Summary
    /// Builds `Settings` from an inline TOML document layered over the defaults.
    ///
    /// ## Errors
    /// Returns an error if the document is not valid TOML or does not match
    /// the settings layout.
    pub fn from_toml(document: &str) -> Result<Self> {
        Ok(with_defaults()?
            .add_source(config::File::from_str(document, FileFormat::Toml))
            .build()?
            .try_deserialize::<Settings>()?)
    }
}

/// ## Summary
/// Loads configuration from environment variables and `.env` file.
///
/// ## Errors
/// Returns an error if loading or deserializing the configuration fails.
pub fn load_config() -> Result<Settings> {
    dotenvy::dotenv().ok();

    Settings::load()
}
