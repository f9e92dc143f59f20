use std::collections::HashMap;

use anyhow::Result;
use config::ConfigError;
use serde::Deserialize;

/// Bind address used when `UNICORND_ADDRESS` is absent or empty.
pub const DEFAULT_ADDRESS: &str = "localhost:8080";

const ENV_PREFIX: &str = "UNICORND";

/// Application configuration loaded from the environment.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// `host:port` the HTTP listener binds to.
    pub address: String,
    pub log: LoggingSection,
    /// Why the logging section fell back to its defaults, if it did.
    ///
    /// Tracing is not initialised while config loads, so the caller reports it.
    pub log_fallback: Option<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            address: DEFAULT_ADDRESS.to_string(),
            log: LoggingSection::default(),
            log_fallback: None,
        }
    }
}

impl AppConfig {
    /// Load configuration from the process environment.
    pub fn load() -> Result<Self> {
        Self::build(environment())
    }

    /// Load configuration from an explicit set of environment variables.
    pub fn from_env_map(vars: HashMap<String, String>) -> Result<Self> {
        Self::build(environment().source(Some(vars)))
    }

    fn build(env: config::Environment) -> Result<Self> {
        let settings = config::Config::builder().add_source(env).build()?;
        let mut config = Self::default();

        match settings.get_string("address") {
            Ok(address) if !address.trim().is_empty() => config.address = address,
            Ok(_) | Err(ConfigError::NotFound(_)) => {}
            Err(err) => return Err(err.into()),
        }

        // Logging is best-effort: a bad value must not keep the listener from starting.
        match settings.get::<LoggingSection>("log") {
            Ok(log) => config.log = log,
            Err(ConfigError::NotFound(_)) => {}
            Err(err) => config.log_fallback = Some(err.to_string()),
        }

        if config.log.level.trim().is_empty() {
            config.log.level = "info".to_string();
        }

        Ok(config)
    }
}

fn environment() -> config::Environment {
    config::Environment::with_prefix(ENV_PREFIX).separator("_")
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct LoggingSection {
    pub level: String,
    pub format: LogFormat,
}

#[derive(Debug, Clone, Copy, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    Json,
    #[default]
    Text,
}
