#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

use std::{str::FromStr, sync::OnceLock};

use tracing::level_filters::LevelFilter;

use crate::{
    constants::{LOG_ENV, OUTPUT_ENV},
    error::NotasError,
};

/// How the binary prints results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Human-readable tables.
    #[default]
    Table,
    /// Pretty-printed JSON.
    Json,
}

impl FromStr for OutputFormat {
    type Err = NotasError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "table" => Ok(OutputFormat::Table),
            "json" => Ok(OutputFormat::Json),
            _ => Err(NotasError::InvalidConfig {
                key:    OUTPUT_ENV,
                value:  s.to_string(),
                reason: "expected `table` or `json`",
            }),
        }
    }
}

/// Settings read from the environment (and `.env`, loaded by the binary).
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Maximum level of log events that are printed.
    log_level: LevelFilter,
    /// Default output format.
    output:    OutputFormat,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: LevelFilter::WARN,
            output:    OutputFormat::Table,
        }
    }
}

impl Config {
    /// Reads configuration from the process environment.
    pub fn from_env() -> Result<Self, NotasError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Reads configuration through `lookup`, which maps a variable name to
    /// its value. Unset or blank variables keep their defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, NotasError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();
        let read = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        if let Some(level) = read(LOG_ENV) {
            config.log_level =
                LevelFilter::from_str(level.trim()).map_err(|_| NotasError::InvalidConfig {
                    key:    LOG_ENV,
                    value:  level.clone(),
                    reason: "expected one of off, error, warn, info, debug, trace",
                })?;
        }

        if let Some(output) = read(OUTPUT_ENV) {
            config.output = output.parse()?;
        }

        Ok(config)
    }

    /// Returns the maximum log level.
    pub fn log_level(&self) -> LevelFilter {
        self.log_level
    }

    /// Returns the default output format.
    pub fn output(&self) -> OutputFormat {
        self.output
    }
}

/// Process-wide configuration, read once.
static CONFIG: OnceLock<Config> = OnceLock::new();

/// Returns the process-wide configuration, reading the environment on first
/// use.
pub fn get() -> Result<&'static Config, NotasError> {
    if let Some(config) = CONFIG.get() {
        return Ok(config);
    }
    let config = Config::from_env()?;
    Ok(CONFIG.get_or_init(|| config))
}
