//! Log subscriber setup.
//!
//! The library crates only emit `tracing` events. A script host calls
//! [`init_logging`] once at start-up to route them to stdout.

use config::{Config, Environment};
use serde::{Deserialize, Serialize};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::error::HostError;

pub const ENV_PREFIX: &str = "DEUNA_LOG";

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Json,
    Pretty,
}

/// Subscriber settings. `RUST_LOG` takes precedence over `level`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LoggingConfig {
    #[serde(default = "default_level")]
    pub level: String,
    #[serde(default)]
    pub format: LogFormat,
}

fn default_level() -> String {
    "info".to_owned()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
            format: LogFormat::default(),
        }
    }
}

impl LoggingConfig {
    /// Load from `DEUNA_LOG_LEVEL` and `DEUNA_LOG_FORMAT`.
    ///
    /// # Errors
    ///
    /// Returns [`HostError::Config`] on an unreadable or invalid value.
    pub fn from_env() -> Result<Self, HostError> {
        Self::from_env_with_prefix(ENV_PREFIX)
    }

    /// # Errors
    ///
    /// Returns [`HostError::Config`] on an unreadable or invalid value.
    pub fn from_env_with_prefix(prefix: &str) -> Result<Self, HostError> {
        let config = Config::builder()
            .add_source(Environment::with_prefix(prefix))
            .build()?
            .try_deserialize()?;
        Ok(config)
    }

    /// The effective filter: `RUST_LOG` if set, else `level`.
    ///
    /// # Errors
    ///
    /// Returns [`HostError::LogFilter`] if `level` is not a valid directive.
    pub fn env_filter(&self) -> Result<EnvFilter, HostError> {
        match EnvFilter::try_from_default_env() {
            Ok(filter) => Ok(filter),
            Err(_) => EnvFilter::try_new(&self.level).map_err(|e| HostError::LogFilter(e.to_string())),
        }
    }
}

/// Install the global subscriber.
///
/// Returns `Ok(false)` if a subscriber was already installed, so repeated
/// calls from several scripts are harmless.
///
/// # Errors
///
/// Returns [`HostError::LogFilter`] if the configured level is invalid.
pub fn init_logging(config: &LoggingConfig) -> Result<bool, HostError> {
    let filter = config.env_filter()?;
    let registry = tracing_subscriber::registry().with(filter);

    let installed = match config.format {
        LogFormat::Json => registry
            .with(tracing_subscriber::fmt::layer().json().with_current_span(true))
            .try_init(),
        LogFormat::Pretty => registry.with(tracing_subscriber::fmt::layer().pretty()).try_init(),
    };
    Ok(installed.is_ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_info_json() {
        let config = LoggingConfig::default();
        assert_eq!(config.level, "info");
        assert_eq!(config.format, LogFormat::Json);
    }

    #[test]
    fn format_is_read_from_prefixed_env() {
        std::env::set_var("DEUNA_LOG_TEST_FORMAT", "pretty");
        std::env::set_var("DEUNA_LOG_TEST_LEVEL", "deuna_otp=debug");
        let config = LoggingConfig::from_env_with_prefix("DEUNA_LOG_TEST").unwrap();
        assert_eq!(config.format, LogFormat::Pretty);
        assert_eq!(config.level, "deuna_otp=debug");
    }

    #[test]
    fn second_init_reports_already_installed() {
        let config = LoggingConfig::default();
        let _ = init_logging(&config).unwrap();
        assert!(!init_logging(&config).unwrap());
    }
}
