//! Database settings.
//!
//! The connection string comes from `PG_HOST`, which load-test environments
//! already export for other tooling. Both URL (`postgres://…`) and
//! key/value (`host=… user=…`) forms are accepted.

use config::{Config, Environment};
use serde::{Deserialize, Serialize};

use crate::error::SqlError;

/// Environment prefix: `PG_HOST` maps to [`SqlConfig::host`].
pub const ENV_PREFIX: &str = "PG";

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct SqlConfig {
    /// Connection string of the store under test.
    #[serde(default)]
    pub host: Option<String>,
}

impl SqlConfig {
    #[must_use]
    pub fn with_connection_string(connection_string: impl Into<String>) -> Self {
        Self {
            host: Some(connection_string.into()),
        }
    }

    /// Load from `PG_*` environment variables.
    ///
    /// # Errors
    ///
    /// Returns [`SqlError::Config`] if the environment cannot be read.
    pub fn from_env() -> Result<Self, SqlError> {
        Self::from_env_with_prefix(ENV_PREFIX)
    }

    /// Same as [`from_env`](Self::from_env) with a custom prefix.
    ///
    /// # Errors
    ///
    /// Returns [`SqlError::Config`] if the environment cannot be read.
    pub fn from_env_with_prefix(prefix: &str) -> Result<Self, SqlError> {
        let config = Config::builder()
            .add_source(Environment::with_prefix(prefix))
            .build()?
            .try_deserialize()?;
        Ok(config)
    }

    /// The configured connection string.
    ///
    /// # Errors
    ///
    /// Returns [`SqlError::NotConfigured`] if it is missing or blank.
    pub fn connection_string(&self) -> Result<&str, SqlError> {
        self.host
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .ok_or(SqlError::NotConfigured)
    }
}
