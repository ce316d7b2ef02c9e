//! Statement execution error types for `deuna-sql`.

use thiserror::Error;

/// Errors produced while running a statement.
#[derive(Debug, Error)]
pub enum SqlError {
    /// No connection string was provided (`PG_HOST` unset or empty).
    #[error("no connection string configured (set PG_HOST)")]
    NotConfigured,

    /// Configuration could not be loaded.
    #[error("configuration error: {0}")]
    Config(String),

    /// The database could not be reached or rejected the credentials.
    #[error("unable to connect to database: {0}")]
    Connect(String),

    /// The statement failed (syntax, constraint violation, parameter types).
    #[error("statement failed: {0}")]
    Execute(String),
}

impl From<config::ConfigError> for SqlError {
    fn from(err: config::ConfigError) -> Self {
        Self::Config(err.to_string())
    }
}
