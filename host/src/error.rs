//! Host-level error types.

use thiserror::Error;

/// Errors raised while assembling a [`Deuna`](crate::Deuna) or installing
/// the log subscriber. Operations themselves never fail; they return
/// sentinel strings or `false`.
#[derive(Debug, Error)]
pub enum HostError {
    #[error(transparent)]
    Otp(#[from] deuna_otp::OtpError),

    #[error(transparent)]
    Sql(#[from] deuna_sql::SqlError),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("invalid log filter: {0}")]
    LogFilter(String),
}

impl From<config::ConfigError> for HostError {
    fn from(err: config::ConfigError) -> Self {
        Self::Config(err.to_string())
    }
}
