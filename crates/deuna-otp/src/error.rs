//! OTP retrieval error types for `deuna-otp`.

use std::time::Duration;

use thiserror::Error;

/// Sentinel returned to legacy callers when the log query fails.
pub const QUERY_FAILURE_SENTINEL: &str = "";

/// Sentinel returned to legacy callers when a log line cannot be decoded.
pub const DECODE_FAILURE_SENTINEL: &str = "0";

/// Errors produced while retrieving an OTP.
#[derive(Debug, Error)]
pub enum OtpError {
    /// The log store was unreachable or rejected the request
    /// (connectivity, credentials, service error).
    #[error("log query failed: {0}")]
    Query(String),

    /// The log query did not complete within the configured bound.
    #[error("log query timed out after {0:?}")]
    Timeout(Duration),

    /// The matching log line is not a valid outer envelope.
    #[error("envelope decode failed: {0}")]
    EnvelopeDecode(String),

    /// The envelope's `trackingId` string is not a valid tracking record.
    #[error("tracking record decode failed: {0}")]
    TrackingDecode(String),

    /// Configuration could not be loaded.
    #[error("configuration error: {0}")]
    Config(String),
}

impl OtpError {
    /// Short machine-readable name of the failure kind, for log fields.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Query(_) => "query_failure",
            Self::Timeout(_) => "query_timeout",
            Self::EnvelopeDecode(_) => "envelope_decode_failure",
            Self::TrackingDecode(_) => "tracking_decode_failure",
            Self::Config(_) => "config_failure",
        }
    }

    /// The string legacy callers receive in place of an OTP for this
    /// failure: `""` when the store could not be queried, `"0"` when a
    /// matching line could not be decoded.
    #[must_use]
    pub const fn sentinel(&self) -> &'static str {
        match self {
            Self::Query(_) | Self::Timeout(_) | Self::Config(_) => QUERY_FAILURE_SENTINEL,
            Self::EnvelopeDecode(_) | Self::TrackingDecode(_) => DECODE_FAILURE_SENTINEL,
        }
    }
}

impl From<config::ConfigError> for OtpError {
    fn from(err: config::ConfigError) -> Self {
        Self::Config(err.to_string())
    }
}
