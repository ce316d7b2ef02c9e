//! OTP retrieval settings.
//!
//! Defaults match the log producer of the OTP service. Every field can be
//! overridden from the environment with the `DEUNA_OTP_` prefix, e.g.
//! `DEUNA_OTP_QUERY_TIMEOUT_SECS=5`.

use std::time::Duration;

use config::{Config, Environment};
use serde::{Deserialize, Serialize};

use crate::error::OtpError;

/// Log group the OTP service writes to.
pub const LOG_GROUP_NAME: &str = "deuna-tl-otp-service-log-group";

/// Stream-name prefix of the OTP service log streams.
pub const LOG_STREAM_PREFIX: &str = "deuna-tl-otp";

/// AWS region hosting the log group.
pub const DEFAULT_REGION: &str = "us-east-1";

/// Environment prefix for [`OtpConfig::from_env`].
pub const ENV_PREFIX: &str = "DEUNA_OTP";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct OtpConfig {
    /// AWS region of the log store.
    #[serde(default = "default_region")]
    pub region: String,

    /// Log group to query.
    #[serde(default = "default_log_group")]
    pub log_group: String,

    /// Only streams whose name starts with this prefix are queried.
    #[serde(default = "default_stream_prefix")]
    pub stream_prefix: String,

    /// Length of the trailing query window in seconds.
    #[serde(default = "default_window_secs")]
    pub window_secs: u64,

    /// Upper bound on a single log query in seconds.
    #[serde(default = "default_query_timeout_secs")]
    pub query_timeout_secs: u64,
}

impl Default for OtpConfig {
    fn default() -> Self {
        Self {
            region: default_region(),
            log_group: default_log_group(),
            stream_prefix: default_stream_prefix(),
            window_secs: default_window_secs(),
            query_timeout_secs: default_query_timeout_secs(),
        }
    }
}

fn default_region() -> String {
    DEFAULT_REGION.into()
}
fn default_log_group() -> String {
    LOG_GROUP_NAME.into()
}
fn default_stream_prefix() -> String {
    LOG_STREAM_PREFIX.into()
}
const fn default_window_secs() -> u64 {
    300
}
const fn default_query_timeout_secs() -> u64 {
    10
}

impl OtpConfig {
    /// Load from `DEUNA_OTP_*` environment variables, falling back to the
    /// defaults for anything unset.
    ///
    /// # Errors
    ///
    /// Returns [`OtpError::Config`] if a variable is set but malformed.
    pub fn from_env() -> Result<Self, OtpError> {
        Self::from_env_with_prefix(ENV_PREFIX)
    }

    /// Same as [`from_env`](Self::from_env) with a custom prefix.
    ///
    /// # Errors
    ///
    /// Returns [`OtpError::Config`] if a variable is set but malformed.
    pub fn from_env_with_prefix(prefix: &str) -> Result<Self, OtpError> {
        let config = Config::builder()
            .add_source(Environment::with_prefix(prefix).try_parsing(true))
            .build()?
            .try_deserialize()?;
        Ok(config)
    }

    /// Length of the trailing query window.
    #[must_use]
    pub const fn window(&self) -> Duration {
        Duration::from_secs(self.window_secs)
    }

    /// Upper bound on a single log query.
    #[must_use]
    pub const fn query_timeout(&self) -> Duration {
        Duration::from_secs(self.query_timeout_secs)
    }
}
