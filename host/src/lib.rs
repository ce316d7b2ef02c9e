//! `deuna-loadkit` — test-data helpers for Deuna load-testing scripts.
//!
//! [`Deuna`] bundles every helper behind plain methods that return strings
//! or booleans, which is what script engines can consume. Typed errors from
//! the underlying crates are logged through `tracing` and replaced by the
//! sentinel values scripts already check for.
//!
//! ```no_run
//! use deuna_loadkit::{init_logging, Deuna, LoggingConfig};
//!
//! # fn main() -> Result<(), deuna_loadkit::HostError> {
//! init_logging(&LoggingConfig::from_env()?)?;
//! let deuna = Deuna::from_env()?;
//! let cedula = deuna.generate_identifier();
//! let otp = deuna.get_otp("0991234567");
//! # let _ = (cedula, otp);
//! # Ok(())
//! # }
//! ```

#![cfg_attr(test, allow(clippy::unwrap_used, clippy::arithmetic_side_effects))]

pub mod error;
pub mod logging;

use deuna_fixtures::{identity, CharsetConfig};
use deuna_otp::{CloudWatchLogStore, LogStore, OtpConfig, OtpRetriever};
use deuna_sql::{SqlConfig, SqlExecutor, SqlParam};
use tracing::warn;

pub use deuna_fixtures::ChecksummedIdentifier;
pub use error::HostError;
pub use logging::{init_logging, LogFormat, LoggingConfig};

/// Shortest password [`Deuna::password`] hands out; shorter requests are
/// raised to it.
pub const MIN_SCRIPT_PASSWORD_LENGTH: usize = 5;

/// Entry point handed to load-test scripts.
///
/// Stateless apart from configuration; one instance can be shared by every
/// virtual user.
#[derive(Debug, Clone)]
pub struct Deuna<S = CloudWatchLogStore> {
    otp: OtpRetriever<S>,
    sql: SqlExecutor,
}

impl Deuna<CloudWatchLogStore> {
    /// Configure from the environment (`DEUNA_OTP_*`, `PG_HOST`) with the
    /// CloudWatch Logs store.
    ///
    /// # Errors
    ///
    /// Returns [`HostError`] if either configuration cannot be loaded.
    pub fn from_env() -> Result<Self, HostError> {
        let otp_config = OtpConfig::from_env()?;
        let sql_config = SqlConfig::from_env()?;
        let store = CloudWatchLogStore::from_config(&otp_config);
        Ok(Self::new(store, otp_config, sql_config))
    }
}

#[allow(clippy::unused_self)]
impl<S: LogStore> Deuna<S> {
    pub const fn new(store: S, otp_config: OtpConfig, sql_config: SqlConfig) -> Self {
        Self {
            otp: OtpRetriever::new(store, otp_config),
            sql: SqlExecutor::new(sql_config),
        }
    }

    #[must_use]
    pub const fn otp_retriever(&self) -> &OtpRetriever<S> {
        &self.otp
    }

    #[must_use]
    pub const fn sql_executor(&self) -> &SqlExecutor {
        &self.sql
    }

    /// RSA-OAEP (SHA-1) encrypt `message` under a base64 DER public key.
    /// Returns `""` if the key is unusable or the message too long.
    #[must_use]
    pub fn encrypt(&self, message: &str, public_key: &str) -> String {
        deuna_fixtures::encrypt_oaep_sha1(message, public_key).unwrap_or_else(|e| {
            warn!(error = %e, "encryption failed");
            String::new()
        })
    }

    #[must_use]
    pub fn first_name(&self) -> String {
        identity::first_name()
    }

    #[must_use]
    pub fn last_name(&self) -> String {
        identity::last_name()
    }

    #[must_use]
    pub fn username(&self) -> String {
        identity::username()
    }

    /// Alphanumeric password of `length` characters.
    ///
    /// Lengths below [`MIN_SCRIPT_PASSWORD_LENGTH`] are raised to it. Lengths
    /// above [`deuna_fixtures::MAX_PASSWORD_LENGTH`] yield `""`.
    #[must_use]
    pub fn password(&self, length: usize) -> String {
        let length = length.max(MIN_SCRIPT_PASSWORD_LENGTH);
        deuna_fixtures::generate_password(length, &CharsetConfig::alphanumeric()).unwrap_or_else(
            |e| {
                warn!(error = %e, length, "password generation failed");
                String::new()
            },
        )
    }

    #[must_use]
    pub fn city(&self) -> String {
        identity::city()
    }

    #[must_use]
    pub fn street(&self) -> String {
        identity::street()
    }

    /// Fresh 10-digit checksummed identifier, or `""` if the OS random
    /// source fails.
    #[must_use]
    pub fn generate_identifier(&self) -> String {
        match deuna_fixtures::generate_identifier() {
            Ok(id) => id.into_string(),
            Err(e) => {
                warn!(error = %e, "identifier generation failed");
                String::new()
            }
        }
    }

    /// Latest OTP sent to `phone_number`, or one of the sentinels
    /// `"123456"`, `""`, `"0"`.
    #[must_use]
    pub fn get_otp(&self, phone_number: &str) -> String {
        self.otp.fetch_otp(phone_number)
    }

    /// Run a setup or cleanup statement. `true` on success.
    #[must_use]
    pub fn execute_statement(&self, statement: &str, args: &[serde_json::Value]) -> bool {
        let params: Vec<SqlParam> = args.iter().cloned().map(SqlParam::from).collect();
        self.sql.execute_status(statement, &params)
    }
}
