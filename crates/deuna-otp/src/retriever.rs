//! OTP retrieval: query, filter, decode.
//!
//! [`OtpRetriever::lookup`] returns a tagged result so callers can tell a
//! missing OTP from a broken query. [`OtpRetriever::fetch_otp`] keeps the
//! string contract load-test scripts rely on:
//!
//! | outcome                         | string        |
//! |---------------------------------|---------------|
//! | OTP found                       | the code      |
//! | no matching log line            | `"123456"`    |
//! | query failed or timed out       | `""`          |
//! | matching line failed to decode  | `"0"`         |
//!
//! Every non-found outcome is also logged with its failure kind.

use chrono::{DateTime, Utc};
use tracing::{debug, info, warn};

use crate::config::OtpConfig;
use crate::envelope::OuterEnvelope;
use crate::error::OtpError;
use crate::query::{LogQuery, RawLogEvent};
use crate::store::LogStore;

/// Stand-in OTP returned when no log line mentions the phone number.
///
/// Environments that do not deliver OTPs through the log store accept it.
/// It is a sentinel, never a real code.
pub const NO_MATCH_SENTINEL: &str = "123456";

/// Successful outcome of a lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OtpLookup {
    /// The OTP carried by the most recent matching log line.
    Found(i64),
    /// No log line in the window mentions the phone number.
    NoMatch,
}

impl OtpLookup {
    /// Render as the legacy string: the code in base 10, or
    /// [`NO_MATCH_SENTINEL`].
    #[must_use]
    pub fn to_legacy_string(self) -> String {
        match self {
            Self::Found(otp) => otp.to_string(),
            Self::NoMatch => NO_MATCH_SENTINEL.to_owned(),
        }
    }
}

/// The most recent event (last in store order) whose raw message contains
/// `phone_number` as a substring.
#[must_use]
pub fn select_latest<'a>(events: &'a [RawLogEvent], phone_number: &str) -> Option<&'a RawLogEvent> {
    events
        .iter()
        .rev()
        .find(|event| event.message.contains(phone_number))
}

/// Retrieves OTPs delivered to simulated users from a [`LogStore`].
///
/// Holds no mutable state; one retriever can serve any number of
/// concurrent callers.
#[derive(Debug, Clone)]
pub struct OtpRetriever<S> {
    store: S,
    config: OtpConfig,
}

impl<S: LogStore> OtpRetriever<S> {
    pub const fn new(store: S, config: OtpConfig) -> Self {
        Self { store, config }
    }

    #[must_use]
    pub const fn config(&self) -> &OtpConfig {
        &self.config
    }

    #[must_use]
    pub const fn store(&self) -> &S {
        &self.store
    }

    /// Look up the latest OTP delivered to `phone_number` within the
    /// trailing window ending now.
    ///
    /// # Errors
    ///
    /// - [`OtpError::Query`] / [`OtpError::Timeout`] if the store fails.
    /// - [`OtpError::EnvelopeDecode`] if the matching line is not an envelope.
    /// - [`OtpError::TrackingDecode`] if its `trackingId` is not a tracking record.
    pub fn lookup(&self, phone_number: &str) -> Result<OtpLookup, OtpError> {
        self.lookup_at(phone_number, Utc::now())
    }

    /// [`lookup`](Self::lookup) with an explicit clock.
    ///
    /// # Errors
    ///
    /// Same as [`lookup`](Self::lookup).
    pub fn lookup_at(&self, phone_number: &str, now: DateTime<Utc>) -> Result<OtpLookup, OtpError> {
        let query = LogQuery::trailing(&self.config, now);
        let events = self.store.filter_log_events(&query)?;
        debug!(events = events.len(), "log query returned");

        let Some(latest) = select_latest(&events, phone_number) else {
            return Ok(OtpLookup::NoMatch);
        };

        let envelope = OuterEnvelope::decode(&latest.message)?;
        let record = envelope.tracking_record()?;
        Ok(OtpLookup::Found(record.dynamic_data.otp))
    }

    /// Fetch the OTP for `phone_number` as a string, mapping every failure
    /// to its sentinel. See the module docs for the mapping.
    #[must_use]
    pub fn fetch_otp(&self, phone_number: &str) -> String {
        self.fetch_otp_at(phone_number, Utc::now())
    }

    /// [`fetch_otp`](Self::fetch_otp) with an explicit clock.
    #[must_use]
    pub fn fetch_otp_at(&self, phone_number: &str, now: DateTime<Utc>) -> String {
        match self.lookup_at(phone_number, now) {
            Ok(OtpLookup::Found(otp)) => otp.to_string(),
            Ok(OtpLookup::NoMatch) => {
                info!(
                    phone = phone_number,
                    sentinel = NO_MATCH_SENTINEL,
                    "no OTP log line in window"
                );
                NO_MATCH_SENTINEL.to_owned()
            }
            Err(err) => {
                warn!(
                    phone = phone_number,
                    kind = err.kind(),
                    sentinel = err.sentinel(),
                    error = %err,
                    "OTP lookup failed"
                );
                err.sentinel().to_owned()
            }
        }
    }
}
