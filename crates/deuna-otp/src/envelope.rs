//! The two JSON layers an OTP is nested inside.
//!
//! The OTP service logs one JSON object per line (the outer envelope). Its
//! `trackingId` field is a *string* holding a second JSON document (the
//! tracking record) whose `dynamicData.otp` carries the code. The inner
//! document is never a nested object; a producer that inlines it breaks
//! decoding on purpose.
//!
//! Both layers decode leniently, the way the producer's own JSON library
//! reads them back:
//!
//! - missing fields and explicit `null`s decode to their zero values;
//! - unknown fields are ignored;
//! - a repeated key keeps its last value.
//!
//! Only malformed JSON or a non-null value of the wrong type fails.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};

use crate::error::OtpError;

/// Outer log-line context.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct OuterEnvelope {
    #[serde(deserialize_with = "null_as_default")]
    pub level: String,
    #[serde(deserialize_with = "null_as_default")]
    pub timestamp: String,
    #[serde(deserialize_with = "null_as_default")]
    pub pid: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub hostname: String,
    #[serde(deserialize_with = "null_as_default")]
    pub message: String,
    /// JSON-encoded [`TrackingRecord`].
    #[serde(deserialize_with = "null_as_default")]
    pub tracking_id: String,
}

/// Inner tracking payload decoded from [`OuterEnvelope::tracking_id`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TrackingRecord {
    #[serde(deserialize_with = "null_as_default")]
    pub template_key: String,
    #[serde(deserialize_with = "null_as_default")]
    pub dynamic_data: DynamicData,
    #[serde(deserialize_with = "null_as_default")]
    pub metadata: Metadata,
    /// Correlation id of the notification (plain string, not JSON).
    #[serde(deserialize_with = "null_as_default")]
    pub tracking_id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub action_event: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DynamicData {
    #[serde(deserialize_with = "null_as_default")]
    pub request_id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub otp: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Metadata {
    #[serde(deserialize_with = "null_as_default")]
    pub push_token: String,
    #[serde(deserialize_with = "null_as_default")]
    pub phone_number: String,
    #[serde(deserialize_with = "null_as_default")]
    pub email: Vec<String>,
}

/// A present `null` decodes like an absent field.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Parse one JSON document into `T`.
///
/// Going through [`serde_json::Value`] first folds repeated keys (last one
/// wins) before the typed pass, which would otherwise reject them as
/// duplicate fields. A top-level `null` yields `T::default()`.
fn decode_lenient<T>(raw: &str) -> Result<T, serde_json::Error>
where
    T: Default + DeserializeOwned,
{
    let value: serde_json::Value = serde_json::from_str(raw)?;
    null_as_default(value)
}

impl OuterEnvelope {
    /// Decode one raw log line.
    ///
    /// # Errors
    ///
    /// Returns [`OtpError::EnvelopeDecode`] if the line is not JSON or a
    /// field holds a non-null value of the wrong type.
    pub fn decode(raw: &str) -> Result<Self, OtpError> {
        decode_lenient(raw).map_err(|e| OtpError::EnvelopeDecode(e.to_string()))
    }

    /// Decode the tracking record carried in `trackingId`.
    ///
    /// # Errors
    ///
    /// Returns [`OtpError::TrackingDecode`] if `trackingId` is empty or is
    /// not a JSON tracking record.
    pub fn tracking_record(&self) -> Result<TrackingRecord, OtpError> {
        decode_lenient(&self.tracking_id).map_err(|e| OtpError::TrackingDecode(e.to_string()))
    }
}
