//! `deuna-otp` — OTP retrieval for Deuna load tests.
//!
//! Simulated users receive their one-time passwords through the OTP
//! service, which logs every notification to CloudWatch Logs. This crate
//! queries the trailing window of that log group, picks the most recent
//! line mentioning a phone number, and unwraps the OTP from its two JSON
//! layers.

#![cfg_attr(test, allow(clippy::unwrap_used, clippy::arithmetic_side_effects))]

pub mod config;
pub mod error;

pub mod envelope;
pub mod query;

pub mod store;

pub mod cloudwatch;

pub mod retriever;

pub use cloudwatch::CloudWatchLogStore;
pub use config::{OtpConfig, LOG_GROUP_NAME, LOG_STREAM_PREFIX};
pub use envelope::{DynamicData, Metadata, OuterEnvelope, TrackingRecord};
pub use error::{OtpError, DECODE_FAILURE_SENTINEL, QUERY_FAILURE_SENTINEL};
pub use query::{LogQuery, LogQueryWindow, RawLogEvent};
pub use retriever::{select_latest, OtpLookup, OtpRetriever, NO_MATCH_SENTINEL};
pub use store::LogStore;
