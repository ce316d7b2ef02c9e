//! AWS CloudWatch Logs implementation of [`LogStore`].
//!
//! Each query loads the AWS configuration (default credential chain, shared
//! config files honored), builds a fresh client, issues one
//! `FilterLogEvents` call and tears everything down. Nothing is pooled
//! between calls.
//!
//! The query runs on a private current-thread Tokio runtime, so
//! [`CloudWatchLogStore::filter_log_events`] must not be called from
//! inside another async runtime.

use std::time::Duration;

use aws_config::{BehaviorVersion, Region};
use aws_sdk_cloudwatchlogs::error::DisplayErrorContext;
use aws_sdk_cloudwatchlogs::Client;

use crate::config::OtpConfig;
use crate::error::OtpError;
use crate::query::{LogQuery, RawLogEvent};
use crate::store::LogStore;

/// CloudWatch Logs client bounded by a per-query timeout.
#[derive(Debug, Clone)]
pub struct CloudWatchLogStore {
    region: String,
    timeout: Duration,
}

impl CloudWatchLogStore {
    #[must_use]
    pub fn new(region: impl Into<String>, timeout: Duration) -> Self {
        Self {
            region: region.into(),
            timeout,
        }
    }

    /// Store for the region and timeout in `config`.
    #[must_use]
    pub fn from_config(config: &OtpConfig) -> Self {
        Self::new(config.region.clone(), config.query_timeout())
    }

    #[must_use]
    pub fn region(&self) -> &str {
        &self.region
    }

    #[must_use]
    pub const fn timeout(&self) -> Duration {
        self.timeout
    }

    async fn query(&self, query: &LogQuery) -> Result<Vec<RawLogEvent>, OtpError> {
        let sdk_config = aws_config::defaults(BehaviorVersion::latest())
            .region(Region::new(self.region.clone()))
            .load()
            .await;
        let client = Client::new(&sdk_config);

        let output = client
            .filter_log_events()
            .log_group_name(query.log_group.as_str())
            .log_stream_name_prefix(query.stream_prefix.as_str())
            .start_time(query.window.start_millis())
            .end_time(query.window.end_millis())
            .send()
            .await
            .map_err(|e| OtpError::Query(DisplayErrorContext(&e).to_string()))?;

        Ok(output
            .events
            .unwrap_or_default()
            .into_iter()
            .map(|event| RawLogEvent::new(event.message.unwrap_or_default()))
            .collect())
    }
}

impl LogStore for CloudWatchLogStore {
    fn filter_log_events(&self, query: &LogQuery) -> Result<Vec<RawLogEvent>, OtpError> {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .map_err(|e| OtpError::Query(format!("failed to start query runtime: {e}")))?;

        tracing::debug!(
            log_group = %query.log_group,
            stream_prefix = %query.stream_prefix,
            start = query.window.start_millis(),
            end = query.window.end_millis(),
            "querying CloudWatch Logs"
        );

        let result = runtime.block_on(async {
            tokio::time::timeout(self.timeout, self.query(query))
                .await
                .map_err(|_| OtpError::Timeout(self.timeout))?
        });

        // Abandoned resolver or credential lookups must not extend the bound.
        runtime.shutdown_background();
        result
    }
}
