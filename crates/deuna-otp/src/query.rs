//! Log query parameters and raw results.

use std::time::Duration;

use chrono::{DateTime, TimeDelta, Utc};
use serde::{Deserialize, Serialize};

use crate::config::OtpConfig;

/// Closed time interval `[start, end]` covered by one log query.
///
/// Recomputed for every lookup; never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LogQueryWindow {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl LogQueryWindow {
    /// The window of length `span` ending at `end`.
    ///
    /// A span too large to represent starts the window at the earliest
    /// representable instant.
    #[must_use]
    pub fn trailing(end: DateTime<Utc>, span: Duration) -> Self {
        let start = TimeDelta::from_std(span)
            .ok()
            .and_then(|span| end.checked_sub_signed(span))
            .unwrap_or(DateTime::<Utc>::MIN_UTC);
        Self { start, end }
    }

    /// Window start in epoch milliseconds, truncated to the whole second.
    #[must_use]
    pub fn start_millis(&self) -> i64 {
        self.start.timestamp().saturating_mul(1000)
    }

    /// Window end in epoch milliseconds, truncated to the whole second.
    #[must_use]
    pub fn end_millis(&self) -> i64 {
        self.end.timestamp().saturating_mul(1000)
    }
}

/// One bounded query against the log store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogQuery {
    pub log_group: String,
    pub stream_prefix: String,
    pub window: LogQueryWindow,
}

impl LogQuery {
    /// Query for the configured log group and stream prefix over the
    /// trailing window ending at `now`.
    #[must_use]
    pub fn trailing(config: &OtpConfig, now: DateTime<Utc>) -> Self {
        Self {
            log_group: config.log_group.clone(),
            stream_prefix: config.stream_prefix.clone(),
            window: LogQueryWindow::trailing(now, config.window()),
        }
    }
}

/// One log line as returned by the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawLogEvent {
    pub message: String,
}

impl RawLogEvent {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn trailing_window_spans_five_minutes() {
        let now = Utc.with_ymd_and_hms(2026, 10, 19, 12, 0, 0).unwrap();
        let window = LogQueryWindow::trailing(now, Duration::from_secs(300));
        assert_eq!(window.end, now);
        assert_eq!(window.start, Utc.with_ymd_and_hms(2026, 10, 19, 11, 55, 0).unwrap());
        assert_eq!(window.end_millis() - window.start_millis(), 300_000);
    }

    #[test]
    fn millis_are_truncated_to_whole_seconds() {
        let now = Utc.timestamp_millis_opt(1_700_000_000_789).unwrap();
        let window = LogQueryWindow::trailing(now, Duration::from_secs(60));
        assert_eq!(window.end_millis(), 1_700_000_000_000);
        assert_eq!(window.start_millis(), 1_699_999_940_000);
    }

    #[test]
    fn oversized_span_clamps_to_min() {
        let now = Utc::now();
        let window = LogQueryWindow::trailing(now, Duration::MAX);
        assert_eq!(window.start, DateTime::<Utc>::MIN_UTC);
    }

    #[test]
    fn query_uses_configured_group_and_prefix() {
        let now = Utc.with_ymd_and_hms(2026, 1, 1, 0, 5, 0).unwrap();
        let query = LogQuery::trailing(&OtpConfig::default(), now);
        assert_eq!(query.log_group, "deuna-tl-otp-service-log-group");
        assert_eq!(query.stream_prefix, "deuna-tl-otp");
        assert_eq!(query.window.start, Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).unwrap());
    }
}
