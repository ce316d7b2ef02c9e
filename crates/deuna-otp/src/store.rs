//! Log store seam.
//!
//! [`LogStore`] is the only I/O boundary of the retrieval pipeline. The
//! production implementation is [`crate::cloudwatch::CloudWatchLogStore`];
//! tests substitute in-memory stores.

use crate::error::OtpError;
use crate::query::{LogQuery, RawLogEvent};

/// A source of log events.
#[cfg_attr(test, mockall::automock)]
pub trait LogStore {
    /// Run one bounded query and return the matching events in store order
    /// (chronological ascending). No pagination beyond the first page.
    ///
    /// # Errors
    ///
    /// Returns [`OtpError::Query`] or [`OtpError::Timeout`] when the store
    /// cannot answer.
    fn filter_log_events(&self, query: &LogQuery) -> Result<Vec<RawLogEvent>, OtpError>;
}

impl<T: LogStore + ?Sized> LogStore for &T {
    fn filter_log_events(&self, query: &LogQuery) -> Result<Vec<RawLogEvent>, OtpError> {
        (**self).filter_log_events(query)
    }
}

impl<T: LogStore + ?Sized> LogStore for Box<T> {
    fn filter_log_events(&self, query: &LogQuery) -> Result<Vec<RawLogEvent>, OtpError> {
        (**self).filter_log_events(query)
    }
}
