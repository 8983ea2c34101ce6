use crate::record::LogRecord;
use chrono::{DateTime, TimeDelta, Utc};

/// A [`LogRecord`] tagged with its place in the client's session timeline.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionAnnotatedRecord {
    pub record: LogRecord,
    /// Previous request of the same client; `None` for its first request.
    pub prev_timestamp: Option<DateTime<Utc>>,
    /// `timestamp - prev_timestamp`; `None` exactly when `prev_timestamp` is.
    pub time_interval: Option<TimeDelta>,
    pub is_session_start: bool,
    /// 1-based, increasing per client.
    pub session_seq: u32,
}

impl SessionAnnotatedRecord {
    pub fn client_ip(&self) -> &str {
        &self.record.client_ip
    }

    pub fn timestamp(&self) -> DateTime<Utc> {
        self.record.timestamp
    }

    pub fn time_interval_seconds(&self) -> Option<f64> {
        self.time_interval
            .map(|gap| micros_to_seconds(gap.num_microseconds().unwrap_or(i64::MAX)))
    }

    /// Contribution to duration sums: the gap since the previous request,
    /// 0 for a client's first request.
    ///
    /// A later session start still carries the gap that opened it.
    pub(crate) fn interval_micros(&self) -> i64 {
        self.time_interval
            .map(|gap| gap.num_microseconds().unwrap_or(i64::MAX))
            .unwrap_or(0)
    }

    /// Drop the annotation and hand back the parsed record.
    pub fn into_record(self) -> LogRecord {
        self.record
    }
}

pub(crate) fn micros_to_seconds(micros: i64) -> f64 {
    micros as f64 / 1_000_000.0
}
