use chrono::{DateTime, Utc};
use serde::Serialize;

/// One (client, session) group.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SessionSummary {
    pub client_ip: String,
    pub session_seq: u32,
    pub record_count: usize,
    pub started_at: DateTime<Utc>,
    pub ended_at: DateTime<Utc>,
    /// Sum of the gaps that lead to each request of the session, including
    /// the idle gap that opened it. 0 for a client's first session when it
    /// has a single request.
    pub total_duration_seconds: f64,
    pub unique_url_count: usize,
    /// `total_duration_seconds` before conversion, for exact averaging.
    #[serde(skip)]
    pub(crate) duration_micros: i64,
}

impl SessionSummary {
    /// A session needs two requests before it has a measurable length.
    pub fn has_measurable_duration(&self) -> bool {
        self.record_count > 1
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UniqueUrlCount {
    pub client_ip: String,
    pub session_seq: u32,
    pub unique_url_count: usize,
}

impl From<&SessionSummary> for UniqueUrlCount {
    fn from(summary: &SessionSummary) -> Self {
        Self {
            client_ip: summary.client_ip.clone(),
            session_seq: summary.session_seq,
            unique_url_count: summary.unique_url_count,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClientEngagement {
    pub client_ip: String,
    pub total_duration_seconds: f64,
    pub session_count: u32,
    pub request_count: usize,
}
