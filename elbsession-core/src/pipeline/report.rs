use crate::aggregate::{ClientEngagement, SessionSummary, UniqueUrlCount};
use crate::pipeline::LineError;
use crate::record::TIMESTAMP_FORMAT;
use crate::sessionize::SessionAnnotatedRecord;
use serde::Serialize;

/// Everything one batch produced.
#[derive(Debug, Clone)]
pub struct PipelineReport {
    /// Ordered by client, then timestamp.
    pub sessionized: Vec<SessionAnnotatedRecord>,
    pub sessions: Vec<SessionSummary>,
    pub average_session_duration: Option<f64>,
    pub unique_url_counts: Vec<UniqueUrlCount>,
    pub most_engaged_clients: Vec<ClientEngagement>,
    /// Lines dropped under the skip policy, in input order.
    pub rejected: Vec<LineError>,
    pub stats: PipelineStats,
}

impl PipelineReport {
    pub fn sessionized_rows(&self) -> impl Iterator<Item = SessionizedRow<'_>> {
        self.sessionized.iter().map(SessionizedRow::from)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct PipelineStats {
    pub lines: usize,
    pub parsed: usize,
    pub rejected: usize,
    pub clients: usize,
    pub sessions: usize,
}

/// Flat, serializable view of a [`SessionAnnotatedRecord`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SessionizedRow<'a> {
    pub client_ip: &'a str,
    pub session_seq: u32,
    pub timestamp: String,
    pub prev_timestamp: Option<String>,
    pub time_interval_seconds: Option<f64>,
    pub is_session_start: bool,
    pub url: &'a str,
    pub user_agent: Option<&'a str>,
}

impl<'a> From<&'a SessionAnnotatedRecord> for SessionizedRow<'a> {
    fn from(annotated: &'a SessionAnnotatedRecord) -> Self {
        let record = &annotated.record;
        Self {
            client_ip: &record.client_ip,
            session_seq: annotated.session_seq,
            timestamp: record.timestamp.format(TIMESTAMP_FORMAT).to_string(),
            prev_timestamp: annotated
                .prev_timestamp
                .map(|ts| ts.format(TIMESTAMP_FORMAT).to_string()),
            time_interval_seconds: annotated.time_interval_seconds(),
            is_session_start: annotated.is_session_start,
            url: record.request_url(),
            user_agent: record.user_agent(),
        }
    }
}
