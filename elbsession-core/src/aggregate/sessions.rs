use crate::aggregate::{SessionSummary, UniqueUrlCount};
use crate::sessionize::{SessionAnnotatedRecord, micros_to_seconds};
use ahash::AHashSet;
use chrono::{DateTime, Utc};
use std::collections::BTreeMap;

struct SessionAccumulator<'a> {
    record_count: usize,
    duration_micros: i64,
    started_at: DateTime<Utc>,
    ended_at: DateTime<Utc>,
    urls: AHashSet<&'a str>,
}

impl<'a> SessionAccumulator<'a> {
    fn new(record: &'a SessionAnnotatedRecord) -> Self {
        Self {
            record_count: 0,
            duration_micros: 0,
            started_at: record.timestamp(),
            ended_at: record.timestamp(),
            urls: AHashSet::new(),
        }
    }

    fn push(&mut self, record: &'a SessionAnnotatedRecord) {
        self.record_count += 1;
        self.duration_micros = self
            .duration_micros
            .saturating_add(record.interval_micros());
        self.started_at = self.started_at.min(record.timestamp());
        self.ended_at = self.ended_at.max(record.timestamp());
        self.urls.insert(record.record.request_url());
    }
}

/// Group by (client_ip, session_seq), ordered by that key.
fn group_sessions(
    records: &[SessionAnnotatedRecord],
) -> BTreeMap<(&str, u32), SessionAccumulator<'_>> {
    let mut groups: BTreeMap<(&str, u32), SessionAccumulator<'_>> = BTreeMap::new();
    for record in records {
        groups
            .entry((record.client_ip(), record.session_seq))
            .or_insert_with(|| SessionAccumulator::new(record))
            .push(record);
    }
    groups
}

/// Per-session totals. Only a client's first request carries no interval
/// and contributes 0.
pub fn session_durations(records: &[SessionAnnotatedRecord]) -> Vec<SessionSummary> {
    group_sessions(records)
        .into_iter()
        .map(|((client_ip, session_seq), acc)| SessionSummary {
            client_ip: client_ip.to_string(),
            session_seq,
            record_count: acc.record_count,
            started_at: acc.started_at,
            ended_at: acc.ended_at,
            total_duration_seconds: micros_to_seconds(acc.duration_micros),
            unique_url_count: acc.urls.len(),
            duration_micros: acc.duration_micros,
        })
        .collect()
}

/// Mean session length over sessions with at least two requests.
///
/// `None` when no session qualifies.
pub fn average_session_duration(records: &[SessionAnnotatedRecord]) -> Option<f64> {
    average_of(&session_durations(records))
}

/// Same as [`average_session_duration`], over summaries already built.
pub(crate) fn average_of(sessions: &[SessionSummary]) -> Option<f64> {
    let (count, total_micros) = sessions
        .iter()
        .filter(|session| session.has_measurable_duration())
        .fold((0usize, 0i128), |(count, total), session| {
            (count + 1, total + i128::from(session.duration_micros))
        });

    mean_seconds(count, total_micros)
}

/// Distinct request URLs per session, single-request sessions included.
pub fn unique_url_counts(records: &[SessionAnnotatedRecord]) -> Vec<UniqueUrlCount> {
    group_sessions(records)
        .into_iter()
        .map(|((client_ip, session_seq), acc)| UniqueUrlCount {
            client_ip: client_ip.to_string(),
            session_seq,
            unique_url_count: acc.urls.len(),
        })
        .collect()
}

fn mean_seconds(count: usize, total_micros: i128) -> Option<f64> {
    if count == 0 {
        return None;
    }
    Some(total_micros as f64 / count as f64 / 1_000_000.0)
}
