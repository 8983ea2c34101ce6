use crate::record::LogRecord;
use crate::sessionize::{DEFAULT_THRESHOLD_SECONDS, SessionAnnotatedRecord};
use chrono::{DateTime, Utc};
use std::collections::BTreeMap;
use std::thread;
use std::time::Duration;

/// Assigns session numbers from inter-request gaps.
///
/// The threshold is inclusive: a gap of exactly `threshold` stays in the
/// current session. Gaps are compared in whole microseconds, which is the
/// resolution of the log format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sessionizer {
    threshold_micros: i64,
    workers: usize,
}

impl Default for Sessionizer {
    fn default() -> Self {
        Self::new(Duration::from_secs(DEFAULT_THRESHOLD_SECONDS))
    }
}

impl Sessionizer {
    pub fn new(threshold: Duration) -> Self {
        Self {
            threshold_micros: i64::try_from(threshold.as_micros()).unwrap_or(i64::MAX),
            workers: 1,
        }
    }

    /// Spread client partitions over up to `workers` threads.
    pub fn with_workers(mut self, workers: usize) -> Self {
        self.workers = workers.max(1);
        self
    }

    pub fn threshold(&self) -> Duration {
        Duration::from_micros(self.threshold_micros.max(0) as u64)
    }

    /// Annotate every record.
    ///
    /// Output is grouped by client IP (ascending) and ordered by timestamp
    /// within a client, independent of the worker count.
    pub fn sessionize(&self, records: Vec<LogRecord>) -> Vec<SessionAnnotatedRecord> {
        let total = records.len();
        let partitions = partition_by_client(records);

        tracing::debug!(
            records = total,
            clients = partitions.len(),
            workers = self.workers,
            "partitioned records by client"
        );

        if self.workers <= 1 || partitions.len() < 2 {
            return partitions
                .into_iter()
                .flat_map(|partition| self.annotate_partition(partition))
                .collect();
        }

        self.annotate_parallel(partitions)
    }

    /// Sequential scan over one client's records.
    fn annotate_partition(&self, mut records: Vec<LogRecord>) -> Vec<SessionAnnotatedRecord> {
        // Stable: equal timestamps keep arrival order.
        records.sort_by_key(|r| r.timestamp);

        let mut prev_timestamp: Option<DateTime<Utc>> = None;
        let mut session_seq = 0;

        records
            .into_iter()
            .map(|record| {
                let time_interval = prev_timestamp.map(|prev| record.timestamp - prev);
                let is_session_start = match time_interval {
                    None => true,
                    Some(gap) => {
                        gap.num_microseconds().unwrap_or(i64::MAX) > self.threshold_micros
                    }
                };

                if is_session_start {
                    session_seq += 1;
                }

                let annotated = SessionAnnotatedRecord {
                    prev_timestamp,
                    time_interval,
                    is_session_start,
                    session_seq,
                    record,
                };
                prev_timestamp = Some(annotated.record.timestamp);
                annotated
            })
            .collect()
    }

    fn annotate_parallel(&self, partitions: Vec<Vec<LogRecord>>) -> Vec<SessionAnnotatedRecord> {
        let chunk_size = partitions.len().div_ceil(self.workers);

        let mut chunks: Vec<Vec<Vec<LogRecord>>> = Vec::with_capacity(self.workers);
        let mut remaining = partitions.into_iter().peekable();
        while remaining.peek().is_some() {
            chunks.push(remaining.by_ref().take(chunk_size).collect());
        }

        let sessionizer = *self;
        thread::scope(|scope| {
            let handles: Vec<_> = chunks
                .into_iter()
                .map(|chunk| {
                    scope.spawn(move || {
                        chunk
                            .into_iter()
                            .flat_map(|partition| sessionizer.annotate_partition(partition))
                            .collect::<Vec<_>>()
                    })
                })
                .collect();

            // Joined in spawn order so client ordering matches the sequential path.
            handles
                .into_iter()
                .flat_map(|handle| {
                    handle
                        .join()
                        .unwrap_or_else(|panic| std::panic::resume_unwind(panic))
                })
                .collect()
        })
    }
}

/// Group by client IP, keeping arrival order inside each group.
fn partition_by_client(records: Vec<LogRecord>) -> Vec<Vec<LogRecord>> {
    let mut partitions: BTreeMap<String, Vec<LogRecord>> = BTreeMap::new();
    for record in records {
        partitions
            .entry(record.client_ip.clone())
            .or_default()
            .push(record);
    }
    partitions.into_values().collect()
}
