//! Batch pipeline: parse → sessionize → aggregate.
//!
//! The pipeline owns nothing but its configuration. Lines go in, a
//! [`PipelineReport`] comes out; reading files and printing results happen
//! elsewhere.

mod error;
mod ingest;
mod report;

pub use error::*;
pub use report::*;

use crate::aggregate::Aggregates;
use crate::sessionize::{DEFAULT_THRESHOLD_SECONDS, Sessionizer};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// What to do with a line that does not parse.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ParseErrorPolicy {
    /// Log it, keep it in the report, carry on.
    #[default]
    Skip,
    /// Fail the whole batch at the first bad line.
    Abort,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PipelineConfig {
    pub threshold: Duration,
    pub workers: usize,
    pub on_parse_error: ParseErrorPolicy,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            threshold: Duration::from_secs(DEFAULT_THRESHOLD_SECONDS),
            workers: 1,
            on_parse_error: ParseErrorPolicy::Skip,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct Pipeline {
    config: PipelineConfig,
}

impl Pipeline {
    pub fn new(config: PipelineConfig) -> Self {
        Self { config }
    }

    /// Run one batch. `lines` must be in arrival order; it decides which of
    /// two same-microsecond requests comes first.
    pub fn run<I, S>(&self, lines: I) -> Result<PipelineReport, PipelineError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str> + Sync,
    {
        let lines: Vec<S> = lines.into_iter().collect();
        let workers = self.config.workers.max(1);

        tracing::debug!(lines = lines.len(), workers, "parsing batch");

        let mut records = Vec::with_capacity(lines.len());
        let mut rejected = Vec::new();

        for result in ingest::parse_lines(&lines, workers) {
            match result {
                Ok(record) => records.push(record),
                Err(err) => match self.config.on_parse_error {
                    ParseErrorPolicy::Skip => {
                        tracing::warn!(line = err.line, error = %err.source, "skipping malformed line");
                        rejected.push(err);
                    }
                    ParseErrorPolicy::Abort => {
                        tracing::error!(line = err.line, error = %err.source, "aborting batch on malformed line");
                        return Err(PipelineError::Parse {
                            line: err.line,
                            source: err.source,
                        });
                    }
                },
            }
        }

        let parsed = records.len();
        let sessionized = Sessionizer::new(self.config.threshold)
            .with_workers(workers)
            .sessionize(records);

        tracing::debug!(records = sessionized.len(), "sessionized batch");

        let Aggregates {
            sessions,
            average_session_duration,
            unique_url_counts,
            most_engaged_clients,
        } = Aggregates::compute(&sessionized);

        let stats = PipelineStats {
            lines: lines.len(),
            parsed,
            rejected: rejected.len(),
            clients: most_engaged_clients.len(),
            sessions: sessions.len(),
        };

        tracing::info!(
            lines = stats.lines,
            parsed = stats.parsed,
            rejected = stats.rejected,
            clients = stats.clients,
            sessions = stats.sessions,
            "batch analyzed"
        );

        Ok(PipelineReport {
            sessionized,
            sessions,
            average_session_duration,
            unique_url_counts,
            most_engaged_clients,
            rejected,
            stats,
        })
    }
}
