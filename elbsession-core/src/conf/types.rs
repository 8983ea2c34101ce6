use crate::conf::ConfigError;
use crate::pipeline::{ParseErrorPolicy, PipelineConfig};
use crate::sessionize::DEFAULT_THRESHOLD_SECONDS;
use serde::{Deserialize, Serialize};
use std::time::Duration;

pub const DEFAULT_TOP: usize = 20;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ElbSessionConfig {
    pub sessionize: SessionizeConfig,
    pub ingest: IngestConfig,
    pub report: ReportConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SessionizeConfig {
    pub threshold_seconds: u64,
}

impl Default for SessionizeConfig {
    fn default() -> Self {
        Self {
            threshold_seconds: DEFAULT_THRESHOLD_SECONDS,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct IngestConfig {
    pub on_parse_error: ParseErrorPolicy,
    pub workers: usize,
}

impl Default for IngestConfig {
    fn default() -> Self {
        Self {
            on_parse_error: ParseErrorPolicy::Skip,
            workers: 1,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ReportConfig {
    /// Rows per table in pretty output.
    pub top: usize,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self { top: DEFAULT_TOP }
    }
}

impl ElbSessionConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.sessionize.threshold_seconds == 0 {
            return Err(ConfigError::InvalidThreshold);
        }
        if self.ingest.workers == 0 {
            return Err(ConfigError::InvalidWorkers {
                workers: self.ingest.workers,
            });
        }
        if self.report.top == 0 {
            return Err(ConfigError::InvalidTop {
                top: self.report.top,
            });
        }
        Ok(())
    }

    pub fn pipeline_config(&self) -> PipelineConfig {
        PipelineConfig {
            threshold: Duration::from_secs(self.sessionize.threshold_seconds),
            workers: self.ingest.workers,
            on_parse_error: self.ingest.on_parse_error,
        }
    }
}
