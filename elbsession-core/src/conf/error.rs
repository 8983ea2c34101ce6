use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    ReadFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse HCL in {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: hcl::Error,
    },

    #[error("sessionize.threshold_seconds must be greater than zero")]
    InvalidThreshold,

    #[error("ingest.workers must be at least 1, got {workers}")]
    InvalidWorkers { workers: usize },

    #[error("report.top must be at least 1, got {top}")]
    InvalidTop { top: usize },
}

impl ConfigError {
    pub fn read_file(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::ReadFile {
            path: path.into(),
            source,
        }
    }

    pub fn parse(path: impl Into<PathBuf>, source: hcl::Error) -> Self {
        Self::Parse {
            path: path.into(),
            source,
        }
    }

    /// Example snippet for errors the user can fix by editing the file.
    pub fn hint(&self) -> Option<&'static str> {
        match self {
            Self::InvalidThreshold => Some(
                "The inactivity threshold is given in whole seconds.\n\
                 \n\
                 Example:\n\
                 \n\
                 sessionize = {\n  threshold_seconds = 900\n}",
            ),
            Self::InvalidWorkers { .. } => Some(
                "Use workers = 1 to parse and sessionize on the calling thread.",
            ),
            Self::InvalidTop { .. } => Some(
                "`top` limits the rows printed per table.\n\
                 \n\
                 Example:\n\
                 \n\
                 report = {\n  top = 20\n}",
            ),
            _ => None,
        }
    }
}
