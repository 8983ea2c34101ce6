use crate::record::ParseError;
use thiserror::Error;

/// A rejected input line.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("line {line}: {source}")]
pub struct LineError {
    /// 1-based position in the batch.
    pub line: usize,
    pub text: String,
    #[source]
    pub source: ParseError,
}

#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("batch aborted at line {line}: {source}")]
    Parse {
        line: usize,
        #[source]
        source: ParseError,
    },
}
