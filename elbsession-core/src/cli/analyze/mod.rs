//! `elbsession analyze`: read a log, run the pipeline, print the report.

mod render;
mod run;
#[cfg(test)]
mod tests;

pub use render::*;
pub use run::*;

use crate::logging::OutputFormat;
use crate::pipeline::ParseErrorPolicy;
use clap::Args;
use std::path::PathBuf;

#[derive(Args, Debug, Clone, Default)]
pub struct AnalyzeArgs {
    /// Access log to read; stdin when omitted or `-`
    pub path: Option<PathBuf>,

    /// Config file (defaults to ./elbsession.hcl when present)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Inactivity threshold in seconds
    #[arg(long)]
    pub threshold: Option<u64>,

    /// What to do with malformed lines
    #[arg(long, value_enum)]
    pub on_parse_error: Option<ParseErrorPolicy>,

    /// Worker threads for parsing and sessionizing
    #[arg(long)]
    pub workers: Option<usize>,

    /// Rows per table in pretty output
    #[arg(long)]
    pub top: Option<usize>,

    /// Output format (pretty on a terminal, json otherwise)
    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,
}
