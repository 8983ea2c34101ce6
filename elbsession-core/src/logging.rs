use std::io::{self, IsTerminal};
use tracing_subscriber::{EnvFilter, fmt};

/// Install the global subscriber: JSON lines on stderr, filtered by
/// `RUST_LOG` (default `info`).
///
/// Stdout is left to the report so that `elbsession analyze --format json`
/// can be piped straight into another tool.
pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .json()
        .flatten_event(true)
        .init();
}

pub fn default_output_format() -> OutputFormat {
    if io::stdout().is_terminal() {
        OutputFormat::Pretty
    } else {
        OutputFormat::Json
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    Pretty,
    Json,
}
