use crate::cli::analyze::{AnalyzeArgs, render_json, render_pretty};
use crate::conf::{ElbSessionConfig, load_config_or_default};
use crate::logging::{OutputFormat, default_output_format};
use crate::pipeline::Pipeline;
use anyhow::{Context, Result};
use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::Path;

pub fn analyze(args: AnalyzeArgs) -> Result<()> {
    let config = resolve_config(&args)?;
    let lines = read_lines(args.path.as_deref())?;

    let report = Pipeline::new(config.pipeline_config()).run(&lines)?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    match args.format.unwrap_or_else(default_output_format) {
        OutputFormat::Pretty => render_pretty(&report, config.report.top, &mut out)?,
        OutputFormat::Json => render_json(&report, &mut out)?,
    }
    out.flush()?;

    Ok(())
}

/// Config file first, then command-line overrides, then validation.
pub fn resolve_config(args: &AnalyzeArgs) -> Result<ElbSessionConfig> {
    let mut config = load_config_or_default(args.config.as_deref())?;

    if let Some(threshold) = args.threshold {
        config.sessionize.threshold_seconds = threshold;
    }
    if let Some(policy) = args.on_parse_error {
        config.ingest.on_parse_error = policy;
    }
    if let Some(workers) = args.workers {
        config.ingest.workers = workers;
    }
    if let Some(top) = args.top {
        config.report.top = top;
    }

    config.validate()?;
    Ok(config)
}

fn read_lines(path: Option<&Path>) -> Result<Vec<String>> {
    match path {
        Some(path) if path != Path::new("-") => {
            let file =
                File::open(path).with_context(|| format!("failed to open {}", path.display()))?;
            collect_lines(BufReader::new(file))
                .with_context(|| format!("failed to read {}", path.display()))
        }
        _ => collect_lines(io::stdin().lock()).context("failed to read stdin"),
    }
}

fn collect_lines(reader: impl BufRead) -> io::Result<Vec<String>> {
    reader.lines().collect()
}
