use crate::cli::analyze::{AnalyzeArgs, resolve_config};
use crate::pipeline::ParseErrorPolicy;
use pretty_assertions::assert_eq;
use std::fs;
use tempfile::tempdir;

#[test]
fn flags_override_config_file() {
    // Arrange
    let dir = tempdir().unwrap();
    let path = dir.path().join("elbsession.hcl");
    fs::write(
        &path,
        r#"
sessionize = { threshold_seconds = 600 }
ingest = { workers = 2 }
report = { top = 7 }
"#,
    )
    .unwrap();

    let args = AnalyzeArgs {
        config: Some(path),
        threshold: Some(120),
        on_parse_error: Some(ParseErrorPolicy::Abort),
        ..AnalyzeArgs::default()
    };

    // Act
    let config = resolve_config(&args).unwrap();

    // Assert
    assert_eq!(config.sessionize.threshold_seconds, 120);
    assert_eq!(config.ingest.on_parse_error, ParseErrorPolicy::Abort);
    assert_eq!(config.ingest.workers, 2);
    assert_eq!(config.report.top, 7);
}

#[test]
fn invalid_override_is_rejected() {
    // Arrange
    let dir = tempdir().unwrap();
    let path = dir.path().join("elbsession.hcl");
    fs::write(&path, "").unwrap();

    let args = AnalyzeArgs {
        config: Some(path),
        workers: Some(0),
        ..AnalyzeArgs::default()
    };

    // Act
    let result = resolve_config(&args);

    // Assert
    assert!(result.is_err());
}
