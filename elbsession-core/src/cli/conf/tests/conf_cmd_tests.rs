use crate::cli::conf::{check, dump_string, init};
use crate::conf::{ElbSessionConfig, load_config, parse_config};
use pretty_assertions::assert_eq;
use std::fs;
use std::path::Path;
use tempfile::tempdir;

#[test]
fn init_writes_a_loadable_config() {
    // Arrange
    let dir = tempdir().unwrap();
    let path = dir.path().join("nested").join("elbsession.hcl");

    // Act
    init(&path).unwrap();

    // Assert
    assert_eq!(load_config(&path).unwrap(), ElbSessionConfig::default());
    assert!(check(&path).is_ok());
}

#[test]
fn init_refuses_to_overwrite() {
    // Arrange
    let dir = tempdir().unwrap();
    let path = dir.path().join("elbsession.hcl");
    fs::write(&path, "report = { top = 3 }").unwrap();

    // Act
    let result = init(&path);

    // Assert
    assert!(result.is_err());
    assert_eq!(fs::read_to_string(&path).unwrap(), "report = { top = 3 }");
}

#[test]
fn check_fails_on_invalid_config() {
    // Arrange
    let dir = tempdir().unwrap();
    let path = dir.path().join("elbsession.hcl");
    fs::write(&path, "ingest = { workers = 0 }").unwrap();

    // Act + Assert
    assert!(check(&path).is_err());
}

#[test]
fn hcl_dump_parses_back() {
    // Arrange
    let mut cfg = ElbSessionConfig::default();
    cfg.sessionize.threshold_seconds = 42;

    // Act
    let hcl = dump_string(&cfg, false).unwrap();

    // Assert
    assert_eq!(parse_config(&hcl, Path::new("dump.hcl")).unwrap(), cfg);
}

#[test]
fn json_dump_uses_config_keys() {
    // Act
    let json = dump_string(&ElbSessionConfig::default(), true).unwrap();

    // Assert
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["sessionize"]["threshold_seconds"], 900);
    assert_eq!(value["ingest"]["on_parse_error"], "skip");
}
