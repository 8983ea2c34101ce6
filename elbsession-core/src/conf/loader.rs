use crate::conf::{ConfigError, ElbSessionConfig};
use std::fs;
use std::path::Path;

pub const DEFAULT_CONFIG_FILE: &str = "elbsession.hcl";

/// Read, parse and validate one config file.
pub fn load_config(path: &Path) -> Result<ElbSessionConfig, ConfigError> {
    let src = fs::read_to_string(path).map_err(|e| ConfigError::read_file(path, e))?;
    parse_config(&src, path)
}

/// `path` is only used in error messages.
pub fn parse_config(src: &str, path: &Path) -> Result<ElbSessionConfig, ConfigError> {
    let config: ElbSessionConfig = hcl::from_str(src).map_err(|e| ConfigError::parse(path, e))?;
    config.validate()?;
    Ok(config)
}

/// Load `path` if given. Otherwise use `elbsession.hcl` from the working
/// directory when present, and built-in defaults when it is not.
pub fn load_config_or_default(path: Option<&Path>) -> Result<ElbSessionConfig, ConfigError> {
    if let Some(path) = path {
        return load_config(path);
    }

    let fallback = Path::new(DEFAULT_CONFIG_FILE);
    if fallback.exists() {
        tracing::debug!(path = %fallback.display(), "using config from working directory");
        load_config(fallback)
    } else {
        Ok(ElbSessionConfig::default())
    }
}

/// Starter file written by `config init`. Parses to the defaults.
pub const CONFIG_TEMPLATE: &str = r#"# elbsession configuration

sessionize = {
  # A gap longer than this (in seconds) between two requests from the same
  # client starts a new session.
  threshold_seconds = 900
}

ingest = {
  # "skip" logs malformed lines and carries on; "abort" fails the batch.
  on_parse_error = "skip"
  workers        = 1
}

report = {
  # Rows printed per table in pretty output.
  top = 20
}
"#;
