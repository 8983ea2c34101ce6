use crate::conf::{ElbSessionConfig, load_config};
use std::path::Path;

pub fn dump(path: &Path, json: bool) -> anyhow::Result<()> {
    let cfg = load_config(path)?;
    println!("{}", dump_string(&cfg, json)?);
    Ok(())
}

pub(crate) fn dump_string(cfg: &ElbSessionConfig, json: bool) -> anyhow::Result<String> {
    if json {
        Ok(serde_json::to_string_pretty(cfg)?)
    } else {
        Ok(hcl::to_string(cfg)?)
    }
}
