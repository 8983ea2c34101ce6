use crate::conf::CONFIG_TEMPLATE;
use anyhow::{Context, bail};
use std::fs;
use std::path::Path;

/// Write the starter config. Never overwrites.
pub fn init(path: &Path) -> anyhow::Result<()> {
    if path.exists() {
        bail!("{} already exists", path.display());
    }

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("failed to create {}", parent.display()))?;
    }

    fs::write(path, CONFIG_TEMPLATE)
        .with_context(|| format!("failed to write {}", path.display()))?;

    println!("✔ Wrote {}", path.display());
    Ok(())
}
