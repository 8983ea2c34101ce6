use crate::conf::load_config;
use std::path::Path;

pub fn check(path: &Path) -> anyhow::Result<()> {
    match load_config(path) {
        Ok(cfg) => {
            println!("✔ Config loaded successfully");
            println!(
                "✔ sessions split after {}s of inactivity",
                cfg.sessionize.threshold_seconds
            );
            println!(
                "✔ malformed lines: {:?}, {} worker(s)",
                cfg.ingest.on_parse_error, cfg.ingest.workers
            );
            println!("✔ {} rows per table", cfg.report.top);
            Ok(())
        }
        Err(err) => {
            if let Some(hint) = err.hint() {
                eprintln!("{hint}");
                eprintln!();
            }
            Err(err.into())
        }
    }
}
