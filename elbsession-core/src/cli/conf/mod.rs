mod check;
mod dump;
mod init;
#[cfg(test)]
mod tests;

pub use check::*;
pub use dump::*;
pub use init::*;

use crate::conf::DEFAULT_CONFIG_FILE;
use clap::Subcommand;
use std::path::PathBuf;

#[derive(Subcommand, Debug)]
pub enum ConfigCmd {
    /// Validate a config file and exit
    Check {
        #[arg(default_value = DEFAULT_CONFIG_FILE)]
        path: PathBuf,
    },

    /// Print the resolved configuration, defaults filled in
    Dump {
        #[arg(default_value = DEFAULT_CONFIG_FILE)]
        path: PathBuf,

        /// Output as JSON instead of HCL
        #[arg(long)]
        json: bool,
    },

    /// Write a starter config file
    Init {
        #[arg(default_value = DEFAULT_CONFIG_FILE)]
        path: PathBuf,
    },
}

pub fn run(cmd: ConfigCmd) -> anyhow::Result<()> {
    match cmd {
        ConfigCmd::Check { path } => check(&path),
        ConfigCmd::Dump { path, json } => dump(&path, json),
        ConfigCmd::Init { path } => init(&path),
    }
}
