use clap::{Parser, Subcommand};
use elbsession_core::cli;
use elbsession_core::cli::analyze::AnalyzeArgs;
use elbsession_core::logging::init_logging;
use std::process::ExitCode;

#[derive(Parser, Debug)]
#[command(
    name = "elbsession",
    version,
    about = "Elbsession: sessionize classic load balancer access logs"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Sessionize an access log and print session metrics
    Analyze(AnalyzeArgs),

    /// Config file tooling
    Config {
        #[command(subcommand)]
        cmd: cli::conf::ConfigCmd,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    init_logging();
    tracing::debug!(command = ?cli.command, "starting");

    let result = match cli.command {
        Command::Analyze(args) => cli::analyze::analyze(args),
        Command::Config { cmd } => cli::conf::run(cmd),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e:#}");
            ExitCode::FAILURE
        }
    }
}
