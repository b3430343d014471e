#![forbid(unsafe_code)]
#![allow(unreachable_pub)]

use clap::{Parser, Subcommand};
use std::process::ExitCode;

mod clean;
mod debug;
mod validate;

#[derive(Parser, Debug)]
#[command(name = "airdrop")]
#[command(about = "Stacks airdrop address cleaning and Clarity contract generation", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Clean addresses and write live transfer calls
    Clean(clean::Cli),
    /// Clean addresses and write a print-only validation contract
    Validate(validate::Cli),
    /// Report filter stages without writing anything
    Debug(debug::Cli),
}

fn main() -> ExitCode {
    stacks_airdrop::logging::init_logging();
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Clean(args) => clean::run(args),
        Commands::Validate(args) => validate::run(args),
        Commands::Debug(args) => debug::run(&args),
    };

    // Diagnostics go to stdout next to the report; the exit code carries failure.
    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::debug!(error = ?err, "run failed");
            println!("Error: {err:#}");
            ExitCode::FAILURE
        }
    }
}
