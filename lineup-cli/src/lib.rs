//! Command-line interface for the lineup engine.
#![forbid(unsafe_code)]

use clap::{Parser, Subcommand};

mod error;
mod optimize;

pub use error::{CliError, Outcome};
use optimize::{OptimizeArgs, run_optimize};

const ARG_PAYLOAD: &str = "payload";
const ARG_BUDGET: &str = "budget";
const ARG_COUNT: &str = "count";
const ARG_OUTPUT: &str = "output";
const ENV_PAYLOAD_PATH: &str = "LINEUP_CMDS_OPTIMIZE_PAYLOAD_PATH";

/// Run the lineup CLI with the current process arguments and environment.
pub fn run() -> Result<(), CliError> {
    let cli = Cli::try_parse().map_err(CliError::ArgumentParsing)?;
    match cli.command {
        Command::Optimize(args) => run_optimize(args),
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "lineup",
    about = "Select the highest-scoring fantasy rosters from a player pool",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Find the best distinct rosters within a budget.
    Optimize(OptimizeArgs),
}

#[cfg(test)]
mod tests;
