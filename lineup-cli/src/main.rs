//! Entry point for the command-line interface.
#![forbid(unsafe_code)]

use std::process::ExitCode;

use clap::error::ErrorKind;
use env_logger::Env;
use lineup_cli::CliError;

fn main() -> ExitCode {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();

    let Err(err) = lineup_cli::run() else {
        return ExitCode::SUCCESS;
    };
    if let CliError::ArgumentParsing(parse_error) = &err
        && matches!(
            parse_error.kind(),
            ErrorKind::DisplayHelp
                | ErrorKind::DisplayVersion
                | ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand
        )
    {
        parse_error.exit();
    }

    let outcome = err.outcome();
    log::error!("{err}");
    println!("{}", err.failure_document());
    ExitCode::from(outcome.exit_code())
}
