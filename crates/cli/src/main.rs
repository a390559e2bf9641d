mod cli;
mod error;
mod fetch;
mod logging;
mod render;

use std::process::ExitCode;

use clap::Parser;
use log::LevelFilter;
use log::error;

use crate::cli::Cli;
use crate::cli::Commands;
use crate::error::CliError;

fn main() -> ExitCode {
    let cli = Cli::parse();
    let level = cli.log_level.into();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            if is_logged(&err, level) {
                error!("{err}");
            } else {
                eprintln!("{err}");
            }
            ExitCode::FAILURE
        }
    }
}

/// Errors go through the logger only when it is set up and lets them pass,
/// otherwise they are printed to the stderr.
fn is_logged(err: &CliError, level: LevelFilter) -> bool {
    !matches!(err, CliError::Logging(_)) && level >= LevelFilter::Error
}

fn run(cli: Cli) -> Result<(), CliError> {
    logging::setup_logging(cli.log_level.into())?;

    match cli.command {
        Commands::Render(args) => render::render(args),
        Commands::Fetch(args) => fetch::fetch(args),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn errors_are_printed_when_logging_is_off() {
        let err = CliError::Path(String::from("no such directory"));

        assert!(!is_logged(&err, LevelFilter::Off));
        assert!(is_logged(&err, LevelFilter::Error));
        assert!(is_logged(&err, LevelFilter::Info));
    }
}
