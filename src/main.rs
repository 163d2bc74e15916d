use clap::Parser;
use std::process::ExitCode;

use quotes::cli::Cli;
use quotes::commands::quotes::handle_quotes_command;
use quotes::config::QuoteConfig;
use quotes::logging;
use quotes::utils::error::{AppResult, report_error};

fn run(cli: &Cli) -> AppResult<()> {
    let config = QuoteConfig::from_cli(cli)?;
    let stdout = std::io::stdout();
    handle_quotes_command(&config, &mut stdout.lock())
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init(cli.debug);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            report_error(&err);
            ExitCode::FAILURE
        }
    }
}
