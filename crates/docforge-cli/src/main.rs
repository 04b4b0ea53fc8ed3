//! `create-docforge`: create a documentation site from a template.
//!
//! `main` parses arguments, installs logging and hands over to [`run`],
//! which loads configuration and drives the create command. Every failure,
//! including a bad command line, exits with status 1; `--help` and
//! `--version` exit with 0.

use std::io::IsTerminal as _;
use std::process::ExitCode;

use clap::Parser;
use tracing::{debug, instrument};

use crate::{
    cli::Cli,
    config::AppConfig,
    error::{CliError, CliResult},
    logging::init_logging,
    output::OutputManager,
};

mod cli;
mod commands;
mod config;
mod error;
mod logging;
mod output;
mod prompt;

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let _ = e.print();
            // help and version are rendered as "errors" that go to stdout
            return if e.use_stderr() {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            };
        }
    };

    if let Err(e) = init_logging(&cli.global) {
        eprintln!("create-docforge: {e:#}");
        return ExitCode::FAILURE;
    }

    let report = ErrorReport {
        verbose: cli.global.verbose > 0,
        color: !cli.global.no_color && std::io::stderr().is_terminal(),
    };
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => report.emit(&e),
    }
}

#[instrument(skip_all)]
fn run(cli: Cli) -> CliResult<()> {
    debug!(global = ?cli.global, "Arguments parsed");
    let config = AppConfig::load(cli.global.config.as_ref())?;
    debug!(?config, "Configuration loaded");
    let output = OutputManager::new(&cli.global, &config);
    commands::create::execute(cli.create, config, &output)
}

/// How a failed run is shown on stderr.
struct ErrorReport {
    verbose: bool,
    color: bool,
}

impl ErrorReport {
    fn emit(&self, err: &CliError) -> ExitCode {
        err.log();
        if err.is_cancelled() {
            eprintln!("\nCancelled, nothing was created.");
        } else if self.color {
            eprint!("{}", err.format_colored(self.verbose));
        } else {
            eprint!("{}", err.format_plain(self.verbose));
        }
        ExitCode::from(err.exit_code())
    }
}
