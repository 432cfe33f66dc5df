//! DCF CLI - Command-line interface for two-stage DCF valuation.
//!
//! # Usage
//!
//! ```bash
//! # Fully non-interactive
//! dcf --fcf 988 --shares 12.52 -r 10 --gp 3 -n 10 -g 8
//!
//! # Prompt for anything not given
//! dcf --fcf 988 --shares 12.52
//!
//! # Answers from a pipe, one per line
//! printf '10\n3\n10\n8\n' | dcf --fcf 988 --shares 12.52
//!
//! # Machine-readable output
//! dcf --fcf 988 --shares 12.52 -r 10 --gp 3 -n 10 -g 8 --format json
//! ```

use std::process::ExitCode;

use clap::Parser;
use is_terminal::IsTerminal;
use tracing::debug;
use tracing_subscriber::EnvFilter;

mod cli;
mod error;
mod output;
mod prompt;
mod report;

use cli::Cli;
use error::CliResult;

fn main() -> ExitCode {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            output::print_error(&e.to_string());
            ExitCode::FAILURE
        }
    }
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: &Cli) -> CliResult<()> {
    let raw = cli.raw_input();

    let stdin = std::io::stdin();
    let raw = if cli.no_input {
        prompt::require_complete(&raw)?;
        raw
    } else if stdin.is_terminal() {
        prompt::fill_missing(raw)?
    } else {
        // Piped stdin: one answer per line.
        prompt::read_missing(raw, stdin.lock())?
    };

    let input = raw.parse()?;
    debug!(%input, "parsed valuation input");

    let result = dcf_core::compute(&input)?;

    output::print_valuation(&input, &result, cli.format)
}
