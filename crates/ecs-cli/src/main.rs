//! ecs - E-Commerce Simulator CLI
//!
//! Resolves simulator sessions against a local identity store and runs the
//! course calculators, printing JSON.
//!
//! # Examples
//!
//! ```bash
//! # Issue a launch URL and resolve it
//! ecs token issue --uid u1 --email a@b.com --shell-domain https://example.org
//! ecs session resolve --url "http://localhost:5173/?token=...&sso=true" --pretty
//!
//! # Run a calculator
//! ecs simulate module4 payment -i paymentMethod="Credit Card" \
//!     -i transactionAmount=1000 -i currency=INR -i processingFee=25
//! ```

use ecs_cli::{Cli, CliResult, CommandRunner, logger, render};
use ecs_config::Config;
use ecs_session::{FileStorage, SystemClock};

use std::process::ExitCode;
use std::sync::Arc;

use clap::Parser;
use log::{debug, error};

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli) {
        Ok(json) => {
            println!("{json}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("{e}");
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> CliResult<String> {
    // Load and validate configuration
    let config = Config::load()?;
    config.validate()?;

    logger::initialize(
        config.logging.level,
        config.log_file_path()?,
        config.logging.colored,
    )?;
    config.log_summary();

    let storage_path = config.storage_path()?;
    debug!("Identity store: {}", storage_path.display());

    let runner = CommandRunner::new(
        config.session.clone(),
        Arc::new(FileStorage::new(storage_path)),
        Arc::new(SystemClock),
    );

    let value = runner.run(cli.command)?;
    render(&value, cli.pretty)
}
