//! ecs-cli library
//!
//! Command definitions and the runner behind the `ecs` binary, exported for
//! tests.

pub mod cli;
pub mod commands;
pub mod error;
pub mod logger;
pub mod module_commands;
pub mod runner;
pub mod session_commands;
pub mod session_report;
pub mod token_commands;

#[cfg(test)]
mod tests;

pub use cli::Cli;
pub use commands::Commands;
pub use error::{CliError, Result as CliResult};
pub use runner::{CommandRunner, issue_token, parse_inputs};
pub use session_report::{IssuedToken, LogoutReport, SessionReport};

use serde_json::Value;

/// Serialize command output the way it is printed.
pub fn render(value: &Value, pretty: bool) -> CliResult<String> {
    let output = if pretty {
        serde_json::to_string_pretty(value)
    } else {
        serde_json::to_string(value)
    };
    Ok(output?)
}
