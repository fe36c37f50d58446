use crate::{
    module_commands::ModuleCommands, session_commands::SessionCommands,
    token_commands::TokenCommands,
};

use clap::Subcommand;

#[derive(Subcommand)]
pub enum Commands {
    /// Session resolution against the local identity store
    Session {
        #[command(subcommand)]
        action: SessionCommands,
    },

    /// Build SSO launch tokens the way the parent shell does
    Token {
        #[command(subcommand)]
        action: TokenCommands,
    },

    /// Browse the course catalog
    Modules {
        #[command(subcommand)]
        action: ModuleCommands,
    },

    /// Run a calculator
    Simulate {
        /// Module ID (e.g. "module4")
        module: String,

        /// Simulator ID within the module (e.g. "payment")
        simulator: String,

        /// Form value as key=value (repeatable)
        #[arg(long = "input", short = 'i', value_name = "KEY=VALUE")]
        inputs: Vec<String>,
    },
}
