use clap::Subcommand;

#[derive(Subcommand)]
pub enum ModuleCommands {
    /// List all course modules
    List,
    /// Show one module with its definitions and calculator forms
    Show {
        /// Module ID (e.g. "module1")
        module: String,
    },
}
