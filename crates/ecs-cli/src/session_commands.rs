use clap::Subcommand;

#[derive(Subcommand)]
pub enum SessionCommands {
    /// Resolve the session for a page load
    Resolve {
        /// Page URL, including any `token`/`sso` parameters
        #[arg(long)]
        url: String,

        /// Treat the federated provider as signed in with this user ID
        #[arg(long)]
        federated_user: Option<String>,
    },

    /// Print the stored identity (null when none)
    Show,

    /// Clear the stored identity and report where the browser would go
    Logout {
        /// Page URL at logout time (may carry a `shell` hint)
        #[arg(long)]
        url: Option<String>,
    },
}
