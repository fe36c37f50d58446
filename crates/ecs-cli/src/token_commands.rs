use clap::Subcommand;

pub(crate) const DEFAULT_BASE_URL: &str = "http://localhost:5173/";
pub(crate) const DEFAULT_TTL_SECS: i64 = 3600;

#[derive(Subcommand)]
pub enum TokenCommands {
    /// Issue a token and a launch URL carrying it
    Issue {
        /// User ID
        #[arg(long)]
        uid: String,

        /// Email address
        #[arg(long)]
        email: String,

        /// Display name
        #[arg(long, default_value = "")]
        name: String,

        /// Year of study
        #[arg(long, default_value = "")]
        year_of_study: String,

        /// Role (e.g. "student")
        #[arg(long, default_value = "")]
        role: String,

        /// Grant admin rights
        #[arg(long)]
        admin: bool,

        /// Origin of the shell that launched the simulator
        #[arg(long)]
        shell_domain: Option<String>,

        /// Origin the simulator is served from
        #[arg(long)]
        micro_app_domain: Option<String>,

        /// Lifetime in seconds from now
        #[arg(long, conflicts_with = "exp")]
        ttl_secs: Option<i64>,

        /// Absolute expiry (Unix seconds)
        #[arg(long)]
        exp: Option<i64>,

        /// Simulator page the launch URL points at
        #[arg(long, default_value = DEFAULT_BASE_URL)]
        base_url: String,
    },
}
