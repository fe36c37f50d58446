pub const DEFAULT_SHELL_ORIGIN: &str = "https://bcombuddy.netlify.app";

/// Tunables for `SessionGate`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GateOptions {
    /// Consult the stored identity when a token is present but rejected.
    ///
    /// With `false`, a bad token ends resolution as unauthenticated.
    pub fallback_on_invalid_token: bool,
    /// Logout destination when neither the identity nor the URL names a shell.
    pub default_shell_origin: String,
}

impl Default for GateOptions {
    fn default() -> Self {
        Self {
            fallback_on_invalid_token: true,
            default_shell_origin: String::from(DEFAULT_SHELL_ORIGIN),
        }
    }
}
