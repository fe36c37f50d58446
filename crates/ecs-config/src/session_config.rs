use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_FALLBACK_ON_INVALID_TOKEN, DEFAULT_SHELL_ORIGIN,
    DEFAULT_STORAGE_KEY,
};

use ecs_session::is_safe_key;
use serde::Deserialize;
use url::Url;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Logout destination when neither the identity nor the URL names a shell.
    pub default_shell_origin: String,
    /// Fall back to the stored identity when a token is present but rejected.
    pub fallback_on_invalid_token: bool,
    /// Key of the durable slot holding the identity.
    pub storage_key: String,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            default_shell_origin: String::from(DEFAULT_SHELL_ORIGIN),
            fallback_on_invalid_token: DEFAULT_FALLBACK_ON_INVALID_TOKEN,
            storage_key: String::from(DEFAULT_STORAGE_KEY),
        }
    }
}

impl SessionConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        let origin = self.default_shell_origin.as_str();
        let web_origin = Url::parse(origin).is_ok_and(|url| {
            matches!(url.scheme(), "http" | "https") && url.host_str().is_some()
        });

        if !web_origin {
            return Err(ConfigError::session(format!(
                "session.default_shell_origin must be an absolute http(s) URL, got '{origin}'"
            )));
        }

        if self.storage_key.is_empty() {
            return Err(ConfigError::session("session.storage_key cannot be empty"));
        }

        if !is_safe_key(&self.storage_key) {
            return Err(ConfigError::session(format!(
                "session.storage_key may only contain letters, digits, '_', '.' and '-' and cannot start with '.', got '{}'",
                self.storage_key
            )));
        }

        Ok(())
    }
}
