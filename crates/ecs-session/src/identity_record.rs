use serde::{Deserialize, Serialize};

/// The signed-in user as this application knows them.
///
/// Field names match the SSO token payload so the persisted form and the
/// token share one vocabulary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IdentityRecord {
    pub uid: String,
    pub email: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub year_of_study: String,
    #[serde(default)]
    pub role: String,
    #[serde(default)]
    pub is_admin: bool,
    /// Base address of the parent shell, used as the logout destination.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shell_domain: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub micro_app_domain: Option<String>,
}

impl IdentityRecord {
    /// A record is usable only with both a subject id and an email.
    pub fn is_valid(&self) -> bool {
        !self.uid.is_empty() && !self.email.is_empty()
    }

    /// Shell origin, ignoring an empty value.
    pub fn shell_origin(&self) -> Option<&str> {
        self.shell_domain.as_deref().filter(|s| !s.is_empty())
    }
}
