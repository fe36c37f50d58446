use crate::{IdentityRecord, Result as SessionResult, SessionError};

use serde::{Deserialize, Serialize};

/// Decoded SSO token payload as sent by the parent shell.
///
/// Every field is optional at the wire level; `validate` decides what is required.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenClaims {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uid: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub year_of_study: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_admin: Option<bool>,
    /// Expiration timestamp (Unix seconds)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exp: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shell_domain: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub micro_app_domain: Option<String>,
}

impl TokenClaims {
    /// Build the claims a shell would issue for `record`, expiring at `exp`.
    pub fn for_record(record: &IdentityRecord, exp: i64) -> Self {
        Self {
            uid: Some(record.uid.clone()),
            email: Some(record.email.clone()),
            name: Some(record.name.clone()),
            year_of_study: Some(record.year_of_study.clone()),
            role: Some(record.role.clone()),
            is_admin: Some(record.is_admin),
            exp: Some(exp),
            shell_domain: record.shell_domain.clone(),
            micro_app_domain: record.micro_app_domain.clone(),
        }
    }

    /// Check required fields, then expiry against `now`, and map onto an identity.
    #[track_caller]
    pub fn validate(self, now: i64) -> SessionResult<IdentityRecord> {
        let uid = required(self.uid, "uid")?;
        let email = required(self.email, "email")?;
        let exp = self.exp.ok_or_else(|| SessionError::incomplete_token("exp"))?;

        if exp <= now {
            return Err(SessionError::expired_token(exp, now));
        }

        Ok(IdentityRecord {
            uid,
            email,
            name: self.name.unwrap_or_default(),
            year_of_study: self.year_of_study.unwrap_or_default(),
            role: self.role.unwrap_or_default(),
            is_admin: self.is_admin.unwrap_or(false),
            shell_domain: self.shell_domain.filter(|s| !s.is_empty()),
            micro_app_domain: self.micro_app_domain.filter(|s| !s.is_empty()),
        })
    }
}

#[track_caller]
fn required(value: Option<String>, field: &'static str) -> SessionResult<String> {
    match value {
        Some(v) if !v.is_empty() => Ok(v),
        _ => Err(SessionError::incomplete_token(field)),
    }
}
