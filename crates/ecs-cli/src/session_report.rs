use ecs_session::{IdentityRecord, ResolutionSource};

use serde::Serialize;

/// Result of `session resolve`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionReport {
    pub state: &'static str,
    pub source: Option<ResolutionSource>,
    pub identity: Option<IdentityRecord>,
    pub federated_active: bool,
    pub has_access: bool,
    /// Address left in the location bar after resolution.
    pub url: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct LogoutReport {
    pub redirect: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct IssuedToken {
    pub token: String,
    pub url: String,
}
