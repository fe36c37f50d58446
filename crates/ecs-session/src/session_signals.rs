use crate::IdentityRecord;

use serde::Serialize;

/// The two independent access signals, as seen by the view layer.
///
/// The gate never merges them; the application decides what each one unlocks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionSignals {
    pub sso_identity: Option<IdentityRecord>,
    pub federated_active: bool,
}

impl SessionSignals {
    /// Either source grants access.
    pub fn has_access(&self) -> bool {
        self.sso_identity.is_some() || self.federated_active
    }
}
