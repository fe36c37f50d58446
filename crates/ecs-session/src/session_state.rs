use crate::IdentityRecord;

use serde::Serialize;

/// Where a resolved identity came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ResolutionSource {
    Token,
    Store,
}

/// Per-page-load session lifecycle.
///
/// `Uninitialized -> Resolving -> Authenticated | Unauthenticated`, then only
/// `Authenticated -> Unauthenticated` on logout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "camelCase")]
pub enum SessionState {
    Uninitialized,
    Resolving,
    Authenticated {
        identity: IdentityRecord,
        source: ResolutionSource,
    },
    Unauthenticated,
}

impl SessionState {
    pub fn identity(&self) -> Option<&IdentityRecord> {
        match self {
            Self::Authenticated { identity, .. } => Some(identity),
            _ => None,
        }
    }

    pub fn source(&self) -> Option<ResolutionSource> {
        match self {
            Self::Authenticated { source, .. } => Some(*source),
            _ => None,
        }
    }

    pub fn is_authenticated(&self) -> bool {
        matches!(self, Self::Authenticated { .. })
    }

    /// Resolution has finished, whatever the outcome.
    pub fn is_settled(&self) -> bool {
        matches!(self, Self::Authenticated { .. } | Self::Unauthenticated)
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Uninitialized => "uninitialized",
            Self::Resolving => "resolving",
            Self::Authenticated { .. } => "authenticated",
            Self::Unauthenticated => "unauthenticated",
        }
    }
}
