//! Seam for the external identity provider (email/password or popup sign-in).
//!
//! The session core only needs two things from it: a subscription that reports
//! the provider's current user on every change, and a sign-out action.

pub(crate) mod error;
pub(crate) mod local_federated_auth;
pub(crate) mod subscription;

pub use error::{FederatedAuthError, Result as FederatedAuthResult};
pub use local_federated_auth::LocalFederatedAuth;
pub use subscription::Subscription;

use serde::{Deserialize, Serialize};

/// The provider's view of the signed-in user. Independent of `IdentityRecord`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FederatedUser {
    pub uid: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub display_name: Option<String>,
}

/// Called with the provider's current user: once on registration, then on every change.
pub type SessionListener = Box<dyn Fn(Option<&FederatedUser>) + Send + Sync>;

pub trait FederatedAuth: Send + Sync {
    /// Register `listener`; it is invoked immediately with the current state.
    fn subscribe(&self, listener: SessionListener) -> Subscription;

    /// End the provider session. Does not touch the SSO session.
    fn sign_out(&self) -> FederatedAuthResult<()>;

    fn current_user(&self) -> Option<FederatedUser>;
}
