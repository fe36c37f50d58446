//! Session resolution for the E-Commerce Simulator.
//!
//! On page load the [`SessionGate`] reconciles two identity sources: an SSO
//! token handed over by the parent shell in the page URL (falling back to the
//! identity persisted by an earlier visit), and a federated identity provider
//! that is observed separately.

pub mod browser;
pub mod clock;
pub mod error;
pub mod federated;
pub mod gate_options;
pub mod identity_record;
pub mod load_result;
pub mod page_url;
pub mod session_gate;
pub mod session_signals;
pub mod session_state;
pub mod session_store;
pub mod storage;
pub mod token_claims;
pub mod token_codec;
pub mod token_extractor;
pub mod token_validator;

pub use browser::{Browser, MemoryBrowser};
pub use clock::{Clock, FixedClock, SystemClock};
pub use error::{Result, SessionError};
pub use federated::{
    FederatedAuth, FederatedAuthError, FederatedUser, LocalFederatedAuth, SessionListener,
    Subscription,
};
pub use gate_options::{DEFAULT_SHELL_ORIGIN, GateOptions};
pub use identity_record::IdentityRecord;
pub use load_result::LoadResult;
pub use page_url::PageUrl;
pub use session_gate::SessionGate;
pub use session_signals::SessionSignals;
pub use session_state::{ResolutionSource, SessionState};
pub use session_store::{DEFAULT_STORAGE_KEY, SessionStore};
pub use storage::{
    KeyValueStorage, file_storage::FileStorage, is_safe_key, memory_storage::MemoryStorage,
};
pub use token_claims::TokenClaims;
pub use token_codec::{decode_token, encode_token};
pub use token_extractor::{SsoToken, extract_token, shell_hint};
pub use token_validator::{TokenValidator, sanitize_url};

#[cfg(test)]
mod tests;
