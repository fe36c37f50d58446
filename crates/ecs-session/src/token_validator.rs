use crate::{
    Browser, Clock, IdentityRecord, Result as SessionResult, SessionStore, SsoToken,
    token_codec::decode_token, token_extractor::SSO_PARAMS,
};

use std::sync::Arc;

use log::debug;

/// Turns a raw SSO token into an identity.
pub struct TokenValidator {
    clock: Arc<dyn Clock>,
}

impl TokenValidator {
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self { clock }
    }

    /// Decode and check the token. No side effects.
    ///
    /// Fails with `MalformedToken`, `IncompleteToken` or `ExpiredToken`, in that order.
    #[track_caller]
    pub fn validate(&self, token: &SsoToken) -> SessionResult<IdentityRecord> {
        let claims = decode_token(token.raw())?;
        claims.validate(self.clock.now())
    }

    /// Validate, then persist the identity and strip the SSO parameters from
    /// the visible URL. Nothing is persisted or rewritten on failure.
    pub fn accept(
        &self,
        token: &SsoToken,
        store: &SessionStore,
        browser: &dyn Browser,
    ) -> SessionResult<IdentityRecord> {
        let record = self.validate(token)?;

        store.persist(&record)?;
        sanitize_url(browser);

        Ok(record)
    }
}

/// Remove `token`, `sso` and `shell` from the visible URL without reloading.
pub fn sanitize_url(browser: &dyn Browser) {
    let current = browser.current_url();
    let cleaned = current.without_params(&SSO_PARAMS);

    if cleaned != current {
        debug!("Removing SSO parameters from page URL");
        browser.replace_url(cleaned);
    }
}
