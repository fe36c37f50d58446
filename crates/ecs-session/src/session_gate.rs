use crate::{
    Browser, Clock, FederatedAuth, GateOptions, IdentityRecord, ResolutionSource,
    Result as SessionResult, SessionSignals, SessionState, SessionStore, Subscription,
    TokenValidator,
    token_extractor::{extract_token, shell_hint},
};

use std::sync::Arc;

use log::{debug, error, info, warn};
use tokio::sync::watch;

/// Decides, once per page load, who is signed in.
///
/// Sources are tried in order and the first success wins: the SSO token in the
/// page URL, then the stored identity. The federated provider is tracked as a
/// separate signal and never merged into the resolved identity.
///
/// The federated subscription is released when the gate is dropped.
pub struct SessionGate {
    store: SessionStore,
    browser: Arc<dyn Browser>,
    validator: TokenValidator,
    options: GateOptions,
    state: SessionState,
    federated_tx: Arc<watch::Sender<bool>>,
    federated_subscription: Option<Subscription>,
}

impl SessionGate {
    pub fn new(
        store: SessionStore,
        browser: Arc<dyn Browser>,
        clock: Arc<dyn Clock>,
        options: GateOptions,
    ) -> Self {
        let (federated_tx, _) = watch::channel(false);

        Self {
            store,
            browser,
            validator: TokenValidator::new(clock),
            options,
            state: SessionState::Uninitialized,
            federated_tx: Arc::new(federated_tx),
            federated_subscription: None,
        }
    }

    /// Run resolution. Only the first call does any work; later calls return
    /// the settled state.
    ///
    /// Rejected tokens and unreadable stored records are logged and skipped.
    /// A failure to persist an accepted identity is returned as an error and
    /// leaves the gate unauthenticated.
    pub fn resolve(&mut self) -> SessionResult<&SessionState> {
        if self.state.is_settled() {
            debug!("Session already resolved as {}", self.state.name());
            return Ok(&self.state);
        }

        self.state = SessionState::Resolving;

        match self.resolve_sources() {
            Ok(state) => {
                self.state = state;
                Ok(&self.state)
            }
            Err(e) => {
                error!("Session resolution failed [{}]: {e}", e.error_code());
                self.state = SessionState::Unauthenticated;
                Err(e)
            }
        }
    }

    fn resolve_sources(&self) -> SessionResult<SessionState> {
        let url = self.browser.current_url();

        if let Some(token) = extract_token(&url) {
            match self
                .validator
                .accept(&token, &self.store, self.browser.as_ref())
            {
                Ok(identity) => {
                    info!("SSO login accepted for {}", identity.uid);
                    return Ok(SessionState::Authenticated {
                        identity,
                        source: ResolutionSource::Token,
                    });
                }
                Err(e) if e.is_fallthrough() => {
                    warn!("Rejected SSO token [{}]: {e}", e.error_code());

                    if !self.options.fallback_on_invalid_token {
                        info!("Stored-session fallback disabled; staying signed out");
                        return Ok(SessionState::Unauthenticated);
                    }
                }
                Err(e) => return Err(e),
            }
        }

        match self.store.read() {
            Some(identity) => {
                info!("Restored stored session for {}", identity.uid);
                Ok(SessionState::Authenticated {
                    identity,
                    source: ResolutionSource::Store,
                })
            }
            None => {
                debug!("No SSO token and no stored session");
                Ok(SessionState::Unauthenticated)
            }
        }
    }

    /// Clear the stored identity and leave for the shell.
    ///
    /// Destination precedence: stored identity's shell origin, the `shell` URL
    /// parameter, the configured default. Returns the destination. The
    /// federated session is untouched.
    pub fn logout(&mut self) -> SessionResult<String> {
        let destination = self.logout_destination();

        self.store.clear()?;
        self.state = SessionState::Unauthenticated;

        info!("Logged out; redirecting to {destination}");
        self.browser.navigate(&destination);

        Ok(destination)
    }

    fn logout_destination(&self) -> String {
        self.store
            .read()
            .and_then(|record| record.shell_origin().map(str::to_string))
            .or_else(|| shell_hint(&self.browser.current_url()).map(str::to_string))
            .unwrap_or_else(|| self.options.default_shell_origin.clone())
    }

    /// Track `provider`'s session. Replaces (and releases) any earlier subscription.
    pub fn attach_federated(&mut self, provider: &dyn FederatedAuth) {
        let tx = Arc::clone(&self.federated_tx);

        let subscription = provider.subscribe(Box::new(move |user| {
            let active = user.is_some();
            if *tx.borrow() != active {
                debug!("Federated session active: {active}");
            }
            tx.send_replace(active);
        }));

        self.federated_subscription = Some(subscription);
    }

    /// Stop tracking the provider. The last observed value is kept.
    pub fn detach_federated(&mut self) {
        if let Some(subscription) = self.federated_subscription.take() {
            subscription.cancel();
        }
    }

    pub fn federated_active(&self) -> bool {
        *self.federated_tx.borrow()
    }

    /// Receiver that observes every change of the federated signal.
    pub fn watch_federated(&self) -> watch::Receiver<bool> {
        self.federated_tx.subscribe()
    }

    pub fn signals(&self) -> SessionSignals {
        SessionSignals {
            sso_identity: self.state.identity().cloned(),
            federated_active: self.federated_active(),
        }
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn identity(&self) -> Option<&IdentityRecord> {
        self.state.identity()
    }

    pub fn source(&self) -> Option<ResolutionSource> {
        self.state.source()
    }

    pub fn is_authenticated(&self) -> bool {
        self.state.is_authenticated()
    }
}
