use crate::federated::{
    FederatedAuth, FederatedAuthError, FederatedAuthResult, FederatedUser, SessionListener,
    Subscription,
};

use std::collections::{BTreeMap, HashMap};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use log::{debug, info, warn};

struct Account {
    password: String,
    user: FederatedUser,
    disabled: bool,
}

#[derive(Default)]
struct Inner {
    current: Option<FederatedUser>,
    listeners: BTreeMap<u64, Arc<SessionListener>>,
    next_listener_id: u64,
    accounts: HashMap<String, Account>,
    fail_next_sign_out: bool,
}

/// In-process identity provider with a registered-account table.
#[derive(Clone, Default)]
pub struct LocalFederatedAuth {
    inner: Arc<Mutex<Inner>>,
}

impl LocalFederatedAuth {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an account that `sign_in_with_email` can authenticate.
    pub fn register(&self, email: &str, password: &str, user: FederatedUser) {
        self.lock().accounts.insert(
            email.to_lowercase(),
            Account {
                password: password.to_string(),
                user,
                disabled: false,
            },
        );
    }

    pub fn disable(&self, email: &str) {
        if let Some(account) = self.lock().accounts.get_mut(&email.to_lowercase()) {
            account.disabled = true;
        }
    }

    /// Email/password sign-in against the registered accounts.
    #[track_caller]
    pub fn sign_in_with_email(
        &self,
        email: &str,
        password: &str,
    ) -> FederatedAuthResult<FederatedUser> {
        if !is_plausible_email(email) {
            return Err(FederatedAuthError::sign_in("auth/invalid-email"));
        }

        let user = {
            let inner = self.lock();
            let account = inner
                .accounts
                .get(&email.to_lowercase())
                .ok_or_else(|| FederatedAuthError::sign_in("auth/user-not-found"))?;

            if account.disabled {
                return Err(FederatedAuthError::sign_in("auth/user-disabled"));
            }
            if account.password != password {
                return Err(FederatedAuthError::sign_in("auth/wrong-password"));
            }
            account.user.clone()
        };

        self.sign_in(user.clone());
        Ok(user)
    }

    /// Make `user` the provider's current user and notify listeners.
    pub fn sign_in(&self, user: FederatedUser) {
        info!("Federated sign-in: {}", user.uid);
        self.set_current(Some(user));
    }

    /// Make the next `sign_out` call fail.
    pub fn fail_next_sign_out(&self) {
        self.lock().fail_next_sign_out = true;
    }

    pub fn listener_count(&self) -> usize {
        self.lock().listeners.len()
    }

    fn set_current(&self, user: Option<FederatedUser>) {
        let listeners: Vec<Arc<SessionListener>> = {
            let mut inner = self.lock();
            inner.current = user.clone();
            inner.listeners.values().cloned().collect()
        };

        // Listeners run outside the lock so they may call back into the provider.
        for listener in listeners {
            listener(user.as_ref());
        }
    }

    fn lock(&self) -> MutexGuard<'_, Inner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl FederatedAuth for LocalFederatedAuth {
    fn subscribe(&self, listener: SessionListener) -> Subscription {
        let listener = Arc::new(listener);

        let (id, current) = {
            let mut inner = self.lock();
            let id = inner.next_listener_id;
            inner.next_listener_id += 1;
            inner.listeners.insert(id, Arc::clone(&listener));
            (id, inner.current.clone())
        };

        debug!("Federated listener {id} registered");
        listener(current.as_ref());

        let weak = Arc::downgrade(&self.inner);
        Subscription::new(move || {
            if let Some(inner) = weak.upgrade() {
                inner
                    .lock()
                    .unwrap_or_else(PoisonError::into_inner)
                    .listeners
                    .remove(&id);
                debug!("Federated listener {id} released");
            }
        })
    }

    fn sign_out(&self) -> FederatedAuthResult<()> {
        {
            let mut inner = self.lock();
            if inner.fail_next_sign_out {
                inner.fail_next_sign_out = false;
                warn!("Federated sign-out failed");
                return Err(FederatedAuthError::sign_out("provider rejected sign-out"));
            }
        }

        info!("Federated sign-out");
        self.set_current(None);
        Ok(())
    }

    fn current_user(&self) -> Option<FederatedUser> {
        self.lock().current.clone()
    }
}

fn is_plausible_email(email: &str) -> bool {
    match email.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty() && domain.contains('.') && !domain.starts_with('.')
        }
        None => false,
    }
}
