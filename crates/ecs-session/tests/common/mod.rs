#![allow(dead_code)]

use ecs_session::{
    GateOptions, IdentityRecord, LocalFederatedAuth, MemoryBrowser, MemoryStorage, SessionGate,
    SessionStore, SystemClock, TokenClaims, encode_token,
};

use std::sync::Arc;

pub const APP_URL: &str = "https://simulator.example/ecommerce";

/// Far-future expiry used by shells that do not bother with short-lived tokens.
pub const FAR_FUTURE: i64 = 9_999_999_999;

pub struct TestApp {
    pub storage: Arc<MemoryStorage>,
    pub store: SessionStore,
    pub browser: Arc<MemoryBrowser>,
    pub provider: LocalFederatedAuth,
    pub gate: SessionGate,
}

/// Wires a gate over in-memory collaborators, the way a page load would.
pub fn create_test_app(url: &str) -> TestApp {
    create_test_app_with_storage(url, Arc::new(MemoryStorage::new()))
}

pub fn create_test_app_with_storage(url: &str, storage: Arc<MemoryStorage>) -> TestApp {
    let store = SessionStore::with_default_key(storage.clone());
    let browser = Arc::new(MemoryBrowser::open(url).unwrap());
    let provider = LocalFederatedAuth::new();
    let mut gate = SessionGate::new(
        store.clone(),
        browser.clone(),
        Arc::new(SystemClock),
        GateOptions::default(),
    );
    gate.attach_federated(&provider);

    TestApp {
        storage,
        store,
        browser,
        provider,
        gate,
    }
}

pub fn create_test_record() -> IdentityRecord {
    IdentityRecord {
        uid: "u1".to_string(),
        email: "a@b.com".to_string(),
        name: "A".to_string(),
        year_of_study: "3".to_string(),
        role: "student".to_string(),
        is_admin: false,
        shell_domain: None,
        micro_app_domain: None,
    }
}

/// Launch URL as the parent shell builds it: JSON payload, encoded, then
/// encoded again as a query value.
pub fn create_launch_url(record: &IdentityRecord, exp: i64) -> String {
    let token = encode_token(&TokenClaims::for_record(record, exp)).unwrap();
    format!("{APP_URL}?token={}&sso=true", urlencoding::encode(&token))
}
