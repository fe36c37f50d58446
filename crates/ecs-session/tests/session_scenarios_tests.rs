mod common;

use common::{
    APP_URL, FAR_FUTURE, create_launch_url, create_test_app, create_test_app_with_storage,
    create_test_record,
};

use ecs_session::{
    FederatedAuth, FederatedUser, MemoryStorage, PageUrl, ResolutionSource, SessionState,
    SessionStore,
};

use std::sync::Arc;

use googletest::prelude::*;

#[test]
fn given_valid_launch_url_when_resolved_then_authenticated_and_url_cleaned() {
    // Given: The shell opened the simulator with a fresh token
    let record = create_test_record();
    let mut app = create_test_app(&create_launch_url(&record, FAR_FUTURE));

    // When: The page resolves its session
    app.gate.resolve().unwrap();

    // Then: The token identity is signed in and the URL no longer carries it
    assert_that!(
        app.gate.state(),
        eq(&SessionState::Authenticated {
            identity: record.clone(),
            source: ResolutionSource::Token,
        })
    );
    let visible = app.browser.replacements().pop().unwrap();
    assert_that!(visible.has_param("token"), eq(false));
    assert_that!(visible.has_param("sso"), eq(false));
    assert_that!(visible.to_string(), eq(APP_URL));
}

#[test]
fn given_expired_token_and_stored_record_when_resolved_then_stored_record_used() {
    // Given: An earlier visit left a record behind
    let storage = Arc::new(MemoryStorage::new());
    let mut stored = create_test_record();
    stored.uid = "earlier".to_string();
    SessionStore::with_default_key(storage.clone())
        .persist(&stored)
        .unwrap();

    let mut expired = create_test_record();
    expired.uid = "expired".to_string();
    let mut app = create_test_app_with_storage(&create_launch_url(&expired, 1_000), storage);

    // When
    app.gate.resolve().unwrap();

    // Then: The fallback fires and the expired identity is nowhere
    assert_that!(app.gate.source(), some(eq(ResolutionSource::Store)));
    assert_that!(app.gate.identity(), some(eq(&stored)));
    assert_that!(app.store.read(), some(eq(&stored)));
}

#[test]
fn given_no_token_empty_store_and_no_federated_session_when_resolved_then_unauthenticated() {
    // Given
    let mut app = create_test_app(APP_URL);

    // When
    app.gate.resolve().unwrap();

    // Then
    assert_that!(app.gate.state(), eq(&SessionState::Unauthenticated));
    let signals = app.gate.signals();
    assert_that!(signals.sso_identity, none());
    assert_that!(signals.federated_active, eq(false));
    assert_that!(signals.has_access(), eq(false));
}

#[test]
fn given_stored_shell_domain_when_logout_then_browser_leaves_for_shell() {
    // Given
    let mut record = create_test_record();
    record.shell_domain = Some("https://example.org".to_string());
    let mut app = create_test_app(APP_URL);
    app.store.persist(&record).unwrap();
    app.gate.resolve().unwrap();

    // When
    app.gate.logout().unwrap();

    // Then
    assert_that!(
        app.browser.navigations(),
        elements_are![eq("https://example.org")]
    );
    assert_that!(app.storage.is_empty(), eq(true));
    assert_that!(app.gate.is_authenticated(), eq(false));
}

#[test]
fn given_federated_sign_in_after_resolution_when_signals_read_then_access_granted() {
    // Given: Nobody arrived via SSO
    let mut app = create_test_app(APP_URL);
    app.gate.resolve().unwrap();

    // When: The user signs in through the provider instead
    app.provider.sign_in(FederatedUser {
        uid: "fb-1".to_string(),
        email: None,
        display_name: None,
    });

    // Then: Only the federated signal changes
    let signals = app.gate.signals();
    assert_that!(signals.federated_active, eq(true));
    assert_that!(signals.sso_identity, none());
    assert_that!(signals.has_access(), eq(true));
    assert_that!(app.gate.state(), eq(&SessionState::Unauthenticated));
}

#[test]
fn given_both_sessions_when_provider_signs_out_then_sso_session_kept() {
    // Given
    let record = create_test_record();
    let mut app = create_test_app(&create_launch_url(&record, FAR_FUTURE));
    app.gate.resolve().unwrap();
    app.provider.sign_in(FederatedUser {
        uid: "fb-1".to_string(),
        email: Some("a@b.com".to_string()),
        display_name: None,
    });

    // When
    app.provider.sign_out().unwrap();

    // Then
    assert_that!(app.gate.federated_active(), eq(false));
    assert_that!(app.gate.identity(), some(eq(&record)));
    assert_that!(app.store.read(), some(eq(&record)));
}

#[test]
fn given_reload_after_token_login_when_resolved_then_restored_from_store() {
    // Given: First page load consumes the token
    let record = create_test_record();
    let storage = Arc::new(MemoryStorage::new());
    let mut first =
        create_test_app_with_storage(&create_launch_url(&record, FAR_FUTURE), storage.clone());
    first.gate.resolve().unwrap();
    let cleaned: PageUrl = first.browser.replacements().pop().unwrap();

    // When: The cleaned URL is loaded again
    let mut second = create_test_app_with_storage(&cleaned.to_string(), storage);
    second.gate.resolve().unwrap();

    // Then
    assert_that!(second.gate.source(), some(eq(ResolutionSource::Store)));
    assert_that!(second.gate.identity(), some(eq(&record)));
}
