use crate::{FederatedAuth, FederatedAuthError, FederatedUser, LocalFederatedAuth};

use std::sync::{Arc, Mutex};

use googletest::prelude::*;

fn user() -> FederatedUser {
    FederatedUser {
        uid: "fb-7".into(),
        email: Some("student@campus.edu".into()),
        display_name: Some("Student".into()),
    }
}

fn provider_with_account() -> LocalFederatedAuth {
    let provider = LocalFederatedAuth::new();
    provider.register("student@campus.edu", "hunter2", user());
    provider
}

#[test]
fn given_registered_account_when_sign_in_with_email_then_current_user_set() {
    let provider = provider_with_account();

    let signed_in = provider
        .sign_in_with_email("Student@Campus.edu", "hunter2")
        .unwrap();

    assert_that!(signed_in, eq(&user()));
    assert_that!(provider.current_user(), some(eq(&user())));
}

#[test]
fn given_bad_credentials_when_sign_in_with_email_then_provider_codes_reported() {
    let provider = provider_with_account();
    provider.register("blocked@campus.edu", "pw", user());
    provider.disable("blocked@campus.edu");

    let cases = [
        ("not-an-email", "hunter2", "auth/invalid-email"),
        ("nobody@campus.edu", "hunter2", "auth/user-not-found"),
        ("blocked@campus.edu", "pw", "auth/user-disabled"),
        ("student@campus.edu", "wrong", "auth/wrong-password"),
    ];

    for (email, password, expected) in cases {
        let err = provider.sign_in_with_email(email, password).unwrap_err();
        assert_that!(err.code(), some(eq(expected)));
    }
    assert_that!(provider.current_user(), none());
}

#[test]
fn given_known_code_when_user_message_then_friendly_text() {
    let err = FederatedAuthError::sign_in("auth/wrong-password");

    assert_that!(err.user_message(), eq("Incorrect password. Please try again."));
}

#[test]
fn given_unknown_code_when_user_message_then_generic_text() {
    let err = FederatedAuthError::sign_in("auth/something-new");

    assert_that!(
        err.user_message(),
        eq("An error occurred during sign-in. Please try again.")
    );
}

#[test]
fn given_subscriber_when_subscribe_then_called_immediately_with_current_state() {
    let provider = LocalFederatedAuth::new();
    provider.sign_in(user());
    let seen: Arc<Mutex<Vec<Option<String>>>> = Arc::default();
    let sink = Arc::clone(&seen);

    let _subscription = provider.subscribe(Box::new(move |u| {
        sink.lock().unwrap().push(u.map(|u| u.uid.clone()));
    }));

    assert_that!(*seen.lock().unwrap(), elements_are![some(eq("fb-7"))]);
}

#[test]
fn given_subscriber_when_sign_in_and_out_then_every_change_observed() {
    let provider = LocalFederatedAuth::new();
    let seen: Arc<Mutex<Vec<bool>>> = Arc::default();
    let sink = Arc::clone(&seen);
    let _subscription = provider.subscribe(Box::new(move |u| {
        sink.lock().unwrap().push(u.is_some());
    }));

    provider.sign_in(user());
    provider.sign_out().unwrap();

    assert_that!(*seen.lock().unwrap(), elements_are![eq(&false), eq(&true), eq(&false)]);
}

#[test]
fn given_dropped_subscription_when_state_changes_then_listener_not_called() {
    let provider = LocalFederatedAuth::new();
    let calls = Arc::new(Mutex::new(0));
    let sink = Arc::clone(&calls);
    let subscription = provider.subscribe(Box::new(move |_| {
        *sink.lock().unwrap() += 1;
    }));

    drop(subscription);
    provider.sign_in(user());

    assert_that!(*calls.lock().unwrap(), eq(1));
    assert_that!(provider.listener_count(), eq(0));
}

#[test]
fn given_dropped_provider_when_subscription_dropped_then_no_panic() {
    let provider = LocalFederatedAuth::new();
    let subscription = provider.subscribe(Box::new(|_| {}));

    drop(provider);
    drop(subscription);
}

#[test]
fn given_failing_sign_out_when_sign_out_then_error_and_user_kept() {
    let provider = LocalFederatedAuth::new();
    provider.sign_in(user());
    provider.fail_next_sign_out();

    let err = provider.sign_out().unwrap_err();

    assert_that!(err.user_message(), eq("Failed to sign out. Please try again."));
    assert_that!(provider.current_user(), some(anything()));

    assert_that!(provider.sign_out(), ok(anything()));
    assert_that!(provider.current_user(), none());
}
