use crate::SessionConfig;

use googletest::assert_that;
use googletest::prelude::{anything, contains_substring, err, ok};

fn config_with(origin: &str, key: &str) -> SessionConfig {
    SessionConfig {
        default_shell_origin: origin.to_string(),
        storage_key: key.to_string(),
        ..SessionConfig::default()
    }
}

#[test]
fn given_default_session_config_when_validate_then_ok() {
    assert_that!(SessionConfig::default().validate(), ok(anything()));
}

#[test]
fn given_http_and_https_origins_when_validate_then_ok() {
    for origin in ["https://shell.example", "http://localhost:8080"] {
        assert_that!(config_with(origin, "user_data").validate(), ok(anything()));
    }
}

#[test]
fn given_relative_or_foreign_origin_when_validate_then_error() {
    for origin in [
        "shell.example",
        "ftp://shell.example",
        "javascript:alert(1)",
        "https://",
        "https://exa mple.example",
        "",
    ] {
        let result = config_with(origin, "user_data").validate();

        assert_that!(result, err(anything()));
        let err_msg = result.unwrap_err().to_string();
        assert_that!(err_msg, contains_substring("default_shell_origin"));
    }
}

#[test]
fn given_empty_storage_key_when_validate_then_error() {
    // Given
    let config = config_with("https://shell.example", "");

    // When
    let result = config.validate();

    // Then
    assert_that!(result, err(anything()));
    let err_msg = result.unwrap_err().to_string();
    assert_that!(err_msg, contains_substring("storage_key"));
}

#[test]
fn given_storage_key_with_path_characters_when_validate_then_error() {
    for key in ["../user", "a/b", "user data", ".hidden"] {
        let result = config_with("https://shell.example", key).validate();

        assert_that!(result, err(anything()));
    }
}

#[test]
fn given_storage_key_with_allowed_punctuation_when_validate_then_ok() {
    let config = config_with("https://shell.example", "sim-user_v2.json");

    assert_that!(config.validate(), ok(anything()));
}
