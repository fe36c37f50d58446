use crate::Config;
use crate::tests::{EnvGuard, setup_config_dir, write_config};

use googletest::assert_that;
use googletest::prelude::{anything, contains_substring, eq, err, ok};
use serial_test::serial;

// =========================================================================
// Edge Cases
// =========================================================================

#[test]
#[serial]
fn given_malformed_toml_when_load_then_error_mentions_file() {
    // Given
    let (temp, _guard) = setup_config_dir();
    write_config(&temp, "this is not valid toml {{{{");

    // When
    let result = Config::load();

    // Then
    assert_that!(result, err(anything()));
    let err_msg = format!("{}", result.unwrap_err());
    assert_that!(err_msg, contains_substring("config.toml"));
}

#[test]
#[serial]
fn given_wrong_value_type_when_load_then_toml_error() {
    // Given
    let (temp, _guard) = setup_config_dir();
    write_config(
        &temp,
        r#"
            [session]
            fallback_on_invalid_token = "sometimes"
        "#,
    );

    // When
    let result = Config::load();

    // Then
    assert_that!(result, err(anything()));
}

#[test]
#[serial]
fn given_unknown_section_when_load_then_ignored() {
    // Given
    let (temp, _guard) = setup_config_dir();
    write_config(
        &temp,
        r#"
            [server]
            port = 9000
        "#,
    );

    // When
    let result = Config::load();

    // Then
    assert_that!(result, ok(anything()));
}

#[test]
#[serial]
fn given_storage_dir_with_traversal_when_validate_then_error() {
    // Given
    let _temp = setup_config_dir();
    let _dir = EnvGuard::set("ECS_STORAGE_DIR", "../../../etc");

    // When
    let config = Config::load().unwrap();
    let result = config.validate();

    // Then
    assert_that!(result, err(anything()));
    let err_msg = format!("{}", result.unwrap_err());
    assert_that!(err_msg, contains_substring(".."));
}

#[test]
#[serial]
fn given_invalid_bool_env_when_load_then_treated_as_false() {
    // Given
    let _temp = setup_config_dir();
    let _fallback = EnvGuard::set("ECS_SESSION_FALLBACK_ON_INVALID_TOKEN", "yes");

    // When
    let config = Config::load().unwrap();

    // Then
    assert_that!(config.session.fallback_on_invalid_token, eq(false));
}

#[test]
#[serial]
fn given_unparseable_log_level_env_when_load_then_previous_value_kept() {
    // Given
    let (temp, _guard) = setup_config_dir();
    write_config(
        &temp,
        r#"
            [logging]
            level = "warn"
        "#,
    );
    let _level = EnvGuard::set("ECS_LOG_LEVEL", "chatty");

    // When
    let config = Config::load().unwrap();

    // Then
    assert_that!(config.logging.level.to_string(), eq("warn"));
}

#[test]
#[serial]
fn given_empty_log_file_env_when_load_then_file_cleared() {
    // Given
    let (temp, _guard) = setup_config_dir();
    write_config(
        &temp,
        r#"
            [logging]
            file = "ecs.log"
        "#,
    );
    let _file = EnvGuard::set("ECS_LOG_FILE", "");

    // When
    let config = Config::load().unwrap();

    // Then
    assert_that!(config.logging.file.is_none(), eq(true));
    assert_that!(config.log_file_path().unwrap().is_none(), eq(true));
}

#[test]
#[serial]
fn given_invalid_origin_env_when_validate_then_error() {
    // Given
    let _temp = setup_config_dir();
    let _origin = EnvGuard::set("ECS_SESSION_DEFAULT_SHELL_ORIGIN", "bcombuddy.netlify.app");

    // When
    let result = Config::load().unwrap().validate();

    // Then
    assert_that!(result, err(anything()));
}
