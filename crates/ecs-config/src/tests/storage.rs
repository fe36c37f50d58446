use crate::StorageConfig;

use googletest::assert_that;
use googletest::prelude::{anything, contains_substring, err, ok};

#[test]
fn given_default_storage_config_when_validate_then_ok() {
    assert_that!(StorageConfig::default().validate(), ok(anything()));
}

#[test]
fn given_nested_relative_dir_when_validate_then_ok() {
    let config = StorageConfig {
        dir: "profiles/default".to_string(),
    };

    assert_that!(config.validate(), ok(anything()));
}

#[test]
fn given_absolute_dir_when_validate_then_error() {
    // Given
    let config = StorageConfig {
        dir: "/var/lib/ecs".to_string(),
    };

    // When
    let result = config.validate();

    // Then
    assert_that!(result, err(anything()));
    let err_msg = result.unwrap_err().to_string();
    assert_that!(err_msg, contains_substring("relative"));
}

#[test]
fn given_blank_dir_when_validate_then_error() {
    let config = StorageConfig {
        dir: "   ".to_string(),
    };

    assert_that!(config.validate(), err(anything()));
}
