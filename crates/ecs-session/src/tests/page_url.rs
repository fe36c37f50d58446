use crate::{PageUrl, SessionError};

use googletest::prelude::*;

#[test]
fn given_url_without_query_when_parse_then_no_params() {
    let url = PageUrl::parse("https://simulator.example/app").unwrap();

    assert_that!(url.query_param("token"), none());
    assert_that!(url.to_string(), eq("https://simulator.example/app"));
}

#[test]
fn given_relative_or_empty_address_when_parse_then_invalid_url() {
    for input in ["", "/app?token=x", "not a url"] {
        let result = PageUrl::parse(input);

        assert!(
            matches!(result, Err(SessionError::InvalidUrl { .. })),
            "{input:?} must be rejected"
        );
    }
}

#[test]
fn given_encoded_values_when_query_param_then_decoded_once() {
    let url = PageUrl::parse("https://s.example/?name=Jane+Doe&next=%2Fmodules%3Fid%3D1").unwrap();

    assert_that!(url.query_param("name"), some(eq("Jane Doe")));
    assert_that!(url.query_param("next"), some(eq("/modules?id=1")));
}

#[test]
fn given_repeated_param_when_query_param_then_first_wins() {
    let url = PageUrl::parse("https://s.example/?sso=false&sso=true").unwrap();

    assert_that!(url.query_param("sso"), some(eq("false")));
}

#[test]
fn given_param_without_value_when_parse_then_empty_value() {
    let url = PageUrl::parse("https://s.example/?debug&x=1").unwrap();

    assert_that!(url.has_param("debug"), eq(true));
    assert_that!(url.query_param("debug"), some(eq("")));
}

#[test]
fn given_all_params_removed_when_display_then_no_question_mark() {
    let url = PageUrl::parse("https://s.example/app?token=abc&sso=true#module2").unwrap();

    let cleaned = url.without_params(&["token", "sso"]);

    assert_that!(cleaned.to_string(), eq("https://s.example/app#module2"));
}

#[test]
fn given_duplicate_params_when_without_params_then_every_occurrence_removed() {
    let url = PageUrl::parse("https://s.example/?token=a&keep=1&token=b").unwrap();

    let cleaned = url.without_params(&["token"]);

    assert_that!(cleaned.has_param("token"), eq(false));
    assert_that!(cleaned.to_string(), eq("https://s.example/?keep=1"));
}

#[test]
fn given_encoded_key_when_without_params_then_matched_after_decoding() {
    let url = PageUrl::parse("https://s.example/?%74oken=a&keep=%FF").unwrap();

    let cleaned = url.without_params(&["token"]);

    assert_that!(cleaned.to_string(), eq("https://s.example/?keep=%FF"));
}

#[test]
fn given_value_needing_escapes_when_display_then_reparses_to_same_value() {
    let url = PageUrl::parse("https://s.example/")
        .unwrap()
        .with_param("token", "{\"a\":\"b c&d\"}");

    let reparsed = PageUrl::parse(&url.to_string()).unwrap();

    assert_that!(reparsed.query_param("token"), some(eq("{\"a\":\"b c&d\"}")));
}

#[test]
fn given_existing_query_when_with_param_then_appended_after_it() {
    let url = PageUrl::parse("https://s.example/app?tab=2")
        .unwrap()
        .with_param("sso", "true");

    assert_that!(url.as_str(), eq("https://s.example/app?tab=2&sso=true"));
}
