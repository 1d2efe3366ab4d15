use crate::auth::token_from_env;

use serial_test::serial;

const TEST_TOKEN_ENV: &str = "OSM_CLIENT_TEST_ACCESS_TOKEN";

/// **VALUE**: Verifies the token is trimmed before use.
///
/// **WHY THIS MATTERS**: Tokens pasted into `.env` files often carry a trailing newline or
/// space; sent verbatim the bearer header is rejected with 401.
///
/// **BUG THIS CATCHES**: Would catch the trim being dropped from `token_from_env`.
#[test]
#[serial]
fn given_padded_token_in_env_when_reading_then_trimmed_token_is_returned() {
    // GIVEN: A token with surrounding whitespace
    unsafe { std::env::set_var(TEST_TOKEN_ENV, "  abc123 \n") };

    // WHEN: Reading it
    let token = token_from_env(TEST_TOKEN_ENV);

    // THEN: Whitespace is gone
    assert_eq!(token.as_ref().map(|t| t.as_str()), Some("abc123"));

    unsafe { std::env::remove_var(TEST_TOKEN_ENV) };
}

#[test]
#[serial]
fn given_blank_token_in_env_when_reading_then_none() {
    unsafe { std::env::set_var(TEST_TOKEN_ENV, "   ") };

    assert!(token_from_env(TEST_TOKEN_ENV).is_none());

    unsafe { std::env::remove_var(TEST_TOKEN_ENV) };
}

#[test]
#[serial]
fn given_unset_env_var_when_reading_then_none() {
    unsafe { std::env::remove_var(TEST_TOKEN_ENV) };

    assert!(token_from_env(TEST_TOKEN_ENV).is_none());
}
