use crate::AccessToken;

/// **VALUE**: Ensures the bearer token never shows up in `{:?}` output.
///
/// **WHY THIS MATTERS**: `OsmClient` derives `Debug` and is routinely logged while
/// troubleshooting requests. A token printed there ends up in log files.
///
/// **BUG THIS CATCHES**: Would catch someone replacing the manual `Debug` impl with a derive.
#[test]
fn given_access_token_when_debug_formatted_then_value_is_redacted() {
    let token = AccessToken::new("secret-bearer-value");

    let debug = format!("{token:?}");
    let display = format!("{token}");

    assert!(!debug.contains("secret-bearer-value"));
    assert!(!display.contains("secret-bearer-value"));
    assert_eq!(debug, "AccessToken([REDACTED])");
}

#[test]
fn given_access_token_when_as_str_then_returns_raw_value() {
    let token = AccessToken::new("abc123");

    assert_eq!(token.as_str(), "abc123");
    assert_eq!(token.len(), 6);
    assert!(!token.is_empty());
}

/// **VALUE**: Verifies that serializing a token fails instead of writing the secret.
///
/// **BUG THIS CATCHES**: Would catch the `Serialize` impl being removed or turned into a
/// pass-through, which would let a config dump leak the token.
#[test]
fn given_access_token_when_serialized_then_returns_error() {
    let token = AccessToken::new("abc123");

    let result = serde_json::to_string(&token);

    let err = result.expect_err("serialization must be refused");
    let message = err.to_string();
    assert!(message.contains("AccessToken cannot be serialized"), "{message}");
    assert!(message.contains("as_str()"), "{message}");
    assert!(!message.contains("abc123"), "{message}");
}
