use crate::config::ClientConfig;
use crate::error::config::ConfigError;
use crate::{DEFAULT_ACCESS_TOKEN_ENV, DEFAULT_USER_AGENT, OSM_API_VERSION, OSM_DEV_API_URL};

use std::fs;

use tempfile::TempDir;

fn write_config(dir: &TempDir, contents: &str) {
    fs::write(dir.path().join("osm-client.toml"), contents).unwrap();
}

/// **VALUE**: Verifies a missing config file is not an error.
///
/// **WHY THIS MATTERS**: First runs have no config file. Failing there would force every
/// caller to ship one just to talk to the sandbox.
///
/// **BUG THIS CATCHES**: Would catch `load` reading the file unconditionally and
/// surfacing the `NotFound` I/O error.
#[test]
fn given_no_config_file_when_loading_then_defaults_are_used() {
    // GIVEN: An empty directory
    let dir = TempDir::new().unwrap();

    // WHEN: Loading
    let config = ClientConfig::load(dir.path()).unwrap();

    // THEN: Every field has its default
    assert_eq!(config, ClientConfig::default());
    assert_eq!(config.base_url, OSM_DEV_API_URL);
    assert_eq!(config.api_version, OSM_API_VERSION);
    assert_eq!(config.user_agent, DEFAULT_USER_AGENT);
    assert_eq!(config.timeout_secs, None);
    assert_eq!(config.access_token_env, DEFAULT_ACCESS_TOKEN_ENV);
}

#[test]
fn given_partial_config_file_when_loading_then_missing_fields_default() {
    let dir = TempDir::new().unwrap();
    write_config(
        &dir,
        r#"
base_url = "https://api.openstreetmap.org/api"
timeout_secs = 30
"#,
    );

    let config = ClientConfig::load(dir.path()).unwrap();

    assert_eq!(config.base_url, "https://api.openstreetmap.org/api");
    assert_eq!(config.timeout_secs, Some(30));
    assert_eq!(config.api_version, OSM_API_VERSION);
    assert_eq!(config.user_agent, DEFAULT_USER_AGENT);
}

/// **BUG THIS CATCHES**: Would catch malformed TOML silently falling back to defaults,
/// which would point a production deployment at the sandbox.
#[test]
fn given_malformed_toml_when_loading_then_parse_error() {
    let dir = TempDir::new().unwrap();
    write_config(&dir, "base_url = [not toml");

    let result = ClientConfig::load(dir.path());

    assert!(matches!(result, Err(ConfigError::ParseError { .. })));
}

#[test]
fn given_non_http_base_url_when_loading_then_validation_error() {
    let dir = TempDir::new().unwrap();
    write_config(&dir, r#"base_url = "ftp://example.org/api""#);

    let result = ClientConfig::load(dir.path());

    match result {
        Err(ConfigError::ValidationError { reason, .. }) => {
            assert!(reason.contains("base_url"), "reason: {reason}")
        }
        other => panic!("expected ValidationError, got {other:?}"),
    }
}

#[test]
fn given_zero_timeout_when_validating_then_error() {
    let config = ClientConfig {
        timeout_secs: Some(0),
        ..ClientConfig::default()
    };

    assert!(matches!(
        config.validate(),
        Err(ConfigError::ValidationError { .. })
    ));
}

#[test]
fn given_blank_user_agent_or_version_when_validating_then_error() {
    let blank_agent = ClientConfig {
        user_agent: String::from("   "),
        ..ClientConfig::default()
    };
    let blank_version = ClientConfig {
        api_version: String::from("/"),
        ..ClientConfig::default()
    };

    assert!(blank_agent.validate().is_err());
    assert!(blank_version.validate().is_err());
}
