use crate::config::ClientConfig;
use crate::endpoints::{misc, note, user};
use crate::error::config::ConfigError;
use crate::error::osm_client::OsmClientError;
use crate::{AccessToken, OSM_PRODUCTION_API_URL, OsmClient};

use osm_models::{BoundingBox, ReturnFormat};

/// **VALUE**: Verifies versioned and unversioned calls land under the right roots.
///
/// **WHY THIS MATTERS**: `versions` and `capabilities` live at `/api/`, everything else at
/// `/api/0.6/`. Mixing them up returns 404 for every call.
///
/// **BUG THIS CATCHES**: Would catch `Url::join` dropping the last base segment when the
/// base has no trailing slash.
#[test]
fn given_base_without_trailing_slash_when_resolving_then_version_is_inserted() {
    // GIVEN: A client for the production base
    let client = OsmClient::new(OSM_PRODUCTION_API_URL).unwrap();

    // WHEN: Resolving one endpoint of each scope
    let map = client
        .url_for(&misc::map(&BoundingBox::new(1.0, 2.0, 3.0, 4.0)))
        .unwrap();
    let versions = client.url_for(&misc::versions(ReturnFormat::Json)).unwrap();

    // THEN: Only the versioned call carries 0.6
    assert_eq!(
        map.as_str(),
        "https://api.openstreetmap.org/api/0.6/map?bbox=1,2,3,4"
    );
    assert_eq!(
        versions.as_str(),
        "https://api.openstreetmap.org/api/versions.json"
    );
}

#[test]
fn given_base_with_trailing_slash_when_resolving_then_no_double_slash() {
    let client = OsmClient::new("https://example.org/api/").unwrap();

    let url = client.url_for(&note::note(3, ReturnFormat::Xml)).unwrap();

    assert_eq!(url.as_str(), "https://example.org/api/0.6/notes/3");
}

#[test]
fn given_segment_with_reserved_characters_when_resolving_then_segment_is_escaped() {
    let client = OsmClient::new("https://example.org/api").unwrap();

    let url = client.url_for(&user::preference("a/b c")).unwrap();

    assert_eq!(
        url.as_str(),
        "https://example.org/api/0.6/user/preferences/a%2Fb%20c"
    );
}

#[test]
fn given_custom_api_version_when_resolving_then_version_segment_follows_config() {
    let config = ClientConfig {
        base_url: String::from("https://example.org/api"),
        api_version: String::from("0.7"),
        ..ClientConfig::default()
    };
    let client = OsmClient::with_config(&config).unwrap();

    assert_eq!(client.versioned_root().as_str(), "https://example.org/api/0.7/");
    assert_eq!(client.api_root().as_str(), "https://example.org/api/");
}

#[test]
fn given_unparseable_base_when_constructing_then_config_error() {
    let result = OsmClient::new("not a url");

    assert!(matches!(
        result,
        Err(OsmClientError::Config(ConfigError::ValidationError { .. }))
    ));
}

/// **VALUE**: Verifies code-built configs get the same validation as loaded ones.
///
/// **WHY THIS MATTERS**: An empty version makes the versioned root collapse to the host
/// root, so every call would silently go to `https://host/map` instead of `/api/0.6/map`.
///
/// **BUG THIS CATCHES**: Would catch `with_config` skipping `validate()` and building a
/// client that points at the wrong paths.
#[test]
fn given_empty_api_version_when_constructing_then_config_error() {
    // GIVEN: A config built in code with an empty version
    let config = ClientConfig {
        base_url: String::from("https://api.example.org/api"),
        api_version: String::new(),
        ..ClientConfig::default()
    };

    // WHEN: Building a client from it
    let result = OsmClient::with_config(&config);

    // THEN: Rejected before any URL is resolved
    match result {
        Err(OsmClientError::Config(ConfigError::ValidationError { reason, .. })) => {
            assert!(reason.contains("api_version"), "reason: {reason}")
        }
        other => panic!("expected a config validation error, got {other:?}"),
    }
}

/// **BUG THIS CATCHES**: Would catch a zero timeout producing a client whose every call
/// fails immediately.
#[test]
fn given_zero_timeout_when_constructing_then_config_error() {
    let config = ClientConfig {
        timeout_secs: Some(0),
        ..ClientConfig::default()
    };

    let result = OsmClient::with_config(&config);

    assert!(matches!(
        result,
        Err(OsmClientError::Config(ConfigError::ValidationError { .. }))
    ));
}

#[test]
fn given_non_http_base_when_constructing_then_config_error() {
    let result = OsmClient::new("ftp://api.example.org/api");

    assert!(matches!(result, Err(OsmClientError::Config(_))));
}

/// **BUG THIS CATCHES**: Would catch the token leaking through the client's Debug output,
/// which ends up in logs whenever a caller debug-prints the client.
#[test]
fn given_client_with_token_when_debug_printed_then_token_is_redacted() {
    let client = OsmClient::new("https://example.org/api")
        .unwrap()
        .with_access_token(AccessToken::new("super-secret-token"));

    let debug = format!("{client:?}");

    assert!(client.has_access_token());
    assert!(!debug.contains("super-secret-token"));
}
