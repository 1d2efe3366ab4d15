use crate::error::osm_client::OsmClientError;
use crate::response::{OsmResponse, ResponseKind};

use serde::Deserialize;
use serde_json::json;

/// **VALUE**: Verifies content-type classification ignores media type parameters.
///
/// **WHY THIS MATTERS**: The API answers `application/json; charset=utf-8`. An exact-match
/// comparison would demote every JSON response to a raw response.
///
/// **BUG THIS CATCHES**: Would catch `from_content_type` switching from substring to
/// equality matching.
#[test]
fn given_json_with_charset_when_classifying_then_structured() {
    // GIVEN/WHEN: A JSON media type with a charset parameter
    let kind = ResponseKind::from_content_type("application/json; charset=utf-8");

    // THEN: Decoded as JSON
    assert_eq!(kind, ResponseKind::Structured);
}

#[test]
fn given_xml_with_charset_when_classifying_then_markup() {
    assert_eq!(
        ResponseKind::from_content_type("application/xml; charset=utf-8"),
        ResponseKind::Markup
    );
}

#[test]
fn given_uppercase_media_type_when_classifying_then_matches_case_insensitively() {
    assert_eq!(
        ResponseKind::from_content_type("Application/JSON"),
        ResponseKind::Structured
    );
}

/// **BUG THIS CATCHES**: Would catch `text/xml`, RSS feeds or GPX downloads being forced
/// through a text decode that callers do not expect.
#[test]
fn given_other_media_types_when_classifying_then_opaque() {
    for content_type in [
        "text/plain",
        "text/html; charset=utf-8",
        "application/rss+xml",
        "application/gpx+xml",
        "application/octet-stream",
        "",
    ] {
        assert_eq!(
            ResponseKind::from_content_type(content_type),
            ResponseKind::Opaque,
            "{content_type} should be opaque"
        );
    }
}

#[test]
fn given_json_response_when_converting_then_accessors_agree() {
    let response = OsmResponse::Json(json!({ "version": "0.6" }));

    assert_eq!(response.kind(), ResponseKind::Structured);
    assert!(response.as_xml().is_none());
    assert_eq!(response.as_json().map(|v| v["version"].clone()), Some(json!("0.6")));
}

/// **VALUE**: Verifies asking for the wrong variant is an error, not a panic.
///
/// **BUG THIS CATCHES**: Would catch `into_json` losing its error path, or reporting the
/// wrong actual kind.
#[test]
fn given_xml_response_when_taking_json_then_unexpected_response_error() {
    // GIVEN: An XML response
    let response = OsmResponse::Xml(String::from("<osm/>"));

    // WHEN: Taking it as JSON
    let result = response.into_json();

    // THEN: The error names both kinds
    match result {
        Err(OsmClientError::UnexpectedResponse {
            expected, actual, ..
        }) => {
            assert_eq!(expected, ResponseKind::Structured);
            assert_eq!(actual, ResponseKind::Markup);
        }
        other => panic!("expected UnexpectedResponse, got {other:?}"),
    }
}

#[test]
fn given_json_response_when_deserializing_then_typed_value_is_returned() {
    #[derive(Debug, Deserialize, PartialEq)]
    struct Versions {
        api: Vec<String>,
    }

    let response = OsmResponse::Json(json!({ "api": ["0.6"] }));

    let versions: Versions = response.deserialize().unwrap();

    assert_eq!(versions.api, vec![String::from("0.6")]);
}

#[test]
fn given_mismatched_shape_when_deserializing_then_json_error() {
    #[derive(Debug, Deserialize)]
    #[allow(dead_code)]
    struct Versions {
        api: Vec<String>,
    }

    let response = OsmResponse::Json(json!({ "api": 6 }));

    let result = response.deserialize::<Versions>();

    assert!(matches!(result, Err(OsmClientError::Json { .. })));
}
