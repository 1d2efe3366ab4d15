use crate::helpers::{
    JSON_WITH_CHARSET, TEST_ACCESS_TOKEN, XML_WITH_CHARSET, anonymous_client,
    authenticated_client,
};

use osm_client::models::{BoundingBox, ElementKind, ReturnFormat};
use osm_client::{DEFAULT_USER_AGENT, OsmResponse, ResponseKind};

use serde_json::json;
use serial_test::serial;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, ResponseTemplate};

/// **VALUE**: Verifies a JSON response with a charset parameter is decoded to a JSON value.
///
/// **WHY THIS MATTERS**: This is the shape of nearly every `.json` answer from the real API.
///
/// **BUG THIS CATCHES**: Would catch exact media-type matching, which would hand back a
/// raw response for every JSON call.
#[tokio::test]
async fn given_json_content_type_with_charset_when_dispatching_then_json_value() {
    // GIVEN: A server answering /api/versions.json with JSON
    let (server, client) = anonymous_client().await;
    Mock::given(method("GET"))
        .and(path("/api/versions.json"))
        .respond_with(
            ResponseTemplate::new(200).set_body_raw(r#"{"api":{"versions":["0.6"]}}"#, JSON_WITH_CHARSET),
        )
        .expect(1)
        .mount(&server)
        .await;

    // WHEN: Requesting versions
    let response = client.versions(ReturnFormat::Json).await.unwrap();

    // THEN: Decoded JSON
    assert_eq!(response.kind(), ResponseKind::Structured);
    assert_eq!(
        response.into_json().unwrap(),
        json!({ "api": { "versions": ["0.6"] } })
    );
}

#[tokio::test]
async fn given_xml_content_type_when_dispatching_then_text_is_returned_unparsed() {
    let (server, client) = anonymous_client().await;
    let document = r#"<osm version="0.6"><bounds minlat="2" minlon="1" maxlat="4" maxlon="3"/></osm>"#;
    Mock::given(method("GET"))
        .and(path("/api/0.6/map"))
        .and(query_param("bbox", "1,2,3,4"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(document, XML_WITH_CHARSET))
        .expect(1)
        .mount(&server)
        .await;

    let response = client
        .map(&BoundingBox::new(1.0, 2.0, 3.0, 4.0))
        .await
        .unwrap();

    assert_eq!(response.into_xml().unwrap(), document);
}

/// **VALUE**: Verifies other media types come back as the raw response.
///
/// **BUG THIS CATCHES**: Would catch plain-text answers (new changeset ids, element
/// versions) being forced through a JSON decode and failing.
#[tokio::test]
async fn given_text_plain_when_dispatching_then_raw_response_with_body_intact() {
    // GIVEN: changeset/create answering with the new id as plain text
    let (server, client) = authenticated_client().await;
    Mock::given(method("PUT"))
        .and(path("/api/0.6/changeset/create"))
        .respond_with(ResponseTemplate::new(200).set_body_string("1234"))
        .expect(1)
        .mount(&server)
        .await;

    // WHEN: Creating a changeset
    let response = client.create_changeset("<osm/>").await.unwrap();

    // THEN: The raw response is handed back and still readable
    let raw = response.into_raw().unwrap();
    assert_eq!(raw.status().as_u16(), 200);
    assert_eq!(raw.text().await.unwrap(), "1234");
}

/// **VALUE**: Verifies error statuses are passed through, not turned into errors.
///
/// **WHY THIS MATTERS**: OSM error bodies explain conflicts and precondition failures;
/// callers need them.
///
/// **BUG THIS CATCHES**: Would catch `error_for_status()` sneaking into the dispatcher.
#[tokio::test]
async fn given_not_found_with_xml_body_when_dispatching_then_body_is_returned() {
    let (server, client) = anonymous_client().await;
    Mock::given(method("GET"))
        .and(path("/api/0.6/node/999999"))
        .respond_with(ResponseTemplate::new(404).set_body_raw("<error/>", XML_WITH_CHARSET))
        .mount(&server)
        .await;

    let response = client
        .element(ElementKind::Node, 999_999, ReturnFormat::Xml)
        .await
        .unwrap();

    assert_eq!(response.as_xml(), Some("<error/>"));
}

#[tokio::test]
async fn given_token_when_dispatching_then_bearer_header_is_sent() {
    let (server, client) = authenticated_client().await;
    Mock::given(method("GET"))
        .and(path("/api/0.6/permissions.json"))
        .and(header("authorization", format!("Bearer {TEST_ACCESS_TOKEN}").as_str()))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "permissions": [] })))
        .expect(1)
        .mount(&server)
        .await;

    let response = client.permissions(ReturnFormat::Json).await.unwrap();

    assert!(matches!(response, OsmResponse::Json(_)));
}

#[tokio::test]
async fn given_anonymous_client_when_dispatching_then_no_authorization_header() {
    let (server, client) = anonymous_client().await;
    Mock::given(method("GET"))
        .and(path("/api/0.6/permissions.json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "permissions": [] })))
        .expect(1)
        .mount(&server)
        .await;

    client.permissions(ReturnFormat::Json).await.unwrap();

    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1);
    assert!(!requests[0].headers.contains_key("authorization"));
}

#[tokio::test]
async fn given_default_config_when_dispatching_then_user_agent_identifies_client() {
    let (server, client) = anonymous_client().await;
    Mock::given(method("GET"))
        .and(path("/api/capabilities"))
        .and(header("user-agent", DEFAULT_USER_AGENT))
        .respond_with(ResponseTemplate::new(200).set_body_raw("<osm/>", XML_WITH_CHARSET))
        .expect(1)
        .mount(&server)
        .await;

    client.capabilities(ReturnFormat::Xml).await.unwrap();
}

/// **VALUE**: Verifies a client built from a config directory talks to the configured base
/// with the token from the configured variable.
///
/// **BUG THIS CATCHES**: Would catch `from_config_dir` ignoring `access_token_env` or the
/// configured `user_agent`.
#[tokio::test]
#[serial]
async fn given_config_dir_when_building_client_then_base_agent_and_token_are_applied() {
    // GIVEN: A config file pointing at the mock server
    let server = wiremock::MockServer::start().await;
    let dir = tempfile::TempDir::new().unwrap();
    std::fs::write(
        dir.path().join("osm-client.toml"),
        format!(
            "base_url = \"{}/api\"\nuser_agent = \"integration-test/1.0\"\naccess_token_env = \"OSM_CLIENT_IT_CONFIG_TOKEN\"\n",
            server.uri()
        ),
    )
    .unwrap();
    unsafe { std::env::set_var("OSM_CLIENT_IT_CONFIG_TOKEN", "config-token") };

    Mock::given(method("GET"))
        .and(path("/api/0.6/user/details.json"))
        .and(header("user-agent", "integration-test/1.0"))
        .and(header("authorization", "Bearer config-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "user": { "id": 1 } })))
        .expect(1)
        .mount(&server)
        .await;

    // WHEN: Building the client from the directory and calling it
    let client = osm_client::OsmClient::from_config_dir(dir.path()).unwrap();
    let response = client.user_details(ReturnFormat::Json).await;

    // THEN: The mock matched
    assert!(client.has_access_token());
    assert!(response.is_ok());

    unsafe { std::env::remove_var("OSM_CLIENT_IT_CONFIG_TOKEN") };
}
