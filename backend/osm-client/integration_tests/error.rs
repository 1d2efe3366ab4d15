use crate::helpers::anonymous_client;

use osm_client::OsmClient;
use osm_client::error::osm_client::OsmClientError;
use osm_client::models::ReturnFormat;

use std::net::TcpListener;

use wiremock::matchers::{method, path};
use wiremock::{Mock, ResponseTemplate};

/// **VALUE**: Verifies a response without `Content-Type` is the dispatcher's own error.
///
/// **WHY THIS MATTERS**: With no declared type there is no safe decoding; guessing would
/// hand callers JSON errors for what was really an empty reply.
///
/// **BUG THIS CATCHES**: Would catch the dispatcher defaulting to raw or text on a
/// missing header.
#[tokio::test]
async fn given_response_without_content_type_when_dispatching_then_missing_content_type() {
    // GIVEN: A server answering with an empty 204
    let (server, client) = anonymous_client().await;
    Mock::given(method("PUT"))
        .and(path("/api/0.6/changeset/9/close"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    // WHEN: Closing the changeset
    let result = client.close_changeset(9).await;

    // THEN: MissingContentType names the request
    match result {
        Err(OsmClientError::MissingContentType { method, url, .. }) => {
            assert_eq!(method, "PUT");
            assert!(url.ends_with("/api/0.6/changeset/9/close"), "url: {url}");
        }
        other => panic!("expected MissingContentType, got {other:?}"),
    }
}

/// **VALUE**: Verifies the dispatcher's error message carries a source location.
///
/// **BUG THIS CATCHES**: Would catch the Display format losing the `{location}` suffix.
#[tokio::test]
async fn given_missing_content_type_error_when_formatted_then_includes_location() {
    let (server, client) = anonymous_client().await;
    Mock::given(method("GET"))
        .and(path("/api/0.6/gpx/1/data"))
        .respond_with(ResponseTemplate::new(204))
        .mount(&server)
        .await;

    let error = client.gpx_data(1).await.unwrap_err();
    let message = error.to_string();

    assert!(message.contains("Missing Content Type Error"), "{message}");
    assert!(message.contains("GET"), "{message}");
    assert!(message.contains(".rs:"), "{message}");
}

/// **BUG THIS CATCHES**: Would catch transport failures panicking instead of surfacing as
/// `OsmClientError::Http`.
#[tokio::test]
async fn given_server_gone_when_dispatching_then_http_error() {
    // GIVEN: A client for a port nothing listens on
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let port = listener.local_addr().unwrap().port();
    drop(listener);
    let client = OsmClient::new(&format!("http://127.0.0.1:{port}/api")).unwrap();

    // WHEN: Making any call
    let result = client.versions(ReturnFormat::Json).await;

    // THEN: A transport error
    assert!(matches!(result, Err(OsmClientError::Http { .. })));
}
