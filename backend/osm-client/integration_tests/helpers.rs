//! Test helpers for HTTP integration tests.
//!
//! Every test gets its own wiremock server; the client is pointed at
//! `{server}/api` so request paths read exactly like production ones.

use osm_client::{AccessToken, OsmClient};

use wiremock::MockServer;

pub const TEST_ACCESS_TOKEN: &str = "test-token-12345";

pub const JSON_WITH_CHARSET: &str = "application/json; charset=utf-8";
pub const XML_WITH_CHARSET: &str = "application/xml; charset=utf-8";

/// Start a mock server and an anonymous client aimed at it.
pub async fn anonymous_client() -> (MockServer, OsmClient) {
    let server = MockServer::start().await;
    let client = OsmClient::new(&api_base(&server)).expect("client for mock server");
    (server, client)
}

/// Start a mock server and a client carrying [`TEST_ACCESS_TOKEN`].
pub async fn authenticated_client() -> (MockServer, OsmClient) {
    let (server, client) = anonymous_client().await;
    (
        server,
        client.with_access_token(AccessToken::new(TEST_ACCESS_TOKEN)),
    )
}

fn api_base(server: &MockServer) -> String {
    format!("{}/api", server.uri())
}
