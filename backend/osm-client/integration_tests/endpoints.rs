use crate::helpers::{JSON_WITH_CHARSET, XML_WITH_CHARSET, authenticated_client};

use osm_client::models::{
    ChangesetQuery, ElementKind, GpxUploadBuilder, NewNote, NoteSearch, ReturnFormat,
    TraceVisibility,
};

use serde_json::json;
use wiremock::matchers::{
    body_json, body_string, body_string_contains, header, header_regex, method, path,
    query_param,
};
use wiremock::{Mock, ResponseTemplate};

/// **VALUE**: Verifies a changeset comment travels as a URL-encoded form body.
///
/// **BUG THIS CATCHES**: Would catch the form encoding dropping the content type, or
/// escaping spaces as `%20` in a way the server stores literally.
#[tokio::test]
async fn given_comment_when_commenting_changeset_then_form_body_is_posted() {
    // GIVEN: A server expecting the comment form
    let (server, client) = authenticated_client().await;
    Mock::given(method("POST"))
        .and(path("/api/0.6/changeset/42/comment"))
        .and(header("content-type", "application/x-www-form-urlencoded"))
        .and(body_string("text=looks+good+%26+thanks"))
        .respond_with(ResponseTemplate::new(200).set_body_raw("<osm/>", XML_WITH_CHARSET))
        .expect(1)
        .mount(&server)
        .await;

    // WHEN: Commenting
    let response = client.comment_changeset(42, "looks good & thanks").await;

    // THEN: The mock matched
    assert!(response.is_ok());
}

#[tokio::test]
async fn given_xml_document_when_uploading_diff_then_xml_body_is_posted() {
    let (server, client) = authenticated_client().await;
    let diff = "<osmChange version=\"0.6\"/>";
    Mock::given(method("POST"))
        .and(path("/api/0.6/changeset/42/upload"))
        .and(header("content-type", "application/xml"))
        .and(body_string(diff))
        .respond_with(ResponseTemplate::new(200).set_body_raw("<diffResult/>", XML_WITH_CHARSET))
        .expect(1)
        .mount(&server)
        .await;

    let response = client.upload_changeset_diff(42, diff).await.unwrap();

    assert_eq!(response.as_xml(), Some("<diffResult/>"));
}

#[tokio::test]
async fn given_user_and_limit_when_querying_changesets_then_only_user_reaches_server() {
    let (server, client) = authenticated_client().await;
    Mock::given(method("GET"))
        .and(path("/api/0.6/changesets"))
        .and(query_param("user", "4711"))
        .respond_with(ResponseTemplate::new(200).set_body_raw("<osm/>", XML_WITH_CHARSET))
        .expect(1)
        .mount(&server)
        .await;

    let query = ChangesetQuery::default().with_user(4711).with_limit(10);
    client.query_changesets(&query).await.unwrap();

    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests[0].url.query(), Some("user=4711"));
}

#[tokio::test]
async fn given_ids_when_fetching_nodes_then_comma_list_is_not_encoded() {
    let (server, client) = authenticated_client().await;
    Mock::given(method("GET"))
        .and(path("/api/0.6/nodes"))
        .respond_with(ResponseTemplate::new(200).set_body_raw("<osm/>", XML_WITH_CHARSET))
        .expect(1)
        .mount(&server)
        .await;

    client.elements(ElementKind::Node, &[1, 2, 3]).await.unwrap();

    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests[0].url.query(), Some("nodes=1,2,3"));
}

/// **VALUE**: Verifies preference values are sent verbatim as plain text.
///
/// **BUG THIS CATCHES**: Would catch the value being wrapped in XML or quoted as JSON.
#[tokio::test]
async fn given_value_when_setting_preference_then_text_body_is_put() {
    let (server, client) = authenticated_client().await;
    Mock::given(method("PUT"))
        .and(path("/api/0.6/user/preferences/editor"))
        .and(header("content-type", "text/plain"))
        .and(body_string("josm"))
        .respond_with(ResponseTemplate::new(200).set_body_string(""))
        .expect(1)
        .mount(&server)
        .await;

    let response = client.set_preference("editor", "josm").await.unwrap();

    assert_eq!(response.into_raw().unwrap().status().as_u16(), 200);
}

#[tokio::test]
async fn given_new_note_when_creating_json_note_then_json_body_is_posted() {
    let (server, client) = authenticated_client().await;
    Mock::given(method("POST"))
        .and(path("/api/0.6/notes.json"))
        .and(header("content-type", "application/json"))
        .and(body_json(json!({ "lat": 51.5, "lon": -0.25, "text": "Missing bench" })))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_raw(r#"{"type":"Feature","properties":{"id":8}}"#, JSON_WITH_CHARSET),
        )
        .expect(1)
        .mount(&server)
        .await;

    let response = client
        .create_note_json(&NewNote::new(51.5, -0.25, "Missing bench"))
        .await
        .unwrap();

    assert_eq!(response.into_json().unwrap()["properties"]["id"], 8);
}

#[tokio::test]
async fn given_search_when_searching_notes_then_every_key_is_present() {
    let (server, client) = authenticated_client().await;
    Mock::given(method("GET"))
        .and(path("/api/0.6/notes/search"))
        .and(query_param("q", "bench"))
        .and(query_param("limit", "5"))
        .and(query_param("closed", ""))
        .and(query_param("order", ""))
        .respond_with(ResponseTemplate::new(200).set_body_raw("<osm/>", XML_WITH_CHARSET))
        .expect(1)
        .mount(&server)
        .await;

    let search = NoteSearch::default().with_text("bench").with_limit(5);
    client.search_notes(&search).await.unwrap();

    let requests = server.received_requests().await.unwrap();
    let keys: Vec<String> = requests[0]
        .url
        .query_pairs()
        .map(|(key, _)| key.into_owned())
        .collect();
    assert_eq!(
        keys,
        ["q", "limit", "closed", "display_name", "user", "from", "to", "sort", "order"]
    );
}

/// **VALUE**: Verifies a trace upload is a multipart form with every required part.
///
/// **WHY THIS MATTERS**: `gpx/create` rejects uploads missing the description or
/// visibility part with a bare 400.
///
/// **BUG THIS CATCHES**: Would catch a part being renamed or the tags losing their
/// comma-joined form.
#[tokio::test]
async fn given_trace_when_creating_gpx_then_multipart_parts_are_sent() {
    // GIVEN: A server expecting a multipart upload
    let (server, client) = authenticated_client().await;
    Mock::given(method("POST"))
        .and(path("/api/0.6/gpx/create"))
        .and(header_regex("content-type", "^multipart/form-data; boundary="))
        .and(body_string_contains("name=\"file\"; filename=\"walk.gpx\""))
        .and(body_string_contains("<gpx version=\"1.1\"/>"))
        .and(body_string_contains("Morning walk"))
        .and(body_string_contains("park,dog"))
        .and(body_string_contains("identifiable"))
        .respond_with(ResponseTemplate::new(200).set_body_string("77"))
        .expect(1)
        .mount(&server)
        .await;

    let upload = GpxUploadBuilder::default()
        .with_file_name("walk.gpx")
        .with_contents("<gpx version=\"1.1\"/>")
        .with_description("Morning walk")
        .with_tag("park")
        .with_tag("dog")
        .with_visibility(TraceVisibility::Identifiable)
        .build()
        .unwrap();

    // WHEN: Uploading
    let response = client.create_gpx(upload).await.unwrap();

    // THEN: The new trace id comes back as text
    assert_eq!(response.into_raw().unwrap().text().await.unwrap(), "77");
}

#[tokio::test]
async fn given_trace_id_when_deleting_gpx_then_delete_without_body() {
    let (server, client) = authenticated_client().await;
    Mock::given(method("DELETE"))
        .and(path("/api/0.6/gpx/77"))
        .respond_with(ResponseTemplate::new(200).set_body_string(""))
        .expect(1)
        .mount(&server)
        .await;

    client.delete_gpx(77).await.unwrap();

    let requests = server.received_requests().await.unwrap();
    assert!(requests[0].body.is_empty());
    assert!(!requests[0].headers.contains_key("content-type"));
}

#[tokio::test]
async fn given_hide_text_when_hiding_note_then_delete_with_text_parameter() {
    let (server, client) = authenticated_client().await;
    Mock::given(method("DELETE"))
        .and(path("/api/0.6/notes/8"))
        .and(query_param("text", "spam"))
        .respond_with(ResponseTemplate::new(200).set_body_raw("<osm/>", XML_WITH_CHARSET))
        .expect(1)
        .mount(&server)
        .await;

    client.hide_note(8, "spam").await.unwrap();
}

#[tokio::test]
async fn given_json_format_when_reading_user_then_json_suffix_on_path() {
    let (server, client) = authenticated_client().await;
    Mock::given(method("GET"))
        .and(path("/api/0.6/user/5.json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "user": { "id": 5 } })))
        .expect(1)
        .mount(&server)
        .await;

    let response = client.user(5, ReturnFormat::Json).await.unwrap();

    assert_eq!(response.into_json().unwrap()["user"]["id"], 5);
}
