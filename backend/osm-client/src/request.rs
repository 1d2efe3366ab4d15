//! Endpoint descriptors: what to send, before anything touches the network.
//!
//! An [`Endpoint`] is built fresh per call by the functions in
//! [`crate::endpoints`] and consumed by [`crate::OsmClient::dispatch`]. The
//! body variant fixes the `Content-Type` header, so no endpoint sets headers
//! by hand.

use crate::error::osm_client::OsmClientError;

use osm_models::{GpxUpload, ReturnFormat};

use reqwest::header::CONTENT_TYPE;
use reqwest::multipart::{Form, Part};
use reqwest::{Method, RequestBuilder};
use serde_json::Value;
use url::form_urlencoded;

pub const XML_CONTENT_TYPE: &str = "application/xml";
pub const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";
pub const TEXT_CONTENT_TYPE: &str = "text/plain";
pub const JSON_CONTENT_TYPE: &str = "application/json";
pub const MULTIPART_CONTENT_TYPE: &str = "multipart/form-data";

const GPX_MIME_TYPE: &str = "application/gpx+xml";
const QUERY_LIST_SEPARATOR: char = ',';

/// Which root an endpoint path is resolved against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiScope {
    /// `<base>/` (e.g. `/api/versions`).
    Root,
    /// `<base>/<version>/` (e.g. `/api/0.6/map`).
    Versioned,
}

/// Ordered query parameters.
///
/// Pairs are emitted in insertion order. Values are form-urlencoded except
/// for commas, which stay literal so list values read `bbox=1,2,3,4`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams {
    pairs: Vec<(String, String)>,
}

impl QueryParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, key: impl Into<String>, value: impl ToString) {
        self.pairs.push((key.into(), value.to_string()));
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.pairs.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// `key=value&key=value`, without a leading `?`.
    pub fn encode(&self) -> String {
        self.pairs
            .iter()
            .map(|(key, value)| format!("{}={}", encode_component(key), encode_component(value)))
            .collect::<Vec<_>>()
            .join("&")
    }
}

impl<K, V> FromIterator<(K, V)> for QueryParams
where
    K: Into<String>,
    V: ToString,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut params = QueryParams::new();
        for (key, value) in iter {
            params.push(key, value);
        }
        params
    }
}

fn encode_component(component: &str) -> String {
    component
        .split(QUERY_LIST_SEPARATOR)
        .map(|piece| form_urlencoded::byte_serialize(piece.as_bytes()).collect::<String>())
        .collect::<Vec<_>>()
        .join(",")
}

/// Request payload; the variant decides the `Content-Type` header.
#[derive(Debug)]
pub enum RequestBody {
    Empty,
    /// OSM XML document (`application/xml`).
    Xml(String),
    /// URL-encoded form fields (`application/x-www-form-urlencoded`).
    Form(Vec<(String, String)>),
    /// Plain text (`text/plain`), used for preference values.
    Text(String),
    /// JSON document (`application/json`).
    Json(Value),
    /// GPS trace upload (`multipart/form-data`).
    Multipart(GpxUpload),
}

impl RequestBody {
    pub fn content_type(&self) -> Option<&'static str> {
        match self {
            RequestBody::Empty => None,
            RequestBody::Xml(_) => Some(XML_CONTENT_TYPE),
            RequestBody::Form(_) => Some(FORM_CONTENT_TYPE),
            RequestBody::Text(_) => Some(TEXT_CONTENT_TYPE),
            RequestBody::Json(_) => Some(JSON_CONTENT_TYPE),
            RequestBody::Multipart(_) => Some(MULTIPART_CONTENT_TYPE),
        }
    }

    pub(crate) fn attach(self, request: RequestBuilder) -> Result<RequestBuilder, OsmClientError> {
        let request = match self {
            RequestBody::Empty => request,
            RequestBody::Xml(document) => request.header(CONTENT_TYPE, XML_CONTENT_TYPE).body(document),
            RequestBody::Form(fields) => {
                let encoded = form_urlencoded::Serializer::new(String::new())
                    .extend_pairs(fields.iter())
                    .finish();
                request.header(CONTENT_TYPE, FORM_CONTENT_TYPE).body(encoded)
            }
            RequestBody::Text(text) => request.header(CONTENT_TYPE, TEXT_CONTENT_TYPE).body(text),
            RequestBody::Json(document) => request.json(&document),
            RequestBody::Multipart(upload) => request.multipart(gpx_form(upload)?),
        };

        Ok(request)
    }
}

fn gpx_form(upload: GpxUpload) -> Result<Form, OsmClientError> {
    let tags = upload.tags_field();
    let GpxUpload {
        file_name,
        contents,
        description,
        visibility,
        ..
    } = upload;

    let file = Part::bytes(contents)
        .file_name(file_name)
        .mime_str(GPX_MIME_TYPE)?;

    Ok(Form::new()
        .part("file", file)
        .text("description", description)
        .text("tags", tags)
        .text("visibility", visibility.to_string()))
}

/// One API call: method, path, query and body.
#[derive(Debug)]
pub struct Endpoint {
    method: Method,
    scope: ApiScope,
    segments: Vec<String>,
    params: QueryParams,
    body: RequestBody,
}

impl Endpoint {
    /// `path` is split on `/`; use [`Endpoint::with_segment`] for values that
    /// may themselves contain a slash.
    pub fn new(method: Method, path: &str) -> Self {
        Self {
            method,
            scope: ApiScope::Versioned,
            segments: path
                .split('/')
                .filter(|segment| !segment.is_empty())
                .map(String::from)
                .collect(),
            params: QueryParams::new(),
            body: RequestBody::Empty,
        }
    }

    pub fn get(path: &str) -> Self {
        Self::new(Method::GET, path)
    }

    pub fn put(path: &str) -> Self {
        Self::new(Method::PUT, path)
    }

    pub fn post(path: &str) -> Self {
        Self::new(Method::POST, path)
    }

    pub fn delete(path: &str) -> Self {
        Self::new(Method::DELETE, path)
    }

    /// Resolve against the unversioned API root.
    pub fn unversioned(mut self) -> Self {
        self.scope = ApiScope::Root;
        self
    }

    pub fn with_segment(mut self, segment: impl ToString) -> Self {
        self.segments.push(segment.to_string());
        self
    }

    /// Apply the `.json` switch to the last path segment.
    pub fn with_format(mut self, format: ReturnFormat) -> Self {
        if let Some(last) = self.segments.last_mut() {
            let formatted = format.apply(last);
            *last = formatted;
        }
        self
    }

    pub fn with_param(mut self, key: impl Into<String>, value: impl ToString) -> Self {
        self.params.push(key, value);
        self
    }

    pub fn with_params<I, K, V>(mut self, pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: ToString,
    {
        for (key, value) in pairs {
            self.params.push(key, value);
        }
        self
    }

    pub fn with_body(mut self, body: RequestBody) -> Self {
        self.body = body;
        self
    }

    pub fn method(&self) -> &Method {
        &self.method
    }

    pub fn scope(&self) -> ApiScope {
        self.scope
    }

    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    pub fn params(&self) -> &QueryParams {
        &self.params
    }

    pub fn body(&self) -> &RequestBody {
        &self.body
    }

    pub fn content_type(&self) -> Option<&'static str> {
        self.body.content_type()
    }

    pub fn path(&self) -> String {
        self.segments.join("/")
    }

    /// Relative target as dispatched, e.g. `map?bbox=1,2,3,4`.
    pub fn target(&self) -> String {
        if self.params.is_empty() {
            self.path()
        } else {
            format!("{}?{}", self.path(), self.params.encode())
        }
    }

    pub(crate) fn into_request_parts(self) -> (Method, RequestBody) {
        (self.method, self.body)
    }
}
