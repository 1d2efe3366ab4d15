//! Response normalisation by declared content type.

use crate::error::osm_client::OsmClientError;

use common::ErrorLocation;

use std::panic::Location;

use log::trace;
use reqwest::header::CONTENT_TYPE;
use reqwest::{Method, Response};
use serde::de::DeserializeOwned;
use serde_json::Value;

const JSON_MEDIA_TYPE: &str = "application/json";
const XML_MEDIA_TYPE: &str = "application/xml";

/// How a response body is decoded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseKind {
    /// `application/json`: decoded into a JSON value.
    Structured,
    /// `application/xml`: returned as text; XML parsing is left to the caller.
    Markup,
    /// Anything else: the raw response is handed back untouched.
    Opaque,
}

impl ResponseKind {
    /// Substring match, case-insensitive, so parameters such as
    /// `; charset=utf-8` do not matter.
    pub fn from_content_type(content_type: &str) -> Self {
        let content_type = content_type.to_ascii_lowercase();

        if content_type.contains(JSON_MEDIA_TYPE) {
            ResponseKind::Structured
        } else if content_type.contains(XML_MEDIA_TYPE) {
            ResponseKind::Markup
        } else {
            ResponseKind::Opaque
        }
    }
}

/// Decoded result of a single API call.
#[derive(Debug)]
pub enum OsmResponse {
    Json(Value),
    Xml(String),
    Raw(Response),
}

impl OsmResponse {
    pub(crate) async fn from_response(
        response: Response,
        method: &Method,
    ) -> Result<Self, OsmClientError> {
        let Some(header) = response.headers().get(CONTENT_TYPE) else {
            return Err(OsmClientError::MissingContentType {
                method: method.to_string(),
                url: response.url().to_string(),
                location: ErrorLocation::from(Location::caller()),
            });
        };

        let content_type = String::from_utf8_lossy(header.as_bytes()).into_owned();
        let kind = ResponseKind::from_content_type(&content_type);
        trace!("{method} {} -> {kind:?} ({content_type})", response.url());

        match kind {
            ResponseKind::Structured => Ok(OsmResponse::Json(response.json().await?)),
            ResponseKind::Markup => Ok(OsmResponse::Xml(response.text().await?)),
            ResponseKind::Opaque => Ok(OsmResponse::Raw(response)),
        }
    }

    pub fn kind(&self) -> ResponseKind {
        match self {
            OsmResponse::Json(_) => ResponseKind::Structured,
            OsmResponse::Xml(_) => ResponseKind::Markup,
            OsmResponse::Raw(_) => ResponseKind::Opaque,
        }
    }

    pub fn as_json(&self) -> Option<&Value> {
        match self {
            OsmResponse::Json(value) => Some(value),
            _ => None,
        }
    }

    pub fn as_xml(&self) -> Option<&str> {
        match self {
            OsmResponse::Xml(text) => Some(text),
            _ => None,
        }
    }

    #[track_caller]
    pub fn into_json(self) -> Result<Value, OsmClientError> {
        match self {
            OsmResponse::Json(value) => Ok(value),
            other => Err(other.unexpected(ResponseKind::Structured)),
        }
    }

    #[track_caller]
    pub fn into_xml(self) -> Result<String, OsmClientError> {
        match self {
            OsmResponse::Xml(text) => Ok(text),
            other => Err(other.unexpected(ResponseKind::Markup)),
        }
    }

    #[track_caller]
    pub fn into_raw(self) -> Result<Response, OsmClientError> {
        match self {
            OsmResponse::Raw(response) => Ok(response),
            other => Err(other.unexpected(ResponseKind::Opaque)),
        }
    }

    /// Decode a JSON response into `T`.
    #[track_caller]
    pub fn deserialize<T: DeserializeOwned>(self) -> Result<T, OsmClientError> {
        let value = self.into_json()?;
        Ok(serde_json::from_value(value)?)
    }

    #[track_caller]
    fn unexpected(&self, expected: ResponseKind) -> OsmClientError {
        OsmClientError::UnexpectedResponse {
            expected,
            actual: self.kind(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}
