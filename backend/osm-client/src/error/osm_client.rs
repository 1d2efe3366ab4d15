use crate::error::config::ConfigError;
use crate::response::ResponseKind;

use common::ErrorLocation;

use std::panic::Location;

use thiserror::Error as ThisError;

#[derive(Debug, ThisError)]
pub enum OsmClientError {
    #[error("HTTP Error: {message} {location}")]
    Http {
        message: String,
        location: ErrorLocation,
    },

    #[error("JSON Error: {message} {location}")]
    Json {
        message: String,
        location: ErrorLocation,
    },

    #[error("URL Parse Error: {message} {location}")]
    UrlParse {
        message: String,
        location: ErrorLocation,
    },

    /// Client settings rejected before any request was built.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// The only failure the dispatcher raises itself: the response carried no
    /// `Content-Type`, so there is no way to pick a decoding.
    #[error("Missing Content Type Error: {method} {url} {location}")]
    MissingContentType {
        method: String,
        url: String,
        location: ErrorLocation,
    },

    #[error("Unexpected Response Error: expected {expected:?}, got {actual:?} {location}")]
    UnexpectedResponse {
        expected: ResponseKind,
        actual: ResponseKind,
        location: ErrorLocation,
    },
}

impl From<url::ParseError> for OsmClientError {
    #[track_caller]
    fn from(error: url::ParseError) -> Self {
        OsmClientError::UrlParse {
            message: error.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<reqwest::Error> for OsmClientError {
    #[track_caller]
    fn from(error: reqwest::Error) -> Self {
        OsmClientError::Http {
            message: error.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<serde_json::Error> for OsmClientError {
    #[track_caller]
    fn from(error: serde_json::Error) -> Self {
        OsmClientError::Json {
            message: error.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}
