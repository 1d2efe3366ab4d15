//! User details and preferences.

use crate::OsmClient;
use crate::error::osm_client::OsmClientError;
use crate::request::{Endpoint, RequestBody};
use crate::response::OsmResponse;

use osm_models::{ReturnFormat, join_ids};

const PREFERENCES_PATH: &str = "user/preferences";

pub fn user(id: u64, format: ReturnFormat) -> Endpoint {
    Endpoint::get("user").with_segment(id).with_format(format)
}

pub fn users(ids: &[u64], format: ReturnFormat) -> Endpoint {
    Endpoint::get("users")
        .with_format(format)
        .with_param("users", join_ids(ids))
}

pub fn user_details(format: ReturnFormat) -> Endpoint {
    Endpoint::get("user/details").with_format(format)
}

pub fn preferences(format: ReturnFormat) -> Endpoint {
    Endpoint::get(PREFERENCES_PATH).with_format(format)
}

/// Replaces the whole preference set.
pub fn upload_preferences(body: impl Into<String>) -> Endpoint {
    Endpoint::put(PREFERENCES_PATH).with_body(RequestBody::Text(body.into()))
}

pub fn preference(key: &str) -> Endpoint {
    Endpoint::get(PREFERENCES_PATH).with_segment(key)
}

pub fn set_preference(key: &str, value: impl Into<String>) -> Endpoint {
    Endpoint::put(PREFERENCES_PATH)
        .with_segment(key)
        .with_body(RequestBody::Text(value.into()))
}

pub fn delete_preference(key: &str) -> Endpoint {
    Endpoint::delete(PREFERENCES_PATH).with_segment(key)
}

impl OsmClient {
    pub async fn user(&self, id: u64, format: ReturnFormat) -> Result<OsmResponse, OsmClientError> {
        self.dispatch(user(id, format)).await
    }

    pub async fn users(
        &self,
        ids: &[u64],
        format: ReturnFormat,
    ) -> Result<OsmResponse, OsmClientError> {
        self.dispatch(users(ids, format)).await
    }

    /// Details of the user the access token belongs to.
    pub async fn user_details(&self, format: ReturnFormat) -> Result<OsmResponse, OsmClientError> {
        self.dispatch(user_details(format)).await
    }

    pub async fn preferences(&self, format: ReturnFormat) -> Result<OsmResponse, OsmClientError> {
        self.dispatch(preferences(format)).await
    }

    pub async fn upload_preferences(
        &self,
        body: impl Into<String>,
    ) -> Result<OsmResponse, OsmClientError> {
        self.dispatch(upload_preferences(body)).await
    }

    pub async fn preference(&self, key: &str) -> Result<OsmResponse, OsmClientError> {
        self.dispatch(preference(key)).await
    }

    pub async fn set_preference(
        &self,
        key: &str,
        value: impl Into<String>,
    ) -> Result<OsmResponse, OsmClientError> {
        self.dispatch(set_preference(key, value)).await
    }

    pub async fn delete_preference(&self, key: &str) -> Result<OsmResponse, OsmClientError> {
        self.dispatch(delete_preference(key)).await
    }
}
