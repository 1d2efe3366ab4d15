//! Capabilities, versions, permissions and the bounding-box map call.

use crate::OsmClient;
use crate::error::osm_client::OsmClientError;
use crate::request::Endpoint;
use crate::response::OsmResponse;

use osm_models::{BoundingBox, ReturnFormat};

/// `GET /api/versions[.json]`
pub fn versions(format: ReturnFormat) -> Endpoint {
    Endpoint::get("versions").with_format(format).unversioned()
}

/// `GET /api/capabilities[.json]`
pub fn capabilities(format: ReturnFormat) -> Endpoint {
    Endpoint::get("capabilities")
        .with_format(format)
        .unversioned()
}

/// `GET /api/0.6/map?bbox=left,bottom,right,top`
pub fn map(bbox: &BoundingBox) -> Endpoint {
    Endpoint::get("map").with_param("bbox", bbox)
}

/// `GET /api/0.6/permissions[.json]`
pub fn permissions(format: ReturnFormat) -> Endpoint {
    Endpoint::get("permissions").with_format(format)
}

impl OsmClient {
    /// API versions supported by this instance.
    pub async fn versions(&self, format: ReturnFormat) -> Result<OsmResponse, OsmClientError> {
        self.dispatch(versions(format)).await
    }

    /// Capabilities and limits of the API (max area, element counts, timeouts).
    pub async fn capabilities(
        &self,
        format: ReturnFormat,
    ) -> Result<OsmResponse, OsmClientError> {
        self.dispatch(capabilities(format)).await
    }

    /// All nodes inside `bbox`, the ways referencing them (with their nodes),
    /// and the relations referencing any of those.
    pub async fn map(&self, bbox: &BoundingBox) -> Result<OsmResponse, OsmClientError> {
        self.dispatch(map(bbox)).await
    }

    /// Permissions granted to the current token; empty when unauthenticated.
    pub async fn permissions(&self, format: ReturnFormat) -> Result<OsmResponse, OsmClientError> {
        self.dispatch(permissions(format)).await
    }
}
