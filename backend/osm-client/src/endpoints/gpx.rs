//! GPS traces.

use crate::OsmClient;
use crate::error::osm_client::OsmClientError;
use crate::request::{Endpoint, RequestBody};
use crate::response::OsmResponse;

use osm_models::{BoundingBox, GpxUpload};

/// `GET /api/0.6/trackpoints?bbox=...&page=N`; pages start at 0.
pub fn trackpoints(bbox: &BoundingBox, page: u32) -> Endpoint {
    Endpoint::get("trackpoints")
        .with_param("bbox", bbox)
        .with_param("page", page)
}

pub fn create_gpx(upload: GpxUpload) -> Endpoint {
    Endpoint::post("gpx/create").with_body(RequestBody::Multipart(upload))
}

/// Metadata update; the body is a `<gpx_file>` document.
pub fn update_gpx(id: u64, xml: impl Into<String>) -> Endpoint {
    Endpoint::put(&format!("gpx/{id}")).with_body(RequestBody::Xml(xml.into()))
}

pub fn delete_gpx(id: u64) -> Endpoint {
    Endpoint::delete(&format!("gpx/{id}"))
}

pub fn gpx_details(id: u64) -> Endpoint {
    Endpoint::get(&format!("gpx/{id}/details"))
}

pub fn gpx_data(id: u64) -> Endpoint {
    Endpoint::get(&format!("gpx/{id}/data"))
}

pub fn gpx_files() -> Endpoint {
    Endpoint::get("user/gpx_files")
}

impl OsmClient {
    pub async fn trackpoints(
        &self,
        bbox: &BoundingBox,
        page: u32,
    ) -> Result<OsmResponse, OsmClientError> {
        self.dispatch(trackpoints(bbox, page)).await
    }

    /// Upload a trace. Returns the new trace id as text.
    pub async fn create_gpx(&self, upload: GpxUpload) -> Result<OsmResponse, OsmClientError> {
        self.dispatch(create_gpx(upload)).await
    }

    pub async fn update_gpx(
        &self,
        id: u64,
        xml: impl Into<String>,
    ) -> Result<OsmResponse, OsmClientError> {
        self.dispatch(update_gpx(id, xml)).await
    }

    pub async fn delete_gpx(&self, id: u64) -> Result<OsmResponse, OsmClientError> {
        self.dispatch(delete_gpx(id)).await
    }

    pub async fn gpx_details(&self, id: u64) -> Result<OsmResponse, OsmClientError> {
        self.dispatch(gpx_details(id)).await
    }

    /// The uploaded file itself; usually served as `application/gpx+xml`,
    /// which lands in [`OsmResponse::Raw`].
    pub async fn gpx_data(&self, id: u64) -> Result<OsmResponse, OsmClientError> {
        self.dispatch(gpx_data(id)).await
    }

    /// Traces owned by the authenticated user.
    pub async fn gpx_files(&self) -> Result<OsmResponse, OsmClientError> {
        self.dispatch(gpx_files()).await
    }
}
