//! Nodes, ways and relations.

use crate::OsmClient;
use crate::error::osm_client::OsmClientError;
use crate::request::{Endpoint, RequestBody};
use crate::response::OsmResponse;

use osm_models::{ElementKind, ReturnFormat, join_ids};

const REDACTION_PARAM: &str = "redaction";

pub fn create_element(kind: ElementKind, xml: impl Into<String>) -> Endpoint {
    Endpoint::put(&format!("{kind}/create")).with_body(RequestBody::Xml(xml.into()))
}

pub fn element(kind: ElementKind, id: u64, format: ReturnFormat) -> Endpoint {
    Endpoint::get(kind.as_str())
        .with_segment(id)
        .with_format(format)
}

pub fn update_element(kind: ElementKind, id: u64, xml: impl Into<String>) -> Endpoint {
    Endpoint::put(&format!("{kind}/{id}")).with_body(RequestBody::Xml(xml.into()))
}

/// The body must still carry the element's current version and changeset.
pub fn delete_element(kind: ElementKind, id: u64, xml: impl Into<String>) -> Endpoint {
    Endpoint::delete(&format!("{kind}/{id}")).with_body(RequestBody::Xml(xml.into()))
}

pub fn element_history(kind: ElementKind, id: u64) -> Endpoint {
    Endpoint::get(&format!("{kind}/{id}/history"))
}

pub fn element_version(kind: ElementKind, id: u64, version: u64) -> Endpoint {
    Endpoint::get(&format!("{kind}/{id}/{version}"))
}

/// `GET /api/0.6/nodes?nodes=1,2,3` (and the way/relation equivalents).
pub fn elements(kind: ElementKind, ids: &[u64]) -> Endpoint {
    Endpoint::get(kind.plural()).with_param(kind.plural(), join_ids(ids))
}

pub fn relations_for_element(kind: ElementKind, id: u64) -> Endpoint {
    Endpoint::get(&format!("{kind}/{id}/relations"))
}

pub fn ways_for_node(id: u64) -> Endpoint {
    Endpoint::get(&format!("node/{id}/ways"))
}

pub fn full_way(id: u64) -> Endpoint {
    Endpoint::get(&format!("way/{id}/full"))
}

pub fn full_relation(id: u64) -> Endpoint {
    Endpoint::get(&format!("relation/{id}/full"))
}

pub fn redact_element(kind: ElementKind, id: u64, version: u64, redaction_id: u64) -> Endpoint {
    Endpoint::post(&format!("{kind}/{id}/{version}/redact")).with_param(REDACTION_PARAM, redaction_id)
}

impl OsmClient {
    /// Create an element inside an open changeset. Returns the new id as text.
    pub async fn create_element(
        &self,
        kind: ElementKind,
        xml: impl Into<String>,
    ) -> Result<OsmResponse, OsmClientError> {
        self.dispatch(create_element(kind, xml)).await
    }

    pub async fn element(
        &self,
        kind: ElementKind,
        id: u64,
        format: ReturnFormat,
    ) -> Result<OsmResponse, OsmClientError> {
        self.dispatch(element(kind, id, format)).await
    }

    /// Returns the new version number as text.
    pub async fn update_element(
        &self,
        kind: ElementKind,
        id: u64,
        xml: impl Into<String>,
    ) -> Result<OsmResponse, OsmClientError> {
        self.dispatch(update_element(kind, id, xml)).await
    }

    pub async fn delete_element(
        &self,
        kind: ElementKind,
        id: u64,
        xml: impl Into<String>,
    ) -> Result<OsmResponse, OsmClientError> {
        self.dispatch(delete_element(kind, id, xml)).await
    }

    pub async fn element_history(
        &self,
        kind: ElementKind,
        id: u64,
    ) -> Result<OsmResponse, OsmClientError> {
        self.dispatch(element_history(kind, id)).await
    }

    pub async fn element_version(
        &self,
        kind: ElementKind,
        id: u64,
        version: u64,
    ) -> Result<OsmResponse, OsmClientError> {
        self.dispatch(element_version(kind, id, version)).await
    }

    pub async fn elements(
        &self,
        kind: ElementKind,
        ids: &[u64],
    ) -> Result<OsmResponse, OsmClientError> {
        self.dispatch(elements(kind, ids)).await
    }

    pub async fn relations_for_element(
        &self,
        kind: ElementKind,
        id: u64,
    ) -> Result<OsmResponse, OsmClientError> {
        self.dispatch(relations_for_element(kind, id)).await
    }

    pub async fn ways_for_node(&self, id: u64) -> Result<OsmResponse, OsmClientError> {
        self.dispatch(ways_for_node(id)).await
    }

    /// The way plus every node it references.
    pub async fn full_way(&self, id: u64) -> Result<OsmResponse, OsmClientError> {
        self.dispatch(full_way(id)).await
    }

    /// The relation, its members, and the nodes of member ways.
    pub async fn full_relation(&self, id: u64) -> Result<OsmResponse, OsmClientError> {
        self.dispatch(full_relation(id)).await
    }

    /// Moderator only.
    pub async fn redact_element(
        &self,
        kind: ElementKind,
        id: u64,
        version: u64,
        redaction_id: u64,
    ) -> Result<OsmResponse, OsmClientError> {
        self.dispatch(redact_element(kind, id, version, redaction_id))
            .await
    }
}
