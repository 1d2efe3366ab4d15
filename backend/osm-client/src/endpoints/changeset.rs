use crate::OsmClient;
use crate::error::osm_client::OsmClientError;
use crate::request::{Endpoint, RequestBody};
use crate::response::OsmResponse;

use osm_models::{ChangesetQuery, ReturnFormat};

const COMMENT_FIELD: &str = "text";

pub fn create_changeset(xml: impl Into<String>) -> Endpoint {
    Endpoint::put("changeset/create").with_body(RequestBody::Xml(xml.into()))
}

pub fn changeset(id: u64, include_discussion: bool, format: ReturnFormat) -> Endpoint {
    Endpoint::get("changeset")
        .with_segment(id)
        .with_format(format)
        .with_param("include_discussion", include_discussion)
}

pub fn update_changeset(id: u64, xml: impl Into<String>) -> Endpoint {
    Endpoint::put(&format!("changeset/{id}")).with_body(RequestBody::Xml(xml.into()))
}

pub fn close_changeset(id: u64) -> Endpoint {
    Endpoint::put(&format!("changeset/{id}/close"))
}

pub fn download_changeset(id: u64) -> Endpoint {
    Endpoint::get(&format!("changeset/{id}/download"))
}

/// Only the highest-precedence populated field of `query` is sent.
pub fn query_changesets(query: &ChangesetQuery) -> Endpoint {
    let endpoint = Endpoint::get("changesets");

    match query.filter() {
        Some(filter) => {
            let (key, value) = filter.query_pair();
            endpoint.with_param(key, value)
        }
        None => endpoint,
    }
}

/// osmChange diff upload.
pub fn upload_changeset_diff(id: u64, xml: impl Into<String>) -> Endpoint {
    Endpoint::post(&format!("changeset/{id}/upload")).with_body(RequestBody::Xml(xml.into()))
}

pub fn comment_changeset(id: u64, text: impl Into<String>) -> Endpoint {
    Endpoint::post(&format!("changeset/{id}/comment")).with_body(RequestBody::Form(vec![(
        COMMENT_FIELD.to_string(),
        text.into(),
    )]))
}

pub fn subscribe_changeset(id: u64) -> Endpoint {
    Endpoint::post(&format!("changeset/{id}/subscribe")).with_body(RequestBody::Form(Vec::new()))
}

pub fn unsubscribe_changeset(id: u64) -> Endpoint {
    Endpoint::post(&format!("changeset/{id}/unsubscribe"))
        .with_body(RequestBody::Form(Vec::new()))
}

pub fn hide_changeset_comment(comment_id: u64) -> Endpoint {
    Endpoint::post(&format!("changeset/comment/{comment_id}/hide"))
}

pub fn unhide_changeset_comment(comment_id: u64) -> Endpoint {
    Endpoint::post(&format!("changeset/comment/{comment_id}/unhide"))
}

impl OsmClient {
    /// Open a changeset from an `<osm><changeset>` document. Returns its id as text.
    pub async fn create_changeset(
        &self,
        xml: impl Into<String>,
    ) -> Result<OsmResponse, OsmClientError> {
        self.dispatch(create_changeset(xml)).await
    }

    pub async fn changeset(
        &self,
        id: u64,
        include_discussion: bool,
        format: ReturnFormat,
    ) -> Result<OsmResponse, OsmClientError> {
        self.dispatch(changeset(id, include_discussion, format))
            .await
    }

    /// Replace the tags of an open changeset.
    pub async fn update_changeset(
        &self,
        id: u64,
        xml: impl Into<String>,
    ) -> Result<OsmResponse, OsmClientError> {
        self.dispatch(update_changeset(id, xml)).await
    }

    pub async fn close_changeset(&self, id: u64) -> Result<OsmResponse, OsmClientError> {
        self.dispatch(close_changeset(id)).await
    }

    /// The changeset's edits as an osmChange document.
    pub async fn download_changeset(&self, id: u64) -> Result<OsmResponse, OsmClientError> {
        self.dispatch(download_changeset(id)).await
    }

    pub async fn query_changesets(
        &self,
        query: &ChangesetQuery,
    ) -> Result<OsmResponse, OsmClientError> {
        self.dispatch(query_changesets(query)).await
    }

    pub async fn upload_changeset_diff(
        &self,
        id: u64,
        xml: impl Into<String>,
    ) -> Result<OsmResponse, OsmClientError> {
        self.dispatch(upload_changeset_diff(id, xml)).await
    }

    pub async fn comment_changeset(
        &self,
        id: u64,
        text: impl Into<String>,
    ) -> Result<OsmResponse, OsmClientError> {
        self.dispatch(comment_changeset(id, text)).await
    }

    pub async fn subscribe_changeset(&self, id: u64) -> Result<OsmResponse, OsmClientError> {
        self.dispatch(subscribe_changeset(id)).await
    }

    pub async fn unsubscribe_changeset(&self, id: u64) -> Result<OsmResponse, OsmClientError> {
        self.dispatch(unsubscribe_changeset(id)).await
    }

    /// Moderator only.
    pub async fn hide_changeset_comment(
        &self,
        comment_id: u64,
    ) -> Result<OsmResponse, OsmClientError> {
        self.dispatch(hide_changeset_comment(comment_id)).await
    }

    /// Moderator only.
    pub async fn unhide_changeset_comment(
        &self,
        comment_id: u64,
    ) -> Result<OsmResponse, OsmClientError> {
        self.dispatch(unhide_changeset_comment(comment_id)).await
    }
}
