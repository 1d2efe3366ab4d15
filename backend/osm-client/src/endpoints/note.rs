//! Map notes.

use crate::OsmClient;
use crate::error::osm_client::OsmClientError;
use crate::request::{Endpoint, RequestBody};
use crate::response::OsmResponse;

use osm_models::{BoundingBox, NewNote, NoteSearch, ReturnFormat};

const NOTES_PATH: &str = "notes";
const TEXT_PARAM: &str = "text";

pub fn notes(bbox: &BoundingBox, format: ReturnFormat) -> Endpoint {
    Endpoint::get(NOTES_PATH)
        .with_format(format)
        .with_param("bbox", bbox)
}

pub fn all_notes(format: ReturnFormat) -> Endpoint {
    Endpoint::get(NOTES_PATH).with_format(format)
}

pub fn note(id: u64, format: ReturnFormat) -> Endpoint {
    Endpoint::get(NOTES_PATH).with_segment(id).with_format(format)
}

/// XML-flavoured creation: everything travels in the query string.
pub fn create_note(lat: f64, lon: f64, text: &str) -> Endpoint {
    Endpoint::post(NOTES_PATH)
        .with_param("lat", lat)
        .with_param("lon", lon)
        .with_param(TEXT_PARAM, text)
}

pub fn create_note_json(note: &NewNote) -> Result<Endpoint, OsmClientError> {
    let body = serde_json::to_value(note)?;
    Ok(Endpoint::post(NOTES_PATH)
        .with_format(ReturnFormat::Json)
        .with_body(RequestBody::Json(body)))
}

pub fn comment_note(id: u64, text: &str) -> Endpoint {
    Endpoint::post(&format!("{NOTES_PATH}/{id}/comment")).with_param(TEXT_PARAM, text)
}

pub fn close_note(id: u64, text: &str) -> Endpoint {
    Endpoint::post(&format!("{NOTES_PATH}/{id}/close")).with_param(TEXT_PARAM, text)
}

pub fn reopen_note(id: u64, text: &str) -> Endpoint {
    Endpoint::post(&format!("{NOTES_PATH}/{id}/reopen")).with_param(TEXT_PARAM, text)
}

/// Moderator only.
pub fn hide_note(id: u64, text: &str) -> Endpoint {
    Endpoint::delete(&format!("{NOTES_PATH}/{id}")).with_param(TEXT_PARAM, text)
}

pub fn search_notes(search: &NoteSearch) -> Endpoint {
    Endpoint::get(&format!("{NOTES_PATH}/search")).with_params(search.query_pairs())
}

/// RSS feed of note activity.
pub fn notes_feed() -> Endpoint {
    Endpoint::get(&format!("{NOTES_PATH}/feed"))
}

impl OsmClient {
    pub async fn notes(
        &self,
        bbox: &BoundingBox,
        format: ReturnFormat,
    ) -> Result<OsmResponse, OsmClientError> {
        self.dispatch(notes(bbox, format)).await
    }

    pub async fn all_notes(&self, format: ReturnFormat) -> Result<OsmResponse, OsmClientError> {
        self.dispatch(all_notes(format)).await
    }

    pub async fn note(&self, id: u64, format: ReturnFormat) -> Result<OsmResponse, OsmClientError> {
        self.dispatch(note(id, format)).await
    }

    pub async fn create_note(
        &self,
        lat: f64,
        lon: f64,
        text: &str,
    ) -> Result<OsmResponse, OsmClientError> {
        self.dispatch(create_note(lat, lon, text)).await
    }

    pub async fn create_note_json(&self, note: &NewNote) -> Result<OsmResponse, OsmClientError> {
        self.dispatch(create_note_json(note)?).await
    }

    pub async fn comment_note(&self, id: u64, text: &str) -> Result<OsmResponse, OsmClientError> {
        self.dispatch(comment_note(id, text)).await
    }

    pub async fn close_note(&self, id: u64, text: &str) -> Result<OsmResponse, OsmClientError> {
        self.dispatch(close_note(id, text)).await
    }

    pub async fn reopen_note(&self, id: u64, text: &str) -> Result<OsmResponse, OsmClientError> {
        self.dispatch(reopen_note(id, text)).await
    }

    pub async fn hide_note(&self, id: u64, text: &str) -> Result<OsmResponse, OsmClientError> {
        self.dispatch(hide_note(id, text)).await
    }

    pub async fn search_notes(&self, search: &NoteSearch) -> Result<OsmResponse, OsmClientError> {
        self.dispatch(search_notes(search)).await
    }

    pub async fn notes_feed(&self) -> Result<OsmResponse, OsmClientError> {
        self.dispatch(notes_feed()).await
    }
}
