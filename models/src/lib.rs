//! Request-side data for the OpenStreetMap v0.6 API.
//!
//! These types describe *what* to ask the API for: a bounding box, which
//! changesets to list, which notes to search, which trace to upload. They have
//! no I/O and no knowledge of HTTP; `osm-client` turns them into requests.

pub mod bounding_box;
pub mod changeset_query;
pub mod element;
pub mod error;
pub mod gpx;
pub mod note;
pub mod return_format;

pub use bounding_box::BoundingBox;
pub use changeset_query::{ChangesetFilter, ChangesetQuery, ChangesetTime};
pub use element::{ElementKind, join_ids};
pub use error::model_error::ModelError;
pub use gpx::{GpxUpload, GpxUploadBuilder, TraceVisibility};
pub use note::{NOTE_SEARCH_KEYS, NewNote, NoteOrder, NoteSearch, NoteSort};
pub use return_format::ReturnFormat;

pub use common::ErrorLocation;

#[cfg(test)]
mod tests;
