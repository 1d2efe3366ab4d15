//! The endpoint surface.
//!
//! Each submodule pairs pure descriptor builders (`fn ... -> Endpoint`) with
//! the `OsmClient` methods that dispatch them. Builders do no I/O, so the
//! path/method/body shape of every call is testable offline.
//!
//! Write operations need a bearer token on the client; the server answers
//! `401` otherwise and the response is returned like any other.

pub mod changeset;
pub mod element;
pub mod gpx;
pub mod misc;
pub mod note;
pub mod user;
