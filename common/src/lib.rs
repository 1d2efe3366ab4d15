//! Shared primitives for the OSM client workspace.
//!
//! Everything here is independent of HTTP and of the OSM data model:
//!
//! - [`ErrorLocation`]: file/line/column captured at the point an error is raised
//! - [`AccessToken`]: an OAuth 2.0 bearer token that never leaks into logs
//!
//! ## Architecture
//!
//! - **common** (this crate): error plumbing and secrets
//! - **osm-models**: request-side data (bounding boxes, queries, uploads)
//! - **osm-client**: dispatcher and endpoint surface built on the two above

pub mod access_token;
pub mod error;

pub use access_token::AccessToken;
pub use error::error_location::ErrorLocation;
pub use error::redact_error::RedactError;

#[cfg(test)]
mod tests;
