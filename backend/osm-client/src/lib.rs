pub mod auth;
pub mod config;
pub mod endpoints;
pub mod error;
pub mod logger;
pub mod request;
pub mod response;

mod osm_client;
#[cfg(test)]
mod tests;

pub use osm_client::OsmClient;
pub use request::{ApiScope, Endpoint, QueryParams, RequestBody};
pub use response::{OsmResponse, ResponseKind};

pub use common::AccessToken;
pub use osm_models as models;

pub const OSM_API_VERSION: &str = "0.6";
pub const OSM_PRODUCTION_HOSTNAME: &str = "api.openstreetmap.org";
pub const OSM_DEV_HOSTNAME: &str = "master.apis.dev.openstreetmap.org";
pub const OSM_PRODUCTION_API_URL: &str =
    const_format::concatcp!("https://", OSM_PRODUCTION_HOSTNAME, "/api");
pub const OSM_DEV_API_URL: &str = const_format::concatcp!("https://", OSM_DEV_HOSTNAME, "/api");
pub const DEFAULT_USER_AGENT: &str =
    const_format::concatcp!("osm-client/", env!("CARGO_PKG_VERSION"));
pub const DEFAULT_ACCESS_TOKEN_ENV: &str = "OSM_ACCESS_TOKEN";
