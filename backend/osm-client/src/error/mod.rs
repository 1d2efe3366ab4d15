pub mod config;
pub mod logger;
pub mod osm_client;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error(transparent)]
    Client(#[from] osm_client::OsmClientError),

    #[error(transparent)]
    Config(#[from] config::ConfigError),

    #[error(transparent)]
    Logger(#[from] logger::LoggerError),
}
