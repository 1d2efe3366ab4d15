mod auth;
mod config;
mod logger;
mod osm_client;
mod response;
