//! Bearer token loading from `.env` and the process environment.
//!
//! The OSM API authenticates write operations (changeset and element edits,
//! preferences, GPX management, note hiding) with an OAuth 2.0 bearer token.
//! Obtaining the token is out of scope; this module only picks up one that
//! was provisioned beforehand.

use common::AccessToken;

use std::env;
use std::path::PathBuf;

use log::{debug, info, warn};

/// Result of attempting to load a .env file.
#[derive(Debug)]
pub struct EnvLoadResult {
    /// Path to the loaded .env file, if one was found.
    pub path: Option<PathBuf>,
    pub loaded: bool,
}

/// Load `.env` from the current directory or its ancestors. Missing files are not an error.
pub fn try_load_dotenv() -> EnvLoadResult {
    match dotenvy::dotenv() {
        Ok(path) => {
            debug!("Loaded .env from {}", path.display());
            EnvLoadResult {
                path: Some(path),
                loaded: true,
            }
        }
        Err(e) if e.not_found() => EnvLoadResult {
            path: None,
            loaded: false,
        },
        Err(e) => {
            warn!("Failed to load .env file: {e}");
            EnvLoadResult {
                path: None,
                loaded: false,
            }
        }
    }
}

/// Read the bearer token from `env_var`, loading `.env` first.
///
/// Returns `None` when the variable is unset, blank or not valid unicode.
pub fn load_access_token(env_var: &str) -> Option<AccessToken> {
    let env_result = try_load_dotenv();
    if !env_result.loaded {
        debug!("No .env file found - checking existing environment variables");
    }

    token_from_env(env_var)
}

/// Read the bearer token from `env_var` without touching `.env`.
pub fn token_from_env(env_var: &str) -> Option<AccessToken> {
    match env::var(env_var) {
        Ok(value) => {
            let value = value.trim();
            if value.is_empty() {
                warn!("{env_var} is set but empty, ignoring");
                return None;
            }

            let token = AccessToken::new(value);
            info!("Found access token in {env_var} ({} chars)", token.len());
            Some(token)
        }
        Err(env::VarError::NotPresent) => {
            debug!("No {env_var} env var found, requests will be anonymous");
            None
        }
        Err(env::VarError::NotUnicode(_)) => {
            warn!("{env_var} contains invalid unicode, ignoring");
            None
        }
    }
}
