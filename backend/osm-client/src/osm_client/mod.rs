use crate::auth::load_access_token;
use crate::config::ClientConfig;
use crate::error::CoreError;
use crate::error::osm_client::OsmClientError;
use crate::request::{ApiScope, Endpoint};
use crate::response::OsmResponse;

use common::{AccessToken, ErrorLocation};

use std::panic::Location;
use std::path::Path;
use std::time::Duration;

use log::{debug, warn};
use reqwest::Client;
use url::Url;

/// Client for one OSM API instance.
///
/// Immutable after construction and cheap to clone; concurrent calls share
/// nothing but this configuration and reqwest's connection pool.
#[derive(Clone, Debug)]
pub struct OsmClient {
    api_root: Url,
    versioned_root: Url,
    client: Client,
    access_token: Option<AccessToken>,
}

impl OsmClient {
    /// Client for `base_url` (including the `/api` prefix) with default settings.
    pub fn new(base_url: &str) -> Result<Self, OsmClientError> {
        Self::with_config(&ClientConfig {
            base_url: base_url.to_string(),
            ..ClientConfig::default()
        })
    }

    /// # Errors
    /// - [`OsmClientError::Config`] if `config` fails [`ClientConfig::validate`]
    pub fn with_config(config: &ClientConfig) -> Result<Self, OsmClientError> {
        config.validate()?;

        let api_root = directory_url(&config.base_url)?;
        let versioned_root =
            api_root.join(&format!("{}/", config.api_version.trim_matches('/')))?;

        let mut builder = Client::builder().user_agent(config.user_agent.clone());
        if let Some(secs) = config.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let client = builder.build()?;

        Ok(Self {
            api_root,
            versioned_root,
            client,
            access_token: None,
        })
    }

    /// Load `osm-client.toml` from `config_dir`, build the client and pick up
    /// the bearer token from the configured environment variable.
    pub fn from_config_dir(config_dir: &Path) -> Result<Self, CoreError> {
        let config = ClientConfig::load(config_dir)?;
        let client = Self::with_config(&config)?;

        Ok(match load_access_token(&config.access_token_env) {
            Some(token) => client.with_access_token(token),
            None => client,
        })
    }

    pub fn with_access_token(mut self, token: AccessToken) -> Self {
        self.access_token = Some(token);
        self
    }

    pub fn has_access_token(&self) -> bool {
        self.access_token.is_some()
    }

    pub fn api_root(&self) -> &Url {
        &self.api_root
    }

    pub fn versioned_root(&self) -> &Url {
        &self.versioned_root
    }

    /// Absolute URL an endpoint resolves to.
    #[track_caller]
    pub fn url_for(&self, endpoint: &Endpoint) -> Result<Url, OsmClientError> {
        let root = match endpoint.scope() {
            ApiScope::Root => &self.api_root,
            ApiScope::Versioned => &self.versioned_root,
        };

        let mut url = root.clone();
        url.path_segments_mut()
            .map_err(|_| OsmClientError::UrlParse {
                message: format!("{root} cannot be used as a base URL"),
                location: ErrorLocation::from(Location::caller()),
            })?
            .pop_if_empty()
            .extend(endpoint.segments());

        if !endpoint.params().is_empty() {
            url.set_query(Some(&endpoint.params().encode()));
        }

        Ok(url)
    }

    /// Perform exactly one round trip for `endpoint` and normalise the result
    /// by content type.
    ///
    /// Non-success statuses are logged but not turned into errors.
    ///
    /// # Errors
    /// - [`OsmClientError::MissingContentType`] if the response has no `Content-Type`
    /// - [`OsmClientError::Http`] / [`OsmClientError::Json`] for transport or decode failures
    pub async fn dispatch(&self, endpoint: Endpoint) -> Result<OsmResponse, OsmClientError> {
        let url = self.url_for(&endpoint)?;
        let (method, body) = endpoint.into_request_parts();

        debug!("{method} {url}");

        let mut request = self.client.request(method.clone(), url);
        if let Some(token) = &self.access_token {
            request = request.bearer_auth(token.as_str());
        }
        let request = body.attach(request)?;

        let response = request.send().await?;

        let status = response.status();
        if !status.is_success() {
            warn!(
                "{method} {} returned HTTP {}",
                response.url(),
                status.as_u16()
            );
        }

        OsmResponse::from_response(response, &method).await
    }
}

/// Parse `base` as a directory URL so relative joins append to it.
#[track_caller]
fn directory_url(base: &str) -> Result<Url, OsmClientError> {
    let trimmed = base.trim_end_matches('/');
    Ok(Url::parse(&format!("{trimmed}/"))?)
}
