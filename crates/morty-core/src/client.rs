//! HTTP transport for the Rick & Morty API
//!
//! This module provides a thin JSON-over-HTTP client. It classifies response
//! statuses into [`MortyError`] variants and decodes bodies, but never
//! retries: the first failure is returned to the caller.

use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderValue, ACCEPT};
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::error::{MortyError, Result};

/// Base URL of the public Rick & Morty API
pub const DEFAULT_BASE_URL: &str = "https://rickandmortyapi.com/api";

/// Default User-Agent sent with every request
const DEFAULT_USER_AGENT: &str = concat!("morty-core/", env!("CARGO_PKG_VERSION"));

/// Configuration for the HTTP client
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// API root, without trailing slash (default: public API)
    pub base_url: String,
    /// Request timeout in seconds (default: 30)
    pub timeout_secs: u64,
    /// User-Agent header value
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: 30,
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

impl ClientConfig {
    /// Default configuration pointed at another API root
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }
}

/// JSON HTTP client bound to one API root
pub struct MortyClient {
    /// Underlying HTTP client
    client: reqwest::Client,
    /// API root without trailing slash
    base_url: String,
}

impl MortyClient {
    /// Create a new client with default configuration
    ///
    /// # Errors
    /// Returns an error if the HTTP client cannot be created
    pub fn new() -> Result<Self> {
        Self::with_config(ClientConfig::default())
    }

    /// Create a new client with custom configuration
    ///
    /// # Errors
    /// - `MortyError::InvalidUrl` - base URL is not http(s)
    /// - `MortyError::HttpError` - the HTTP client cannot be built
    pub fn with_config(config: ClientConfig) -> Result<Self> {
        let base_url = normalize_base_url(&config.base_url)?;

        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let client = reqwest::Client::builder()
            .user_agent(config.user_agent)
            .default_headers(headers)
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self { client, base_url })
    }

    /// API root this client talks to
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// GET a path relative to the API root and decode the JSON body.
    ///
    /// # Arguments
    /// * `path` - Path starting with `/`, e.g. "/character/1"
    /// * `query` - Query parameters appended to the URL
    ///
    /// # Errors
    /// - `MortyError::NotFound` - server returned 404
    /// - `MortyError::RateLimited` - server returned 429
    /// - `MortyError::HttpError` - network failure or other error status
    /// - `MortyError::DecodeError` - body is not the expected JSON
    pub async fn get_json<T>(&self, path: &str, query: &[(&str, String)]) -> Result<T>
    where
        T: DeserializeOwned,
    {
        let url = format!("{}{}", self.base_url, path);
        debug!(url = %url, ?query, "GET");

        let response = self.client.get(&url).query(query).send().await?;
        let status = response.status();

        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(MortyError::NotFound(path.to_string()));
        }
        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(MortyError::RateLimited);
        }

        let response = response.error_for_status()?;
        let body = response.text().await?;
        debug!(url = %url, status = status.as_u16(), bytes = body.len(), "response received");

        Ok(serde_json::from_str(&body)?)
    }
}

/// Check the scheme and strip trailing slashes so paths can be appended.
fn normalize_base_url(base_url: &str) -> Result<String> {
    let trimmed = base_url.trim().trim_end_matches('/');
    if !(trimmed.starts_with("http://") || trimmed.starts_with("https://")) {
        return Err(MortyError::InvalidUrl(base_url.to_string()));
    }
    Ok(trimmed.to_string())
}
