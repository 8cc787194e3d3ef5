//! HTTP client for the front-page archive
//!
//! This module handles the configuration and construction of the HTTP client
//! plus the thin request layer used by the fetch loop. One plain GET per
//! asset, no authentication, no retry.

use std::time::Duration;

use reqwest::{Client, Response};
use url::Url;

use crate::constants::{http, nyt};
use crate::errors::{DownloadError, DownloadResult};

/// Configuration for the HTTP transport
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Request timeout
    pub request_timeout: Duration,
    /// Connect timeout
    pub connect_timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            request_timeout: http::DEFAULT_TIMEOUT,
            connect_timeout: http::CONNECT_TIMEOUT,
        }
    }
}

impl ClientConfig {
    /// Builds the HTTP client with the specified configuration
    pub fn build_http_client(&self) -> DownloadResult<Client> {
        Client::builder()
            .timeout(self.request_timeout)
            .connect_timeout(self.connect_timeout)
            .user_agent(http::USER_AGENT)
            .build()
            .map_err(DownloadError::Http)
    }
}

/// HTTP client for fetching front-page assets
///
/// Holds the archive base URL alongside the transport so that tests can
/// point the fetch loop at a local server.
#[derive(Debug, Clone)]
pub struct FrontPageClient {
    client: Client,
    base_url: Url,
}

impl FrontPageClient {
    /// Creates a client against the production archive
    ///
    /// # Errors
    ///
    /// Returns `DownloadError` if HTTP client creation fails
    pub fn new() -> DownloadResult<Self> {
        Self::with_config(ClientConfig::default())
    }

    /// Creates a client with custom transport configuration
    ///
    /// # Errors
    ///
    /// Returns `DownloadError` if HTTP client creation fails
    pub fn with_config(config: ClientConfig) -> DownloadResult<Self> {
        let client = config.build_http_client()?;
        let base_url = Url::parse(nyt::BASE_URL).expect("Base URL should be valid");

        Ok(Self { client, base_url })
    }

    /// Creates a client against an arbitrary base URL (for testing)
    ///
    /// # Errors
    ///
    /// Returns `DownloadError::InvalidUrl` if `base_url` does not parse
    pub fn with_base_url(base_url: &str) -> DownloadResult<Self> {
        let client = ClientConfig::default().build_http_client()?;
        let base_url = Url::parse(base_url).map_err(|e| DownloadError::InvalidUrl {
            url: base_url.to_string(),
            error: e.to_string(),
        })?;

        Ok(Self { client, base_url })
    }

    /// Performs a single GET against `url`
    ///
    /// No retry and no status interpretation happen here; callers decide
    /// what a non-2xx response means.
    ///
    /// # Errors
    ///
    /// Returns `DownloadError` if the URL does not parse or the transport
    /// fails (DNS, connection, timeout)
    pub async fn get(&self, url: &str) -> DownloadResult<Response> {
        let parsed = Url::parse(url).map_err(|e| DownloadError::InvalidUrl {
            url: url.to_string(),
            error: e.to_string(),
        })?;

        let response = self.client.get(parsed).send().await?;
        tracing::debug!("GET {} -> {}", url, response.status());
        Ok(response)
    }

    /// Base URL of the archive this client points at
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }
}
