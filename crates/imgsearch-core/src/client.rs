//! HTTP client for fetching search results pages
//!
//! One GET per call, no retries. Redirects are followed up to a configured
//! limit and the final URL is reported so relative links resolve correctly.

use std::time::Duration;

use tracing::debug;
use url::Url;

use crate::error::{ImageSearchError, Result};

const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";

/// Configuration for the HTTP client
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Whole-request timeout in seconds (default: 30)
    pub timeout_secs: u64,
    /// Connect timeout in seconds (default: 10)
    pub connect_timeout_secs: u64,
    /// Redirects followed before giving up (default: 20)
    pub max_redirects: usize,
    /// `User-Agent` header sent with every request
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            timeout_secs: 30,
            connect_timeout_secs: 10,
            max_redirects: 20,
            user_agent: USER_AGENT.to_string(),
        }
    }
}

/// A fetched page before parsing
#[derive(Debug, Clone)]
pub struct FetchedPage {
    /// Final URL after redirects
    pub url: Url,
    /// Response body
    pub body: String,
}

/// HTTP client wrapper
pub struct SearchClient {
    client: reqwest::Client,
}

impl SearchClient {
    /// Create a new client with default configuration
    pub fn new() -> Result<Self> {
        Self::with_config(ClientConfig::default())
    }

    /// Create a new client with custom configuration
    pub fn with_config(config: ClientConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .connect_timeout(Duration::from_secs(config.connect_timeout_secs))
            .user_agent(config.user_agent)
            .redirect(reqwest::redirect::Policy::limited(config.max_redirects))
            .build()
            .map_err(ImageSearchError::HttpError)?;

        Ok(Self { client })
    }

    /// Fetch a page
    ///
    /// # Arguments
    /// * `url` - Absolute URL to GET
    ///
    /// # Errors
    /// - `InvalidUrl` - `url` cannot be parsed
    /// - `HttpError` - Network errors, timeouts, too many redirects
    /// - `HttpStatus` - Server answered with a non-success status
    pub async fn fetch(&self, url: &str) -> Result<FetchedPage> {
        let request_url = Url::parse(url)
            .map_err(|e| ImageSearchError::InvalidUrl(format!("{}: {}", url, e)))?;

        debug!(url = %request_url, "fetching results page");

        let response = self
            .client
            .get(request_url)
            .send()
            .await
            .map_err(ImageSearchError::HttpError)?;

        let status = response.status();
        let final_url = response.url().clone();

        debug!(status = status.as_u16(), url = %final_url, "received response");

        if !status.is_success() {
            return Err(ImageSearchError::HttpStatus {
                status: status.as_u16(),
                url: final_url.to_string(),
            });
        }

        let body = response.text().await.map_err(ImageSearchError::HttpError)?;

        Ok(FetchedPage {
            url: final_url,
            body,
        })
    }
}
