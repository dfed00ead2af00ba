//! Main image search API
//!
//! Combines URL providers, the HTTP client and extraction strategies.

use tracing::{debug, warn};

use crate::client::{ClientConfig, FetchedPage, SearchClient};
use crate::document::Document;
use crate::error::Result;
use crate::provider::UrlProvider;
use crate::strategy::Strategy;

/// What happens when a provider's fetch or extraction fails
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FaultPolicy {
    /// Abort the whole search with the error
    #[default]
    FailFast,
    /// Log the error and continue with the next provider
    SkipProvider,
}

/// Configuration for [`ImageSearcher`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchConfig {
    /// HTTP timeouts, redirects and user agent
    pub client: ClientConfig,
    /// Tried in order
    pub providers: Vec<UrlProvider>,
    /// Tried in order on every fetched page
    pub strategies: Vec<Strategy>,
    /// Whether a failing provider aborts the search or is skipped
    pub fault_policy: FaultPolicy,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            client: ClientConfig::default(),
            providers: vec![UrlProvider::bing()],
            strategies: Strategy::defaults(),
            fault_policy: FaultPolicy::FailFast,
        }
    }
}

/// Image search over one or more results pages
///
/// Pages are fetched one at a time in provider order.
pub struct ImageSearcher {
    client: SearchClient,
    providers: Vec<UrlProvider>,
    strategies: Vec<Strategy>,
    fault_policy: FaultPolicy,
}

impl ImageSearcher {
    /// Create a new searcher with default configuration
    ///
    /// # Errors
    /// Returns error if HTTP client initialization fails
    pub fn new() -> Result<Self> {
        Self::with_config(SearchConfig::default())
    }

    /// Create a new searcher with custom configuration
    ///
    /// # Errors
    /// Returns error if HTTP client initialization fails
    pub fn with_config(config: SearchConfig) -> Result<Self> {
        let client = SearchClient::with_config(config.client)?;
        Ok(Self {
            client,
            providers: config.providers,
            strategies: config.strategies,
            fault_policy: config.fault_policy,
        })
    }

    /// Configured providers, in the order they are tried
    pub fn providers(&self) -> &[UrlProvider] {
        &self.providers
    }

    /// Configured strategies, in the order they are tried
    pub fn strategies(&self) -> &[Strategy] {
        &self.strategies
    }

    /// Find the best image URL for a query
    ///
    /// Returns the first non-empty match of the first strategy that finds
    /// one, on the first provider whose page yields anything.
    ///
    /// # Returns
    /// `Some(url)` on the first match, `None` if nothing matched anywhere
    ///
    /// # Errors
    /// - `HttpError`, `HttpStatus`, `InvalidUrl` if a fetch fails
    /// - `DecodeError` if embedded metadata is malformed
    /// - `InvalidDimension` if an `<img>` size is non-numeric in strict mode
    ///
    /// With [`FaultPolicy::SkipProvider`] these are logged instead and the
    /// next provider is tried.
    ///
    /// # Example
    /// ```no_run
    /// # async fn example() -> imgsearch_core::Result<()> {
    /// use imgsearch_core::ImageSearcher;
    /// let searcher = ImageSearcher::new()?;
    /// if let Some(url) = searcher.search("snowy owl").await? {
    ///     println!("{}", url);
    /// }
    /// # Ok(())
    /// # }
    /// ```
    pub async fn search(&self, key: &str) -> Result<Option<String>> {
        for provider in &self.providers {
            let attempt = self.first_match(provider, key).await;

            if let Some(Some(url)) = self.isolate(provider, attempt)? {
                return Ok(Some(url));
            }
        }

        debug!(key, "no image found");
        Ok(None)
    }

    /// Find every image URL for a query
    ///
    /// Concatenates all strategies' matches over all providers, provider
    /// first, then strategy, then document order. Duplicates are kept.
    ///
    /// # Errors
    /// Same as [`ImageSearcher::search`]
    ///
    /// # Example
    /// ```no_run
    /// # async fn example() -> imgsearch_core::Result<()> {
    /// use imgsearch_core::ImageSearcher;
    /// let searcher = ImageSearcher::new()?;
    /// for url in searcher.search_all("snowy owl").await? {
    ///     println!("{}", url);
    /// }
    /// # Ok(())
    /// # }
    /// ```
    pub async fn search_all(&self, key: &str) -> Result<Vec<String>> {
        let mut urls = Vec::new();

        for provider in &self.providers {
            let attempt = self.all_matches(provider, key).await;

            if let Some(found) = self.isolate(provider, attempt)? {
                urls.extend(found);
            }
        }

        debug!(key, count = urls.len(), "collected image urls");
        Ok(urls)
    }

    async fn fetch(&self, provider: &UrlProvider, key: &str) -> Result<FetchedPage> {
        let url = provider.provide(key);
        debug!(provider = provider.name(), url = %url, "querying provider");
        self.client.fetch(&url).await
    }

    async fn first_match(&self, provider: &UrlProvider, key: &str) -> Result<Option<String>> {
        let page = self.fetch(provider, key).await?;
        self.extract_first(&page)
    }

    async fn all_matches(&self, provider: &UrlProvider, key: &str) -> Result<Vec<String>> {
        let page = self.fetch(provider, key).await?;
        self.extract_all(&page)
    }

    /// Parsing stays synchronous so no `Document` is held across an await
    fn extract_first(&self, page: &FetchedPage) -> Result<Option<String>> {
        let document = Document::parse(&page.body, &page.url);

        for strategy in &self.strategies {
            if let Some(url) = strategy.result(&document)?
                && !url.is_empty()
            {
                debug!(strategy = strategy.name(), url = %url, "strategy matched");
                return Ok(Some(url));
            }
        }

        Ok(None)
    }

    fn extract_all(&self, page: &FetchedPage) -> Result<Vec<String>> {
        let document = Document::parse(&page.body, &page.url);
        let mut urls = Vec::new();

        for strategy in &self.strategies {
            let found = strategy.results(&document)?;
            debug!(strategy = strategy.name(), count = found.len(), "strategy finished");
            urls.extend(found);
        }

        Ok(urls)
    }

    /// Applies the fault policy to one provider's outcome
    ///
    /// `Ok(None)` means the provider was skipped.
    fn isolate<T>(&self, provider: &UrlProvider, outcome: Result<T>) -> Result<Option<T>> {
        match outcome {
            Ok(value) => Ok(Some(value)),
            Err(e) => match self.fault_policy {
                FaultPolicy::FailFast => Err(e),
                FaultPolicy::SkipProvider => {
                    warn!(provider = provider.name(), error = %e, "skipping provider");
                    Ok(None)
                }
            },
        }
    }
}
