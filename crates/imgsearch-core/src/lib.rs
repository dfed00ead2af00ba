//! Image Search Scraper Core Library
//!
//! Fetches an image-search results page for a query and extracts image URLs
//! from the markup.
//!
//! # Overview
//!
//! - [`UrlProvider`] builds the results-page URL for a query key
//! - [`SearchClient`] fetches the page
//! - [`Strategy`] pulls image URLs out of the parsed [`Document`], either
//!   from large `<img>` tags or from JSON metadata embedded in result tiles
//! - [`ImageSearcher`] runs every provider and strategy in order
//!
//! # Example
//!
//! ```no_run
//! use imgsearch_core::{ImageSearcher, Result};
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let searcher = ImageSearcher::new()?;
//!
//!     // Best match only
//!     if let Some(url) = searcher.search("snowy owl").await? {
//!         println!("best: {}", url);
//!     }
//!
//!     // Everything every strategy found, duplicates included
//!     for url in searcher.search_all("snowy owl").await? {
//!         println!("{}", url);
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! # Not found vs. failure
//!
//! A page without usable images yields `Ok(None)` / an empty vector. Network,
//! decode and attribute errors are returned as [`ImageSearchError`]; whether
//! they abort the whole search or only skip the failing provider is chosen
//! with [`FaultPolicy`].
//!
//! # Query escaping
//!
//! Query keys are embedded almost verbatim: only `&` is replaced with a
//! space. See [`UrlProvider::provide`].

mod client;
mod document;
mod error;
pub mod provider;
mod searcher;
pub mod strategy;
mod types;

// Re-export client types
pub use client::{ClientConfig, FetchedPage, SearchClient};

// Re-export document type
pub use document::Document;

// Re-export error types
pub use error::{ImageSearchError, Result};

// Re-export providers and strategies
pub use provider::UrlProvider;
pub use strategy::{DimensionParsing, ImageTagStrategy, MetadataStrategy, Strategy};

// Re-export main search API
pub use searcher::{FaultPolicy, ImageSearcher, SearchConfig};

// Re-export data types
pub use types::ImageMetadata;
