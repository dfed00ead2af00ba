//! Error types for the image search scraper
//!
//! "Not found" is never an error here: operations report it as `Ok(None)`
//! or an empty vector. Every variant below is a fault that aborts the call.

use thiserror::Error;

/// Error type for all image search operations
#[derive(Error, Debug)]
pub enum ImageSearchError {
    /// HTTP transport failed (DNS, connect, timeout, body read)
    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    /// Server answered with a non-success status
    #[error("HTTP {status} for: {url}")]
    HttpStatus { status: u16, url: String },

    /// A provider produced a URL that cannot be requested
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// Embedded image metadata does not have the expected shape
    #[error("Failed to decode image metadata: {0}")]
    DecodeError(#[from] serde_json::Error),

    /// `width` or `height` attribute is present but not an integer
    #[error("Invalid {attribute} attribute: {value:?}")]
    InvalidDimension {
        attribute: &'static str,
        value: String,
    },

    /// Failed to build a selector or otherwise parse HTML
    #[error("Failed to parse HTML: {0}")]
    ParseError(String),
}

/// Result type alias for image search operations
pub type Result<T> = std::result::Result<T, ImageSearchError>;
