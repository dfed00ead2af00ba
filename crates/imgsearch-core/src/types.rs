//! Core data types for the image search scraper

use serde::{Deserialize, Serialize};

/// Image descriptor embedded by Bing in the `m` attribute of `.iusc` anchors
///
/// Only the thumbnail and master URLs are required; unknown fields are
/// ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageMetadata {
    /// Thumbnail URL (`turl`)
    #[serde(rename = "turl")]
    pub thumbnail_url: String,

    /// Full-resolution image URL (`murl`)
    #[serde(rename = "murl")]
    pub master_url: String,

    /// Page the image was found on (`purl`)
    #[serde(rename = "purl", default, skip_serializing_if = "Option::is_none")]
    pub page_url: Option<String>,

    /// Image title (`t`)
    #[serde(rename = "t", default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}
