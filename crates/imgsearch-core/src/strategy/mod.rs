//! Image URL extraction strategies
//!
//! Each strategy reads a parsed [`Document`] and returns either the best
//! match or every match. Results pages differ in structure, so the searcher
//! runs strategies in order.

pub mod image_tag;
pub mod metadata;

pub use image_tag::{DimensionParsing, ImageTagStrategy};
pub use metadata::MetadataStrategy;

use crate::document::Document;
use crate::error::Result;

/// One way of pulling image URLs out of a page
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Strategy {
    /// Large `<img>` elements
    ImageTag(ImageTagStrategy),
    /// JSON descriptors embedded in marked elements
    Metadata(MetadataStrategy),
}

impl Strategy {
    /// Default order: tag scan first, then embedded metadata
    pub fn defaults() -> Vec<Strategy> {
        vec![
            Strategy::ImageTag(ImageTagStrategy::default()),
            Strategy::Metadata(MetadataStrategy::default()),
        ]
    }

    /// Short name used in log events
    pub fn name(&self) -> &'static str {
        match self {
            Strategy::ImageTag(_) => "image-tag",
            Strategy::Metadata(_) => "metadata",
        }
    }

    /// Best match, or `None` if the page has nothing this strategy accepts
    pub fn result(&self, document: &Document) -> Result<Option<String>> {
        match self {
            Strategy::ImageTag(strategy) => strategy.result(document),
            Strategy::Metadata(strategy) => strategy.result(document),
        }
    }

    /// Every match in document order; may contain duplicates
    pub fn results(&self, document: &Document) -> Result<Vec<String>> {
        match self {
            Strategy::ImageTag(strategy) => strategy.results(document),
            Strategy::Metadata(strategy) => strategy.results(document),
        }
    }
}

impl From<ImageTagStrategy> for Strategy {
    fn from(strategy: ImageTagStrategy) -> Self {
        Strategy::ImageTag(strategy)
    }
}

impl From<MetadataStrategy> for Strategy {
    fn from(strategy: MetadataStrategy) -> Self {
        Strategy::Metadata(strategy)
    }
}
