//! Embedded JSON metadata scan
//!
//! Bing wraps every result tile in an anchor with class `iusc` whose `m`
//! attribute holds a JSON descriptor, e.g.
//!
//! ```html
//! <a class="iusc" m='{"turl":"https://tse1.mm.bing.net/th?id=...","murl":"https://example.com/owl.jpg"}'>
//! ```

use scraper::{CaseSensitivity, ElementRef};

use crate::document::{Document, selector};
use crate::error::{ImageSearchError, Result};
use crate::types::ImageMetadata;

/// Default marker class of result tiles
pub const DEFAULT_MARKER_CLASS: &str = "iusc";

/// Default attribute holding the JSON descriptor
pub const DEFAULT_METADATA_ATTRIBUTE: &str = "m";

/// Scans marked elements and decodes their JSON descriptor
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetadataStrategy {
    /// Class that marks result elements
    pub marker_class: String,
    /// Attribute that carries the JSON descriptor
    pub attribute: String,
}

impl Default for MetadataStrategy {
    fn default() -> Self {
        Self {
            marker_class: DEFAULT_MARKER_CLASS.to_string(),
            attribute: DEFAULT_METADATA_ATTRIBUTE.to_string(),
        }
    }
}

impl MetadataStrategy {
    /// Returns the master URL of the first marked element
    ///
    /// Only the first element is decoded. An empty master URL counts as no
    /// match, so the searcher moves on to the next strategy.
    pub fn result(&self, document: &Document) -> Result<Option<String>> {
        let Some(element) = self.marked_elements(document)?.into_iter().next() else {
            return Ok(None);
        };

        let master_url = self.decode(&element)?.master_url;
        Ok(Some(master_url).filter(|url| !url.is_empty()))
    }

    /// Returns thumbnail and master URL of every marked element
    ///
    /// Pairs appear in document order, thumbnail first. Empty URLs are kept
    /// in place.
    pub fn results(&self, document: &Document) -> Result<Vec<String>> {
        let mut urls = Vec::new();

        for metadata in self.descriptors(document)? {
            urls.push(metadata.thumbnail_url);
            urls.push(metadata.master_url);
        }

        Ok(urls)
    }

    /// Decodes the descriptor of every marked element in document order
    ///
    /// # Errors
    /// - `DecodeError` if any descriptor is missing or malformed
    /// - `ParseError` if the marker class is empty or contains whitespace
    pub fn descriptors(&self, document: &Document) -> Result<Vec<ImageMetadata>> {
        self.marked_elements(document)?
            .iter()
            .map(|element| self.decode(element))
            .collect()
    }

    /// Elements whose class list contains the marker class, in document order
    ///
    /// The class is compared literally, never interpreted as CSS.
    fn marked_elements<'a>(&self, document: &'a Document) -> Result<Vec<ElementRef<'a>>> {
        if self.marker_class.is_empty() || self.marker_class.contains(char::is_whitespace) {
            return Err(ImageSearchError::ParseError(format!(
                "Invalid marker class: {:?}",
                self.marker_class
            )));
        }

        let classed = selector("[class]")?;
        Ok(document
            .html()
            .select(&classed)
            .filter(|element| {
                element
                    .value()
                    .has_class(&self.marker_class, CaseSensitivity::CaseSensitive)
            })
            .collect())
    }

    /// A missing attribute decodes as the empty string and therefore fails
    fn decode(&self, element: &ElementRef) -> Result<ImageMetadata> {
        let raw = element.value().attr(&self.attribute).unwrap_or_default();
        Ok(serde_json::from_str(raw)?)
    }
}
