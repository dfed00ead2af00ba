//! `<img>` tag scan
//!
//! Picks images whose declared `width` and `height` both exceed a minimum,
//! which filters out icons, spacers and tracking pixels.

use scraper::ElementRef;
use tracing::debug;

use crate::document::{Document, selector};
use crate::error::{ImageSearchError, Result};

/// Default lower bound (exclusive) for `width` and `height`
pub const DEFAULT_MIN_DIMENSION: i32 = 100;

/// How a non-numeric `width`/`height` attribute is treated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DimensionParsing {
    /// Fail the scan with [`ImageSearchError::InvalidDimension`]
    #[default]
    Strict,
    /// Skip the element
    Lenient,
}

/// Scans `<img>` elements and keeps the large ones
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageTagStrategy {
    /// Width must be strictly greater than this
    pub min_width: i32,
    /// Height must be strictly greater than this
    pub min_height: i32,
    /// Treatment of non-numeric `width`/`height`
    pub dimension_parsing: DimensionParsing,
}

impl Default for ImageTagStrategy {
    fn default() -> Self {
        Self {
            min_width: DEFAULT_MIN_DIMENSION,
            min_height: DEFAULT_MIN_DIMENSION,
            dimension_parsing: DimensionParsing::Strict,
        }
    }
}

impl ImageTagStrategy {
    /// Lenient variant of the default strategy
    pub fn lenient() -> Self {
        Self {
            dimension_parsing: DimensionParsing::Lenient,
            ..Self::default()
        }
    }

    /// Returns the first accepted image URL in document order
    pub fn result(&self, document: &Document) -> Result<Option<String>> {
        let img_selector = selector("img")?;

        for element in document.html().select(&img_selector) {
            if let Some(url) = self.accept(document, &element)? {
                return Ok(Some(url));
            }
        }

        Ok(None)
    }

    /// Returns every accepted image URL in document order
    pub fn results(&self, document: &Document) -> Result<Vec<String>> {
        let img_selector = selector("img")?;
        let mut urls = Vec::new();

        for element in document.html().select(&img_selector) {
            if let Some(url) = self.accept(document, &element)? {
                urls.push(url);
            }
        }

        Ok(urls)
    }

    /// Checks a single `<img>` element
    ///
    /// Conditions are evaluated left to right and stop at the first failure,
    /// so a malformed `height` is only reported once `src` and `width` pass.
    fn accept(&self, document: &Document, element: &ElementRef) -> Result<Option<String>> {
        let attrs = element.value();

        let Some(url) = attrs.attr("src").and_then(|src| document.resolve(src)) else {
            return Ok(None);
        };

        if !self.exceeds("width", attrs.attr("width"), self.min_width)? {
            return Ok(None);
        }

        if !self.exceeds("height", attrs.attr("height"), self.min_height)? {
            return Ok(None);
        }

        Ok(Some(url))
    }

    fn exceeds(&self, attribute: &'static str, value: Option<&str>, min: i32) -> Result<bool> {
        let value = value.unwrap_or_default();
        if value.is_empty() {
            return Ok(false);
        }

        match value.parse::<i32>() {
            Ok(parsed) => Ok(parsed > min),
            Err(_) => match self.dimension_parsing {
                DimensionParsing::Strict => Err(ImageSearchError::InvalidDimension {
                    attribute,
                    value: value.to_string(),
                }),
                DimensionParsing::Lenient => {
                    debug!(attribute, value, "skipping image with non-numeric dimension");
                    Ok(false)
                }
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use url::Url;

    fn document(body: &str) -> Document {
        let html = format!("<html><body>{}</body></html>", body);
        let location = Url::parse("https://cn.bing.com/images/search?q=owl").unwrap();
        Document::parse(&html, &location)
    }

    #[test]
    fn test_result_empty_document() {
        let doc = document("");
        assert_eq!(ImageTagStrategy::default().result(&doc).unwrap(), None);
        assert!(ImageTagStrategy::default().results(&doc).unwrap().is_empty());
    }

    #[test]
    fn test_result_returns_first_qualifying_image() {
        let doc = document(
            r#"
            <img src="https://img.example.com/icon.png" width="16" height="16">
            <img src="https://img.example.com/first.jpg" width="300" height="200">
            <img src="https://img.example.com/second.jpg" width="640" height="480">
            "#,
        );

        let url = ImageTagStrategy::default().result(&doc).unwrap();
        assert_eq!(url.as_deref(), Some("https://img.example.com/first.jpg"));
    }

    #[test]
    fn test_results_in_document_order() {
        let doc = document(
            r#"
            <div><img src="https://img.example.com/a.jpg" width="101" height="101"></div>
            <img src="https://img.example.com/b.jpg" width="100" height="500">
            <p><img src="https://img.example.com/c.jpg" width="500" height="101"></p>
            <img src="https://img.example.com/a.jpg" width="200" height="200">
            "#,
        );

        let urls = ImageTagStrategy::default().results(&doc).unwrap();
        assert_eq!(
            urls,
            vec![
                "https://img.example.com/a.jpg",
                "https://img.example.com/c.jpg",
                "https://img.example.com/a.jpg",
            ]
        );
    }

    #[test]
    fn test_excludes_small_or_sourceless_images() {
        let doc = document(
            r#"
            <img src="https://img.example.com/narrow.jpg" width="100" height="400">
            <img src="https://img.example.com/short.jpg" width="400" height="100">
            <img width="400" height="400">
            <img src="" width="400" height="400">
            <img src="https://img.example.com/nowidth.jpg" height="400">
            <img src="https://img.example.com/noheight.jpg" width="400">
            <img src="https://img.example.com/emptywidth.jpg" width="" height="400">
            "#,
        );

        let strategy = ImageTagStrategy::default();
        assert_eq!(strategy.result(&doc).unwrap(), None);
        assert!(strategy.results(&doc).unwrap().is_empty());
    }

    #[test]
    fn test_relative_src_resolved_against_page() {
        let doc = document(r#"<img src="/th/id/OIP.owl" width="474" height="316">"#);
        let url = ImageTagStrategy::default().result(&doc).unwrap();
        assert_eq!(url.as_deref(), Some("https://cn.bing.com/th/id/OIP.owl"));
    }

    #[test]
    fn test_strict_non_numeric_width_fails() {
        let doc = document(r#"<img src="https://img.example.com/a.jpg" width="100%" height="300">"#);
        let strategy = ImageTagStrategy::default();

        match strategy.result(&doc) {
            Err(ImageSearchError::InvalidDimension { attribute, value }) => {
                assert_eq!(attribute, "width");
                assert_eq!(value, "100%");
            }
            other => panic!("Expected InvalidDimension error, got {:?}", other),
        }
        assert!(strategy.results(&doc).is_err());
    }

    #[test]
    fn test_strict_non_numeric_height_fails() {
        let doc = document(r#"<img src="https://img.example.com/a.jpg" width="300" height="auto">"#);
        let result = ImageTagStrategy::default().results(&doc);
        assert!(matches!(
            result,
            Err(ImageSearchError::InvalidDimension { attribute: "height", .. })
        ));
    }

    #[test]
    fn test_strict_short_circuits_before_bad_dimension() {
        // Width check fails first, so the malformed height is never parsed
        let doc = document(
            r#"
            <img src="https://img.example.com/a.jpg" width="50" height="auto">
            <img width="abc" height="abc">
            <img src="https://img.example.com/b.jpg" width="200" height="200">
            "#,
        );

        let url = ImageTagStrategy::default().result(&doc).unwrap();
        assert_eq!(url.as_deref(), Some("https://img.example.com/b.jpg"));
    }

    #[test]
    fn test_strict_result_stops_before_later_bad_dimension() {
        let doc = document(
            r#"
            <img src="https://img.example.com/a.jpg" width="200" height="200">
            <img src="https://img.example.com/b.jpg" width="wide" height="200">
            "#,
        );

        let strategy = ImageTagStrategy::default();
        assert_eq!(
            strategy.result(&doc).unwrap().as_deref(),
            Some("https://img.example.com/a.jpg")
        );
        assert!(strategy.results(&doc).is_err());
    }

    #[test]
    fn test_lenient_skips_non_numeric_dimension() {
        let doc = document(
            r#"
            <img src="https://img.example.com/a.jpg" width="100%" height="300">
            <img src="https://img.example.com/b.jpg" width="300" height=" 300">
            <img src="https://img.example.com/c.jpg" width="300" height="300">
            "#,
        );

        let strategy = ImageTagStrategy::lenient();
        assert_eq!(
            strategy.result(&doc).unwrap().as_deref(),
            Some("https://img.example.com/c.jpg")
        );
        assert_eq!(
            strategy.results(&doc).unwrap(),
            vec!["https://img.example.com/c.jpg"]
        );
    }

    #[test]
    fn test_custom_minimum_dimensions() {
        let doc = document(
            r#"
            <img src="https://img.example.com/small.jpg" width="64" height="64">
            <img src="https://img.example.com/tiny.jpg" width="32" height="32">
            "#,
        );

        let strategy = ImageTagStrategy {
            min_width: 40,
            min_height: 40,
            ..ImageTagStrategy::default()
        };
        assert_eq!(
            strategy.results(&doc).unwrap(),
            vec!["https://img.example.com/small.jpg"]
        );
    }
}
