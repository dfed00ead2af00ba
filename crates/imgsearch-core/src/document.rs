//! Parsed results page
//!
//! Wraps the parsed HTML together with the URL that relative attribute
//! values are resolved against.

use scraper::{Html, Selector};
use url::Url;

use crate::error::{ImageSearchError, Result};

/// A parsed page, read-only and scoped to one fetch
#[derive(Debug)]
pub struct Document {
    html: Html,
    base_url: Url,
}

impl Document {
    /// Parses `html` fetched from `location`
    ///
    /// The first `<base href>` in the markup, when present and resolvable,
    /// replaces `location` as the base for relative URLs.
    pub fn parse(html: &str, location: &Url) -> Self {
        let html = Html::parse_document(html);
        let base_url = base_href(&html)
            .and_then(|href| location.join(href).ok())
            .unwrap_or_else(|| location.clone());

        Self { html, base_url }
    }

    /// URL that relative references are resolved against
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Resolves an attribute value to an absolute URL
    ///
    /// Returns `None` for blank values and values that do not form a URL.
    pub fn resolve(&self, reference: &str) -> Option<String> {
        let reference = reference.trim();
        if reference.is_empty() {
            return None;
        }

        self.base_url.join(reference).ok().map(|url| url.to_string())
    }

    pub(crate) fn html(&self) -> &Html {
        &self.html
    }
}

fn base_href(html: &Html) -> Option<&str> {
    let selector = Selector::parse("base[href]").ok()?;
    html.select(&selector).next()?.value().attr("href")
}

/// Compiles a CSS selector, mapping failures to [`ImageSearchError::ParseError`]
pub(crate) fn selector(css: &str) -> Result<Selector> {
    Selector::parse(css)
        .map_err(|e| ImageSearchError::ParseError(format!("Invalid selector {css:?}: {e:?}")))
}
