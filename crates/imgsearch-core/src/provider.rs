//! Search URL providers
//!
//! A provider turns a query key into the URL of an image-search results page.
//! Providers are tried in the order they are configured.

/// Default Bing host used by [`UrlProvider::bing`]
pub const BING_BASE_URL: &str = "https://cn.bing.com";

/// Placeholder substituted by [`UrlProvider::Template`]
pub const QUERY_PLACEHOLDER: &str = "{query}";

/// Builds search-engine URLs from a query key
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UrlProvider {
    /// Bing image search: `<base_url>/images/search?q=<key>`
    Bing { base_url: String },

    /// Arbitrary endpoint; every `{query}` in `template` receives the key
    Template { name: String, template: String },
}

impl UrlProvider {
    /// Bing provider on the default host
    pub fn bing() -> Self {
        Self::bing_with_base_url(BING_BASE_URL)
    }

    /// Bing provider on a custom host (mirrors, local test servers)
    pub fn bing_with_base_url(base_url: impl Into<String>) -> Self {
        Self::Bing {
            base_url: base_url.into(),
        }
    }

    /// Provider for a custom endpoint template
    ///
    /// # Example
    /// ```
    /// use imgsearch_core::UrlProvider;
    /// let provider = UrlProvider::template("local", "http://localhost/find?text={query}");
    /// assert_eq!(provider.provide("red fox"), "http://localhost/find?text=red fox");
    /// ```
    pub fn template(name: impl Into<String>, template: impl Into<String>) -> Self {
        Self::Template {
            name: name.into(),
            template: template.into(),
        }
    }

    /// Short name used in log events
    pub fn name(&self) -> &str {
        match self {
            Self::Bing { .. } => "bing",
            Self::Template { name, .. } => name,
        }
    }

    /// Builds the results-page URL for `key`
    ///
    /// Only `&` is neutralised (replaced by a space) so the key cannot split
    /// the query string. Other reserved characters such as `#`, `?` or `%`
    /// are embedded verbatim; callers that need them literally must encode
    /// them first.
    ///
    /// # Example
    /// ```
    /// use imgsearch_core::UrlProvider;
    /// let url = UrlProvider::bing().provide("salt & pepper");
    /// assert_eq!(url, "https://cn.bing.com/images/search?q=salt   pepper");
    /// ```
    pub fn provide(&self, key: &str) -> String {
        let key = sanitize_key(key);
        match self {
            Self::Bing { base_url } => {
                format!("{}/images/search?q={}", base_url.trim_end_matches('/'), key)
            }
            Self::Template { template, .. } => template.replace(QUERY_PLACEHOLDER, &key),
        }
    }
}

impl Default for UrlProvider {
    fn default() -> Self {
        Self::bing()
    }
}

/// Replaces every `&` in a query key with a space
///
/// # Example
/// ```
/// use imgsearch_core::provider::sanitize_key;
/// assert_eq!(sanitize_key("tom&jerry"), "tom jerry");
/// ```
pub fn sanitize_key(key: &str) -> String {
    key.replace('&', " ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_bing_provide_simple() {
        let url = UrlProvider::bing().provide("kitten");
        assert_eq!(url, "https://cn.bing.com/images/search?q=kitten");
    }

    #[test]
    fn test_bing_provide_replaces_ampersand() {
        let url = UrlProvider::bing().provide("cats&dogs");
        assert_eq!(url, "https://cn.bing.com/images/search?q=cats dogs");
    }

    #[test]
    fn test_bing_provide_keeps_other_reserved_characters() {
        let url = UrlProvider::bing().provide("c# 100%?");
        assert_eq!(url, "https://cn.bing.com/images/search?q=c# 100%?");
    }

    #[test]
    fn test_bing_provide_empty_key() {
        let url = UrlProvider::bing().provide("");
        assert_eq!(url, "https://cn.bing.com/images/search?q=");
    }

    #[test]
    fn test_bing_custom_base_url_trailing_slash() {
        let url = UrlProvider::bing_with_base_url("http://127.0.0.1:8080/").provide("owl");
        assert_eq!(url, "http://127.0.0.1:8080/images/search?q=owl");
    }

    #[test]
    fn test_template_replaces_every_placeholder() {
        let provider = UrlProvider::template("dup", "http://x/?a={query}&b={query}");
        assert_eq!(provider.provide("a&b"), "http://x/?a=a b&b=a b");
    }

    #[test]
    fn test_provider_names() {
        assert_eq!(UrlProvider::bing().name(), "bing");
        assert_eq!(UrlProvider::template("mirror", "{query}").name(), "mirror");
    }

    #[test]
    fn test_default_provider_is_bing() {
        assert_eq!(UrlProvider::default(), UrlProvider::bing());
    }

    proptest! {
        #[test]
        fn prop_query_value_has_no_ampersand(key in ".*") {
            let url = UrlProvider::bing().provide(&key);
            let (_, value) = url.split_once("?q=").unwrap();
            prop_assert!(!value.contains('&'));
        }

        #[test]
        fn prop_provide_is_deterministic(key in "[a-z& ]{0,24}") {
            let provider = UrlProvider::bing();
            prop_assert_eq!(provider.provide(&key), provider.provide(&key));
        }
    }
}
