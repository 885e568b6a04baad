//! Parsing of RFC 5988-style `Link` response headers.
//!
//! GitHub encodes pagination as relation-tagged URLs in a single `Link`
//! header, for example:
//!
//! ```text
//! <https://api.github.com/x?page=2>; rel="next", <https://api.github.com/x?page=9>; rel="last"
//! ```

use std::collections::HashMap;

use reqwest::header::{HeaderMap, LINK};

/// Link relations extracted from a response's `Link` header.
///
/// Maps a relation name (e.g. `next`, `last`) to that link's attributes. The
/// URL itself is stored under the normalized `url` attribute with its angle
/// brackets stripped. Derived fresh from each response; never persisted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LinkRelations {
    relations: HashMap<String, HashMap<String, String>>,
}

impl LinkRelations {
    /// Parse a raw `Link` header value.
    ///
    /// A malformed header never fails; entries that cannot be interpreted are
    /// dropped. An entry without a `rel` attribute is parsed but discarded as
    /// there is no way to reference it.
    pub fn parse(content: &str) -> Self {
        let mut relations = HashMap::new();

        for entry in content.split(", ") {
            let segments: Vec<&str> = entry.split(';').map(str::trim).collect();
            if segments.len() < 2 {
                continue;
            }

            let url = segments[0]
                .trim_start_matches('<')
                .trim_end_matches('>')
                .to_string();

            let mut link = HashMap::new();
            link.insert("url".to_string(), url);

            for segment in &segments[1..] {
                let Some((key, value)) = segment.split_once('=') else {
                    continue;
                };
                let value = if value.starts_with('"') && value.ends_with('"') && value.len() >= 2 {
                    &value[1..value.len() - 1]
                } else {
                    value
                };
                link.insert(key.to_string(), value.to_string());
            }

            if let Some(rel) = link.get("rel") {
                relations.insert(rel.clone(), link);
            }
        }

        Self { relations }
    }

    /// Extract link relations from response headers.
    ///
    /// An absent or non-ASCII `Link` header yields an empty mapping.
    pub fn from_headers(headers: &HeaderMap) -> Self {
        headers
            .get(LINK)
            .and_then(|value| value.to_str().ok())
            .map(Self::parse)
            .unwrap_or_default()
    }

    /// Attributes of the named relation, if present.
    pub fn get(&self, rel: &str) -> Option<&HashMap<String, String>> {
        self.relations.get(rel)
    }

    /// The URL of the `next` relation, if the response carries one.
    pub fn next_url(&self) -> Option<&str> {
        self.get("next")
            .and_then(|link| link.get("url"))
            .map(String::as_str)
    }

    /// True if no referenceable relations were found.
    pub fn is_empty(&self) -> bool {
        self.relations.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::header::HeaderValue;

    #[test]
    fn test_parse_next_and_last() {
        let links = LinkRelations::parse(
            "<https://api.example.com/x?page=2>; rel=\"next\", \
             <https://api.example.com/x?page=9>; rel=\"last\"",
        );

        assert_eq!(links.next_url(), Some("https://api.example.com/x?page=2"));
        assert_eq!(
            links.get("last").and_then(|l| l.get("url")).map(String::as_str),
            Some("https://api.example.com/x?page=9")
        );
    }

    #[test]
    fn test_parse_unquoted_attribute_value() {
        let links = LinkRelations::parse("<https://example.com/a>; rel=next");
        assert_eq!(links.next_url(), Some("https://example.com/a"));
    }

    #[test]
    fn test_parse_extra_attributes() {
        let links =
            LinkRelations::parse("<https://example.com/a>; rel=\"next\"; title=\"page two\"");
        let next = links.get("next").unwrap();
        assert_eq!(next.get("title").map(String::as_str), Some("page two"));
    }

    #[test]
    fn test_entry_without_rel_is_discarded() {
        let links = LinkRelations::parse("<https://example.com/a>; title=\"untagged\"");
        assert!(links.is_empty());
    }

    #[test]
    fn test_bare_url_is_unreferenceable() {
        let links = LinkRelations::parse("<https://example.com/a>");
        assert!(links.is_empty());
    }

    #[test]
    fn test_malformed_header_yields_empty_mapping() {
        assert!(LinkRelations::parse("").is_empty());
        assert!(LinkRelations::parse("not a link header").is_empty());
    }

    #[test]
    fn test_from_headers_missing_link() {
        let headers = HeaderMap::new();
        assert!(LinkRelations::from_headers(&headers).is_empty());
    }

    #[test]
    fn test_from_headers_present() {
        let mut headers = HeaderMap::new();
        headers.insert(
            LINK,
            HeaderValue::from_static("<https://example.com/b>; rel=\"next\""),
        );
        let links = LinkRelations::from_headers(&headers);
        assert_eq!(links.next_url(), Some("https://example.com/b"));
    }
}
