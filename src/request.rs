//! Request transformers.
//!
//! Small, composable mutations applied to an outgoing request before it is
//! dispatched. The transformers touch disjoint parts of the request (accept
//! header, authorization header, URL query string), so they may be applied in
//! any order.

use std::collections::BTreeMap;

use reqwest::header::{HeaderValue, ACCEPT, AUTHORIZATION};
use reqwest::Request;

/// Set the `Accept` header to the given media type.
///
/// Used to select the stable API version, or a preview version when the
/// response must include fields not yet in the stable shape.
pub fn set_accept_header(request: &mut Request, media_type: &str) {
    // An unrepresentable media type leaves the header unset; the server
    // rejects the request with a format error rather than us failing locally.
    if let Ok(value) = HeaderValue::from_str(media_type) {
        request.headers_mut().insert(ACCEPT, value);
    }
}

/// Add an `Authorization: token {oauth}` header.
///
/// `None` or an empty token is the explicit unauthenticated branch: the
/// request goes out without credentials and any authorization failure comes
/// back from the server.
pub fn authorize(request: &mut Request, oauth_token: Option<&str>) {
    let Some(token) = oauth_token.filter(|t| !t.is_empty()) else {
        return;
    };

    if let Ok(value) = HeaderValue::from_str(&format!("token {token}")) {
        request.headers_mut().insert(AUTHORIZATION, value);
    }
}

/// Merge query parameters into the request URL.
///
/// Keys and values are percent-escaped per RFC 3986 and emitted in sorted key
/// order for deterministic URLs. Any query string already on the URL is kept,
/// with the new parameters appended. An empty parameter map leaves the URL
/// untouched.
pub fn encode_url_parameters(request: &mut Request, parameters: &BTreeMap<String, String>) {
    if parameters.is_empty() {
        return;
    }

    let encoded = parameters
        .iter()
        .map(|(key, value)| format!("{}={}", escape(key), escape(value)))
        .collect::<Vec<_>>()
        .join("&");

    let url = request.url_mut();
    let query = match url.query() {
        Some(existing) if !existing.is_empty() => format!("{existing}&{encoded}"),
        _ => encoded,
    };
    url.set_query(Some(&query));
}

/// Percent-escape a query string key or value following RFC 3986.
///
/// All reserved characters are escaped except `?` and `/`, which RFC 3986
/// section 3.4 permits unescaped in a query string so that it can carry a URL.
pub fn escape(string: &str) -> String {
    let mut escaped = String::with_capacity(string.len());

    for byte in string.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'.' | b'_' | b'~' | b'?' | b'/' => {
                escaped.push(byte as char);
            }
            _ => escaped.push_str(&format!("%{byte:02X}")),
        }
    }

    escaped
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::Method;
    use url::Url;

    fn request(url: &str) -> Request {
        Request::new(Method::GET, Url::parse(url).unwrap())
    }

    #[test]
    fn test_set_accept_header() {
        let mut req = request("https://api.github.com/orgs/ustwo/repos");
        set_accept_header(&mut req, "application/vnd.github.v3+json");
        assert_eq!(
            req.headers().get(ACCEPT).unwrap(),
            "application/vnd.github.v3+json"
        );
    }

    #[test]
    fn test_authorize_with_token() {
        let mut req = request("https://api.github.com/user/repos");
        authorize(&mut req, Some("abc123"));
        assert_eq!(req.headers().get(AUTHORIZATION).unwrap(), "token abc123");
    }

    #[test]
    fn test_authorize_without_token() {
        let mut req = request("https://api.github.com/user/repos");
        authorize(&mut req, None);
        assert!(req.headers().get(AUTHORIZATION).is_none());
    }

    #[test]
    fn test_authorize_empty_token_is_unauthenticated() {
        let mut req = request("https://api.github.com/user/repos");
        authorize(&mut req, Some(""));
        assert!(req.headers().get(AUTHORIZATION).is_none());
    }

    #[test]
    fn test_encode_parameters_sorted_key_order() {
        let mut req = request("https://x.com");
        let params = BTreeMap::from([
            ("b".to_string(), "2".to_string()),
            ("a".to_string(), "1".to_string()),
        ]);
        encode_url_parameters(&mut req, &params);
        assert_eq!(req.url().as_str(), "https://x.com/?a=1&b=2");
    }

    #[test]
    fn test_encode_empty_parameters_is_noop() {
        let mut req = request("https://x.com/path?type=all");
        encode_url_parameters(&mut req, &BTreeMap::new());
        assert_eq!(req.url().as_str(), "https://x.com/path?type=all");
    }

    #[test]
    fn test_encode_appends_to_existing_query() {
        let mut req = request("https://x.com/repos?page=2");
        let params = BTreeMap::from([("type".to_string(), "all".to_string())]);
        encode_url_parameters(&mut req, &params);
        assert_eq!(req.url().as_str(), "https://x.com/repos?page=2&type=all");
    }

    #[test]
    fn test_escape_reserved_characters() {
        assert_eq!(escape("a=b&c"), "a%3Db%26c");
        assert_eq!(escape("x[y]:z@"), "x%5By%5D%3Az%40");
        assert_eq!(escape("!$'()*+,;"), "%21%24%27%28%29%2A%2B%2C%3B");
    }

    #[test]
    fn test_escape_keeps_question_mark_and_slash() {
        assert_eq!(escape("http://x.com/a?b"), "http%3A//x.com/a?b");
    }

    #[test]
    fn test_escape_unreserved_untouched() {
        assert_eq!(escape("AZaz09-._~"), "AZaz09-._~");
    }
}
