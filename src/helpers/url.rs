//! URL helper functions

use percent_encoding::{percent_decode_str, utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use std::collections::HashMap;

/// Characters escaped in query components.
///
/// Brackets, `$` and `*` stay literal so CMS parameters such as
/// `filters[categories][name][$eqi]` and `populate=*` are sent as written.
const QUERY_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~')
    .remove(b'[')
    .remove(b']')
    .remove(b'$')
    .remove(b'*');

/// Encode key/value pairs as a query string (without the leading `?`)
///
/// # Examples
/// ```ignore
/// encode_query(&[("slug", "hello world")]) // -> "slug=hello%20world"
/// ```
pub fn encode_query<K: AsRef<str>, V: AsRef<str>>(pairs: &[(K, V)]) -> String {
    pairs
        .iter()
        .map(|(key, value)| {
            format!(
                "{}={}",
                utf8_percent_encode(key.as_ref(), QUERY_COMPONENT),
                utf8_percent_encode(value.as_ref(), QUERY_COMPONENT)
            )
        })
        .collect::<Vec<_>>()
        .join("&")
}

/// Join an origin, a path and a query into an absolute URL
///
/// # Examples
/// ```ignore
/// api_url("http://cms/", "api/about", &[]) // -> "http://cms/api/about"
/// ```
pub fn api_url<K: AsRef<str>, V: AsRef<str>>(origin: &str, path: &str, query: &[(K, V)]) -> String {
    let origin = origin.trim_end_matches('/');
    let path = path.trim_start_matches('/');
    let query = encode_query(query);

    if query.is_empty() {
        format!("{}/{}", origin, path)
    } else {
        format!("{}/{}?{}", origin, path, query)
    }
}

/// Resolve a CMS media path against the backend origin
///
/// Absolute URLs (an external upload provider) are returned unchanged.
pub fn asset_url(origin: &str, path: &str) -> String {
    if path.starts_with("http://") || path.starts_with("https://") || path.starts_with("//") {
        path.to_string()
    } else {
        format!(
            "{}/{}",
            origin.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }
}

/// Build a site-relative link with a query string
pub fn link_with_query<K: AsRef<str>, V: AsRef<str>>(path: &str, query: &[(K, V)]) -> String {
    let query = encode_query(query);
    if query.is_empty() {
        path.to_string()
    } else {
        format!("{}?{}", path, query)
    }
}

/// Decode one form-encoded query component (`+` is a space)
pub fn decode_component(s: &str) -> String {
    percent_decode_str(&s.replace('+', " "))
        .decode_utf8_lossy()
        .into_owned()
}

/// Decode one URL path segment; unlike query components, `+` stays literal
pub fn decode_path_segment(s: &str) -> String {
    percent_decode_str(s).decode_utf8_lossy().into_owned()
}

/// Parse a query string into a map; later keys win
pub fn decode_query(query: &str) -> HashMap<String, String> {
    query
        .trim_start_matches('?')
        .split('&')
        .filter(|pair| !pair.is_empty())
        .map(|pair| {
            let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
            (decode_component(key), decode_component(value))
        })
        .collect()
}
