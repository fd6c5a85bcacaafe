//! Header map helpers
//!
//! Callers pass headers as a plain `HashMap<String, String>`. These helpers
//! convert that map to the transport's [`HeaderMap`] and back.

use std::collections::HashMap;

use reqwest::header::{HeaderMap, HeaderName, HeaderValue, CONTENT_TYPE};

use crate::error::{HttpError, HttpResult};

/// Header name to value mapping used for requests and responses
pub type Headers = HashMap<String, String>;

/// Media type injected for structured bodies
pub const JSON_CONTENT_TYPE: &str = "application/json";

/// Case-insensitive lookup of a header value
pub fn find_header<'a>(headers: &'a Headers, name: &str) -> Option<&'a str> {
    headers
        .iter()
        .find(|(key, _)| key.eq_ignore_ascii_case(name))
        .map(|(_, value)| value.as_str())
}

/// Whether a `Content-Type` header is present, in any casing
pub fn has_content_type(headers: &Headers) -> bool {
    find_header(headers, CONTENT_TYPE.as_str()).is_some()
}

/// Convert caller headers into a transport header map
pub(crate) fn to_header_map(headers: &Headers) -> HttpResult<HeaderMap> {
    let mut map = HeaderMap::with_capacity(headers.len());
    for (key, value) in headers {
        let name = HeaderName::from_bytes(key.as_bytes()).map_err(|e| {
            HttpError::RequestConstruction(format!("Invalid header name '{}': {}", key, e))
        })?;
        let value = HeaderValue::from_str(value).map_err(|e| {
            HttpError::RequestConstruction(format!("Invalid header value for '{}': {}", key, e))
        })?;
        map.insert(name, value);
    }
    Ok(map)
}

/// Collapse a transport header map, keeping the first value of each name
///
/// Values that are not valid visible ASCII are decoded lossily.
pub(crate) fn collapse_header_map(map: &HeaderMap) -> Headers {
    let mut headers = Headers::with_capacity(map.keys_len());
    for name in map.keys() {
        if let Some(value) = map.get_all(name).iter().next() {
            headers.insert(
                name.as_str().to_string(),
                String::from_utf8_lossy(value.as_bytes()).into_owned(),
            );
        }
    }
    headers
}
