//! Request bodies and their serialization

use serde::Serialize;

use crate::error::{HttpError, HttpResult};
use crate::headers::{has_content_type, Headers, JSON_CONTENT_TYPE};

/// Request body
///
/// Text and bytes are sent verbatim. A structured value is JSON-encoded and,
/// unless the request already carries a `Content-Type`, tagged as
/// `application/json`.
#[derive(Debug, Clone, PartialEq)]
pub enum Body {
    /// UTF-8 text, sent as-is
    Text(String),
    /// Raw bytes, sent as-is
    Bytes(Vec<u8>),
    /// Value to encode as JSON
    Structured(serde_json::Value),
}

impl Body {
    /// Capture any serializable value as a structured body
    pub fn structured<T>(value: &T) -> HttpResult<Self>
    where
        T: Serialize + ?Sized,
    {
        serde_json::to_value(value)
            .map(Body::Structured)
            .map_err(|e| HttpError::Serialization(format!("Cannot encode request body: {}", e)))
    }

    /// Resolve the body to the bytes that go on the wire
    ///
    /// Only `headers` is touched: a structured body adds
    /// `Content-Type: application/json` when no content type is set yet.
    pub(crate) fn resolve(self, headers: &mut Headers) -> HttpResult<Vec<u8>> {
        match self {
            Body::Text(text) => Ok(text.into_bytes()),
            Body::Bytes(bytes) => Ok(bytes),
            Body::Structured(value) => {
                let encoded = serde_json::to_vec(&value).map_err(|e| {
                    HttpError::Serialization(format!("Cannot encode request body: {}", e))
                })?;
                if !has_content_type(headers) {
                    headers.insert("Content-Type".to_string(), JSON_CONTENT_TYPE.to_string());
                }
                Ok(encoded)
            }
        }
    }
}

impl From<String> for Body {
    fn from(text: String) -> Self {
        Body::Text(text)
    }
}

impl From<&str> for Body {
    fn from(text: &str) -> Self {
        Body::Text(text.to_string())
    }
}

impl From<Vec<u8>> for Body {
    fn from(bytes: Vec<u8>) -> Self {
        Body::Bytes(bytes)
    }
}

impl From<&[u8]> for Body {
    fn from(bytes: &[u8]) -> Self {
        Body::Bytes(bytes.to_vec())
    }
}

impl From<serde_json::Value> for Body {
    fn from(value: serde_json::Value) -> Self {
        Body::Structured(value)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use serde_json::json;

    use super::*;

    #[test]
    fn test_text_is_verbatim() {
        let mut headers = Headers::new();
        let bytes = Body::from("hello").resolve(&mut headers).expect("text resolves");
        assert_eq!(bytes, b"hello");
        assert!(headers.is_empty());
    }

    #[test]
    fn test_bytes_are_verbatim() {
        let mut headers = Headers::new();
        let raw = vec![0u8, 159, 146, 150];
        let bytes = Body::from(raw.clone())
            .resolve(&mut headers)
            .expect("bytes resolve");
        assert_eq!(bytes, raw);
        assert!(headers.is_empty());
    }

    #[test]
    fn test_structured_injects_json_content_type() {
        let mut headers = Headers::new();
        let bytes = Body::from(json!({"a": 1}))
            .resolve(&mut headers)
            .expect("structured resolves");
        assert_eq!(bytes, br#"{"a":1}"#);
        assert_eq!(headers["Content-Type"], "application/json");
    }

    #[test]
    fn test_structured_keeps_explicit_content_type() {
        let mut headers = Headers::from([(
            "content-type".to_string(),
            "application/merge-patch+json".to_string(),
        )]);
        Body::from(json!({"a": 1}))
            .resolve(&mut headers)
            .expect("structured resolves");
        assert_eq!(headers.len(), 1);
        assert_eq!(headers["content-type"], "application/merge-patch+json");
    }

    #[test]
    fn test_structured_from_serialize() {
        #[derive(Serialize)]
        struct Post<'a> {
            title: &'a str,
            user_id: u32,
        }

        let body = Body::structured(&Post {
            title: "hello",
            user_id: 1,
        })
        .expect("struct encodes");
        assert_eq!(body, Body::Structured(json!({"title": "hello", "user_id": 1})));
    }

    #[test]
    fn test_structured_rejects_non_string_keys() {
        let mut map = BTreeMap::new();
        map.insert((1, 2), "tuple keys cannot be JSON object keys");

        let err = Body::structured(&map).expect_err("tuple keys do not encode");
        match err {
            HttpError::Serialization(msg) => assert!(msg.starts_with("Cannot encode request body")),
            _ => panic!("Expected HttpError::Serialization"),
        }
    }
}
