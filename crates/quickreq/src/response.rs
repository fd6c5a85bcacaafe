//! Normalized HTTP response

use serde::de::DeserializeOwned;

use crate::error::{HttpError, HttpResult};
use crate::headers::{find_header, Headers};

/// Fully buffered result of one HTTP call
///
/// Header names are lowercase, as the transport reports them. When a header
/// was received more than once only its first value is kept.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResponseEnvelope {
    /// HTTP status code
    pub status: u16,
    /// Response headers, first value per name
    ///
    /// Keys are lowercase, so indexing with `"Content-Type"` panics. Use
    /// [`header`](Self::header) for case-insensitive lookup.
    pub headers: Headers,
    /// Raw body bytes
    pub body: Vec<u8>,
    /// Body decoded as UTF-8, invalid sequences replaced
    pub text: String,
}

impl ResponseEnvelope {
    /// Build an envelope, decoding `body` into `text`
    pub fn new(status: u16, headers: Headers, body: Vec<u8>) -> Self {
        let text = String::from_utf8_lossy(&body).into_owned();
        Self {
            status,
            headers,
            body,
            text,
        }
    }

    /// Check if the response status is a success (2xx)
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Check if the response status is a client error (4xx)
    pub fn is_client_error(&self) -> bool {
        (400..500).contains(&self.status)
    }

    /// Check if the response status is a server error (5xx)
    pub fn is_server_error(&self) -> bool {
        (500..600).contains(&self.status)
    }

    /// Case-insensitive header lookup
    pub fn header(&self, name: &str) -> Option<&str> {
        find_header(&self.headers, name)
    }

    /// Deserialize the body as JSON
    pub fn json<T: DeserializeOwned>(&self) -> HttpResult<T> {
        serde_json::from_slice(&self.body).map_err(HttpError::from)
    }
}
