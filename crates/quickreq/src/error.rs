//! HTTP error types

use std::error::Error as StdError;

use thiserror::Error;

/// Result type returned by every request operation
pub type HttpResult<T, E = HttpError> = Result<T, E>;

/// Errors that can occur while building, sending or reading a request
///
/// A non-2xx status is not an error: it is reported through
/// [`ResponseEnvelope::status`](crate::ResponseEnvelope::status).
#[derive(Debug, Error)]
pub enum HttpError {
    /// Structured body could not be encoded (or a response body decoded)
    #[error("Serialization error: {0}")]
    Serialization(String),
    /// Invalid method, URL, header or client configuration
    #[error("Request construction error: {0}")]
    RequestConstruction(String),
    /// Network, TLS or deadline failure
    #[error("Transport error: {message}")]
    Transport {
        /// Underlying cause
        message: String,
        /// Whether the request deadline fired
        timed_out: bool,
    },
    /// Response body could not be read to completion
    #[error("Response read error: {0}")]
    ResponseRead(String),
}

impl HttpError {
    /// Build a transport error that is not a timeout
    pub fn transport(message: impl Into<String>) -> Self {
        HttpError::Transport {
            message: message.into(),
            timed_out: false,
        }
    }

    /// True when the request deadline was exceeded
    pub fn is_timeout(&self) -> bool {
        matches!(
            self,
            HttpError::Transport {
                timed_out: true,
                ..
            }
        )
    }
}

/// Render an error together with its chain of sources
///
/// reqwest's own message only names the failing URL. The cause is in the
/// source chain.
pub(crate) fn describe(err: &(dyn StdError + 'static)) -> String {
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }
    message
}

impl From<reqwest::Error> for HttpError {
    fn from(err: reqwest::Error) -> Self {
        let message = describe(&err);
        if err.is_timeout() {
            HttpError::Transport {
                message,
                timed_out: true,
            }
        } else if err.is_builder() {
            HttpError::RequestConstruction(message)
        } else if err.is_body() || err.is_decode() {
            HttpError::ResponseRead(message)
        } else {
            HttpError::transport(message)
        }
    }
}

impl From<serde_json::Error> for HttpError {
    fn from(err: serde_json::Error) -> Self {
        HttpError::Serialization(err.to_string())
    }
}

impl From<url::ParseError> for HttpError {
    fn from(err: url::ParseError) -> Self {
        HttpError::RequestConstruction(format!("Invalid URL: {}", err))
    }
}
