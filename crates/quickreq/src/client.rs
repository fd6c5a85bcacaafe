//! reqwest-backed executor, its builder and the one-shot verb functions

use std::time::Duration;

use tracing::{debug, instrument, warn};

use crate::body::Body;
use crate::error::{describe, HttpError, HttpResult};
use crate::executor::RequestExecutor;
use crate::headers::{collapse_header_map, to_header_map, Headers};
use crate::request::{PreparedRequest, RequestSpec, DEFAULT_TIMEOUT};
use crate::response::ResponseEnvelope;

/// HTTP client wrapper
#[derive(Debug, Clone)]
pub struct HttpClient {
    inner: reqwest::Client,
    default_timeout: Duration,
}

impl Default for HttpClient {
    fn default() -> Self {
        Self::new()
    }
}

impl HttpClient {
    /// Create a new HTTP client with default settings
    pub fn new() -> Self {
        Self {
            inner: reqwest::Client::new(),
            default_timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Create a new HTTP client builder
    pub fn builder() -> HttpClientBuilder {
        HttpClientBuilder::default()
    }

    /// Create an HttpClient from a reqwest::Client
    pub fn from_reqwest(client: reqwest::Client) -> Self {
        Self {
            inner: client,
            default_timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Deadline used for requests that do not set one
    pub fn default_timeout(&self) -> Duration {
        self.default_timeout
    }

    #[instrument(skip(self, request), fields(method = %request.method, url = %request.url))]
    async fn send(&self, request: PreparedRequest) -> HttpResult<ResponseEnvelope> {
        let PreparedRequest {
            method,
            url,
            headers,
            body,
            timeout,
        } = request;

        let mut builder = self
            .inner
            .request(method.into(), url)
            .headers(to_header_map(&headers)?)
            .timeout(timeout);
        if let Some(body) = body {
            builder = builder.body(body);
        }
        let request = builder.build()?;

        debug!(?timeout, "Sending request");

        let response = self.inner.execute(request).await.map_err(|e| {
            warn!("Request failed: {}", describe(&e));
            HttpError::from(e)
        })?;

        let status = response.status().as_u16();
        let headers = collapse_header_map(response.headers());

        // Deadline covers the body too: a timeout here stays a transport failure
        let body = response.bytes().await.map_err(|e| {
            warn!(status, "Reading response body failed: {}", describe(&e));
            match HttpError::from(e) {
                HttpError::Transport {
                    message,
                    timed_out: false,
                } => HttpError::ResponseRead(message),
                other => other,
            }
        })?;

        debug!(status, body_len = body.len(), "Received response");

        Ok(ResponseEnvelope::new(status, headers, body.to_vec()))
    }
}

impl RequestExecutor for HttpClient {
    async fn execute(&self, spec: RequestSpec) -> HttpResult<ResponseEnvelope> {
        let request = spec.prepare_with_default(self.default_timeout)?;
        self.send(request).await
    }
}

/// HTTP client builder
#[derive(Debug, Default)]
pub struct HttpClientBuilder {
    timeout: Option<Duration>,
}

impl HttpClientBuilder {
    /// Default deadline for requests that do not set one (zero is ignored)
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout).filter(|t| !t.is_zero());
        self
    }

    /// Build the HTTP client
    pub fn build(self) -> HttpResult<HttpClient> {
        let client = reqwest::Client::builder().build()?;
        Ok(HttpClient {
            inner: client,
            default_timeout: self.timeout.unwrap_or(DEFAULT_TIMEOUT),
        })
    }
}

// === One-shot verb functions ===
//
// Each call builds its own client, so calls share no state.

/// GET request
pub async fn get(url: &str, headers: Option<&Headers>) -> HttpResult<ResponseEnvelope> {
    HttpClient::new().get(url, headers).await
}

/// POST request with an optional body
pub async fn post(
    url: &str,
    body: Option<Body>,
    headers: Option<&Headers>,
) -> HttpResult<ResponseEnvelope> {
    HttpClient::new().post(url, body, headers).await
}

/// PUT request with an optional body
pub async fn put(
    url: &str,
    body: Option<Body>,
    headers: Option<&Headers>,
) -> HttpResult<ResponseEnvelope> {
    HttpClient::new().put(url, body, headers).await
}

/// DELETE request
pub async fn delete(url: &str, headers: Option<&Headers>) -> HttpResult<ResponseEnvelope> {
    HttpClient::new().delete(url, headers).await
}

/// PATCH request with an optional body
pub async fn patch(
    url: &str,
    body: Option<Body>,
    headers: Option<&Headers>,
) -> HttpResult<ResponseEnvelope> {
    HttpClient::new().patch(url, body, headers).await
}

/// HEAD request
pub async fn head(url: &str, headers: Option<&Headers>) -> HttpResult<ResponseEnvelope> {
    HttpClient::new().head(url, headers).await
}

/// Run a fully described request on a fresh client
pub async fn execute(spec: RequestSpec) -> HttpResult<ResponseEnvelope> {
    HttpClient::new().execute(spec).await
}
