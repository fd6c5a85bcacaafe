//! Request description and resolution

use std::time::Duration;

use tracing::{debug, trace};
use url::Url;

use crate::body::Body;
use crate::error::HttpResult;
use crate::headers::Headers;
use crate::method::Method;

/// Deadline applied when a request does not set one
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Description of one HTTP call
///
/// A `RequestSpec` is built per call and consumed by
/// [`RequestExecutor::execute`](crate::RequestExecutor::execute).
#[derive(Debug, Clone, PartialEq)]
pub struct RequestSpec {
    /// HTTP verb
    pub method: Method,
    /// Target URL, parsed when the request is prepared
    pub url: String,
    /// Request headers
    pub headers: Headers,
    /// Optional body
    pub body: Option<Body>,
    /// Deadline for the whole exchange; `None` or zero means the default
    pub timeout: Option<Duration>,
}

impl RequestSpec {
    /// Create a request with no headers, no body and the default timeout
    pub fn new(method: Method, url: impl Into<String>) -> Self {
        Self {
            method,
            url: url.into(),
            headers: Headers::new(),
            body: None,
            timeout: None,
        }
    }

    /// Create a request from a verb name such as `"GET"`
    pub fn try_new(method: &str, url: impl Into<String>) -> HttpResult<Self> {
        Ok(Self::new(method.parse()?, url))
    }

    /// Add a header
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(key.into(), value.into());
        self
    }

    /// Copy every entry of `headers` into the request
    pub fn headers(mut self, headers: &Headers) -> Self {
        self.headers
            .extend(headers.iter().map(|(k, v)| (k.clone(), v.clone())));
        self
    }

    /// Copy `headers` into the request when present
    pub fn maybe_headers(self, headers: Option<&Headers>) -> Self {
        match headers {
            Some(headers) => self.headers(headers),
            None => self,
        }
    }

    /// Set the body
    pub fn body(mut self, body: impl Into<Body>) -> Self {
        self.body = Some(body.into());
        self
    }

    /// Set the body when present
    pub fn maybe_body(mut self, body: Option<Body>) -> Self {
        self.body = body;
        self
    }

    /// Set the deadline for the whole exchange
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Deadline this request will run with when `fallback` is the default
    pub fn effective_timeout(&self, fallback: Duration) -> Duration {
        match self.timeout {
            Some(timeout) if !timeout.is_zero() => timeout,
            _ => fallback,
        }
    }

    /// Resolve body, headers and timeout using [`DEFAULT_TIMEOUT`]
    pub fn prepare(self) -> HttpResult<PreparedRequest> {
        self.prepare_with_default(DEFAULT_TIMEOUT)
    }

    /// Resolve body, headers and timeout with a caller-chosen fallback deadline
    ///
    /// The body is serialized before the URL is parsed, so an unencodable
    /// body is reported even when the URL is also bad.
    pub fn prepare_with_default(self, fallback: Duration) -> HttpResult<PreparedRequest> {
        let timeout = self.effective_timeout(fallback);
        let RequestSpec {
            method,
            url,
            mut headers,
            body,
            ..
        } = self;

        if body.is_some() && !method.allows_body() {
            debug!(%method, "Sending a body with a method that usually has none");
        }

        let body = body.map(|body| body.resolve(&mut headers)).transpose()?;
        let url = Url::parse(&url)?;

        trace!(
            %method,
            %url,
            header_count = headers.len(),
            body_len = body.as_ref().map(Vec::len),
            ?timeout,
            "Prepared request"
        );

        Ok(PreparedRequest {
            method,
            url,
            headers,
            body,
            timeout,
        })
    }
}

/// A [`RequestSpec`] after body serialization and timeout defaulting
#[derive(Debug, Clone, PartialEq)]
pub struct PreparedRequest {
    /// HTTP verb
    pub method: Method,
    /// Parsed target URL
    pub url: Url,
    /// Final headers, including an injected `Content-Type`
    pub headers: Headers,
    /// Encoded body bytes
    pub body: Option<Vec<u8>>,
    /// Deadline for the whole exchange
    pub timeout: Duration,
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::error::HttpError;

    #[test]
    fn test_default_timeout_when_unset() {
        let unset = RequestSpec::new(Method::Get, "http://example.test/")
            .prepare()
            .expect("valid request");
        let explicit = RequestSpec::new(Method::Get, "http://example.test/")
            .timeout(Duration::from_secs(30))
            .prepare()
            .expect("valid request");

        assert_eq!(unset.timeout, DEFAULT_TIMEOUT);
        assert_eq!(unset, explicit);
    }

    #[test]
    fn test_zero_timeout_counts_as_unset() {
        let spec = RequestSpec::new(Method::Get, "http://example.test/").timeout(Duration::ZERO);
        assert_eq!(spec.effective_timeout(DEFAULT_TIMEOUT), DEFAULT_TIMEOUT);
    }

    #[test]
    fn test_explicit_timeout_wins_over_fallback() {
        let spec = RequestSpec::new(Method::Get, "http://example.test/")
            .timeout(Duration::from_millis(250));
        assert_eq!(
            spec.effective_timeout(Duration::from_secs(5)),
            Duration::from_millis(250)
        );
    }

    #[test]
    fn test_structured_body_sets_json_content_type() {
        let prepared = RequestSpec::new(Method::Post, "http://example.test/items")
            .body(json!({"a": 1}))
            .prepare()
            .expect("valid request");

        assert_eq!(prepared.body.as_deref(), Some(br#"{"a":1}"#.as_slice()));
        assert_eq!(prepared.headers["Content-Type"], "application/json");
    }

    #[test]
    fn test_text_body_has_no_content_type() {
        let prepared = RequestSpec::new(Method::Put, "http://example.test/items/1")
            .body("plain")
            .prepare()
            .expect("valid request");

        assert_eq!(prepared.body.as_deref(), Some(b"plain".as_slice()));
        assert!(prepared.headers.is_empty());
    }

    #[test]
    fn test_differently_cased_content_type_is_preserved() {
        let prepared = RequestSpec::new(Method::Patch, "http://example.test/items/1")
            .header("CONTENT-TYPE", "application/vnd.api+json")
            .body(json!({"a": 1}))
            .prepare()
            .expect("valid request");

        assert_eq!(prepared.headers.len(), 1);
        assert_eq!(prepared.headers["CONTENT-TYPE"], "application/vnd.api+json");
    }

    #[test]
    fn test_caller_headers_are_not_mutated() {
        let caller = Headers::from([("X-Trace".to_string(), "1".to_string())]);
        let prepared = RequestSpec::new(Method::Post, "http://example.test/")
            .headers(&caller)
            .body(json!([1, 2, 3]))
            .prepare()
            .expect("valid request");

        assert_eq!(caller.len(), 1);
        assert_eq!(prepared.headers.len(), 2);
    }

    #[test]
    fn test_malformed_url() {
        let err = RequestSpec::new(Method::Get, "not a url")
            .prepare()
            .expect_err("URL has no scheme");
        assert!(matches!(err, HttpError::RequestConstruction(_)));
    }

    #[test]
    fn test_body_on_bodyless_method_is_still_sent() {
        let prepared = RequestSpec::new(Method::Delete, "http://example.test/items")
            .body(json!({"ids": [1, 2]}))
            .prepare()
            .expect("valid request");

        assert_eq!(prepared.body.as_deref(), Some(br#"{"ids":[1,2]}"#.as_slice()));
        assert_eq!(prepared.headers["Content-Type"], "application/json");
    }

    #[test]
    fn test_try_new_rejects_unknown_method() {
        let err = RequestSpec::try_new("BREW", "http://example.test/").expect_err("not a verb");
        assert!(matches!(err, HttpError::RequestConstruction(_)));

        let spec = RequestSpec::try_new("delete", "http://example.test/").expect("valid verb");
        assert_eq!(spec.method, Method::Delete);
    }
}
