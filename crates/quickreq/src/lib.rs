//! One-call HTTP verb helpers
//!
//! This crate wraps reqwest behind six functions (`get`, `post`, `put`,
//! `delete`, `patch`, `head`) that take a URL, an optional [`Body`] and
//! optional [`Headers`], and return a [`ResponseEnvelope`] holding the status,
//! first-value headers, raw body and decoded text.
//!
//! Structured bodies are JSON-encoded and tagged `application/json` unless the
//! caller already set a `Content-Type`. Every request runs under a single
//! deadline ([`DEFAULT_TIMEOUT`] unless overridden). A non-2xx status is a
//! successful result; only construction, transport and body-read failures
//! are errors.
//!
//! # Example
//!
//! ```no_run
//! use quickreq::{Body, HttpResult};
//! use serde_json::json;
//!
//! async fn example() -> HttpResult<()> {
//!     let created = quickreq::post(
//!         "https://api.example.com/posts",
//!         Some(Body::from(json!({"title": "hello", "userId": 1}))),
//!         None,
//!     )
//!     .await?;
//!     println!("{} {}", created.status, created.text);
//!     Ok(())
//! }
//! ```

mod body;
mod client;
mod error;
mod executor;
mod headers;
mod method;
mod request;
mod response;

pub use body::Body;
pub use client::{delete, execute, get, head, patch, post, put, HttpClient, HttpClientBuilder};
pub use error::{HttpError, HttpResult};
pub use executor::RequestExecutor;
pub use headers::{find_header, has_content_type, Headers, JSON_CONTENT_TYPE};
pub use method::Method;
pub use request::{PreparedRequest, RequestSpec, DEFAULT_TIMEOUT};
pub use response::ResponseEnvelope;
