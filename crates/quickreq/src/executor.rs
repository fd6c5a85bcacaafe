//! Request execution and the verb helpers

use std::future::Future;

use crate::body::Body;
use crate::error::HttpResult;
use crate::headers::Headers;
use crate::method::Method;
use crate::request::RequestSpec;
use crate::response::ResponseEnvelope;

/// Something that can turn a [`RequestSpec`] into a [`ResponseEnvelope`]
///
/// Implementors only provide [`execute`](RequestExecutor::execute). The verb
/// helpers fix the method, attach the optional body and headers, and
/// delegate to it.
pub trait RequestExecutor: Sync {
    /// Run one request to completion
    fn execute(
        &self,
        spec: RequestSpec,
    ) -> impl Future<Output = HttpResult<ResponseEnvelope>> + Send;

    /// GET request
    fn get(
        &self,
        url: &str,
        headers: Option<&Headers>,
    ) -> impl Future<Output = HttpResult<ResponseEnvelope>> + Send {
        self.execute(RequestSpec::new(Method::Get, url).maybe_headers(headers))
    }

    /// POST request with an optional body
    fn post(
        &self,
        url: &str,
        body: Option<Body>,
        headers: Option<&Headers>,
    ) -> impl Future<Output = HttpResult<ResponseEnvelope>> + Send {
        self.execute(
            RequestSpec::new(Method::Post, url)
                .maybe_body(body)
                .maybe_headers(headers),
        )
    }

    /// PUT request with an optional body
    fn put(
        &self,
        url: &str,
        body: Option<Body>,
        headers: Option<&Headers>,
    ) -> impl Future<Output = HttpResult<ResponseEnvelope>> + Send {
        self.execute(
            RequestSpec::new(Method::Put, url)
                .maybe_body(body)
                .maybe_headers(headers),
        )
    }

    /// DELETE request
    fn delete(
        &self,
        url: &str,
        headers: Option<&Headers>,
    ) -> impl Future<Output = HttpResult<ResponseEnvelope>> + Send {
        self.execute(RequestSpec::new(Method::Delete, url).maybe_headers(headers))
    }

    /// PATCH request with an optional body
    fn patch(
        &self,
        url: &str,
        body: Option<Body>,
        headers: Option<&Headers>,
    ) -> impl Future<Output = HttpResult<ResponseEnvelope>> + Send {
        self.execute(
            RequestSpec::new(Method::Patch, url)
                .maybe_body(body)
                .maybe_headers(headers),
        )
    }

    /// HEAD request
    fn head(
        &self,
        url: &str,
        headers: Option<&Headers>,
    ) -> impl Future<Output = HttpResult<ResponseEnvelope>> + Send {
        self.execute(RequestSpec::new(Method::Head, url).maybe_headers(headers))
    }
}
