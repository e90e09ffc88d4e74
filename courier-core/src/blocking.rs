use futures::executor::block_on;
use serde::de::DeserializeOwned;

use crate::error::Result;
use crate::parser::ErrorParser;
use crate::request::ApiRequest;
use crate::service::ApiClient;
use crate::transport::HttpTransport;

/// Synchronous facade over [`ApiClient`].
///
/// This uses `block_on` to drive each call to completion on the calling
/// thread. Pair it with a blocking transport such as `UreqTransport`;
/// for concurrent request handling use [`ApiClient`] directly.
pub struct BlockingApiClient<T: HttpTransport> {
    inner: ApiClient<T>,
}

impl<T: HttpTransport> BlockingApiClient<T> {
    /// Create a new blocking client.
    ///
    /// # Arguments
    /// * `base_url` - Base URL relative endpoints are resolved against
    /// * `transport` - HTTP transport implementation
    /// * `parser` - domain error detection, see [`ErrorParser`]
    pub fn new(
        base_url: String,
        transport: T,
        parser: impl ErrorParser + 'static,
    ) -> Result<Self> {
        Ok(Self {
            inner: ApiClient::new(base_url, transport, parser)?,
        })
    }

    /// Execute `request` and decode the response body into `R`, blocking
    /// until the exchange completes.
    pub fn execute<R: DeserializeOwned>(&self, request: &ApiRequest) -> Result<R> {
        block_on(self.inner.execute(request))
    }
}
