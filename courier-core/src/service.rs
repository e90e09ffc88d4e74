use std::sync::Arc;

use log::debug;
use serde::de::DeserializeOwned;
use serde_json::Value;
use url::Url;

use crate::error::{Error, Result};
use crate::parser::ErrorParser;
use crate::request::ApiRequest;
use crate::transport::{HttpTransport, RawResponse};

/// Dispatches typed API requests through a pluggable HTTP transport.
///
/// Generic over the transport implementation, allowing consumers to
/// provide their own HTTP client by implementing the [`HttpTransport`]
/// trait. Each call performs exactly one exchange: parameters are
/// encoded according to the request method, the raw response is screened
/// by the injected [`ErrorParser`], and a successful JSON body is
/// decoded into the caller-chosen response type. No retries, no caching.
#[derive(Clone)]
pub struct ApiClient<T: HttpTransport> {
    transport: T,
    parser: Arc<dyn ErrorParser>,
    base_url: Url,
}

impl<T: HttpTransport> ApiClient<T> {
    /// Create a new client.
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
        let mut base_url = Url::parse(&base_url)?;

        // we need a trailing slash, if not present we append it
        if !base_url.path().ends_with('/') {
            base_url.set_path(&format!("{}/", base_url.path()));
        }

        Ok(ApiClient {
            transport,
            parser: Arc::new(parser),
            base_url,
        })
    }

    /// Execute `request` and decode the response body into `R`.
    ///
    /// Exactly one of `Ok`/`Err` comes back per call: a domain error
    /// reported by the parser wins over the HTTP status, a non-2xx
    /// status without a domain error becomes [`Error::Status`], and a
    /// body `R` cannot be decoded from becomes [`Error::Decode`].
    pub async fn execute<R: DeserializeOwned>(&self, request: &ApiRequest) -> Result<R> {
        let (url, body) = self.prepare(request)?;
        debug!("{} {}", request.method(), url);

        let response = self
            .transport
            .send(
                request.method(),
                url.as_str(),
                request.headers(),
                body.as_deref(),
            )
            .await?;
        debug!("{} {} -> {}", request.method(), url, response.status);

        self.validate(&response)?;
        serde_json::from_slice(&response.body).map_err(Error::Decode)
    }

    /// Resolve the URL and place parameters in the query string or in a
    /// JSON body according to the request method.
    fn prepare(&self, request: &ApiRequest) -> Result<(Url, Option<Vec<u8>>)> {
        let mut url = self.base_url.join(request.endpoint())?;

        let Some(parameters) = request.parameters() else {
            return Ok((url, None));
        };

        if request.method().encodes_in_query() {
            if !parameters.is_empty() {
                let mut pairs = url.query_pairs_mut();
                for (key, value) in parameters {
                    match value {
                        // null carries no value on the wire
                        Value::Null => continue,
                        Value::String(s) => pairs.append_pair(key, s),
                        other => pairs.append_pair(key, &other.to_string()),
                    };
                }
            }
            Ok((url, None))
        } else {
            let body = serde_json::to_vec(parameters).map_err(Error::Encode)?;
            Ok((url, Some(body)))
        }
    }

    /// Screen a raw response before decoding: parser verdict first, then
    /// the status code.
    fn validate(&self, response: &RawResponse) -> Result<()> {
        if let Some(error) = self.parser.parse(response) {
            return Err(Error::Api(error));
        }
        if !response.is_success() {
            return Err(Error::Status {
                status: response.status,
                body: String::from_utf8_lossy(&response.body).into_owned(),
            });
        }
        Ok(())
    }
}
