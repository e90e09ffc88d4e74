use async_trait::async_trait;

use super::http_trait::{HttpTransport, RawResponse};
use crate::error::{Error, Result};
use crate::method::Method;

/// Async HTTP transport implementation using reqwest.
///
/// This is a fully async transport built on top of tokio/hyper, the right
/// choice when the surrounding application already runs an async runtime.
/// For a minimal blocking setup see `UreqTransport` instead.
///
/// # Example
///
/// ```ignore
/// use courier_core::{ApiClient, NoDomainErrors, ReqwestTransport};
///
/// let transport = ReqwestTransport::new();
/// let client = ApiClient::new("https://api.example.com".to_string(), transport, NoDomainErrors)?;
/// ```
#[derive(Clone)]
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    /// Create a new reqwest transport with default settings.
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::builder()
                .timeout(std::time::Duration::from_secs(30))
                .build()
                .expect("Failed to build reqwest client"),
        }
    }

    /// Create a new reqwest transport with a custom timeout.
    pub fn with_timeout(timeout_secs: u64) -> Self {
        Self {
            client: reqwest::Client::builder()
                .timeout(std::time::Duration::from_secs(timeout_secs))
                .build()
                .expect("Failed to build reqwest client"),
        }
    }

    /// Create a new reqwest transport with a custom client configuration.
    pub fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }
}

impl Default for ReqwestTransport {
    fn default() -> Self {
        Self::new()
    }
}

fn into_reqwest_method(method: Method) -> reqwest::Method {
    match method {
        Method::Get => reqwest::Method::GET,
        Method::Post => reqwest::Method::POST,
        Method::Put => reqwest::Method::PUT,
        Method::Delete => reqwest::Method::DELETE,
        Method::Head => reqwest::Method::HEAD,
        Method::Patch => reqwest::Method::PATCH,
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn send(
        &self,
        method: Method,
        url: &str,
        headers: &[(String, String)],
        body: Option<&[u8]>,
    ) -> Result<RawResponse> {
        let mut request = self.client.request(into_reqwest_method(method), url);

        for (name, value) in headers {
            request = request.header(name, value);
        }

        if let Some(body) = body {
            // caller headers win over the JSON default
            if !headers.iter().any(|(n, _)| n.eq_ignore_ascii_case("content-type")) {
                request = request.header("Content-Type", "application/json");
            }
            request = request.body(body.to_vec());
        }

        // Perform async request; non-2xx statuses are returned as data
        let response = request
            .send()
            .await
            .map_err(|e| Error::Transport(format!("HTTP {method} request failed: {e}")))?;

        let status = response.status().as_u16();
        let headers = response
            .headers()
            .iter()
            .map(|(name, value)| {
                (
                    name.as_str().to_string(),
                    String::from_utf8_lossy(value.as_bytes()).into_owned(),
                )
            })
            .collect();
        let body = response
            .bytes()
            .await
            .map_err(|e| Error::ResponseBody(e.to_string()))?
            .to_vec();

        Ok(RawResponse {
            status,
            headers,
            body,
        })
    }
}
