use std::io::Read;

use async_trait::async_trait;

use super::http_trait::{HttpTransport, RawResponse};
use crate::error::{Error, Result};
use crate::method::Method;

/// Minimal HTTP transport implementation using ureq.
///
/// This is a lightweight, blocking HTTP client that's perfect for basic
/// needs. Calls block the current thread even though the trait is async;
/// pair it with `BlockingApiClient` for a runtime-free setup.
///
/// # Example
///
/// ```ignore
/// use courier_core::{BlockingApiClient, NoDomainErrors, UreqTransport};
///
/// let transport = UreqTransport::new();
/// let client = BlockingApiClient::new("https://api.example.com".to_string(), transport, NoDomainErrors)?;
/// ```
#[derive(Clone)]
pub struct UreqTransport {
    agent: ureq::Agent,
}

impl UreqTransport {
    /// Create a new ureq transport with default settings.
    pub fn new() -> Self {
        Self {
            agent: ureq::AgentBuilder::new()
                .timeout(std::time::Duration::from_secs(30))
                .build(),
        }
    }

    /// Create a new ureq transport with a custom timeout.
    pub fn with_timeout(timeout_secs: u64) -> Self {
        Self {
            agent: ureq::AgentBuilder::new()
                .timeout(std::time::Duration::from_secs(timeout_secs))
                .build(),
        }
    }
}

impl Default for UreqTransport {
    fn default() -> Self {
        Self::new()
    }
}

fn into_raw(response: ureq::Response) -> Result<RawResponse> {
    let status = response.status();
    let headers = response
        .headers_names()
        .into_iter()
        .filter_map(|name| {
            response
                .header(&name)
                .map(|value| (name.clone(), value.to_string()))
        })
        .collect();

    let mut body = Vec::new();
    response
        .into_reader()
        .read_to_end(&mut body)
        .map_err(|e| Error::ResponseBody(e.to_string()))?;

    Ok(RawResponse {
        status,
        headers,
        body,
    })
}

#[async_trait]
impl HttpTransport for UreqTransport {
    async fn send(
        &self,
        method: Method,
        url: &str,
        headers: &[(String, String)],
        body: Option<&[u8]>,
    ) -> Result<RawResponse> {
        let mut request = self.agent.request(method.as_str(), url);

        for (name, value) in headers {
            request = request.set(name, value);
        }

        // Perform blocking request (wrapped in async for trait compatibility)
        let result = match body {
            Some(body) => {
                // caller headers win over the JSON default
                if !headers.iter().any(|(n, _)| n.eq_ignore_ascii_case("content-type")) {
                    request = request.set("Content-Type", "application/json");
                }
                request.send_bytes(body)
            }
            None => request.call(),
        };

        match result {
            Ok(response) => into_raw(response),
            // non-2xx comes back as data, status interpretation belongs to the caller
            Err(ureq::Error::Status(_, response)) => into_raw(response),
            Err(e) => Err(Error::Transport(format!("HTTP {method} request failed: {e}"))),
        }
    }
}
