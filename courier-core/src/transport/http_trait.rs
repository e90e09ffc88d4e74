use async_trait::async_trait;

use crate::error::Result;
use crate::method::Method;

/// Raw result of a single HTTP exchange, before validation and decoding.
#[derive(Debug, Clone)]
pub struct RawResponse {
    pub status: u16,
    pub headers: Vec<(String, String)>,
    pub body: Vec<u8>,
}

impl RawResponse {
    /// Whether the status code is in the 2xx range.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Case-insensitive header lookup, first match wins.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(n, _)| n.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }
}

/// Minimal async HTTP transport trait that can be implemented with any HTTP library.
///
/// This allows consumers to bring their own HTTP client implementation.
/// You can use any HTTP library you prefer: hyper, isahc, surf, ureq,
/// platform-specific APIs, or any other HTTP client.
///
/// # Implementing the trait
///
/// ```ignore
/// use async_trait::async_trait;
/// use courier_core::{HttpTransport, Method, RawResponse, Result};
///
/// #[derive(Clone)]
/// struct MyTransport {
///     // Your HTTP client here
/// }
///
/// #[async_trait]
/// impl HttpTransport for MyTransport {
///     async fn send(
///         &self,
///         method: Method,
///         url: &str,
///         headers: &[(String, String)],
///         body: Option<&[u8]>,
///     ) -> Result<RawResponse> {
///         // Perform the exchange with your HTTP library and return the
///         // raw status, headers and body bytes
///         Ok(RawResponse { status: 200, headers: Vec::new(), body: Vec::new() })
///     }
/// }
/// ```
#[async_trait]
pub trait HttpTransport: Send + Sync + Clone {
    /// Perform a single HTTP exchange.
    ///
    /// Non-2xx responses come back as data, not as errors: status
    /// interpretation belongs to the caller, which may find a domain
    /// error embedded in any response. Errors are reserved for
    /// I/O-level failures (DNS, timeouts, connection resets) where no
    /// response exists at all.
    async fn send(
        &self,
        method: Method,
        url: &str,
        headers: &[(String, String)],
        body: Option<&[u8]>,
    ) -> Result<RawResponse>;
}
