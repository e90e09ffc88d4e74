use serde_json::Value;

use crate::method::Method;

/// String-keyed request parameters with dynamically-typed values.
pub type Params = serde_json::Map<String, Value>;

/// Describes a single API call: endpoint, method, parameters and headers.
///
/// The endpoint may be an absolute URL or a path resolved against the
/// client base URL. Parameters end up in the query string or in a JSON
/// body depending on the method, see [`Method::encodes_in_query`].
/// A request is immutable once handed to the client; the chaining
/// constructors below are the only way to populate it.
#[derive(Debug, Clone)]
pub struct ApiRequest {
    endpoint: String,
    method: Method,
    parameters: Option<Params>,
    headers: Vec<(String, String)>,
}

impl ApiRequest {
    pub fn new(method: Method, endpoint: impl Into<String>) -> Self {
        ApiRequest {
            endpoint: endpoint.into(),
            method,
            parameters: None,
            headers: Vec::new(),
        }
    }

    /// Replace the full parameter map.
    pub fn with_parameters(mut self, parameters: Params) -> Self {
        self.parameters = Some(parameters);
        self
    }

    /// Add a single parameter.
    pub fn param(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.parameters
            .get_or_insert_with(Params::new)
            .insert(key.into(), value.into());
        self
    }

    /// Replace all headers.
    pub fn with_headers(mut self, headers: Vec<(String, String)>) -> Self {
        self.headers = headers;
        self
    }

    /// Add a single header.
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub fn method(&self) -> Method {
        self.method
    }

    pub fn parameters(&self) -> Option<&Params> {
        self.parameters.as_ref()
    }

    pub fn headers(&self) -> &[(String, String)] {
        &self.headers
    }
}
