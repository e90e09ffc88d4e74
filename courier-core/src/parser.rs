use std::fmt;

use serde_json::Value;

use crate::transport::RawResponse;

/// Application-level failure embedded in an HTTP response.
///
/// Produced by an [`ErrorParser`]; carries whatever code and message the
/// API reported, independent of the HTTP status code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiError {
    pub code: Option<i64>,
    pub message: String,
}

impl ApiError {
    pub fn new(code: impl Into<Option<i64>>, message: impl Into<String>) -> Self {
        ApiError {
            code: code.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.code {
            Some(code) => write!(f, "api error {}: {}", code, self.message),
            None => write!(f, "api error: {}", self.message),
        }
    }
}

impl std::error::Error for ApiError {}

/// Injected capability that decides whether a raw response carries a
/// domain failure.
///
/// Runs before status interpretation and decoding: returning `Some`
/// fails the call even when the HTTP status is 2xx, which is how APIs
/// that embed structured errors in a 200 body are handled. A parser
/// instance is shared between in-flight calls and must behave as a pure
/// function of the response.
pub trait ErrorParser: Send + Sync {
    fn parse(&self, response: &RawResponse) -> Option<ApiError>;
}

/// Adapter turning a plain function into an [`ErrorParser`], so behavior
/// can be supplied by composition without a dedicated type.
///
/// ```ignore
/// let parser = ParserFn(|response: &RawResponse| {
///     response.header("x-api-error").map(|m| ApiError::new(None, m))
/// });
/// ```
pub struct ParserFn<F>(pub F);

impl<F> ErrorParser for ParserFn<F>
where
    F: Fn(&RawResponse) -> Option<ApiError> + Send + Sync,
{
    fn parse(&self, response: &RawResponse) -> Option<ApiError> {
        (self.0)(response)
    }
}

/// Parser that never reports a domain error; validation then reduces to
/// the plain 2xx status check.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoDomainErrors;

impl ErrorParser for NoDomainErrors {
    fn parse(&self, _response: &RawResponse) -> Option<ApiError> {
        None
    }
}

/// Stock parser for the common embedded-error body shape:
///
/// ```json
/// {"error_code": 5, "error_message": "flagged"}
/// ```
///
/// Reports a failure when the configured code field is present, non-null
/// and non-zero in a JSON-object body. A numeric code of `0` counts as
/// success, matching APIs that emit it alongside valid payloads; APIs
/// with other conventions supply their own [`ErrorParser`]. Bodies that
/// are not JSON objects never report a domain error here and are left to
/// the status check and the decoder.
#[derive(Debug, Clone)]
pub struct JsonErrorParser {
    code_field: String,
    message_field: String,
}

impl JsonErrorParser {
    pub fn new(code_field: impl Into<String>, message_field: impl Into<String>) -> Self {
        JsonErrorParser {
            code_field: code_field.into(),
            message_field: message_field.into(),
        }
    }
}

impl Default for JsonErrorParser {
    fn default() -> Self {
        JsonErrorParser::new("error_code", "error_message")
    }
}

impl ErrorParser for JsonErrorParser {
    fn parse(&self, response: &RawResponse) -> Option<ApiError> {
        let object: serde_json::Map<String, Value> =
            serde_json::from_slice(&response.body).ok()?;
        let code = object.get(&self.code_field)?;

        match code {
            Value::Null => None,
            Value::Number(n) if n.as_i64() == Some(0) => None,
            _ => {
                let message = object
                    .get(&self.message_field)
                    .and_then(Value::as_str)
                    .unwrap_or("unspecified api error")
                    .to_string();
                Some(ApiError {
                    code: code.as_i64(),
                    message,
                })
            }
        }
    }
}
