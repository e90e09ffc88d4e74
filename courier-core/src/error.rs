use thiserror::Error;

use crate::parser::ApiError;

#[derive(Debug, Error)]
pub enum Error {
    // Transport
    #[error("transport failure: {0}")]
    Transport(String),
    #[error("failed to read response body: {0}")]
    ResponseBody(String),

    // Validation
    #[error("unexpected status {status}: {body}")]
    Status { status: u16, body: String },
    #[error(transparent)]
    Api(#[from] ApiError),

    // Encoding / decoding (no #[from]: both wrap serde_json::Error)
    #[error("failed to encode parameters: {0}")]
    Encode(serde_json::Error),
    #[error("failed to decode response: {0}")]
    Decode(serde_json::Error),

    #[error(transparent)]
    InvalidUrl(#[from] url::ParseError),
}

pub type Result<T> = std::result::Result<T, Error>;
