#[cfg(feature = "blocking")]
mod blocking;
mod error;
mod method;
mod parser;
mod request;
mod service;
mod transport;

#[cfg(feature = "blocking")]
pub use blocking::BlockingApiClient;
pub use error::{Error, Result};
pub use method::Method;
pub use parser::{ApiError, ErrorParser, JsonErrorParser, NoDomainErrors, ParserFn};
pub use request::{ApiRequest, Params};
pub use service::ApiClient;
pub use transport::{HttpTransport, RawResponse};

#[cfg(feature = "reqwest-client")]
pub use transport::ReqwestTransport;
#[cfg(feature = "ureq-client")]
pub use transport::UreqTransport;
