//! Error types for the RapidIdentity client.

use reqwest::{Method, StatusCode};
use url::Url;

/// Convenience alias used across the client.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors produced by the RapidIdentity client.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The server answered with a non-2xx status. Carries the request
    /// method and URL plus the raw response body for diagnostics.
    #[error("{method} {url} returned {status}: {message}")]
    Api {
        /// HTTP method of the failed request.
        method: Method,
        /// URL of the failed request.
        url: Url,
        /// Status code the server answered with.
        status: StatusCode,
        /// Raw response body.
        message: String,
    },

    /// The request could not be sent or the response body could not be
    /// read.
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// A response body did not decode into the expected shape.
    #[error("decode error: {0}")]
    Decode(#[from] serde_json::Error),

    /// A request URL could not be constructed.
    #[error("invalid url: {0}")]
    Url(#[from] url::ParseError),
}
