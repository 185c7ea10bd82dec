//! Client errors.

use thiserror::Error;

/// Errors building a client.
#[derive(Debug, Error)]
pub enum ClientError {
    /// The base URL does not parse.
    #[error("invalid base URL: {0}")]
    InvalidBaseUrl(String),

    /// The HTTP client could not be built.
    #[error("http client error: {0}")]
    Http(#[from] reqwest::Error),
}
