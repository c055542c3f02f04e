//! Error types for fetch operations.

use thiserror::Error;

/// Errors that can occur while fetching a remote document.
#[derive(Error, Debug)]
pub enum FetchError {
    /// Request could not be sent
    #[error("Request failed: {0}")]
    RequestError(String),

    /// Server answered with an error status
    #[error("HTTP {status}: {message}")]
    HttpError { status: u16, message: String },

    /// Response body could not be decoded
    #[error("Parse error: {0}")]
    ParseError(String),
}
