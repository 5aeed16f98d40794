//! Error types for task service operations.
//!
//! This module defines the three failure classes a request can hit:
//! transport failure, a non-success response status, and a response body
//! that cannot be decoded. Callers are expected to log and continue; no
//! failure here is fatal to the client.

/// Errors that can occur when talking to the task service.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The request could not be sent or the response could not be read.
    #[error("transport error: {0}")]
    Http(#[from] reqwest::Error),

    /// The service answered with a non-success status code.
    #[error("server returned status {status}")]
    Status {
        /// The HTTP status code of the response.
        status: u16,
    },

    /// The response body was not the expected JSON shape.
    #[error("malformed response body: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// A specialized Result type for task service operations.
pub type Result<T> = std::result::Result<T, Error>;
