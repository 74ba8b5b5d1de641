//! Gateway errors.

use reqwest::StatusCode;
use thiserror::Error;

/// Failure of a backend call.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The token is missing, invalid or expired. The session has already been
    /// cleared by the time this is returned.
    #[error("not authenticated")]
    Unauthorized,

    /// The role may not use this endpoint. The session is kept.
    #[error("permission denied")]
    Forbidden,

    /// The requested record does not exist.
    #[error("not found")]
    NotFound,

    /// Any other non-2xx status, with the backend's `detail` or raw body.
    #[error("unexpected response status {status}: {message}")]
    Status { status: StatusCode, message: String },

    /// Transport failure or timeout.
    #[error("http error")]
    Http(#[source] reqwest::Error),

    /// The body was not the expected JSON.
    #[error("failed to decode response body")]
    Decode(#[source] serde_json::Error),
}

impl From<reqwest::Error> for ApiError {
    fn from(error: reqwest::Error) -> Self {
        Self::Http(error)
    }
}
