//! Auth errors.

use thiserror::Error;

use crate::gateway::ApiError;

/// Login and session validation failures.
#[derive(Debug, Error)]
pub enum AuthError {
    /// The backend refused the username/password pair.
    #[error("invalid username or password")]
    InvalidCredentials,

    /// Transport or server failure, distinct from bad credentials.
    #[error("auth request failed")]
    Api(#[source] ApiError),
}

impl From<ApiError> for AuthError {
    fn from(error: ApiError) -> Self {
        Self::Api(error)
    }
}
