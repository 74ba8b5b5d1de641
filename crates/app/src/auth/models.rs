//! Auth data models.

use serde::{Deserialize, Serialize};

use brewpos::{
    navigation::View,
    session::{AccessToken, Role},
};

/// Credentials posted to `/auth/token`.
#[derive(Clone, Serialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

impl std::fmt::Debug for LoginRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoginRequest")
            .field("username", &self.username)
            .field("password", &"**redacted**")
            .finish()
    }
}

/// Token issued by a successful login.
#[derive(Debug, Clone, Deserialize)]
pub struct LoginResponse {
    pub access_token: AccessToken,

    #[serde(default)]
    pub token_type: String,

    pub role: Role,

    /// Path the backend suggests landing on.
    #[serde(default)]
    pub redirect_to: String,
}

/// What a login produced for the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoginOutcome {
    pub role: Role,

    /// View the client navigated to.
    pub landing: View,
}
