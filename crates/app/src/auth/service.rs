//! Auth service.

use async_trait::async_trait;
use mockall::automock;

use brewpos::session::CurrentUser;

use crate::{
    auth::{LoginRequest, LoginResponse},
    gateway::{ApiClient, ApiError},
};

#[derive(Debug, Clone)]
pub struct HttpAuthService {
    api: ApiClient,
}

impl HttpAuthService {
    #[must_use]
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }
}

#[async_trait]
impl AuthService for HttpAuthService {
    async fn login(&self, request: &LoginRequest) -> Result<LoginResponse, ApiError> {
        self.api.post("auth/token", request).await
    }

    async fn current_user(&self) -> Result<CurrentUser, ApiError> {
        self.api.get("auth/me").await
    }
}

#[automock]
#[async_trait]
pub trait AuthService: Send + Sync {
    /// Exchange credentials for a bearer token.
    async fn login(&self, request: &LoginRequest) -> Result<LoginResponse, ApiError>;

    /// The user behind the current token.
    async fn current_user(&self) -> Result<CurrentUser, ApiError>;
}
