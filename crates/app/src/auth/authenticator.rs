//! Login, logout and start-up session validation.

use std::sync::Arc;

use tracing::{info, warn};

use brewpos::{navigation::View, session::Session};

use crate::{
    auth::{AuthError, AuthService, LoginOutcome, LoginRequest},
    gateway::ApiError,
    navigator::Navigator,
    session::SessionStore,
};

#[derive(Clone)]
pub struct Authenticator {
    service: Arc<dyn AuthService>,
    session: SessionStore,
    navigator: Navigator,
}

impl Authenticator {
    #[must_use]
    pub fn new(service: Arc<dyn AuthService>, session: SessionStore, navigator: Navigator) -> Self {
        Self {
            service,
            session,
            navigator,
        }
    }

    /// Restore the persisted session and confirm it against the backend.
    /// Anything short of a confirmed token ends in a logout.
    pub async fn start(&self) -> Option<Session> {
        let restored = match self.session.hydrate().await {
            Ok(restored) => restored,
            Err(error) => {
                warn!("failed to load persisted session: {error}");
                None
            }
        };

        if restored.is_none() {
            self.logout().await;
            return None;
        }

        match self.service.current_user().await {
            Ok(user) => {
                let session = self.session.validate(user).await;

                if let Some(session) = &session {
                    info!(role = ?session.role(), "session restored");
                }

                session
            }
            Err(error) => {
                warn!("stored session rejected: {error}");
                self.logout().await;
                None
            }
        }
    }

    /// Log in and navigate to the landing view the backend suggests.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::InvalidCredentials`] when the backend rejects the
    /// credentials, or [`AuthError::Api`] for any other failure.
    pub async fn login(&self, username: &str, password: &str) -> Result<LoginOutcome, AuthError> {
        let request = LoginRequest {
            username: username.to_string(),
            password: password.to_string(),
        };

        let response = self
            .service
            .login(&request)
            .await
            .map_err(|error| match error {
                ApiError::Unauthorized => AuthError::InvalidCredentials,
                error => AuthError::Api(error),
            })?;

        let session = Session::from_login(response.access_token, response.role);

        if let Err(error) = self.session.begin(session.clone()).await {
            warn!("session will not survive a restart: {error}");
        }

        let landing = self.navigator.open(
            View::from_redirect_hint(&response.redirect_to),
            Some(&session),
        );

        info!(username, role = ?response.role, %landing, "logged in");

        Ok(LoginOutcome {
            role: response.role,
            landing,
        })
    }

    /// Forget the session and return to the login view.
    pub async fn logout(&self) {
        self.session.clear().await;
        self.navigator.navigate(View::Login);
    }
}
