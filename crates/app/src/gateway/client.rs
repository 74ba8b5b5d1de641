//! REST client for the POS backend.

use std::time::Duration;

use reqwest::{Client, RequestBuilder, Response, StatusCode};
use serde::{Deserialize, Serialize, de::DeserializeOwned};
use tracing::{debug, warn};

use brewpos::navigation::View;

use crate::{gateway::ApiError, navigator::Navigator, session::SessionStore};

/// Acknowledgement body returned by mutating endpoints that carry no data.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Acknowledgement {
    #[serde(default)]
    pub message: String,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    detail: String,
}

/// Every outbound call goes through here. A bearer token is attached when the
/// session has one, and a 401 from any endpoint ends the session.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: Client,
    base_url: String,
    session: SessionStore,
    navigator: Navigator,
}

impl ApiClient {
    /// Build a client for `base_url`.
    ///
    /// # Errors
    ///
    /// Returns an error when the HTTP client cannot be constructed.
    pub fn new(
        base_url: &str,
        timeout: Duration,
        session: SessionStore,
        navigator: Navigator,
    ) -> Result<Self, ApiError> {
        let http = Client::builder().timeout(timeout).build()?;

        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            session,
            navigator,
        })
    }

    /// Session shared with the rest of the client.
    #[must_use]
    pub fn session(&self) -> &SessionStore {
        &self.session
    }

    /// Navigation signal the gateway redirects through.
    #[must_use]
    pub fn navigator(&self) -> &Navigator {
        &self.navigator
    }

    /// # Errors
    ///
    /// Returns an error for transport failures and non-2xx responses.
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        self.send(self.http.get(self.url(path))).await
    }

    /// # Errors
    ///
    /// Returns an error for transport failures and non-2xx responses.
    pub async fn get_with_query<T, Q>(&self, path: &str, query: &Q) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
        Q: Serialize + ?Sized,
    {
        self.send(self.http.get(self.url(path)).query(query)).await
    }

    /// # Errors
    ///
    /// Returns an error for transport failures and non-2xx responses.
    pub async fn post<T, B>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        self.send(self.http.post(self.url(path)).json(body)).await
    }

    /// # Errors
    ///
    /// Returns an error for transport failures and non-2xx responses.
    pub async fn put<T, B>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        self.send(self.http.put(self.url(path)).json(body)).await
    }

    /// `PUT` without a request body.
    ///
    /// # Errors
    ///
    /// Returns an error for transport failures and non-2xx responses.
    pub async fn put_empty<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        self.send(self.http.put(self.url(path))).await
    }

    /// # Errors
    ///
    /// Returns an error for transport failures and non-2xx responses.
    pub async fn delete<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        self.send(self.http.delete(self.url(path))).await
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    async fn send<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<T, ApiError> {
        let request = match self.session.token().await {
            Some(token) => request.bearer_auth(token.expose()),
            None => request,
        };

        let response = request.send().await?;

        self.decode(response).await
    }

    async fn decode<T: DeserializeOwned>(&self, response: Response) -> Result<T, ApiError> {
        let status = response.status();
        let url = response.url().path().to_string();
        let body = response.bytes().await?;

        debug!(%status, %url, bytes = body.len(), "api response");

        if status.is_success() {
            return serde_json::from_slice(&body).map_err(ApiError::Decode);
        }

        Err(self
            .reject(status, &String::from_utf8_lossy(&body))
            .await)
    }

    /// Translate a failure status into an [`ApiError`], applying the session
    /// policy on the way: a 401 clears the session and sends the user to
    /// login. A 403 leaves the session alone.
    pub async fn reject(&self, status: StatusCode, body: &str) -> ApiError {
        match status {
            StatusCode::UNAUTHORIZED => {
                warn!("backend rejected credentials, ending session");

                self.session.clear().await;
                self.navigator.navigate(View::Login);

                ApiError::Unauthorized
            }
            StatusCode::FORBIDDEN => ApiError::Forbidden,
            StatusCode::NOT_FOUND => ApiError::NotFound,
            status => ApiError::Status {
                status,
                message: serde_json::from_str::<ErrorBody>(body)
                    .map_or_else(|_| body.to_string(), |error| error.detail),
            },
        }
    }
}
