//! Session store.
//!
//! The single place the bearer token lives. It is injected into the API
//! gateway and the authenticator; nothing else reads or writes the token.

use std::{fmt, sync::Arc};

use tokio::sync::RwLock;
use tracing::{debug, warn};

use brewpos::session::{AccessToken, CurrentUser, Session};

use crate::session::{StorageError, TokenStorage};

/// The current session, shared by every outbound call.
#[derive(Clone)]
pub struct SessionStore {
    current: Arc<RwLock<Option<Session>>>,
    storage: Arc<dyn TokenStorage>,
}

impl SessionStore {
    #[must_use]
    pub fn new(storage: Arc<dyn TokenStorage>) -> Self {
        Self {
            current: Arc::new(RwLock::new(None)),
            storage,
        }
    }

    /// Load any persisted session into memory. The restored session is not
    /// authenticated until [`SessionStore::validate`] confirms it.
    ///
    /// # Errors
    ///
    /// Returns an error when the storage backend cannot be read.
    pub async fn hydrate(&self) -> Result<Option<Session>, StorageError> {
        let restored = self
            .storage
            .load()
            .await?
            .map(|session| Session::restored(session.token().clone(), session.role()));

        debug!(restored = restored.is_some(), "hydrated session");

        self.current.write().await.clone_from(&restored);

        Ok(restored)
    }

    /// Install a freshly issued session and persist it.
    ///
    /// # Errors
    ///
    /// Returns an error when the session cannot be persisted; the in-memory
    /// session is still installed.
    pub async fn begin(&self, session: Session) -> Result<(), StorageError> {
        let persisted = self.storage.save(&session).await;

        *self.current.write().await = Some(session);

        persisted
    }

    /// Mark the current session as confirmed by the backend.
    pub async fn validate(&self, user: CurrentUser) -> Option<Session> {
        let mut current = self.current.write().await;
        let session = current.as_mut()?;

        session.validate(user);

        Some(session.clone())
    }

    /// Drop the session from memory and storage. Never fails; storage errors
    /// are logged.
    pub async fn clear(&self) {
        self.current.write().await.take();

        if let Err(error) = self.storage.clear().await {
            warn!("failed to clear persisted session: {error}");
        }
    }

    /// Token to attach to outbound requests.
    pub async fn token(&self) -> Option<AccessToken> {
        self.current
            .read()
            .await
            .as_ref()
            .map(|session| session.token().clone())
    }

    /// Snapshot of the current session.
    pub async fn current(&self) -> Option<Session> {
        self.current.read().await.clone()
    }

    /// Whether a backend-confirmed session exists.
    pub async fn is_authenticated(&self) -> bool {
        self.current
            .read()
            .await
            .as_ref()
            .is_some_and(Session::is_authenticated)
    }

    /// Whether the confirmed session has the administrative role.
    pub async fn is_admin(&self) -> bool {
        self.current
            .read()
            .await
            .as_ref()
            .is_some_and(Session::is_admin)
    }
}

impl fmt::Debug for SessionStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SessionStore").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use brewpos::session::{Role, UserId};
    use testresult::TestResult;

    use crate::session::{MemoryTokenStorage, MockTokenStorage};

    use super::*;

    fn admin_user() -> CurrentUser {
        CurrentUser {
            id: UserId::new(1),
            username: "boss".to_string(),
            email: "boss@example.com".to_string(),
            role: Role::Admin,
            is_active: true,
        }
    }

    #[tokio::test]
    async fn hydrate_restores_unvalidated_session() -> TestResult {
        let storage = MemoryTokenStorage::with_session(Session::from_login(
            AccessToken::new("stored"),
            Role::Admin,
        ));
        let store = SessionStore::new(Arc::new(storage));

        let restored = store.hydrate().await?;

        assert!(restored.is_some());
        assert_eq!(
            store.token().await.as_ref().map(AccessToken::expose),
            Some("stored")
        );
        assert!(!store.is_authenticated().await);

        store.validate(admin_user()).await;

        assert!(store.is_authenticated().await);
        assert!(store.is_admin().await);

        Ok(())
    }

    #[tokio::test]
    async fn begin_persists_and_clear_forgets() -> TestResult {
        let storage = Arc::new(MemoryTokenStorage::new());
        let store = SessionStore::new(storage.clone());

        store
            .begin(Session::from_login(AccessToken::new("fresh"), Role::Seller))
            .await?;

        assert!(store.is_authenticated().await);
        assert!(storage.load().await?.is_some());

        store.clear().await;

        assert!(store.token().await.is_none());
        assert!(storage.load().await?.is_none());

        Ok(())
    }

    #[tokio::test]
    async fn clear_survives_storage_failure() {
        let mut storage = MockTokenStorage::new();
        storage.expect_save().returning(|_| Ok(()));
        storage.expect_clear().returning(|| {
            Err(StorageError::Io(std::io::Error::other("read-only")))
        });

        let store = SessionStore::new(Arc::new(storage));
        let begun = store
            .begin(Session::from_login(AccessToken::new("t"), Role::Seller))
            .await;

        assert!(begun.is_ok());

        store.clear().await;

        assert!(store.current().await.is_none());
    }
}
