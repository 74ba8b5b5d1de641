//! Token storage backends.

use std::{io::ErrorKind, path::PathBuf};

use async_trait::async_trait;
use mockall::automock;
use tokio::{fs, io::AsyncWriteExt, sync::Mutex};

use brewpos::session::Session;

use crate::session::StorageError;

/// Persistent home of the session between runs.
#[automock]
#[async_trait]
pub trait TokenStorage: Send + Sync {
    /// Load a previously saved session, if any.
    async fn load(&self) -> Result<Option<Session>, StorageError>;

    /// Persist the session.
    async fn save(&self, session: &Session) -> Result<(), StorageError>;

    /// Forget any persisted session.
    async fn clear(&self) -> Result<(), StorageError>;
}

/// Stores the session as JSON in a single file, readable only by its owner on unix.
#[derive(Debug, Clone)]
pub struct FileTokenStorage {
    path: PathBuf,
}

impl FileTokenStorage {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl TokenStorage for FileTokenStorage {
    async fn load(&self) -> Result<Option<Session>, StorageError> {
        match fs::read(&self.path).await {
            Ok(bytes) => Ok(Some(serde_json::from_slice(&bytes)?)),
            Err(error) if error.kind() == ErrorKind::NotFound => Ok(None),
            Err(error) => Err(error.into()),
        }
    }

    async fn save(&self, session: &Session) -> Result<(), StorageError> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent).await?;
        }

        let mut options = fs::OpenOptions::new();
        options.write(true).create(true).truncate(true);

        #[cfg(unix)]
        options.mode(0o600);

        let mut file = options.open(&self.path).await?;

        // mode only applies on creation
        #[cfg(unix)]
        {
            use std::{fs::Permissions, os::unix::fs::PermissionsExt};

            file.set_permissions(Permissions::from_mode(0o600)).await?;
        }

        file.write_all(&serde_json::to_vec(session)?).await?;
        file.flush().await?;

        Ok(())
    }

    async fn clear(&self) -> Result<(), StorageError> {
        match fs::remove_file(&self.path).await {
            Err(error) if error.kind() != ErrorKind::NotFound => Err(error.into()),
            _ => Ok(()),
        }
    }
}

/// Keeps the session in memory only; nothing survives the process.
#[derive(Debug, Default)]
pub struct MemoryTokenStorage {
    slot: Mutex<Option<Session>>,
}

impl MemoryTokenStorage {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_session(session: Session) -> Self {
        Self {
            slot: Mutex::new(Some(session)),
        }
    }
}

#[async_trait]
impl TokenStorage for MemoryTokenStorage {
    async fn load(&self) -> Result<Option<Session>, StorageError> {
        Ok(self.slot.lock().await.clone())
    }

    async fn save(&self, session: &Session) -> Result<(), StorageError> {
        *self.slot.lock().await = Some(session.clone());

        Ok(())
    }

    async fn clear(&self) -> Result<(), StorageError> {
        self.slot.lock().await.take();

        Ok(())
    }
}
