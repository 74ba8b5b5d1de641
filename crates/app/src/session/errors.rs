//! Session storage errors.

use std::io;

use thiserror::Error;

/// Token storage failures.
#[derive(Debug, Error)]
pub enum StorageError {
    /// Reading, writing or removing the session file failed.
    #[error("session file error")]
    Io(#[from] io::Error),

    /// The session file is not valid JSON.
    #[error("session file is corrupt")]
    Corrupt(#[from] serde_json::Error),
}
