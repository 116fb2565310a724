//! Remote File Store Port
//!
//! Abstracts the SFTP endpoint the executor drives. All remote round trips
//! go through this trait, so the core never sees the wire protocol.

use std::path::Path;
use thiserror::Error;

use crate::domain::value_objects::ConnectionParams;

/// Result type for remote store operations
pub type RemoteResult<T> = Result<T, RemoteStoreError>;

/// Remote store operation errors
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RemoteStoreError {
    /// TCP or SSH handshake failure
    #[error("connection error: {0}")]
    Connection(String),
    /// Credentials rejected
    #[error("authentication error: {0}")]
    Authentication(String),
    /// Path does not exist
    #[error("no such file: {0}")]
    NotFound(String),
    /// Permission denied
    #[error("permission denied: {0}")]
    PermissionDenied(String),
    /// Any other failure
    #[error("{0}")]
    Other(String),
}

/// One child returned by a directory listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoteDirEntry {
    pub name: String,
    pub is_dir: bool,
}

impl RemoteDirEntry {
    pub fn new(name: impl Into<String>, is_dir: bool) -> Self {
        Self {
            name: name.into(),
            is_dir,
        }
    }
}

/// Opens sessions against a remote endpoint.
pub trait RemoteConnector {
    type Store: RemoteFileStore;

    fn connect(&self, params: &ConnectionParams) -> RemoteResult<Self::Store>;
}

/// An open remote session.
///
/// Implementations:
/// - `SftpStore` - libssh2 SFTP session
/// - in-memory fakes in tests
pub trait RemoteFileStore {
    /// Check whether anything exists at `path`
    fn exists(&self, path: &str) -> RemoteResult<bool>;

    /// Create a directory, with missing ancestors when `recursive`
    fn mkdir(&self, path: &str, recursive: bool) -> RemoteResult<()>;

    /// List direct children of a directory (no `.` / `..`)
    fn list(&self, path: &str) -> RemoteResult<Vec<RemoteDirEntry>>;

    /// Delete a single file
    fn delete(&self, path: &str) -> RemoteResult<()>;

    /// Remove a directory, with its contents when `recursive`
    fn rmdir(&self, path: &str, recursive: bool) -> RemoteResult<()>;

    /// Transfer a whole local file to `remote`, replacing it
    fn put(&self, local: &Path, remote: &str) -> RemoteResult<()>;

    /// Tear down the session
    fn close(&mut self) -> RemoteResult<()>;
}

/// Join a remote directory and a child name with `/`.
pub fn join_remote(dir: &str, name: &str) -> String {
    if dir.is_empty() {
        name.to_string()
    } else if dir.ends_with('/') {
        format!("{}{}", dir, name)
    } else {
        format!("{}/{}", dir, name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn store_error_display() {
        let err = RemoteStoreError::NotFound("/srv/app".to_string());
        assert_eq!(err.to_string(), "no such file: /srv/app");
    }

    #[test]
    fn join_remote_handles_trailing_slash() {
        assert_eq!(join_remote("/srv/app", "a.txt"), "/srv/app/a.txt");
        assert_eq!(join_remote("/srv/app/", "a.txt"), "/srv/app/a.txt");
        assert_eq!(join_remote("/", "etc"), "/etc");
        assert_eq!(join_remote("", "rel"), "rel");
    }
}
