//! Error types for ssh-sftp
//!
//! Uses `thiserror` for library errors; the binary wraps them in `anyhow`.

use std::path::PathBuf;
use thiserror::Error;

use crate::domain::ports::RemoteStoreError;

/// Result type alias for sync operations
pub type SyncResult<T> = Result<T, SyncError>;

/// Main error type for sync operations
#[derive(Error, Debug)]
pub enum SyncError {
    /// Config file could not be found
    #[error("config file not found: {path}")]
    ConfigNotFound { path: PathBuf },

    /// Config file exists but could not be parsed
    #[error("invalid config in {path}: {message}")]
    InvalidConfig { path: PathBuf, message: String },

    /// `init` would overwrite an existing config file
    #[error("config file already exists: {path}")]
    ConfigExists { path: PathBuf },

    /// Command must run from a project root
    #[error("no project manifest (package.json or Cargo.toml) found in {root}")]
    NotProjectRoot { root: PathBuf },

    /// `localPath` missing from config
    #[error("localPath is required")]
    MissingLocalPath,

    /// `localPath` does not exist
    #[error("local path not found: {path}")]
    LocalPathNotFound { path: PathBuf },

    /// `localPath` exists but is not a directory
    #[error("local path is not a directory: {path}")]
    LocalPathNotDirectory { path: PathBuf },

    /// `remotePath` missing or empty
    #[error("remotePath must not be empty")]
    EmptyRemotePath,

    /// `connectOptions.host` missing or empty
    #[error("connectOptions.host must not be empty")]
    MissingHost,

    /// Security lock: remote path does not name the project
    #[error("remote path '{remote_path}' does not contain project name '{project}'")]
    SecurityLock { remote_path: String, project: String },

    /// Security lock is on but the project name is unknown
    #[error("cannot determine project name in {root} for the security lock")]
    ProjectNameUnknown { root: PathBuf },

    /// Could not reach or handshake with the server
    #[error("failed to connect to {host}:{port}: {message}")]
    Connection {
        host: String,
        port: u16,
        message: String,
    },

    /// Server rejected the credentials
    #[error("authentication failed for {username}@{host}:{port}: {message}")]
    Authentication {
        host: String,
        port: u16,
        username: String,
        message: String,
    },

    /// A remote operation failed mid-run
    #[error("remote {op} failed for {path}: {message}")]
    Remote {
        op: &'static str,
        path: String,
        message: String,
    },

    /// Walking the local tree failed
    #[error("failed to read local tree at {path}: {message}")]
    LocalWalk { path: PathBuf, message: String },

    /// Operator interrupted a remote round trip
    #[error("interrupted by operator")]
    Interrupted,

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl SyncError {
    /// Wrap a store error raised by a mid-run remote operation.
    pub fn remote(op: &'static str, path: impl Into<String>, err: RemoteStoreError) -> Self {
        Self::Remote {
            op,
            path: path.into(),
            message: err.to_string(),
        }
    }

    /// Errors reported before any network I/O.
    pub fn is_config_error(&self) -> bool {
        matches!(
            self,
            Self::ConfigNotFound { .. }
                | Self::InvalidConfig { .. }
                | Self::ConfigExists { .. }
                | Self::NotProjectRoot { .. }
                | Self::MissingLocalPath
                | Self::LocalPathNotFound { .. }
                | Self::LocalPathNotDirectory { .. }
                | Self::EmptyRemotePath
                | Self::MissingHost
                | Self::SecurityLock { .. }
                | Self::ProjectNameUnknown { .. }
        )
    }

    pub fn is_connection_error(&self) -> bool {
        matches!(self, Self::Connection { .. } | Self::Authentication { .. })
    }

    pub fn is_auth_error(&self) -> bool {
        matches!(self, Self::Authentication { .. })
    }

    /// Actionable hint shown under the error message, if any.
    pub fn fix_hint(&self) -> Option<&'static str> {
        match self {
            Self::Authentication { .. } => Some(
                "Check connectOptions.username and password, or point connectOptions.privateKey at a key the server accepts.",
            ),
            Self::Connection { .. } => {
                Some("Check connectOptions.host and port, and that the SSH server is reachable.")
            }
            Self::SecurityLock { .. } => Some(
                "Make remotePath include the project name, or set \"securityLock\": false if this is intentional.",
            ),
            Self::ProjectNameUnknown { .. } => {
                Some("Add a name to package.json or Cargo.toml, or set \"securityLock\": false.")
            }
            Self::ConfigNotFound { .. } => Some("Run `ssh-sftp init` to create .sftprc.json."),
            Self::ConfigExists { .. } => Some("Use `ssh-sftp init --force` to overwrite it."),
            _ => None,
        }
    }
}
