//! FileEntry entity - one planned upload unit

use std::path::{Path, PathBuf};

/// A local node mapped to its remote destination.
///
/// Directory entries tell the executor to ensure the remote directory exists
/// before anything beneath it is transferred.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileEntry {
    local_path: PathBuf,
    remote_path: String,
    is_dir: bool,
}

impl FileEntry {
    pub fn file(local_path: impl Into<PathBuf>, remote_path: impl Into<String>) -> Self {
        Self {
            local_path: local_path.into(),
            remote_path: remote_path.into(),
            is_dir: false,
        }
    }

    pub fn directory(local_path: impl Into<PathBuf>, remote_path: impl Into<String>) -> Self {
        Self {
            local_path: local_path.into(),
            remote_path: remote_path.into(),
            is_dir: true,
        }
    }

    pub fn local_path(&self) -> &Path {
        &self.local_path
    }

    pub fn remote_path(&self) -> &str {
        &self.remote_path
    }

    pub fn is_dir(&self) -> bool {
        self.is_dir
    }
}
