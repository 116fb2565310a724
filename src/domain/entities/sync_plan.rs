//! SyncPlan entity - the reconciled work list for one run

use super::{FileEntry, RemoteEntry};

/// Ordered uploads and deletions.
///
/// After reconciliation no deletion lies below another deletion that is a directory.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SyncPlan {
    pub uploads: Vec<FileEntry>,
    pub deletions: Vec<RemoteEntry>,
}

impl SyncPlan {
    pub fn new(uploads: Vec<FileEntry>, deletions: Vec<RemoteEntry>) -> Self {
        Self { uploads, deletions }
    }

    pub fn is_empty(&self) -> bool {
        self.uploads.is_empty() && self.deletions.is_empty()
    }

    pub fn upload_files(&self) -> usize {
        self.uploads.iter().filter(|e| !e.is_dir()).count()
    }

    pub fn upload_dirs(&self) -> usize {
        self.uploads.iter().filter(|e| e.is_dir()).count()
    }
}
