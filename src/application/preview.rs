//! Preview Use Case
//!
//! Computes what a sync would do. Never creates, deletes or uploads.

use std::path::PathBuf;

use crate::domain::entities::{FileEntry, RemoteEntry};
use crate::domain::ports::{RemoteConnector, RemoteFileStore};
use crate::domain::services::{LocalEnumerator, PlanReconciler, RemoteEnumerator};
use crate::domain::value_objects::CancelFlag;
use crate::error::SyncResult;

use super::sync::{session_error, SyncOptions};

/// Which sections of the preview to compute.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PreviewRequest {
    pub uploads: bool,
    pub deletions: bool,
    pub ignored: bool,
}

impl PreviewRequest {
    /// No section selected means all of them.
    pub fn from_flags(uploads: bool, deletions: bool, ignored: bool) -> Self {
        if !uploads && !deletions && !ignored {
            Self::all()
        } else {
            Self {
                uploads,
                deletions,
                ignored,
            }
        }
    }

    pub fn all() -> Self {
        Self {
            uploads: true,
            deletions: true,
            ignored: true,
        }
    }
}

/// The plan a sync would execute.
#[derive(Debug, Clone, Default)]
pub struct SyncPreview {
    pub uploads: Vec<FileEntry>,
    /// `None` when deletions were not requested or pruning is off
    pub deletions: Option<Vec<RemoteEntry>>,
    pub ignored: Vec<PathBuf>,
}

pub struct PreviewUseCase<C: RemoteConnector> {
    connector: C,
    cancel: CancelFlag,
}

impl<C: RemoteConnector> PreviewUseCase<C> {
    pub fn new(connector: C) -> Self {
        Self {
            connector,
            cancel: CancelFlag::new(),
        }
    }

    pub fn with_cancel(mut self, cancel: CancelFlag) -> Self {
        self.cancel = cancel;
        self
    }

    /// Connects only when deletions are requested and pruning is configured.
    pub fn execute(&self, options: &SyncOptions, request: PreviewRequest) -> SyncResult<SyncPreview> {
        let scan =
            LocalEnumerator::scan(&options.local_path, &options.remote_path, &options.ignore)?;

        let deletions = if request.deletions && options.clean.is_enabled() {
            Some(self.remote_deletions(options, &scan.entries)?)
        } else {
            None
        };

        Ok(SyncPreview {
            uploads: if request.uploads {
                scan.entries
            } else {
                Vec::new()
            },
            deletions,
            ignored: if request.ignored {
                scan.ignored
            } else {
                Vec::new()
            },
        })
    }

    fn remote_deletions(
        &self,
        options: &SyncOptions,
        uploads: &[FileEntry],
    ) -> SyncResult<Vec<RemoteEntry>> {
        let mut store = self
            .connector
            .connect(&options.connect)
            .map_err(|e| session_error(&options.connect, e))?;

        let root = options.remote_path.as_str();
        let candidates = match store.exists(root) {
            Ok(true) => {
                RemoteEnumerator::enumerate(&store, root, &options.clean, &self.cancel)
            }
            Ok(false) => {
                tracing::info!(root, "remote root does not exist yet");
                Ok(Vec::new())
            }
            Err(e) => Err(crate::error::SyncError::remote("stat", root, e)),
        };

        if let Err(e) = store.close() {
            tracing::warn!(error = %e, "failed to close remote session");
        }

        let plan = PlanReconciler::reconcile(uploads.to_vec(), candidates?);
        Ok(plan.deletions)
    }
}
