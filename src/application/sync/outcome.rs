//! Sync Outcome
//!
//! Terminal values of a run. A declined confirmation or an interrupt is an
//! `Aborted` outcome, not an error.

use std::fmt;

use thiserror::Error;

use crate::error::SyncError;

/// States of the executor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncStage {
    Connecting,
    EnsuringRemoteRoot,
    Planning,
    Deleting,
    Uploading,
    Done,
}

impl fmt::Display for SyncStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Connecting => "connecting",
            Self::EnsuringRemoteRoot => "checking the remote directory",
            Self::Planning => "planning",
            Self::Deleting => "deleting",
            Self::Uploading => "uploading",
            Self::Done => "finishing",
        };
        f.write_str(s)
    }
}

/// Last-known progress of a run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SyncProgress {
    pub uploads_total: usize,
    pub uploaded: usize,
    pub deletions_total: usize,
    pub deleted: usize,
}

impl fmt::Display for SyncProgress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "uploaded {}/{}, deleted {}/{}",
            self.uploaded, self.uploads_total, self.deleted, self.deletions_total
        )
    }
}

/// Summary of a completed run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SyncReport {
    pub remote_root: String,
    pub uploaded_files: usize,
    pub uploaded_dirs: usize,
    pub deleted: usize,
    pub ignored: usize,
    /// Remote root did not exist and was created
    pub created_root: bool,
}

/// Why a run stopped early without an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AbortReason {
    /// Operator refused to create the missing remote root
    RemoteRootDeclined,
    /// Operator refused to continue past the deletion safety gate
    DeletionGateDeclined,
    /// Ctrl-C
    Interrupted,
}

impl fmt::Display for AbortReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::RemoteRootDeclined => "remote directory was not created",
            Self::DeletionGateDeclined => "deletion was not confirmed",
            Self::Interrupted => "interrupted",
        };
        f.write_str(s)
    }
}

/// How a run ended, short of failing.
#[derive(Debug)]
pub enum SyncOutcome<S> {
    Completed {
        report: SyncReport,
        /// Open session when `keep_alive` was requested; the caller owns it
        session: Option<S>,
    },
    Aborted {
        reason: AbortReason,
        progress: SyncProgress,
    },
}

impl<S> SyncOutcome<S> {
    pub fn is_completed(&self) -> bool {
        matches!(self, Self::Completed { .. })
    }
}

/// A run that failed, with where it stopped.
#[derive(Debug, Error)]
#[error("sync failed while {stage} ({progress})")]
pub struct SyncFailure {
    pub stage: SyncStage,
    pub progress: SyncProgress,
    #[source]
    pub error: SyncError,
}
