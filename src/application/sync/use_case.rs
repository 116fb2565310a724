//! Sync Executor
//!
//! Drives a `RemoteFileStore` through one run:
//! 1. Connect
//! 2. Ensure the remote root exists (confirming before creating it)
//! 3. Enumerate local uploads and remote deletion candidates
//! 4. Confirm when more would be deleted than uploaded
//! 5. Delete the reconciled deletion set
//! 6. Upload directories and files in plan order
//!
//! Every remote round trip is sequential over one session and preceded by a
//! cancellation check.

use crate::domain::entities::{FileEntry, RemoteEntry};
use crate::domain::ports::{
    ProgressSink, Prompt, RemoteConnector, RemoteFileStore, RemoteStoreError,
};
use crate::domain::services::{LocalEnumerator, PlanReconciler, RemoteEnumerator};
use crate::domain::value_objects::{CancelFlag, ConnectionParams};
use crate::error::SyncError;

use super::options::SyncOptions;
use super::outcome::{
    AbortReason, SyncFailure, SyncOutcome, SyncProgress, SyncReport, SyncStage,
};

/// Map a failed connect to the error shown to the operator.
///
/// Only host, port and username are carried; credentials never are.
pub fn session_error(params: &ConnectionParams, err: RemoteStoreError) -> SyncError {
    match err {
        RemoteStoreError::Authentication(message) => SyncError::Authentication {
            host: params.host.clone(),
            port: params.port,
            username: params.username.clone(),
            message,
        },
        other => SyncError::Connection {
            host: params.host.clone(),
            port: params.port,
            message: other.to_string(),
        },
    }
}

/// Early, non-error exit from inside a run.
enum Flow {
    Completed(SyncReport),
    Aborted(AbortReason),
}

/// Mutable bookkeeping for one run.
struct RunState {
    stage: SyncStage,
    progress: SyncProgress,
}

impl RunState {
    fn enter(&mut self, stage: SyncStage) {
        tracing::info!(stage = %stage, "sync stage");
        self.stage = stage;
    }
}

/// Sync executor - realizes a plan against one remote session
///
/// Parameterized by its ports so tests can drive it with in-memory fakes.
pub struct SyncExecutor<C, P, S>
where
    C: RemoteConnector,
    P: Prompt,
    S: ProgressSink,
{
    connector: C,
    prompt: P,
    progress: S,
    cancel: CancelFlag,
}

impl<C, P, S> SyncExecutor<C, P, S>
where
    C: RemoteConnector,
    P: Prompt,
    S: ProgressSink,
{
    pub fn new(connector: C, prompt: P, progress: S) -> Self {
        Self {
            connector,
            prompt,
            progress,
            cancel: CancelFlag::new(),
        }
    }

    /// Share an interrupt flag with the caller (e.g. a Ctrl-C handler).
    pub fn with_cancel(mut self, cancel: CancelFlag) -> Self {
        self.cancel = cancel;
        self
    }

    /// Run the sync.
    ///
    /// On failure the session is closed and the error carries the stage and
    /// the progress reached. With `keep_alive` a completed run returns the
    /// open session instead of closing it.
    pub fn run(&self, options: &SyncOptions) -> Result<SyncOutcome<C::Store>, SyncFailure> {
        let mut state = RunState {
            stage: SyncStage::Connecting,
            progress: SyncProgress::default(),
        };

        let mut store = match self.connect(options, &mut state) {
            Ok(Some(store)) => store,
            Ok(None) => {
                return Ok(SyncOutcome::Aborted {
                    reason: AbortReason::Interrupted,
                    progress: state.progress,
                })
            }
            Err(error) => return Err(self.fail(state, error)),
        };

        match self.execute(&store, options, &mut state) {
            Ok(Flow::Completed(report)) => {
                state.enter(SyncStage::Done);
                self.progress.succeed(&format!(
                    "Synced {} files and {} directories to {}{}",
                    report.uploaded_files,
                    report.uploaded_dirs,
                    report.remote_root,
                    deleted_suffix(report.deleted),
                ));

                if options.keep_alive {
                    tracing::debug!("keeping session open");
                    return Ok(SyncOutcome::Completed {
                        report,
                        session: Some(store),
                    });
                }
                release(&mut store);
                Ok(SyncOutcome::Completed {
                    report,
                    session: None,
                })
            }
            Ok(Flow::Aborted(reason)) => {
                tracing::info!(reason = %reason, "sync aborted");
                release(&mut store);
                Ok(SyncOutcome::Aborted {
                    reason,
                    progress: state.progress,
                })
            }
            Err(SyncError::Interrupted) => {
                self.progress.fail("Interrupted");
                release(&mut store);
                Ok(SyncOutcome::Aborted {
                    reason: AbortReason::Interrupted,
                    progress: state.progress,
                })
            }
            Err(error) => {
                release(&mut store);
                Err(self.fail(state, error))
            }
        }
    }

    fn connect(
        &self,
        options: &SyncOptions,
        state: &mut RunState,
    ) -> Result<Option<C::Store>, SyncError> {
        if self.cancel.is_cancelled() {
            return Ok(None);
        }

        state.enter(SyncStage::Connecting);
        let endpoint = options.connect.endpoint();
        self.progress.start(&format!("Connecting to {}", endpoint));

        let store = self
            .connector
            .connect(&options.connect)
            .map_err(|e| session_error(&options.connect, e))?;

        self.progress.succeed(&format!("Connected to {}", endpoint));
        Ok(Some(store))
    }

    fn execute(
        &self,
        store: &C::Store,
        options: &SyncOptions,
        state: &mut RunState,
    ) -> Result<Flow, SyncError> {
        let root = options.remote_path.as_str();

        state.enter(SyncStage::EnsuringRemoteRoot);
        self.check_cancel()?;
        let mut created_root = false;
        if !store
            .exists(root)
            .map_err(|e| SyncError::remote("stat", root, e))?
        {
            let question = format!("Remote directory {} does not exist. Create it?", root);
            if !self.confirm(&question)? {
                return Ok(Flow::Aborted(AbortReason::RemoteRootDeclined));
            }
            self.check_cancel()?;
            store
                .mkdir(root, true)
                .map_err(|e| SyncError::remote("mkdir", root, e))?;
            created_root = true;
        }

        state.enter(SyncStage::Planning);
        self.progress.start("Scanning files");
        let scan = LocalEnumerator::scan(&options.local_path, root, &options.ignore)?;
        let candidates = RemoteEnumerator::enumerate(store, root, &options.clean, &self.cancel)?;
        tracing::debug!(
            uploads = scan.entries.len(),
            deletion_candidates = candidates.len(),
            ignored = scan.ignored.len(),
            "scan finished"
        );

        // Settle the spinner so a prompt is not drawn over.
        self.progress.succeed(&format!(
            "Found {} local entries and {} deletion candidates",
            scan.entries.len(),
            candidates.len()
        ));

        if candidates.len() > scan.entries.len() {
            let question = format!(
                "{} remote entries are marked for deletion but only {} local entries will be uploaded. Continue?",
                candidates.len(),
                scan.entries.len()
            );
            if !self.confirm(&question)? {
                return Ok(Flow::Aborted(AbortReason::DeletionGateDeclined));
            }
        }

        let plan = PlanReconciler::reconcile(scan.entries, candidates);
        state.progress.uploads_total = plan.uploads.len();
        state.progress.deletions_total = plan.deletions.len();
        self.progress.succeed(&format!(
            "Planned {} uploads and {} deletions",
            plan.uploads.len(),
            plan.deletions.len()
        ));

        if !plan.deletions.is_empty() {
            state.enter(SyncStage::Deleting);
            self.progress.start("Deleting remote files");
            self.delete_all(store, &plan.deletions, state)?;
            self.progress
                .succeed(&format!("Deleted {} remote entries", state.progress.deleted));
        }

        state.enter(SyncStage::Uploading);
        self.progress.start("Uploading");
        self.upload_all(store, &plan.uploads, state)?;

        Ok(Flow::Completed(SyncReport {
            remote_root: root.to_string(),
            uploaded_files: plan.upload_files(),
            uploaded_dirs: plan.upload_dirs(),
            deleted: state.progress.deleted,
            ignored: scan.ignored.len(),
            created_root,
        }))
    }

    fn delete_all(
        &self,
        store: &C::Store,
        deletions: &[RemoteEntry],
        state: &mut RunState,
    ) -> Result<(), SyncError> {
        let total = deletions.len();
        for (i, entry) in deletions.iter().enumerate() {
            self.check_cancel()?;
            self.progress
                .update(&format!("[{}/{}] Deleting {}", i + 1, total, entry.path));
            tracing::debug!(path = %entry.path, dir = entry.is_dir, "delete");

            if entry.is_dir {
                store
                    .rmdir(&entry.path, true)
                    .map_err(|e| SyncError::remote("rmdir", &entry.path, e))?;
            } else {
                store
                    .delete(&entry.path)
                    .map_err(|e| SyncError::remote("delete", &entry.path, e))?;
            }
            state.progress.deleted += 1;
        }
        Ok(())
    }

    fn upload_all(
        &self,
        store: &C::Store,
        uploads: &[FileEntry],
        state: &mut RunState,
    ) -> Result<(), SyncError> {
        let total = uploads.len();
        for (i, entry) in uploads.iter().enumerate() {
            let remote = entry.remote_path();
            self.check_cancel()?;
            self.progress
                .update(&format!("[{}/{}] Uploading {}", i + 1, total, remote));

            if entry.is_dir() {
                let present = store
                    .exists(remote)
                    .map_err(|e| SyncError::remote("stat", remote, e))?;
                if !present {
                    self.check_cancel()?;
                    tracing::debug!(path = remote, "mkdir");
                    store
                        .mkdir(remote, false)
                        .map_err(|e| SyncError::remote("mkdir", remote, e))?;
                }
            } else {
                tracing::debug!(local = %entry.local_path().display(), remote, "put");
                store
                    .put(entry.local_path(), remote)
                    .map_err(|e| SyncError::remote("put", remote, e))?;
            }
            state.progress.uploaded += 1;
        }
        Ok(())
    }

    /// Ask the operator. A "no" caused by Ctrl-C counts as an interrupt.
    fn confirm(&self, question: &str) -> Result<bool, SyncError> {
        let answer = self.prompt.confirm(question);
        self.check_cancel()?;
        Ok(answer)
    }

    fn check_cancel(&self) -> Result<(), SyncError> {
        if self.cancel.is_cancelled() {
            Err(SyncError::Interrupted)
        } else {
            Ok(())
        }
    }

    fn fail(&self, state: RunState, error: SyncError) -> SyncFailure {
        self.progress
            .fail(&format!("Sync failed while {}: {}", state.stage, error));
        SyncFailure {
            stage: state.stage,
            progress: state.progress,
            error,
        }
    }
}

fn release<T: RemoteFileStore>(store: &mut T) {
    if let Err(e) = store.close() {
        tracing::warn!(error = %e, "failed to close remote session");
    }
}

fn deleted_suffix(deleted: usize) -> String {
    if deleted == 0 {
        String::new()
    } else {
        format!(", deleted {}", deleted)
    }
}
