//! Sync Options

use std::path::PathBuf;

use crate::domain::value_objects::{CleanPatterns, ConnectionParams, PatternSet};

/// Everything one run needs, already validated.
///
/// Built by `ConfigValidator`; immutable for the duration of the run.
#[derive(Debug, Clone)]
pub struct SyncOptions {
    /// Existing local directory (canonical)
    pub local_path: PathBuf,
    /// Remote replacement root, never empty
    pub remote_path: String,
    pub connect: ConnectionParams,
    /// Ignore patterns anchored at `local_path`
    pub ignore: PatternSet,
    /// Prune selection anchored at `remote_path`
    pub clean: CleanPatterns,
    pub security_lock: bool,
    /// Hand the open session back to the caller instead of closing it
    pub keep_alive: bool,
}

impl SyncOptions {
    pub fn new(
        local_path: impl Into<PathBuf>,
        remote_path: impl Into<String>,
        connect: ConnectionParams,
    ) -> Self {
        Self {
            local_path: local_path.into(),
            remote_path: remote_path.into(),
            connect,
            ignore: PatternSet::empty(),
            clean: CleanPatterns::None,
            security_lock: true,
            keep_alive: false,
        }
    }

    pub fn with_ignore(mut self, ignore: PatternSet) -> Self {
        self.ignore = ignore;
        self
    }

    pub fn with_clean(mut self, clean: CleanPatterns) -> Self {
        self.clean = clean;
        self
    }

    pub fn with_keep_alive(mut self, keep_alive: bool) -> Self {
        self.keep_alive = keep_alive;
        self
    }
}
