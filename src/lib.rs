//! ssh-sftp - mirror a local directory to a remote path over SFTP
//!
//! A sync uploads every non-ignored local file and directory under
//! `remotePath`, optionally pruning remote entries first, and refuses to run
//! against a remote path that does not name the project (the security lock).
//!
//! ## Layers
//!
//! - `domain` - plan entities, pattern matching, enumerators, reconciler, ports
//! - `application` - `SyncExecutor` and the read-only preview
//! - `config` - `.sftprc.json` loading and validation
//! - `infrastructure` - `ssh2` remote store and terminal prompt
//! - `presentation` - CLI definitions and use case wiring

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod presentation;

// Re-exports for convenience
pub use application::{
    PreviewRequest, PreviewUseCase, SyncExecutor, SyncFailure, SyncOptions, SyncOutcome,
};
pub use config::{ConfigValidator, SftpConfig, ValidatedConfig};
pub use domain::entities::{FileEntry, RemoteEntry, SyncPlan};
pub use domain::value_objects::{CancelFlag, CleanPatterns, ConnectionParams, PatternSet};
pub use error::{SyncError, SyncResult};
