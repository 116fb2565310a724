//! Sync Module
//!
//! Runs one sync against a remote endpoint.
//!
//! ## Structure
//!
//! - `options` - Validated, immutable run options (`SyncOptions`)
//! - `outcome` - Terminal values (`SyncOutcome`, `SyncFailure`, `SyncProgress`)
//! - `use_case` - The `SyncExecutor` state machine
//!
//! ## Usage
//!
//! ```ignore
//! use ssh_sftp::application::sync::{SyncExecutor, SyncOutcome};
//!
//! let executor = SyncExecutor::new(connector, prompt, progress).with_cancel(cancel);
//! match executor.run(&options)? {
//!     SyncOutcome::Completed { report, .. } => println!("{} files", report.uploaded_files),
//!     SyncOutcome::Aborted { reason, .. } => eprintln!("{}", reason),
//! }
//! ```

mod options;
mod outcome;
mod use_case;

pub use options::SyncOptions;
pub use outcome::{AbortReason, SyncFailure, SyncOutcome, SyncProgress, SyncReport, SyncStage};
pub use use_case::{session_error, SyncExecutor};
