//! Application Layer
//!
//! Use cases that orchestrate the business flow.
//! This layer:
//! - Depends on Domain layer (entities, services, ports)
//! - Does NOT contain business rules (those are in Domain)
//! - Coordinates between Infrastructure and Domain
//!
//! ## Use Cases
//!
//! - `SyncExecutor` - Connect, plan, delete and upload
//! - `PreviewUseCase` - Compute the plan without touching the remote

pub mod preview;
pub mod sync;

pub use preview::{PreviewRequest, PreviewUseCase, SyncPreview};
pub use sync::{
    AbortReason, SyncExecutor, SyncFailure, SyncOptions, SyncOutcome, SyncProgress, SyncReport,
    SyncStage,
};
