//! Domain Entities
//!
//! Transient values built and consumed within a single sync run.
//! - `FileEntry` - A planned upload unit
//! - `RemoteEntry` - A node found by a remote tree walk
//! - `SyncPlan` - Ordered uploads and deletions

mod file_entry;
mod remote_entry;
mod sync_plan;

pub use file_entry::FileEntry;
pub use remote_entry::{is_strict_descendant, RemoteEntry};
pub use sync_plan::SyncPlan;
