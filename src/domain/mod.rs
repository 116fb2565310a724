//! Domain Layer
//!
//! The sync-plan core: enumerating both trees, reconciling them into a plan,
//! and the ports the executor drives.
//!
//! ## Structure
//!
//! - `entities/` - Plan units (FileEntry, RemoteEntry, SyncPlan)
//! - `value_objects/` - Immutable value types (PatternSet, CleanPatterns, ConnectionParams)
//! - `services/` - Enumerators and the plan reconciler
//! - `ports/` - Interface definitions for infrastructure (remote store, progress, prompt)
//!
//! Remote I/O only ever happens through `ports::RemoteFileStore`.

pub mod entities;
pub mod ports;
pub mod services;
pub mod value_objects;
