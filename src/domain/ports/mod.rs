//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries of the domain layer.
//! Infrastructure and the CLI provide concrete implementations.

pub mod progress_sink;
pub mod prompt;
pub mod remote_file_store;

pub use progress_sink::{NoopProgress, ProgressSink};
pub use prompt::{AlwaysConfirm, Prompt};
pub use remote_file_store::{
    RemoteConnector, RemoteDirEntry, RemoteFileStore, RemoteResult, RemoteStoreError,
};
