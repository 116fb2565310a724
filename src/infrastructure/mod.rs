//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//! This layer handles all I/O operations.
//!
//! ## Structure
//!
//! - `sftp/` - libssh2-backed `RemoteConnector` / `RemoteFileStore`
//! - `prompt` - Terminal confirmation prompts

pub mod prompt;
pub mod sftp;

// Re-export for convenience
pub use prompt::DialoguerPrompt;
pub use sftp::{SftpConnector, SftpStore};
