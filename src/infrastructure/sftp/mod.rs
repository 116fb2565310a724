//! SFTP Remote Store
//!
//! `RemoteConnector` / `RemoteFileStore` over libssh2 (`ssh2` crate).
//!
//! - `connect` - TCP connect with retry, handshake and authentication
//! - `store` - The file operations of an open session

mod connect;
mod store;

pub use connect::SftpConnector;
pub use store::SftpStore;
