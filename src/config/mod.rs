//! Configuration module for ssh-sftp
//!
//! Resolution order:
//! 1. CLI flags (highest priority)
//! 2. Environment variables (SSH_SFTP_*)
//! 3. Project config (.sftprc.json)
//! 4. Built-in defaults (lowest priority)

mod loader;
mod manifest;
mod site_url;
mod types;
mod validator;

pub use loader::{
    load, load_with_warnings, template, with_env_overrides, write_template, ConfigWarning,
    CONFIG_FILE_NAME,
};
pub use manifest::{ManifestKind, ProjectManifest};
pub use site_url::derive_url;
pub use types::{CleanSetting, ConnectOptions, OneOrMany, SftpConfig};
pub use validator::{ConfigValidator, ValidatedConfig};
