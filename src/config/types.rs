//! Configuration type definitions (`.sftprc.json`)

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Raw contents of `.sftprc.json`, before validation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SftpConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub local_path: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub remote_path: Option<String>,

    #[serde(default)]
    pub connect_options: ConnectOptions,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ignore: Option<OneOrMany>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub clean_remote_files: Option<CleanSetting>,

    /// Defaults to `true` when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub security_lock: Option<bool>,

    /// Remote path prefix -> public base URL, used by `show-url`
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub urls: BTreeMap<String, String>,
}

impl SftpConfig {
    pub fn security_lock(&self) -> bool {
        self.security_lock.unwrap_or(true)
    }

    pub fn ignore_patterns(&self) -> Vec<String> {
        self.ignore.clone().map(OneOrMany::into_vec).unwrap_or_default()
    }
}

/// SSH connection settings. Opaque to the sync core.
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConnectOptions {
    #[serde(default)]
    pub host: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub port: Option<u16>,

    #[serde(default)]
    pub username: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub private_key: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub passphrase: Option<String>,

    /// Milliseconds
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ready_timeout: Option<u64>,
}

impl std::fmt::Debug for ConnectOptions {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConnectOptions")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("username", &self.username)
            .field("password", &self.password.as_ref().map(|_| "<redacted>"))
            .field("private_key", &self.private_key)
            .field("passphrase", &self.passphrase.as_ref().map(|_| "<redacted>"))
            .field("ready_timeout", &self.ready_timeout)
            .finish()
    }
}

/// `"pattern"` or `["a", "b"]`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OneOrMany {
    One(String),
    Many(Vec<String>),
}

impl OneOrMany {
    pub fn into_vec(self) -> Vec<String> {
        match self {
            Self::One(s) => vec![s],
            Self::Many(v) => v,
        }
    }
}

/// `cleanRemoteFiles`: `true` prunes everything, a list prunes matches.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CleanSetting {
    Enabled(bool),
    Patterns(Vec<String>),
}
