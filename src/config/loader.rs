//! Configuration loading and persistence

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{SyncError, SyncResult};

use super::types::{CleanSetting, ConnectOptions, OneOrMany, SftpConfig};

/// Config file name, looked up in the project root.
pub const CONFIG_FILE_NAME: &str = ".sftprc.json";

/// Non-fatal configuration warning surfaced to CLI users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub key: String,
    pub file: PathBuf,
    pub line: Option<usize>,
    pub suggestion: Option<String>,
}

/// Load configuration, discarding warnings.
pub fn load(path: &Path) -> SyncResult<SftpConfig> {
    load_with_warnings(path).map(|(config, _)| config)
}

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
///
/// Environment overrides are applied to the result.
pub fn load_with_warnings(path: &Path) -> SyncResult<(SftpConfig, Vec<ConfigWarning>)> {
    let content = match fs::read_to_string(path) {
        Ok(c) => c,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            return Err(SyncError::ConfigNotFound {
                path: path.to_path_buf(),
            })
        }
        Err(e) => return Err(e.into()),
    };

    let mut unknown_paths: Vec<String> = Vec::new();
    let mut deserializer = serde_json::Deserializer::from_str(&content);

    let config: SftpConfig = serde_ignored::deserialize(&mut deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| SyncError::InvalidConfig {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let warnings = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            tracing::warn!(key = %key, file = %path.display(), "unknown config key");
            ConfigWarning {
                line: find_line_number(&content, &format!("\"{}\"", key)),
                suggestion: suggest_key(&key),
                key,
                file: path.to_path_buf(),
            }
        })
        .collect();

    Ok((with_env_overrides(config), warnings))
}

/// Apply environment variable overrides (SSH_SFTP_* prefix)
pub fn with_env_overrides(config: SftpConfig) -> SftpConfig {
    with_env_overrides_from(config, |key| std::env::var(key).ok())
}

fn with_env_overrides_from(
    mut config: SftpConfig,
    get_env: impl Fn(&str) -> Option<String>,
) -> SftpConfig {
    if let Some(host) = get_env("SSH_SFTP_HOST").filter(|h| !h.is_empty()) {
        config.connect_options.host = host;
    }

    // Secrets can stay out of the file entirely.
    if let Some(password) = get_env("SSH_SFTP_PASSWORD") {
        config.connect_options.password = Some(password);
    }
    if let Some(passphrase) = get_env("SSH_SFTP_PASSPHRASE") {
        config.connect_options.passphrase = Some(passphrase);
    }

    config
}

/// The config written by `init`.
pub fn template() -> SftpConfig {
    SftpConfig {
        local_path: Some("/path/to/localDir".to_string()),
        remote_path: Some("/path/to/remoteDir".to_string()),
        connect_options: ConnectOptions {
            host: "127.0.0.1".to_string(),
            port: Some(22),
            username: String::new(),
            password: Some(String::new()),
            ..ConnectOptions::default()
        },
        ignore: Some(OneOrMany::Many(vec![
            "**/something[optional].js".to_string(),
        ])),
        clean_remote_files: Some(CleanSetting::Enabled(false)),
        security_lock: Some(true),
        urls: Default::default(),
    }
}

/// Write the template config to `path`.
///
/// Refuses to overwrite an existing file unless `force`.
pub fn write_template(path: &Path, force: bool) -> SyncResult<()> {
    if path.exists() && !force {
        return Err(SyncError::ConfigExists {
            path: path.to_path_buf(),
        });
    }

    let mut content =
        serde_json::to_string_pretty(&template()).map_err(|e| SyncError::InvalidConfig {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
    content.push('\n');
    fs::write(path, content)?;
    Ok(())
}

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    for (i, line) in content.lines().enumerate() {
        if line.contains(needle) {
            return Some(i + 1);
        }
    }
    None
}

fn suggest_key(unknown: &str) -> Option<String> {
    const CANDIDATES: &[&str] = &[
        "localPath",
        "remotePath",
        "connectOptions",
        "host",
        "port",
        "username",
        "password",
        "privateKey",
        "passphrase",
        "readyTimeout",
        "ignore",
        "cleanRemoteFiles",
        "securityLock",
        "urls",
    ];

    let mut best: Option<(&str, usize)> = None;
    for candidate in CANDIDATES {
        let dist = levenshtein(&unknown.to_lowercase(), &candidate.to_lowercase());
        best = match best {
            None => Some((candidate, dist)),
            Some((_, best_dist)) if dist < best_dist => Some((candidate, dist)),
            Some(current) => Some(current),
        };
    }

    match best {
        Some((candidate, dist)) if dist <= 2 => Some(candidate.to_string()),
        _ => None,
    }
}

fn levenshtein(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }

    let a_bytes = a.as_bytes();
    let b_bytes = b.as_bytes();

    let mut prev: Vec<usize> = (0..=b_bytes.len()).collect();
    let mut curr = vec![0usize; b_bytes.len() + 1];

    for (i, &ac) in a_bytes.iter().enumerate() {
        curr[0] = i + 1;
        for (j, &bc) in b_bytes.iter().enumerate() {
            let cost = if ac == bc { 0 } else { 1 };
            curr[j + 1] =
                std::cmp::min(std::cmp::min(prev[j + 1] + 1, curr[j] + 1), prev[j] + cost);
        }
        prev.clone_from_slice(&curr);
    }

    prev[b_bytes.len()]
}

#[cfg(test)]
pub(super) fn overrides_for_test(
    config: SftpConfig,
    env: &[(&str, &str)],
) -> SftpConfig {
    with_env_overrides_from(config, |k| {
        env.iter()
            .find(|(key, _)| *key == k)
            .map(|(_, v)| v.to_string())
    })
}

#[cfg(test)]
pub(super) fn suggest_for_test(key: &str) -> Option<String> {
    suggest_key(key)
}
