//! Config validation
//!
//! Turns a raw `.sftprc.json` into immutable `SyncOptions`. Everything here
//! runs before any network I/O.

use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::application::sync::SyncOptions;
use crate::domain::services::{PlanReconciler, SecurityCheck};
use crate::domain::value_objects::{
    CleanPatterns, ConnectionParams, PatternSet, DEFAULT_SSH_PORT,
};
use crate::error::{SyncError, SyncResult};

use super::types::{CleanSetting, ConnectOptions, SftpConfig};

/// Validated options plus the security lock verdict.
#[derive(Debug, Clone)]
pub struct ValidatedConfig {
    pub options: SyncOptions,
    pub security: SecurityCheck,
}

pub struct ConfigValidator;

impl ConfigValidator {
    /// Validate `config` for a project rooted at `project_root`.
    ///
    /// `project_name` is the manifest name used by the security lock.
    pub fn validate(
        config: &SftpConfig,
        project_root: &Path,
        project_name: Option<&str>,
    ) -> SyncResult<ValidatedConfig> {
        let local_path = resolve_local_path(config.local_path.as_deref(), project_root)?;
        let remote_path = normalize_remote_path(config.remote_path.as_deref())?;

        let security = PlanReconciler::validate_security(
            &remote_path,
            config.security_lock(),
            project_name,
            project_root,
        )?;

        let connect = connection_params(&config.connect_options)?;

        let base = local_path.to_string_lossy().into_owned();
        let ignore = PatternSet::normalize(&config.ignore_patterns(), &base);
        let clean = match &config.clean_remote_files {
            None | Some(CleanSetting::Enabled(false)) => CleanPatterns::None,
            Some(CleanSetting::Enabled(true)) => CleanPatterns::All,
            Some(CleanSetting::Patterns(patterns)) => {
                CleanPatterns::from_patterns(patterns, &remote_path)
            }
        };

        let mut options = SyncOptions::new(local_path, remote_path, connect)
            .with_ignore(ignore)
            .with_clean(clean);
        options.security_lock = config.security_lock();

        Ok(ValidatedConfig { options, security })
    }
}

fn resolve_local_path(raw: Option<&str>, project_root: &Path) -> SyncResult<PathBuf> {
    let raw = raw.map(str::trim).filter(|p| !p.is_empty());
    let Some(raw) = raw else {
        return Err(SyncError::MissingLocalPath);
    };

    let path = Path::new(raw);
    let joined = if path.is_absolute() {
        path.to_path_buf()
    } else {
        project_root.join(path)
    };

    let meta = match std::fs::metadata(&joined) {
        Ok(m) => m,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            return Err(SyncError::LocalPathNotFound { path: joined })
        }
        Err(e) => return Err(e.into()),
    };
    if !meta.is_dir() {
        return Err(SyncError::LocalPathNotDirectory { path: joined });
    }

    Ok(joined.canonicalize()?)
}

fn normalize_remote_path(raw: Option<&str>) -> SyncResult<String> {
    let raw = raw.map(str::trim).unwrap_or_default();
    if raw.is_empty() {
        return Err(SyncError::EmptyRemotePath);
    }
    let trimmed = raw.trim_end_matches('/');
    Ok(if trimmed.is_empty() {
        "/".to_string()
    } else {
        trimmed.to_string()
    })
}

fn connection_params(options: &ConnectOptions) -> SyncResult<ConnectionParams> {
    let host = options.host.trim();
    if host.is_empty() {
        return Err(SyncError::MissingHost);
    }

    let mut params = ConnectionParams::new(host, options.username.trim())
        .with_port(options.port.unwrap_or(DEFAULT_SSH_PORT));

    if let Some(password) = options.password.as_deref().filter(|p| !p.is_empty()) {
        params = params.with_password(password);
    }
    if let Some(key) = options.private_key.as_deref().filter(|k| !k.trim().is_empty()) {
        params = params.with_private_key(expand_home(key.trim()));
    }
    params.passphrase = options.passphrase.clone().filter(|p| !p.is_empty());
    if let Some(ms) = options.ready_timeout.filter(|ms| *ms > 0) {
        params = params.with_timeout(Duration::from_millis(ms));
    }

    Ok(params)
}

fn expand_home(path: &str) -> PathBuf {
    match path.strip_prefix("~/") {
        Some(rest) => match dirs::home_dir() {
            Some(home) => home.join(rest),
            None => PathBuf::from(path),
        },
        None => PathBuf::from(path),
    }
}
