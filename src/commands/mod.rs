//! Command handlers for the `ssh-sftp` binary.

pub mod init;
pub mod list;
pub mod show_url;
pub mod sync;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use ssh_sftp::config::{self, ConfigValidator, ProjectManifest, SftpConfig, ValidatedConfig};
use ssh_sftp::domain::value_objects::{CancelFlag, CleanPatterns};

use crate::ui::context::UiContext;
use crate::ui::output::{print_config_warnings, print_rejected_patterns, print_security_check};

/// How a command ended when it did not fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Exit {
    Success,
    /// Operator answered "no" to a confirmation
    Declined,
    /// Ctrl-C
    Interrupted,
    Failure,
}

impl Exit {
    pub fn code(self) -> u8 {
        match self {
            Exit::Success => 0,
            Exit::Declined | Exit::Failure => 1,
            Exit::Interrupted => 130,
        }
    }
}

/// Global flags shared by every command.
pub struct CommandContext {
    pub config: Option<PathBuf>,
    pub yes: bool,
    pub ui: UiContext,
    pub cancel: CancelFlag,
}

/// Loaded and validated project configuration.
pub struct Project {
    pub config: SftpConfig,
    pub validated: ValidatedConfig,
}

impl CommandContext {
    pub fn config_path(&self) -> Result<PathBuf> {
        match &self.config {
            Some(path) => Ok(path.clone()),
            None => Ok(current_dir()?.join(config::CONFIG_FILE_NAME)),
        }
    }

    /// Read the config file and print its unknown-key warnings.
    pub fn load_config(&self) -> Result<(PathBuf, SftpConfig)> {
        let path = self.config_path()?;
        let (config, warnings) = config::load_with_warnings(&path)?;
        print_config_warnings(&warnings, &self.ui);
        Ok((path, config))
    }

    /// Load, validate and warn. Nothing here touches the network.
    pub fn load_project(&self) -> Result<Project> {
        let (path, config) = self.load_config()?;
        let root = project_root(&path)?;
        tracing::debug!(root = %root.display(), "project root");

        let manifest = ProjectManifest::discover(&root).ok();
        let name = manifest.as_ref().and_then(ProjectManifest::name);
        let validated = ConfigValidator::validate(&config, &root, name)?;

        print_security_check(&validated.security, &validated.options.remote_path, &self.ui);
        print_rejected_patterns(validated.options.ignore.rejected(), &self.ui);
        if let CleanPatterns::Matching(set) = &validated.options.clean {
            print_rejected_patterns(set.rejected(), &self.ui);
        }

        Ok(Project { config, validated })
    }
}

pub fn current_dir() -> Result<PathBuf> {
    std::env::current_dir().context("failed to read the current directory")
}

/// The directory holding the config file is the project root.
fn project_root(config_path: &Path) -> Result<PathBuf> {
    let parent = match config_path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p.to_path_buf(),
        _ => current_dir()?,
    };
    parent
        .canonicalize()
        .with_context(|| format!("failed to resolve project root {}", parent.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn exit_codes() {
        assert_eq!(Exit::Success.code(), 0);
        assert_eq!(Exit::Declined.code(), 1);
        assert_eq!(Exit::Interrupted.code(), 130);
    }

    #[test]
    fn project_root_is_config_parent() {
        let dir = tempdir().unwrap();
        let cfg = dir.path().join(".sftprc.json");
        assert_eq!(
            project_root(&cfg).unwrap(),
            dir.path().canonicalize().unwrap()
        );
    }
}
