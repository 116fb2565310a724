//! Shared helpers for `ssh-sftp` CLI tests.
//!
//! `TestProject` is an isolated project directory (with its own HOME) plus a
//! way to run the built binary inside it.

#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

use tempfile::TempDir;

/// Result of running the CLI
#[derive(Debug)]
pub struct TestResult {
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl TestResult {
    pub fn is_success(&self) -> bool {
        self.exit_code == 0
    }

    pub fn combined_output(&self) -> String {
        format!("{}\n{}", self.stdout, self.stderr)
    }

    /// Parse stdout as NDJSON events.
    pub fn events(&self) -> Vec<serde_json::Value> {
        self.stdout
            .lines()
            .filter(|l| !l.trim().is_empty())
            .map(|l| serde_json::from_str(l).expect("stdout line is not JSON"))
            .collect()
    }
}

pub struct TestProject {
    pub root: TempDir,
    pub home: TempDir,
}

impl TestProject {
    /// Empty directory, no manifest.
    pub fn empty() -> Self {
        Self {
            root: TempDir::new().unwrap(),
            home: TempDir::new().unwrap(),
        }
    }

    /// Directory with a `package.json` naming the project.
    pub fn named(name: &str) -> Self {
        let project = Self::empty();
        project.write(
            "package.json",
            &serde_json::json!({ "name": name, "version": "1.0.0" }).to_string(),
        );
        project
    }

    pub fn path(&self, relative: &str) -> PathBuf {
        self.root.path().join(relative)
    }

    pub fn write(&self, relative: &str, content: &str) {
        let path = self.path(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, content).unwrap();
    }

    pub fn write_config(&self, config: serde_json::Value) {
        self.write(
            ".sftprc.json",
            &serde_json::to_string_pretty(&config).unwrap(),
        );
    }

    pub fn run(&self, args: &[&str]) -> TestResult {
        self.run_from(self.root.path(), args)
    }

    pub fn run_from(&self, cwd: &Path, args: &[&str]) -> TestResult {
        let output = Command::new(env!("CARGO_BIN_EXE_ssh-sftp"))
            .current_dir(cwd)
            .args(args)
            .env("HOME", self.home.path())
            .env("NO_COLOR", "1")
            .env_remove("RUST_LOG")
            .env_remove("SSH_SFTP_HOST")
            .env_remove("SSH_SFTP_PASSWORD")
            .env_remove("SSH_SFTP_PASSPHRASE")
            .env_remove("SSH_AUTH_SOCK")
            .output()
            .expect("failed to run ssh-sftp");

        TestResult {
            exit_code: output.status.code().unwrap_or(-1),
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        }
    }
}

/// A config pointing at a host that never resolves.
pub fn unreachable_config(remote_path: &str) -> serde_json::Value {
    serde_json::json!({
        "localPath": "dist",
        "remotePath": remote_path,
        "connectOptions": {
            "host": "host.invalid",
            "port": 22,
            "username": "deploy",
            "password": "hunter2-secret"
        },
        "securityLock": true
    })
}
