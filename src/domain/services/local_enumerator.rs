//! Local tree enumeration
//!
//! Walks the local directory, drops ignored nodes and maps each survivor to
//! its remote destination by prefix substitution.

use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::entities::FileEntry;
use crate::domain::ports::remote_file_store::join_remote;
use crate::domain::value_objects::PatternSet;
use crate::error::{SyncError, SyncResult};

/// Result of a local walk: the upload candidates plus what was ignored.
#[derive(Debug, Clone, Default)]
pub struct LocalScan {
    pub entries: Vec<FileEntry>,
    /// Ignored nodes. An ignored directory is listed once; its subtree is not walked.
    pub ignored: Vec<PathBuf>,
}

/// Enumerates the upload candidate set.
pub struct LocalEnumerator;

impl LocalEnumerator {
    /// Upload candidates for `local_root` mirrored onto `remote_root`.
    pub fn enumerate(
        local_root: &Path,
        remote_root: &str,
        ignore: &PatternSet,
    ) -> SyncResult<Vec<FileEntry>> {
        Self::scan(local_root, remote_root, ignore).map(|scan| scan.entries)
    }

    /// Walk the tree depth-first, parents before children, siblings by name.
    pub fn scan(local_root: &Path, remote_root: &str, ignore: &PatternSet) -> SyncResult<LocalScan> {
        let mut scan = LocalScan::default();
        let mut pending: Vec<(PathBuf, String)> = Vec::new();

        push_children(local_root, remote_root, &mut pending)?;

        while let Some((local, remote)) = pending.pop() {
            if ignore.matches(&local) {
                tracing::debug!(path = %local.display(), "ignored");
                scan.ignored.push(local);
                continue;
            }

            let meta = fs::metadata(&local).map_err(|e| walk_error(&local, e))?;
            let is_link = fs::symlink_metadata(&local)
                .map(|m| m.file_type().is_symlink())
                .unwrap_or(false);

            if meta.is_dir() {
                if is_link {
                    tracing::warn!(path = %local.display(), "skipping symlinked directory");
                    continue;
                }
                push_children(&local, &remote, &mut pending)?;
                scan.entries.push(FileEntry::directory(local, remote));
            } else {
                scan.entries.push(FileEntry::file(local, remote));
            }
        }

        Ok(scan)
    }
}

/// Push the children of `dir` so that popping yields them in name order.
fn push_children(
    dir: &Path,
    remote_dir: &str,
    pending: &mut Vec<(PathBuf, String)>,
) -> SyncResult<()> {
    let mut children: Vec<(String, PathBuf)> = Vec::new();
    for entry in fs::read_dir(dir).map_err(|e| walk_error(dir, e))? {
        let entry = entry.map_err(|e| walk_error(dir, e))?;
        let path = entry.path();
        match entry.file_name().into_string() {
            Ok(name) => children.push((name, path)),
            Err(_) => {
                return Err(SyncError::LocalWalk {
                    path,
                    message: "file name is not valid UTF-8".to_string(),
                })
            }
        }
    }
    children.sort_by(|a, b| a.0.cmp(&b.0));

    for (name, path) in children.into_iter().rev() {
        pending.push((path, join_remote(remote_dir, &name)));
    }
    Ok(())
}

fn walk_error(path: &Path, err: std::io::Error) -> SyncError {
    SyncError::LocalWalk {
        path: path.to_path_buf(),
        message: err.to_string(),
    }
}
