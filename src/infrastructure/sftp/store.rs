//! Open SFTP session

use std::fmt;
use std::fs::File;
use std::io;
use std::path::Path;

use ssh2::{ErrorCode, Session, Sftp};

use crate::domain::ports::remote_file_store::join_remote;
use crate::domain::ports::{RemoteDirEntry, RemoteFileStore, RemoteResult, RemoteStoreError};

/// SFTP status codes (draft-ietf-secsh-filexfer).
const FX_NO_SUCH_FILE: i32 = 2;
const FX_PERMISSION_DENIED: i32 = 3;

const DIR_MODE: i32 = 0o755;

/// A libssh2 session with its SFTP channel.
pub struct SftpStore {
    // Dropped before the session it rides on.
    sftp: Sftp,
    session: Session,
    endpoint: String,
}

impl SftpStore {
    pub(super) fn new(session: Session, sftp: Sftp, endpoint: String) -> Self {
        Self {
            sftp,
            session,
            endpoint,
        }
    }

    /// `username@host:port`
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    fn mkdir_one(&self, path: &str) -> RemoteResult<()> {
        tracing::trace!(path, "sftp mkdir");
        self.sftp
            .mkdir(Path::new(path), DIR_MODE)
            .map_err(|e| store_error(path, e))
    }

    fn children(&self, path: &str) -> RemoteResult<Vec<(String, bool)>> {
        tracing::trace!(path, "sftp readdir");
        let entries = self
            .sftp
            .readdir(Path::new(path))
            .map_err(|e| store_error(path, e))?;

        Ok(entries
            .into_iter()
            .filter_map(|(child, stat)| {
                let name = child.file_name()?.to_string_lossy().into_owned();
                if name == "." || name == ".." {
                    None
                } else {
                    Some((name, stat.is_dir()))
                }
            })
            .collect())
    }
}

impl fmt::Debug for SftpStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SftpStore")
            .field("endpoint", &self.endpoint)
            .finish_non_exhaustive()
    }
}

impl RemoteFileStore for SftpStore {
    fn exists(&self, path: &str) -> RemoteResult<bool> {
        tracing::trace!(path, "sftp stat");
        match self.sftp.stat(Path::new(path)) {
            Ok(_) => Ok(true),
            Err(e) if matches!(e.code(), ErrorCode::SFTP(FX_NO_SUCH_FILE)) => Ok(false),
            Err(e) => Err(store_error(path, e)),
        }
    }

    fn mkdir(&self, path: &str, recursive: bool) -> RemoteResult<()> {
        if !recursive {
            return self.mkdir_one(path);
        }

        let mut current = if path.starts_with('/') {
            String::from("/")
        } else {
            String::new()
        };
        for part in path.split('/').filter(|p| !p.is_empty()) {
            current = join_remote(&current, part);
            if !self.exists(&current)? {
                self.mkdir_one(&current)?;
            }
        }
        Ok(())
    }

    fn list(&self, path: &str) -> RemoteResult<Vec<RemoteDirEntry>> {
        Ok(self
            .children(path)?
            .into_iter()
            .map(|(name, is_dir)| RemoteDirEntry::new(name, is_dir))
            .collect())
    }

    fn delete(&self, path: &str) -> RemoteResult<()> {
        tracing::trace!(path, "sftp unlink");
        self.sftp
            .unlink(Path::new(path))
            .map_err(|e| store_error(path, e))
    }

    fn rmdir(&self, path: &str, recursive: bool) -> RemoteResult<()> {
        if !recursive {
            return self
                .sftp
                .rmdir(Path::new(path))
                .map_err(|e| store_error(path, e));
        }

        // Post-order: a directory is removed once its children are gone.
        let mut stack: Vec<(String, bool)> = vec![(path.to_string(), false)];
        while let Some((dir, emptied)) = stack.pop() {
            if emptied {
                tracing::trace!(path = %dir, "sftp rmdir");
                self.sftp
                    .rmdir(Path::new(&dir))
                    .map_err(|e| store_error(&dir, e))?;
                continue;
            }

            stack.push((dir.clone(), true));
            for (name, is_dir) in self.children(&dir)? {
                let child = join_remote(&dir, &name);
                if is_dir {
                    stack.push((child, false));
                } else {
                    self.delete(&child)?;
                }
            }
        }
        Ok(())
    }

    fn put(&self, local: &Path, remote: &str) -> RemoteResult<()> {
        let mut source = File::open(local).map_err(|e| local_error(local, e))?;
        let mut target = self
            .sftp
            .create(Path::new(remote))
            .map_err(|e| store_error(remote, e))?;
        io::copy(&mut source, &mut target)
            .map_err(|e| RemoteStoreError::Other(format!("{}: {}", remote, e)))?;
        Ok(())
    }

    fn close(&mut self) -> RemoteResult<()> {
        tracing::debug!(endpoint = %self.endpoint, "disconnect");
        self.session
            .disconnect(None, "sync finished", None)
            .map_err(|e| RemoteStoreError::Other(e.to_string()))
    }
}

fn store_error(path: &str, err: ssh2::Error) -> RemoteStoreError {
    match err.code() {
        ErrorCode::SFTP(FX_NO_SUCH_FILE) => RemoteStoreError::NotFound(path.to_string()),
        ErrorCode::SFTP(FX_PERMISSION_DENIED) => {
            RemoteStoreError::PermissionDenied(path.to_string())
        }
        _ => RemoteStoreError::Other(format!("{}: {}", path, err.message())),
    }
}

fn local_error(path: &Path, err: io::Error) -> RemoteStoreError {
    RemoteStoreError::Other(format!("cannot read {}: {}", path.display(), err))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sftp_status_codes_map_to_store_errors() {
        let missing = store_error("/srv/x", ssh2::Error::new(ErrorCode::SFTP(2), "no such file"));
        assert_eq!(missing, RemoteStoreError::NotFound("/srv/x".to_string()));

        let denied = store_error("/srv/x", ssh2::Error::new(ErrorCode::SFTP(3), "denied"));
        assert_eq!(denied, RemoteStoreError::PermissionDenied("/srv/x".to_string()));

        let other = store_error("/srv/x", ssh2::Error::new(ErrorCode::SFTP(4), "failure"));
        assert_eq!(other, RemoteStoreError::Other("/srv/x: failure".to_string()));
    }
}
