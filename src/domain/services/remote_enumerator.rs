//! Remote tree enumeration
//!
//! Depth-first listing of the remote root through the store, driven by an
//! explicit stack so depth never grows the call stack and an interrupt can
//! stop the walk between round trips.

use crate::domain::entities::RemoteEntry;
use crate::domain::ports::remote_file_store::join_remote;
use crate::domain::ports::RemoteFileStore;
use crate::domain::value_objects::{CancelFlag, CleanPatterns};
use crate::error::{SyncError, SyncResult};

/// Enumerates the deletion candidate set.
pub struct RemoteEnumerator;

impl RemoteEnumerator {
    /// Every node below `remote_root` selected by `clean`, in pre-order:
    /// a directory is followed by its subtree before its next sibling.
    ///
    /// Any failed listing aborts the whole walk.
    pub fn enumerate<S: RemoteFileStore + ?Sized>(
        store: &S,
        remote_root: &str,
        clean: &CleanPatterns,
        cancel: &CancelFlag,
    ) -> SyncResult<Vec<RemoteEntry>> {
        if !clean.is_enabled() {
            return Ok(Vec::new());
        }

        let mut found = Vec::new();
        let mut pending: Vec<RemoteEntry> = Vec::new();
        push_children(store, remote_root, &mut pending, cancel)?;

        while let Some(entry) = pending.pop() {
            if entry.is_dir {
                push_children(store, &entry.path, &mut pending, cancel)?;
            }
            if clean.selects(&entry.path) {
                found.push(entry);
            }
        }

        tracing::debug!(root = remote_root, candidates = found.len(), "remote walk finished");
        Ok(found)
    }
}

fn push_children<S: RemoteFileStore + ?Sized>(
    store: &S,
    dir: &str,
    pending: &mut Vec<RemoteEntry>,
    cancel: &CancelFlag,
) -> SyncResult<()> {
    if cancel.is_cancelled() {
        return Err(SyncError::Interrupted);
    }
    tracing::trace!(dir, "list");
    let mut children = store.list(dir).map_err(|e| SyncError::remote("list", dir, e))?;
    children.sort_by(|a, b| a.name.cmp(&b.name));

    for child in children.into_iter().rev() {
        let path = join_remote(dir, &child.name);
        pending.push(RemoteEntry {
            path,
            is_dir: child.is_dir,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ports::{RemoteDirEntry, RemoteResult, RemoteStoreError};
    use std::cell::RefCell;
    use std::collections::BTreeMap;
    use std::path::Path;

    /// Directory listings keyed by path; records every listed path.
    struct ListingStore {
        dirs: BTreeMap<String, Vec<RemoteDirEntry>>,
        listed: RefCell<Vec<String>>,
    }

    impl ListingStore {
        fn new(dirs: &[(&str, Vec<(&str, bool)>)]) -> Self {
            Self {
                dirs: dirs
                    .iter()
                    .map(|(d, children)| {
                        (
                            d.to_string(),
                            children
                                .iter()
                                .map(|(n, is_dir)| RemoteDirEntry::new(*n, *is_dir))
                                .collect(),
                        )
                    })
                    .collect(),
                listed: RefCell::new(Vec::new()),
            }
        }
    }

    impl RemoteFileStore for ListingStore {
        fn exists(&self, path: &str) -> RemoteResult<bool> {
            Ok(self.dirs.contains_key(path))
        }
        fn mkdir(&self, _path: &str, _recursive: bool) -> RemoteResult<()> {
            unreachable!("enumeration never writes")
        }
        fn list(&self, path: &str) -> RemoteResult<Vec<RemoteDirEntry>> {
            self.listed.borrow_mut().push(path.to_string());
            self.dirs
                .get(path)
                .cloned()
                .ok_or_else(|| RemoteStoreError::PermissionDenied(path.to_string()))
        }
        fn delete(&self, _path: &str) -> RemoteResult<()> {
            unreachable!("enumeration never writes")
        }
        fn rmdir(&self, _path: &str, _recursive: bool) -> RemoteResult<()> {
            unreachable!("enumeration never writes")
        }
        fn put(&self, _local: &Path, _remote: &str) -> RemoteResult<()> {
            unreachable!("enumeration never writes")
        }
        fn close(&mut self) -> RemoteResult<()> {
            Ok(())
        }
    }

    fn sample() -> ListingStore {
        ListingStore::new(&[
            ("/srv/app", vec![("b.txt", false), ("old", true), ("a", true)]),
            ("/srv/app/old", vec![("x.txt", false)]),
            ("/srv/app/a", vec![("deep", true)]),
            ("/srv/app/a/deep", vec![]),
        ])
    }

    #[test]
    fn all_yields_pre_order_walk() {
        let entries = RemoteEnumerator::enumerate(
            &sample(),
            "/srv/app",
            &CleanPatterns::All,
            &CancelFlag::new(),
        )
        .unwrap();

        assert_eq!(
            entries,
            vec![
                RemoteEntry::directory("/srv/app/a"),
                RemoteEntry::directory("/srv/app/a/deep"),
                RemoteEntry::file("/srv/app/b.txt"),
                RemoteEntry::directory("/srv/app/old"),
                RemoteEntry::file("/srv/app/old/x.txt"),
            ]
        );
    }

    #[test]
    fn patterns_filter_candidates() {
        let clean = CleanPatterns::from_patterns(&["old"], "/srv/app");
        let entries =
            RemoteEnumerator::enumerate(&sample(), "/srv/app", &clean, &CancelFlag::new()).unwrap();
        assert_eq!(
            entries,
            vec![
                RemoteEntry::directory("/srv/app/old"),
                RemoteEntry::file("/srv/app/old/x.txt"),
            ]
        );
    }

    #[test]
    fn disabled_pruning_never_lists() {
        let store = sample();
        let entries =
            RemoteEnumerator::enumerate(&store, "/srv/app", &CleanPatterns::None, &CancelFlag::new())
                .unwrap();
        assert!(entries.is_empty());
        assert!(store.listed.borrow().is_empty());
    }

    #[test]
    fn failed_listing_is_fatal() {
        let store = ListingStore::new(&[("/srv/app", vec![("locked", true)])]);
        let err =
            RemoteEnumerator::enumerate(&store, "/srv/app", &CleanPatterns::All, &CancelFlag::new())
                .unwrap_err();
        assert!(matches!(err, SyncError::Remote { op: "list", .. }));
    }

    #[test]
    fn cancelled_walk_stops_before_listing() {
        let store = sample();
        let cancel = CancelFlag::new();
        cancel.cancel();
        let err =
            RemoteEnumerator::enumerate(&store, "/srv/app", &CleanPatterns::All, &cancel).unwrap_err();
        assert!(matches!(err, SyncError::Interrupted));
        assert!(store.listed.borrow().is_empty());
    }
}
