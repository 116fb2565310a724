//! Plan reconciliation and the security lock
//!
//! Collapses the deletion candidates so a recursive directory delete is the
//! only operation touching its subtree, and guards `remotePath` against
//! pointing somewhere unrelated to the project.

use std::collections::{HashMap, HashSet};
use std::path::Path;

use crate::domain::entities::{FileEntry, RemoteEntry, SyncPlan};
use crate::error::{SyncError, SyncResult};

/// Outcome of the security lock check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SecurityCheck {
    /// Remote path contains the project's short name
    Passed { project: String },
    /// Lock disabled by `"securityLock": false`; callers must warn
    Bypassed,
}

/// Builds the final plan from both candidate lists.
pub struct PlanReconciler;

impl PlanReconciler {
    /// Drop every entry lying strictly below a directory that is itself
    /// being deleted. Order of the survivors is preserved.
    pub fn merge_delete(deletions: Vec<RemoteEntry>) -> Vec<RemoteEntry> {
        let dirs: HashSet<String> = deletions
            .iter()
            .filter(|e| e.is_dir)
            .map(|e| e.path.trim_end_matches('/').to_string())
            .collect();

        if dirs.is_empty() {
            return deletions;
        }

        deletions
            .into_iter()
            .filter(|e| !has_deleted_ancestor(&e.path, &dirs))
            .collect()
    }

    /// Final plan: deletion candidates that an upload will overwrite in place
    /// (same path, same kind) are dropped, then the rest is collapsed.
    pub fn reconcile(uploads: Vec<FileEntry>, deletions: Vec<RemoteEntry>) -> SyncPlan {
        let planned: HashMap<&str, bool> = uploads
            .iter()
            .map(|e| (e.remote_path(), e.is_dir()))
            .collect();

        let deletions: Vec<RemoteEntry> = deletions
            .into_iter()
            .filter(|d| planned.get(d.path.as_str()) != Some(&d.is_dir))
            .collect();

        SyncPlan::new(uploads, Self::merge_delete(deletions))
    }

    /// Fail closed unless `remote_path` contains the project's short name.
    pub fn validate_security(
        remote_path: &str,
        security_lock: bool,
        project_name: Option<&str>,
        project_root: &Path,
    ) -> SyncResult<SecurityCheck> {
        if !security_lock {
            tracing::warn!(remote_path, "security lock disabled");
            return Ok(SecurityCheck::Bypassed);
        }

        let project = project_name
            .map(project_short_name)
            .filter(|n| !n.is_empty())
            .ok_or_else(|| SyncError::ProjectNameUnknown {
                root: project_root.to_path_buf(),
            })?;

        if !remote_path.contains(project) {
            return Err(SyncError::SecurityLock {
                remote_path: remote_path.to_string(),
                project: project.to_string(),
            });
        }

        Ok(SecurityCheck::Passed {
            project: project.to_string(),
        })
    }
}

/// `@scope/name` -> `name`; unscoped names are returned unchanged.
pub fn project_short_name(name: &str) -> &str {
    let name = name.trim();
    match name.strip_prefix('@').and_then(|rest| rest.split_once('/')) {
        Some((_, short)) => short,
        None => name,
    }
}

fn has_deleted_ancestor(path: &str, dirs: &HashSet<String>) -> bool {
    let path = path.trim_end_matches('/');
    path.match_indices('/').any(|(i, _)| {
        let ancestor = if i == 0 { "/" } else { &path[..i] };
        ancestor != path && dirs.contains(ancestor)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn root() -> PathBuf {
        PathBuf::from("/work/site")
    }

    #[test]
    fn merge_delete_elides_children_of_deleted_dirs() {
        let merged = PlanReconciler::merge_delete(vec![
            RemoteEntry::directory("/srv/app/old"),
            RemoteEntry::file("/srv/app/old/x.txt"),
            RemoteEntry::directory("/srv/app/old/nested"),
            RemoteEntry::file("/srv/app/old/nested/y.txt"),
            RemoteEntry::file("/srv/app/older.txt"),
        ]);
        assert_eq!(
            merged,
            vec![
                RemoteEntry::directory("/srv/app/old"),
                RemoteEntry::file("/srv/app/older.txt"),
            ]
        );
    }

    #[test]
    fn merge_delete_keeps_files_below_surviving_dirs() {
        let merged = PlanReconciler::merge_delete(vec![
            RemoteEntry::file("/srv/app/sub/a.txt"),
            RemoteEntry::file("/srv/app/sub/b.txt"),
        ]);
        assert_eq!(merged.len(), 2);
    }

    #[test]
    fn merge_delete_is_idempotent() {
        let input = vec![
            RemoteEntry::directory("/r/a"),
            RemoteEntry::file("/r/a/1"),
            RemoteEntry::file("/r/b"),
        ];
        let once = PlanReconciler::merge_delete(input);
        let twice = PlanReconciler::merge_delete(once.clone());
        assert_eq!(once, twice);
    }

    #[test]
    fn reconcile_scenario_b_single_directory_delete() {
        let plan = PlanReconciler::reconcile(
            vec![],
            vec![
                RemoteEntry::directory("/srv/app/old"),
                RemoteEntry::file("/srv/app/old/x.txt"),
            ],
        );
        assert_eq!(plan.deletions, vec![RemoteEntry::directory("/srv/app/old")]);
    }

    #[test]
    fn reconcile_keeps_overwritten_nodes_out_of_deletions() {
        let plan = PlanReconciler::reconcile(
            vec![
                FileEntry::directory("/app/dist/sub", "/srv/app/sub"),
                FileEntry::file("/app/dist/sub/b.txt", "/srv/app/sub/b.txt"),
            ],
            vec![
                RemoteEntry::directory("/srv/app/sub"),
                RemoteEntry::file("/srv/app/sub/b.txt"),
                RemoteEntry::file("/srv/app/sub/stale.txt"),
            ],
        );
        assert_eq!(plan.deletions, vec![RemoteEntry::file("/srv/app/sub/stale.txt")]);
        assert_eq!(plan.uploads.len(), 2);
    }

    #[test]
    fn reconcile_deletes_node_whose_kind_changes() {
        let plan = PlanReconciler::reconcile(
            vec![FileEntry::directory("/app/dist/x", "/srv/app/x")],
            vec![RemoteEntry::file("/srv/app/x")],
        );
        assert_eq!(plan.deletions, vec![RemoteEntry::file("/srv/app/x")]);
    }

    #[test]
    fn short_name_strips_scope() {
        assert_eq!(project_short_name("@scope/foo"), "foo");
        assert_eq!(project_short_name("deploy-site"), "deploy-site");
        assert_eq!(project_short_name("@weird"), "@weird");
    }

    #[test]
    fn security_lock_passes_when_name_contained() {
        let check = PlanReconciler::validate_security(
            "/var/www/foo-staging",
            true,
            Some("@scope/foo"),
            &root(),
        )
        .unwrap();
        assert_eq!(
            check,
            SecurityCheck::Passed {
                project: "foo".to_string()
            }
        );
    }

    #[test]
    fn security_lock_rejects_unrelated_path() {
        let err = PlanReconciler::validate_security(
            "/var/www/other",
            true,
            Some("deploy-site"),
            &root(),
        )
        .unwrap_err();
        assert!(matches!(err, SyncError::SecurityLock { .. }));
    }

    #[test]
    fn security_lock_fails_closed_without_project_name() {
        let err = PlanReconciler::validate_security("/var/www/x", true, None, &root()).unwrap_err();
        assert!(matches!(err, SyncError::ProjectNameUnknown { .. }));
    }

    #[test]
    fn disabled_lock_is_bypassed() {
        let check =
            PlanReconciler::validate_security("/var/www/other", false, Some("deploy-site"), &root())
                .unwrap();
        assert_eq!(check, SecurityCheck::Bypassed);
    }
}
