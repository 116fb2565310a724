//! Property tests for local tree enumeration.

use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

use proptest::prelude::*;
use tempfile::TempDir;

use ssh_sftp::domain::services::LocalEnumerator;
use ssh_sftp::domain::value_objects::PatternSet;

/// Relative file paths: up to two directory levels, then a `.txt` leaf.
///
/// Directories start with `d` and files end in `.txt`, so no generated name is
/// both a file and a directory.
fn tree_paths(name_chars: &'static str) -> impl Strategy<Value = Vec<Vec<String>>> {
    let dir = proptest::string::string_regex(&format!("d[{}]{{0,4}}", name_chars)).unwrap();
    let leaf = proptest::string::string_regex(&format!("f[{}]{{0,4}}\\.txt", name_chars)).unwrap();
    let path = (proptest::collection::vec(dir, 0..=2), leaf).prop_map(|(mut dirs, leaf)| {
        dirs.push(leaf);
        dirs
    });
    proptest::collection::vec(path, 1..=8)
}

fn build(paths: &[Vec<String>]) -> TempDir {
    let root = tempfile::tempdir().unwrap();
    for parts in paths {
        let file = parts.iter().fold(root.path().to_path_buf(), |p, c| p.join(c));
        fs::create_dir_all(file.parent().unwrap()).unwrap();
        fs::write(&file, parts.join("/")).unwrap();
    }
    root
}

/// Every node of the tree: each file plus all of its ancestor directories.
fn nodes(root: &Path, paths: &[Vec<String>]) -> BTreeSet<PathBuf> {
    let mut all = BTreeSet::new();
    for parts in paths {
        let mut current = root.to_path_buf();
        for part in parts {
            current = current.join(part);
            all.insert(current.clone());
        }
    }
    all
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 48,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: A node is enumerated exactly when neither it nor any ancestor
    /// below the root matches the ignore set.
    #[test]
    fn property_ignored_nodes_are_excluded(
        paths in tree_paths("a-c"),
        picks in proptest::collection::vec(any::<prop::sample::Index>(), 0..=3),
    ) {
        let root = build(&paths);
        let all = nodes(root.path(), &paths);

        let candidates: Vec<String> = all
            .iter()
            .map(|p| p.strip_prefix(root.path()).unwrap().to_string_lossy().into_owned())
            .collect();
        let patterns: Vec<String> = picks
            .iter()
            .map(|i| candidates[i.index(candidates.len())].clone())
            .collect();
        let base = root.path().to_string_lossy().into_owned();
        let ignore = PatternSet::normalize(&patterns, &base);

        let entries = LocalEnumerator::enumerate(root.path(), "/srv/app", &ignore).unwrap();
        let listed: BTreeSet<PathBuf> =
            entries.iter().map(|e| e.local_path().to_path_buf()).collect();

        let expected: BTreeSet<PathBuf> = all
            .iter()
            .filter(|node| {
                node.ancestors()
                    .take_while(|a| *a != root.path())
                    .all(|a| !ignore.matches(a))
            })
            .cloned()
            .collect();

        prop_assert_eq!(listed, expected);
        for entry in &entries {
            prop_assert!(!ignore.matches(entry.local_path()));
        }
    }

    /// PROPERTY: Each remote path is the local path with the local root
    /// replaced by the remote root.
    #[test]
    fn property_remote_path_is_prefix_substitution(
        paths in tree_paths("a-z0-9 #!_ü-"),
        remote in proptest::string::string_regex("(/[a-z0-9_.-]{1,6}){1,3}").unwrap(),
        trailing in any::<bool>(),
    ) {
        let root = build(&paths);
        let remote_root = if trailing { format!("{}/", remote) } else { remote.clone() };

        let entries =
            LocalEnumerator::enumerate(root.path(), &remote_root, &PatternSet::empty()).unwrap();

        prop_assert_eq!(entries.len(), nodes(root.path(), &paths).len());
        for entry in &entries {
            let rel = entry.local_path().strip_prefix(root.path()).unwrap();
            let rel: Vec<String> = rel
                .components()
                .map(|c| c.as_os_str().to_string_lossy().into_owned())
                .collect();
            prop_assert_eq!(entry.remote_path(), format!("{}/{}", remote, rel.join("/")));
            prop_assert_eq!(entry.is_dir(), entry.local_path().is_dir());
        }
    }
}
