//! Property tests for deletion-set collapsing.

use std::collections::HashSet;

use proptest::prelude::*;

use ssh_sftp::domain::entities::{is_strict_descendant, RemoteEntry};
use ssh_sftp::domain::services::PlanReconciler;

/// Remote entries under `/srv/app`, built from short component paths.
fn entries() -> impl Strategy<Value = Vec<RemoteEntry>> {
    let component = prop_oneof![Just("a"), Just("b"), Just("c"), Just("ab")];
    let path = proptest::collection::vec(component, 1..=4)
        .prop_map(|parts| format!("/srv/app/{}", parts.join("/")));
    proptest::collection::vec((path, any::<bool>()), 0..=24).prop_map(|items| {
        // A remote listing never reports the same path twice.
        let mut seen = HashSet::new();
        items
            .into_iter()
            .filter(|(path, _)| seen.insert(path.clone()))
            .map(|(path, is_dir)| RemoteEntry { path, is_dir })
            .collect()
    })
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Collapsing twice changes nothing.
    #[test]
    fn property_merge_delete_is_idempotent(input in entries()) {
        let once = PlanReconciler::merge_delete(input);
        let twice = PlanReconciler::merge_delete(once.clone());
        prop_assert_eq!(once, twice);
    }

    /// PROPERTY: No survivor lies below another surviving directory.
    #[test]
    fn property_merge_delete_leaves_no_nested_entries(input in entries()) {
        let merged = PlanReconciler::merge_delete(input);
        for dir in merged.iter().filter(|e| e.is_dir) {
            for other in &merged {
                prop_assert!(
                    !is_strict_descendant(&other.path, &dir.path),
                    "{} survived below {}", other.path, dir.path
                );
            }
        }
    }

    /// PROPERTY: Every input path is still removed, directly or via an ancestor.
    #[test]
    fn property_merge_delete_covers_every_input(input in entries()) {
        let merged = PlanReconciler::merge_delete(input.clone());
        for entry in &input {
            let covered = merged.iter().any(|m| {
                m.path == entry.path || (m.is_dir && is_strict_descendant(&entry.path, &m.path))
            });
            prop_assert!(covered, "{} dropped without a deleted ancestor", entry.path);
        }
    }

    /// PROPERTY: Survivors keep their relative order.
    #[test]
    fn property_merge_delete_preserves_order(input in entries()) {
        let merged = PlanReconciler::merge_delete(input.clone());
        let positions = merged
            .iter()
            .map(|m| input.iter().position(|e| e == m).unwrap());
        let mut last = None;
        for pos in positions {
            if let Some(prev) = last {
                prop_assert!(pos >= prev);
            }
            last = Some(pos);
        }
    }
}
