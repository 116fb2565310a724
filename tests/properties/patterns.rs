//! Property tests for ignore / clean pattern matching.

use proptest::prelude::*;

use ssh_sftp::domain::value_objects::PatternSet;

fn name() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[a-z][a-z0-9_]{0,7}").unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 96,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: A named entry and everything beneath it match.
    #[test]
    fn property_pattern_covers_subtree(
        dir in name(),
        children in proptest::collection::vec(name(), 0..=3),
    ) {
        let set = PatternSet::normalize(&[dir.as_str()], "/srv/app");
        let top = format!("/srv/app/{}", dir);
        prop_assert!(set.matches(top));

        let mut path = format!("/srv/app/{}", dir);
        for child in &children {
            path.push('/');
            path.push_str(child);
            prop_assert!(set.matches(&path), "{} should match", path);
        }
    }

    /// PROPERTY: A pattern never matches a sibling with a different name.
    #[test]
    fn property_pattern_excludes_siblings(a in name(), b in name()) {
        prop_assume!(a != b);
        let set = PatternSet::normalize(&[a.as_str()], "/srv/app");
        let sibling = format!("/srv/app/{}", b);
        prop_assert!(!set.matches(&sibling));
    }

    /// PROPERTY: Leading `./` and `/` do not change what matches.
    #[test]
    fn property_leading_prefixes_are_stripped(a in name(), child in name()) {
        let plain = PatternSet::normalize(&[a.as_str()], "/srv/app");
        let dotted = PatternSet::normalize(&[format!("./{}", a)], "/srv/app");
        let rooted = PatternSet::normalize(&[format!("/{}", a)], "/srv/app");
        let path = format!("/srv/app/{}/{}", a, child);
        prop_assert_eq!(plain.matches(&path), dotted.matches(&path));
        prop_assert_eq!(plain.matches(&path), rooted.matches(&path));
    }

    /// PROPERTY: Arbitrary pattern text never panics.
    #[test]
    fn property_normalize_never_panics(raw in "(?s).{0,64}", path in "(?s).{0,64}") {
        let set = PatternSet::normalize(&[raw.as_str()], "/srv/app");
        let _ = set.matches(path);
    }
}
