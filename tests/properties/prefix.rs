//! Property tests for remote path joining and URL prefix lookup.

use std::collections::BTreeMap;

use proptest::prelude::*;

use ssh_sftp::config::derive_url;
use ssh_sftp::domain::entities::is_strict_descendant;
use ssh_sftp::domain::ports::remote_file_store::join_remote;

fn components() -> impl Strategy<Value = Vec<String>> {
    proptest::collection::vec(
        proptest::string::string_regex("[a-z0-9][a-z0-9._-]{0,7}").unwrap(),
        1..=4,
    )
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 96,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Joining names onto a root stays strictly below it.
    #[test]
    fn property_join_stays_below_root(
        root in components(),
        rest in components(),
        trailing in any::<bool>(),
    ) {
        let mut root = format!("/{}", root.join("/"));
        if trailing {
            root.push('/');
        }
        let joined = rest.iter().fold(root.clone(), |dir, name| join_remote(&dir, name));
        prop_assert!(is_strict_descendant(&joined, &root));
        prop_assert!(!joined.contains("//"));
    }

    /// PROPERTY: The URL is the base plus the path remainder below the prefix.
    #[test]
    fn property_url_round_trips_remainder(prefix in components(), rest in components()) {
        let prefix = format!("/{}", prefix.join("/"));
        let remainder = rest.join("/");
        let mut urls = BTreeMap::new();
        urls.insert(prefix.clone(), "https://example.com/".to_string());

        let url = derive_url(&urls, &format!("{}/{}", prefix, remainder));
        prop_assert_eq!(url, Some(format!("https://example.com/{}", remainder)));
    }
}
