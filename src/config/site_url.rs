//! Public URL derivation for `show-url`

use std::collections::BTreeMap;

use crate::domain::entities::is_strict_descendant;

/// Map a remote path to a public URL using the `urls` prefix table.
///
/// The longest matching prefix wins. The remainder of the path is appended
/// to its base URL.
pub fn derive_url(urls: &BTreeMap<String, String>, remote_path: &str) -> Option<String> {
    let (prefix, base) = urls
        .iter()
        .map(|(prefix, base)| (prefix.trim_end_matches('/'), base))
        .filter(|(prefix, _)| {
            prefix.is_empty() || *prefix == remote_path || is_strict_descendant(remote_path, prefix)
        })
        .max_by_key(|(prefix, _)| prefix.len())?;

    let rest = remote_path[prefix.len()..].trim_start_matches('/');
    let base = base.trim_end_matches('/');
    if rest.is_empty() {
        Some(format!("{}/", base))
    } else {
        Some(format!("{}/{}", base, rest))
    }
}
