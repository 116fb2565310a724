//! RemoteEntry entity - one node discovered by a remote tree walk

/// A remote node. Paths are absolute-or-rooted strings using `/`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RemoteEntry {
    pub path: String,
    pub is_dir: bool,
}

impl RemoteEntry {
    pub fn file(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            is_dir: false,
        }
    }

    pub fn directory(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            is_dir: true,
        }
    }
}

/// True when `path` lies strictly below `ancestor` (equal paths are not descendants).
///
/// Compares whole components, so `/srv/app2` is not below `/srv/app`.
pub fn is_strict_descendant(path: &str, ancestor: &str) -> bool {
    let ancestor = ancestor.trim_end_matches('/');
    if ancestor.is_empty() {
        // The filesystem root: everything else is below it.
        return path.starts_with('/') && path.len() > 1;
    }
    path.len() > ancestor.len() + 1
        && path.starts_with(ancestor)
        && path.as_bytes()[ancestor.len()] == b'/'
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strict_descendant_requires_separator() {
        assert!(is_strict_descendant("/srv/app/old/x.txt", "/srv/app/old"));
        assert!(is_strict_descendant("/srv/app/old/x.txt", "/srv/app/old/"));
        assert!(!is_strict_descendant("/srv/app/old", "/srv/app/old"));
        assert!(!is_strict_descendant("/srv/app/older", "/srv/app/old"));
        assert!(!is_strict_descendant("/srv/app/old/", "/srv/app/old"));
    }

    #[test]
    fn everything_is_below_root() {
        assert!(is_strict_descendant("/etc", "/"));
        assert!(!is_strict_descendant("/", "/"));
    }
}
