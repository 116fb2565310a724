//! Clean (prune) selection value object

use super::PatternSet;

/// Which remote entries are candidates for deletion.
#[derive(Debug, Clone, Default)]
pub enum CleanPatterns {
    /// No pruning; the remote tree is never listed.
    #[default]
    None,
    /// Every entry under the remote root is a candidate.
    All,
    /// Only entries matching these remote-anchored patterns.
    Matching(PatternSet),
}

impl CleanPatterns {
    /// Build from raw `cleanRemoteFiles` patterns anchored at `remote_root`.
    ///
    /// An empty list means no pruning.
    pub fn from_patterns<S: AsRef<str>>(patterns: &[S], remote_root: &str) -> Self {
        if patterns.iter().all(|p| p.as_ref().trim().is_empty()) {
            return Self::None;
        }
        Self::Matching(PatternSet::normalize(patterns, remote_root))
    }

    pub fn is_enabled(&self) -> bool {
        !matches!(self, Self::None)
    }

    /// Should a discovered remote path be kept as a deletion candidate.
    pub fn selects(&self, path: &str) -> bool {
        match self {
            Self::None => false,
            Self::All => true,
            Self::Matching(set) => set.matches(path),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_pattern_list_disables_pruning() {
        let clean = CleanPatterns::from_patterns::<&str>(&[], "/srv/app");
        assert!(!clean.is_enabled());
        assert!(!clean.selects("/srv/app/old"));
    }

    #[test]
    fn all_selects_everything() {
        assert!(CleanPatterns::All.selects("/srv/app/anything/at/all"));
    }

    #[test]
    fn matching_uses_remote_anchored_patterns() {
        let clean = CleanPatterns::from_patterns(&["static"], "/srv/app");
        assert!(clean.is_enabled());
        assert!(clean.selects("/srv/app/static"));
        assert!(clean.selects("/srv/app/static/app.css"));
        assert!(!clean.selects("/srv/app/index.html"));
    }
}
