//! Pattern set value object
//!
//! Normalizes user globs (ignore / clean patterns) against a base path and
//! answers "does this path match". Matching is delegated to the `ignore`
//! crate's gitignore engine with every pattern anchored to the base.

use ignore::gitignore::{Gitignore, GitignoreBuilder};
use std::path::Path;

/// A pattern the glob engine refused to compile.
///
/// Rejected patterns never match anything.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RejectedPattern {
    pub pattern: String,
    pub message: String,
}

/// Glob expressions anchored to a base path.
///
/// Each input pattern `p` expands to `base/p` and `base/p/**/*`, so naming a
/// directory also covers everything beneath it.
#[derive(Debug, Clone)]
pub struct PatternSet {
    matcher: Gitignore,
    expressions: Vec<String>,
    rejected: Vec<RejectedPattern>,
}

impl Default for PatternSet {
    fn default() -> Self {
        Self::empty()
    }
}

impl PatternSet {
    /// A set that matches nothing.
    pub fn empty() -> Self {
        Self {
            matcher: Gitignore::empty(),
            expressions: Vec::new(),
            rejected: Vec::new(),
        }
    }

    /// Build a set from raw patterns relative to `base`.
    ///
    /// Leading `./` and `/` are stripped from each pattern. Malformed globs are
    /// recorded in [`PatternSet::rejected`] instead of failing.
    pub fn normalize<S: AsRef<str>>(patterns: &[S], base: &str) -> Self {
        let base = trim_base(base);
        let mut builder = GitignoreBuilder::new(if base.is_empty() { "/" } else { base });
        let mut expressions = Vec::new();
        let mut rejected = Vec::new();

        for raw in patterns {
            let raw = raw.as_ref();
            let pattern = strip_pattern(raw);
            if pattern.is_empty() {
                continue;
            }

            let own = format!("/{}", pattern);
            let subtree = format!("/{}/**/*", pattern);

            // Both forms share the pattern's syntax: if one fails both do.
            let added = builder
                .add_line(None, &own)
                .and_then(|b| b.add_line(None, &subtree));
            if let Err(e) = added {
                tracing::warn!(pattern = raw, error = %e, "ignoring malformed glob pattern");
                rejected.push(RejectedPattern {
                    pattern: raw.to_string(),
                    message: e.to_string(),
                });
                continue;
            }

            expressions.push(format!("{}{}", base, own));
            expressions.push(format!("{}{}", base, subtree));
        }

        let matcher = match builder.build() {
            Ok(matcher) => matcher,
            Err(e) => {
                tracing::warn!(error = %e, "failed to build pattern matcher; nothing will match");
                rejected.extend(patterns.iter().map(|p| RejectedPattern {
                    pattern: p.as_ref().to_string(),
                    message: e.to_string(),
                }));
                expressions.clear();
                Gitignore::empty()
            }
        };

        Self {
            matcher,
            expressions,
            rejected,
        }
    }

    /// True if any expression in the set matches `path`.
    pub fn matches(&self, path: impl AsRef<Path>) -> bool {
        if self.expressions.is_empty() {
            return false;
        }
        // Trailing slashes are stripped from patterns, so directory-only
        // globs never occur and the kind of `path` is irrelevant.
        self.matcher.matched(path.as_ref(), false).is_ignore()
    }

    /// The expanded, base-anchored expressions (for previews and logs).
    pub fn expressions(&self) -> &[String] {
        &self.expressions
    }

    pub fn rejected(&self) -> &[RejectedPattern] {
        &self.rejected
    }

    pub fn is_empty(&self) -> bool {
        self.expressions.is_empty()
    }
}

fn trim_base(base: &str) -> &str {
    let trimmed = base.trim_end_matches('/');
    if trimmed.is_empty() && base.starts_with('/') {
        ""
    } else {
        trimmed
    }
}

fn strip_pattern(raw: &str) -> &str {
    let mut p = raw.trim();
    loop {
        if let Some(rest) = p.strip_prefix("./") {
            p = rest;
        } else if let Some(rest) = p.strip_prefix('/') {
            p = rest;
        } else {
            break;
        }
    }
    p.trim_end_matches('/')
}
