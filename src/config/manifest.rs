//! Project manifest discovery
//!
//! The project root must carry a `package.json` or a `Cargo.toml`. Its
//! declared name feeds the security lock.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{SyncError, SyncResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ManifestKind {
    PackageJson,
    CargoToml,
}

impl ManifestKind {
    pub fn file_name(self) -> &'static str {
        match self {
            Self::PackageJson => "package.json",
            Self::CargoToml => "Cargo.toml",
        }
    }
}

/// A manifest found in the project root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectManifest {
    pub kind: ManifestKind,
    pub path: PathBuf,
    /// Declared project name, if any
    pub name: Option<String>,
}

impl ProjectManifest {
    /// Locate the manifest in `root`; `package.json` wins over `Cargo.toml`.
    pub fn discover(root: &Path) -> SyncResult<Self> {
        for kind in [ManifestKind::PackageJson, ManifestKind::CargoToml] {
            let path = root.join(kind.file_name());
            if !path.is_file() {
                continue;
            }
            let content = fs::read_to_string(&path)?;
            let name = match kind {
                ManifestKind::PackageJson => name_from_package_json(&content),
                ManifestKind::CargoToml => name_from_cargo_toml(&content),
            };
            if name.is_none() {
                tracing::debug!(manifest = %path.display(), "manifest declares no name");
            }
            return Ok(Self { kind, path, name });
        }

        Err(SyncError::NotProjectRoot {
            root: root.to_path_buf(),
        })
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }
}

fn name_from_package_json(content: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(content).ok()?;
    value
        .get("name")?
        .as_str()
        .map(str::trim)
        .filter(|n| !n.is_empty())
        .map(str::to_string)
}

fn name_from_cargo_toml(content: &str) -> Option<String> {
    let value: toml::Table = toml::from_str(content).ok()?;
    value
        .get("package")?
        .get("name")?
        .as_str()
        .map(str::trim)
        .filter(|n| !n.is_empty())
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn discover_prefers_package_json() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("package.json"), r#"{"name":"@acme/site"}"#).unwrap();
        fs::write(
            dir.path().join("Cargo.toml"),
            "[package]\nname = \"other\"\n",
        )
        .unwrap();

        let manifest = ProjectManifest::discover(dir.path()).unwrap();
        assert_eq!(manifest.kind, ManifestKind::PackageJson);
        assert_eq!(manifest.name(), Some("@acme/site"));
    }

    #[test]
    fn discover_reads_cargo_package_name() {
        let dir = tempdir().unwrap();
        fs::write(
            dir.path().join("Cargo.toml"),
            "[package]\nname = \"deploy-site\"\nversion = \"0.1.0\"\n",
        )
        .unwrap();

        let manifest = ProjectManifest::discover(dir.path()).unwrap();
        assert_eq!(manifest.kind, ManifestKind::CargoToml);
        assert_eq!(manifest.name(), Some("deploy-site"));
    }

    #[test]
    fn discover_without_name() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("package.json"), "{}").unwrap();

        let manifest = ProjectManifest::discover(dir.path()).unwrap();
        assert_eq!(manifest.name(), None);
    }

    #[test]
    fn discover_fails_outside_project_root() {
        let dir = tempdir().unwrap();
        let err = ProjectManifest::discover(dir.path()).unwrap_err();
        assert!(matches!(err, SyncError::NotProjectRoot { .. }));
    }
}
