//! package.json inspection.
//!
//! The manifest is advisory only: cairn reads the `scripts` table to warn
//! when the requested dev task is not declared, but the package manager
//! remains the authority on what is runnable. A missing or malformed
//! manifest never gates the flow.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::Deserialize;

/// The subset of package.json cairn cares about.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PackageManifest {
    /// Project name, if declared.
    #[serde(default)]
    pub name: Option<String>,

    /// Declared scripts, keyed by task name.
    #[serde(default)]
    pub scripts: BTreeMap<String, String>,
}

impl PackageManifest {
    /// Load `package.json` from the project root.
    ///
    /// Returns `None` when the file is absent or unparseable.
    pub fn load(project_root: &Path) -> Option<Self> {
        let raw = fs::read_to_string(project_root.join("package.json")).ok()?;
        match serde_json::from_str(&raw) {
            Ok(manifest) => Some(manifest),
            Err(e) => {
                tracing::debug!("package.json unparseable: {}", e);
                None
            }
        }
    }

    /// Whether a script with the given name is declared.
    pub fn has_script(&self, name: &str) -> bool {
        self.scripts.contains_key(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn load_reads_scripts() {
        let temp = TempDir::new().unwrap();
        fs::write(
            temp.path().join("package.json"),
            r#"{"name": "demo", "scripts": {"dev": "wrangler pages dev public", "test": "vitest"}}"#,
        )
        .unwrap();

        let manifest = PackageManifest::load(temp.path()).unwrap();
        assert_eq!(manifest.name.as_deref(), Some("demo"));
        assert!(manifest.has_script("dev"));
        assert!(manifest.has_script("test"));
        assert!(!manifest.has_script("build"));
    }

    #[test]
    fn load_tolerates_missing_fields() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("package.json"), r#"{"private": true}"#).unwrap();

        let manifest = PackageManifest::load(temp.path()).unwrap();
        assert_eq!(manifest.name, None);
        assert!(!manifest.has_script("dev"));
    }

    #[test]
    fn load_returns_none_when_absent() {
        let temp = TempDir::new().unwrap();
        assert!(PackageManifest::load(temp.path()).is_none());
    }

    #[test]
    fn load_returns_none_on_invalid_json() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("package.json"), "{not json").unwrap();
        assert!(PackageManifest::load(temp.path()).is_none());
    }
}
