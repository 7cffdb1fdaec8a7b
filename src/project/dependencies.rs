//! Dependency state and installation.

use std::fmt;
use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::shell::{self, CommandOptions, CommandResult};
use crate::tools::{ToolSpec, BUN, NPM, PNPM, YARN};

/// The package manager used to install dependencies and run tasks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PackageManager {
    Npm,
    Yarn,
    Pnpm,
    Bun,
}

impl PackageManager {
    /// Binary name on PATH.
    pub fn binary_name(&self) -> &'static str {
        match self {
            Self::Npm => "npm",
            Self::Yarn => "yarn",
            Self::Pnpm => "pnpm",
            Self::Bun => "bun",
        }
    }

    /// Tool spec for presence checking.
    pub fn tool_spec(&self) -> &'static ToolSpec {
        match self {
            Self::Npm => &NPM,
            Self::Yarn => &YARN,
            Self::Pnpm => &PNPM,
            Self::Bun => &BUN,
        }
    }

    /// Parse a user-supplied manager name.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_lowercase().as_str() {
            "npm" => Some(Self::Npm),
            "yarn" => Some(Self::Yarn),
            "pnpm" => Some(Self::Pnpm),
            "bun" => Some(Self::Bun),
            _ => None,
        }
    }

    /// Detect the package manager from the project's lockfile.
    ///
    /// Defaults to npm when no lockfile identifies another manager.
    pub fn detect(project_root: &Path) -> Self {
        if project_root.join("yarn.lock").is_file() {
            Self::Yarn
        } else if project_root.join("pnpm-lock.yaml").is_file() {
            Self::Pnpm
        } else if project_root.join("bun.lockb").is_file() || project_root.join("bun.lock").is_file()
        {
            Self::Bun
        } else {
            Self::Npm
        }
    }
}

impl fmt::Display for PackageManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.binary_name())
    }
}

/// Whether the project's dependency directory exists.
///
/// Pure predicate, no side effects.
pub fn dependencies_present(project_root: &Path) -> bool {
    project_root.join("node_modules").is_dir()
}

/// Run the manager's install command as a blocking child with captured
/// output.
///
/// Returns `Err` only when the command cannot be executed at all; a
/// non-zero install exits as an unsuccessful [`CommandResult`] so the
/// caller can surface the captured stderr.
pub fn install(manager_binary: &Path, project_root: &Path) -> Result<CommandResult> {
    let options = CommandOptions {
        cwd: Some(PathBuf::from(project_root)),
        capture_stdout: true,
        capture_stderr: true,
        ..Default::default()
    };
    tracing::debug!(
        "installing dependencies via {} in {}",
        manager_binary.display(),
        project_root.display()
    );
    shell::execute(manager_binary, &["install"], &options)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn detect_defaults_to_npm() {
        let temp = TempDir::new().unwrap();
        assert_eq!(PackageManager::detect(temp.path()), PackageManager::Npm);
    }

    #[test]
    fn detect_yarn_from_lockfile() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("yarn.lock"), "").unwrap();
        assert_eq!(PackageManager::detect(temp.path()), PackageManager::Yarn);
    }

    #[test]
    fn detect_pnpm_from_lockfile() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("pnpm-lock.yaml"), "").unwrap();
        assert_eq!(PackageManager::detect(temp.path()), PackageManager::Pnpm);
    }

    #[test]
    fn detect_bun_from_either_lockfile() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("bun.lockb"), "").unwrap();
        assert_eq!(PackageManager::detect(temp.path()), PackageManager::Bun);

        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("bun.lock"), "").unwrap();
        assert_eq!(PackageManager::detect(temp.path()), PackageManager::Bun);
    }

    #[test]
    fn detect_prefers_yarn_over_bun() {
        // Stale second lockfile: first match in detection order wins
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("yarn.lock"), "").unwrap();
        fs::write(temp.path().join("bun.lockb"), "").unwrap();
        assert_eq!(PackageManager::detect(temp.path()), PackageManager::Yarn);
    }

    #[test]
    fn from_name_parses_known_managers() {
        assert_eq!(PackageManager::from_name("npm"), Some(PackageManager::Npm));
        assert_eq!(
            PackageManager::from_name("Yarn"),
            Some(PackageManager::Yarn)
        );
        assert_eq!(
            PackageManager::from_name(" pnpm "),
            Some(PackageManager::Pnpm)
        );
        assert_eq!(PackageManager::from_name("bun"), Some(PackageManager::Bun));
        assert_eq!(PackageManager::from_name("cargo"), None);
    }

    #[test]
    fn display_matches_binary_name() {
        assert_eq!(PackageManager::Npm.to_string(), "npm");
        assert_eq!(PackageManager::Bun.to_string(), "bun");
    }

    #[test]
    fn dependencies_present_requires_directory() {
        let temp = TempDir::new().unwrap();
        assert!(!dependencies_present(temp.path()));

        // A plain file named node_modules does not count
        fs::write(temp.path().join("node_modules"), "").unwrap();
        assert!(!dependencies_present(temp.path()));
    }

    #[test]
    fn dependencies_present_when_directory_exists() {
        let temp = TempDir::new().unwrap();
        fs::create_dir(temp.path().join("node_modules")).unwrap();
        assert!(dependencies_present(temp.path()));
    }

    #[cfg(unix)]
    #[test]
    fn install_reports_failure_result() {
        use std::os::unix::fs::PermissionsExt;

        let temp = TempDir::new().unwrap();
        let fake_pm = temp.path().join("fakepm");
        fs::write(&fake_pm, "#!/bin/sh\necho 'network down' >&2\nexit 1\n").unwrap();
        fs::set_permissions(&fake_pm, fs::Permissions::from_mode(0o755)).unwrap();

        let result = install(&fake_pm, temp.path()).unwrap();
        assert!(!result.success);
        assert_eq!(result.exit_code, Some(1));
        assert!(result.stderr.contains("network down"));
    }

    #[cfg(unix)]
    #[test]
    fn install_passes_install_argument() {
        use std::os::unix::fs::PermissionsExt;

        let temp = TempDir::new().unwrap();
        let fake_pm = temp.path().join("fakepm");
        fs::write(&fake_pm, "#!/bin/sh\necho \"args:$1\"\n").unwrap();
        fs::set_permissions(&fake_pm, fs::Permissions::from_mode(0o755)).unwrap();

        let result = install(&fake_pm, temp.path()).unwrap();
        assert!(result.success);
        assert!(result.stdout.contains("args:install"));
    }
}
