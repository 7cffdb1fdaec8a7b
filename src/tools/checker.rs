//! Presence checks for required tools.
//!
//! A check is a one-shot gate: resolve the binary on PATH, run it with
//! `--version` capturing output, and require a zero exit. Any failure along
//! the way yields [`ToolStatus::Missing`] with the tool's install hint.

use std::path::PathBuf;
use std::sync::OnceLock;

use regex::Regex;

use crate::shell::{self, CommandOptions};
use crate::tools::probe;
use crate::tools::status::ToolStatus;

/// A tool cairn knows how to check for.
#[derive(Debug, Clone, Copy)]
pub struct ToolSpec {
    /// Binary name looked up on PATH.
    pub name: &'static str,
    /// Display label for status lines.
    pub label: &'static str,
    /// Remediation hint shown when the tool is missing.
    pub install_hint: &'static str,
}

/// The JavaScript runtime.
pub const NODE: ToolSpec = ToolSpec {
    name: "node",
    label: "Node.js",
    install_hint: "Install Node.js from https://nodejs.org/",
};

pub const NPM: ToolSpec = ToolSpec {
    name: "npm",
    label: "npm",
    install_hint: "npm ships with Node.js. Try reinstalling Node.js from https://nodejs.org/",
};

pub const YARN: ToolSpec = ToolSpec {
    name: "yarn",
    label: "Yarn",
    install_hint: "Install Yarn from https://yarnpkg.com/getting-started/install",
};

pub const PNPM: ToolSpec = ToolSpec {
    name: "pnpm",
    label: "pnpm",
    install_hint: "Install pnpm from https://pnpm.io/installation",
};

pub const BUN: ToolSpec = ToolSpec {
    name: "bun",
    label: "Bun",
    install_hint: "Install Bun from https://bun.sh/",
};

/// Extract a semver-looking version from version-query output.
///
/// Handles the common shapes: `v22.11.0` (node), `10.9.0` (npm),
/// `1.2.3-beta.1` prereleases.
pub fn extract_version(output: &str) -> Option<String> {
    static VERSION_RE: OnceLock<Regex> = OnceLock::new();
    let re = VERSION_RE.get_or_init(|| {
        Regex::new(r"\d+\.\d+\.\d+(?:-[0-9A-Za-z.-]+)?").expect("version pattern is valid")
    });
    re.find(output).map(|m| m.as_str().to_string())
}

/// Checks whether tools are present on the system.
pub struct ToolChecker {
    path_entries: Vec<PathBuf>,
}

impl ToolChecker {
    /// Create a checker using the process environment's PATH.
    pub fn new() -> Self {
        Self {
            path_entries: probe::parse_system_path(),
        }
    }

    /// Create a checker with an explicit PATH (for testing).
    pub fn with_path(path_entries: Vec<PathBuf>) -> Self {
        Self { path_entries }
    }

    /// Check a single tool: resolve, version-query, classify.
    pub fn check(&self, spec: &ToolSpec) -> ToolStatus {
        let Some(path) = probe::resolve_tool(spec.name, &self.path_entries) else {
            tracing::debug!("{} not found on PATH", spec.name);
            return ToolStatus::Missing {
                hint: spec.install_hint.to_string(),
            };
        };

        let options = CommandOptions {
            capture_stdout: true,
            capture_stderr: true,
            ..Default::default()
        };

        match shell::execute(&path, &["--version"], &options) {
            Ok(result) if result.success => {
                let version = extract_version(&result.stdout);
                tracing::debug!(
                    "{} resolved to {} ({})",
                    spec.name,
                    path.display(),
                    version.as_deref().unwrap_or("version unknown")
                );
                ToolStatus::Found { path, version }
            }
            Ok(result) => {
                tracing::debug!(
                    "{} version query exited with {:?}",
                    spec.name,
                    result.exit_code
                );
                ToolStatus::Missing {
                    hint: spec.install_hint.to_string(),
                }
            }
            Err(e) => {
                tracing::debug!("{} version query failed to execute: {}", spec.name, e);
                ToolStatus::Missing {
                    hint: spec.install_hint.to_string(),
                }
            }
        }
    }
}

impl Default for ToolChecker {
    fn default() -> Self {
        Self::new()
    }
}
