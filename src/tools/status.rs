//! Tool status for presence gates.

use std::path::PathBuf;

/// The result of checking a single tool.
#[derive(Debug, Clone)]
pub enum ToolStatus {
    /// Binary resolved on PATH and the version query exited zero.
    Found {
        /// Resolved binary path.
        path: PathBuf,
        /// Version string extracted from the query output, if any.
        version: Option<String>,
    },

    /// Binary not resolvable, not executable, or version query failed.
    Missing {
        /// Human-readable remediation hint (install URL).
        hint: String,
    },
}

impl ToolStatus {
    /// Whether the tool is available.
    pub fn is_found(&self) -> bool {
        matches!(self, ToolStatus::Found { .. })
    }

    /// Extracted version, if the tool was found and reported one.
    pub fn version(&self) -> Option<&str> {
        match self {
            ToolStatus::Found { version, .. } => version.as_deref(),
            ToolStatus::Missing { .. } => None,
        }
    }
}
