//! Error types for cairn operations.
//!
//! This module defines [`CairnError`], the primary error type used throughout
//! the application, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Use `CairnError` for domain-specific errors that need distinct handling
//! - Use `anyhow::Error` (via `CairnError::Other`) for unexpected errors
//! - All errors should provide actionable messages for users
//!
//! An operator interrupt during the dev-server wait is NOT an error; it is
//! modeled as [`LaunchOutcome::Interrupted`](crate::server::LaunchOutcome)
//! and maps to a zero exit code.

use thiserror::Error;

/// Core error type for cairn operations.
#[derive(Debug, Error)]
pub enum CairnError {
    /// A required tool is not on PATH or failed its version query.
    #[error("{tool} is not installed or not on PATH. {hint}")]
    ToolMissing { tool: String, hint: String },

    /// The dependency install command exited non-zero.
    #[error("Failed to install dependencies with {manager} (exit code {code:?})")]
    InstallFailed { manager: String, code: Option<i32> },

    /// The dev task could not be started at all.
    #[error("Failed to launch '{task}': {message}")]
    LaunchFailed { task: String, message: String },

    /// A child command could not be executed.
    #[error("Command failed with exit code {code:?}: {command}")]
    CommandFailed { command: String, code: Option<i32> },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for cairn operations.
pub type Result<T> = std::result::Result<T, CairnError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tool_missing_displays_tool_and_hint() {
        let err = CairnError::ToolMissing {
            tool: "Node.js".into(),
            hint: "Install Node.js from https://nodejs.org/".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("Node.js"));
        assert!(msg.contains("https://nodejs.org/"));
    }

    #[test]
    fn install_failed_displays_manager_and_code() {
        let err = CairnError::InstallFailed {
            manager: "npm".into(),
            code: Some(1),
        };
        let msg = err.to_string();
        assert!(msg.contains("npm"));
        assert!(msg.contains("1"));
    }

    #[test]
    fn launch_failed_displays_task_and_message() {
        let err = CairnError::LaunchFailed {
            task: "dev".into(),
            message: "No such file or directory".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("dev"));
        assert!(msg.contains("No such file or directory"));
    }

    #[test]
    fn command_failed_displays_command_and_code() {
        let err = CairnError::CommandFailed {
            command: "npm install".into(),
            code: None,
        };
        let msg = err.to_string();
        assert!(msg.contains("npm install"));
        assert!(msg.contains("None"));
    }

    #[test]
    fn io_error_converts_from_std() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file missing");
        let err: CairnError = io_err.into();
        assert!(matches!(err, CairnError::Io(_)));
    }

    #[test]
    fn anyhow_error_converts_transparently() {
        let err: CairnError = anyhow::anyhow!("unexpected").into();
        assert!(err.to_string().contains("unexpected"));
    }

    #[test]
    fn result_type_alias_works() {
        fn returns_error() -> Result<()> {
            Err(CairnError::ToolMissing {
                tool: "node".into(),
                hint: "test".into(),
            })
        }
        assert!(returns_error().is_err());
    }
}
