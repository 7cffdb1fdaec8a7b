//! The `check` command: report prerequisite status without side effects.
//!
//! Reporting form of the `up` gates. Missing tools fail the command;
//! missing dependencies are only a warning, since `up` installs them on
//! demand.

use std::path::{Path, PathBuf};

use crate::cli::args::CheckArgs;
use crate::cli::commands::dispatcher::{Command, CommandResult};
use crate::error::Result;
use crate::project::{self, PackageManager};
use crate::tools::{ToolChecker, ToolStatus, NODE};
use crate::ui::UserInterface;

/// Implementation of the `check` command.
pub struct CheckCommand {
    project_root: PathBuf,
}

impl CheckCommand {
    /// Create a new check command.
    pub fn new(project_root: &Path, _args: CheckArgs) -> Self {
        Self {
            project_root: project_root.to_path_buf(),
        }
    }

    /// Run the checks with an explicit checker (injectable for tests).
    pub fn execute_with_checker(
        &self,
        checker: &ToolChecker,
        ui: &mut dyn UserInterface,
    ) -> Result<CommandResult> {
        ui.show_header("Preflight status");

        let manager = PackageManager::detect(&self.project_root);
        let mut missing = 0usize;

        for spec in [&NODE, manager.tool_spec()] {
            match checker.check(spec) {
                ToolStatus::Found { path, version } => {
                    let version = version.unwrap_or_else(|| "version unknown".to_string());
                    ui.success(&format!("{} {} ({})", spec.label, version, path.display()));
                }
                ToolStatus::Missing { hint } => {
                    missing += 1;
                    ui.error(&format!("{} missing. {}", spec.label, hint));
                }
            }
        }

        if project::dependencies_present(&self.project_root) {
            ui.success("Dependencies installed (node_modules present)");
        } else {
            ui.warning("Dependencies not installed (run `cairn up` to install)");
        }

        if missing == 0 {
            Ok(CommandResult::success())
        } else {
            Ok(CommandResult::failure(1))
        }
    }
}

impl Command for CheckCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        self.execute_with_checker(&ToolChecker::new(), ui)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::MockUI;
    use tempfile::TempDir;

    fn empty_checker(temp: &TempDir) -> ToolChecker {
        ToolChecker::with_path(vec![temp.path().to_path_buf()])
    }

    #[test]
    fn missing_tools_fail_the_check() {
        let bin = TempDir::new().unwrap();
        let project = TempDir::new().unwrap();
        let cmd = CheckCommand::new(project.path(), CheckArgs::default());
        let mut ui = MockUI::new();

        let result = cmd
            .execute_with_checker(&empty_checker(&bin), &mut ui)
            .unwrap();

        assert_eq!(result.exit_code, 1);
        assert_eq!(ui.errors.len(), 2, "runtime and manager both reported");
        assert!(ui.errors[0].contains("Node.js"));
        assert!(ui.errors[1].contains("npm"));
    }

    #[test]
    fn missing_dependencies_warn_but_pass_tool_gates() {
        let bin = TempDir::new().unwrap();
        let project = TempDir::new().unwrap();
        let cmd = CheckCommand::new(project.path(), CheckArgs::default());
        let mut ui = MockUI::new();

        cmd.execute_with_checker(&empty_checker(&bin), &mut ui)
            .unwrap();

        assert!(ui.warnings.iter().any(|w| w.contains("cairn up")));
    }

    #[cfg(unix)]
    #[test]
    fn present_tools_and_deps_pass() {
        use std::fs;
        use std::os::unix::fs::PermissionsExt;

        let bin = TempDir::new().unwrap();
        for (name, version) in [("node", "v22.11.0"), ("npm", "10.9.0")] {
            let path = bin.path().join(name);
            fs::write(&path, format!("#!/bin/sh\necho '{version}'\n")).unwrap();
            fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();
        }

        let project = TempDir::new().unwrap();
        fs::create_dir(project.path().join("node_modules")).unwrap();

        let cmd = CheckCommand::new(project.path(), CheckArgs::default());
        let mut ui = MockUI::new();
        let result = cmd
            .execute_with_checker(&ToolChecker::with_path(vec![bin.path().to_path_buf()]), &mut ui)
            .unwrap();

        assert_eq!(result.exit_code, 0);
        assert_eq!(ui.successes.len(), 3);
        assert!(ui.successes[0].contains("22.11.0"));
        assert!(ui.errors.is_empty());
    }

    #[cfg(unix)]
    #[test]
    fn reports_lockfile_selected_manager() {
        use std::fs;

        let bin = TempDir::new().unwrap();
        let project = TempDir::new().unwrap();
        fs::write(project.path().join("yarn.lock"), "").unwrap();

        let cmd = CheckCommand::new(project.path(), CheckArgs::default());
        let mut ui = MockUI::new();
        cmd.execute_with_checker(&empty_checker(&bin), &mut ui)
            .unwrap();

        assert!(ui.errors.iter().any(|e| e.contains("Yarn")));
    }
}
