//! The `up` command: preflight gates, then hand the terminal to the dev
//! server.
//!
//! Four gates run top to bottom with early termination:
//! runtime present, package manager present, dependencies present (install
//! on demand), then the dev task itself. A failed gate exits 1; a clean or
//! operator-interrupted dev task exits 0.

use std::path::{Path, PathBuf};

use crate::cli::args::UpArgs;
use crate::cli::commands::dispatcher::{Command, CommandResult};
use crate::error::{CairnError, Result};
use crate::project::{self, PackageManager, PackageManifest};
use crate::server::{self, LaunchOutcome};
use crate::tools::{ToolChecker, ToolStatus, NODE};
use crate::ui::UserInterface;

/// Implementation of the `up` command.
pub struct UpCommand {
    project_root: PathBuf,
    args: UpArgs,
}

impl UpCommand {
    /// Create a new up command.
    pub fn new(project_root: &Path, args: UpArgs) -> Self {
        Self {
            project_root: project_root.to_path_buf(),
            args,
        }
    }

    /// Run the gates with an explicit checker (injectable for tests).
    pub fn execute_with_checker(
        &self,
        checker: &ToolChecker,
        ui: &mut dyn UserInterface,
    ) -> Result<CommandResult> {
        ui.show_header("Dev server preflight");

        // Gate 1: runtime
        match checker.check(&NODE) {
            ToolStatus::Found { version, .. } => {
                ui.success(&found_line(NODE.label, version.as_deref()));
            }
            ToolStatus::Missing { hint } => {
                return fail(
                    ui,
                    CairnError::ToolMissing {
                        tool: NODE.label.to_string(),
                        hint,
                    },
                );
            }
        }

        // Gate 2: package manager
        let manager =
            match resolve_manager(self.args.package_manager.as_deref(), &self.project_root) {
                Ok(manager) => manager,
                Err(message) => {
                    ui.error(&message);
                    return Ok(CommandResult::failure(1));
                }
            };
        let spec = manager.tool_spec();
        let manager_path = match checker.check(spec) {
            ToolStatus::Found { path, version } => {
                ui.success(&found_line(spec.label, version.as_deref()));
                path
            }
            ToolStatus::Missing { hint } => {
                return fail(
                    ui,
                    CairnError::ToolMissing {
                        tool: spec.label.to_string(),
                        hint,
                    },
                );
            }
        };

        // Gate 3: dependencies
        if project::dependencies_present(&self.project_root) {
            ui.success("Dependencies found");
        } else {
            ui.warning("Dependencies not found, installing");
            let mut spinner = ui.start_spinner(&format!("Running {} install", manager));
            let result = project::install(&manager_path, &self.project_root)?;
            if result.success {
                spinner.finish_success("Dependencies installed");
                if ui.output_mode().shows_command_output() && !result.stdout.trim().is_empty() {
                    ui.message(result.stdout.trim_end());
                }
            } else {
                spinner.finish_error("Dependency install failed");
                for line in tail_lines(&result.stderr, 10) {
                    ui.message(&format!("  {line}"));
                }
                return fail(
                    ui,
                    CairnError::InstallFailed {
                        manager: manager.to_string(),
                        code: result.exit_code,
                    },
                );
            }
        }

        // Advisory only: the manager stays authoritative on runnable tasks
        if let Some(manifest) = PackageManifest::load(&self.project_root) {
            if !manifest.has_script(&self.args.task) {
                ui.warning(&format!(
                    "package.json declares no \"{}\" script; {} may refuse to run it",
                    self.args.task, manager
                ));
            }
        }

        // Gate 4: launch
        ui.show_header(&format!(
            "Starting dev server: {} run {}",
            manager, self.args.task
        ));

        match server::launch(&manager_path, &self.args.task, &self.project_root)? {
            LaunchOutcome::Completed => {
                ui.message("Dev server exited cleanly");
                Ok(CommandResult::success())
            }
            LaunchOutcome::Interrupted => {
                ui.message("");
                ui.message("Shutting down dev server. Goodbye!");
                Ok(CommandResult::success())
            }
            LaunchOutcome::Failed { code } => {
                let detail = match code {
                    Some(code) => format!("Dev server exited with code {code}"),
                    None => "Dev server was terminated by a signal".to_string(),
                };
                ui.error(&detail);
                Ok(CommandResult::failure(1))
            }
        }
    }
}

impl Command for UpCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        self.execute_with_checker(&ToolChecker::new(), ui)
    }
}

/// Resolve the package manager: explicit flag wins, lockfiles otherwise.
fn resolve_manager(
    requested: Option<&str>,
    project_root: &Path,
) -> std::result::Result<PackageManager, String> {
    match requested {
        Some(name) => PackageManager::from_name(name).ok_or_else(|| {
            format!("Unknown package manager '{name}' (expected npm, yarn, pnpm, or bun)")
        }),
        None => Ok(PackageManager::detect(project_root)),
    }
}

/// Report a gate failure and map it to exit code 1.
fn fail(ui: &mut dyn UserInterface, err: CairnError) -> Result<CommandResult> {
    ui.error(&err.to_string());
    Ok(CommandResult::failure(1))
}

fn found_line(label: &str, version: Option<&str>) -> String {
    match version {
        Some(version) => format!("{label} {version} found"),
        None => format!("{label} found"),
    }
}

/// Last non-empty lines of captured output, for failure reporting.
fn tail_lines(text: &str, limit: usize) -> Vec<&str> {
    let lines: Vec<&str> = text.lines().filter(|l| !l.trim().is_empty()).collect();
    let start = lines.len().saturating_sub(limit);
    lines[start..].to_vec()
}
