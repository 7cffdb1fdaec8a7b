//! Dev-task launching.
//!
//! The dev task runs as a blocking foreground child that inherits the
//! parent's standard streams; the terminal belongs to the server until it
//! exits. While waiting, the parent ignores SIGINT so an operator Ctrl+C
//! reaches only the child; the child's termination is then classified
//! rather than unwinding the parent.

use std::path::Path;
use std::process::{Command, ExitStatus, Stdio};

use crate::error::{CairnError, Result};

/// Terminal outcome of a dev-task run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LaunchOutcome {
    /// Child exited zero.
    Completed,
    /// Operator interrupt: child killed by SIGINT, or exited 130 after
    /// trapping it. A graceful shutdown, not an error.
    Interrupted,
    /// Child exited non-zero.
    Failed {
        /// Exit code (None if killed by a non-interrupt signal).
        code: Option<i32>,
    },
}

/// Run `<manager> run <task>` in the project root, inheriting stdio.
///
/// Blocks until the child terminates. Spawn failures are
/// [`CairnError::LaunchFailed`]; everything after a successful spawn is a
/// [`LaunchOutcome`], including interrupts.
pub fn launch(manager_binary: &Path, task: &str, project_root: &Path) -> Result<LaunchOutcome> {
    tracing::debug!(
        "launching {} run {} in {}",
        manager_binary.display(),
        task,
        project_root.display()
    );

    let mut child = Command::new(manager_binary)
        .arg("run")
        .arg(task)
        .current_dir(project_root)
        .stdin(Stdio::inherit())
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit())
        .spawn()
        .map_err(|e| CairnError::LaunchFailed {
            task: task.to_string(),
            message: e.to_string(),
        })?;

    // Engage only after spawn: an ignored disposition survives exec, and
    // the child must keep its default SIGINT handling.
    let _guard = InterruptGuard::engage();

    let status = child.wait()?;
    Ok(classify(status))
}

fn classify(status: ExitStatus) -> LaunchOutcome {
    if status.success() {
        return LaunchOutcome::Completed;
    }
    if killed_by_interrupt(&status) {
        return LaunchOutcome::Interrupted;
    }
    match status.code() {
        // Shell convention: 128 + SIGINT. Well-behaved dev servers trap
        // the interrupt, shut down, and exit 130.
        Some(130) => LaunchOutcome::Interrupted,
        code => LaunchOutcome::Failed { code },
    }
}

#[cfg(unix)]
fn killed_by_interrupt(status: &ExitStatus) -> bool {
    use std::os::unix::process::ExitStatusExt;
    status.signal() == Some(libc::SIGINT)
}

#[cfg(not(unix))]
fn killed_by_interrupt(_status: &ExitStatus) -> bool {
    false
}

/// Ignores SIGINT for the parent while a foreground child runs; restores
/// the previous disposition on drop.
#[cfg(unix)]
struct InterruptGuard {
    previous: libc::sighandler_t,
}

#[cfg(unix)]
impl InterruptGuard {
    fn engage() -> Self {
        // SAFETY: installing SIG_IGN has no handler to race with, and the
        // previous disposition is restored before the guard leaves scope.
        let previous = unsafe { libc::signal(libc::SIGINT, libc::SIG_IGN) };
        Self { previous }
    }
}

#[cfg(unix)]
impl Drop for InterruptGuard {
    fn drop(&mut self) {
        // SAFETY: restores the disposition captured in engage().
        unsafe {
            libc::signal(libc::SIGINT, self.previous);
        }
    }
}

#[cfg(not(unix))]
struct InterruptGuard;

#[cfg(not(unix))]
impl InterruptGuard {
    fn engage() -> Self {
        Self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[cfg(unix)]
    mod unix {
        use super::super::*;
        use std::fs;
        use std::os::unix::fs::PermissionsExt;
        use std::os::unix::process::ExitStatusExt;
        use tempfile::TempDir;

        fn fake_manager(temp: &TempDir, body: &str) -> std::path::PathBuf {
            let path = temp.path().join("fakepm");
            fs::write(&path, format!("#!/bin/sh\n{body}\n")).unwrap();
            fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();
            path
        }

        #[test]
        fn classify_zero_exit_is_completed() {
            assert_eq!(
                classify(ExitStatus::from_raw(0)),
                LaunchOutcome::Completed
            );
        }

        #[test]
        fn classify_sigint_kill_is_interrupted() {
            // Raw wait status: low bits carry the terminating signal
            assert_eq!(
                classify(ExitStatus::from_raw(libc::SIGINT)),
                LaunchOutcome::Interrupted
            );
        }

        #[test]
        fn classify_exit_130_is_interrupted() {
            assert_eq!(
                classify(ExitStatus::from_raw(130 << 8)),
                LaunchOutcome::Interrupted
            );
        }

        #[test]
        fn classify_other_exit_is_failed() {
            assert_eq!(
                classify(ExitStatus::from_raw(7 << 8)),
                LaunchOutcome::Failed { code: Some(7) }
            );
        }

        #[test]
        fn classify_other_signal_is_failed_without_code() {
            assert_eq!(
                classify(ExitStatus::from_raw(libc::SIGKILL)),
                LaunchOutcome::Failed { code: None }
            );
        }

        #[test]
        fn launch_completed_on_clean_exit() {
            let temp = TempDir::new().unwrap();
            let pm = fake_manager(&temp, "exit 0");

            let outcome = launch(&pm, "dev", temp.path()).unwrap();
            assert_eq!(outcome, LaunchOutcome::Completed);
        }

        #[test]
        fn launch_failed_on_nonzero_exit() {
            let temp = TempDir::new().unwrap();
            let pm = fake_manager(&temp, "exit 5");

            let outcome = launch(&pm, "dev", temp.path()).unwrap();
            assert_eq!(outcome, LaunchOutcome::Failed { code: Some(5) });
        }

        #[test]
        fn launch_interrupted_when_child_takes_sigint() {
            let temp = TempDir::new().unwrap();
            let pm = fake_manager(&temp, "kill -INT $$");

            let outcome = launch(&pm, "dev", temp.path()).unwrap();
            assert_eq!(outcome, LaunchOutcome::Interrupted);
        }

        #[test]
        fn launch_receives_run_and_task_args() {
            let temp = TempDir::new().unwrap();
            let pm = fake_manager(&temp, r#"[ "$1" = run ] && [ "$2" = serve ] || exit 9"#);

            let outcome = launch(&pm, "serve", temp.path()).unwrap();
            assert_eq!(outcome, LaunchOutcome::Completed);
        }
    }

    #[test]
    fn launch_missing_binary_is_launch_failed() {
        let temp = tempfile::TempDir::new().unwrap();
        let result = launch(Path::new("/nonexistent/fakepm"), "dev", temp.path());
        assert!(matches!(result, Err(CairnError::LaunchFailed { .. })));
    }
}
