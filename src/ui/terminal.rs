//! Interactive terminal UI.

use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

use super::icons::StatusKind;
use super::non_interactive::NonInteractiveUI;
use super::output::OutputMode;
use super::theme::{should_use_colors, CairnTheme};
use super::{SpinnerHandle, UserInterface};

/// UI implementation for interactive terminal usage.
pub struct TerminalUI {
    theme: CairnTheme,
    mode: OutputMode,
}

impl TerminalUI {
    /// Create a new terminal UI.
    pub fn new(mode: OutputMode) -> Self {
        let theme = if should_use_colors() {
            CairnTheme::new()
        } else {
            CairnTheme::plain()
        };
        Self { theme, mode }
    }
}

impl UserInterface for TerminalUI {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn message(&mut self, msg: &str) {
        if self.mode.shows_status() {
            println!("{}", msg);
        }
    }

    fn success(&mut self, msg: &str) {
        if self.mode.shows_status() {
            println!("{}", StatusKind::Success.format(&self.theme, msg));
        }
    }

    fn warning(&mut self, msg: &str) {
        if self.mode.shows_status() {
            eprintln!("{}", StatusKind::Warning.format(&self.theme, msg));
        }
    }

    fn error(&mut self, msg: &str) {
        eprintln!("{}", StatusKind::Failed.format(&self.theme, msg));
    }

    fn show_header(&mut self, title: &str) {
        if self.mode.shows_status() {
            println!("\n{}\n", self.theme.header.apply_to(title));
        }
    }

    fn start_spinner(&mut self, message: &str) -> Box<dyn SpinnerHandle> {
        if !self.mode.shows_spinners() {
            return Box::new(SilentSpinner);
        }

        let bar = ProgressBar::new_spinner();
        bar.set_style(
            ProgressStyle::default_spinner()
                .tick_strings(&["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏", " "]),
        );
        bar.set_message(message.to_string());
        bar.enable_steady_tick(Duration::from_millis(80));

        Box::new(TerminalSpinner {
            bar,
            theme: self.theme.clone(),
        })
    }

    fn is_interactive(&self) -> bool {
        true
    }
}

/// Spinner backed by an indicatif progress bar.
struct TerminalSpinner {
    bar: ProgressBar,
    theme: CairnTheme,
}

impl SpinnerHandle for TerminalSpinner {
    fn finish_success(&mut self, msg: &str) {
        self.bar.finish_and_clear();
        println!("{}", StatusKind::Success.format(&self.theme, msg));
    }

    fn finish_error(&mut self, msg: &str) {
        self.bar.finish_and_clear();
        eprintln!("{}", StatusKind::Failed.format(&self.theme, msg));
    }
}

/// Spinner that renders nothing (quiet mode).
struct SilentSpinner;

impl SpinnerHandle for SilentSpinner {
    fn finish_success(&mut self, _msg: &str) {}

    fn finish_error(&mut self, msg: &str) {
        // Failures are reported even in quiet mode
        eprintln!("✗ {}", msg);
    }
}

/// Create the appropriate UI for the environment.
pub fn create_ui(interactive: bool, mode: OutputMode) -> Box<dyn UserInterface> {
    if interactive {
        Box::new(TerminalUI::new(mode))
    } else {
        Box::new(NonInteractiveUI::new(mode))
    }
}
