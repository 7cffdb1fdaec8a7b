//! The `completions` command.

use clap::CommandFactory;

use crate::cli::args::{Cli, CompletionsArgs};
use crate::cli::commands::dispatcher::{Command, CommandResult};
use crate::error::Result;
use crate::ui::UserInterface;

/// Implementation of the `completions` command.
pub struct CompletionsCommand {
    args: CompletionsArgs,
}

impl CompletionsCommand {
    /// Create a new completions command.
    pub fn new(args: CompletionsArgs) -> Self {
        Self { args }
    }
}

impl Command for CompletionsCommand {
    fn execute(&self, _ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let mut cmd = Cli::command();
        clap_complete::generate(self.args.shell, &mut cmd, "cairn", &mut std::io::stdout());
        Ok(CommandResult::success())
    }
}
