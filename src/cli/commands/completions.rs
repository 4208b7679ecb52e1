//! Shell completions generation.
//!
//! The `compat-gate completions` command generates shell completion scripts.

use crate::cli::args::{Cli, CompletionsArgs};
use crate::ui::UserInterface;
use clap::CommandFactory;

use super::dispatcher::{Command, CommandResult};

/// Binary name completions are generated for.
const BIN_NAME: &str = "compat-gate";

/// The completions command implementation.
pub struct CompletionsCommand {
    args: CompletionsArgs,
}

impl CompletionsCommand {
    /// Create a new completions command.
    pub fn new(args: CompletionsArgs) -> Self {
        Self { args }
    }

    /// Render the completion script into a buffer.
    pub fn render(&self) -> Vec<u8> {
        let mut cmd = Cli::command();
        let mut buf = Vec::new();
        clap_complete::generate(self.args.shell, &mut cmd, BIN_NAME, &mut buf);
        buf
    }
}

impl Command for CompletionsCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> crate::error::Result<CommandResult> {
        ui.raw(&String::from_utf8_lossy(&self.render()));
        Ok(CommandResult::success())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::MockUI;
    use clap_complete::Shell;

    #[test]
    fn generates_bash_completions() {
        let cmd = CompletionsCommand::new(CompletionsArgs { shell: Shell::Bash });
        let output = String::from_utf8(cmd.render()).unwrap();
        assert!(output.contains("compat-gate"));
        assert!(output.contains("complete"));
    }

    #[test]
    fn generates_zsh_completions() {
        let cmd = CompletionsCommand::new(CompletionsArgs { shell: Shell::Zsh });
        let output = String::from_utf8(cmd.render()).unwrap();
        assert!(output.contains("compat-gate"));
    }

    #[test]
    fn execute_writes_script() {
        let cmd = CompletionsCommand::new(CompletionsArgs { shell: Shell::Fish });
        let mut ui = MockUI::new();
        assert!(cmd.execute(&mut ui).unwrap().success);
        assert!(ui.raw_output()[0].contains("compat-gate"));
    }
}
