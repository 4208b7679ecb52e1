//! Policy command implementation.
//!
//! The `compat-gate policy` command prints the effective compatibility table.

use crate::cli::args::PolicyArgs;
use crate::error::{GateError, Result};
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandContext, CommandResult};

/// The policy command implementation.
pub struct PolicyCommand {
    ctx: CommandContext,
    args: PolicyArgs,
}

impl PolicyCommand {
    /// Create a new policy command.
    pub fn new(ctx: CommandContext, args: PolicyArgs) -> Self {
        Self { ctx, args }
    }
}

impl Command for PolicyCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let config = self.ctx.load_config()?;
        let gate = self.ctx.gate(&config)?;
        let policy = gate.policy();

        if self.args.json {
            let json =
                serde_json::to_string_pretty(policy).map_err(|e| GateError::Other(e.into()))?;
            ui.raw(&json);
            return Ok(CommandResult::success());
        }

        ui.show_header("Compatibility policy");
        for rule in policy.rules() {
            ui.key_value(rule.compiler.as_str(), &format!(">= {}", rule.minimum_version));
        }
        if let Some(std) = policy.minimum_cpp_std() {
            ui.key_value("C++ standard", &format!(">= {}", std));
        }
        ui.message(&format!("See {}", policy.reference()));

        Ok(CommandResult::success())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gate::DEFAULT_REFERENCE;
    use crate::ui::MockUI;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn shows_default_table() {
        let temp = TempDir::new().unwrap();
        let cmd = PolicyCommand::new(CommandContext::new(temp.path()), PolicyArgs::default());
        let mut ui = MockUI::new();

        assert!(cmd.execute(&mut ui).unwrap().success);
        assert_eq!(ui.value_of("gcc"), Some(">= 9"));
        assert_eq!(ui.value_of("msvc"), Some(">= 19.10"));
        assert_eq!(ui.value_of("C++ standard"), Some(">= 17"));
        assert!(ui.messages().iter().any(|m| m.contains(DEFAULT_REFERENCE)));
    }

    #[test]
    fn json_lists_rules() {
        let temp = TempDir::new().unwrap();
        let cmd = PolicyCommand::new(CommandContext::new(temp.path()), PolicyArgs { json: true });
        let mut ui = MockUI::new();

        cmd.execute(&mut ui).unwrap();

        let json: serde_json::Value = serde_json::from_str(&ui.raw_output()[0]).unwrap();
        assert_eq!(json["rules"][0]["compiler"], "gcc");
        assert_eq!(json["rules"][0]["minimum_version"], "9");
        assert_eq!(json["minimum_cpp_std"], "17");
    }

    #[test]
    fn invalid_config_is_reported() {
        let temp = TempDir::new().unwrap();
        let dir = temp.path().join(".compat-gate");
        fs::create_dir_all(&dir).unwrap();
        fs::write(
            dir.join("config.yml"),
            "rules:\n  - compiler: gcc\n    minimum_version: \"nine\"\n",
        )
        .unwrap();

        let cmd = PolicyCommand::new(CommandContext::new(temp.path()), PolicyArgs::default());
        let mut ui = MockUI::new();
        let err = cmd.execute(&mut ui).unwrap_err();
        assert!(matches!(err, GateError::ConfigValidationError { .. }));
    }
}
