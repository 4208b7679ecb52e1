//! Check command implementation.
//!
//! The `compat-gate check` command resolves the compiler identity and runs
//! it through the gate. A rejection is returned as an error so the process
//! exits non-zero.

use serde::Serialize;

use crate::cli::args::CheckArgs;
use crate::detection::IdentitySource;
use crate::error::{GateError, Result};
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandContext, CommandResult};

/// Machine-readable outcome of a check.
#[derive(Debug, Serialize)]
pub struct Verdict {
    pub supported: bool,
    pub compiler: String,
    pub family: String,
    pub version: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cpp_std: Option<String>,
    pub source: IdentitySource,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    pub reference: String,
}

/// The check command implementation.
pub struct CheckCommand {
    ctx: CommandContext,
    args: CheckArgs,
}

impl CheckCommand {
    /// Create a new check command.
    pub fn new(ctx: CommandContext, args: CheckArgs) -> Self {
        Self { ctx, args }
    }

    /// Get the command arguments.
    pub fn args(&self) -> &CheckArgs {
        &self.args
    }
}

impl Command for CheckCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let config = self.ctx.load_config()?;
        let gate = self.ctx.gate(&config)?;
        let resolved = self.ctx.resolve(&config)?;
        let identity = &resolved.identity;

        tracing::debug!("Checking {} against {} rules", identity, gate.policy().rules().len());

        let outcome = gate.check(identity);

        if self.args.json {
            let reason = match &outcome {
                Err(GateError::Configuration { reason, .. }) => Some(reason.clone()),
                _ => None,
            };
            let verdict = Verdict {
                supported: outcome.is_ok(),
                compiler: identity.name.clone(),
                family: identity.family.to_string(),
                version: identity.version_label().to_string(),
                cpp_std: identity.cpp_std.clone(),
                source: resolved.source.clone(),
                reason,
                reference: gate.policy().reference().to_string(),
            };
            let json = serde_json::to_string_pretty(&verdict)
                .map_err(|e| GateError::Other(e.into()))?;
            ui.raw(&json);
        }

        outcome?;

        if !self.args.json {
            if ui.output_mode().shows_detail() {
                ui.key_value("detected from", &resolved.source.to_string());
            }
            ui.success(&format!("{} is supported", identity));
        }

        Ok(CommandResult::success())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CompilerSettings;
    use crate::ui::{MockUI, OutputMode};
    use std::fs;
    use tempfile::TempDir;

    fn ctx(temp: &TempDir, name: &str, version: Option<&str>) -> CommandContext {
        CommandContext::new(temp.path()).with_compiler(CompilerSettings {
            name: name.to_string(),
            version: version.map(String::from),
            cpp_std: None,
        })
    }

    #[test]
    fn supported_compiler_succeeds() {
        let temp = TempDir::new().unwrap();
        let cmd = CheckCommand::new(ctx(&temp, "gcc", Some("9.0")), CheckArgs::default());
        let mut ui = MockUI::new();

        let result = cmd.execute(&mut ui).unwrap();
        assert!(result.success);
        assert!(ui.has_success("gcc 9.0 is supported"));
    }

    #[test]
    fn old_compiler_is_configuration_error() {
        let temp = TempDir::new().unwrap();
        let cmd = CheckCommand::new(ctx(&temp, "gcc", Some("8.9")), CheckArgs::default());
        let mut ui = MockUI::new();

        let err = cmd.execute(&mut ui).unwrap_err();
        assert!(err.is_configuration());
        assert!(err.to_string().contains("requires gcc >= 9"));
        assert!(ui.successes().is_empty());
    }

    #[test]
    fn json_verdict_on_rejection() {
        let temp = TempDir::new().unwrap();
        let args = CheckArgs { json: true };
        let cmd = CheckCommand::new(ctx(&temp, "intel", Some("19.0")), args);
        let mut ui = MockUI::new();

        assert!(cmd.execute(&mut ui).is_err());

        let json: serde_json::Value = serde_json::from_str(&ui.raw_output()[0]).unwrap();
        assert_eq!(json["supported"], false);
        assert_eq!(json["compiler"], "intel");
        assert_eq!(json["version"], "19.0");
        assert_eq!(json["source"]["kind"], "explicit");
        assert!(json["reason"].as_str().unwrap().contains("not in the compatibility table"));
    }

    #[test]
    fn json_verdict_on_success() {
        let temp = TempDir::new().unwrap();
        let args = CheckArgs { json: true };
        let cmd = CheckCommand::new(ctx(&temp, "clang", Some("5.0")), args);
        let mut ui = MockUI::new();

        cmd.execute(&mut ui).unwrap();

        let json: serde_json::Value = serde_json::from_str(&ui.raw_output()[0]).unwrap();
        assert_eq!(json["supported"], true);
        assert!(json.get("reason").is_none());
        assert!(ui.successes().is_empty());
    }

    #[test]
    fn config_rules_replace_defaults() {
        let temp = TempDir::new().unwrap();
        let dir = temp.path().join(".compat-gate");
        fs::create_dir_all(&dir).unwrap();
        fs::write(
            dir.join("config.yml"),
            "rules:\n  - compiler: intel\n    minimum_version: \"19.0\"\n",
        )
        .unwrap();

        let mut ui = MockUI::new();
        let intel = CheckCommand::new(ctx(&temp, "intel", Some("19.0")), CheckArgs::default());
        assert!(intel.execute(&mut ui).unwrap().success);

        let gcc = CheckCommand::new(ctx(&temp, "gcc", Some("13")), CheckArgs::default());
        assert!(gcc.execute(&mut ui).unwrap_err().is_configuration());
    }

    #[test]
    fn pinned_compiler_in_config_is_used() {
        let temp = TempDir::new().unwrap();
        let dir = temp.path().join(".compat-gate");
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join("config.yml"), "compiler:\n  name: apple-clang\n  version: \"15.0\"\n")
            .unwrap();

        let cmd = CheckCommand::new(CommandContext::new(temp.path()), CheckArgs::default());
        let mut ui = MockUI::with_mode(OutputMode::Verbose);

        assert!(cmd.execute(&mut ui).unwrap().success);
        assert_eq!(ui.value_of("detected from"), Some("config file"));
    }
}
