//! Detect command implementation.
//!
//! The `compat-gate detect` command shows which compiler identity would be
//! checked, and where it came from, without running the gate.

use crate::cli::args::DetectArgs;
use crate::error::{GateError, Result};
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandContext, CommandResult};

/// The detect command implementation.
pub struct DetectCommand {
    ctx: CommandContext,
    args: DetectArgs,
}

impl DetectCommand {
    /// Create a new detect command.
    pub fn new(ctx: CommandContext, args: DetectArgs) -> Self {
        Self { ctx, args }
    }
}

impl Command for DetectCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let config = self.ctx.load_config()?;
        let resolved = self.ctx.resolve(&config)?;

        if self.args.json {
            let json =
                serde_json::to_string_pretty(&resolved).map_err(|e| GateError::Other(e.into()))?;
            ui.raw(&json);
            return Ok(CommandResult::success());
        }

        let identity = &resolved.identity;
        ui.show_header("Detected compiler");
        ui.key_value("compiler", &identity.name);
        ui.key_value("family", identity.family.as_str());
        ui.key_value("version", identity.version_label());
        if identity.raw_version.is_some() && identity.version.is_none() {
            ui.warning(&format!(
                "Version '{}' is not a dotted number; check would reject it",
                identity.version_label()
            ));
        }
        if let Some(std) = &identity.cpp_std {
            ui.key_value("C++ standard", std);
        }
        ui.key_value("source", &resolved.source.to_string());

        Ok(CommandResult::success())
    }
}
