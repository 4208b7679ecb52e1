//! Command dispatching.
//!
//! This module provides the core command infrastructure:
//! - [`Command`] trait for implementing commands
//! - [`CommandResult`] for uniform result reporting
//! - [`CommandContext`] for the settings every command shares
//! - [`CommandDispatcher`] for routing CLI subcommands

use std::path::{Path, PathBuf};

use crate::cli::args::{CheckArgs, Cli, Commands};
use crate::config::{build_policy, load_config, CompilerSettings, GateConfig};
use crate::detection::{resolve_identity, ResolvedIdentity};
use crate::error::Result;
use crate::gate::CompatibilityGate;
use crate::ui::UserInterface;

/// Trait for command implementations.
///
/// Each CLI subcommand implements this trait to provide its execution logic.
pub trait Command {
    /// Execute the command.
    ///
    /// # Arguments
    ///
    /// * `ui` - User interface for displaying output
    ///
    /// # Returns
    ///
    /// A [`CommandResult`] indicating success/failure and exit code.
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult>;
}

/// Result of command execution.
#[derive(Debug)]
pub struct CommandResult {
    /// Whether the command succeeded.
    pub success: bool,

    /// Exit code to use (0 for success, non-zero for failure).
    pub exit_code: u8,
}

impl CommandResult {
    /// Create a successful result.
    pub fn success() -> Self {
        Self {
            success: true,
            exit_code: 0,
        }
    }
}

/// Settings shared by the policy-aware commands.
#[derive(Debug, Clone)]
pub struct CommandContext {
    /// Project root used for config discovery.
    pub project_root: PathBuf,
    /// Explicit config file, if given.
    pub config_path: Option<PathBuf>,
    /// Compiler settings from flags or environment.
    pub compiler: CompilerSettings,
}

impl CommandContext {
    /// Create a context for a project root with no overrides.
    pub fn new(project_root: &Path) -> Self {
        Self {
            project_root: project_root.to_path_buf(),
            config_path: None,
            compiler: CompilerSettings::default(),
        }
    }

    /// Set an explicit config file.
    pub fn with_config_path(mut self, path: Option<PathBuf>) -> Self {
        self.config_path = path;
        self
    }

    /// Set explicit compiler settings.
    pub fn with_compiler(mut self, compiler: CompilerSettings) -> Self {
        self.compiler = compiler;
        self
    }

    /// Load the configuration file (or defaults).
    pub fn load_config(&self) -> Result<GateConfig> {
        load_config(&self.project_root, self.config_path.as_deref())
    }

    /// Build the gate from configuration.
    pub fn gate(&self, config: &GateConfig) -> Result<CompatibilityGate> {
        Ok(CompatibilityGate::new(build_policy(config)?))
    }

    /// Resolve the compiler identity.
    pub fn resolve(&self, config: &GateConfig) -> Result<ResolvedIdentity> {
        resolve_identity(&self.compiler, config.compiler.as_ref())
    }
}

/// Dispatches CLI commands to their implementations.
pub struct CommandDispatcher {
    project_root: PathBuf,
}

impl CommandDispatcher {
    /// Create a new dispatcher for the given project root.
    pub fn new(project_root: PathBuf) -> Self {
        Self { project_root }
    }

    /// Get the project root path.
    pub fn project_root(&self) -> &Path {
        &self.project_root
    }

    /// Dispatch and execute a command.
    pub fn dispatch(&self, cli: &Cli, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let ctx = CommandContext::new(&self.project_root)
            .with_config_path(cli.config.clone())
            .with_compiler(cli.compiler_settings());

        match &cli.command {
            Some(Commands::Check(args)) => {
                let cmd = super::check::CheckCommand::new(ctx, args.clone());
                cmd.execute(ui)
            }
            Some(Commands::Policy(args)) => {
                let cmd = super::policy::PolicyCommand::new(ctx, args.clone());
                cmd.execute(ui)
            }
            Some(Commands::Detect(args)) => {
                let cmd = super::detect::DetectCommand::new(ctx, args.clone());
                cmd.execute(ui)
            }
            Some(Commands::Completions(args)) => {
                let cmd = super::completions::CompletionsCommand::new(args.clone());
                cmd.execute(ui)
            }
            None => {
                let cmd = super::check::CheckCommand::new(ctx, CheckArgs::default());
                cmd.execute(ui)
            }
        }
    }
}
