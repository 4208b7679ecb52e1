//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

use crate::config::CompilerSettings;

/// compat-gate - Compiler compatibility gate for header-only package installs.
#[derive(Debug, Parser)]
#[command(name = "compat-gate")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to config file (overrides default .compat-gate/config.yml)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Path to project root (overrides current directory)
    #[arg(short, long, global = true)]
    pub project: Option<PathBuf>,

    /// Compiler family (gcc, clang, apple-clang, msvc, "Visual Studio", ...)
    #[arg(long, global = true, env = "COMPAT_GATE_COMPILER")]
    pub compiler: Option<String>,

    /// Compiler version (e.g. 11.4)
    #[arg(long, global = true, env = "COMPAT_GATE_COMPILER_VERSION")]
    pub compiler_version: Option<String>,

    /// C++ standard setting (e.g. 17, gnu17)
    #[arg(long, global = true, env = "COMPAT_GATE_CPPSTD")]
    pub cppstd: Option<String>,

    /// Show verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Minimal output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

impl Cli {
    /// Compiler settings supplied on the command line or via environment.
    pub fn compiler_settings(&self) -> CompilerSettings {
        CompilerSettings {
            name: self.compiler.clone().unwrap_or_default(),
            version: self.compiler_version.clone(),
            cpp_std: self.cppstd.clone(),
        }
    }
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Check the compiler against the policy (default if no command specified)
    Check(CheckArgs),

    /// Show the effective compatibility policy
    Policy(PolicyArgs),

    /// Show the resolved compiler identity without checking it
    Detect(DetectArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the `check` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct CheckArgs {
    /// Output the verdict as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `policy` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct PolicyArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `detect` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct DetectArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `completions` command.
#[derive(Debug, Clone, clap::Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_check_with_compiler_flags() {
        let cli = Cli::parse_from([
            "compat-gate",
            "check",
            "--compiler",
            "gcc",
            "--compiler-version",
            "9.0",
            "--cppstd",
            "gnu17",
            "--json",
        ]);
        let settings = cli.compiler_settings();
        assert_eq!(settings.name, "gcc");
        assert_eq!(settings.version.as_deref(), Some("9.0"));
        assert_eq!(settings.cpp_std.as_deref(), Some("gnu17"));
        assert!(matches!(cli.command, Some(Commands::Check(CheckArgs { json: true }))));
    }

    #[test]
    fn global_flags_before_subcommand() {
        let cli = Cli::parse_from(["compat-gate", "--compiler", "clang", "--quiet", "policy"]);
        assert_eq!(cli.compiler.as_deref(), Some("clang"));
        assert!(cli.quiet);
        assert!(matches!(cli.command, Some(Commands::Policy(_))));
    }

    #[test]
    fn no_subcommand_is_allowed() {
        let cli = Cli::parse_from(["compat-gate"]);
        assert!(cli.command.is_none());
    }
}
