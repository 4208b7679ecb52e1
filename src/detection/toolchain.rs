//! Compiler identity resolution and `--version` probing.

use serde::Serialize;
use std::fmt;
use std::process::Command;

use crate::config::CompilerSettings;
use crate::error::{GateError, Result};
use crate::gate::{extract_version, CompilerFamily, CompilerIdentity};

/// Compiler tried when neither `CXX` nor `CC` is set.
const DEFAULT_COMPILER: &str = "c++";

/// Where a resolved identity came from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case", tag = "kind", content = "command")]
pub enum IdentitySource {
    /// CLI flags or environment settings.
    Explicit,
    /// The config file's `compiler:` section.
    Config,
    /// Probing a compiler binary.
    Probe(String),
}

impl fmt::Display for IdentitySource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IdentitySource::Explicit => write!(f, "explicit settings"),
            IdentitySource::Config => write!(f, "config file"),
            IdentitySource::Probe(cmd) => write!(f, "`{} --version`", cmd),
        }
    }
}

/// An identity with its provenance.
#[derive(Debug, Clone, Serialize)]
pub struct ResolvedIdentity {
    pub identity: CompilerIdentity,
    pub source: IdentitySource,
}

/// Classify a `--version` banner into a compiler family.
pub fn classify_banner(banner: &str) -> Option<CompilerFamily> {
    let lower = banner.to_lowercase();

    if lower.contains("apple clang") || lower.contains("apple llvm") {
        Some(CompilerFamily::AppleClang)
    } else if lower.contains("intel") || lower.contains("icpc") || lower.contains("icpx") {
        Some(CompilerFamily::Intel)
    } else if lower.contains("clang") {
        Some(CompilerFamily::Clang)
    } else if lower.contains("microsoft") {
        Some(CompilerFamily::Msvc)
    } else if lower.contains("gcc")
        || lower.contains("g++")
        || lower.contains("free software foundation")
    {
        Some(CompilerFamily::Gcc)
    } else {
        None
    }
}

/// Build an identity from a `--version` banner.
///
/// # Errors
///
/// Returns [`GateError::DetectionFailed`] if the banner names no known
/// compiler. A banner without a readable version still yields an identity;
/// the gate rejects it later.
pub fn identity_from_banner(command: &str, banner: &str) -> Result<CompilerIdentity> {
    let family = classify_banner(banner).ok_or_else(|| GateError::DetectionFailed {
        compiler: command.to_string(),
        message: "unrecognised --version output".to_string(),
    })?;

    let version = extract_version(banner).map(|v| v.to_string());
    CompilerIdentity::parse(family.as_str(), version.as_deref())
}

/// The compiler command to probe: `$CXX`, then `$CC`, then `c++`.
pub fn compiler_command<F>(env_fn: &F) -> String
where
    F: Fn(&str) -> std::result::Result<String, std::env::VarError>,
{
    ["CXX", "CC"]
        .iter()
        .filter_map(|var| env_fn(var).ok())
        .map(|value| value.trim().to_string())
        .find(|value| !value.is_empty())
        .unwrap_or_else(|| DEFAULT_COMPILER.to_string())
}

/// Run `<command> --version` and return its combined output.
///
/// `command` may carry leading arguments (e.g. `ccache g++`).
pub fn probe_compiler(command: &str) -> Result<String> {
    let parts: Vec<&str> = command.split_whitespace().collect();
    let Some((program, args)) = parts.split_first() else {
        return Err(GateError::DetectionFailed {
            compiler: command.to_string(),
            message: "empty compiler command".to_string(),
        });
    };

    tracing::debug!("Probing {} --version", command);

    let output = Command::new(program)
        .args(args)
        .arg("--version")
        .output()
        .map_err(|e| GateError::DetectionFailed {
            compiler: command.to_string(),
            message: e.to_string(),
        })?;

    if !output.status.success() {
        return Err(GateError::DetectionFailed {
            compiler: command.to_string(),
            message: format!("--version exited with {}", output.status),
        });
    }

    let mut banner = String::from_utf8_lossy(&output.stdout).to_string();
    banner.push_str(&String::from_utf8_lossy(&output.stderr));
    Ok(banner)
}

fn identity_from_settings(settings: &CompilerSettings) -> Result<CompilerIdentity> {
    CompilerIdentity::parse(&settings.name, settings.version.as_deref())
}

fn has_name(settings: &CompilerSettings) -> bool {
    !settings.name.trim().is_empty()
}

/// Resolve the identity using the real environment and compiler binaries.
pub fn resolve_identity(
    explicit: &CompilerSettings,
    configured: Option<&CompilerSettings>,
) -> Result<ResolvedIdentity> {
    resolve_identity_with(explicit, configured, |key: &str| std::env::var(key), probe_compiler)
}

/// Resolve the identity with custom environment lookup and probe functions.
///
/// This allows testing without touching real environment variables or
/// spawning compilers.
pub fn resolve_identity_with<F, P>(
    explicit: &CompilerSettings,
    configured: Option<&CompilerSettings>,
    env_fn: F,
    probe_fn: P,
) -> Result<ResolvedIdentity>
where
    F: Fn(&str) -> std::result::Result<String, std::env::VarError>,
    P: Fn(&str) -> Result<String>,
{
    let cpp_std = explicit
        .cpp_std
        .as_deref()
        .or_else(|| configured.and_then(|c| c.cpp_std.as_deref()));

    let (identity, source) = if has_name(explicit) {
        (identity_from_settings(explicit)?, IdentitySource::Explicit)
    } else if let Some(settings) = configured.filter(|c| has_name(c)) {
        (identity_from_settings(settings)?, IdentitySource::Config)
    } else {
        let command = compiler_command(&env_fn);
        let banner = probe_fn(&command)?;
        (
            identity_from_banner(&command, &banner)?,
            IdentitySource::Probe(command),
        )
    };

    let identity = identity.with_cpp_std(cpp_std);
    tracing::debug!("Resolved compiler {} from {}", identity, source);

    Ok(ResolvedIdentity { identity, source })
}
