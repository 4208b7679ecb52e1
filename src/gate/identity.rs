//! Typed compiler identity.
//!
//! Compiler settings arrive as loose strings (CLI flags, environment
//! variables, config files, `--version` banners). They are parsed once here
//! into a [`CompilerIdentity`] so the gate never handles untyped data.

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

use super::version::Version;
use crate::error::{GateError, Result};

/// A compiler family.
///
/// Names outside the known set are preserved in [`CompilerFamily::Other`]
/// so error messages can echo them back.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum CompilerFamily {
    Gcc,
    Clang,
    AppleClang,
    Msvc,
    VisualStudio,
    Intel,
    Other(String),
}

impl CompilerFamily {
    /// Classify a compiler name. Matching is case-insensitive and accepts
    /// the common aliases (`g++`, `apple_clang`, `cl`, `icpc`, ...).
    pub fn from_name(name: &str) -> Self {
        let trimmed = name.trim();
        match trimmed.to_lowercase().as_str() {
            "gcc" | "g++" | "gnu" => Self::Gcc,
            "clang" | "clang++" | "llvm" => Self::Clang,
            "apple-clang" | "apple_clang" | "appleclang" => Self::AppleClang,
            "msvc" | "cl" | "cl.exe" => Self::Msvc,
            "visual studio" | "visual-studio" | "visual_studio" | "vs" => Self::VisualStudio,
            "intel" | "icc" | "icpc" | "icx" | "icpx" | "intel-cc" => Self::Intel,
            _ => Self::Other(trimmed.to_string()),
        }
    }

    /// Canonical display name.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Gcc => "gcc",
            Self::Clang => "clang",
            Self::AppleClang => "apple-clang",
            Self::Msvc => "msvc",
            Self::VisualStudio => "Visual Studio",
            Self::Intel => "intel",
            Self::Other(name) => name,
        }
    }
}

impl From<String> for CompilerFamily {
    fn from(name: String) -> Self {
        Self::from_name(&name)
    }
}

impl From<CompilerFamily> for String {
    fn from(family: CompilerFamily) -> Self {
        family.as_str().to_string()
    }
}

impl fmt::Display for CompilerFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A C++ language standard, ordered chronologically.
///
/// Accepts the spellings build tools use: `17`, `gnu17`, `c++17`,
/// `gnu++17`. Two-digit years are expanded so `98` orders before `03`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CppStandard(u16);

impl CppStandard {
    /// Parse a standard setting. Returns `None` for anything unrecognised.
    pub fn parse(value: &str) -> Option<Self> {
        let lower = value.trim().to_lowercase();
        let digits = ["gnu++", "c++", "gnu"]
            .iter()
            .find_map(|prefix| lower.strip_prefix(*prefix))
            .unwrap_or(lower.as_str());

        if digits.len() != 2 || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        let short: u16 = digits.parse().ok()?;
        let year = if short >= 98 { 1900 + short } else { 2000 + short };
        Some(Self(year))
    }

    /// Full year of the standard (e.g. 2017).
    pub fn year(&self) -> u16 {
        self.0
    }
}

impl fmt::Display for CppStandard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}", self.0 % 100)
    }
}

impl Serialize for CppStandard {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for CppStandard {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        struct StandardVisitor;

        impl Visitor<'_> for StandardVisitor {
            type Value = CppStandard;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a C++ standard such as 17 or \"gnu17\"")
            }

            fn visit_u64<E: de::Error>(self, v: u64) -> std::result::Result<CppStandard, E> {
                self.visit_str(&v.to_string())
            }

            fn visit_i64<E: de::Error>(self, v: i64) -> std::result::Result<CppStandard, E> {
                self.visit_str(&v.to_string())
            }

            fn visit_str<E: de::Error>(self, v: &str) -> std::result::Result<CppStandard, E> {
                CppStandard::parse(v)
                    .ok_or_else(|| E::custom(format!("unknown C++ standard '{}'", v)))
            }
        }

        deserializer.deserialize_any(StandardVisitor)
    }
}

/// The detected compiler name, version and language standard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CompilerIdentity {
    /// Classified family.
    pub family: CompilerFamily,
    /// Name as supplied, for messages.
    pub name: String,
    /// Parsed version, `None` when absent or malformed.
    pub version: Option<Version>,
    /// Version as supplied, kept even when it failed to parse.
    pub raw_version: Option<String>,
    /// Language standard setting as supplied.
    pub cpp_std: Option<String>,
}

impl CompilerIdentity {
    /// Build an identity from loosely-typed settings.
    ///
    /// The name is required. A missing or malformed version is recorded as
    /// `None` rather than rejected; the gate treats it as unsupported.
    ///
    /// # Errors
    ///
    /// Returns [`GateError::InvalidIdentity`] for an empty name.
    pub fn parse(name: &str, version: Option<&str>) -> Result<Self> {
        let name = name.trim();
        if name.is_empty() {
            return Err(GateError::InvalidIdentity {
                message: "compiler name is empty".to_string(),
            });
        }

        let raw_version = version
            .map(str::trim)
            .filter(|v| !v.is_empty())
            .map(String::from);
        let version = raw_version.as_deref().and_then(|v| v.parse().ok());

        Ok(Self {
            family: CompilerFamily::from_name(name),
            name: name.to_string(),
            version,
            raw_version,
            cpp_std: None,
        })
    }

    /// Attach a language standard setting.
    pub fn with_cpp_std(mut self, cpp_std: Option<&str>) -> Self {
        self.cpp_std = cpp_std
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(String::from);
        self
    }

    /// The version as it should appear in messages.
    pub fn version_label(&self) -> &str {
        self.raw_version.as_deref().unwrap_or("absent")
    }
}

impl fmt::Display for CompilerIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.name, self.version_label())?;
        if let Some(std) = &self.cpp_std {
            write!(f, " (C++ standard {})", std)?;
        }
        Ok(())
    }
}
