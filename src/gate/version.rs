//! Structured compiler versions.
//!
//! Versions are compared numerically component by component, never as
//! strings, so `10.0` orders after `9.0`. Missing trailing components count
//! as zero, which makes `9`, `9.0` and `9.0.0` equal.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// A dotted numeric version such as `9`, `19.10` or `11.4.0`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Version {
    components: Vec<u64>,
}

/// Why a version string was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid version '{input}': {reason}")]
pub struct VersionParseError {
    /// The rejected input.
    pub input: String,
    /// What was wrong with it.
    pub reason: String,
}

impl Version {
    /// The numeric components as parsed.
    pub fn components(&self) -> &[u64] {
        &self.components
    }

    /// The leading component.
    pub fn major(&self) -> u64 {
        self.components[0]
    }
}

impl FromStr for Version {
    type Err = VersionParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let reject = |reason: &str| VersionParseError {
            input: s.to_string(),
            reason: reason.to_string(),
        };

        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(reject("empty version"));
        }

        let mut components = Vec::new();
        for part in trimmed.split('.') {
            if part.is_empty() {
                return Err(reject("empty component"));
            }
            if !part.bytes().all(|b| b.is_ascii_digit()) {
                return Err(reject("components must be decimal integers"));
            }
            let value = part
                .parse::<u64>()
                .map_err(|_| reject("component out of range"))?;
            components.push(value);
        }

        Ok(Self { components })
    }
}

impl TryFrom<String> for Version {
    type Error = VersionParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Version> for String {
    fn from(version: Version) -> Self {
        version.to_string()
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self.components.iter().map(|c| c.to_string()).collect();
        write!(f, "{}", parts.join("."))
    }
}

impl Ord for Version {
    fn cmp(&self, other: &Self) -> Ordering {
        let len = self.components.len().max(other.components.len());
        for i in 0..len {
            let a = self.components.get(i).copied().unwrap_or(0);
            let b = other.components.get(i).copied().unwrap_or(0);
            match a.cmp(&b) {
                Ordering::Equal => continue,
                unequal => return unequal,
            }
        }
        Ordering::Equal
    }
}

impl PartialOrd for Version {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Version {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Version {}

/// Extract the first version number from free-form tool output.
///
/// Prefers a dotted version (`11.4.0`), then falls back to a bare number
/// following the word `version`.
pub fn extract_version(output: &str) -> Option<Version> {
    let patterns = [r"\b(\d+(?:\.\d+)+)\b", r"(?i)version\s+(\d+)\b"];

    for pattern in &patterns {
        if let Ok(re) = regex::Regex::new(pattern) {
            if let Some(m) = re.captures(output).and_then(|caps| caps.get(1)) {
                if let Ok(version) = m.as_str().parse() {
                    return Some(version);
                }
            }
        }
    }

    None
}
