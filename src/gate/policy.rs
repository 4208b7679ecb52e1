//! Compatibility policy table.
//!
//! A [`CompatibilityPolicy`] is an immutable list of [`CompatibilityRule`]s,
//! one per compiler family, plus the documentation reference quoted in
//! rejection messages. It is built once (from defaults or config) and only
//! read afterwards.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use super::identity::{CompilerFamily, CppStandard};
use super::version::Version;
use crate::error::{GateError, Result};

/// Where compiler compatibility is documented.
pub const DEFAULT_REFERENCE: &str = "https://github.com/Neargye/magic_enum#compiler-compatibility";

/// Default minimum versions, as `(family, minimum)` pairs.
const DEFAULT_RULES: &[(&str, &str)] = &[
    ("gcc", "9"),
    ("clang", "5"),
    ("apple-clang", "10"),
    ("msvc", "19.10"),
    ("Visual Studio", "15"),
];

/// Default language standard floor.
const DEFAULT_MINIMUM_CPP_STD: &str = "17";

/// One policy entry: a compiler family and its minimum supported version.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompatibilityRule {
    /// Compiler family this rule applies to.
    pub compiler: CompilerFamily,
    /// Lowest supported version, inclusive.
    pub minimum_version: Version,
}

impl CompatibilityRule {
    /// Create a rule.
    pub fn new(compiler: CompilerFamily, minimum_version: Version) -> Self {
        Self {
            compiler,
            minimum_version,
        }
    }

    /// Whether `version` meets this rule. The bound is inclusive.
    pub fn admits(&self, version: &Version) -> bool {
        *version >= self.minimum_version
    }
}

/// The full compatibility policy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CompatibilityPolicy {
    rules: Vec<CompatibilityRule>,
    reference: String,
    minimum_cpp_std: Option<CppStandard>,
}

impl CompatibilityPolicy {
    /// Build a policy, validating it.
    ///
    /// # Errors
    ///
    /// Returns [`GateError::ConfigValidationError`] if a family appears more
    /// than once or the reference is empty.
    pub fn new(
        rules: Vec<CompatibilityRule>,
        reference: impl Into<String>,
        minimum_cpp_std: Option<CppStandard>,
    ) -> Result<Self> {
        let reference = reference.into();
        if reference.trim().is_empty() {
            return Err(GateError::ConfigValidationError {
                message: "policy reference must not be empty".to_string(),
            });
        }

        let mut seen = HashSet::new();
        for rule in &rules {
            if !seen.insert(&rule.compiler) {
                return Err(GateError::ConfigValidationError {
                    message: format!("duplicate rule for compiler '{}'", rule.compiler),
                });
            }
        }

        Ok(Self {
            rules,
            reference,
            minimum_cpp_std,
        })
    }

    /// The rules in table order.
    pub fn rules(&self) -> &[CompatibilityRule] {
        &self.rules
    }

    /// The documentation reference.
    pub fn reference(&self) -> &str {
        &self.reference
    }

    /// The language standard floor, if any.
    pub fn minimum_cpp_std(&self) -> Option<CppStandard> {
        self.minimum_cpp_std
    }

    /// Find the rule for a family.
    pub fn rule_for(&self, family: &CompilerFamily) -> Option<&CompatibilityRule> {
        self.rules.iter().find(|rule| &rule.compiler == family)
    }
}

impl Default for CompatibilityPolicy {
    fn default() -> Self {
        let rules = DEFAULT_RULES
            .iter()
            .filter_map(|(name, minimum)| {
                minimum
                    .parse::<Version>()
                    .ok()
                    .map(|v| CompatibilityRule::new(CompilerFamily::from_name(name), v))
            })
            .collect();

        Self {
            rules,
            reference: DEFAULT_REFERENCE.to_string(),
            minimum_cpp_std: CppStandard::parse(DEFAULT_MINIMUM_CPP_STD),
        }
    }
}
