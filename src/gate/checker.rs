//! The compatibility gate.
//!
//! [`CompatibilityGate`] is a pure decision function over a
//! [`CompilerIdentity`]. It performs no I/O and holds no mutable state, so a
//! single gate can be shared across threads without locking.

use super::identity::{CompilerIdentity, CppStandard};
use super::policy::CompatibilityPolicy;
use crate::error::{GateError, Result};

/// Why an identity was rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rejection {
    /// The family has no rule in the policy.
    UnknownCompiler,
    /// The version was absent or could not be parsed.
    UnreadableVersion,
    /// The version is below the family's minimum.
    VersionTooOld { minimum: String },
    /// The language standard could not be parsed.
    UnreadableStandard,
    /// The language standard is below the policy floor.
    StandardTooOld { minimum: CppStandard },
}

impl Rejection {
    fn describe(&self, identity: &CompilerIdentity) -> String {
        match self {
            Rejection::UnknownCompiler => {
                format!("compiler '{}' is not in the compatibility table", identity.name)
            }
            Rejection::UnreadableVersion => "compiler version is missing or malformed".to_string(),
            Rejection::VersionTooOld { minimum } => {
                format!("requires {} >= {}", identity.family, minimum)
            }
            Rejection::UnreadableStandard => format!(
                "C++ standard '{}' is not recognised",
                identity.cpp_std.as_deref().unwrap_or_default()
            ),
            Rejection::StandardTooOld { minimum } => format!(
                "requires C++{} or later, got '{}'",
                minimum,
                identity.cpp_std.as_deref().unwrap_or_default()
            ),
        }
    }
}

/// Decides whether a compiler identity may build the package.
#[derive(Debug, Clone, Default)]
pub struct CompatibilityGate {
    policy: CompatibilityPolicy,
}

impl CompatibilityGate {
    /// Create a gate over a policy.
    pub fn new(policy: CompatibilityPolicy) -> Self {
        Self { policy }
    }

    /// The policy this gate enforces.
    pub fn policy(&self) -> &CompatibilityPolicy {
        &self.policy
    }

    /// Whether `identity` is supported.
    pub fn is_supported(&self, identity: &CompilerIdentity) -> bool {
        self.evaluate(identity).is_none()
    }

    /// Check `identity`, failing with [`GateError::Configuration`] if it is
    /// not supported.
    pub fn check(&self, identity: &CompilerIdentity) -> Result<()> {
        match self.evaluate(identity) {
            None => Ok(()),
            Some(rejection) => Err(GateError::Configuration {
                compiler: identity.name.clone(),
                version: identity.version_label().to_string(),
                reason: rejection.describe(identity),
                reference: self.policy.reference().to_string(),
            }),
        }
    }

    /// Find the first reason to reject `identity`, if any.
    ///
    /// Every path that cannot positively confirm support returns a
    /// rejection.
    pub fn evaluate(&self, identity: &CompilerIdentity) -> Option<Rejection> {
        let Some(rule) = self.policy.rule_for(&identity.family) else {
            return Some(Rejection::UnknownCompiler);
        };

        let Some(version) = &identity.version else {
            return Some(Rejection::UnreadableVersion);
        };

        if !rule.admits(version) {
            return Some(Rejection::VersionTooOld {
                minimum: rule.minimum_version.to_string(),
            });
        }

        if let (Some(minimum), Some(raw)) = (self.policy.minimum_cpp_std(), &identity.cpp_std) {
            match CppStandard::parse(raw) {
                None => return Some(Rejection::UnreadableStandard),
                Some(std) if std < minimum => return Some(Rejection::StandardTooOld { minimum }),
                Some(_) => {}
            }
        }

        None
    }
}
