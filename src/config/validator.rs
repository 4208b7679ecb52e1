//! Configuration validation rules.
//!
//! This module validates configuration for correctness:
//! - Rule minimums must be well-formed versions
//! - A compiler family may appear in at most one rule
//! - The reference, if set, must not be blank
//! - Pinned compiler settings must name a compiler

use std::collections::HashSet;

use crate::config::schema::GateConfig;
use crate::error::{GateError, Result};
use crate::gate::{
    CompatibilityPolicy, CompatibilityRule, CompilerFamily, Version, DEFAULT_REFERENCE,
};

/// Validation error with context.
#[derive(Debug, Clone)]
pub struct ValidationError {
    /// Rule identifier
    pub rule: String,
    /// Human-readable error message
    pub message: String,
}

/// Validate a configuration and return all errors.
///
/// Collects every problem rather than stopping at the first one.
pub fn validate_config(config: &GateConfig) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    errors.extend(validate_rules(config));

    if let Some(reference) = &config.reference {
        if reference.trim().is_empty() {
            errors.push(ValidationError {
                rule: "empty-reference".to_string(),
                message: "'reference' must not be empty".to_string(),
            });
        }
    }

    if let Some(compiler) = &config.compiler {
        if compiler.name.trim().is_empty() {
            errors.push(ValidationError {
                rule: "missing-compiler-name".to_string(),
                message: "'compiler.name' is required when 'compiler' is set".to_string(),
            });
        }
    }

    errors
}

fn validate_rules(config: &GateConfig) -> Vec<ValidationError> {
    let mut errors = Vec::new();
    let Some(rules) = &config.rules else {
        return errors;
    };

    let mut seen = HashSet::new();
    for rule in rules {
        if rule.compiler.trim().is_empty() {
            errors.push(ValidationError {
                rule: "missing-rule-compiler".to_string(),
                message: "Every rule needs a 'compiler'".to_string(),
            });
            continue;
        }

        if let Err(e) = rule.minimum_version.parse::<Version>() {
            errors.push(ValidationError {
                rule: "invalid-minimum-version".to_string(),
                message: format!("Rule for '{}': {}", rule.compiler, e),
            });
        }

        let family = CompilerFamily::from_name(&rule.compiler);
        if !seen.insert(family.clone()) {
            errors.push(ValidationError {
                rule: "duplicate-rule".to_string(),
                message: format!("Compiler '{}' has more than one rule", family),
            });
        }
    }

    errors
}

/// Validate a configuration, failing on the first batch of errors.
pub fn validate(config: &GateConfig) -> Result<()> {
    let errors = validate_config(config);

    if errors.is_empty() {
        Ok(())
    } else {
        let messages: Vec<_> = errors.iter().map(|e| e.message.clone()).collect();
        Err(GateError::ConfigValidationError {
            message: messages.join("; "),
        })
    }
}

/// Build the effective policy from a configuration.
///
/// Missing sections fall back to the built-in defaults.
pub fn build_policy(config: &GateConfig) -> Result<CompatibilityPolicy> {
    validate(config)?;

    let defaults = CompatibilityPolicy::default();
    let rules = match &config.rules {
        Some(rules) => rules
            .iter()
            .map(|rule| {
                let minimum = rule.minimum_version.parse::<Version>().map_err(|e| {
                    GateError::ConfigValidationError {
                        message: e.to_string(),
                    }
                })?;
                Ok(CompatibilityRule::new(
                    CompilerFamily::from_name(&rule.compiler),
                    minimum,
                ))
            })
            .collect::<Result<Vec<_>>>()?,
        None => defaults.rules().to_vec(),
    };

    CompatibilityPolicy::new(
        rules,
        config.reference.as_deref().unwrap_or(DEFAULT_REFERENCE),
        config.minimum_cpp_std.or(defaults.minimum_cpp_std()),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::schema::{CompilerSettings, RuleConfig};

    fn rule(compiler: &str, min: &str) -> RuleConfig {
        RuleConfig {
            compiler: compiler.to_string(),
            minimum_version: min.to_string(),
        }
    }

    #[test]
    fn default_config_is_valid() {
        assert!(validate_config(&GateConfig::default()).is_empty());
    }

    #[test]
    fn reports_bad_minimum_version() {
        let config = GateConfig {
            rules: Some(vec![rule("gcc", "nine")]),
            ..Default::default()
        };
        let errors = validate_config(&config);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].rule, "invalid-minimum-version");
        assert!(errors[0].message.contains("gcc"));
    }

    #[test]
    fn reports_duplicate_family_across_aliases() {
        let config = GateConfig {
            rules: Some(vec![rule("gcc", "9"), rule("GCC", "10")]),
            ..Default::default()
        };
        let errors = validate_config(&config);
        assert!(errors.iter().any(|e| e.rule == "duplicate-rule"));
    }

    #[test]
    fn collects_multiple_errors() {
        let config = GateConfig {
            reference: Some(" ".to_string()),
            rules: Some(vec![rule("", "9"), rule("clang", "5.x")]),
            compiler: Some(CompilerSettings::default()),
            ..Default::default()
        };
        let errors = validate_config(&config);
        assert_eq!(errors.len(), 4);

        let err = validate(&config).unwrap_err();
        assert!(matches!(err, GateError::ConfigValidationError { .. }));
    }

    #[test]
    fn build_policy_uses_defaults() {
        let policy = build_policy(&GateConfig::default()).unwrap();
        assert_eq!(policy, CompatibilityPolicy::default());
    }

    #[test]
    fn build_policy_replaces_rules() {
        let config = GateConfig {
            reference: Some("https://example.com/compat".to_string()),
            rules: Some(vec![rule("intel", "19.1")]),
            ..Default::default()
        };
        let policy = build_policy(&config).unwrap();
        assert_eq!(policy.rules().len(), 1);
        assert_eq!(policy.rules()[0].compiler, CompilerFamily::Intel);
        assert_eq!(policy.reference(), "https://example.com/compat");
        assert_eq!(policy.minimum_cpp_std().map(|s| s.year()), Some(2017));
    }
}
