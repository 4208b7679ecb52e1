//! Configuration schema definitions for compat-gate.
//!
//! This module contains the struct definitions that map to the
//! `.compat-gate/config.yml` file format.

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

use crate::gate::CppStandard;

/// Root configuration structure.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GateConfig {
    /// Documentation reference quoted in rejection messages
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,

    /// Lowest accepted C++ standard (e.g. `17`)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub minimum_cpp_std: Option<CppStandard>,

    /// Replacement compatibility table; the built-in table is used when absent
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rules: Option<Vec<RuleConfig>>,

    /// Pinned compiler settings, used instead of probing the toolchain
    #[serde(skip_serializing_if = "Option::is_none")]
    pub compiler: Option<CompilerSettings>,
}

/// A compatibility rule as written in the config file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleConfig {
    /// Compiler family name
    pub compiler: String,

    /// Minimum supported version (quote it: `"19.10"`)
    #[serde(deserialize_with = "string_or_number")]
    pub minimum_version: String,
}

/// Compiler settings as a host tool would report them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CompilerSettings {
    /// Compiler family name
    pub name: String,

    /// Compiler version
    #[serde(
        deserialize_with = "optional_string_or_number",
        skip_serializing_if = "Option::is_none"
    )]
    pub version: Option<String>,

    /// C++ standard setting (e.g. `17`, `gnu17`)
    #[serde(
        deserialize_with = "optional_string_or_number",
        skip_serializing_if = "Option::is_none"
    )]
    pub cpp_std: Option<String>,
}

/// Version-like scalar that YAML may have typed as a number.
///
/// Integers convert losslessly. Floats are rejected: an unquoted `19.10`
/// arrives as `19.1` and would loosen the policy.
struct Scalar(String);

impl<'de> Deserialize<'de> for Scalar {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct ScalarVisitor;

        impl Visitor<'_> for ScalarVisitor {
            type Value = Scalar;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a quoted version string or an integer")
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<Scalar, E> {
                Ok(Scalar(v.to_string()))
            }

            fn visit_string<E: de::Error>(self, v: String) -> Result<Scalar, E> {
                Ok(Scalar(v))
            }

            fn visit_u64<E: de::Error>(self, v: u64) -> Result<Scalar, E> {
                Ok(Scalar(v.to_string()))
            }

            fn visit_i64<E: de::Error>(self, v: i64) -> Result<Scalar, E> {
                Ok(Scalar(v.to_string()))
            }

            fn visit_f64<E: de::Error>(self, v: f64) -> Result<Scalar, E> {
                Err(E::custom(format!(
                    "version was read as the number {} and may have lost trailing zeros; quote it as a string",
                    v
                )))
            }
        }

        deserializer.deserialize_any(ScalarVisitor)
    }
}

fn string_or_number<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Scalar::deserialize(deserializer).map(|s| s.0)
}

fn optional_string_or_number<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<String>, D::Error> {
    Option::<Scalar>::deserialize(deserializer).map(|s| s.map(|s| s.0))
}
