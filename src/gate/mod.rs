//! Compiler compatibility gating.
//!
//! This module decides whether a toolchain can build the package before any
//! export or install step runs.
//!
//! # Modules
//!
//! - [`version`] - Numeric, component-wise version values
//! - [`identity`] - Typed compiler identity parsed at the boundary
//! - [`policy`] - The immutable compatibility table
//! - [`checker`] - The gate itself
//!
//! # Example
//!
//! ```
//! use compat_gate::gate::{CompatibilityGate, CompilerIdentity};
//!
//! let gate = CompatibilityGate::default();
//! let gcc9 = CompilerIdentity::parse("gcc", Some("9.0")).unwrap();
//! let gcc8 = CompilerIdentity::parse("gcc", Some("8.9")).unwrap();
//!
//! assert!(gate.is_supported(&gcc9));
//! assert!(gate.check(&gcc8).is_err());
//! ```

pub mod checker;
pub mod identity;
pub mod policy;
pub mod version;

pub use checker::{CompatibilityGate, Rejection};
pub use identity::{CompilerFamily, CompilerIdentity, CppStandard};
pub use policy::{CompatibilityPolicy, CompatibilityRule, DEFAULT_REFERENCE};
pub use version::{extract_version, Version, VersionParseError};
