//! compat-gate - Compiler compatibility gate for header-only package installs.
//!
//! A host packaging or build tool runs the gate before exporting or
//! installing the package. The gate compares the active compiler against an
//! immutable policy table and refuses unsupported toolchains with a
//! [`GateError::Configuration`] error.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`config`] - Configuration loading, parsing, and validation
//! - [`detection`] - Compiler identity resolution and probing
//! - [`error`] - Error types and result aliases
//! - [`gate`] - Versions, identities, the policy table, and the gate
//! - [`ui`] - Terminal output
//!
//! # Example
//!
//! ```
//! use compat_gate::gate::{CompatibilityGate, CompilerIdentity};
//! use compat_gate::GateError;
//!
//! let gate = CompatibilityGate::default();
//! let intel = CompilerIdentity::parse("intel", Some("19.0")).unwrap();
//!
//! match gate.check(&intel) {
//!     Err(GateError::Configuration { compiler, .. }) => assert_eq!(compiler, "intel"),
//!     other => panic!("unexpected: {:?}", other),
//! }
//! ```

pub mod cli;
pub mod config;
pub mod detection;
pub mod error;
pub mod gate;
pub mod ui;

pub use error::{GateError, Result};
