//! Configuration loading, parsing, and validation for compat-gate.
//!
//! - Schema definitions in [`schema`]
//! - File discovery and loading in [`loader`]
//! - Validation and policy construction in [`validator`]
//!
//! # Example
//!
//! ```
//! use compat_gate::config::{build_policy, load_config};
//! use tempfile::TempDir;
//! use std::fs;
//!
//! let temp = TempDir::new().unwrap();
//! let dir = temp.path().join(".compat-gate");
//! fs::create_dir_all(&dir).unwrap();
//! fs::write(
//!     dir.join("config.yml"),
//!     "rules:\n  - compiler: gcc\n    minimum_version: \"10\"\n",
//! )
//! .unwrap();
//!
//! let config = load_config(temp.path(), None).unwrap();
//! let policy = build_policy(&config).unwrap();
//! assert_eq!(policy.rules().len(), 1);
//! ```
//!
//! # Configuration File Location
//!
//! `--config <path>` if given, otherwise `.compat-gate/config.yml` under the
//! project root. Without either, the built-in policy applies.

pub mod loader;
pub mod schema;
pub mod validator;

pub use loader::{
    load_config, load_config_file, parse_config, project_config_path, CONFIG_DIR, CONFIG_FILE,
};
pub use schema::{CompilerSettings, GateConfig, RuleConfig};
pub use validator::{build_policy, validate, validate_config, ValidationError};
