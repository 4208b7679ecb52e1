//! Error types for compat-gate operations.
//!
//! This module defines [`GateError`], the primary error type used throughout
//! the crate, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - [`GateError::Configuration`] is the only error the compatibility gate
//!   itself produces. It is never caught or retried inside the crate.
//! - The remaining variants come from the boundary layers (identity parsing,
//!   toolchain detection, config loading).
//! - Use `anyhow::Error` (via `GateError::Other`) for unexpected errors.

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for compat-gate operations.
#[derive(Debug, Error)]
pub enum GateError {
    /// The build environment does not meet the minimum requirements.
    #[error("{compiler} {version} is not supported: {reason}. See {reference}")]
    Configuration {
        compiler: String,
        /// Offending version, or `absent`.
        version: String,
        reason: String,
        reference: String,
    },

    /// The compiler identity could not be constructed.
    #[error("Invalid compiler identity: {message}")]
    InvalidIdentity { message: String },

    /// The toolchain could not be detected from the environment.
    #[error("Could not detect compiler '{compiler}': {message}")]
    DetectionFailed { compiler: String, message: String },

    /// Configuration file not found at expected location.
    #[error("Configuration not found: {path}")]
    ConfigNotFound { path: PathBuf },

    /// Failed to parse configuration file.
    #[error("Failed to parse config at {path}: {message}")]
    ConfigParseError { path: PathBuf, message: String },

    /// Invalid configuration structure or values.
    #[error("Invalid configuration: {message}")]
    ConfigValidationError { message: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl GateError {
    /// Whether this error is a compatibility rejection.
    pub fn is_configuration(&self) -> bool {
        matches!(self, GateError::Configuration { .. })
    }
}

/// Result type alias for compat-gate operations.
pub type Result<T> = std::result::Result<T, GateError>;
