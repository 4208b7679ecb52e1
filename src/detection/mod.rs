//! Toolchain detection.
//!
//! Resolves a [`CompilerIdentity`](crate::gate::CompilerIdentity) from the
//! environment before the gate runs. Sources, first match wins:
//!
//! 1. Explicit settings (CLI flags or `COMPAT_GATE_*` variables)
//! 2. The `compiler:` section of the config file
//! 3. Probing `$CXX`, `$CC` or `c++` with `--version`

pub mod toolchain;

pub use toolchain::{
    classify_banner, compiler_command, identity_from_banner, probe_compiler, resolve_identity,
    resolve_identity_with, IdentitySource, ResolvedIdentity,
};
