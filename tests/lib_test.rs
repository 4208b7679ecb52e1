//! Library integration tests.

use compat_gate::config::{build_policy, parse_config};
use compat_gate::gate::{CompatibilityGate, CompilerIdentity, Version};
use compat_gate::GateError;
use std::path::Path;
use std::sync::Arc;
use std::thread;

fn identity(name: &str, version: Option<&str>) -> CompilerIdentity {
    CompilerIdentity::parse(name, version).unwrap()
}

#[test]
fn scenarios_from_the_policy_table() {
    let gate = CompatibilityGate::default();
    assert!(gate.is_supported(&identity("gcc", Some("9.0"))));
    assert!(!gate.is_supported(&identity("gcc", Some("8.9"))));
    assert!(gate.is_supported(&identity("clang", Some("5.0"))));

    let intel = identity("intel", Some("19.0"));
    assert!(!gate.is_supported(&intel));
    assert!(matches!(
        gate.check(&intel),
        Err(GateError::Configuration { .. })
    ));
}

#[test]
fn versions_compare_numerically() {
    let ten: Version = "10.0".parse().unwrap();
    let nine: Version = "9.0".parse().unwrap();
    assert!(ten > nine);
}

#[test]
fn result_type_alias_is_public() {
    fn test_fn() -> compat_gate::Result<()> {
        Ok(())
    }
    assert!(test_fn().is_ok());
}

#[test]
fn policy_from_yaml_drives_gate() {
    let yaml = r#"
minimum_cpp_std: 20
rules:
  - compiler: clang
    minimum_version: "16"
"#;
    let config = parse_config(yaml, Path::new("inline.yml")).unwrap();
    let gate = CompatibilityGate::new(build_policy(&config).unwrap());

    assert!(gate.is_supported(&identity("clang", Some("16.0.6")).with_cpp_std(Some("c++20"))));
    assert!(!gate.is_supported(&identity("clang", Some("16")).with_cpp_std(Some("17"))));
    assert!(!gate.is_supported(&identity("clang", Some("15.0.7"))));
}

#[test]
fn gate_is_shareable_across_threads() {
    let gate = Arc::new(CompatibilityGate::default());
    let handles: Vec<_> = ["8", "9", "10", "11", "12"]
        .into_iter()
        .map(|v| {
            let gate = Arc::clone(&gate);
            thread::spawn(move || gate.is_supported(&identity("gcc", Some(v))))
        })
        .collect();

    let results: Vec<bool> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    assert_eq!(results, vec![false, true, true, true, true]);
}

#[test]
fn cli_types_are_public() {
    use clap::Parser;
    use compat_gate::cli::{Cli, Commands};

    let cli = Cli::parse_from(["compat-gate", "policy", "--json"]);
    if let Some(Commands::Policy(args)) = cli.command {
        assert!(args.json);
    } else {
        panic!("Expected Policy command");
    }
}
