//! Configuration file discovery and loading.

use std::fs;
use std::path::{Path, PathBuf};

use crate::config::schema::GateConfig;
use crate::error::{GateError, Result};

/// Directory holding project configuration.
pub const CONFIG_DIR: &str = ".compat-gate";

/// Project configuration file name.
pub const CONFIG_FILE: &str = "config.yml";

/// Default config location for a project root.
pub fn project_config_path(project_root: &Path) -> PathBuf {
    project_root.join(CONFIG_DIR).join(CONFIG_FILE)
}

/// Load a single config file.
///
/// # Errors
///
/// Returns `ConfigNotFound` if the file doesn't exist.
/// Returns `ConfigParseError` if the YAML is invalid.
pub fn load_config_file(path: &Path) -> Result<GateConfig> {
    let content = fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            GateError::ConfigNotFound {
                path: path.to_path_buf(),
            }
        } else {
            GateError::Io(e)
        }
    })?;

    parse_config(&content, path)
}

/// Parse YAML content into a [`GateConfig`].
///
/// An empty document yields the default configuration.
pub fn parse_config(content: &str, source_path: &Path) -> Result<GateConfig> {
    if content.trim().is_empty() {
        return Ok(GateConfig::default());
    }

    serde_yaml::from_str(content).map_err(|e| GateError::ConfigParseError {
        path: source_path.to_path_buf(),
        message: e.to_string(),
    })
}

/// Load configuration for a project.
///
/// An explicit path must exist. Without one, `.compat-gate/config.yml`
/// under the project root is used if present, otherwise defaults.
pub fn load_config(project_root: &Path, explicit: Option<&Path>) -> Result<GateConfig> {
    if let Some(path) = explicit {
        tracing::debug!("Loading config from {}", path.display());
        return load_config_file(path);
    }

    let path = project_config_path(project_root);
    if path.is_file() {
        tracing::debug!("Loading project config from {}", path.display());
        load_config_file(&path)
    } else {
        tracing::debug!("No project config at {}, using defaults", path.display());
        Ok(GateConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn setup_project(config: &str) -> TempDir {
        let temp = TempDir::new().unwrap();
        let dir = temp.path().join(CONFIG_DIR);
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join(CONFIG_FILE), config).unwrap();
        temp
    }

    #[test]
    fn missing_project_config_gives_defaults() {
        let temp = TempDir::new().unwrap();
        let config = load_config(temp.path(), None).unwrap();
        assert_eq!(config, GateConfig::default());
    }

    #[test]
    fn loads_project_config() {
        let temp = setup_project("reference: https://example.com/compat\n");
        let config = load_config(temp.path(), None).unwrap();
        assert_eq!(config.reference.as_deref(), Some("https://example.com/compat"));
    }

    #[test]
    fn explicit_path_must_exist() {
        let temp = TempDir::new().unwrap();
        let missing = temp.path().join("nope.yml");
        let err = load_config(temp.path(), Some(&missing)).unwrap_err();
        assert!(matches!(err, GateError::ConfigNotFound { .. }));
    }

    #[test]
    fn explicit_path_overrides_project() {
        let temp = setup_project("reference: project\n");
        let other = temp.path().join("other.yml");
        fs::write(&other, "reference: explicit\n").unwrap();
        let config = load_config(temp.path(), Some(&other)).unwrap();
        assert_eq!(config.reference.as_deref(), Some("explicit"));
    }

    #[test]
    fn invalid_yaml_reports_path() {
        let temp = setup_project("rules: [this is: not valid");
        let err = load_config(temp.path(), None).unwrap_err();
        match err {
            GateError::ConfigParseError { path, .. } => {
                assert!(path.ends_with("config.yml"));
            }
            other => panic!("expected ConfigParseError, got {:?}", other),
        }
    }

    #[test]
    fn unquoted_dotted_version_is_parse_error() {
        let temp = setup_project("rules:\n  - compiler: msvc\n    minimum_version: 19.10\n");
        let err = load_config(temp.path(), None).unwrap_err();
        match err {
            GateError::ConfigParseError { message, .. } => {
                assert!(message.contains("quote it"));
            }
            other => panic!("expected ConfigParseError, got {:?}", other),
        }
    }

    #[test]
    fn empty_file_is_default() {
        let temp = setup_project("");
        assert_eq!(load_config(temp.path(), None).unwrap(), GateConfig::default());
    }
}
