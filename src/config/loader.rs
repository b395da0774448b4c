//! Configuration file discovery and loading.

use crate::config::schema::LintConfig;
use crate::error::{LintError, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Default configuration file name.
pub const CONFIG_FILE_NAME: &str = ".marklint.yml";

/// Find the configuration file by walking up from `start`.
pub fn find_config(start: &Path) -> Option<PathBuf> {
    let mut current = start.to_path_buf();

    loop {
        let candidate = current.join(CONFIG_FILE_NAME);
        if candidate.is_file() {
            return Some(candidate);
        }

        if !current.pop() {
            return None;
        }
    }
}

/// Load a single config file and parse it into LintConfig.
///
/// # Errors
///
/// Returns `ConfigNotFound` if the file doesn't exist.
/// Returns `ConfigParseError` if the YAML is invalid.
pub fn load_config_file(path: &Path) -> Result<LintConfig> {
    let content = fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            LintError::ConfigNotFound {
                path: path.to_path_buf(),
            }
        } else {
            LintError::Io(e)
        }
    })?;

    parse_config(&content, path)
}

/// Parse YAML content into LintConfig.
///
/// # Arguments
///
/// * `content` - The YAML content to parse
/// * `source_path` - Path for error reporting
pub fn parse_config(content: &str, source_path: &Path) -> Result<LintConfig> {
    if content.trim().is_empty() {
        return Ok(LintConfig::default());
    }
    serde_yaml::from_str(content).map_err(|e| LintError::ConfigParseError {
        path: source_path.to_path_buf(),
        message: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn finds_config_in_parent_directory() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join(CONFIG_FILE_NAME), "rules: {}").unwrap();
        let nested = temp.path().join("docs").join("guide");
        fs::create_dir_all(&nested).unwrap();

        let found = find_config(&nested).unwrap();
        assert_eq!(found, temp.path().join(CONFIG_FILE_NAME));
    }

    #[test]
    fn missing_file_is_config_not_found() {
        let temp = TempDir::new().unwrap();
        let err = load_config_file(&temp.path().join("nope.yml")).unwrap_err();
        assert!(matches!(err, LintError::ConfigNotFound { .. }));
    }

    #[test]
    fn invalid_yaml_is_parse_error() {
        let err = parse_config("rules: [unclosed", Path::new("bad.yml")).unwrap_err();
        match err {
            LintError::ConfigParseError { path, .. } => assert_eq!(path, Path::new("bad.yml")),
            other => panic!("expected parse error, got {:?}", other),
        }
    }

    #[test]
    fn empty_file_is_default_config() {
        let config = parse_config("\n", Path::new(".marklint.yml")).unwrap();
        assert!(config.rules.is_empty());
    }
}
