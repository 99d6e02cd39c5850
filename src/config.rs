//! # Configuration Module
//!
//! This module loads and validates the JSON rule configuration: an ordered
//! array of rules, each pairing include/exclude glob patterns with an
//! optional license text reference.
//!
//! Rule order carries no precedence between rules; every rule is evaluated
//! independently, and a file matched by any rule's include/exclude
//! combination counts as covered.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::verbose_log;

/// A single license rule.
///
/// `include` selects the files the rule applies to, `exclude` removes files
/// from that selection, and `license` points at the text every selected file
/// must contain. A rule without a license reference performs no content
/// check but still counts toward coverage.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct LicenseRule {
  /// Glob patterns selecting the files this rule applies to.
  pub include: Vec<String>,

  /// Glob patterns removing files from the rule's selection.
  #[serde(default)]
  pub exclude: Vec<String>,

  /// Path to the license text file, absolute or relative to the working
  /// root.
  #[serde(default)]
  pub license: Option<PathBuf>,
}

impl LicenseRule {
  /// Resolve the rule's license reference against the working root.
  ///
  /// Returns `None` for rules without a license reference.
  pub fn license_path(&self, root: &Path) -> Option<PathBuf> {
    self.license.as_ref().map(|license| {
      if license.is_absolute() {
        license.clone()
      } else {
        root.join(license)
      }
    })
  }
}

/// Error type for configuration operations.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
  /// The config file could not be read.
  #[error("Failed to read config file '{path}': {source}")]
  Read { path: PathBuf, source: std::io::Error },

  /// The config file contains invalid JSON or violates the rule schema.
  #[error("Failed to parse config file '{path}': {source}")]
  Parse {
    path: PathBuf,
    source: serde_json::Error,
  },

  /// A rule is structurally valid JSON but semantically invalid.
  #[error("Invalid rule #{index} in '{path}': {message}")]
  InvalidRule {
    path: PathBuf,
    index: usize,
    message: String,
  },
}

/// Load the rule configuration from a file.
///
/// # Arguments
///
/// * `path` - Path to the configuration file
///
/// # Returns
///
/// The ordered list of rules, or an error if the file cannot be read,
/// parsed, or validated. Any error here is fatal; no check runs against a
/// broken configuration.
pub fn load_rules(path: &Path) -> Result<Vec<LicenseRule>, ConfigError> {
  verbose_log!("Loading rule configuration from: {}", path.display());

  let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
    path: path.to_path_buf(),
    source,
  })?;

  let rules: Vec<LicenseRule> = serde_json::from_str(&content).map_err(|source| ConfigError::Parse {
    path: path.to_path_buf(),
    source,
  })?;

  validate_rules(&rules, path)?;

  verbose_log!("Loaded {} rule(s)", rules.len());

  Ok(rules)
}

/// Validate the rule list.
///
/// Checks that every rule has a non-empty `include` list; serde already
/// rejects missing fields and wrong types during deserialization.
fn validate_rules(rules: &[LicenseRule], path: &Path) -> Result<(), ConfigError> {
  for (index, rule) in rules.iter().enumerate() {
    if rule.include.is_empty() {
      return Err(ConfigError::InvalidRule {
        path: path.to_path_buf(),
        index,
        message: "include must not be empty".to_string(),
      });
    }
  }

  Ok(())
}

#[cfg(test)]
mod tests {
  use tempfile::TempDir;

  use super::*;

  #[test]
  fn test_parse_valid_config() {
    let config_content = concat!(
      "[\n",
      "  { \"include\": [\"**/*.rs\"], \"exclude\": [\"**/vendor/**\"], \"license\": \"LICENSE.txt\" },\n",
      "  { \"include\": [\"**/*.py\"] }\n",
      "]\n",
    );

    let rules: Vec<LicenseRule> = serde_json::from_str(config_content).expect("valid config should parse");

    assert_eq!(rules.len(), 2);
    assert_eq!(rules[0].include, vec!["**/*.rs".to_string()]);
    assert_eq!(rules[0].exclude, vec!["**/vendor/**".to_string()]);
    assert_eq!(rules[0].license, Some(PathBuf::from("LICENSE.txt")));

    assert!(rules[1].exclude.is_empty());
    assert!(rules[1].license.is_none());
  }

  #[test]
  fn test_parse_missing_include_is_error() {
    let config_content = r#"[{ "license": "LICENSE.txt" }]"#;
    let result: Result<Vec<LicenseRule>, _> = serde_json::from_str(config_content);
    assert!(result.is_err());
  }

  #[test]
  fn test_parse_wrong_type_is_error() {
    let config_content = r#"[{ "include": "**/*.rs" }]"#;
    let result: Result<Vec<LicenseRule>, _> = serde_json::from_str(config_content);
    assert!(result.is_err());
  }

  #[test]
  fn test_validate_empty_include() {
    let temp_dir = TempDir::new().expect("create temp dir");
    let config_path = temp_dir.path().join("licenses.json");
    std::fs::write(&config_path, r#"[{ "include": [] }]"#).expect("write config");

    let result = load_rules(&config_path);
    assert!(result.is_err());
    let err = result.expect_err("should fail");
    assert!(matches!(err, ConfigError::InvalidRule { index: 0, .. }));
  }

  #[test]
  fn test_load_rules_from_file() {
    let temp_dir = TempDir::new().expect("create temp dir");
    let config_path = temp_dir.path().join("licenses.json");
    std::fs::write(&config_path, r#"[{ "include": ["src/**"], "license": "HEADER" }]"#).expect("write config");

    let rules = load_rules(&config_path).expect("load should succeed");
    assert_eq!(rules.len(), 1);
    assert_eq!(rules[0].include, vec!["src/**".to_string()]);
  }

  #[test]
  fn test_load_rules_file_not_found() {
    let result = load_rules(Path::new("/nonexistent/path/licenses.json"));
    assert!(result.is_err());
    assert!(matches!(result.expect_err("should fail"), ConfigError::Read { .. }));
  }

  #[test]
  fn test_load_rules_malformed_json() {
    let temp_dir = TempDir::new().expect("create temp dir");
    let config_path = temp_dir.path().join("licenses.json");
    std::fs::write(&config_path, "[{ include: oops").expect("write config");

    let result = load_rules(&config_path);
    assert!(result.is_err());
    assert!(matches!(result.expect_err("should fail"), ConfigError::Parse { .. }));
  }

  #[test]
  fn test_license_path_resolution() {
    let rule = LicenseRule {
      include: vec!["**".to_string()],
      exclude: Vec::new(),
      license: Some(PathBuf::from("LICENSE.txt")),
    };
    assert_eq!(
      rule.license_path(Path::new("/workspace")),
      Some(PathBuf::from("/workspace/LICENSE.txt"))
    );

    let absolute = LicenseRule {
      license: Some(PathBuf::from("/etc/LICENSE.txt")),
      ..rule.clone()
    };
    assert_eq!(
      absolute.license_path(Path::new("/workspace")),
      Some(PathBuf::from("/etc/LICENSE.txt"))
    );

    let unlicensed = LicenseRule { license: None, ..rule };
    assert_eq!(unlicensed.license_path(Path::new("/workspace")), None);
  }
}
