//! # Coverage Resolver
//!
//! This module computes which files no rule covers. A file is covered when
//! any rule's include/exclude combination matches it; whether the rule
//! carries a license reference is irrelevant here.

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use anyhow::Result;
use tracing::debug;

use crate::config::LicenseRule;
use crate::enumerate::enumerate;

/// Computes the files in `all_files` that belong to no rule's matched set.
///
/// # Parameters
///
/// * `root` - Working root the rule patterns are resolved against
/// * `all_files` - The full file enumeration, already narrowed by any path
///   filter
/// * `rules` - The configured rules, with or without license references
///
/// # Returns
///
/// The sorted set difference `all_files - covered`, or an error if a rule
/// pattern is invalid.
pub fn uncovered_files(
  root: &Path,
  all_files: &BTreeSet<PathBuf>,
  rules: &[LicenseRule],
) -> Result<BTreeSet<PathBuf>> {
  let mut covered: BTreeSet<PathBuf> = BTreeSet::new();
  for rule in rules {
    covered.extend(enumerate(root, &rule.include, &rule.exclude)?);
  }

  let uncovered: BTreeSet<PathBuf> = all_files.difference(&covered).cloned().collect();
  debug!("{} of {} file(s) are uncovered", uncovered.len(), all_files.len());

  Ok(uncovered)
}

#[cfg(test)]
mod tests {
  use std::fs;

  use tempfile::TempDir;

  use super::*;

  fn touch(root: &Path, relative: &str) {
    let path = root.join(relative);
    if let Some(parent) = path.parent() {
      fs::create_dir_all(parent).expect("create parent dirs");
    }
    fs::write(path, "content").expect("write file");
  }

  fn rule(include: &[&str], exclude: &[&str]) -> LicenseRule {
    LicenseRule {
      include: include.iter().map(|p| p.to_string()).collect(),
      exclude: exclude.iter().map(|p| p.to_string()).collect(),
      license: None,
    }
  }

  fn all_files(root: &Path) -> BTreeSet<PathBuf> {
    enumerate(root, &["**".to_string()], &[]).expect("enumerate all")
  }

  #[test]
  fn test_empty_rules_leave_everything_uncovered() {
    let temp_dir = TempDir::new().expect("create temp dir");
    touch(temp_dir.path(), "a.py");
    touch(temp_dir.path(), "src/b.rs");

    let all = all_files(temp_dir.path());
    let uncovered = uncovered_files(temp_dir.path(), &all, &[]).expect("resolve");

    assert_eq!(uncovered, all);
  }

  #[test]
  fn test_uncovered_is_subset_of_all_files() {
    let temp_dir = TempDir::new().expect("create temp dir");
    touch(temp_dir.path(), "a.py");
    touch(temp_dir.path(), "b.rs");
    touch(temp_dir.path(), "vendor/c.py");

    let all = all_files(temp_dir.path());
    let rules = vec![rule(&["**/*.py"], &["**/vendor/**"])];
    let uncovered = uncovered_files(temp_dir.path(), &all, &rules).expect("resolve");

    assert!(uncovered.is_subset(&all));
    assert!(uncovered.contains(&temp_dir.path().join("b.rs")));
    assert!(uncovered.contains(&temp_dir.path().join("vendor/c.py")));
    assert!(!uncovered.contains(&temp_dir.path().join("a.py")));
  }

  #[test]
  fn test_rule_without_license_still_covers() {
    let temp_dir = TempDir::new().expect("create temp dir");
    touch(temp_dir.path(), "a.py");

    let all = all_files(temp_dir.path());
    let rules = vec![rule(&["**/*.py"], &[])];
    let uncovered = uncovered_files(temp_dir.path(), &all, &rules).expect("resolve");

    assert!(uncovered.is_empty());
  }

  #[test]
  fn test_any_rule_covers_regardless_of_order() {
    let temp_dir = TempDir::new().expect("create temp dir");
    touch(temp_dir.path(), "a.py");
    touch(temp_dir.path(), "b.rs");

    let all = all_files(temp_dir.path());
    let rules = vec![rule(&["**/*.rs"], &[]), rule(&["**/*.py"], &[])];
    let uncovered = uncovered_files(temp_dir.path(), &all, &rules).expect("resolve");

    assert!(uncovered.is_empty());
  }
}
