//! # File Enumerator
//!
//! This module expands include glob patterns rooted at a working directory
//! into a deduplicated, sorted set of absolute file paths, then removes
//! every path matched by an exclude pattern.
//!
//! Include patterns use recursive `**` semantics and are expanded
//! independently, with the results unioned. Exclude patterns are shell globs
//! tested against the root-relative path of each candidate; bare names and
//! directory patterns also match anywhere in the path structure.

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use globset::{Glob, GlobSet, GlobSetBuilder};
use tracing::debug;

use crate::verbose_log;

/// Glob expansion options: wildcards do not match a leading dot, so `**`
/// leaves hidden files and directories alone unless a pattern names them
/// explicitly.
const MATCH_OPTIONS: glob::MatchOptions = glob::MatchOptions {
  case_sensitive: true,
  require_literal_separator: false,
  require_literal_leading_dot: true,
};

/// Expands include patterns against `root` and removes excluded paths.
///
/// # Parameters
///
/// * `root` - Working root the patterns are resolved against
/// * `includes` - Include glob patterns; an empty list yields an empty set
/// * `excludes` - Exclude glob patterns tested against root-relative paths
///
/// # Returns
///
/// A sorted set of absolute paths to regular files, or an error if a
/// pattern is invalid.
pub fn enumerate(root: &Path, includes: &[String], excludes: &[String]) -> Result<BTreeSet<PathBuf>> {
  if includes.is_empty() {
    return Ok(BTreeSet::new());
  }

  let root = absolutize(root)?;
  let exclude_set = build_exclude_set(excludes)?;

  let mut files = BTreeSet::new();
  for pattern in includes {
    let rooted = rooted_pattern(&root, pattern);
    let entries =
      glob::glob_with(&rooted, MATCH_OPTIONS).with_context(|| format!("Invalid include pattern: {}", pattern))?;

    for entry in entries {
      let path = match entry {
        Ok(path) => path,
        Err(e) => {
          verbose_log!("Skipping unreadable path: {}", e);
          continue;
        }
      };

      if !path.is_file() {
        continue;
      }
      if is_excluded(&exclude_set, &root, &path) {
        continue;
      }

      files.insert(path);
    }
  }

  debug!("Enumerated {} file(s) under {}", files.len(), root.display());

  Ok(files)
}

/// Converts a potentially relative path to an absolute path, dropping no-op
/// `.` components so rooted patterns stay clean.
pub fn absolutize(path: &Path) -> Result<PathBuf> {
  let absolute = if path.is_absolute() {
    path.to_path_buf()
  } else {
    let current_dir = std::env::current_dir().with_context(|| "Failed to get current directory")?;
    current_dir.join(path)
  };

  let mut normalized = PathBuf::new();
  for component in absolute.components() {
    if !matches!(component, std::path::Component::CurDir) {
      normalized.push(component.as_os_str());
    }
  }

  Ok(normalized)
}

/// Joins an include pattern onto the root, escaping any glob metacharacters
/// the root path itself happens to contain.
fn rooted_pattern(root: &Path, pattern: &str) -> String {
  let pattern = pattern.trim_start_matches("./").replace('\\', "/");
  format!("{}/{}", glob::Pattern::escape(&root.to_string_lossy()), pattern)
}

/// Tests a candidate against the exclude set by its root-relative path.
fn is_excluded(exclude_set: &GlobSet, root: &Path, path: &Path) -> bool {
  if exclude_set.is_empty() {
    return false;
  }

  let relative = path.strip_prefix(root).unwrap_or(path);
  if exclude_set.is_match(relative) {
    verbose_log!("Excluding: {} (matches exclude pattern)", path.display());
    return true;
  }

  false
}

/// Builds a compiled glob set from exclude patterns.
///
/// Bare names and directory patterns are expanded to also match anywhere in
/// the path structure, so `vendor/` excludes `a/vendor/b.py` as well as
/// `vendor/b.py`.
fn build_exclude_set(patterns: &[String]) -> Result<GlobSet> {
  let mut builder = GlobSetBuilder::new();

  for pattern in patterns {
    // Normalize pattern: convert backslashes to forward slashes
    let pattern = pattern.replace('\\', "/");

    // Helper to add a pattern to the builder
    let add_pattern = |b: &mut GlobSetBuilder, p: &str| -> Result<()> {
      b.add(Glob::new(p).with_context(|| format!("Invalid exclude pattern: {}", p))?);
      Ok(())
    };

    if let Some(dir_pattern) = pattern.strip_suffix('/') {
      // Directory pattern: match the directory's contents at any depth
      add_pattern(&mut builder, dir_pattern)?;
      add_pattern(&mut builder, &format!("{}/**", dir_pattern))?;
      add_pattern(&mut builder, &format!("**/{}/**", dir_pattern))?;
      add_pattern(&mut builder, &format!("**/{}", dir_pattern))?;
    } else if !pattern.contains('*') && !pattern.contains('?') {
      // Plain name without wildcards - treat as potential directory or file match
      add_pattern(&mut builder, &pattern)?;
      add_pattern(&mut builder, &format!("**/{}", pattern))?;
      add_pattern(&mut builder, &format!("{}/**", pattern))?;
      add_pattern(&mut builder, &format!("**/{}/**", pattern))?;
    } else {
      // Regular glob pattern with wildcards
      add_pattern(&mut builder, &pattern)?;

      // Also add **/ prefix to match the pattern anywhere in the path
      if !pattern.starts_with("**/") {
        add_pattern(&mut builder, &format!("**/{}", pattern))?;
      }
    }
  }

  builder.build().with_context(|| "Failed to build exclude set")
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

  #[test]
  fn test_empty_includes_yield_empty_set() {
    let temp_dir = TempDir::new().expect("create temp dir");
    touch(temp_dir.path(), "a.rs");

    let files = enumerate(temp_dir.path(), &[], &[]).expect("enumerate");
    assert!(files.is_empty());
  }

  #[test]
  fn test_recursive_include() {
    let temp_dir = TempDir::new().expect("create temp dir");
    touch(temp_dir.path(), "a.py");
    touch(temp_dir.path(), "src/b.py");
    touch(temp_dir.path(), "src/nested/c.py");
    touch(temp_dir.path(), "src/d.rs");

    let includes = vec!["**/*.py".to_string()];
    let files = enumerate(temp_dir.path(), &includes, &[]).expect("enumerate");

    assert_eq!(files.len(), 3);
    assert!(files.contains(&temp_dir.path().join("a.py")));
    assert!(files.contains(&temp_dir.path().join("src/nested/c.py")));
    assert!(!files.contains(&temp_dir.path().join("src/d.rs")));
  }

  #[test]
  fn test_multiple_includes_are_unioned_and_deduplicated() {
    let temp_dir = TempDir::new().expect("create temp dir");
    touch(temp_dir.path(), "src/a.py");
    touch(temp_dir.path(), "src/b.rs");

    let includes = vec![
      "**/*.py".to_string(),
      "**/*.rs".to_string(),
      "src/**".to_string(), // overlaps with both
    ];
    let files = enumerate(temp_dir.path(), &includes, &[]).expect("enumerate");

    assert_eq!(files.len(), 2);
  }

  #[test]
  fn test_exclude_removes_matches() {
    let temp_dir = TempDir::new().expect("create temp dir");
    touch(temp_dir.path(), "src/a.py");
    touch(temp_dir.path(), "vendor/b.py");
    touch(temp_dir.path(), "src/vendor/c.py");

    let includes = vec!["**/*.py".to_string()];
    let excludes = vec!["**/vendor/**".to_string()];
    let files = enumerate(temp_dir.path(), &includes, &excludes).expect("enumerate");

    assert_eq!(files.len(), 1);
    assert!(files.contains(&temp_dir.path().join("src/a.py")));
  }

  #[test]
  fn test_bare_name_exclude_matches_anywhere() {
    let temp_dir = TempDir::new().expect("create temp dir");
    touch(temp_dir.path(), "src/a.py");
    touch(temp_dir.path(), "vendor/b.py");
    touch(temp_dir.path(), "deep/vendor/c.py");

    let includes = vec!["**/*.py".to_string()];
    let excludes = vec!["vendor".to_string()];
    let files = enumerate(temp_dir.path(), &includes, &excludes).expect("enumerate");

    assert_eq!(files.len(), 1);
    assert!(files.contains(&temp_dir.path().join("src/a.py")));
  }

  #[test]
  fn test_returned_paths_are_absolute_files_only() {
    let temp_dir = TempDir::new().expect("create temp dir");
    touch(temp_dir.path(), "src/a.py");

    let includes = vec!["**".to_string()];
    let files = enumerate(temp_dir.path(), &includes, &[]).expect("enumerate");

    assert_eq!(files.len(), 1);
    for file in &files {
      assert!(file.is_absolute());
      assert!(file.is_file());
    }
  }

  #[test]
  fn test_wildcards_skip_hidden_files() {
    let temp_dir = TempDir::new().expect("create temp dir");
    touch(temp_dir.path(), "visible.py");
    touch(temp_dir.path(), ".hidden.py");
    touch(temp_dir.path(), ".git/config.py");

    let includes = vec!["**".to_string()];
    let files = enumerate(temp_dir.path(), &includes, &[]).expect("enumerate");

    assert_eq!(files.len(), 1);
    assert!(files.contains(&temp_dir.path().join("visible.py")));
  }

  #[test]
  fn test_invalid_include_pattern_is_an_error() {
    let temp_dir = TempDir::new().expect("create temp dir");

    let includes = vec!["***".to_string()];
    let result = enumerate(temp_dir.path(), &includes, &[]);
    assert!(result.is_err());
  }
}
