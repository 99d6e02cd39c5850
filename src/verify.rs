//! # Verification Orchestrator
//!
//! This module drives the full check: for every rule with a license
//! reference it enumerates the rule's files and matches each one against the
//! rule's license pattern, then resolves coverage over the global file
//! enumeration.
//!
//! A license file that cannot be read aborts only that rule's checks; the
//! remaining rules still run. A candidate file that cannot be read fails
//! that file's check with a distinct error, never as a missing license.

use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Result;
use tracing::debug;

use crate::config::LicenseRule;
use crate::coverage::uncovered_files;
use crate::enumerate::enumerate;
use crate::gitignore::PathFilter;
use crate::matcher::{LicensePattern, MatchError};

/// Verdict for a single file under a single rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckResult {
  /// The file contains the rule's license pattern.
  Success { file: PathBuf },
  /// The file does not contain the rule's license pattern.
  Failure { file: PathBuf, message: String },
}

impl CheckResult {
  /// The file this verdict applies to.
  pub fn file(&self) -> &Path {
    match self {
      Self::Success { file } | Self::Failure { file, .. } => file.as_path(),
    }
  }

  pub const fn is_success(&self) -> bool {
    matches!(self, Self::Success { .. })
  }
}

/// Errors encountered during verification that are not content mismatches.
#[derive(Debug, thiserror::Error)]
pub enum VerifyError {
  /// A rule's license reference could not be read. The rule's checks are
  /// abandoned; other rules still run.
  #[error("Failed to read license file '{path}': {source}")]
  LicenseRead { path: PathBuf, source: std::io::Error },

  /// A rule's license text could not be compiled into a pattern.
  #[error("Failed to build license pattern from '{path}': {source}")]
  LicensePattern { path: PathBuf, source: regex::Error },

  /// A candidate file could not be read or decoded during matching.
  #[error("Error while reading file '{path}': {source}")]
  FileRead { path: PathBuf, source: std::io::Error },
}

/// Aggregated outcome of a verification run.
#[derive(Debug, Default)]
pub struct VerifyOutcome {
  /// Per-file verdicts, in rule order then path order.
  pub results: Vec<CheckResult>,
  /// Files no rule covers, sorted by path.
  pub uncovered: Vec<PathBuf>,
  /// Rule- and file-level errors, in the order they were encountered.
  pub errors: Vec<VerifyError>,
}

impl VerifyOutcome {
  /// The failed verdicts, in result order.
  pub fn failures(&self) -> impl Iterator<Item = &CheckResult> {
    self.results.iter().filter(|result| !result.is_success())
  }

  /// Failed checks plus rule- and file-level errors.
  pub fn error_count(&self) -> usize {
    self.failures().count() + self.errors.len()
  }

  /// Uncovered files count.
  pub fn warning_count(&self) -> usize {
    self.uncovered.len()
  }
}

/// Runs every rule's license check and resolves coverage.
///
/// # Parameters
///
/// * `root` - Working root the rule patterns are resolved against
/// * `rules` - The validated rule configuration
/// * `path_filter` - Optional filter; files it rejects are dropped from both
///   checking and coverage
///
/// # Returns
///
/// The aggregated outcome, or an error if a rule pattern is invalid or the
/// global enumeration fails.
pub fn verify(root: &Path, rules: &[LicenseRule], path_filter: Option<&dyn PathFilter>) -> Result<VerifyOutcome> {
  let mut outcome = VerifyOutcome::default();

  for (index, rule) in rules.iter().enumerate() {
    let Some(license_path) = rule.license_path(root) else {
      debug!("Rule #{} has no license reference, skipping content checks", index);
      continue;
    };

    let pattern = match load_pattern(&license_path) {
      Ok(pattern) => pattern,
      Err(error) => {
        outcome.errors.push(error);
        continue;
      }
    };

    let files = enumerate(root, &rule.include, &rule.exclude)?;
    debug!("Rule #{} matched {} file(s)", index, files.len());

    for file in files {
      if let Some(filter) = path_filter
        && !filter.keep(&file)
      {
        continue;
      }

      match pattern.matches_file(&file) {
        Ok(true) => outcome.results.push(CheckResult::Success { file }),
        Ok(false) => {
          let message = format!(
            "'{}' does not contain license from '{}'",
            file.display(),
            license_path.display()
          );
          outcome.results.push(CheckResult::Failure { file, message });
        }
        Err(MatchError::FileRead { path, source }) => {
          outcome.errors.push(VerifyError::FileRead { path, source });
        }
      }
    }
  }

  let everything = ["**".to_string()];
  let mut all_files: BTreeSet<PathBuf> = enumerate(root, &everything, &[])?;
  if let Some(filter) = path_filter {
    all_files.retain(|file| filter.keep(file));
  }

  outcome.uncovered = uncovered_files(root, &all_files, rules)?.into_iter().collect();

  Ok(outcome)
}

/// Loads and compiles a rule's license text.
fn load_pattern(license_path: &Path) -> Result<LicensePattern, VerifyError> {
  let text = fs::read_to_string(license_path).map_err(|source| VerifyError::LicenseRead {
    path: license_path.to_path_buf(),
    source,
  })?;

  LicensePattern::compile(&text).map_err(|source| VerifyError::LicensePattern {
    path: license_path.to_path_buf(),
    source,
  })
}
