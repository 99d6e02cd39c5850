//! # License Matcher
//!
//! This module converts a license text into a containment pattern and tests
//! candidate files against it.
//!
//! The entire license text is matched literally, except the token `%year%`,
//! which matches exactly four ASCII digits. The text is regex-escaped before
//! the token substitution so license punctuation is never interpreted as
//! pattern syntax.

use std::fs;
use std::path::{Path, PathBuf};

use regex::Regex;

/// Token in a license text that stands for any 4-digit year.
pub const YEAR_TOKEN: &str = "%year%";

/// Errors raised while testing a candidate file.
#[derive(Debug, thiserror::Error)]
pub enum MatchError {
  /// The candidate file could not be read or decoded as text. This is
  /// reported as an error in its own right, never as a missing license.
  #[error("Error while reading file '{path}': {source}")]
  FileRead { path: PathBuf, source: std::io::Error },
}

/// A compiled license containment pattern.
#[derive(Debug, Clone)]
pub struct LicensePattern {
  regex: Regex,
}

impl LicensePattern {
  /// Compiles a license text into a containment pattern.
  ///
  /// # Errors
  ///
  /// Returns an error if the resulting pattern exceeds the regex engine's
  /// size limit; escaped literal text cannot otherwise fail to compile.
  pub fn compile(license_text: &str) -> Result<Self, regex::Error> {
    let escaped = regex::escape(license_text);
    let pattern = escaped.replace(YEAR_TOKEN, "[0-9]{4}");
    let regex = Regex::new(&pattern)?;
    Ok(Self { regex })
  }

  /// Reports whether the license pattern occurs anywhere in `content`.
  pub fn is_contained_in(&self, content: &str) -> bool {
    self.regex.is_match(content)
  }

  /// Reads `path` as text and reports whether it contains the license
  /// pattern.
  ///
  /// # Errors
  ///
  /// Returns [`MatchError::FileRead`] if the file cannot be read or is not
  /// valid UTF-8.
  pub fn matches_file(&self, path: &Path) -> Result<bool, MatchError> {
    let content = fs::read_to_string(path).map_err(|source| MatchError::FileRead {
      path: path.to_path_buf(),
      source,
    })?;
    Ok(self.is_contained_in(&content))
  }
}
