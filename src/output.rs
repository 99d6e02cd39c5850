//! # Output Module
//!
//! This module centralizes all user-facing output for the headerlint tool.
//!
//! Diagnostics and warnings go to stderr, one line each, so automation can
//! parse them; the final zero-error summary in non-strict mode goes to
//! stdout. Quiet mode suppresses warnings and the success summary but never
//! errors.

use std::path::Path;

use owo_colors::{OwoColorize, Stream};

use crate::logging::is_quiet;
use crate::verify::{CheckResult, VerifyError};

/// Warning printed for a file no rule covers.
///
/// Under strict mode the line still prints in quiet mode, since uncovered
/// files count as errors there.
pub fn print_uncovered_warning(path: &Path, strict: bool) {
  if is_quiet() && !strict {
    return;
  }
  eprintln!("Config does not cover the file '{}'", path.display());
}

/// Error line for a failed license check.
pub fn print_check_failure(result: &CheckResult) {
  if let CheckResult::Failure { message, .. } = result {
    eprintln!("{}", message);
  }
}

/// Error line for a rule- or file-level verification error.
pub fn print_verify_error(error: &VerifyError) {
  eprintln!("{}", error);
}

/// Summary line for strict mode, always on stderr.
pub fn print_strict_summary(errors: usize, warnings: usize) {
  eprintln!(
    "{} error(s) and {} warning(s) found. Warnings are treated as errors.",
    errors, warnings
  );
}

/// Summary line when at least one check failed, on stderr.
pub fn print_error_summary(errors: usize) {
  eprintln!("{} error(s) found", errors);
}

/// Summary line for a clean non-strict run, on stdout.
pub fn print_success_summary(errors: usize, warnings: usize) {
  if is_quiet() {
    return;
  }
  let line = format!("{} error(s) and {} warning(s) found.", errors, warnings);
  println!("{}", line.if_supports_color(Stream::Stdout, |l| l.green()));
}
