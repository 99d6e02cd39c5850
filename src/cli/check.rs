//! # Check Command
//!
//! This module implements the `check` subcommand: load the rule
//! configuration, run every rule's license check, resolve coverage, print
//! diagnostics, and translate the outcome into an exit code.

use std::path::PathBuf;
use std::process;

use anyhow::{Context, Result};
use clap::Args;
use tracing::debug;

use crate::config::load_rules;
use crate::enumerate::{absolutize, enumerate};
use crate::gitignore::{GitCheckIgnore, GitIgnoreFilter, PathFilter};
use crate::logging::{ColorMode, init_tracing, set_quiet, set_verbose};
use crate::output::{
  print_check_failure, print_error_summary, print_strict_summary, print_success_summary, print_uncovered_warning,
  print_verify_error,
};
use crate::verify::verify;

/// Arguments for the check command
#[derive(Args, Debug)]
pub struct CheckArgs {
  /// Path to the JSON rule configuration file
  #[arg(long, short = 'c', value_name = "FILE")]
  pub config: PathBuf,

  /// Root directory that glob patterns are resolved against
  #[arg(long, value_name = "DIR", default_value = ".")]
  pub path: PathBuf,

  /// Treat files not covered by the configuration as errors
  #[arg(long)]
  pub strict: bool,

  /// Exclude git-ignored files from checking and coverage
  #[arg(long)]
  pub gitignore: bool,

  /// Increase verbosity (-v info, -vv debug, -vvv trace)
  #[arg(short, long, action = clap::ArgAction::Count)]
  pub verbose: u8,

  /// Suppress all output except errors
  #[arg(short, long, conflicts_with = "verbose")]
  pub quiet: bool,

  /// Control when to use colored output (auto, never, always)
  #[arg(
    long,
    value_name = "WHEN",
    num_args = 0..=1,
    default_value_t = ColorMode::Auto,
    default_missing_value = "always",
    value_enum
  )]
  pub colors: ColorMode,
}

/// Run the check command with the given arguments
pub fn run_check(args: CheckArgs) -> Result<()> {
  // Initialize tracing subscriber for structured logging
  init_tracing(args.quiet, args.verbose);

  // Set the output mode for warning and summary formatting
  if args.verbose > 0 {
    set_verbose();
  } else if args.quiet {
    set_quiet();
  }
  args.colors.apply();

  let root = absolutize(&args.path)?;
  if !root.is_dir() {
    eprintln!("ERROR: Working root '{}' is not a directory", args.path.display());
    process::exit(1);
  }

  // Configuration problems are fatal before any check runs
  let rules = load_rules(&args.config)?;
  debug!("Loaded {} rules from {}", rules.len(), args.config.display());

  // Probe git for ignored files up front so the same filter applies to both
  // checking and coverage
  let path_filter: Option<Box<dyn PathFilter>> = if args.gitignore {
    let everything = ["**".to_string()];
    let all_files = enumerate(&root, &everything, &[])?;
    let filter = GitIgnoreFilter::probe(&GitCheckIgnore, &root, all_files.iter())
      .with_context(|| "Failed to consult git ignore rules")?;
    Some(Box::new(filter))
  } else {
    None
  };

  let outcome = verify(&root, &rules, path_filter.as_deref())?;

  for uncovered in &outcome.uncovered {
    print_uncovered_warning(uncovered, args.strict);
  }
  for failure in outcome.failures() {
    print_check_failure(failure);
  }
  for error in &outcome.errors {
    print_verify_error(error);
  }

  let errors = outcome.error_count();
  let warnings = outcome.warning_count();
  debug!("Check finished with {} error(s), {} warning(s)", errors, warnings);

  if args.strict {
    print_strict_summary(errors, warnings);
    if errors != 0 || warnings != 0 {
      process::exit(1);
    }
  } else if errors != 0 {
    print_error_summary(errors);
    process::exit(1);
  } else {
    print_success_summary(errors, warnings);
  }

  Ok(())
}
