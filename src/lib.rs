//! # headerlint
//!
//! A tool that verifies source files contain the license header required by a
//! glob-rule configuration.
//!
//! `headerlint` reads an ordered list of rules, each pairing include/exclude
//! glob patterns with an optional license text, checks every matched file for
//! the license text, and reports the files no rule covers. It never modifies
//! file contents; the check is read-only analysis suitable for CI pipelines.
//!
//! ## Features
//!
//! * Recursive `**` glob rules resolved against a working root
//! * Literal license matching with a `%year%` token that matches any 4-digit
//!   year
//! * Coverage reporting: files not matched by any rule are warnings, or
//!   errors under `--strict`
//! * Optional `--gitignore` mode that drops git-ignored files from both
//!   checking and coverage
//!
//! ## Usage as a Library
//!
//! This crate can be used as a library in your Rust projects:
//!
//! ```rust,no_run
//! use std::path::Path;
//!
//! use headerlint::config::load_rules;
//! use headerlint::verify::verify;
//!
//! fn main() -> anyhow::Result<()> {
//!   // Load and validate the rule configuration
//!   let rules = load_rules(Path::new("licenses.json"))?;
//!
//!   // Check every rule against the current directory
//!   let outcome = verify(Path::new("."), &rules, None)?;
//!
//!   for failure in outcome.failures() {
//!     eprintln!("missing header: {}", failure.file().display());
//!   }
//!   for uncovered in &outcome.uncovered {
//!     eprintln!("not covered by any rule: {}", uncovered.display());
//!   }
//!
//!   Ok(())
//! }
//! ```
//!
//! ## Modules
//!
//! * [`verify`] - Orchestrates rule checks and coverage resolution
//! * [`matcher`] - License text to containment pattern conversion
//! * [`enumerate`] - Glob expansion against the working root
//!
//! [`verify`]: crate::verify
//! [`matcher`]: crate::matcher
//! [`enumerate`]: crate::enumerate

pub mod cli;
pub mod config;
pub mod coverage;
pub mod enumerate;
pub mod gitignore;
pub mod logging;
pub mod matcher;
pub mod output;
pub mod verify;
