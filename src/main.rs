//! # headerlint
//!
//! A tool that verifies source files carry their required license headers.

use anyhow::Result;

use headerlint::cli::{Cli, run_check};

fn main() -> Result<()> {
  let cli = Cli::parse_args();
  run_check(cli.into_check_args())
}
