//! # signet
//!
//! A tool that stamps source files with a standardized attribution
//! signature.

use anyhow::Result;
use signet::cli::Cli;

fn main() -> Result<()> {
  Cli::parse_args().execute()
}
