//! # Run Command
//!
//! Implements the default run command (batch processing of a directory
//! tree) and the hook command (processing a staged file list supplied by a
//! pre-commit hook).

use std::path::PathBuf;
use std::process;

use anyhow::{Context, Result};
use clap::Args;
use tracing::debug;

use crate::config::{self, CONFIG_FILENAME, SignatureConfig};
use crate::logging::{ColorMode, init_tracing, set_quiet, set_verbose};
use crate::output::{print_blank_line, print_hint, print_modified_files, print_start_message, print_summary};
use crate::processor::{Options, Processor};

/// Arguments for the run command
#[derive(Args, Debug, Default)]
pub struct RunArgs {
  /// Path to file or directory to process (default: current directory)
  #[arg(long, value_name = "PATH", default_value = ".")]
  pub path: PathBuf,

  /// Show what would be changed without modifying files
  #[arg(long)]
  pub dry_run: bool,

  /// Update existing signatures (preserves creation date)
  #[arg(long)]
  pub force: bool,

  /// Show a diff of pending changes in dry-run mode
  #[arg(long, requires = "dry_run")]
  pub show_diff: bool,

  /// Path to the global config file (default: ~/.signature.json)
  #[arg(long, value_name = "FILE")]
  pub global_config: Option<PathBuf>,

  /// Increase verbosity (-v debug, -vv trace)
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
    default_value = "auto",
    default_missing_value = "always",
    value_enum
  )]
  pub colors: ColorMode,
}

/// Arguments for the hook command
#[derive(Args, Debug, Default)]
pub struct HookArgs {
  /// Staged files to process
  #[arg(value_name = "FILES")]
  pub files: Vec<PathBuf>,

  /// Path to the global config file (default: ~/.signature.json)
  #[arg(long, value_name = "FILE")]
  pub global_config: Option<PathBuf>,

  /// Increase verbosity (-v debug, -vv trace)
  #[arg(short, long, action = clap::ArgAction::Count)]
  pub verbose: u8,
}

fn apply_output_flags(quiet: bool, verbose: u8) {
  init_tracing(quiet, verbose);
  if verbose > 0 {
    set_verbose();
  } else if quiet {
    set_quiet();
  }
}

fn global_config_path(override_path: Option<PathBuf>) -> Result<PathBuf> {
  match override_path {
    Some(path) => Ok(path),
    None => config::default_global_path().context("HOME is not set; cannot locate ~/.signature.json"),
  }
}

/// Resolves the layered configuration for a target directory.
fn load_config(global: &std::path::Path, target_dir: &std::path::Path) -> Result<SignatureConfig, config::ConfigError> {
  let local = target_dir.join(CONFIG_FILENAME);
  let local = local.exists().then_some(local);
  config::resolve(global, local.as_deref())
}

/// Run the default command with the given arguments
pub fn run(args: RunArgs) -> Result<()> {
  apply_output_flags(args.quiet, args.verbose);
  args.colors.apply();

  if !args.path.exists() {
    eprintln!("Error: Path not found: {}", args.path.display());
    process::exit(1);
  }

  let global = global_config_path(args.global_config)?;
  debug!("Using global config: {}", global.display());

  let target_dir = if args.path.is_dir() {
    args.path.clone()
  } else {
    args.path.parent().map(PathBuf::from).unwrap_or_else(|| PathBuf::from("."))
  };
  debug!("Target directory: {}", target_dir.display());

  let config = match load_config(&global, &target_dir) {
    Ok(config) => config,
    Err(e) => {
      eprintln!("Configuration error: {e}");
      process::exit(1);
    }
  };

  let processor = Processor::new(
    config,
    Options {
      dry_run: args.dry_run,
      force: args.force,
      show_diff: args.show_diff,
    },
  )?;

  print_start_message(&args.path, args.dry_run);

  let result = processor.process_path(&args.path)?;

  print_blank_line();
  print_summary(&result, args.dry_run);
  print_modified_files(&result, Some(&target_dir));

  if args.dry_run && result.processed > 0 {
    print_blank_line();
    print_hint("Run without --dry-run to apply changes");
  }

  // Per-file errors were already reported as warnings; they never fail the
  // run.
  Ok(())
}

/// Run the hook command: sign the staged file list, printing the paths of
/// modified files so the caller can re-stage them.
///
/// Configuration problems must never block a commit, so they downgrade to a
/// warning and a clean exit.
pub fn run_hook(args: HookArgs) -> Result<()> {
  apply_output_flags(true, args.verbose);

  if args.files.is_empty() {
    return Ok(());
  }

  let cwd = std::env::current_dir().context("cannot determine current directory")?;

  let config = match global_config_path(args.global_config)
    .and_then(|global| load_config(&global, &cwd).map_err(Into::into))
  {
    Ok(config) => config,
    Err(e) => {
      eprintln!("Warning: signature hook skipped: {e}");
      return Ok(());
    }
  };

  let processor = Processor::new(config, Options::default())?;
  let result = processor.process_paths(&args.files);

  for path in &result.modified_files {
    println!("{}", path.display());
  }

  Ok(())
}
