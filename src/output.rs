//! # Output Module
//!
//! Centralizes user-facing terminal output: the start banner, the results
//! summary, the modified-file list, and follow-up hints. Formatting respects
//! the global quiet/verbose mode and the color override.

use std::path::Path;

use owo_colors::{OwoColorize, Stream};

use crate::logging::{is_quiet, is_verbose};
use crate::processor::ProcessingResult;

/// Maximum number of modified files listed before truncating.
const FILE_LIST_LIMIT: usize = 20;

/// Print the "Processing ..." banner for a run.
pub fn print_start_message(target: &Path, dry_run: bool) {
  if is_quiet() {
    return;
  }

  let prefix = if dry_run { "[DRY RUN] " } else { "" };
  println!("{}Processing {}...", prefix, target.display());
}

/// Print a blank line for visual separation (respects quiet mode).
pub fn print_blank_line() {
  if !is_quiet() {
    println!();
  }
}

/// Print the run summary: processed/skipped/errored counts.
pub fn print_summary(result: &ProcessingResult, dry_run: bool) {
  if is_quiet() {
    return;
  }

  let verb = if dry_run { "Would sign" } else { "Signed" };
  println!("Results:");
  println!(
    "  {}: {} files",
    verb,
    result.processed.if_supports_color(Stream::Stdout, |s| s.green())
  );
  println!(
    "  Skipped:   {} files",
    result.skipped.if_supports_color(Stream::Stdout, |s| s.dimmed())
  );
  if result.errored > 0 {
    println!(
      "  Errors:    {} files",
      result.errored.if_supports_color(Stream::Stdout, |s| s.red())
    );
  }
}

/// Print the list of modified files, sorted, truncated unless verbose.
///
/// Paths are shown relative to `base` when they sit beneath it.
pub fn print_modified_files(result: &ProcessingResult, base: Option<&Path>) {
  if is_quiet() || result.modified_files.is_empty() {
    return;
  }

  let mut sorted: Vec<String> = result
    .modified_files
    .iter()
    .map(|p| make_relative(p, base))
    .collect();
  sorted.sort();

  println!("Modified files:");

  let count = sorted.len();
  let show_all = is_verbose();
  let limit = if show_all { count } else { FILE_LIST_LIMIT };

  for path in sorted.iter().take(limit) {
    println!("  - {path}");
  }

  if !show_all && count > limit {
    println!("  ... and {} more (use -v to see all)", count - limit);
  }
}

fn make_relative(path: &Path, base: Option<&Path>) -> String {
  base
    .and_then(|base| pathdiff::diff_paths(path, base))
    .filter(|rel| !rel.as_os_str().is_empty() && !rel.starts_with(".."))
    .unwrap_or_else(|| path.to_path_buf())
    .display()
    .to_string()
}

/// Print a hint for the user about what to do next.
pub fn print_hint(message: &str) {
  if is_quiet() {
    return;
  }

  println!("{}", message.if_supports_color(Stream::Stdout, |s| s.yellow()));
}
