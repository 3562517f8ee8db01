//! # Diff Module
//!
//! Renders the diff between a file's current content and the content it
//! would have after signing. Used in dry-run mode with `--show-diff` so the
//! user can inspect exactly what a real run would write.

use std::path::Path;

use owo_colors::{OwoColorize, Stream};
use similar::{ChangeTag, TextDiff};

/// Prints a unified-style diff for one file to stderr.
///
/// Inserted lines are green and deleted lines red when colors are enabled.
pub fn print_diff(path: &Path, original: &str, new: &str) {
  eprintln!("Diff for {}:", path.display());

  let diff = TextDiff::from_lines(original, new);

  for change in diff.iter_all_changes() {
    match change.tag() {
      ChangeTag::Insert => {
        eprint!(
          "{}",
          format!("+{change}").if_supports_color(Stream::Stderr, |s| s.green())
        );
      }
      ChangeTag::Delete => {
        eprint!("{}", format!("-{change}").if_supports_color(Stream::Stderr, |s| s.red()));
      }
      ChangeTag::Equal => {
        eprint!(" {change}");
      }
    }
  }

  eprintln!();
}
