//! # Processor Module
//!
//! The core engine: decides per file whether a signature is inserted,
//! refreshed, or skipped, and walks directory trees applying that decision.
//!
//! The per-file pipeline is strictly ordered: style lookup, ignore checks,
//! text read, detection, shebang split, render, splice, write. A file is
//! either untouched or atomically rewritten, and per-file failures never
//! abort a traversal.

mod file_io;

use std::path::{Path, PathBuf};

use anyhow::Result;
use chrono::Local;
pub use file_io::FileIO;
use walkdir::WalkDir;

use crate::config::SignatureConfig;
use crate::detect;
use crate::filter::{PathFilter, is_hidden, is_skipped_dir, is_skipped_file};
use crate::styles::style_for_path;
use crate::{diff, info_log, render, verbose_log};

/// Behavior flags for one run.
#[derive(Debug, Clone, Copy, Default)]
pub struct Options {
  /// Report what would change without writing anything.
  pub dry_run: bool,
  /// Replace an existing signature, preserving its `Created:` date.
  pub force: bool,
  /// Show a diff of pending changes in dry-run mode.
  pub show_diff: bool,
}

/// Why a file was left untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
  /// Extension has no registered comment style.
  UnsupportedType,
  /// A current signature is already present.
  AlreadySigned,
  /// Content is not valid UTF-8 text.
  Binary,
  /// Matched an ignore pattern or built-in exclusion.
  Ignored,
}

impl SkipReason {
  fn describe(self) -> &'static str {
    match self {
      SkipReason::UnsupportedType => "unsupported file type",
      SkipReason::AlreadySigned => "already signed",
      SkipReason::Binary => "binary file",
      SkipReason::Ignored => "ignored",
    }
  }
}

/// Result of processing one file.
#[derive(Debug)]
pub enum Outcome {
  /// The file was rewritten (or would be, in dry-run mode).
  Modified,
  /// The file was deliberately left alone.
  Skipped(SkipReason),
  /// Something went wrong with this file; traversal continues.
  Errored(String),
}

/// Aggregated statistics for a run.
#[derive(Debug, Default)]
pub struct ProcessingResult {
  /// Files modified (or that would be, in dry-run mode).
  pub processed: usize,
  /// Files deliberately skipped.
  pub skipped: usize,
  /// Files that failed with an I/O or shape error.
  pub errored: usize,
  /// Paths of the modified files, in traversal order.
  pub modified_files: Vec<PathBuf>,
  /// Per-file error messages.
  pub errors: Vec<(PathBuf, String)>,
}

impl ProcessingResult {
  fn record(&mut self, path: &Path, outcome: Outcome) {
    match outcome {
      Outcome::Modified => {
        self.processed += 1;
        self.modified_files.push(path.to_path_buf());
      }
      Outcome::Skipped(reason) => {
        self.skipped += 1;
        verbose_log!("Skipping: {} ({})", path.display(), reason.describe());
      }
      Outcome::Errored(message) => {
        self.errored += 1;
        eprintln!("Warning: {}: {}", path.display(), message);
        self.errors.push((path.to_path_buf(), message));
      }
    }
  }
}

/// Applies the signature pipeline to files and directory trees.
pub struct Processor {
  config: SignatureConfig,
  filter: PathFilter,
  options: Options,
}

impl Processor {
  /// Creates a processor for a resolved configuration.
  ///
  /// # Errors
  ///
  /// Fails if the configured ignore patterns do not compile.
  pub fn new(config: SignatureConfig, options: Options) -> Result<Self> {
    let filter = PathFilter::new(&config.ignore)?;
    Ok(Self {
      config,
      filter,
      options,
    })
  }

  /// Processes a single path, dispatching on file vs directory.
  pub fn process_path(&self, path: &Path) -> Result<ProcessingResult> {
    if path.is_dir() {
      self.process_directory(path)
    } else {
      let mut result = ProcessingResult::default();
      let rel = path.file_name().map(Path::new).unwrap_or(path);
      let outcome = self.process_file(path, rel);
      result.record(path, outcome);
      Ok(result)
    }
  }

  /// Recursively processes a directory tree.
  ///
  /// Built-in skip directories, hidden entries, and ignore-matched
  /// directories are pruned entirely; their contents are never visited.
  pub fn process_directory(&self, root: &Path) -> Result<ProcessingResult> {
    let mut result = ProcessingResult::default();

    let walker = WalkDir::new(root).follow_links(false).into_iter().filter_entry(|entry| {
      if entry.depth() == 0 {
        return true;
      }
      let name = entry.file_name();
      if is_hidden(name) {
        return false;
      }
      if entry.file_type().is_dir() && is_skipped_dir(name) {
        return false;
      }
      let rel = entry.path().strip_prefix(root).unwrap_or(entry.path());
      !self.filter.is_ignored(rel)
    });

    for entry in walker {
      let entry = match entry {
        Ok(entry) => entry,
        Err(e) => {
          let path = e.path().map(Path::to_path_buf).unwrap_or_default();
          result.record(&path, Outcome::Errored(format!("traversal error: {e}")));
          continue;
        }
      };

      if !entry.file_type().is_file() {
        continue;
      }

      let rel = entry.path().strip_prefix(root).unwrap_or(entry.path());
      let outcome = self.process_file(entry.path(), rel);
      result.record(entry.path(), outcome);
    }

    Ok(result)
  }

  /// Processes an explicit list of paths, as supplied by a pre-commit hook.
  ///
  /// Missing paths (e.g. staged deletions) are skipped silently.
  pub fn process_paths(&self, paths: &[PathBuf]) -> ProcessingResult {
    let mut result = ProcessingResult::default();

    for path in paths {
      if !path.is_file() {
        verbose_log!("Skipping: {} (not a file)", path.display());
        continue;
      }
      let outcome = self.process_file(path, path);
      result.record(path, outcome);
    }

    result
  }

  /// Runs the full pipeline on one file.
  ///
  /// `rel` is the path used for ignore-pattern matching, relative to the
  /// scan root.
  pub fn process_file(&self, path: &Path, rel: &Path) -> Outcome {
    let Some(style) = style_for_path(path) else {
      return Outcome::Skipped(SkipReason::UnsupportedType);
    };

    let name = path.file_name().unwrap_or(path.as_os_str());
    if is_hidden(name) || is_skipped_file(name) || self.filter.is_ignored(rel) {
      return Outcome::Skipped(SkipReason::Ignored);
    }

    let content = match FileIO::read_text(path) {
      Ok(Some(content)) => content,
      Ok(None) => return Outcome::Skipped(SkipReason::Binary),
      Err(e) => return Outcome::Errored(format!("{e:#}")),
    };

    let (shebang, body) = split_shebang(&content);

    // The detection window is measured from the top of the file, so any
    // lines the shebang split stripped off shrink it.
    let stripped = content[..content.len() - body.len()].matches('\n').count();
    let window = detect::DETECTION_WINDOW.saturating_sub(stripped);

    let created;
    let body_after;
    match detect::detect_within(body, &self.config.email, window) {
      Some(_) if !self.options.force => {
        return Outcome::Skipped(SkipReason::AlreadySigned);
      }
      Some(signature) => {
        // Refresh: excise the old block and keep its creation date.
        let Some(span) = signature.span else {
          return Outcome::Errored("existing signature has an unrecognized shape".to_string());
        };
        created = signature.created.unwrap_or_else(today);
        body_after = excise(body, span);
      }
      None => {
        created = today();
        body_after = body.to_string();
      }
    }

    let block = render::render(&self.config, style, &created);
    let new_content = match shebang {
      Some(shebang) => format!("{shebang}\n\n{block}{body_after}"),
      None => format!("{block}{body_after}"),
    };

    if new_content == content {
      return Outcome::Skipped(SkipReason::AlreadySigned);
    }

    if self.options.dry_run {
      info_log!("[DRY RUN] Would sign: {}", path.display());
      if self.options.show_diff {
        diff::print_diff(path, &content, &new_content);
      }
      return Outcome::Modified;
    }

    match FileIO::write_atomic(path, &new_content) {
      Ok(()) => {
        info_log!("Signed: {}", path.display());
        Outcome::Modified
      }
      Err(e) => Outcome::Errored(format!("{e:#}")),
    }
  }
}

fn today() -> String {
  Local::now().format("%Y-%m-%d").to_string()
}

/// Splits a leading shebang line off the content.
///
/// Returns the shebang line (without its newline) and the rest. One blank
/// line after the shebang is consumed as well, since composition re-inserts
/// it; repeated runs therefore do not accumulate blank lines.
fn split_shebang(content: &str) -> (Option<&str>, &str) {
  if !content.starts_with("#!") {
    return (None, content);
  }

  let (shebang, rest) = match content.split_once('\n') {
    Some((line, rest)) => (line, rest),
    None => (content, ""),
  };

  let rest = rest.strip_prefix('\n').unwrap_or(rest);
  (Some(shebang), rest)
}

/// Removes a line span (end-exclusive) from content, preserving a trailing
/// newline when the original had one.
fn excise(content: &str, span: std::ops::Range<usize>) -> String {
  let lines: Vec<&str> = content.lines().collect();
  let mut kept: Vec<&str> = Vec::with_capacity(lines.len().saturating_sub(span.len()));
  kept.extend_from_slice(&lines[..span.start.min(lines.len())]);
  if span.end < lines.len() {
    kept.extend_from_slice(&lines[span.end..]);
  }

  let mut out = kept.join("\n");
  if content.ends_with('\n') && !out.is_empty() {
    out.push('\n');
  }
  out
}
