//! # Signature Detection Module
//!
//! Finds an existing signature block in file content. Detection keys off the
//! configured email address appearing near the top of the file, then walks
//! outward to the framing separator lines to recover the exact span the
//! block occupies, including block comment delimiters and the blank lines
//! that trail it. The recovered span is what `--force` excises before
//! re-inserting a fresh block.

use std::ops::Range;
use std::sync::LazyLock;

use regex::Regex;

/// How many leading lines are searched for the configured email. Signatures
/// always sit at the top of the file, so a bounded window keeps detection
/// from matching an email mentioned deep in the code.
pub const DETECTION_WINDOW: usize = 20;

/// Matches the `Created:` field inside a signature block.
static CREATED_RE: LazyLock<Regex> =
  LazyLock::new(|| Regex::new(r"Created:\s*(\d{4}-\d{2}-\d{2})").expect("created-date regex is valid"));

/// A detected signature block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Signature {
  /// Line span of the block, end-exclusive, including comment delimiters
  /// and trailing blank lines. `None` when the email matched but the
  /// framing separators could not be found, so nothing can be safely
  /// excised.
  pub span: Option<Range<usize>>,
  /// The `Created:` date recovered from the block, if present.
  pub created: Option<String>,
}

/// Whether a line is one of the `=` separator lines framing a signature.
fn is_separator(line: &str) -> bool {
  line.contains("=====")
}

fn is_block_opener(line: &str) -> bool {
  matches!(line.trim(), "<!--" | "/*")
}

fn is_block_closer(line: &str) -> bool {
  matches!(line.trim(), "-->" | "*/")
}

/// Searches `content` for an existing signature identified by `email`.
///
/// Returns `None` when the email does not appear within the first
/// [`DETECTION_WINDOW`] lines. A substring match anywhere on the line
/// counts, so the block survives comment-prefix variations.
pub fn detect(content: &str, email: &str) -> Option<Signature> {
  detect_within(content, email, DETECTION_WINDOW)
}

/// Like [`detect`], but with an explicit window size. Callers that strip
/// leading lines (a shebang, say) before detecting shrink the window by the
/// stripped count, keeping the bound anchored to the top of the file.
pub fn detect_within(content: &str, email: &str, window: usize) -> Option<Signature> {
  let lines: Vec<&str> = content.lines().collect();

  let email_idx = lines.iter().take(window).position(|line| line.contains(email))?;

  let span = find_span(&lines, email_idx);

  // Recover the date from the span when we have one, otherwise from the
  // detection window around the email.
  let date_lines = match &span {
    Some(span) => &lines[span.clone()],
    None => &lines[..lines.len().min(window)],
  };
  let created = date_lines
    .iter()
    .find_map(|line| CREATED_RE.captures(line))
    .map(|caps| caps[1].to_string());

  Some(Signature { span, created })
}

/// Recovers the full line span of the block around the email line, or
/// `None` when the framing separators are absent.
fn find_span(lines: &[&str], email_idx: usize) -> Option<Range<usize>> {
  // Walk up from the email to the opening separator, then one further if a
  // block comment delimiter sits above it.
  let mut start = lines[..email_idx].iter().rposition(|line| is_separator(line))?;
  if start > 0 && is_block_opener(lines[start - 1]) {
    start -= 1;
  }

  // Walk down to the closing separator, then past a block closer if one
  // follows it.
  let bottom_sep = lines[email_idx + 1..]
    .iter()
    .position(|line| is_separator(line))
    .map(|offset| email_idx + 1 + offset)?;
  let mut end = bottom_sep + 1;
  if end < lines.len() && is_block_closer(lines[end]) {
    end += 1;
  }

  // The blank lines separating the block from the code belong to the span,
  // so excision does not leave a gap behind.
  while end < lines.len() && lines[end].trim().is_empty() {
    end += 1;
  }

  Some(start..end)
}
