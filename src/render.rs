//! # Signature Rendering Module
//!
//! Turns a resolved [`SignatureConfig`] into a comment block tailored to one
//! [`CommentStyle`]. The block is framed by 80-character `=` separator lines
//! and lists the configured fields in a fixed order, so detection can key off
//! the separators and the layout stays stable across runs.

use crate::config::SignatureConfig;
use crate::styles::CommentStyle;

/// Width of the `=` separator line inside the signature block.
pub const SEPARATOR_WIDTH: usize = 80;

/// Renders the full signature block for a file, including a trailing blank
/// line that separates it from the code below.
///
/// `created` is the date recorded in the `Created:` field, formatted as
/// `YYYY-MM-DD`. The caller decides whether that is today or a date
/// recovered from an existing signature.
pub fn render(config: &SignatureConfig, style: CommentStyle, created: &str) -> String {
  let separator = "=".repeat(SEPARATOR_WIDTH);

  let mut fields = Vec::new();
  fields.push(format!("Author: {}", config.author));
  if let Some(title) = &config.title {
    fields.push(format!("Title: {title}"));
  }
  if let Some(website) = &config.website {
    fields.push(format!("Website: {website}"));
  }
  fields.push(format!("Email: {}", config.email));
  if let Some(upwork) = &config.upwork {
    fields.push(format!("Upwork: {upwork}"));
  }
  fields.push(format!("Created: {created}"));

  let mut lines = Vec::new();

  match style.suffix {
    // Block styles open and close with bare delimiter lines around the
    // framed field list.
    Some(suffix) => {
      lines.push(style.prefix.to_string());
      lines.push(separator.clone());
      lines.extend(fields);
      lines.push(separator);
      lines.push(suffix.to_string());
    }
    // Line styles prefix every line of the block.
    None => {
      lines.push(format!("{} {}", style.prefix, separator));
      for field in fields {
        lines.push(format!("{} {}", style.prefix, field));
      }
      lines.push(format!("{} {}", style.prefix, separator));
    }
  }

  let mut block = lines.join("\n");
  block.push('\n');
  block.push('\n');
  block
}
