//! # Comment-Style Registry
//!
//! Static mapping from file extensions to the comment syntax used when a
//! signature block is rendered into a file of that type.
//!
//! The registry is the single place where file-type support lives: adding a
//! new extension means adding one table entry, nothing else. Lookups are
//! case-insensitive and keyed by the dotted extension (e.g. `.py`, `.tsx`).
//! An unknown extension is a skip condition for the processor, never an
//! error.

use std::path::Path;

/// How to open and close a comment line or block for one file type.
///
/// A line style only carries a `prefix` (`#`, `//`); a block style also
/// carries a `suffix`, and the opening and closing delimiters each get their
/// own line when a signature is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommentStyle {
  /// Comment opener, prepended to every line (line styles) or emitted on its
  /// own line (block styles).
  pub prefix: &'static str,

  /// Comment closer for block styles, emitted on its own line.
  pub suffix: Option<&'static str>,
}

impl CommentStyle {
  /// A line-comment style (`# ...`, `// ...`).
  pub const fn line(prefix: &'static str) -> Self {
    Self { prefix, suffix: None }
  }

  /// A block-comment style (`<!-- ... -->`, `/* ... */`).
  pub const fn block(prefix: &'static str, suffix: &'static str) -> Self {
    Self {
      prefix,
      suffix: Some(suffix),
    }
  }

  /// Whether this style wraps the signature in open/close delimiter lines.
  pub const fn is_block(&self) -> bool {
    self.suffix.is_some()
  }
}

/// Extension-to-style table. Keys are lowercase dotted extensions.
///
/// New file types are supported by adding an entry here; no other code
/// changes are required.
const REGISTRY: &[(&str, CommentStyle)] = &[
  // Hash comments
  (".py", CommentStyle::line("#")),
  (".rb", CommentStyle::line("#")),
  (".sh", CommentStyle::line("#")),
  (".bash", CommentStyle::line("#")),
  (".yaml", CommentStyle::line("#")),
  (".yml", CommentStyle::line("#")),
  (".r", CommentStyle::line("#")),
  (".perl", CommentStyle::line("#")),
  (".pl", CommentStyle::line("#")),
  // Double-slash comments
  (".js", CommentStyle::line("//")),
  (".ts", CommentStyle::line("//")),
  (".jsx", CommentStyle::line("//")),
  (".tsx", CommentStyle::line("//")),
  (".java", CommentStyle::line("//")),
  (".cpp", CommentStyle::line("//")),
  (".c", CommentStyle::line("//")),
  (".h", CommentStyle::line("//")),
  (".hpp", CommentStyle::line("//")),
  (".go", CommentStyle::line("//")),
  (".rs", CommentStyle::line("//")),
  (".swift", CommentStyle::line("//")),
  (".kt", CommentStyle::line("//")),
  (".scala", CommentStyle::line("//")),
  (".php", CommentStyle::line("//")),
  // HTML-style comments
  (".html", CommentStyle::block("<!--", "-->")),
  (".xml", CommentStyle::block("<!--", "-->")),
  (".md", CommentStyle::block("<!--", "-->")),
  (".svg", CommentStyle::block("<!--", "-->")),
  // CSS-style block comments
  (".css", CommentStyle::block("/*", "*/")),
  (".scss", CommentStyle::block("/*", "*/")),
  (".sass", CommentStyle::block("/*", "*/")),
  (".less", CommentStyle::block("/*", "*/")),
];

/// Looks up the comment style for a dotted extension (e.g. `.py`).
///
/// Returns `None` for unsupported extensions; the caller treats that as a
/// skip reason.
pub fn style_for(extension: &str) -> Option<CommentStyle> {
  let ext = extension.to_ascii_lowercase();
  REGISTRY.iter().find(|(key, _)| *key == ext).map(|(_, style)| *style)
}

/// Looks up the comment style for a file path based on its extension.
pub fn style_for_path(path: &Path) -> Option<CommentStyle> {
  let ext = path.extension().and_then(|e| e.to_str())?;
  style_for(&format!(".{ext}"))
}

/// All extensions the registry knows about.
pub fn supported_extensions() -> impl Iterator<Item = &'static str> {
  REGISTRY.iter().map(|(key, _)| *key)
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_hash_family() {
    let style = style_for(".py").expect("python should be supported");
    assert_eq!(style.prefix, "#");
    assert!(!style.is_block());
  }

  #[test]
  fn test_slash_family() {
    let style = style_for(".rs").expect("rust should be supported");
    assert_eq!(style.prefix, "//");
    assert_eq!(style.suffix, None);
  }

  #[test]
  fn test_html_family() {
    let style = style_for(".html").expect("html should be supported");
    assert_eq!(style.prefix, "<!--");
    assert_eq!(style.suffix, Some("-->"));
  }

  #[test]
  fn test_block_family() {
    let style = style_for(".css").expect("css should be supported");
    assert_eq!(style.prefix, "/*");
    assert_eq!(style.suffix, Some("*/"));
  }

  #[test]
  fn test_compound_extension() {
    let style = style_for(".tsx").expect("tsx should be supported");
    assert_eq!(style.prefix, "//");
  }

  #[test]
  fn test_lookup_is_case_insensitive() {
    assert_eq!(style_for(".PY"), style_for(".py"));
    assert_eq!(style_for(".Tsx"), style_for(".tsx"));
  }

  #[test]
  fn test_unsupported_extension() {
    assert_eq!(style_for(".bin"), None);
    assert_eq!(style_for(".exe"), None);
  }

  #[test]
  fn test_style_for_path() {
    assert!(style_for_path(Path::new("src/main.rs")).is_some());
    assert!(style_for_path(Path::new("script.PY")).is_some());
    assert!(style_for_path(Path::new("data.bin")).is_none());
    // No extension at all
    assert!(style_for_path(Path::new("Makefile")).is_none());
  }

  #[test]
  fn test_supported_extensions_are_normalized() {
    for ext in supported_extensions() {
      assert!(ext.starts_with('.'), "{ext} must be dotted");
      assert_eq!(ext, ext.to_ascii_lowercase(), "{ext} must be lowercase");
    }
  }
}
