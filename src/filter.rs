//! # Path Filtering Module
//!
//! Decides which paths are excluded from processing. Exclusions come from
//! two sources: a built-in list of tooling directories and lockfile-style
//! files that never want signatures, and the user's `ignore` glob patterns
//! from the resolved configuration.
//!
//! Configured patterns are matched against paths relative to the scan root,
//! with each pattern expanded so `build/` or a bare name matches at any
//! depth.

use std::ffi::OsStr;
use std::path::Path;

use anyhow::{Context, Result};
use globset::{Glob, GlobSet, GlobSetBuilder};

use crate::verbose_log;

/// Directory names never descended into.
pub const SKIP_DIRS: &[&str] = &[
  ".git",
  ".venv",
  "venv",
  "env",
  "__pycache__",
  "node_modules",
  ".pytest_cache",
  ".mypy_cache",
  "dist",
  "build",
  "target",
  ".egg-info",
  ".tox",
  "htmlcov",
  ".coverage",
  ".idea",
  ".vscode",
];

/// File names never signed, regardless of extension.
pub const SKIP_FILES: &[&str] = &[
  ".gitignore",
  ".dockerignore",
  "LICENSE",
  "CHANGELOG",
  "requirements.txt",
  "package-lock.json",
  "yarn.lock",
  "poetry.lock",
  "Cargo.lock",
];

/// Pre-compiled matcher for the configured ignore patterns plus the
/// built-in skip lists.
#[derive(Clone)]
pub struct PathFilter {
  glob_set: GlobSet,
}

impl PathFilter {
  /// Compiles the configured ignore patterns into a matcher.
  ///
  /// # Errors
  ///
  /// Returns an error naming the offending pattern if any glob fails to
  /// compile.
  pub fn new(patterns: &[String]) -> Result<Self> {
    let mut builder = GlobSetBuilder::new();

    for pattern in patterns {
      // Normalize pattern: convert backslashes to forward slashes
      let pattern = pattern.replace('\\', "/");

      let add_pattern = |b: &mut GlobSetBuilder, p: &str| -> Result<()> {
        b.add(Glob::new(p).with_context(|| format!("Invalid ignore pattern: {}", p))?);
        Ok(())
      };

      if let Some(dir_pattern) = pattern.strip_suffix('/') {
        // Directory patterns match the directory itself and everything
        // under it, at any depth.
        add_pattern(&mut builder, dir_pattern)?;
        add_pattern(&mut builder, &format!("{}/**", dir_pattern))?;
        add_pattern(&mut builder, &format!("**/{}/**", dir_pattern))?;
        add_pattern(&mut builder, &format!("**/{}", dir_pattern))?;
      } else if !pattern.contains('*') && !pattern.contains('?') {
        // Plain name without wildcards - may name a file or a directory
        add_pattern(&mut builder, &pattern)?;
        add_pattern(&mut builder, &format!("**/{}", pattern))?;
        add_pattern(&mut builder, &format!("{}/**", pattern))?;
        add_pattern(&mut builder, &format!("**/{}/**", pattern))?;
      } else {
        add_pattern(&mut builder, &pattern)?;

        if !pattern.starts_with("**/") {
          add_pattern(&mut builder, &format!("**/{}", pattern))?;
        }
      }
    }

    let glob_set = builder.build().with_context(|| "Failed to build ignore glob set")?;

    Ok(Self { glob_set })
  }

  /// Whether a path (relative to the scan root) matches a configured
  /// ignore pattern.
  pub fn is_ignored(&self, rel_path: &Path) -> bool {
    if self.glob_set.is_match(rel_path) {
      verbose_log!("Skipping: {} (matches ignore pattern)", rel_path.display());
      return true;
    }
    false
  }
}

/// Whether a directory name is on the built-in skip list.
pub fn is_skipped_dir(name: &OsStr) -> bool {
  name.to_str().is_some_and(|n| SKIP_DIRS.contains(&n))
}

/// Whether a file name is on the built-in skip list.
pub fn is_skipped_file(name: &OsStr) -> bool {
  name.to_str().is_some_and(|n| SKIP_FILES.contains(&n))
}

/// Whether an entry name is hidden (leading dot). Hidden entries are part
/// of the built-in exclusions, so they are skipped both during traversal
/// and when named explicitly.
pub fn is_hidden(name: &OsStr) -> bool {
  name.to_string_lossy().starts_with('.')
}

#[cfg(test)]
mod tests {
  use std::path::Path;

  use super::*;

  fn filter(patterns: &[&str]) -> PathFilter {
    let owned: Vec<String> = patterns.iter().map(|p| p.to_string()).collect();
    PathFilter::new(&owned).expect("test patterns should compile")
  }

  #[test]
  fn test_extension_glob_matches_at_any_depth() {
    let f = filter(&["*.min.js"]);

    assert!(f.is_ignored(Path::new("bundle.min.js")));
    assert!(f.is_ignored(Path::new("static/js/bundle.min.js")));
    assert!(!f.is_ignored(Path::new("static/js/app.js")));
  }

  #[test]
  fn test_directory_pattern_matches_contents() {
    let f = filter(&["generated/"]);

    assert!(f.is_ignored(Path::new("generated")));
    assert!(f.is_ignored(Path::new("generated/models.py")));
    assert!(f.is_ignored(Path::new("src/generated/models.py")));
    assert!(!f.is_ignored(Path::new("src/models.py")));
  }

  #[test]
  fn test_bare_name_matches_file_or_directory() {
    let f = filter(&["vendor"]);

    assert!(f.is_ignored(Path::new("vendor")));
    assert!(f.is_ignored(Path::new("vendor/lib.go")));
    assert!(f.is_ignored(Path::new("third_party/vendor/lib.go")));
  }

  #[test]
  fn test_empty_pattern_list_matches_nothing() {
    let f = filter(&[]);
    assert!(!f.is_ignored(Path::new("src/main.py")));
  }

  #[test]
  fn test_invalid_pattern_is_rejected() {
    let result = PathFilter::new(&["[".to_string()]);
    assert!(result.is_err());
  }

  #[test]
  fn test_builtin_skip_dirs() {
    assert!(is_skipped_dir(OsStr::new("node_modules")));
    assert!(is_skipped_dir(OsStr::new(".git")));
    assert!(!is_skipped_dir(OsStr::new("src")));
  }

  #[test]
  fn test_builtin_skip_files() {
    assert!(is_skipped_file(OsStr::new("package-lock.json")));
    assert!(is_skipped_file(OsStr::new("LICENSE")));
    assert!(!is_skipped_file(OsStr::new("main.py")));
  }

  #[test]
  fn test_hidden_names() {
    assert!(is_hidden(OsStr::new(".env.py")));
    assert!(is_hidden(OsStr::new(".github")));
    assert!(!is_hidden(OsStr::new("main.py")));
  }
}
