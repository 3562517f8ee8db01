//! # File I/O Module
//!
//! File reading and writing utilities for the processor. Reading classifies
//! binary content so the processor can skip it; writing goes through a
//! temporary file in the same directory and an atomic rename, so a file is
//! either untouched or fully rewritten.

use std::io::Write as _;
use std::path::Path;

use anyhow::{Context, Result};

/// File I/O operations for the processor.
pub struct FileIO;

impl FileIO {
  /// Reads the full file content as UTF-8 text.
  ///
  /// Returns `Ok(None)` when the bytes are not valid UTF-8, which the
  /// processor treats as a binary file to skip.
  pub fn read_text(path: &Path) -> Result<Option<String>> {
    let bytes = std::fs::read(path).with_context(|| format!("Failed to read file: {}", path.display()))?;

    match String::from_utf8(bytes) {
      Ok(content) => Ok(Some(content)),
      Err(_) => Ok(None),
    }
  }

  /// Atomically replaces `path` with `content`.
  ///
  /// Writes to a temp file in the same directory, copies the original
  /// file's permissions onto it, then renames it over the original.
  pub fn write_atomic(path: &Path, content: &str) -> Result<()> {
    let parent = path.parent().filter(|p| !p.as_os_str().is_empty()).unwrap_or(Path::new("."));

    let mut temp =
      tempfile::NamedTempFile::new_in(parent).with_context(|| format!("Failed to create temp file in {}", parent.display()))?;

    temp
      .write_all(content.as_bytes())
      .with_context(|| format!("Failed to write temp file for {}", path.display()))?;

    // Carry over the original permissions; NamedTempFile defaults to 0600.
    let metadata = std::fs::metadata(path).with_context(|| format!("Failed to stat file: {}", path.display()))?;
    std::fs::set_permissions(temp.path(), metadata.permissions())
      .with_context(|| format!("Failed to set permissions on temp file for {}", path.display()))?;

    temp
      .persist(path)
      .map_err(|e| e.error)
      .with_context(|| format!("Failed to replace file: {}", path.display()))?;

    Ok(())
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_read_text_utf8() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("a.py");
    std::fs::write(&path, "print('hi')\n").expect("write");

    let content = FileIO::read_text(&path).expect("read");
    assert_eq!(content.as_deref(), Some("print('hi')\n"));
  }

  #[test]
  fn test_read_text_binary_is_none() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("a.bin");
    std::fs::write(&path, [0u8, 159, 146, 150, 255]).expect("write");

    let content = FileIO::read_text(&path).expect("read");
    assert_eq!(content, None);
  }

  #[test]
  fn test_write_atomic_replaces_content() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("a.py");
    std::fs::write(&path, "old\n").expect("write");

    FileIO::write_atomic(&path, "new\n").expect("atomic write");
    assert_eq!(std::fs::read_to_string(&path).expect("read back"), "new\n");
  }

  #[cfg(unix)]
  #[test]
  fn test_write_atomic_preserves_permissions() {
    use std::os::unix::fs::PermissionsExt;

    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("a.sh");
    std::fs::write(&path, "#!/bin/sh\n").expect("write");
    std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755)).expect("chmod");

    FileIO::write_atomic(&path, "#!/bin/sh\necho hi\n").expect("atomic write");

    let mode = std::fs::metadata(&path).expect("stat").permissions().mode();
    assert_eq!(mode & 0o777, 0o755);
  }
}
