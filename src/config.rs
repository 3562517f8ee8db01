//! # Configuration Module
//!
//! Loads and merges the two JSON configuration layers into one effective
//! [`SignatureConfig`]:
//!
//! 1. The global config at `~/.signature.json` (required).
//! 2. An optional per-project `.signature.json` at the target root.
//!
//! The local layer overrides the global layer field by field. The `ignore`
//! list is the one exception: a local `ignore` replaces the global list
//! wholesale, so a project can opt out of inherited exclusions entirely.
//! After the merge, `author` and `email` must be present and non-empty.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::verbose_log;

/// Well-known file name for both configuration layers.
pub const CONFIG_FILENAME: &str = ".signature.json";

/// The effective configuration for one run, immutable once resolved.
#[derive(Debug, Clone)]
pub struct SignatureConfig {
  /// Author name (required).
  pub author: String,
  /// Contact email (required); also the detection key for existing
  /// signatures.
  pub email: String,
  /// Professional title, if any.
  pub title: Option<String>,
  /// Personal website URL, if any.
  pub website: Option<String>,
  /// Upwork profile URL, if any.
  pub upwork: Option<String>,
  /// Glob patterns for paths to exclude from processing.
  pub ignore: Vec<String>,
}

/// One configuration file on disk. Every field is optional so the local
/// layer can be partial.
#[derive(Debug, Default, Deserialize)]
pub struct ConfigLayer {
  #[serde(default)]
  pub author: Option<String>,
  #[serde(default)]
  pub email: Option<String>,
  #[serde(default)]
  pub title: Option<String>,
  #[serde(default)]
  pub website: Option<String>,
  #[serde(default)]
  pub upwork: Option<String>,
  #[serde(default)]
  pub ignore: Option<Vec<String>>,
}

/// Errors raised while resolving the configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
  /// The global config file does not exist.
  #[error(
    "global configuration not found at {path}\ncreate it with: {{\"author\": \"Your Name\", \"email\": \"you@example.com\"}}",
    path = .path.display()
  )]
  Missing { path: PathBuf },

  /// A config file exists but could not be read.
  #[error("failed to read config file '{path}'", path = .path.display())]
  Read {
    path: PathBuf,
    #[source]
    source: std::io::Error,
  },

  /// A config file contains invalid JSON. The source error carries the
  /// parse location.
  #[error("invalid JSON in {path}", path = .path.display())]
  Parse {
    path: PathBuf,
    #[source]
    source: serde_json::Error,
  },

  /// Required fields are absent or empty after the merge.
  #[error(
    "missing required configuration fields: {fields}\nplease update {path}",
    fields = .fields.join(", "),
    path = .path.display()
  )]
  MissingFields { path: PathBuf, fields: Vec<String> },
}

/// The default global config path: `$HOME/.signature.json`.
pub fn default_global_path() -> Option<PathBuf> {
  std::env::var_os("HOME").map(|home| PathBuf::from(home).join(CONFIG_FILENAME))
}

/// Resolves the effective configuration from the global layer and an
/// optional local layer.
///
/// # Errors
///
/// Returns [`ConfigError::Missing`] if the global file is absent, a
/// read/parse error for either layer, and [`ConfigError::MissingFields`] if
/// the merged record lacks a non-empty `author` or `email`.
pub fn resolve(global_path: &Path, local_path: Option<&Path>) -> Result<SignatureConfig, ConfigError> {
  if !global_path.exists() {
    return Err(ConfigError::Missing {
      path: global_path.to_path_buf(),
    });
  }

  let mut merged = load_layer(global_path)?;

  if let Some(local) = local_path {
    verbose_log!("Merging local config from {}", local.display());
    let local_layer = load_layer(local)?;
    merged = merge(merged, local_layer);
  }

  validate(merged, global_path)
}

fn load_layer(path: &Path) -> Result<ConfigLayer, ConfigError> {
  verbose_log!("Loading config from {}", path.display());

  let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Read {
    path: path.to_path_buf(),
    source: e,
  })?;

  serde_json::from_str(&content).map_err(|e| ConfigError::Parse {
    path: path.to_path_buf(),
    source: e,
  })
}

/// Merges a local layer over a global one, field by field.
///
/// The `ignore` list is replaced wholesale when the local layer sets one;
/// the two lists are never unioned.
fn merge(global: ConfigLayer, local: ConfigLayer) -> ConfigLayer {
  ConfigLayer {
    author: local.author.or(global.author),
    email: local.email.or(global.email),
    title: local.title.or(global.title),
    website: local.website.or(global.website),
    upwork: local.upwork.or(global.upwork),
    ignore: local.ignore.or(global.ignore),
  }
}

fn validate(layer: ConfigLayer, global_path: &Path) -> Result<SignatureConfig, ConfigError> {
  let author = non_empty(layer.author);
  let email = non_empty(layer.email);

  let mut missing = Vec::new();
  if author.is_none() {
    missing.push("author".to_string());
  }
  if email.is_none() {
    missing.push("email".to_string());
  }

  match (author, email) {
    (Some(author), Some(email)) => Ok(SignatureConfig {
      author,
      email,
      title: non_empty(layer.title),
      website: non_empty(layer.website),
      upwork: non_empty(layer.upwork),
      ignore: layer.ignore.unwrap_or_default(),
    }),
    _ => Err(ConfigError::MissingFields {
      path: global_path.to_path_buf(),
      fields: missing,
    }),
  }
}

fn non_empty(value: Option<String>) -> Option<String> {
  value.filter(|v| !v.trim().is_empty())
}
