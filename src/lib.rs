//! # signet
//!
//! A tool that stamps source files with a standardized attribution
//! signature: author, contact links, and creation date, rendered in the
//! comment syntax of each file type.
//!
//! `signet` modifies files in place and never touches a file that already
//! carries a current signature, so it is safe to run repeatedly, either as
//! a batch command over a directory tree or from a pre-commit hook over the
//! staged file set.
//!
//! ## Features
//!
//! * Recursively scan directories and insert signatures in supported files
//! * Comment syntax chosen per extension (hash, slash, HTML, CSS blocks)
//! * Layered JSON configuration: `~/.signature.json` plus a per-project
//!   override
//! * Shebang lines stay on the first line; the signature follows
//! * `--force` refreshes an existing signature while preserving its
//!   original creation date
//! * Dry-run mode with optional diffs
//!
//! ## Usage as a Library
//!
//! ```rust,no_run
//! use std::path::Path;
//!
//! use signet::config::SignatureConfig;
//! use signet::processor::{Options, Processor};
//!
//! fn main() -> anyhow::Result<()> {
//!   let config = SignatureConfig {
//!     author: "Jane Doe".to_string(),
//!     email: "jane@example.com".to_string(),
//!     title: None,
//!     website: None,
//!     upwork: None,
//!     ignore: vec![],
//!   };
//!
//!   let processor = Processor::new(config, Options::default())?;
//!   let result = processor.process_path(Path::new("src"))?;
//!
//!   println!("signed {} files", result.processed);
//!   Ok(())
//! }
//! ```
//!
//! ## Modules
//!
//! * [`processor`] - Core pipeline for signing files and walking trees
//! * [`config`] - Layered configuration loading and merging
//! * [`styles`] - Extension to comment-style registry
//! * [`detect`] - Existing-signature detection
//! * [`render`] - Signature block rendering
//!
//! [`processor`]: crate::processor
//! [`config`]: crate::config
//! [`styles`]: crate::styles
//! [`detect`]: crate::detect
//! [`render`]: crate::render

pub mod cli;
pub mod config;
pub mod detect;
pub mod diff;
pub mod filter;
pub mod logging;
pub mod output;
pub mod processor;
pub mod render;
pub mod styles;
