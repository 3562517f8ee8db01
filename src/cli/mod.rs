//! # CLI Module
//!
//! Command-line interface implementation. Uses clap for argument parsing
//! with a default `run` command and a `hook` subcommand for pre-commit
//! integration.

mod run;

use anyhow::Result;
use clap::builder::styling::{AnsiColor, Color, Style, Styles};
use clap::{Parser, Subcommand};
pub use run::{HookArgs, RunArgs, run, run_hook};

const CUSTOM_STYLES: Styles = Styles::styled()
  .header(Style::new().fg_color(Some(Color::Ansi(AnsiColor::Green))).bold())
  .usage(Style::new().fg_color(Some(Color::Ansi(AnsiColor::Green))).bold())
  .literal(Style::new().fg_color(Some(Color::Ansi(AnsiColor::Blue))).bold())
  .placeholder(Style::new().fg_color(Some(Color::Ansi(AnsiColor::Cyan))))
  .error(Style::new().fg_color(Some(Color::Ansi(AnsiColor::Red))).bold())
  .valid(Style::new().fg_color(Some(Color::Ansi(AnsiColor::Green))))
  .invalid(Style::new().fg_color(Some(Color::Ansi(AnsiColor::Yellow))));

/// Top-level CLI arguments
#[derive(Parser, Debug)]
#[command(
  author,
  version,
  about,
  styles = CUSTOM_STYLES,
  after_help = "Examples:
  # Sign every supported file under the current directory
  signet

  # Show what would change without modifying anything
  signet --dry-run

  # Show the pending changes as diffs
  signet --dry-run --show-diff

  # Refresh existing signatures (preserves creation dates)
  signet --force

  # Process a specific directory
  signet --path ./src

  # Process the staged file list from a pre-commit hook
  signet hook src/app.py src/util.py
",
  help_template = "{before-help}{name} v{version}
{about-section}
{usage-heading} {usage}

{all-args}{after-help}
"
)]
pub struct Cli {
  #[command(subcommand)]
  pub command: Option<Command>,

  #[command(flatten)]
  pub run_args: RunArgs,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Command {
  /// Add or update signatures in source files (default)
  Run(RunArgs),

  /// Process an explicit file list from a pre-commit hook
  Hook(HookArgs),
}

impl Cli {
  /// Parse CLI arguments and return the Cli struct
  pub fn parse_args() -> Self {
    Self::parse()
  }

  /// Dispatch to the selected command.
  pub fn execute(self) -> Result<()> {
    match self.command {
      Some(Command::Run(args)) => run(args),
      Some(Command::Hook(args)) => run_hook(args),
      None => run(self.run_args),
    }
  }
}
