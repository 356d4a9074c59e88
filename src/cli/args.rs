//! CLI argument definitions using clap.
//!
//! ## Commands
//!
//! - `extract`: Extract keys from the source tree into the source-locale catalog
//! - `sync`: Reconcile every other locale catalog against the source locale
//! - `status`: Print translation coverage per locale
//! - `clean`: Drop blank (and optionally untranslated) entries from locale catalogs
//! - `init`: Initialize a lingo configuration file

use std::path::PathBuf;

use clap::{Args, CommandFactory, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Enable verbose output (debug logging, per-file details)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

impl Arguments {
    /// Check if a command was provided, otherwise print help and return None.
    pub fn with_command_or_help(self) -> Option<Self> {
        if self.command.is_none() {
            Self::command().print_help().ok();
            None
        } else {
            Some(self)
        }
    }
}

/// Overrides shared by every command that touches the project.
#[derive(Debug, Clone, Default, Args)]
pub struct CommonArgs {
    /// Source code root directory (overrides config file)
    #[arg(long)]
    pub source_root: Option<PathBuf>,

    /// Locale catalogs directory (overrides config file)
    #[arg(long)]
    pub locales_dir: Option<PathBuf>,

    /// Source locale (overrides config file)
    #[arg(long)]
    pub source_locale: Option<String>,
}

#[derive(Debug, Args)]
pub struct ExtractCommand {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Remove keys that are no longer used in the source code
    #[arg(long)]
    pub flush: bool,

    /// Write a JSON report of every extracted key and its locations
    #[arg(long, value_name = "PATH")]
    pub report: Option<PathBuf>,
}

#[derive(Debug, Args)]
pub struct SyncCommand {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Remove keys that are not in the source-locale catalog
    #[arg(long)]
    pub flush: bool,

    /// Replace values still equal to their key with the source value
    #[arg(long)]
    pub remove_untranslated: bool,

    /// Mark translations whose {placeholders} differ from the source
    #[arg(long)]
    pub validate_params: bool,
}

#[derive(Debug, Args)]
pub struct StatusCommand {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Only report this locale
    #[arg(long)]
    pub locale: Option<String>,
}

#[derive(Debug, Args)]
pub struct CleanCommand {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Also drop values still equal to their key
    #[arg(long)]
    pub remove_untranslated: bool,

    /// Actually rewrite catalogs (default is dry-run)
    #[arg(long)]
    pub apply: bool,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Extract translation keys from source files into the source-locale catalog
    Extract(ExtractCommand),
    /// Reconcile locale catalogs against the source-locale catalog
    Sync(SyncCommand),
    /// Show translation coverage for each locale
    Status(StatusCommand),
    /// Remove blank or untranslated entries from locale catalogs
    Clean(CleanCommand),
    /// Initialize a new .lingorc.json configuration file
    Init,
}
