use std::path::PathBuf;

use crate::catalog::{Coverage, ReconcileStats};
use crate::cli::exit_status::ExitStatus;
use crate::core::ExtractionFailure;

#[derive(Debug)]
pub enum CommandSummary {
    Extract(ExtractSummary),
    Sync(SyncSummary),
    Status(StatusSummary),
    Clean(CleanSummary),
    Init(InitSummary),
}

#[derive(Debug)]
pub struct ExtractSummary {
    pub catalog_path: PathBuf,
    pub files_scanned: usize,
    pub key_count: usize,
    pub stats: ReconcileStats,
    pub report_path: Option<PathBuf>,
}

#[derive(Debug)]
pub struct LocaleSync {
    pub locale: String,
    pub stats: ReconcileStats,
}

#[derive(Debug)]
pub struct SyncSummary {
    pub source_locale: String,
    pub locales: Vec<LocaleSync>,
}

#[derive(Debug)]
pub struct LocaleStatus {
    pub locale: String,
    pub coverage: Coverage,
    /// Missing keys in source order.
    pub missing: Vec<String>,
}

#[derive(Debug)]
pub struct StatusSummary {
    pub source_locale: String,
    pub locales: Vec<LocaleStatus>,
}

#[derive(Debug)]
pub struct LocaleClean {
    pub locale: String,
    pub removed: Vec<String>,
}

#[derive(Debug)]
pub struct CleanSummary {
    pub is_apply: bool,
    pub locales: Vec<LocaleClean>,
}

#[derive(Debug)]
pub struct InitSummary {
    /// False when a config file already existed.
    pub created: bool,
}

/// Result of running a lingo command
#[derive(Debug)]
pub struct CommandResult {
    pub summary: CommandSummary,
    /// Issues that make the command exit with [`ExitStatus::Failure`].
    pub issue_count: usize,
    /// Source files skipped during extraction.
    pub failures: Vec<ExtractionFailure>,
}

impl CommandResult {
    pub fn new(summary: CommandSummary) -> Self {
        Self {
            summary,
            issue_count: 0,
            failures: Vec::new(),
        }
    }

    pub fn with_issues(mut self, issue_count: usize) -> Self {
        self.issue_count = issue_count;
        self
    }

    pub fn exit_status(&self) -> ExitStatus {
        if self.issue_count > 0 {
            ExitStatus::Failure
        } else {
            ExitStatus::Success
        }
    }
}
