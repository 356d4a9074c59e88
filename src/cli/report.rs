//! Report formatting and printing utilities.
//!
//! Kept out of the commands so the library can be used without any terminal
//! output. Colors follow `colored`'s defaults, which honour `NO_COLOR`.

use std::io::{self, Write};

use colored::Colorize;

use super::commands::{
    CleanSummary, CommandResult, CommandSummary, ExtractSummary, InitSummary, StatusSummary, SyncSummary,
};
use crate::config::CONFIG_FILE_NAME;
use crate::core::ExtractionFailure;
use crate::utils::pluralize;

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Failure mark for consistent output formatting.
pub const FAILURE_MARK: &str = "\u{2718}"; // ✘

/// Print a command result: the summary to stdout, warnings to stderr.
pub fn print(result: &CommandResult, verbose: bool) {
    print_to(result, verbose, &mut io::stdout().lock(), &mut io::stderr().lock());
}

pub fn print_to<O: Write, E: Write>(result: &CommandResult, verbose: bool, out: &mut O, err: &mut E) {
    match &result.summary {
        CommandSummary::Extract(summary) => print_extract(summary, out),
        CommandSummary::Sync(summary) => print_sync(summary, out),
        CommandSummary::Status(summary) => print_status(summary, verbose, out),
        CommandSummary::Clean(summary) => print_clean(summary, out),
        CommandSummary::Init(summary) => print_init(summary, out, err),
    }
    print_failures(&result.failures, verbose, err);
}

fn print_failures<W: Write>(failures: &[ExtractionFailure], verbose: bool, writer: &mut W) {
    if failures.is_empty() {
        return;
    }
    if verbose {
        for failure in failures {
            let _ = writeln!(
                writer,
                "{} skipped {}: {}",
                "warning:".bold().yellow(),
                failure.file,
                failure.message
            );
        }
    } else {
        let _ = writeln!(
            writer,
            "{} {} could not be extracted (use {} for details)",
            "warning:".bold().yellow(),
            pluralize(failures.len(), "file", "files"),
            "-v".cyan()
        );
    }
}

fn print_extract<W: Write>(summary: &ExtractSummary, writer: &mut W) {
    let _ = writeln!(
        writer,
        "{} {}",
        SUCCESS_MARK.green(),
        format!(
            "Extracted {} from {} into {}",
            pluralize(summary.key_count, "key", "keys"),
            pluralize(summary.files_scanned, "file", "files"),
            summary.catalog_path.display()
        )
        .green()
    );
    let stats = &summary.stats;
    let _ = writeln!(
        writer,
        "  added: {}, removed: {}, unchanged: {}",
        stats.added, stats.removed, stats.unchanged
    );
    if let Some(path) = &summary.report_path {
        let _ = writeln!(writer, "  report: {}", path.display());
    }
}

fn print_sync<W: Write>(summary: &SyncSummary, writer: &mut W) {
    if summary.locales.is_empty() {
        let _ = writeln!(
            writer,
            "No locale catalogs to sync besides '{}'.",
            summary.source_locale
        );
        return;
    }

    let _ = writeln!(
        writer,
        "{} {}",
        SUCCESS_MARK.green(),
        format!(
            "Synced {} against '{}'",
            pluralize(summary.locales.len(), "locale", "locales"),
            summary.source_locale
        )
        .green()
    );
    for sync in &summary.locales {
        let stats = &sync.stats;
        let mut line = format!(
            "added: {}, removed: {}, unchanged: {}",
            stats.added, stats.removed, stats.unchanged
        );
        if stats.mismatched > 0 {
            let mismatches = pluralize(stats.mismatched, "param mismatch", "param mismatches");
            line.push_str(&format!(", {}", mismatches.yellow()));
        }
        let _ = writeln!(writer, "  {}: {}", sync.locale.bold(), line);
    }
}

fn print_status<W: Write>(summary: &StatusSummary, verbose: bool, writer: &mut W) {
    if summary.locales.is_empty() {
        let _ = writeln!(
            writer,
            "No locale catalogs besides '{}'.",
            summary.source_locale
        );
        return;
    }

    let width = summary.locales.iter().map(|l| l.locale.len()).max().unwrap_or(0);
    let mut missing_total = 0;
    for status in &summary.locales {
        let coverage = &status.coverage;
        missing_total += coverage.missing;

        let percentage = format!("{:>3}%", coverage.percentage);
        let percentage = if coverage.missing == 0 {
            percentage.green()
        } else {
            percentage.yellow()
        };
        let mut line = format!(
            "  {:<width$}  {}  {}/{}",
            status.locale,
            percentage,
            coverage.translated,
            coverage.total,
            width = width
        );
        if coverage.missing > 0 {
            line.push_str(&format!("  ({} missing)", coverage.missing));
        }
        let _ = writeln!(writer, "{}", line);

        if verbose {
            for key in &status.missing {
                let _ = writeln!(writer, "      - {}", key);
            }
        }
    }

    if missing_total == 0 {
        let _ = writeln!(
            writer,
            "{} {}",
            SUCCESS_MARK.green(),
            "All locales are fully translated".green()
        );
    } else {
        let _ = writeln!(
            writer,
            "{} {}",
            FAILURE_MARK.red(),
            pluralize(missing_total, "missing translation", "missing translations")
        );
    }
}

fn print_clean<W: Write>(summary: &CleanSummary, writer: &mut W) {
    let total: usize = summary.locales.iter().map(|l| l.removed.len()).sum();
    if total == 0 {
        let _ = writeln!(writer, "{} {}", SUCCESS_MARK.green(), "Nothing to clean".green());
        return;
    }

    for locale in &summary.locales {
        let _ = writeln!(
            writer,
            "  {}: {}",
            locale.locale.bold(),
            pluralize(locale.removed.len(), "key", "keys")
        );
        if !summary.is_apply {
            for key in &locale.removed {
                let _ = writeln!(writer, "      - {}", key);
            }
        }
    }

    let keys = pluralize(total, "key", "keys");
    let files = pluralize(summary.locales.len(), "file", "files");
    if summary.is_apply {
        let _ = writeln!(writer, "{} {} in {}.", "Removed".green().bold(), keys, files);
    } else {
        let _ = writeln!(writer, "{} {} in {}.", "Would remove".yellow().bold(), keys, files);
        let _ = writeln!(writer, "Run with {} to remove these keys.", "--apply".cyan());
    }
}

fn print_init<O: Write, E: Write>(summary: &InitSummary, out: &mut O, err: &mut E) {
    if summary.created {
        let _ = writeln!(
            out,
            "{} {}",
            SUCCESS_MARK.green(),
            format!("Created {}", CONFIG_FILE_NAME).green()
        );
    } else {
        let _ = writeln!(err, "{} {} already exists", "error:".bold().red(), CONFIG_FILE_NAME);
    }
}
