use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use glob::{MatchOptions, Pattern};
use tracing::warn;
use walkdir::{DirEntry, WalkDir};

const MATCH_OPTIONS: MatchOptions = MatchOptions {
    case_sensitive: true,
    require_literal_separator: true,
    require_literal_leading_dot: false,
};

/// Result of scanning files.
#[derive(Debug, Default)]
pub struct ScanResult {
    /// Matching files, sorted by path.
    pub files: Vec<PathBuf>,
    /// Entries that couldn't be read.
    pub skipped_count: usize,
}

fn compile(patterns: &[String], field: &str) -> Result<Vec<Pattern>> {
    patterns
        .iter()
        .map(|p| Pattern::new(p).with_context(|| format!("Invalid glob pattern in '{}': \"{}\"", field, p)))
        .collect()
}

/// Path of `path` relative to `root`, with `/` separators.
pub fn relative_path(root: &Path, path: &Path) -> String {
    let rel = path.strip_prefix(root).unwrap_or(path);
    rel.components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}

/// Enumerate files under `root` whose relative path matches any `include`
/// pattern and no `exclude` pattern. Excluded directories are not descended.
pub fn scan_files(root: &Path, include: &[String], exclude: &[String]) -> Result<ScanResult> {
    let include = compile(include, "include")?;
    let exclude = compile(exclude, "exclude")?;

    let is_excluded_dir = |entry: &DirEntry| {
        if entry.depth() == 0 || !entry.file_type().is_dir() {
            return false;
        }
        // Probe a child path so `**/dist/**` prunes `dist` itself
        let probe = format!("{}/_", relative_path(root, entry.path()));
        exclude.iter().any(|p| p.matches_with(&probe, MATCH_OPTIONS))
    };

    let mut result = ScanResult::default();
    for entry in WalkDir::new(root).into_iter().filter_entry(|e| !is_excluded_dir(e)) {
        let entry = match entry {
            Ok(e) => e,
            Err(e) => {
                result.skipped_count += 1;
                warn!(error = %e, "cannot access path");
                continue;
            }
        };
        if !entry.file_type().is_file() {
            continue;
        }

        let rel = relative_path(root, entry.path());
        let included = include.iter().any(|p| p.matches_with(&rel, MATCH_OPTIONS));
        let excluded = exclude.iter().any(|p| p.matches_with(&rel, MATCH_OPTIONS));
        if included && !excluded {
            result.files.push(entry.into_path());
        }
    }

    result.files.sort();
    Ok(result)
}
