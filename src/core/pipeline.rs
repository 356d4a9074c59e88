//! Extraction entry points: directory, single file, in-memory source.
//!
//! Dispatch per file:
//! 1. an available registry plugin for the extension
//! 2. built-in script extraction (`.ts`/`.tsx`, `.js`/`.jsx`/`.mjs`/`.cjs`)
//! 3. built-in section/pattern extraction for `.svelte`/`.vue` when no
//!    plugin is available
//! 4. nothing for any other extension
//!
//! Directory extraction is best-effort: a file that fails is logged,
//! recorded in [`DirectoryExtraction::failures`] and skipped.

use std::{
    fs,
    path::Path,
    sync::{Mutex, PoisonError},
};

use anyhow::{Context, Result};
use rayon::prelude::*;
use tracing::debug;

use crate::core::{
    data::ExtractionItem,
    extract::{
        ExtractOptions,
        component::extract_component,
        pattern::Dialect,
        script::{ScriptKind, extract_script_file},
    },
    file_scanner::{relative_path, scan_files},
    plugins::PluginRegistry,
};

/// Reported once per processed file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Progress<'a> {
    pub file: &'a str,
    /// 1-based running count; strictly increasing, reaches `total` once.
    pub current: usize,
    pub total: usize,
}

/// A file skipped during directory extraction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractionFailure {
    pub file: String,
    pub message: String,
}

#[derive(Debug, Default)]
pub struct DirectoryExtraction {
    /// Items from every file, files in enumeration order.
    pub items: Vec<ExtractionItem>,
    pub files_scanned: usize,
    pub failures: Vec<ExtractionFailure>,
}

/// Extract from every matching file under `root`.
///
/// Item `file` fields are paths relative to `root` with `/` separators.
pub fn extract_from_directory(
    root: &Path,
    registry: &PluginRegistry,
    options: &ExtractOptions,
    on_progress: Option<&(dyn Fn(&Progress<'_>) + Sync)>,
) -> Result<DirectoryExtraction> {
    let scan = scan_files(root, &options.include, &options.exclude)?;
    let total = scan.files.len();
    let completed = Mutex::new(0usize);

    let results: Vec<(String, Result<Vec<ExtractionItem>>)> = scan
        .files
        .par_iter()
        .map(|path| {
            let file = relative_path(root, path);
            let result = fs::read_to_string(path)
                .with_context(|| format!("Failed to read {}", file))
                .and_then(|code| extract_from_source(&code, &file, registry, options));

            // Held while reporting so callbacks observe 1, 2, ..., total in order
            let mut done = completed.lock().unwrap_or_else(PoisonError::into_inner);
            *done += 1;
            if let Some(report) = on_progress {
                report(&Progress {
                    file: &file,
                    current: *done,
                    total,
                });
            }
            drop(done);

            (file, result)
        })
        .collect();

    let mut extraction = DirectoryExtraction {
        files_scanned: total,
        ..Default::default()
    };
    for (file, result) in results {
        match result {
            Ok(items) => extraction.items.extend(items),
            Err(err) => {
                debug!(file = %file, error = %format!("{:#}", err), "skipping file");
                extraction.failures.push(ExtractionFailure {
                    file,
                    message: format!("{:#}", err),
                });
            }
        }
    }

    debug!(
        files = total,
        items = extraction.items.len(),
        failures = extraction.failures.len(),
        "directory extraction finished"
    );
    Ok(extraction)
}

/// Extract from one file on disk. I/O and parse failures propagate.
pub fn extract_from_file(path: &Path, registry: &PluginRegistry, options: &ExtractOptions) -> Result<Vec<ExtractionItem>> {
    let code = fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))?;
    extract_from_source(&code, &path.to_string_lossy(), registry, options)
}

/// Extract from in-memory source; `file` selects the extractor by extension
/// and is recorded on every item.
pub fn extract_from_source(
    code: &str,
    file: &str,
    registry: &PluginRegistry,
    options: &ExtractOptions,
) -> Result<Vec<ExtractionItem>> {
    let extension = Path::new(file)
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase)
        .unwrap_or_default();

    if let Some(plugin) = registry.lookup(&extension) {
        return plugin
            .extract(code, file, options)
            .with_context(|| format!("{} plugin failed on {}", plugin.name(), file));
    }

    match extension.as_str() {
        "svelte" => extract_component(code, file, Dialect::Svelte, None, options),
        "vue" => extract_component(code, file, Dialect::Vue, None, options),
        ext => match ScriptKind::from_extension(ext) {
            Some(kind) => Ok(extract_script_file(code, file, kind, options)?),
            None => Ok(Vec::new()),
        },
    }
}
