use std::{
    fs, io,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result, bail};
use indexmap::IndexMap;

use crate::catalog::{Catalog, coverage::sort_keys};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WriteOptions {
    /// Order keys with [`sort_keys`] before writing.
    pub sort: bool,
    /// Single-line JSON instead of 2-space indentation.
    pub compact: bool,
}

/// Read a catalog. A missing file is an empty catalog; malformed JSON or a
/// non-string value is an error.
pub fn read_catalog(path: &Path) -> Result<Catalog> {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Catalog::new()),
        Err(e) => return Err(e).with_context(|| format!("Failed to read file: {}", path.display())),
    };
    serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse catalog (expected a flat object of strings): {}", path.display()))
}

/// Serialize a catalog with exactly one trailing newline.
pub fn format_catalog(catalog: &Catalog, compact: bool) -> Result<String> {
    let content = if compact {
        serde_json::to_string(catalog)
    } else {
        serde_json::to_string_pretty(catalog)
    }
    .context("Failed to serialize catalog")?;
    Ok(format!("{}\n", content))
}

/// Write a catalog, creating parent directories as needed.
pub fn write_catalog(path: &Path, catalog: &Catalog, options: WriteOptions) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }

    let content = if options.sort {
        format_catalog(&sort_keys(catalog), options.compact)?
    } else {
        format_catalog(catalog, options.compact)?
    };

    fs::write(path, content).with_context(|| format!("Failed to write file: {}", path.display()))
}

/// `*.json` catalogs in `dir`, keyed by locale (file stem), sorted by locale.
pub fn list_locale_files(dir: &Path) -> Result<IndexMap<String, PathBuf>> {
    if !dir.exists() {
        bail!(
            "Locales directory '{}' does not exist.\n\
             Hint: Check your .lingorc.json 'localesDir' setting, or run `lingo extract` first.",
            dir.display()
        );
    }
    if !dir.is_dir() {
        bail!("'{}' is not a directory.", dir.display());
    }

    let mut files = IndexMap::new();
    for entry in fs::read_dir(dir).with_context(|| format!("Failed to read directory: {}", dir.display()))? {
        let path = entry?.path();
        if path.is_file()
            && path.extension().and_then(|e| e.to_str()) == Some("json")
            && let Some(locale) = path.file_stem().and_then(|s| s.to_str())
        {
            files.insert(locale.to_string(), path.clone());
        }
    }
    files.sort_keys();
    Ok(files)
}
