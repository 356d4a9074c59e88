use std::{
    env,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};

use crate::catalog::{WriteOptions, list_locale_files};
use crate::cli::args::CommonArgs;
use crate::config::{Config, ConfigLoadResult, load_config};

/// Configuration and resolved paths for one CLI invocation.
#[derive(Debug)]
pub struct ProjectContext {
    pub config: Config,
    pub source_root: PathBuf,
    pub locales_dir: PathBuf,
}

impl ProjectContext {
    /// Load the config found from the working directory and apply CLI overrides.
    ///
    /// Config paths resolve against the config file's directory; CLI paths
    /// resolve against the working directory.
    pub fn load(common: &CommonArgs) -> Result<Self> {
        let cwd = env::current_dir().context("Failed to get current directory")?;
        Self::load_from(&cwd, common)
    }

    pub fn load_from(cwd: &Path, common: &CommonArgs) -> Result<Self> {
        let ConfigLoadResult {
            mut config,
            base_dir,
            from_file,
        } = load_config(cwd)?;
        if !from_file {
            tracing::debug!("no {} found, using defaults", crate::config::CONFIG_FILE_NAME);
        }

        if let Some(locale) = &common.source_locale {
            config.source_locale = locale.clone();
        }
        let source_root = match &common.source_root {
            Some(path) => cwd.join(path),
            None => config.source_root_in(&base_dir),
        };
        let locales_dir = match &common.locales_dir {
            Some(path) => cwd.join(path),
            None => config.locales_dir_in(&base_dir),
        };

        Ok(Self {
            config,
            source_root,
            locales_dir,
        })
    }

    pub fn source_locale(&self) -> &str {
        &self.config.source_locale
    }

    pub fn catalog_path(&self, locale: &str) -> PathBuf {
        self.locales_dir.join(format!("{}.json", locale))
    }

    pub fn source_catalog_path(&self) -> PathBuf {
        self.catalog_path(self.source_locale())
    }

    pub fn write_options(&self) -> WriteOptions {
        WriteOptions {
            sort: self.config.sort_keys,
            compact: self.config.compact,
        }
    }

    /// Every locale catalog except the source locale's, sorted by locale.
    pub fn target_locales(&self) -> Result<Vec<(String, PathBuf)>> {
        Ok(list_locale_files(&self.locales_dir)?
            .into_iter()
            .filter(|(locale, _)| locale != self.source_locale())
            .collect())
    }
}
