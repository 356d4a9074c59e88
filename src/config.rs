use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result, bail};
use glob::Pattern;
use serde::{Deserialize, Serialize};

use crate::core::extract::DEFAULT_FUNCTION_NAMES;

pub const CONFIG_FILE_NAME: &str = ".lingorc.json";

pub const DEFAULT_INCLUDE: &[&str] = &[
    "**/*.js",
    "**/*.jsx",
    "**/*.mjs",
    "**/*.cjs",
    "**/*.ts",
    "**/*.tsx",
    "**/*.svelte",
    "**/*.vue",
];

pub const DEFAULT_EXCLUDE: &[&str] = &[
    "**/node_modules/**",
    "**/dist/**",
    "**/build/**",
    "**/.next/**",
    "**/.nuxt/**",
    "**/.svelte-kit/**",
    "**/coverage/**",
];

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    #[serde(default = "default_source_root")]
    pub source_root: String,
    #[serde(default = "default_include")]
    pub include: Vec<String>,
    #[serde(default = "default_exclude")]
    pub exclude: Vec<String>,
    #[serde(default = "default_function_names")]
    pub function_names: Vec<String>,
    #[serde(default = "default_true")]
    pub fallback_to_regex: bool,
    #[serde(default = "default_locales_dir")]
    pub locales_dir: String,
    #[serde(default = "default_source_locale")]
    pub source_locale: String,
    #[serde(default = "default_true")]
    pub sort_keys: bool,
    #[serde(default)]
    pub compact: bool,
}

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|s| s.to_string()).collect()
}

fn default_source_root() -> String {
    "./".to_string()
}

fn default_include() -> Vec<String> {
    strings(DEFAULT_INCLUDE)
}

fn default_exclude() -> Vec<String> {
    strings(DEFAULT_EXCLUDE)
}

fn default_function_names() -> Vec<String> {
    strings(DEFAULT_FUNCTION_NAMES)
}

fn default_locales_dir() -> String {
    "./locales".to_string()
}

fn default_source_locale() -> String {
    "en".to_string()
}

fn default_true() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            source_root: default_source_root(),
            include: default_include(),
            exclude: default_exclude(),
            function_names: default_function_names(),
            fallback_to_regex: true,
            locales_dir: default_locales_dir(),
            source_locale: default_source_locale(),
            sort_keys: true,
            compact: false,
        }
    }
}

impl Config {
    /// Validate configuration values.
    ///
    /// Returns an error if any glob pattern in `include` or `exclude` is
    /// invalid, or if no translation function names are configured.
    pub fn validate(&self) -> Result<()> {
        for pattern in &self.include {
            Pattern::new(pattern).with_context(|| format!("Invalid glob pattern in 'include': \"{}\"", pattern))?;
        }
        for pattern in &self.exclude {
            Pattern::new(pattern).with_context(|| format!("Invalid glob pattern in 'exclude': \"{}\"", pattern))?;
        }
        if self.function_names.iter().all(|name| name.trim().is_empty()) {
            bail!("'functionNames' must list at least one function name");
        }
        Ok(())
    }

    /// Source root resolved against `base`.
    pub fn source_root_in(&self, base: &Path) -> PathBuf {
        base.join(&self.source_root)
    }

    /// Locales directory resolved against `base`.
    pub fn locales_dir_in(&self, base: &Path) -> PathBuf {
        base.join(&self.locales_dir)
    }
}

pub fn default_config_json() -> Result<String> {
    let config = Config::default();
    serde_json::to_string_pretty(&config).context("Failed to generate default config.")
}

pub fn find_config_file(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();

    loop {
        let config_path = current.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            return Some(config_path);
        }
        if current.join(".git").exists() {
            return None;
        }
        if !current.pop() {
            return None;
        }
    }
}

/// Result of loading configuration.
#[derive(Debug)]
pub struct ConfigLoadResult {
    pub config: Config,
    /// Directory paths in the config are relative to; the config file's
    /// directory, or the start directory when using defaults.
    pub base_dir: PathBuf,
    /// True if config was loaded from a file, false if using defaults.
    pub from_file: bool,
}

pub fn load_config(start_dir: &Path) -> Result<ConfigLoadResult> {
    match find_config_file(start_dir) {
        Some(path) => {
            let content =
                fs::read_to_string(&path).with_context(|| format!("Failed to read config file: {:?}", path))?;
            let config: Config = serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse config file: {:?}", path))?;
            config.validate()?;
            let base_dir = path
                .parent()
                .map(Path::to_path_buf)
                .unwrap_or_else(|| start_dir.to_path_buf());
            Ok(ConfigLoadResult {
                config,
                base_dir,
                from_file: true,
            })
        }
        None => Ok(ConfigLoadResult {
            config: Config::default(),
            base_dir: start_dir.to_path_buf(),
            from_file: false,
        }),
    }
}
