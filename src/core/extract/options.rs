use crate::config::{Config, DEFAULT_EXCLUDE, DEFAULT_INCLUDE};
use crate::core::extract::walker::default_function_names;

/// Options shared by directory, file and in-memory extraction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractOptions {
    /// Glob patterns (relative to the root) a file must match.
    pub include: Vec<String>,
    /// Glob patterns that exclude a file or a whole directory.
    pub exclude: Vec<String>,
    /// Callee names treated as translation functions.
    pub function_names: Vec<String>,
    /// Use pattern extraction when a JavaScript file doesn't parse cleanly.
    pub fallback_to_regex: bool,
}

impl Default for ExtractOptions {
    fn default() -> Self {
        Self {
            include: DEFAULT_INCLUDE.iter().map(|s| s.to_string()).collect(),
            exclude: DEFAULT_EXCLUDE.iter().map(|s| s.to_string()).collect(),
            function_names: default_function_names(),
            fallback_to_regex: true,
        }
    }
}

impl ExtractOptions {
    pub fn from_config(config: &Config) -> Self {
        Self {
            include: config.include.clone(),
            exclude: config.exclude.clone(),
            function_names: config.function_names.clone(),
            fallback_to_regex: config.fallback_to_regex,
        }
    }

    pub fn with_function_names<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.function_names = names.into_iter().map(Into::into).collect();
        self
    }

    pub fn without_fallback(mut self) -> Self {
        self.fallback_to_regex = false;
        self
    }
}
