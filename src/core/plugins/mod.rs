//! Framework plugins: per-dialect extractors selected by file extension.
//!
//! - `registry`: ordered plugin set with replace-by-name registration
//! - `svelte`: `.svelte` components
//! - `vue`: `.vue` single-file components

pub mod registry;
pub mod svelte;
pub mod vue;

pub use registry::PluginRegistry;
pub use svelte::SveltePlugin;
pub use vue::VuePlugin;

use anyhow::Result;

use crate::core::{data::ExtractionItem, extract::ExtractOptions};

/// Whether a plugin's structural parser can be used.
///
/// Decided once when the plugin is built and never re-probed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Capability {
    Available,
    Unavailable { reason: String },
}

impl Capability {
    pub fn unavailable(reason: impl Into<String>) -> Self {
        Self::Unavailable {
            reason: reason.into(),
        }
    }

    pub fn is_available(&self) -> bool {
        matches!(self, Self::Available)
    }
}

/// An extractor for one component dialect.
///
/// `capability` only gates registry lookups; `extract` must always work,
/// falling back to pattern extraction when the structural parser is missing.
pub trait FrameworkPlugin: Send + Sync {
    /// Unique name; registering the same name again replaces the plugin.
    fn name(&self) -> &str;

    /// Handled extensions, lowercase and without the leading dot.
    fn extensions(&self) -> &[&str];

    fn capability(&self) -> &Capability;

    fn is_available(&self) -> bool {
        self.capability().is_available()
    }

    fn extract(&self, code: &str, file: &str, options: &ExtractOptions) -> Result<Vec<ExtractionItem>>;
}
