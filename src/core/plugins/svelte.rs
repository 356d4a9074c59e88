use std::sync::Arc;

use anyhow::Result;

use crate::core::{
    data::ExtractionItem,
    extract::{ExtractOptions, component::extract_component, pattern::Dialect},
    parsers::markup::{ComponentParser, SvelteMarkupParser},
    plugins::{Capability, FrameworkPlugin},
};

/// Extractor for `.svelte` components.
pub struct SveltePlugin {
    parser: Option<Arc<dyn ComponentParser>>,
    capability: Capability,
}

impl SveltePlugin {
    /// Plugin backed by the built-in markup parser.
    pub fn new() -> Self {
        Self::with_parser(Arc::new(SvelteMarkupParser))
    }

    pub fn with_parser(parser: Arc<dyn ComponentParser>) -> Self {
        Self {
            parser: Some(parser),
            capability: Capability::Available,
        }
    }

    /// Plugin that only ever takes the section/pattern fallback path.
    pub fn without_parser() -> Self {
        Self {
            parser: None,
            capability: Capability::unavailable("no Svelte parser configured"),
        }
    }
}

impl Default for SveltePlugin {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameworkPlugin for SveltePlugin {
    fn name(&self) -> &str {
        "svelte"
    }

    fn extensions(&self) -> &[&str] {
        &["svelte"]
    }

    fn capability(&self) -> &Capability {
        &self.capability
    }

    fn extract(&self, code: &str, file: &str, options: &ExtractOptions) -> Result<Vec<ExtractionItem>> {
        extract_component(code, file, Dialect::Svelte, self.parser.as_deref(), options)
    }
}
