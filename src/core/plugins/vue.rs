use std::sync::Arc;

use anyhow::Result;

use crate::core::{
    data::ExtractionItem,
    extract::{ExtractOptions, component::extract_component, pattern::Dialect},
    parsers::markup::{ComponentParser, VueMarkupParser},
    plugins::{Capability, FrameworkPlugin},
};

/// Extractor for `.vue` single-file components.
pub struct VuePlugin {
    parser: Option<Arc<dyn ComponentParser>>,
    capability: Capability,
}

impl VuePlugin {
    /// Plugin backed by the built-in markup parser.
    pub fn new() -> Self {
        Self::with_parser(Arc::new(VueMarkupParser))
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
            capability: Capability::unavailable("no Vue parser configured"),
        }
    }
}

impl Default for VuePlugin {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameworkPlugin for VuePlugin {
    fn name(&self) -> &str {
        "vue"
    }

    fn extensions(&self) -> &[&str] {
        &["vue"]
    }

    fn capability(&self) -> &Capability {
        &self.capability
    }

    fn extract(&self, code: &str, file: &str, options: &ExtractOptions) -> Result<Vec<ExtractionItem>> {
        extract_component(code, file, Dialect::Vue, self.parser.as_deref(), options)
    }
}
