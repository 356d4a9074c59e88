//! Plugin registry owned by an extraction session.

use std::sync::Arc;

use crate::core::plugins::{FrameworkPlugin, SveltePlugin, VuePlugin};

/// Ordered set of framework plugins, unique by name.
#[derive(Clone, Default)]
pub struct PluginRegistry {
    plugins: Vec<Arc<dyn FrameworkPlugin>>,
}

impl std::fmt::Debug for PluginRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list()
            .entries(self.plugins.iter().map(|p| p.name()))
            .finish()
    }
}

impl PluginRegistry {
    /// Empty registry: every file goes through built-in script extraction.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry with the Svelte and Vue plugins.
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        registry.register(Arc::new(SveltePlugin::new()));
        registry.register(Arc::new(VuePlugin::new()));
        registry
    }

    /// Add a plugin. A plugin with the same name is replaced in place.
    pub fn register(&mut self, plugin: Arc<dyn FrameworkPlugin>) {
        match self.plugins.iter().position(|p| p.name() == plugin.name()) {
            Some(index) => self.plugins[index] = plugin,
            None => self.plugins.push(plugin),
        }
    }

    /// Remove a plugin by name. Returns whether one was removed.
    pub fn unregister(&mut self, name: &str) -> bool {
        let before = self.plugins.len();
        self.plugins.retain(|p| p.name() != name);
        self.plugins.len() != before
    }

    /// Snapshot of the registered plugins in registration order.
    pub fn list(&self) -> Vec<Arc<dyn FrameworkPlugin>> {
        self.plugins.clone()
    }

    /// First available plugin handling `extension` (with or without leading dot).
    pub fn lookup(&self, extension: &str) -> Option<Arc<dyn FrameworkPlugin>> {
        let extension = extension.trim_start_matches('.').to_ascii_lowercase();
        self.plugins
            .iter()
            .find(|p| p.extensions().contains(&extension.as_str()) && p.is_available())
            .cloned()
    }
}
