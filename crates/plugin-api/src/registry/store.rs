use std::collections::HashMap;
use std::sync::Arc;

use crate::error::PluginRegistryError;
use crate::registry::{PluginDescriptor, ThemePlugin};

/// Registry of all plugins available to a build.
///
/// Plugins keep their registration order; resolution keeps the caller's
/// requested order. Both matter: the consuming tool applies plugins exactly
/// in the order the descriptor lists them.
#[derive(Clone, Default)]
pub struct PluginRegistry {
    plugins: Vec<Arc<dyn ThemePlugin>>,
    index: HashMap<&'static str, usize>,
}

impl PluginRegistry {
    /// Create an empty registry without any plugins registered.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Register a plugin implementation under its declared identifier.
    pub fn register<P>(&mut self, plugin: P) -> Result<(), PluginRegistryError>
    where
        P: ThemePlugin + 'static,
    {
        let id = plugin.descriptor().id;
        if self.index.contains_key(id) {
            return Err(PluginRegistryError::DuplicateId { id });
        }

        let position = self.plugins.len();
        self.index.insert(id, position);
        self.plugins.push(Arc::new(plugin));
        Ok(())
    }

    /// Lookup a plugin by identifier.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<Arc<dyn ThemePlugin>> {
        self.index
            .get(id)
            .and_then(|position| self.plugins.get(*position).cloned())
    }

    /// Resolve a configured plugin handle, failing when it is unknown.
    pub fn resolve(&self, id: &str) -> Result<Arc<dyn ThemePlugin>, PluginRegistryError> {
        self.get(id)
            .ok_or_else(|| PluginRegistryError::UnknownPlugin { id: id.to_string() })
    }

    /// Resolve a descriptor's plugin list, preserving the requested order
    /// exactly.
    pub fn resolve_all<'a, I>(
        &self,
        ids: I,
    ) -> Result<Vec<Arc<dyn ThemePlugin>>, PluginRegistryError>
    where
        I: IntoIterator<Item = &'a str>,
    {
        ids.into_iter().map(|id| self.resolve(id)).collect()
    }

    /// Iterate over all registered plugins in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &Arc<dyn ThemePlugin>> {
        self.plugins.iter()
    }

    /// Iterate over registered plugin descriptors in registration order.
    pub fn descriptors(&self) -> impl Iterator<Item = &'static PluginDescriptor> + '_ {
        self.plugins.iter().map(|plugin| plugin.descriptor())
    }

    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.plugins.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.plugins.is_empty()
    }
}
