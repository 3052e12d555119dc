//! Built-in plugin wiring.

use tinct_plugin_api::PluginRegistry;
use tinct_plugins_typography::TypographyPlugin;

/// Create a registry populated with the plugins bundled with the library.
#[must_use]
pub fn builtin_registry() -> PluginRegistry {
    let mut registry = PluginRegistry::empty();
    registry
        .register(TypographyPlugin::new())
        .unwrap_or_else(|error| panic!("failed to register built-in plugins: {error}"));
    registry
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn typography_is_available_by_default() {
        let registry = builtin_registry();
        assert!(registry.contains("typography"));
        assert_eq!(registry.len(), 1);
    }
}
