//! Resolution of a theme descriptor into a build manifest.
//!
//! [`ThemeBuild`] is the entry point a consuming generator (or the `tinct`
//! binary) drives: it validates the descriptor, resolves plugin handles,
//! evaluates the typography extension exactly once against the finalised
//! palette, and emits a serializable [`ThemeManifest`]. Resolution is
//! whole-or-nothing; the first offending key, pattern, or handle aborts the
//! build.

use std::path::PathBuf;

use anyhow::{Result, bail};
use serde::Serialize;
use tinct_plugin_api::{CssOverrides, DarkMode, ExtendContext, Palette, PluginRegistry};

use crate::plugins::builtin_registry;
use crate::theme::ThemeConfig;

/// Builder that resolves a [`ThemeConfig`] into a [`ThemeManifest`].
pub struct ThemeBuild {
    descriptor: ThemeConfig,
    theme_name: Option<String>,
    registry: PluginRegistry,
    root: Option<PathBuf>,
    scan: bool,
}

impl ThemeBuild {
    /// Start a build for the given descriptor, using the built-in plugin
    /// registry.
    #[must_use]
    pub fn new(descriptor: ThemeConfig) -> Self {
        Self {
            descriptor,
            theme_name: None,
            registry: builtin_registry(),
            root: None,
            scan: false,
        }
    }

    /// Record the preset name the descriptor was derived from.
    #[must_use]
    pub fn with_theme_name(mut self, name: impl Into<String>) -> Self {
        self.theme_name = Some(name.into());
        self
    }

    /// Replace the plugin registry, for embedders shipping their own plugins.
    #[must_use]
    pub fn with_registry(mut self, registry: PluginRegistry) -> Self {
        self.registry = registry;
        self
    }

    /// Set the directory content globs are scanned relative to.
    #[must_use]
    pub fn with_root(mut self, root: PathBuf) -> Self {
        self.root = Some(root);
        self
    }

    /// Walk the content root during the build and report how many files the
    /// globs select.
    #[must_use]
    pub fn with_scan(mut self, scan: bool) -> Self {
        self.scan = scan;
        self
    }

    /// Resolve the descriptor into a manifest.
    pub fn run(self) -> Result<ThemeManifest> {
        let Self {
            descriptor,
            theme_name,
            registry,
            root,
            scan,
        } = self;

        // Surface malformed globs before any plugin work happens.
        descriptor.content.compile()?;

        let plugins = registry.resolve_all(descriptor.plugins.iter().map(String::as_str))?;

        let mut css = CssOverrides::new();
        let context = ExtendContext::new(descriptor.accessor(), descriptor.typography);
        for plugin in &plugins {
            let contributed = plugin.extend(&context)?;
            tracing::debug!(plugin = plugin.descriptor().id, "applied plugin overrides");
            css.merge(contributed);
        }

        let matched_files = if scan {
            let Some(root) = &root else {
                bail!("content scan requested without a root directory");
            };
            let files = descriptor.content.scan(root)?;
            tracing::info!(count = files.len(), "scanned content root");
            Some(files.len())
        } else {
            None
        };

        let ThemeConfig {
            content,
            dark_mode,
            palette,
            plugins: plugin_ids,
            ..
        } = descriptor;

        Ok(ThemeManifest {
            theme: theme_name,
            dark_mode,
            palette,
            plugins: plugin_ids,
            content: ContentReport {
                globs: content.patterns().to_vec(),
                matched_files,
            },
            css,
        })
    }
}

/// The fully resolved theme, ready for a consuming generator.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ThemeManifest {
    /// Preset name, when the descriptor came from a registered theme.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub theme: Option<String>,
    pub dark_mode: DarkMode,
    pub palette: Palette,
    /// Plugin handles in their configured application order.
    pub plugins: Vec<String>,
    pub content: ContentReport,
    /// Merged override trees contributed by the plugins.
    pub css: CssOverrides,
}

/// Content configuration echoed back with optional scan results.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ContentReport {
    pub globs: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub matched_files: Option<usize>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use tinct_plugin_api::Color;

    use crate::theme::default_theme;

    #[test]
    fn default_theme_resolves() {
        let manifest = ThemeBuild::new(default_theme())
            .with_theme_name("slate")
            .run()
            .expect("build");

        assert_eq!(manifest.theme.as_deref(), Some("slate"));
        assert_eq!(manifest.plugins, vec!["typography"]);
        assert_eq!(
            manifest.palette.get("primary"),
            Some(Color::rgb(80, 116, 191))
        );

        let hover = manifest
            .css
            .default_variant()
            .and_then(|rule| rule.rule("a"))
            .and_then(|rule| rule.rule("&:hover"))
            .expect("hover rule");
        assert_eq!(
            hover.declaration("color").map(|decl| decl.value()),
            Some("rgb(80, 116, 191)")
        );
    }

    #[test]
    fn resolution_is_deterministic() {
        let first = ThemeBuild::new(default_theme()).run().expect("build");
        let second = ThemeBuild::new(default_theme()).run().expect("build");
        assert_eq!(first, second);
    }

    #[test]
    fn unknown_plugin_handles_abort_the_build() {
        let mut descriptor = default_theme();
        descriptor.plugins.push("aspect-ratio".to_string());

        let error = ThemeBuild::new(descriptor).run().expect_err("unknown");
        assert!(
            error
                .to_string()
                .contains("no plugin registered for id 'aspect-ratio'")
        );
    }

    #[test]
    fn missing_palette_keys_abort_the_build() {
        let mut descriptor = default_theme();
        descriptor.palette = tinct_plugin_api::Palette::new();

        let error = ThemeBuild::new(descriptor).run().expect_err("missing key");
        assert!(error.to_string().contains("palette has no colour named"));
    }

    #[test]
    fn scan_requires_a_root() {
        let error = ThemeBuild::new(default_theme())
            .with_scan(true)
            .run()
            .expect_err("no root");
        assert!(error.to_string().contains("without a root directory"));
    }
}
