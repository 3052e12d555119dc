//! Core crate exports for modelling and resolving `tinct` theme
//! configurations.
//!
//! The root module primarily re-exports types from the theme and plugin
//! subsystems so that consuming build tools can resolve a descriptor without
//! digging through the module hierarchy.

pub mod app_dirs;
pub mod content;
pub mod logging;
pub mod manifest;
pub mod plugins;
pub mod theme;

pub use content::{ContentError, ContentGlobs};
pub use manifest::{ContentReport, ThemeBuild, ThemeManifest};
pub use plugins::builtin_registry;
pub use theme::{ThemeConfig, ThemeRegistration, builtin_themes, default_theme};

pub use tinct_plugin_api::{
    Color, CssOverrides, DEFAULT_VARIANT, DarkMode, Declaration, MissingKeyError, Palette,
    PluginDescriptor, PluginRegistry, StyleRule, ThemeAccessor, ThemePlugin, TypographyExtension,
};
