//! Shared plugin interfaces and data types for `tinct`.
//!
//! Everything a theme plugin needs lives here: the colour and palette types,
//! the dark-mode strategy, the override trees plugins produce, the accessor
//! capability they read the theme through, and the registry the build
//! resolves plugin handles against.

pub mod context;
pub mod error;
pub mod registry;
pub mod types;

pub use context::{ExtendContext, ThemeAccessor, TypographyExtension};
pub use error::{
    ColorParseError, DarkModeParseError, MissingKeyError, PluginRegistryError,
};
pub use registry::{PluginDescriptor, PluginRegistry, ThemePlugin};
pub use types::{Color, CssOverrides, DEFAULT_VARIANT, Declaration, DarkMode, Palette, StyleRule};
