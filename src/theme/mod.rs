//! Theme configuration descriptors and the named-theme registry.

mod builtins;
mod registry;
mod types;

pub use builtins::default_theme;
pub use registry::{by_name, descriptors, names, register_additional};
pub use types::{
    AliasConflict, ThemeConfig, ThemeDescriptor, ThemeRegistration, ThemeRegistrationReport,
};

/// Return the built-in themes bundled with the library.
#[must_use]
pub fn builtin_themes() -> Vec<ThemeRegistration> {
    builtins::registrations()
}

impl Default for ThemeConfig {
    fn default() -> Self {
        default_theme()
    }
}
