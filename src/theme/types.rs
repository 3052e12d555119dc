use tinct_plugin_api::{DarkMode, Palette, ThemeAccessor, TypographyExtension};

use crate::content::ContentGlobs;

/// A complete theme configuration descriptor.
///
/// This is the single value a consuming utility-class generator reads at
/// build start: which sources to scan, how dark variants activate, the
/// semantic palette, the typography extension derived from it, and the
/// plugins to apply in order. The descriptor performs no work of its own and
/// is never mutated once constructed.
#[derive(Debug, Clone)]
pub struct ThemeConfig {
    /// Glob patterns selecting the class-bearing source files.
    pub content: ContentGlobs,
    /// The active dark-mode strategy.
    pub dark_mode: DarkMode,
    /// Semantic colour names and their values.
    pub palette: Palette,
    /// Palette-driven prose overrides, evaluated lazily by the consumer.
    pub typography: Option<TypographyExtension>,
    /// Plugin handles, applied in listed order.
    pub plugins: Vec<String>,
}

impl ThemeConfig {
    /// Borrow the read-only accessor capability extensions are evaluated
    /// through.
    #[must_use]
    pub fn accessor(&self) -> ThemeAccessor<'_> {
        ThemeAccessor::new(&self.palette, self.dark_mode)
    }
}

/// Describes a theme that can be registered with the library.
#[derive(Debug, Clone)]
pub struct ThemeRegistration {
    /// The name of the theme.
    pub name: String,
    /// The theme configuration.
    pub config: ThemeConfig,
    /// Alternate names for the theme.
    pub aliases: Vec<String>,
}

impl ThemeRegistration {
    /// Creates a new theme registration with the given name and configuration.
    pub fn new(name: impl Into<String>, config: ThemeConfig) -> Self {
        Self {
            name: name.into(),
            config,
            aliases: Vec::new(),
        }
    }

    /// Adds a single alias to this theme registration.
    #[must_use]
    pub fn alias(mut self, alias: impl Into<String>) -> Self {
        self.aliases.push(alias.into());
        self
    }

    /// Adds multiple aliases to this theme registration.
    #[must_use]
    pub fn aliases<I, S>(mut self, aliases: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.aliases.extend(aliases.into_iter().map(Into::into));
        self
    }
}

/// Summary of the operations performed while registering themes.
#[derive(Debug, Default, Clone)]
pub struct ThemeRegistrationReport {
    /// Names of themes that were newly inserted.
    pub inserted: Vec<String>,
    /// Names of themes that were replaced.
    pub replaced: Vec<String>,
    /// Aliases that could not be registered due to conflicts.
    pub alias_conflicts: Vec<AliasConflict>,
}

impl ThemeRegistrationReport {
    /// Returns `true` if no operations were performed during registration.
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.inserted.is_empty() && self.replaced.is_empty() && self.alias_conflicts.is_empty()
    }
}

/// Describes an alias that could not be registered because it targets
/// multiple themes.
#[derive(Debug, Clone)]
pub struct AliasConflict {
    /// The conflicting alias name.
    pub alias: String,
    /// The name of the existing theme using this alias.
    pub existing: String,
    /// The name of the theme that attempted to use this alias.
    pub attempted: String,
}

/// Snapshot of a registered theme and its metadata.
#[derive(Debug, Clone)]
pub struct ThemeDescriptor {
    /// The name of the theme.
    pub name: String,
    /// Alternate names for the theme.
    pub aliases: Vec<String>,
    /// The theme configuration.
    pub config: ThemeConfig,
}
