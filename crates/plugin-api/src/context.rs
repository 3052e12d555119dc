use crate::error::MissingKeyError;
use crate::types::{Color, CssOverrides, DarkMode, Palette};

/// A pure function from the finalised theme to an override tree.
///
/// Extensions receive a lookup capability rather than the palette itself so
/// that colours are referenced symbolically instead of being duplicated as
/// literals. The shared borrow also guarantees evaluation cannot mutate the
/// palette it reads.
pub type TypographyExtension = fn(&ThemeAccessor<'_>) -> Result<CssOverrides, MissingKeyError>;

/// Read-only view of a finalised theme handed to extensions and plugins.
///
/// Wrapping the borrowed state in a context struct keeps the public function
/// signatures stable if more theme data needs to be exposed later.
#[derive(Clone, Copy)]
pub struct ThemeAccessor<'a> {
    palette: &'a Palette,
    dark_mode: DarkMode,
}

impl<'a> ThemeAccessor<'a> {
    #[must_use]
    pub fn new(palette: &'a Palette, dark_mode: DarkMode) -> Self {
        Self { palette, dark_mode }
    }

    /// Resolve a symbolic colour reference, failing when the palette has no
    /// entry under that name.
    pub fn lookup(&self, name: &str) -> Result<Color, MissingKeyError> {
        self.palette.lookup(name)
    }

    /// Non-failing variant of [`lookup`](Self::lookup).
    #[must_use]
    pub fn color(&self, name: &str) -> Option<Color> {
        self.palette.get(name)
    }

    #[must_use]
    pub fn palette(&self) -> &'a Palette {
        self.palette
    }

    #[must_use]
    pub fn dark_mode(&self) -> DarkMode {
        self.dark_mode
    }
}

/// Shared inputs provided to plugins when they are asked to contribute
/// overrides to a build.
pub struct ExtendContext<'a> {
    theme: ThemeAccessor<'a>,
    typography: Option<TypographyExtension>,
}

impl<'a> ExtendContext<'a> {
    #[must_use]
    pub fn new(theme: ThemeAccessor<'a>, typography: Option<TypographyExtension>) -> Self {
        Self { theme, typography }
    }

    #[must_use]
    pub fn theme(&self) -> &ThemeAccessor<'a> {
        &self.theme
    }

    /// The descriptor's typography extension, when one was configured.
    #[must_use]
    pub fn typography(&self) -> Option<TypographyExtension> {
        self.typography
    }

    /// Evaluate the configured typography extension against the theme.
    ///
    /// Returns `None` when the descriptor carries no extension.
    pub fn evaluate_typography(&self) -> Result<Option<CssOverrides>, MissingKeyError> {
        self.typography
            .map(|extension| extension(&self.theme))
            .transpose()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{DEFAULT_VARIANT, StyleRule};

    fn sample_palette() -> Palette {
        Palette::from_iter([("primary", Color::rgb(80, 116, 191))])
    }

    fn extension(theme: &ThemeAccessor<'_>) -> Result<CssOverrides, MissingKeyError> {
        let primary = theme.lookup("primary")?;
        Ok(CssOverrides::new().with_variant(
            DEFAULT_VARIANT,
            StyleRule::new().declare("color", primary.to_string()),
        ))
    }

    #[test]
    fn accessor_resolves_and_reports_missing_names() {
        let palette = sample_palette();
        let theme = ThemeAccessor::new(&palette, DarkMode::ClassMarker);

        assert_eq!(theme.lookup("primary"), Ok(Color::rgb(80, 116, 191)));
        assert_eq!(theme.color("accent"), None);
        assert_eq!(
            theme.lookup("accent"),
            Err(MissingKeyError::new("accent"))
        );
    }

    #[test]
    fn evaluation_is_deterministic() {
        let palette = sample_palette();
        let theme = ThemeAccessor::new(&palette, DarkMode::Media);
        let context = ExtendContext::new(theme, Some(extension));

        let first = context.evaluate_typography().expect("evaluate");
        let second = context.evaluate_typography().expect("evaluate");
        assert_eq!(first, second);
    }

    #[test]
    fn missing_extension_evaluates_to_none() {
        let palette = sample_palette();
        let theme = ThemeAccessor::new(&palette, DarkMode::Media);
        let context = ExtendContext::new(theme, None);

        assert_eq!(context.evaluate_typography(), Ok(None));
    }
}
