//! Built-in typography plugin.
//!
//! Contributes a small base of prose styles and layers the descriptor's
//! typography extension on top, so themes can restyle prose symbolically
//! through their palette instead of repeating colour literals.

use tinct_plugin_api::{
    CssOverrides, DEFAULT_VARIANT, ExtendContext, MissingKeyError, PluginDescriptor, StyleRule,
    ThemeAccessor, ThemePlugin,
};

/// Identifier used in descriptor plugin lists.
pub const PLUGIN_ID: &str = "typography";

pub static DESCRIPTOR: PluginDescriptor =
    PluginDescriptor::new(PLUGIN_ID, "Prose styling with palette-aware overrides");

/// The canonical typography extension.
///
/// Links pick up the palette's `primary` colour on hover, and the backtick
/// markers the base prose styles render around inline code are neutralised
/// with a forced empty `content`.
pub fn prose_extension(theme: &ThemeAccessor<'_>) -> Result<CssOverrides, MissingKeyError> {
    let primary = theme.lookup("primary")?;

    let default = StyleRule::new()
        .nest(
            "a",
            StyleRule::new().nest(
                "&:hover",
                StyleRule::new().declare("color", primary.to_string()),
            ),
        )
        .nest(
            "code",
            StyleRule::new()
                .nest(
                    "&::before",
                    StyleRule::new().declare_important("content", "\"\""),
                )
                .nest(
                    "&::after",
                    StyleRule::new().declare_important("content", "\"\""),
                ),
        );

    Ok(CssOverrides::new().with_variant(DEFAULT_VARIANT, default))
}

/// Prose defaults applied before any configured extension.
fn base_overrides() -> CssOverrides {
    let default = StyleRule::new()
        .nest(
            "a",
            StyleRule::new()
                .declare("text-decoration", "underline")
                .declare("font-weight", "500"),
        )
        .nest(
            "code",
            StyleRule::new()
                .declare("font-weight", "600")
                .nest("&::before", StyleRule::new().declare("content", "\"`\""))
                .nest("&::after", StyleRule::new().declare("content", "\"`\"")),
        );

    CssOverrides::new().with_variant(DEFAULT_VARIANT, default)
}

/// The registered plugin. Applies the base prose styles, then the
/// descriptor's typography extension on top.
#[derive(Debug, Default)]
pub struct TypographyPlugin;

impl TypographyPlugin {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl ThemePlugin for TypographyPlugin {
    fn descriptor(&self) -> &'static PluginDescriptor {
        &DESCRIPTOR
    }

    fn extend(&self, context: &ExtendContext<'_>) -> Result<CssOverrides, MissingKeyError> {
        let mut overrides = base_overrides();
        if let Some(extension) = context.evaluate_typography()? {
            overrides.merge(extension);
        }
        Ok(overrides)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tinct_plugin_api::{Color, DarkMode, Declaration, Palette};

    fn site_palette() -> Palette {
        Palette::from_iter([
            ("blue", Color::hex(0x3B, 0x82, 0xF6)),
            ("primary", Color::rgb(80, 116, 191)),
        ])
    }

    fn accessor(palette: &Palette) -> ThemeAccessor<'_> {
        ThemeAccessor::new(palette, DarkMode::ClassMarker)
    }

    #[test]
    fn link_hover_uses_the_palette_primary() {
        let palette = site_palette();
        let overrides = prose_extension(&accessor(&palette)).expect("evaluate");

        let hover = overrides
            .default_variant()
            .and_then(|rule| rule.rule("a"))
            .and_then(|rule| rule.rule("&:hover"))
            .expect("hover rule");
        assert_eq!(
            hover.declaration("color").map(Declaration::value),
            Some("rgb(80, 116, 191)")
        );
    }

    #[test]
    fn code_markers_are_neutralised_with_a_forced_empty_string() {
        let palette = site_palette();
        let overrides = prose_extension(&accessor(&palette)).expect("evaluate");

        let code = overrides
            .default_variant()
            .and_then(|rule| rule.rule("code"))
            .expect("code rule");
        for pseudo in ["&::before", "&::after"] {
            let content = code
                .rule(pseudo)
                .and_then(|rule| rule.declaration("content"))
                .expect("content declaration");
            assert_eq!(content.value(), "\"\"");
            assert!(content.is_important());
        }
    }

    #[test]
    fn evaluation_is_deterministic() {
        let palette = site_palette();
        let first = prose_extension(&accessor(&palette)).expect("evaluate");
        let second = prose_extension(&accessor(&palette)).expect("evaluate");
        assert_eq!(first, second);
    }

    #[test]
    fn extension_fails_without_a_primary_entry() {
        let palette = Palette::from_iter([("blue", Color::hex(0x3B, 0x82, 0xF6))]);
        let error = prose_extension(&accessor(&palette)).expect_err("missing key");
        assert_eq!(error.name, "primary");
    }

    #[test]
    fn plugin_layers_the_extension_over_its_base() {
        let palette = site_palette();
        let context = ExtendContext::new(accessor(&palette), Some(prose_extension));
        let overrides = TypographyPlugin::new().extend(&context).expect("extend");

        let anchor = overrides
            .default_variant()
            .and_then(|rule| rule.rule("a"))
            .expect("anchor rule");
        // Base declaration survives alongside the extension's nested rule.
        assert_eq!(
            anchor
                .declaration("text-decoration")
                .map(Declaration::value),
            Some("underline")
        );
        assert!(anchor.rule("&:hover").is_some());

        // The extension's forced empty content wins over the base backticks.
        let before = overrides
            .default_variant()
            .and_then(|rule| rule.rule("code"))
            .and_then(|rule| rule.rule("&::before"))
            .and_then(|rule| rule.declaration("content"))
            .expect("content declaration");
        assert_eq!(before.value(), "\"\"");
        assert!(before.is_important());
    }

    #[test]
    fn plugin_without_an_extension_contributes_only_its_base() {
        let palette = site_palette();
        let context = ExtendContext::new(accessor(&palette), None);
        let overrides = TypographyPlugin::new().extend(&context).expect("extend");

        let anchor = overrides
            .default_variant()
            .and_then(|rule| rule.rule("a"))
            .expect("anchor rule");
        assert!(anchor.rule("&:hover").is_none());
    }
}
