mod midnight;
mod slate;

use super::types::{ThemeConfig, ThemeRegistration};
use crate::content::ContentGlobs;

/// Glob patterns covering every source type the site renders classes from.
fn default_content() -> ContentGlobs {
    ContentGlobs::new(["src/**/*.{astro,html,js,jsx,md,mdx,svelte,ts,tsx,vue}"])
}

/// The theme used when no preset is configured.
#[must_use]
pub fn default_theme() -> ThemeConfig {
    slate::theme()
}

pub(super) fn registrations() -> Vec<ThemeRegistration> {
    vec![
        ThemeRegistration::new("slate", slate::theme()).aliases(["default", "light"]),
        ThemeRegistration::new("midnight", midnight::theme()).alias("dark"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use tinct_plugin_api::Color;
    use tinct_plugins_typography::prose_extension;

    #[test]
    fn slate_primary_matches_the_site_accent() {
        let theme = slate::theme();
        assert_eq!(
            theme.palette.lookup("primary"),
            Ok(Color::rgb(80, 116, 191))
        );
    }

    #[test]
    fn every_builtin_palette_satisfies_the_prose_extension() {
        for registration in registrations() {
            let accessor = registration.config.accessor();
            prose_extension(&accessor).unwrap_or_else(|error| {
                panic!("theme '{}' is missing '{}'", registration.name, error.name)
            });
        }
    }

    #[test]
    fn default_content_covers_the_site_source_types() {
        let content = default_content();
        for extension in ["astro", "html", "js", "jsx", "md", "mdx", "svelte", "ts", "tsx", "vue"] {
            assert!(
                content.covers_extension(extension),
                "no glob covers .{extension}"
            );
        }
        assert!(!content.covers_extension("rs"));
    }

    #[test]
    fn builtin_plugin_lists_resolve_against_the_registry() {
        let registry = crate::plugins::builtin_registry();
        for registration in registrations() {
            for id in &registration.config.plugins {
                assert!(registry.contains(id), "unknown builtin plugin id '{id}'");
            }
        }
    }
}
