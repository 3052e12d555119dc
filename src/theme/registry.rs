//! Global registry of named theme configurations.
//!
//! The settings pipeline resolves a `preset` name against this registry, and
//! embedders can add their own descriptors next to the built-ins. A handful
//! of themes is the expected scale, so entries live in a plain vector behind
//! a lock and lookups scan names and aliases case-insensitively.

use std::sync::{LazyLock, RwLock};

use super::builtins;
use super::types::{
    AliasConflict, ThemeConfig, ThemeDescriptor, ThemeRegistration, ThemeRegistrationReport,
};

struct ThemeEntry {
    name: String,
    aliases: Vec<String>,
    config: ThemeConfig,
}

impl ThemeEntry {
    fn answers_to(&self, needle: &str) -> bool {
        self.name.eq_ignore_ascii_case(needle)
            || self
                .aliases
                .iter()
                .any(|alias| alias.eq_ignore_ascii_case(needle))
    }
}

static REGISTRY: LazyLock<RwLock<Vec<ThemeEntry>>> = LazyLock::new(|| {
    let mut entries = Vec::new();
    let mut report = ThemeRegistrationReport::default();

    for registration in builtins::registrations() {
        upsert(&mut entries, registration, &mut report);
    }

    debug_assert!(report.replaced.is_empty(), "duplicate built-in theme names");
    debug_assert!(
        report.alias_conflicts.is_empty(),
        "conflicting built-in theme aliases"
    );

    RwLock::new(entries)
});

/// Insert a registration, replacing any entry already using its name.
///
/// An alias is dropped (and reported) when another theme already answers to
/// it; the original owner keeps it.
fn upsert(
    entries: &mut Vec<ThemeEntry>,
    registration: ThemeRegistration,
    report: &mut ThemeRegistrationReport,
) {
    let ThemeRegistration {
        name,
        config,
        aliases,
    } = registration;

    let mut accepted: Vec<String> = Vec::new();
    for alias in aliases {
        let alias = alias.trim().to_string();
        if alias.is_empty()
            || alias.eq_ignore_ascii_case(&name)
            || accepted
                .iter()
                .any(|kept| kept.eq_ignore_ascii_case(&alias))
        {
            continue;
        }

        let taken = entries
            .iter()
            .find(|entry| entry.answers_to(&alias) && !entry.name.eq_ignore_ascii_case(&name));
        match taken {
            Some(owner) => report.alias_conflicts.push(AliasConflict {
                alias,
                existing: owner.name.clone(),
                attempted: name.clone(),
            }),
            None => accepted.push(alias),
        }
    }
    accepted.sort_unstable_by_key(|alias| alias.to_ascii_lowercase());

    match entries
        .iter_mut()
        .find(|entry| entry.name.eq_ignore_ascii_case(&name))
    {
        Some(entry) => {
            report.replaced.push(entry.name.clone());
            entry.name = name;
            entry.aliases = accepted;
            entry.config = config;
        }
        None => {
            report.inserted.push(name.clone());
            entries.push(ThemeEntry {
                name,
                aliases: accepted,
                config,
            });
        }
    }
}

/// Register an additional collection of themes at runtime.
#[must_use]
pub fn register_additional<I>(registrations: I) -> ThemeRegistrationReport
where
    I: IntoIterator<Item = ThemeRegistration>,
{
    let mut report = ThemeRegistrationReport::default();
    let mut entries = REGISTRY
        .write()
        .unwrap_or_else(|poisoned| poisoned.into_inner());

    for registration in registrations {
        upsert(&mut entries, registration, &mut report);
    }

    report
}

/// Lookup a theme configuration by case-insensitive name or alias.
#[must_use]
pub fn by_name(name: &str) -> Option<ThemeConfig> {
    let needle = name.trim();
    REGISTRY
        .read()
        .unwrap_or_else(|poisoned| poisoned.into_inner())
        .iter()
        .find(|entry| entry.answers_to(needle))
        .map(|entry| entry.config.clone())
}

/// Canonical theme names, sorted for display.
#[must_use]
pub fn names() -> Vec<String> {
    let mut names: Vec<String> = REGISTRY
        .read()
        .unwrap_or_else(|poisoned| poisoned.into_inner())
        .iter()
        .map(|entry| entry.name.clone())
        .collect();
    names.sort_unstable_by_key(|name| name.to_ascii_lowercase());
    names
}

/// Snapshots of every registered theme, sorted by name.
#[must_use]
pub fn descriptors() -> Vec<ThemeDescriptor> {
    let mut descriptors: Vec<ThemeDescriptor> = REGISTRY
        .read()
        .unwrap_or_else(|poisoned| poisoned.into_inner())
        .iter()
        .map(|entry| ThemeDescriptor {
            name: entry.name.clone(),
            aliases: entry.aliases.clone(),
            config: entry.config.clone(),
        })
        .collect();
    descriptors.sort_unstable_by_key(|descriptor| descriptor.name.to_ascii_lowercase());
    descriptors
}

#[cfg(test)]
mod tests {
    use super::*;
    use tinct_plugin_api::{Color, DarkMode, Palette};

    use crate::content::ContentGlobs;

    fn minimal_config(primary: Color) -> ThemeConfig {
        ThemeConfig {
            content: ContentGlobs::new(["pages/**/*.html"]),
            dark_mode: DarkMode::Media,
            palette: Palette::from_iter([("primary", primary)]),
            typography: None,
            plugins: Vec::new(),
        }
    }

    #[test]
    fn builtins_resolve_by_name_and_alias() {
        let direct = by_name("slate").expect("name");
        let via_alias = by_name("light").expect("alias");
        assert_eq!(via_alias.palette, direct.palette);
        assert!(by_name("dark").is_some());
    }

    #[test]
    fn lookup_ignores_case_and_surrounding_whitespace() {
        assert!(by_name("  SLATE ").is_some());
        assert!(by_name("nonesuch").is_none());
    }

    #[test]
    fn re_registering_a_name_replaces_the_entry() {
        let first = register_additional([ThemeRegistration::new(
            "aurora",
            minimal_config(Color::hex(0x10, 0x20, 0x30)),
        )]);
        assert_eq!(first.inserted, vec!["aurora"]);

        let second = register_additional([ThemeRegistration::new(
            "Aurora",
            minimal_config(Color::hex(0x40, 0x50, 0x60)),
        )]);
        assert_eq!(second.replaced, vec!["aurora"]);

        let config = by_name("aurora").expect("registered");
        assert_eq!(
            config.palette.get("primary"),
            Some(Color::hex(0x40, 0x50, 0x60))
        );
        let matches = names()
            .iter()
            .filter(|name| name.eq_ignore_ascii_case("aurora"))
            .count();
        assert_eq!(matches, 1);
    }

    #[test]
    fn aliases_claimed_by_another_theme_are_rejected() {
        let report = register_additional([ThemeRegistration::new(
            "nocturne",
            minimal_config(Color::hex(0x0A, 0x0A, 0x0A)),
        )
        .alias("dark")]);

        let conflict = report.alias_conflicts.first().expect("conflict");
        assert_eq!(conflict.alias, "dark");
        assert_eq!(conflict.existing, "midnight");
        assert_eq!(conflict.attempted, "nocturne");

        // The alias keeps pointing at its original owner.
        let resolved = by_name("dark").expect("alias");
        let midnight = by_name("midnight").expect("midnight");
        assert_eq!(resolved.palette, midnight.palette);
    }

    #[test]
    fn descriptors_surface_aliases_sorted_by_name() {
        let descriptors = descriptors();

        let slate = descriptors
            .iter()
            .find(|descriptor| descriptor.name == "slate")
            .expect("slate");
        assert!(slate.aliases.iter().any(|alias| alias == "light"));

        let listed: Vec<String> = descriptors
            .iter()
            .map(|descriptor| descriptor.name.to_ascii_lowercase())
            .collect();
        let mut sorted = listed.clone();
        sorted.sort_unstable();
        assert_eq!(listed, sorted);
    }
}
