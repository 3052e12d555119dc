use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::MissingKeyError;
use crate::types::Color;

/// Named mapping of semantic colour identifiers to concrete colour values.
///
/// Entries keep their declaration order so that summaries and serialized
/// manifests list colours the way the theme author wrote them. The palette is
/// filled while a descriptor is constructed and only read afterwards.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Palette {
    colours: IndexMap<String, Color>,
}

impl Palette {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace a named colour, returning the previous value if the
    /// name was already present.
    pub fn insert(&mut self, name: impl Into<String>, colour: Color) -> Option<Color> {
        self.colours.insert(name.into(), colour)
    }

    /// Resolve a symbolic colour reference.
    pub fn lookup(&self, name: &str) -> Result<Color, MissingKeyError> {
        self.colours
            .get(name)
            .copied()
            .ok_or_else(|| MissingKeyError::new(name))
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<Color> {
        self.colours.get(name).copied()
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.colours.contains_key(name)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, Color)> {
        self.colours.iter().map(|(name, colour)| (name.as_str(), *colour))
    }

    /// Names in declaration order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.colours.keys().map(String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.colours.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.colours.is_empty()
    }
}

impl<N: Into<String>> FromIterator<(N, Color)> for Palette {
    fn from_iter<I: IntoIterator<Item = (N, Color)>>(entries: I) -> Self {
        Self {
            colours: entries
                .into_iter()
                .map(|(name, colour)| (name.into(), colour))
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Palette {
        Palette::from_iter([
            ("pale", Color::hex(0xF8, 0xFA, 0xFC)),
            ("primary", Color::rgb(80, 116, 191)),
        ])
    }

    #[test]
    fn lookup_resolves_known_names() {
        let palette = sample();
        assert_eq!(palette.lookup("primary"), Ok(Color::rgb(80, 116, 191)));
    }

    #[test]
    fn lookup_reports_the_missing_name() {
        let palette = sample();
        let error = palette.lookup("accent").expect_err("missing");
        assert_eq!(error.name, "accent");
        assert_eq!(error.to_string(), "palette has no colour named 'accent'");
    }

    #[test]
    fn declaration_order_is_preserved() {
        let palette = sample();
        let names: Vec<_> = palette.names().collect();
        assert_eq!(names, vec!["pale", "primary"]);
    }

    #[test]
    fn serde_round_trips_as_a_plain_map() {
        let palette = sample();
        let json = serde_json::to_string(&palette).expect("serialize");
        assert_eq!(
            json,
            "{\"pale\":\"#F8FAFC\",\"primary\":\"rgb(80, 116, 191)\"}"
        );

        let back: Palette = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back, palette);
    }
}
