use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Variant key for the base (unmodified) style set.
///
/// Consuming generators expect at least this sub-tree; size variants such as
/// `lg` may sit alongside it.
pub const DEFAULT_VARIANT: &str = "DEFAULT";

/// A nested style-override structure, keyed by variant.
///
/// This is the value a typography extension evaluates to: a tree of selectors
/// and declarations layered onto a plugin's base styles by the consuming
/// build tool. The tree is plain data; nothing here touches a stylesheet.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CssOverrides {
    variants: IndexMap<String, StyleRule>,
}

impl CssOverrides {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or extend a variant sub-tree.
    #[must_use]
    pub fn with_variant(mut self, key: impl Into<String>, rule: StyleRule) -> Self {
        self.variants.entry(key.into()).or_default().merge(rule);
        self
    }

    #[must_use]
    pub fn variant(&self, key: &str) -> Option<&StyleRule> {
        self.variants.get(key)
    }

    /// The `DEFAULT` sub-tree, when present.
    #[must_use]
    pub fn default_variant(&self) -> Option<&StyleRule> {
        self.variant(DEFAULT_VARIANT)
    }

    /// Layer `other` on top of this tree. Later trees win per declaration;
    /// selectors merge recursively.
    pub fn merge(&mut self, other: CssOverrides) {
        for (key, rule) in other.variants {
            self.variants.entry(key).or_default().merge(rule);
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &StyleRule)> {
        self.variants.iter().map(|(key, rule)| (key.as_str(), rule))
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.variants.is_empty()
    }
}

/// A selector's declarations plus its nested rules (`a` holding `&:hover`,
/// `code` holding `&::before`, and so on).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StyleRule {
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    declarations: IndexMap<String, Declaration>,
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    rules: IndexMap<String, StyleRule>,
}

impl StyleRule {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a declaration on this selector.
    #[must_use]
    pub fn declare(mut self, property: impl Into<String>, value: impl Into<String>) -> Self {
        self.declarations
            .insert(property.into(), Declaration::new(value));
        self
    }

    /// Set a declaration carrying the overriding (`!important`) marker.
    #[must_use]
    pub fn declare_important(
        mut self,
        property: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        self.declarations
            .insert(property.into(), Declaration::important(value));
        self
    }

    /// Nest a rule under this selector.
    #[must_use]
    pub fn nest(mut self, selector: impl Into<String>, rule: StyleRule) -> Self {
        self.rules.entry(selector.into()).or_default().merge(rule);
        self
    }

    #[must_use]
    pub fn declaration(&self, property: &str) -> Option<&Declaration> {
        self.declarations.get(property)
    }

    #[must_use]
    pub fn rule(&self, selector: &str) -> Option<&StyleRule> {
        self.rules.get(selector)
    }

    pub fn declarations(&self) -> impl Iterator<Item = (&str, &Declaration)> {
        self.declarations
            .iter()
            .map(|(property, declaration)| (property.as_str(), declaration))
    }

    pub fn rules(&self) -> impl Iterator<Item = (&str, &StyleRule)> {
        self.rules.iter().map(|(selector, rule)| (selector.as_str(), rule))
    }

    /// Recursive merge; `other`'s declarations replace colliding ones here.
    pub fn merge(&mut self, other: StyleRule) {
        for (property, declaration) in other.declarations {
            self.declarations.insert(property, declaration);
        }
        for (selector, rule) in other.rules {
            self.rules.entry(selector).or_default().merge(rule);
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.declarations.is_empty() && self.rules.is_empty()
    }
}

/// A single property value, optionally marked as forced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Declaration {
    value: String,
    #[serde(default)]
    important: bool,
}

impl Declaration {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            important: false,
        }
    }

    pub fn important(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            important: true,
        }
    }

    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }

    #[must_use]
    pub fn is_important(&self) -> bool {
        self.important
    }
}
