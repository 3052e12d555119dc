use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::DarkModeParseError;

/// How a consuming stylesheet generator decides whether dark-variant styles
/// apply. Exactly one strategy is active per theme.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DarkMode {
    /// Follow the system `prefers-color-scheme` media query.
    #[default]
    Media,
    /// Require an ancestor element carrying the marker class.
    #[serde(alias = "class")]
    ClassMarker,
}

impl DarkMode {
    /// The ancestor selector that activates dark variants, when one exists.
    #[must_use]
    pub const fn marker(self) -> Option<&'static str> {
        match self {
            Self::Media => None,
            Self::ClassMarker => Some(".dark"),
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Media => "media",
            Self::ClassMarker => "class-marker",
        }
    }
}

impl fmt::Display for DarkMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DarkMode {
    type Err = DarkModeParseError;

    fn from_str(token: &str) -> Result<Self, Self::Err> {
        match token.trim() {
            "media" => Ok(Self::Media),
            // "class" is the legacy spelling still found in older configs.
            "class-marker" | "class" => Ok(Self::ClassMarker),
            other => Err(DarkModeParseError {
                token: other.to_string(),
            }),
        }
    }
}
