use thiserror::Error;

/// A symbolic colour reference named a palette entry that does not exist.
///
/// Raised by the tooling that evaluates a theme, never by the descriptor
/// itself; the descriptor is inert data.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("palette has no colour named '{name}'")]
pub struct MissingKeyError {
    /// The palette name that failed to resolve.
    pub name: String,
}

impl MissingKeyError {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// Errors raised while parsing a colour literal.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ColorParseError {
    /// A `#`-prefixed literal had the wrong number of digits.
    #[error("hex colours must be 3 or 6 digits long, got '#{value}'")]
    MalformedHex { value: String },

    /// A channel inside a hex or `rgb()` literal failed to parse.
    #[error("invalid {channel}-component '{value}' in colour literal")]
    MalformedChannel { channel: char, value: String },

    /// An `rgb()` literal did not contain exactly three components.
    #[error("expected three components in rgb() colour, found {found}")]
    WrongArity { found: usize },

    /// The literal matched none of the recognised colour forms.
    #[error("unrecognised colour literal '{value}'")]
    Unrecognised { value: String },
}

/// The dark-mode token was not one of the recognised strategies.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unrecognised dark-mode strategy '{token}' (expected 'media' or 'class-marker')")]
pub struct DarkModeParseError {
    pub token: String,
}

/// Errors that can occur when mutating or querying a
/// [`PluginRegistry`](crate::PluginRegistry).
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PluginRegistryError {
    /// A plugin attempted to register an identifier that already exists in the registry.
    #[error("plugin id '{id}' is already registered")]
    DuplicateId { id: &'static str },

    /// A configured plugin handle does not correspond to any registered plugin.
    #[error("no plugin registered for id '{id}'")]
    UnknownPlugin { id: String },
}
