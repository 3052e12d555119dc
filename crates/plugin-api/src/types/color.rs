use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::ColorParseError;

/// A palette colour value.
///
/// The two variants carry identical information; they differ only in how the
/// value was spelled in the configuration, and that spelling is preserved so
/// descriptors round-trip through config files and manifest output unchanged.
#[derive(Debug, Clone, Copy, Eq)]
pub enum Color {
    /// Spelled as a `#RRGGBB` literal.
    Hex { r: u8, g: u8, b: u8 },
    /// Spelled as an `rgb(r, g, b)` function.
    Rgb { r: u8, g: u8, b: u8 },
}

impl Color {
    #[must_use]
    pub const fn hex(r: u8, g: u8, b: u8) -> Self {
        Self::Hex { r, g, b }
    }

    #[must_use]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::Rgb { r, g, b }
    }

    /// The raw channel values, regardless of spelling.
    #[must_use]
    pub const fn channels(self) -> (u8, u8, u8) {
        match self {
            Self::Hex { r, g, b } | Self::Rgb { r, g, b } => (r, g, b),
        }
    }
}

/// Colours compare by channel values, not by spelling: `#5074BF` and
/// `rgb(80, 116, 191)` are the same colour.
impl PartialEq for Color {
    fn eq(&self, other: &Self) -> bool {
        self.channels() == other.channels()
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::Hex { r, g, b } => write!(f, "#{r:02X}{g:02X}{b:02X}"),
            Self::Rgb { r, g, b } => write!(f, "rgb({r}, {g}, {b})"),
        }
    }
}

impl FromStr for Color {
    type Err = ColorParseError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let value = input.trim();

        if let Some(hex) = value.strip_prefix('#') {
            return parse_hex_colour(hex);
        }

        if let Some(body) = value.strip_prefix("rgb(").and_then(|s| s.strip_suffix(')')) {
            return parse_rgb_triplet(body);
        }

        Err(ColorParseError::Unrecognised {
            value: value.to_string(),
        })
    }
}

impl Serialize for Color {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let literal = String::deserialize(deserializer)?;
        literal.parse().map_err(D::Error::custom)
    }
}

fn parse_hex_colour(hex: &str) -> Result<Color, ColorParseError> {
    let expanded = match hex.len() {
        3 => {
            let mut expanded = String::with_capacity(6);
            for ch in hex.chars() {
                expanded.push(ch);
                expanded.push(ch);
            }
            Cow::Owned(expanded)
        }
        6 => Cow::Borrowed(hex),
        _ => {
            return Err(ColorParseError::MalformedHex {
                value: hex.to_string(),
            });
        }
    };

    let r = parse_hex_channel(&expanded[0..2], 'r')?;
    let g = parse_hex_channel(&expanded[2..4], 'g')?;
    let b = parse_hex_channel(&expanded[4..6], 'b')?;

    Ok(Color::Hex { r, g, b })
}

fn parse_hex_channel(value: &str, channel: char) -> Result<u8, ColorParseError> {
    u8::from_str_radix(value, 16).map_err(|_| ColorParseError::MalformedChannel {
        channel,
        value: value.to_string(),
    })
}

fn parse_rgb_triplet(body: &str) -> Result<Color, ColorParseError> {
    let components = body.split(',').map(|part| part.trim()).collect::<Vec<_>>();

    if components.len() != 3 {
        return Err(ColorParseError::WrongArity {
            found: components.len(),
        });
    }

    let r = parse_rgb_channel(components[0], 'r')?;
    let g = parse_rgb_channel(components[1], 'g')?;
    let b = parse_rgb_channel(components[2], 'b')?;

    Ok(Color::Rgb { r, g, b })
}

fn parse_rgb_channel(value: &str, channel: char) -> Result<u8, ColorParseError> {
    value
        .parse::<u8>()
        .map_err(|_| ColorParseError::MalformedChannel {
            channel,
            value: value.to_string(),
        })
}
