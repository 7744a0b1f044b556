//! # Colors
//!
//! RGB color values, hex parsing, and the named-color table shared by the
//! assembler and the simulation shim.

use crate::{GameLabError, GameLabResult};
use serde::{Deserialize, Serialize};
use std::fmt;

/// An opaque RGB color.
///
/// # Examples
///
/// ```
/// use gamelab::Color;
///
/// let color = Color::from_hex("#ff8000").unwrap();
/// assert_eq!(color, Color::new(255, 128, 0));
/// assert_eq!(color.to_hex(), "#ff8000");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

/// Color names recognised in source text, lowercase.
const NAMED_COLORS: &[(&str, Color)] = &[
    ("black", Color::new(0, 0, 0)),
    ("white", Color::new(255, 255, 255)),
    ("red", Color::new(255, 0, 0)),
    ("green", Color::new(0, 255, 0)),
    ("blue", Color::new(0, 0, 255)),
    ("yellow", Color::new(255, 255, 0)),
    ("orange", Color::new(255, 165, 0)),
    ("purple", Color::new(128, 0, 128)),
    ("pink", Color::new(255, 192, 203)),
    ("cyan", Color::new(0, 255, 255)),
    ("magenta", Color::new(255, 0, 255)),
    ("brown", Color::new(139, 69, 19)),
    ("gray", Color::new(128, 128, 128)),
    ("grey", Color::new(128, 128, 128)),
];

impl Color {
    /// Creates a color from its components.
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parses `#rrggbb` or `#rgb` text. The leading `#` is optional.
    pub fn from_hex(text: &str) -> GameLabResult<Self> {
        let trimmed = text.trim();
        let digits = trimmed.strip_prefix('#').unwrap_or(trimmed);
        let invalid = || GameLabError::InvalidColor(text.to_string());

        if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(invalid());
        }

        match digits.len() {
            6 => {
                let channel = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16);
                Ok(Self::new(
                    channel(0).map_err(|_| invalid())?,
                    channel(2).map_err(|_| invalid())?,
                    channel(4).map_err(|_| invalid())?,
                ))
            }
            3 => {
                let channel = |i: usize| {
                    u8::from_str_radix(&digits[i..i + 1], 16).map(|v| v * 17)
                };
                Ok(Self::new(
                    channel(0).map_err(|_| invalid())?,
                    channel(1).map_err(|_| invalid())?,
                    channel(2).map_err(|_| invalid())?,
                ))
            }
            _ => Err(invalid()),
        }
    }

    /// Formats the color as lowercase `#rrggbb`.
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Looks up a color by name, ignoring case.
    ///
    /// # Examples
    ///
    /// ```
    /// use gamelab::Color;
    ///
    /// assert_eq!(Color::named("Red"), Some(Color::new(255, 0, 0)));
    /// assert_eq!(Color::named("screen"), None);
    /// ```
    pub fn named(name: &str) -> Option<Self> {
        let lower = name.to_ascii_lowercase();
        NAMED_COLORS
            .iter()
            .find(|(candidate, _)| *candidate == lower)
            .map(|(_, color)| *color)
    }

    /// Formats the color as a Python `(r, g, b)` tuple literal.
    pub fn to_tuple_literal(self) -> String {
        format!("({}, {}, {})", self.r, self.g, self.b)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_parsing() {
        assert_eq!(Color::from_hex("#1e1e2e").unwrap(), Color::new(30, 30, 46));
        assert_eq!(Color::from_hex("FFFFFF").unwrap(), Color::new(255, 255, 255));
        assert_eq!(Color::from_hex("#f80").unwrap(), Color::new(255, 136, 0));
    }

    #[test]
    fn test_invalid_hex() {
        assert!(Color::from_hex("").is_err());
        assert!(Color::from_hex("#12345").is_err());
        assert!(Color::from_hex("#gggggg").is_err());
        assert!(Color::from_hex("#+1+1+1").is_err());
    }

    #[test]
    fn test_only_one_hash_prefix() {
        assert!(Color::from_hex("##fff").is_err());
        assert!(Color::from_hex("###ffffff").is_err());
        assert!(Color::from_hex("#fff#").is_err());
    }

    #[test]
    fn test_named_lookup() {
        assert_eq!(Color::named("WHITE"), Some(Color::new(255, 255, 255)));
        assert_eq!(Color::named("grey"), Color::named("gray"));
        assert_eq!(Color::named("color"), None);
    }

    #[test]
    fn test_tuple_literal() {
        assert_eq!(Color::new(1, 2, 3).to_tuple_literal(), "(1, 2, 3)");
    }
}
