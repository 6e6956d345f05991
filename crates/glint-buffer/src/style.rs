//! Colors and tag styles.
//!
//! ## Learning: Custom Serde Representations
//!
//! Theme files write colors as `"#RRGGBB"` strings, but code wants numeric
//! channels. `#[serde(try_from = "String", into = "String")]` lets `Color`
//! keep its struct shape in Rust while round-tripping through the hex form on
//! disk. Parsing failures surface as serde errors instead of panics.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::BufferError;

/// Color representation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Parses `#RGB`, `#RRGGBB` or `#RRGGBBAA`.
    pub fn from_hex(hex: &str) -> Result<Self, BufferError> {
        let invalid = || BufferError::InvalidColor(hex.to_string());
        let digits = hex.strip_prefix('#').ok_or_else(invalid)?;
        if !digits.is_ascii() {
            return Err(invalid());
        }

        let channel = |s: &str| u8::from_str_radix(s, 16).map_err(|_| invalid());
        let (r, g, b, a) = match digits.len() {
            3 => {
                let expand = |i: usize| channel(&digits[i..=i].repeat(2));
                (expand(0)?, expand(1)?, expand(2)?, 255)
            }
            6 => (
                channel(&digits[0..2])?,
                channel(&digits[2..4])?,
                channel(&digits[4..6])?,
                255,
            ),
            8 => (
                channel(&digits[0..2])?,
                channel(&digits[2..4])?,
                channel(&digits[4..6])?,
                channel(&digits[6..8])?,
            ),
            _ => return Err(invalid()),
        };

        Ok(Self::rgba(
            f32::from(r) / 255.0,
            f32::from(g) / 255.0,
            f32::from(b) / 255.0,
            f32::from(a) / 255.0,
        ))
    }

    /// Formats as `#RRGGBB`, or `#RRGGBBAA` when not fully opaque.
    pub fn to_hex(&self) -> String {
        let byte = |v: f32| (v.clamp(0.0, 1.0) * 255.0).round() as u8;
        let (r, g, b, a) = (byte(self.r), byte(self.g), byte(self.b), byte(self.a));
        if a == 255 {
            format!("#{r:02X}{g:02X}{b:02X}")
        } else {
            format!("#{r:02X}{g:02X}{b:02X}{a:02X}")
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl FromStr for Color {
    type Err = BufferError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s.trim())
    }
}

impl TryFrom<String> for Color {
    type Error = BufferError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.to_hex()
    }
}

/// Visual style attached to a tag.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct TagStyle {
    pub foreground: Option<Color>,
}

impl TagStyle {
    pub fn foreground(color: Color) -> Self {
        Self {
            foreground: Some(color),
        }
    }
}

/// Widget-wide colors, the `base` section of a theme.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct BaseStyle {
    pub background: Option<Color>,
    pub foreground: Option<Color>,
    pub cursor: Option<Color>,
    pub selection: Option<Color>,
}

impl BaseStyle {
    /// Overlays the colors set in `other` onto `self`.
    pub fn merge(&mut self, other: &BaseStyle) {
        self.background = other.background.or(self.background);
        self.foreground = other.foreground.or(self.foreground);
        self.cursor = other.cursor.or(self.cursor);
        self.selection = other.selection.or(self.selection);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_parsing() {
        let c = Color::from_hex("#569CD6").unwrap();
        assert_eq!(c.to_hex(), "#569CD6");
        assert_eq!(Color::from_hex("#fff").unwrap().to_hex(), "#FFFFFF");
        assert_eq!(Color::from_hex("#00000080").unwrap().to_hex(), "#00000080");
    }

    #[test]
    fn test_invalid_hex() {
        assert!(Color::from_hex("569CD6").is_err());
        assert!(Color::from_hex("#12345").is_err());
        assert!(Color::from_hex("#GGGGGG").is_err());
        assert!(Color::from_hex("#ééé").is_err());
    }

    #[test]
    fn test_base_style_merge() {
        let mut base = BaseStyle {
            background: Some(Color::rgb(0.0, 0.0, 0.0)),
            foreground: Some(Color::rgb(1.0, 1.0, 1.0)),
            ..Default::default()
        };
        let overlay = BaseStyle {
            background: Some(Color::rgb(1.0, 0.0, 0.0)),
            ..Default::default()
        };
        base.merge(&overlay);
        assert_eq!(base.background, Some(Color::rgb(1.0, 0.0, 0.0)));
        assert_eq!(base.foreground, Some(Color::rgb(1.0, 1.0, 1.0)));
    }
}
