use std::fmt;
use std::str::FromStr;

use serde::{Serialize, Serializer};

use crate::error::{Result, ValidationError, reject};

/// An RGB color, rendered on the wire as `#rrggbb`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Builds a color from loosely typed channel values, rejecting anything
    /// outside `0..=255`.
    pub fn from_rgb(r: i64, g: i64, b: i64) -> Result<Self> {
        Ok(Self {
            r: channel('r', r)?,
            g: channel('g', g)?,
            b: channel('b', b)?,
        })
    }

    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

fn channel(name: char, value: i64) -> Result<u8> {
    u8::try_from(value).map_err(|_| {
        reject(ValidationError::ChannelOutOfRange {
            channel: name,
            value,
        })
    })
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl FromStr for Color {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self> {
        let invalid = || reject(ValidationError::InvalidColor(s.to_string()));
        let digits = s.trim().strip_prefix('#').ok_or_else(invalid)?;
        if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(invalid());
        }
        let part = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&digits[range], 16).map_err(|_| invalid())
        };
        Ok(Self {
            r: part(0..2)?,
            g: part(2..4)?,
            b: part(4..6)?,
        })
    }
}

impl TryFrom<&str> for Color {
    type Error = ValidationError;

    fn try_from(value: &str) -> Result<Self> {
        value.parse()
    }
}

impl TryFrom<String> for Color {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

impl TryFrom<(i64, i64, i64)> for Color {
    type Error = ValidationError;

    fn try_from((r, g, b): (i64, i64, i64)) -> Result<Self> {
        Self::from_rgb(r, g, b)
    }
}

impl From<(u8, u8, u8)> for Color {
    fn from((r, g, b): (u8, u8, u8)) -> Self {
        Self::new(r, g, b)
    }
}

impl Serialize for Color {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

/// The platform's named palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NamedColor {
    Black,
    DarkBlue,
    DarkGreen,
    DarkAqua,
    DarkRed,
    DarkPurple,
    Gold,
    Gray,
    DarkGray,
    Blue,
    Green,
    Aqua,
    Red,
    Yellow,
    White,
}

impl NamedColor {
    pub const ALL: [NamedColor; 15] = [
        NamedColor::Black,
        NamedColor::DarkBlue,
        NamedColor::DarkGreen,
        NamedColor::DarkAqua,
        NamedColor::DarkRed,
        NamedColor::DarkPurple,
        NamedColor::Gold,
        NamedColor::Gray,
        NamedColor::DarkGray,
        NamedColor::Blue,
        NamedColor::Green,
        NamedColor::Aqua,
        NamedColor::Red,
        NamedColor::Yellow,
        NamedColor::White,
    ];

    pub const fn color(self) -> Color {
        match self {
            NamedColor::Black => Color::new(0, 0, 0),
            NamedColor::DarkBlue => Color::new(0, 0, 170),
            NamedColor::DarkGreen => Color::new(0, 170, 0),
            NamedColor::DarkAqua => Color::new(0, 170, 170),
            NamedColor::DarkRed => Color::new(170, 0, 0),
            NamedColor::DarkPurple => Color::new(170, 0, 170),
            NamedColor::Gold => Color::new(255, 170, 0),
            NamedColor::Gray => Color::new(170, 170, 170),
            NamedColor::DarkGray => Color::new(85, 85, 85),
            NamedColor::Blue => Color::new(85, 85, 255),
            NamedColor::Green => Color::new(85, 255, 85),
            NamedColor::Aqua => Color::new(85, 255, 255),
            NamedColor::Red => Color::new(255, 85, 85),
            NamedColor::Yellow => Color::new(255, 255, 85),
            NamedColor::White => Color::new(255, 255, 255),
        }
    }
}

impl From<NamedColor> for Color {
    fn from(value: NamedColor) -> Self {
        value.color()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_is_zero_padded_lowercase() {
        assert_eq!(Color::new(0, 0, 0).to_hex(), "#000000");
        assert_eq!(Color::new(255, 170, 0).to_hex(), "#ffaa00");
        assert_eq!(Color::new(1, 2, 3).to_string(), "#010203");
    }

    #[test]
    fn every_channel_value_round_trips() {
        for v in 0..=255u8 {
            let color = Color::new(v, 255 - v, v / 2);
            let hex = color.to_hex();
            assert_eq!(hex.len(), 7);
            assert!(hex[1..].bytes().all(|b| matches!(b, b'0'..=b'9' | b'a'..=b'f')));
            assert_eq!(hex.parse::<Color>().expect("parse"), color);
        }
    }

    #[test]
    fn rejects_out_of_range_channels() {
        assert_eq!(
            Color::from_rgb(256, 0, 0).unwrap_err(),
            ValidationError::ChannelOutOfRange {
                channel: 'r',
                value: 256
            }
        );
        assert!(Color::from_rgb(-1, 0, 0).is_err());
        assert!(Color::from_rgb(0, 0, 300).is_err());
        assert_eq!(Color::from_rgb(255, 0, 255).expect("color"), Color::new(255, 0, 255));
    }

    #[test]
    fn parses_uppercase_and_rejects_garbage() {
        assert_eq!("#55FFFF".parse::<Color>().expect("parse"), Color::new(85, 255, 255));
        for bad in ["55ffff", "#5ff", "#55ffzz", "", "#55ffff00"] {
            assert_eq!(
                bad.parse::<Color>().unwrap_err(),
                ValidationError::InvalidColor(bad.to_string())
            );
        }
    }

    #[test]
    fn named_palette_values() {
        assert_eq!(Color::from(NamedColor::Gold).to_hex(), "#ffaa00");
        assert_eq!(NamedColor::DarkGray.color().to_hex(), "#555555");
        assert_eq!(NamedColor::ALL.len(), 15);
    }
}
