//! RGB colors for scene configuration

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::str::FromStr;
use thiserror::Error;

/// Error returned when a color string is not `#rrggbb` / `0xrrggbb`
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Invalid color '{0}': expected #rrggbb")]
pub struct ParseColorError(pub String);

/// 24-bit RGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb(u32);

impl Rgb {
    /// White, the default viewer background
    pub const WHITE: Rgb = Rgb(0xffffff);

    /// Create a color from a packed `0xrrggbb` value (upper bits are dropped)
    pub const fn from_hex(value: u32) -> Self {
        Rgb(value & 0x00ff_ffff)
    }

    /// Packed `0xrrggbb` value
    pub const fn to_hex(self) -> u32 {
        self.0
    }

    /// Red, green, blue components
    pub fn components(self) -> (u8, u8, u8) {
        (
            ((self.0 >> 16) & 0xff) as u8,
            ((self.0 >> 8) & 0xff) as u8,
            (self.0 & 0xff) as u8,
        )
    }
}

impl Default for Rgb {
    fn default() -> Self {
        Self::WHITE
    }
}

impl std::fmt::Display for Rgb {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{:06x}", self.0)
    }
}

impl FromStr for Rgb {
    type Err = ParseColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let digits = trimmed
            .strip_prefix('#')
            .or_else(|| trimmed.strip_prefix("0x"))
            .ok_or_else(|| ParseColorError(s.to_string()))?;
        if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(ParseColorError(s.to_string()));
        }
        u32::from_str_radix(digits, 16)
            .map(Rgb)
            .map_err(|_| ParseColorError(s.to_string()))
    }
}

impl Serialize for Rgb {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Rgb {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_and_display() {
        let color: Rgb = "#1a2B3c".parse().unwrap();
        assert_eq!(color.to_hex(), 0x1a2b3c);
        assert_eq!(color.to_string(), "#1a2b3c");
        assert_eq!(color.components(), (0x1a, 0x2b, 0x3c));

        let color: Rgb = "0xffffff".parse().unwrap();
        assert_eq!(color, Rgb::WHITE);
    }

    #[test]
    fn test_parse_rejects_malformed() {
        assert!("ffffff".parse::<Rgb>().is_err());
        assert!("#fff".parse::<Rgb>().is_err());
        assert!("#gggggg".parse::<Rgb>().is_err());
        // Sign prefixes are not hex digits
        assert!("#+fffff".parse::<Rgb>().is_err());
        assert!("0x-00001".parse::<Rgb>().is_err());
    }

    #[test]
    fn test_serde_uses_hex_string() {
        let json = serde_json::to_string(&Rgb::from_hex(0x00ff00)).unwrap();
        assert_eq!(json, "\"#00ff00\"");
        let back: Rgb = serde_json::from_str(&json).unwrap();
        assert_eq!(back.to_hex(), 0x00ff00);
    }
}
