//! Border color parsing.

use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

static RE_HEX_COLOR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^#([0-9A-Fa-f]{2})([0-9A-Fa-f]{2})([0-9A-Fa-f]{2})$").unwrap());

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ColorError {
    #[error("invalid color {0:?} (expected #rrggbb)")]
    InvalidFormat(String),
}

/// A 6-hex-digit RGB color such as `#8ea989`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HexColor {
    r: u8,
    g: u8,
    b: u8,
}

impl HexColor {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub fn channels(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }

    /// Opaque RGBA channels.
    pub fn to_rgba(self) -> [u8; 4] {
        [self.r, self.g, self.b, 255]
    }

    /// Uppercase `#RRGGBB` form shown next to the picker.
    pub fn label(self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

impl FromStr for HexColor {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let caps = RE_HEX_COLOR
            .captures(s.trim())
            .ok_or_else(|| ColorError::InvalidFormat(s.to_string()))?;
        let channel = |i: usize| {
            u8::from_str_radix(&caps[i], 16).map_err(|_| ColorError::InvalidFormat(s.to_string()))
        };
        Ok(Self {
            r: channel(1)?,
            g: channel(2)?,
            b: channel(3)?,
        })
    }
}

impl fmt::Display for HexColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl Serialize for HexColor {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_lower_and_upper_case() {
        let c: HexColor = "#8ea989".parse().unwrap();
        assert_eq!(c.channels(), [0x8e, 0xa9, 0x89]);
        assert_eq!("#8EA989".parse::<HexColor>().unwrap(), c);
    }

    #[test]
    fn label_is_uppercase_and_display_is_lowercase() {
        let c = HexColor::rgb(0x8e, 0xa9, 0x89);
        assert_eq!(c.label(), "#8EA989");
        assert_eq!(c.to_string(), "#8ea989");
    }

    #[test]
    fn rejects_malformed() {
        for bad in ["", "8ea989", "#8ea98", "#8ea9899", "#gggggg", "#fff", "red"] {
            assert!(bad.parse::<HexColor>().is_err(), "{bad} should be rejected");
        }
    }

    #[test]
    fn rgba_is_opaque() {
        let c = HexColor::rgb(1, 2, 3);
        assert_eq!(c.to_rgba(), [1, 2, 3, 255]);
    }
}
