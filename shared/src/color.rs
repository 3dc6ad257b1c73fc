use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};
use thiserror::Error;

lazy_static! {
    /// Hex color grammar: exactly 6 (RRGGBB) or 8 (RRGGBB + alpha byte) hex digits
    static ref HEX_COLOR_REGEX: Regex = Regex::new(r"^[0-9A-Fa-f]{6}$|^[0-9A-Fa-f]{8}$").unwrap();
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("'{0}' is not a 6 or 8 character hex color")]
pub struct ColorParseError(pub String);

/// A validated 6- or 8-character hex color string.
///
/// The 6-character form is RRGGBB; the 8-character form carries a trailing
/// alpha byte. The string is kept verbatim and only converted to channel
/// values inside the serializers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HexColor(String);

impl HexColor {
    pub fn parse(value: &str) -> Result<Self, ColorParseError> {
        let trimmed = value.trim();
        if HEX_COLOR_REGEX.is_match(trimmed) {
            Ok(Self(trimmed.to_string()))
        } else {
            Err(ColorParseError(value.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// RGBA channel values; the alpha channel defaults to opaque for the
    /// 6-character form.
    pub fn rgba(&self) -> [u8; 4] {
        let byte = |i: usize| {
            self.0
                .get(i..i + 2)
                .and_then(|pair| u8::from_str_radix(pair, 16).ok())
                .unwrap_or(0)
        };
        let alpha = if self.0.len() == 8 { byte(6) } else { 0xff };
        [byte(0), byte(2), byte(4), alpha]
    }

    /// The RGB portion as a CSS hex literal, e.g. `#004aad`.
    pub fn css_rgb(&self) -> String {
        format!("#{}", &self.0[..6].to_lowercase())
    }

    /// Opacity in 0.0..=1.0, `None` for the fully opaque 6-character form.
    pub fn opacity(&self) -> Option<f64> {
        if self.0.len() == 8 {
            Some(f64::from(self.rgba()[3]) / 255.0)
        } else {
            None
        }
    }
}

impl std::fmt::Display for HexColor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_six_hex_chars() {
        let color = HexColor::parse("004AAD").unwrap();
        assert_eq!(color.as_str(), "004AAD");
        assert_eq!(color.rgba(), [0x00, 0x4a, 0xad, 0xff]);
        assert_eq!(color.opacity(), None);
    }

    #[test]
    fn accepts_eight_hex_chars_with_alpha() {
        let color = HexColor::parse("FF0000CC").unwrap();
        assert_eq!(color.rgba(), [0xff, 0x00, 0x00, 0xcc]);
        assert_eq!(color.css_rgb(), "#ff0000");
        assert!(color.opacity().unwrap() < 1.0);
    }

    #[test]
    fn is_case_insensitive() {
        assert!(HexColor::parse("ffFFff").is_ok());
        assert!(HexColor::parse("AbCdEf01").is_ok());
    }

    #[test]
    fn rejects_wrong_lengths() {
        for bad in ["", "fff", "12345", "1234567", "123456789", "004AAD7"] {
            assert!(HexColor::parse(bad).is_err(), "{bad:?} should be rejected");
        }
    }

    #[test]
    fn rejects_non_hex_characters() {
        assert!(HexColor::parse("ggggGG").is_err());
        assert!(HexColor::parse("00-4AAD").is_err());
        assert!(HexColor::parse("#004AAD").is_err());
    }

    #[test]
    fn trims_surrounding_whitespace() {
        assert_eq!(HexColor::parse(" 004aad ").unwrap().as_str(), "004aad");
    }
}
