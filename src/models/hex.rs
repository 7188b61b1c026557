//! Hex color grammar validation and the validated `HexColor` string type.
//!
//! `is_valid_hex` is the single gate between free text and canonical color
//! values: everything downstream of it (`HexColor`, ramp generation, the
//! config serializer) only ever sees text that passed the grammar.

use anyhow::Result;
use regex::Regex;
use serde::Serialize;
use std::fmt;

use super::RgbColor;

/// The hex color grammar: `#` followed by exactly 3 or 6 hex digits.
const HEX_PATTERN: &str = "^#([0-9A-Fa-f]{3}|[0-9A-Fa-f]{6})$";

/// Checks whether a string is a valid hex color.
///
/// Accepts `#RGB` and `#RRGGBB` forms, case-insensitive. Never normalizes
/// and never panics on any input.
///
/// # Examples
///
/// ```
/// use tintdeck::models::is_valid_hex;
///
/// assert!(is_valid_hex("#009FDB"));
/// assert!(is_valid_hex("#fff"));
/// assert!(!is_valid_hex("#12"));
/// assert!(!is_valid_hex("009FDB"));
/// ```
#[must_use]
pub fn is_valid_hex(s: &str) -> bool {
    let hex_regex = Regex::new(HEX_PATTERN).unwrap();
    hex_regex.is_match(s)
}

/// A validated hex color string.
///
/// The inner text is stored verbatim: no case folding and no 3-to-6 digit
/// expansion. Construction goes through [`HexColor::parse`], so any value of
/// this type is guaranteed to match the hex grammar.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct HexColor(String);

impl HexColor {
    /// Parses a hex color string, keeping the text verbatim.
    ///
    /// # Errors
    ///
    /// Returns an error if the string does not match the hex grammar
    /// (`#` + 3 or 6 hex digits).
    ///
    /// # Examples
    ///
    /// ```
    /// use tintdeck::models::HexColor;
    ///
    /// let color = HexColor::parse("#009fdb").unwrap();
    /// assert_eq!(color.as_str(), "#009fdb");
    ///
    /// assert!(HexColor::parse("#12").is_err());
    /// ```
    pub fn parse(s: &str) -> Result<Self> {
        if !is_valid_hex(s) {
            anyhow::bail!("Invalid hex color '{s}'. Expected #RGB or #RRGGBB");
        }
        Ok(Self(s.to_string()))
    }

    /// Returns the color text exactly as it was entered.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Expands the color to RGB channel values.
    ///
    /// 3-digit colors expand each digit (`#1AF` reads as `#11AAFF`); the
    /// stored text itself is untouched.
    #[must_use]
    pub fn to_rgb(&self) -> RgbColor {
        let digits = &self.0[1..];

        let channel = |hi: u8, lo: u8| {
            let hex_val = |c: u8| match c {
                b'0'..=b'9' => c - b'0',
                b'a'..=b'f' => c - b'a' + 10,
                _ => c - b'A' + 10,
            };
            hex_val(hi) * 16 + hex_val(lo)
        };

        let bytes = digits.as_bytes();
        if digits.len() == 3 {
            RgbColor::new(
                channel(bytes[0], bytes[0]),
                channel(bytes[1], bytes[1]),
                channel(bytes[2], bytes[2]),
            )
        } else {
            RgbColor::new(
                channel(bytes[0], bytes[1]),
                channel(bytes[2], bytes[3]),
                channel(bytes[4], bytes[5]),
            )
        }
    }
}

impl From<RgbColor> for HexColor {
    /// Formats channel values as a 6-digit uppercase hex color.
    fn from(color: RgbColor) -> Self {
        Self(color.to_hex())
    }
}

impl fmt::Display for HexColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
