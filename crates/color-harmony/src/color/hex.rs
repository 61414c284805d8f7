//! Canonical `#RRGGBB` hex colors

use std::fmt;
use std::str::FromStr;

use super::error::ParseColorError;
use super::rgb::Rgb;

/// Check whether `s` is a `#RRGGBB` hex color (case-insensitive).
///
/// This is the validation predicate callers run before accepting a hex
/// string from user input or from the AI collaborator. Shorthand `#RGB`
/// and strings without the leading `#` are rejected.
///
/// ```
/// use color_harmony::is_valid_hex;
/// assert!(is_valid_hex("#3366cc"));
/// assert!(!is_valid_hex("#36C"));
/// assert!(!is_valid_hex("3366CC"));
/// ```
pub fn is_valid_hex(s: &str) -> bool {
    s.parse::<HexColor>().is_ok()
}

/// A validated hex color, always rendered as uppercase `#RRGGBB`.
///
/// Parsing accepts either case; [`Display`](fmt::Display) always produces
/// the canonical uppercase form.
///
/// ```
/// use color_harmony::HexColor;
/// let c: HexColor = "#ff8800".parse().unwrap();
/// assert_eq!(c.to_string(), "#FF8800");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "String", into = "String")
)]
pub struct HexColor(Rgb);

impl HexColor {
    pub const BLACK: Self = Self(Rgb::BLACK);
    pub const WHITE: Self = Self(Rgb::WHITE);

    #[inline]
    pub const fn from_rgb(rgb: Rgb) -> Self {
        Self(rgb)
    }

    #[inline]
    pub const fn rgb(self) -> Rgb {
        self.0
    }
}

impl From<Rgb> for HexColor {
    fn from(rgb: Rgb) -> Self {
        Self(rgb)
    }
}

impl From<HexColor> for Rgb {
    fn from(hex: HexColor) -> Self {
        hex.0
    }
}

impl fmt::Display for HexColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.0.r, self.0.g, self.0.b)
    }
}

impl FromStr for HexColor {
    type Err = ParseColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits = s.strip_prefix('#').ok_or(ParseColorError::MissingHash)?;

        if let Some(bad) = digits.chars().find(|c| !c.is_ascii_hexdigit()) {
            return Err(ParseColorError::InvalidDigit(bad));
        }
        if digits.len() != 6 {
            return Err(ParseColorError::InvalidLength(digits.len()));
        }

        // All six characters are ASCII hex digits, so byte slicing is safe.
        let channel = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16).unwrap_or_default();
        Ok(Self(Rgb::new(channel(0), channel(2), channel(4))))
    }
}

impl TryFrom<String> for HexColor {
    type Error = ParseColorError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<HexColor> for String {
    fn from(hex: HexColor) -> Self {
        hex.to_string()
    }
}
