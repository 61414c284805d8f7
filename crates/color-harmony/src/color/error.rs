//! Error type for hex color parsing.

use std::fmt;

/// Error type for parsing `#RRGGBB` hex color strings.
///
/// Returned by [`HexColor`](crate::HexColor)'s `FromStr` impl and by every
/// entry point that accepts a hex string from outside the crate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseColorError {
    /// The string does not start with `#`
    MissingHash,
    /// Wrong number of characters after the `#` (must be exactly 6)
    InvalidLength(usize),
    /// A character after the `#` is not a hexadecimal digit
    InvalidDigit(char),
}

impl fmt::Display for ParseColorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseColorError::MissingHash => {
                write!(f, "hex color must start with '#'")
            }
            ParseColorError::InvalidLength(len) => {
                write!(
                    f,
                    "invalid hex color length {} (expected 6 digits after '#')",
                    len
                )
            }
            ParseColorError::InvalidDigit(c) => {
                write!(f, "invalid hex digit {:?}", c)
            }
        }
    }
}

impl std::error::Error for ParseColorError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        assert_eq!(
            ParseColorError::MissingHash.to_string(),
            "hex color must start with '#'"
        );
        assert_eq!(
            ParseColorError::InvalidLength(3).to_string(),
            "invalid hex color length 3 (expected 6 digits after '#')"
        );
        assert_eq!(
            ParseColorError::InvalidDigit('G').to_string(),
            "invalid hex digit 'G'"
        );
    }
}
