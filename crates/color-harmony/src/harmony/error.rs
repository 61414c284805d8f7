//! Error types for harmony settings

use std::fmt;

/// Error returned when a harmony mode name is not recognized.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseModeError(pub String);

impl fmt::Display for ParseModeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown harmony mode {:?} (expected one of Golden Ratio, Analogous, Complementary, Triadic, Monochromatic)",
            self.0
        )
    }
}

impl std::error::Error for ParseModeError {}

/// Error returned when a palette size is outside 3..=9.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaletteSizeError(pub usize);

impl fmt::Display for PaletteSizeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "palette size {} out of range (expected {}..={})",
            self.0,
            super::PaletteSize::MIN,
            super::PaletteSize::MAX
        )
    }
}

impl std::error::Error for PaletteSizeError {}
