//! Validated palette size

use std::fmt;

use super::error::PaletteSizeError;

/// Number of colors in a palette, always within 3..=9.
///
/// ```
/// use color_harmony::PaletteSize;
/// assert_eq!(PaletteSize::new(5).unwrap().get(), 5);
/// assert!(PaletteSize::new(2).is_err());
/// assert!(PaletteSize::new(10).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "usize", into = "usize")
)]
pub struct PaletteSize(u8);

impl PaletteSize {
    pub const MIN: usize = 3;
    pub const MAX: usize = 9;

    pub fn new(size: usize) -> Result<Self, PaletteSizeError> {
        if (Self::MIN..=Self::MAX).contains(&size) {
            Ok(Self(size as u8))
        } else {
            Err(PaletteSizeError(size))
        }
    }

    /// Clamp any integer into the valid range.
    pub fn saturating(size: usize) -> Self {
        Self(size.clamp(Self::MIN, Self::MAX) as u8)
    }

    #[inline]
    pub fn get(self) -> usize {
        self.0 as usize
    }
}

impl Default for PaletteSize {
    fn default() -> Self {
        Self(5)
    }
}

impl TryFrom<usize> for PaletteSize {
    type Error = PaletteSizeError;

    fn try_from(value: usize) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<PaletteSize> for usize {
    fn from(size: PaletteSize) -> Self {
        size.get()
    }
}

impl fmt::Display for PaletteSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
