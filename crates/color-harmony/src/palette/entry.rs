//! Palette entries and their identifiers

use std::fmt;

use crate::color::HexColor;

/// Opaque, stable identifier of a palette entry.
///
/// Fresh ids are random UUID v4 strings; ids supplied by a caller are
/// kept verbatim, whatever their format.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
pub struct ColorId(String);

impl ColorId {
    /// Allocate a new unique id.
    pub fn generate() -> Self {
        Self(uuid::Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for ColorId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for ColorId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl fmt::Display for ColorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One color of a palette.
///
/// Only `hex`, `name` and `locked` change over an entry's lifetime; the
/// id stays fixed until the entry is removed or regenerated.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ColorEntry {
    pub id: ColorId,
    pub hex: HexColor,
    pub name: String,
    pub locked: bool,
}

impl ColorEntry {
    /// A fresh, unlocked entry named after its hex value.
    pub fn new(hex: HexColor) -> Self {
        Self {
            id: ColorId::generate(),
            name: hex.to_string(),
            hex,
            locked: false,
        }
    }

    /// Same entry, locked.
    pub fn locked(mut self) -> Self {
        self.locked = true;
        self
    }
}
