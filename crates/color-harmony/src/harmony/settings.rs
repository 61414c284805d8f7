//! Generation settings owned by the caller

use super::merge::generate_palette;
use super::mode::HarmonyMode;
use super::size::PaletteSize;
use crate::color::HexColor;
use crate::palette::ColorEntry;

/// The caller-owned generation settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PaletteSettings {
    pub harmony: HarmonyMode,
    pub size: PaletteSize,
    pub base_color: HexColor,
}

impl PaletteSettings {
    /// Run [`generate_palette`] with these settings.
    pub fn generate(&self, current: &[ColorEntry]) -> Vec<ColorEntry> {
        generate_palette(self.base_color, self.harmony, self.size, current)
    }

    /// Use an existing palette color as the new base ("set as main color").
    pub fn with_base(self, base_color: HexColor) -> Self {
        Self { base_color, ..self }
    }
}

impl Default for PaletteSettings {
    fn default() -> Self {
        Self {
            harmony: HarmonyMode::default(),
            size: PaletteSize::default(),
            base_color: HexColor::from_rgb(crate::color::Rgb::new(0x33, 0x66, 0xCC)),
        }
    }
}
