use super::entry::ColorEntry;
use crate::color::HexColor;
use crate::metrics::{AccessibilityStats, CvdMode};

/// A palette entry as it is shown under a vision mode.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Swatch {
    #[cfg_attr(feature = "serde", serde(flatten))]
    pub entry: ColorEntry,
    /// The color after CVD simulation; equals `entry.hex` for `CvdMode::None`.
    pub display_hex: HexColor,
    /// Contrast stats of `display_hex`, not of the stored color.
    pub accessibility: AccessibilityStats,
}

/// Compute the displayed color and its accessibility stats for each entry.
pub fn describe(colors: &[ColorEntry], cvd: CvdMode) -> Vec<Swatch> {
    colors
        .iter()
        .map(|entry| {
            let display_hex = cvd.simulate_hex(entry.hex);
            Swatch {
                entry: entry.clone(),
                display_hex,
                accessibility: AccessibilityStats::for_hex(display_hex),
            }
        })
        .collect()
}
