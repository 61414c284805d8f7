//! Merging a freshly generated sequence with the caller's locked entries.

use super::generate::harmony_colors;
use super::mode::HarmonyMode;
use super::size::PaletteSize;
use crate::color::HexColor;
use crate::palette::ColorEntry;

/// Generate a palette of exactly `size` entries, keeping locked entries.
///
/// Positions are filled left to right. When `current[i]` exists and is
/// locked it is copied verbatim (id, hex, name and flag). Every other
/// position takes the next color of the generated sequence as a new,
/// unlocked entry with a fresh id. `current` may be shorter or longer than
/// `size`; extra entries are dropped.
///
/// ```
/// use color_harmony::{generate_palette, HarmonyMode, HexColor, PaletteSize};
///
/// let base: HexColor = "#3366CC".parse().unwrap();
/// let size = PaletteSize::new(5).unwrap();
/// let first = generate_palette(base, HarmonyMode::Analogous, size, &[]);
///
/// let mut current = first.clone();
/// current[2].locked = true;
/// let second = generate_palette(base, HarmonyMode::Triadic, size, &current);
///
/// assert_eq!(second.len(), 5);
/// assert_eq!(second[2], current[2]);
/// ```
pub fn generate_palette(
    base: HexColor,
    mode: HarmonyMode,
    size: PaletteSize,
    current: &[ColorEntry],
) -> Vec<ColorEntry> {
    let generated = harmony_colors(base, mode, size.get());
    merge_locked(&generated, size.get(), current)
}

/// Fill `size` slots from `generated`, keeping locked entries of `current`.
///
/// The generated sequence is consumed cyclically if it runs short; an
/// empty sequence yields black.
pub(crate) fn merge_locked(
    generated: &[HexColor],
    size: usize,
    current: &[ColorEntry],
) -> Vec<ColorEntry> {
    let mut next = 0usize;

    (0..size)
        .map(|i| match current.get(i) {
            Some(existing) if existing.locked => existing.clone(),
            _ => {
                let hex = if generated.is_empty() {
                    HexColor::BLACK
                } else {
                    generated[next % generated.len()]
                };
                next += 1;
                ColorEntry::new(hex)
            }
        })
        .collect()
}
