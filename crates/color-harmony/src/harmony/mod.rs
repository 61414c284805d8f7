//! Harmony generator
//!
//! Produces a palette from a base color, a [`HarmonyMode`] and a
//! [`PaletteSize`], preserving the caller's locked entries. Generation is
//! a two-step process:
//!
//! 1. [`harmony_colors`] derives the raw color sequence for the mode
//! 2. [`generate_palette`] lays it over the current palette, keeping
//!    locked positions and minting fresh entries everywhere else

mod error;
mod generate;
mod merge;
mod mode;
mod settings;
mod size;

pub use error::{PaletteSizeError, ParseModeError};
pub use generate::{harmony_colors, GOLDEN_ANGLE};
pub use merge::generate_palette;
pub use mode::HarmonyMode;
pub use settings::PaletteSettings;
pub use size::PaletteSize;
