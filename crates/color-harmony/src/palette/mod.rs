//! Palette entries and the edits a palette owner applies to them.

mod edit;
mod entry;
mod swatch;

pub use edit::{move_color, palette_from_hexes, toggle_lock, update_hex, MAX_IMPORTED};
pub use entry::{ColorEntry, ColorId};
pub use swatch::{describe, Swatch};
