pub mod palette_png;

pub use palette_png::{ExportOptions, PaletteRenderer, MAX_SCALE};
