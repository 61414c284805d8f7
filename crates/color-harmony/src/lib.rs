//! color-harmony: palette generation and accessibility metrics
//!
//! This library generates color palettes from a base color using classic
//! color-wheel relationships, keeps user-locked colors stable across
//! regenerations, and scores every color for legibility and for how it
//! appears to viewers with color vision deficiencies.
//!
//! # Quick Start
//!
//! ```
//! use color_harmony::{generate_palette, get_contrast, HarmonyMode, HexColor, PaletteSize};
//!
//! let base: HexColor = "#3366CC".parse().unwrap();
//! let palette = generate_palette(base, HarmonyMode::Triadic, PaletteSize::default(), &[]);
//! assert_eq!(palette.len(), 5);
//! assert_eq!(palette[0].hex, base);
//!
//! let stats = get_contrast("#FFFFFF").unwrap();
//! assert_eq!(stats.contrast, 21.0);
//! ```
//!
//! # Locking
//!
//! A palette is owned by the caller. Regeneration takes the current
//! palette as input and returns a new one of exactly the requested size:
//! locked entries stay at their index untouched (id, hex, name), every
//! other slot receives the next generated color with a fresh id.
//!
//! # Modules
//!
//! - [`color`]: hex parsing, RGB storage and HSL conversion
//! - [`metrics`]: WCAG contrast and CVD simulation
//! - [`harmony`]: harmony modes, palette sizes and generation
//! - [`palette`]: palette entries, snapshot edits and swatch views
//!
//! # Color Model
//!
//! All harmony arithmetic happens in HSL derived from 8-bit sRGB. Hue is
//! in degrees and wraps modulo 360; saturation and lightness are
//! fractions in [0, 1]. Conversions round to the nearest 8-bit channel,
//! so `hsl -> hex -> hsl` is exact only up to quantization (about one
//! degree of hue and 0.5% lightness).
//!
//! Contrast follows WCAG 2.x: channels are linearized with the sRGB
//! transfer function (cutoff 0.03928), relative luminance uses the
//! Rec. 709 weights, and the ratio is `(L1 + 0.05) / (L2 + 0.05)`.
//!
//! CVD simulation multiplies the 0..255 channel vector by a fixed 3x3
//! matrix per deficiency and clamps. It is a coarse linear model applied
//! directly to gamma-encoded values, good enough to preview palettes.
//!
//! # Features
//!
//! - `serde`: `Serialize`/`Deserialize` for all public data types. Hex
//!   colors serialize as `"#RRGGBB"`, modes as their display names.

pub mod color;
pub mod harmony;
pub mod metrics;
pub mod palette;


pub use color::{hex_to_hsl, hsl_to_hex, is_valid_hex, HexColor, Hsl, ParseColorError, Rgb};
pub use harmony::{
    generate_palette, harmony_colors, HarmonyMode, PaletteSettings, PaletteSize,
    PaletteSizeError, ParseModeError,
};
pub use metrics::{
    get_contrast, simulate_hex, AccessibilityStats, CvdMode, ParseCvdModeError, TextColor,
    WcagLevel,
};
pub use palette::{
    describe, move_color, palette_from_hexes, toggle_lock, update_hex, ColorEntry, ColorId, Swatch,
};
