//! Color types and conversion utilities
//!
//! - [`Rgb`]: 8-bit sRGB triple, the storage form of every color
//! - [`HexColor`]: validated `#RRGGBB`, always displayed in uppercase
//! - [`Hsl`]: hue/saturation/lightness, used by the harmony generator
//!
//! # Example
//!
//! ```
//! use color_harmony::{hex_to_hsl, hsl_to_hex, HexColor};
//!
//! let base: HexColor = "#3366cc".parse().unwrap();
//! let hsl = hex_to_hsl(base);
//! let complement = hsl_to_hex(hsl.h + 180.0, hsl.s, hsl.l);
//! assert_eq!(complement.to_string(), "#CC9933");
//! ```

mod error;
mod hex;
mod hsl;
mod rgb;

pub use error::ParseColorError;
pub use hex::{is_valid_hex, HexColor};
pub use hsl::{hex_to_hsl, hsl_to_hex, Hsl};
pub use rgb::Rgb;
