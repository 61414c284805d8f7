//! Perceptual accessibility metrics
//!
//! - [`AccessibilityStats`]: WCAG contrast ratio, level and recommended ink
//! - [`CvdMode`]: linear color-vision-deficiency simulation
//!
//! Display code typically simulates first and scores the simulated color,
//! so the badge shown on a swatch matches what the viewer actually sees.

mod contrast;
mod cvd;

pub use contrast::{
    contrast_ratio, get_contrast, relative_luminance, AccessibilityStats, TextColor, WcagLevel,
    AAA_THRESHOLD, AA_THRESHOLD,
};
pub use cvd::{simulate_hex, CvdMode, ParseCvdModeError};
