//! WCAG 2.x relative luminance and contrast classification.
//!
//! Every color is scored against both possible text inks (pure black and
//! pure white). The ink with the higher contrast ratio wins; when the two
//! ratios are equal, black wins.

use std::fmt;

use crate::color::{HexColor, ParseColorError, Rgb};

/// Minimum contrast ratio for WCAG level AAA (normal text).
pub const AAA_THRESHOLD: f64 = 7.0;
/// Minimum contrast ratio for WCAG level AA (normal text).
pub const AA_THRESHOLD: f64 = 4.5;

/// WCAG conformance level reached by a contrast ratio.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum WcagLevel {
    #[cfg_attr(feature = "serde", serde(rename = "AAA"))]
    Aaa,
    #[cfg_attr(feature = "serde", serde(rename = "AA"))]
    Aa,
    Fail,
}

impl WcagLevel {
    /// Classify a contrast ratio: `AAA` at 7 and above, `AA` at 4.5 and above.
    pub fn from_ratio(ratio: f64) -> Self {
        if ratio >= AAA_THRESHOLD {
            WcagLevel::Aaa
        } else if ratio >= AA_THRESHOLD {
            WcagLevel::Aa
        } else {
            WcagLevel::Fail
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            WcagLevel::Aaa => "AAA",
            WcagLevel::Aa => "AA",
            WcagLevel::Fail => "Fail",
        }
    }
}

impl fmt::Display for WcagLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Recommended foreground ink for text drawn on a color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum TextColor {
    Black,
    White,
}

impl TextColor {
    pub fn as_str(self) -> &'static str {
        match self {
            TextColor::Black => "black",
            TextColor::White => "white",
        }
    }

    pub fn rgb(self) -> Rgb {
        match self {
            TextColor::Black => Rgb::BLACK,
            TextColor::White => Rgb::WHITE,
        }
    }
}

impl fmt::Display for TextColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Contrast summary for a single color.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AccessibilityStats {
    /// Best contrast ratio against black or white ink, rounded to 2 decimals
    pub contrast: f64,
    /// WCAG level reached by `contrast`
    pub level: WcagLevel,
    /// The ink that achieves `contrast`
    #[cfg_attr(feature = "serde", serde(rename = "textColor"))]
    pub text_color: TextColor,
}

impl AccessibilityStats {
    /// Score a color against black and white text.
    ///
    /// ```
    /// use color_harmony::{AccessibilityStats, Rgb, TextColor, WcagLevel};
    ///
    /// let stats = AccessibilityStats::for_rgb(Rgb::WHITE);
    /// assert_eq!(stats.text_color, TextColor::Black);
    /// assert_eq!(stats.level, WcagLevel::Aaa);
    /// assert_eq!(stats.contrast, 21.0);
    /// ```
    pub fn for_rgb(rgb: Rgb) -> Self {
        let lum = relative_luminance(rgb);
        let contrast_white = (1.0 + 0.05) / (lum + 0.05);
        let contrast_black = (lum + 0.05) / (0.0 + 0.05);

        let (ratio, text_color) = if contrast_white > contrast_black {
            (contrast_white, TextColor::White)
        } else {
            (contrast_black, TextColor::Black)
        };

        Self {
            contrast: round2(ratio),
            level: WcagLevel::from_ratio(ratio),
            text_color,
        }
    }

    #[inline]
    pub fn for_hex(hex: HexColor) -> Self {
        Self::for_rgb(hex.rgb())
    }
}

/// Parse a hex string and compute its [`AccessibilityStats`].
///
/// Malformed input is reported as a [`ParseColorError`] rather than scored.
pub fn get_contrast(hex: &str) -> Result<AccessibilityStats, ParseColorError> {
    let color: HexColor = hex.parse()?;
    Ok(AccessibilityStats::for_hex(color))
}

/// WCAG relative luminance of an sRGB color, 0.0 (black) to 1.0 (white).
pub fn relative_luminance(rgb: Rgb) -> f64 {
    let [r, g, b] = rgb.to_unit().map(linearize);
    0.2126 * r + 0.7152 * g + 0.0722 * b
}

/// WCAG contrast ratio between two colors, 1.0..=21.0, order-independent.
pub fn contrast_ratio(a: Rgb, b: Rgb) -> f64 {
    let la = relative_luminance(a);
    let lb = relative_luminance(b);
    let (lighter, darker) = if la >= lb { (la, lb) } else { (lb, la) };
    (lighter + 0.05) / (darker + 0.05)
}

// WCAG 2.x uses 0.03928 as the linear segment cutoff.
fn linearize(v: f64) -> f64 {
    if v <= 0.03928 {
        v / 12.92
    } else {
        ((v + 0.055) / 1.055).powf(2.4)
    }
}

fn round2(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_white_prefers_black_text() {
        let stats = get_contrast("#FFFFFF").unwrap();
        assert_eq!(stats.text_color, TextColor::Black);
        assert_eq!(stats.level, WcagLevel::Aaa);
        assert_eq!(stats.contrast, 21.0);
    }

    #[test]
    fn test_black_prefers_white_text() {
        let stats = get_contrast("#000000").unwrap();
        assert_eq!(stats.text_color, TextColor::White);
        assert_eq!(stats.level, WcagLevel::Aaa);
        assert_eq!(stats.contrast, 21.0);
    }

    #[test]
    fn test_mid_grey_levels() {
        // #777777 has luminance ~0.184, right above the black/white crossover
        let stats = get_contrast("#777777").unwrap();
        assert_eq!(stats.text_color, TextColor::Black);
        assert_eq!(stats.level, WcagLevel::Aa);
        assert!((stats.contrast - 4.69).abs() < 0.011, "{}", stats.contrast);

        // Pure red: luminance 0.2126, black text gives ~5.25
        let red = get_contrast("#FF0000").unwrap();
        assert_eq!(red.text_color, TextColor::Black);
        assert_eq!(red.level, WcagLevel::Aa);
        assert!((red.contrast - 5.25).abs() < 0.011, "{}", red.contrast);
    }

    #[test]
    fn test_contrast_rounded_to_two_decimals() {
        let stats = get_contrast("#3366CC").unwrap();
        let scaled = stats.contrast * 100.0;
        assert!((scaled - scaled.round()).abs() < 1e-9);
    }

    #[test]
    fn test_level_thresholds() {
        assert_eq!(WcagLevel::from_ratio(7.0), WcagLevel::Aaa);
        assert_eq!(WcagLevel::from_ratio(6.99), WcagLevel::Aa);
        assert_eq!(WcagLevel::from_ratio(4.5), WcagLevel::Aa);
        assert_eq!(WcagLevel::from_ratio(4.49), WcagLevel::Fail);
        assert_eq!(WcagLevel::from_ratio(1.0), WcagLevel::Fail);
    }

    #[test]
    fn test_best_ink_never_below_crossover() {
        // The better of the two inks always reaches at least sqrt(21) ~ 4.58
        for v in (0..=255u16).step_by(5) {
            let grey = Rgb::new(v as u8, v as u8, v as u8);
            let stats = AccessibilityStats::for_rgb(grey);
            assert!(stats.contrast >= 4.5, "grey {v}: {}", stats.contrast);
            assert_ne!(stats.level, WcagLevel::Fail);
        }
    }

    #[test]
    fn test_malformed_hex_is_an_error() {
        assert_eq!(
            get_contrast("not a color"),
            Err(ParseColorError::MissingHash)
        );
        assert!(get_contrast("#12345").is_err());
    }

    #[test]
    fn test_contrast_ratio_symmetric() {
        let a = Rgb::new(0x33, 0x66, 0xCC);
        let b = Rgb::WHITE;
        assert_eq!(contrast_ratio(a, b), contrast_ratio(b, a));
        assert!((contrast_ratio(Rgb::BLACK, Rgb::WHITE) - 21.0).abs() < 1e-9);
    }

    #[test]
    fn test_relative_luminance_bounds() {
        assert_eq!(relative_luminance(Rgb::BLACK), 0.0);
        assert!((relative_luminance(Rgb::WHITE) - 1.0).abs() < 1e-12);
    }
}
