//! HSL color type and hex conversion
//!
//! Hue is in degrees, saturation and lightness in 0.0..=1.0. The
//! conversion is the usual hexcone model; achromatic colors (grey, black,
//! white) get hue 0 and saturation 0 so that every value is a number.

use super::hex::HexColor;
use super::rgb::Rgb;

/// A color in HSL (hue, saturation, lightness) space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsl {
    /// Hue in degrees, 0.0..360.0 when produced from RGB
    pub h: f64,
    /// Saturation, 0.0..=1.0
    pub s: f64,
    /// Lightness, 0.0..=1.0
    pub l: f64,
}

impl Hsl {
    #[inline]
    pub fn new(h: f64, s: f64, l: f64) -> Self {
        Self { h, s, l }
    }

    /// Return a copy with a different hue (any value, wrapped on conversion).
    #[inline]
    pub fn with_hue(self, h: f64) -> Self {
        Self { h, ..self }
    }

    /// Return a copy with a different lightness.
    #[inline]
    pub fn with_lightness(self, l: f64) -> Self {
        Self { l, ..self }
    }

    /// Return a copy with a different saturation.
    #[inline]
    pub fn with_saturation(self, s: f64) -> Self {
        Self { s, ..self }
    }
}

impl From<Rgb> for Hsl {
    fn from(rgb: Rgb) -> Self {
        let [r, g, b] = rgb.to_unit();
        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let l = (max + min) / 2.0;
        let delta = max - min;

        if delta == 0.0 {
            return Self { h: 0.0, s: 0.0, l };
        }

        let h = if r == max {
            (g - b) / delta + if g < b { 6.0 } else { 0.0 }
        } else if g == max {
            (b - r) / delta + 2.0
        } else {
            (r - g) / delta + 4.0
        };
        let s = if l < 0.5 {
            delta / (max + min)
        } else {
            delta / (2.0 - max - min)
        };

        Self { h: h * 60.0, s, l }
    }
}

impl From<Hsl> for Rgb {
    fn from(hsl: Hsl) -> Self {
        let h = if hsl.h.is_finite() {
            hsl.h.rem_euclid(360.0)
        } else {
            0.0
        };
        let s = if hsl.s.is_nan() { 0.0 } else { hsl.s };
        let l = hsl.l;

        let m2 = l + if l < 0.5 { l } else { 1.0 - l } * s;
        let m1 = 2.0 * l - m2;

        Rgb::from_f64(
            hue_to_channel(if h >= 240.0 { h - 240.0 } else { h + 120.0 }, m1, m2),
            hue_to_channel(h, m1, m2),
            hue_to_channel(if h < 120.0 { h + 240.0 } else { h - 120.0 }, m1, m2),
        )
    }
}

/// One channel of the hexcone model, scaled to 0..=255.
fn hue_to_channel(h: f64, m1: f64, m2: f64) -> f64 {
    let v = if h < 60.0 {
        m1 + (m2 - m1) * h / 60.0
    } else if h < 180.0 {
        m2
    } else if h < 240.0 {
        m1 + (m2 - m1) * (240.0 - h) / 60.0
    } else {
        m1
    };
    v * 255.0
}

/// Convert a hex color to HSL.
#[inline]
pub fn hex_to_hsl(hex: HexColor) -> Hsl {
    Hsl::from(hex.rgb())
}

/// Convert HSL components to a hex color.
///
/// The hue wraps (negative hues are fine); out-of-gamut results are
/// clamped channel by channel.
///
/// ```
/// use color_harmony::hsl_to_hex;
/// assert_eq!(hsl_to_hex(120.0, 1.0, 0.5).to_string(), "#00FF00");
/// assert_eq!(hsl_to_hex(-240.0, 1.0, 0.5).to_string(), "#00FF00");
/// ```
#[inline]
pub fn hsl_to_hex(h: f64, s: f64, l: f64) -> HexColor {
    HexColor::from_rgb(Rgb::from(Hsl::new(h, s, l)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hex(s: &str) -> HexColor {
        s.parse().unwrap()
    }

    #[test]
    fn test_primary_colors() {
        let red = hex_to_hsl(hex("#FF0000"));
        assert_eq!((red.h, red.s, red.l), (0.0, 1.0, 0.5));

        let green = hex_to_hsl(hex("#00FF00"));
        assert_eq!((green.h, green.s, green.l), (120.0, 1.0, 0.5));

        let blue = hex_to_hsl(hex("#0000FF"));
        assert_eq!((blue.h, blue.s, blue.l), (240.0, 1.0, 0.5));
    }

    #[test]
    fn test_achromatic_has_zero_hue_and_saturation() {
        for s in ["#000000", "#808080", "#FFFFFF"] {
            let hsl = hex_to_hsl(hex(s));
            assert_eq!(hsl.h, 0.0, "{s}");
            assert_eq!(hsl.s, 0.0, "{s}");
        }
        assert_eq!(hex_to_hsl(hex("#FFFFFF")).l, 1.0);
        assert_eq!(hex_to_hsl(hex("#000000")).l, 0.0);
    }

    #[test]
    fn test_known_value() {
        // #3366CC is hsl(220, 60%, 50%)
        let hsl = hex_to_hsl(hex("#3366CC"));
        assert!((hsl.h - 220.0).abs() < 1e-9);
        assert!((hsl.s - 0.6).abs() < 1e-9);
        assert!((hsl.l - 0.5).abs() < 1e-9);
        assert_eq!(hsl_to_hex(220.0, 0.6, 0.5), hex("#3366CC"));
    }

    #[test]
    fn test_hue_wraps() {
        assert_eq!(hsl_to_hex(360.0, 1.0, 0.5), hex("#FF0000"));
        assert_eq!(hsl_to_hex(480.0, 1.0, 0.5), hex("#00FF00"));
        assert_eq!(hsl_to_hex(-120.0, 1.0, 0.5), hex("#0000FF"));
    }

    #[test]
    fn test_non_finite_inputs_do_not_panic() {
        assert_eq!(hsl_to_hex(f64::NAN, f64::NAN, 0.5), hex("#808080"));
        assert_eq!(hsl_to_hex(0.0, 0.0, 2.0), hex("#FFFFFF"));
    }

    /// hex -> HSL -> hex must be lossless for 8-bit colors.
    #[test]
    fn test_round_trip_grid() {
        for r in (0..=255u16).step_by(15) {
            for g in (0..=255u16).step_by(15) {
                for b in (0..=255u16).step_by(15) {
                    let original = HexColor::from_rgb(Rgb::new(r as u8, g as u8, b as u8));
                    let hsl = hex_to_hsl(original);
                    let back = hsl_to_hex(hsl.h, hsl.s, hsl.l);
                    assert_eq!(back, original, "round trip failed for {original}");
                }
            }
        }
    }
}
