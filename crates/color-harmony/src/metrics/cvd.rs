//! Color-vision-deficiency simulation
//!
//! Each deficiency is approximated by a fixed 3x3 linear transform applied
//! to 8-bit RGB. This is a display aid, not a physiological model.

use std::fmt;
use std::str::FromStr;

use crate::color::{HexColor, Rgb};

/// Row-major 3x3 matrix: `out_r = m[0]*r + m[1]*g + m[2]*b`, and so on.
type Matrix = [f64; 9];

const PROTANOPIA: Matrix = [
    0.567, 0.433, 0.0, //
    0.558, 0.442, 0.0, //
    0.0, 0.242, 0.758,
];

const DEUTERANOPIA: Matrix = [
    0.625, 0.375, 0.0, //
    0.7, 0.3, 0.0, //
    0.0, 0.3, 0.7,
];

const TRITANOPIA: Matrix = [
    0.95, 0.05, 0.0, //
    0.0, 0.433, 0.567, //
    0.0, 0.475, 0.525,
];

const ACHROMATOPSIA: Matrix = [
    0.299, 0.587, 0.114, //
    0.299, 0.587, 0.114, //
    0.299, 0.587, 0.114,
];

/// Color-vision-deficiency simulation mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "String", into = "String")
)]
pub enum CvdMode {
    /// Normal vision (identity)
    #[default]
    None,
    /// Red-blind
    Protanopia,
    /// Green-blind
    Deuteranopia,
    /// Blue-blind
    Tritanopia,
    /// Monochromacy
    Achromatopsia,
}

impl CvdMode {
    pub const ALL: [CvdMode; 5] = [
        CvdMode::None,
        CvdMode::Protanopia,
        CvdMode::Deuteranopia,
        CvdMode::Tritanopia,
        CvdMode::Achromatopsia,
    ];

    pub fn name(self) -> &'static str {
        match self {
            CvdMode::None => "None",
            CvdMode::Protanopia => "Protanopia",
            CvdMode::Deuteranopia => "Deuteranopia",
            CvdMode::Tritanopia => "Tritanopia",
            CvdMode::Achromatopsia => "Achromatopsia",
        }
    }

    fn matrix(self) -> Option<&'static Matrix> {
        match self {
            CvdMode::None => None,
            CvdMode::Protanopia => Some(&PROTANOPIA),
            CvdMode::Deuteranopia => Some(&DEUTERANOPIA),
            CvdMode::Tritanopia => Some(&TRITANOPIA),
            CvdMode::Achromatopsia => Some(&ACHROMATOPSIA),
        }
    }

    /// Simulate how `rgb` appears under this deficiency.
    ///
    /// Output channels are rounded and clamped to 0..=255.
    ///
    /// ```
    /// use color_harmony::{CvdMode, Rgb};
    ///
    /// let grey = CvdMode::Achromatopsia.simulate(Rgb::new(255, 0, 0));
    /// assert_eq!(grey, Rgb::new(76, 76, 76));
    /// assert_eq!(CvdMode::None.simulate(Rgb::new(1, 2, 3)), Rgb::new(1, 2, 3));
    /// ```
    pub fn simulate(self, rgb: Rgb) -> Rgb {
        let Some(m) = self.matrix() else {
            return rgb;
        };
        let [r, g, b] = rgb.to_f64();
        Rgb::from_f64(
            m[0] * r + m[1] * g + m[2] * b,
            m[3] * r + m[4] * g + m[5] * b,
            m[6] * r + m[7] * g + m[8] * b,
        )
    }

    #[inline]
    pub fn simulate_hex(self, hex: HexColor) -> HexColor {
        HexColor::from_rgb(self.simulate(hex.rgb()))
    }
}

/// Simulate a hex string under `mode`.
///
/// [`CvdMode::None`] and malformed input return the input string
/// unchanged; otherwise the result is canonical uppercase `#RRGGBB`.
pub fn simulate_hex(hex: &str, mode: CvdMode) -> String {
    if mode == CvdMode::None {
        return hex.to_string();
    }
    match hex.parse::<HexColor>() {
        Ok(color) => mode.simulate_hex(color).to_string(),
        Err(_) => hex.to_string(),
    }
}

impl fmt::Display for CvdMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when a CVD mode name is not recognized.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseCvdModeError(pub String);

impl fmt::Display for ParseCvdModeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown color vision mode {:?} (expected one of None, Protanopia, Deuteranopia, Tritanopia, Achromatopsia)",
            self.0
        )
    }
}

impl std::error::Error for ParseCvdModeError {}

impl FromStr for CvdMode {
    type Err = ParseCvdModeError;

    /// Case-insensitive; `normal` is accepted as an alias for `None`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "none" | "normal" | "" => Ok(CvdMode::None),
            "protanopia" => Ok(CvdMode::Protanopia),
            "deuteranopia" => Ok(CvdMode::Deuteranopia),
            "tritanopia" => Ok(CvdMode::Tritanopia),
            "achromatopsia" => Ok(CvdMode::Achromatopsia),
            _ => Err(ParseCvdModeError(s.to_string())),
        }
    }
}

impl TryFrom<String> for CvdMode {
    type Error = ParseCvdModeError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<CvdMode> for String {
    fn from(mode: CvdMode) -> Self {
        mode.name().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_none_is_identity_for_any_string() {
        for s in ["#3366CC", "#abcdef", "garbage", ""] {
            assert_eq!(simulate_hex(s, CvdMode::None), s);
        }
    }

    #[test]
    fn test_malformed_hex_returned_unchanged() {
        for mode in CvdMode::ALL {
            assert_eq!(simulate_hex("#XYZ", mode), "#XYZ");
        }
    }

    #[test]
    fn test_protanopia_red() {
        // r=255: (0.567*255, 0.558*255, 0) = (144.585, 142.29, 0)
        assert_eq!(simulate_hex("#FF0000", CvdMode::Protanopia), "#918E00");
    }

    #[test]
    fn test_deuteranopia_green() {
        // g=200: (0.375*200, 0.3*200, 0.3*200) = (75, 60, 60)
        assert_eq!(simulate_hex("#00C800", CvdMode::Deuteranopia), "#4B3C3C");
    }

    #[test]
    fn test_tritanopia_blue() {
        // b=255: (0, 0.567*255, 0.525*255) = (0, 144.585, 133.875)
        assert_eq!(simulate_hex("#0000FF", CvdMode::Tritanopia), "#009186");
    }

    #[test]
    fn test_achromatopsia_is_grey() {
        let out = CvdMode::Achromatopsia.simulate(Rgb::new(0x33, 0x66, 0xCC));
        assert_eq!(out.r, out.g);
        assert_eq!(out.g, out.b);
    }

    #[test]
    fn test_output_always_valid_hex() {
        for mode in CvdMode::ALL {
            for v in [0u8, 1, 127, 128, 254, 255] {
                let input = HexColor::from_rgb(Rgb::new(v, 255 - v, v / 2));
                let out = simulate_hex(&input.to_string(), mode);
                assert!(crate::is_valid_hex(&out), "{mode}: {out}");
            }
        }
        // Rows summing to slightly above 1 must clamp rather than overflow
        assert_eq!(
            simulate_hex("#FFFFFF", CvdMode::Achromatopsia),
            "#FFFFFF"
        );
    }

    #[test]
    fn test_lowercase_input_normalized() {
        assert_eq!(simulate_hex("#ffffff", CvdMode::Protanopia), "#FFFFFF");
    }

    #[test]
    fn test_parse_mode() {
        assert_eq!("Protanopia".parse(), Ok(CvdMode::Protanopia));
        assert_eq!("ACHROMATOPSIA".parse(), Ok(CvdMode::Achromatopsia));
        assert_eq!("none".parse(), Ok(CvdMode::None));
        assert!("colorblind".parse::<CvdMode>().is_err());
        for mode in CvdMode::ALL {
            assert_eq!(mode.name().parse(), Ok(mode));
        }
    }
}
