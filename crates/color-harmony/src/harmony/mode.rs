//! Harmony strategy selection

use std::fmt;
use std::str::FromStr;

use super::error::ParseModeError;

/// Color harmony strategy used to derive a palette from a base color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "String", into = "String")
)]
pub enum HarmonyMode {
    /// Hues spaced by the golden angle (137.508°) with small S/L oscillation
    #[default]
    GoldenRatio,
    /// A 30° hue fan centered on the base
    Analogous,
    /// Base and its 180° complement, plus lighter/darker tones of both
    Complementary,
    /// Three hues 120° apart, plus lighter tones
    Triadic,
    /// One hue, evenly stepped lightness
    Monochromatic,
}

impl HarmonyMode {
    pub const ALL: [HarmonyMode; 5] = [
        HarmonyMode::GoldenRatio,
        HarmonyMode::Analogous,
        HarmonyMode::Complementary,
        HarmonyMode::Triadic,
        HarmonyMode::Monochromatic,
    ];

    /// Human-readable name, also the wire format (`"Golden Ratio"`, ...).
    pub fn name(self) -> &'static str {
        match self {
            HarmonyMode::GoldenRatio => "Golden Ratio",
            HarmonyMode::Analogous => "Analogous",
            HarmonyMode::Complementary => "Complementary",
            HarmonyMode::Triadic => "Triadic",
            HarmonyMode::Monochromatic => "Monochromatic",
        }
    }

    /// Parse a mode name, falling back to [`HarmonyMode::GoldenRatio`] for
    /// anything unrecognized.
    ///
    /// ```
    /// use color_harmony::HarmonyMode;
    /// assert_eq!(HarmonyMode::from_name_lenient("triadic"), HarmonyMode::Triadic);
    /// assert_eq!(HarmonyMode::from_name_lenient("split"), HarmonyMode::GoldenRatio);
    /// ```
    pub fn from_name_lenient(name: &str) -> Self {
        name.parse().unwrap_or_default()
    }
}

impl fmt::Display for HarmonyMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for HarmonyMode {
    type Err = ParseModeError;

    /// Case-insensitive; spaces, dashes and underscores are ignored, so
    /// `"Golden Ratio"`, `"golden-ratio"` and `"GOLDEN_RATIO"` all match.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key: String = s
            .chars()
            .filter(|c| !matches!(c, ' ' | '-' | '_'))
            .map(|c| c.to_ascii_lowercase())
            .collect();

        match key.as_str() {
            "goldenratio" | "golden" => Ok(HarmonyMode::GoldenRatio),
            "analogous" => Ok(HarmonyMode::Analogous),
            "complementary" => Ok(HarmonyMode::Complementary),
            "triadic" => Ok(HarmonyMode::Triadic),
            "monochromatic" | "mono" => Ok(HarmonyMode::Monochromatic),
            _ => Err(ParseModeError(s.to_string())),
        }
    }
}

impl TryFrom<String> for HarmonyMode {
    type Error = ParseModeError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<HarmonyMode> for String {
    fn from(mode: HarmonyMode) -> Self {
        mode.name().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_variants() {
        assert_eq!("Golden Ratio".parse(), Ok(HarmonyMode::GoldenRatio));
        assert_eq!("golden-ratio".parse(), Ok(HarmonyMode::GoldenRatio));
        assert_eq!("GOLDEN_RATIO".parse(), Ok(HarmonyMode::GoldenRatio));
        assert_eq!("Monochromatic".parse(), Ok(HarmonyMode::Monochromatic));
        assert_eq!(
            "tetradic".parse::<HarmonyMode>(),
            Err(ParseModeError("tetradic".to_string()))
        );
    }

    #[test]
    fn test_names_round_trip() {
        for mode in HarmonyMode::ALL {
            assert_eq!(mode.name().parse(), Ok(mode));
            assert_eq!(mode.to_string(), mode.name());
        }
    }

    #[test]
    fn test_lenient_fallback() {
        assert_eq!(HarmonyMode::from_name_lenient(""), HarmonyMode::GoldenRatio);
        assert_eq!(
            HarmonyMode::from_name_lenient("Analogous"),
            HarmonyMode::Analogous
        );
    }
}
