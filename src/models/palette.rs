use chrono::Utc;
use color_harmony::{
    AccessibilityStats, ColorEntry, ColorId, HexColor, PaletteSettings, ParseColorError, Swatch,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A palette color as exchanged over the API
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ColorRecord {
    /// Stable identifier; a fresh one is assigned when empty
    #[serde(default)]
    #[schema(example = "1b4e28ba-2fa1-11d2-883f-0016d3cca427")]
    pub id: String,

    /// Color as `#RRGGBB`
    #[schema(example = "#3366CC")]
    pub hex: String,

    /// Display name; defaults to the hex value
    #[serde(default)]
    pub name: String,

    /// Locked colors survive regeneration
    #[serde(default)]
    pub locked: bool,
}

impl From<&ColorEntry> for ColorRecord {
    fn from(entry: &ColorEntry) -> Self {
        Self {
            id: entry.id.to_string(),
            hex: entry.hex.to_string(),
            name: entry.name.clone(),
            locked: entry.locked,
        }
    }
}

impl TryFrom<ColorRecord> for ColorEntry {
    type Error = ParseColorError;

    fn try_from(record: ColorRecord) -> Result<Self, Self::Error> {
        let hex: HexColor = record.hex.trim().parse()?;
        let id = if record.id.is_empty() {
            ColorId::generate()
        } else {
            ColorId::from(record.id)
        };
        let name = if record.name.is_empty() {
            hex.to_string()
        } else {
            record.name
        };

        Ok(ColorEntry {
            id,
            hex,
            name,
            locked: record.locked,
        })
    }
}

/// Convert API records into palette entries, failing on the first bad hex
pub fn entries_from_records(records: Vec<ColorRecord>) -> Result<Vec<ColorEntry>, ParseColorError> {
    records.into_iter().map(ColorEntry::try_from).collect()
}

/// Convert palette entries into API records
pub fn records_from_entries(entries: &[ColorEntry]) -> Vec<ColorRecord> {
    entries.iter().map(ColorRecord::from).collect()
}

/// Settings a palette was generated with
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct SettingsRecord {
    #[schema(example = "Golden Ratio")]
    pub harmony: String,
    #[schema(example = 5)]
    pub size: usize,
    #[schema(example = "#3366CC")]
    pub base_color: String,
}

impl From<PaletteSettings> for SettingsRecord {
    fn from(settings: PaletteSettings) -> Self {
        Self {
            harmony: settings.harmony.to_string(),
            size: settings.size.get(),
            base_color: settings.base_color.to_string(),
        }
    }
}

/// A generated palette with its settings, ready to be saved by a client
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct GeneratedPalette {
    pub id: String,
    /// Milliseconds since the Unix epoch
    pub timestamp: i64,
    pub colors: Vec<ColorRecord>,
    pub settings: SettingsRecord,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl GeneratedPalette {
    pub fn new(colors: &[ColorEntry], settings: PaletteSettings) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            timestamp: Utc::now().timestamp_millis(),
            colors: records_from_entries(colors),
            settings: settings.into(),
            name: None,
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }
}

/// WCAG stats of one color
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AccessibilityRecord {
    /// Contrast ratio against the recommended text color, two decimals
    #[schema(example = 4.69)]
    pub contrast: f64,
    /// `AAA`, `AA` or `Fail`
    #[schema(example = "AA")]
    pub level: String,
    /// `black` or `white`
    #[serde(rename = "textColor")]
    #[schema(example = "black")]
    pub text_color: String,
}

impl From<AccessibilityStats> for AccessibilityRecord {
    fn from(stats: AccessibilityStats) -> Self {
        Self {
            contrast: stats.contrast,
            level: stats.level.to_string(),
            text_color: stats.text_color.to_string(),
        }
    }
}

/// A palette color as displayed under a vision mode
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SwatchRecord {
    pub id: String,
    pub hex: String,
    /// The color after vision simulation
    pub display_hex: String,
    pub name: String,
    pub locked: bool,
    /// Stats of `display_hex`
    pub accessibility: AccessibilityRecord,
}

impl From<Swatch> for SwatchRecord {
    fn from(swatch: Swatch) -> Self {
        Self {
            id: swatch.entry.id.to_string(),
            hex: swatch.entry.hex.to_string(),
            display_hex: swatch.display_hex.to_string(),
            name: swatch.entry.name,
            locked: swatch.entry.locked,
            accessibility: swatch.accessibility.into(),
        }
    }
}
