pub mod config;
pub mod palette;

pub use config::{AiConfig, AppConfig, DefaultsConfig, ExportConfig};
pub use palette::{
    entries_from_records, records_from_entries, AccessibilityRecord, ColorRecord,
    GeneratedPalette, SettingsRecord, SwatchRecord,
};
