use crate::assets::AssetLoader;
use color_harmony::{HarmonyMode, HexColor, PaletteSettings, PaletteSize};
use serde::Deserialize;

/// Application configuration loaded from config.yaml
#[derive(Debug, Deserialize, Clone, Default)]
pub struct AppConfig {
    /// Generation settings applied when a request omits them
    #[serde(default)]
    pub defaults: DefaultsConfig,

    /// Generative suggestion client
    #[serde(default)]
    pub ai: AiConfig,

    /// PNG export layout
    #[serde(default)]
    pub export: ExportConfig,
}

/// Default palette generation settings
#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq)]
pub struct DefaultsConfig {
    #[serde(default)]
    pub harmony: HarmonyMode,

    #[serde(default)]
    pub size: PaletteSize,

    #[serde(default = "default_base_color")]
    pub base_color: HexColor,
}

fn default_base_color() -> HexColor {
    PaletteSettings::default().base_color
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        let settings = PaletteSettings::default();
        Self {
            harmony: settings.harmony,
            size: settings.size,
            base_color: settings.base_color,
        }
    }
}

impl DefaultsConfig {
    /// Merge request overrides over the configured defaults
    pub fn settings(
        &self,
        harmony: Option<HarmonyMode>,
        size: Option<PaletteSize>,
        base_color: Option<HexColor>,
    ) -> PaletteSettings {
        PaletteSettings {
            harmony: harmony.unwrap_or(self.harmony),
            size: size.unwrap_or(self.size),
            base_color: base_color.unwrap_or(self.base_color),
        }
    }
}

/// Configuration for the generative color client
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct AiConfig {
    /// Base URL of the generative language API
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    /// Model used for text prompts
    #[serde(default = "default_text_model")]
    pub text_model: String,

    /// Model used for image extraction
    #[serde(default = "default_image_model")]
    pub image_model: String,

    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Upper bound on returned colors (never above 9)
    #[serde(default = "default_max_colors")]
    pub max_colors: usize,
}

fn default_endpoint() -> String {
    "https://generativelanguage.googleapis.com".to_string()
}

fn default_text_model() -> String {
    "gemini-3-flash-preview".to_string()
}

fn default_image_model() -> String {
    "gemini-2.5-flash-image".to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_max_colors() -> usize {
    color_harmony::palette::MAX_IMPORTED
}

impl Default for AiConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            text_model: default_text_model(),
            image_model: default_image_model(),
            timeout_secs: default_timeout_secs(),
            max_colors: default_max_colors(),
        }
    }
}

impl AiConfig {
    /// `max_colors` clamped to what a palette can hold
    pub fn color_limit(&self) -> usize {
        self.max_colors.min(color_harmony::palette::MAX_IMPORTED)
    }
}

/// PNG export layout, in SVG units before scaling
#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq)]
pub struct ExportConfig {
    #[serde(default = "default_scale")]
    pub scale: u32,

    #[serde(default)]
    pub transparent: bool,

    #[serde(default = "default_tile_width")]
    pub tile_width: u32,

    #[serde(default = "default_tile_height")]
    pub tile_height: u32,

    /// Border around the tiles; ignored for transparent exports
    #[serde(default = "default_padding")]
    pub padding: u32,
}

fn default_scale() -> u32 {
    2
}

fn default_tile_width() -> u32 {
    200
}

fn default_tile_height() -> u32 {
    300
}

fn default_padding() -> u32 {
    40
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            scale: default_scale(),
            transparent: false,
            tile_width: default_tile_width(),
            tile_height: default_tile_height(),
            padding: default_padding(),
        }
    }
}

impl AppConfig {
    /// Load configuration from AssetLoader (embedded or external)
    pub fn load_from_assets(loader: &AssetLoader) -> Self {
        match loader.read_config_string() {
            Ok(content) => Self::from_yaml(&content),
            Err(e) => {
                tracing::warn!(%e, "Failed to read config, using defaults");
                Self::default()
            }
        }
    }

    /// Parse YAML, falling back to defaults on error
    pub fn from_yaml(content: &str) -> Self {
        // An empty or comment-only file parses as null
        if content.lines().all(|l| l.trim().is_empty() || l.trim_start().starts_with('#')) {
            return Self::default();
        }

        match serde_yaml::from_str::<Self>(content) {
            Ok(config) => {
                tracing::info!(
                    harmony = %config.defaults.harmony,
                    size = config.defaults.size.get(),
                    base_color = %config.defaults.base_color,
                    "Loaded configuration"
                );
                config
            }
            Err(e) => {
                tracing::warn!(%e, "Failed to parse config, using defaults");
                Self::default()
            }
        }
    }
}
