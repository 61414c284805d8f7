//! Asset loading with embedded fallbacks
//!
//! - Config: `CONFIG_FILE` if set and present, otherwise the embedded `config.yaml`
//! - Templates: always embedded
//! - Fonts: nothing is embedded; `FONTS_DIR` adds fonts on top of the system set

use rust_embed::RustEmbed;
use std::borrow::Cow;
use std::fs;
use std::io;
use std::path::PathBuf;

/// Embedded default config
#[derive(RustEmbed)]
#[folder = "assets/"]
#[include = "config.yaml"]
struct EmbeddedConfig;

/// Embedded SVG templates
#[derive(RustEmbed)]
#[folder = "assets/templates/"]
#[include = "*.svg"]
struct EmbeddedTemplates;

/// Asset category for listing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssetCategory {
    Config,
    Templates,
}

/// Asset loader with optional filesystem overrides
pub struct AssetLoader {
    /// External fonts directory (from FONTS_DIR env var)
    fonts_dir: Option<PathBuf>,
    /// External config file path (from CONFIG_FILE env var)
    config_file: Option<PathBuf>,
}

impl AssetLoader {
    /// Create a new asset loader
    ///
    /// Paths should be `Some` only if the corresponding env var was set.
    pub fn new(fonts_dir: Option<PathBuf>, config_file: Option<PathBuf>) -> Self {
        Self {
            fonts_dir,
            config_file,
        }
    }

    /// Create a loader from `FONTS_DIR` and `CONFIG_FILE`
    pub fn from_env() -> Self {
        Self::new(
            std::env::var("FONTS_DIR").ok().map(PathBuf::from),
            std::env::var("CONFIG_FILE").ok().map(PathBuf::from),
        )
    }

    /// Read the config file
    ///
    /// If an external path is configured and exists, uses that.
    /// Otherwise falls back to embedded config.
    pub fn read_config(&self) -> io::Result<Cow<'static, [u8]>> {
        if let Some(ref path) = self.config_file {
            if path.exists() {
                tracing::trace!(path = %path.display(), "Loading config from filesystem");
                return Ok(Cow::Owned(fs::read(path)?));
            }
            tracing::warn!(path = %path.display(), "Config file not found, using embedded config");
        }

        EmbeddedConfig::get("config.yaml")
            .map(|f| {
                tracing::trace!("Loading config from embedded assets");
                f.data
            })
            .ok_or_else(|| {
                io::Error::new(io::ErrorKind::NotFound, "Embedded config.yaml not found")
            })
    }

    /// Read config as a UTF-8 string
    pub fn read_config_string(&self) -> io::Result<String> {
        let bytes = self.read_config()?;
        String::from_utf8(bytes.into_owned())
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
    }

    /// Human readable description of where the config comes from
    pub fn config_source(&self) -> String {
        match self.config_file {
            Some(ref path) if path.exists() => path.display().to_string(),
            Some(_) => "embedded (file not found)".to_string(),
            None => "embedded".to_string(),
        }
    }

    /// Read an embedded SVG template as a string
    pub fn read_template(&self, name: &str) -> io::Result<String> {
        let file = EmbeddedTemplates::get(name).ok_or_else(|| {
            io::Error::new(io::ErrorKind::NotFound, format!("Template not found: {name}"))
        })?;
        String::from_utf8(file.data.into_owned())
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
    }

    /// Get font data from `FONTS_DIR` (for loading into fontdb)
    pub fn get_fonts(&self) -> Vec<(String, Cow<'static, [u8]>)> {
        let mut fonts = Vec::new();

        if let Some(ref dir) = self.fonts_dir {
            match fs::read_dir(dir) {
                Ok(entries) => {
                    for entry in entries.flatten() {
                        let path = entry.path();
                        let is_font = path
                            .extension()
                            .and_then(|ext| ext.to_str())
                            .is_some_and(|ext| matches!(ext, "ttf" | "otf" | "woff" | "woff2"));
                        if !is_font {
                            continue;
                        }
                        if let Ok(data) = fs::read(&path) {
                            let name = entry.file_name().to_string_lossy().to_string();
                            tracing::trace!(font = %name, "Loading font from filesystem");
                            fonts.push((name, Cow::Owned(data)));
                        }
                    }
                }
                Err(e) => {
                    tracing::warn!(path = %dir.display(), %e, "Failed to read fonts directory");
                }
            }
        }

        fonts.sort_by(|a, b| a.0.cmp(&b.0));
        fonts
    }

    /// List embedded asset names for a category
    pub fn list_embedded(category: AssetCategory) -> Vec<String> {
        let mut files: Vec<String> = match category {
            AssetCategory::Config => EmbeddedConfig::iter().map(|s| s.to_string()).collect(),
            AssetCategory::Templates => EmbeddedTemplates::iter().map(|s| s.to_string()).collect(),
        };
        files.sort();
        files
    }
}

impl Default for AssetLoader {
    fn default() -> Self {
        Self::new(None, None)
    }
}
