use crate::assets::AssetLoader;
use crate::error::ExportError;
use crate::models::ExportConfig;
use color_harmony::{AccessibilityStats, ColorEntry, PaletteSize, TextColor};
use resvg::usvg::{self, Transform};
use serde::Serialize;
use std::io::Cursor;
use std::sync::Arc;
use tera::{Context, Tera};
use tiny_skia::Pixmap;

const TEMPLATE_NAME: &str = "palette.svg";

/// Names longer than this are replaced by a positional label.
const MAX_LABEL_CHARS: usize = 15;

/// Largest supported scale factor
pub const MAX_SCALE: u32 = 4;

/// Per-request export options
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExportOptions {
    /// Pixel density multiplier, 1..=4
    pub scale: u32,
    /// Drop background and padding
    pub transparent: bool,
}

impl From<&ExportConfig> for ExportOptions {
    fn from(config: &ExportConfig) -> Self {
        Self {
            scale: config.scale,
            transparent: config.transparent,
        }
    }
}

#[derive(Debug, Serialize)]
struct Tile {
    x: u32,
    cx: u32,
    hex: String,
    ink: &'static str,
    label: String,
}

#[derive(Debug, Serialize)]
struct Sheet {
    width: u32,
    height: u32,
    padding: u32,
    tile_width: u32,
    tile_height: u32,
    hex_y: u32,
    label_y: u32,
    transparent: bool,
    tiles: Vec<Tile>,
}

/// Renders a palette as a row of labelled color tiles.
///
/// The sheet is laid out as SVG from an embedded Tera template, then
/// rasterized with resvg and written as an RGBA PNG.
pub struct PaletteRenderer {
    /// Font database for text rendering
    fontdb: Arc<fontdb::Database>,
    tera: Tera,
    layout: ExportConfig,
}

impl PaletteRenderer {
    /// Create a renderer with extra fonts and the given template source
    pub fn with_fonts(
        fonts: Vec<(String, std::borrow::Cow<'static, [u8]>)>,
        template: &str,
        layout: ExportConfig,
    ) -> Result<Self, ExportError> {
        let mut fontdb = fontdb::Database::new();

        for (name, data) in fonts {
            fontdb.load_font_data(data.into_owned());
            tracing::debug!(font = %name, "Loaded font");
        }

        // System fonts cover the template's sans-serif fallback
        fontdb.load_system_fonts();

        tracing::info!(font_count = fontdb.len(), "Loaded fonts for palette export");

        let mut tera = Tera::default();
        tera.add_raw_template(TEMPLATE_NAME, template)?;

        Ok(Self {
            fontdb: Arc::new(fontdb),
            tera,
            layout,
        })
    }

    /// Create a renderer from the embedded template and `FONTS_DIR` fonts
    pub fn from_assets(loader: &AssetLoader, layout: ExportConfig) -> Result<Self, ExportError> {
        let template = loader.read_template(TEMPLATE_NAME)?;
        Self::with_fonts(loader.get_fonts(), &template, layout)
    }

    /// Default options from the configured layout
    pub fn default_options(&self) -> ExportOptions {
        ExportOptions::from(&self.layout)
    }

    /// Lay the palette out as an SVG document
    pub fn render_svg(&self, colors: &[ColorEntry], transparent: bool) -> Result<String, ExportError> {
        if colors.is_empty() {
            return Err(ExportError::EmptyPalette);
        }
        if colors.len() > PaletteSize::MAX {
            return Err(ExportError::TooManyColors(colors.len()));
        }

        let sheet = self.layout_sheet(colors, transparent);
        let context = Context::from_serialize(&sheet)?;
        Ok(self.tera.render(TEMPLATE_NAME, &context)?)
    }

    /// Render the palette to PNG bytes
    pub fn render_png(
        &self,
        colors: &[ColorEntry],
        options: ExportOptions,
    ) -> Result<Vec<u8>, ExportError> {
        if !(1..=MAX_SCALE).contains(&options.scale) {
            return Err(ExportError::UnsupportedScale(options.scale));
        }

        let svg = self.render_svg(colors, options.transparent)?;
        let pixmap = self.rasterize_svg(svg.as_bytes(), options.scale)?;
        let png_bytes = encode_png(&pixmap)?;

        // Re-compress with oxipng (zopfli + adaptive filter selection)
        let optimized = oxipng::optimize_from_memory(
            &png_bytes,
            &oxipng::Options {
                strip: oxipng::StripChunks::Safe,
                optimize_alpha: false,
                ..Default::default()
            },
        )
        .unwrap_or(png_bytes);

        tracing::debug!(
            colors = colors.len(),
            scale = options.scale,
            transparent = options.transparent,
            width = pixmap.width(),
            height = pixmap.height(),
            bytes = optimized.len(),
            "Rendered palette PNG"
        );
        Ok(optimized)
    }

    fn layout_sheet(&self, colors: &[ColorEntry], transparent: bool) -> Sheet {
        let ExportConfig {
            tile_width,
            tile_height,
            ..
        } = self.layout;
        let padding = if transparent { 0 } else { self.layout.padding };

        let tiles = colors
            .iter()
            .enumerate()
            .map(|(i, color)| {
                let x = padding + i as u32 * tile_width;
                let ink = match AccessibilityStats::for_hex(color.hex).text_color {
                    TextColor::White => "#ffffff",
                    TextColor::Black => "#1e293b",
                };
                let label = if color.name.chars().count() > MAX_LABEL_CHARS {
                    format!("Color {}", i + 1)
                } else {
                    color.name.clone()
                };
                Tile {
                    x,
                    cx: x + tile_width / 2,
                    hex: color.hex.to_string(),
                    ink,
                    label,
                }
            })
            .collect();

        Sheet {
            width: tile_width * colors.len() as u32 + padding * 2,
            height: tile_height + padding * 2,
            padding,
            tile_width,
            tile_height,
            hex_y: (padding + tile_height).saturating_sub(60),
            label_y: (padding + tile_height).saturating_sub(35),
            transparent,
            tiles,
        }
    }

    /// Parse and rasterize SVG to an RGBA pixmap
    fn rasterize_svg(&self, svg_data: &[u8], scale: u32) -> Result<Pixmap, ExportError> {
        let options = usvg::Options {
            fontdb: self.fontdb.clone(),
            ..Default::default()
        };
        let tree = usvg::Tree::from_data(svg_data, &options)
            .map_err(|e| ExportError::SvgParse(e.to_string()))?;

        let size = tree.size();
        let width = (size.width() * scale as f32).round() as u32;
        let height = (size.height() * scale as f32).round() as u32;

        // Starts fully transparent; opaque sheets paint their own background
        let mut pixmap = Pixmap::new(width, height).ok_or(ExportError::PixmapAllocation)?;

        let transform = Transform::from_scale(scale as f32, scale as f32);
        resvg::render(&tree, transform, &mut pixmap.as_mut());

        Ok(pixmap)
    }
}

/// Encode a pixmap as 8-bit RGBA PNG.
fn encode_png(pixmap: &Pixmap) -> Result<Vec<u8>, ExportError> {
    let rgba: Vec<u8> = pixmap
        .pixels()
        .iter()
        .flat_map(|p| {
            let c = p.demultiply();
            [c.red(), c.green(), c.blue(), c.alpha()]
        })
        .collect();

    let mut buf = Cursor::new(Vec::new());
    {
        // Fast settings; oxipng re-compresses afterwards
        let mut encoder = png::Encoder::new(&mut buf, pixmap.width(), pixmap.height());
        encoder.set_color(png::ColorType::Rgba);
        encoder.set_depth(png::BitDepth::Eight);
        encoder.set_compression(png::Compression::Fast);
        let mut writer = encoder
            .write_header()
            .map_err(|e| ExportError::PngEncode(e.to_string()))?;
        writer
            .write_image_data(&rgba)
            .map_err(|e| ExportError::PngEncode(e.to_string()))?;
    }
    Ok(buf.into_inner())
}
