use crate::error::ExportError;
use crate::rendering::{ExportOptions, PaletteRenderer};
use color_harmony::ColorEntry;
use std::sync::Arc;

/// Async front for palette PNG export
pub struct ExportService {
    renderer: Arc<PaletteRenderer>,
}

impl ExportService {
    pub fn new(renderer: PaletteRenderer) -> Self {
        Self {
            renderer: Arc::new(renderer),
        }
    }

    /// Options used when a request leaves them out
    pub fn default_options(&self) -> ExportOptions {
        self.renderer.default_options()
    }

    /// Render a palette to PNG
    ///
    /// Uses spawn_blocking to avoid blocking the async runtime during
    /// rasterization and PNG optimization.
    pub async fn render_png(
        &self,
        colors: Vec<ColorEntry>,
        options: ExportOptions,
    ) -> Result<Vec<u8>, ExportError> {
        let renderer = self.renderer.clone();

        tokio::task::spawn_blocking(move || renderer.render_png(&colors, options))
            .await
            .map_err(|e| ExportError::Task(e.to_string()))?
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assets::AssetLoader;
    use crate::models::ExportConfig;

    fn service() -> ExportService {
        let renderer =
            PaletteRenderer::from_assets(&AssetLoader::default(), ExportConfig::default()).unwrap();
        ExportService::new(renderer)
    }

    #[tokio::test]
    async fn test_render_in_blocking_context() {
        let colors = vec![ColorEntry::new("#3366CC".parse().unwrap())];
        let png = service()
            .render_png(colors, ExportOptions { scale: 1, transparent: false })
            .await
            .unwrap();
        assert_eq!(&png[..8], b"\x89PNG\r\n\x1a\n");
    }

    #[tokio::test]
    async fn test_errors_propagate() {
        let s = service();
        let result = s.render_png(Vec::new(), s.default_options()).await;
        assert!(matches!(result, Err(ExportError::EmptyPalette)));
    }
}
