//! HTTP server setup and configuration.
//!
//! This module provides the router and application state used by both
//! the production server and integration tests.

use axum::{
    extract::{DefaultBodyLimit, FromRef},
    http::{header::CACHE_CONTROL, HeaderValue},
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::{set_header::SetResponseHeaderLayer, trace::TraceLayer};

use crate::api;
use crate::assets::AssetLoader;
use crate::models::AppConfig;
use crate::rendering::PaletteRenderer;
use crate::services::{ColorSuggester, ExportService, GeminiClient};

/// Request body limit; base64 images exceed axum's 2 MB default.
pub const MAX_BODY_BYTES: usize = 16 * 1024 * 1024;

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub exporter: Arc<ExportService>,
    pub suggester: Arc<dyn ColorSuggester>,
}

impl FromRef<AppState> for Arc<AppConfig> {
    fn from_ref(state: &AppState) -> Self {
        state.config.clone()
    }
}

impl FromRef<AppState> for Arc<ExportService> {
    fn from_ref(state: &AppState) -> Self {
        state.exporter.clone()
    }
}

impl FromRef<AppState> for Arc<dyn ColorSuggester> {
    fn from_ref(state: &AppState) -> Self {
        state.suggester.clone()
    }
}

/// Create application state from an asset loader.
///
/// The suggestion client is keyed from the environment.
pub fn create_app_state(asset_loader: Arc<AssetLoader>) -> anyhow::Result<AppState> {
    let config = AppConfig::load_from_assets(&asset_loader);
    let suggester = GeminiClient::from_env(config.ai.clone())?;
    if !suggester.has_api_key() {
        tracing::warn!("GEMINI_API_KEY not set, AI suggestions will be empty");
    }
    build_app_state(&asset_loader, config, Arc::new(suggester))
}

/// Assemble application state from explicit parts.
pub fn build_app_state(
    asset_loader: &AssetLoader,
    config: AppConfig,
    suggester: Arc<dyn ColorSuggester>,
) -> anyhow::Result<AppState> {
    let renderer = PaletteRenderer::from_assets(asset_loader, config.export)
        .map_err(|e| anyhow::anyhow!("Failed to create palette renderer: {e}"))?;

    Ok(AppState {
        config: Arc::new(config),
        exporter: Arc::new(ExportService::new(renderer)),
        suggester,
    })
}

/// Build the API router with all endpoints and middleware.
///
/// This is the core router used by both production and tests.
/// Responses are marked `no-store`: new colors get fresh ids on every
/// call and palettes belong to the caller.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        // Palette endpoints
        .route("/api/palette/generate", post(api::handle_generate))
        .route("/api/palette/edit", post(api::handle_edit))
        .route("/api/palette/describe", post(api::handle_describe))
        .route("/api/palette/export", post(api::handle_export))
        // Metrics
        .route("/api/contrast", get(api::handle_contrast))
        .route("/api/simulate", get(api::handle_simulate))
        // Suggestions
        .route("/api/ai/text", post(api::handle_text_suggestion))
        .route("/api/ai/image", post(api::handle_image_suggestion))
        // Health check
        .route("/health", get(|| async { "OK" }))
        // Add state and tracing
        .with_state(state)
        .layer(DefaultBodyLimit::max(MAX_BODY_BYTES))
        .layer(TraceLayer::new_for_http())
        .layer(SetResponseHeaderLayer::overriding(
            CACHE_CONTROL,
            HeaderValue::from_static("no-store"),
        ))
}
