use axum::{
    body::Bytes,
    extract::State,
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::Deserialize;
use std::sync::Arc;
use utoipa::ToSchema;

use crate::error::ApiError;
use crate::models::{entries_from_records, ColorRecord};
use crate::rendering::ExportOptions;
use crate::services::ExportService;

/// Request body for PNG export
#[derive(Debug, Deserialize, ToSchema)]
pub struct ExportRequest {
    pub colors: Vec<ColorRecord>,

    /// Pixel density multiplier, 1 to 4 (default from config)
    #[schema(example = 2)]
    pub scale: Option<u32>,

    /// Drop background and padding (default from config)
    pub transparent: Option<bool>,
}

/// Export a palette as PNG
///
/// Renders the colors side by side as labelled tiles.
#[utoipa::path(
    post,
    path = "/api/palette/export",
    request_body = ExportRequest,
    responses(
        (status = 200, description = "PNG image", content_type = "image/png"),
        (status = 400, description = "Empty palette, bad hex or unsupported scale"),
        (status = 500, description = "Rendering error"),
    ),
    tag = "Palette"
)]
pub async fn handle_export(
    State(exporter): State<Arc<ExportService>>,
    Json(request): Json<ExportRequest>,
) -> Result<Response, ApiError> {
    let colors = entries_from_records(request.colors)?;
    let defaults = exporter.default_options();
    let options = ExportOptions {
        scale: request.scale.unwrap_or(defaults.scale),
        transparent: request.transparent.unwrap_or(defaults.transparent),
    };

    let count = colors.len();
    let png_bytes = exporter.render_png(colors, options).await?;

    tracing::info!(
        colors = count,
        scale = options.scale,
        transparent = options.transparent,
        bytes = png_bytes.len(),
        "Exported palette"
    );

    Ok((
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, "image/png"),
            (header::CONTENT_LENGTH, &png_bytes.len().to_string()),
        ],
        Bytes::from(png_bytes),
    )
        .into_response())
}
