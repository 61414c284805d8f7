use axum::{extract::State, Json};
use color_harmony::palette_from_hexes;
use serde::Deserialize;
use std::sync::Arc;
use utoipa::ToSchema;

use super::palette::PaletteResponse;
use crate::error::ApiError;
use crate::models::records_from_entries;
use crate::services::ColorSuggester;

/// Request body for text suggestions
#[derive(Debug, Deserialize, ToSchema)]
pub struct TextSuggestionRequest {
    /// Free-form description of the palette
    #[schema(example = "a foggy harbor at dawn")]
    pub prompt: String,
}

/// Request body for image extraction
#[derive(Debug, Deserialize, ToSchema)]
pub struct ImageSuggestionRequest {
    /// Base64 image, optionally with a `data:image/...;base64,` header
    pub image: String,
}

/// Suggest a palette from text
///
/// Returns up to 9 unlocked colors. An empty list means no suggestion was
/// available (no API key, upstream failure or unusable answer).
#[utoipa::path(
    post,
    path = "/api/ai/text",
    request_body = TextSuggestionRequest,
    responses(
        (status = 200, description = "Suggested colors, possibly none", body = PaletteResponse),
        (status = 400, description = "Empty prompt"),
    ),
    tag = "AI"
)]
pub async fn handle_text_suggestion(
    State(suggester): State<Arc<dyn ColorSuggester>>,
    Json(request): Json<TextSuggestionRequest>,
) -> Result<Json<PaletteResponse>, ApiError> {
    let prompt = request.prompt.trim();
    if prompt.is_empty() {
        return Err(ApiError::BadRequest("prompt must not be empty".to_string()));
    }

    let suggested = suggester.text_to_colors(prompt).await;
    let colors = palette_from_hexes(&suggested);
    tracing::info!(
        suggested = suggested.len(),
        accepted = colors.len(),
        "Text suggestion"
    );

    Ok(Json(PaletteResponse {
        colors: records_from_entries(&colors),
    }))
}

/// Extract a palette from an image
///
/// Returns up to 9 unlocked colors, possibly none.
#[utoipa::path(
    post,
    path = "/api/ai/image",
    request_body = ImageSuggestionRequest,
    responses(
        (status = 200, description = "Extracted colors, possibly none", body = PaletteResponse),
        (status = 400, description = "Empty image"),
    ),
    tag = "AI"
)]
pub async fn handle_image_suggestion(
    State(suggester): State<Arc<dyn ColorSuggester>>,
    Json(request): Json<ImageSuggestionRequest>,
) -> Result<Json<PaletteResponse>, ApiError> {
    if request.image.trim().is_empty() {
        return Err(ApiError::BadRequest("image must not be empty".to_string()));
    }

    let suggested = suggester.image_to_colors(&request.image).await;
    let colors = palette_from_hexes(&suggested);
    tracing::info!(
        suggested = suggested.len(),
        accepted = colors.len(),
        "Image extraction"
    );

    Ok(Json(PaletteResponse {
        colors: records_from_entries(&colors),
    }))
}
