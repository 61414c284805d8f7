use axum::{extract::State, Json};
use color_harmony::{
    describe, move_color, toggle_lock, update_hex, ColorEntry, ColorId, CvdMode, HarmonyMode,
    HexColor, PaletteSize,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use utoipa::ToSchema;

use crate::error::ApiError;
use crate::models::{
    entries_from_records, records_from_entries, AppConfig, ColorRecord, GeneratedPalette,
    SwatchRecord,
};

/// Request body for palette generation
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct GenerateRequest {
    /// Base color as `#RRGGBB` (default from config)
    #[schema(example = "#3366CC")]
    pub base_color: Option<String>,

    /// Harmony mode name; unknown names fall back to Golden Ratio
    #[schema(example = "Triadic")]
    pub harmony: Option<String>,

    /// Number of colors, 3 to 9
    #[schema(example = 5)]
    pub size: Option<usize>,

    /// Current palette; locked entries are kept in place
    #[serde(default)]
    pub current: Vec<ColorRecord>,
}

/// Generate a palette
///
/// Produces exactly `size` colors from the base color and harmony mode.
/// Locked entries of `current` keep their position, id, hex and name.
#[utoipa::path(
    post,
    path = "/api/palette/generate",
    request_body = GenerateRequest,
    responses(
        (status = 200, description = "Generated palette", body = GeneratedPalette),
        (status = 400, description = "Invalid base color, size or current palette"),
    ),
    tag = "Palette"
)]
pub async fn handle_generate(
    State(config): State<Arc<AppConfig>>,
    Json(request): Json<GenerateRequest>,
) -> Result<Json<GeneratedPalette>, ApiError> {
    let base_color = request
        .base_color
        .as_deref()
        .map(|s| s.trim().parse::<HexColor>())
        .transpose()?;
    let harmony = request.harmony.as_deref().map(HarmonyMode::from_name_lenient);
    let size = request.size.map(PaletteSize::new).transpose()?;
    let current = entries_from_records(request.current)?;

    let settings = config.defaults.settings(harmony, size, base_color);
    let colors = settings.generate(&current);

    tracing::info!(
        harmony = %settings.harmony,
        size = settings.size.get(),
        base_color = %settings.base_color,
        locked = current.iter().filter(|c| c.locked).count(),
        "Generated palette"
    );

    Ok(Json(GeneratedPalette::new(&colors, settings)))
}

/// A single palette edit
#[derive(Debug, Deserialize, ToSchema)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum EditOp {
    /// Flip the lock flag of a color
    ToggleLock { id: String },
    /// Replace the hex of a color; its name follows
    UpdateHex { id: String, hex: String },
    /// Move the color at `from` to index `to`
    Move { from: usize, to: usize },
}

/// Request body for palette edits
#[derive(Debug, Deserialize, ToSchema)]
pub struct EditRequest {
    pub colors: Vec<ColorRecord>,
    pub op: EditOp,
}

/// A palette snapshot
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct PaletteResponse {
    pub colors: Vec<ColorRecord>,
}

/// Edit a palette
///
/// Applies one edit to the submitted snapshot and returns the new one.
/// Unknown ids and out-of-range indices leave the palette unchanged.
#[utoipa::path(
    post,
    path = "/api/palette/edit",
    request_body = EditRequest,
    responses(
        (status = 200, description = "Edited palette", body = PaletteResponse),
        (status = 400, description = "Invalid hex in palette or edit"),
    ),
    tag = "Palette"
)]
pub async fn handle_edit(
    Json(request): Json<EditRequest>,
) -> Result<Json<PaletteResponse>, ApiError> {
    let colors = entries_from_records(request.colors)?;

    let edited = match request.op {
        EditOp::ToggleLock { id } => {
            let id = known_id(&colors, id);
            toggle_lock(&colors, &id)
        }
        EditOp::UpdateHex { id, hex } => {
            let id = known_id(&colors, id);
            update_hex(&colors, &id, hex.trim())?
        }
        EditOp::Move { from, to } => {
            if from >= colors.len() || to >= colors.len() {
                tracing::debug!(from, to, len = colors.len(), "Move out of range, palette unchanged");
            }
            move_color(&colors, from, to)
        }
    };

    Ok(Json(PaletteResponse {
        colors: records_from_entries(&edited),
    }))
}

fn known_id(colors: &[ColorEntry], id: String) -> ColorId {
    let id = ColorId::from(id);
    if !colors.iter().any(|c| c.id == id) {
        tracing::debug!(%id, "Unknown color id, palette unchanged");
    }
    id
}

/// Request body for swatch descriptions
#[derive(Debug, Deserialize, ToSchema)]
pub struct DescribeRequest {
    pub colors: Vec<ColorRecord>,

    /// Color vision mode (default None)
    #[schema(example = "Deuteranopia")]
    pub cvd: Option<String>,
}

/// Swatches of a palette under a vision mode
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct DescribeResponse {
    pub swatches: Vec<SwatchRecord>,
}

/// Describe a palette
///
/// Returns each color as displayed under the vision mode together with the
/// contrast stats of the displayed color.
#[utoipa::path(
    post,
    path = "/api/palette/describe",
    request_body = DescribeRequest,
    responses(
        (status = 200, description = "Palette swatches", body = DescribeResponse),
        (status = 400, description = "Invalid hex or vision mode"),
    ),
    tag = "Palette"
)]
pub async fn handle_describe(
    Json(request): Json<DescribeRequest>,
) -> Result<Json<DescribeResponse>, ApiError> {
    let colors = entries_from_records(request.colors)?;
    let cvd = match request.cvd.as_deref() {
        Some(name) => name.parse::<CvdMode>()?,
        None => CvdMode::None,
    };

    let swatches = describe(&colors, cvd)
        .into_iter()
        .map(SwatchRecord::from)
        .collect();

    Ok(Json(DescribeResponse { swatches }))
}
