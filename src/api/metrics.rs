use axum::{extract::Query, Json};
use color_harmony::{get_contrast, simulate_hex, CvdMode};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::error::ApiError;
use crate::models::AccessibilityRecord;

#[derive(Debug, Deserialize, IntoParams)]
pub struct ContrastQuery {
    /// Color as `#RRGGBB`
    pub hex: String,
}

/// WCAG contrast of a color
///
/// Compares the color against black and white text and reports the better
/// ratio, its WCAG level and the recommended text color.
#[utoipa::path(
    get,
    path = "/api/contrast",
    params(ContrastQuery),
    responses(
        (status = 200, description = "Accessibility stats", body = AccessibilityRecord),
        (status = 400, description = "Malformed hex color"),
    ),
    tag = "Metrics"
)]
pub async fn handle_contrast(
    Query(query): Query<ContrastQuery>,
) -> Result<Json<AccessibilityRecord>, ApiError> {
    let stats = get_contrast(query.hex.trim())?;
    Ok(Json(stats.into()))
}

#[derive(Debug, Deserialize, IntoParams)]
pub struct SimulateQuery {
    /// Color as `#RRGGBB`
    pub hex: String,
    /// Color vision mode (default None)
    pub mode: Option<String>,
}

/// Result of a vision simulation
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct SimulateResponse {
    #[schema(example = "#FF0000")]
    pub hex: String,
    #[schema(example = "Protanopia")]
    pub mode: String,
    #[schema(example = "#918E00")]
    pub simulated: String,
}

/// Simulate color vision deficiency
///
/// Malformed colors are returned unchanged.
#[utoipa::path(
    get,
    path = "/api/simulate",
    params(SimulateQuery),
    responses(
        (status = 200, description = "Simulated color", body = SimulateResponse),
        (status = 400, description = "Unknown vision mode"),
    ),
    tag = "Metrics"
)]
pub async fn handle_simulate(
    Query(query): Query<SimulateQuery>,
) -> Result<Json<SimulateResponse>, ApiError> {
    let mode = match query.mode.as_deref() {
        Some(name) => name.parse::<CvdMode>()?,
        None => CvdMode::None,
    };
    let simulated = simulate_hex(&query.hex, mode);

    Ok(Json(SimulateResponse {
        hex: query.hex,
        mode: mode.to_string(),
        simulated,
    }))
}
