use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use color_harmony::{PaletteSizeError, ParseColorError, ParseCvdModeError};
use serde_json::json;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Invalid color: {0}")]
    InvalidColor(#[from] ParseColorError),

    #[error("Invalid palette size: {0}")]
    InvalidSize(#[from] PaletteSizeError),

    #[error("Invalid vision mode: {0}")]
    InvalidVisionMode(#[from] ParseCvdModeError),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Export error: {0}")]
    Export(#[from] ExportError),
}

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("Cannot export an empty palette")]
    EmptyPalette,

    #[error("Unsupported scale: {0} (expected 1..=4)")]
    UnsupportedScale(u32),

    #[error("Too many colors: {0} (at most 9)")]
    TooManyColors(usize),

    #[error("Template error: {0}")]
    Template(#[from] tera::Error),

    #[error("SVG parse error: {0}")]
    SvgParse(String),

    #[error("Failed to allocate pixmap")]
    PixmapAllocation,

    #[error("PNG encode error: {0}")]
    PngEncode(String),

    #[error("Render task failed: {0}")]
    Task(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Debug, Error)]
pub enum AiError {
    #[error("No API key configured")]
    MissingApiKey,

    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Upstream returned status {0}")]
    Status(u16),

    #[error("Response is not a JSON array: {0}")]
    NotAnArray(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid response pattern: {0}")]
    Pattern(#[from] regex::Error),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            ApiError::InvalidColor(_)
            | ApiError::InvalidSize(_)
            | ApiError::InvalidVisionMode(_)
            | ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Export(
                ExportError::EmptyPalette
                | ExportError::UnsupportedScale(_)
                | ExportError::TooManyColors(_),
            ) => StatusCode::BAD_REQUEST,
            ApiError::Export(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let body = Json(json!({
            "status": status.as_u16(),
            "error": self.to_string(),
        }));

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_invalid_color() {
        let error: ApiError = ParseColorError::MissingHash.into();
        assert!(error.to_string().starts_with("Invalid color: "));
    }

    #[test]
    fn test_api_error_invalid_size() {
        let error: ApiError = PaletteSizeError(12).into();
        assert_eq!(
            error.to_string(),
            "Invalid palette size: palette size 12 out of range (expected 3..=9)"
        );
    }

    #[test]
    fn test_api_error_bad_request() {
        let error = ApiError::BadRequest("missing prompt".to_string());
        assert_eq!(error.to_string(), "Bad request: missing prompt");
    }

    #[test]
    fn test_export_error_messages() {
        assert_eq!(
            ExportError::EmptyPalette.to_string(),
            "Cannot export an empty palette"
        );
        assert_eq!(
            ExportError::UnsupportedScale(8).to_string(),
            "Unsupported scale: 8 (expected 1..=4)"
        );
        assert_eq!(
            ExportError::TooManyColors(12).to_string(),
            "Too many colors: 12 (at most 9)"
        );
        assert_eq!(
            ExportError::PngEncode("Encoding failed".to_string()).to_string(),
            "PNG encode error: Encoding failed"
        );
    }

    #[test]
    fn test_ai_error_messages() {
        assert_eq!(AiError::MissingApiKey.to_string(), "No API key configured");
        assert_eq!(AiError::Status(429).to_string(), "Upstream returned status 429");
    }

    #[test]
    fn test_api_error_into_response_status_codes() {
        let response = ApiError::InvalidColor(ParseColorError::MissingHash).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let response = ApiError::InvalidSize(PaletteSizeError(2)).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let response = ApiError::Export(ExportError::EmptyPalette).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let response = ApiError::Export(ExportError::PixmapAllocation).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let response = ApiError::Export(ExportError::TooManyColors(10)).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let response = ApiError::Export(ExportError::Task("panicked".to_string())).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
