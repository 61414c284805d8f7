//! Test fixtures and constants.

use serde_json::{json, Value};

/// Colors with known accessibility results
pub mod colors {
    /// Black text, AAA (21:1)
    pub const WHITE: &str = "#FFFFFF";

    /// White text, AAA (21:1)
    pub const BLACK: &str = "#000000";

    /// Black text, AA (5.25:1)
    pub const RED: &str = "#FF0000";

    /// Default base color from config.yaml
    pub const BRAND_BLUE: &str = "#3366CC";
}

/// A three-color palette with stable ids, first color locked
pub fn sample_palette() -> Value {
    json!([
        { "id": "c1", "hex": "#FF0000", "name": "Signal", "locked": true },
        { "id": "c2", "hex": "#00FF00", "name": "#00FF00", "locked": false },
        { "id": "c3", "hex": "#0000FF", "name": "#0000FF", "locked": false }
    ])
}

/// Ids of a `{colors: [...]}` body, in order
pub fn ids(body: &Value) -> Vec<String> {
    body["colors"]
        .as_array()
        .expect("Expected colors array")
        .iter()
        .map(|c| c["id"].as_str().expect("Expected id").to_string())
        .collect()
}

/// Gemini `generateContent` response carrying `text`
pub fn gemini_answer(text: &str) -> Value {
    json!({
        "candidates": [{
            "content": {
                "role": "model",
                "parts": [{ "text": text }]
            },
            "finishReason": "STOP"
        }]
    })
}

/// 1x1 transparent PNG as a data URL
pub const TINY_PNG_DATA_URL: &str = "data:image/png;base64,iVBORw0KGgoAAAANSUhEUgAAAAEAAAABCAYAAAAfFcSJAAAADUlEQVR42mNkYPhfDwAChwGA60e6kgAAAABJRU5ErkJggg==";
