//! Assertion helpers for tests.

use axum::http::StatusCode;
use pretty_assertions::assert_eq;

use super::app::TestResponse;

/// Assert response has expected status code
pub fn assert_status(response: &TestResponse, expected: StatusCode) {
    assert_eq!(
        response.status,
        expected,
        "Expected status {}, got {}. Body: {}",
        expected,
        response.status,
        response.text()
    );
}

/// Assert response is OK (200)
pub fn assert_ok(response: &TestResponse) {
    assert_status(response, StatusCode::OK);
}

/// Assert response is a valid PNG image
pub fn assert_png(response: &TestResponse) {
    assert_ok(response);
    assert!(
        response.is_png(),
        "Expected PNG image, got {} bytes starting with {:?}",
        response.body.len(),
        &response.body[..8.min(response.body.len())]
    );

    // Check Content-Type header
    assert_eq!(
        response.header("content-type"),
        Some("image/png"),
        "Expected Content-Type: image/png"
    );
}

/// Assert JSON error body has expected status field
pub fn assert_json_status(response: &TestResponse, expected_status: u16) {
    let json: serde_json::Value = response.json();
    assert_eq!(
        json["status"].as_u64(),
        Some(expected_status as u64),
        "Expected JSON status {}, got {:?}. Full response: {}",
        expected_status,
        json["status"],
        serde_json::to_string_pretty(&json).unwrap()
    );
}

/// Assert a 400 response carrying the `{status, error}` body
pub fn assert_bad_request(response: &TestResponse) {
    assert_status(response, StatusCode::BAD_REQUEST);
    assert_json_status(response, 400);
    let json: serde_json::Value = response.json();
    assert!(json["error"].is_string(), "Expected error message");
}

/// Assert every entry of a palette body is a canonical `#RRGGBB` color
pub fn assert_canonical_hexes(hexes: &[String]) {
    for hex in hexes {
        assert!(
            color_harmony::is_valid_hex(hex) && *hex == hex.to_uppercase(),
            "Expected uppercase #RRGGBB, got {hex:?}"
        );
    }
}
