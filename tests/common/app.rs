//! Test application factory for integration tests.

use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use http_body_util::BodyExt;
use std::sync::Arc;
use tower::ServiceExt;

use hueforge::assets::AssetLoader;
use hueforge::models::{AiConfig, AppConfig};
use hueforge::server::{build_app_state, build_router, AppState};
use hueforge::services::{ColorSuggester, GeminiClient};

/// Test application driving the production router in-process
pub struct TestApp {
    router: axum::Router,
}

impl TestApp {
    /// Create a test application with embedded assets and no AI key
    pub fn new() -> Self {
        let client = GeminiClient::new(AiConfig::default(), None).expect("Failed to build client");
        Self::with_suggester(Arc::new(client))
    }

    /// Create a test application whose AI client talks to `endpoint`
    pub fn with_ai(endpoint: &str, api_key: &str) -> Self {
        let config = AiConfig {
            endpoint: endpoint.to_string(),
            timeout_secs: 5,
            ..Default::default()
        };
        let client =
            GeminiClient::new(config, Some(api_key.to_string())).expect("Failed to build client");
        Self::with_suggester(Arc::new(client))
    }

    /// Create a test application with a custom suggestion source
    pub fn with_suggester(suggester: Arc<dyn ColorSuggester>) -> Self {
        let state = Self::create_state(suggester);
        Self {
            router: build_router(state),
        }
    }

    /// Build state from embedded assets and default config
    pub fn create_state(suggester: Arc<dyn ColorSuggester>) -> AppState {
        build_app_state(&AssetLoader::default(), AppConfig::default(), suggester)
            .expect("Failed to create app state")
    }

    /// Make a GET request to the given path
    pub async fn get(&self, path: &str) -> TestResponse {
        self.request(Request::get(path).body(Body::empty()).unwrap())
            .await
    }

    /// Make a POST request with a JSON body
    pub async fn post_json(&self, path: &str, body: &serde_json::Value) -> TestResponse {
        let request = Request::post(path)
            .header("Content-Type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap();
        self.request(request).await
    }

    /// Make a POST request with a raw body
    pub async fn post_raw(&self, path: &str, content_type: &str, body: &str) -> TestResponse {
        let request = Request::post(path)
            .header("Content-Type", content_type)
            .body(Body::from(body.to_string()))
            .unwrap();
        self.request(request).await
    }

    /// Send a request to the router
    pub async fn request(&self, request: Request<Body>) -> TestResponse {
        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .expect("Request failed");

        let status = response.status();
        let headers = response.headers().clone();
        let body = response
            .into_body()
            .collect()
            .await
            .expect("Failed to collect body")
            .to_bytes()
            .to_vec();

        TestResponse {
            status,
            headers,
            body,
        }
    }
}

impl Default for TestApp {
    fn default() -> Self {
        Self::new()
    }
}

/// Test response with convenience methods
pub struct TestResponse {
    pub status: StatusCode,
    pub headers: axum::http::HeaderMap,
    pub body: Vec<u8>,
}

impl TestResponse {
    /// Parse body as JSON
    pub fn json<T: serde::de::DeserializeOwned>(&self) -> T {
        serde_json::from_slice(&self.body).expect("Failed to parse JSON response")
    }

    /// Get body as string
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).to_string()
    }

    /// Get raw body bytes
    pub fn bytes(&self) -> &[u8] {
        &self.body
    }

    /// Get a header value as string
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }

    /// Check if response is a PNG image
    pub fn is_png(&self) -> bool {
        self.body.len() >= 8 && &self.body[0..8] == b"\x89PNG\r\n\x1a\n"
    }

    /// Hex strings of a `{colors: [...]}` body, in order
    pub fn color_hexes(&self) -> Vec<String> {
        let json: serde_json::Value = self.json();
        json["colors"]
            .as_array()
            .expect("Expected colors array")
            .iter()
            .map(|c| c["hex"].as_str().expect("Expected hex string").to_string())
            .collect()
    }
}
