//! Mock Gemini server for testing the suggestion client.

use serde_json::Value;
use wiremock::{
    matchers::{body_partial_json, method, path, query_param},
    Mock, MockServer, ResponseTemplate,
};

use super::fixtures::gemini_answer;

/// API key the mock expects in the `key` query parameter
pub const TEST_API_KEY: &str = "test-key";

/// Wrapper around wiremock MockServer with Gemini-shaped helpers
pub struct MockGeminiServer {
    pub server: MockServer,
}

impl MockGeminiServer {
    /// Start a new mock server
    pub async fn start() -> Self {
        let server = MockServer::start().await;
        Self { server }
    }

    /// Base URL to use as the AI endpoint
    pub fn url(&self) -> String {
        self.server.uri()
    }

    fn endpoint(model: &str) -> String {
        format!("/v1beta/models/{model}:generateContent")
    }

    /// Answer `model` requests with `text` as the model output
    pub async fn mock_answer(&self, model: &str, text: &str) {
        Mock::given(method("POST"))
            .and(path(Self::endpoint(model)))
            .and(query_param("key", TEST_API_KEY))
            .respond_with(ResponseTemplate::new(200).set_body_json(gemini_answer(text)))
            .mount(&self.server)
            .await;
    }

    /// Answer only when the request body contains `fragment`
    pub async fn mock_answer_matching(&self, model: &str, fragment: Value, text: &str) {
        Mock::given(method("POST"))
            .and(path(Self::endpoint(model)))
            .and(body_partial_json(fragment))
            .respond_with(ResponseTemplate::new(200).set_body_json(gemini_answer(text)))
            .expect(1)
            .mount(&self.server)
            .await;
    }

    /// Answer `model` requests with a raw JSON body
    pub async fn mock_raw(&self, model: &str, body: Value) {
        Mock::given(method("POST"))
            .and(path(Self::endpoint(model)))
            .respond_with(ResponseTemplate::new(200).set_body_json(body))
            .mount(&self.server)
            .await;
    }

    /// Answer `model` requests with an error status
    pub async fn mock_error(&self, model: &str, status: u16, message: &str) {
        Mock::given(method("POST"))
            .and(path(Self::endpoint(model)))
            .respond_with(ResponseTemplate::new(status).set_body_string(message))
            .mount(&self.server)
            .await;
    }

    /// Number of requests the server has seen
    pub async fn request_count(&self) -> usize {
        self.server
            .received_requests()
            .await
            .map(|r| r.len())
            .unwrap_or(0)
    }
}
