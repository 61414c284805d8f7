//! Generative palette suggestions.
//!
//! The client asks a Gemini model for a JSON array of hex strings, either
//! from a text description or from an image. Every failure is logged and
//! turned into an empty suggestion list; callers keep their palette.

use async_trait::async_trait;
use regex::Regex;
use serde::Deserialize;
use serde_json::{json, Value};
use std::time::Duration;

use crate::error::AiError;
use crate::models::AiConfig;

const TEXT_PROMPT_PREFIX: &str = "Generate a color palette of 5-7 hex codes based on this description: ";
const TEXT_PROMPT_SUFFIX: &str = ". Return ONLY a JSON array of strings.";
const IMAGE_PROMPT: &str =
    "Extract the dominant 5 to 7 colors from this image as HEX codes. Return ONLY a JSON array of strings.";

/// Source of color suggestions
#[async_trait]
pub trait ColorSuggester: Send + Sync {
    /// Suggest colors matching a text description
    async fn text_to_colors(&self, prompt: &str) -> Vec<String>;

    /// Extract dominant colors from a base64 image (data URL header allowed)
    async fn image_to_colors(&self, base64_image: &str) -> Vec<String>;
}

/// Gemini `generateContent` client
pub struct GeminiClient {
    http: reqwest::Client,
    api_key: Option<String>,
    config: AiConfig,
    parser: ResponseParser,
}

impl GeminiClient {
    pub fn new(config: AiConfig, api_key: Option<String>) -> Result<Self, AiError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;
        let parser = ResponseParser::new()?;

        Ok(Self {
            http,
            api_key: api_key.filter(|k| !k.trim().is_empty()),
            config,
            parser,
        })
    }

    /// Create a client keyed from `GEMINI_API_KEY`, falling back to `API_KEY`
    pub fn from_env(config: AiConfig) -> Result<Self, AiError> {
        let api_key = ["GEMINI_API_KEY", "API_KEY"]
            .iter()
            .filter_map(|name| std::env::var(name).ok())
            .find(|k| !k.trim().is_empty());
        Self::new(config, api_key)
    }

    pub fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }

    /// Text suggestion with errors surfaced
    pub async fn try_text_to_colors(&self, prompt: &str) -> Result<Vec<String>, AiError> {
        let body = json!({
            "contents": [{
                "parts": [{ "text": format!("{TEXT_PROMPT_PREFIX}\"{prompt}\"{TEXT_PROMPT_SUFFIX}") }]
            }],
            "generationConfig": {
                "responseMimeType": "application/json",
                "responseSchema": { "type": "ARRAY", "items": { "type": "STRING" } }
            }
        });
        self.generate(&self.config.text_model, &body).await
    }

    /// Image extraction with errors surfaced
    pub async fn try_image_to_colors(&self, base64_image: &str) -> Result<Vec<String>, AiError> {
        let (mime_type, data) = self.parser.split_data_url(base64_image.trim());
        let body = json!({
            "contents": [{
                "parts": [
                    { "inlineData": { "mimeType": mime_type, "data": data } },
                    { "text": IMAGE_PROMPT }
                ]
            }]
        });
        self.generate(&self.config.image_model, &body).await
    }

    async fn generate(&self, model: &str, body: &Value) -> Result<Vec<String>, AiError> {
        let api_key = self.api_key.as_deref().ok_or(AiError::MissingApiKey)?;
        let url = format!(
            "{}/v1beta/models/{model}:generateContent",
            self.config.endpoint.trim_end_matches('/')
        );

        tracing::debug!(%model, "Requesting color suggestions");
        let response = self
            .http
            .post(&url)
            .query(&[("key", api_key)])
            .json(body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(AiError::Status(status.as_u16()));
        }

        let response: GenerateResponse = response.json().await?;
        let text = response.text();
        self.parser.color_list(&text, self.config.color_limit())
    }
}

#[async_trait]
impl ColorSuggester for GeminiClient {
    async fn text_to_colors(&self, prompt: &str) -> Vec<String> {
        match self.try_text_to_colors(prompt).await {
            Ok(colors) => {
                tracing::info!(colors = colors.len(), "Text suggestion received");
                colors
            }
            Err(AiError::MissingApiKey) => {
                tracing::warn!("No API key configured, skipping text suggestion");
                Vec::new()
            }
            Err(e) => {
                tracing::error!(%e, "Text suggestion failed");
                Vec::new()
            }
        }
    }

    async fn image_to_colors(&self, base64_image: &str) -> Vec<String> {
        match self.try_image_to_colors(base64_image).await {
            Ok(colors) => {
                tracing::info!(colors = colors.len(), "Image extraction received");
                colors
            }
            Err(AiError::MissingApiKey) => {
                tracing::warn!("No API key configured, skipping image extraction");
                Vec::new()
            }
            Err(e) => {
                tracing::error!(%e, "Image extraction failed");
                Vec::new()
            }
        }
    }
}

#[derive(Debug, Default, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Default, Deserialize)]
struct Candidate {
    #[serde(default)]
    content: Content,
}

#[derive(Debug, Default, Deserialize)]
struct Content {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Default, Deserialize)]
struct Part {
    #[serde(default)]
    text: Option<String>,
}

impl GenerateResponse {
    /// Concatenated text of the first candidate
    fn text(&self) -> String {
        self.candidates
            .first()
            .map(|c| {
                c.content
                    .parts
                    .iter()
                    .filter_map(|p| p.text.as_deref())
                    .collect::<String>()
            })
            .unwrap_or_default()
    }
}

/// Cleans model output into a list of strings
struct ResponseParser {
    data_url: Regex,
    fence: Regex,
    array: Regex,
}

impl ResponseParser {
    fn new() -> Result<Self, regex::Error> {
        Ok(Self {
            data_url: Regex::new(r"^data:image/(png|jpeg|jpg|webp);base64,")?,
            fence: Regex::new(r"```(?:json)?")?,
            array: Regex::new(r"(?s)\[.*\]")?,
        })
    }

    /// Split an optional data URL header off, returning (mime type, payload)
    fn split_data_url<'a>(&self, image: &'a str) -> (&'static str, &'a str) {
        match self.data_url.captures(image) {
            Some(caps) => {
                let mime = match caps.get(1).map(|m| m.as_str()) {
                    Some("jpeg" | "jpg") => "image/jpeg",
                    Some("webp") => "image/webp",
                    _ => "image/png",
                };
                let header_len = caps.get(0).map_or(0, |m| m.end());
                (mime, &image[header_len..])
            }
            None => ("image/png", image),
        }
    }

    /// Extract the string items of the first JSON array in `text`
    fn color_list(&self, text: &str, limit: usize) -> Result<Vec<String>, AiError> {
        let cleaned = self.fence.replace_all(text, "");
        let cleaned = cleaned.trim();
        if cleaned.is_empty() {
            return Ok(Vec::new());
        }

        let candidate = self.array.find(cleaned).map_or(cleaned, |m| m.as_str());
        let value: Value = serde_json::from_str(candidate)?;
        let items = value
            .as_array()
            .ok_or_else(|| AiError::NotAnArray(candidate.chars().take(80).collect()))?;

        Ok(items
            .iter()
            .filter_map(Value::as_str)
            .map(str::to_string)
            .take(limit)
            .collect())
    }
}
