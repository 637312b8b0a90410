//! Google Gemini `generateContent` client.
//!
//! Thin HTTP wrapper for `/models/{model}:generateContent`. The response is
//! returned as raw JSON; pure helpers (`request_url`, `build_request`,
//! `parse_response`) are split out for testability.

use std::time::Duration;

use serde::Serialize;
use serde_json::Value;

use super::config::{LlmConfig, LlmTimeouts};
use super::types::{LlmError, LlmGenerate};

// =============================================================================
// CLIENT
// =============================================================================

pub struct GeminiClient {
    http: reqwest::Client,
    api_key: String,
    base_url: String,
    model: String,
}

impl GeminiClient {
    /// Build a client from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if the API key is missing, a value fails to parse,
    /// or the HTTP client fails to build.
    pub fn from_env() -> Result<Self, LlmError> {
        Self::from_config(LlmConfig::from_env()?)
    }

    /// Build a client from a parsed typed config.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client fails to build.
    pub fn from_config(config: LlmConfig) -> Result<Self, LlmError> {
        Self::new(config.api_key, config.base_url, config.model, config.timeouts)
    }

    /// Build a client. Timeouts are only applied when configured.
    ///
    /// # Errors
    ///
    /// Returns [`LlmError::HttpClientBuild`] if the TLS backend fails to
    /// initialize.
    pub fn new(api_key: String, base_url: String, model: String, timeouts: LlmTimeouts) -> Result<Self, LlmError> {
        let mut builder = reqwest::Client::builder();
        if let Some(secs) = timeouts.request_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        if let Some(secs) = timeouts.connect_secs {
            builder = builder.connect_timeout(Duration::from_secs(secs));
        }
        let http = builder
            .build()
            .map_err(|e| LlmError::HttpClientBuild(e.to_string()))?;
        Ok(Self { http, api_key, base_url, model })
    }

    async fn generate_content(&self, prompt: &str) -> Result<Value, LlmError> {
        let url = request_url(&self.base_url, &self.model);
        let body = build_request(prompt);

        let response = self
            .http
            .post(url)
            .header("x-goog-api-key", &self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| LlmError::ApiRequest(e.to_string()))?;

        let status = response.status().as_u16();
        let text = response
            .text()
            .await
            .map_err(|e| LlmError::ApiRequest(e.to_string()))?;

        if status != 200 {
            return Err(LlmError::ApiResponse { status, body: text });
        }

        parse_response(&text)
    }
}

#[async_trait::async_trait]
impl LlmGenerate for GeminiClient {
    fn model(&self) -> &str {
        &self.model
    }

    async fn generate(&self, prompt: &str) -> Result<Value, LlmError> {
        self.generate_content(prompt).await
    }
}

// =============================================================================
// WIRE TYPES
// =============================================================================

#[derive(Serialize)]
struct ApiRequest<'a> {
    contents: [ApiContent<'a>; 1],
}

#[derive(Serialize)]
struct ApiContent<'a> {
    role: &'static str,
    parts: [ApiPart<'a>; 1],
}

#[derive(Serialize)]
struct ApiPart<'a> {
    text: &'a str,
}

fn request_url(base_url: &str, model: &str) -> String {
    format!("{base_url}/models/{model}:generateContent")
}

fn build_request(prompt: &str) -> ApiRequest<'_> {
    ApiRequest { contents: [ApiContent { role: "user", parts: [ApiPart { text: prompt }] }] }
}

// =============================================================================
// PARSING
// =============================================================================

fn parse_response(body: &str) -> Result<Value, LlmError> {
    serde_json::from_str(body).map_err(|e| LlmError::ApiParse(e.to_string()))
}

#[cfg(test)]
#[path = "gemini_test.rs"]
mod tests;
