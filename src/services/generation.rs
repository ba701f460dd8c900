// src/services/generation.rs
//! Text-generation capability for content-assist features
//!
//! The app asks for generated text (bios, captions, job descriptions) with a
//! prompt and a model identifier. Callers never surface the raw error; they
//! show `GenerationError::retry_message()` and let the user try again.

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use serde_json::json;
use std::env;
use tracing::{debug, error, warn};

#[derive(Debug, thiserror::Error)]
pub enum GenerationError {
    #[error("API key not configured")]
    NotConfigured,

    #[error("API request failed: {0}")]
    RequestFailed(String),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

impl GenerationError {
    /// The generic retryable message shown to the user for any failure
    pub fn retry_message(&self) -> &'static str {
        "Something went wrong generating text. Please try again."
    }
}

/// Generates text from a natural-language prompt
#[async_trait]
pub trait TextGenerator {
    async fn generate(&self, prompt: &str, model: &str) -> Result<String, GenerationError>;
}

/// OpenAI-compatible chat-completions client
pub struct OpenAiGenerator {
    client: Client,
    api_key: String,
    base_url: String,
}

#[derive(Deserialize)]
struct ChatCompletionResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ChatMessage,
}

#[derive(Deserialize)]
struct ChatMessage {
    content: String,
}

impl OpenAiGenerator {
    pub fn new(api_key: impl Into<String>, base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            api_key: api_key.into(),
            base_url: base_url.into(),
        }
    }

    /// Configure from `BOOKME_OPENAI_API_KEY` / `BOOKME_OPENAI_BASE_URL`
    pub fn from_env() -> Result<Self, GenerationError> {
        let api_key = env::var("BOOKME_OPENAI_API_KEY").map_err(|_| {
            warn!("BOOKME_OPENAI_API_KEY not set, text generation unavailable");
            GenerationError::NotConfigured
        })?;
        let base_url = env::var("BOOKME_OPENAI_BASE_URL")
            .unwrap_or_else(|_| "https://api.openai.com/v1".to_string());
        Ok(Self::new(api_key, base_url))
    }
}

#[async_trait]
impl TextGenerator for OpenAiGenerator {
    async fn generate(&self, prompt: &str, model: &str) -> Result<String, GenerationError> {
        debug!(model = %model, prompt_len = prompt.len(), "Requesting text generation");

        let url = format!("{}/chat/completions", self.base_url);
        let body = json!({
            "model": model,
            "messages": [{ "role": "user", "content": prompt }],
        });

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                error!(error = %e, "Text generation request failed");
                GenerationError::RequestFailed(e.to_string())
            })?;

        let status = response.status();
        if !status.is_success() {
            let detail = response.text().await.unwrap_or_default();
            error!(http_status = %status, "Text generation returned error status");
            return Err(GenerationError::RequestFailed(format!(
                "{}: {}",
                status, detail
            )));
        }

        let completion: ChatCompletionResponse = response.json().await.map_err(|e| {
            error!(error = %e, "Failed to parse text generation response");
            GenerationError::InvalidResponse(e.to_string())
        })?;

        let text = completion
            .choices
            .into_iter()
            .next()
            .map(|c| c.message.content)
            .ok_or_else(|| GenerationError::InvalidResponse("no choices returned".to_string()))?;

        debug!(generated_len = text.len(), "Text generation successful");
        Ok(text)
    }
}

/// Canned generator for tests and the offline demo
#[derive(Debug, Clone)]
pub struct CannedGenerator {
    text: String,
}

impl CannedGenerator {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

#[async_trait]
impl TextGenerator for CannedGenerator {
    async fn generate(&self, _prompt: &str, _model: &str) -> Result<String, GenerationError> {
        Ok(self.text.clone())
    }
}
