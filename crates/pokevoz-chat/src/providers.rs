//! Generation provider implementations.

use std::time::Duration;

use async_trait::async_trait;
use pokevoz_core::{Error, Result};
use reqwest::Client;
use tracing::{debug, error};

use crate::config::GenerationConfig;
use crate::types::{ApiErrorBody, GenerateRequest, GenerateResponse};

/// Turns a prompt into generated text.
#[async_trait]
pub trait Generator: Send + Sync {
    /// Model identifier, for logs and status.
    fn model(&self) -> &str;

    async fn generate(&self, prompt: &str) -> Result<String>;
}

/// Google Gemini `models/{model}:generateContent`.
#[derive(Debug, Clone)]
pub struct GeminiClient {
    client: Client,
    api_key: String,
    model: String,
    api_base: String,
    temperature: f64,
    max_output_tokens: usize,
}

impl GeminiClient {
    /// Build a client from config. Fails when no API key is configured.
    pub fn from_config(config: &GenerationConfig, timeout: Duration) -> Result<Self> {
        let api_key = config
            .api_key
            .clone()
            .ok_or_else(|| Error::Config("GEMINI_API_KEY is not set".into()))?;
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| Error::Http(e.to_string()))?;

        Ok(Self {
            client,
            api_key,
            model: config.model.clone(),
            api_base: config.api_base.clone(),
            temperature: config.temperature,
            max_output_tokens: config.max_output_tokens,
        })
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.api_base, self.model
        )
    }
}

#[async_trait]
impl Generator for GeminiClient {
    fn model(&self) -> &str {
        &self.model
    }

    async fn generate(&self, prompt: &str) -> Result<String> {
        let url = self.endpoint();
        let body = GenerateRequest::user_prompt(prompt, self.temperature, self.max_output_tokens);

        debug!("Generating with {} ({} prompt chars)", self.model, prompt.len());

        let response = self
            .client
            .post(&url)
            .header("x-goog-api-key", &self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| Error::Upstream(format!("generation request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let text = response.text().await.unwrap_or_default();
            let detail = serde_json::from_str::<ApiErrorBody>(&text)
                .map(|b| format!("{} {}", b.error.status, b.error.message))
                .unwrap_or(text);
            error!("Gemini API error {}: {}", status, detail);
            return Err(Error::Upstream(format!("generation API error {}: {}", status, detail)));
        }

        let parsed: GenerateResponse = response
            .json()
            .await
            .map_err(|e| Error::Upstream(format!("generation API sent invalid JSON: {}", e)))?;

        let text = parsed.text();
        if text.trim().is_empty() {
            let reason = parsed
                .candidates
                .first()
                .and_then(|c| c.finish_reason.clone())
                .unwrap_or_else(|| "no candidates".into());
            return Err(Error::Upstream(format!("generation returned no text ({})", reason)));
        }

        Ok(text)
    }
}
