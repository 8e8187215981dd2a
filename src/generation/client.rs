//! HTTP client for the external text-completion service

use crate::config::GenerationConfig;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;

/// Failure modes of the upstream completion service. Timeouts surface as
/// transport errors from the underlying client.
#[derive(Error, Debug)]
pub enum GenerationError {
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("service returned HTTP {code}: {body}")]
    Status { code: u16, body: String },

    #[error("service returned an empty body")]
    EmptyBody,
}

/// Boundary to the generative completion service. Implementations own their
/// timeout policy; callers surface every failure uniformly and never retry.
#[allow(async_fn_in_trait)]
pub trait TextGenerator {
    async fn generate(&self, prompt: &str) -> std::result::Result<String, GenerationError>;
}

/// Client for an Ollama-compatible `/api/generate` endpoint
pub struct OllamaClient {
    http: reqwest::Client,
    base_url: String,
    model: String,
    temperature: f32,
    top_p: f32,
}

#[derive(Serialize)]
struct GenerateRequest<'a> {
    model: &'a str,
    prompt: &'a str,
    stream: bool,
    options: GenerateOptions,
}

#[derive(Serialize)]
struct GenerateOptions {
    temperature: f32,
    top_p: f32,
}

#[derive(Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    response: String,
}

impl OllamaClient {
    pub fn new(config: &GenerationConfig) -> crate::error::Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(GenerationError::Transport)?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            model: config.model.clone(),
            temperature: config.temperature,
            top_p: config.top_p,
        })
    }

    pub fn model(&self) -> &str {
        &self.model
    }
}

impl TextGenerator for OllamaClient {
    async fn generate(&self, prompt: &str) -> std::result::Result<String, GenerationError> {
        let request = GenerateRequest {
            model: &self.model,
            prompt,
            stream: false,
            options: GenerateOptions {
                temperature: self.temperature,
                top_p: self.top_p,
            },
        };

        let response = self
            .http
            .post(format!("{}/api/generate", self.base_url))
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(GenerationError::Status {
                code: status.as_u16(),
                body,
            });
        }

        let body: GenerateResponse = response.json().await?;
        if body.response.trim().is_empty() {
            return Err(GenerationError::EmptyBody);
        }

        Ok(body.response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GenerationConfig;

    #[test]
    fn test_client_creation_from_config() {
        let config = GenerationConfig::default();
        let client = OllamaClient::new(&config).unwrap();

        assert_eq!(client.model(), config.model);
        assert_eq!(client.base_url, "http://localhost:11434");
    }

    #[test]
    fn test_trailing_slash_stripped_from_base_url() {
        let config = GenerationConfig {
            base_url: "http://gpu-box:11434/".to_string(),
            ..GenerationConfig::default()
        };
        let client = OllamaClient::new(&config).unwrap();

        assert_eq!(client.base_url, "http://gpu-box:11434");
    }

    #[test]
    fn test_response_body_defaults_to_empty() {
        // A success response without the `response` field counts as empty
        let body: GenerateResponse = serde_json::from_str("{}").unwrap();
        assert!(body.response.is_empty());
    }

    #[test]
    fn test_error_display() {
        let err = GenerationError::Status {
            code: 503,
            body: "model not loaded".to_string(),
        };
        assert_eq!(err.to_string(), "service returned HTTP 503: model not loaded");
        assert_eq!(GenerationError::EmptyBody.to_string(), "service returned an empty body");
    }
}
